/// Call this from a `#[ctor::ctor]` function at the top of a test binary so that every test
/// gets log output controlled by the RUST_LOG env var.  Safe to call more than once; only the
/// first call installs the subscriber.
pub fn ctor_overall_init() {
    let result = tracing_subscriber::fmt()
        .with_target(true)
        .with_line_number(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    if result.is_ok() {
        tracing::debug!("test tracing subscriber installed");
    }
}
