use std::collections::BTreeSet;

use sidetree_core::{
    apply_json_patch, apply_patches, calculate_commitment, parse_operation, resolve,
    AnchoredOperation, DIDSuffix, DeactivateSignedData, Delta, Document, HashAlgorithm,
    JsonPatchOperation, Operation, OperationRequest, ParsedDID, Patch, PatchAction,
    ProtocolParameters, ProtocolVersioning, PublicKeyJwk, RecoverSignedData, SuffixData,
};

/// This will run once at load time (i.e. presumably before main function is called).
#[ctor::ctor]
fn overall_init() {
    test_util::ctor_overall_init();
}

const HASH_ALGORITHM: HashAlgorithm = HashAlgorithm::Sha2_256;

fn all_patch_actions() -> BTreeSet<PatchAction> {
    BTreeSet::from([
        PatchAction::AddPublicKeys,
        PatchAction::RemovePublicKeys,
        PatchAction::AddServices,
        PatchAction::RemoveServices,
        PatchAction::IetfJsonPatch,
        PatchAction::Replace,
    ])
}

fn test_protocol() -> ProtocolParameters {
    ProtocolParameters {
        genesis_time: 0,
        multihash_algorithm: HASH_ALGORITHM,
        max_operation_size: 4096,
        max_operations_per_batch: 10,
        max_batch_size_bytes: 40960,
        supported_patch_action_v: all_patch_actions(),
    }
}

fn test_versioning() -> ProtocolVersioning {
    ProtocolVersioning::new(vec![test_protocol()]).expect("pass")
}

fn generate_key() -> (ed25519_dalek::SigningKey, PublicKeyJwk) {
    let signing_key = ed25519_dalek::SigningKey::generate(&mut rand::rngs::OsRng);
    let public_key_jwk = PublicKeyJwk::from(&signing_key.verifying_key());
    (signing_key, public_key_jwk)
}

fn commitment_value(public_key: &PublicKeyJwk) -> String {
    calculate_commitment(public_key, HASH_ALGORITHM)
        .expect("pass")
        .value
}

fn add_public_key_patch(key_id: &str) -> Patch {
    Patch::AddPublicKeys {
        public_key_v: vec![serde_json::json!({
            "id": key_id,
            "type": "JsonWebKey2020",
            "purposes": ["authentication"],
        })],
    }
}

fn add_service_patch(service_id: &str) -> Patch {
    Patch::AddServices {
        service_v: vec![serde_json::json!({
            "id": service_id,
            "type": "LinkedDomains",
            "serviceEndpoint": "https://service.example.com",
        })],
    }
}

fn operation_buffer(request: &OperationRequest) -> Vec<u8> {
    serde_json_canonicalizer::to_vec(request).expect("pass")
}

fn create_operation(
    update_key: &PublicKeyJwk,
    recovery_key: &PublicKeyJwk,
    patch_v: Vec<Patch>,
) -> Operation {
    let delta = Delta {
        patch_v,
        update_commitment: commitment_value(update_key),
    };
    let suffix_data = SuffixData {
        delta_hash: delta.hash(HASH_ALGORITHM).expect("pass"),
        recovery_commitment: commitment_value(recovery_key),
    };
    let request = OperationRequest::Create { suffix_data, delta };
    parse_operation(operation_buffer(&request).as_slice(), &test_protocol()).expect("pass")
}

fn update_operation(
    did_suffix: &DIDSuffix,
    revealed_update_key: &PublicKeyJwk,
    next_update_key: &PublicKeyJwk,
    patch_v: Vec<Patch>,
) -> Operation {
    let delta = Delta {
        patch_v,
        update_commitment: commitment_value(next_update_key),
    };
    let request = OperationRequest::Update {
        did_suffix: did_suffix.clone(),
        update_key: revealed_update_key.clone(),
        delta,
    };
    parse_operation(operation_buffer(&request).as_slice(), &test_protocol()).expect("pass")
}

fn recover_operation(
    did_suffix: &DIDSuffix,
    recovery_signing_key: &ed25519_dalek::SigningKey,
    revealed_recovery_key: &PublicKeyJwk,
    next_update_key: &PublicKeyJwk,
    next_recovery_key: &PublicKeyJwk,
    patch_v: Vec<Patch>,
) -> Operation {
    let delta = Delta {
        patch_v,
        update_commitment: commitment_value(next_update_key),
    };
    let signed_data = RecoverSignedData::new_signed(
        delta.hash(HASH_ALGORITHM).expect("pass"),
        commitment_value(next_recovery_key),
        recovery_signing_key,
    )
    .expect("pass");
    let request = OperationRequest::Recover {
        did_suffix: did_suffix.clone(),
        recovery_key: revealed_recovery_key.clone(),
        delta,
        signed_data,
    };
    parse_operation(operation_buffer(&request).as_slice(), &test_protocol()).expect("pass")
}

fn deactivate_operation(
    did_suffix: &DIDSuffix,
    recovery_signing_key: &ed25519_dalek::SigningKey,
    revealed_recovery_key: &PublicKeyJwk,
) -> Operation {
    let signed_data =
        DeactivateSignedData::new_signed(did_suffix.to_string(), recovery_signing_key)
            .expect("pass");
    let request = OperationRequest::Deactivate {
        did_suffix: did_suffix.clone(),
        recovery_key: revealed_recovery_key.clone(),
        signed_data,
    };
    parse_operation(operation_buffer(&request).as_slice(), &test_protocol()).expect("pass")
}

fn anchored(operation: &Operation, transaction_time: u64, transaction_number: u64) -> AnchoredOperation {
    AnchoredOperation::new(operation, transaction_time, transaction_number)
}

#[test]
fn test_create_and_resolve() {
    let (_update_signing_key, update_key) = generate_key();
    let (_recovery_signing_key, recovery_key) = generate_key();
    let create = create_operation(
        &update_key,
        &recovery_key,
        vec![add_public_key_patch("key-1")],
    );

    let model = resolve(
        &create.did_suffix,
        vec![anchored(&create, 1, 0)],
        &test_versioning(),
    )
    .expect("pass");

    assert!(model.published);
    assert!(!model.deactivated);
    assert_eq!(model.document.public_keys().len(), 1);
    assert_eq!(
        model.update_commitment_o.as_ref().expect("pass").value,
        commitment_value(&update_key)
    );
    assert_eq!(
        model.recovery_commitment_o.as_ref().expect("pass").value,
        commitment_value(&recovery_key)
    );
}

#[test]
fn test_resolution_is_deterministic_regardless_of_store_order() {
    let (_, update_key_0) = generate_key();
    let (_, update_key_1) = generate_key();
    let (_, update_key_2) = generate_key();
    let (_recovery_signing_key, recovery_key) = generate_key();

    let create = create_operation(
        &update_key_0,
        &recovery_key,
        vec![add_public_key_patch("key-1")],
    );
    let update_1 = update_operation(
        &create.did_suffix,
        &update_key_0,
        &update_key_1,
        vec![add_service_patch("service-1")],
    );
    let update_2 = update_operation(
        &create.did_suffix,
        &update_key_1,
        &update_key_2,
        vec![add_service_patch("service-2")],
    );

    let anchored_v = vec![
        anchored(&create, 1, 0),
        anchored(&update_1, 2, 0),
        anchored(&update_2, 3, 0),
    ];
    let mut shuffled_v = anchored_v.clone();
    shuffled_v.reverse();

    let versioning = test_versioning();
    let model_a = resolve(&create.did_suffix, anchored_v, &versioning).expect("pass");
    let model_b = resolve(&create.did_suffix, shuffled_v, &versioning).expect("pass");

    let document_a = model_a.document.serialize_canonically().expect("pass");
    let document_b = model_b.document.serialize_canonically().expect("pass");
    assert_eq!(document_a, document_b);
    assert_eq!(model_a.document.services().len(), 2);
    assert_eq!(
        model_a.update_commitment_o.expect("pass").value,
        model_b.update_commitment_o.expect("pass").value
    );
}

#[test]
fn test_commitment_is_single_use_regardless_of_arrival_order() {
    let (_, update_key_0) = generate_key();
    let (_, update_key_1) = generate_key();
    let (_, update_key_2) = generate_key();
    let (_recovery_signing_key, recovery_key) = generate_key();

    let create = create_operation(&update_key_0, &recovery_key, vec![]);
    // Both updates reveal the same initial update commitment.
    let update_a = update_operation(
        &create.did_suffix,
        &update_key_0,
        &update_key_1,
        vec![add_service_patch("service-a")],
    );
    let update_b = update_operation(
        &create.did_suffix,
        &update_key_0,
        &update_key_2,
        vec![add_service_patch("service-b")],
    );

    let versioning = test_versioning();

    // update_a anchored first: it wins, update_b is excluded.
    let model = resolve(
        &create.did_suffix,
        vec![
            anchored(&create, 1, 0),
            anchored(&update_a, 2, 0),
            anchored(&update_b, 3, 0),
        ],
        &versioning,
    )
    .expect("pass");
    assert!(model.document.entry_with_id("services", "service-a").is_some());
    assert!(model.document.entry_with_id("services", "service-b").is_none());

    // update_b anchored first: the outcome flips, demonstrating order-dependence but
    // single-use in both cases.
    let model = resolve(
        &create.did_suffix,
        vec![
            anchored(&create, 1, 0),
            anchored(&update_b, 2, 0),
            anchored(&update_a, 3, 0),
        ],
        &versioning,
    )
    .expect("pass");
    assert!(model.document.entry_with_id("services", "service-b").is_some());
    assert!(model.document.entry_with_id("services", "service-a").is_none());
}

#[test]
fn test_update_rejected_when_recommitting_to_revealed_value() {
    let (_, update_key_0) = generate_key();
    let (_recovery_signing_key, recovery_key) = generate_key();

    let create = create_operation(&update_key_0, &recovery_key, vec![]);
    // The update re-commits to the very commitment it reveals.
    let update = update_operation(
        &create.did_suffix,
        &update_key_0,
        &update_key_0,
        vec![add_service_patch("service-1")],
    );

    let model = resolve(
        &create.did_suffix,
        vec![anchored(&create, 1, 0), anchored(&update, 2, 0)],
        &test_versioning(),
    )
    .expect("pass");
    assert!(model.document.services().is_empty());
    assert_eq!(
        model.update_commitment_o.expect("pass").value,
        commitment_value(&update_key_0)
    );
}

#[test]
fn test_recovery_takes_precedence_over_prior_updates() {
    let (_, update_key_0) = generate_key();
    let (_, update_key_1) = generate_key();
    let (recovery_signing_key, recovery_key) = generate_key();
    let (_, next_update_key) = generate_key();
    let (_, next_recovery_key) = generate_key();

    let create = create_operation(
        &update_key_0,
        &recovery_key,
        vec![add_public_key_patch("key-1")],
    );
    let update = update_operation(
        &create.did_suffix,
        &update_key_0,
        &update_key_1,
        vec![add_service_patch("service-1")],
    );
    let recover = recover_operation(
        &create.did_suffix,
        &recovery_signing_key,
        &recovery_key,
        &next_update_key,
        &next_recovery_key,
        vec![add_public_key_patch("recovered-key")],
    );

    let model = resolve(
        &create.did_suffix,
        vec![
            anchored(&create, 1, 0),
            anchored(&update, 2, 0),
            anchored(&recover, 3, 0),
        ],
        &test_versioning(),
    )
    .expect("pass");

    // The recover rebuilt the document from scratch: the validly anchored update's patch
    // must not be visible.
    assert!(model.document.services().is_empty());
    assert!(model
        .document
        .entry_with_id("publicKeys", "recovered-key")
        .is_some());
    assert!(model.document.entry_with_id("publicKeys", "key-1").is_none());
    assert_eq!(
        model.update_commitment_o.expect("pass").value,
        commitment_value(&next_update_key)
    );
    assert_eq!(
        model.recovery_commitment_o.expect("pass").value,
        commitment_value(&next_recovery_key)
    );
}

#[test]
fn test_updates_chained_from_old_commitment_are_dead_after_recovery() {
    let (_, update_key_0) = generate_key();
    let (_, update_key_1) = generate_key();
    let (recovery_signing_key, recovery_key) = generate_key();
    let (_, next_update_key) = generate_key();
    let (_, next_recovery_key) = generate_key();

    let create = create_operation(&update_key_0, &recovery_key, vec![]);
    let recover = recover_operation(
        &create.did_suffix,
        &recovery_signing_key,
        &recovery_key,
        &next_update_key,
        &next_recovery_key,
        vec![],
    );
    // Chained from the pre-recovery update commitment, but anchored after the recovery.
    let stale_update = update_operation(
        &create.did_suffix,
        &update_key_0,
        &update_key_1,
        vec![add_service_patch("stale-service")],
    );

    let model = resolve(
        &create.did_suffix,
        vec![
            anchored(&create, 1, 0),
            anchored(&recover, 2, 0),
            anchored(&stale_update, 3, 0),
        ],
        &test_versioning(),
    )
    .expect("pass");
    assert!(model.document.services().is_empty());
}

#[test]
fn test_failing_patch_aborts_whole_delta() {
    let (_, update_key_0) = generate_key();
    let (_, update_key_1) = generate_key();
    let (_recovery_signing_key, recovery_key) = generate_key();

    let create = create_operation(
        &update_key_0,
        &recovery_key,
        vec![add_public_key_patch("key-1")],
    );
    // First patch would succeed, second fails: the whole delta must be rejected with no
    // partial application visible.
    let update = update_operation(
        &create.did_suffix,
        &update_key_0,
        &update_key_1,
        vec![
            add_public_key_patch("key-2"),
            Patch::IetfJsonPatch {
                operation_v: vec![JsonPatchOperation::Remove {
                    path: "/no/such/property".to_string(),
                }],
            },
        ],
    );

    let model = resolve(
        &create.did_suffix,
        vec![anchored(&create, 1, 0), anchored(&update, 2, 0)],
        &test_versioning(),
    )
    .expect("pass");

    assert_eq!(model.document.public_keys().len(), 1);
    assert!(model.document.entry_with_id("publicKeys", "key-2").is_none());
    // The rejected update did not consume the commitment either.
    assert_eq!(
        model.update_commitment_o.expect("pass").value,
        commitment_value(&update_key_0)
    );
}

#[test]
fn test_deactivate_is_terminal() {
    let (_, update_key_0) = generate_key();
    let (_, update_key_1) = generate_key();
    let (recovery_signing_key, recovery_key) = generate_key();

    let create = create_operation(
        &update_key_0,
        &recovery_key,
        vec![add_public_key_patch("key-1")],
    );
    let deactivate = deactivate_operation(&create.did_suffix, &recovery_signing_key, &recovery_key);
    let late_update = update_operation(
        &create.did_suffix,
        &update_key_0,
        &update_key_1,
        vec![add_service_patch("service-1")],
    );

    let model = resolve(
        &create.did_suffix,
        vec![
            anchored(&create, 1, 0),
            anchored(&deactivate, 2, 0),
            anchored(&late_update, 3, 0),
        ],
        &test_versioning(),
    )
    .expect("pass");

    assert!(model.deactivated);
    assert!(model.document.is_empty());
    assert!(model.update_commitment_o.is_none());
    assert!(model.recovery_commitment_o.is_none());
}

#[test]
fn test_oversized_operation_rejected_at_parse_time() {
    let (_, update_key) = generate_key();
    let (_, recovery_key) = generate_key();
    let create = create_operation(&update_key, &recovery_key, vec![]);

    let mut small_protocol = test_protocol();
    small_protocol.max_operation_size = 2;
    let err = parse_operation(create.operation_buffer.as_slice(), &small_protocol)
        .expect_err("oversized operation must be rejected");
    assert!(err
        .to_string()
        .contains("exceeds protocol max operation byte size"));
}

#[test]
fn test_oversized_anchored_operation_is_excluded_not_fatal() {
    let (_, update_key_0) = generate_key();
    let (_, update_key_1) = generate_key();
    let (_recovery_signing_key, recovery_key) = generate_key();

    let create = create_operation(&update_key_0, &recovery_key, vec![]);
    // Blow the update well past the small protocol limit with a large patch payload.
    let update = update_operation(
        &create.did_suffix,
        &update_key_0,
        &update_key_1,
        vec![Patch::AddServices {
            service_v: vec![serde_json::json!({
                "id": "bulky-service",
                "type": "LinkedDomains",
                "serviceEndpoint": "x".repeat(600),
            })],
        }],
    );

    let mut protocol = test_protocol();
    protocol.max_operation_size = update.operation_buffer.len() - 1;
    assert!(create.operation_buffer.len() <= protocol.max_operation_size);
    let versioning = ProtocolVersioning::new(vec![protocol]).expect("pass");

    let model = resolve(
        &create.did_suffix,
        vec![anchored(&create, 1, 0), anchored(&update, 2, 0)],
        &versioning,
    )
    .expect("pass");
    assert!(model.published);
    assert!(model.document.services().is_empty());
}

#[test]
fn test_unsupported_patch_action_rejected_at_parse_time() {
    let (_, update_key) = generate_key();
    let (_, recovery_key) = generate_key();
    let create = create_operation(&update_key, &recovery_key, vec![add_service_patch("s")]);

    let mut protocol = test_protocol();
    protocol.supported_patch_action_v =
        BTreeSet::from([PatchAction::AddPublicKeys, PatchAction::RemovePublicKeys]);
    let err = parse_operation(create.operation_buffer.as_slice(), &protocol)
        .expect_err("unsupported patch action must be rejected");
    assert!(err.to_string().contains("add-services"));
}

#[test]
fn test_unique_suffix_derivation_is_stable() {
    let (_, update_key) = generate_key();
    let (_, recovery_key) = generate_key();

    let create_a = create_operation(&update_key, &recovery_key, vec![]);
    let create_b = create_operation(&update_key, &recovery_key, vec![]);
    assert_eq!(create_a.did_suffix, create_b.did_suffix);

    let (_, other_recovery_key) = generate_key();
    let create_c = create_operation(&update_key, &other_recovery_key, vec![]);
    assert_ne!(create_a.did_suffix, create_c.did_suffix);
}

#[test]
fn test_protocol_version_lookup_by_anchor_time() {
    let mut version_1 = test_protocol();
    version_1.genesis_time = 10;
    let mut version_2 = test_protocol();
    version_2.genesis_time = 100;
    version_2.max_operation_size = 128;
    let versioning = ProtocolVersioning::new(vec![version_1, version_2]).expect("pass");

    assert!(versioning.current(9).is_err());
    assert_eq!(versioning.current(10).expect("pass").genesis_time, 10);
    assert_eq!(versioning.current(99).expect("pass").genesis_time, 10);
    assert_eq!(versioning.current(100).expect("pass").genesis_time, 100);
    assert_eq!(versioning.current(u64::MAX).expect("pass").genesis_time, 100);
    assert_eq!(versioning.latest().expect("pass").genesis_time, 100);
}

#[test]
fn test_history_replays_under_the_version_active_at_its_anchor_time() {
    let (_, update_key) = generate_key();
    let (_, recovery_key) = generate_key();
    let create = create_operation(&update_key, &recovery_key, vec![add_public_key_patch("k")]);

    // The create is anchored under version 1 and exceeds version 2's operation size limit.
    let mut version_1 = test_protocol();
    version_1.genesis_time = 0;
    let mut version_2 = test_protocol();
    version_2.genesis_time = 100;
    version_2.max_operation_size = create.operation_buffer.len() - 1;
    let versioning = ProtocolVersioning::new(vec![version_1, version_2]).expect("pass");

    let model = resolve(
        &create.did_suffix,
        vec![anchored(&create, 50, 0)],
        &versioning,
    )
    .expect("pass");
    assert!(model.published);
}

#[test]
fn test_resolve_without_create_is_not_found() {
    let (_, update_key_0) = generate_key();
    let (_, update_key_1) = generate_key();
    let (_, recovery_key) = generate_key();
    let create = create_operation(&update_key_0, &recovery_key, vec![]);
    let update = update_operation(&create.did_suffix, &update_key_0, &update_key_1, vec![]);

    // Only the update is anchored; there is nothing to resolve.
    let err = resolve(
        &create.did_suffix,
        vec![anchored(&update, 1, 0)],
        &test_versioning(),
    )
    .expect_err("resolution without a create must fail");
    assert!(matches!(err, sidetree_core::Error::NotFound(_)));
}

#[test]
fn test_duplicate_create_is_ignored() {
    let (_, update_key) = generate_key();
    let (_, recovery_key) = generate_key();
    let create = create_operation(&update_key, &recovery_key, vec![add_public_key_patch("k")]);

    let model = resolve(
        &create.did_suffix,
        vec![anchored(&create, 1, 0), anchored(&create, 2, 0)],
        &test_versioning(),
    )
    .expect("pass");
    assert_eq!(model.document.public_keys().len(), 1);
}

#[test]
fn test_patch_upsert_replaces_in_place_and_remove_is_noop_for_unknown_ids() {
    let document = Document::new();
    let document = apply_patches(
        &document,
        &[
            Patch::AddPublicKeys {
                public_key_v: vec![
                    serde_json::json!({"id": "key-1", "type": "a"}),
                    serde_json::json!({"id": "key-2", "type": "b"}),
                ],
            },
            // Upsert of key-1 must replace in place, keeping array position 0.
            Patch::AddPublicKeys {
                public_key_v: vec![serde_json::json!({"id": "key-1", "type": "c"})],
            },
            // Removing an id that does not exist is a no-op.
            Patch::RemovePublicKeys {
                id_v: vec!["no-such-key".to_string()],
            },
        ],
    )
    .expect("pass");

    let public_key_v = document.public_keys();
    assert_eq!(public_key_v.len(), 2);
    assert_eq!(public_key_v[0]["id"], "key-1");
    assert_eq!(public_key_v[0]["type"], "c");
    assert_eq!(public_key_v[1]["id"], "key-2");
}

#[test]
fn test_replace_patch_discards_prior_document() {
    let document = apply_patches(
        &Document::new(),
        &[add_public_key_patch("key-1"), add_service_patch("service-1")],
    )
    .expect("pass");
    let document = apply_patches(
        &document,
        &[Patch::Replace {
            document: serde_json::json!({"publicKeys": [{"id": "only-key"}]}),
        }],
    )
    .expect("pass");
    assert_eq!(document.public_keys().len(), 1);
    assert!(document.services().is_empty());
}

#[test]
fn test_json_patch_operations() {
    let mut document = serde_json::json!({
        "a": {"b": [1, 2, 3]},
        "c": "value",
    });
    apply_json_patch(
        &mut document,
        &[
            JsonPatchOperation::Add {
                path: "/a/b/-".to_string(),
                value: serde_json::json!(4),
            },
            JsonPatchOperation::Replace {
                path: "/c".to_string(),
                value: serde_json::json!("replaced"),
            },
            JsonPatchOperation::Copy {
                from: "/c".to_string(),
                path: "/copied".to_string(),
            },
            JsonPatchOperation::Move {
                from: "/a/b/0".to_string(),
                path: "/moved".to_string(),
            },
            JsonPatchOperation::Test {
                path: "/moved".to_string(),
                value: serde_json::json!(1),
            },
            JsonPatchOperation::Remove {
                path: "/a".to_string(),
            },
        ],
    )
    .expect("pass");
    assert_eq!(
        document,
        serde_json::json!({"c": "replaced", "copied": "replaced", "moved": 1})
    );
}

#[test]
fn test_json_patch_failures() {
    let mut document = serde_json::json!({"a": 1});

    let err = apply_json_patch(
        &mut document,
        &[JsonPatchOperation::Remove {
            path: "/missing".to_string(),
        }],
    )
    .expect_err("removing a missing path must fail");
    assert!(matches!(err, sidetree_core::Error::Patch(_)));

    let err = apply_json_patch(
        &mut document,
        &[JsonPatchOperation::Test {
            path: "/a".to_string(),
            value: serde_json::json!(2),
        }],
    )
    .expect_err("failing test assertion must fail");
    assert!(matches!(err, sidetree_core::Error::Patch(_)));

    let err = apply_json_patch(
        &mut document,
        &[JsonPatchOperation::Replace {
            path: "/missing".to_string(),
            value: serde_json::json!(1),
        }],
    )
    .expect_err("replacing a missing path must fail");
    assert!(matches!(err, sidetree_core::Error::Patch(_)));
}

#[test]
fn test_parsed_did_roundtrip() {
    let namespace = "did:sidetree";
    let alias_v = vec!["did:domain.com".to_string()];

    let parsed = ParsedDID::parse("did:sidetree:abc123", namespace, alias_v.as_slice())
        .expect("pass");
    assert_eq!(parsed.namespace, "did:sidetree");
    assert_eq!(parsed.did_suffix.as_str(), "abc123");
    assert!(!parsed.is_long_form());
    assert_eq!(parsed.short_form(), "did:sidetree:abc123");

    let parsed = ParsedDID::parse("did:domain.com:abc123", namespace, alias_v.as_slice())
        .expect("pass");
    assert_eq!(parsed.namespace, "did:domain.com");
    assert_eq!(parsed.short_form(), "did:domain.com:abc123");

    let parsed = ParsedDID::parse(
        "did:sidetree:abc123:eyJzdWZmaXhEYXRhIjp7fX0",
        namespace,
        alias_v.as_slice(),
    )
    .expect("pass");
    assert!(parsed.is_long_form());
    assert_eq!(
        parsed.initial_state_o.as_deref(),
        Some("eyJzdWZmaXhEYXRhIjp7fX0")
    );
}

#[test]
fn test_parsed_did_errors() {
    let namespace = "did:sidetree";

    let err = ParsedDID::parse("doc:invalid", namespace, &[]).expect_err("pass");
    assert!(err
        .to_string()
        .contains("must start with configured namespace"));

    let err = ParsedDID::parse("did:sidetree:", namespace, &[]).expect_err("pass");
    assert!(err.to_string().contains("did suffix is empty"));

    let err =
        ParsedDID::parse("did:sidetree:abc:def:ghi", namespace, &[]).expect_err("pass");
    assert!(err.to_string().contains("extra segments"));
}

#[test]
fn test_anchored_operation_roundtrips_through_serde() {
    let (_, update_key) = generate_key();
    let (_, recovery_key) = generate_key();
    let create = create_operation(&update_key, &recovery_key, vec![add_public_key_patch("k")]);
    let anchored_operation = anchored(&create, 7, 3);

    let serialized = serde_json::to_string(&anchored_operation).expect("pass");
    let deserialized: AnchoredOperation = serde_json::from_str(serialized.as_str()).expect("pass");
    assert_eq!(anchored_operation, deserialized);
}
