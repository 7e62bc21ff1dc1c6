use std::collections::HashSet;

use crate::{Commitment, Document};

/// The replay accumulator for a single resolution: the document built so far, the live
/// commitments of the two authority chains, and the lifecycle flags.  Owned exclusively by the
/// operation processor during one resolution call and discarded after producing the result.
#[derive(Clone, Debug, Default)]
pub struct ResolutionModel {
    pub document: Document,
    pub update_commitment_o: Option<Commitment>,
    pub recovery_commitment_o: Option<Commitment>,
    /// True once at least one anchored operation (the create) has been applied.
    pub published: bool,
    /// Terminal: no operation is accepted after deactivation.
    pub deactivated: bool,
    /// Commitment values already revealed and consumed on the update chain.  Commitments are
    /// single-use: a reveal targeting a consumed value is rejected regardless of arrival order,
    /// even if a later delta re-commits to the same value.
    pub(crate) consumed_update_commitment_s: HashSet<String>,
    /// Commitment values already revealed and consumed on the recovery chain.
    pub(crate) consumed_recovery_commitment_s: HashSet<String>,
}

impl ResolutionModel {
    pub fn new() -> Self {
        Self::default()
    }
}
