use crate::enums::ProofPolicy;
use crate::event::EventKind;
use crate::sequence::SequenceContext;
use crate::state::GameState;

/// Switches the guild's proof-of-completion policy, which governs whether
/// PARTIAL outcomes auto-close or wait for `CloseReturn` (spec.md section
/// 4.5.4, `SetProofPolicy`).
pub fn set_proof_policy(state: &mut GameState, policy: ProofPolicy, ctx: &mut SequenceContext) {
    state.guild.proof_policy = policy;
    ctx.emit(EventKind::ProofPolicySet { policy });
}
