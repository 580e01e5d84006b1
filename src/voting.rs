multiversx_sc::imports!();

use crate::errors::*;
use crate::types::{SignedVote, VoteDirection};
use crate::{events, membership, signature, storage};

#[multiversx_sc::module]
pub trait VotingModule:
    storage::StorageModule
    + events::EventsModule
    + membership::MembershipModule
    + signature::SignatureModule
{
    // ========================================================
    // ENDPOINT: vote
    // One member, one vote. No weighting by contribution.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, support: bool) {
        let voter = self.blockchain().get_caller();
        self.cast_vote(&voter, proposal_id, support, false);
    }

    // ========================================================
    // ENDPOINT: voteBySignature
    // Anyone may relay a signed vote; it counts for the signer.
    // ========================================================

    #[endpoint(voteBySignature)]
    fn vote_by_signature(&self, signed_vote: SignedVote<Self::Api>) {
        self.cast_signed_vote(&signed_vote);
    }

    // ========================================================
    // ENDPOINT: voteBulkBySignature
    // All-or-nothing: one rejected entry fails the whole batch
    // and no tally from the batch is kept.
    // ========================================================

    #[endpoint(voteBulkBySignature)]
    fn vote_bulk_by_signature(&self, signed_votes: MultiValueEncoded<SignedVote<Self::Api>>) {
        for signed_vote in signed_votes.into_iter() {
            self.cast_signed_vote(&signed_vote);
        }
    }

    // ========================================================
    // INTERNAL: single code path for direct and signed votes
    // ========================================================

    fn cast_signed_vote(&self, signed_vote: &SignedVote<Self::Api>) {
        let voter = self.verified_signer(signed_vote);
        self.cast_vote(&voter, signed_vote.proposal_id, signed_vote.support, true);
    }

    fn cast_vote(&self, voter: &ManagedAddress, proposal_id: u64, support: bool, by_signature: bool) {
        let proposal_mapper = self.proposals(proposal_id);
        require!(!proposal_mapper.is_empty(), ERR_VOTE_REJECTED);

        let mut proposal = proposal_mapper.get();
        require!(
            self.is_active_before(voter, proposal.start_date),
            ERR_VOTE_REJECTED
        );

        let now = self.blockchain().get_block_timestamp();
        require!(now < proposal.end_date, ERR_VOTE_REJECTED);

        let voted = self.has_voted_flag(proposal_id, voter);
        require!(!voted.get(), ERR_VOTE_REJECTED);

        if support {
            proposal.for_votes += 1;
        } else {
            proposal.against_votes += 1;
        }
        voted.set(true);
        self.vote_receipts(proposal_id, voter)
            .set(VoteDirection::from_support(support));
        proposal_mapper.set(&proposal);

        self.vote_event(proposal_id, voter, support, by_signature);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(hasVoted)]
    fn has_voted(&self, proposal_id: u64, voter: ManagedAddress) -> bool {
        self.has_voted_flag(proposal_id, &voter).get()
    }

    #[view(getVote)]
    fn get_vote(&self, proposal_id: u64, voter: ManagedAddress) -> OptionalValue<VoteDirection> {
        if self.has_voted_flag(proposal_id, &voter).get() {
            OptionalValue::Some(self.vote_receipts(proposal_id, &voter).get())
        } else {
            OptionalValue::None
        }
    }
}
