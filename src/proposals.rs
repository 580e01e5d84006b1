multiversx_sc::imports!();

use crate::errors::*;
use crate::types::{Action, Proposal};
use crate::{events, membership, storage, VOTING_PERIOD};

#[multiversx_sc::module]
pub trait ProposalModule:
    storage::StorageModule + events::EventsModule + membership::MembershipModule
{
    // ========================================================
    // ENDPOINT: propose
    // Four parallel arrays, one entry per action. Everything
    // except tallies and the executed flag is frozen here.
    // ========================================================

    #[endpoint(propose)]
    fn propose(
        &self,
        targets: ManagedVec<ManagedAddress>,
        values: ManagedVec<BigUint>,
        selectors: ManagedVec<ManagedBuffer>,
        payloads: ManagedVec<ManagedBuffer>,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        require!(self.is_active_member(&caller), ERR_NOT_A_MEMBER);

        let action_count = targets.len();
        require!(
            action_count > 0
                && values.len() == action_count
                && selectors.len() == action_count
                && payloads.len() == action_count,
            ERR_INVALID_PROPOSAL_LENGTH
        );

        let proposal_id = self.proposal_count().get();
        let start_date = self.blockchain().get_block_timestamp();
        let end_date = start_date + VOTING_PERIOD;
        let member_snapshot = self.member_count().get();

        let mut actions = self.proposal_actions(proposal_id);
        for index in 0..action_count {
            actions.push(&Action {
                target: targets.get(index).clone_value(),
                value: values.get(index).clone_value(),
                selector: selectors.get(index).clone_value(),
                payload: payloads.get(index).clone_value(),
            });
        }

        let proposal = Proposal {
            id: proposal_id,
            proposer: caller.clone(),
            start_date,
            end_date,
            member_snapshot,
            for_votes: 0,
            against_votes: 0,
            executed: false,
        };
        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id + 1);

        self.proposal_created_event(proposal_id, &caller, end_date, member_snapshot);

        proposal_id
    }

    fn require_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        let mapper = self.proposals(proposal_id);
        require!(!mapper.is_empty(), ERR_PROPOSAL_NOT_FOUND);
        mapper.get()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.require_proposal(proposal_id)
    }

    #[view(getProposalActions)]
    fn get_proposal_actions(&self, proposal_id: u64) -> MultiValueEncoded<Action<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for action in self.proposal_actions(proposal_id).iter() {
            result.push(action);
        }
        result
    }

    #[view(getStartDate)]
    fn start_date(&self, proposal_id: u64) -> u64 {
        self.require_proposal(proposal_id).start_date
    }

    #[view(getEndDate)]
    fn end_date(&self, proposal_id: u64) -> u64 {
        self.require_proposal(proposal_id).end_date
    }

    #[view(getForVotes)]
    fn for_votes(&self, proposal_id: u64) -> u64 {
        self.require_proposal(proposal_id).for_votes
    }

    #[view(getAgainstVotes)]
    fn against_votes(&self, proposal_id: u64) -> u64 {
        self.require_proposal(proposal_id).against_votes
    }

    #[view(isExecuted)]
    fn is_executed(&self, proposal_id: u64) -> bool {
        self.require_proposal(proposal_id).executed
    }
}
