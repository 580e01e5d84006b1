multiversx_sc::imports!();

use multiversx_sc::codec::TopDecode;

use crate::errors::*;
use crate::marketplace_proxy::MarketplaceProxy;
use crate::types::{Action, Proposal, ProposalStatus};
use crate::{
    events, membership, proposals, storage, BPS_DENOMINATOR, BUY_NFT_SELECTOR, MAX_SPEND_BPS,
    QUORUM_BPS,
};

#[multiversx_sc::module]
pub trait ExecutionModule:
    storage::StorageModule
    + events::EventsModule
    + membership::MembershipModule
    + proposals::ProposalModule
{
    // ========================================================
    // ENDPOINT: execute
    // Checks, then commit `executed`, then external calls. A
    // failing action fails the transaction and the VM rolls
    // back the flag together with every transfer already made.
    // ========================================================

    #[endpoint(execute)]
    fn execute(&self, proposal_id: u64) {
        let caller = self.blockchain().get_caller();
        let mut proposal = self.require_proposal(proposal_id);

        require!(!proposal.executed, ERR_ALREADY_EXECUTED);
        require!(self.has_passed(&proposal), ERR_EXECUTION_BLOCKED);

        // ── Guardrail: spend cap against the live treasury ──
        let total_requested = self.total_requested(proposal_id);
        require!(
            self.is_within_spend_cap(&total_requested),
            ERR_COST_CAP_EXCEEDED
        );

        // Re-entrant calls from an action target must see this.
        proposal.executed = true;
        self.proposals(proposal_id).set(&proposal);

        for (index, action) in self.proposal_actions(proposal_id).iter().enumerate() {
            self.dispatch_action(proposal_id, &action);
            self.action_dispatched_event(proposal_id, index, &action.target, &action.value);
        }

        self.proposal_executed_event(proposal_id, &caller, &total_requested);
    }

    // ========================================================
    // INTERNAL: outcome and spend cap
    // ========================================================

    /// ceil(snapshot * 25%)
    fn quorum_for(&self, member_snapshot: u64) -> u64 {
        (member_snapshot * QUORUM_BPS + BPS_DENOMINATOR - 1) / BPS_DENOMINATOR
    }

    fn has_passed(&self, proposal: &Proposal<Self::Api>) -> bool {
        let turnout = proposal.for_votes + proposal.against_votes;
        proposal.for_votes > proposal.against_votes
            && turnout >= self.quorum_for(proposal.member_snapshot)
    }

    fn total_requested(&self, proposal_id: u64) -> BigUint {
        let mut total = BigUint::zero();
        for action in self.proposal_actions(proposal_id).iter() {
            total += &action.value;
        }
        total
    }

    fn treasury_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    /// Inclusive: requesting exactly 25% of the treasury is allowed.
    fn is_within_spend_cap(&self, amount: &BigUint) -> bool {
        let balance = self.treasury_balance();
        amount * BPS_DENOMINATOR <= &balance * MAX_SPEND_BPS
    }

    // ========================================================
    // INTERNAL: action dispatch
    // ========================================================

    fn dispatch_action(&self, proposal_id: u64, action: &Action<Self::Api>) {
        if action.target == self.blockchain().get_sc_address() {
            self.dispatch_self_action(proposal_id, action);
            return;
        }

        if action.selector.is_empty() {
            require!(action.payload.is_empty(), ERR_ACTION_CALL_FAILED);
            self.tx().to(&action.target).egld(&action.value).transfer();
            return;
        }

        require!(
            self.blockchain().is_smart_contract(&action.target),
            ERR_ACTION_CALL_FAILED
        );

        let arguments = self.decode_arguments(&action.payload);
        let mut raw_arguments = ManagedArgBuffer::new();
        for argument in arguments.iter() {
            raw_arguments.push_arg_raw(argument.clone_value());
        }

        self.tx()
            .to(&action.target)
            .egld(&action.value)
            .raw_call(action.selector.clone())
            .arguments_raw(raw_arguments)
            .sync_call();
    }

    fn decode_arguments(
        &self,
        payload: &ManagedBuffer,
    ) -> ManagedVec<Self::Api, ManagedBuffer<Self::Api>> {
        if payload.is_empty() {
            return ManagedVec::new();
        }
        ManagedVec::top_decode(payload.clone())
            .unwrap_or_else(|_| sc_panic!(ERR_ACTION_CALL_FAILED))
    }

    /// Privileged actions run in-process instead of as a VM self-call.
    fn dispatch_self_action(&self, proposal_id: u64, action: &Action<Self::Api>) {
        require!(
            action.selector == ManagedBuffer::new_from_bytes(BUY_NFT_SELECTOR),
            ERR_ACTION_CALL_FAILED
        );

        let arguments = self.decode_arguments(&action.payload);
        require!(arguments.len() == 2, ERR_ACTION_CALL_FAILED);
        let collection = ManagedAddress::top_decode(arguments.get(0).clone_value())
            .unwrap_or_else(|_| sc_panic!(ERR_ACTION_CALL_FAILED));
        let item_id = u64::top_decode(arguments.get(1).clone_value())
            .unwrap_or_else(|_| sc_panic!(ERR_ACTION_CALL_FAILED));

        self.buy_nft(proposal_id, &collection, item_id, &action.value);
    }

    fn buy_nft(
        &self,
        proposal_id: u64,
        collection: &ManagedAddress,
        item_id: u64,
        allotted: &BigUint,
    ) {
        let marketplace = self.marketplace_address().get();

        let price: BigUint = self
            .tx()
            .to(&marketplace)
            .typed(MarketplaceProxy)
            .get_price(collection.clone(), item_id)
            .returns(ReturnsResult)
            .sync_call();
        require!(&price <= allotted, ERR_ACTION_CALL_FAILED);

        let bought: bool = self
            .tx()
            .to(&marketplace)
            .typed(MarketplaceProxy)
            .buy(collection.clone(), item_id)
            .egld(allotted)
            .returns(ReturnsResult)
            .sync_call();
        require!(bought, ERR_ACTION_CALL_FAILED);

        self.nft_purchased_event(proposal_id, collection, item_id, &price);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposalStatus)]
    fn get_proposal_status(&self, proposal_id: u64) -> ProposalStatus {
        let proposal = self.require_proposal(proposal_id);
        if proposal.executed {
            return ProposalStatus::Executed;
        }
        if self.has_passed(&proposal) {
            return ProposalStatus::Passed;
        }
        if self.blockchain().get_block_timestamp() < proposal.end_date {
            ProposalStatus::Open
        } else {
            ProposalStatus::Defeated
        }
    }

    #[view(getQuorum)]
    fn get_quorum(&self, proposal_id: u64) -> u64 {
        let proposal = self.require_proposal(proposal_id);
        self.quorum_for(proposal.member_snapshot)
    }

    #[view(getTotalRequested)]
    fn get_total_requested(&self, proposal_id: u64) -> BigUint {
        self.require_proposal(proposal_id);
        self.total_requested(proposal_id)
    }

    #[view(getTreasuryBalance)]
    fn get_treasury_balance(&self) -> BigUint {
        self.treasury_balance()
    }

    /// Largest total a proposal may request right now.
    #[view(getSpendLimit)]
    fn get_spend_limit(&self) -> BigUint {
        self.treasury_balance() * MAX_SPEND_BPS / BPS_DENOMINATOR
    }
}
