multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("memberJoined")]
    fn member_joined_event(
        &self,
        #[indexed] member: &ManagedAddress,
        #[indexed] joined_at: u64,
        fee: &BigUint,
    );

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] end_date: u64,
        member_snapshot: u64,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: bool,
        by_signature: bool,
    );

    #[event("actionDispatched")]
    fn action_dispatched_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] action_index: usize,
        #[indexed] target: &ManagedAddress,
        value: &BigUint,
    );

    #[event("nftPurchased")]
    fn nft_purchased_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] collection: &ManagedAddress,
        #[indexed] item_id: u64,
        price: &BigUint,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] executor: &ManagedAddress,
        total_value: &BigUint,
    );
}
