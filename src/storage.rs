multiversx_sc::imports!();

use crate::types::{Action, Member, Proposal, VoteDirection};

#[multiversx_sc::module]
pub trait StorageModule {
    // ── Configuration ──

    #[view(getMarketplaceAddress)]
    #[storage_mapper("marketplaceAddress")]
    fn marketplace_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getChainId)]
    #[storage_mapper("chainId")]
    fn chain_id(&self) -> SingleValueMapper<ManagedBuffer>;

    // ── Membership ──

    #[storage_mapper("members")]
    fn members(&self, address: &ManagedAddress) -> SingleValueMapper<Member>;

    #[view(getMemberCount)]
    #[storage_mapper("memberCount")]
    fn member_count(&self) -> SingleValueMapper<u64>;

    // ── Proposals ──

    #[view(getProposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("proposalActions")]
    fn proposal_actions(&self, proposal_id: u64) -> VecMapper<Action<Self::Api>>;

    // ── Vote receipts, written once per (proposal, voter) ──

    /// `VoteDirection::Yes` encodes to empty bytes, so presence is tracked here.
    #[storage_mapper("hasVoted")]
    fn has_voted_flag(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("voteReceipts")]
    fn vote_receipts(
        &self,
        proposal_id: u64,
        voter: &ManagedAddress,
    ) -> SingleValueMapper<VoteDirection>;
}
