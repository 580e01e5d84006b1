#![no_std]

multiversx_sc::imports!();

pub mod collector_dao_proxy;
pub mod errors;
pub mod events;
pub mod execution;
pub mod marketplace_proxy;
pub mod membership;
pub mod proposals;
pub mod signature;
pub mod storage;
pub mod types;
pub mod voting;

use errors::ERR_EMPTY_CHAIN_ID;

// ============================================================
// Constants
// ============================================================

/// Exact membership fee: 1 EGLD.
pub const MEMBERSHIP_FEE: u64 = 1_000_000_000_000_000_000;

/// Voting window: 3 days in seconds
pub const VOTING_PERIOD: u64 = 259_200;

/// Quorum: 25% of the member snapshot, rounded up (2500 basis points)
pub const QUORUM_BPS: u64 = 2_500;

/// Maximum a single proposal can spend: 25% of the live treasury
pub const MAX_SPEND_BPS: u64 = 2_500;

/// Basis points denominator
pub const BPS_DENOMINATOR: u64 = 10_000;

/// The only privileged action a proposal may address to this contract.
pub const BUY_NFT_SELECTOR: &[u8] = b"buyNftViaProposal";

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait CollectorDao:
    storage::StorageModule
    + events::EventsModule
    + membership::MembershipModule
    + proposals::ProposalModule
    + signature::SignatureModule
    + voting::VotingModule
    + execution::ExecutionModule
{
    #[init]
    fn init(&self, marketplace_address: ManagedAddress, chain_id: ManagedBuffer) {
        require!(!chain_id.is_empty(), ERR_EMPTY_CHAIN_ID);

        self.marketplace_address().set(&marketplace_address);
        self.chain_id().set(&chain_id);
        self.member_count().set(0u64);
        self.proposal_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue5<BigUint, u64, u64, u64, ManagedAddress> {
        (
            BigUint::from(MEMBERSHIP_FEE),
            VOTING_PERIOD,
            QUORUM_BPS,
            MAX_SPEND_BPS,
            self.marketplace_address().get(),
        )
            .into()
    }
}
