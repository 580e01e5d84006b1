multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Member: one record per address, never revoked
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Member {
    pub active: bool,
    /// Block timestamp of the join. Only proposals created strictly later
    /// accept this member's vote.
    pub joined_at: u64,
}

impl Member {
    pub fn inactive() -> Self {
        Member {
            active: false,
            joined_at: 0,
        }
    }
}

// ============================================================
// Action: one call executed as part of a proposal
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Action<M: ManagedTypeApi> {
    pub target: ManagedAddress<M>,
    /// EGLD forwarded with the call, taken from the treasury.
    pub value: BigUint<M>,
    /// Endpoint name on the target. Empty means a plain transfer.
    pub selector: ManagedBuffer<M>,
    /// Nested-encoded list of top-encoded call arguments.
    pub payload: ManagedBuffer<M>,
}

// ============================================================
// Proposal: the governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    pub start_date: u64,
    /// Votes are accepted while block timestamp < end_date.
    pub end_date: u64,
    /// Active member count when the proposal was created. Quorum is
    /// always computed against this value.
    pub member_snapshot: u64,
    pub for_votes: u64,
    pub against_votes: u64,
    pub executed: bool,
}

/// Derived lifecycle view of a proposal.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Majority or quorum not reached yet, voting still open.
    Open,
    /// Majority and quorum reached. Executable if the spend cap allows it.
    Passed,
    /// Voting closed without majority or quorum.
    Defeated,
    /// Actions dispatched. Terminal state.
    Executed,
}

// ============================================================
// Votes
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum VoteDirection {
    Yes,
    No,
}

impl VoteDirection {
    pub fn from_support(support: bool) -> Self {
        if support {
            VoteDirection::Yes
        } else {
            VoteDirection::No
        }
    }
}

/// A vote collected off-chain. `signature` is the voter's Ed25519
/// signature over `getVoteDigest(proposal_id, support)`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct SignedVote<M: ManagedTypeApi> {
    pub proposal_id: u64,
    pub support: bool,
    pub voter: ManagedAddress<M>,
    pub signature: ManagedBuffer<M>,
}
