pub const ERR_INVALID_PAYMENT: &str = "send exactly 1 unit please";
pub const ERR_DUPLICATE_MEMBERSHIP: &str = "member already exists";
pub const ERR_NOT_A_MEMBER: &str = "Not a member";
pub const ERR_INVALID_PROPOSAL_LENGTH: &str = "Invalid proposal length";
pub const ERR_PROPOSAL_NOT_FOUND: &str = "Proposal does not exist";

/// Shared by every vote rejection: unknown proposal, ineligible voter,
/// closed window, repeated vote, malformed signature.
pub const ERR_VOTE_REJECTED: &str = "Casting vote failed";

pub const ERR_ALREADY_EXECUTED: &str = "Proposal already executed";
/// Covers both a losing tally and missing quorum.
pub const ERR_EXECUTION_BLOCKED: &str = "Proposal can't be executed";
pub const ERR_COST_CAP_EXCEEDED: &str = "Proposal cost upper limit error";
pub const ERR_ACTION_CALL_FAILED: &str = "Execution failed";

pub const ERR_EMPTY_CHAIN_ID: &str = "Chain id must not be empty";
