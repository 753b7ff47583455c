pub const ERR_NOT_AN_INVESTOR: &str = "Not an investor";
pub const ERR_OUTSIDE_VOTING_WINDOW: &str = "Outside voting window";
pub const ERR_ALREADY_VOTED: &str = "Already voted";
pub const ERR_ILLEGAL_VOTING_TRANSITION: &str = "Illegal voting transition";
pub const ERR_QUORUM_RATE_INVALID: &str = "Quorum rate must be between 1 and 100";
pub const ERR_APPROVAL_RATE_INVALID: &str = "Approval rate must be between 1 and 100";
pub const ERR_SCHEDULE_LENGTH_MISMATCH: &str = "Schedule length mismatch";
pub const ERR_ROADMAP_NOT_MONOTONIC: &str = "Roadmap total amount cannot decrease";
pub const ERR_NOT_ACCEPTED: &str = "Tap release not accepted";
pub const ERR_ALREADY_WITHDRAWN: &str = "Already withdrawn";
pub const ERR_PROJECT_TERMINATED: &str = "Project terminated";
pub const ERR_NOT_PROJECT_OWNER: &str = "Not project owner";

pub const ERR_PROJECT_NOT_TERMINATED: &str = "Project not terminated";
pub const ERR_INVALID_TOKEN: &str = "Invalid token";
pub const ERR_INVALID_ADDRESS: &str = "Invalid address";
pub const ERR_INVALID_AMOUNT: &str = "Invalid amount";
pub const ERR_INVALID_DEADLINE: &str = "Tap deadlines must be strictly increasing";
pub const ERR_EMPTY_ROADMAP: &str = "Roadmap has no taps";
pub const ERR_FUNDING_CAP_EXCEEDED: &str = "Investment exceeds committed funding";
pub const ERR_INSUFFICIENT_FUNDS: &str = "Tap not covered by investments";
pub const ERR_TAP_NOT_FOUND: &str = "Tap does not exist";
pub const ERR_VOTING_NOT_FOUND: &str = "Voting does not exist";
pub const ERR_VOTING_NOT_FINISHED: &str = "Voting period has not ended";
pub const ERR_FINALIZED_TAP_MODIFIED: &str = "Withdrawn taps cannot change";
pub const ERR_ROADMAP_PROPOSAL_CLOSED: &str = "No roadmap voting awaiting a proposal";
pub const ERR_ORACLE_NOT_CONFIGURED: &str = "Token oracle not configured";
