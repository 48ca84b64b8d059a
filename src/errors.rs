pub const ERR_ALREADY_STAKING: &str = "Already staking";
pub const ERR_ALREADY_MEMBER: &str = "Already a member";
pub const ERR_NOTHING_STAKED: &str = "Nothing staked";
pub const ERR_NOT_A_MEMBER: &str = "Not a member";

pub const ERR_SPEND_NOT_APPROVED: &str = "Stake authority spend not approved";
pub const ERR_SPEND_ALREADY_APPROVED: &str = "Stake authority spend already approved";
pub const ERR_INVALID_STAKE_TOKEN: &str = "Invalid stake token";
pub const ERR_WRONG_STAKE_AMOUNT: &str = "Stake must equal the fixed stake amount";

pub const ERR_PET_COUNTER_OVERFLOW: &str = "Lifetime pet counter overflow";

pub const ERR_BATCH_LENGTH_MISMATCH: &str = "Ticket ids and values length mismatch";
pub const ERR_INVALID_TICKET_ID: &str = "Invalid ticket id";

pub const ERR_INVALID_CONFIG: &str = "Invalid configuration";
