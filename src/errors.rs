pub const ERR_NOT_YET_OPEN: &str = "Not yet open";
pub const ERR_ZERO_WAGER: &str = "Zero wager";
pub const ERR_INSUFFICIENT_RESERVE: &str = "Insufficient reserve";
pub const ERR_ROTATION_NOT_ALLOWED: &str = "Rotation not allowed";
pub const ERR_WRONG_DEPOSIT: &str = "Wrong deposit";
pub const ERR_INVALID_ADDRESS: &str = "Invalid address";
pub const ERR_INVALID_PAYOUT_PERCENT: &str = "Invalid payout percent";
pub const ERR_INVALID_CAPITAL_REQUIREMENT: &str = "Invalid capital requirement";
pub const ERR_ONLY_MASTER_CAN_FUND: &str = "Only master can fund";
pub const ERR_ZERO_FUNDING: &str = "Zero funding";
