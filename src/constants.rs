/// Sort key used by the listing when `sort_by` is absent
pub const DEFAULT_SORT_KEY: &str = "newest";

/// Timestamp format written on new pledges (ISO 8601, local time, microseconds)
pub const PLEDGE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Name of the cookie carrying the signed session token
pub const SESSION_COOKIE_NAME: &str = "session";

// =============================================================================
// Messages
// =============================================================================

pub const MSG_PLEDGE_SUCCESSFUL: &str = "Pledge successful.";

pub const MSG_PROJECT_NOT_FOUND: &str = "Project not found.";

pub const MSG_PROJECT_EXPIRED: &str = "Project has already expired.";

pub const MSG_REWARD_NOT_FOUND: &str = "Reward not found.";

pub const MSG_BELOW_MINIMUM: &str =
    "Pledge amount is less than the minimum for the selected reward.";

pub const MSG_OUT_OF_STOCK: &str = "Selected reward is out of stock.";

pub const MSG_LOGIN_REQUIRED: &str = "Please login to pledge.";

pub const ERR_INVALID_AMOUNT: &str = "Pledge amount must be a positive number";
