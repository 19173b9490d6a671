pub const DISABLED_JOBS_ENV: &str = "QRUSH_DISABLED_JOBS";

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_SKIPPED: &str = "skipped";
pub const STATUS_TERMINATED: &str = "terminated";
pub const STATUS_FAILED: &str = "failed";
