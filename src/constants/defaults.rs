pub const LOG_LEVEL: &str = "INFO";
pub const HOST_NAME: &str = "unknown";

// Random bytes in a run id
pub const RUN_ID_BYTES: usize = 8;
