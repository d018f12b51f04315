pub const HOST_NAME: &str = "RUNSTAT_HOST_NAME";

pub const LOG_LEVEL: &str = "LOGGING_LEVEL";
