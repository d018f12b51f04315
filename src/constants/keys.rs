pub const STAT: &str = "stat";
pub const HOST: &str = "host";
pub const TIMESTAMP_US: &str = "t_us";
pub const RUN: &str = "run";
