pub mod constants;
pub mod helpers;
pub mod json;

pub use json::{json, json_bool, json_null, json_record, jstat, jstat_with_run, jtag, jtag_with_run, FragmentValue};
