mod hex;
mod node_meta;
mod time;

pub use hex::{hex_data, hex_str, rand_hex};
pub use node_meta::{host_name, short_host_name, HostNameError};
pub use time::{now_iso, now_micros, time_in_seconds};
