//! Hand-built JSON fragments for status lines.
//!
//! Fragments are plain strings such as `"field": 12` that callers join with
//! `", "` and wrap into records. Nothing here parses JSON.

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::constants::{defaults, keys};
use crate::helpers::{host_name, now_micros, rand_hex};

static RUN_ID: Lazy<String> = Lazy::new(|| rand_hex(defaults::RUN_ID_BYTES));

/// A value that can sit on the right-hand side of a field fragment.
pub trait FragmentValue {
    fn render(&self) -> String;
}

macro_rules! integer_fragment {
    ($($t:ty),*) => {
        $(impl FragmentValue for $t {
            fn render(&self) -> String {
                self.to_string()
            }
        })*
    };
}

integer_fragment!(i32, i64, u32, u64, usize);

impl FragmentValue for f64 {
    fn render(&self) -> String {
        if self.is_finite() {
            format!("{self:.6}")
        } else {
            String::from("null")
        }
    }
}

impl FragmentValue for f32 {
    fn render(&self) -> String {
        f64::from(*self).render()
    }
}

impl FragmentValue for bool {
    fn render(&self) -> String {
        let s = if *self { "true" } else { "false" };
        s.to_string()
    }
}

impl FragmentValue for str {
    fn render(&self) -> String {
        quote(self)
    }
}

impl FragmentValue for String {
    fn render(&self) -> String {
        quote(self)
    }
}

impl<T: FragmentValue> FragmentValue for Option<T> {
    fn render(&self) -> String {
        match self {
            Some(v) => v.render(),
            None => String::from("null"),
        }
    }
}

impl<T: FragmentValue + ?Sized> FragmentValue for &T {
    fn render(&self) -> String {
        (**self).render()
    }
}

// Escaped like serde_json escapes strings
fn quote(s: &str) -> String {
    Value::String(s.to_owned()).to_string()
}

/// `"field": <v>`
pub fn json(field: &str, v: impl FragmentValue) -> String {
    format!("{}: {}", quote(field), v.render())
}

pub fn json_bool(field: &str, v: bool) -> String {
    json(field, v)
}

pub fn json_null(field: &str) -> String {
    format!("{}: null", quote(field))
}

/// `"name": { body }`. The body is inserted as is.
pub fn json_record(name: &str, body: &str) -> String {
    format!("{}: {{ {} }}", quote(name), body)
}

/// Host and timestamp fields.
pub fn jtag() -> String {
    format!(
        "{}, {}",
        json(keys::HOST, host_name()),
        json(keys::TIMESTAMP_US, now_micros())
    )
}

pub fn jtag_with_run() -> String {
    format!("{}, {}", jtag(), json(keys::RUN, run_id()))
}

/// A complete status record: the body under `stat`, followed by the tag.
pub fn jstat(body: &str) -> String {
    format!("{{ {}, {} }}", json_record(keys::STAT, body), jtag())
}

pub fn jstat_with_run(body: &str) -> String {
    format!("{{ {}, {} }}", json_record(keys::STAT, body), jtag_with_run())
}

/// Random id shared by every record this process emits.
pub fn run_id() -> &'static str {
    RUN_ID.as_str()
}
