use anyhow::Result;

use crate::argsets::{FieldArgs, HexArgs, StatArgs, TagArgs};
use runstat::helpers::hex_str;
use runstat::{json, json_bool, json_null, jstat, jstat_with_run, jtag, jtag_with_run, FragmentValue};
use serde_json::Value;

pub fn hex(args: HexArgs) -> Result<()> {
    println!("{}", hex_str(&args.text));
    Ok(())
}

pub fn tag(args: TagArgs) -> Result<()> {
    if args.with_run {
        println!("{}", jtag_with_run());
    } else {
        println!("{}", jtag());
    }
    Ok(())
}

pub fn stat(args: StatArgs) -> Result<()> {
    if args.with_run {
        println!("{}", jstat_with_run(&args.body));
    } else {
        println!("{}", jstat(&args.body));
    }
    Ok(())
}

pub fn field(args: FieldArgs) -> Result<()> {
    println!("{}", typed_field(&args.name, &args.value));
    Ok(())
}

// Number text that is already a valid JSON integer, emitted as written
struct IntegerText<'a>(&'a str);

impl FragmentValue for IntegerText<'_> {
    fn render(&self) -> String {
        self.0.to_string()
    }
}

// If the value reads as a JSON scalar, keep its type; otherwise treat it as a string
fn typed_field(name: &str, value: &str) -> String {
    match serde_json::from_str::<Value>(value) {
        Ok(Value::Null) => json_null(name),
        Ok(Value::Bool(b)) => json_bool(name, b),
        Ok(Value::Number(n)) => {
            if let Some(v) = n.as_i64() {
                json(name, v)
            } else if let Some(v) = n.as_u64() {
                json(name, v)
            } else if is_integer_literal(value.trim()) {
                json(name, IntegerText(value.trim()))
            } else {
                json(name, n.as_f64())
            }
        }
        Ok(Value::String(s)) => json(name, s),
        _ => {
            log::debug!("Treating '{}' as a string value", value);
            json(name, value)
        }
    }
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
