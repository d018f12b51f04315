use anyhow::Result;

use crate::argsets::NowArgs;
use runstat::helpers::{now_iso, time_in_seconds};

pub fn now(args: NowArgs) -> Result<()> {
    if args.iso {
        println!("{}", now_iso());
    } else {
        println!("{:.6}", time_in_seconds());
    }
    Ok(())
}
