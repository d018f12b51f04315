mod argsets;
mod command;

use anyhow::{anyhow, Result};
use dotenv::dotenv;
use env_logger::Env;

use runstat::constants::{defaults, envvars};

const CMD_HEX: &str = "hex";
const CMD_TAG: &str = "tag";
const CMD_STAT: &str = "stat";
const CMD_FIELD: &str = "field";
const CMD_NOW: &str = "now";

const FLAG_RUN: &str = "--run";
const FLAG_ISO: &str = "--iso";

enum Cmd {
    Hex(argsets::HexArgs),
    Tag(argsets::TagArgs),
    Stat(argsets::StatArgs),
    Field(argsets::FieldArgs),
    Now(argsets::NowArgs),
}

fn main() -> Result<()> {
    let _ = dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();

    let mut args = pico_args::Arguments::from_env();
    // Flags first, so they are not taken as free arguments
    let with_run = args.contains(FLAG_RUN);
    let iso = args.contains(FLAG_ISO);

    let cmd = match args.subcommand()?.as_deref() {
        Some(CMD_HEX) => Cmd::Hex(argsets::HexArgs {
            text: args.free_from_str()?,
        }),
        Some(CMD_TAG) => Cmd::Tag(argsets::TagArgs { with_run }),
        Some(CMD_STAT) => Cmd::Stat(argsets::StatArgs {
            body: args.free_from_str()?,
            with_run,
        }),
        Some(CMD_FIELD) => Cmd::Field(argsets::FieldArgs {
            name: args.free_from_str()?,
            value: args.free_from_str()?,
        }),
        Some(CMD_NOW) => Cmd::Now(argsets::NowArgs { iso }),
        _ => {
            return Err(anyhow!(
                "Subcommand must be one of 'hex', 'tag', 'stat', 'field', 'now'"
            ))
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(anyhow!("Unexpected arguments: {:?}", remaining));
    }

    match cmd {
        Cmd::Hex(a) => command::hex(a),
        Cmd::Tag(a) => command::tag(a),
        Cmd::Stat(a) => command::stat(a),
        Cmd::Field(a) => command::field(a),
        Cmd::Now(a) => command::now(a),
    }
}
