use std::{fs, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

#[derive(Parser, Debug)]
#[command(about = "Convert BMC message color tables to editable JSON and back")]
struct Args {
    /// Input file (BMC binary for --to-json, JSON text for --to-binary)
    #[arg(short, long)]
    input: PathBuf,

    /// Output file
    #[arg(short, long)]
    output: PathBuf,

    /// Convert a BMC file to JSON
    #[arg(long)]
    to_json: bool,

    /// Convert a JSON file back to BMC
    #[arg(long)]
    to_binary: bool,

    /// Number of colors per JSON group; 1 emits a flat array
    #[arg(long, default_value_t = 1)]
    group_size: usize,
}

pub fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    if args.to_json == args.to_binary {
        bail!("specify exactly one of --to-json or --to-binary");
    }

    info!("Loading {}", args.input.display());
    if args.to_json {
        let data = fs::read(&args.input)
            .with_context(|| format!("unable to read {}", args.input.display()))?;
        let text = bmc_convert::bmc_to_json(&data, args.group_size)?;
        info!("Saving {}", args.output.display());
        fs::write(&args.output, text)?;
    } else {
        let text = fs::read_to_string(&args.input)
            .with_context(|| format!("unable to read {}", args.input.display()))?;
        let data = bmc_convert::json_to_bmc(&text)?;
        info!("Saving {}", args.output.display());
        fs::write(&args.output, data)?;
    }
    Ok(())
}
