use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bitmapfx::Transform;
use clap::Parser;
use log::warn;

/// Apply one transform to a 24-bit or 32-bit BMP file.
#[derive(Parser)]
#[command(name = "bitmapfx", disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Transform flag, e.g. `-g` or `-r90`.
    #[arg(allow_hyphen_values = true)]
    flag: String,

    /// BMP file to read.
    input: PathBuf,

    /// Where to write the transformed BMP.
    output: PathBuf,
}

fn usage() -> String {
    let mut text = String::from("usage:\nbitmapfx option inputfile.bmp outputfile.bmp\noptions:\n");
    for transform in Transform::ALL {
        text.push_str(&format!("  {} {}\n", transform.flag(), transform));
    }
    text
}

fn main() {
    env_logger::init();

    // Wrong arity is not an error exit: print usage and stop.
    let Ok(args) = Args::try_parse() else {
        print!("{}", usage());
        return;
    };

    if let Err(err) = run(&args) {
        println!("{err:#}");
    }
}

fn run(args: &Args) -> Result<()> {
    let transform = Transform::from_flag(&args.flag).unwrap_or_else(|| {
        warn!("unknown flag {:?}, copying image unchanged", args.flag);
        Transform::Identity
    });

    let data = fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let mut image = bitmapfx::decode(&data)?;
    transform.apply(&mut image)?;
    let encoded = image.encode()?;

    fs::write(&args.output, encoded)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    Ok(())
}
