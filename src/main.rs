use anyhow::bail;
use clap::Parser;
use log::{debug, LevelFilter};
use std::{io, path::PathBuf, str::FromStr};

use retarget::{
    config::RewriteConfig,
    logging::{setup_logging, DEFAULT_LOG_LEVEL},
    rewrite,
};

#[derive(Parser, Debug)]
#[command(about = "Switch the platform toolset of generated Visual Studio project files.")]
#[command(version)]
struct Args {
    /// Build directory containing the generated project subdirectories
    #[arg(index = 1, value_parser = parse_directory, default_value = ".")]
    directory: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        long,
        value_parser = parse_log_level,
        default_value = DEFAULT_LOG_LEVEL
    )]
    log_level: LevelFilter,
}

fn parse_log_level(s: &str) -> Result<LevelFilter, String> {
    LevelFilter::from_str(s).map_err(|_| format!("Invalid log level: {s}"))
}

fn parse_directory(dir: &str) -> anyhow::Result<PathBuf> {
    let path = PathBuf::from(dir);
    if path.is_dir() {
        Ok(path)
    } else {
        bail!("'{dir}' is not a directory. Please provide a valid path.")
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if let Err(e) = setup_logging(args.log_level) {
        eprintln!("Warning: logging disabled: {e:#}");
    }

    let config = RewriteConfig::new(args.directory);
    debug!("Running with {config:?}");

    rewrite::run(&config, &mut io::stdout().lock())?;

    Ok(())
}
