use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use revhub::{biology::biology, config, site::write_site};
use simplelog::LevelFilter;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Pre-generate every static page of the revision hub
#[derive(Parser, Debug)]
#[command(name = "generate-site", version, about)]
struct Args {
    /// Output directory (overrides REVHUB_OUTPUT_DIR, default output/site)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Replace the output directory if it already exists
    #[arg(long)]
    clean: bool,

    /// Log level (overrides REVHUB_LOG_LEVEL)
    #[arg(long)]
    log_level: Option<LevelFilter>,
}

fn main() -> anyhow::Result<()> {
    let env_file = config::load_env();
    let args = Args::parse();
    config::init_logging(config::log_level(args.log_level));
    if let Some(path) = env_file {
        log::debug!("loaded environment from {}", path.display());
    }

    let output_dir = config::output_dir(args.output);
    log::info!("generating site into {}", output_dir.display());

    let summary = write_site(biology(), &output_dir, args.clean)
        .context(format!("failed to generate site in {}", output_dir.display()))?;

    println!(
        "created {BOLD}{}{RESET} topic pages and {BOLD}{}{RESET} routes in {BOLD}{}{RESET}",
        summary.topic_pages,
        summary.routes,
        output_dir.display()
    );

    Ok(())
}
