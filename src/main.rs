use anyhow::Context;
use clap::Parser;
use revhub::{biology::biology, config, route};
use serde::Serialize;
use simplelog::LevelFilter;

/// Resolve site paths against the curriculum catalog and biology directory
#[derive(Parser, Debug)]
#[command(name = "revhub", version, about)]
struct Args {
    /// Request paths, e.g. /learn/gcse/aqa/physics
    #[arg(required_unless_present = "list")]
    paths: Vec<String>,

    /// Print every static path instead of resolving
    #[arg(long)]
    list: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Log level (overrides REVHUB_LOG_LEVEL)
    #[arg(long)]
    log_level: Option<LevelFilter>,
}

#[derive(Serialize)]
struct Resolved<'a> {
    path: &'a str,
    resolution: route::Resolution<'a>,
}

fn main() -> anyhow::Result<()> {
    let env_file = config::load_env();
    let args = Args::parse();
    config::init_logging(config::log_level(args.log_level));
    if let Some(path) = env_file {
        log::debug!("loaded environment from {}", path.display());
    }

    let directory = biology();

    if args.list {
        for path in route::static_paths(directory) {
            println!("{path}");
        }
        return Ok(());
    }

    let mut missing = 0;
    for path in &args.paths {
        let resolution = route::resolve(path, directory);
        if resolution.is_not_found() {
            log::warn!("{path} not found");
            missing += 1;
        }

        let resolved = Resolved { path, resolution };
        let json = if args.pretty {
            serde_json::to_string_pretty(&resolved)
        } else {
            serde_json::to_string(&resolved)
        }
        .context(format!("failed to serialize resolution for {path}"))?;
        println!("{json}");
    }

    if missing > 0 {
        anyhow::bail!("{missing} of {} paths not found", args.paths.len());
    }

    Ok(())
}
