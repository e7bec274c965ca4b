use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use linreg_playground::config::{ProblemArgs, Settings};
use linreg_playground::ui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    problem: ProblemArgs,

    /// Write logs to this file; the terminal is taken by the UI.
    #[clap(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;

            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        None => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
                .init();
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let Args { problem, log_file } = Args::parse();

    init_logging(log_file.as_ref())?;

    let settings = Settings::try_from(problem)?;

    ui::run(&settings)
}
