use std::path::PathBuf;
use std::process;

use clap::Parser;
use colored::Colorize;

use crate::report::load_report;

#[derive(Parser)]
#[command(name = "kuhn-report")]
#[command(about = "Compound action-path probabilities from a Kuhn poker strategy dump")]
struct Cli {
    /// Strategy dump with PLAYER: 0 / PLAYER: 1 sections
    path: PathBuf,
}

pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match load_report(&cli.path) {
        Ok(report) => report.display(),
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            process::exit(1);
        }
    }
}
