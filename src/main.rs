use clap::Parser;
use group_ledger::run::{run, Report};
use std::{fs::File, path::PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "group_ledger")]
#[command(about = "Balances and settle-up payments for a shared expense ledger")]
struct Cli {
    /// CSV ledger to read.
    input: PathBuf,

    /// What to print on stdout.
    #[arg(long, value_enum, default_value_t = Report::Settlements)]
    report: Report,

    /// Log level, used when `RUST_LOG` is not set. Logs go to stderr.
    #[arg(long, env = "GROUP_LEDGER_LOG", default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("group_ledger={}", cli.log_level)))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let input = File::open(&cli.input)?;
    run(input, std::io::stdout().lock(), cli.report)?;

    Ok(())
}
