use crate::{
    assemble::assemble,
    error_handler, input,
    ledger::{calculate_balances, get_simplified_transactions},
    output,
};

use tracing::debug;

/// Which view of the group to write out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Report {
    /// Net balance of every member.
    Balances,

    /// Payments settling every balance.
    #[default]
    Settlements,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("a worker thread panicked")]
    Worker,
}

/// Read a CSV ledger from `input_stream`, compute the group's balances and the
/// payments settling them, and write the requested report to `output_stream`.
///
/// Invalid rows are logged and skipped, they never make the run fail.
pub fn run(
    input_stream: (impl std::io::Read + Send + 'static),
    output_stream: impl std::io::Write,
    report: Report,
) -> Result<(), Error> {
    let (records, input_errors) = input::parse(input_stream);
    let (group, group_errors) = assemble(records);

    let error_handles = error_handler::log(input_errors, group_errors);

    let group = group.join().map_err(|_| Error::Worker)?;
    let mut skipped = 0;
    for handle in error_handles {
        skipped += handle.join().map_err(|_| Error::Worker)?;
    }
    debug!(
        members = group.members.len(),
        expenses = group.expenses.len(),
        settlements = group.settlements.len(),
        skipped,
        "loaded group"
    );

    let balances = calculate_balances(&group);
    match report {
        Report::Balances => output::write_balances(output_stream, &balances)?,
        Report::Settlements => {
            let transactions = get_simplified_transactions(&balances, &group.members);
            output::write_transactions(output_stream, &transactions)?
        }
    }

    Ok(())
}
