use crate::{assemble::GroupError, input::Error};

use std::{sync::mpsc::Receiver, thread::JoinHandle};
use tracing::warn;

// Bad records never stop the computation: they are left out of the group, and
// logged here so whoever maintains the ledger can fix them.
//
// Each channel is drained on its own thread, so neither producer ever waits
// on the other one being read. The handles resolve to the number of errors
// seen on their channel.
pub fn log(
    input_errors: Receiver<Error>,
    group_errors: Receiver<GroupError>,
) -> Vec<JoinHandle<usize>> {
    vec![
        std::thread::spawn(move || {
            input_errors
                .iter()
                .inspect(|err| warn!(error = %err, "skipping ledger row"))
                .count()
        }),
        std::thread::spawn(move || {
            group_errors
                .iter()
                .inspect(|err| warn!(error = %err, "skipping ledger record"))
                .count()
        }),
    ]
}
