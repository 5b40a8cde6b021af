// ── Mount convergence ──
//
// A mount PUT only records intent. The device is usable once the
// controller's operational tree reports `connected` for the node, so an
// apply polls that status until it converges, hits a configured fatal
// status, or the apply deadline passes.

use std::time::Duration;

use lsc_api::RestconfClient;
use tokio::time::{sleep, timeout_at};
use tracing::{debug, info};

use crate::codec::decode_status;
use crate::error::CoreError;
use crate::model::{ConnectionStatus, ResourceId};
use crate::retry::Deadline;

/// Poll the operational status of `id` until it is `connected`.
///
/// Returns the number of polls it took; zero for objects without an
/// operational mirror. Each poll waits `interval` first (or whatever is
/// left of the deadline, if less). Transport and decode failures end the
/// loop; an absent operational node is reported as `NotFound`.
pub async fn await_connected(
    client: &RestconfClient,
    id: &ResourceId,
    deadline: &Deadline,
    interval: Duration,
    fatal: &[ConnectionStatus],
) -> Result<u32, CoreError> {
    let Some(path) = id.operational_path() else {
        return Ok(0);
    };
    let name = id.device();
    let not_converged = |status: ConnectionStatus| CoreError::NotConverged {
        name: name.to_owned(),
        status,
    };

    let mut polls: u32 = 0;
    let mut last: Option<ConnectionStatus> = None;

    loop {
        let remaining = deadline.remaining();
        if remaining.is_zero() {
            return Err(deadline.exceeded(last.map(not_converged)));
        }
        sleep(interval.min(remaining)).await;
        if deadline.remaining().is_zero() {
            return Err(deadline.exceeded(last.map(not_converged)));
        }

        polls = polls.saturating_add(1);
        let Ok(response) = timeout_at(deadline.instant(), client.get(&path)).await else {
            return Err(deadline.exceeded(last.map(not_converged)));
        };
        let status = decode_status(&response?)?.connection_status;

        if status.is_connected() {
            info!(mount = name, polls, "mount connected");
            return Ok(polls);
        }
        if fatal.contains(&status) {
            return Err(CoreError::MountFailed {
                name: name.to_owned(),
                status,
            });
        }

        debug!(mount = name, poll = polls, %status, "mount not yet connected");
        last = Some(status);
    }
}
