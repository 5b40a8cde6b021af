// ── Reconciler ──
//
// Create/Read/Delete of one resource against the controller. Apply is the
// only operation that retries: it PUTs under a single wall-clock deadline,
// waits for mounts to converge within that same deadline, then reads the
// object back so the caller records what the controller actually holds.

use std::sync::Arc;

use lsc_api::RestconfClient;
use tracing::{debug, info, warn};

use crate::codec::{self, Datastore, Resource, mount_path};
use crate::config::{ControllerConfig, DeletePolicy, ReconcileConfig};
use crate::convergence::await_connected;
use crate::error::CoreError;
use crate::model::{MountStatus, ResourceId};
use crate::retry::{Deadline, retry_until};

// ── Results ──────────────────────────────────────────────────────────

/// Result of a read: the object, or a definitive "not there".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation<T> {
    Present(T),
    Absent,
}

impl<T> Observation<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

/// A successful apply.
#[derive(Debug, Clone)]
pub struct Applied<R> {
    pub id: ResourceId,
    /// The controller's view after the write; authoritative for the caller.
    pub observed: R,
    /// Operational-status polls spent waiting for a mount. Zero for other kinds.
    pub convergence_polls: u32,
}

/// Result of a delete. `error` may be set even when `assume_deleted` is:
/// under [`DeletePolicy::BestEffort`] the caller forgets the object and
/// only reports the failure.
#[derive(Debug)]
pub struct DeleteOutcome {
    pub assume_deleted: bool,
    pub error: Option<CoreError>,
}

impl DeleteOutcome {
    fn deleted() -> Self {
        Self {
            assume_deleted: true,
            error: None,
        }
    }

    /// `Err` only when the object must still be considered present.
    pub fn into_result(self) -> Result<(), CoreError> {
        match self {
            Self {
                assume_deleted: false,
                error: Some(err),
            } => Err(err),
            _ => Ok(()),
        }
    }
}

// ── Reconciler ───────────────────────────────────────────────────────

/// Stateless apart from its configuration; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct Reconciler {
    client: Arc<RestconfClient>,
    config: Arc<ReconcileConfig>,
}

impl Reconciler {
    pub fn new(config: &ControllerConfig) -> Result<Self, CoreError> {
        let client = RestconfClient::new(
            &config.address,
            config.port,
            &config.token,
            &config.transport(),
        )?;
        Ok(Self::with_client(Arc::new(client), config.reconcile.clone()))
    }

    pub fn with_client(client: Arc<RestconfClient>, config: ReconcileConfig) -> Self {
        Self {
            client,
            config: Arc::new(config),
        }
    }

    // ── Create ───────────────────────────────────────────────────────

    /// Write `desired`, wait for it to take effect, and read it back.
    pub async fn apply<R: Resource>(&self, desired: &R) -> Result<Applied<R>, CoreError> {
        let id = desired.id();
        let body = codec::encode(desired)?;
        let deadline = Deadline::after(format!("apply {id}"), self.config.apply_timeout);
        let policy = &self.config.retry;

        info!(%id, "applying");
        let client = &self.client;
        let path = &id.config_path();
        let body = &body;
        retry_until(&deadline, policy, move || {
            let body = body.clone();
            async move {
                client
                    .put(path, body)
                    .await
                    .map(drop)
                    .map_err(CoreError::from)
            }
        })
        .await?;

        let convergence_polls = if R::KIND.requires_convergence() {
            await_connected(
                client,
                &id,
                &deadline,
                self.config.poll_interval,
                &self.config.fatal_statuses,
            )
            .await?
        } else {
            0
        };

        let id_ref = &id;
        match retry_until(&deadline, policy, move || self.read::<R>(id_ref)).await? {
            Observation::Present(mut observed) => {
                observed.retain_write_only(desired);
                info!(%id, "applied");
                Ok(Applied {
                    id,
                    observed,
                    convergence_polls,
                })
            }
            Observation::Absent => Err(CoreError::Vanished { id: id.to_string() }),
        }
    }

    /// Apply `desired` in place of the object previously applied as `prior`.
    ///
    /// Identity fields cannot be renamed on the controller: if they changed,
    /// `prior` is deleted first and `desired` is created at its new path.
    pub async fn update<R: Resource>(
        &self,
        prior: &ResourceId,
        desired: &R,
    ) -> Result<Applied<R>, CoreError> {
        let id = desired.id();
        if *prior != id {
            info!(from = %prior, to = %id, "identity changed, replacing");
            self.delete(prior).await.into_result()?;
        }
        self.apply(desired).await
    }

    // ── Read ─────────────────────────────────────────────────────────

    /// Fetch the configured object. A 404 is `Absent`, never an error.
    pub async fn read<R: Resource>(&self, id: &ResourceId) -> Result<Observation<R>, CoreError> {
        match self.client.get(&id.config_path()).await {
            Ok(bytes) => Ok(Observation::Present(codec::decode(id, &bytes)?)),
            Err(e) if e.is_not_found() => {
                debug!(%id, "absent on controller");
                Ok(Observation::Absent)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Operational view of mount `name`, as the controller reports it now.
    pub async fn mount_status(&self, name: &str) -> Result<Observation<MountStatus>, CoreError> {
        match self.client.get(&mount_path(Datastore::Operational, name)).await {
            Ok(bytes) => Ok(Observation::Present(codec::decode_status(&bytes)?)),
            Err(e) if e.is_not_found() => Ok(Observation::Absent),
            Err(e) => Err(e.into()),
        }
    }

    // ── Delete ───────────────────────────────────────────────────────

    /// Remove the object at `id`. One attempt, no retry.
    ///
    /// An already-absent object counts as deleted. Any other failure is
    /// logged and returned; whether the caller may forget the object
    /// anyway follows the configured [`DeletePolicy`].
    pub async fn delete(&self, id: &ResourceId) -> DeleteOutcome {
        match self.client.delete(&id.config_path()).await {
            Ok(()) => {
                info!(%id, "deleted");
                DeleteOutcome::deleted()
            }
            Err(e) if e.is_not_found() => {
                debug!(%id, "already absent");
                DeleteOutcome::deleted()
            }
            Err(e) => {
                let err = CoreError::from(e);
                warn!(%id, error = %err, "delete failed");
                DeleteOutcome {
                    assume_deleted: self.config.delete_policy == DeletePolicy::BestEffort,
                    error: Some(err),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observation_into_option() {
        assert_eq!(Observation::Present(3).into_option(), Some(3));
        assert_eq!(Observation::<u8>::Absent.into_option(), None);
    }

    #[test]
    fn best_effort_failure_is_not_an_error() {
        let outcome = DeleteOutcome {
            assume_deleted: true,
            error: Some(CoreError::Rejected {
                status: 500,
                body: "in use".into(),
            }),
        };
        assert!(outcome.into_result().is_ok());
    }

    #[test]
    fn strict_failure_is_an_error() {
        let outcome = DeleteOutcome {
            assume_deleted: false,
            error: Some(CoreError::Rejected {
                status: 409,
                body: "in use".into(),
            }),
        };
        assert!(matches!(
            outcome.into_result(),
            Err(CoreError::Rejected { status: 409, .. })
        ));
    }
}
