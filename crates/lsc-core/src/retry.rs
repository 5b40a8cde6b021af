// ── Retry with backoff under a wall-clock deadline ──
//
// An apply is retried until it succeeds, fails terminally, or its single
// deadline passes. Every attempt is bounded by the same deadline, so a
// hung request is dropped (and its connection closed) when time runs out.

use std::future::Future;
use std::time::Duration;

use tokio::time::{Instant, sleep, timeout_at};
use tracing::warn;

use crate::error::CoreError;

/// Backoff tuning and the HTTP statuses that end an apply immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Delay before the second attempt. Default: 1s.
    pub initial_delay: Duration,
    /// Upper bound on any single delay. Default: 10s.
    pub max_delay: Duration,
    /// Controller answers that repeating cannot fix.
    pub terminal_statuses: Vec<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(10),
            terminal_statuses: vec![400, 401, 403],
        }
    }
}

/// Stand-in for "no deadline" when a budget does not fit in an `Instant`.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// One operation's wall-clock budget.
#[derive(Debug, Clone)]
pub struct Deadline {
    operation: String,
    budget: Duration,
    at: Instant,
}

impl Deadline {
    /// Start the clock now. Budgets too large to represent are clamped
    /// to roughly thirty years.
    pub fn after(operation: impl Into<String>, budget: Duration) -> Self {
        let now = Instant::now();
        Self {
            operation: operation.into(),
            budget,
            at: now
                .checked_add(budget)
                .unwrap_or_else(|| now + FAR_FUTURE),
        }
    }

    pub fn instant(&self) -> Instant {
        self.at
    }

    pub fn remaining(&self) -> Duration {
        self.at.saturating_duration_since(Instant::now())
    }

    /// The error reported when this deadline passes.
    pub fn exceeded(&self, last: Option<CoreError>) -> CoreError {
        CoreError::DeadlineExceeded {
            operation: self.operation.clone(),
            budget: self.budget,
            last: last.map(Box::new),
        }
    }
}

/// Delay before retry number `attempt + 1`.
///
/// `delay = min(initial * 2^attempt, max) * jitter`, with a deterministic
/// +-25% jitter derived from the attempt number.
pub fn calculate_backoff(attempt: u32, policy: &RetryPolicy) -> Duration {
    let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
    let base = policy.initial_delay.as_secs_f64() * 2.0_f64.powi(exponent);
    let capped = base.min(policy.max_delay.as_secs_f64());

    let jitter_factor = 1.0 + 0.25 * (f64::from(attempt) * 7.3).sin();
    let with_jitter = (capped * jitter_factor).max(0.0);

    Duration::from_secs_f64(with_jitter)
}

/// Run `op` until it succeeds, returns a non-retryable error, or `deadline`
/// passes.
///
/// Gives up early when the next backoff would end past the deadline; the
/// returned `DeadlineExceeded` carries the last attempt's error.
pub async fn retry_until<T, F, Fut>(
    deadline: &Deadline,
    policy: &RetryPolicy,
    mut op: F,
) -> Result<T, CoreError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, CoreError>>,
{
    let mut attempt: u32 = 0;
    let mut last: Option<CoreError> = None;

    loop {
        let err = match timeout_at(deadline.instant(), op()).await {
            Ok(Ok(value)) => return Ok(value),
            Ok(Err(err)) if !err.is_retryable(policy) => return Err(err),
            Ok(Err(err)) => err,
            Err(_elapsed) => return Err(deadline.exceeded(last)),
        };

        let delay = calculate_backoff(attempt, policy);
        if delay >= deadline.remaining() {
            return Err(deadline.exceeded(Some(err)));
        }

        warn!(
            attempt = attempt + 1,
            delay = ?delay,
            error = %err,
            "{} failed, retrying",
            deadline.operation
        );
        last = Some(err);
        sleep(delay).await;
        attempt = attempt.saturating_add(1);
    }
}

// ── Tests ────────────────────────────────────────────────────────────
