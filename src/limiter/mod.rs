//! Client-side rate limiting and request sequencing.
//!
//! [`RateLimiter`] runs scheduled calls one at a time, in the order they were
//! scheduled, and keeps the number of calls started in each fixed window at
//! or below the configured quota. A call that fails with a rate-limit error
//! is retried once after a short pause.
//!
//! # Execution Model
//!
//! Scheduled calls are boxed into units and sent over an unbounded channel to
//! a single worker task. The worker is spawned on the first call, so a
//! limiter can be created outside of a Tokio runtime, and spawned again if it
//! has stopped (for example because its runtime shut down). Each unit runs
//! as its own task and reports its outcome through a oneshot channel; a unit
//! that panics fails only its own caller.
//!
//! Quota waits cannot be cancelled and queued units never expire: dropping
//! the future returned by [`RateLimiter::schedule_call`] does not remove the
//! unit from the queue. It still runs, and its outcome is discarded.

mod window;

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::Instant;

use crate::clients::GraphqlError;
use crate::config::RateLimitConfig;
use crate::error::ClnkError;

pub use window::WindowSnapshot;
use window::{Admission, RateLimitWindow};

/// Pause before the single retry of a rate-limited call.
pub const RATE_LIMIT_RETRY_DELAY: Duration = Duration::from_millis(1000);

type Unit = Pin<Box<dyn Future<Output = ()> + Send>>;

/// FIFO request sequencer with a fixed-window quota.
///
/// # Example
///
/// ```rust,ignore
/// use clnk_sdk::limiter::RateLimiter;
/// use clnk_sdk::RateLimitConfig;
///
/// let limiter = RateLimiter::new(&RateLimitConfig::default());
///
/// let value = limiter
///     .schedule_call(|| async { Ok::<_, clnk_sdk::ClnkError>(42) })
///     .await?;
/// ```
#[derive(Debug)]
pub struct RateLimiter {
    window: Arc<Mutex<RateLimitWindow>>,
    queue: Mutex<Option<mpsc::UnboundedSender<Unit>>>,
    retry_delay: Duration,
}

// Verify RateLimiter is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RateLimiter>();
};

impl RateLimiter {
    /// Creates a limiter with an empty window starting now.
    #[must_use]
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            window: Arc::new(Mutex::new(RateLimitWindow::new(config, Instant::now()))),
            queue: Mutex::new(None),
            retry_delay: RATE_LIMIT_RETRY_DELAY,
        }
    }

    /// Returns the current window counters.
    #[must_use]
    pub fn window_snapshot(&self) -> WindowSnapshot {
        lock(&self.window).snapshot()
    }

    /// Schedules `call` behind every previously scheduled call.
    ///
    /// The unit is enqueued immediately, before the returned future is first
    /// polled, so scheduling order is the order of `schedule_call`
    /// invocations. `call` may be invoked twice: once normally and once more
    /// if the first attempt fails with a rate-limit error.
    ///
    /// # Errors
    ///
    /// Returns the error of the final attempt, or
    /// [`GraphqlError::RequestDropped`] wrapped in [`ClnkError::Transport`]
    /// when the unit panicked, its runtime shut down before it finished, or
    /// no worker could be started because there is no current Tokio runtime.
    pub fn schedule_call<T, F, Fut>(
        &self,
        call: F,
    ) -> impl Future<Output = Result<T, ClnkError>> + Send + 'static
    where
        T: Send + 'static,
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, ClnkError>> + Send + 'static,
    {
        let (reply_tx, reply_rx) = oneshot::channel();
        let window = Arc::clone(&self.window);
        let retry_delay = self.retry_delay;

        let unit: Unit = Box::pin(async move {
            let outcome = run_unit(&window, retry_delay, call).await;
            // The caller may have stopped waiting
            let _ = reply_tx.send(outcome);
        });
        let queued = self.enqueue(unit);

        async move {
            if !queued {
                return Err(ClnkError::Transport(GraphqlError::RequestDropped));
            }
            reply_rx
                .await
                .unwrap_or_else(|_| Err(ClnkError::Transport(GraphqlError::RequestDropped)))
        }
    }

    /// Sends `unit` to the worker, starting a new worker if there is none or
    /// the previous one has stopped.
    fn enqueue(&self, unit: Unit) -> bool {
        let mut queue = self.queue.lock().unwrap_or_else(PoisonError::into_inner);

        let unit = match queue.as_ref() {
            Some(sender) if !sender.is_closed() => match sender.send(unit) {
                Ok(()) => return true,
                Err(mpsc::error::SendError(unit)) => unit,
            },
            _ => unit,
        };

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("Rate limiter called outside of a Tokio runtime");
            return false;
        };

        let (sender, receiver) = mpsc::unbounded_channel();
        runtime.spawn(run_worker(receiver));
        tracing::debug!("Rate limiter worker started");

        let queued = sender.send(unit).is_ok();
        *queue = Some(sender);
        queued
    }
}

async fn run_worker(mut receiver: mpsc::UnboundedReceiver<Unit>) {
    while let Some(unit) = receiver.recv().await {
        // A panicking unit drops its reply sender, which fails only its caller
        if let Err(error) = tokio::spawn(unit).await {
            tracing::warn!("Rate limiter unit did not complete: {}", error);
        }
    }
    tracing::debug!("Rate limiter worker stopped");
}

async fn run_unit<T, F, Fut>(
    window: &Mutex<RateLimitWindow>,
    retry_delay: Duration,
    call: F,
) -> Result<T, ClnkError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, ClnkError>>,
{
    acquire_slot(window).await;

    match call().await {
        Err(error) if error.is_rate_limited() => {
            tracing::warn!(
                "Rate limited by server ({}), retrying once in {:?}",
                error,
                retry_delay
            );
            tokio::time::sleep(retry_delay).await;
            call().await
        }
        outcome => outcome,
    }
}

/// Waits for a free slot in the window and claims it.
async fn acquire_slot(window: &Mutex<RateLimitWindow>) {
    let admission = lock(window).admission(Instant::now());

    if let Admission::Wait(delay) = admission {
        tracing::warn!("Rate limit quota reached, waiting {:?} for the next window", delay);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        lock(window).reset(Instant::now());
    }

    lock(window).record();
}

fn lock(window: &Mutex<RateLimitWindow>) -> MutexGuard<'_, RateLimitWindow> {
    window.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn limiter(max_requests: u32, secs: u64) -> RateLimiter {
        RateLimiter::new(&RateLimitConfig::new(max_requests, Duration::from_secs(secs)).unwrap())
    }

    fn rate_limited() -> ClnkError {
        ClnkError::RateLimited {
            message: "API Error: rate limit exceeded".to_string(),
            errors: Vec::new(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_third_call_waits_for_next_window() {
        let limiter = limiter(2, 10);
        let start = Instant::now();

        let (a, b, c) = tokio::join!(
            limiter.schedule_call(|| async { Ok::<_, ClnkError>(Instant::now()) }),
            limiter.schedule_call(|| async { Ok::<_, ClnkError>(Instant::now()) }),
            limiter.schedule_call(|| async { Ok::<_, ClnkError>(Instant::now()) }),
        );

        assert!(a.unwrap() - start < Duration::from_secs(1));
        assert!(b.unwrap() - start < Duration::from_secs(1));
        assert!(c.unwrap() - start >= Duration::from_secs(10));
        assert_eq!(limiter.window_snapshot().request_count, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_units_run_in_schedule_order() {
        let limiter = limiter(10, 60);
        let order = Arc::new(Mutex::new(Vec::new()));

        let schedule = |label: &'static str, pause_ms: u64| {
            let order = Arc::clone(&order);
            limiter.schedule_call(move || {
                let order = Arc::clone(&order);
                async move {
                    // Earlier units take longer; they must still finish first
                    tokio::time::sleep(Duration::from_millis(pause_ms)).await;
                    order.lock().unwrap().push(label);
                    Ok::<_, ClnkError>(())
                }
            })
        };

        let first = schedule("first", 30);
        let second = schedule("second", 20);
        let third = schedule("third", 10);
        let (a, b, c) = tokio::join!(third, second, first);

        assert!(a.is_ok() && b.is_ok() && c.is_ok());
        assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_unit_does_not_block_next() {
        let limiter = limiter(10, 60);

        let failing = limiter.schedule_call(|| async {
            Err::<(), _>(ClnkError::Api {
                message: "API Error: Invalid code".to_string(),
                errors: Vec::new(),
            })
        });
        let next = limiter.schedule_call(|| async { Ok::<_, ClnkError>("done") });

        assert!(failing.await.is_err());
        assert_eq!(next.await.unwrap(), "done");
    }

    #[tokio::test(start_paused = true)]
    async fn test_rate_limited_call_is_retried_once() {
        let limiter = limiter(10, 60);
        let attempts = Arc::new(AtomicUsize::new(0));
        let start = Instant::now();

        let counter = Arc::clone(&attempts);
        let result = limiter
            .schedule_call(move || {
                let counter = Arc::clone(&counter);
                async move {
                    if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                        Err(rate_limited())
                    } else {
                        Ok("second time lucky")
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), "second time lucky");
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
        assert!(start.elapsed() >= RATE_LIMIT_RETRY_DELAY);
        // The retry does not consume a second slot
        assert_eq!(limiter.window_snapshot().request_count, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_rate_limit_failure_propagates() {
        let limiter = limiter(10, 60);
        let attempts = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&attempts);
        let result = limiter
            .schedule_call(move || {
                let counter = Arc::clone(&counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Err::<(), _>(rate_limited())
                }
            })
            .await;

        assert!(matches!(result, Err(ClnkError::RateLimited { .. })));
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_other_errors_are_not_retried() {
        let limiter = limiter(10, 60);
        let attempts = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&attempts);
        let result = limiter
            .schedule_call(move || {
                let counter = Arc::clone(&counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Err::<(), _>(ClnkError::Transport(GraphqlError::MissingData { field: "me" }))
                }
            })
            .await;

        assert!(matches!(result, Err(ClnkError::Transport(_))));
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_caller_future_still_runs_unit() {
        let limiter = limiter(10, 60);
        let attempts = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&attempts);
        drop(limiter.schedule_call(move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok::<_, ClnkError>(())
            }
        }));

        limiter
            .schedule_call(|| async { Ok::<_, ClnkError>(()) })
            .await
            .unwrap();

        assert_eq!(attempts.load(Ordering::SeqCst), 1);
        assert_eq!(limiter.window_snapshot().request_count, 2);
    }

    #[test]
    fn test_limiter_can_be_created_outside_runtime() {
        let limiter = limiter(5, 60);
        assert_eq!(
            limiter.window_snapshot(),
            WindowSnapshot {
                request_count: 0,
                max_requests: 5
            }
        );
    }
}
