//! Single-worker FIFO queue that paces requests to a quota-limited provider
//!
//! Only one request is in flight per queue. Retryable failures go back to the
//! tail of the queue, rate-limited requests are re-run in place after a
//! cooldown and do not consume the retry budget.

use super::retry_policy::QueueConfig;
use crate::shared::errors::{AppError, AppResult};
use futures::future::{BoxFuture, FutureExt};
use std::collections::VecDeque;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{oneshot, Mutex};
use tokio::time::sleep;

type RequestThunk<T> = Arc<dyn Fn() -> BoxFuture<'static, AppResult<T>> + Send + Sync>;

struct QueueTask<T> {
    request: RequestThunk<T>,
    retries_left: u32,
    responder: oneshot::Sender<AppResult<T>>,
}

struct QueueState<T> {
    name: String,
    config: QueueConfig,
    tasks: Mutex<VecDeque<QueueTask<T>>>,
    processing: AtomicBool,
}

/// Rate-limited request queue owned by one provider pipeline
pub struct RequestQueue<T> {
    state: Arc<QueueState<T>>,
}

impl<T> Clone for RequestQueue<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T: Send + 'static> RequestQueue<T> {
    pub fn new(name: &str, config: QueueConfig) -> Self {
        Self {
            state: Arc::new(QueueState {
                name: name.to_string(),
                config,
                tasks: Mutex::new(VecDeque::new()),
                processing: AtomicBool::new(false),
            }),
        }
    }

    /// Queue a request and wait for its final outcome.
    ///
    /// `request` may be invoked several times (retries, rate-limit re-runs),
    /// so it has to build a fresh future on every call.
    pub async fn enqueue<F, Fut>(&self, request: F) -> AppResult<T>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = AppResult<T>> + Send + 'static,
    {
        let (responder, outcome) = oneshot::channel();
        let request: RequestThunk<T> = Arc::new(move || request().boxed());

        self.state.tasks.lock().await.push_back(QueueTask {
            request,
            retries_left: self.state.config.max_retries,
            responder,
        });
        self.ensure_worker_started();

        outcome.await.map_err(|_| {
            AppError::InternalError(format!(
                "{} queue dropped a pending request",
                self.state.name
            ))
        })?
    }

    /// Start the worker loop unless it already runs (idempotent)
    fn ensure_worker_started(&self) {
        if self
            .state
            .processing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return;
        }

        let state = Arc::clone(&self.state);
        tokio::spawn(async move { state.run().await });
    }
}

impl<T: Send + 'static> QueueState<T> {
    async fn run(self: Arc<Self>) {
        log::debug!("{} queue worker started", self.name);

        loop {
            let next = self.tasks.lock().await.pop_front();
            let Some(task) = next else {
                self.processing.store(false, Ordering::Release);
                // A task pushed between the pop and the flag reset would
                // otherwise sit there until the next enqueue.
                if self.tasks.lock().await.is_empty()
                    || self
                        .processing
                        .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                        .is_err()
                {
                    break;
                }
                continue;
            };

            if task.responder.is_closed() {
                log::debug!("{} queue skipping a request nobody waits for", self.name);
                continue;
            }

            self.process(task).await;
        }

        log::debug!("{} queue worker idle", self.name);
    }

    async fn process(&self, mut task: QueueTask<T>) {
        let mut rate_limit_hits = 0;

        loop {
            match (task.request)().await {
                Ok(response) => {
                    let _ = task.responder.send(Ok(response));
                    sleep(self.config.inter_request_delay).await;
                    return;
                }
                Err(error)
                    if error.is_rate_limit()
                        && rate_limit_hits < self.config.max_rate_limit_retries =>
                {
                    rate_limit_hits += 1;
                    log::warn!(
                        "{} rate limited ({}/{}). Waiting {:?} before re-running the request.",
                        self.name,
                        rate_limit_hits,
                        self.config.max_rate_limit_retries,
                        self.config.rate_limit_delay
                    );
                    sleep(self.config.rate_limit_delay).await;
                }
                Err(error) if error.is_retryable() && task.retries_left > 0 => {
                    task.retries_left -= 1;
                    log::warn!(
                        "{} request failed: {}. Requeued with {} retries left, pausing {:?}",
                        self.name,
                        error,
                        task.retries_left,
                        self.config.retry_delay
                    );
                    self.tasks.lock().await.push_back(task);
                    sleep(self.config.retry_delay).await;
                    return;
                }
                Err(error) => {
                    log::warn!("{} request failed permanently: {}", self.name, error);
                    let _ = task.responder.send(Err(error));
                    sleep(self.config.inter_request_delay).await;
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU32;
    use std::time::Duration;

    fn counter() -> Arc<AtomicU32> {
        Arc::new(AtomicU32::new(0))
    }

    #[tokio::test]
    async fn test_success_resolves_caller() {
        let queue: RequestQueue<u32> = RequestQueue::new("test", QueueConfig::immediate());
        let result = queue.enqueue(|| async { Ok(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_transient_failure_is_retried() {
        let queue: RequestQueue<&'static str> =
            RequestQueue::new("test", QueueConfig::immediate().with_max_retries(2));
        let attempts = counter();

        let seen = Arc::clone(&attempts);
        let result = queue
            .enqueue(move || {
                let seen = Arc::clone(&seen);
                async move {
                    if seen.fetch_add(1, Ordering::SeqCst) < 2 {
                        Err(AppError::ExternalServiceError("503".to_string()))
                    } else {
                        Ok("ok")
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), "ok");
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retry_budget_exhaustion_propagates() {
        let queue: RequestQueue<()> =
            RequestQueue::new("test", QueueConfig::immediate().with_max_retries(2));
        let attempts = counter();

        let seen = Arc::clone(&attempts);
        let result = queue
            .enqueue(move || {
                let seen = Arc::clone(&seen);
                async move {
                    seen.fetch_add(1, Ordering::SeqCst);
                    Err(AppError::ExternalServiceError("down".to_string()))
                }
            })
            .await;

        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_permanent_failure_is_not_retried() {
        let queue: RequestQueue<()> = RequestQueue::new("test", QueueConfig::immediate());
        let attempts = counter();

        let seen = Arc::clone(&attempts);
        let result = queue
            .enqueue(move || {
                let seen = Arc::clone(&seen);
                async move {
                    seen.fetch_add(1, Ordering::SeqCst);
                    Err(AppError::ApiError("Bad request to Google Books API".to_string()))
                }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_rate_limit_does_not_consume_retry_budget() {
        let queue: RequestQueue<u32> = RequestQueue::new(
            "test",
            QueueConfig::immediate()
                .with_max_retries(0)
                .with_max_rate_limit_retries(5),
        );
        let attempts = counter();

        let seen = Arc::clone(&attempts);
        let result = queue
            .enqueue(move || {
                let seen = Arc::clone(&seen);
                async move {
                    let n = seen.fetch_add(1, Ordering::SeqCst);
                    if n < 3 {
                        Err(AppError::RateLimitError("429".to_string()))
                    } else {
                        Ok(n)
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), 3);
        assert_eq!(attempts.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_sustained_rate_limit_is_bounded() {
        let queue: RequestQueue<()> = RequestQueue::new(
            "test",
            QueueConfig::immediate().with_max_rate_limit_retries(3),
        );
        let attempts = counter();

        let seen = Arc::clone(&attempts);
        let result = queue
            .enqueue(move || {
                let seen = Arc::clone(&seen);
                async move {
                    seen.fetch_add(1, Ordering::SeqCst);
                    Err(AppError::RateLimitError("429".to_string()))
                }
            })
            .await;

        assert!(matches!(result, Err(AppError::RateLimitError(_))));
        assert_eq!(attempts.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_one_request_in_flight() {
        let queue: RequestQueue<()> = RequestQueue::new("test", QueueConfig::immediate());
        let in_flight = counter();
        let max_seen = counter();

        let calls = (0..5).map(|_| {
            let in_flight = Arc::clone(&in_flight);
            let max_seen = Arc::clone(&max_seen);
            queue.enqueue(move || {
                let in_flight = Arc::clone(&in_flight);
                let max_seen = Arc::clone(&max_seen);
                async move {
                    let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                    max_seen.fetch_max(now, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(5)).await;
                    in_flight.fetch_sub(1, Ordering::SeqCst);
                    Ok(())
                }
            })
        });

        let results = futures::future::join_all(calls).await;
        assert!(results.iter().all(|r| r.is_ok()));
        assert_eq!(max_seen.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retry_moves_task_behind_younger_ones() {
        let queue: RequestQueue<&'static str> =
            RequestQueue::new("test", QueueConfig::immediate().with_max_retries(1));
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));
        let first_failed = Arc::new(AtomicBool::new(false));

        let flaky = {
            let order = Arc::clone(&order);
            let first_failed = Arc::clone(&first_failed);
            queue.enqueue(move || {
                let order = Arc::clone(&order);
                let first_failed = Arc::clone(&first_failed);
                async move {
                    order.lock().unwrap().push("flaky");
                    if !first_failed.swap(true, Ordering::SeqCst) {
                        tokio::time::sleep(Duration::from_millis(10)).await;
                        Err(AppError::ExternalServiceError("reset".to_string()))
                    } else {
                        Ok("flaky")
                    }
                }
            })
        };
        let steady = {
            let order = Arc::clone(&order);
            queue.enqueue(move || {
                let order = Arc::clone(&order);
                async move {
                    order.lock().unwrap().push("steady");
                    Ok("steady")
                }
            })
        };

        let (a, b) = tokio::join!(flaky, steady);
        assert_eq!(a.unwrap(), "flaky");
        assert_eq!(b.unwrap(), "steady");
        assert_eq!(*order.lock().unwrap(), vec!["flaky", "steady", "flaky"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_inter_request_delay_paces_requests() {
        let config = QueueConfig {
            inter_request_delay: Duration::from_millis(1000),
            ..QueueConfig::immediate()
        };
        let queue: RequestQueue<tokio::time::Instant> = RequestQueue::new("test", config);

        let first = queue.enqueue(|| async { Ok(tokio::time::Instant::now()) });
        let second = queue.enqueue(|| async { Ok(tokio::time::Instant::now()) });
        let (a, b) = tokio::join!(first, second);

        let gap = b.unwrap() - a.unwrap();
        assert!(gap >= Duration::from_millis(1000));
    }
}
