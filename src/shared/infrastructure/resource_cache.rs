// Single-flight cache for one remote resource.
//
// Purpose
// - Memoize a fetched collection until an explicit reload.
//
// Responsibilities
// - Coalesce concurrent requests into one in-flight fetch; waiters share its outcome.
// - Remember failures as well as values; nothing retries until reload().
// - Run the fetch on its own task so a dropped caller cannot cancel it.
// - A fetch that panics is recorded as FetchAborted like any other failure.
// - A fetch started before reload() still answers its waiters but leaves the reset state alone.

use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, watch};

type Outcome<T, E> = Result<Arc<T>, E>;

/// The fetch task went away without reporting an outcome.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("fetch of {0} ended without a result")]
pub struct FetchAborted(pub &'static str);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Empty,
    Pending,
    Ready,
    Failed,
}

enum Slot<T, E> {
    Empty,
    Pending(watch::Receiver<Option<Outcome<T, E>>>),
    Ready(Arc<T>),
    Failed(E),
}

struct Inner<T, E> {
    slot: Slot<T, E>,
    generation: u64,
}

pub struct ResourceCache<T, E> {
    name: &'static str,
    inner: Arc<Mutex<Inner<T, E>>>,
}

impl<T, E> ResourceCache<T, E>
where
    T: Send + Sync + 'static,
    E: Clone + Display + From<FetchAborted> + Send + Sync + 'static,
{
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: Arc::new(Mutex::new(Inner {
                slot: Slot::Empty,
                generation: 0,
            })),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub async fn status(&self) -> CacheStatus {
        match self.inner.lock().await.slot {
            Slot::Empty => CacheStatus::Empty,
            Slot::Pending(_) => CacheStatus::Pending,
            Slot::Ready(_) => CacheStatus::Ready,
            Slot::Failed(_) => CacheStatus::Failed,
        }
    }

    pub async fn reload(&self) {
        let mut inner = self.inner.lock().await;
        inner.generation += 1;
        inner.slot = Slot::Empty;
        tracing::debug!(resource = self.name, "cache reset");
    }

    pub async fn get_or_fetch<F, Fut>(&self, fetch: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        let mut receiver = {
            let mut inner = self.inner.lock().await;
            match &inner.slot {
                Slot::Ready(value) => return Ok(Arc::clone(value)),
                Slot::Failed(error) => return Err(error.clone()),
                Slot::Pending(receiver) => receiver.clone(),
                Slot::Empty => {
                    let (sender, receiver) = watch::channel(None);
                    inner.slot = Slot::Pending(receiver.clone());
                    self.spawn_fetch(fetch(), sender, inner.generation);
                    receiver
                }
            }
        };

        let outcome = receiver
            .wait_for(Option::is_some)
            .await
            .map_err(|_| E::from(FetchAborted(self.name)))?
            .clone();
        outcome.unwrap_or_else(|| Err(E::from(FetchAborted(self.name))))
    }

    fn spawn_fetch<Fut>(
        &self,
        fetch: Fut,
        sender: watch::Sender<Option<Outcome<T, E>>>,
        generation: u64,
    ) where
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        let name = self.name;
        tracing::debug!(resource = name, "fetch started");
        tokio::spawn(async move {
            let outcome = match tokio::spawn(fetch).await {
                Ok(result) => result.map(Arc::new),
                Err(join_error) => {
                    tracing::error!(resource = name, %join_error, "fetch task died");
                    Err(E::from(FetchAborted(name)))
                }
            };
            if let Err(error) = &outcome {
                tracing::warn!(resource = name, %error, "fetch failed");
            }
            {
                let mut guard = inner.lock().await;
                if guard.generation == generation {
                    guard.slot = match &outcome {
                        Ok(value) => Slot::Ready(Arc::clone(value)),
                        Err(error) => Slot::Failed(error.clone()),
                    };
                } else {
                    tracing::debug!(
                        resource = name,
                        "dropping result of a fetch started before reload"
                    );
                }
            }
            sender.send_replace(Some(outcome));
        });
    }
}

#[cfg(test)]
mod resource_cache_tests {
    use super::*;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    enum TestError {
        #[error("offline")]
        Offline,
        #[error(transparent)]
        Aborted(#[from] FetchAborted),
    }

    type Cache = ResourceCache<Vec<u32>, TestError>;

    fn counted(
        calls: &Arc<AtomicUsize>,
        result: Result<Vec<u32>, TestError>,
        delay_ms: u64,
    ) -> impl Future<Output = Result<Vec<u32>, TestError>> + Send + 'static {
        let calls = Arc::clone(calls);
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            result
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fetch_once_and_serve_the_cached_value() {
        let cache = Cache::new("vups");
        let calls = Arc::new(AtomicUsize::new(0));

        let first = cache.get_or_fetch(|| counted(&calls, Ok(vec![1, 2]), 0)).await.unwrap();
        let second = cache.get_or_fetch(|| counted(&calls, Ok(vec![9]), 0)).await.unwrap();

        assert_eq!(*first, vec![1, 2]);
        assert_eq!(*second, vec![1, 2]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.status().await, CacheStatus::Ready);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_coalesce_concurrent_requests() {
        let cache = Arc::new(Cache::new("live_tags"));
        let calls = Arc::new(AtomicUsize::new(0));

        let (a, b, c) = tokio::join!(
            cache.get_or_fetch(|| counted(&calls, Ok(vec![1]), 20)),
            cache.get_or_fetch(|| counted(&calls, Ok(vec![2]), 20)),
            cache.get_or_fetch(|| counted(&calls, Ok(vec![3]), 20)),
        );

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(*a.unwrap(), vec![1]);
        assert_eq!(*b.unwrap(), vec![1]);
        assert_eq!(*c.unwrap(), vec![1]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_remember_failures_until_reload() {
        let cache = Cache::new("vup_meta");
        let calls = Arc::new(AtomicUsize::new(0));

        let failed = cache.get_or_fetch(|| counted(&calls, Err(TestError::Offline), 0)).await;
        let still_failed = cache.get_or_fetch(|| counted(&calls, Ok(vec![1]), 0)).await;

        assert_eq!(failed, Err(TestError::Offline));
        assert_eq!(still_failed, Err(TestError::Offline));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.status().await, CacheStatus::Failed);

        cache.reload().await;
        assert_eq!(cache.status().await, CacheStatus::Empty);
        let recovered = cache.get_or_fetch(|| counted(&calls, Ok(vec![1]), 0)).await;

        assert_eq!(recovered.map(|v| v.to_vec()), Ok(vec![1]));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_let_a_stale_fetch_overwrite_a_reload() {
        let cache = Arc::new(Cache::new("live_tag_meta"));
        let calls = Arc::new(AtomicUsize::new(0));

        let slow = {
            let cache = Arc::clone(&cache);
            let calls = Arc::clone(&calls);
            tokio::spawn(async move {
                cache.get_or_fetch(|| counted(&calls, Ok(vec![1]), 50)).await
            })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(cache.status().await, CacheStatus::Pending);

        cache.reload().await;
        let fresh = cache.get_or_fetch(|| counted(&calls, Ok(vec![2]), 0)).await.unwrap();
        let stale = slow.await.unwrap().unwrap();

        assert_eq!(*fresh, vec![2]);
        assert_eq!(*stale, vec![1]);
        let cached = cache.get_or_fetch(|| counted(&calls, Ok(vec![3]), 0)).await.unwrap();
        assert_eq!(*cached, vec![2]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    fn exploding() -> impl Future<Output = Result<Vec<u32>, TestError>> + Send + 'static {
        async {
            let explode = true;
            if explode {
                panic!("fetch exploded");
            }
            Ok(vec![])
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_record_a_panicking_fetch_as_aborted() {
        let cache = Cache::new("vups");
        let calls = Arc::new(AtomicUsize::new(0));

        let failed = cache.get_or_fetch(exploding).await;
        let still_failed = cache.get_or_fetch(|| counted(&calls, Ok(vec![1]), 0)).await;

        assert_eq!(failed, Err(TestError::Aborted(FetchAborted("vups"))));
        assert_eq!(still_failed, Err(TestError::Aborted(FetchAborted("vups"))));
        assert_eq!(cache.status().await, CacheStatus::Failed);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        cache.reload().await;
        let recovered = cache.get_or_fetch(|| counted(&calls, Ok(vec![1]), 0)).await;
        assert_eq!(recovered.map(|v| v.to_vec()), Ok(vec![1]));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_sibling_caches_independent() {
        let vups = Cache::new("vups");
        let tags = Cache::new("live_tags");
        let calls = Arc::new(AtomicUsize::new(0));

        let failed = vups.get_or_fetch(|| counted(&calls, Err(TestError::Offline), 0)).await;
        let ok = tags.get_or_fetch(|| counted(&calls, Ok(vec![4]), 0)).await;

        assert!(failed.is_err());
        assert_eq!(*ok.unwrap(), vec![4]);
        assert_eq!(tags.name(), "live_tags");
    }
}
