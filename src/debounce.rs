// ABOUTME: Cancellable delayed task runner where only the latest request may publish
// ABOUTME: Drives search-as-you-type and recomputation after rapid preference changes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

//! Each [`Debouncer::schedule`] call aborts the pending task and bumps a
//! generation counter. A task publishes its result only if its generation is
//! still current when the work finishes, so a slow response to an old query
//! can never overwrite the answer to a newer one.

use std::future::Future;
use std::mem;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::errors::{AppError, AppResult};

/// Trailing-edge debouncer bound to a tokio runtime
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    runtime: Handle,
    generation: Arc<AtomicU64>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    /// Create a debouncer that waits `delay` after the last request
    ///
    /// # Errors
    ///
    /// Returns an internal error when called outside a tokio runtime
    pub fn new(delay: Duration) -> AppResult<Self> {
        let runtime = Handle::try_current()
            .map_err(|e| AppError::internal(format!("Debouncer needs a tokio runtime: {e}")))?;
        Ok(Self {
            delay,
            runtime,
            generation: Arc::new(AtomicU64::new(0)),
            pending: Mutex::new(None),
        })
    }

    /// Configured delay
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `work` after the delay and hand its output to `publish`, unless a
    /// newer request arrives first
    ///
    /// Returns the generation assigned to this request.
    #[must_use]
    pub fn schedule<T, W, P>(&self, work: W, publish: P) -> u64
    where
        T: Send + 'static,
        W: Future<Output = T> + Send + 'static,
        P: FnOnce(T) + Send + 'static,
    {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let current = Arc::clone(&self.generation);
        let delay = self.delay;

        let task = self.runtime.spawn(async move {
            sleep(delay).await;
            let output = work.await;
            if current.load(Ordering::SeqCst) == generation {
                publish(output);
            } else {
                debug!(generation, "Discarding superseded result");
            }
        });

        self.replace_pending(Some(task));
        generation
    }

    /// Abort the pending request, if any
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.replace_pending(None);
    }

    /// Generation of the most recent request
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn replace_pending(&self, next: Option<JoinHandle<()>>) {
        match self.pending.lock() {
            Ok(mut pending) => {
                if let Some(previous) = mem::replace(&mut *pending, next) {
                    previous.abort();
                }
            }
            Err(poisoned) => {
                warn!("Debouncer state poisoned; resetting");
                let mut pending = poisoned.into_inner();
                if let Some(previous) = pending.take() {
                    previous.abort();
                }
                *pending = next;
            }
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.replace_pending(None);
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;
    use tokio::time::advance;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_only_latest_request_publishes() {
        let debouncer = Debouncer::new(Duration::from_millis(500)).unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel();

        for query in ["m", "ma", "mar"] {
            let tx = tx.clone();
            let _ = debouncer.schedule(async move { query }, move |q| {
                let _ = tx.send(q);
            });
            advance(Duration::from_millis(100)).await;
        }
        advance(Duration::from_millis(500)).await;

        assert_eq!(rx.recv().await, Some("mar"));
        assert!(rx.try_recv().is_err());
        assert_eq!(debouncer.generation(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending() {
        let debouncer = Debouncer::new(Duration::from_millis(50)).unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel::<u32>();
        let _ = debouncer.schedule(async { 1 }, move |v| {
            let _ = tx.send(v);
        });
        debouncer.cancel();
        advance(Duration::from_millis(100)).await;
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_requires_runtime() {
        assert!(Debouncer::new(Duration::from_millis(1)).is_err());
    }
}
