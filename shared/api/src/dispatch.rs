use crate::error::{Error, Result};
use crossbeam::channel::{self, Receiver, RecvTimeoutError};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

/// Eventual result of an action running on the worker pool.
///
/// The result is delivered once: after `wait`, `wait_timeout` or `try_get`
/// has returned it, further calls report [`Error::TaskAborted`] or `None`.
/// Dropping the handle does not cancel the action.
#[must_use = "actions run regardless, but their result is only visible through the handle"]
pub struct ActionHandle<T> {
    rx: Receiver<T>,
}

impl<T> ActionHandle<T> {
    /// Blocks until the action finishes.
    pub fn wait(self) -> Result<T> {
        self.rx.recv().map_err(|_| Error::TaskAborted)
    }

    pub fn wait_timeout(&self, timeout: Duration) -> Result<T> {
        match self.rx.recv_timeout(timeout) {
            Ok(v) => Ok(v),
            Err(RecvTimeoutError::Timeout) => Err(Error::Timeout(timeout)),
            Err(RecvTimeoutError::Disconnected) => Err(Error::TaskAborted),
        }
    }

    pub fn try_get(&self) -> Option<T> {
        self.rx.try_recv().ok()
    }

    pub fn is_ready(&self) -> bool {
        !self.rx.is_empty()
    }
}

/// Runs actions on a dedicated pool of named worker threads.
#[derive(Clone)]
pub struct Dispatcher {
    pool: Arc<rayon::ThreadPool>,
}

impl Dispatcher {
    pub fn new(num_threads: usize, name: &str) -> Result<Self> {
        let prefix = name.to_string();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(move |i| format!("{prefix}-{i}"))
            .build()?;
        log::debug!(
            "started {} action workers for {name}",
            pool.current_num_threads()
        );
        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Queues `f` and returns a handle to its result without blocking.
    ///
    /// A panic inside `f` is contained on the worker; the handle then reports
    /// [`Error::TaskAborted`].
    pub fn dispatch<T, F>(&self, f: F) -> ActionHandle<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let (tx, rx) = channel::bounded(1);
        self.pool.spawn(move || match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(result) => {
                let _ = tx.send(result);
            }
            Err(_) => log::error!("action task panicked"),
        });
        ActionHandle { rx }
    }
}
