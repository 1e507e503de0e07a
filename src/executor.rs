//! Fire-and-forget work dispatch.
//!
//! [`OneShotExecutor`] runs every unit of work on a brand-new, detached OS thread and
//! returns immediately. There is no pool, no queue, no bound on concurrent threads,
//! no cancellation and no join. Callers that need any of those use a managed
//! executor such as [`RuntimeExecutor`] instead, and can tell the two apart with
//! [`OneShotExecutor::is_a`].
//!
//! # Failure semantics
//!
//! A panic inside dispatched work is not caught. It unwinds the one-shot thread,
//! is reported by the process panic hook, and never reaches the caller of
//! [`execute`](Executor::execute).
//!
//! # Examples
//!
//! ```
//! use fluent_http_client::executor::OneShotExecutor;
//! use std::sync::mpsc;
//!
//! let executor = OneShotExecutor::instance();
//! assert!(OneShotExecutor::is_a(executor));
//!
//! let (tx, rx) = mpsc::channel();
//! executor.spawn(move || tx.send(40 + 2).unwrap());
//! assert_eq!(rx.recv().unwrap(), 42);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

/// A unit of work accepted by an [`Executor`].
pub type Work = Box<dyn FnOnce() + Send + 'static>;

/// Something that runs work outside the caller's call stack.
pub trait Executor: Send + Sync {
    /// Schedule `work` and return without waiting for it.
    fn execute(&self, work: Work);
}

/// Process-wide executor that starts one detached thread per unit of work.
///
/// Obtain it with [`instance`](OneShotExecutor::instance); it cannot be constructed
/// elsewhere and is never torn down.
#[derive(Debug)]
pub struct OneShotExecutor {
    dispatched: AtomicU64,
}

static INSTANCE: OneShotExecutor = OneShotExecutor {
    dispatched: AtomicU64::new(0),
};

impl OneShotExecutor {
    /// The single process-wide instance
    pub fn instance() -> &'static OneShotExecutor {
        &INSTANCE
    }

    /// Whether `executor` is the process-wide one-shot executor.
    ///
    /// Identity is by address, so wrappers around the instance do not count.
    pub fn is_a(executor: &dyn Executor) -> bool {
        std::ptr::addr_eq(executor, Self::instance())
    }

    /// Number of units handed to [`execute`](Executor::execute) so far
    pub fn dispatched(&self) -> u64 {
        self.dispatched.load(Ordering::Relaxed)
    }

    /// Convenience wrapper boxing a closure for [`execute`](Executor::execute).
    pub fn spawn<F>(&self, work: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.execute(Box::new(work));
    }
}

impl Executor for OneShotExecutor {
    fn execute(&self, work: Work) {
        let n = self.dispatched.fetch_add(1, Ordering::Relaxed) + 1;
        let name = format!("one-shot-{}", n);

        // JoinHandle dropped on purpose: the thread is detached.
        if let Err(e) = thread::Builder::new().name(name.clone()).spawn(work) {
            tracing::error!(thread = %name, "failed to start one-shot thread: {}", e);
        }
    }
}

/// Managed executor running work on a tokio runtime's blocking pool.
#[derive(Debug, Clone)]
pub struct RuntimeExecutor {
    handle: tokio::runtime::Handle,
}

impl RuntimeExecutor {
    /// Wrap a runtime handle
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        RuntimeExecutor { handle }
    }

    /// Wrap the runtime the caller is running on, if any.
    pub fn try_current() -> Option<Self> {
        tokio::runtime::Handle::try_current().ok().map(Self::new)
    }
}

impl Executor for RuntimeExecutor {
    fn execute(&self, work: Work) {
        drop(self.handle.spawn_blocking(work));
    }
}
