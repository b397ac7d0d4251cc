//! Cooperative cancellation for in-flight requests.
//!
//! An [`AbortController`] owns the right to abort; any number of cloned
//! [`AbortSignal`]s observe it. Aborting is one-shot: listeners run once, and
//! listeners registered after the fact run immediately.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::future::Future;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::{self, Aborted, Either};

type Listener = Box<dyn FnOnce()>;

#[derive(Default)]
struct SignalState {
    aborted: Cell<bool>,
    listeners: RefCell<Vec<Listener>>,
}

/// Read side of an [`AbortController`].
#[derive(Clone, Default)]
pub struct AbortSignal {
    state: Rc<SignalState>,
}

impl AbortSignal {
    pub fn is_aborted(&self) -> bool {
        self.state.aborted.get()
    }

    /// Registers `listener` to run when the signal is aborted.
    ///
    /// Runs `listener` right away if the signal has already been aborted.
    pub fn on_abort(&self, listener: impl FnOnce() + 'static) {
        if self.is_aborted() {
            listener();
            return;
        }
        self.state.listeners.borrow_mut().push(Box::new(listener));
    }

    /// Resolves once the signal is aborted.
    pub async fn aborted(&self) {
        if self.is_aborted() {
            return;
        }
        let (tx, rx) = oneshot::channel::<()>();
        self.on_abort(move || {
            let _ = tx.send(());
        });
        let _ = rx.await;
    }

    /// Drives `future` to completion unless the signal aborts first.
    ///
    /// The abort wins even when `future` never looks at the signal itself.
    pub async fn guard<F>(&self, future: F) -> Result<F::Output, Aborted>
    where
        F: Future,
    {
        if self.is_aborted() {
            return Err(Aborted);
        }
        let work = std::pin::pin!(future);
        let aborted = std::pin::pin!(self.aborted());
        match future::select(work, aborted).await {
            Either::Left((output, _)) => Ok(output),
            Either::Right(((), _)) => Err(Aborted),
        }
    }

    fn fire(&self) {
        if self.state.aborted.replace(true) {
            return;
        }
        // Listeners may register more listeners, so release the borrow first.
        let listeners = std::mem::take(&mut *self.state.listeners.borrow_mut());
        for listener in listeners {
            listener();
        }
    }
}

impl fmt::Debug for AbortSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AbortSignal")
            .field("aborted", &self.is_aborted())
            .field("listeners", &self.state.listeners.borrow().len())
            .finish()
    }
}

/// Write side of a cancellation token.
#[derive(Debug, Default)]
pub struct AbortController {
    signal: AbortSignal,
}

impl AbortController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signal(&self) -> AbortSignal {
        self.signal.clone()
    }

    /// Aborts the signal. Calling this more than once has no further effect.
    pub fn abort(&self) {
        self.signal.fire();
    }
}
