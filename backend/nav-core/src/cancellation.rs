//! Cancellation of the single in-flight request of a flow.
//!
//! Starting a request installs a fresh oneshot channel and fires the previous
//! one, so at most one request per flow is ever live. The request side races
//! its [`CancelSignal`] against the network future with `tokio::select!`;
//! losing the race drops the future, which aborts the HTTP call and releases
//! its timeout timer.

use crate::generation::GenerationToken;

use std::sync::{Mutex, PoisonError};

use log::trace;
use tokio::sync::oneshot;

/// Resolves once the owning request should stop.
pub struct CancelSignal {
    receiver: oneshot::Receiver<()>,
}

impl CancelSignal {
    /// Wait for cancellation.
    ///
    /// A dropped sender also counts: it only happens when a newer request
    /// replaced this one or the owner itself went away.
    pub async fn cancelled(self) {
        let _ = self.receiver.await;
    }
}

/// Slot holding the cancel handle of the live request.
#[derive(Debug, Default)]
pub struct InFlight {
    slot: Mutex<Option<(GenerationToken, oneshot::Sender<()>)>>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new request, cancelling whatever was in flight before it.
    pub fn begin(&self, token: GenerationToken) -> CancelSignal {
        let (sender, receiver) = oneshot::channel();

        let previous = self
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace((token, sender));

        if let Some((previous_token, previous_sender)) = previous {
            trace!("Request {token} supersedes in-flight request {previous_token}");
            let _ = previous_sender.send(());
        }

        CancelSignal { receiver }
    }

    /// Cancel the live request, if any. Returns true if one was signalled.
    pub fn cancel(&self) -> bool {
        let taken = self.slot.lock().unwrap_or_else(PoisonError::into_inner).take();

        match taken {
            Some((token, sender)) => {
                trace!("Cancelling in-flight request {token}");
                sender.send(()).is_ok()
            }
            None => false,
        }
    }

    /// Clear the slot once `token`'s request has finished on its own.
    ///
    /// A newer request's handle is left untouched.
    pub fn finish(&self, token: GenerationToken) {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if matches!(slot.as_ref(), Some((live, _)) if *live == token) {
            slot.take();
        }
    }
}
