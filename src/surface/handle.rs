//! Completion handles for path transitions.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::channel::oneshot;
use futures::FutureExt;

/// How a transition ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The path reached its target
    Completed,
    /// A later transition on the same element took over, or the surface went away
    Interrupted,
}

/// Future resolving when a path transition finishes.
///
/// Handles may be awaited or dropped; dropping one has no effect on the
/// transition itself.
#[derive(Debug)]
#[must_use = "a handle does nothing unless polled; drop it explicitly to ignore completion"]
pub struct AnimationHandle {
    receiver: oneshot::Receiver<TransitionOutcome>,
    outcome: Option<TransitionOutcome>,
}

/// Sending half held by the surface while a transition runs
#[derive(Debug)]
pub(crate) struct Completion(oneshot::Sender<TransitionOutcome>);

impl Completion {
    pub(crate) fn resolve(self, outcome: TransitionOutcome) {
        // The handle may already be gone
        let _ = self.0.send(outcome);
    }
}

impl AnimationHandle {
    pub(crate) fn pending() -> (Completion, AnimationHandle) {
        let (sender, receiver) = oneshot::channel();
        (Completion(sender), AnimationHandle { receiver, outcome: None })
    }

    /// A handle that has already resolved as completed
    pub fn completed() -> Self {
        let (completion, handle) = Self::pending();
        completion.resolve(TransitionOutcome::Completed);
        handle
    }

    /// Check for an outcome without blocking.
    ///
    /// Returns `None` while the transition is still running. Once an
    /// outcome has been seen it is kept, so later checks and awaits agree.
    pub fn try_outcome(&mut self) -> Option<TransitionOutcome> {
        if self.outcome.is_none() {
            self.outcome = match self.receiver.try_recv() {
                Ok(outcome) => outcome,
                Err(oneshot::Canceled) => Some(TransitionOutcome::Interrupted),
            };
        }
        self.outcome
    }
}

impl Future for AnimationHandle {
    type Output = TransitionOutcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if let Some(outcome) = self.outcome {
            return Poll::Ready(outcome);
        }
        let outcome = match self.receiver.poll_unpin(cx) {
            Poll::Ready(Ok(outcome)) => outcome,
            Poll::Ready(Err(oneshot::Canceled)) => TransitionOutcome::Interrupted,
            Poll::Pending => return Poll::Pending,
        };
        self.outcome = Some(outcome);
        Poll::Ready(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_completed_handle_is_ready() {
        let handle = AnimationHandle::completed();
        assert_eq!(handle.now_or_never(), Some(TransitionOutcome::Completed));
    }

    #[test]
    fn test_pending_until_resolved() {
        let (completion, mut handle) = AnimationHandle::pending();
        assert_eq!(handle.try_outcome(), None);
        completion.resolve(TransitionOutcome::Completed);
        assert_eq!(block_on(handle), TransitionOutcome::Completed);
    }

    #[test]
    fn test_checked_outcome_is_kept_for_await() {
        let (completion, mut handle) = AnimationHandle::pending();
        completion.resolve(TransitionOutcome::Completed);
        assert_eq!(handle.try_outcome(), Some(TransitionOutcome::Completed));
        assert_eq!(handle.try_outcome(), Some(TransitionOutcome::Completed));
        assert_eq!(block_on(handle), TransitionOutcome::Completed);
    }

    #[test]
    fn test_dropped_completion_interrupts() {
        let (completion, handle) = AnimationHandle::pending();
        drop(completion);
        assert_eq!(block_on(handle), TransitionOutcome::Interrupted);
    }

    #[test]
    fn test_resolve_after_handle_dropped() {
        let (completion, handle) = AnimationHandle::pending();
        drop(handle);
        completion.resolve(TransitionOutcome::Completed);
    }
}
