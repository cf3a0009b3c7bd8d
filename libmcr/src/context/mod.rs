//! Cancellable execution context.
//!
//! A [`Context`] carries a cancellation signal and an optional deadline.
//! Registry operations run their whole HTTP exchange through
//! [`Context::run`], so cancelling the context or letting its deadline pass
//! drops the in-flight request and returns immediately.

use crate::error::{McrError, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;

#[cfg(test)]
mod tests;

/// Cancellation signal plus optional deadline for a single call or a group of calls.
///
/// Contexts form a tree: a child derived with [`with_cancel`](Context::with_cancel),
/// [`with_timeout`](Context::with_timeout) or [`with_deadline`](Context::with_deadline)
/// is cancelled when its parent is, but cancelling the child leaves the parent
/// untouched.
///
/// # Examples
///
/// ```
/// use libmcr::Context;
/// use std::time::Duration;
///
/// let root = Context::background();
/// let ctx = root.with_timeout(Duration::from_secs(10));
/// assert!(ctx.deadline().is_some());
///
/// ctx.cancel();
/// assert!(ctx.is_cancelled());
/// assert!(!root.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl Context {
    /// Returns a context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// Derives a child context that can be cancelled independently.
    pub fn with_cancel(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    /// Derives a child context that expires `timeout` from now.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Derives a child context that expires at `deadline`.
    ///
    /// A parent deadline that is earlier still applies.
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        let deadline = match self.deadline {
            Some(existing) if existing < deadline => existing,
            _ => deadline,
        };
        Self {
            token: self.token.child_token(),
            deadline: Some(deadline),
        }
    }

    /// Cancels this context and every context derived from it.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Returns true once this context or one of its ancestors was cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Returns the deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns the error a call made with this context would fail with right now.
    ///
    /// Cancellation takes precedence over an expired deadline.
    pub fn err(&self) -> Option<McrError> {
        if self.is_cancelled() {
            return Some(McrError::Canceled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(McrError::DeadlineExceeded),
            _ => None,
        }
    }

    /// Drives `exchange` to completion unless the context ends first.
    ///
    /// When the context is cancelled or its deadline passes, `exchange` is
    /// dropped (aborting any in-flight request) and the matching error is
    /// returned.
    pub async fn run<T, F>(&self, exchange: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        if let Some(err) = self.err() {
            return Err(err);
        }

        let expired = async {
            match self.deadline {
                Some(deadline) => sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(McrError::Canceled),
            _ = expired => Err(McrError::DeadlineExceeded),
            result = exchange => result,
        }
    }
}
