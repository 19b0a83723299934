//! Run context: one cancel token and an optional deadline shared by every
//! request of a run.
//!
//! The CLI creates a context with the overall timeout and sets the token on
//! Ctrl-C; the fetcher polls it from curl's progress callback and aborts the
//! in-flight transfer.

use crate::fetch::FetchError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct RunContext {
    cancel: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl RunContext {
    /// Context with no deadline and a fresh cancel token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context that expires `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            cancel: Arc::new(AtomicBool::new(false)),
            deadline: Some(Instant::now() + timeout),
        }
    }

    /// Shared token; storing `true` cancels every request bound to this context.
    pub fn cancel_token(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline (zero once it has passed), or `None` if unbounded.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }

    /// Errors if the context was cancelled or its deadline has passed.
    pub fn check(&self) -> Result<(), FetchError> {
        if self.is_cancelled() {
            return Err(FetchError::Cancelled);
        }
        if self.remaining().is_some_and(|r| r.is_zero()) {
            return Err(FetchError::DeadlineExceeded);
        }
        Ok(())
    }
}
