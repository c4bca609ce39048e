//! Execution context configuration

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Configuration and state for execution.
///
/// This is held by an [`Executor`](crate::Executor) for the lifetime of a
/// run and controls tracing and interruption. Cloning a context shares its
/// interrupt flag, so a clone kept by another thread can stop the run.
#[derive(Debug, Clone, Default)]
pub struct EvalContext {
    /// Interrupt flag - set to true to abort execution
    pub interrupt: Arc<AtomicBool>,

    /// Whether to emit a trace event for every executed statement
    pub trace: bool,
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context that traces every executed statement.
    pub fn with_trace() -> Self {
        Self {
            trace: true,
            ..Default::default()
        }
    }

    /// Check if execution has been interrupted.
    pub fn is_interrupted(&self) -> bool {
        self.interrupt.load(Ordering::Relaxed)
    }

    /// Request interruption of execution.
    ///
    /// The running executor notices the flag before its next statement or
    /// loop predicate and fails with [`EvalError::Interrupted`](crate::EvalError::Interrupted).
    pub fn interrupt(&self) {
        self.interrupt.store(true, Ordering::Relaxed);
    }

    /// Reset the interrupt flag.
    pub fn reset_interrupt(&self) {
        self.interrupt.store(false, Ordering::Relaxed);
    }
}
