//! Loop execution
//!
//! A loop is a small state machine:
//!
//! ```text
//! CheckPredicate --nonzero--> RunBody --(always)--> CheckPredicate
//! CheckPredicate --zero-----> Done
//! ```
//!
//! The predicate is evaluated afresh before every iteration, including the
//! first, so a loop whose predicate starts at zero never runs its body.

use crate::ast::Loop;
use crate::EvalError;

use super::Executor;

/// States of a running loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Evaluate the predicate to decide whether to iterate.
    CheckPredicate,
    /// Execute the body once.
    RunBody,
    /// The predicate evaluated to zero.
    Done,
}

/// Execute a while-loop until its predicate evaluates to zero.
///
/// There is no iteration limit: a predicate that never reaches zero loops
/// until the context is interrupted.
pub fn exec_loop(lp: &Loop, exec: &mut Executor) -> Result<(), EvalError> {
    let mut state = LoopState::CheckPredicate;
    let mut iterations: u64 = 0;

    while state != LoopState::Done {
        state = match state {
            LoopState::CheckPredicate => {
                if exec.check_predicate(lp.predicate())? {
                    LoopState::RunBody
                } else {
                    LoopState::Done
                }
            }
            LoopState::RunBody => {
                exec.execute(lp.body())?;
                iterations += 1;
                LoopState::CheckPredicate
            }
            LoopState::Done => LoopState::Done,
        };
    }

    tracing::debug!(iterations, "loop finished");
    Ok(())
}
