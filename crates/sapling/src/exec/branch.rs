//! Branch execution

use crate::ast::Branch;
use crate::EvalError;

use super::Executor;

/// Execute exactly one arm of a branch.
///
/// A nonzero predicate selects the then branch, zero the else branch.
pub fn exec_branch(branch: &Branch, exec: &mut Executor) -> Result<(), EvalError> {
    if exec.check_predicate(branch.predicate())? {
        exec.execute(branch.then_branch())
    } else {
        exec.execute(branch.else_branch())
    }
}
