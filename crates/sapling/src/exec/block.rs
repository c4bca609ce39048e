//! Block execution

use crate::ast::Block;
use crate::EvalError;

use super::Executor;

/// Execute every statement of a block in order.
///
/// The first failure stops the block; later statements do not run.
pub fn exec_block(block: &Block, exec: &mut Executor) -> Result<(), EvalError> {
    for stmt in block.statements() {
        exec.execute(stmt)?;
    }
    Ok(())
}
