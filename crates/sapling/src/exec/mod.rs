//! Statement execution

pub mod assign;
pub mod block;
pub mod branch;
pub mod loops;

use crate::ast::{Assign, Block, Branch, Expr, Int, Loop, Stmt};
use crate::eval::Evaluator;
use crate::visit::StmtVisitor;
use crate::{EvalContext, EvalError, Variables};

/// Runs statements against a variable mapping it owns.
///
/// The mapping persists across every statement executed by the same
/// executor. A failure aborts the current statement and everything that
/// contains it; assignments completed before the failure stay in the
/// mapping and can be read with [`variables`](Executor::variables).
///
/// # Example
///
/// ```
/// use sapling::build::*;
/// use sapling::{EvalError, Executor};
///
/// let mut exec = Executor::new();
/// let program = block([
///     assign("a", number(1)),
///     assign("b", div(id("a"), number(0))),
/// ]);
///
/// assert_eq!(exec.execute(&program), Err(EvalError::DivisionByZero { dividend: 1 }));
/// assert_eq!(exec.variables().get("a"), Some(1));
/// assert_eq!(exec.variables().get("b"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Executor {
    vars: Variables,
    ctx: EvalContext,
}

impl Executor {
    /// Create an executor with an empty mapping and default context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an executor with an empty mapping and the given context.
    pub fn with_context(ctx: EvalContext) -> Self {
        Self {
            vars: Variables::new(),
            ctx,
        }
    }

    /// Create an executor that starts from an existing mapping.
    pub fn with_variables(vars: Variables) -> Self {
        Self {
            vars,
            ctx: EvalContext::default(),
        }
    }

    /// Execute a statement.
    ///
    /// # Errors
    ///
    /// Returns the first `DivisionByZero` raised by any evaluated
    /// expression, or `Interrupted` if the context was interrupted.
    pub fn execute(&mut self, stmt: &Stmt) -> Result<(), EvalError> {
        // Check for interruption before each statement
        if self.ctx.is_interrupted() {
            return Err(EvalError::Interrupted);
        }

        if self.ctx.trace {
            tracing::trace!(kind = stmt.kind_name(), "execute");
        }

        stmt.accept(self)
    }

    /// Evaluate an expression against the current mapping.
    pub fn eval(&self, expr: &Expr) -> Result<Int, EvalError> {
        Evaluator::new(&self.vars).eval(expr)
    }

    /// The current mapping.
    pub fn variables(&self) -> &Variables {
        &self.vars
    }

    /// The execution context.
    pub fn context(&self) -> &EvalContext {
        &self.ctx
    }

    /// Consume the executor, returning its mapping.
    pub fn into_variables(self) -> Variables {
        self.vars
    }

    /// Evaluate a predicate to a truth value, checking for interruption first.
    pub(crate) fn check_predicate(&self, predicate: &Expr) -> Result<bool, EvalError> {
        if self.ctx.is_interrupted() {
            return Err(EvalError::Interrupted);
        }
        Ok(self.eval(predicate)? != 0)
    }
}

impl StmtVisitor for Executor {
    type Output = Result<(), EvalError>;

    fn visit_assign(&mut self, assign: &Assign) -> Self::Output {
        assign::exec_assign(assign, self)
    }

    fn visit_block(&mut self, block: &Block) -> Self::Output {
        block::exec_block(block, self)
    }

    fn visit_branch(&mut self, branch: &Branch) -> Self::Output {
        branch::exec_branch(branch, self)
    }

    fn visit_loop(&mut self, lp: &Loop) -> Self::Output {
        loops::exec_loop(lp, self)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Run Operation
// ═══════════════════════════════════════════════════════════════════════

/// Execute `program` against a fresh mapping and return the final mapping.
///
/// Use an [`Executor`] directly to inspect the mapping after a failure.
pub fn run(program: &Stmt) -> Result<Variables, EvalError> {
    run_with(program, Variables::new())
}

/// Execute `program` against a caller-supplied mapping.
#[tracing::instrument(level = "debug", skip_all, fields(kind = program.kind_name()))]
pub fn run_with(program: &Stmt, vars: Variables) -> Result<Variables, EvalError> {
    let mut exec = Executor::with_variables(vars);
    match exec.execute(program) {
        Ok(()) => {
            tracing::debug!(bindings = exec.variables().len(), "run finished");
            Ok(exec.into_variables())
        }
        Err(err) => {
            tracing::debug!(error = %err, "run failed");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::*;

    #[test]
    fn test_run_starts_empty() {
        let vars = run(&block([])).unwrap();
        assert!(vars.is_empty());
    }

    #[test]
    fn test_run_with_existing_mapping() {
        let vars: Variables = [("n", 4)].into_iter().collect();
        let result = run_with(&assign("m", mul(id("n"), id("n"))), vars).unwrap();
        assert_eq!(result.get("n"), Some(4));
        assert_eq!(result.get("m"), Some(16));
    }

    #[test]
    fn test_mapping_persists_across_statements() {
        let mut exec = Executor::new();
        exec.execute(&assign("x", number(1))).unwrap();
        exec.execute(&assign("x", add(id("x"), number(1)))).unwrap();
        assert_eq!(exec.variables().get("x"), Some(2));
    }

    #[test]
    fn test_interrupted_before_start() {
        let ctx = EvalContext::new();
        ctx.interrupt();
        let mut exec = Executor::with_context(ctx);
        assert_eq!(
            exec.execute(&assign("x", number(1))),
            Err(EvalError::Interrupted)
        );
        assert!(exec.variables().is_empty());
    }
}
