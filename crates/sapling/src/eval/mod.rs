//! Expression evaluation

pub mod binary;

use crate::ast::{Expr, Id, Int, Operator};
use crate::visit::ExprVisitor;
use crate::{EvalError, Variables};

/// Reduces expressions to integers against a variable mapping.
///
/// The evaluator only reads the mapping. Unbound names evaluate to `0`.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'env> {
    vars: &'env Variables,
}

impl<'env> Evaluator<'env> {
    /// Create an evaluator reading from `vars`.
    pub fn new(vars: &'env Variables) -> Self {
        Self { vars }
    }

    /// Evaluate an expression.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` if any division in the tree has a zero
    /// right operand.
    pub fn eval(&mut self, expr: &Expr) -> Result<Int, EvalError> {
        expr.accept(self)
    }
}

impl ExprVisitor for Evaluator<'_> {
    type Output = Result<Int, EvalError>;

    fn visit_id(&mut self, id: &Id) -> Self::Output {
        Ok(self.vars.lookup(id.name()))
    }

    fn visit_number(&mut self, value: Int) -> Self::Output {
        Ok(value)
    }

    fn visit_operator(&mut self, op: &Operator) -> Self::Output {
        // Both operands are always evaluated, left first
        let left = op.left().accept(self)?;
        let right = op.right().accept(self)?;

        binary::eval_binary(op.kind(), left, right)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate an expression (convenience wrapper).
pub fn eval_expr(expr: &Expr, vars: &Variables) -> Result<Int, EvalError> {
    Evaluator::new(vars).eval(expr)
}
