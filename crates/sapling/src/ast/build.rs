//! Builder functions for assembling programs
//!
//! One constructor per node variant. Arguments accept anything convertible
//! into the target node family, so names can be passed directly:
//!
//! ```
//! use sapling::build::*;
//!
//! // i = i - 1;
//! let stmt = assign("i", sub(id("i"), number(1)));
//! assert_eq!(stmt.to_string(), "i = (i - 1);\n");
//! ```

use super::{Assign, Block, Branch, Expr, Id, Int, Loop, Operator, OperatorKind, Stmt};

/// A variable reference.
pub fn id(name: impl Into<String>) -> Id {
    Id::new(name)
}

/// An integer literal.
pub fn number(value: Int) -> Expr {
    Expr::Number(value)
}

/// A binary operation of the given kind.
pub fn op(kind: OperatorKind, left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    Expr::Operator(Operator::new(kind, left.into(), right.into()))
}

/// `left + right`
pub fn add(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    op(OperatorKind::Add, left, right)
}

/// `left - right`
pub fn sub(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    op(OperatorKind::Subtract, left, right)
}

/// `left * right`
pub fn mul(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    op(OperatorKind::Multiply, left, right)
}

/// `left / right`
pub fn div(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    op(OperatorKind::Divide, left, right)
}

/// `target = value;`
pub fn assign(target: impl Into<Id>, value: impl Into<Expr>) -> Stmt {
    Stmt::Assign(Assign::new(target.into(), value.into()))
}

/// A sequence of statements; `block([])` is the no-op statement.
pub fn block(statements: impl IntoIterator<Item = Stmt>) -> Stmt {
    Stmt::Block(Block::new(statements.into_iter().collect()))
}

/// `if (predicate) then_branch else else_branch`
pub fn branch(predicate: impl Into<Expr>, then_branch: Stmt, else_branch: Stmt) -> Stmt {
    Stmt::Branch(Branch::new(predicate.into(), then_branch, else_branch))
}

/// `while (predicate != 0) body`
pub fn while_loop(predicate: impl Into<Expr>, body: Stmt) -> Stmt {
    Stmt::Loop(Loop::new(predicate.into(), body))
}
