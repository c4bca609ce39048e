//! Traversal dispatch over the node families
//!
//! Every operation over the tree (evaluation, execution, printing) is a
//! visitor: one method per node variant, with an operation-chosen `Output`.
//! The traits have no default methods and `accept` matches exhaustively,
//! so adding a node variant is a compile error until every operation
//! handles it. Adding an operation never touches the node definitions.

use crate::ast::{Assign, Block, Branch, Expr, Id, Int, Loop, Operator, Stmt};

/// An operation over statement nodes.
pub trait StmtVisitor {
    /// What the operation produces for each statement.
    type Output;

    /// `target = value;`
    fn visit_assign(&mut self, assign: &Assign) -> Self::Output;

    /// `{ ... }`
    fn visit_block(&mut self, block: &Block) -> Self::Output;

    /// `if (..) .. else ..`
    fn visit_branch(&mut self, branch: &Branch) -> Self::Output;

    /// `while (..) ..`
    fn visit_loop(&mut self, lp: &Loop) -> Self::Output;
}

/// An operation over expression nodes.
pub trait ExprVisitor {
    /// What the operation produces for each expression.
    type Output;

    /// Variable reference.
    fn visit_id(&mut self, id: &Id) -> Self::Output;

    /// Integer literal.
    fn visit_number(&mut self, value: Int) -> Self::Output;

    /// Binary arithmetic.
    fn visit_operator(&mut self, op: &Operator) -> Self::Output;
}

impl Stmt {
    /// Dispatch to the visitor method for this statement's variant.
    pub fn accept<V: StmtVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Stmt::Assign(assign) => visitor.visit_assign(assign),
            Stmt::Block(block) => visitor.visit_block(block),
            Stmt::Branch(branch) => visitor.visit_branch(branch),
            Stmt::Loop(lp) => visitor.visit_loop(lp),
        }
    }
}

impl Expr {
    /// Dispatch to the visitor method for this expression's variant.
    pub fn accept<V: ExprVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Id(id) => visitor.visit_id(id),
            Expr::Number(value) => visitor.visit_number(*value),
            Expr::Operator(op) => visitor.visit_operator(op),
        }
    }
}

/// A borrowed node of either family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRef<'a> {
    /// A statement
    Stmt(&'a Stmt),
    /// An expression
    Expr(&'a Expr),
}

impl NodeRef<'_> {
    /// Dispatch to an operation that handles both node families.
    pub fn accept<V, O>(self, visitor: &mut V) -> O
    where
        V: StmtVisitor<Output = O> + ExprVisitor<Output = O> + ?Sized,
    {
        match self {
            NodeRef::Stmt(stmt) => stmt.accept(visitor),
            NodeRef::Expr(expr) => expr.accept(visitor),
        }
    }
}

impl<'a> From<&'a Stmt> for NodeRef<'a> {
    fn from(stmt: &'a Stmt) -> Self {
        NodeRef::Stmt(stmt)
    }
}

impl<'a> From<&'a Expr> for NodeRef<'a> {
    fn from(expr: &'a Expr) -> Self {
        NodeRef::Expr(expr)
    }
}
