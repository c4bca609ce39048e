//! Pretty-printing of programs
//!
//! Rendering is purely structural: it shows the tree as written and never
//! looks at a variable mapping. Layout rules:
//!
//! - assignments print as `name = value;` on their own line
//! - blocks open and close with braces at the current indent and indent
//!   their statements by one level (four spaces)
//! - `if`/`else`/`while` headers sit on their own line; a block child
//!   renders at the header's indent, any other child one level deeper
//! - operators are always parenthesized, whatever the nesting

use std::fmt;

use crate::ast::{Assign, Block, Branch, Expr, Id, Int, Loop, Operator, OperatorKind, Stmt};
use crate::visit::{ExprVisitor, NodeRef, StmtVisitor};

/// One level of indentation.
const INDENT: &str = "    ";

/// Renders nodes into an accumulating text buffer.
#[derive(Debug, Clone, Default)]
pub struct Printer {
    out: String,
    indent: usize,
}

impl Printer {
    /// Create a printer with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a statement to the buffer.
    pub fn print_stmt(&mut self, stmt: &Stmt) {
        stmt.accept(self);
    }

    /// Append an expression to the buffer.
    pub fn print_expr(&mut self, expr: &Expr) {
        expr.accept(self);
    }

    /// The text rendered so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Consume the printer, returning the rendered text.
    pub fn finish(self) -> String {
        self.out
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.out.push_str(INDENT);
        }
    }

    /// Render the child of an `if`, `else` or `while` header.
    fn print_child(&mut self, stmt: &Stmt) {
        if matches!(stmt, Stmt::Block(_)) {
            stmt.accept(self);
        } else {
            self.indent += 1;
            stmt.accept(self);
            self.indent -= 1;
        }
    }
}

impl StmtVisitor for Printer {
    type Output = ();

    fn visit_assign(&mut self, assign: &Assign) {
        self.write_indent();
        self.out.push_str(assign.target().name());
        self.out.push_str(" = ");
        assign.value().accept(self);
        self.out.push_str(";\n");
    }

    fn visit_block(&mut self, block: &Block) {
        self.write_indent();
        self.out.push_str("{\n");
        self.indent += 1;
        for stmt in block.statements() {
            stmt.accept(self);
        }
        self.indent -= 1;
        self.write_indent();
        self.out.push_str("}\n");
    }

    fn visit_branch(&mut self, branch: &Branch) {
        self.write_indent();
        self.out.push_str("if (");
        branch.predicate().accept(self);
        self.out.push_str(")\n");
        self.print_child(branch.then_branch());

        self.write_indent();
        self.out.push_str("else\n");
        self.print_child(branch.else_branch());
    }

    fn visit_loop(&mut self, lp: &Loop) {
        self.write_indent();
        self.out.push_str("while (");
        lp.predicate().accept(self);
        self.out.push_str(" != 0)\n");
        self.print_child(lp.body());
    }
}

impl ExprVisitor for Printer {
    type Output = ();

    fn visit_id(&mut self, id: &Id) {
        self.out.push_str(id.name());
    }

    fn visit_number(&mut self, value: Int) {
        self.out.push_str(&value.to_string());
    }

    fn visit_operator(&mut self, op: &Operator) {
        self.out.push('(');
        op.left().accept(self);
        self.out.push(' ');
        self.out.push_str(op.kind().glyph());
        self.out.push(' ');
        op.right().accept(self);
        self.out.push(')');
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Render Operation
// ═══════════════════════════════════════════════════════════════════════

/// Render any node to text.
///
/// ```
/// use sapling::build::*;
/// use sapling::render;
///
/// let stmt = assign("x", mul(id("y"), number(2)));
/// assert_eq!(render(&stmt), "x = (y * 2);\n");
/// assert_eq!(render(&mul(id("y"), number(2))), "(y * 2)");
/// ```
pub fn render<'a>(node: impl Into<NodeRef<'a>>) -> String {
    let mut printer = Printer::new();
    node.into().accept(&mut printer);
    printer.finish()
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}
