//! Abstract syntax tree for the Sapling language
//!
//! Two disjoint node families make up a program:
//!
//! - [`Stmt`]: assignment, block, branch (`if`/`else`) and loop (`while`)
//! - [`Expr`]: identifier reference, integer literal and binary operator
//!
//! Nodes own their children, so every tree is acyclic by construction.
//! Fields are private and only readable through accessors: once built, a
//! tree cannot be changed through this API. Use the functions in [`build`]
//! to assemble programs.

pub mod build;

use serde::{Deserialize, Serialize};

/// Stack kept free while deserializing nested trees (100KB).
const JSON_RED_ZONE: usize = 100 * 1024;

/// Stack added each time deserialization runs low (1MB).
const JSON_STACK_GROWTH: usize = 1024 * 1024;

/// The single value type of the language: a fixed-width signed integer.
pub type Int = i64;

// ═══════════════════════════════════════════════════════════════════════
// Expressions
// ═══════════════════════════════════════════════════════════════════════

/// A variable name.
///
/// Identifiers compare by name, never by node identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id {
    name: String,
}

impl Id {
    /// Create an identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The identifier's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Id::new(name)
    }
}

impl From<String> for Id {
    fn from(name: String) -> Self {
        Id::new(name)
    }
}

/// The arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorKind {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`, truncating toward zero
    Divide,
}

impl OperatorKind {
    /// Every operator, in declaration order.
    pub const ALL: [OperatorKind; 4] = [
        OperatorKind::Add,
        OperatorKind::Subtract,
        OperatorKind::Multiply,
        OperatorKind::Divide,
    ];

    /// The infix glyph used when printing.
    pub fn glyph(self) -> &'static str {
        match self {
            OperatorKind::Add => "+",
            OperatorKind::Subtract => "-",
            OperatorKind::Multiply => "*",
            OperatorKind::Divide => "/",
        }
    }
}

/// A binary arithmetic operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    kind: OperatorKind,
    left: Box<Expr>,
    right: Box<Expr>,
}

impl Operator {
    /// Create an operator node.
    pub fn new(kind: OperatorKind, left: Expr, right: Expr) -> Self {
        Self {
            kind,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Which operator this is.
    pub fn kind(&self) -> OperatorKind {
        self.kind
    }

    /// The left operand.
    pub fn left(&self) -> &Expr {
        &self.left
    }

    /// The right operand.
    pub fn right(&self) -> &Expr {
        &self.right
    }
}

/// An expression node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    /// Variable reference
    Id(Id),
    /// Integer literal
    Number(Int),
    /// Binary arithmetic
    Operator(Operator),
}

impl Expr {
    /// Human-readable name of the expression kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Id(_) => "identifier",
            Expr::Number(_) => "number",
            Expr::Operator(_) => "operator",
        }
    }
}

impl From<Id> for Expr {
    fn from(id: Id) -> Self {
        Expr::Id(id)
    }
}

impl From<Int> for Expr {
    fn from(value: Int) -> Self {
        Expr::Number(value)
    }
}

impl From<Operator> for Expr {
    fn from(op: Operator) -> Self {
        Expr::Operator(op)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Statements
// ═══════════════════════════════════════════════════════════════════════

/// `target = value;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assign {
    target: Id,
    value: Expr,
}

impl Assign {
    /// Create an assignment.
    pub fn new(target: Id, value: Expr) -> Self {
        Self { target, value }
    }

    /// The variable being assigned.
    pub fn target(&self) -> &Id {
        &self.target
    }

    /// The expression whose value is stored.
    pub fn value(&self) -> &Expr {
        &self.value
    }
}

/// An ordered sequence of statements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Block {
    statements: Vec<Stmt>,
}

impl Block {
    /// Create a block.
    pub fn new(statements: Vec<Stmt>) -> Self {
        Self { statements }
    }

    /// The statements, in execution order.
    pub fn statements(&self) -> &[Stmt] {
        &self.statements
    }

    /// Whether the block contains no statements.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// `if (predicate) then_branch else else_branch`
///
/// The else branch is mandatory; use an empty [`Block`] for a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    predicate: Expr,
    then_branch: Box<Stmt>,
    else_branch: Box<Stmt>,
}

impl Branch {
    /// Create a branch.
    pub fn new(predicate: Expr, then_branch: Stmt, else_branch: Stmt) -> Self {
        Self {
            predicate,
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }

    /// The condition; nonzero selects the then branch.
    pub fn predicate(&self) -> &Expr {
        &self.predicate
    }

    /// Runs when the predicate is nonzero.
    pub fn then_branch(&self) -> &Stmt {
        &self.then_branch
    }

    /// Runs when the predicate is zero.
    pub fn else_branch(&self) -> &Stmt {
        &self.else_branch
    }
}

/// `while (predicate != 0) body`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loop {
    predicate: Expr,
    body: Box<Stmt>,
}

impl Loop {
    /// Create a loop.
    pub fn new(predicate: Expr, body: Stmt) -> Self {
        Self {
            predicate,
            body: Box::new(body),
        }
    }

    /// The condition, re-evaluated before every iteration.
    pub fn predicate(&self) -> &Expr {
        &self.predicate
    }

    /// The loop body.
    pub fn body(&self) -> &Stmt {
        &self.body
    }
}

/// A statement node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stmt {
    /// Assignment
    Assign(Assign),
    /// Sequence
    Block(Block),
    /// Conditional
    Branch(Branch),
    /// While-loop
    Loop(Loop),
}

impl Stmt {
    /// Human-readable name of the statement kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Stmt::Assign(_) => "assignment",
            Stmt::Block(_) => "block",
            Stmt::Branch(_) => "branch",
            Stmt::Loop(_) => "loop",
        }
    }
}

impl Stmt {
    /// Load a program tree from its JSON form.
    ///
    /// Nesting depth is unbounded: the recursion limit of `serde_json` is
    /// lifted and the stack grows on demand, so any tree written by
    /// `serde_json::to_string` loads back.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed input or trailing
    /// characters.
    pub fn from_json(text: &str) -> serde_json::Result<Stmt> {
        let mut de = serde_json::Deserializer::from_str(text);
        de.disable_recursion_limit();

        let stacked = serde_stacker::Deserializer {
            de: &mut de,
            red_zone: JSON_RED_ZONE,
            stack_size: JSON_STACK_GROWTH,
        };
        let stmt = Stmt::deserialize(stacked)?;

        de.end()?;
        Ok(stmt)
    }
}

impl From<Assign> for Stmt {
    fn from(assign: Assign) -> Self {
        Stmt::Assign(assign)
    }
}

impl From<Block> for Stmt {
    fn from(block: Block) -> Self {
        Stmt::Block(block)
    }
}

impl From<Branch> for Stmt {
    fn from(branch: Branch) -> Self {
        Stmt::Branch(branch)
    }
}

impl From<Loop> for Stmt {
    fn from(lp: Loop) -> Self {
        Stmt::Loop(lp)
    }
}
