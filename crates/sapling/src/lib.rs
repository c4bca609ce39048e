//! # Sapling
//!
//! A tree-walking interpreter for a small structured imperative language.
//!
//! Programs are trees of statements (assignment, block, `if`/`else`,
//! `while`) and integer expressions (variable, literal, arithmetic), built
//! directly with the functions in [`build`]. Operations over a tree are
//! visitors ([`StmtVisitor`], [`ExprVisitor`]), so new operations never
//! touch the node definitions.
//!
//! ## Architecture
//!
//! - **Node model** ([`ast`]): the closed set of node variants
//! - **Dispatch** ([`visit`]): exhaustive per-variant dispatch
//! - **Evaluator** ([`eval`]): expressions to integers
//! - **Executor** ([`exec`]): statements against a variable mapping
//! - **Printer** ([`printer`]): fully parenthesized, indented text
//!
//! ## Example
//!
//! ```
//! use sapling::build::*;
//!
//! let program = block([
//!     assign("factorial", number(1)),
//!     assign("i", number(5)),
//!     while_loop(
//!         id("i"),
//!         block([
//!             assign("factorial", mul(id("factorial"), id("i"))),
//!             assign("i", sub(id("i"), number(1))),
//!         ]),
//!     ),
//! ]);
//!
//! let vars = sapling::run(&program).unwrap();
//! assert_eq!(vars.get("factorial"), Some(120));
//! assert_eq!(vars.get("i"), Some(0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod context;
pub mod environment;
pub mod error;
pub mod eval;
pub mod exec;
pub mod printer;
pub mod samples;
pub mod visit;

// Re-export main types
pub use ast::build;
pub use ast::{Assign, Block, Branch, Expr, Id, Int, Loop, Operator, OperatorKind, Stmt};
pub use context::EvalContext;
pub use environment::Variables;
pub use error::{EvalError, Result};
pub use eval::{eval_expr, Evaluator};
pub use exec::{run, run_with, Executor};
pub use printer::{render, Printer};
pub use samples::Sample;
pub use visit::{ExprVisitor, NodeRef, StmtVisitor};

/// Sapling version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
