//! Canned example programs

use std::fmt;

use crate::ast::Stmt;
use crate::build::*;

/// The bundled example programs, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sample {
    /// Computes 5! into `factorial`.
    Factorial,
    /// The textbook branch/loop example.
    Book,
}

impl Sample {
    /// Every sample.
    pub const ALL: [Sample; 2] = [Sample::Factorial, Sample::Book];

    /// Build the sample's tree.
    pub fn program(self) -> Stmt {
        match self {
            Sample::Factorial => factorial(),
            Sample::Book => book(),
        }
    }

    /// The sample's name.
    pub fn name(self) -> &'static str {
        match self {
            Sample::Factorial => "factorial",
            Sample::Book => "book",
        }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Factorial of 5, equivalent to:
///
/// ```text
/// factorial = 1;
/// i = 5;
/// while (i != 0) {
///     factorial = factorial * i;
///     i = i - 1;
/// }
/// ```
pub fn factorial() -> Stmt {
    block([
        assign("factorial", number(1)),
        assign("i", number(5)),
        while_loop(
            id("i"),
            block([
                assign("factorial", mul(id("factorial"), id("i"))),
                assign("i", sub(id("i"), number(1))),
            ]),
        ),
    ])
}

/// The textbook example: with `x` and `y` unbound the predicate is zero,
/// so only `z = 7;` runs.
pub fn book() -> Stmt {
    branch(
        add(id("x"), id("y")),
        block([
            while_loop(id("z"), assign("z", add(id("z"), number(1)))),
            assign("x", number(8)),
        ]),
        assign("z", number(7)),
    )
}
