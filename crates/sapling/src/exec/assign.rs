//! Assignment execution

use crate::ast::Assign;
use crate::EvalError;

use super::Executor;

/// Execute an assignment.
///
/// Evaluates the value against the current mapping, then binds the target,
/// overwriting any previous value. Nothing is bound if evaluation fails.
pub fn exec_assign(assign: &Assign, exec: &mut Executor) -> Result<(), EvalError> {
    let value = exec.eval(assign.value())?;
    let name = assign.target().name();

    if exec.ctx.trace {
        tracing::trace!(variable = name, value, "assign");
    }

    exec.vars.set(name, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::*;
    use crate::Stmt;

    fn as_assign(stmt: &Stmt) -> &Assign {
        match stmt {
            Stmt::Assign(assign) => assign,
            other => panic!("Expected Assign, got {}", other.kind_name()),
        }
    }

    #[test]
    fn test_simple_assignment() {
        let stmt = assign("x", number(42));
        let mut exec = Executor::new();

        exec_assign(as_assign(&stmt), &mut exec).unwrap();
        assert_eq!(exec.variables().get("x"), Some(42));
    }

    #[test]
    fn test_assignment_reads_old_value() {
        let stmt = assign("x", add(id("x"), number(1)));
        let mut exec = Executor::new();

        exec_assign(as_assign(&stmt), &mut exec).unwrap();
        exec_assign(as_assign(&stmt), &mut exec).unwrap();
        assert_eq!(exec.variables().get("x"), Some(2));
    }

    #[test]
    fn test_failed_assignment_binds_nothing() {
        let stmt = assign("r", div(number(5), number(0)));
        let mut exec = Executor::new();

        let result = exec_assign(as_assign(&stmt), &mut exec);
        assert!(result.is_err());
        assert!(!exec.variables().contains("r"));
    }
}
