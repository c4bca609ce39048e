//! End-to-end programs

use pretty_assertions::assert_eq;
use sapling::build::*;
use sapling::*;

#[test]
fn test_factorial() {
    let program = block([
        assign("factorial", number(1)),
        assign("i", number(5)),
        while_loop(
            id("i"),
            block([
                assign("factorial", mul(id("factorial"), id("i"))),
                assign("i", sub(id("i"), number(1))),
            ]),
        ),
    ]);

    let vars = run(&program).unwrap();
    let expected: Variables = [("factorial", 120), ("i", 0)].into_iter().collect();
    assert_eq!(vars, expected);
    assert_eq!(vars.names().collect::<Vec<_>>(), ["factorial", "i"]);
}

#[test]
fn test_undefined_variables_default_to_zero() {
    let program = branch(
        add(id("x"), id("y")),
        assign("z", number(1)),
        assign("z", number(7)),
    );

    let vars = run(&program).unwrap();
    let expected: Variables = [("z", 7)].into_iter().collect();
    assert_eq!(vars, expected);
}

#[test]
fn test_division_by_zero_fails_run() {
    let program = assign("r", div(number(5), number(0)));

    let mut exec = Executor::new();
    let result = exec.execute(&program);

    assert_eq!(result, Err(EvalError::DivisionByZero { dividend: 5 }));
    assert!(!exec.variables().contains("r"));
    assert!(run(&program).is_err());
}

#[test]
fn test_print_assignment() {
    let program = assign(id("x"), mul(id("y"), number(2)));
    assert_eq!(render(&program), "x = (y * 2);\n");
}

#[test]
fn test_book_example() {
    let vars = run(&samples::book()).unwrap();
    let expected: Variables = [("z", 7)].into_iter().collect();
    assert_eq!(vars, expected);
}

#[test]
fn test_book_example_then_branch() {
    // With x bound the then branch runs; z starts below zero so the
    // loop counts up to it
    let start: Variables = [("x", 1), ("z", -3)].into_iter().collect();
    let vars = run_with(&samples::book(), start).unwrap();
    assert_eq!(vars.get("x"), Some(8));
    assert_eq!(vars.get("z"), Some(0));
}

#[test]
fn test_every_sample_runs() {
    for sample in Sample::ALL {
        assert!(run(&sample.program()).is_ok(), "sample {}", sample);
    }
}

#[test]
fn test_larger_factorial() {
    // 20! is the largest factorial that fits in an i64
    let program = block([
        assign("f", number(1)),
        assign("i", number(20)),
        while_loop(
            id("i"),
            block([
                assign("f", mul(id("f"), id("i"))),
                assign("i", sub(id("i"), number(1))),
            ]),
        ),
    ]);
    assert_eq!(run(&program).unwrap().get("f"), Some(2_432_902_008_176_640_000));
}

#[test]
fn test_gcd_euclid() {
    // r = a - b * (a / b) is a mod b for positive values
    let program = block([
        assign("a", number(1071)),
        assign("b", number(462)),
        while_loop(
            id("b"),
            block([
                assign("r", sub(id("a"), mul(id("b"), div(id("a"), id("b"))))),
                assign("a", id("b")),
                assign("b", id("r")),
            ]),
        ),
    ]);
    assert_eq!(run(&program).unwrap().get("a"), Some(21));
}
