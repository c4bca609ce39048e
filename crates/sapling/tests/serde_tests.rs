//! JSON interchange of program trees

use pretty_assertions::assert_eq;
use sapling::build::*;
use sapling::*;

#[test]
fn test_expression_json_shape() {
    let expr = mul(id("y"), number(2));
    let json = serde_json::to_value(&expr).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "operator": {
                "kind": "multiply",
                "left": { "id": "y" },
                "right": { "number": 2 }
            }
        })
    );
}

#[test]
fn test_statement_json_shape() {
    let stmt = branch(id("p"), assign("x", number(1)), block([]));
    let json = serde_json::to_value(&stmt).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "branch": {
                "predicate": { "id": "p" },
                "then_branch": { "assign": { "target": "x", "value": { "number": 1 } } },
                "else_branch": { "block": [] }
            }
        })
    );
}

#[test]
fn test_load_program_from_json() {
    let text = r#"
        {
          "block": [
            { "assign": { "target": "i", "value": { "number": 3 } } },
            { "loop": {
                "predicate": { "id": "i" },
                "body": { "assign": {
                    "target": "i",
                    "value": { "operator": { "kind": "subtract", "left": { "id": "i" }, "right": { "number": 1 } } }
                } }
            } }
          ]
        }
    "#;
    let program = Stmt::from_json(text).unwrap();
    assert_eq!(
        program,
        block([
            assign("i", number(3)),
            while_loop(id("i"), assign("i", sub(id("i"), number(1)))),
        ])
    );
    assert_eq!(run(&program).unwrap().get("i"), Some(0));
}

#[test]
fn test_samples_survive_json() {
    for sample in Sample::ALL {
        let program = sample.program();
        let text = serde_json::to_string(&program).unwrap();
        let back: Stmt = serde_json::from_str(&text).unwrap();
        assert_eq!(back, program, "sample {}", sample);
    }
}

#[test]
fn test_unknown_operator_rejected() {
    let text = r#"{ "operator": { "kind": "modulo", "left": { "number": 1 }, "right": { "number": 2 } } }"#;
    assert!(serde_json::from_str::<Expr>(text).is_err());
}

#[test]
fn test_trailing_characters_rejected() {
    let text = r#"{ "block": [] } extra"#;
    assert!(Stmt::from_json(text).is_err());
}

// ═══════════════════════════════════════════════════════════════════════
// Deep Trees
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_deep_expression_loads_back() {
    // x = ((((1 + 1) + 1) + ...) + 1), 150 operators deep
    let mut expr = number(1);
    for _ in 0..150 {
        expr = add(expr, number(1));
    }
    let program = assign("x", expr);

    let text = serde_json::to_string(&program).unwrap();
    let back = Stmt::from_json(&text).unwrap();

    assert_eq!(back, program);
    assert_eq!(run(&back).unwrap().get("x"), Some(151));
}

#[test]
fn test_deep_statement_nesting_loads_back() {
    // 120 nested branches, each wrapping the next in a block
    let mut stmt = assign("depth", add(id("depth"), number(1)));
    for _ in 0..120 {
        stmt = branch(number(1), block([stmt]), block([]));
    }

    let text = serde_json::to_string(&stmt).unwrap();
    let back = Stmt::from_json(&text).unwrap();

    assert_eq!(back, stmt);
    assert_eq!(run(&back).unwrap().get("depth"), Some(1));
}
