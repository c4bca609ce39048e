use pretty_assertions::assert_eq;
use sapling::*;

// ═══════════════════════════════════════════════════════════════════════
// Basic Operations
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_new_is_empty() {
    let vars = Variables::new();
    assert!(vars.is_empty());
    assert_eq!(vars.len(), 0);
    assert_eq!(vars.iter().count(), 0);
}

#[test]
fn test_get_and_lookup() {
    let mut vars = Variables::new();
    vars.set("x", -4);

    assert_eq!(vars.get("x"), Some(-4));
    assert_eq!(vars.lookup("x"), -4);
    assert_eq!(vars.get("y"), None);
    assert_eq!(vars.lookup("y"), 0);
}

#[test]
fn test_bound_zero_differs_from_unbound() {
    let mut vars = Variables::new();
    vars.set("zero", 0);

    assert!(vars.contains("zero"));
    assert!(!vars.contains("other"));
    assert_eq!(vars.lookup("zero"), vars.lookup("other"));
}

#[test]
fn test_names_are_case_sensitive() {
    let mut vars = Variables::new();
    vars.set("X", 1);
    assert_eq!(vars.get("x"), None);
}

#[test]
fn test_clear() {
    let mut vars: Variables = [("a", 1), ("b", 2)].into_iter().collect();
    vars.clear();
    assert!(vars.is_empty());
}

// ═══════════════════════════════════════════════════════════════════════
// Ordering
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_iteration_in_first_assignment_order() {
    let mut vars = Variables::new();
    vars.set("c", 3);
    vars.set("a", 1);
    vars.set("b", 2);
    vars.set("c", 30);

    let pairs: Vec<_> = vars.iter().collect();
    assert_eq!(pairs, [("c", 30), ("a", 1), ("b", 2)]);
}

#[test]
fn test_extend_overwrites() {
    let mut vars: Variables = [("a", 1)].into_iter().collect();
    vars.extend([("a".to_string(), 5), ("b".to_string(), 6)]);
    assert_eq!(vars.get("a"), Some(5));
    assert_eq!(vars.get("b"), Some(6));
}

// ═══════════════════════════════════════════════════════════════════════
// Executor Ownership
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_executor_starts_from_supplied_mapping() {
    let start: Variables = [("seed", 7)].into_iter().collect();
    let exec = Executor::with_variables(start.clone());
    assert_eq!(exec.variables(), &start);
}

#[test]
fn test_serialize_to_json_object() {
    let vars: Variables = [("factorial", 120), ("i", 0)].into_iter().collect();
    let json = serde_json::to_string(&vars).unwrap();
    assert_eq!(json, r#"{"factorial":120,"i":0}"#);
}
