use crate::{Catalog, OpRef};

#[test]
fn test_lookup_by_symbol_and_word_alias() {
    let catalog = Catalog::new();

    let plus = catalog.lookup("+").unwrap();
    assert_eq!(plus.name(), "add");
    assert!(matches!(plus, OpRef::Binary(_)));

    let word = catalog.lookup("plus").unwrap();
    assert_eq!(word.name(), "add");
}

#[test]
fn test_unknown_alias_yields_nothing() {
    let catalog = Catalog::new();
    assert!(catalog.lookup("frobnicate").is_none());
}

#[test]
fn test_expected_groups_are_present() {
    let catalog = Catalog::new();
    let names: Vec<&str> = catalog.groups().iter().map(|g| g.name).collect();
    assert_eq!(
        names,
        vec![
            "arithmetic",
            "comparison",
            "logical",
            "trigonometric",
            "functions"
        ]
    );
}

#[test]
fn test_every_alias_resolves_to_its_operator() {
    let catalog = Catalog::new();
    for group in catalog.groups() {
        for op in &group.operators {
            for alias in op.aliases() {
                let found = catalog
                    .lookup(alias)
                    .unwrap_or_else(|| panic!("alias '{}' not in lookup table", alias));
                assert_eq!(found.name(), op.name(), "alias '{}'", alias);
            }
        }
    }
}

#[test]
fn test_unary_and_binary_arities() {
    let catalog = Catalog::new();
    assert_eq!(catalog.lookup("sqrt").unwrap().arity(), 1);
    assert_eq!(catalog.lookup("^").unwrap().arity(), 2);
    assert_eq!(catalog.lookup("not").unwrap().arity(), 1);
    assert_eq!(catalog.lookup("and").unwrap().arity(), 2);
}

#[test]
fn test_precedence_orders_arithmetic_tighter_than_logical() {
    let catalog = Catalog::new();
    let power = catalog.lookup("^").unwrap().precedence();
    let multiply = catalog.lookup("*").unwrap().precedence();
    let add = catalog.lookup("+").unwrap().precedence();
    let compare = catalog.lookup("<").unwrap().precedence();
    let and = catalog.lookup("and").unwrap().precedence();
    let or = catalog.lookup("or").unwrap().precedence();

    assert!(power > multiply);
    assert!(multiply > add);
    assert!(add > compare);
    assert!(compare > and);
    assert!(and > or);
}
