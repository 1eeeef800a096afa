use crate::check::{Checker, Rule};
use crate::decl::GenericDecl;
use crate::error::Error;
use crate::hierarchy::Hierarchy;

fn menagerie() -> Hierarchy {
    let mut h = Hierarchy::new();
    h.register("object", vec![]).unwrap();
    h.register("str", vec!["object".to_string()]).unwrap();
    h.register("Animal", vec!["object".to_string()]).unwrap();
    h.register("Cat", vec!["Animal".to_string()]).unwrap();
    h.register("Dog", vec!["Animal".to_string()]).unwrap();
    h
}

#[test]
fn test_covariant_container_accepts_narrower_offer() {
    let h = menagerie();
    let container = GenericDecl::covariant("Container");
    let required = container.instantiate(vec!["Animal"]).unwrap();
    let offered = container.instantiate(vec!["Cat"]).unwrap();

    let verdict = Checker::new(&h)
        .check(&container, &required, &offered)
        .unwrap();

    assert!(verdict.compatible);
    assert_eq!(verdict.checks.len(), 1);
    assert_eq!(verdict.checks[0].rule, Rule::Narrow);
    assert_eq!(
        verdict.checks[0].chain,
        Some(vec!["Cat".to_string(), "Animal".to_string()])
    );
}

#[test]
fn test_covariant_container_rejects_wider_offer() {
    let h = menagerie();
    let container = GenericDecl::covariant("Container");
    let required = container.instantiate(vec!["Cat"]).unwrap();
    let offered = container.instantiate(vec!["Animal"]).unwrap();

    let verdict = Checker::new(&h)
        .check(&container, &required, &offered)
        .unwrap();

    assert!(!verdict.compatible);
    assert_eq!(verdict.failing_slot().unwrap().slot, 0);
}

#[test]
fn test_invariant_container_rejects_narrower_offer() {
    let h = menagerie();
    let container = GenericDecl::invariant("Container");
    let required = container.instantiate(vec!["Animal"]).unwrap();
    let offered = container.instantiate(vec!["Cat"]).unwrap();

    let verdict = Checker::new(&h)
        .check(&container, &required, &offered)
        .unwrap();

    assert!(!verdict.compatible);

    let failing = verdict.failing_slot().unwrap();
    assert_eq!(failing.slot, 0);
    assert_eq!(failing.rule, Rule::Exact);
}

#[test]
fn test_contravariant_consumer_accepts_wider_offer() {
    let h = menagerie();
    let consumer = GenericDecl::contravariant("Consumer");
    let required = consumer.instantiate(vec!["Cat"]).unwrap();
    let offered = consumer.instantiate(vec!["Animal"]).unwrap();

    let verdict = Checker::new(&h)
        .check(&consumer, &required, &offered)
        .unwrap();

    assert!(verdict.compatible);
    assert_eq!(verdict.checks[0].rule, Rule::Widen);
}

#[test]
fn test_contravariant_consumer_rejects_narrower_offer() {
    let h = menagerie();
    let consumer = GenericDecl::contravariant("Consumer");
    let required = consumer.instantiate(vec!["Animal"]).unwrap();
    let offered = consumer.instantiate(vec!["Cat"]).unwrap();

    let verdict = Checker::new(&h)
        .check(&consumer, &required, &offered)
        .unwrap();

    assert!(!verdict.compatible);
}

#[test]
fn test_function_shape_parameter_widens_and_return_narrows() {
    let h = menagerie();
    let callable = GenericDecl::function("Callable", 1);
    let required = callable.instantiate(vec!["Cat", "object"]).unwrap();
    let offered = callable.instantiate(vec!["Animal", "str"]).unwrap();

    let verdict = Checker::new(&h)
        .check(&callable, &required, &offered)
        .unwrap();

    assert!(verdict.compatible);
    assert_eq!(verdict.checks.len(), 2);
    assert_eq!(verdict.checks[0].rule, Rule::Widen);
    assert_eq!(verdict.checks[1].rule, Rule::Narrow);
}

#[test]
fn test_function_shape_rejects_narrower_parameter() {
    let h = menagerie();
    let callable = GenericDecl::function("Callable", 1);
    let required = callable.instantiate(vec!["Animal", "object"]).unwrap();
    let offered = callable.instantiate(vec!["Cat", "str"]).unwrap();

    let verdict = Checker::new(&h)
        .check(&callable, &required, &offered)
        .unwrap();

    assert!(!verdict.compatible);
    // Short-circuit: the return slot was never examined.
    assert_eq!(verdict.checks.len(), 1);
    assert_eq!(verdict.failing_slot().unwrap().slot, 0);
}

#[test]
fn test_identical_instantiations_are_always_compatible() {
    let h = menagerie();

    for decl in [
        GenericDecl::covariant("Box"),
        GenericDecl::contravariant("Box"),
        GenericDecl::invariant("Box"),
    ] {
        let required = decl.instantiate(vec!["Dog"]).unwrap();
        let offered = decl.instantiate(vec!["Dog"]).unwrap();

        let verdict = Checker::new(&h).check(&decl, &required, &offered).unwrap();

        assert!(verdict.compatible);
    }
}

#[test]
fn test_mismatched_declarations_are_never_comparable() {
    let h = menagerie();
    let container = GenericDecl::covariant("Container");
    let consumer = GenericDecl::contravariant("Consumer");
    let required = container.instantiate(vec!["Animal"]).unwrap();
    let offered = consumer.instantiate(vec!["Cat"]).unwrap();

    let err = Checker::new(&h).check(&container, &required, &offered);

    assert_eq!(
        err,
        Err(Error::DeclarationMismatch {
            required: "Container".to_string(),
            offered: "Consumer".to_string(),
        })
    );
}

#[test]
fn test_unregistered_type_is_refused() {
    let h = menagerie();
    let container = GenericDecl::covariant("Container");
    let required = container.instantiate(vec!["Animal"]).unwrap();
    let offered = container.instantiate(vec!["Unicorn"]).unwrap();

    let err = Checker::new(&h).check(&container, &required, &offered);

    assert_eq!(
        err,
        Err(Error::UnknownType {
            slot: 0,
            name: "Unicorn".to_string(),
        })
    );
}

#[test]
fn test_invariant_ignores_subtype_edges_in_both_directions() {
    let h = menagerie();
    let cell = GenericDecl::invariant("Cell");

    for (req, off) in [("Animal", "Cat"), ("Cat", "Animal")] {
        let required = cell.instantiate(vec![req]).unwrap();
        let offered = cell.instantiate(vec![off]).unwrap();

        let verdict = Checker::new(&h).check(&cell, &required, &offered).unwrap();

        assert!(!verdict.compatible);
        assert_eq!(verdict.failing_slot().unwrap().rule, Rule::Exact);
    }
}

#[test]
fn test_verdicts_are_deterministic() {
    let h = menagerie();
    let container = GenericDecl::covariant("Container");
    let required = container.instantiate(vec!["Animal"]).unwrap();
    let offered = container.instantiate(vec!["Cat"]).unwrap();
    let checker = Checker::new(&h);

    let first = checker.check(&container, &required, &offered).unwrap();
    let second = checker.check(&container, &required, &offered).unwrap();

    assert_eq!(first, second);
}
