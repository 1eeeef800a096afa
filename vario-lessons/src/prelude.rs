use vario_core::{GenericDecl, Hierarchy};

/// The hierarchy every lesson runs against: `object` at the root, `Animal`
/// and `str` below it, `Cat` and `Dog` below `Animal`.
pub fn menagerie() -> Hierarchy {
    let mut hierarchy = Hierarchy::new();

    // Registration can only fail on duplicates, unknown supertypes or
    // cycles, none of which a fixed list can produce.
    hierarchy.register("object", vec![]).unwrap();
    hierarchy
        .register("str", vec!["object".to_string()])
        .unwrap();
    hierarchy
        .register("Animal", vec!["object".to_string()])
        .unwrap();
    hierarchy
        .register("Cat", vec!["Animal".to_string()])
        .unwrap();
    hierarchy
        .register("Dog", vec!["Animal".to_string()])
        .unwrap();

    hierarchy
}

/// The generic shapes the lessons exercise, preloaded into the repl.
pub fn standard_declarations() -> Vec<GenericDecl> {
    vec![
        GenericDecl::covariant("ReadOnlyList"),
        GenericDecl::covariant("Shelter"),
        GenericDecl::contravariant("Consumer"),
        GenericDecl::contravariant("AnimalProcessor"),
        GenericDecl::invariant("List"),
        GenericDecl::invariant("Processor"),
        GenericDecl::function("Callable", 1),
    ]
}
