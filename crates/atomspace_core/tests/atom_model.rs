use atomspace_core::{
    allowed_children, federation_pattern, may_contain, AtomKind, AtomSpace, AtomTree,
    PathResolver,
};

#[test]
fn atom_kind_serializes_as_snake_case() {
    assert_eq!(
        serde_json::to_value(AtomKind::Organization).unwrap(),
        "organization"
    );
    let decoded: AtomKind = serde_json::from_str("\"project\"").unwrap();
    assert_eq!(decoded, AtomKind::Project);
    assert_eq!(AtomKind::Resource.to_string(), "resource");
}

#[test]
fn federation_patterns_are_exposed() {
    assert!(may_contain(AtomKind::Global, AtomKind::Organization));
    assert!(may_contain(AtomKind::Global, AtomKind::Resource));
    assert!(!may_contain(AtomKind::Global, AtomKind::Project));
    assert!(may_contain(AtomKind::Organization, AtomKind::Project));
    assert!(!may_contain(AtomKind::Organization, AtomKind::Organization));
    assert!(may_contain(AtomKind::Project, AtomKind::Resource));
    assert!(!may_contain(AtomKind::Project, AtomKind::Project));
    assert!(!may_contain(AtomKind::Resource, AtomKind::Resource));

    assert_eq!(
        allowed_children(AtomKind::Organization),
        &[AtomKind::Project, AtomKind::Resource]
    );
    assert_eq!(federation_pattern(AtomKind::Global), "glo/ [ org?/** | res?/** ]");
}

#[test]
fn atoms_expose_identity_and_display() {
    let mut space = AtomSpace::with_default_global();
    let org = space.create_organization("global", "acme").unwrap();
    let project = space.create_project("global", "acme", "web").unwrap();

    let org_atom = space.get_atom(org).unwrap();
    assert!(!org_atom.id().is_nil());
    assert_eq!(org_atom.to_string(), "organization(acme)");
    assert_eq!(org_atom.children(AtomKind::Project), &[project]);
    assert!(org_atom.children(AtomKind::Resource).is_empty());
    assert!(!org_atom.is_resource());
    assert_eq!(org_atom.resource_kind(), None);
}

#[test]
fn tree_and_resolver_work_without_the_facade() {
    let mut tree = AtomTree::new();
    let root = tree.insert_root("test-global");
    let org = tree
        .attach_child(root, AtomKind::Organization, "test-org", None)
        .unwrap();
    let project = tree
        .attach_child(org, AtomKind::Project, "test-project", None)
        .unwrap();
    let resource = tree
        .attach_child(project, AtomKind::Resource, "test-resource", Some("host"))
        .unwrap();

    assert_eq!(
        tree.get(resource).unwrap().path(),
        "test-global/test-org/test-project/test-resource"
    );
    assert_eq!(tree.ancestors(resource), vec![root, org, project, resource]);

    let resolver = PathResolver::new(&tree);
    assert_eq!(
        resolver
            .resolve(root, "test-global/test-org/test-project/test-resource")
            .unwrap(),
        resource
    );
}
