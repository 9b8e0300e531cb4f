use pagegen::component::{capitalize, ComponentBody, GeneratorSet, SetKind};
use std::path::PathBuf;

#[test]
fn test_capitalize_lowercases_the_tail() {
    assert_eq!(capitalize("inbox"), "Inbox");
    assert_eq!(capitalize("productManagement"), "Productmanagement");
    assert_eq!(capitalize("élan"), "Élan");
}

#[test]
fn test_builtin_admin_set() {
    let set = GeneratorSet::builtin_admin();

    assert_eq!(set.kind, SetKind::Admin);
    assert_eq!(set.dir, PathBuf::from("src/admin"));
    let files: Vec<&str> = set.components.iter().map(|c| c.file_name.as_str()).collect();
    assert_eq!(
        files,
        vec![
            "Dashboard.jsx",
            "Inbox.jsx",
            "Users.jsx",
            "Productmanagement.jsx",
            "Jobs.jsx",
            "Services.jsx",
            "Settings.jsx",
            "Faq.jsx",
            "About.jsx",
            "Logout.jsx",
            "Signup.jsx",
        ]
    );
    for component in &set.components {
        match &component.body {
            ComponentBody::Template { name, .. } => assert_eq!(name, &component.name),
            ComponentBody::Literal(_) => panic!("Expected templated admin component"),
        }
    }
}

#[test]
fn test_builtin_public_set() {
    let set = GeneratorSet::builtin_public();

    assert_eq!(set.kind, SetKind::Public);
    assert_eq!(set.dir, PathBuf::from("src/pages"));
    assert_eq!(set.components.len(), 6);

    let home = &set.components[0];
    assert_eq!(home.file_name, "Home.js");
    match &home.body {
        ComponentBody::Literal(content) => assert!(content.contains("Welcome to PSEVEN")),
        ComponentBody::Template { .. } => panic!("Expected literal public page"),
    }
}

#[test]
fn test_builtin_by_kind() {
    assert_eq!(GeneratorSet::builtin(SetKind::Admin).kind, SetKind::Admin);
    assert_eq!(GeneratorSet::builtin(SetKind::Public).kind, SetKind::Public);
}

#[test]
fn test_custom_admin_extension() {
    let set = GeneratorSet::admin("admin", "tsx", "{{ name }}", ["users"]);
    assert_eq!(set.components[0].file_name, "Users.tsx");
    assert_eq!(set.components[0].name, "Users");
}
