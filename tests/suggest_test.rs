//! Tests for the suggestion engine

use cmdkit::{suggest, CommandDefinition, CommandRegistry};

fn registry_with(names: &[&str]) -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    for name in names {
        registry
            .register(CommandDefinition::new(*name, format!("{} command", name)))
            .expect("register");
    }
    registry
}

#[test]
fn given_typo_when_suggesting_then_close_names_rank_but_distant_ones_do_not() {
    // Arrange
    let registry = registry_with(&["ls", "list", "mkdir"]);

    // Act
    let found = suggest::suggestions(&registry, "lst", 5);
    let names: Vec<&str> = found.iter().map(|d| d.name()).collect();

    // Assert: "ls" matches positionally, "mkdir" never does
    assert!(names.contains(&"ls"), "{:?}", names);
    assert!(!names.contains(&"mkdir"), "{:?}", names);
}

#[test]
fn given_prefix_input_when_suggesting_then_prefixed_names_match() {
    let registry = registry_with(&["list", "listen", "load"]);
    let found = suggest::suggestions(&registry, "li", 5);
    let names: Vec<&str> = found.iter().map(|d| d.name()).collect();
    assert_eq!(names, ["list", "listen"]);
}

#[test]
fn given_many_matches_when_suggesting_then_cap_applies_in_registration_order() {
    // Arrange: every name shares the "re" prefix
    let registry = registry_with(&["render", "rename", "repair", "reload", "rewind", "report"]);

    // Act
    let found = suggest::suggestions(&registry, "re", 3);
    let names: Vec<&str> = found.iter().map(|d| d.name()).collect();

    // Assert: first three registered, not lexical
    assert_eq!(names, ["render", "rename", "repair"]);
}

#[test]
fn given_aliases_when_suggesting_then_only_canonical_names_are_scanned() {
    // Arrange
    let mut registry = CommandRegistry::new();
    registry
        .register(CommandDefinition::new("remove", "Delete things").alias("rmx"))
        .expect("register");

    // Act: "rmz" is close to the alias "rmx" but far from "remove"
    let found = suggest::suggestions(&registry, "rmz", 5);

    // Assert
    assert!(found.is_empty());
}

#[test]
fn given_no_similar_names_when_suggesting_then_empty() {
    let registry = registry_with(&["alpha", "beta"]);
    assert!(suggest::suggestions(&registry, "zzzzzz", 5).is_empty());
}
