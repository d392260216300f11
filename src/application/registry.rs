//! Command registry: name ownership, aliases, category index

use std::collections::{BTreeMap, HashMap};

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::CommandDefinition;

/// Registration failures. Duplicate names are a warning, not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("command name must not be empty")]
    EmptyName,
}

/// Owns every registered [`CommandDefinition`].
///
/// Three indices are maintained:
///
/// - name → definition (exclusive owner; re-registration overwrites),
/// - alias → canonical name (weak by construction: resolution performs one
///   hop through the name map at lookup time, so overwriting a name leaves
///   aliases pointing at the new definition),
/// - category → names in registration order, without dedup (re-registering a
///   name under the same category appends a duplicate entry).
///
/// A separate registration-order list backs suggestion scanning and the
/// by-category listing, holding the ordering discipline invariant.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: HashMap<String, CommandDefinition>,
    aliases: HashMap<String, String>,
    categories: BTreeMap<String, Vec<String>>,
    order: Vec<String>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition under its name.
    ///
    /// An empty name is rejected and nothing is inserted. An existing name is
    /// overwritten with a warning; its aliases are re-linked to the new
    /// definition and the category index gains another entry.
    pub fn register(&mut self, definition: CommandDefinition) -> Result<(), RegistryError> {
        if definition.name().is_empty() {
            return Err(RegistryError::EmptyName);
        }

        let name = definition.name().to_string();
        if self.commands.contains_key(&name) {
            warn!(command = %name, "already registered, overwriting");
        } else {
            self.order.push(name.clone());
        }

        for alias in definition.aliases() {
            if !alias.is_empty() && alias != &name {
                self.aliases.insert(alias.clone(), name.clone());
            }
        }

        self.categories
            .entry(definition.category_name().to_string())
            .or_default()
            .push(name.clone());

        debug!(command = %name, "registered");
        self.commands.insert(name, definition);
        Ok(())
    }

    /// Resolve a name or alias to its definition.
    ///
    /// The direct name map is consulted first, then the alias map with
    /// exactly one hop.
    pub fn resolve(&self, name: &str) -> Option<&CommandDefinition> {
        if let Some(definition) = self.commands.get(name) {
            return Some(definition);
        }
        self.aliases
            .get(name)
            .and_then(|canonical| self.commands.get(canonical))
    }

    /// Whether a name or alias resolves to a command.
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Whether a canonical name is registered (aliases excluded).
    pub fn contains_name(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Definition under a canonical name, without alias resolution.
    pub fn get(&self, name: &str) -> Option<&CommandDefinition> {
        self.commands.get(name)
    }

    /// Canonical names, lexically sorted (the flat listing view).
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Canonical names in registration order (suggestion scanning order).
    pub fn registration_order(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Category index: category → names in registration order, duplicates
    /// preserved. Categories iterate lexically.
    pub fn by_category(&self) -> &BTreeMap<String, Vec<String>> {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
