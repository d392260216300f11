//! Plain-text help rendering
//!
//! Pure string producers so consumers can snapshot output. Section ordering
//! is part of the observable contract: name/aliases, description, category,
//! version, author, usage, parameters, options, examples. Missing sections
//! are omitted entirely, never shown empty.

use itertools::Itertools;

use crate::application::registry::CommandRegistry;
use crate::domain::{CommandDefinition, OptionDefinition, ParameterType, DEFAULT_CATEGORY};

const RULE_WIDTH: usize = 60;

/// Render help for one command.
///
/// A custom help text set on the definition is returned verbatim unless
/// `detailed` is requested. The examples block renders only in detailed
/// help.
pub fn command_help(definition: &CommandDefinition, detailed: bool) -> String {
    if !definition.custom_help_text().is_empty() && !detailed {
        return definition.custom_help_text().to_string();
    }

    let mut out = String::new();

    out.push_str(&format!("Command: {}", definition.name()));
    if !definition.aliases().is_empty() {
        out.push_str(&format!(
            " (aliases: {})",
            definition.aliases().iter().join(", ")
        ));
    }
    out.push('\n');

    if !definition.description().is_empty() {
        out.push_str(&format!("Description: {}\n", definition.description()));
    }
    if !definition.category_name().is_empty() && definition.category_name() != DEFAULT_CATEGORY {
        out.push_str(&format!("Category: {}\n", definition.category_name()));
    }
    if !definition.version_str().is_empty() {
        out.push_str(&format!("Version: {}\n", definition.version_str()));
    }
    if !definition.author_str().is_empty() {
        out.push_str(&format!("Author: {}\n", definition.author_str()));
    }

    out.push_str(&format!("\nUsage: {}\n", definition.usage()));

    if !definition.parameters().is_empty() {
        out.push_str("\nParameters:\n");
        for parameter in definition.parameters() {
            out.push_str(&format!(
                "  {:<20} {}",
                parameter.usage_token(),
                parameter.description
            ));
            if !parameter.default_value.is_empty() {
                out.push_str(&format!(" [default: {}]", parameter.default_value));
            }
            if parameter.ty != ParameterType::String {
                out.push_str(&format!(" ({})", parameter.ty));
            }
            out.push('\n');
        }
    }

    if !definition.options().is_empty() {
        out.push_str("\nOptions:\n");
        for option in definition.options() {
            out.push_str(&format!(
                "  {:<40} {}",
                option.usage_token(),
                option.description
            ));
            if !option.default_value.is_empty() {
                out.push_str(&format!(" [default: {}]", option.default_value));
            }
            out.push('\n');
        }
    }

    if detailed && !definition.examples().is_empty() {
        out.push_str("\nExamples:\n");
        for example in definition.examples() {
            out.push_str(&format!("  {}\n", example));
        }
    }

    out
}

/// Render the registry listing.
///
/// The by-category view shows category blocks lexically with names in
/// registration order inside each block (duplicate entries from repeated
/// registration included). The flat view sorts names lexically.
pub fn registry_listing(registry: &CommandRegistry, by_category: bool) -> String {
    let mut out = String::new();
    out.push_str("\nAvailable commands:\n");
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');

    if by_category {
        for (category, names) in registry.by_category() {
            out.push_str(&format!("\n{}:\n", category));
            for name in names {
                if let Some(definition) = registry.get(name) {
                    out.push_str(&listing_line(name, definition));
                }
            }
        }
    } else {
        for name in registry.sorted_names() {
            if let Some(definition) = registry.get(name) {
                out.push_str(&listing_line(name, definition));
            }
        }
    }

    out.push_str("\nUse 'help <command>' for details on a command\n");
    out
}

fn listing_line(name: &str, definition: &CommandDefinition) -> String {
    format!("  {:<20} {}\n", name, definition.description())
}

/// Render global help: the global options table, special commands, and
/// usage examples.
pub fn global_help(global_options: &[OptionDefinition]) -> String {
    let mut out = String::new();
    out.push_str("\nCommand interface - global help\n");
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');

    out.push_str("Global options:\n");
    for option in global_options {
        out.push_str(&format!(
            "  {:<40} {}\n",
            option.usage_token(),
            option.description
        ));
    }

    out.push_str("\nSpecial commands:\n");
    out.push_str("  help [command]   Show help information\n");
    out.push_str("  list             List all commands\n");
    out.push_str("  exit             Leave interactive mode\n");

    out.push_str("\nExamples:\n");
    out.push_str("  1. Help on a command: help <command>\n");
    out.push_str("  2. Run a command: <command> [args...] [options...]\n");
    out.push_str("  3. Ask for help: -h or --help\n");

    out
}
