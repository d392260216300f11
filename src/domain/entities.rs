//! Domain entities: core data structures

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Value type tag for a positional parameter.
///
/// Purely descriptive: the tag shows up in generated help and lets handlers
/// decide how to interpret an argument. The core never coerces values.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    #[default]
    String,
    Int,
    Float,
    Bool,
    File,
    Path,
    Command,
}

/// Positional parameter of a command.
///
/// Immutable once attached to a `CommandDefinition`. The sentinel name `"..."`
/// in last position marks the command as variadic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDefinition {
    /// Parameter name, unique within a command (shown in help)
    pub name: String,
    /// What the parameter means
    pub description: String,
    /// Required parameters must be supplied by position
    pub required: bool,
    /// Value used when the parameter is omitted
    pub default_value: String,
    /// Value type tag, shown in help when not `string`
    pub ty: ParameterType,
}

impl ParameterDefinition {
    /// Create an optional string parameter.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required: false,
            default_value: String::new(),
            ty: ParameterType::default(),
        }
    }

    /// Mark the parameter required (or not).
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the value used when the parameter is omitted.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Set the value type tag.
    pub fn ty(mut self, ty: ParameterType) -> Self {
        self.ty = ty;
        self
    }

    /// Usage token: `<name>` when required, `[name]` otherwise.
    pub fn usage_token(&self) -> String {
        if self.required {
            format!("<{}>", self.name)
        } else {
            format!("[{}]", self.name)
        }
    }
}

/// Flag/value option of a command.
///
/// Long and short names are independent lookup keys; either may be empty but
/// not both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDefinition {
    /// Long form without the `--` prefix
    pub name: String,
    /// Short form without the `-` prefix, at most one character
    pub short_name: String,
    /// What the option does
    pub description: String,
    /// Whether the option consumes a value token
    pub requires_value: bool,
    /// Value used when the option is absent
    pub default_value: String,
    /// Free-form value placeholder label for help text
    pub value_type: String,
}

impl OptionDefinition {
    /// Create a boolean option with long and short forms.
    pub fn new(
        name: impl Into<String>,
        short_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            short_name: short_name.into(),
            description: description.into(),
            requires_value: false,
            default_value: String::new(),
            value_type: String::new(),
        }
    }

    /// Mark the option as consuming a value token.
    pub fn requires_value(mut self, requires_value: bool) -> Self {
        self.requires_value = requires_value;
        self
    }

    /// Set the value used when the option is absent.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Set the value placeholder label for help text.
    pub fn value_type(mut self, label: impl Into<String>) -> Self {
        self.value_type = label.into();
        self
    }

    /// Usage token: `-s, --long <label>` with absent parts omitted.
    pub fn usage_token(&self) -> String {
        let mut usage = String::new();
        if !self.short_name.is_empty() {
            usage.push('-');
            usage.push_str(&self.short_name);
            if !self.name.is_empty() {
                usage.push_str(", ");
            }
        }
        if !self.name.is_empty() {
            usage.push_str("--");
            usage.push_str(&self.name);
        }
        if self.requires_value {
            let label = if self.value_type.is_empty() {
                "value"
            } else {
                &self.value_type
            };
            usage.push_str(&format!(" <{}>", label));
        }
        usage
    }
}

/// One parsed command invocation.
///
/// Populated by the tokenizer/classifier (see [`CommandContext::from_line`]
/// and [`CommandContext::from_argv`]), read-only for the dispatcher and
/// handlers afterwards. `metadata` carries out-of-band data set by callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandContext {
    pub(crate) command_name: String,
    pub(crate) options: BTreeMap<String, String>,
    pub(crate) flags: BTreeSet<String>,
    pub(crate) args: Vec<String>,
    pub(crate) metadata: BTreeMap<String, String>,
}

impl CommandContext {
    /// Create an empty context for the given command name.
    pub fn new(command_name: impl Into<String>) -> Self {
        Self {
            command_name: command_name.into(),
            ..Self::default()
        }
    }

    pub fn command_name(&self) -> &str {
        &self.command_name
    }

    pub fn set_command_name(&mut self, name: impl Into<String>) {
        self.command_name = name.into();
    }

    /// Value of an option, if present.
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Value of an option, or a fallback when absent.
    pub fn option_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.option(key).unwrap_or(default)
    }

    pub fn set_option(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.options.insert(key.into(), value.into());
    }

    pub fn options(&self) -> &BTreeMap<String, String> {
        &self.options
    }

    /// Whether a boolean flag was supplied.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }

    pub fn set_flag(&mut self, flag: impl Into<String>) {
        self.flags.insert(flag.into());
    }

    pub fn flags(&self) -> &BTreeSet<String> {
        &self.flags
    }

    /// Positional argument by index.
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// Positional argument by index, or a fallback when out of range.
    pub fn arg_or<'a>(&'a self, index: usize, default: &'a str) -> &'a str {
        self.arg(index).unwrap_or(default)
    }

    pub fn push_arg(&mut self, arg: impl Into<String>) {
        self.args.push(arg.into());
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// Out-of-band metadata set by callers (never touched by parsing).
    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }
}
