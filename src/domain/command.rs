//! Command definitions, the handler capability, and argument validation

use std::fmt;

use crate::domain::entities::{CommandContext, OptionDefinition, ParameterDefinition};
use crate::domain::error::{ExecutionError, ValidationError};

/// Category assigned to definitions that never set one.
pub const DEFAULT_CATEGORY: &str = "General";

/// Sentinel parameter name marking unlimited trailing positional arguments.
pub const VARIADIC_PARAMETER: &str = "...";

/// Outcome of a handler invocation.
///
/// `Ok(true)` is success, `Ok(false)` is a semantic failure (the command ran
/// but did not achieve its purpose), `Err` is an execution error with a
/// message. The dispatcher converts all three into its boolean return; errors
/// never propagate past it.
pub type HandlerResult = Result<bool, ExecutionError>;

/// Capability interface for command handlers.
///
/// Any closure `Fn(&CommandContext) -> HandlerResult` qualifies through the
/// blanket impl, and so does any stateful type implementing the trait
/// directly.
pub trait Command {
    fn execute(&self, context: &CommandContext) -> HandlerResult;
}

impl<F> Command for F
where
    F: Fn(&CommandContext) -> HandlerResult,
{
    fn execute(&self, context: &CommandContext) -> HandlerResult {
        self(context)
    }
}

/// Full description of one registrable command: metadata, declared
/// parameters and options, and an optional handler.
///
/// Built fluently:
///
/// ```
/// use cmdkit::{CommandDefinition, HandlerResult, ParameterDefinition};
///
/// let def = CommandDefinition::new("echo", "Print the arguments")
///     .alias("print")
///     .parameter(ParameterDefinition::new("...", "Text to print"))
///     .handler(|ctx: &cmdkit::CommandContext| -> HandlerResult {
///         println!("{}", ctx.args().join(" "));
///         Ok(true)
///     });
/// assert_eq!(def.usage(), "echo [...]");
/// ```
pub struct CommandDefinition {
    name: String,
    description: String,
    category: String,
    usage: String,
    aliases: Vec<String>,
    parameters: Vec<ParameterDefinition>,
    options: Vec<OptionDefinition>,
    handler: Option<Box<dyn Command>>,
    examples: Vec<String>,
    version: String,
    author: String,
    help_text: String,
}

impl CommandDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category: DEFAULT_CATEGORY.to_string(),
            usage: String::new(),
            aliases: Vec::new(),
            parameters: Vec::new(),
            options: Vec::new(),
            handler: None,
            examples: Vec::new(),
            version: String::new(),
            author: String::new(),
            help_text: String::new(),
        }
    }

    /// Set the category used to group the command in listings.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Override the synthesized usage line.
    pub fn usage_override(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Add an alternative name. Aliases must be unique across a registry.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Append a positional parameter. Only the last one may be variadic.
    pub fn parameter(mut self, parameter: ParameterDefinition) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Append an option.
    pub fn option(mut self, option: OptionDefinition) -> Self {
        self.options.push(option);
        self
    }

    /// Attach the handler invoked on dispatch.
    pub fn handler(mut self, handler: impl Command + 'static) -> Self {
        self.handler = Some(Box::new(handler));
        self
    }

    /// Add a usage example, shown in detailed help only.
    pub fn example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set a custom help text, returned instead of generated help unless
    /// detailed help is requested.
    pub fn help_text(mut self, text: impl Into<String>) -> Self {
        self.help_text = text.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category_name(&self) -> &str {
        &self.category
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn parameters(&self) -> &[ParameterDefinition] {
        &self.parameters
    }

    pub fn options(&self) -> &[OptionDefinition] {
        &self.options
    }

    pub fn examples(&self) -> &[String] {
        &self.examples
    }

    pub fn version_str(&self) -> &str {
        &self.version
    }

    pub fn author_str(&self) -> &str {
        &self.author
    }

    pub fn custom_help_text(&self) -> &str {
        &self.help_text
    }

    /// Whether a handler is attached.
    pub fn is_executable(&self) -> bool {
        self.handler.is_some()
    }

    /// Invoke the handler. Without one the invocation is a semantic failure.
    pub fn execute(&self, context: &CommandContext) -> HandlerResult {
        match &self.handler {
            Some(handler) => handler.execute(context),
            None => Ok(false),
        }
    }

    /// Whether the last declared parameter is the variadic sentinel.
    pub fn is_variadic(&self) -> bool {
        self.parameters
            .last()
            .is_some_and(|p| p.name == VARIADIC_PARAMETER)
    }

    /// Check supplied positional arguments against the declared parameters.
    ///
    /// The checks are purely positional: a required parameter fails when its
    /// index is beyond the supplied count, and a non-variadic command fails
    /// when more arguments arrive than parameters were declared. Individual
    /// values are never inspected.
    pub fn validate_arguments(&self, context: &CommandContext) -> Result<(), ValidationError> {
        let supplied = context.arg_count();

        for (index, parameter) in self.parameters.iter().enumerate() {
            if parameter.required && index >= supplied {
                return Err(ValidationError::MissingParameter {
                    name: parameter.name.clone(),
                });
            }
        }

        if !self.is_variadic() && supplied > self.parameters.len() {
            return Err(ValidationError::TooManyArguments {
                max: self.parameters.len(),
            });
        }

        Ok(())
    }

    /// The usage line: the explicit override when set, otherwise synthesized
    /// from the declared parameters, with a generic options placeholder when
    /// any options are declared.
    pub fn usage(&self) -> String {
        if !self.usage.is_empty() {
            return self.usage.clone();
        }

        let mut usage = self.name.clone();
        for parameter in &self.parameters {
            usage.push(' ');
            usage.push_str(&parameter.usage_token());
        }
        if !self.options.is_empty() {
            usage.push_str(" [options...]");
        }
        usage
    }
}

impl fmt::Debug for CommandDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("category", &self.category)
            .field("aliases", &self.aliases)
            .field("parameters", &self.parameters)
            .field("options", &self.options)
            .field("handler", &self.handler.as_ref().map(|_| "..."))
            .finish_non_exhaustive()
    }
}
