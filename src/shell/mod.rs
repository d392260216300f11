//! Shell layer: the dispatch pipeline and public entry points
//!
//! A [`Shell`] owns the command registry and the settings, wires parsing to
//! resolution, validation, and handler invocation, and prints diagnostics.
//! Every entry point returns a boolean success indicator; no failure path
//! terminates the host process.

pub mod output;
pub mod repl;

use tracing::debug;

use crate::application::registry::CommandRegistry;
use crate::application::{help, suggest};
use crate::domain::{
    CommandContext, CommandDefinition, OptionDefinition, ParameterDefinition, ParameterType,
};
use crate::settings::Settings;

/// Line-oriented command interface: registry, dispatcher, and help system.
///
/// Construct one at startup, register commands, then feed it input through
/// [`Shell::process_line`], [`Shell::process_args`], [`Shell::run_batch`], or
/// the interactive loop. Registration is expected to finish before dispatch
/// begins; no internal locking is provided.
pub struct Shell {
    registry: CommandRegistry,
    settings: Settings,
    global_options: Vec<OptionDefinition>,
}

impl Shell {
    /// A shell with default settings and the built-in `help` and `list`
    /// commands registered.
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        if !settings.color_output {
            colored::control::set_override(false);
        }
        let mut shell = Self {
            registry: CommandRegistry::new(),
            settings,
            global_options: default_global_options(),
        };
        shell.register_builtins();
        shell
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Register a command, reporting failures to the terminal.
    ///
    /// An empty name aborts this registration only. A duplicate name warns
    /// and overwrites.
    pub fn register(&mut self, definition: CommandDefinition) -> bool {
        if self.registry.contains_name(definition.name()) {
            output::warning(&format!(
                "command '{}' already exists and will be overwritten",
                definition.name()
            ));
        }
        match self.registry.register(definition) {
            Ok(()) => true,
            Err(error) => {
                output::error(&error);
                false
            }
        }
    }

    /// Parse and dispatch one line of free text.
    pub fn process_line(&self, input: &str) -> bool {
        let context = CommandContext::from_line(input);
        self.dispatch(&context)
    }

    /// Dispatch an argv-style token list where index 0 is the command name.
    pub fn process_args<S: AsRef<str>>(&self, argv: &[S]) -> bool {
        if argv.is_empty() {
            return true;
        }
        let context = CommandContext::from_argv(argv);
        self.dispatch(&context)
    }

    /// Dispatch a flat token list as a sequence of commands.
    ///
    /// Every token not starting with `-` begins a new command; the following
    /// non-`-` tokens become its positional arguments. `-`-prefixed tokens
    /// between commands are skipped. Returns overall success only if every
    /// dispatched command succeeded.
    pub fn run_batch<S: AsRef<str>>(&self, tokens: &[S]) -> bool {
        let mut all_ok = true;
        let mut index = 0;

        while index < tokens.len() {
            let token = tokens[index].as_ref();
            if token.starts_with('-') {
                index += 1;
                continue;
            }

            let mut context = CommandContext::new(token);
            while index + 1 < tokens.len() && !tokens[index + 1].as_ref().starts_with('-') {
                index += 1;
                context.push_arg(tokens[index].as_ref());
            }

            if !self.dispatch(&context) {
                all_ok = false;
            }
            index += 1;
        }

        all_ok
    }

    /// Run a parsed context through the dispatch pipeline.
    ///
    /// Empty command names are a no-op success. A help request (`-h` or
    /// `--help` in any position) prints detailed help and reports success
    /// without ever invoking the handler. Unknown names, validation
    /// failures, execution errors, and semantic failures all report and
    /// return `false`.
    pub fn dispatch(&self, context: &CommandContext) -> bool {
        let name = context.command_name();
        if name.is_empty() {
            return true;
        }
        debug!(command = name, "dispatching");

        let Some(definition) = self.registry.resolve(name) else {
            self.report_unknown(name);
            return false;
        };

        if help_requested(context) {
            output::info(&help::command_help(definition, true));
            return true;
        }

        if let Err(error) = definition.validate_arguments(context) {
            output::error(&error);
            if self.settings.auto_help {
                output::info(&format!(
                    "\nUsage help:\n{}",
                    help::command_help(definition, false)
                ));
            }
            return false;
        }

        if !definition.is_executable() {
            return self.run_builtin(definition, context);
        }

        match definition.execute(context) {
            Ok(true) => true,
            Ok(false) => {
                self.show_failure_help(definition);
                false
            }
            Err(error) => {
                output::error(&format!("command execution failed: {}", error));
                self.show_failure_help(definition);
                false
            }
        }
    }

    /// Print detailed help for a name or alias, or the listing when it does
    /// not resolve.
    pub fn show_command_help(&self, name: &str) {
        match self.registry.resolve(name) {
            Some(definition) => output::info(&help::command_help(definition, true)),
            None => {
                output::info(&format!("Unknown command: {}", name));
                self.show_all_commands(true);
            }
        }
    }

    /// Print the registry listing.
    pub fn show_all_commands(&self, by_category: bool) {
        output::info(&help::registry_listing(&self.registry, by_category));
    }

    /// Print global help with the global options table.
    pub fn show_global_help(&self) {
        output::info(&help::global_help(&self.global_options));
    }

    fn show_failure_help(&self, definition: &CommandDefinition) {
        if self.settings.auto_help {
            output::info(&format!(
                "\nCommand failed, see usage:\n{}",
                help::command_help(definition, false)
            ));
        }
    }

    fn report_unknown(&self, name: &str) {
        output::error(&format!("unknown command '{}'", name));

        let found = suggest::suggestions(&self.registry, name, self.settings.max_suggestions);
        if found.is_empty() {
            output::info("\nUse 'list' to see all available commands\n");
        } else {
            output::info("\nDid you mean one of these?");
            for definition in found {
                output::suggestion(definition.name(), definition.description());
            }
            output::info("");
        }
    }

    /// Built-ins carry no handler; the shell executes them with registry
    /// access the capability interface cannot offer.
    fn run_builtin(&self, definition: &CommandDefinition, context: &CommandContext) -> bool {
        match definition.name() {
            "help" => {
                match context.arg(0) {
                    Some(name) => self.show_command_help(name),
                    None => self.show_global_help(),
                }
                true
            }
            "list" => {
                let by_category = context.has_flag("c") || context.has_flag("category");
                self.show_all_commands(by_category);
                true
            }
            _ => {
                self.show_failure_help(definition);
                false
            }
        }
    }

    fn register_builtins(&mut self) {
        let help_command = CommandDefinition::new("help", "Show help information")
            .alias("?")
            .parameter(
                ParameterDefinition::new("command", "Command name").ty(ParameterType::Command),
            )
            .example("help              # global help")
            .example("help <command>    # help for one command");

        let list_command = CommandDefinition::new("list", "List all available commands")
            .option(OptionDefinition::new("category", "c", "Group by category"))
            .example("list       # all commands, sorted")
            .example("list -c    # grouped by category");

        // Built-in names are never empty, registration cannot fail
        let _ = self.registry.register(help_command);
        let _ = self.registry.register(list_command);
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the context asks for help.
///
/// `--help` followed by a positional argument classifies as an option with a
/// value rather than a flag, so both shapes count: a help request wins over
/// everything regardless of where it sits among the arguments.
fn help_requested(context: &CommandContext) -> bool {
    context.has_flag("h")
        || context.has_flag("help")
        || context.option("h").is_some()
        || context.option("help").is_some()
}

fn default_global_options() -> Vec<OptionDefinition> {
    vec![
        OptionDefinition::new("help", "h", "Show help information"),
        OptionDefinition::new("verbose", "v", "Verbose output"),
        OptionDefinition::new("quiet", "q", "Quiet mode, reduce output"),
        OptionDefinition::new("version", "V", "Show version information"),
        OptionDefinition::new("config", "c", "Configuration file")
            .requires_value(true)
            .value_type("file path"),
    ]
}
