//! Embeddable line-oriented command interfaces.
//!
//! `cmdkit` turns raw text or argv-style token lists into structured,
//! validated command invocations, resolves names and aliases against a
//! registry, generates help text, and suggests similar commands for unknown
//! names. It is the core behind an interactive prompt, process-argument
//! handling, or scripted batches; the read loop and the commands themselves
//! belong to the host application.
//!
//! ```
//! use cmdkit::{CommandContext, CommandDefinition, HandlerResult, ParameterDefinition, Shell};
//!
//! let mut shell = Shell::new();
//! shell.register(
//!     CommandDefinition::new("add", "Add two integers")
//!         .parameter(ParameterDefinition::new("a", "First addend").required(true))
//!         .parameter(ParameterDefinition::new("b", "Second addend").required(true))
//!         .handler(|ctx: &CommandContext| -> HandlerResult {
//!             let a: i64 = ctx.arg_or(0, "0").parse().map_err(|_| "not a number")?;
//!             let b: i64 = ctx.arg_or(1, "0").parse().map_err(|_| "not a number")?;
//!             println!("{}", a + b);
//!             Ok(true)
//!         }),
//! );
//!
//! assert!(shell.process_line("add 3 4"));
//! ```

pub mod application;
pub mod domain;
pub mod settings;
pub mod shell;
pub mod util;

pub use application::help;
pub use application::registry::{CommandRegistry, RegistryError};
pub use application::suggest;
pub use domain::command::{
    Command, CommandDefinition, HandlerResult, DEFAULT_CATEGORY, VARIADIC_PARAMETER,
};
pub use domain::context::tokenize;
pub use domain::entities::{CommandContext, OptionDefinition, ParameterDefinition, ParameterType};
pub use domain::error::{ExecutionError, ValidationError};
pub use settings::Settings;
pub use shell::Shell;
