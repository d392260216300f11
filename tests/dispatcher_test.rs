//! End-to-end dispatch tests through the Shell

use std::cell::RefCell;
use std::rc::Rc;

use cmdkit::util::testing::init_test_setup;
use cmdkit::{
    CommandContext, CommandDefinition, ExecutionError, HandlerResult, ParameterDefinition, Shell,
};

/// Shell with an `add` command that records the arguments it saw.
fn shell_with_add() -> (Shell, Rc<RefCell<Vec<String>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_in_handler = Rc::clone(&seen);

    let mut shell = Shell::new();
    shell.register(
        CommandDefinition::new("add", "Add two integers")
            .parameter(ParameterDefinition::new("a", "First addend").required(true))
            .parameter(ParameterDefinition::new("b", "Second addend").required(true))
            .handler(move |ctx: &CommandContext| -> HandlerResult {
                seen_in_handler.borrow_mut().extend(ctx.args().iter().cloned());
                let a: i64 = ctx.arg_or(0, "0").parse().map_err(|_| "not a number")?;
                let b: i64 = ctx.arg_or(1, "0").parse().map_err(|_| "not a number")?;
                Ok(a.checked_add(b).is_some())
            }),
    );
    (shell, seen)
}

#[test]
fn given_add_command_when_processing_line_then_handler_sees_both_args() {
    init_test_setup();

    // Arrange
    let (shell, seen) = shell_with_add();

    // Act
    let ok = shell.process_line("add 3 4");

    // Assert
    assert!(ok);
    assert_eq!(seen.borrow().as_slice(), ["3", "4"]);
}

#[test]
fn given_flags_and_args_when_processing_line_then_classification_reaches_handler() {
    // Arrange
    let observed = Rc::new(RefCell::new(None));
    let observed_in_handler = Rc::clone(&observed);

    let mut shell = Shell::new();
    shell.register(
        CommandDefinition::new("rm", "Remove files")
            .parameter(ParameterDefinition::new("...", "Targets"))
            .handler(move |ctx: &CommandContext| -> HandlerResult {
                *observed_in_handler.borrow_mut() = Some(ctx.clone());
                Ok(true)
            }),
    );

    // Act
    let ok = shell.process_line("rm -rf dir");

    // Assert
    assert!(ok);
    let context = observed.borrow().clone().expect("handler ran");
    assert_eq!(context.args(), ["dir"]);
    assert!(context.has_flag("r"));
    assert!(context.has_flag("f"));
    assert!(context.options().is_empty());
}

#[test]
fn given_help_flag_when_dispatching_then_handler_never_runs_even_with_bad_args() {
    // Arrange
    let called = Rc::new(RefCell::new(false));
    let called_in_handler = Rc::clone(&called);

    let mut shell = Shell::new();
    shell.register(
        CommandDefinition::new("greet", "Say hello")
            .parameter(ParameterDefinition::new("name", "Who").required(true))
            .handler(move |_: &CommandContext| -> HandlerResult {
                *called_in_handler.borrow_mut() = true;
                Ok(true)
            }),
    );

    // Act: argument count is invalid, help still wins and reports success
    let with_excess = shell.process_line("greet --help a b c d");
    let with_short_flag = shell.process_line("greet -h");

    // Assert
    assert!(with_excess);
    assert!(with_short_flag);
    assert!(!*called.borrow());
}

#[test]
fn given_unknown_command_when_dispatching_then_failure() {
    let (shell, _) = shell_with_add();
    assert!(!shell.process_line("addd 1 2"));
}

#[test]
fn given_validation_failure_when_dispatching_then_handler_never_runs() {
    // Arrange
    let (shell, seen) = shell_with_add();

    // Act
    let ok = shell.process_line("add 1");

    // Assert
    assert!(!ok);
    assert!(seen.borrow().is_empty());
}

#[test]
fn given_empty_input_when_dispatching_then_noop_success() {
    let (shell, _) = shell_with_add();
    assert!(shell.process_line(""));
    assert!(shell.process_line("   "));
}

#[test]
fn given_handler_error_when_dispatching_then_failure_is_contained() {
    // Arrange
    let mut shell = Shell::new();
    shell.register(
        CommandDefinition::new("boom", "Always errors").handler(
            |_: &CommandContext| -> HandlerResult {
                Err(ExecutionError::new("wire fell out"))
            },
        ),
    );

    // Act / Assert: the error is converted, never propagated
    assert!(!shell.process_line("boom"));
}

#[test]
fn given_semantic_failure_when_dispatching_then_false_returns() {
    let mut shell = Shell::new();
    shell.register(
        CommandDefinition::new("deny", "Always refuses")
            .handler(|_: &CommandContext| -> HandlerResult { Ok(false) }),
    );
    assert!(!shell.process_line("deny"));
}

#[test]
fn given_alias_when_dispatching_then_canonical_handler_runs() {
    // Arrange
    let called = Rc::new(RefCell::new(0));
    let called_in_handler = Rc::clone(&called);

    let mut shell = Shell::new();
    shell.register(
        CommandDefinition::new("remove", "Delete things")
            .alias("rm")
            .parameter(ParameterDefinition::new("...", "Targets"))
            .handler(move |_: &CommandContext| -> HandlerResult {
                *called_in_handler.borrow_mut() += 1;
                Ok(true)
            }),
    );

    // Act / Assert
    assert!(shell.process_line("rm x"));
    assert!(shell.process_line("remove y"));
    assert_eq!(*called.borrow(), 2);
}

#[test]
fn given_argv_entry_when_processing_then_index_zero_is_command() {
    let (shell, seen) = shell_with_add();
    let argv = ["add".to_string(), "10".to_string(), "32".to_string()];
    assert!(shell.process_args(&argv));
    assert_eq!(seen.borrow().as_slice(), ["10", "32"]);
}

#[test]
fn given_empty_argv_when_processing_then_noop_success() {
    let (shell, _) = shell_with_add();
    assert!(shell.process_args(&[] as &[&str]));
}

#[test]
fn given_batch_tokens_when_running_then_each_command_dispatches() {
    // Arrange
    let log = Rc::new(RefCell::new(Vec::new()));

    let mut shell = Shell::new();
    for name in ["first", "second"] {
        let log_in_handler = Rc::clone(&log);
        shell.register(
            CommandDefinition::new(name, "")
                .parameter(ParameterDefinition::new("...", ""))
                .handler(move |ctx: &CommandContext| -> HandlerResult {
                    log_in_handler
                        .borrow_mut()
                        .push((ctx.command_name().to_string(), ctx.args().to_vec()));
                    Ok(true)
                }),
        );
    }

    // Act: "-x" between commands is skipped by the batch loop
    let ok = shell.run_batch(&["first", "a", "b", "-x", "second", "c"]);

    // Assert
    assert!(ok);
    let log = log.borrow();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0], ("first".to_string(), vec!["a".to_string(), "b".to_string()]));
    assert_eq!(log[1], ("second".to_string(), vec!["c".to_string()]));
}

#[test]
fn given_batch_with_one_failure_when_running_then_overall_failure() {
    // Arrange
    let mut shell = Shell::new();
    shell.register(
        CommandDefinition::new("good", "")
            .handler(|_: &CommandContext| -> HandlerResult { Ok(true) }),
    );
    shell.register(
        CommandDefinition::new("bad", "")
            .handler(|_: &CommandContext| -> HandlerResult { Ok(false) }),
    );

    // Act / Assert: remaining commands still run, overall result is failure
    assert!(!shell.run_batch(&["good", "bad", "good"]));
}

#[test]
fn given_builtin_help_when_dispatching_then_success() {
    let (shell, seen) = shell_with_add();
    assert!(shell.process_line("help"));
    assert!(shell.process_line("help add"));
    assert!(shell.process_line("? add"));
    assert!(seen.borrow().is_empty());
}

#[test]
fn given_builtin_list_when_dispatching_then_success() {
    let (shell, _) = shell_with_add();
    assert!(shell.process_line("list"));
    assert!(shell.process_line("list -c"));
}

#[test]
fn given_empty_command_name_when_registering_then_reported_as_failure() {
    let mut shell = Shell::new();
    assert!(!shell.register(CommandDefinition::new("", "nameless")));
    assert!(shell.register(CommandDefinition::new("named", "fine")));
}

#[test]
fn given_scripted_reader_when_running_interactive_then_commands_dispatch_until_exit() {
    // Arrange
    let (shell, seen) = shell_with_add();
    let script = b"add 1 2\n\nhelp\nlist\nexit\nadd 9 9\n" as &[u8];

    // Act: everything after "exit" is never read
    shell.run_interactive_from(script);

    // Assert
    assert_eq!(seen.borrow().as_slice(), ["1", "2"]);
}
