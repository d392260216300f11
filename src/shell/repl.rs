//! Interactive read loop
//!
//! A thin collaborator around the dispatch pipeline: prompt, read a line,
//! dispatch, repeat. `exit`/`quit`, bare `help`, and bare `list` are
//! intercepted before dispatch; EOF terminates the loop.

use std::io::BufRead;

use crate::shell::{output, Shell};

impl Shell {
    /// Run the interactive loop on stdin until `exit`, `quit`, or EOF.
    pub fn run_interactive(&self) {
        let stdin = std::io::stdin();
        self.run_interactive_from(stdin.lock());
    }

    /// Run the interactive loop on any buffered reader.
    pub fn run_interactive_from<R: BufRead>(&self, reader: R) {
        output::header("Interactive mode");
        output::info("Type 'help' for help, 'list' to list commands, 'exit' to quit\n");
        output::prompt(&self.settings().prompt);

        for line in reader.lines() {
            let Ok(line) = line else {
                break;
            };
            let input = line.trim();
            if input.is_empty() {
                output::prompt(&self.settings().prompt);
                continue;
            }

            match input {
                "exit" | "quit" => {
                    output::info("Bye!");
                    break;
                }
                "help" => self.show_global_help(),
                "list" => self.show_all_commands(true),
                _ => {
                    if !self.process_line(input) && self.settings().verbose_errors {
                        output::info("Command failed, type 'help' for help");
                    }
                }
            }
            output::prompt(&self.settings().prompt);
        }
    }
}
