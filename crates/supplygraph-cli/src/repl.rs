//! Interactive loop: line editing, history, and command dispatch.

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use supplygraph_core::{FlowStore, SupplyConfig, TraversalSettings};

use crate::repl_commands::{handle_command, CommandResult};

/// Session-scoped REPL settings.
pub struct ReplConfig {
    /// Print elapsed time after each command.
    pub timing: bool,
    /// Default bounds for `.reach`.
    pub traversal: TraversalSettings,
}

/// Runs the interactive loop until `.quit` or end of input.
pub fn run(store: &mut FlowStore, config: &SupplyConfig) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    let history_path = dirs::home_dir().map(|home| home.join(".supplygraph_history"));
    if let Some(path) = &history_path {
        // Missing history is normal on first run.
        let _ = editor.load_history(path);
    }

    println!("{}", "SupplyGraph interactive shell".bold());
    println!(
        "Type {} for the command list, {} to leave.\n",
        ".help".yellow(),
        ".quit".yellow()
    );

    let mut repl_config = ReplConfig {
        timing: false,
        traversal: config.traversal.clone(),
    };

    loop {
        match editor.readline("supplygraph> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);

                let started = instant::Instant::now();
                match handle_command(store, line, &mut repl_config) {
                    CommandResult::Continue => {}
                    CommandResult::Quit => break,
                    CommandResult::Error(message) => {
                        println!("{} {}\n", "error:".red().bold(), message);
                    }
                }
                if repl_config.timing {
                    println!("{} {:?}\n", "elapsed:".dimmed(), started.elapsed());
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(path) = &history_path {
        let _ = editor.save_history(path);
    }
    println!("Exiting the supply chain shell.");
    Ok(())
}
