//! REPL command handlers.
//!
//! Each command is implemented as a separate function for maintainability.

use std::path::Path;

use colored::Colorize;
use comfy_table::Table;
use supplygraph_core::{reachable, shortest_path, FlowStore, TraversalConfig};

use crate::repl::ReplConfig;

/// Result of a REPL command execution.
pub enum CommandResult {
    Continue,
    Quit,
    Error(String),
}

/// Handle a REPL command (line starting with '.')
pub fn handle_command(store: &mut FlowStore, line: &str, config: &mut ReplConfig) -> CommandResult {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let cmd = parts.first().map(|s| s.to_lowercase()).unwrap_or_default();

    match cmd.as_str() {
        ".quit" | ".exit" | ".q" => CommandResult::Quit,
        ".help" | ".h" => {
            print_help();
            CommandResult::Continue
        }
        ".add" => cmd_add(store, &parts),
        ".remove" => cmd_remove(store, &parts),
        ".link" => cmd_link(store, &parts),
        ".unlink" => cmd_unlink(store, &parts),
        ".list" => cmd_list(store),
        ".path" => cmd_path(store, &parts),
        ".reach" => cmd_reach(store, config, &parts),
        ".count" => cmd_count(store),
        ".export" => cmd_export(store, &parts),
        ".import" => cmd_import(store, &parts),
        ".clear" => cmd_clear(store),
        ".timing" => cmd_timing(config, &parts),
        _ => CommandResult::Error(format!("Unknown command: {cmd}. Try .help")),
    }
}

fn cmd_add(store: &mut FlowStore, parts: &[&str]) -> CommandResult {
    let Some(entity) = parts.get(1) else {
        println!("Usage: .add <entity>\n");
        return CommandResult::Continue;
    };
    match store.add_entity(entity) {
        Ok(()) => {
            println!("{} added to the supply chain.\n", entity.green());
            CommandResult::Continue
        }
        Err(err) => CommandResult::Error(err.to_string()),
    }
}

fn cmd_remove(store: &mut FlowStore, parts: &[&str]) -> CommandResult {
    let Some(entity) = parts.get(1) else {
        println!("Usage: .remove <entity>\n");
        return CommandResult::Continue;
    };
    match store.remove_entity(entity) {
        Ok(()) => {
            println!("{} removed from the supply chain.\n", entity.green());
            CommandResult::Continue
        }
        Err(err) => CommandResult::Error(err.to_string()),
    }
}

fn cmd_link(store: &mut FlowStore, parts: &[&str]) -> CommandResult {
    let (Some(from), Some(to)) = (parts.get(1), parts.get(2)) else {
        println!("Usage: .link <from> <to>\n");
        return CommandResult::Continue;
    };
    match store.add_flow(from, to) {
        Ok(()) => {
            println!("Flow added from {} to {}.\n", from.green(), to.green());
            CommandResult::Continue
        }
        Err(err) => CommandResult::Error(err.to_string()),
    }
}

fn cmd_unlink(store: &mut FlowStore, parts: &[&str]) -> CommandResult {
    let (Some(from), Some(to)) = (parts.get(1), parts.get(2)) else {
        println!("Usage: .unlink <from> <to>\n");
        return CommandResult::Continue;
    };
    match store.remove_flow(from, to) {
        Ok(()) => {
            println!("Flow removed from {} to {}.\n", from.green(), to.green());
            CommandResult::Continue
        }
        Err(err) => CommandResult::Error(err.to_string()),
    }
}

fn cmd_list(store: &FlowStore) -> CommandResult {
    if store.is_empty() {
        println!("The supply chain is empty.\n");
        return CommandResult::Continue;
    }
    let mut table = Table::new();
    table.set_header(vec!["Entity", "Flows to"]);
    for (entity, outgoing) in store.entries() {
        table.add_row(vec![entity.to_string(), outgoing.join(", ")]);
    }
    println!("{table}\n");
    CommandResult::Continue
}

fn cmd_path(store: &FlowStore, parts: &[&str]) -> CommandResult {
    let (Some(start), Some(end)) = (parts.get(1), parts.get(2)) else {
        println!("Usage: .path <start> <end>\n");
        return CommandResult::Continue;
    };
    match shortest_path(store, start, end) {
        Ok(path) => {
            println!(
                "Shortest path from {} to {}: {}\n",
                start.green(),
                end.green(),
                path.join(" -> ").cyan()
            );
            CommandResult::Continue
        }
        Err(err) => CommandResult::Error(err.to_string()),
    }
}

fn cmd_reach(store: &FlowStore, config: &ReplConfig, parts: &[&str]) -> CommandResult {
    let Some(source) = parts.get(1) else {
        println!("Usage: .reach <entity> [max_depth]\n");
        return CommandResult::Continue;
    };
    if !store.contains(source) {
        return CommandResult::Error(format!("entity '{source}' not found"));
    }
    let max_depth: usize = parts
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(config.traversal.max_depth);
    let traversal = TraversalConfig::new(max_depth, config.traversal.limit);

    let steps = reachable(store, source, &traversal);
    if steps.is_empty() {
        println!(
            "Nothing reachable from {} within {} flows.\n",
            source.green(),
            max_depth
        );
        return CommandResult::Continue;
    }

    let mut table = Table::new();
    table.set_header(vec!["Entity", "Depth", "Via"]);
    for step in &steps {
        table.add_row(vec![
            step.entity.clone(),
            step.depth.to_string(),
            step.path.join(" -> "),
        ]);
    }
    println!("{table}\n");
    CommandResult::Continue
}

fn cmd_count(store: &FlowStore) -> CommandResult {
    println!(
        "{} {} entities, {} flows\n",
        "Totals:".bold(),
        store.entity_count(),
        store.flow_count()
    );
    CommandResult::Continue
}

fn cmd_export(store: &FlowStore, parts: &[&str]) -> CommandResult {
    let filename = parts
        .get(1)
        .map_or_else(|| "supplygraph.json".to_string(), ToString::to_string);

    let snapshot = store.snapshot();
    let json = match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => json,
        Err(err) => return CommandResult::Error(format!("failed to serialize snapshot: {err}")),
    };
    match std::fs::write(&filename, json) {
        Ok(()) => {
            println!(
                "Exported {} entities to {}.\n",
                snapshot.len(),
                filename.green()
            );
            CommandResult::Continue
        }
        Err(err) => CommandResult::Error(format!("failed to write file: {err}")),
    }
}

fn cmd_import(store: &mut FlowStore, parts: &[&str]) -> CommandResult {
    let Some(filename) = parts.get(1) else {
        println!("Usage: .import <file.csv>\n");
        return CommandResult::Continue;
    };
    match crate::import::load_csv(store, Path::new(filename)) {
        Ok(summary) => {
            println!(
                "Imported {} entities and {} flows ({} rows skipped).\n",
                summary.entities_added, summary.flows_added, summary.rows_skipped
            );
            CommandResult::Continue
        }
        Err(err) => CommandResult::Error(format!("{err:#}")),
    }
}

fn cmd_clear(store: &mut FlowStore) -> CommandResult {
    store.clear();
    println!("Supply chain cleared.\n");
    CommandResult::Continue
}

fn cmd_timing(config: &mut ReplConfig, parts: &[&str]) -> CommandResult {
    if parts.len() < 2 {
        println!("Timing is {}\n", if config.timing { "ON" } else { "OFF" });
    } else {
        match parts[1].to_lowercase().as_str() {
            "on" | "true" | "1" => {
                config.timing = true;
                println!("Timing ON\n");
            }
            "off" | "false" | "0" => {
                config.timing = false;
                println!("Timing OFF\n");
            }
            _ => {
                return CommandResult::Error("Use: .timing on|off".to_string());
            }
        }
    }
    CommandResult::Continue
}

/// Print help text for REPL commands
pub fn print_help() {
    println!("\n{}", "SupplyGraph Commands".bold().underline());
    println!();
    println!("  {}              Add an entity", ".add <entity>".yellow());
    println!(
        "  {}           Remove an entity and all its flows",
        ".remove <entity>".yellow()
    );
    println!(
        "  {}          Add a flow between entities",
        ".link <from> <to>".yellow()
    );
    println!(
        "  {}        Remove one flow occurrence",
        ".unlink <from> <to>".yellow()
    );
    println!("  {}                      List the supply chain", ".list".yellow());
    println!(
        "  {}        Shortest path by flow count",
        ".path <start> <end>".yellow()
    );
    println!(
        "  {}    Entities reachable from one",
        ".reach <entity> [depth]".yellow()
    );
    println!("  {}                     Entity and flow totals", ".count".yellow());
    println!(
        "  {}            Export snapshot as JSON",
        ".export [file]".yellow()
    );
    println!(
        "  {}        Import a CSV edge list",
        ".import <file.csv>".yellow()
    );
    println!("  {}                     Remove everything", ".clear".yellow());
    println!(
        "  {}            Toggle elapsed-time display",
        ".timing on|off".yellow()
    );
    println!("  {}                      Show this help", ".help".yellow());
    println!("  {}                      Exit the shell", ".quit".yellow());
    println!();
    println!("Entity names are single whitespace-delimited tokens and are");
    println!("matched exactly (no case or whitespace normalization).");
    println!();
}
