//! Semantic Shell - Entry Point
//!
//! Interactive shell around the interpreter session: free text becomes
//! semantic commands, a handful of builtins inspect the registry, and
//! every command produces exactly one system log line.

use clap::Parser;
use semantic_shell::core::error::{Result, ShellError};
use semantic_shell::core::schema::schema;
use semantic_shell::entity::element::{Element, ElementKind};
use semantic_shell::session::events::{LogEvent, LogLevel};
use semantic_shell::session::Session;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Interactive semantic command shell
#[derive(Parser, Debug)]
#[command(name = "semantic-shell")]
#[command(about = "Translate free-text commands into typed entity mutations")]
struct Args {
    /// Seed for deterministic id generation
    #[arg(long)]
    seed: Option<u64>,

    /// Run commands from a file instead of stdin, then exit
    #[arg(long)]
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("semantic_shell=info")
        .init();

    let args = Args::parse();
    schema().validate().map_err(ShellError::InvalidSchema)?;

    let mut session = match args.seed {
        Some(seed) => Session::with_seed(seed),
        None => Session::new(),
    };

    tracing::info!("semantic shell starting");
    print_log(&Session::startup_log());

    if let Some(path) = args.script {
        let script = fs::read_to_string(&path)?;
        for line in script.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if !handle_builtin(&mut session, line)? {
                process_line(&mut session, line);
            }
        }
        return Ok(());
    }

    print_help();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "q" {
            break;
        }
        if input == "help" {
            print_help();
            continue;
        }
        if !handle_builtin(&mut session, input)? {
            process_line(&mut session, input);
        }
    }

    println!(
        "\nGoodbye! {} element(s) created this session.",
        session.registry().len()
    );
    Ok(())
}

fn print_help() {
    println!();
    println!("=== SEMANTIC SHELL ===");
    println!("Free-text commands create and mutate canvas elements");
    println!();
    println!("Commands:");
    println!("  status / s      - List elements in creation order");
    println!("  dump            - Print the registry as JSON");
    println!("  help            - Show this message");
    println!("  quit / q        - Exit");
    println!("  <any text>      - Semantic command");
    println!();
}

/// Handle registry inspection builtins; returns false for semantic text
fn handle_builtin(session: &mut Session, input: &str) -> Result<bool> {
    if input == "status" || input == "s" {
        display_status(session);
        return Ok(true);
    }
    if input == "dump" {
        let elements: Vec<&Element> = session.registry().iter().collect();
        println!("{}", serde_json::to_string_pretty(&elements)?);
        return Ok(true);
    }
    Ok(false)
}

fn process_line(session: &mut Session, input: &str) {
    println!("Human: {}", input);
    if let Some(report) = session.process(input) {
        print_log(&report.log);
    }
}

fn print_log(log: &LogEvent) {
    match log.level {
        LogLevel::Error => println!("System: [!] {}", log.text),
        _ => println!("System: {}", log.text),
    }
}

fn display_status(session: &Session) {
    println!();
    println!("--- {} element(s) ---", session.registry().len());
    for element in session.registry().iter() {
        println!("  {}  {}  {}", element.id, element.role, describe(element));
    }
    println!();
}

/// One-line state summary per element, mirroring what a widget header
/// would show
fn describe(element: &Element) -> String {
    match &element.kind {
        ElementKind::Base => element.title.clone(),
        ElementKind::Metric { value } => format!("{} ({}%)", element.title, value),
        ElementKind::DataView { items } => {
            format!("{} [{} items]", element.title, items.len())
        }
        ElementKind::Status { active } => {
            let state = if *active { "ONLINE" } else { "OFFLINE" };
            format!("{} {}", element.title, state)
        }
    }
}
