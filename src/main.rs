// Sanskritam: offline fallback engine for the dual-script toy language

use std::fs;
use std::path::Path;
use std::process;

use sanskritam::{lex, run, ScriptMode};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("sanskritam");

    let mut script = ScriptMode::Roman;
    let mut lex_only = false;
    let mut emit_json = false;
    let mut file: Option<&str> = None;

    for arg in &args[1..] {
        match arg.as_str() {
            "--devanagari" => script = ScriptMode::Devanagari,
            "--lex" => lex_only = true,
            "--json" => emit_json = true,
            other if other.starts_with("--") => {
                eprintln!("Error: Unknown option '{}'", other);
                eprintln!();
                print_usage(program_name);
                process::exit(1);
            }
            other => file = Some(other),
        }
    }

    let file = match file {
        Some(file) => file,
        None => {
            eprintln!("Error: No input file provided");
            eprintln!();
            print_usage(program_name);
            process::exit(1);
        }
    };

    if !Path::new(file).exists() {
        eprintln!("Error: File '{}' not found", file);
        process::exit(1);
    }

    let source = match fs::read_to_string(file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: Failed to read '{}': {}", file, e);
            process::exit(1);
        }
    };

    if lex_only {
        let (tokens, errors) = lex(&source);
        for token in &tokens {
            println!("{}:{}: {}", token.line, token.column, token);
        }
        for error in &errors {
            eprintln!("{}", error);
        }
        if !errors.is_empty() {
            process::exit(1);
        }
        return;
    }

    let result = run(&source, script);

    if emit_json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: Failed to serialize result: {}", e);
                process::exit(1);
            }
        }
        if !result.errors.is_empty() {
            process::exit(1);
        }
        return;
    }

    if !result.errors.is_empty() {
        for error in &result.errors {
            eprintln!("{}", error);
        }
        process::exit(1);
    }

    if !result.stdout.is_empty() {
        println!("{}", result.stdout);
    }
    eprintln!("{}", result.explanation);
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [options] <file.skt>", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --devanagari   Treat the source as Devanagari-script input");
    eprintln!("  --lex          Print tokens and lexical diagnostics, don't execute");
    eprintln!("  --json         Print the full engine result as JSON");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} program.skt", program);
    eprintln!("  {} --json program.skt      # for the editor/debugger", program);
}
