//! chainparse CLI — inspect configuration defaults.
//!
//! Usage:
//! ```bash
//! chainparse info
//! chainparse defaults
//! chainparse version
//! ```

use std::env;
use std::process;

use chainparse_core::Config;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "info" => cmd_info(),
        "defaults" => cmd_defaults(),
        "version" | "--version" | "-V" => {
            println!("chainparse {}", env!("CARGO_PKG_VERSION"));
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    println!("chainparse {}", env!("CARGO_PKG_VERSION"));
    println!("Pluggable dependency-composition core for chain data parsers\n");
    println!("USAGE:");
    println!("    chainparse <COMMAND>\n");
    println!("COMMANDS:");
    println!("    info      Show ChainParse configuration info");
    println!("    defaults  Print the default configuration document as JSON");
    println!("    version   Print version");
    println!("    help      Print this help");
}

fn cmd_info() {
    println!("ChainParse v{}", env!("CARGO_PKG_VERSION"));
    println!("  Pluggable slots: registrar, config parser, encoding builder,");
    println!("                   runtime setup, storage builder, logger");
    println!("  Default registrar: empty (no modules)");
    println!("  Default config format: JSON");
    println!("  Default storage: in-memory");
    println!("  Storage backends: memory, SQLite (feature: sqlite)");
    println!("  Default logger: tracing subscriber on stdout");
}

fn cmd_defaults() {
    let cfg = Config::default();
    match serde_json::to_string_pretty(&cfg) {
        Ok(doc) => println!("{doc}"),
        Err(e) => {
            eprintln!("Failed to render defaults: {e}");
            process::exit(1);
        }
    }
}
