//! `ConfigNeat` command-line tool.

use neatc::commands::{check_file, lex_file};

fn main() {
    neatc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: neatc lex <file> [--resync|--sticky] [--no-coalesce] [--styles]");
                std::process::exit(1);
            }
            lex_file(&args[2], &args[3..]);
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: neatc check <file> [--resync|--sticky]");
                std::process::exit(1);
            }
            check_file(&args[2], &args[3..]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("neatc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("neatc: ConfigNeat tokenizer and checker");
    println!();
    println!("Usage: neatc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>           Tokenize a file and print every token");
    println!("  check <file>         Report unbalanced braces and unterminated constructs");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lexer options:");
    println!("  --sticky             After an unbalanced `}}`, mark the rest as errors (default)");
    println!("  --resync             Report an unbalanced `}}` and keep lexing");
    println!("  --errors=<policy>    Same as above: sticky, resync");
    println!("  --no-coalesce        Print one token per tokenizer step (lex only)");
    println!("  --styles             Print style names instead of tags (lex only)");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=debug       Enable debug logging");
    println!("  NEAT_LOG_TREE=1      Log as an indented span tree");
    println!();
    println!("Examples:");
    println!("  neatc lex app.neat");
    println!("  neatc lex app.neat --styles");
    println!("  neatc check app.neat --resync");
}
