//! Lingo CLI
//!
//! Tokenizes English text with the preset matchers.

use std::io;

use lingo::commands::{lex_file, list_matchers, parse_lex_args};

fn main() {
    lingo::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: lingo lex <file|-> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --buffer-size=<n>   Bytes read per refill (default: 1000)");
                eprintln!("  --max-word=<n>      Longest accepted word in bytes (default: 4096)");
                std::process::exit(1);
            }
            parse_lex_args(&args[2..])
                .and_then(|(path, options)| lex_file(&path, options, &mut io::stdout().lock()))
                .map(|_| ())
        }
        "matchers" => list_matchers(&mut io::stdout().lock()),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Lingo - natural-language tokenizer");
    println!();
    println!("Usage: lingo <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file|->    Tokenize a file (or stdin) with the English matchers");
    println!("  matchers        List the English matchers in priority order");
    println!("  help            Show this message");
    println!();
    println!("Set RUST_LOG=lingo_lexer=debug for scanner diagnostics.");
}
