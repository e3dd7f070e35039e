//! numgram CLI
//!
//! List presets, decode them, and compile rule sets into format words.

use numgram::commands::{
    check_word, compile_rules, list_presets, parse_compile_args, show_preset, CliError,
};

fn main() {
    numgram::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "list" => Ok(list_presets()),
        "show" => {
            if args.len() < 3 {
                eprintln!("Usage: numgram show <preset>");
                std::process::exit(1);
            }
            show_preset(&args[2])
        }
        "compile" => parse_compile_args(&args[2..]).and_then(|options| compile_rules(&options)),
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: numgram check <hex>");
                std::process::exit(1);
            }
            check_word(&args[2])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        "version" | "--version" | "-V" => {
            println!("numgram {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match result {
        Ok(output) => print!("{output}"),
        Err(error) => report(&error),
    }
}

fn report(error: &CliError) -> ! {
    eprintln!("error: {error}");
    std::process::exit(1);
}

fn print_usage() {
    println!("numgram - numeric-literal grammar formats");
    println!();
    println!("Usage: numgram <command> [options]");
    println!();
    println!("Commands:");
    println!("  list                 List every preset and its format word");
    println!("  show <preset>        Decode a preset (e.g. rust-literal, json)");
    println!("  compile <rule>...    Compile grammar rules into a format word");
    println!("  check <hex>          Re-validate and decode a raw format word");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Compile options:");
    println!("  --separator=<c>        Digit separator (default: _)");
    println!("  --preset=<name>        Start from a preset's rules");
    println!("  --exponent=<c>         Exponent marker (default: e)");
    println!("  --exponent-backup=<c>  Secondary exponent marker, or `none` (default: ^)");
    println!();
    println!("Rules use kebab-case names, e.g. `no-special` or");
    println!("`integer-internal-digit-separator`. Prefix with `!` to clear a rule.");
    println!();
    println!("Set RUST_LOG=debug to trace rejected rule sets.");
}
