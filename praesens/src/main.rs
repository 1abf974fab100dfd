use std::io::{self, BufRead};

use clap::Parser;
use praesens_lib::{conjugate, Lexicon};

#[derive(Parser)]
#[command(name = "praesens", about = "German present-tense verb conjugator")]
struct Cli {
    /// Verb phrase to conjugate (e.g., "sich freuen"). If omitted, reads
    /// from stdin.
    input: Option<String>,

    /// Output a human-readable paradigm table instead of JSON.
    #[arg(long)]
    table: bool,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() {
    let cli = Cli::parse();
    let lexicon = Lexicon::new();

    match cli.input {
        Some(ref text) => process_line(text, &lexicon, &cli),
        None => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line.expect("failed to read stdin");
                if !line.trim().is_empty() {
                    process_line(&line, &lexicon, &cli);
                }
            }
        }
    }
}

fn process_line(line: &str, lexicon: &Lexicon, cli: &Cli) {
    // Blank input has nothing to conjugate.
    let conjugation = match conjugate(line, lexicon) {
        Some(c) => c,
        None => return,
    };

    if cli.table {
        println!("{}", praesens_lib::output::to_table(&conjugation.forms));
    } else {
        let json = if cli.pretty {
            serde_json::to_string_pretty(&conjugation)
        } else {
            serde_json::to_string(&conjugation)
        };
        println!("{}", json.expect("JSON serialization failed"));
    }
}
