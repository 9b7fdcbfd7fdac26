mod report;

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use kuralosai::{Corpus, Resolver, normalize};

const DEFAULT_CORPUS: &str = "thirukkural.json";

fn main() {
    env_logger::init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if config.normalize_only {
        let processed = normalize(&config.input);
        if config.json {
            println!("{}", serde_json::json!({ "processed": processed }));
        } else {
            println!("{processed}");
        }
        return;
    }

    let corpus = Corpus::load_or_empty(&config.corpus_path);
    let resolver = Resolver::new(corpus);

    if config.verbose {
        let out = resolver.resolve_verbose(&config.input);
        report::print_run(&config.input, &out, config.color);
        return;
    }

    let resolution = resolver.resolve(&config.input);
    if config.json {
        match serde_json::to_string_pretty(&resolution) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: could not encode result: {err}");
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", resolution.text);
        println!();
        println!("method: {}   confidence: {:.2}", resolution.method, resolution.confidence);
    }
}

struct CliConfig {
    input: String,
    corpus_path: PathBuf,
    normalize_only: bool,
    json: bool,
    verbose: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut corpus_path = PathBuf::from(DEFAULT_CORPUS);
    let mut normalize_only = false;
    let mut json = false;
    let mut verbose = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("kuralosai {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--normalize" => normalize_only = true,
            "--json" => json = true,
            "--verbose" => verbose = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "--corpus" => {
                let value = args.next().ok_or_else(|| "error: --corpus expects a path".to_string())?;
                corpus_path = PathBuf::from(value);
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--corpus=") => {
                corpus_path = PathBuf::from(arg.trim_start_matches("--corpus="));
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, corpus_path, normalize_only, json, verbose, color })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "kuralosai {version}

Tamil literary query resolution and TTS text normalization CLI.

Usage:
  kuralosai [OPTIONS] [--] <query...>
  kuralosai [OPTIONS] --input <text>

Options:
  -i, --input <text>    Query (or, with --normalize, the text to process).
                        If omitted, reads remaining args or stdin when no
                        args are provided.
  --corpus <path>       Thirukkural corpus JSON. Default: {default_corpus}
                        (a missing or malformed file degrades to an empty
                        corpus; keyword and fallback answers keep working).
  --normalize           Run only the normalization pipeline on the input.
  --json                Print the result as JSON.
  --verbose             Print a stage-by-stage resolution report.
  --color               Force ANSI color output.
  --no-color            Disable ANSI color output.
  -h, --help            Show this help message.
  -V, --version         Print version information.

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        default_corpus = DEFAULT_CORPUS
    )
}
