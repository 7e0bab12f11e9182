use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use shopping_list::api::{ShoppingListConfig, bootstrap};
use shopping_list::console::{Command, HELP_TEXT, Outcome, execute};
use shopping_list::render::WriterSink;
use shopping_list::telemetry::init_default_tracing;

const USAGE: &str = "usage: shopping-list [--config <path.json>] [--no-samples]";

#[derive(Debug, Default)]
struct CliArgs {
    config: Option<PathBuf>,
    no_samples: bool,
    show_help: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    if args.show_help {
        println!("{USAGE}\n\n{HELP_TEXT}");
        return Ok(());
    }
    let _ = init_default_tracing();

    let mut config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            ShoppingListConfig::from_json_compat_str(&raw).map_err(|err| err.to_string())?
        }
        None => ShoppingListConfig::default(),
    };
    if args.no_samples {
        config.seed_sample_items = false;
    }

    let sink = WriterSink::new(io::stdout());
    let mut controller = bootstrap(sink, &config).map_err(|err| err.to_string())?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(|err| format!("failed to read stdin: {err}"))?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        match execute(command, &mut controller) {
            Ok(Outcome::Continue) => {}
            Ok(Outcome::Help) => {
                println!("{HELP_TEXT}");
                io::stdout()
                    .flush()
                    .map_err(|err| format!("failed to flush stdout: {err}"))?;
            }
            Ok(Outcome::Quit) => break,
            Err(err) => eprintln!("{err}"),
        }
    }

    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut parsed = CliArgs::default();
    let mut args = std::env::args().skip(1);

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                parsed.config = Some(PathBuf::from(value));
            }
            "--no-samples" => parsed.no_samples = true,
            "-h" | "--help" => parsed.show_help = true,
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    Ok(parsed)
}
