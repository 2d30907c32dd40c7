use std::{fs, process::ExitCode};

use clap::Parser;
use elsif::{Store, interpret, parse, tokenize};
use tracing_subscriber::EnvFilter;

/// elsif runs small imperative scripts over the single-letter variables A-Z.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells elsif to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode automatically prints the value of the script's final
    /// expression, if it has one.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Print every assigned variable after the script has run.
    #[arg(short, long)]
    vars: bool,

    /// Print the token stream instead of running the script.
    #[arg(long, conflicts_with = "ast")]
    tokens: bool,

    /// Print the syntax tree instead of running the script.
    #[arg(long)]
    ast: bool,

    contents: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents.clone()
    };

    match run(&args, &script) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn run(args: &Args, script: &str) -> Result<(), elsif::Error> {
    if args.tokens {
        for (token, line) in tokenize(script)? {
            println!("{line:>4}  {token}");
        }
        return Ok(());
    }

    if args.ast {
        println!("{:#?}", parse(script)?);
        return Ok(());
    }

    let mut store = Store::new();
    let result = interpret(script, &mut store)?;

    if args.pipe_mode
       && let Some(value) = result
    {
        println!("{value}");
    }

    if args.vars {
        for (name, value) in store.iter() {
            println!("{name} = {value}");
        }
    }

    Ok(())
}
