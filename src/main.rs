mod cli;

use std::{
    io::{self, BufRead, Write},
    process,
};

use clap::Parser;
use cli::{Cli, Command};
use dydx::{
    derive,
    help::{supported_functions, HELP_PHRASE},
    is_well_formed, parse_str, render, tokenize, Derivative,
};

const PROMPT: &str = "Write the expression you want to differentiate: ";

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(cli.command) {
        Ok(code) => process::exit(code),
        Err(why) => {
            eprintln!("error: {why}");
            process::exit(1);
        }
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(command: Command) -> anyhow::Result<i32> {
    match command {
        Command::Diff { expr, tree, check } => {
            let src = match expr {
                Some(src) => src,
                None => read_expression()?,
            };
            diff(&src, tree, check)
        }
        Command::Tokens { expr } => {
            for token in tokenize(&expr)? {
                println!("{token:?}");
            }
            Ok(0)
        }
        Command::Parse { expr } => {
            let expr = parse_str(&expr)?;
            println!("{expr:#?}");
            println!("{expr}");
            Ok(0)
        }
        Command::Functions => {
            println!("{}", supported_functions());
            Ok(0)
        }
    }
}

fn diff(src: &str, tree: bool, check: bool) -> anyhow::Result<i32> {
    let expr = parse_str(src)?;
    if tree {
        println!("{expr:?}");
    }

    let derivative = derive(&expr);
    if check {
        println!("input well-formed: {}", is_well_formed(&expr));
        println!(
            "derivative well-formed: {}",
            is_well_formed(derivative.expression())
        );
    }

    println!("The derivative is:");
    println!("{}", render(derivative.expression()));

    match derivative {
        Derivative::Supported(_) => Ok(0),
        Derivative::Unsupported { culprit, .. } => {
            log::warn!("cannot differentiate `{culprit}`");
            Ok(2)
        }
    }
}

fn read_expression() -> anyhow::Result<String> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Derivative Calculator!");
    println!("To see which functions are supported, type '{HELP_PHRASE}'");

    let mut prompt = || -> anyhow::Result<String> {
        print!("{PROMPT}");
        io::stdout().flush()?;
        match lines.next() {
            Some(line) => Ok(line?.trim().to_string()),
            None => anyhow::bail!("no expression given"),
        }
    };

    let line = prompt()?;
    if line != HELP_PHRASE {
        return Ok(line);
    }

    println!("{}", supported_functions());
    prompt()
}
