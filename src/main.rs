use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use std::{
    io::{self, BufRead, Write},
    process,
};

/// Reduce a polynomial equation and solve it when its degree is 2 or less.
#[derive(Parser)]
#[command(
    name = "computor",
    version,
    about,
    after_help = r#"
Examples:
  computor "5 * X^0 + 4 * X^1 - 9.3 * X^2 = 1 * X^0"
  computor                       # Read the equation from stdin

Environment Variables:
  COMPUTOR_DEBUG=1               Enable debug logging
  COMPUTOR_LOG_LEVEL=trace       Set log level (error, warn, info, debug, trace)
"#
)]
struct Cli {
    /// The equation to solve
    equation: Option<String>,

    /// Enable debug logging
    #[arg(short, long, env = "COMPUTOR_DEBUG")]
    debug: bool,

    /// Set log level
    #[arg(long, value_enum, env = "COMPUTOR_LOG_LEVEL", default_value = "warn")]
    log_level: LogLevel,
}

#[derive(Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        log::LevelFilter::Debug
    } else {
        cli.log_level.into()
    };

    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .filter_level(log_level)
        .init();

    let equation = match cli.equation {
        Some(equation) => equation,
        None => prompt("Enter an equation: ")?,
    };
    let equation = equation.trim();

    if equation.is_empty() {
        eprintln!("Error: No equation provided");
        process::exit(1);
    }

    log::info!("Solving \"{}\"", equation);

    match computor::solve_equation(equation) {
        Ok(solution) => {
            println!("{}", solution);
            Ok(())
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        },
    }
}

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush().context("Unable to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Unable to read the equation from stdin")?;

    Ok(line)
}
