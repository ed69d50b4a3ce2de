use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use clap::Subcommand;
use env_logger::Builder;
use log::{debug, info};

use rox::ast_printer::AstPrinter;
use rox::lox::{Failure, Lox, EXIT_STATIC};
use rox::parser::Parser;
use rox::scanner::Scanner;
use rox::LoxError;

#[derive(ClapParser, Debug)]
#[command(version, about = "Lox language interpreter", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    commands: Commands,

    /// Enable logging to app.log
    #[arg(long, global = true)]
    log: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenizes input from a file, printing each token
    Tokenize {
        filename: PathBuf,

        /// Print one JSON object per token instead of `TYPE lexeme literal`
        #[arg(long)]
        json: bool,
    },

    /// Parses input from a file as a single expression and prints its AST
    Parse { filename: PathBuf },

    /// Evaluates input from a file as a single expression and prints the result
    Evaluate { filename: PathBuf },

    /// Runs a Lox program; without a file, starts an interactive prompt
    Run { filename: Option<PathBuf> },
}

/// Reads the contents of a file into a String
fn read_file(filename: PathBuf) -> Result<String> {
    info!("Reading file: {:?}", filename);
    let file = File::open(&filename).context(format!("Failed to open file {:?}", filename))?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();

    let bytes = reader
        .read_to_end(&mut buf)
        .context(format!("Failed to read file {:?}", filename))?;

    info!("Read {} bytes from {:?}", bytes, filename);

    let source: String = String::from_utf8(buf)
        .map_err(LoxError::from)
        .with_context(|| format!("File {:?} is not valid UTF-8", filename))?;

    Ok(source)
}

fn init_logger() -> Result<()> {
    let log_file = File::create("app.log").context("Failed to create app.log")?;

    Builder::new()
        .format(|buf, record| {
            // Strip 'rox::' from module path
            let module = record
                .module_path()
                .unwrap_or("<unnamed>")
                .strip_prefix("rox::")
                .unwrap_or(record.module_path().unwrap_or("<unnamed>"));
            writeln!(
                buf,
                "[{}:{}] - {}",
                module,
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .filter(None, log::LevelFilter::Debug)
        .init();

    info!("Logger initialized, writing to app.log");
    Ok(())
}

/// Print every diagnostic of a failed run and exit with its status.
fn fail(failure: Failure) -> ! {
    debug!("Run failed: {}", failure);

    eprintln!("{}", failure);
    std::process::exit(failure.exit_code());
}

fn tokenize(source: &str, json: bool) -> Result<()> {
    let mut tokenized = true;

    for token in Scanner::new(source) {
        match token {
            Ok(token) if json => println!("{}", serde_json::to_string(&token)?),
            Ok(token) => println!("{}", token),
            Err(e) => {
                tokenized = false;
                eprintln!("{}", e);
            }
        }
    }

    if !tokenized {
        debug!("Tokenization failed, exiting with code {}", EXIT_STATIC);
        std::process::exit(EXIT_STATIC);
    }

    Ok(())
}

fn parse(source: &str) -> Result<()> {
    let (tokens, mut errors) = rox::scanner::scan(source);

    match Parser::new(tokens).parse_expression() {
        Ok(expr) if errors.is_empty() => {
            let ast = AstPrinter::print(&expr);
            debug!("AST: {}", ast);
            println!("{}", ast);
            Ok(())
        }
        Ok(_) => fail(Failure::Static(errors)),
        Err(parse_errors) => {
            errors.extend(parse_errors);
            fail(Failure::Static(errors))
        }
    }
}

fn repl() -> Result<()> {
    info!("Starting interactive prompt");

    let mut lox = Lox::new();
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().context("Failed to flush stdout")?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        // Errors are reported and the session carries on.
        if let Err(failure) = lox.run(&line) {
            eprintln!("{}", failure);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    // Initialize logger only if --log flag is provided
    if args.log {
        init_logger()?;
    } else {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Off)
            .init();
    }

    info!("CLI arguments: {:?}", args);

    match args.commands {
        Commands::Tokenize { filename, json } => {
            let source = read_file(filename)?;
            tokenize(&source, json)?;
        }

        Commands::Parse { filename } => {
            let source = read_file(filename)?;
            parse(&source)?;
        }

        Commands::Evaluate { filename } => {
            let source = read_file(filename)?;

            match Lox::new().evaluate(&source) {
                Ok(value) => println!("{}", value),
                Err(failure) => fail(failure),
            }
        }

        Commands::Run { filename } => match filename {
            Some(filename) => {
                let source = read_file(filename)?;

                if let Err(failure) = Lox::new().run(&source) {
                    fail(failure);
                }

                info!("Program executed successfully");
            }

            None => repl()?,
        },
    }

    Ok(())
}
