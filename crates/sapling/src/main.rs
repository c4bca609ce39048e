use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use sapling::{render, EvalContext, Executor, Sample, Stmt, Variables};

#[derive(Parser)]
#[command(name = "sapling")]
#[command(version, about = "Sapling - a tiny tree-walking interpreter", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log every executed statement (implies -vv)
    #[arg(long, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the factorial program, run it, print it and its bindings
    Demo,

    /// Execute a program and print the resulting bindings
    Run {
        #[command(flatten)]
        source: Source,

        /// Print bindings as a JSON object
        #[arg(long)]
        json: bool,
    },

    /// Pretty-print a program
    Print {
        #[command(flatten)]
        source: Source,
    },

    /// Write a program's tree as JSON
    Dump {
        #[command(flatten)]
        source: Source,
    },
}

/// Where a program comes from.
#[derive(Args)]
#[group(multiple = false)]
struct Source {
    /// Use a bundled sample program (default: factorial)
    #[arg(short, long, value_enum)]
    sample: Option<SampleArg>,

    /// Load a program tree from a JSON file
    #[arg(short, long)]
    file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum SampleArg {
    Factorial,
    Book,
}

impl From<SampleArg> for Sample {
    fn from(arg: SampleArg) -> Self {
        match arg {
            SampleArg::Factorial => Sample::Factorial,
            SampleArg::Book => Sample::Book,
        }
    }
}

impl Source {
    fn load(&self) -> Result<Stmt> {
        if let Some(path) = &self.file {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let program = Stmt::from_json(&text)
                .with_context(|| format!("invalid program tree in {}", path.display()))?;
            return Ok(program);
        }

        let sample = self.sample.unwrap_or(SampleArg::Factorial);
        Ok(Sample::from(sample).program())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(if cli.trace { 2 } else { cli.verbose });

    let ctx = EvalContext {
        trace: cli.trace,
        ..Default::default()
    };

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            let program = Sample::Factorial.program();
            let vars = execute(&program, ctx)?;
            print!("{}", render(&program));
            print_bindings(&vars);
        }
        Commands::Run { source, json } => {
            let program = source.load()?;
            let vars = execute(&program, ctx)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&vars)?);
            } else {
                print_bindings(&vars);
            }
        }
        Commands::Print { source } => {
            print!("{}", render(&source.load()?));
        }
        Commands::Dump { source } => {
            println!("{}", serde_json::to_string_pretty(&source.load()?)?);
        }
    }

    Ok(())
}

/// Run a program, reporting the bindings made before any failure.
fn execute(program: &Stmt, ctx: EvalContext) -> Result<Variables> {
    let mut exec = Executor::with_context(ctx);
    if let Err(err) = exec.execute(program) {
        tracing::warn!(kind = err.kind(), "execution aborted");
        print_bindings(exec.variables());
        return Err(err).context("execution failed");
    }
    Ok(exec.into_variables())
}

fn print_bindings(vars: &Variables) {
    for (name, value) in vars.iter() {
        println!("{}: {}", name, value);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
