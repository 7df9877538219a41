use clap::{Parser as ClapParser, Subcommand};
use ketupa_predicates::{
    cli::{self, CheckOptions, CheckResult, CliError},
    Value,
};
use std::io::{self, BufRead, Read, Write};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "ketupa")]
#[command(about = "Ketupa - evaluate comma-separated boolean predicates")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prepare and evaluate a predicate
    Check {
        /// The predicate (prompted for when omitted)
        expression: Option<String>,

        /// Bind a text variable, NAME=VALUE (repeatable)
        #[arg(short = 'v', long = "var")]
        vars: Vec<String>,

        /// JSON object with bindings (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Print the analysis before the result
        #[arg(short, long)]
        trace: bool,

        /// Only prepare, don't evaluate
        #[arg(long)]
        syntax_only: bool,
    },

    /// Print how a predicate is split into operation, arguments and elements
    Analyze {
        /// The predicate to analyze
        expression: String,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'ketupa docs' to list categories)
        category: String,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            expression,
            vars,
            input,
            trace,
            syntax_only,
        } => run_check(expression, vars, input, trace, syntax_only),
        Commands::Analyze { expression } => cli::execute_analyze(&expression).map(|analysis| {
            print!("{}", analysis);
        }),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr, filtered by `KETUPA_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("KETUPA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_check(
    expression: Option<String>,
    variables: Vec<String>,
    input: Option<String>,
    trace: bool,
    syntax_only: bool,
) -> Result<(), CliError> {
    let prompted = expression.is_none();
    let expression = match expression {
        Some(e) => e,
        None => prompt_expression()?,
    };

    // stdin already carried the expression when it was prompted for
    let input = match input {
        Some(s) => Some(s),
        None if !prompted && !syntax_only && !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let options = CheckOptions {
        expression,
        variables,
        input,
        trace,
        syntax_only,
    };

    let report = cli::execute_check(&options)?;
    if let Some(trace) = report.trace {
        print!("{}", trace);
    }
    match report.result {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Evaluated(result) => println!("{}", Value::Boolean(result)),
    }
    Ok(())
}

fn prompt_expression() -> Result<String, CliError> {
    print!("Enter the predicate expression: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Err(CliError::NoExpression);
    }
    Ok(line.to_string())
}
