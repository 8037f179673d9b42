//! Command-line interface for simple-list
//! Times the linked list against `Vec`, or applies a sequence of operations to a list.
//!
//! Usage:
//!   simple-list bench [--elements `<n>`] [--format text|json]   - Compare list and Vec timings
//!   simple-list run [--capacity `<n>`] `<op>`...                  - Apply push/pop operations
//!
//! Settings come from the built-in defaults, then `simple-list.toml` in the working
//! directory if present, then `--config <path>`, then the flags themselves.
//! Operations for `run`:
//!   push:`<value>`   append a value (int, float, true/false, or text)
//!   pop            remove the head
//!   pop@`<index>`    remove the element at index
//!   pop=`<value>`    remove the first equal element
//!   pop*=`<value>`   remove every equal element

use clap::{value_parser, Arg, ArgMatches, Command};
use simple_list::bench::compare_with_vec;
use simple_list::{ListError, PopCriteria, Popped, SimpleLinkedList, Value};
use simple_list_config::{ConfigError, Loader, ReportFormat, SimpleListConfig};
use std::fmt;
use tracing::debug;

/// Errors surfaced to the user before exiting with status 1
#[derive(Debug)]
enum CliError {
    Config(ConfigError),
    List(ListError),
    InvalidOp(String),
    Output(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(err) => write!(f, "Configuration error: {}", err),
            CliError::List(err) => write!(f, "{}", err),
            CliError::InvalidOp(op) => write!(f, "Invalid operation '{}'", op),
            CliError::Output(err) => write!(f, "Error formatting output: {}", err),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Config(err)
    }
}

impl From<ListError> for CliError {
    fn from(err: ListError) -> Self {
        CliError::List(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Output(err)
    }
}

/// One step of a `run` invocation
#[derive(Debug)]
enum Op {
    Push(Value),
    Pop(PopCriteria<Value>),
}

fn main() {
    init_logging();

    let config_arg = Arg::new("config")
        .long("config")
        .short('c')
        .help("TOML file layered over the built-in defaults");

    let matches = Command::new("simple-list")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A singly-linked list and a benchmark against Vec")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("bench")
                .about("Time building and draining a linked list and a Vec")
                .arg(config_arg.clone())
                .arg(
                    Arg::new("elements")
                        .long("elements")
                        .short('n')
                        .help("Number of integers pushed into each container")
                        .value_parser(value_parser!(u32)),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Report format")
                        .value_parser(["text", "json"]),
                ),
        )
        .subcommand(
            Command::new("run")
                .about("Apply push/pop operations to a list of values")
                .arg(config_arg)
                .arg(
                    Arg::new("capacity")
                        .long("capacity")
                        .help("Maximum number of elements (unbounded when omitted)")
                        .value_parser(value_parser!(u32)),
                )
                .arg(
                    Arg::new("ops")
                        .help("Operations: push:<v>, pop, pop@<i>, pop=<v>, pop*=<v>")
                        .required(true)
                        .num_args(1..)
                        .index(1),
                ),
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("bench", bench_matches)) => handle_bench_command(bench_matches),
        Some(("run", run_matches)) => handle_run_command(run_matches),
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `SIMPLE_LIST_LOG` (e.g. `simple_list=debug`)
fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = EnvFilter::try_from_env("SIMPLE_LIST_LOG")
        .unwrap_or_else(|_| EnvFilter::new("simple_list=warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .init();
}

/// Defaults, then `./simple-list.toml`, then the `--config` file, then individual flags
fn load_config(
    matches: &ArgMatches,
    overrides: &[(&str, Option<i64>)],
) -> Result<SimpleListConfig, CliError> {
    let mut loader = Loader::discover(".");
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    for (key, value) in overrides {
        if let Some(value) = value {
            loader = loader.set_override(key, *value)?;
        }
    }
    Ok(loader.build()?)
}

/// Handle the bench command
fn handle_bench_command(matches: &ArgMatches) -> Result<(), CliError> {
    let elements = matches.get_one::<u32>("elements").map(|n| i64::from(*n));
    let mut config = load_config(matches, &[("bench.elements", elements)])?;
    match matches.get_one::<String>("format").map(String::as_str) {
        Some("json") => config.bench.format = ReportFormat::Json,
        Some("text") => config.bench.format = ReportFormat::Text,
        _ => {}
    }

    debug!(elements = config.bench.elements, "running comparison");
    let comparison = compare_with_vec(config.bench.elements)?;

    match config.bench.format {
        ReportFormat::Text => print!("{}", comparison),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&comparison)?),
    }
    Ok(())
}

/// Handle the run command
fn handle_run_command(matches: &ArgMatches) -> Result<(), CliError> {
    let capacity = matches.get_one::<u32>("capacity").map(|n| i64::from(*n));
    let config = load_config(matches, &[("list.capacity", capacity)])?;

    let mut list = match config.list.capacity {
        Some(capacity) => SimpleLinkedList::with_capacity(capacity),
        None => SimpleLinkedList::new(),
    };

    let ops = matches
        .get_many::<String>("ops")
        .into_iter()
        .flatten()
        .map(|op| parse_op(op))
        .collect::<Result<Vec<_>, _>>()?;

    for op in ops {
        match op {
            Op::Push(value) => list.push(value)?,
            Op::Pop(criteria) => {
                let popped = list.pop(criteria)?;
                println!("popped: {}", render_popped(&popped));
            }
        }
    }

    println!("list: {}", list);
    println!("length: {}", list.len());
    Ok(())
}

fn parse_op(op: &str) -> Result<Op, CliError> {
    let invalid = || CliError::InvalidOp(op.to_string());

    if let Some(raw) = op.strip_prefix("push:") {
        return Ok(Op::Push(parse_value(raw)));
    }

    let rest = op.strip_prefix("pop").ok_or_else(invalid)?;
    let (index, value, all_occurrences) = if rest.is_empty() {
        (None, None, false)
    } else if let Some(raw) = rest.strip_prefix('@') {
        let index = raw.parse::<usize>().map_err(|_| invalid())?;
        (Some(index), None, false)
    } else if let Some(raw) = rest.strip_prefix("*=") {
        (None, Some(parse_value(raw)), true)
    } else if let Some(raw) = rest.strip_prefix('=') {
        (None, Some(parse_value(raw)), false)
    } else if rest == "*" {
        (None, None, true)
    } else {
        return Err(invalid());
    };

    Ok(Op::Pop(PopCriteria::from_parts(
        index,
        value,
        all_occurrences,
    )?))
}

fn parse_value(raw: &str) -> Value {
    match raw.parse::<Value>() {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

fn render_popped(popped: &Popped<Value>) -> String {
    match popped {
        Popped::One(value) => value.to_string(),
        Popped::Many(values) => format!(
            "[{}]",
            values
                .iter()
                .map(|value| value.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}
