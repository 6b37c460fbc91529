use std::{ffi::OsString, path::Path, process::ExitCode};

use anyhow::Context;
use structopt::{
    StructOpt,
    clap::{AppSettings, ErrorKind},
};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use edgegen::{DEFAULT_OUTPUT, gens::*, io::*, prelude::*};

/// Writes `M` random loop-free directed edges on `N` nodes to `input.txt`
#[derive(StructOpt, Debug)]
#[structopt(
    name = "edgegen",
    setting = AppSettings::AllowNegativeNumbers,
    setting = AppSettings::DisableHelpFlags,
    setting = AppSettings::DisableVersion
)]
struct Opts {
    /// Number of vertices
    #[structopt(name = "N")]
    nodes: NumNodes,

    /// Number of edges
    #[structopt(name = "M")]
    edges: NumEdges,
}

#[derive(Debug)]
enum ArgsError {
    /// Wrong number of arguments
    Usage,
    /// `N` or `M` is not a non-negative integer
    Parse(String),
}

/// Number of positional arguments, not counting the program name
const NUM_ARGS: usize = 2;

fn parse_args<I, T>(args: I) -> Result<Opts, ArgsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<T> = args.into_iter().collect();
    if args.len() != NUM_ARGS + 1 {
        return Err(ArgsError::Usage);
    }

    Opts::from_iter_safe(args).map_err(|err| match err.kind {
        ErrorKind::ValueValidation | ErrorKind::InvalidValue => ArgsError::Parse(err.message),
        _ => ArgsError::Usage,
    })
}

fn usage() -> String {
    format!("Usage: {} <N> <M>", env!("CARGO_BIN_NAME"))
}

fn run(opts: &Opts, output: &Path) -> anyhow::Result<NumEdges> {
    let edges = UniformEdges::new()
        .nodes(opts.nodes)
        .edges(opts.edges)
        .try_generate(&mut rand::rng())?;
    debug!(edges = edges.len(), "edges generated");

    EdgeListWriter::new()
        .try_write_edges_file(&edges, output)
        .with_context(|| format!("failed to write edges to {}", output.display()))
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "edgegen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let opts = match parse_args(std::env::args_os()) {
        Ok(opts) => opts,
        Err(ArgsError::Usage) => {
            println!("{}", usage());
            return ExitCode::FAILURE;
        }
        Err(ArgsError::Parse(message)) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    match run(&opts, Path::new(DEFAULT_OUTPUT)) {
        Ok(written) => {
            info!(nodes = opts.nodes, edges = written, "done");
            println!("Edges written to {DEFAULT_OUTPUT} successfully.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
