//! Page replacement simulator CLI.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use log::error;

use pagesim::common::config::{DEFAULT_HOST, DEFAULT_PORT, MAX_SEQUENCE_LEN};
use pagesim::server::{self, CompareRequest, SimulationRequest};
use pagesim::{PageId, Result, ServerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    author,
    version,
    about = "Page replacement simulator (LRU, MRU, FIFO, Optimal)",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP server and browser front-end.
    Serve {
        /// Host to bind to.
        #[arg(long, env = "PAGESIM_HOST", default_value = DEFAULT_HOST)]
        host: String,

        /// Port to listen on.
        #[arg(short, long, env = "PAGESIM_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Longest reference sequence accepted per request.
        #[arg(long, env = "PAGESIM_MAX_SEQUENCE_LEN", default_value_t = MAX_SEQUENCE_LEN)]
        max_sequence_len: usize,
    },

    /// Run one policy and print the trace.
    Run {
        /// Policy name: LRU, MRU, FIFO or Optimal.
        #[arg(short, long, required_unless_present = "file")]
        algorithm: Option<String>,

        #[command(flatten)]
        input: Input,

        /// Print the JSON response body instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Run every policy and print fault counts.
    Compare {
        #[command(flatten)]
        input: Input,
    },
}

#[derive(Args, Debug)]
struct Input {
    /// Number of frames.
    #[arg(short = 'n', long, allow_negative_numbers = true, required_unless_present = "file")]
    frames: Option<i64>,

    /// Comma-separated reference sequence, e.g. 7,0,1,2,0.
    #[arg(short, long, value_delimiter = ',', conflicts_with = "file")]
    sequence: Vec<String>,

    /// JSON request file with `sequence`, `frameSize` and `algorithm`.
    #[arg(short, long)]
    file: Option<PathBuf>,
}

impl Input {
    fn pages(&self) -> Vec<PageId> {
        self.sequence
            .iter()
            .map(|s| {
                let s = s.trim();
                s.parse::<i64>()
                    .map(PageId::from)
                    .unwrap_or_else(|_| PageId::from(s))
            })
            .collect()
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(err) = dispatch(cli.command) {
        error!("{}", err);
        process::exit(1);
    }
}

fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Serve {
            host,
            port,
            max_sequence_len,
        } => {
            let config = ServerConfig::default()
                .with_host(host)
                .with_port(port)
                .with_max_sequence_len(max_sequence_len);
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config))
        }
        Command::Run {
            algorithm,
            input,
            json,
        } => cmd_run(algorithm, &input, json),
        Command::Compare { input } => cmd_compare(&input),
    }
}

fn load_request(algorithm: Option<String>, input: &Input) -> Result<SimulationRequest> {
    let mut request = match &input.file {
        Some(path) => SimulationRequest::from_path(path)?,
        None => SimulationRequest {
            sequence: input.pages(),
            frame_size: input.frames.unwrap_or_default(),
            algorithm: String::new(),
        },
    };
    // Flags override the file
    if let Some(algorithm) = algorithm {
        request.algorithm = algorithm;
    }
    if let Some(frames) = input.frames {
        request.frame_size = frames;
    }
    Ok(request)
}

fn cmd_run(algorithm: Option<String>, input: &Input, json: bool) -> Result<()> {
    let request = load_request(algorithm, input)?;
    let response = request.run(usize::MAX)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!(
        "{} with {} frames over {} accesses",
        request.algorithm,
        request.frame_size,
        request.sequence.len()
    );
    for (step, (page, (frames, fault))) in request
        .sequence
        .iter()
        .zip(response.result.iter().zip(&response.page_faults))
        .enumerate()
    {
        let frames: Vec<String> = frames.iter().map(ToString::to_string).collect();
        println!(
            "{:>4}  {:>6}  {:<5}  [{}]",
            step,
            page.to_string(),
            if *fault { "FAULT" } else { "hit" },
            frames.join(", ")
        );
    }
    let faults = response.page_faults.iter().filter(|f| **f).count();
    println!("{} faults, {} hits", faults, response.page_faults.len() - faults);
    Ok(())
}

fn cmd_compare(input: &Input) -> Result<()> {
    let request = load_request(None, input)?;
    let response = CompareRequest {
        sequence: request.sequence,
        frame_size: request.frame_size,
    }
    .run(usize::MAX)?;

    println!("{:<8} {:>7} {:>7} {:>10}", "policy", "faults", "hits", "fault rate");
    for summary in &response.results {
        println!(
            "{:<8} {:>7} {:>7} {:>9.1}%",
            summary.algorithm.to_string(),
            summary.faults,
            summary.hits,
            summary.fault_rate * 100.0
        );
    }
    Ok(())
}
