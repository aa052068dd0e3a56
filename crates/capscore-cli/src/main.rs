use std::path::PathBuf;

use capscore_core::Domain;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod snapshot;

#[derive(Parser)]
#[command(
    name = "capscore",
    about = "capscore — requested-to-capacity ratio node scoring",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a shape descriptor and print its breakpoints
    Check {
        /// Descriptor, e.g. "0=10,100=0"
        #[arg(short, long)]
        shape: String,
        #[command(flatten)]
        domain: DomainArgs,
    },
    /// Evaluate a shape at one or more positions
    Eval {
        #[arg(short, long)]
        shape: String,
        /// Positions on the shape's x axis
        #[arg(long = "at", required = true, num_args = 1.., allow_negative_numbers = true)]
        at: Vec<f64>,
        #[command(flatten)]
        domain: DomainArgs,
    },
    /// Score every node of a cluster snapshot file.
    ///
    /// The snapshot holds a [workload] request and [[nodes]] entries. The
    /// [scoring] table is read from --config when given, otherwise from the
    /// snapshot itself, falling back to the least-utilized default curve.
    Score {
        /// Cluster snapshot (TOML)
        #[arg(short, long)]
        cluster: PathBuf,
        /// Scoring config (TOML) overriding the snapshot's [scoring] table
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DomainKindArg {
    Integer,
    Normalized,
}

#[derive(clap::Args)]
struct DomainArgs {
    /// Coordinate domain of the shape
    #[arg(short, long, value_enum, default_value = "integer")]
    domain: DomainKindArg,
    /// Upper bound of y in the integer domain
    #[arg(long, default_value_t = capscore_core::MAX_PRIORITY)]
    max_priority: u32,
}

impl DomainArgs {
    fn domain(&self) -> Domain {
        match self.domain {
            DomainKindArg::Integer => Domain::Integer {
                max_priority: self.max_priority,
            },
            DomainKindArg::Normalized => Domain::Normalized,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("capscore=info".parse()?)
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { shape, domain } => {
            commands::shape::check(&shape, domain.domain())
        }
        Commands::Eval { shape, at, domain } => {
            commands::shape::eval(&shape, &at, domain.domain())
        }
        Commands::Score { cluster, config, format } => {
            commands::score::score(&cluster, config.as_deref(), &format)
        }
    }
}
