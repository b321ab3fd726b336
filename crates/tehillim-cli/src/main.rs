mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::config::ConfigSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "tehillim",
    about = "Draw, read and complete chapters of Tehillim together",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .tehillim/)
    #[arg(long, global = true, env = "TEHILLIM_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Seed for chapter draws (default: random)
    #[arg(long, global = true, env = "TEHILLIM_SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the chapter store and config in the current directory
    Init,

    /// Show progress statistics and chapters in progress
    Status,

    /// List chapters
    List {
        /// Only show chapters with this status (available, reading, completed)
        #[arg(long)]
        status: Option<String>,
    },

    /// Draw a random available chapter
    Draw {
        /// Take the drawn chapter immediately
        #[arg(long)]
        accept: bool,
    },

    /// Take a specific available chapter
    Select { id: u32 },

    /// Mark a chapter in progress as completed
    Finish { id: u32 },

    /// Print the text of a chapter in progress
    Read { id: u32 },

    /// Print a number as a Hebrew numeral
    Numeral { number: u32 },

    /// Interactive session: draw, accept, read and finish chapters
    Session,

    /// Inspect and validate configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Session => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::Status => cmd::status::run(&root, cli.json),
        Commands::List { status } => cmd::chapter::list(&root, status.as_deref(), cli.json),
        Commands::Draw { accept } => cmd::draw::run(&root, accept, cli.seed, cli.json),
        Commands::Select { id } => cmd::chapter::select(&root, id, cli.json),
        Commands::Finish { id } => cmd::chapter::finish(&root, id, cli.json),
        Commands::Read { id } => cmd::chapter::read(&root, id, cli.json),
        Commands::Numeral { number } => cmd::numeral::run(number, cli.json),
        Commands::Session => cmd::session::run(&root, cli.seed),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
