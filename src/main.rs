use clap::{Parser, Subcommand};
use eyre::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use tasklist::config::parse_level;
use tasklist::{AlwaysConfirm, Config, NeverConfirm, PromptConfirm, Renderer, Session, SharedInput};

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "TaskList - In-memory task list with pending and completed views")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Path to a YAML config file (default: <config dir>/tasklist/tasklist.yml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log level for stderr diagnostics (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (default)
    Shell,

    /// Execute session commands from a file, one per line
    Run {
        /// Script file to execute
        script: PathBuf,

        /// Answer yes to every delete confirmation (otherwise deletes are declined)
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    // Setup tracing
    let level = match cli.log_level.as_deref() {
        Some(level) => parse_level(level)?,
        None => config.log_level()?,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();

    let color = !cli.no_color && config.color.enabled();
    colored::control::set_override(color);
    let renderer = Renderer::new(config.title.as_str(), config.subtitle.as_str(), color);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let input = SharedInput::new(io::stdin().lock());
            let confirm = PromptConfirm::new(input.clone(), io::stdout());
            let mut session = Session::new(renderer, confirm, io::stdout());
            session.run(input, Some(config.prompt.as_str()))?;
        }
        Commands::Run { script, yes } => {
            let file =
                File::open(&script).with_context(|| format!("Failed to open script {}", script.display()))?;
            let lines = BufReader::new(file).lines();
            if yes {
                Session::new(renderer, AlwaysConfirm, io::stdout()).run(lines, None)?;
            } else {
                Session::new(renderer, NeverConfirm, io::stdout()).run(lines, None)?;
            }
        }
    }

    Ok(())
}
