//! Blindbot CLI - a maze agent that reasons about pits it cannot see.
//!
//! - `blindbot run` - run one episode on a text maze
//! - `blindbot ask` - query a clause file by resolution
//! - `blindbot validate` - check a maze file
//! - `blindbot init` - write the default agent config

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use blindbot_agent::{run_episode, AgentConfig, EpisodeReport, Explorer};
use blindbot_logic::{parse_clauses, Clause, KnowledgeBase};
use blindbot_nav::Maze;

#[derive(Parser)]
#[command(name = "blindbot")]
#[command(about = "Blind maze agent driven by propositional resolution", version)]
struct Cli {
    /// Project root directory
    #[arg(short, long, global = true)]
    project: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one episode
    Run {
        /// Maze file
        maze: PathBuf,

        /// Config file (default: <project>/.blindbot/config.yaml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the step limit
        #[arg(long)]
        max_steps: Option<usize>,

        /// Override the resolution budget
        #[arg(long)]
        budget: Option<usize>,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,

        /// Print the agent's final overlay
        #[arg(long)]
        show_overlay: bool,
    },

    /// Ask whether a clause file entails a query
    Ask {
        /// Clause file, one clause per line
        #[arg(long)]
        kb: PathBuf,

        /// Query clause, e.g. "P(1,2) | P(2,1)"
        query: String,

        /// Resolution budget
        #[arg(long)]
        budget: Option<usize>,
    },

    /// Parse a maze file and print its summary
    Validate {
        maze: PathBuf,
    },

    /// Write the default config
    Init,
}

#[derive(Serialize)]
struct RunOutput<'a> {
    maze: &'a Path,
    finished_at: DateTime<Utc>,
    config: &'a AgentConfig,
    #[serde(flatten)]
    report: &'a EpisodeReport,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let project_root = match cli.project {
        Some(root) => root,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    match cli.command {
        Commands::Run {
            maze,
            config,
            max_steps,
            budget,
            json,
            show_overlay,
        } => {
            let mut agent_config = match config {
                Some(path) => AgentConfig::load(&path)?,
                None => AgentConfig::load_from_project(&project_root)?,
            };
            if let Some(steps) = max_steps {
                agent_config.max_steps = steps;
            }
            if budget.is_some() {
                agent_config.resolution_budget = budget;
            }
            run_maze(&maze, &agent_config, json, show_overlay)
        }
        Commands::Ask { kb, query, budget } => ask(&kb, &query, budget),
        Commands::Validate { maze } => validate(&maze),
        Commands::Init => init_project(&project_root),
    }
}

fn load_maze(path: &Path) -> Result<Maze> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read maze from {}", path.display()))?;
    Maze::parse(&text).with_context(|| format!("Failed to parse maze {}", path.display()))
}

fn run_maze(path: &Path, config: &AgentConfig, json: bool, show_overlay: bool) -> Result<()> {
    let mut maze = load_maze(path)?;
    tracing::info!(
        maze = %path.display(),
        width = maze.width(),
        height = maze.height(),
        "Starting episode"
    );

    let mut explorer = Explorer::from_config(&maze, config);
    let report = run_episode(&mut maze, &mut explorer, config.max_steps);

    if json {
        let output = RunOutput {
            maze: path,
            finished_at: Utc::now(),
            config,
            report: &report,
        };
        let text = serde_json::to_string_pretty(&output).context("Failed to serialize report")?;
        println!("{text}");
    } else {
        println!("Outcome:  {:?}", report.outcome);
        println!("Steps:    {} ({} bumps)", report.steps, report.bumps);
        println!("Visited:  {} cells", report.visited);
        println!("KB size:  {} clauses", report.kb_clauses);
        if show_overlay {
            println!();
            print!("{}", report.overlay.render(report.path.last().copied()));
        }
    }

    if !report.outcome.is_success() {
        bail!("episode ended without reaching the goal: {:?}", report.outcome);
    }
    Ok(())
}

fn ask(kb_path: &Path, query: &str, budget: Option<usize>) -> Result<()> {
    let text = std::fs::read_to_string(kb_path)
        .with_context(|| format!("Failed to read clauses from {}", kb_path.display()))?;
    let clauses = parse_clauses(&text)
        .with_context(|| format!("Failed to parse clauses in {}", kb_path.display()))?;
    let query: Clause = query
        .parse()
        .with_context(|| format!("Failed to parse query `{query}`"))?;

    let mut kb = KnowledgeBase::new();
    kb.set_budget(budget);
    kb.extend(clauses);

    let entailment = kb.query(&query);
    println!("{}", entailment.is_entailed());
    println!(
        "verdict: {:?}, rounds: {}, derived: {}, clauses: {}",
        entailment.verdict,
        entailment.rounds,
        entailment.derived,
        kb.len()
    );
    Ok(())
}

fn validate(path: &Path) -> Result<()> {
    let maze = load_maze(path)?;
    println!("{}", path.display());
    println!("  size:  {}x{}", maze.width(), maze.height());
    println!("  start: {}", maze.start());
    println!("  goal:  {}", maze.goal());
    println!("  pits:  {}", maze.pit_count());
    Ok(())
}

fn init_project(project_root: &Path) -> Result<()> {
    let config_path = AgentConfig::project_path(project_root);
    if config_path.exists() {
        println!("Config already exists at {}", config_path.display());
        return Ok(());
    }

    AgentConfig::default().save(&config_path)?;

    println!("Initialized blindbot project at {}", project_root.display());
    println!();
    println!("Created:");
    println!("  .blindbot/config.yaml - agent configuration");
    println!();
    println!("Next steps:");
    println!("  blindbot run demos/pitfall.txt --show-overlay");
    Ok(())
}
