//! CLI command definitions and handlers

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use footprint::{
    AnswerSet, Catalog, FileStore, Priority, QuizError, Results, ScoringConfig, SnapshotStore,
    assess, run_quiz, standard_catalog,
};
use footprint_dialoguer_wizard::DialoguerBackend;
use footprint_html_report::{HtmlOptions, to_html};
use tracing::{debug, info};

use crate::render;

/// Parse a `question=value` pair.
fn parse_answer(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("'{s}' is not in the form question=value"))?;
    Ok((key.trim().to_string(), value.trim().to_string()))
}

/// Footprint - estimate your daily carbon footprint
#[derive(Parser, Debug)]
#[command(name = "footprint")]
#[command(
    version,
    about = "Estimate your daily carbon footprint from a short lifestyle quiz",
    after_help = "\
Examples:
  footprint quiz                                  Answer the quiz interactively
  footprint score --answer transport=5 ...        Score answers without prompts
  footprint show                                  Show the last results again
  footprint plan --priority high                  Show only high-priority actions
  footprint catalog                               List questions and point values"
)]
pub struct Cli {
    /// Scoring config file (TOML)
    #[arg(long, global = true, env = "FOOTPRINT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory for the results snapshot (default: ~/.cache/footprint)
    #[arg(long, global = true, env = "FOOTPRINT_STORE_DIR")]
    pub store_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer the quiz step by step
    Quiz {
        /// Plain prompts without colors
        #[arg(long)]
        plain: bool,

        /// Also write an HTML report to this path
        #[arg(long)]
        html: Option<PathBuf>,
    },

    /// Score answers given on the command line
    Score {
        /// One answer per question, as question=value (e.g. diet=6)
        #[arg(long = "answer", short = 'a', value_parser = parse_answer, required = true)]
        answers: Vec<(String, String)>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Also write an HTML report to this path
        #[arg(long)]
        html: Option<PathBuf>,
    },

    /// Show the last saved results
    Show {
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the action plan from the last saved results
    Plan {
        /// Only show suggestions of this priority (high, medium, low)
        #[arg(long)]
        priority: Option<Priority>,
    },

    /// List the quiz questions and their point values
    Catalog,
}

/// Everything a command needs besides its own arguments.
struct Session {
    catalog: Catalog,
    config: ScoringConfig,
    store: FileStore,
    colored: bool,
}

impl Session {
    fn from_cli(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => ScoringConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => ScoringConfig::default(),
        };
        let store = match &cli.store_dir {
            Some(dir) => FileStore::new(dir.clone()),
            None => FileStore::session(),
        };
        debug!("Snapshot directory: {}", store.dir().display());

        let catalog = standard_catalog();
        catalog.validate().context("Built-in catalog is malformed")?;

        Ok(Self {
            catalog,
            config,
            store,
            colored: console::colors_enabled(),
        })
    }

    fn finish(&self, results: &Results, json: bool, html: Option<&Path>) -> Result<()> {
        self.store
            .save(results)
            .context("Failed to save results snapshot")?;

        if json {
            println!("{}", serde_json::to_string_pretty(results)?);
        } else {
            print!(
                "{}",
                render::results(results, &self.catalog, self.config.reduction_cap, self.colored)
            );
        }

        if let Some(path) = html {
            let options = HtmlOptions::new().with_title("Your Carbon Footprint");
            std::fs::write(path, to_html(results, &self.catalog, &options))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote HTML report to {}", path.display());
        }
        Ok(())
    }

    fn saved(&self) -> Option<Results> {
        let results = self.store.load();
        if results.is_none() {
            println!("No results available. Take the quiz first: footprint quiz");
        }
        results
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let session = Session::from_cli(&cli)?;

    match cli.command {
        Commands::Quiz { plain, html } => {
            let backend = if plain {
                DialoguerBackend::plain()
            } else {
                DialoguerBackend::new()
            };
            match run_quiz(&backend, &session.catalog, &session.config) {
                Ok(results) => session.finish(&results, false, html.as_deref()),
                Err(QuizError::Cancelled) => {
                    println!("Quiz cancelled. Nothing was saved.");
                    Ok(())
                }
                Err(err) => Err(err.into()),
            }
        }
        Commands::Score {
            answers,
            json,
            html,
        } => {
            let answers =
                AnswerSet::parse_pairs(answers.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;
            let results = assess(&session.catalog, &answers, &session.config)?;
            session.finish(&results, json, html.as_deref())
        }
        Commands::Show { json } => {
            if let Some(results) = session.saved() {
                if json {
                    println!("{}", serde_json::to_string_pretty(&results)?);
                } else {
                    print!(
                        "{}",
                        render::results(
                            &results,
                            &session.catalog,
                            session.config.reduction_cap,
                            session.colored
                        )
                    );
                }
            }
            Ok(())
        }
        Commands::Plan { priority } => {
            if let Some(results) = session.saved() {
                let selected: Vec<_> = results
                    .suggestions
                    .into_iter()
                    .filter(|s| priority.is_none_or(|p| s.priority == p))
                    .collect();
                if selected.is_empty() {
                    println!("No suggestions match that priority.");
                } else {
                    print!("{}", render::suggestions(&selected, session.colored));
                }
            }
            Ok(())
        }
        Commands::Catalog => {
            print!("{}", render::catalog(&session.catalog));
            Ok(())
        }
    }
}
