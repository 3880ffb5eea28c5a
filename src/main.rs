use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use tracing::info;

use authorship::config::{parse_weights, Config};
use authorship::corpus;
use authorship::output::terminal;
use authorship::scoring::{AuthorModel, Guess};
use authorship::signature::{signature_of_text, FeatureSet, Signature, Variant};

/// Authorship: guess who wrote a text from a closed set of known authors.
///
/// Each known author is summarized by a stylometric signature (word length
/// and vocabulary richness statistics); an unknown text goes to the author
/// whose signature is nearest.
#[derive(Parser)]
#[command(name = "authorship", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Guess the author of one or more unknown texts
    Guess {
        /// Unknown text files to attribute
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Show every known author ranked by distance
        #[arg(long)]
        ranking: bool,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        model: ModelArgs,
    },

    /// Show the signatures of the known authors
    Signatures {
        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        model: ModelArgs,
    },

    /// Show the raw signature of a single text
    Inspect {
        /// Text file to sign
        file: PathBuf,

        /// Signature variant (baseline or extended)
        #[arg(long)]
        variant: Option<Variant>,
    },
}

/// Model options shared by commands that load the known corpus.
#[derive(Args)]
struct ModelArgs {
    /// Directory of known-author .txt files
    #[arg(long)]
    known_dir: Option<PathBuf>,

    /// Signature variant (baseline or extended)
    #[arg(long)]
    variant: Option<Variant>,

    /// Comma-separated feature names, overriding the variant
    #[arg(long)]
    features: Option<String>,

    /// Comma-separated distance weights, one per feature
    #[arg(long)]
    weights: Option<String>,

    /// Compare raw feature values instead of normalized ones
    #[arg(long)]
    no_normalize: bool,
}

impl ModelArgs {
    /// Apply CLI overrides on top of the environment config.
    fn apply(&self, mut config: Config) -> Result<Config> {
        if let Some(dir) = &self.known_dir {
            config.known_dir = dir.clone();
        }
        if let Some(variant) = self.variant {
            config.variant = variant;
        }
        if let Some(list) = &self.features {
            config.features = Some(FeatureSet::parse_list(list)?);
        }
        if let Some(list) = &self.weights {
            config.weights = Some(parse_weights(list)?);
        }
        if self.no_normalize {
            config.normalize = Some(false);
        }
        Ok(config)
    }

    fn load_model(&self) -> Result<AuthorModel> {
        let config = self.apply(Config::load()?)?;
        config.require_known_dir()?;
        let model_config = config.to_model_config()?;

        info!(dir = %config.known_dir.display(), "Loading known-author corpus");
        let known = corpus::load_known_dir(&config.known_dir)?;
        Ok(AuthorModel::fit(&known, model_config)?)
    }
}

#[derive(Serialize)]
struct GuessReport<'a> {
    file: String,
    guess: Option<&'a Guess>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ranking: Option<&'a [Guess]>,
}

#[derive(Serialize)]
struct SignatureReport<'a> {
    features: &'a FeatureSet,
    raw: &'a authorship::Signatures,
    #[serde(skip_serializing_if = "Option::is_none")]
    normalized: Option<&'a authorship::Signatures>,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("authorship=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Guess {
            files,
            ranking,
            json,
            model,
        } => {
            let model = model.load_model()?;
            let unknown = corpus::load_texts(&files)?;

            let mut results: Vec<(PathBuf, Option<Guess>, Vec<Guess>)> = Vec::new();
            for (path, text) in &unknown {
                let guess = model.guess(text)?;
                let ranked = if ranking { model.rank(text)? } else { Vec::new() };
                info!(
                    file = %path.display(),
                    author = guess.as_ref().map(|g| g.author.as_str()).unwrap_or("none"),
                    "Attributed text"
                );
                results.push((path.clone(), guess, ranked));
            }

            if json {
                let reports: Vec<GuessReport> = results
                    .iter()
                    .map(|(path, guess, ranked)| GuessReport {
                        file: path.display().to_string(),
                        guess: guess.as_ref(),
                        ranking: ranking.then_some(ranked.as_slice()),
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&reports)?);
                return Ok(());
            }

            println!(
                "\n{}",
                format!("=== Guesses ({} texts, {} known authors) ===", results.len(), model.signatures().len())
                    .bold()
            );
            for (path, guess, _) in &results {
                terminal::display_guess(path, guess.as_ref());
            }
            if ranking {
                for (path, _, ranked) in &results {
                    terminal::display_ranking(path, ranked);
                }
            }
            println!();
        }

        Commands::Signatures { json, model } => {
            let model = model.load_model()?;
            let normalized = model.bounds().map(|_| model.signatures());

            if json {
                let report = SignatureReport {
                    features: model.features(),
                    raw: model.raw_signatures(),
                    normalized,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }

            terminal::display_signatures("Known-author signatures", model.features(), model.raw_signatures());
            if let Some(normalized) = normalized {
                terminal::display_signatures("Normalized signatures", model.features(), normalized);
            }
        }

        Commands::Inspect { file, variant } => {
            let mut config = Config::load()?;
            if let Some(variant) = variant {
                config.variant = variant;
                config.features = None;
            }
            let features = config.feature_set();
            let text = corpus::read_text(&file)?;
            let signature: Signature = signature_of_text(&text, &features);
            terminal::display_signature(&file.display().to_string(), &features, &signature);
        }
    }

    Ok(())
}
