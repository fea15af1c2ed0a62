#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use profile_spectrum::population::{score_population, summarize_population};
use profile_spectrum::report::{build_report_with, render_report_markdown};
use profile_spectrum::simulation::{run_simulation_with, Persona};
use profile_spectrum::spectrum::{enhanced_profile_data, simple_profile};
use profile_spectrum::{
    calculate_profile_spectrum_with, load_config_from_path, Answers, ProfileCatalog,
    ScoringConfig,
};

#[derive(Parser)]
#[command(name = "spectrum", version, about = "Profile spectrum scoring CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one answer set (JSON object) and write the spectrum
    Score {
        #[arg(long)]
        answers: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = ScoreView::Full)]
        view: ScoreView,
    },
    /// Render a report for one answer set
    Report {
        #[arg(long)]
        answers: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, default_value = "md")]
        format: String,
    },
    /// Run seeded synthetic personas through the engine
    Simulate {
        /// Persona id, or omit for all personas
        #[arg(long)]
        persona: Option<String>,
        #[arg(long, default_value_t = 100)]
        trials: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
        /// Drop per-trial rows from the output
        #[arg(long)]
        summary_only: bool,
    },
    /// Score many answer sets (JSON array or JSONL) and summarize them
    Aggregate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List the built-in profiles and sub-profiles
    Profiles {
        #[arg(long)]
        json: bool,
    },
    /// Load and validate a scoring config
    ConfigCheck {
        #[arg(long)]
        config: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScoreView {
    Full,
    Simple,
    Enhanced,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = ProfileCatalog::builtin();

    match cli.command {
        Commands::Score {
            answers,
            out,
            config,
            view,
        } => {
            let config = load_config(config)?;
            let answers: Answers = read_json(&answers)?;
            let spectrum = calculate_profile_spectrum_with(&answers, &config, catalog)?;
            match view {
                ScoreView::Full => write_json(&out, &spectrum)?,
                ScoreView::Simple => write_json(&out, &simple_profile(&spectrum, catalog)?)?,
                ScoreView::Enhanced => {
                    write_json(&out, &enhanced_profile_data(&spectrum, &config, catalog)?)?
                }
            }
        }
        Commands::Report {
            answers,
            out,
            config,
            format,
        } => {
            let config = load_config(config)?;
            let answers: Answers = read_json(&answers)?;
            let spectrum = calculate_profile_spectrum_with(&answers, &config, catalog)?;
            let report = build_report_with(&answers, &spectrum, &config, catalog)?;
            if format == "json" {
                write_json(&out, &report)?;
            } else {
                std::fs::write(out, render_report_markdown(&report))?;
            }
        }
        Commands::Simulate {
            persona,
            trials,
            seed,
            out,
            summary_only,
        } => {
            let personas = match persona.as_deref() {
                Some(id) => {
                    vec![Persona::parse(id).ok_or_else(|| format!("unknown persona: {id}"))?]
                }
                None => Persona::ALL.to_vec(),
            };
            let config = ScoringConfig::default();
            let mut file = File::create(out)?;
            for persona in personas {
                let mut summary = run_simulation_with(persona, trials, seed, &config, catalog)?;
                info!(
                    persona = %persona,
                    hit_rate = summary.hit_rate,
                    strong_hit_rate = summary.strong_hit_rate,
                    "simulation finished"
                );
                if summary_only {
                    summary.trials.clear();
                }
                let line = serde_json::to_string(&summary)?;
                writeln!(file, "{line}")?;
            }
        }
        Commands::Aggregate { input, out, config } => {
            let config = load_config(config)?;
            let responses = read_answer_sets(&input)?;
            let spectra = score_population(&responses, &config, catalog)?;
            write_json(&out, &summarize_population(&spectra))?;
        }
        Commands::Profiles { json } => {
            if json {
                let listing: Vec<_> = catalog
                    .profiles()
                    .iter()
                    .map(|p| {
                        serde_json::json!({
                            "id": p.id,
                            "title": p.title,
                            "subProfiles": catalog.children_of(p.id).map(|s| s.id).collect::<Vec<_>>(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else {
                for p in catalog.profiles() {
                    println!("{}\t{}", p.id, p.title);
                    for sub in catalog.children_of(p.id) {
                        println!("  {}\t{}", sub.id, sub.title);
                    }
                }
            }
        }
        Commands::ConfigCheck { config } => match load_config_from_path(&config) {
            Ok(_) => println!("ok"),
            Err(err) => {
                warn!(code = err.code(), path = %config.display(), "config rejected");
                return Err(err.into());
            }
        },
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> Result<ScoringConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(load_config_from_path(path)?),
        None => Ok(ScoringConfig::default()),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(
    path: &PathBuf,
) -> Result<T, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn write_json<T: serde::Serialize>(path: &PathBuf, value: &T) -> Result<(), io::Error> {
    let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    std::fs::write(path, json)
}

/// A JSON array of answer objects, or one answer object per line.
fn read_answer_sets(path: &PathBuf) -> Result<Vec<Answers>, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    if raw.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(&raw)?);
    }
    let mut sets = Vec::new();
    for line in raw.lines().filter(|l| !l.trim().is_empty()) {
        sets.push(serde_json::from_str(line)?);
    }
    Ok(sets)
}
