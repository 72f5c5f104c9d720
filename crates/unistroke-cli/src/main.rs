use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use log::{info, LevelFilter};
use unistroke::io::{load_stroke_json, IoError, RecognizerConfig, TemplateRecord, TemplateSet};
use unistroke::{RecognizeError, Recognizer};

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error(transparent)]
    Recognize(#[from] RecognizeError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[cfg(not(feature = "tracing"))]
    #[error(transparent)]
    Logger(#[from] log::SetLoggerError),
}

#[derive(Parser, Debug)]
#[command(
    name = "unistroke",
    version,
    about = "Single-stroke gesture recognition: classify recorded strokes and author templates"
)]
struct Cli {
    /// Raise log verbosity from info (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a recorded stroke against the template store.
    Classify {
        /// JSON array of `[x, y]` pairs.
        #[arg(long)]
        stroke: PathBuf,
        #[command(flatten)]
        store: StoreArgs,
        /// Print "not recognized" when the best score is below this value.
        #[arg(long)]
        min_score: Option<f64>,
    },
    /// Normalize a recorded stroke into a template record.
    Serialize {
        /// JSON array of `[x, y]` pairs.
        #[arg(long)]
        stroke: PathBuf,
        /// Template name.
        #[arg(long)]
        name: String,
        /// Upsert the record into this template-set file instead of printing it.
        #[arg(long)]
        into: Option<PathBuf>,
        /// Recognizer config (JSON) supplying normalization parameters.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List template names in store order.
    List {
        #[command(flatten)]
        store: StoreArgs,
    },
}

#[derive(Args, Debug)]
struct StoreArgs {
    /// Recognizer config (JSON).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Extra template-set file loaded after the built-ins.
    #[arg(long)]
    templates: Option<PathBuf>,
    /// Do not load the embedded built-in templates.
    #[arg(long)]
    no_builtins: bool,
}

impl StoreArgs {
    fn build_recognizer(&self) -> Result<Recognizer, CliError> {
        let mut config = load_config(self.config.as_deref())?;
        if let Some(path) = &self.templates {
            config.templates_path = Some(path.display().to_string());
        }
        if self.no_builtins {
            config.builtin_templates = false;
        }
        Ok(config.build_recognizer()?)
    }
}

fn load_config(path: Option<&Path>) -> Result<RecognizerConfig, CliError> {
    match path {
        Some(path) => Ok(RecognizerConfig::load_json(path)?),
        None => Ok(RecognizerConfig::default()),
    }
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) -> Result<(), CliError> {
    #[cfg(feature = "tracing")]
    unistroke::core::init_tracing(false, level_for(verbose));
    #[cfg(not(feature = "tracing"))]
    unistroke::core::init_with_level(level_for(verbose))?;
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    init_logging(cli.verbose)?;

    match cli.command {
        Command::Classify {
            stroke,
            store,
            min_score,
        } => {
            let rec = store.build_recognizer()?;
            let points = load_stroke_json(&stroke)?;
            let result = rec.classify_stroke(&points)?;
            match min_score {
                Some(min) if !result.is_match(min) => {
                    info!(
                        "best candidate {} scored {:.3} < {:.3}",
                        result.name, result.score, min
                    );
                    println!("not recognized");
                }
                _ => println!("{}", serde_json::to_string_pretty(&result)?),
            }
        }
        Command::Serialize {
            stroke,
            name,
            into,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            let rec = Recognizer::new(config.params.clone())?;
            let points = load_stroke_json(&stroke)?;
            let normalized = rec.serialize_stroke(&points)?;
            let record = TemplateRecord::from_stroke(name, &normalized);
            match into {
                Some(path) => {
                    let mut set = if path.exists() {
                        TemplateSet::load_json(&path)?
                    } else {
                        TemplateSet::new(rec.params().resample_count)
                    };
                    if set.resample_count != rec.params().resample_count {
                        return Err(RecognizeError::TemplateSizeMismatch {
                            expected: set.resample_count,
                            got: rec.params().resample_count,
                        }
                        .into());
                    }
                    info!("upserting template {} into {}", record.name, path.display());
                    set.upsert(record);
                    set.write_json(&path)?;
                }
                None => println!("{}", serde_json::to_string_pretty(&record)?),
            }
        }
        Command::List { store } => {
            let rec = store.build_recognizer()?;
            for name in rec.store().names() {
                println!("{name}");
            }
        }
    }
    Ok(())
}
