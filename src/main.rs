use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use psyscore::scoring::AssessmentType;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a completed session file
    Score {
        /// Session JSON with `questions` and `responses`
        session: PathBuf,

        /// Assessment name from the config file
        #[arg(short, long)]
        assessment: String,

        /// Print the result as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Also save a score report to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check configured assessments for errors
    Validate {
        /// Only validate this assessment
        #[arg(short, long)]
        assessment: Option<String>,
    },
    /// Write a config file with the built-in presets
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
    /// Print built-in preset scoring configs as YAML
    Presets {
        /// Only print this preset
        preset: Option<AssessmentType>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "psyscore")]
#[command(about = "Score multiple-intelligence, DISC and VARK questionnaires", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/psyscore/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Log to stderr. RUST_LOG takes precedence over --verbose.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = cli.config.map(PathBuf::from);

    let code = match cli.command {
        Commands::Score {
            session,
            assessment,
            json,
            output,
        } => run_score(config_path, &session, &assessment, json, output),
        Commands::Validate { assessment } => run_validate(config_path, assessment.as_deref()),
        Commands::Init { force } => run_init(config_path, force),
        Commands::Presets { preset } => run_presets(preset),
    };

    std::process::exit(code);
}

fn run_score(
    config_path: Option<PathBuf>,
    session_path: &std::path::Path,
    assessment: &str,
    json: bool,
    output: Option<PathBuf>,
) -> i32 {
    let config = match psyscore::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            return EXIT_CONFIG;
        }
    };

    let scoring = match config.scoring_for(assessment) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            return EXIT_CONFIG;
        }
    };

    // Validate scoring config before touching the session
    if let Err(errors) = psyscore::scoring::validate_scoring(&scoring) {
        eprintln!("Scoring config errors in '{}':", assessment);
        for error in errors {
            eprintln!("  - {}", error);
        }
        return EXIT_CONFIG;
    }

    let session = match psyscore::session::load_session(session_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Session error: {:#}", e);
            return EXIT_INPUT;
        }
    };

    debug!(
        questions = session.questions.len(),
        responses = session.responses.len(),
        assessment,
        "loaded session"
    );

    for warning in psyscore::scoring::check_inputs(&session.responses, &scoring, &session.questions) {
        warn!("{}", warning);
    }

    let result = session.score(&scoring);

    if json {
        match serde_json::to_string_pretty(&result) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Failed to serialize result: {}", e);
                return EXIT_INPUT;
            }
        }
    } else {
        let use_colors = psyscore::output::should_use_colors();
        println!(
            "{}",
            psyscore::output::format_result(&result, scoring.normalization, use_colors)
        );
    }

    if let Some(path) = output {
        let report = psyscore::session::ScoreReport::new(assessment, result);
        if let Err(e) = psyscore::session::save_report(&path, &report) {
            eprintln!("Failed to save report: {:#}", e);
            return EXIT_INPUT;
        }
        debug!(path = %path.display(), "saved score report");
    }

    EXIT_SUCCESS
}

fn run_validate(config_path: Option<PathBuf>, only: Option<&str>) -> i32 {
    let config = match psyscore::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            return EXIT_CONFIG;
        }
    };

    let names: Vec<&str> = match only {
        Some(name) => vec![name],
        None => config.assessments.iter().map(|a| a.name.as_str()).collect(),
    };

    let mut failed = false;
    for name in names {
        let scoring = match config.scoring_for(name) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{}: {:#}", name, e);
                failed = true;
                continue;
            }
        };
        match psyscore::scoring::validate_scoring(&scoring) {
            Ok(()) => println!("{}: ok", name),
            Err(errors) => {
                eprintln!("{}:", name);
                for error in errors {
                    eprintln!("  - {}", error);
                }
                failed = true;
            }
        }
    }

    if failed {
        EXIT_CONFIG
    } else {
        EXIT_SUCCESS
    }
}

fn run_init(config_path: Option<PathBuf>, force: bool) -> i32 {
    let path = match config_path {
        Some(p) => p,
        None => match psyscore::config::get_config_path() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Config error: {:#}", e);
                return EXIT_CONFIG;
            }
        },
    };

    match psyscore::config::write_default_config(&path, force) {
        Ok(()) => {
            println!("Config written to {}", path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("{:#}", e);
            EXIT_CONFIG
        }
    }
}

fn run_presets(only: Option<AssessmentType>) -> i32 {
    let presets: Vec<AssessmentType> = match only {
        Some(p) => vec![p],
        None => AssessmentType::ALL.to_vec(),
    };

    for preset in presets {
        match serde_saphyr::to_string(&preset.default_config()) {
            Ok(yaml) => {
                println!("# {}", preset.key());
                println!("{}", yaml.trim_end());
                println!();
            }
            Err(e) => {
                eprintln!("Failed to serialize preset {}: {}", preset.key(), e);
                return EXIT_CONFIG;
            }
        }
    }

    EXIT_SUCCESS
}
