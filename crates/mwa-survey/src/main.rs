use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;

use mwa_survey::commands;
use mwa_survey::config::{self, OutputFormat, SurveyConfig};
use mwa_survey::prompt::DialoguerPresenter;

#[derive(Parser)]
#[command(name = "mwa-survey")]
#[command(about = "Thyroid MWA doctor survey")]
struct Cli {
    /// Config file (defaults to the per-user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Questionnaire to present
    #[arg(long, global = true, default_value = "thyroid_mwa")]
    survey: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in the survey interactively, then show the answers
    Fill,
    /// Apply a recorded JSON array of form events, then show the answers
    Replay {
        /// Path to the events file
        events: PathBuf,
    },
    /// Print the questionnaire definition as JSON
    Describe,
    /// Inspect or write the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the resolved config
    Show,
    /// Print the config file location
    Path,
    /// Write a config file
    Init {
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Clear answers to hidden questions at submit time
        #[arg(long)]
        prune_hidden: bool,
        /// Custom Tera template for text output
        #[arg(long)]
        template: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config_path = config::resolve_path(cli.config.as_deref())?;

    match cli.command {
        Commands::Fill => {
            let config = config::load_config(&config_path)?;
            let questionnaire = commands::require_questionnaire(&cli.survey)?;
            let mut presenter: DialoguerPresenter = DialoguerPresenter::default();
            let output = commands::fill(&config, questionnaire.as_ref(), &mut presenter)?;
            println!("{output}");
        }
        Commands::Replay { events } => {
            let config = config::load_config(&config_path)?;
            let questionnaire = commands::require_questionnaire(&cli.survey)?;
            let output = commands::replay(&config, questionnaire.as_ref(), &events)?;
            println!("{output}");
        }
        Commands::Describe => {
            let questionnaire = commands::require_questionnaire(&cli.survey)?;
            println!("{}", commands::describe(questionnaire.as_ref())?);
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let config = config::load_config(&config_path)?;
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            ConfigAction::Path => println!("{}", config_path.display()),
            ConfigAction::Init {
                format,
                prune_hidden,
                template,
                force,
            } => {
                if config_path.exists() && !force {
                    return Err(eyre::eyre!(
                        "config already exists at {} (use --force to overwrite)",
                        config_path.display()
                    ));
                }
                let config = SurveyConfig {
                    output_format: format,
                    prune_hidden_fields: prune_hidden,
                    summary_template: template,
                    ..SurveyConfig::default()
                };
                config::save_config(&config_path, &config)?;
            }
        },
    }

    Ok(())
}
