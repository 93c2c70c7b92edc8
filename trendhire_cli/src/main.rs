use anyhow::{bail, Result};
/// TrendHire CLI - AI career intelligence in the terminal
///
/// Provides the interactive dashboard, one-shot page reports and an API ping.
use clap::{builder::PossibleValuesParser, Parser, Subcommand};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use trendhire_cli::{render_pass, ui, write_report, Page, PageContext, ReportFormat, Session};
use trendhire_core::{catalog, ApiClient, Config, DataSource};

#[derive(Parser)]
#[command(name = "trendhire-cli", version)]
#[command(about = "TrendHire - AI Career Intelligence Dashboard", long_about = None)]
struct Cli {
    /// Base URL of the TrendHire API (overrides TRENDHIRE_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Request timeout in seconds (overrides TRENDHIRE_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout: Option<u64>,
    /// Fetch trending jobs and skill analysis from the live API
    #[arg(long, global = true)]
    live: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard (default)
    Tui {
        /// Where to write logs while the terminal is in use
        #[arg(long)]
        log_file: Option<PathBuf>,
        /// Monochrome theme
        #[arg(long)]
        high_contrast: bool,
    },
    /// Run one page's action and print the result
    Report {
        #[command(subcommand)]
        page: ReportPage,
        /// Output format
        #[arg(short, long, value_enum, default_value = "text", global = true)]
        format: ReportFormat,
    },
    /// Check that the API answers on /health
    Ping,
}

#[derive(Subcommand)]
enum ReportPage {
    /// Trending job roles
    Trending {
        #[arg(long, default_value = "Remote", value_parser = PossibleValuesParser::new(catalog::TRENDING_LOCATIONS))]
        location: String,
        #[arg(long, default_value = "Technology", value_parser = PossibleValuesParser::new(catalog::INDUSTRIES))]
        industry: String,
    },
    /// Skills gap against market demand
    Skills {
        /// Comma-separated skills, e.g. "Python, React, SQL"
        #[arg(long)]
        skills: String,
    },
    /// Course plan for a target role
    LearningPath {
        #[arg(long, default_value = "AI Engineer", value_parser = PossibleValuesParser::new(catalog::TARGET_ROLES))]
        role: String,
    },
    /// Salary trend for a job title
    Salary {
        #[arg(long, default_value = "AI Engineer")]
        job_title: String,
        #[arg(long, default_value = "San Francisco", value_parser = PossibleValuesParser::new(catalog::SALARY_LOCATIONS))]
        location: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        None => {
            init_logging(Some(default_log_file()))?;
            ui::run_tui(&config, false)?;
        }
        Some(Commands::Tui {
            log_file,
            high_contrast,
        }) => {
            init_logging(Some(log_file.unwrap_or_else(default_log_file)))?;
            ui::run_tui(&config, high_contrast)?;
        }
        Some(Commands::Report { page, format }) => {
            init_logging(None)?;
            run_report(&config, &page, format)?;
        }
        Some(Commands::Ping) => {
            init_logging(None)?;
            run_ping(&config)?;
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::from_env()?;

    if let Some(url) = &cli.api_url {
        config = config.with_base_url(url)?;
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout_secs(secs)?;
    }
    if cli.live {
        config = config.with_data_source(DataSource::Api);
    }

    Ok(config)
}

fn default_log_file() -> PathBuf {
    std::env::temp_dir().join("trendhire-cli.log")
}

/// `RUST_LOG` wins; otherwise info. With a file, logs stay off the terminal.
fn init_logging(log_file: Option<PathBuf>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    if let Some(path) = log_file {
        let file = File::create(&path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn build_session(page: &ReportPage) -> Session {
    let mut session = Session::new();

    match page {
        ReportPage::Trending { location, industry } => {
            session.select_page(Page::TrendingJobs);
            session.trending.location.select_value(location);
            session.trending.industry.select_value(industry);
        }
        ReportPage::Skills { skills } => {
            session.select_page(Page::SkillAnalysis);
            session.skills.skills.set(skills);
        }
        ReportPage::LearningPath { role } => {
            session.select_page(Page::LearningPaths);
            session.learning.target_role.select_value(role);
        }
        ReportPage::Salary {
            job_title,
            location,
        } => {
            session.select_page(Page::SalaryTrends);
            session.salary.job_title.set(job_title);
            session.salary.location.select_value(location);
        }
    }

    session
}

fn run_report(config: &Config, page: &ReportPage, format: ReportFormat) -> Result<()> {
    let session = build_session(page);

    let client = match config.data_source {
        DataSource::Api => Some(ApiClient::from_config(config)?),
        DataSource::Mock => None,
    };
    let ctx = PageContext {
        data_source: config.data_source,
        client: client.as_ref(),
    };

    let pass = render_pass(&session, &ctx);
    let stdout = io::stdout();
    write_report(&mut stdout.lock(), &pass, format)
}

fn run_ping(config: &Config) -> Result<()> {
    let client = ApiClient::from_config(config)?;
    println!("Pinging {} ...", client.url_for("health"));

    let mut notices = Vec::new();
    match client.call_api("health", None, &mut notices) {
        Some(body) => {
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(())
        }
        None => {
            let message = notices
                .into_iter()
                .map(|n| n.message)
                .collect::<Vec<_>>()
                .join("; ");
            bail!("{}", message)
        }
    }
}
