//! Command-line entry point for the attendance engine.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use attendance_engine::api::{AppState, create_router};
use attendance_engine::calculation::process_document;
use attendance_engine::config::{
    ConfigLoader, EARNED_LEAVE_GRACE_SECONDS, EarnedLeaveRule, ShiftPolicy,
};
use attendance_engine::models::{Gender, SummaryRow};
use attendance_engine::report::{
    render_daily_table, render_employee_details, render_monthly_summary, render_summary_table,
};
use attendance_engine::store::{InMemorySummaryStore, JsonFileSummaryStore, SummaryStore};

#[derive(Parser)]
#[command(name = "attendance-engine")]
#[command(about = "Extracts attendance records and computes overtime and earned leave")]
#[command(version)]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json: bool,

    /// Default log level when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process one extracted text export and print the report
    Process {
        /// Text file produced by the document-extraction step
        file: PathBuf,

        /// Selects the weekday standard (male or female)
        #[arg(short, long)]
        gender: Gender,

        /// Directory containing policy.yaml; the stock policy is used when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Overrides the earned-leave rule from the policy
        #[arg(long, value_enum)]
        leave_rule: Option<LeaveRule>,

        /// Print the report as JSON instead of text tables
        #[arg(long)]
        output_json: bool,

        /// Also save the summary row to this JSON store file
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Print the summary table of a JSON store file
    Report {
        /// JSON store file
        store: PathBuf,
    },
    /// Serve the HTTP API
    Serve {
        /// Address to bind
        #[arg(short, long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,

        /// Directory containing policy.yaml; the stock policy is used when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// JSON store file; summaries are kept in memory when omitted
        #[arg(short, long)]
        store: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LeaveRule {
    Plain,
    Grace,
}

fn init_tracing(json: bool, level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_policy(dir: Option<&Path>, leave_rule: Option<LeaveRule>) -> Result<ShiftPolicy> {
    let policy = match dir {
        Some(dir) => ConfigLoader::load(dir)
            .with_context(|| format!("loading policy from {}", dir.display()))?
            .into_policy(),
        None => ConfigLoader::builtin().into_policy(),
    };

    let policy = match leave_rule {
        Some(LeaveRule::Plain) => policy.with_earned_leave(EarnedLeaveRule::Plain),
        Some(LeaveRule::Grace) => {
            let grace_seconds = match policy.earned_leave {
                EarnedLeaveRule::WithGrace { grace_seconds } => grace_seconds,
                EarnedLeaveRule::Plain => EARNED_LEAVE_GRACE_SECONDS,
            };
            policy.with_earned_leave(EarnedLeaveRule::WithGrace { grace_seconds })
        }
        None => policy,
    };
    Ok(policy)
}

fn run_process(
    file: &Path,
    gender: Gender,
    policy: &ShiftPolicy,
    output_json: bool,
    save: Option<&Path>,
) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let report = process_document(&text, gender, policy)
        .with_context(|| format!("processing {}", file.display()))?;

    let row = SummaryRow::from_report(&report, Utc::now());
    if let Some(path) = save {
        let store = JsonFileSummaryStore::open(path)?;
        let saved = store.save(row.clone())?;
        info!(summary_id = %saved.id, store = %path.display(), "Summary saved");
    }

    if output_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", render_employee_details(&report));
    println!("{}", render_daily_table(&report));
    println!("{}", render_monthly_summary(&report));
    print!("{}", render_summary_table(std::slice::from_ref(&row)));
    for warning in &report.warnings {
        eprintln!("warning [{}]: {}", warning.code, warning.message);
    }
    Ok(())
}

async fn run_server(addr: SocketAddr, policy: ShiftPolicy, store: Option<PathBuf>) -> Result<()> {
    info!(policy = %policy.name, "Loaded shift policy");

    let state = match store {
        Some(path) => {
            let store = JsonFileSummaryStore::open(&path)?;
            info!(store = %path.display(), "Using JSON summary store");
            AppState::new(policy, store)
        }
        None => {
            info!("Using in-memory summary store");
            AppState::new(policy, InMemorySummaryStore::new())
        }
    };

    let app = create_router(state);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!(%addr, "Attendance engine listening");
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json, &cli.log_level);

    match cli.command {
        Commands::Process {
            file,
            gender,
            config,
            leave_rule,
            output_json,
            save,
        } => {
            let policy = load_policy(config.as_deref(), leave_rule)?;
            run_process(&file, gender, &policy, output_json, save.as_deref())?;
        }
        Commands::Report { store } => {
            let store = JsonFileSummaryStore::open(&store)?;
            print!("{}", render_summary_table(&store.list()?));
        }
        Commands::Serve {
            addr,
            config,
            store,
        } => {
            let policy = load_policy(config.as_deref(), None)?;
            run_server(addr, policy, store).await?;
        }
    }

    Ok(())
}
