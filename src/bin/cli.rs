//! LoanSewa CLI
//!
//! Back-office command-line interface for the LoanSewa API:
//! - Review, approve and reject loan applications
//! - Search and export application history
//! - Portfolio insights and user management
//! - Applicant history and credit improvement suggestions

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use loansewa::client::{ClientConfig, LoanSewaClient};
use loansewa::config::generate_default_config;
use loansewa::report::{self, OutputFormat};
use loansewa_core::history::HistoryFilter;
use loansewa_core::models::{LoanApplication, User};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "loansewa-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Back-office client for the LoanSewa loan platform")]
#[command(long_about = "Review loan applications, manage users and read portfolio insights\nthrough the LoanSewa API (directly or via the LoanSewa UI host).")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Origin serving /api (the UI host or the API itself)
    #[arg(long, default_value = "http://localhost:3000", global = true)]
    pub api_url: String,

    /// Output format (table, json, csv)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30", global = true)]
    pub timeout: u64,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show dashboard KPIs
    Stats,

    /// List applications awaiting a decision
    Pending,

    /// Approve an application
    Approve {
        /// Application ID
        id: i64,
        /// ID of the approving administrator
        #[arg(long)]
        admin_id: i64,
    },

    /// Reject an application
    Reject {
        /// Application ID
        id: i64,
        /// ID of the rejecting administrator
        #[arg(long)]
        admin_id: i64,
        /// Reason shown to the applicant
        #[arg(short, long)]
        reason: String,
    },

    /// Search decided applications
    History {
        /// Approved or Rejected (default: all)
        #[arg(short, long)]
        status: Option<String>,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Member name
        #[arg(long)]
        search: Option<String>,
        /// Write CSV to this file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show portfolio insights
    Insights,

    /// List registered users
    Users,

    /// Delete a user and their applications
    DeleteUser {
        /// User ID
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show an applicant's applications and credit trends
    Applications {
        /// User ID
        user_id: i64,
    },

    /// Show credit improvement suggestions for an applicant
    Improve {
        /// User ID
        user_id: i64,
    },

    /// Show host and backend status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let format: OutputFormat = cli.format.parse()?;
    check_format(&cli.command, format)?;

    let client = LoanSewaClient::new(ClientConfig {
        base_url: cli.api_url.clone(),
        request_timeout_secs: cli.timeout,
    })?;

    match cli.command {
        Commands::Stats => {
            let stats = client
                .dashboard_stats()
                .await
                .map_err(|e| anyhow::anyhow!("Error fetching dashboard data: {}", e.detail()))?;

            match format {
                OutputFormat::Json => print_json(&stats)?,
                _ => print!("{}", report::stats_table(&stats)),
            }
        }

        Commands::Pending => {
            let apps = client
                .pending_applications()
                .await
                .map_err(|e| anyhow::anyhow!("Error fetching pending applications: {}", e.detail()))?;
            print_applications(&apps, format)?;
        }

        Commands::Approve { id, admin_id } => {
            client
                .approve(id, admin_id)
                .await
                .map_err(|e| anyhow::anyhow!("Error approving application: {}", e.detail()))?;
            println!("Application approved successfully!");
        }

        Commands::Reject {
            id,
            admin_id,
            reason,
        } => {
            let reason = reason.trim();
            if reason.is_empty() {
                bail!("A rejection reason is required");
            }
            client
                .reject(id, admin_id, reason)
                .await
                .map_err(|e| anyhow::anyhow!("Error rejecting application: {}", e.detail()))?;
            println!("Application rejected successfully!");
        }

        Commands::History {
            status,
            from,
            to,
            search,
            output,
        } => {
            if let (Some(from), Some(to)) = (from, to) {
                if from > to {
                    bail!("--from ({}) is after --to ({})", from, to);
                }
            }
            let filter = HistoryFilter {
                status: status.unwrap_or_default(),
                start_date: from.map(iso_date).unwrap_or_default(),
                end_date: to.map(iso_date).unwrap_or_default(),
                search: search.unwrap_or_default(),
            };
            let apps = client
                .application_history(&filter)
                .await
                .map_err(|e| anyhow::anyhow!("Error fetching history: {}", e.detail()))?;

            match output {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("Cannot create {:?}", path))?;
                    report::write_applications_csv(&apps, file)?;
                    println!("Exported {} applications to {:?}", apps.len(), path);
                }
                None => print_applications(&apps, format)?,
            }
        }

        Commands::Insights => {
            let insights = client
                .insights()
                .await
                .map_err(|e| anyhow::anyhow!("Error fetching insights: {}", e.detail()))?;

            match format {
                OutputFormat::Json => print_json(&insights)?,
                _ => print!("{}", report::insights_report(&insights)),
            }
        }

        Commands::Users => {
            let users = client
                .users()
                .await
                .map_err(|e| anyhow::anyhow!("Error fetching users: {}", e.detail()))?;
            print_users(&users, format)?;
        }

        Commands::DeleteUser { id, yes } => {
            if !yes && !confirm(&format!("Are you sure you want to delete user {}?", id))? {
                println!("Cancelled");
                return Ok(());
            }
            client
                .delete_user(id)
                .await
                .map_err(|e| anyhow::anyhow!("Error deleting user: {}", e.detail()))?;
            println!("User deleted successfully!");
        }

        Commands::Applications { user_id } => {
            let apps = client
                .user_applications(user_id)
                .await
                .map_err(|e| anyhow::anyhow!("Error fetching applications: {}", e.detail()))?;

            match format {
                OutputFormat::Table => {
                    print!("{}", report::applicant_report(&apps));
                    println!();
                    print!("{}", report::applications_table(&apps));
                }
                _ => print_applications(&apps, format)?,
            }
        }

        Commands::Improve { user_id } => {
            let response = client
                .credit_improvement(user_id)
                .await
                .map_err(|e| anyhow::anyhow!("Error fetching suggestions: {}", e.detail()))?;

            match format {
                OutputFormat::Json => print_json(&response)?,
                _ => print!("{}", report::improvement_report(&response)),
            }
        }

        Commands::Status => {
            let url = format!("{}/health", cli.api_url.trim_end_matches('/'));
            let response = reqwest::get(&url).await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    println!("LoanSewa CLI v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!("Host:    {}", health["status"].as_str().unwrap_or("unknown"));
                    println!("Backend: {}", health["backend"].as_str().unwrap_or("unknown"));
                    if let Some(version) = health["version"].as_str() {
                        println!("Version: {}", version);
                    }
                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!("Uptime:  {}", format_duration(uptime));
                    }
                }
                Ok(resp) => bail!("Host returned error: {}", resp.status()),
                Err(e) => {
                    eprintln!("Make sure the LoanSewa UI host is running:");
                    eprintln!("  cargo run --bin loansewa");
                    return Err(e).with_context(|| format!("Cannot connect to LoanSewa at {}", cli.api_url));
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Cannot write {:?}", path))?;
                    println!("Wrote default config to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Reports without a tabular shape only print as a table or JSON
fn check_format(command: &Commands, format: OutputFormat) -> Result<()> {
    let name = match command {
        Commands::Stats => "stats",
        Commands::Insights => "insights",
        Commands::Improve { .. } => "improve",
        _ => return Ok(()),
    };
    if matches!(format, OutputFormat::Csv) {
        anyhow::bail!("`{}` has no CSV output; use --format table or --format json", name);
    }
    Ok(())
}

fn print_applications(apps: &[LoanApplication], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&apps)?,
        OutputFormat::Csv => report::write_applications_csv(apps, io::stdout().lock())?,
        OutputFormat::Table => print!("{}", report::applications_table(apps)),
    }
    Ok(())
}

fn print_users(users: &[User], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&users)?,
        OutputFormat::Csv => report::write_users_csv(users, io::stdout().lock())?,
        OutputFormat::Table => print!("{}", report::users_table(users)),
    }
    Ok(())
}

fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
