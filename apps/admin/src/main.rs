mod api;
mod careers;
mod config;
mod content;
mod credentials;
mod errors;
mod store;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::api::careers::{NewApplication, ResumeFile};
use crate::api::content::publish_content;
use crate::api::{ContentGateway, HttpClient};
use crate::careers::board::{CareersBoard, WorkModeFilter, POSITION_DELIMITER};
use crate::config::Config;
use crate::content::model::{HomeLayoutVariant, WorkMode};
use crate::content::normalize::normalize;
use crate::credentials::CredentialStore;
use crate::store::content::ContentStore;
use crate::store::draft::DraftStore;

#[derive(Parser)]
#[command(name = "admin")]
#[command(about = "Admin client for the site content backend")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store the admin API key
    Login {
        /// The API key issued for the content backend
        api_key: String,
    },

    /// Remove the stored admin API key
    Logout,

    /// Fetch the published content document
    Pull {
        /// Write the normalized document to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Publish a content document as the new live version
    Publish {
        /// Path to a JSON content document (e.g. an edited `pull` output)
        file: PathBuf,
    },

    /// List open roles from the published careers section
    Roles {
        /// Search titles, teams, and locations
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by team
        #[arg(short, long)]
        team: Option<String>,

        /// Filter by work mode (remote, hybrid, onsite, other)
        #[arg(short, long)]
        mode: Option<String>,

        /// Page number
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// Submit a job application
    Apply {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: Option<String>,

        /// Role title; repeat to apply to several roles at once
        #[arg(long = "role", required = true)]
        roles: Vec<String>,

        #[arg(long)]
        message: Option<String>,

        /// Path to the resume file (PDF, DOC, or DOCX)
        #[arg(long)]
        resume: PathBuf,
    },

    /// List submitted applications (requires login)
    Applications {
        /// Only applications mentioning this role
        #[arg(short, long)]
        role: Option<String>,
    },

    /// Download a resume by file id (requires login)
    Resume {
        resume_file_id: i64,

        /// Output path; defaults to the server-suggested filename
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Show or change the homepage layout variant (requires login)
    Layout {
        /// New variant (classic, sleek, blockchain, studio, river); omit to show
        variant: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let client = HttpClient::new(config.api_base_url.clone());
    let credentials = match &config.credential_file {
        Some(path) => CredentialStore::new(path.clone()),
        None => CredentialStore::open_default()?,
    };

    match cli.command {
        Commands::Login { api_key } => {
            credentials.save(&api_key)?;
            info!("Credential stored at {}", credentials.path().display());
            println!("Logged in.");
        }
        Commands::Logout => {
            credentials.clear()?;
            println!("Logged out.");
        }
        Commands::Pull { out } => pull(&client, out).await?,
        Commands::Publish { file } => publish(&client, &credentials, &file).await?,
        Commands::Roles {
            search,
            team,
            mode,
            page,
        } => roles(&client, search, team, mode, page).await?,
        Commands::Apply {
            name,
            email,
            phone,
            roles,
            message,
            resume,
        } => apply(&client, name, email, phone, roles, message, &resume).await?,
        Commands::Applications { role } => applications(&client, &credentials, role).await?,
        Commands::Resume {
            resume_file_id,
            out,
        } => resume(&client, &credentials, resume_file_id, out).await?,
        Commands::Layout { variant } => layout(&client, &credentials, variant).await?,
    }

    Ok(())
}

async fn pull(client: &HttpClient, out: Option<PathBuf>) -> Result<()> {
    let mut store = ContentStore::new(Arc::new(client.clone()));
    store.reload().await;

    if let Some(error) = store.error() {
        eprintln!("Warning: {error} (showing defaults)");
    }
    let content = store
        .content()
        .ok_or_else(|| anyhow!("No content available"))?;
    let json = serde_json::to_string_pretty(content)?;

    match out {
        Some(path) => {
            std::fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote content to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

async fn publish(client: &HttpClient, credentials: &CredentialStore, file: &Path) -> Result<()> {
    let api_key = credentials.load()?.unwrap_or_default();

    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", file.display()))?;

    // Run the edited document through the same draft machinery the admin
    // screens use: seed from live content, replace wholesale, publish,
    // then reload the published side.
    let mut store = DraftStore::new(ContentStore::new(Arc::new(client.clone())));
    store.reload_content().await;
    store.set_draft(&normalize(&value));

    let draft = store
        .draft()
        .ok_or_else(|| anyhow!("No draft to publish"))?
        .clone();
    let ack = publish_content(client, &draft, &api_key).await?;
    println!("{}", ack.detail);

    store.reload_content().await;
    Ok(())
}

async fn roles(
    client: &HttpClient,
    search: Option<String>,
    team: Option<String>,
    mode: Option<String>,
    page: usize,
) -> Result<()> {
    let raw = client.fetch_content().await?;
    let content = normalize(&raw);

    let mut board = CareersBoard::new(content.careers.positions);
    if let Some(search) = search {
        board.set_search(search);
    }
    board.set_team_filter(team);
    if let Some(mode) = mode {
        board.set_work_mode_filter(WorkModeFilter::Only(parse_work_mode_arg(&mode)?));
    }
    board.set_page(page);

    println!(
        "{} matching role(s), page {}/{}",
        board.filtered().len(),
        board.current_page(),
        board.total_pages()
    );
    for p in board.page() {
        println!("  [{}] {} — {} / {}", p.id, p.title, p.team, p.location);
    }
    Ok(())
}

async fn apply(
    client: &HttpClient,
    name: String,
    email: String,
    phone: Option<String>,
    roles: Vec<String>,
    message: Option<String>,
    resume: &Path,
) -> Result<()> {
    let bytes = std::fs::read(resume)
        .with_context(|| format!("Failed to read {}", resume.display()))?;
    let file_name = resume
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("resume")
        .to_string();

    let application = NewApplication {
        full_name: name,
        email,
        phone,
        position: roles.join(POSITION_DELIMITER),
        message,
        resume: ResumeFile {
            file_name,
            content_type: resume_content_type(resume)?,
            bytes,
        },
    };

    client.submit_application(application).await?;
    println!("Application submitted.");
    Ok(())
}

async fn applications(
    client: &HttpClient,
    credentials: &CredentialStore,
    role: Option<String>,
) -> Result<()> {
    let api_key = credentials.load()?.unwrap_or_default();
    let records = client.list_applications(&api_key, role.as_deref()).await?;

    println!("{} application(s)", records.len());
    for r in records {
        println!(
            "  #{} {} <{}> — {} ({}) resume={}",
            r.id,
            r.full_name,
            r.email,
            r.position,
            r.created_at,
            r.resume_file_id
        );
    }
    Ok(())
}

async fn resume(
    client: &HttpClient,
    credentials: &CredentialStore,
    resume_file_id: i64,
    out: Option<PathBuf>,
) -> Result<()> {
    let api_key = credentials.load()?.unwrap_or_default();
    let download = client.download_resume(&api_key, resume_file_id).await?;

    let path = out.unwrap_or_else(|| PathBuf::from(&download.file_name));
    std::fs::write(&path, &download.bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!(
        "Saved {} ({} bytes, {})",
        path.display(),
        download.bytes.len(),
        download.content_type
    );
    Ok(())
}

async fn layout(
    client: &HttpClient,
    credentials: &CredentialStore,
    variant: Option<String>,
) -> Result<()> {
    let api_key = credentials.load()?.unwrap_or_default();

    let response = match variant {
        Some(v) => {
            let variant = HomeLayoutVariant::parse(&v)
                .ok_or_else(|| anyhow!("Unknown layout variant '{v}'"))?;
            client.update_home_layout(&api_key, variant).await?
        }
        None => client.fetch_home_layout(&api_key).await?,
    };
    println!("layoutVariant: {}", response.layout_variant.as_str());
    Ok(())
}

fn parse_work_mode_arg(mode: &str) -> Result<WorkMode> {
    match mode {
        "remote" => Ok(WorkMode::Remote),
        "hybrid" => Ok(WorkMode::Hybrid),
        "onsite" => Ok(WorkMode::Onsite),
        "other" => Ok(WorkMode::Other),
        _ => bail!("Unknown work mode '{mode}' (expected remote, hybrid, onsite, or other)"),
    }
}

fn resume_content_type(path: &Path) -> Result<String> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    let content_type = match ext.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => bail!("Unsupported resume file type '.{ext}' (expected pdf, doc, or docx)"),
    };
    Ok(content_type.to_string())
}
