//! Review Ranger plugin usage report server.
//!
//! Serves the administrative report page over HTTP, reading plugin
//! activation and content from a WordPress-schema SQLite database.
//!
//! Usage:
//!   ranger-admin --config ranger.toml
//!   ranger-admin --database site.sqlite --listen 127.0.0.1:8088

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use ranger_admin::{AdminConfig, AdminState, REPORT_PAGE_SLUG, UserDirectory, build_router};
use ranger_db::WpDatabase;
use ranger_model::Catalog;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "ranger-admin")]
#[command(about = "Review Ranger plugin usage report server")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the site's SQLite database (overrides the config file)
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Database table prefix (overrides the config file)
    #[arg(long)]
    table_prefix: Option<String>,

    /// Address to listen on (overrides the config file)
    #[arg(short, long)]
    listen: Option<SocketAddr>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> Result<AdminConfig> {
        let mut config = match &self.config {
            Some(path) => AdminConfig::load(path)?,
            None => AdminConfig::default(),
        };
        if let Some(database) = self.database {
            config.database = Some(database);
        }
        if let Some(prefix) = self.table_prefix {
            config.table_prefix = prefix;
        }
        if let Some(listen) = self.listen {
            config.listen = listen;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let config = args.into_config()?;
    let Some(database) = config.database.as_deref() else {
        bail!("no database configured; pass --database or set `database` in the config file");
    };

    let db = WpDatabase::open(database, &config.table_prefix)
        .with_context(|| format!("Failed to open database {}", database.display()))?;

    let users = UserDirectory::from_users(&config.users);
    if users.is_empty() {
        warn!("no users configured; every report request will be refused");
    }
    info!(users = users.len(), "loaded user directory");

    let state = AdminState::new(Arc::new(db), Catalog::builtin(), users);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen))?;
    info!(
        "Report available at http://{}/wp-admin/tools.php?page={}",
        config.listen, REPORT_PAGE_SLUG
    );

    axum::serve(listener, app).await.context("HTTP server failed")?;
    Ok(())
}
