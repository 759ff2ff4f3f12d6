use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use portfolio_core::repositories::CommentRepo as _;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(version, about = "Comment service of the portfolio site")]
struct Args {
    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    config_file: Option<PathBuf>,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,
}

pub async fn run() -> Result<()> {
    let args = Args::parse();
    let mut cfg = Config::try_load_from_file_or_default(args.config_file.as_deref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    let enable_cors = args.enable_cors || cfg.webserver.enable_cors;

    log::info!("Opening database {}", cfg.db.conn_sqlite);
    let store = portfolio_db_sqlite::Store::open(
        &cfg.db.conn_sqlite,
        cfg.db.conn_pool_size.into(),
    )?;
    store.migrate()?;
    {
        let count = store.read()?.count_comments()?;
        log::info!("{count} comment(s) stored");
    }

    portfolio_webserver::run(store, enable_cors).await
}
