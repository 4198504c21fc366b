//! bookvis catalog server
//!
//! Serves the book catalog of a graph database as JSON trees for the
//! visualization client.
//!
//! Usage:
//!   bookvis-server --seed                          # in-memory demo catalog
//!   bookvis-server --sqlite catalog.db --port 8080
//!   bookvis-server --neo4j-url http://localhost:7474 --neo4j-user neo4j --neo4j-password secret

use anyhow::{Context, Result, bail};
use bookvis_catalog::BookService;
use bookvis_catalog::seed::seed_demo_catalog;
use bookvis_server::{AppState, build_router};
use bookvis_store::{Neo4jConfig, Neo4jHttp, QueryEngine, SqliteGraph};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "bookvis-server")]
#[command(about = "HTTP API serving the bookvis catalog")]
struct Args {
    /// Address to bind the HTTP listener to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// HTTP port
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// SQLite graph database file; an in-memory graph is used when omitted
    #[arg(long, conflicts_with = "neo4j_url")]
    sqlite: Option<PathBuf>,

    /// Base URL of a Neo4j server to read the catalog from
    #[arg(long)]
    neo4j_url: Option<String>,

    /// Neo4j database name
    #[arg(long, default_value = "neo4j")]
    neo4j_database: String,

    /// Neo4j user
    #[arg(long)]
    neo4j_user: Option<String>,

    /// Neo4j password
    #[arg(long)]
    neo4j_password: Option<String>,

    /// Replace the SQLite graph with the demo catalog before serving
    #[arg(long)]
    seed: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    info!("bookvis server starting...");

    // The Neo4j engine owns a blocking HTTP client, which must be created and
    // dropped outside the async runtime.
    let engine = open_engine(&args)?;
    let service = Arc::new(BookService::with_engine(engine));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start tokio runtime")?;
    runtime.block_on(serve(&args, Arc::clone(&service)))?;
    drop(runtime);

    info!("bookvis server stopped");
    Ok(())
}

fn open_engine(args: &Args) -> Result<Arc<dyn QueryEngine>> {
    if let Some(url) = &args.neo4j_url {
        if args.seed {
            bail!("--seed is only supported with the SQLite graph");
        }
        let config = Neo4jConfig {
            base_url: url.clone(),
            database: args.neo4j_database.clone(),
            username: args.neo4j_user.clone(),
            password: args.neo4j_password.clone(),
            ..Default::default()
        };
        info!("Reading catalog from Neo4j at {} ({})", config.base_url, config.database);
        let engine = Neo4jHttp::new(config).context("failed to create Neo4j client")?;
        return Ok(Arc::new(engine));
    }

    let graph = match &args.sqlite {
        Some(path) => {
            info!("Opening SQLite graph at {}", path.display());
            SqliteGraph::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?
        }
        None => {
            info!("Using in-memory SQLite graph");
            SqliteGraph::open_in_memory().context("failed to open in-memory graph")?
        }
    };

    if args.seed {
        seed_demo_catalog(&graph).context("failed to seed demo catalog")?;
    } else if graph.node_count()? == 0 {
        warn!("Graph is empty; pass --seed to load the demo catalog");
    }
    Ok(Arc::new(graph))
}

async fn serve(args: &Args, service: Arc<BookService>) -> Result<()> {
    let app = build_router(AppState::new(service));
    let address = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    println!("\n========================================");
    println!("  bookvis server running");
    println!("========================================");
    println!("  Catalog:  http://{}/books", address);
    println!("  Health:   http://{}/health", address);
    println!("========================================\n");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
