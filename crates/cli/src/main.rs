use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::env;
use std::io::Write;
use std::path::PathBuf;

use docshelf_server::ServerConfig;
use docshelf_viewer::{first_document, render_markdown, App, DocClient, LoadState, Route};

const DOCS_DIR_ENV: &str = "DOCSHELF_DOCS_DIR";
const ASSETS_DIR_ENV: &str = "DOCSHELF_ASSETS_DIR";

#[derive(Parser)]
#[command(name = "docshelf")]
#[command(about = "Serve and browse a directory of Markdown documentation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the documentation tree and raw documents over HTTP
    Serve(ServeArgs),

    /// Print the documentation tree as JSON
    Tree(TreeArgs),

    /// Resolve a logical path and print the raw document
    Cat(CatArgs),

    /// Resolve a logical path and print the rendered HTML
    Render(RenderArgs),
}

#[derive(Args)]
struct ServeArgs {
    /// Bind address, e.g. 127.0.0.1:8080
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: String,

    /// Directory containing the Markdown documentation (env: DOCSHELF_DOCS_DIR)
    #[arg(long)]
    docs_dir: Option<PathBuf>,

    /// Directory with the client application's static assets (env: DOCSHELF_ASSETS_DIR)
    #[arg(long)]
    assets_dir: Option<PathBuf>,
}

#[derive(Args)]
struct TreeArgs {
    /// Documentation directory (defaults to DOCSHELF_DOCS_DIR, then ./docs)
    path: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Args)]
struct CatArgs {
    /// Logical document path, e.g. guide/index.md
    path: String,

    /// Documentation directory (defaults to DOCSHELF_DOCS_DIR, then ./docs)
    #[arg(long, conflicts_with = "server")]
    docs_dir: Option<PathBuf>,

    /// Fetch from a running server instead of the filesystem
    #[arg(long)]
    server: Option<String>,
}

#[derive(Args)]
struct RenderArgs {
    /// Logical document path; defaults to the first document of the tree
    path: Option<String>,

    /// Documentation directory (defaults to DOCSHELF_DOCS_DIR, then ./docs)
    #[arg(long, conflicts_with = "server")]
    docs_dir: Option<PathBuf>,

    /// Fetch from a running server instead of the filesystem
    #[arg(long)]
    server: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Serve(args) => run_serve(args).await,
        Commands::Tree(args) => run_tree(args),
        Commands::Cat(args) => run_cat(args).await,
        Commands::Render(args) => run_render(args).await,
    }
}

fn resolve_docs_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    let dir = flag
        .or_else(|| env::var(DOCS_DIR_ENV).ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("./docs"));
    if !dir.is_dir() {
        anyhow::bail!(
            "documentation directory {} does not exist (set --docs-dir or {DOCS_DIR_ENV})",
            dir.display()
        );
    }
    Ok(dir)
}

async fn run_serve(args: ServeArgs) -> Result<()> {
    let docs_dir = resolve_docs_dir(args.docs_dir)?;
    let assets_dir = args
        .assets_dir
        .or_else(|| env::var(ASSETS_DIR_ENV).ok().map(PathBuf::from));
    if let Some(assets) = &assets_dir {
        if !assets.is_dir() {
            log::warn!(
                "assets directory {} does not exist; serving the built-in shell",
                assets.display()
            );
        }
    }

    let config = ServerConfig {
        bind: args.bind,
        docs_dir,
        assets_dir,
    };
    docshelf_server::serve(config).await.context("server terminated")
}

fn run_tree(args: TreeArgs) -> Result<()> {
    let docs_dir = resolve_docs_dir(args.path)?;
    let tree = docshelf_doctree::build_tree(&docs_dir)
        .with_context(|| format!("failed to scan {}", docs_dir.display()))?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&tree)?
    } else {
        serde_json::to_string(&tree)?
    };
    println!("{json}");
    Ok(())
}

async fn run_cat(args: CatArgs) -> Result<()> {
    let bytes = match &args.server {
        Some(server) => DocClient::new(server.clone())
            .fetch_document(&args.path)
            .await
            .with_context(|| format!("failed to fetch '{}'", args.path))?
            .into_bytes(),
        None => {
            let docs_dir = resolve_docs_dir(args.docs_dir)?;
            docshelf_doctree::resolve(&docs_dir, &args.path)
                .with_context(|| format!("failed to resolve '{}'", args.path))?
                .bytes
        }
    };
    std::io::stdout().write_all(&bytes)?;
    Ok(())
}

async fn run_render(args: RenderArgs) -> Result<()> {
    if let Some(server) = &args.server {
        return run_render_remote(server, args.path.as_deref()).await;
    }

    let docs_dir = resolve_docs_dir(args.docs_dir)?;
    let path = match args.path {
        Some(path) => path,
        None => {
            let tree = docshelf_doctree::build_tree(&docs_dir)
                .with_context(|| format!("failed to scan {}", docs_dir.display()))?;
            match first_document(&tree) {
                Some(path) => path.to_string(),
                None => anyhow::bail!("documentation tree is empty"),
            }
        }
    };
    let doc = docshelf_doctree::resolve(&docs_dir, &path)
        .with_context(|| format!("failed to resolve '{path}'"))?;
    let text = String::from_utf8_lossy(&doc.bytes);
    println!("{}", render_markdown(&text));
    Ok(())
}

/// Drive the viewer against a running server, exactly as an interactive
/// embedding would: tree first, then navigate and render.
async fn run_render_remote(server: &str, path: Option<&str>) -> Result<()> {
    let mut app = App::new(DocClient::new(server));
    app.load_tree()
        .await
        .context("failed to fetch the documentation tree")?;

    let path = match path {
        Some(path) => path.to_string(),
        None => match app.initial_route() {
            Route::Document(path) => path,
            Route::NotFound => anyhow::bail!("documentation tree is empty"),
        },
    };

    app.navigate(&path).await;
    if let Some(html) = app.rendered_html() {
        println!("{html}");
        return Ok(());
    }
    match app.loader().state() {
        LoadState::Failed { message, .. } => anyhow::bail!("{message}"),
        _ => anyhow::bail!("document '{path}' did not load"),
    }
}
