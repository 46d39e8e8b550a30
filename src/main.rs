//! layerchart-docs-mcp: MCP server for LayerChart documentation.
//!
//! Usage:
//!   layerchart-docs-mcp --mcp                          # Start MCP server
//!   layerchart-docs-mcp list                           # List documentation routes
//!   layerchart-docs-mcp source <route> --variant usage # Fetch raw source
//!   layerchart-docs-mcp doc <route>                    # Page text + source
//!   layerchart-docs-mcp search <query>                 # Search the docs

use clap::{Parser, Subcommand};
use layerchart_docs_mcp::config::{self, DocsConfig, ListStrategy, SearchStrategy};
use layerchart_docs_mcp::server::DocsServer;
use layerchart_docs_mcp::{fmt, tools, DocsError, DocsService, SourceVariant};
use rmcp::ServiceExt;
use serde::Serialize;
use std::io::{self, IsTerminal, StdoutLock, Write};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "layerchart-docs-mcp")]
#[command(about = "MCP server for LayerChart documentation and component sources")]
#[command(version)]
struct Cli {
    /// Run as MCP server (stdin/stdout JSON-RPC)
    #[arg(long)]
    mcp: bool,

    /// Rendered documentation site origin
    #[arg(long, default_value = config::DEFAULT_SITE_ORIGIN)]
    site_origin: String,

    /// Raw file host origin
    #[arg(long, default_value = config::DEFAULT_RAW_ORIGIN)]
    raw_origin: String,

    /// REST API origin (contents listing, code search)
    #[arg(long, default_value = config::DEFAULT_API_ORIGIN)]
    api_origin: String,

    /// Repository as owner/name
    #[arg(long, default_value = config::DEFAULT_REPO)]
    repo: String,

    /// Branch to read sources from
    #[arg(long, default_value = config::DEFAULT_BRANCH)]
    branch: String,

    /// Package directory inside the repository
    #[arg(long, default_value = config::DEFAULT_PACKAGE_PATH)]
    package_path: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = config::DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// How list_docs enumerates routes
    #[arg(long, value_enum, default_value_t = ListStrategy::Directory)]
    list_strategy: ListStrategy,

    /// How search_docs finds matches
    #[arg(long, value_enum, default_value_t = SearchStrategy::CodeSearch)]
    search_strategy: SearchStrategy,

    /// Print JSON instead of human-readable output (CLI mode)
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output (CLI mode)
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List documentation routes
    List,

    /// Fetch raw source for a route
    Source {
        /// Documentation route (e.g. /docs/components/BarChart)
        route: String,

        /// usage (docs page) or implementation (component)
        #[arg(short, long, default_value = "usage")]
        variant: SourceVariant,
    },

    /// Get page text and source for a route
    Doc {
        /// Documentation route
        route: String,

        /// Also fetch the rendered website page
        #[arg(short, long)]
        rendered: bool,
    },

    /// Search documentation and components
    Search {
        /// Search query
        query: String,
    },
}

impl Cli {
    fn docs_config(&self) -> DocsConfig {
        DocsConfig {
            site_origin: self.site_origin.clone(),
            raw_origin: self.raw_origin.clone(),
            api_origin: self.api_origin.clone(),
            repo: self.repo.clone(),
            branch: self.branch.clone(),
            package_path: self.package_path.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            list_strategy: self.list_strategy,
            search_strategy: self.search_strategy,
            ..DocsConfig::default()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // CRITICAL: Log to stderr only (stdout is JSON-RPC for MCP)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("layerchart_docs_mcp=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let service = DocsService::new(cli.docs_config())?;

    if cli.mcp {
        run_mcp_server(service).await
    } else if let Some(cmd) = cli.command {
        let color = !cli.no_color && io::stdout().is_terminal();
        let ok = run_cli(&service, cmd, cli.json, color).await?;
        if !ok {
            std::process::exit(1);
        }
        Ok(())
    } else {
        // Default: show help
        eprintln!("Use --mcp to start MCP server, or a subcommand for CLI mode.");
        eprintln!("Run with --help for more information.");
        std::process::exit(1);
    }
}

async fn run_mcp_server(service: DocsService) -> anyhow::Result<()> {
    let config = service.config();
    tracing::info!(
        repo = %config.repo,
        branch = %config.branch,
        list_strategy = %config.list_strategy,
        search_strategy = %config.search_strategy,
        "Starting MCP server"
    );

    let server = DocsServer::new(service);

    // Run the MCP server on stdin/stdout
    let service = server.serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;

    Ok(())
}

/// Runs one subcommand. Returns `false` when the tool reported an error.
async fn run_cli(
    service: &DocsService,
    cmd: Commands,
    json: bool,
    color: bool,
) -> anyhow::Result<bool> {
    match cmd {
        Commands::List => {
            let result = tools::execute_list(service).await;
            emit(result, json, color, fmt::fmt_list)
        }

        Commands::Source { route, variant } => {
            let input = tools::SourceInput { route, variant };
            let result = tools::execute_source(service, input).await;
            emit(result, json, color, fmt::fmt_source)
        }

        Commands::Doc { route, rendered } => {
            let input = tools::DocInput {
                route,
                include_rendered: rendered,
            };
            let result = tools::execute_doc(service, input).await;
            emit(result, json, color, fmt::fmt_doc)
        }

        Commands::Search { query } => {
            let input = tools::SearchInput { query };
            let result = tools::execute_search(service, input).await;
            emit(result, json, color, fmt::fmt_search)
        }
    }
}

fn emit<T, F>(result: Result<T, DocsError>, json: bool, color: bool, human: F) -> anyhow::Result<bool>
where
    T: Serialize,
    F: FnOnce(&mut StdoutLock<'static>, &T, bool) -> io::Result<()>,
{
    let mut out = io::stdout().lock();
    match result {
        Ok(output) => {
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
            } else {
                human(&mut out, &output, color)?;
            }
            Ok(true)
        }
        Err(e) => {
            let payload = e.payload();
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&payload)?)?;
            } else {
                let color = color && io::stderr().is_terminal();
                fmt::fmt_error(&mut io::stderr().lock(), &payload, color)?;
            }
            Ok(false)
        }
    }
}
