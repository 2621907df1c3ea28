//! Chat widget CLI and reply service entry point.
//!
//! Binary name: `chatwidget`
//!
//! Loads `.env` and the widget config, then either drives the reply
//! resolver from the terminal or starts the HTTP reply service.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use chatwidget_infra::config::load_widget_config;
use chatwidget_observe::tracing_setup::{init_tracing, shutdown_tracing, verbosity_filter};
use chatwidget_types::config::WidgetConfig;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Provider settings come from the environment; .env is optional.
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    init_tracing(verbosity_filter(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    match &dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => tracing::debug!("no .env file found"),
        Err(e) => tracing::warn!("failed to load .env: {e}"),
    }

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Shell completions don't need the config
    let config = match cli.command {
        Commands::Completions { .. } => WidgetConfig::default(),
        _ => load_widget_config(&cli.config).await,
    };

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "chatwidget", &mut std::io::stdout());
        }

        Commands::Chat => {
            let resolver = cli::resolver::build_resolver(&config, cli.local);
            let backend = resolver
                .remote_enabled()
                .then_some(config.backend.endpoint_url.as_str());
            cli::chat::loop_runner::run_chat_loop(resolver, backend).await?;
        }

        Commands::Ask { text } => {
            let resolver = cli::resolver::build_resolver(&config, cli.local);
            cli::ask::ask(resolver, &text.join(" "), cli.json).await?;
        }

        Commands::Quick { topic } => {
            let resolver = cli::resolver::build_resolver(&config, cli.local);
            cli::ask::quick(resolver, topic, cli.json).await?;
        }

        Commands::Serve {
            port,
            host,
            profile,
        } => {
            let server = config.server;
            let host = host.unwrap_or_else(|| server.host.clone());
            let port = port.unwrap_or(server.port);
            let profile_path = profile.unwrap_or_else(|| server.profile_path.clone().into());

            let state = AppState::init(&server, &profile_path).await?;
            let router = http::router::build_router(state, &server.cors_origins);

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            if !cli.quiet {
                println!(
                    "  {} Chat API listening on {}",
                    console::style("*").bold(),
                    console::style(format!("http://{addr}")).cyan()
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }
            tracing::info!(%addr, profile = %profile_path.display(), "reply service started");

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            if !cli.quiet {
                println!("\n  Server stopped.");
            }
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_completions_run_without_config() {
        let cli = Cli::try_parse_from([
            "chatwidget",
            "--config",
            "/nonexistent/chatwidget.toml",
            "completions",
            "bash",
        ])
        .unwrap();
        assert!(run(cli).await.is_ok());
    }

    #[tokio::test]
    async fn test_quick_runs_locally() {
        let cli =
            Cli::try_parse_from(["chatwidget", "--local", "--json", "quick", "hours"]).unwrap();
        assert!(run(cli).await.is_ok());
    }
}
