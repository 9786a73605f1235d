use std::net::IpAddr;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use assignment::{
    api,
    config::ServerConfig,
    form::{self, AssignmentForm},
    models::Submission,
    services::{RecentLog, StatusMessages, TracingLogger},
};

#[derive(Parser)]
#[command(name = "assignment")]
#[command(about = "Name form: validates a name, shows it back and logs it")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the form server
    Serve {
        /// Address to bind (overrides ASSIGNMENT_HOST)
        #[arg(long)]
        host: Option<IpAddr>,

        /// Port for HTTP (overrides ASSIGNMENT_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Submit a name once without starting the server
    Submit {
        /// The name to submit
        name: String,
    },
}

/// Initialize tracing with output to stderr (for one-shot submits) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "assignment=debug,tower_http=debug".into()),
    );

    if use_stderr {
        // Submit mode: stdout carries only the user-facing messages
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let log = RecentLog::new(config.log_capacity);
    tracing::debug!("Keeping the {} most recent log records", log.capacity());

    let app = api::create_router_with_config(api::AppState::new(log), &config);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Name form listening on http://{}/assignment", config.bind_address());

    axum::serve(listener, app).await?;
    Ok(())
}

fn submit(name: String) -> ExitCode {
    let messages = StatusMessages::new();
    let logger = TracingLogger;
    let handler = AssignmentForm::new(&messages, &logger);

    match form::process(&handler, &Submission::new(name)) {
        Ok(()) => {
            for message in messages.drain() {
                println!("{}", message.text);
            }
            ExitCode::SUCCESS
        }
        Err(errors) => {
            for (field, message) in errors.iter() {
                eprintln!("{}: {}", field, message);
            }
            ExitCode::FAILURE
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let use_stderr = matches!(cli.command, Some(Commands::Submit { .. }));
    init_tracing(use_stderr);

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            let config = ServerConfig::from_env()?.with_host(host).with_port(port);
            serve(config).await?;
        }
        Some(Commands::Submit { name }) => return Ok(submit(name)),
        None => serve(ServerConfig::from_env()?).await?,
    }

    Ok(ExitCode::SUCCESS)
}
