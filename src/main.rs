//! Tasklist entry point.
//!
//! Runs the interactive console by default, or the HTTP API with `serve`.
//! Both surfaces share one in-memory task list for the life of the process.

use std::error::Error;
use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use tasklist::{
    config::Settings,
    console::Console,
    http,
    task::adapters::memory::InMemoryTaskListService,
    telemetry,
};
use tokio::net::TcpListener;

#[derive(Debug, Parser)]
#[command(name = "tasklist")]
#[command(about = "Track tasks across projects, with optional due dates")]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Subcommand)]
enum Mode {
    /// Read commands from standard input (default)
    Console,
    /// Serve the JSON API
    Serve {
        /// Host to bind, overriding configuration
        #[arg(long)]
        host: Option<String>,
        /// Port to bind, overriding configuration
        #[arg(long)]
        port: Option<u16>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let service = InMemoryTaskListService::in_memory();

    match cli.mode.unwrap_or(Mode::Console) {
        Mode::Console => {
            telemetry::init("warn")?;
            run_console(service, io::stdin().lock(), io::stdout().lock())?;
        }
        Mode::Serve { host, port } => {
            telemetry::init(telemetry::DEFAULT_FILTER)?;
            let mut settings = Settings::load()?;
            if let Some(override_host) = host {
                settings.server.host = override_host;
            }
            if let Some(override_port) = port {
                settings.server.port = override_port;
            }
            run_server(service, &settings.server.address())?;
        }
    }
    Ok(())
}

fn run_console(
    service: InMemoryTaskListService,
    input: impl BufRead,
    output: impl Write,
) -> io::Result<()> {
    Console::new(service).run(input, output)
}

fn run_server(service: InMemoryTaskListService, address: &str) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async {
        let listener = TcpListener::bind(address).await?;
        http::serve(listener, http::router(service)).await
    })
}
