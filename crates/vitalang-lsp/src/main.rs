use clap::Parser;
use tower_lsp::{LspService, Server};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vitalang_lsp::Backend;

#[derive(Parser)]
#[command(name = "vitalang-lsp")]
#[command(about = "Language Server for Vitalang")]
struct Cli {
    /// Use stdio for communication (required)
    #[arg(long)]
    stdio: bool,

    /// Enable debug mode
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    // Log to stderr; stdout carries the protocol
    let default_filter = if args.debug {
        "vitalang_lsp=debug"
    } else {
        "vitalang_lsp=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if !args.stdio {
        eprintln!("Error: --stdio flag is required");
        std::process::exit(1);
    }

    tracing::info!("Starting Vitalang Language Server");

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(|client| Backend::new(client, args.debug));

    Server::new(stdin, stdout, socket).serve(service).await;
}
