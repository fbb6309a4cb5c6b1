//! httpecho: diagnostic HTTP echo server.
//!
//! Serves every request back to the client as a verbatim dump of the request
//! bytes, on every port given on the command line, logging one access line
//! per request.

use std::sync::Arc;

use clap::Parser;

use httpecho::observability::logging::{self, StderrLog};

#[derive(Parser)]
#[command(name = "httpecho")]
#[command(about = "HTTP server that echoes every request back verbatim", long_about = None)]
struct Cli {
    /// Bind IP followed by one or more ports, or just ports
    /// (binds all interfaces).
    #[arg(required = true, value_name = "[IP] PORT...")]
    tokens: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init();

    let spec = match httpecho::validate(&cli.tokens) {
        Ok(spec) => spec,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("usage: httpecho [ip] <port> [port]...");
            std::process::exit(2);
        }
    };

    tracing::info!(ip = %spec.ip, ports = ?spec.ports, "httpecho starting");

    // Only returns once a listener has failed; that failure takes the whole
    // process down.
    if let Err(err) = httpecho::serve(spec, Arc::new(StderrLog)).await {
        tracing::error!(error = %err, "Fatal listener error");
        return Err(err.into());
    }
    Ok(())
}
