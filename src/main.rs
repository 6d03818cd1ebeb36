// Local dev server for social-dashboard.html
//
// Serves the working directory on http://127.0.0.1:3000 so the page gets a
// real origin instead of "null" (file://), which unblocks CORS preflights
// against external APIs.

use std::sync::Arc;

use tokio::net::TcpListener;

mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let state = Arc::new(config::AppState::new(&cfg)?);
    let listener = server::create_reusable_listener(addr)?;

    logger::log_server_start(&addr, &state);

    run_accept_loop(listener, state).await
}

/// Accept connections forever.
///
/// Accept errors are logged and never fatal; the process runs until it is
/// terminated externally (Ctrl+C).
async fn run_accept_loop(
    listener: TcpListener,
    state: Arc<config::AppState>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                server::accept_connection(stream, peer_addr, &state);
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
