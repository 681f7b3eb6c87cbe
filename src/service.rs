use axum::{routing::post, Router};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use self::compiler::Compiler;

pub mod compiler;
pub mod error;
pub mod models;
pub mod routes;

#[cfg(test)]
pub mod test_util;

/*
    # Flow chart of a submission through this service

    main() ────────────────► service.run() ── binds the listener ──┐
                                                                   │
    ┌───────── POST /run with {"code": ...} ◄──────────────────────┘
    │
    └────────► routes::run(...) ───► reject if code is missing/empty
                                                     │
                                                     │
    ┌───────── overwrite the input file ◄────────────┘
    │
    └────► spawn compiler, stdin = input file ────► 200 stdout / 500 stderr

    Every other path is answered from the working directory as a static file.
*/

pub struct Service {
    // listener environmental variables
    address: String,
    port: u16,

    // Interface to the external compiler binary
    compiler: Compiler,
}

impl Service {
    pub fn new(address: String, port: u16, compiler: Compiler) -> Service {
        Service {
            address,
            port,
            compiler,
        }
    }

    /// Binds the configured address and serves requests until a shutdown
    /// signal arrives. Binding is the only fallible step; per-request
    /// failures are answered over HTTP and never end up here.
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let app = router(self.compiler);

        let host_addr = format!("{}:{}", self.address, self.port);
        let listener = TcpListener::bind(&host_addr).await?;
        info!("Server running at http://{}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Listener closed");
        Ok(())
    }
}

/// Builds the HTTP surface: one dynamic route for submissions, everything
/// else served as static files from the working directory.
pub fn router(compiler: Compiler) -> Router {
    Router::new()
        .route("/run", post(routes::run))
        .fallback_service(ServeDir::new("."))
        .with_state(compiler)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Failed to listen for shutdown signal: {}", e),
    }
}
