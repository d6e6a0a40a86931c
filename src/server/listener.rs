use std::io::BufReader;
use std::net::{Shutdown, SocketAddr, TcpStream};
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::task::JoinError;
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::http::connection::Connection;

/// Accepts connections and serves them one at a time.
///
/// Each connection runs to completion on the blocking pool before the next
/// one is accepted.
pub async fn run(listen_addr: &str, config: Arc<ServerConfig>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("failed to bind {listen_addr}"))?;
    info!("Listening on {}", listen_addr);

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let stream = socket.into_std()?;
        stream.set_nonblocking(false)?;

        let config = Arc::clone(&config);
        let served = tokio::task::spawn_blocking(move || serve(stream, &config)).await;
        log_served(&peer, served);
    }
}

/// Logs how a connection ended. Failures stay local to that connection.
fn log_served(peer: &SocketAddr, served: Result<anyhow::Result<usize>, JoinError>) {
    match served {
        Ok(Ok(count)) => info!(peer = %peer, responses = count, "Connection closed"),
        Ok(Err(e)) => error!("Connection error from {}: {:#}", peer, e),
        Err(e) => error!("Connection task from {} failed: {}", peer, e),
    }
}

/// Runs the HTTP core on one blocking stream, then shuts the stream down.
pub fn serve(stream: TcpStream, config: &ServerConfig) -> anyhow::Result<usize> {
    let reader = BufReader::new(stream.try_clone()?);

    let mut conn = Connection::new(reader, &stream, config);
    let result = conn.run();
    let served = conn.served();

    // The peer may already be gone.
    let _ = stream.shutdown(Shutdown::Both);

    result.map(|()| served)
}
