// src/server.rs
use std::net::{IpAddr, SocketAddr};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use crate::config::Config;

/// Binds `host:port`, moving up to 20 ports further when the address is taken.
pub async fn bind(host: IpAddr, base_port: u16) -> Option<(TcpListener, SocketAddr)> {
    for offset in 0u16..=20 {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::from((host, port));
        match TcpListener::bind(addr).await {
            Ok(l) => {
                let bound = l.local_addr().unwrap_or(addr);
                return Some((l, bound));
            }
            Err(e) => {
                if offset == 0 { tracing::warn!(%addr, error=%e, "Port in use, trying next"); }
            }
        }
    }
    None
}

/// Serves `app` until the listener fails. Not finding a free port is an error.
pub async fn serve(app: Router, config: &Config) -> std::io::Result<()> {
    let app = app.layer(TraceLayer::new_for_http());

    let listener = match bind(config.host, config.port).await {
        Some((l, addr)) => {
            tracing::info!("Server running on http://{}", addr);
            l
        }
        None => {
            return Err(std::io::Error::new(
                std::io::ErrorKind::AddrInUse,
                format!("no free port in {}..={} on {}", config.port, config.port.saturating_add(20), config.host),
            ));
        }
    };

    axum::serve(listener, app).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn exhausted_port_range_is_an_error() {
        let host = IpAddr::from([127, 0, 0, 1]);
        let mut held = Vec::new();
        let (first, addr) = bind(host, 0).await.unwrap();
        let base = addr.port();
        held.push(first);
        for offset in 1u16..=20 {
            let port = base.saturating_add(offset);
            if let Ok(l) = TcpListener::bind(SocketAddr::from((host, port))).await {
                held.push(l);
            }
        }
        // Some of those ports may belong to other processes; either way none is free.
        let config = Config { host, port: base, ..Config::from_env(base) };
        let err = serve(Router::new(), &config).await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::AddrInUse);
    }

    #[tokio::test]
    async fn taken_port_moves_to_the_next_one() {
        let host = IpAddr::from([127, 0, 0, 1]);
        let (_held, first) = bind(host, 0).await.unwrap();
        let (_next, second) = bind(host, first.port()).await.unwrap();
        assert_ne!(first.port(), 0);
        assert_ne!(first.port(), second.port());
    }
}
