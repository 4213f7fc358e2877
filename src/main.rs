// src/main.rs
mod analytics;
mod charts;
mod config;
mod data;
mod dtos;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod views;

use std::net::SocketAddr;

use dotenvy::dotenv;
use tokio::net::TcpListener;

use crate::config::{Config, Environment};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    let environment = Environment::from_env();
    tracing_subscriber::fmt()
        .with_max_level(environment.log_level())
        .init();

    let config = Config::from_env();
    tracing::info!(
        environment = %config.environment,
        products = %config.sources.products.display(),
        orders = %config.sources.orders.display(),
        order_items = %config.sources.order_items.display(),
        "Data sources configured"
    );

    let host = config.host;
    let base_port = config.port;
    let app = routes::app(state::AppState::new(config));

    // Try base_port..base_port+20 to avoid crash when address is in use
    let listener = {
        let mut bound = None;
        for offset in 0u16..=20 {
            let port = base_port.saturating_add(offset);
            let addr = SocketAddr::from((host, port));
            match TcpListener::bind(addr).await {
                Ok(l) => { bound = Some((l, addr)); break; }
                Err(e) => {
                    if offset == 0 { tracing::warn!(%addr, error=%e, "Port in use, trying next"); }
                }
            }
        }
        match bound {
            Some((l, addr)) => {
                tracing::info!("Dashboard running on http://{}/dashboard", addr);
                l
            }
            None => {
                tracing::error!("Failed to bind to any port starting at {} on {}", base_port, host);
                return;
            }
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error=%e, "Server error");
    }
}
