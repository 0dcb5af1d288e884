use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use metro_server::cache::CachedPlanner;
use metro_server::config::ServerConfig;
use metro_server::network::Network;
use metro_server::planner::{Planner, SearchConfig};
use metro_server::web::{AppState, create_router};

/// Log both routes between the reference endpoints, if the network has them.
fn log_sample_routes(network: &Network, config: &SearchConfig) {
    let (start, goal) = ("A", "D");
    if !network.contains(start) || !network.contains(goal) {
        return;
    }

    let planner = Planner::new(network, config);
    match planner.fewest_transfers(start, goal) {
        Ok(Some(route)) => info!(%route, hops = route.hops(), "Fewest-transfers route"),
        Ok(None) => info!(start, goal, "No fewest-transfers route"),
        Err(e) => warn!(error = %e, "Fewest-transfers search failed"),
    }
    match planner.fastest(start, goal) {
        Ok(Some(route)) => {
            let total_time = route.total_time(network).unwrap_or_default();
            info!(%route, total_time, "Fastest route");
        }
        Ok(None) => info!(start, goal, "No fastest route"),
        Err(e) => warn!(error = %e, "Fastest-route search failed"),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env().expect("Invalid configuration");
    let network = config.load_network().expect("Failed to load network");
    info!(
        stations = network.station_count(),
        connections = network.connection_count(),
        "Network ready"
    );

    log_sample_routes(&network, &config.search);

    let planner = CachedPlanner::new(network, config.search.clone(), &config.cache);
    let state = AppState::new(planner);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .expect("Failed to bind listener");
    info!(addr = %config.addr, "Metro route planner listening");
    info!("  GET /health");
    info!("  GET /network");
    info!("  GET /route/fewest-transfers?from=A&to=D");
    info!("  GET /route/fastest?from=A&to=D");
    info!("  GET /route/plan?from=A&to=D");

    axum::serve(listener, app).await.expect("Server error");
}
