use axum::{
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::routes::{list_decks, list_scores, load_deck, save_deck, save_score, AppState};
use flashquiz_core::DeckService;

pub fn router(service: DeckService) -> Router {
    let state = Arc::new(AppState { service });

    Router::new()
        .route("/api/save", post(save_deck))
        .route("/api/load", get(load_deck))
        .route("/api/list", get(list_decks))
        .route("/api/saveScores", post(save_score))
        .route("/api/listScores", get(list_scores))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(service: DeckService, addr: SocketAddr) -> anyhow::Result<()> {
    let app = router(service);

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "deck server listening");
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("deck server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("received Ctrl+C, shutting down"),
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
