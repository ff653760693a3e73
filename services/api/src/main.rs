use std::sync::Arc;

use sea_orm::Database;
use tracing::info;

use liftdesk_api::config::Config;
use liftdesk_api::infra::gateway::HttpPaymentGateway;
use liftdesk_api::infra::sms::SmsClient;
use liftdesk_api::infra::storage::FsImageStore;
use liftdesk_api::router::build_router;
use liftdesk_api::scheduler::run_expiry_scheduler;
use liftdesk_api::state::AppState;
use liftdesk_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = Arc::new(Config::from_env());

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let images = FsImageStore::new(config.upload_dir.clone());
    images
        .prepare()
        .await
        .expect("failed to create upload directory");

    let state = AppState {
        db,
        config: config.clone(),
        sms: SmsClient::from_config(config.sms.as_ref()),
        gateway: config.gateway.as_ref().map(HttpPaymentGateway::new),
        images,
    };

    // Daily expiry-reminder sweep
    tokio::spawn(run_expiry_scheduler(state.clone()));

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("api service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
