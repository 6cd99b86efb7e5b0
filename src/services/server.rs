use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::settings::AppConfig;
use crate::services::backup::BackupService;
use crate::services::calendar::CalendarService;
use crate::services::store::MatchStore;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let store = MatchStore::open(&self.config.storage.database_path)?;

        self.spawn_background_jobs(&store)?;

        let state = Arc::new(AppState::new(store, self.config.clone())?);
        let app = create_router(state)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Auto-backup and reminder checks live as long as the server
    fn spawn_background_jobs(&self, store: &MatchStore) -> Result<()> {
        let backups = BackupService::new(store.clone(), &self.config)?;
        tokio::spawn(backups.run_auto_backup());

        let calendar = CalendarService::new(store.clone(), self.config.calendar.clone());
        tokio::spawn(calendar.run_reminders());

        Ok(())
    }
}
