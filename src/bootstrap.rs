// src/bootstrap.rs
//
// Composition root shared by the binary and any transport mounted on top.

use std::sync::Arc;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::modules::resume::adapter::outgoing::ResumeOwnershipPostgres;
use crate::modules::resume::application::OwnershipGuard;
use crate::modules::sections::SectionServices;
use crate::shared::pagination::PaginationConfig;

#[cfg(not(tarpaulin_include))]
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(not(tarpaulin_include))]
pub async fn connect(config: &AppConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.pool.max_connections)
        .min_connections(config.pool.min_connections)
        .connect_timeout(config.pool.connect_timeout)
        .acquire_timeout(config.pool.connect_timeout)
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    Database::connect(opt).await
}

pub fn build_section_services(
    db: Arc<DatabaseConnection>,
    pagination: PaginationConfig,
) -> SectionServices {
    let ownership = ResumeOwnershipPostgres::new(Arc::clone(&db));
    let guard = OwnershipGuard::new(Arc::new(ownership));

    SectionServices::new(db, guard, pagination)
}
