use std::sync::Arc;

use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use tracing::info;

use resume_sections::bootstrap;
use resume_sections::config::{self, AppConfig};
use resume_sections::modules::section::domain::SectionKind;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::load_env_files();
    bootstrap::init_tracing();

    info!("Starting resume sections...");

    let config = AppConfig::from_env().context("invalid configuration")?;

    let conn = bootstrap::connect(&config)
        .await
        .context("failed to connect to database")?;
    let db = Arc::new(conn);

    if config.run_migrations {
        Migrator::up(&*db, None)
            .await
            .context("failed to run migrations")?;
        info!("Migrations applied");
    }

    // Transport adapters mount on these; none ship with this binary yet.
    let _services = bootstrap::build_section_services(Arc::clone(&db), config.pagination);

    for descriptor in SectionKind::descriptors() {
        info!(
            section = descriptor.slug,
            table = descriptor.table,
            ordering = ?descriptor.ordering,
            "Section registered"
        );
    }

    Ok(())
}
