use sea_orm::{DatabaseConnection, DbErr};
use tracing::debug;

/// Check PostgreSQL database health.
///
/// Pings the connection pool; suitable for readiness probes.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DbErr> {
    debug!("Running PostgreSQL health check");
    db.ping().await?;
    debug!("PostgreSQL health check passed");
    Ok(())
}
