pub mod config;
mod error;
mod logging;
pub mod runtime;
pub mod services;

pub use error::AppError;

pub fn run() -> Result<(), AppError> {
    logging::init()?;

    let config = config::AppConfig::from_env()?;

    tracing::info!(
        http_bind = %config.http_bind,
        http_workers = config.http_workers,
        alert_seed_path = config.alert_seed_path.as_deref().unwrap_or("<demo>"),
        cors_allowed_origin = config.cors_allowed_origin.as_deref().unwrap_or("*"),
        "application bootstrap initialized"
    );

    runtime::run(config)
}
