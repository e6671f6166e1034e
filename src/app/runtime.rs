use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use chrono::Utc;

use crate::adapters::api::{ApiState, configure_routes};
use crate::adapters::seed_file::load_seed_file;
use crate::app::config::AppConfig;
use crate::app::error::AppError;
use crate::app::services::{
    DashboardData, InMemoryAlertService, InMemoryBudgetService, StaticDashboardService,
};
use crate::domain::alert::AlertRecord;
use crate::domain::alert_store::AlertStore;
use crate::domain::budget::BudgetSettings;
use crate::domain::demo_data::{demo_alerts, demo_usage};

pub fn load_seed(config: &AppConfig) -> Result<Vec<AlertRecord>, AppError> {
    match config.alert_seed_path.as_deref() {
        Some(path) => {
            let seed = load_seed_file(path).map_err(AppError::seed)?;
            tracing::info!(path, alerts = seed.len(), "alert seed loaded from file");
            Ok(seed)
        }
        None => {
            let seed = demo_alerts(Utc::now());
            tracing::info!(alerts = seed.len(), "using demo alert seed");
            Ok(seed)
        }
    }
}

pub fn build_state(seed: Vec<AlertRecord>) -> Result<ApiState, AppError> {
    let store = AlertStore::new(seed).map_err(AppError::seed)?;

    tracing::info!(
        alerts = store.len(),
        unread = store.unread_count(),
        "alert store initialized"
    );

    Ok(ApiState {
        alerts: InMemoryAlertService::new(store),
        budget: InMemoryBudgetService::new(BudgetSettings::default(), demo_usage()),
        dashboard: StaticDashboardService::new(DashboardData::demo(Utc::now())),
    })
}

fn cors_layer(allowed_origin: Option<&str>) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allow_any_header()
        .max_age(3600);

    match allowed_origin {
        Some(origin) => cors.allowed_origin(origin),
        None => cors.allow_any_origin(),
    }
}

pub fn run(config: AppConfig) -> Result<(), AppError> {
    let api_state = build_state(load_seed(&config)?)?;
    let cors_origin = config.cors_allowed_origin.clone();

    tracing::info!(bind = %config.http_bind, workers = config.http_workers, "http server starting");

    actix_web::rt::System::new()
        .block_on(async move {
            HttpServer::new(move || {
                App::new()
                    .wrap(cors_layer(cors_origin.as_deref()))
                    .app_data(web::Data::new(api_state.clone()))
                    .configure(configure_routes)
            })
            .workers(config.http_workers)
            .bind(&config.http_bind)?
            .run()
            .await
        })
        .map_err(AppError::runtime)
}
