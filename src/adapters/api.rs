use actix_web::{HttpResponse, Responder, delete, error, get, post, put, web};
use serde::Deserialize;

use crate::app::services::{
    AlertCommandHandler, AlertQueryHandler, BudgetHandler, DashboardQueryHandler,
    InMemoryAlertService, InMemoryBudgetService, ServiceError, StaticDashboardService,
};
use crate::domain::alert::{AlertFilter, AlertId};
use crate::domain::budget::BudgetSettings;
use crate::domain::usage::Timeframe;

#[derive(Clone)]
pub struct ApiState {
    pub alerts: InMemoryAlertService,
    pub budget: InMemoryBudgetService,
    pub dashboard: StaticDashboardService,
}

#[derive(Debug, Deserialize)]
pub struct AlertListQuery {
    pub filter: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeviceUsageQuery {
    pub timeframe: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BudgetAmount {
    pub kwh: f64,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        let response = bad_request(err.to_string());
        error::InternalError::from_response(err, response).into()
    }));

    // `/alerts/summary` must be registered before `/alerts/{id}`.
    cfg.service(health)
        .service(list_alerts_endpoint)
        .service(alert_summary_endpoint)
        .service(get_alert_endpoint)
        .service(mark_all_read_endpoint)
        .service(mark_read_endpoint)
        .service(dismiss_endpoint)
        .service(get_budget_endpoint)
        .service(put_budget_endpoint)
        .service(put_daily_budget_endpoint)
        .service(put_monthly_budget_endpoint)
        .service(budget_usage_endpoint)
        .service(usage_stats_endpoint)
        .service(usage_overview_endpoint)
        .service(device_usage_endpoint)
        .service(recent_activity_endpoint);
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

#[get("/alerts")]
async fn list_alerts_endpoint(
    state: web::Data<ApiState>,
    query: web::Query<AlertListQuery>,
) -> impl Responder {
    let filter = match query.filter.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => match raw.parse::<AlertFilter>() {
            Ok(filter) => filter,
            Err(error) => return bad_request(error.to_string()),
        },
        _ => AlertFilter::All,
    };

    match state.alerts.list_alerts(filter) {
        Ok(alerts) => HttpResponse::Ok().json(alerts),
        Err(error) => service_error_response(error),
    }
}

#[get("/alerts/summary")]
async fn alert_summary_endpoint(state: web::Data<ApiState>) -> impl Responder {
    match state.alerts.alert_summary() {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(error) => service_error_response(error),
    }
}

#[get("/alerts/{id}")]
async fn get_alert_endpoint(state: web::Data<ApiState>, path: web::Path<String>) -> impl Responder {
    let id = AlertId::new(path.into_inner());
    match state.alerts.get_alert(&id) {
        Ok(Some(alert)) => HttpResponse::Ok().json(alert),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("alert {id} not found")
        })),
        Err(error) => service_error_response(error),
    }
}

#[post("/alerts/read-all")]
async fn mark_all_read_endpoint(state: web::Data<ApiState>) -> impl Responder {
    match state.alerts.mark_all_read() {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => service_error_response(error),
    }
}

#[post("/alerts/{id}/read")]
async fn mark_read_endpoint(
    state: web::Data<ApiState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = AlertId::new(path.into_inner());
    match state.alerts.mark_read(&id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => service_error_response(error),
    }
}

#[delete("/alerts/{id}")]
async fn dismiss_endpoint(state: web::Data<ApiState>, path: web::Path<String>) -> impl Responder {
    let id = AlertId::new(path.into_inner());
    match state.alerts.dismiss(&id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => service_error_response(error),
    }
}

#[get("/budget")]
async fn get_budget_endpoint(state: web::Data<ApiState>) -> impl Responder {
    match state.budget.budget_settings() {
        Ok(settings) => HttpResponse::Ok().json(settings),
        Err(error) => service_error_response(error),
    }
}

#[put("/budget")]
async fn put_budget_endpoint(
    state: web::Data<ApiState>,
    body: web::Json<BudgetSettings>,
) -> impl Responder {
    match state.budget.update_budget_settings(body.into_inner()) {
        Ok(stored) => HttpResponse::Ok().json(stored),
        Err(error) => service_error_response(error),
    }
}

#[put("/budget/daily")]
async fn put_daily_budget_endpoint(
    state: web::Data<ApiState>,
    body: web::Json<BudgetAmount>,
) -> impl Responder {
    match state.budget.set_daily_budget(body.kwh) {
        Ok(stored) => HttpResponse::Ok().json(stored),
        Err(error) => service_error_response(error),
    }
}

#[put("/budget/monthly")]
async fn put_monthly_budget_endpoint(
    state: web::Data<ApiState>,
    body: web::Json<BudgetAmount>,
) -> impl Responder {
    match state.budget.set_monthly_budget(body.kwh) {
        Ok(stored) => HttpResponse::Ok().json(stored),
        Err(error) => service_error_response(error),
    }
}

#[get("/budget/usage")]
async fn budget_usage_endpoint(state: web::Data<ApiState>) -> impl Responder {
    match state.budget.evaluate_usage() {
        Ok(days) => HttpResponse::Ok().json(days),
        Err(error) => service_error_response(error),
    }
}

#[get("/usage/stats")]
async fn usage_stats_endpoint(state: web::Data<ApiState>) -> impl Responder {
    HttpResponse::Ok().json(state.dashboard.usage_stats())
}

#[get("/usage/overview")]
async fn usage_overview_endpoint(state: web::Data<ApiState>) -> impl Responder {
    HttpResponse::Ok().json(state.dashboard.usage_overview())
}

#[get("/usage/devices")]
async fn device_usage_endpoint(
    state: web::Data<ApiState>,
    query: web::Query<DeviceUsageQuery>,
) -> impl Responder {
    let timeframe = match query.timeframe.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => match raw.parse::<Timeframe>() {
            Ok(timeframe) => timeframe,
            Err(error) => return bad_request(error.to_string()),
        },
        _ => Timeframe::default(),
    };

    HttpResponse::Ok().json(state.dashboard.device_usage(timeframe))
}

#[get("/activity")]
async fn recent_activity_endpoint(state: web::Data<ApiState>) -> impl Responder {
    HttpResponse::Ok().json(state.dashboard.recent_activity())
}

fn bad_request(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": message }))
}

fn service_error_response(error: ServiceError) -> HttpResponse {
    match error {
        ServiceError::LockPoisoned => {
            tracing::error!("state lock poisoned while serving request");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "state lock poisoned"
            }))
        }
        ServiceError::Budget(error) => {
            tracing::warn!(error = %error, "rejected budget settings");
            bad_request(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{App, body::to_bytes, http::StatusCode, test, web};
    use chrono::{TimeZone, Utc};

    use crate::app::services::{
        DashboardData, InMemoryAlertService, InMemoryBudgetService, StaticDashboardService,
    };
    use crate::domain::alert::{AlertCategory, AlertRecord};
    use crate::domain::alert_store::AlertStore;
    use crate::domain::budget::BudgetSettings;
    use crate::domain::demo_data::{demo_alerts, demo_usage};

    use super::{ApiState, configure_routes};

    fn build_state(seed: Vec<AlertRecord>) -> ApiState {
        ApiState {
            alerts: InMemoryAlertService::new(AlertStore::new(seed).expect("seed should be valid")),
            budget: InMemoryBudgetService::new(BudgetSettings::default(), demo_usage()),
            dashboard: StaticDashboardService::new(DashboardData::demo(Utc::now())),
        }
    }

    fn scenario_seed() -> Vec<AlertRecord> {
        let at = Utc.with_ymd_and_hms(2026, 2, 20, 10, 0, 0).unwrap();
        vec![
            AlertRecord::new(
                "1",
                AlertCategory::Warning,
                "High Energy Usage",
                "Your HVAC system is consuming more energy than usual.",
                "HVAC",
                at,
            ),
            AlertRecord::new(
                "2",
                AlertCategory::Info,
                "Device Maintenance",
                "Your HVAC filter needs to be replaced soon.",
                "HVAC",
                at,
            )
            .read(),
        ]
    }

    async fn body_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = to_bytes(resp.into_body())
            .await
            .expect("body should be readable");
        serde_json::from_slice(&body).expect("body should be json")
    }

    fn ids(json: &serde_json::Value) -> Vec<String> {
        json.as_array()
            .expect("response should be an array")
            .iter()
            .map(|item| item["id"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    #[actix_web::test]
    async fn health_endpoint_returns_ok() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(build_state(Vec::new())))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn empty_store_lists_empty_array() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(build_state(Vec::new())))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/alerts?filter=unread")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(resp).await;
        assert_eq!(json, serde_json::json!([]));
    }

    #[actix_web::test]
    async fn rejects_unknown_filter() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(build_state(scenario_seed())))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/alerts?filter=critical")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = body_json(resp).await;
        assert_eq!(json["error"], "unknown alert filter: critical");
    }

    #[actix_web::test]
    async fn read_and_dismiss_lifecycle() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(build_state(scenario_seed())))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/alerts?filter=unread")
            .to_request();
        let json = body_json(test::call_service(&app, req).await).await;
        assert_eq!(ids(&json), vec!["1"]);

        let req = test::TestRequest::post().uri("/alerts/1/read").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get()
            .uri("/alerts?filter=unread")
            .to_request();
        let json = body_json(test::call_service(&app, req).await).await;
        assert!(ids(&json).is_empty());

        let req = test::TestRequest::delete().uri("/alerts/2").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get().uri("/alerts").to_request();
        let json = body_json(test::call_service(&app, req).await).await;
        assert_eq!(ids(&json), vec!["1"]);
        assert_eq!(json[0]["isRead"], true);

        let req = test::TestRequest::delete().uri("/alerts/1").to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/alerts?filter=all").to_request();
        let json = body_json(test::call_service(&app, req).await).await;
        assert!(ids(&json).is_empty());
    }

    #[actix_web::test]
    async fn unknown_ids_are_no_ops() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(build_state(scenario_seed())))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/alerts/missing/read")
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NO_CONTENT
        );

        let req = test::TestRequest::delete()
            .uri("/alerts/missing")
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NO_CONTENT
        );

        let req = test::TestRequest::get().uri("/alerts").to_request();
        let json = body_json(test::call_service(&app, req).await).await;
        assert_eq!(ids(&json), vec!["1", "2"]);
    }

    #[actix_web::test]
    async fn read_all_updates_summary() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(build_state(demo_alerts(Utc::now()))))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/alerts/summary").to_request();
        let json = body_json(test::call_service(&app, req).await).await;
        assert_eq!(json["total"], 5);
        assert_eq!(json["unread"], 2);
        assert_eq!(json["warning"], 2);

        let req = test::TestRequest::post()
            .uri("/alerts/read-all")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get().uri("/alerts/summary").to_request();
        let json = body_json(test::call_service(&app, req).await).await;
        assert_eq!(json["unread"], 0);
        assert_eq!(json["total"], 5);
    }

    #[actix_web::test]
    async fn category_filter_returns_seed_order() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(build_state(demo_alerts(Utc::now()))))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/alerts?filter=info")
            .to_request();
        let json = body_json(test::call_service(&app, req).await).await;
        assert_eq!(ids(&json), vec!["3", "5"]);
        assert_eq!(json[0]["sourceDevice"], "Refrigerator");
    }

    #[actix_web::test]
    async fn budget_round_trip_and_validation() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(build_state(Vec::new())))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/budget").to_request();
        let json = body_json(test::call_service(&app, req).await).await;
        assert_eq!(json["dailyBudgetKwh"], 8.0);
        assert_eq!(json["alertThresholdPercent"], 80);

        let req = test::TestRequest::put()
            .uri("/budget")
            .set_json(serde_json::json!({
                "dailyBudgetKwh": 10.0,
                "monthlyBudgetKwh": 300.0,
                "alertThresholdPercent": 90,
                "emailAlerts": true,
                "pushNotifications": false
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::put()
            .uri("/budget")
            .set_json(serde_json::json!({
                "dailyBudgetKwh": 10.0,
                "monthlyBudgetKwh": 300.0,
                "alertThresholdPercent": 40,
                "emailAlerts": true,
                "pushNotifications": false
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = body_json(resp).await;
        assert_eq!(
            json["error"],
            "alert threshold must be between 50 and 100 percent, got 40"
        );

        let req = test::TestRequest::get().uri("/budget").to_request();
        let json = body_json(test::call_service(&app, req).await).await;
        assert_eq!(json["alertThresholdPercent"], 90);
        assert_eq!(json["emailAlerts"], true);
    }

    #[actix_web::test]
    async fn budget_usage_reports_statuses() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(build_state(Vec::new())))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/budget/usage").to_request();
        let json = body_json(test::call_service(&app, req).await).await;
        let days = json.as_array().expect("response should be an array");

        assert_eq!(days.len(), 15);
        assert_eq!(days[0]["status"], "underThreshold");
        assert_eq!(days[1]["status"], "thresholdReached");
        assert_eq!(days[4]["status"], "overBudget");
    }

    #[actix_web::test]
    async fn blank_filter_lists_all_alerts() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(build_state(scenario_seed())))
                .configure(configure_routes),
        )
        .await;

        for uri in ["/alerts?filter=", "/alerts?filter=%20"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);

            let json = body_json(resp).await;
            assert_eq!(ids(&json), vec!["1", "2"]);
        }
    }

    #[actix_web::test]
    async fn get_alert_returns_record_or_404() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(build_state(scenario_seed())))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/alerts/2").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["title"], "Device Maintenance");
        assert_eq!(json["isRead"], true);

        let req = test::TestRequest::delete().uri("/alerts/2").to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/alerts/2").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let json = body_json(resp).await;
        assert_eq!(json["error"], "alert 2 not found");

        let req = test::TestRequest::get().uri("/alerts/summary").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn full_budget_update_links_monthly_to_daily() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(build_state(Vec::new())))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/budget")
            .set_json(serde_json::json!({
                "dailyBudgetKwh": 10.0,
                "monthlyBudgetKwh": 100.0,
                "alertThresholdPercent": 80,
                "emailAlerts": false,
                "pushNotifications": true
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["monthlyBudgetKwh"], 300.0);

        let req = test::TestRequest::get().uri("/budget").to_request();
        let json = body_json(test::call_service(&app, req).await).await;
        assert_eq!(json["dailyBudgetKwh"], 10.0);
        assert_eq!(json["monthlyBudgetKwh"], 300.0);
    }

    #[actix_web::test]
    async fn daily_and_monthly_endpoints_rescale_each_other() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(build_state(Vec::new())))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/budget/daily")
            .set_json(serde_json::json!({ "kwh": 12.0 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/budget").to_request();
        let json = body_json(test::call_service(&app, req).await).await;
        assert_eq!(json["dailyBudgetKwh"], 12.0);
        assert_eq!(json["monthlyBudgetKwh"], 360.0);

        let req = test::TestRequest::put()
            .uri("/budget/monthly")
            .set_json(serde_json::json!({ "kwh": 90.0 }))
            .to_request();
        let json = body_json(test::call_service(&app, req).await).await;
        assert_eq!(json["dailyBudgetKwh"], 3.0);
        assert_eq!(json["monthlyBudgetKwh"], 90.0);

        let req = test::TestRequest::put()
            .uri("/budget/daily")
            .set_json(serde_json::json!({ "kwh": 0.5 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = body_json(resp).await;
        assert_eq!(json["error"], "daily budget must be at least 1 kWh");
    }

    #[actix_web::test]
    async fn malformed_json_body_returns_error_object() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(build_state(Vec::new())))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/budget")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = body_json(resp).await;
        assert!(json["error"].is_string());

        let req = test::TestRequest::put()
            .uri("/budget/daily")
            .set_json(serde_json::json!({ "amount": 3 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = body_json(resp).await;
        assert!(
            json["error"]
                .as_str()
                .unwrap_or_default()
                .contains("kwh")
        );
    }

    #[actix_web::test]
    async fn usage_stats_and_overview_are_served() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(build_state(Vec::new())))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/usage/stats").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["totalUsageKwh"], 45.2);
        assert_eq!(json["currentPowerKw"], 2.4);
        assert_eq!(json["monthlyCostUsd"], 128.5);
        assert_eq!(json["carbonFootprintKg"], 24.5);

        let req = test::TestRequest::get().uri("/usage/overview").to_request();
        let json = body_json(test::call_service(&app, req).await).await;
        let days = json.as_array().expect("response should be an array");
        assert_eq!(days.len(), 7);
        assert_eq!(days[0]["day"], "Mon");
        assert_eq!(days[0]["usageKwh"], 6.2);
        assert_eq!(days[0]["averageKwh"], 5.8);
    }

    #[actix_web::test]
    async fn device_usage_honours_timeframe() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(build_state(Vec::new())))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/usage/devices").to_request();
        let json = body_json(test::call_service(&app, req).await).await;
        assert_eq!(json["timeframe"], "week");
        assert_eq!(json["devices"][0]["device"], "HVAC");
        assert_eq!(json["devices"][0]["usageKwh"], 12.5);
        assert_eq!(
            json["devices"].as_array().map(Vec::len),
            Some(8)
        );

        let req = test::TestRequest::get()
            .uri("/usage/devices?timeframe=month")
            .to_request();
        let json = body_json(test::call_service(&app, req).await).await;
        assert_eq!(json["timeframe"], "month");
        let hvac = json["devices"][0]["usageKwh"].as_f64().unwrap_or_default();
        assert!((hvac - 12.5 * 30.0 / 7.0).abs() < 1e-9);

        let req = test::TestRequest::get()
            .uri("/usage/devices?timeframe=decade")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = body_json(resp).await;
        assert_eq!(json["error"], "unknown timeframe: decade");
    }

    #[actix_web::test]
    async fn recent_activity_is_newest_first() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(build_state(Vec::new())))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/activity").to_request();
        let json = body_json(test::call_service(&app, req).await).await;
        let events = json.as_array().expect("response should be an array");

        assert_eq!(events.len(), 5);
        assert_eq!(events[0]["device"], "HVAC");
        assert_eq!(events[0]["kind"], "alert");
        assert_eq!(events[0]["direction"], "up");
        assert_eq!(events[4]["device"], "Solar Panels");
        assert_eq!(events[4]["direction"], "down");
        assert_eq!(events[4]["changeKw"], -4.5);
    }
}
