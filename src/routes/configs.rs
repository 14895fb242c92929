use actix_web::{http::header, web, HttpRequest, HttpResponse};
use serde::Serialize;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    isolation::filter_client_configs,
    models::website_config::{WebsiteConfigForm, WebsiteConfigUpdateForm},
    services::{resolution::ResolutionService, website_config::WebsiteConfigService},
    AppState,
};

/// Header asserting the request comes from the trusted homepage editor
/// rather than a generic template surface.
const HOMEPAGE_EDITOR_HEADER: &str = "X-Homepage-Editor";

pub fn create_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/config", web::get().to(get_default_config))
        .route("/config", web::post().to(create_config))
        .route("/config/{id}", web::get().to(get_config))
        .route("/config/{id}", web::put().to(update_config))
        .route("/config/{id}", web::delete().to(delete_config))
        .route("/configs", web::get().to(list_client_configs));
}

/// Config reads trade latency for freshness: editors must never see a stale
/// copy of what they just saved.
fn json_no_cache<T: Serialize>(body: &T) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"))
        .insert_header((header::PRAGMA, "no-cache"))
        .json(body)
}

fn is_homepage_editor(req: &HttpRequest) -> bool {
    req.headers()
        .get(HOMEPAGE_EDITOR_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// GET /config - Homepage configuration, created on first access
async fn get_default_config(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let resolution = ResolutionService::new(&state.db);
    let config = resolution.resolve_read("homepage").await?;

    Ok(json_no_cache(&config))
}

/// GET /config/{id} - Resolve an identifier (homepage, demo slug, client ID)
async fn get_config(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let identifier = path.into_inner();

    let resolution = ResolutionService::new(&state.db);
    let config = resolution.resolve_read(&identifier).await?;

    Ok(json_no_cache(&config))
}

/// POST /config - Create a new configuration from a full body
async fn create_config(
    state: web::Data<AppState>,
    form_data: web::Json<WebsiteConfigForm>,
) -> AppResult<HttpResponse> {
    form_data.validate()?;

    let store = WebsiteConfigService::new(&state.db);
    let config = store.create(&form_data).await?;

    Ok(HttpResponse::Created().json(config))
}

/// PUT /config/{id} - Partial update via the resolution rules
async fn update_config(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    form_data: web::Json<WebsiteConfigUpdateForm>,
) -> AppResult<HttpResponse> {
    let identifier = path.into_inner();
    form_data.validate()?;

    let resolution = ResolutionService::new(&state.db);
    let updated = resolution
        .resolve_write(&identifier, is_homepage_editor(&req), &form_data)
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /config/{id} - Numeric IDs only. Deletes by primary key without
/// consulting the classifier, so even the homepage row can be removed here.
async fn delete_config(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let identifier = path.into_inner();
    let id = identifier
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest("Invalid ID format".to_string()))?;

    let store = WebsiteConfigService::new(&state.db);
    if !store.delete(id).await? {
        return Err(AppError::NotFound("Configuration not found".to_string()));
    }

    Ok(HttpResponse::NoContent().finish())
}

/// GET /configs - All rows minus protected and demo entries
async fn list_client_configs(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let store = WebsiteConfigService::new(&state.db);
    let configs = store.get_all().await?;

    Ok(HttpResponse::Ok().json(filter_client_configs(configs)))
}
