use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::{
    client_urls::{generate_client_url, parse_client_url},
    error::{AppError, AppResult},
    services::website_config::WebsiteConfigService,
    AppState,
};

pub fn create_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/client-url/{client_id}", web::get().to(get_client_url))
        .route(
            "/validate-client-url/{url_slug}",
            web::get().to(validate_client_url),
        );
}

/// GET /client-url/{client_id} - Canonical public URL for a client
async fn get_client_url(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let client_id = path
        .into_inner()
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest("Invalid client ID".to_string()))?;

    let store = WebsiteConfigService::new(&state.db);
    let config = store
        .get_by_id(client_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Client not found".to_string()))?;

    let client_url = generate_client_url(&config.name, client_id);

    Ok(HttpResponse::Ok().json(json!({
        "clientId": client_id,
        "businessName": config.name,
        "clientUrl": client_url,
        "fullUrl": format!("/{client_url}"),
        "templateType": config.template_type,
    })))
}

/// GET /validate-client-url/{url_slug} - Check a visited URL against the
/// canonical one for its embedded client ID. Mismatches and unknown
/// clients report `valid: false` with 200, not an error status.
async fn validate_client_url(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let url_slug = path.into_inner();

    let parsed = parse_client_url(&url_slug);
    let Some(client_id) = parsed.client_id else {
        return Ok(HttpResponse::Ok().json(json!({
            "valid": false,
            "error": "Invalid URL format",
        })));
    };

    let store = WebsiteConfigService::new(&state.db);
    let Some(config) = store.get_by_id(client_id).await? else {
        return Ok(HttpResponse::Ok().json(json!({
            "valid": false,
            "error": "Client not found",
        })));
    };

    let expected_url = generate_client_url(&config.name, client_id);

    Ok(HttpResponse::Ok().json(json!({
        "valid": url_slug == expected_url,
        "clientId": client_id,
        "businessName": config.name,
        "expectedUrl": expected_url,
        "actualUrl": url_slug,
        "templateType": config.template_type,
    })))
}
