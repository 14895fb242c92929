use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::{
    error::{AppError, AppResult},
    services::template::TemplateService,
    AppState,
};

pub fn create_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/templates", web::post().to(save_template))
        .route("/templates", web::get().to(list_templates))
        .route("/templates/{id}", web::get().to(get_template))
        .route("/templates/{id}", web::delete().to(delete_template));
}

/// POST /templates - Archive a template document
async fn save_template(
    state: web::Data<AppState>,
    body: web::Json<serde_json::Value>,
) -> AppResult<HttpResponse> {
    let service = TemplateService::new(&state.config.templates_dir);
    let template_id = service.save(&body).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "templateId": template_id,
        "message": "Template saved successfully"
    })))
}

/// GET /templates - All archived templates, newest first
async fn list_templates(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let service = TemplateService::new(&state.config.templates_dir);
    let templates = service.list().await?;

    Ok(HttpResponse::Ok().json(templates))
}

/// GET /templates/{id} - One archived template
async fn get_template(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let template_id = path.into_inner();

    let service = TemplateService::new(&state.config.templates_dir);
    let template = service
        .get(&template_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Template not found".to_string()))?;

    Ok(HttpResponse::Ok().json(template))
}

/// DELETE /templates/{id} - Remove an archived template
async fn delete_template(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let template_id = path.into_inner();

    let service = TemplateService::new(&state.config.templates_dir);
    if !service.delete(&template_id).await? {
        return Err(AppError::NotFound("Template not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Template deleted successfully"
    })))
}
