pub mod client_urls;
pub mod configs;
pub mod templates;

use actix_web::web;

pub fn create_routes(cfg: &mut web::ServiceConfig) {
    client_urls::create_routes(cfg);
    configs::create_routes(cfg);
    templates::create_routes(cfg);
}
