//! Default payloads for auto-created configurations.
//!
//! Pure and deterministic: given a canonical name and a template type this
//! produces the insert form for the row created on first access. Unknown
//! template types get the baseline with no type-specific content.

use serde_json::json;
use std::str::FromStr;

use crate::isolation::HOMEPAGE_CONFIG_NAME;
use crate::models::website_config::{TemplateType, WebsiteConfigForm};

/// Insert form for the auto-created homepage row. Seeded nearly empty so
/// the store's column defaults apply: English, product palette, chrome
/// toggles on. Demo placeholders never belong on the homepage.
pub fn homepage_defaults() -> WebsiteConfigForm {
    WebsiteConfigForm {
        name: HOMEPAGE_CONFIG_NAME.to_string(),
        template_type: Some("homepage".to_string()),
        ..Default::default()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

pub fn demo_defaults(name: &str, template_type: &str) -> WebsiteConfigForm {
    let mut form = WebsiteConfigForm {
        name: name.to_string(),
        template_type: Some(template_type.to_string()),
        business_name: Some(format!("{} Demo", capitalize(template_type))),
        phone: Some("+52 983 123 4567".to_string()),
        email: Some(format!("demo@{template_type}.com")),
        primary_color: Some("#C8102E".to_string()),
        secondary_color: Some("#00A859".to_string()),
        background_color: Some("#FFFFFF".to_string()),
        default_language: Some("es".to_string()),
        hero_image: Some(format!(
            "https://via.placeholder.com/800x400/C8102E/FFFFFF?text={template_type}+Demo"
        )),
        profile_image: None,
        show_why_website_button: Some(false),
        show_domain_button: Some(false),
        show_chatbot: Some(false),
        ..Default::default()
    };

    match TemplateType::from_str(template_type) {
        Ok(TemplateType::Professionals) => {
            form.doctor_name = Some("Dr. Demo Professional".to_string());
            form.specialty = Some(json!({
                "es": "Especialista Demo",
                "en": "Demo Specialist"
            }));
            form.services = Some(json!([
                {
                    "title": { "es": "Servicio Demo", "en": "Demo Service" },
                    "description": {
                        "es": "Descripción del servicio demo",
                        "en": "Demo service description"
                    },
                    "icon": "star"
                }
            ]));
        }
        Ok(TemplateType::Restaurants) => {
            form.menu_pages = Some(json!([
                {
                    "url": "https://via.placeholder.com/400x300/C8102E/FFFFFF?text=Menu+Demo",
                    "title": { "es": "Menú Demo", "en": "Demo Menu" }
                }
            ]));
        }
        Ok(TemplateType::Tourism) => {
            form.tours = Some(json!([
                {
                    "title": { "es": "Tour Demo", "en": "Demo Tour" },
                    "description": {
                        "es": "Descripción del tour demo",
                        "en": "Demo tour description"
                    },
                    "price": "$999 MXN"
                }
            ]));
        }
        Ok(TemplateType::Retail) => {
            form.products = Some(json!([
                {
                    "title": { "es": "Producto Demo", "en": "Demo Product" },
                    "description": {
                        "es": "Descripción del producto demo",
                        "en": "Demo product description"
                    },
                    "price": "$99 MXN"
                }
            ]));
        }
        Ok(TemplateType::Services) => {
            form.service_areas = Some(json!([
                {
                    "title": { "es": "Área de Servicio Demo", "en": "Demo Service Area" },
                    "description": {
                        "es": "Descripción del área de servicio demo",
                        "en": "Demo service area description"
                    }
                }
            ]));
        }
        // Homepage rows get the plain baseline, as does any unknown type.
        Ok(TemplateType::Homepage) | Err(()) => {}
    }

    form
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn professionals_demo_has_services_with_icons() {
        let form = demo_defaults("professionals-demo Configuration", "professionals");
        assert_eq!(form.template_type.as_deref(), Some("professionals"));
        assert_eq!(form.doctor_name.as_deref(), Some("Dr. Demo Professional"));

        let services = form.services.unwrap();
        let services = services.as_array().unwrap();
        assert!(!services.is_empty());
        let icon = services[0]["icon"].as_str().unwrap();
        assert!(!icon.is_empty());
    }

    #[test]
    fn each_known_type_gets_its_section_array() {
        let restaurants = demo_defaults("restaurants-demo Configuration", "restaurants");
        assert!(restaurants.menu_pages.is_some());
        assert!(restaurants.tours.is_none());

        let tourism = demo_defaults("tourism-demo Configuration", "tourism");
        assert!(tourism.tours.is_some());

        let retail = demo_defaults("retail-demo Configuration", "retail");
        assert!(retail.products.is_some());

        let services = demo_defaults("services-demo Configuration", "services");
        assert!(services.service_areas.is_some());
    }

    #[test]
    fn unknown_type_falls_back_to_baseline() {
        let form = demo_defaults("bakery-demo Configuration", "bakery");
        assert_eq!(form.name, "bakery-demo Configuration");
        assert_eq!(form.business_name.as_deref(), Some("Bakery Demo"));
        assert_eq!(form.email.as_deref(), Some("demo@bakery.com"));
        assert!(form.services.is_none());
        assert!(form.menu_pages.is_none());
        assert!(form.tours.is_none());
        assert!(form.products.is_none());
        assert!(form.service_areas.is_none());
    }

    #[test]
    fn baseline_disables_homepage_only_chrome() {
        let form = demo_defaults("tourism-demo Configuration", "tourism");
        assert_eq!(form.show_why_website_button, Some(false));
        assert_eq!(form.show_domain_button, Some(false));
        assert_eq!(form.show_chatbot, Some(false));
        assert_eq!(form.default_language.as_deref(), Some("es"));
        assert_eq!(form.primary_color.as_deref(), Some("#C8102E"));
    }

    #[test]
    fn homepage_defaults_leave_columns_to_the_store() {
        let form = homepage_defaults();
        assert_eq!(form.name, HOMEPAGE_CONFIG_NAME);
        assert_eq!(form.template_type.as_deref(), Some("homepage"));

        // No demo branding on the homepage row: the store's column defaults
        // supply English, the green/red palette and the chrome toggles.
        assert!(form.business_name.is_none());
        assert!(form.phone.is_none());
        assert!(form.email.is_none());
        assert!(form.hero_image.is_none());
        assert!(form.default_language.is_none());
        assert!(form.primary_color.is_none());
        assert!(form.secondary_color.is_none());
        assert!(form.show_why_website_button.is_none());
        assert!(form.show_domain_button.is_none());
        assert!(form.show_chatbot.is_none());
    }

    #[test]
    fn demo_defaults_are_deterministic() {
        let a = demo_defaults("retail-demo Configuration", "retail");
        let b = demo_defaults("retail-demo Configuration", "retail");
        assert_eq!(a.products, b.products);
        assert_eq!(a.business_name, b.business_name);
    }
}
