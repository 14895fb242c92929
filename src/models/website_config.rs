use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::types::JsonValue;
use sqlx::FromRow;
use std::str::FromStr;
use validator::Validate;

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

/// Business-category templates a site can be generated from. Demo slugs and
/// stored rows carry the lowercase string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateType {
    Homepage,
    Professionals,
    Restaurants,
    Retail,
    Services,
    Tourism,
}

impl TemplateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateType::Homepage => "homepage",
            TemplateType::Professionals => "professionals",
            TemplateType::Restaurants => "restaurants",
            TemplateType::Retail => "retail",
            TemplateType::Services => "services",
            TemplateType::Tourism => "tourism",
        }
    }
}

impl FromStr for TemplateType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "homepage" => Ok(TemplateType::Homepage),
            "professionals" => Ok(TemplateType::Professionals),
            "restaurants" => Ok(TemplateType::Restaurants),
            "retail" => Ok(TemplateType::Retail),
            "services" => Ok(TemplateType::Services),
            "tourism" => Ok(TemplateType::Tourism),
            _ => Err(()),
        }
    }
}

/// One stored website configuration: the homepage, a shared demo site, or a
/// client site. Bilingual text and section arrays live in JSONB columns.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteConfig {
    pub id: i32,
    pub name: String,
    pub template_type: String,
    pub logo: Option<String>,
    pub hero_image: Option<String>,
    pub profile_image: Option<String>,
    pub default_language: String,
    pub show_why_website_button: bool,
    pub show_domain_button: bool,
    pub show_chatbot: bool,
    pub whatsapp_number: Option<String>,
    pub whatsapp_message: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub google_maps_embed: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub office_hours: Option<JsonValue>,
    pub analytics_code: Option<String>,
    pub primary_color: String,
    pub secondary_color: String,
    pub background_color: String,
    pub business_name: Option<String>,
    pub doctor_name: Option<String>,
    pub specialty: Option<JsonValue>,
    pub translations: Option<JsonValue>,
    pub services: Option<JsonValue>,
    pub reviews: Option<JsonValue>,
    pub photos: Option<JsonValue>,
    pub awards: Option<JsonValue>,
    pub products: Option<JsonValue>,
    pub tours: Option<JsonValue>,
    pub menu_pages: Option<JsonValue>,
    pub service_areas: Option<JsonValue>,
    pub chatbot_questions: Option<JsonValue>,
    pub client_approval: Option<JsonValue>,
}

/// Full create form for `POST /api/config`. Columns with store-side defaults
/// may be omitted.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteConfigForm {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub template_type: Option<String>,
    pub logo: Option<String>,
    pub hero_image: Option<String>,
    pub profile_image: Option<String>,
    pub default_language: Option<String>,
    pub show_why_website_button: Option<bool>,
    pub show_domain_button: Option<bool>,
    pub show_chatbot: Option<bool>,
    pub whatsapp_number: Option<String>,
    pub whatsapp_message: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub google_maps_embed: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    pub office_hours: Option<JsonValue>,
    pub analytics_code: Option<String>,
    #[validate(regex(path = *HEX_COLOR_RE, message = "must be a hex color"))]
    pub primary_color: Option<String>,
    #[validate(regex(path = *HEX_COLOR_RE, message = "must be a hex color"))]
    pub secondary_color: Option<String>,
    #[validate(regex(path = *HEX_COLOR_RE, message = "must be a hex color"))]
    pub background_color: Option<String>,
    pub business_name: Option<String>,
    pub doctor_name: Option<String>,
    pub specialty: Option<JsonValue>,
    pub translations: Option<JsonValue>,
    pub services: Option<JsonValue>,
    pub reviews: Option<JsonValue>,
    pub photos: Option<JsonValue>,
    pub awards: Option<JsonValue>,
    pub products: Option<JsonValue>,
    pub tours: Option<JsonValue>,
    pub menu_pages: Option<JsonValue>,
    pub service_areas: Option<JsonValue>,
    pub chatbot_questions: Option<JsonValue>,
    pub client_approval: Option<JsonValue>,
}

/// Partial update form for `PUT /api/config/{id}`. Only keys present in the
/// body are applied; a provided JSON column replaces that column wholesale.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteConfigUpdateForm {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub template_type: Option<String>,
    pub logo: Option<String>,
    pub hero_image: Option<String>,
    pub profile_image: Option<String>,
    pub default_language: Option<String>,
    pub show_why_website_button: Option<bool>,
    pub show_domain_button: Option<bool>,
    pub show_chatbot: Option<bool>,
    pub whatsapp_number: Option<String>,
    pub whatsapp_message: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub google_maps_embed: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    pub office_hours: Option<JsonValue>,
    pub analytics_code: Option<String>,
    #[validate(regex(path = *HEX_COLOR_RE, message = "must be a hex color"))]
    pub primary_color: Option<String>,
    #[validate(regex(path = *HEX_COLOR_RE, message = "must be a hex color"))]
    pub secondary_color: Option<String>,
    #[validate(regex(path = *HEX_COLOR_RE, message = "must be a hex color"))]
    pub background_color: Option<String>,
    pub business_name: Option<String>,
    pub doctor_name: Option<String>,
    pub specialty: Option<JsonValue>,
    pub translations: Option<JsonValue>,
    pub services: Option<JsonValue>,
    pub reviews: Option<JsonValue>,
    pub photos: Option<JsonValue>,
    pub awards: Option<JsonValue>,
    pub products: Option<JsonValue>,
    pub tours: Option<JsonValue>,
    pub menu_pages: Option<JsonValue>,
    pub service_areas: Option<JsonValue>,
    pub chatbot_questions: Option<JsonValue>,
    pub client_approval: Option<JsonValue>,
}

impl WebsiteConfigUpdateForm {
    /// Column-level merge: every provided field replaces the stored value,
    /// absent fields are left untouched.
    pub fn apply_to(&self, config: &mut WebsiteConfig) {
        if let Some(v) = &self.name {
            config.name = v.clone();
        }
        if let Some(v) = &self.template_type {
            config.template_type = v.clone();
        }
        if let Some(v) = &self.logo {
            config.logo = Some(v.clone());
        }
        if let Some(v) = &self.hero_image {
            config.hero_image = Some(v.clone());
        }
        if let Some(v) = &self.profile_image {
            config.profile_image = Some(v.clone());
        }
        if let Some(v) = &self.default_language {
            config.default_language = v.clone();
        }
        if let Some(v) = self.show_why_website_button {
            config.show_why_website_button = v;
        }
        if let Some(v) = self.show_domain_button {
            config.show_domain_button = v;
        }
        if let Some(v) = self.show_chatbot {
            config.show_chatbot = v;
        }
        if let Some(v) = &self.whatsapp_number {
            config.whatsapp_number = Some(v.clone());
        }
        if let Some(v) = &self.whatsapp_message {
            config.whatsapp_message = Some(v.clone());
        }
        if let Some(v) = &self.facebook_url {
            config.facebook_url = Some(v.clone());
        }
        if let Some(v) = &self.instagram_url {
            config.instagram_url = Some(v.clone());
        }
        if let Some(v) = &self.google_maps_embed {
            config.google_maps_embed = Some(v.clone());
        }
        if let Some(v) = &self.address {
            config.address = Some(v.clone());
        }
        if let Some(v) = &self.phone {
            config.phone = Some(v.clone());
        }
        if let Some(v) = &self.email {
            config.email = Some(v.clone());
        }
        if let Some(v) = &self.office_hours {
            config.office_hours = Some(v.clone());
        }
        if let Some(v) = &self.analytics_code {
            config.analytics_code = Some(v.clone());
        }
        if let Some(v) = &self.primary_color {
            config.primary_color = v.clone();
        }
        if let Some(v) = &self.secondary_color {
            config.secondary_color = v.clone();
        }
        if let Some(v) = &self.background_color {
            config.background_color = v.clone();
        }
        if let Some(v) = &self.business_name {
            config.business_name = Some(v.clone());
        }
        if let Some(v) = &self.doctor_name {
            config.doctor_name = Some(v.clone());
        }
        if let Some(v) = &self.specialty {
            config.specialty = Some(v.clone());
        }
        if let Some(v) = &self.translations {
            config.translations = Some(v.clone());
        }
        if let Some(v) = &self.services {
            config.services = Some(v.clone());
        }
        if let Some(v) = &self.reviews {
            config.reviews = Some(v.clone());
        }
        if let Some(v) = &self.photos {
            config.photos = Some(v.clone());
        }
        if let Some(v) = &self.awards {
            config.awards = Some(v.clone());
        }
        if let Some(v) = &self.products {
            config.products = Some(v.clone());
        }
        if let Some(v) = &self.tours {
            config.tours = Some(v.clone());
        }
        if let Some(v) = &self.menu_pages {
            config.menu_pages = Some(v.clone());
        }
        if let Some(v) = &self.service_areas {
            config.service_areas = Some(v.clone());
        }
        if let Some(v) = &self.chatbot_questions {
            config.chatbot_questions = Some(v.clone());
        }
        if let Some(v) = &self.client_approval {
            config.client_approval = Some(v.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn template_type_round_trips_through_strings() {
        for tt in [
            TemplateType::Homepage,
            TemplateType::Professionals,
            TemplateType::Restaurants,
            TemplateType::Retail,
            TemplateType::Services,
            TemplateType::Tourism,
        ] {
            assert_eq!(TemplateType::from_str(tt.as_str()), Ok(tt));
        }
        assert!(TemplateType::from_str("bakery").is_err());
    }

    #[test]
    fn partial_update_leaves_untouched_fields_alone() {
        let mut config = WebsiteConfig {
            id: 7,
            name: "Client 7 Configuration".to_string(),
            phone: Some("+52 983 000 0000".to_string()),
            email: Some("old@example.com".to_string()),
            services: Some(json!([{"icon": "star"}])),
            primary_color: "#00A859".to_string(),
            ..Default::default()
        };

        let form = WebsiteConfigUpdateForm {
            phone: Some("+52 983 111 1111".to_string()),
            ..Default::default()
        };
        form.apply_to(&mut config);

        assert_eq!(config.phone.as_deref(), Some("+52 983 111 1111"));
        assert_eq!(config.email.as_deref(), Some("old@example.com"));
        assert_eq!(config.services, Some(json!([{"icon": "star"}])));
        assert_eq!(config.primary_color, "#00A859");
        assert_eq!(config.name, "Client 7 Configuration");
    }

    #[test]
    fn provided_json_columns_replace_wholesale() {
        let mut config = WebsiteConfig {
            reviews: Some(json!([{"name": "Ana", "rating": 5}])),
            ..Default::default()
        };

        let form = WebsiteConfigUpdateForm {
            reviews: Some(json!([])),
            ..Default::default()
        };
        form.apply_to(&mut config);

        assert_eq!(config.reviews, Some(json!([])));
    }

    #[test]
    fn update_form_validates_email_and_colors() {
        let bad = WebsiteConfigUpdateForm {
            email: Some("not-an-email".to_string()),
            primary_color: Some("green".to_string()),
            ..Default::default()
        };
        let errors = bad.validate().unwrap_err();
        let detail = serde_json::to_value(&errors).unwrap();
        assert!(detail.get("email").is_some());
        assert!(detail.get("primary_color").is_some());

        let good = WebsiteConfigUpdateForm {
            email: Some("demo@professionals.com".to_string()),
            primary_color: Some("#C8102E".to_string()),
            ..Default::default()
        };
        assert!(good.validate().is_ok());
    }

    #[test]
    fn insert_form_requires_a_name() {
        let form = WebsiteConfigForm {
            name: String::new(),
            ..Default::default()
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn wire_format_is_camel_case() {
        let config = WebsiteConfig {
            id: 1,
            name: "WebSitioPro Homepage".to_string(),
            template_type: "homepage".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["templateType"], "homepage");
        assert!(value.get("template_type").is_none());
        assert!(value.get("primaryColor").is_some());
    }
}
