use crate::db::Database;
use crate::error::AppResult;
use crate::models::website_config::{WebsiteConfig, WebsiteConfigForm, WebsiteConfigUpdateForm};

const COLUMNS: &str = "id, name, template_type, logo, hero_image, profile_image, \
     default_language, show_why_website_button, show_domain_button, show_chatbot, \
     whatsapp_number, whatsapp_message, facebook_url, instagram_url, google_maps_embed, \
     address, phone, email, office_hours, analytics_code, primary_color, secondary_color, \
     background_color, business_name, doctor_name, specialty, translations, services, \
     reviews, photos, awards, products, tours, menu_pages, service_areas, \
     chatbot_questions, client_approval";

pub struct WebsiteConfigService<'a> {
    db: &'a Database,
}

impl<'a> WebsiteConfigService<'a> {
    pub fn new(db: &'a Database) -> Self {
        WebsiteConfigService { db }
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<WebsiteConfig>> {
        let result = sqlx::query_as::<_, WebsiteConfig>(&format!(
            "SELECT {COLUMNS} FROM website_configs WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db.pool)
        .await?;

        Ok(result)
    }

    /// First matching row wins. `name` has no unique constraint, so a raced
    /// duplicate is simply never returned again.
    pub async fn get_by_name(&self, name: &str) -> AppResult<Option<WebsiteConfig>> {
        let result = sqlx::query_as::<_, WebsiteConfig>(&format!(
            "SELECT {COLUMNS} FROM website_configs WHERE name = $1 ORDER BY id ASC LIMIT 1"
        ))
        .bind(name)
        .fetch_optional(&self.db.pool)
        .await?;

        Ok(result)
    }

    pub async fn get_all(&self) -> AppResult<Vec<WebsiteConfig>> {
        let result = sqlx::query_as::<_, WebsiteConfig>(&format!(
            "SELECT {COLUMNS} FROM website_configs ORDER BY id ASC"
        ))
        .fetch_all(&self.db.pool)
        .await?;

        Ok(result)
    }

    pub async fn create(&self, form: &WebsiteConfigForm) -> AppResult<WebsiteConfig> {
        let config = sqlx::query_as::<_, WebsiteConfig>(&format!(
            r#"
            INSERT INTO website_configs (
                name, template_type, logo, hero_image, profile_image,
                default_language, show_why_website_button, show_domain_button,
                show_chatbot, whatsapp_number, whatsapp_message, facebook_url,
                instagram_url, google_maps_embed, address, phone, email,
                office_hours, analytics_code, primary_color, secondary_color,
                background_color, business_name, doctor_name, specialty,
                translations, services, reviews, photos, awards, products,
                tours, menu_pages, service_areas, chatbot_questions,
                client_approval
            )
            VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25, $26,
                $27, $28, $29, $30, $31, $32, $33, $34, $35, $36
            )
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&form.name)
        .bind(form.template_type.as_deref().unwrap_or("homepage"))
        .bind(&form.logo)
        .bind(&form.hero_image)
        .bind(&form.profile_image)
        .bind(form.default_language.as_deref().unwrap_or("en"))
        .bind(form.show_why_website_button.unwrap_or(true))
        .bind(form.show_domain_button.unwrap_or(true))
        .bind(form.show_chatbot.unwrap_or(true))
        .bind(&form.whatsapp_number)
        .bind(&form.whatsapp_message)
        .bind(&form.facebook_url)
        .bind(&form.instagram_url)
        .bind(&form.google_maps_embed)
        .bind(&form.address)
        .bind(&form.phone)
        .bind(&form.email)
        .bind(&form.office_hours)
        .bind(&form.analytics_code)
        .bind(form.primary_color.as_deref().unwrap_or("#00A859"))
        .bind(form.secondary_color.as_deref().unwrap_or("#C8102E"))
        .bind(form.background_color.as_deref().unwrap_or("#FFFFFF"))
        .bind(&form.business_name)
        .bind(&form.doctor_name)
        .bind(&form.specialty)
        .bind(&form.translations)
        .bind(&form.services)
        .bind(&form.reviews)
        .bind(&form.photos)
        .bind(&form.awards)
        .bind(&form.products)
        .bind(&form.tours)
        .bind(&form.menu_pages)
        .bind(&form.service_areas)
        .bind(&form.chatbot_questions)
        .bind(&form.client_approval)
        .fetch_one(&self.db.pool)
        .await?;

        Ok(config)
    }

    /// Column-level partial update: fetch, merge the provided fields, write
    /// the whole row back. Last write wins; there is no version token.
    pub async fn update(
        &self,
        id: i32,
        form: &WebsiteConfigUpdateForm,
    ) -> AppResult<Option<WebsiteConfig>> {
        let Some(mut config) = self.get_by_id(id).await? else {
            return Ok(None);
        };
        form.apply_to(&mut config);

        let updated = sqlx::query_as::<_, WebsiteConfig>(&format!(
            r#"
            UPDATE website_configs SET
                name = $1, template_type = $2, logo = $3, hero_image = $4,
                profile_image = $5, default_language = $6,
                show_why_website_button = $7, show_domain_button = $8,
                show_chatbot = $9, whatsapp_number = $10, whatsapp_message = $11,
                facebook_url = $12, instagram_url = $13, google_maps_embed = $14,
                address = $15, phone = $16, email = $17, office_hours = $18,
                analytics_code = $19, primary_color = $20, secondary_color = $21,
                background_color = $22, business_name = $23, doctor_name = $24,
                specialty = $25, translations = $26, services = $27,
                reviews = $28, photos = $29, awards = $30, products = $31,
                tours = $32, menu_pages = $33, service_areas = $34,
                chatbot_questions = $35, client_approval = $36
            WHERE id = $37
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&config.name)
        .bind(&config.template_type)
        .bind(&config.logo)
        .bind(&config.hero_image)
        .bind(&config.profile_image)
        .bind(&config.default_language)
        .bind(config.show_why_website_button)
        .bind(config.show_domain_button)
        .bind(config.show_chatbot)
        .bind(&config.whatsapp_number)
        .bind(&config.whatsapp_message)
        .bind(&config.facebook_url)
        .bind(&config.instagram_url)
        .bind(&config.google_maps_embed)
        .bind(&config.address)
        .bind(&config.phone)
        .bind(&config.email)
        .bind(&config.office_hours)
        .bind(&config.analytics_code)
        .bind(&config.primary_color)
        .bind(&config.secondary_color)
        .bind(&config.background_color)
        .bind(&config.business_name)
        .bind(&config.doctor_name)
        .bind(&config.specialty)
        .bind(&config.translations)
        .bind(&config.services)
        .bind(&config.reviews)
        .bind(&config.photos)
        .bind(&config.awards)
        .bind(&config.products)
        .bind(&config.tours)
        .bind(&config.menu_pages)
        .bind(&config.service_areas)
        .bind(&config.chatbot_questions)
        .bind(&config.client_approval)
        .bind(id)
        .fetch_one(&self.db.pool)
        .await?;

        Ok(Some(updated))
    }

    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM website_configs WHERE id = $1")
            .bind(id)
            .execute(&self.db.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
