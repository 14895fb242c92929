//! Request-scoped resolution of config identifiers to stored rows.
//!
//! Classify, look up, auto-create on first access for homepage and demo
//! kinds, then read or merge-and-persist. All state lives in the store;
//! nothing here survives the request.

use crate::db::Database;
use crate::error::{AppError, AppResult};
use crate::isolation::{classify, Operation, ResolvedConfig};
use crate::models::website_config::{WebsiteConfig, WebsiteConfigUpdateForm};
use crate::services::demo::{demo_defaults, homepage_defaults};
use crate::services::website_config::WebsiteConfigService;

pub struct ResolutionService<'a> {
    db: &'a Database,
}

impl<'a> ResolutionService<'a> {
    pub fn new(db: &'a Database) -> Self {
        ResolutionService { db }
    }

    pub async fn resolve_read(&self, identifier: &str) -> AppResult<WebsiteConfig> {
        let resolved = self.classify_logged(identifier, Operation::Read, false)?;
        self.locate(&resolved).await
    }

    /// Locates the target exactly like a read (including auto-creation for a
    /// never-seen demo slug), then applies the partial update on top.
    pub async fn resolve_write(
        &self,
        identifier: &str,
        is_homepage_editor: bool,
        form: &WebsiteConfigUpdateForm,
    ) -> AppResult<WebsiteConfig> {
        let resolved = self.classify_logged(identifier, Operation::Write, is_homepage_editor)?;
        let existing = self.locate(&resolved).await?;

        let store = WebsiteConfigService::new(self.db);
        store
            .update(existing.id, form)
            .await?
            .ok_or_else(|| AppError::NotFound("Configuration not found".to_string()))
    }

    fn classify_logged(
        &self,
        identifier: &str,
        operation: Operation,
        is_homepage_editor: bool,
    ) -> AppResult<ResolvedConfig> {
        match classify(identifier, operation, is_homepage_editor) {
            Ok(resolved) => {
                tracing::info!(
                    identifier,
                    operation = ?operation,
                    kind = resolved.kind(),
                    "config access allowed"
                );
                Ok(resolved)
            }
            Err(denied) => {
                tracing::warn!(
                    identifier,
                    operation = ?operation,
                    error = %denied,
                    "config access denied"
                );
                Err(denied.into())
            }
        }
    }

    async fn locate(&self, resolved: &ResolvedConfig) -> AppResult<WebsiteConfig> {
        let store = WebsiteConfigService::new(self.db);

        match resolved {
            ResolvedConfig::Client(id) => store
                .get_by_id(*id)
                .await?
                .ok_or_else(|| AppError::NotFound("Configuration not found".to_string())),
            ResolvedConfig::Homepage => {
                let name = resolved.canonical_name().unwrap_or_default();

                if let Some(found) = store.get_by_name(&name).await? {
                    return Ok(found);
                }

                // The homepage seeds from the store's column defaults, not the
                // demo placeholder content.
                tracing::info!(name = %name, "homepage configuration missing, creating defaults");
                store.create(&homepage_defaults()).await
            }
            ResolvedConfig::Demo { .. } => {
                let name = resolved.canonical_name().unwrap_or_default();
                let template_type = resolved.template_type().unwrap_or_default().to_string();

                if let Some(found) = store.get_by_name(&name).await? {
                    return Ok(found);
                }

                // Read-then-create without a lock: concurrent first requests
                // for the same name can each insert a row. Name lookups keep
                // returning the lowest id, so the extra row becomes an orphan.
                tracing::info!(
                    name = %name,
                    template_type = %template_type,
                    "demo configuration missing, creating defaults"
                );
                let form = demo_defaults(&name, &template_type);
                store.create(&form).await
            }
        }
    }
}
