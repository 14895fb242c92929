//! File-backed archive of generated template documents.
//!
//! Each saved template is one pretty-printed JSON file under the configured
//! directory, keyed by a millisecond timestamp id.

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

use crate::error::{AppError, AppResult};
use crate::utils::time::current_timestamp_millis;

pub struct TemplateService {
    dir: PathBuf,
}

impl TemplateService {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        TemplateService { dir: dir.into() }
    }

    pub async fn save(&self, data: &Value) -> AppResult<String> {
        fs::create_dir_all(&self.dir).await?;

        let id = current_timestamp_millis().to_string();
        let body = serde_json::to_vec_pretty(data)
            .map_err(|e| AppError::Internal(format!("Failed to serialize template: {e}")))?;
        fs::write(self.entry_path(&id)?, body).await?;

        Ok(id)
    }

    pub async fn get(&self, id: &str) -> AppResult<Option<Value>> {
        let path = self.entry_path(id)?;
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::Internal(format!("Corrupt template file {id}: {e}")))?;
        Ok(Some(value))
    }

    /// All archive entries, newest first, each annotated with its id and the
    /// file's last-modified time.
    pub async fn list(&self) -> AppResult<Vec<Value>> {
        fs::create_dir_all(&self.dir).await?;

        let mut templates = Vec::new();
        let mut entries = fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let bytes = match fs::read(&path).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::warn!("Failed to read template {}: {}", path.display(), e);
                    continue;
                }
            };
            let mut value: Value = match serde_json::from_slice(&bytes) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!("Skipping corrupt template {}: {}", path.display(), e);
                    continue;
                }
            };

            if let Some(obj) = value.as_object_mut() {
                obj.insert("templateId".to_string(), Value::String(id.to_string()));
                if let Ok(modified) = entry.metadata().await.and_then(|m| m.modified()) {
                    let modified: DateTime<Utc> = modified.into();
                    obj.insert(
                        "lastModified".to_string(),
                        Value::String(modified.to_rfc3339()),
                    );
                }
            }
            templates.push(value);
        }

        // RFC3339 strings sort lexicographically; entries without a
        // createdAt field sink to the end.
        templates.sort_by(|a, b| {
            let a_created = a["createdAt"].as_str().unwrap_or("");
            let b_created = b["createdAt"].as_str().unwrap_or("");
            b_created.cmp(a_created)
        });

        Ok(templates)
    }

    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let path = self.entry_path(id)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Ids come from URLs; restricting the character set keeps the archive
    /// confined to its directory.
    fn entry_path(&self, id: &str) -> AppResult<PathBuf> {
        if id.is_empty()
            || !id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(AppError::BadRequest("Invalid template ID".to_string()));
        }
        Ok(self.dir.join(format!("{id}.json")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn save_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let service = TemplateService::new(dir.path());

        let data = json!({"businessName": "Panaderia La Espiga", "templateType": "retail"});
        let id = service.save(&data).await.unwrap();

        let loaded = service.get(&id).await.unwrap().unwrap();
        assert_eq!(loaded["businessName"], "Panaderia La Espiga");
    }

    #[tokio::test]
    async fn get_missing_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let service = TemplateService::new(dir.path());

        assert!(service.get("1234567890").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_annotates_entries_and_sorts_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let service = TemplateService::new(dir.path());

        service
            .save(&json!({"createdAt": "2026-01-01T00:00:00Z", "n": 1}))
            .await
            .unwrap();
        // Timestamp ids have millisecond resolution; avoid a collision.
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        service
            .save(&json!({"createdAt": "2026-02-01T00:00:00Z", "n": 2}))
            .await
            .unwrap();

        let listed = service.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0]["n"], 2);
        assert!(listed[0]["templateId"].is_string());
        assert!(listed[0]["lastModified"].is_string());
    }

    #[tokio::test]
    async fn delete_reports_whether_anything_was_removed() {
        let dir = tempfile::tempdir().unwrap();
        let service = TemplateService::new(dir.path());

        let id = service.save(&json!({})).await.unwrap();
        assert!(service.delete(&id).await.unwrap());
        assert!(!service.delete(&id).await.unwrap());
    }

    #[tokio::test]
    async fn traversal_ids_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let service = TemplateService::new(dir.path());

        let err = service.get("../etc/passwd").await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
