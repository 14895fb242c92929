//! Configuration isolation rules.
//!
//! Template demo pages, numbered client sites and the product's own
//! homepage all share one config table; these rules keep template editors
//! from ever touching the homepage row and keep protected rows out of
//! client-facing listings.

use thiserror::Error;

use crate::error::AppError;
use crate::models::website_config::WebsiteConfig;

/// Canonical name of the single protected homepage row.
pub const HOMEPAGE_CONFIG_NAME: &str = "WebSitioPro Homepage";

/// Older deployments stored the homepage under this name; it stays on the
/// protected list so such rows never leak into client listings.
pub const LEGACY_HOMEPAGE_CONFIG_NAME: &str = "Homepage Configuration";

/// Well-known primary key of the homepage row. The name invariant is not
/// DB-enforced, so listings also filter by this ID.
pub const HOMEPAGE_CONFIG_ID: i32 = 1;

const DEMO_SUFFIX: &str = "-demo";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read,
    Write,
}

/// A request identifier, resolved to the record it addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedConfig {
    /// `"homepage"` or `"editor-demo"`: the protected homepage row.
    Homepage,
    /// `"<type>-demo"`: the shared demo site for one business category.
    Demo { slug: String },
    /// A numeric client ID, resolved by primary key.
    Client(i32),
}

impl ResolvedConfig {
    /// The `name` value used for store lookups. Numeric clients resolve by
    /// primary key, so their name comes from the stored row instead.
    pub fn canonical_name(&self) -> Option<String> {
        match self {
            ResolvedConfig::Homepage => Some(HOMEPAGE_CONFIG_NAME.to_string()),
            ResolvedConfig::Demo { slug } => Some(format!("{slug} Configuration")),
            ResolvedConfig::Client(_) => None,
        }
    }

    /// Template type used when a demo row has to be created on first access.
    pub fn template_type(&self) -> Option<&str> {
        match self {
            ResolvedConfig::Homepage => Some("homepage"),
            ResolvedConfig::Demo { slug } => {
                Some(slug.strip_suffix(DEMO_SUFFIX).unwrap_or(slug))
            }
            ResolvedConfig::Client(_) => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ResolvedConfig::Homepage => "homepage",
            ResolvedConfig::Demo { .. } => "demo",
            ResolvedConfig::Client(_) => "client",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessDenied {
    #[error("Templates cannot modify homepage configuration")]
    HomepageWrite,

    #[error("Legacy default config deprecated. Use specific demo config instead.")]
    DeprecatedDefault,

    #[error("Invalid configuration ID format")]
    InvalidFormat,
}

impl From<AccessDenied> for AppError {
    fn from(denied: AccessDenied) -> Self {
        match denied {
            AccessDenied::InvalidFormat => AppError::BadRequest(denied.to_string()),
            AccessDenied::HomepageWrite | AccessDenied::DeprecatedDefault => {
                AppError::Forbidden(denied.to_string())
            }
        }
    }
}

/// Classifies a raw request identifier. Rules are checked in precedence
/// order and the first match wins; `-demo` slugs, integers, `"default"` and
/// the homepage aliases are mutually exclusive by construction.
pub fn classify(
    identifier: &str,
    operation: Operation,
    is_homepage_editor: bool,
) -> Result<ResolvedConfig, AccessDenied> {
    if identifier == "homepage" || identifier == "editor-demo" {
        // Reads are universal; writes require the homepage-editor capability.
        if operation == Operation::Write && !is_homepage_editor {
            return Err(AccessDenied::HomepageWrite);
        }
        return Ok(ResolvedConfig::Homepage);
    }

    if identifier.ends_with(DEMO_SUFFIX) {
        return Ok(ResolvedConfig::Demo {
            slug: identifier.to_string(),
        });
    }

    if !identifier.is_empty() && identifier.chars().all(|c| c.is_ascii_digit()) {
        return identifier
            .parse::<i32>()
            .map(ResolvedConfig::Client)
            .map_err(|_| AccessDenied::InvalidFormat);
    }

    if identifier == "default" {
        return Err(AccessDenied::DeprecatedDefault);
    }

    Err(AccessDenied::InvalidFormat)
}

/// Removes protected and demo rows from client-facing listings. Filters by
/// name and by the well-known homepage ID, since the name invariant is only
/// conventional.
pub fn filter_client_configs(configs: Vec<WebsiteConfig>) -> Vec<WebsiteConfig> {
    configs
        .into_iter()
        .filter(|config| {
            config.name != HOMEPAGE_CONFIG_NAME
                && config.name != LEGACY_HOMEPAGE_CONFIG_NAME
                && !config.name.to_lowercase().contains("demo")
                && config.id != HOMEPAGE_CONFIG_ID
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_row(id: i32, name: &str) -> WebsiteConfig {
        WebsiteConfig {
            id,
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn homepage_read_is_always_allowed() {
        for identifier in ["homepage", "editor-demo"] {
            let resolved = classify(identifier, Operation::Read, false).unwrap();
            assert_eq!(resolved, ResolvedConfig::Homepage);
            assert_eq!(
                resolved.canonical_name().as_deref(),
                Some(HOMEPAGE_CONFIG_NAME)
            );
        }
    }

    #[test]
    fn homepage_write_requires_editor_capability() {
        let denied = classify("homepage", Operation::Write, false).unwrap_err();
        assert_eq!(denied, AccessDenied::HomepageWrite);
        assert!(denied
            .to_string()
            .contains("cannot modify homepage configuration"));

        let resolved = classify("homepage", Operation::Write, true).unwrap();
        assert_eq!(resolved, ResolvedConfig::Homepage);
    }

    #[test]
    fn editor_demo_is_a_homepage_alias_not_a_demo_slug() {
        // Rule precedence: the alias check runs before the -demo suffix check.
        let denied = classify("editor-demo", Operation::Write, false).unwrap_err();
        assert_eq!(denied, AccessDenied::HomepageWrite);
    }

    #[test]
    fn demo_slugs_resolve_with_canonical_names() {
        let resolved = classify("professionals-demo", Operation::Write, false).unwrap();
        assert_eq!(
            resolved,
            ResolvedConfig::Demo {
                slug: "professionals-demo".to_string()
            }
        );
        assert_eq!(
            resolved.canonical_name().as_deref(),
            Some("professionals-demo Configuration")
        );
        assert_eq!(resolved.template_type(), Some("professionals"));
    }

    #[test]
    fn numeric_identifiers_resolve_by_primary_key() {
        let resolved = classify("42", Operation::Read, false).unwrap();
        assert_eq!(resolved, ResolvedConfig::Client(42));
        assert_eq!(resolved.canonical_name(), None);
    }

    #[test]
    fn signed_or_mixed_numerics_are_invalid() {
        for identifier in ["-5", "+5", "12abc", "1.5", ""] {
            let denied = classify(identifier, Operation::Read, false).unwrap_err();
            assert_eq!(denied, AccessDenied::InvalidFormat, "{identifier:?}");
        }
    }

    #[test]
    fn overflowing_numeric_is_invalid_format() {
        let denied = classify("99999999999999999999", Operation::Read, false).unwrap_err();
        assert_eq!(denied, AccessDenied::InvalidFormat);
    }

    #[test]
    fn legacy_default_is_deprecated_for_all_operations() {
        for operation in [Operation::Read, Operation::Write] {
            let denied = classify("default", operation, true).unwrap_err();
            assert_eq!(denied, AccessDenied::DeprecatedDefault);
            assert!(denied.to_string().contains("deprecated"));
        }
    }

    #[test]
    fn garbage_identifiers_are_rejected() {
        let denied = classify("not-a-config", Operation::Read, false).unwrap_err();
        assert_eq!(denied, AccessDenied::InvalidFormat);
    }

    #[test]
    fn denials_map_to_the_right_status() {
        use actix_web::ResponseError;

        let err: AppError = AccessDenied::HomepageWrite.into();
        assert_eq!(err.status_code(), actix_web::http::StatusCode::FORBIDDEN);
        let err: AppError = AccessDenied::DeprecatedDefault.into();
        assert_eq!(err.status_code(), actix_web::http::StatusCode::FORBIDDEN);
        let err: AppError = AccessDenied::InvalidFormat.into();
        assert_eq!(err.status_code(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn listing_filter_drops_protected_and_demo_rows() {
        let rows = vec![
            config_row(1, HOMEPAGE_CONFIG_NAME),
            config_row(2, LEGACY_HOMEPAGE_CONFIG_NAME),
            config_row(3, "professionals-demo Configuration"),
            config_row(4, "Tourism Demo Site"),
            config_row(5, "Client 5 Configuration"),
            config_row(6, "Panaderia La Espiga"),
        ];

        let filtered = filter_client_configs(rows);
        let ids: Vec<i32> = filtered.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![5, 6]);
    }

    #[test]
    fn listing_filter_drops_homepage_by_id_even_under_another_name() {
        // The name invariant is conventional; row 1 is filtered regardless.
        let rows = vec![config_row(1, "Renamed Site"), config_row(2, "Kept Site")];
        let filtered = filter_client_configs(rows);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
    }

    #[test]
    fn listing_filter_handles_duplicates_and_any_order() {
        let rows = vec![
            config_row(9, "Client Nine"),
            config_row(1, HOMEPAGE_CONFIG_NAME),
            config_row(9, "Client Nine"),
            config_row(1, HOMEPAGE_CONFIG_NAME),
        ];
        let filtered = filter_client_configs(rows);
        assert!(filtered.iter().all(|c| c.name != HOMEPAGE_CONFIG_NAME));
        assert_eq!(filtered.len(), 2);
    }
}
