//! App catalog: build-time manifests joined with each app crate's deferred module.

use std::sync::OnceLock;

use desktop_app_contract::{AppManifest, AppModule, ApplicationId};
use leptos::logging;
use thiserror::Error;

use crate::model::OpenWindowRequest;

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("no app registered for id `{0}`")]
    UnknownApp(ApplicationId),
}

/// Parsed manifests in registry order.
pub fn app_catalog() -> &'static [AppManifest] {
    static CATALOG: OnceLock<Vec<AppManifest>> = OnceLock::new();
    CATALOG.get_or_init(|| match serde_json::from_str(APP_MANIFEST_CATALOG_JSON) {
        Ok(manifests) => manifests,
        Err(err) => {
            logging::warn!("app manifest catalog failed to parse: {err}");
            Vec::new()
        }
    })
}

pub fn app_manifest(app_id: &ApplicationId) -> Result<&'static AppManifest, CatalogError> {
    app_catalog()
        .iter()
        .find(|manifest| &manifest.app_id == app_id)
        .ok_or_else(|| CatalogError::UnknownApp(app_id.clone()))
}

/// Deferred content module for `app_id`.
pub fn app_module(app_id: &ApplicationId) -> Result<AppModule, CatalogError> {
    match app_id.as_str() {
        "experience" => Ok(desktop_app_experience::module()),
        "skills" => Ok(desktop_app_skills::module()),
        "projects" => Ok(desktop_app_projects::module()),
        "contact" => Ok(desktop_app_contact::module()),
        _ => Err(CatalogError::UnknownApp(app_id.clone())),
    }
}

pub fn launcher_apps() -> Vec<&'static AppManifest> {
    app_catalog()
        .iter()
        .filter(|manifest| manifest.show_in_launcher)
        .collect()
}

pub fn desktop_icon_apps() -> Vec<&'static AppManifest> {
    app_catalog()
        .iter()
        .filter(|manifest| manifest.show_on_desktop)
        .collect()
}

pub fn dock_apps() -> Vec<&'static AppManifest> {
    app_catalog()
        .iter()
        .filter(|manifest| manifest.show_in_dock)
        .collect()
}

/// Open request carrying the manifest's title and default window size.
pub fn open_request(manifest: &AppManifest, opened_at_ms: u64) -> OpenWindowRequest {
    OpenWindowRequest {
        app_id: manifest.app_id.clone(),
        title: manifest.display_name.clone(),
        default_width: manifest.window_defaults.width,
        default_height: manifest.window_defaults.height,
        opened_at_ms,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::window_manager::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

    #[test]
    fn catalog_lists_portfolio_apps_in_registry_order() {
        let ids: Vec<_> = app_catalog().iter().map(|m| m.app_id.as_str()).collect();
        assert_eq!(ids, vec!["experience", "skills", "projects", "contact"]);
    }

    #[test]
    fn manifest_ids_are_valid_and_have_modules() {
        for manifest in app_catalog() {
            let checked = ApplicationId::new(manifest.app_id.as_str()).expect("valid id");
            assert!(app_module(&checked).is_ok(), "{checked}");
            assert!(manifest.window_defaults.width >= MIN_WINDOW_WIDTH);
            assert!(manifest.window_defaults.height >= MIN_WINDOW_HEIGHT);
        }
    }

    #[test]
    fn unknown_app_reports_catalog_error() {
        let missing = ApplicationId::trusted("terminal");
        assert_eq!(
            app_manifest(&missing).unwrap_err(),
            CatalogError::UnknownApp(missing.clone())
        );
        assert!(app_module(&missing).is_err());
        assert_eq!(
            CatalogError::UnknownApp(missing).to_string(),
            "no app registered for id `terminal`"
        );
    }

    #[test]
    fn open_request_uses_manifest_defaults() {
        let manifest = app_manifest(&ApplicationId::trusted("projects")).expect("projects");
        assert_eq!(
            open_request(manifest, 42),
            OpenWindowRequest {
                app_id: ApplicationId::trusted("projects"),
                title: "Projects".to_string(),
                default_width: 900,
                default_height: 650,
                opened_at_ms: 42,
            }
        );
    }

    #[test]
    fn every_app_is_visible_on_each_surface() {
        assert_eq!(launcher_apps().len(), 4);
        assert_eq!(desktop_icon_apps().len(), 4);
        assert_eq!(dock_apps().len(), 4);
    }
}
