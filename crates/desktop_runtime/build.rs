use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const MIN_WINDOW_WIDTH: i32 = 300;
const MIN_WINDOW_HEIGHT: i32 = 200;

/// Registry order; desktop icons, launcher rows, and dock slots follow it.
const APP_CRATES: [&str; 4] = ["experience", "skills", "projects", "contact"];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowDefaults {
    width: i32,
    height: i32,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppManifest {
    schema_version: u32,
    app_id: String,
    display_name: String,
    icon: String,
    window_defaults: WindowDefaults,
    #[serde(default = "default_true")]
    show_on_desktop: bool,
    #[serde(default = "default_true")]
    show_in_launcher: bool,
    #[serde(default = "default_true")]
    show_in_dock: bool,
}

fn app_manifest_paths(root: &Path) -> Vec<PathBuf> {
    APP_CRATES
        .iter()
        .map(|name| {
            root.join("..")
                .join("apps")
                .join(name)
                .join("app.manifest.toml")
        })
        .collect()
}

fn validate(path: &Path, manifest: &AppManifest) {
    if manifest.schema_version != 1 {
        panic!(
            "manifest schema mismatch in {}: expected 1 found {}",
            path.display(),
            manifest.schema_version
        );
    }
    for (field, value) in [
        ("app_id", &manifest.app_id),
        ("display_name", &manifest.display_name),
        ("icon", &manifest.icon),
    ] {
        if value.trim().is_empty() {
            panic!("empty `{field}` in {}", path.display());
        }
    }
    let defaults = &manifest.window_defaults;
    if defaults.width < MIN_WINDOW_WIDTH || defaults.height < MIN_WINDOW_HEIGHT {
        panic!(
            "window defaults in {} are {}x{}; minimum is {MIN_WINDOW_WIDTH}x{MIN_WINDOW_HEIGHT}",
            path.display(),
            defaults.width,
            defaults.height
        );
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let mut manifests = Vec::<AppManifest>::new();
    let mut seen = BTreeSet::new();

    for path in app_manifest_paths(&crate_root) {
        println!("cargo:rerun-if-changed={}", path.display());
        let raw = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
        let manifest: AppManifest = toml::from_str(&raw)
            .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
        validate(&path, &manifest);
        if !seen.insert(manifest.app_id.clone()) {
            panic!("duplicate app id `{}` in {}", manifest.app_id, path.display());
        }
        manifests.push(manifest);
    }

    let json = serde_json::to_string_pretty(&manifests).expect("serialize app manifest catalog");
    let generated = format!(
        "/// Build-time generated app manifest catalog JSON.\n\
pub const APP_MANIFEST_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
