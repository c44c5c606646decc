//! Shared contract types between the desktop window manager runtime and the portfolio apps.
//!
//! The runtime owns windows; apps own their content. The only coupling is the static
//! [`AppManifest`] metadata, a canonical [`ApplicationId`], and a deferred [`AppModule`]
//! factory the runtime resolves the first time an app window body mounts.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use futures::future::{self, LocalBoxFuture};
use leptos::View;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Manifest schema version understood by this contract.
pub const APP_MANIFEST_SCHEMA_VERSION: u32 = 1;

/// Stable identifier for an app module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid application id `{0}`; expected a lowercase kebab-case token")]
/// Returned when a raw string does not satisfy the application id policy.
pub struct InvalidApplicationId(pub String);

impl ApplicationId {
    /// Returns an app identifier when `raw` is a lowercase kebab-case token.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidApplicationId> {
        let raw = raw.into();
        if is_valid_application_id(&raw) {
            Ok(Self(raw))
        } else {
            Err(InvalidApplicationId(raw))
        }
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creates an id without validation for compile-time trusted constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_valid_application_id(raw: &str) -> bool {
    if raw.is_empty() || raw.len() > 32 {
        return false;
    }
    let bytes = raw.as_bytes();
    if !bytes[0].is_ascii_lowercase() || raw.ends_with('-') {
        return false;
    }
    bytes
        .iter()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Default window size requested by an app.
pub struct WindowDefaults {
    /// Initial width in layout pixels.
    pub width: i32,
    /// Initial height in layout pixels.
    pub height: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Static registration metadata declared by each app in `app.manifest.toml`.
pub struct AppManifest {
    /// Manifest schema version.
    pub schema_version: u32,
    /// Canonical app id.
    pub app_id: ApplicationId,
    /// Human-readable display name; also the initial window title.
    pub display_name: String,
    /// Icon token resolved by the shell icon catalog.
    pub icon: String,
    /// Default window geometry.
    pub window_defaults: WindowDefaults,
    /// Desktop icon visibility flag.
    #[serde(default = "default_true")]
    pub show_on_desktop: bool,
    /// Start menu visibility flag.
    #[serde(default = "default_true")]
    pub show_in_launcher: bool,
    /// Dock visibility flag.
    #[serde(default = "default_true")]
    pub show_in_dock: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// App mount context injected by the desktop runtime per window instance.
pub struct AppMountContext {
    /// Stable app id from the runtime catalog.
    pub app_id: ApplicationId,
    /// Runtime window id hosting this mount.
    pub window_id: String,
}

/// Mount function producing the app view for one window.
pub type AppMountFn = fn(AppMountContext) -> View;

/// Deferred loader resolving an app's mount function.
pub type AppLoadFn = fn() -> LocalBoxFuture<'static, AppMountFn>;

#[derive(Debug, Clone, Copy)]
/// Deferred app module descriptor used by the runtime app registry.
pub struct AppModule {
    load_fn: AppLoadFn,
}

impl AppModule {
    /// Creates a module from a deferred loader.
    pub const fn deferred(load_fn: AppLoadFn) -> Self {
        Self { load_fn }
    }

    /// Runs the loader, resolving the mount function.
    pub fn load(self) -> LocalBoxFuture<'static, AppMountFn> {
        (self.load_fn)()
    }
}

/// Wraps an already-linked mount function as a resolved loader future.
pub fn ready_mount(mount_fn: AppMountFn) -> LocalBoxFuture<'static, AppMountFn> {
    Box::pin(future::ready(mount_fn))
}
