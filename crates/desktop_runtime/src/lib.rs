//! Desktop window manager runtime for the portfolio shell.
//!
//! All window state lives in one [`DesktopState`] owned by [`DesktopProvider`] and changes only
//! through [`reduce_desktop`]. Geometry and dock math are pure modules so they can be tested
//! without a DOM.

pub mod apps;
pub mod components;
pub mod dock;
mod effect_executor;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
