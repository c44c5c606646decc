//! Shared UI primitive library for the desktop shell and the portfolio apps.
//!
//! The crate owns the centralized icon API and the shell structural primitives
//! (backdrop, window frame pieces, taskbar, desktop icon layer). Primitives emit the
//! stable `data-ui-*` DOM contract consumed by the shell stylesheet.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    DesktopBackdrop, DesktopIconButton, DesktopIconLayer, DesktopWindowLayer, Taskbar,
    TaskbarRegion, TaskbarSection, WindowBody, WindowControlButton, WindowControls, WindowFrame,
    WindowTitle, WindowTitleBar,
};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{Icon, IconName, IconSize};
}
