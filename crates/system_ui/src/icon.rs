//! Centralized icon abstraction for the shell and the portfolio apps.
//!
//! App manifests reference icons by string token (for example `"Briefcase"`). Tokens are
//! resolved once through [`IconName::from_token`] into a closed set of variants; unknown
//! tokens fall back to [`IconName::Folder`]. Glyphs are 24px stroke outlines rendered by
//! a single [`Icon`] component.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by shell components and apps.
pub enum IconName {
    /// Experience app (briefcase).
    Briefcase,
    /// Skills app (code brackets).
    Code,
    /// Projects app (open folder).
    FolderOpen,
    /// Contact app (envelope).
    Mail,
    /// Generic folder; fallback for unknown tokens.
    Folder,
    /// Start menu button glyph.
    Menu,
    /// Window minimize control.
    WindowMinimize,
    /// Window maximize control.
    WindowMaximize,
    /// Window restore control.
    WindowRestore,
    /// Dismiss/close control.
    Dismiss,
    /// External link marker.
    ExternalLink,
    /// Calendar / date marker.
    Calendar,
    /// Location marker.
    MapPin,
    /// Person / name field marker.
    User,
    /// Message field marker.
    Message,
    /// Send action.
    Send,
    /// Success confirmation.
    CheckCircle,
}

impl IconName {
    /// Resolves a manifest icon token, falling back to [`IconName::Folder`].
    pub fn from_token(token: &str) -> Self {
        match token {
            "Briefcase" => Self::Briefcase,
            "Code" | "Code2" => Self::Code,
            "FolderOpen" => Self::FolderOpen,
            "Mail" => Self::Mail,
            "Folder" => Self::Folder,
            "Menu" => Self::Menu,
            "ExternalLink" => Self::ExternalLink,
            "Calendar" => Self::Calendar,
            "MapPin" => Self::MapPin,
            "User" => Self::User,
            "MessageSquare" => Self::Message,
            "Send" => Self::Send,
            "CheckCircle" => Self::CheckCircle,
            _ => Self::Folder,
        }
    }

    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Briefcase => "briefcase",
            Self::Code => "code",
            Self::FolderOpen => "folder-open",
            Self::Mail => "mail",
            Self::Folder => "folder",
            Self::Menu => "menu",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::Dismiss => "dismiss",
            Self::ExternalLink => "external-link",
            Self::Calendar => "calendar",
            Self::MapPin => "map-pin",
            Self::User => "user",
            Self::Message => "message",
            Self::Send => "send",
            Self::CheckCircle => "check-circle",
        }
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::Briefcase => {
                r#"<rect width="20" height="14" x="2" y="7" rx="2" ry="2"/><path d="M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"/>"#
            }
            Self::Code => r#"<path d="m18 16 4-4-4-4"/><path d="m6 8-4 4 4 4"/><path d="m14.5 4-5 16"/>"#,
            Self::FolderOpen => {
                r#"<path d="m6 14 1.5-2.9A2 2 0 0 1 9.24 10H20a2 2 0 0 1 1.94 2.5l-1.54 6a2 2 0 0 1-1.95 1.5H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h3.9a2 2 0 0 1 1.69.9l.81 1.2a2 2 0 0 0 1.67.9H18a2 2 0 0 1 2 2v2"/>"#
            }
            Self::Mail => {
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
            }
            Self::Folder => {
                r#"<path d="M20 20a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.9a2 2 0 0 1-1.69-.9L9.6 3.9A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13a2 2 0 0 0 2 2Z"/>"#
            }
            Self::Menu => {
                r#"<line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="18" y2="18"/>"#
            }
            Self::WindowMinimize => r#"<path d="M5 12h14"/>"#,
            Self::WindowMaximize => {
                r#"<polyline points="15 3 21 3 21 9"/><polyline points="9 21 3 21 3 15"/><line x1="21" x2="14" y1="3" y2="10"/><line x1="3" x2="10" y1="21" y2="14"/>"#
            }
            Self::WindowRestore => {
                r#"<polyline points="4 14 10 14 10 20"/><polyline points="20 10 14 10 14 4"/><line x1="14" x2="21" y1="10" y2="3"/><line x1="3" x2="10" y1="21" y2="14"/>"#
            }
            Self::Dismiss => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
            Self::ExternalLink => {
                r#"<path d="M15 3h6v6"/><path d="M10 14 21 3"/><path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>"#
            }
            Self::Calendar => {
                r#"<rect width="18" height="18" x="3" y="4" rx="2" ry="2"/><line x1="16" x2="16" y1="2" y2="6"/><line x1="8" x2="8" y1="2" y2="6"/><line x1="3" x2="21" y1="10" y2="10"/>"#
            }
            Self::MapPin => {
                r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#
            }
            Self::User => {
                r#"<path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/>"#
            }
            Self::Message => {
                r#"<path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"/>"#
            }
            Self::Send => r#"<path d="m22 2-7 20-4-9-9-4Z"/><path d="M22 2 11 13"/>"#,
            Self::CheckCircle => {
                r#"<path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/><polyline points="22 4 12 14.01 9 11.01"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 14px compact icon (window controls).
    Xs,
    /// 18px standard icon (form labels, buttons).
    #[default]
    Sm,
    /// 24px medium icon (start menu rows, taskbar).
    Md,
    /// 48px large icon (desktop launchers, success banners).
    Lg,
    /// Caller-provided pixel size (dock magnification).
    Px(u16),
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 18,
            Self::Md => 24,
            Self::Lg => 48,
            Self::Px(px) => px,
        }
    }

    /// Stable size token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Px(_) => "custom",
        }
    }
}

#[component]
/// Renders an icon glyph from the centralized catalog.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="none"
            stroke="currentColor"
            stroke-width="1.5"
            stroke-linecap="round"
            stroke-linejoin="round"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}
