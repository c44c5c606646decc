use desktop_app_contract::ApplicationId;
use leptos::ev::KeyboardEvent;
use leptos::*;
use system_ui::{DesktopIconButton, DesktopIconLayer, Icon, IconName, IconSize};

use super::use_desktop_runtime;
use crate::apps;

/// Two clicks closer together than this open the app.
const DOUBLE_CLICK_WINDOW_MS: f64 = 400.0;
const ICON_COLUMN_X: i32 = 20;
const ICON_ROW_START_Y: i32 = 20;
const ICON_ROW_STEP: i32 = 100;

fn desktop_icon_position(index: usize) -> (i32, i32) {
    let row = i32::try_from(index).unwrap_or(i32::MAX);
    (
        ICON_COLUMN_X,
        ICON_ROW_START_Y.saturating_add(row.saturating_mul(ICON_ROW_STEP)),
    )
}

fn is_double_click(previous_ms: Option<f64>, now_ms: f64) -> bool {
    previous_ms.is_some_and(|previous| now_ms - previous < DOUBLE_CLICK_WINDOW_MS)
}

fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[component]
pub(super) fn DesktopIcons() -> impl IntoView {
    view! {
        <DesktopIconLayer>
            {apps::desktop_icon_apps()
                .into_iter()
                .enumerate()
                .map(|(index, manifest)| {
                    view! {
                        <DesktopIcon
                            app_id=manifest.app_id.clone()
                            label=manifest.display_name.clone()
                            icon=IconName::from_token(&manifest.icon)
                            index=index
                        />
                    }
                })
                .collect_view()}
        </DesktopIconLayer>
    }
}

#[component]
fn DesktopIcon(app_id: ApplicationId, label: String, icon: IconName, index: usize) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let app_id = store_value(app_id);
    let last_click_ms = store_value::<Option<f64>>(None);
    let (x, y) = desktop_icon_position(index);

    let on_click = Callback::new(move |_| {
        let now = js_sys::Date::now();
        if is_double_click(last_click_ms.get_value(), now) {
            app_id.with_value(|app_id| runtime.open_app(app_id));
        }
        last_click_ms.set_value(Some(now));
    });
    let on_keydown = Callback::new(move |ev: KeyboardEvent| {
        if is_activation_key(&ev.key()) {
            ev.prevent_default();
            app_id.with_value(|app_id| runtime.open_app(app_id));
        }
    });

    view! {
        <DesktopIconButton
            layout_class="desktop-icon"
            style=format!("left: {x}px; top: {y}px;")
            aria_label=format!("Open {label}")
            on_click=on_click
            on_keydown=on_keydown
        >
            <div class="desktop-icon-image">
                <Icon icon=icon size=IconSize::Lg />
            </div>
            <span class="desktop-icon-label">{label}</span>
        </DesktopIconButton>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_stack_in_a_single_column() {
        assert_eq!(desktop_icon_position(0), (20, 20));
        assert_eq!(desktop_icon_position(3), (20, 320));
    }

    #[test]
    fn double_click_requires_two_clicks_within_window() {
        assert!(!is_double_click(None, 1_000.0));
        assert!(is_double_click(Some(1_000.0), 1_399.0));
        assert!(!is_double_click(Some(1_000.0), 1_400.0));
    }

    #[test]
    fn enter_and_space_activate_icons() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Escape"));
    }
}
