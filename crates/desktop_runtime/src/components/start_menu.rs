use leptos::html::Div;
use leptos::*;
use system_ui::{Icon, IconName, IconSize};
use wasm_bindgen::JsCast;

use super::use_desktop_runtime;
use crate::{apps, reducer::DesktopAction};

/// Returns `true` when `target` sits inside `container` or the start button.
fn is_inside_menu_or_button(container: Option<&web_sys::Element>, target: &web_sys::Node) -> bool {
    if container.is_some_and(|menu| menu.contains(Some(target))) {
        return true;
    }
    document()
        .get_element_by_id("start-button")
        .is_some_and(|button| button.contains(Some(target)))
}

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let is_open = Signal::derive(move || runtime.state.with(|s| s.start_menu_open));
    let menu_ref = create_node_ref::<Div>();

    let outside_click_listener = window_event_listener(ev::mousedown, move |ev| {
        if !is_open.get_untracked() {
            return;
        }
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
            return;
        };
        let menu = menu_ref.get_untracked();
        let menu_element = menu.as_deref().map(|el| el.unchecked_ref::<web_sys::Element>());
        if !is_inside_menu_or_button(menu_element, &target) {
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && is_open.get_untracked() {
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
        }
    });
    on_cleanup(move || escape_listener.remove());

    view! {
        <Show when=move || is_open.get() fallback=|| ()>
            <div node_ref=menu_ref class="start-menu" role="menu" aria-label="Start menu">
                <div class="start-menu-header">
                    <h2>"Applications"</h2>
                </div>
                <div class="start-menu-apps">
                    {apps::launcher_apps()
                        .into_iter()
                        .map(|manifest| {
                            let app_id = manifest.app_id.clone();
                            view! {
                                <button
                                    type="button"
                                    class="start-menu-item"
                                    role="menuitem"
                                    on:click=move |_| {
                                        runtime.open_app(&app_id);
                                        runtime.dispatch_action(DesktopAction::CloseStartMenu);
                                    }
                                >
                                    <Icon icon=IconName::from_token(&manifest.icon) size=IconSize::Md />
                                    <span>{manifest.display_name.clone()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Show>
    }
}
