//! Desktop shell UI composition and interaction surfaces.

mod desktop_icons;
mod dock;
mod start_menu;
mod taskbar;
mod window;

use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::*;

use self::{
    desktop_icons::DesktopIcons, dock::Dock, start_menu::StartMenu, taskbar::DesktopTaskbar,
    window::DesktopWindow,
};

use crate::{
    model::{InteractionState, PointerPosition},
    reducer::DesktopAction,
};
use desktop_app_contract::ApplicationId;
use system_ui::{DesktopBackdrop, DesktopWindowLayer, IconName};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

fn app_icon_name(app_id: &ApplicationId) -> IconName {
    crate::apps::app_manifest(app_id)
        .map(|manifest| IconName::from_token(&manifest.icon))
        .unwrap_or(IconName::Folder)
}

fn pointer_from_mouse_event(ev: &web_sys::MouseEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

/// Window-level `mousemove`/`mouseup` listeners for one drag or resize session.
///
/// Dropping the guard removes both listeners.
struct PointerSessionListeners {
    mousemove: Option<WindowListenerHandle>,
    mouseup: Option<WindowListenerHandle>,
}

impl PointerSessionListeners {
    fn install(runtime: DesktopRuntimeContext) -> Self {
        let mousemove = window_event_listener(ev::mousemove, move |ev| {
            runtime.dispatch_action(DesktopAction::PointerMove {
                pointer: pointer_from_mouse_event(&ev),
            });
        });
        let mouseup = window_event_listener(ev::mouseup, move |_| {
            runtime.dispatch_action(DesktopAction::PointerUp);
        });
        Self {
            mousemove: Some(mousemove),
            mouseup: Some(mouseup),
        }
    }
}

impl Drop for PointerSessionListeners {
    fn drop(&mut self) {
        if let Some(handle) = self.mousemove.take() {
            handle.remove();
        }
        if let Some(handle) = self.mouseup.take() {
            handle.remove();
        }
    }
}

/// Keeps pointer listeners installed exactly while a drag or resize session is active.
fn install_pointer_session_tracking(runtime: DesktopRuntimeContext) {
    let session_active =
        create_memo(move |_| runtime.interaction.with(InteractionState::is_active));
    let listeners = store_value::<Option<PointerSessionListeners>>(None);

    create_effect(move |_| {
        let active = session_active.get();
        listeners.update_value(|slot| match (active, slot.is_some()) {
            (true, false) => *slot = Some(PointerSessionListeners::install(runtime)),
            (false, true) => *slot = None,
            _ => {}
        });
    });

    on_cleanup(move || {
        listeners.update_value(|slot| *slot = None);
    });
}

#[component]
/// Renders the full desktop shell UI: backdrop, icons, windows, start menu, taskbar, and dock.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    install_pointer_session_tracking(runtime);

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell os-container"
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
            data-ui-interacting=move || runtime.interaction.with(|i| i.is_active()).to_string()
        >
            <DesktopBackdrop
                layout_class="desktop"
                on_click=Callback::new(move |_| {
                    if state.with_untracked(|s| s.start_menu_open) {
                        runtime.dispatch_action(DesktopAction::CloseStartMenu);
                    }
                })
            >
                <DesktopIcons />
            </DesktopBackdrop>

            <DesktopWindowLayer layout_class="windows-layer">
                <For
                    each=move || state.with(|s| s.windows.iter().map(|w| w.id.clone()).collect::<Vec<_>>())
                    key=|window_id| window_id.clone()
                    let:window_id
                >
                    <DesktopWindow window_id=window_id />
                </For>
            </DesktopWindowLayer>

            <StartMenu />
            <DesktopTaskbar />
            <Dock />
        </div>
    }
}
