use desktop_app_contract::{AppMountContext, AppMountFn};
use leptos::ev::MouseEvent;
use leptos::logging;
use leptos::*;
use system_ui::{
    Icon, IconName, IconSize, WindowBody, WindowControlButton, WindowControls, WindowFrame,
    WindowTitle, WindowTitleBar,
};

use super::{app_icon_name, pointer_from_mouse_event, use_desktop_runtime};
use crate::{
    apps,
    effect_executor::window_dom_id,
    model::{ResizeEdge, WindowId},
    reducer::DesktopAction,
    window_manager::{frame_origin, window_frame_style},
};

/// Primary (left) mouse button.
const PRIMARY_BUTTON: i16 = 0;

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let id = store_value(window_id);

    let window = create_memo(move |_| {
        id.with_value(|window_id| runtime.state.with(|s| s.window(window_id).cloned()))
    });

    let focus = move |_: MouseEvent| {
        let should_focus = window.with_untracked(|w| w.as_ref().is_some_and(|w| !w.is_focused));
        if should_focus {
            runtime.dispatch_action(DesktopAction::FocusWindow {
                window_id: id.get_value(),
            });
        }
    };
    let begin_move = move |ev: MouseEvent| {
        if ev.button() != PRIMARY_BUTTON {
            return;
        }
        let Some(origin) = window.with_untracked(|w| w.as_ref().map(frame_origin)) else {
            return;
        };
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id: id.get_value(),
            pointer: pointer_from_mouse_event(&ev),
            origin,
        });
    };
    let toggle_maximize = move |_: MouseEvent| {
        runtime.dispatch_action(DesktopAction::MaximizeWindow {
            window_id: id.get_value(),
        });
    };
    let minimize = move |_: MouseEvent| {
        runtime.dispatch_action(DesktopAction::MinimizeWindow {
            window_id: id.get_value(),
        });
    };
    let close = move |_: MouseEvent| {
        runtime.dispatch_action(DesktopAction::CloseWindow {
            window_id: id.get_value(),
        });
    };

    let style = Signal::derive(move || {
        window.with(|w| match w {
            Some(w) if w.minimized => format!("{} display: none;", window_frame_style(w)),
            Some(w) => window_frame_style(w),
            None => String::new(),
        })
    });
    let title = Signal::derive(move || window.with(|w| w.as_ref().map(|w| w.title.clone()).unwrap_or_default()));
    let focused = Signal::derive(move || window.with(|w| w.as_ref().is_some_and(|w| w.is_focused)));
    let maximized = Signal::derive(move || window.with(|w| w.as_ref().is_some_and(|w| w.maximized)));
    let icon = id.with_value(|window_id| {
        runtime
            .state
            .with_untracked(|s| s.window(window_id).map(|w| app_icon_name(&w.app_id)))
            .unwrap_or(IconName::Folder)
    });

    view! {
        <WindowFrame
            id=id.with_value(window_dom_id)
            layout_class="window"
            style=style
            aria_label=title
            focused=focused
            maximized=maximized
            on_mousedown=Callback::new(focus)
        >
            <WindowTitleBar
                layout_class="window-header"
                on_mousedown=Callback::new(begin_move)
                on_dblclick=Callback::new(toggle_maximize)
            >
                <WindowTitle>
                    <Icon icon=icon size=IconSize::Sm />
                    <span class="window-title-text">{move || title.get()}</span>
                </WindowTitle>
                <WindowControls>
                    <WindowControlButton
                        layout_class="minimize"
                        aria_label="Minimize"
                        on_click=Callback::new(minimize)
                    >
                        <Icon icon=IconName::WindowMinimize size=IconSize::Xs />
                    </WindowControlButton>
                    <WindowControlButton
                        layout_class="maximize"
                        aria_label=MaybeSignal::derive(move || {
                            if maximized.get() { "Restore" } else { "Maximize" }.to_string()
                        })
                        on_click=Callback::new(toggle_maximize)
                    >
                        {move || {
                            let glyph = if maximized.get() {
                                IconName::WindowRestore
                            } else {
                                IconName::WindowMaximize
                            };
                            view! { <Icon icon=glyph size=IconSize::Xs /> }
                        }}
                    </WindowControlButton>
                    <WindowControlButton
                        layout_class="close"
                        aria_label="Close"
                        on_click=Callback::new(close)
                    >
                        <Icon icon=IconName::Dismiss size=IconSize::Xs />
                    </WindowControlButton>
                </WindowControls>
            </WindowTitleBar>

            <WindowBody layout_class="window-content">
                <WindowContents window_id=id.get_value() />
            </WindowBody>

            <Show when=move || !maximized.get() fallback=|| ()>
                {ResizeEdge::ALL
                    .into_iter()
                    .map(|edge| view! { <WindowResizeHandle window_id=id.get_value() edge=edge /> })
                    .collect_view()}
            </Show>
        </WindowFrame>
    }
}

#[component]
fn WindowResizeHandle(window_id: WindowId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let id = store_value(window_id);

    let on_mousedown = move |ev: MouseEvent| {
        if ev.button() != PRIMARY_BUTTON {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id: id.get_value(),
            edge,
            pointer: pointer_from_mouse_event(&ev),
        });
    };

    view! {
        <div
            class=format!("resize-handle resize-{}", edge.token())
            data-resize-edge=edge.token()
            aria-hidden="true"
            on:mousedown=on_mousedown
        ></div>
    }
}

/// Resolves the app's deferred module once and mounts it for this window.
#[component]
fn WindowContents(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let Some(app_id) = runtime
        .state
        .with_untracked(|s| s.window(&window_id).map(|w| w.app_id.clone()))
    else {
        return view! { <p class="window-missing">"Closed"</p> }.into_view();
    };

    let module = match apps::app_module(&app_id) {
        Ok(module) => module,
        Err(err) => {
            logging::warn!("window `{window_id}` cannot mount: {err}");
            return view! { <p class="window-error" role="alert">{err.to_string()}</p> }
                .into_view();
        }
    };

    let mount_fn = create_local_resource(|| (), move |_| module.load());
    let context = store_value(AppMountContext {
        app_id,
        window_id: window_id.to_string(),
    });

    view! {
        <Suspense fallback=|| view! { <div class="window-loading">"Loading..."</div> }>
            {move || {
                mount_fn
                    .get()
                    .map(|mount: AppMountFn| mount(context.get_value()))
            }}
        </Suspense>
    }
    .into_view()
}
