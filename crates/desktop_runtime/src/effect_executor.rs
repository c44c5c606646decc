//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::{model::WindowId, reducer::RuntimeEffect, runtime_context::DesktopRuntimeContext};

/// DOM id of the frame element hosting `window_id`.
pub fn window_dom_id(window_id: &WindowId) -> String {
    format!("desktop-window-{window_id}")
}

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Take the queue before running so effects that dispatch enqueue a fresh batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            match effect {
                RuntimeEffect::FocusWindowInput(window_id) => focus_window_frame(&window_id),
            }
        }
    });
}

fn focus_window_frame(window_id: &WindowId) {
    let dom_id = window_dom_id(window_id);
    // The frame may not be mounted yet when the window was just created.
    let focus = move || {
        let Some(element) = document().get_element_by_id(&dom_id) else {
            return;
        };
        if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
            let _ = element.focus();
        }
    };
    set_timeout(focus, std::time::Duration::ZERO);
}
