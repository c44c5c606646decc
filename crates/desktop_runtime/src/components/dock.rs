use leptos::ev::MouseEvent;
use leptos::html::Div;
use leptos::*;
use system_ui::{Icon, IconName, IconSize};
use wasm_bindgen::JsCast;

use super::use_desktop_runtime;
use crate::{
    apps,
    dock::{pointer_distance, DockMetrics, DOCK_GLYPH_RATIO},
};

fn dock_icon_centers(container: &web_sys::Element) -> Vec<(f64, f64)> {
    let Ok(nodes) = container.query_selector_all(".dock-icon") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|idx| nodes.item(idx))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .map(|element| {
            let rect = element.get_bounding_client_rect();
            (
                rect.left() + rect.width() / 2.0,
                rect.top() + rect.height() / 2.0,
            )
        })
        .collect()
}

fn icon_style(metrics: &DockMetrics, scale: f64) -> String {
    let size = metrics.icon_size(scale);
    format!(
        "width: {size:.2}px; height: {size:.2}px; transform: translateY({:.2}px);",
        0.0 - metrics.icon_lift(size)
    )
}

#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let metrics = DockMetrics::default();
    let entries = apps::dock_apps();
    let scales = create_rw_signal(vec![1.0_f64; entries.len()]);
    let dock_ref = create_node_ref::<Div>();

    let on_mousemove = move |ev: MouseEvent| {
        let Some(dock) = dock_ref.get_untracked() else {
            return;
        };
        let pointer = (f64::from(ev.client_x()), f64::from(ev.client_y()));
        let centers = dock_icon_centers(dock.unchecked_ref::<web_sys::Element>());
        scales.update(|scales| {
            for (scale, center) in scales.iter_mut().zip(centers) {
                *scale = metrics.magnification(pointer_distance(pointer, center));
            }
        });
    };
    let on_mouseleave = move |_: MouseEvent| {
        scales.update(|scales| scales.iter_mut().for_each(|scale| *scale = 1.0));
    };

    view! {
        <div
            node_ref=dock_ref
            class="dock"
            role="toolbar"
            aria-label="Application dock"
            on:mousemove=on_mousemove
            on:mouseleave=on_mouseleave
        >
            <div class="dock-container">
                {entries
                    .into_iter()
                    .enumerate()
                    .map(|(index, manifest)| {
                        let app_id = store_value(manifest.app_id.clone());
                        let name = manifest.display_name.clone();
                        let icon = IconName::from_token(&manifest.icon);
                        let scale = Signal::derive(move || {
                            scales.with(|scales| scales.get(index).copied().unwrap_or(1.0))
                        });
                        let running = Signal::derive(move || {
                            app_id.with_value(|app_id| {
                                runtime.state.with(|s| s.is_app_running(app_id))
                            })
                        });
                        view! {
                            <button
                                type="button"
                                class="dock-icon"
                                aria-label=name.clone()
                                style=move || icon_style(&metrics, scale.get())
                                on:click=move |_| app_id.with_value(|app_id| runtime.open_app(app_id))
                            >
                                {move || {
                                    let glyph = metrics.icon_size(scale.get()) * DOCK_GLYPH_RATIO;
                                    view! { <Icon icon=icon size=IconSize::Px(glyph.round() as u16) /> }
                                }}
                                <Show when=move || running.get() fallback=|| ()>
                                    <span class="dock-running-indicator"></span>
                                </Show>
                                <span class="dock-tooltip">{name}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_style_lifts_grown_icons() {
        let metrics = DockMetrics::default();
        assert_eq!(
            icon_style(&metrics, 1.0),
            "width: 48.00px; height: 48.00px; transform: translateY(0.00px);"
        );
        assert_eq!(
            icon_style(&metrics, 1.5),
            "width: 72.00px; height: 72.00px; transform: translateY(-12.00px);"
        );
    }
}
