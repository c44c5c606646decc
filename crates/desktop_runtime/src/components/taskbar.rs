use std::time::Duration;

use leptos::*;
use system_ui::{Icon, IconName, IconSize, Taskbar, TaskbarRegion, TaskbarSection};

use super::{app_icon_name, use_desktop_runtime};
use crate::{
    model::{DesktopState, WindowId, WindowRecord},
    reducer::DesktopAction,
};

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TaskbarClockSnapshot {
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

impl TaskbarClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                month: date.get_month() + 1,
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                month: 1,
                day: 1,
                hour: 0,
                minute: 0,
            }
        }
    }

    /// Twelve-hour time with a zero-padded hour, e.g. `09:05 AM`.
    fn time_label(self) -> String {
        let suffix = if self.hour < 12 { "AM" } else { "PM" };
        let hour = match self.hour % 12 {
            0 => 12,
            hour => hour,
        };
        format!("{hour:02}:{:02} {suffix}", self.minute)
    }

    /// Abbreviated month and day, e.g. `Oct 16`.
    fn date_label(self) -> String {
        let month = usize::try_from(self.month.saturating_sub(1))
            .ok()
            .and_then(|idx| MONTH_ABBREVIATIONS.get(idx))
            .copied()
            .unwrap_or("???");
        format!("{month} {}", self.day)
    }
}

/// Windows in opening order, as shown on the taskbar.
fn taskbar_windows(state: &DesktopState) -> Vec<WindowRecord> {
    state.windows.clone()
}

fn taskbar_window_button_dom_id(window_id: &WindowId) -> String {
    format!("taskbar-window-button-{window_id}")
}

#[component]
pub(super) fn DesktopTaskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock_now = create_rw_signal(TaskbarClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(TaskbarClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let start_open = Signal::derive(move || state.with(|s| s.start_menu_open));

    view! {
        <Taskbar layout_class="taskbar" aria_label="Taskbar">
            <TaskbarSection region=TaskbarRegion::Start>
                <button
                    type="button"
                    id="start-button"
                    class=move || if start_open.get() { "start-button active" } else { "start-button" }
                    aria-label="Start menu"
                    aria-haspopup="menu"
                    aria-expanded=move || start_open.get().to_string()
                    on:mousedown=move |ev| ev.stop_propagation()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        runtime.dispatch_action(DesktopAction::ToggleStartMenu);
                    }
                >
                    <Icon icon=IconName::Menu size=IconSize::Md />
                </button>
            </TaskbarSection>

            <TaskbarSection region=TaskbarRegion::Center layout_class="taskbar-center">
                <span class="taskbar-title">"Portfolio OS"</span>
                <div class="taskbar-windows" role="group" aria-label="Open windows">
                    <For
                        each=move || state.with(taskbar_windows)
                        key=|win| (win.id.clone(), win.is_focused, win.minimized, win.title.clone())
                        let:win
                    >
                        <TaskbarWindowButton window=win />
                    </For>
                </div>
            </TaskbarSection>

            <TaskbarSection region=TaskbarRegion::Tray layout_class="taskbar-tray">
                <div class="taskbar-clock" aria-live="off">
                    <div class="taskbar-time">{move || clock_now.get().time_label()}</div>
                    <div class="taskbar-date">{move || clock_now.get().date_label()}</div>
                </div>
            </TaskbarSection>
        </Taskbar>
    }
}

#[component]
fn TaskbarWindowButton(window: WindowRecord) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let WindowRecord {
        id,
        app_id,
        title,
        is_focused,
        minimized,
        ..
    } = window;
    let class_name = match (is_focused, minimized) {
        (true, _) => "taskbar-window-button focused",
        (false, true) => "taskbar-window-button minimized",
        (false, false) => "taskbar-window-button",
    };
    let dom_id = taskbar_window_button_dom_id(&id);

    view! {
        <button
            type="button"
            id=dom_id
            class=class_name
            aria-pressed=is_focused.to_string()
            title=title.clone()
            on:click=move |_| {
                runtime.dispatch_action(DesktopAction::ToggleTaskbarWindow {
                    window_id: id.clone(),
                });
            }
        >
            <Icon icon=app_icon_name(&app_id) size=IconSize::Sm />
            <span class="taskbar-window-label">{title}</span>
        </button>
    }
}
