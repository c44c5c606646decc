//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use crate::model::{
    DesktopState, DragState, DragStatePatch, InteractionState, OpenWindowRequest,
    PointerPosition, ResizeEdge, ResizeState, ResizeStatePatch, WindowId, WindowRecord,
};
use crate::window_manager::{
    cascade_rect, drag_position, resize_geometry, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open an app window, or focus/restore the one it already has.
    OpenWindow(OpenWindowRequest),
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Focus (and raise) a window by id.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Toggle the maximized flag; the stored rect is kept.
    MaximizeWindow {
        /// Window to maximize or restore.
        window_id: WindowId,
    },
    /// Overwrite a window's top-left position.
    UpdateWindowPosition {
        /// Window to move.
        window_id: WindowId,
        /// New left edge.
        x: i32,
        /// New top edge.
        y: i32,
    },
    /// Overwrite a window's size, clamped to the minimum window size.
    UpdateWindowSize {
        /// Window to resize.
        window_id: WindowId,
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },
    /// Shallow-merge into the drag session.
    SetDragState(DragStatePatch),
    /// Shallow-merge into the resize session.
    SetResizeState(ResizeStatePatch),
    /// Toggle taskbar behavior for a window (focus, minimize, or restore).
    ToggleTaskbarWindow {
        /// Window associated with the taskbar button.
        window_id: WindowId,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Begin dragging a window by its title bar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
        /// Displayed top-left of the window frame at drag start.
        origin: PointerPosition,
    },
    /// Begin resizing a window.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Pointer moved while a drag or resize session may be active.
    PointerMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Pointer released anywhere; ends any active session.
    PointerUp,
}

impl DesktopAction {
    /// Window addressed by this action, if it targets one directly.
    pub fn target_window(&self) -> Option<&WindowId> {
        match self {
            Self::CloseWindow { window_id }
            | Self::FocusWindow { window_id }
            | Self::MinimizeWindow { window_id }
            | Self::MaximizeWindow { window_id }
            | Self::UpdateWindowPosition { window_id, .. }
            | Self::UpdateWindowSize { window_id, .. }
            | Self::ToggleTaskbarWindow { window_id }
            | Self::BeginMove { window_id, .. }
            | Self::BeginResize { window_id, .. } => Some(window_id),
            Self::OpenWindow(_)
            | Self::SetDragState(_)
            | Self::SetResizeState(_)
            | Self::ToggleStartMenu
            | Self::CloseStartMenu
            | Self::PointerMove { .. }
            | Self::PointerUp => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Move DOM focus into the newly focused window frame.
    FocusWindowInput(WindowId),
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// Every action is total: an id that matches no window leaves all window records as they were,
/// except that focusing an unknown id still clears focus and consumes a stacking value.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow(req) => {
            let existing = state
                .windows
                .iter()
                .find(|w| w.app_id == req.app_id && !w.minimized)
                .or_else(|| state.windows.iter().find(|w| w.app_id == req.app_id))
                .map(|w| w.id.clone());

            let window_id = match existing {
                Some(window_id) => window_id,
                None => {
                    let window_id = next_window_id(state, &req);
                    let rect =
                        cascade_rect(state.windows.len(), req.default_width, req.default_height);
                    state.windows.push(WindowRecord {
                        id: window_id.clone(),
                        app_id: req.app_id,
                        title: req.title,
                        rect,
                        minimized: false,
                        maximized: false,
                        is_focused: false,
                        z_index: 0,
                    });
                    window_id
                }
            };
            if focus_window_internal(state, &window_id) {
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        DesktopAction::CloseWindow { window_id } => {
            state.windows.retain(|w| w.id != window_id);
            end_sessions_for(interaction, &window_id);
        }
        DesktopAction::FocusWindow { window_id } => {
            if focus_window_internal(state, &window_id) {
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        DesktopAction::MinimizeWindow { window_id } => {
            if let Some(window) = find_window_mut(state, &window_id) {
                window.minimized = true;
                window.is_focused = false;
            }
        }
        DesktopAction::MaximizeWindow { window_id } => {
            if let Some(window) = find_window_mut(state, &window_id) {
                window.maximized = !window.maximized;
            }
        }
        DesktopAction::UpdateWindowPosition { window_id, x, y } => {
            set_window_position(state, &window_id, x, y);
        }
        DesktopAction::UpdateWindowSize {
            window_id,
            width,
            height,
        } => {
            set_window_size(state, &window_id, width, height);
        }
        DesktopAction::SetDragState(patch) => interaction.drag.merge(patch),
        DesktopAction::SetResizeState(patch) => interaction.resize.merge(patch),
        DesktopAction::ToggleTaskbarWindow { window_id } => {
            let Some((minimized, focused)) = state
                .window(&window_id)
                .map(|w| (w.minimized, w.is_focused))
            else {
                return effects;
            };
            if focused && !minimized {
                if let Some(window) = find_window_mut(state, &window_id) {
                    window.minimized = true;
                    window.is_focused = false;
                }
            } else if focus_window_internal(state, &window_id) {
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::BeginMove {
            window_id,
            pointer,
            origin,
        } => {
            let Some(maximized) = state.window(&window_id).map(|w| w.maximized) else {
                return effects;
            };
            focus_window_internal(state, &window_id);
            // Maximized frames are pinned to the origin and only take focus.
            if maximized {
                return effects;
            }
            interaction.resize = ResizeState::default();
            interaction.drag = DragState::default();
            interaction.drag.merge(DragStatePatch {
                is_dragging: Some(true),
                window_id: Some(Some(window_id)),
                start_x: Some(pointer.x),
                start_y: Some(pointer.y),
                offset_x: Some(pointer.x - origin.x),
                offset_y: Some(pointer.y - origin.y),
            });
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer,
        } => {
            let Some(rect) = state.window(&window_id).map(|w| w.rect) else {
                return effects;
            };
            focus_window_internal(state, &window_id);
            interaction.drag = DragState::default();
            interaction.resize = ResizeState::default();
            interaction.resize.merge(ResizeStatePatch {
                is_resizing: Some(true),
                window_id: Some(Some(window_id)),
                direction: Some(Some(edge)),
                start_x: Some(pointer.x),
                start_y: Some(pointer.y),
                start_width: Some(rect.w),
                start_height: Some(rect.h),
                start_window_x: Some(rect.x),
                start_window_y: Some(rect.y),
            });
        }
        DesktopAction::PointerMove { pointer } => {
            if let Some(window_id) = interaction.drag.active_window() {
                let position =
                    drag_position(pointer, interaction.drag.offset_x, interaction.drag.offset_y);
                set_window_position(state, window_id, position.x, position.y);
            } else if let Some((window_id, edge)) = interaction.resize.active_window() {
                let outcome = resize_geometry(&interaction.resize, edge, pointer);
                if let Some((width, height)) = outcome.size {
                    set_window_size(state, window_id, width, height);
                }
                if let Some((x, y)) = outcome.position {
                    set_window_position(state, window_id, x, y);
                }
            }
        }
        DesktopAction::PointerUp => {
            interaction.drag = DragState::default();
            interaction.resize = ResizeState::default();
        }
    }

    effects
}

/// Composes `{app_id}-{opened_at_ms}`, suffixing `-N` when that token is already taken.
fn next_window_id(state: &DesktopState, req: &OpenWindowRequest) -> WindowId {
    let base = format!("{}-{}", req.app_id, req.opened_at_ms);
    let taken = |candidate: &str| state.windows.iter().any(|w| w.id.as_str() == candidate);
    if !taken(&base) {
        return WindowId(base);
    }
    let mut suffix = 2_u32;
    loop {
        let candidate = format!("{base}-{suffix}");
        if !taken(&candidate) {
            return WindowId(candidate);
        }
        suffix += 1;
    }
}

fn find_window_mut<'a>(
    state: &'a mut DesktopState,
    window_id: &WindowId,
) -> Option<&'a mut WindowRecord> {
    state.windows.iter_mut().find(|w| &w.id == window_id)
}

/// Focuses `window_id` with a fresh top stacking value, unminimizing it.
///
/// Every other window loses focus and the counter advances even when the id is unknown.
/// Returns `true` when the window exists.
fn focus_window_internal(state: &mut DesktopState, window_id: &WindowId) -> bool {
    let z_index = state.next_z_index;
    state.next_z_index = state.next_z_index.saturating_add(1);

    let mut found = false;
    for window in &mut state.windows {
        if &window.id == window_id {
            window.is_focused = true;
            window.minimized = false;
            window.z_index = z_index;
            found = true;
        } else {
            window.is_focused = false;
        }
    }
    found
}

fn set_window_position(state: &mut DesktopState, window_id: &WindowId, x: i32, y: i32) {
    if let Some(window) = find_window_mut(state, window_id) {
        window.rect.x = x;
        window.rect.y = y;
    }
}

fn set_window_size(state: &mut DesktopState, window_id: &WindowId, width: i32, height: i32) {
    if let Some(window) = find_window_mut(state, window_id) {
        window.rect = crate::model::WindowRect {
            w: width,
            h: height,
            ..window.rect
        }
        .clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
    }
}

fn end_sessions_for(interaction: &mut InteractionState, window_id: &WindowId) {
    if interaction.drag.window_id.as_ref() == Some(window_id) {
        interaction.drag = DragState::default();
    }
    if interaction.resize.window_id.as_ref() == Some(window_id) {
        interaction.resize = ResizeState::default();
    }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::ApplicationId;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowRect;
    use crate::window_manager::frame_origin;

    fn request(app_id: &str, opened_at_ms: u64) -> OpenWindowRequest {
        OpenWindowRequest {
            app_id: ApplicationId::trusted(app_id),
            title: app_id.to_string(),
            default_width: 400,
            default_height: 300,
            opened_at_ms,
        }
    }

    fn open(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        app_id: &str,
        opened_at_ms: u64,
    ) -> WindowId {
        let effects = reduce_desktop(
            state,
            interaction,
            DesktopAction::OpenWindow(request(app_id, opened_at_ms)),
        );
        match effects.as_slice() {
            [RuntimeEffect::FocusWindowInput(window_id)] => window_id.clone(),
            other => panic!("unexpected effects {other:?}"),
        }
    }

    fn window<'a>(state: &'a DesktopState, window_id: &WindowId) -> &'a WindowRecord {
        state.window(window_id).expect("window exists")
    }

    fn focused_count(state: &DesktopState) -> usize {
        state.windows.iter().filter(|w| w.is_focused).count()
    }

    fn at(x: i32, y: i32) -> PointerPosition {
        PointerPosition { x, y }
    }

    #[test]
    fn open_window_cascades_and_focuses_new_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, "experience", 10);
        let second = open(&mut state, &mut interaction, "skills", 20);

        assert_eq!(first, WindowId("experience-10".into()));
        assert_eq!(state.focused_window_id(), Some(&second));
        assert_eq!(window(&state, &first).rect, WindowRect { x: 100, y: 80, w: 400, h: 300 });
        assert_eq!(window(&state, &second).rect, WindowRect { x: 130, y: 110, w: 400, h: 300 });
        assert_eq!(window(&state, &first).z_index, 1000);
        assert_eq!(window(&state, &second).z_index, 1001);
        assert_eq!(state.next_z_index, 1002);
    }

    #[test]
    fn opening_same_app_twice_focuses_existing_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, "experience", 10);
        open(&mut state, &mut interaction, "skills", 11);
        let again = open(&mut state, &mut interaction, "experience", 12);

        assert_eq!(again, first);
        assert_eq!(state.windows.len(), 2);
        assert_eq!(state.focused_window_id(), Some(&first));
        assert_eq!(window(&state, &first).z_index, 1002);
    }

    #[test]
    fn reopening_minimized_app_restores_instead_of_duplicating() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let w1 = open(&mut state, &mut interaction, "skills", 1);
        let _w2 = open(&mut state, &mut interaction, "projects", 2);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                window_id: w1.clone(),
            },
        );
        assert!(window(&state, &w1).minimized);

        let reopened = open(&mut state, &mut interaction, "skills", 3);
        assert_eq!(reopened, w1);
        assert_eq!(state.windows.len(), 2);
        assert!(!window(&state, &w1).minimized);
        assert!(window(&state, &w1).is_focused);
        assert_eq!(focused_count(&state), 1);
    }

    #[test]
    fn open_leaves_start_menu_visibility_alone() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        reduce_desktop(&mut state, &mut interaction, DesktopAction::ToggleStartMenu);
        open(&mut state, &mut interaction, "contact", 1);
        assert!(state.start_menu_open);

        reduce_desktop(&mut state, &mut interaction, DesktopAction::CloseStartMenu);
        open(&mut state, &mut interaction, "contact", 2);
        assert!(!state.start_menu_open);
    }

    #[test]
    fn colliding_window_ids_receive_numeric_suffix() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, "skills", 5);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: first },
        );
        state.windows[0].app_id = ApplicationId::trusted("projects");
        let second = open(&mut state, &mut interaction, "skills", 5);
        assert_eq!(second, WindowId("skills-5-2".into()));
    }

    #[test]
    fn focus_raises_window_above_all_others() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, "experience", 1);
        open(&mut state, &mut interaction, "skills", 2);
        open(&mut state, &mut interaction, "projects", 3);

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow {
                window_id: first.clone(),
            },
        );

        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(first.clone())]);
        assert_eq!(focused_count(&state), 1);
        let top = window(&state, &first).z_index;
        assert!(state
            .windows
            .iter()
            .filter(|w| w.id != first)
            .all(|w| w.z_index < top));
    }

    #[test]
    fn focus_on_unknown_id_clears_focus_and_consumes_counter() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, "experience", 1);
        let before = state.next_z_index;
        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow {
                window_id: WindowId("missing".into()),
            },
        );

        assert!(effects.is_empty());
        assert_eq!(focused_count(&state), 0);
        assert_eq!(state.next_z_index, before + 1);
    }

    #[test]
    fn close_removes_window_without_refocusing() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, "experience", 1);
        let second = open(&mut state, &mut interaction, "skills", 2);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: second },
        );

        assert_eq!(state.windows.len(), 1);
        assert!(!window(&state, &first).is_focused);

        let before = state.clone();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                window_id: WindowId("missing".into()),
            },
        );
        assert_eq!(state, before);
    }

    #[test]
    fn minimize_only_touches_target() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, "experience", 1);
        let second = open(&mut state, &mut interaction, "skills", 2);
        let untouched = window(&state, &first).clone();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                window_id: second.clone(),
            },
        );

        assert!(window(&state, &second).minimized);
        assert!(!window(&state, &second).is_focused);
        assert_eq!(window(&state, &first), &untouched);
    }

    #[test]
    fn maximize_toggle_twice_restores_exact_rect() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, "projects", 1);
        let original = window(&state, &win).rect;
        for _ in 0..2 {
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::MaximizeWindow {
                    window_id: win.clone(),
                },
            );
            assert_eq!(window(&state, &win).rect, original);
        }
        assert!(!window(&state, &win).maximized);
    }

    #[test]
    fn dragging_maximized_window_keeps_restore_rect() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, "skills", 1);
        let before = window(&state, &win).rect;
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeWindow {
                window_id: win.clone(),
            },
        );
        let origin = frame_origin(window(&state, &win));
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: win.clone(),
                pointer: at(400, 10),
                origin,
            },
        );
        assert!(!interaction.is_active());
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::PointerMove {
                pointer: at(402, 11),
            },
        );
        reduce_desktop(&mut state, &mut interaction, DesktopAction::PointerUp);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeWindow {
                window_id: win.clone(),
            },
        );

        assert!(!window(&state, &win).maximized);
        assert_eq!(window(&state, &win).rect, before);
    }

    #[test]
    fn size_updates_are_clamped_per_axis() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, "contact", 1);
        for (width, height, expected) in [
            (-50, -10, (300, 200)),
            (120, 640, (300, 640)),
            (900, 150, (900, 200)),
            (301, 201, (301, 201)),
        ] {
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::UpdateWindowSize {
                    window_id: win.clone(),
                    width,
                    height,
                },
            );
            let rect = window(&state, &win).rect;
            assert_eq!((rect.w, rect.h), expected);
        }
    }

    #[test]
    fn position_updates_are_not_clamped() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, "contact", 1);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateWindowPosition {
                window_id: win.clone(),
                x: -400,
                y: -20,
            },
        );
        let rect = window(&state, &win).rect;
        assert_eq!((rect.x, rect.y), (-400, -20));
    }

    #[test]
    fn drag_session_moves_window_relative_to_grab_point() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, "skills", 1);
        assert_eq!(window(&state, &win).rect.x, 100);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: win.clone(),
                pointer: at(150, 100),
                origin: at(100, 80),
            },
        );
        assert!(interaction.drag.is_dragging);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::PointerMove {
                pointer: at(200, 140),
            },
        );
        let rect = window(&state, &win).rect;
        assert_eq!((rect.x, rect.y), (150, 120));

        reduce_desktop(&mut state, &mut interaction, DesktopAction::PointerUp);
        assert_eq!(interaction, InteractionState::default());
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::PointerMove {
                pointer: at(500, 500),
            },
        );
        assert_eq!(window(&state, &win).rect, rect);
    }

    #[test]
    fn west_resize_moves_left_edge() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, "skills", 1);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: win.clone(),
                edge: ResizeEdge::West,
                pointer: at(100, 200),
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::PointerMove {
                pointer: at(140, 200),
            },
        );

        assert_eq!(
            window(&state, &win).rect,
            WindowRect {
                x: 140,
                y: 80,
                w: 360,
                h: 300
            }
        );
    }

    #[test]
    fn resize_below_minimum_clamps_size_but_keeps_moving_edge() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, "skills", 1);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: win.clone(),
                edge: ResizeEdge::NorthWest,
                pointer: at(100, 80),
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::PointerMove {
                pointer: at(300, 250),
            },
        );

        let rect = window(&state, &win).rect;
        assert_eq!((rect.w, rect.h), (300, 200));
        assert_eq!((rect.x, rect.y), (300, 250));
    }

    #[test]
    fn sessions_are_mutually_exclusive() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, "skills", 1);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: win.clone(),
                pointer: at(0, 0),
                origin: at(100, 80),
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: win.clone(),
                edge: ResizeEdge::East,
                pointer: at(500, 200),
            },
        );
        assert!(!interaction.drag.is_dragging);
        assert!(interaction.resize.is_resizing);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: win,
                pointer: at(0, 0),
                origin: at(100, 80),
            },
        );
        assert!(interaction.drag.is_dragging);
        assert!(!interaction.resize.is_resizing);
    }

    #[test]
    fn begin_move_on_unknown_window_is_ignored() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, "skills", 1);
        let before = state.clone();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: WindowId("missing".into()),
                pointer: at(0, 0),
                origin: at(0, 0),
            },
        );
        assert_eq!(state, before);
        assert!(!interaction.is_active());
    }

    #[test]
    fn closing_dragged_window_ends_its_session() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, "skills", 1);
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: win.clone(),
                pointer: at(0, 0),
                origin: at(100, 80),
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: win },
        );
        assert!(!interaction.is_active());
    }

    #[test]
    fn taskbar_toggle_minimizes_if_focused_and_restores_if_minimized() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, "experience", 1);
        let second = open(&mut state, &mut interaction, "skills", 2);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarWindow {
                window_id: second.clone(),
            },
        );
        assert!(window(&state, &second).minimized);
        assert_eq!(focused_count(&state), 0);

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarWindow {
                window_id: second.clone(),
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(second.clone())]);
        assert!(!window(&state, &second).minimized);
        assert!(window(&state, &second).is_focused);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarWindow {
                window_id: first.clone(),
            },
        );
        assert!(window(&state, &first).is_focused);
        assert!(!window(&state, &first).minimized);
    }

    #[test]
    fn repeated_opens_keep_one_visible_window_per_app() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let apps = ["experience", "skills", "projects", "contact"];
        for step in 0..24_u64 {
            let app_id = apps[(step as usize * 7) % apps.len()];
            let window_id = open(&mut state, &mut interaction, app_id, step);
            if step % 3 == 0 {
                reduce_desktop(
                    &mut state,
                    &mut interaction,
                    DesktopAction::MinimizeWindow { window_id },
                );
            }
            for app in apps {
                let visible = state
                    .windows
                    .iter()
                    .filter(|w| w.app_id.as_str() == app && !w.minimized)
                    .count();
                assert!(visible <= 1, "{app} has {visible} visible windows");
            }
            assert!(focused_count(&state) <= 1);
            assert!(state.windows.iter().all(|w| !(w.minimized && w.is_focused)));
        }
        assert_eq!(state.windows.len(), apps.len());
    }

    #[test]
    fn drag_and_resize_patches_merge_shallowly() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::SetDragState(DragStatePatch {
                start_x: Some(12),
                ..DragStatePatch::default()
            }),
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::SetResizeState(ResizeStatePatch {
                direction: Some(Some(ResizeEdge::South)),
                ..ResizeStatePatch::default()
            }),
        );
        assert_eq!(interaction.drag.start_x, 12);
        assert!(!interaction.drag.is_dragging);
        assert_eq!(interaction.resize.direction, Some(ResizeEdge::South));
        assert!(!interaction.resize.is_resizing);
    }
}
