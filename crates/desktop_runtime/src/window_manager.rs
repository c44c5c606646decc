//! Window geometry helpers shared by the reducer and the window renderer.
//!
//! Drag and resize are computed against the pointer position and window geometry captured when
//! the session began, never frame-to-frame, so a missed `mousemove` cannot accumulate drift.

use crate::model::{PointerPosition, ResizeEdge, ResizeState, WindowRecord, WindowRect};

/// Minimum allowed managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 300;
/// Minimum allowed managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 200;
/// Taskbar height reserved below a maximized window.
pub const TASKBAR_HEIGHT: i32 = 60;
/// Origin of the first cascaded window.
pub const CASCADE_ORIGIN: PointerPosition = PointerPosition { x: 100, y: 80 };
/// Per-window cascade offset applied on both axes.
pub const CASCADE_STEP: i32 = 30;

/// Initial rect for a window opened while `open_count` windows already exist.
pub fn cascade_rect(open_count: usize, width: i32, height: i32) -> WindowRect {
    let step = i32::try_from(open_count)
        .unwrap_or(i32::MAX)
        .saturating_mul(CASCADE_STEP);
    WindowRect {
        x: CASCADE_ORIGIN.x.saturating_add(step),
        y: CASCADE_ORIGIN.y.saturating_add(step),
        w: width,
        h: height,
    }
}

/// Top-left corner the window is currently displayed at.
pub fn frame_origin(window: &WindowRecord) -> PointerPosition {
    if window.maximized {
        PointerPosition::default()
    } else {
        PointerPosition {
            x: window.rect.x,
            y: window.rect.y,
        }
    }
}

/// Position of a dragged window given the grab offset recorded at drag start.
pub fn drag_position(pointer: PointerPosition, offset_x: i32, offset_y: i32) -> PointerPosition {
    PointerPosition {
        x: pointer.x - offset_x,
        y: pointer.y - offset_y,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Updates produced by one resize step; `None` means that part did not change.
pub struct ResizeOutcome {
    pub size: Option<(i32, i32)>,
    pub position: Option<(i32, i32)>,
}

/// Applies the pointer delta since resize start to each active edge of `edge`.
///
/// Minimum size is not enforced here; the size update clamps it.
pub fn resize_geometry(
    session: &ResizeState,
    edge: ResizeEdge,
    pointer: PointerPosition,
) -> ResizeOutcome {
    let dx = pointer.x - session.start_x;
    let dy = pointer.y - session.start_y;

    let mut width = session.start_width;
    let mut height = session.start_height;
    let mut x = session.start_window_x;
    let mut y = session.start_window_y;

    if edge.east() {
        width = session.start_width + dx;
    }
    if edge.west() {
        width = session.start_width - dx;
        x = session.start_window_x + dx;
    }
    if edge.south() {
        height = session.start_height + dy;
    }
    if edge.north() {
        height = session.start_height - dy;
        y = session.start_window_y + dy;
    }

    ResizeOutcome {
        size: (width != session.start_width || height != session.start_height)
            .then_some((width, height)),
        position: (x != session.start_window_x || y != session.start_window_y).then_some((x, y)),
    }
}

/// Inline frame style for `window`.
///
/// A maximized window is pinned to the layer origin and fills it above the taskbar while its
/// stored rect is left untouched, so restoring returns to the exact prior geometry.
pub fn window_frame_style(window: &WindowRecord) -> String {
    if window.maximized {
        format!(
            "transform: translate(0px, 0px); width: 100%; height: calc(100% - {TASKBAR_HEIGHT}px); z-index: {};",
            window.z_index
        )
    } else {
        let rect = window.rect;
        format!(
            "transform: translate({}px, {}px); width: {}px; height: {}px; z-index: {};",
            rect.x, rect.y, rect.w, rect.h, window.z_index
        )
    }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::ApplicationId;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowId;

    fn session(edge: ResizeEdge, rect: WindowRect, pointer: PointerPosition) -> ResizeState {
        ResizeState {
            is_resizing: true,
            window_id: Some(WindowId("skills-1".into())),
            direction: Some(edge),
            start_x: pointer.x,
            start_y: pointer.y,
            start_width: rect.w,
            start_height: rect.h,
            start_window_x: rect.x,
            start_window_y: rect.y,
        }
    }

    fn record(rect: WindowRect, maximized: bool) -> WindowRecord {
        WindowRecord {
            id: WindowId("skills-1".into()),
            app_id: ApplicationId::trusted("skills"),
            title: "Skills".into(),
            rect,
            minimized: false,
            maximized,
            is_focused: true,
            z_index: 1001,
        }
    }

    const RECT: WindowRect = WindowRect {
        x: 100,
        y: 80,
        w: 400,
        h: 300,
    };

    #[test]
    fn cascade_steps_thirty_pixels_per_open_window() {
        assert_eq!(cascade_rect(0, 800, 600), WindowRect { x: 100, y: 80, w: 800, h: 600 });
        assert_eq!(cascade_rect(3, 500, 600), WindowRect { x: 190, y: 170, w: 500, h: 600 });
    }

    #[test]
    fn drag_keeps_grab_offset_relative_to_pointer() {
        let start = PointerPosition { x: 150, y: 100 };
        let offset = (start.x - RECT.x, start.y - RECT.y);
        let moved = drag_position(PointerPosition { x: 200, y: 140 }, offset.0, offset.1);
        assert_eq!(moved, PointerPosition { x: 150, y: 120 });
    }

    #[test]
    fn west_resize_moves_left_edge_and_shrinks_width() {
        let start = PointerPosition { x: 100, y: 200 };
        let outcome = resize_geometry(
            &session(ResizeEdge::West, RECT, start),
            ResizeEdge::West,
            PointerPosition { x: 140, y: 260 },
        );
        assert_eq!(
            outcome,
            ResizeOutcome {
                size: Some((360, 300)),
                position: Some((140, 80)),
            }
        );
    }

    #[test]
    fn south_east_resize_grows_without_moving() {
        let start = PointerPosition { x: 500, y: 380 };
        let outcome = resize_geometry(
            &session(ResizeEdge::SouthEast, RECT, start),
            ResizeEdge::SouthEast,
            PointerPosition { x: 520, y: 410 },
        );
        assert_eq!(
            outcome,
            ResizeOutcome {
                size: Some((420, 330)),
                position: None,
            }
        );
    }

    #[test]
    fn north_resize_ignores_horizontal_motion() {
        let start = PointerPosition { x: 300, y: 80 };
        let outcome = resize_geometry(
            &session(ResizeEdge::North, RECT, start),
            ResizeEdge::North,
            PointerPosition { x: 900, y: 80 },
        );
        assert_eq!(outcome, ResizeOutcome::default());
    }

    #[test]
    fn maximized_style_pins_frame_without_touching_rect() {
        let window = record(RECT, true);
        assert_eq!(frame_origin(&window), PointerPosition { x: 0, y: 0 });
        assert!(window_frame_style(&window).contains("calc(100% - 60px)"));
        assert_eq!(window.rect, RECT);

        let restored = record(RECT, false);
        assert_eq!(
            window_frame_style(&restored),
            "transform: translate(100px, 80px); width: 400px; height: 300px; z-index: 1001;"
        );
    }
}
