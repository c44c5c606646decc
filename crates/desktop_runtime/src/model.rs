use desktop_app_contract::ApplicationId;
use serde::{Deserialize, Serialize};

/// First stacking value handed out by a fresh [`DesktopState`].
pub const INITIAL_Z_INDEX: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub String);

impl WindowId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app_id: ApplicationId,
    pub title: String,
    pub rect: WindowRect,
    pub minimized: bool,
    pub maximized: bool,
    pub is_focused: bool,
    pub z_index: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopState {
    pub windows: Vec<WindowRecord>,
    pub start_menu_open: bool,
    /// Next stacking value; advanced on every open and focus.
    pub next_z_index: u32,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            start_menu_open: false,
            next_z_index: INITIAL_Z_INDEX,
        }
    }
}

impl DesktopState {
    pub fn focused_window_id(&self) -> Option<&WindowId> {
        self.windows.iter().find(|w| w.is_focused).map(|w| &w.id)
    }

    pub fn window(&self, window_id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == window_id)
    }

    /// Returns `true` while `app_id` has a window that is not minimized.
    pub fn is_app_running(&self, app_id: &ApplicationId) -> bool {
        self.windows
            .iter()
            .any(|w| &w.app_id == app_id && !w.minimized)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenWindowRequest {
    pub app_id: ApplicationId,
    pub title: String,
    pub default_width: i32,
    pub default_height: i32,
    /// Wall-clock milliseconds used to compose the window id.
    pub opened_at_ms: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    pub const fn north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    pub const fn south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    pub const fn east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    pub const fn west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    /// Compass token used for handle classes and cursors (`n`, `se`, ...).
    pub const fn token(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::NorthEast => "ne",
            Self::NorthWest => "nw",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragState {
    pub is_dragging: bool,
    pub window_id: Option<WindowId>,
    pub start_x: i32,
    pub start_y: i32,
    pub offset_x: i32,
    pub offset_y: i32,
}

/// Partial update for [`DragState`]; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragStatePatch {
    pub is_dragging: Option<bool>,
    pub window_id: Option<Option<WindowId>>,
    pub start_x: Option<i32>,
    pub start_y: Option<i32>,
    pub offset_x: Option<i32>,
    pub offset_y: Option<i32>,
}

impl DragState {
    pub fn merge(&mut self, patch: DragStatePatch) {
        if let Some(is_dragging) = patch.is_dragging {
            self.is_dragging = is_dragging;
        }
        if let Some(window_id) = patch.window_id {
            self.window_id = window_id;
        }
        if let Some(start_x) = patch.start_x {
            self.start_x = start_x;
        }
        if let Some(start_y) = patch.start_y {
            self.start_y = start_y;
        }
        if let Some(offset_x) = patch.offset_x {
            self.offset_x = offset_x;
        }
        if let Some(offset_y) = patch.offset_y {
            self.offset_y = offset_y;
        }
    }

    pub fn active_window(&self) -> Option<&WindowId> {
        self.window_id.as_ref().filter(|_| self.is_dragging)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResizeState {
    pub is_resizing: bool,
    pub window_id: Option<WindowId>,
    pub direction: Option<ResizeEdge>,
    pub start_x: i32,
    pub start_y: i32,
    pub start_width: i32,
    pub start_height: i32,
    pub start_window_x: i32,
    pub start_window_y: i32,
}

/// Partial update for [`ResizeState`]; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResizeStatePatch {
    pub is_resizing: Option<bool>,
    pub window_id: Option<Option<WindowId>>,
    pub direction: Option<Option<ResizeEdge>>,
    pub start_x: Option<i32>,
    pub start_y: Option<i32>,
    pub start_width: Option<i32>,
    pub start_height: Option<i32>,
    pub start_window_x: Option<i32>,
    pub start_window_y: Option<i32>,
}

impl ResizeState {
    pub fn merge(&mut self, patch: ResizeStatePatch) {
        if let Some(is_resizing) = patch.is_resizing {
            self.is_resizing = is_resizing;
        }
        if let Some(window_id) = patch.window_id {
            self.window_id = window_id;
        }
        if let Some(direction) = patch.direction {
            self.direction = direction;
        }
        if let Some(start_x) = patch.start_x {
            self.start_x = start_x;
        }
        if let Some(start_y) = patch.start_y {
            self.start_y = start_y;
        }
        if let Some(start_width) = patch.start_width {
            self.start_width = start_width;
        }
        if let Some(start_height) = patch.start_height {
            self.start_height = start_height;
        }
        if let Some(start_window_x) = patch.start_window_x {
            self.start_window_x = start_window_x;
        }
        if let Some(start_window_y) = patch.start_window_y {
            self.start_window_y = start_window_y;
        }
    }

    pub fn active_window(&self) -> Option<(&WindowId, ResizeEdge)> {
        if !self.is_resizing {
            return None;
        }
        Some((self.window_id.as_ref()?, self.direction?))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub drag: DragState,
    pub resize: ResizeState,
}

impl InteractionState {
    pub fn is_active(&self) -> bool {
        self.drag.is_dragging || self.resize.is_resizing
    }
}
