//! Drag-and-drop event routing
//!
//! The drop target tracks a transient "drag is active" flag for styling. It is
//! independent of the upload status and never survives a drop. Every drag event
//! must have its default handling suppressed, or the browser navigates away to the
//! dropped file.

/// What the caller must do with the native event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragDisposition {
    /// Call `preventDefault()` and `stopPropagation()`
    PreventDefault,
}

#[derive(Debug, Default, Clone)]
pub struct DropZone {
    drag_active: bool,
}

impl DropZone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    pub fn drag_enter(&mut self) -> DragDisposition {
        self.drag_active = true;
        DragDisposition::PreventDefault
    }

    pub fn drag_over(&mut self) -> DragDisposition {
        self.drag_active = true;
        DragDisposition::PreventDefault
    }

    pub fn drag_leave(&mut self) -> DragDisposition {
        self.drag_active = false;
        DragDisposition::PreventDefault
    }

    /// Clear the flag and hand the dropped files on to the orchestrator
    pub fn drop<F>(&mut self, files: Vec<F>) -> (DragDisposition, Vec<F>) {
        self.drag_active = false;
        (DragDisposition::PreventDefault, files)
    }

    /// The drop target and file input are disabled while a request is in flight
    pub fn is_interactive(is_loading: bool) -> bool {
        !is_loading
    }
}
