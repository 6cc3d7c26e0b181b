// ABOUTME: Headless pane host that logs every capability call.
// ABOUTME: Defers layout to an explicit frame loop, like a window's redraw request.

use ms_core::{CursorStyle, Orientation, Rect, Size};
use ms_layout::{Layout, PaneHost, Scheduling};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DividerId(u32);

pub struct ConsoleHost {
    size: Size,
    next_divider: u32,
    dividers: Vec<DividerId>,
    attached: Vec<String>,
    frame_requested: bool,
    frames: usize,
    resize_notifications: usize,
}

impl ConsoleHost {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            next_divider: 0,
            dividers: Vec::new(),
            attached: Vec::new(),
            frame_requested: false,
            frames: 0,
            resize_notifications: 0,
        }
    }

    /// Live dividers in creation order
    pub fn dividers(&self) -> &[DividerId] {
        &self.dividers
    }

    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }

    pub fn take_frame_request(&mut self) -> bool {
        std::mem::take(&mut self.frame_requested)
    }

    pub fn end_frame(&mut self) {
        self.frames += 1;
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn resize_notifications(&self) -> usize {
        self.resize_notifications
    }
}

impl PaneHost for ConsoleHost {
    type Content = String;
    type Divider = DividerId;

    fn container_size(&self) -> Size {
        self.size
    }

    fn attach(&mut self, content: &String) {
        tracing::info!("Attached {}", content);
        self.attached.push(content.clone());
    }

    fn detach(&mut self, content: &String) {
        tracing::info!("Detached {}", content);
        self.attached.retain(|c| c != content);
    }

    fn set_bounds(&mut self, content: &String, bounds: Rect) {
        tracing::debug!(
            "Bounds for {}: {},{} {}x{}",
            content,
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height
        );
    }

    fn create_divider(&mut self) -> DividerId {
        self.next_divider += 1;
        let id = DividerId(self.next_divider);
        self.dividers.push(id);
        id
    }

    fn destroy_divider(&mut self, divider: DividerId) {
        self.dividers.retain(|d| *d != divider);
    }

    fn set_divider_offset(&mut self, divider: &DividerId, offset: i32) {
        tracing::debug!("Divider {} at {}", divider.0, offset);
    }

    fn show_ghost(&mut self, offset: i32) {
        tracing::debug!("Ghost shown at {}", offset);
    }

    fn move_ghost(&mut self, offset: i32) {
        tracing::debug!("Ghost moved to {}", offset);
    }

    fn hide_ghost(&mut self) {
        tracing::debug!("Ghost hidden");
    }

    fn capture_pointer(&mut self, cursor: CursorStyle) {
        tracing::debug!("Pointer captured ({:?})", cursor);
    }

    fn release_pointer(&mut self) {
        tracing::debug!("Pointer released");
    }

    fn apply_orientation(&mut self, orientation: Orientation) {
        tracing::info!("Container styled {}", orientation.class_name());
    }

    fn schedule_layout(&mut self) -> Scheduling {
        self.frame_requested = true;
        Scheduling::Deferred
    }

    fn panes_resized(&mut self, layout: &Layout) {
        self.resize_notifications += 1;
        tracing::info!("Panes resized: {} panes laid out", layout.panes.len());
    }
}
