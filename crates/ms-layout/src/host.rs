// ABOUTME: Capabilities a split pane needs from its embedding environment.
// ABOUTME: Content attachment, bounds, divider/ghost visuals, pointer capture, scheduling.

use ms_core::{CursorStyle, Orientation, Rect, Size};

use crate::geometry::Layout;

/// What the host did with a layout request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheduling {
    /// Run the pass right away, inside the request
    Immediate,
    /// The host will call [`SplitPane::run_scheduled_layout`] on its next tick
    ///
    /// [`SplitPane::run_scheduled_layout`]: crate::SplitPane::run_scheduled_layout
    Deferred,
}

/// Environment boundary of a [`SplitPane`](crate::SplitPane).
///
/// Content handles are owned elsewhere; the pane only toggles their membership
/// and positions them. Divider handles are created for the pane and handed back
/// through [`PaneHost::destroy_divider`] when their split goes away.
///
/// Callbacks only ever see the host, never the pane, so they cannot mutate the
/// pane mid-operation. A host that wants to react to a callback by changing the
/// pane (for example from [`PaneHost::panes_resized`]) records the change and
/// applies it once the pane call returns. The pending flag is cleared before a
/// pass runs, so a change applied after the pass schedules a fresh one.
pub trait PaneHost {
    type Content: Clone + PartialEq;
    type Divider: PartialEq;

    /// Current pixel extent of the container
    fn container_size(&self) -> Size;

    fn attach(&mut self, content: &Self::Content);
    fn detach(&mut self, content: &Self::Content);

    /// Position and size content relative to the container
    fn set_bounds(&mut self, content: &Self::Content, bounds: Rect);

    fn create_divider(&mut self) -> Self::Divider;
    fn destroy_divider(&mut self, divider: Self::Divider);

    /// Move a divider to a primary-axis offset
    fn set_divider_offset(&mut self, divider: &Self::Divider, offset: i32);

    fn show_ghost(&mut self, offset: i32);
    fn move_ghost(&mut self, offset: i32);
    fn hide_ghost(&mut self);

    /// Route all pointer input to the pane until released
    fn capture_pointer(&mut self, cursor: CursorStyle);
    fn release_pointer(&mut self);

    /// Restyle the container for a new orientation
    fn apply_orientation(&mut self, _orientation: Orientation) {}

    /// Asked once per coalesced layout request
    fn schedule_layout(&mut self) -> Scheduling {
        Scheduling::Immediate
    }

    /// Fired after a layout pass that followed a divider drag
    fn panes_resized(&mut self, _layout: &Layout) {}
}
