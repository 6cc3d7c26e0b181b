// ABOUTME: Split pane layout management.
// ABOUTME: A flat row or column of panes sized by cumulative ratios and resized by dragging dividers.

pub mod drag;
mod error;
pub mod geometry;
mod host;
mod pane;
mod scheduler;

pub use drag::{ActiveDrag, DragBounds, DragState};
pub use error::{ErrorKind, PaneError};
pub use geometry::Layout;
pub use host::{PaneHost, Scheduling};
pub use pane::{PaneSize, SplitPane, SplitPaneOptions};
pub use scheduler::LayoutScheduler;
