// ABOUTME: Flat row/column of panes separated by draggable dividers.
// ABOUTME: Owns the pane/split sequences and drives layout, dragging, and content moves.

use ms_core::{Config, Orientation, Point, DEFAULT_DIVIDER_SIZE};

use crate::drag::{committed_ratio, ActiveDrag, DragBounds, DragState};
use crate::error::PaneError;
use crate::geometry::{self, Layout};
use crate::host::{PaneHost, Scheduling};
use crate::scheduler::LayoutScheduler;

/// Requested extent for one pane in [`SplitPane::set_pane_sizes`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneSize {
    /// Exact pixel extent along the primary axis
    Fixed(i32),
    /// Share evenly whatever the fixed panes leave over
    Fill,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitPaneOptions {
    pub orientation: Orientation,
    pub divider_size: i32,
}

impl Default for SplitPaneOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            divider_size: DEFAULT_DIVIDER_SIZE,
        }
    }
}

impl From<&Config> for SplitPaneOptions {
    fn from(config: &Config) -> Self {
        Self {
            orientation: config.orientation,
            divider_size: config.divider_size,
        }
    }
}

#[derive(Debug)]
struct Split<D> {
    /// Cumulative fraction of pane space up to and including this divider
    ratio: f64,
    divider: D,
    /// Offset from the most recent layout pass
    offset: i32,
}

/// Resizable split layout over a host environment.
///
/// Invariants: `panes.len() == splits.len() + 1` and split ratios ascend.
pub struct SplitPane<H: PaneHost> {
    host: H,
    orientation: Orientation,
    divider_size: i32,
    panes: Vec<Option<H::Content>>,
    splits: Vec<Split<H::Divider>>,
    scheduler: LayoutScheduler,
    drag: DragState,
    last_layout: Option<Layout>,
}

impl<H: PaneHost> SplitPane<H> {
    pub fn new(mut host: H, options: SplitPaneOptions) -> Self {
        host.apply_orientation(options.orientation);
        Self {
            host,
            orientation: options.orientation,
            divider_size: options.divider_size,
            panes: vec![None],
            splits: Vec::new(),
            scheduler: LayoutScheduler::new(),
            drag: DragState::Idle,
            last_layout: None,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consume the pane, returning the host and every remaining divider
    pub fn into_parts(self) -> (H, Vec<H::Divider>) {
        let dividers = self.splits.into_iter().map(|split| split.divider).collect();
        (self.host, dividers)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn divider_size(&self) -> i32 {
        self.divider_size
    }

    pub fn pane_count(&self) -> usize {
        self.panes.len()
    }

    pub fn split_count(&self) -> usize {
        self.splits.len()
    }

    pub fn ratios(&self) -> Vec<f64> {
        self.splits.iter().map(|split| split.ratio).collect()
    }

    pub fn divider_offsets(&self) -> Vec<i32> {
        self.splits.iter().map(|split| split.offset).collect()
    }

    pub fn is_layout_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn last_layout(&self) -> Option<&Layout> {
        self.last_layout.as_ref()
    }

    // -- Model -----------------------------------------------------------------

    /// Insert a divider at `ratio`, returning the index of the new empty pane
    /// that sits just before it.
    pub fn add_split(
        &mut self,
        ratio: f64,
        content: Option<H::Content>,
    ) -> Result<usize, PaneError> {
        if !(ratio > 0.0 && ratio < 1.0) {
            return Err(PaneError::InvalidRatio(ratio));
        }
        if self.splits.iter().any(|split| split.ratio == ratio) {
            return Err(PaneError::DuplicateRatio(ratio));
        }

        self.abort_drag();

        let ix = self
            .splits
            .iter()
            .position(|split| ratio < split.ratio)
            .unwrap_or(self.splits.len());

        let divider = self.host.create_divider();
        self.splits.insert(
            ix,
            Split {
                ratio,
                divider,
                offset: 0,
            },
        );
        self.panes.insert(ix, None);
        tracing::debug!("Added split {} at ratio {}, panes: {}", ix, ratio, self.panes.len());

        if content.is_some() {
            self.set_widget_at_index(ix, content)?;
        }

        self.layout();
        Ok(ix)
    }

    /// Remove pane `ix` along with its adjacent divider.
    ///
    /// The last remaining pane is never removed; its content is cleared instead.
    pub fn remove_widget_at_index(
        &mut self,
        ix: usize,
    ) -> Result<Option<H::Content>, PaneError> {
        self.check_index(ix)?;

        if self.panes.len() == 1 {
            return self.set_widget_at_index(0, None);
        }

        self.abort_drag();

        let content = self.panes.remove(ix);
        if let Some(content) = &content {
            self.host.detach(content);
        }

        let victim = if ix == self.panes.len() { ix - 1 } else { ix };
        let split = self.splits.remove(victim);
        self.host.destroy_divider(split.divider);
        tracing::debug!("Removed pane {} and split {}, panes: {}", ix, victim, self.panes.len());

        self.layout();
        Ok(content)
    }

    pub fn get_widget_at_index(&self, ix: usize) -> Result<Option<&H::Content>, PaneError> {
        self.check_index(ix)?;
        Ok(self.panes[ix].as_ref())
    }

    /// Put `content` into pane `ix`, returning what was there
    pub fn set_widget_at_index(
        &mut self,
        ix: usize,
        content: Option<H::Content>,
    ) -> Result<Option<H::Content>, PaneError> {
        self.check_index(ix)?;

        if self.panes[ix] == content {
            return Ok(content);
        }

        let previous = self.panes[ix].take();
        if let Some(old) = &previous {
            self.host.detach(old);
        }
        if let Some(new) = &content {
            self.host.attach(new);
        }
        self.panes[ix] = content;

        self.layout();
        Ok(previous)
    }

    /// Resize every pane at once. Fixed sizes must be positive.
    ///
    /// Returns `Ok(false)` without touching anything when the sizes can't fill
    /// the available space exactly, or there is no space at all. There is no
    /// best-effort fallback.
    pub fn set_pane_sizes(&mut self, sizes: &[PaneSize]) -> Result<bool, PaneError> {
        if sizes.len() != self.panes.len() {
            return Err(PaneError::SizeCountMismatch {
                expected: self.panes.len(),
                actual: sizes.len(),
            });
        }

        let mut requested: i64 = 0;
        let mut fill = 0usize;
        for size in sizes {
            match size {
                PaneSize::Fixed(px) if *px <= 0 => return Err(PaneError::InvalidSize(*px)),
                PaneSize::Fixed(px) => requested += i64::from(*px),
                PaneSize::Fill => fill += 1,
            }
        }

        let available = i64::from(geometry::available_space(
            self.orientation,
            self.host.container_size(),
            self.divider_size,
            self.splits.len(),
        ));
        let remaining = available - requested;

        if available <= 0 || (fill == 0 && remaining != 0) || (fill > 0 && remaining <= 0) {
            tracing::warn!(
                "Rejected pane sizes: available={} requested={} fill={}",
                available,
                requested,
                fill
            );
            return Ok(false);
        }

        self.abort_drag();

        let fill_extent = if fill > 0 {
            remaining as f64 / fill as f64
        } else {
            0.0
        };
        let mut last = 0.0;
        for (split, size) in self.splits.iter_mut().zip(sizes) {
            let extent = match size {
                PaneSize::Fixed(px) => f64::from(*px),
                PaneSize::Fill => fill_extent,
            };
            last += extent / available as f64;
            split.ratio = last;
        }

        self.layout();
        Ok(true)
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.abort_drag();
        self.orientation = orientation;
        self.scheduler.request_style_update();
        self.layout();
    }

    fn check_index(&self, ix: usize) -> Result<(), PaneError> {
        if ix >= self.panes.len() {
            return Err(PaneError::IndexOutOfRange {
                index: ix,
                len: self.panes.len(),
            });
        }
        Ok(())
    }

    // -- Layout ----------------------------------------------------------------

    /// Request a layout pass. Requests made before the pass runs coalesce.
    pub fn layout(&mut self) {
        if !self.scheduler.request() {
            return;
        }
        match self.host.schedule_layout() {
            Scheduling::Immediate => self.layout_immediately(),
            Scheduling::Deferred => {}
        }
    }

    /// Entry point for hosts that answered [`Scheduling::Deferred`]
    pub fn run_scheduled_layout(&mut self) {
        if self.scheduler.is_pending() {
            self.layout_immediately();
        }
    }

    /// Recompute and push bounds now, dropping any pending request
    pub fn layout_immediately(&mut self) {
        self.scheduler.begin_pass();

        if self.scheduler.take_style_update() {
            self.host.apply_orientation(self.orientation);
        }

        let size = self.host.container_size();
        let ratios = self.ratios();
        let layout = geometry::compute(self.orientation, size, self.divider_size, &ratios);
        tracing::debug!(
            "Layout pass: {}x{} {:?}, {} panes",
            size.width,
            size.height,
            self.orientation,
            layout.panes.len()
        );

        for (split, &offset) in self.splits.iter_mut().zip(&layout.dividers) {
            split.offset = offset;
            self.host.set_divider_offset(&split.divider, offset);
        }
        for (content, bounds) in self.panes.iter().zip(&layout.panes) {
            if let Some(content) = content {
                self.host.set_bounds(content, *bounds);
            }
        }

        if self.scheduler.take_resize_notification() {
            self.host.panes_resized(&layout);
        }
        self.last_layout = Some(layout);
    }

    // -- Dragging --------------------------------------------------------------

    /// Start dragging `target`. Returns false if it isn't one of this pane's dividers.
    pub fn pointer_down(&mut self, target: &H::Divider, pointer: Point) -> bool {
        if self.drag.is_dragging() {
            return false;
        }
        let Some(split_ix) = self.splits.iter().position(|split| split.divider == *target) else {
            return false;
        };

        let offsets = self.divider_offsets();
        let primary = self.orientation.primary(self.host.container_size());
        let bounds = DragBounds::for_divider(split_ix, &offsets, primary, self.divider_size);
        let start_pointer = self.orientation.primary_coord(pointer);
        let drag = ActiveDrag::begin(split_ix, bounds, start_pointer, offsets[split_ix]);

        self.host.capture_pointer(self.orientation.resize_cursor());
        self.host.show_ghost(drag.candidate);
        tracing::debug!(
            "Drag started on split {} at {}, bounds {}..={}",
            split_ix,
            drag.candidate,
            bounds.min,
            bounds.max
        );

        self.drag = DragState::Dragging(drag);
        true
    }

    /// Move the ghost with the pointer. Model state is untouched until release.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let DragState::Dragging(drag) = &mut self.drag else {
            return false;
        };
        let candidate = drag.update(self.orientation.primary_coord(pointer));
        tracing::trace!("Ghost moved to {}", candidate);
        self.host.move_ghost(candidate);
        true
    }

    /// Commit the dragged divider's new ratio
    pub fn pointer_up(&mut self) -> bool {
        let DragState::Dragging(drag) = std::mem::take(&mut self.drag) else {
            return false;
        };
        self.host.release_pointer();
        self.host.hide_ghost();

        let ix = drag.split_ix;
        let min_split = if ix == 0 { 0.0 } else { self.splits[ix - 1].ratio };
        let max_split = self.splits.get(ix + 1).map_or(1.0, |split| split.ratio);
        let ratio = committed_ratio(drag.bounds, drag.candidate, min_split, max_split);
        self.splits[ix].ratio = ratio;
        tracing::debug!("Drag committed split {} at ratio {}", ix, ratio);

        self.scheduler.request_resize_notification();
        self.layout();
        true
    }

    /// Losing focus mid-drag commits wherever the ghost currently is
    pub fn focus_lost(&mut self) -> bool {
        self.pointer_up()
    }

    fn abort_drag(&mut self) {
        if let DragState::Dragging(drag) = std::mem::take(&mut self.drag) {
            self.host.release_pointer();
            self.host.hide_ghost();
            tracing::debug!("Drag on split {} aborted by structural change", drag.split_ix);
        }
    }
}
