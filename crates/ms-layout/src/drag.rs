// ABOUTME: Divider drag state machine.
// ABOUTME: Clamps the live candidate position and converts the release point into a ratio.

/// Primary-axis range a divider may be dragged within
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragBounds {
    pub min: i32,
    pub max: i32,
}

impl DragBounds {
    /// Bounds for divider `ix` given every divider's current offset.
    ///
    /// A divider can travel from the trailing edge of its left neighbour to the
    /// leading edge of its right neighbour, or to the container edges.
    pub fn for_divider(
        ix: usize,
        offsets: &[i32],
        primary_extent: i32,
        divider_size: i32,
    ) -> Self {
        let min = if ix == 0 {
            0
        } else {
            offsets[ix - 1] + divider_size
        };
        let max = if ix + 1 == offsets.len() {
            primary_extent - divider_size
        } else {
            offsets[ix + 1] - divider_size
        };
        Self { min, max }
    }

    /// Clamp into range; `max` wins if the range is inverted
    pub fn clamp(&self, pos: i32) -> i32 {
        pos.max(self.min).min(self.max)
    }

    /// Position of `candidate` within the range as 0..=1, with an empty range reading as 0
    pub fn fraction(&self, candidate: i32) -> f64 {
        let span = self.max - self.min;
        if span == 0 {
            return 0.0;
        }
        f64::from(candidate - self.min) / f64::from(span)
    }
}

/// Ratio for a released divider, interpolated between its neighbours' ratios
pub fn committed_ratio(bounds: DragBounds, candidate: i32, min_split: f64, max_split: f64) -> f64 {
    min_split + (max_split - min_split) * bounds.fraction(candidate)
}

/// A drag in progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveDrag {
    pub split_ix: usize,
    pub bounds: DragBounds,
    pub start_pointer: i32,
    pub start_offset: i32,
    pub candidate: i32,
}

impl ActiveDrag {
    pub fn begin(
        split_ix: usize,
        bounds: DragBounds,
        start_pointer: i32,
        start_offset: i32,
    ) -> Self {
        Self {
            split_ix,
            bounds,
            start_pointer,
            start_offset,
            candidate: start_offset,
        }
    }

    /// Track the pointer; returns the new candidate offset
    pub fn update(&mut self, pointer: i32) -> i32 {
        self.candidate = self
            .bounds
            .clamp(self.start_offset + (pointer - self.start_pointer));
        self.candidate
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(ActiveDrag),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }
}
