// ABOUTME: Converts cumulative split ratios into pixel bounds.
// ABOUTME: Floors every pane but the last, which absorbs the rounding remainder.

use ms_core::{Orientation, Rect, Size};

/// Pixel placement for every pane and divider of a container
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Layout {
    /// One rect per pane, in pane order
    pub panes: Vec<Rect>,
    /// Primary-axis offset of each divider's leading edge
    pub dividers: Vec<i32>,
}

impl Layout {
    pub fn pane_extents(&self, orientation: Orientation) -> Vec<i32> {
        self.panes
            .iter()
            .map(|rect| rect.primary_extent(orientation))
            .collect()
    }
}

/// Space left for panes once every divider is subtracted
pub fn available_space(
    orientation: Orientation,
    size: Size,
    divider_size: i32,
    split_count: usize,
) -> i32 {
    orientation.primary(size) - split_count as i32 * divider_size
}

/// Lay out `ratios.len() + 1` panes along the orientation's primary axis.
///
/// `ratios` are cumulative fractions of the space left after dividers. When the
/// dividers alone exceed the container the result carries zero or negative
/// extents; callers get whatever the arithmetic produces.
pub fn compute(
    orientation: Orientation,
    size: Size,
    divider_size: i32,
    ratios: &[f64],
) -> Layout {
    let primary = orientation.primary(size);
    let cross = orientation.secondary(size);
    let total_space = available_space(orientation, size, divider_size, ratios.len());

    if total_space < 0 {
        tracing::warn!(
            "Container too small for {} dividers: primary={} divider_size={}",
            ratios.len(),
            primary,
            divider_size
        );
    }

    let mut panes = Vec::with_capacity(ratios.len() + 1);
    let mut dividers = Vec::with_capacity(ratios.len());
    let mut pos = 0;
    let mut last_ratio = 0.0;

    for &ratio in ratios {
        let extent = (f64::from(total_space) * (ratio - last_ratio)).floor() as i32;
        panes.push(Rect::along(orientation, pos, extent, cross));
        dividers.push(pos + extent);
        pos += extent + divider_size;
        last_ratio = ratio;
    }

    panes.push(Rect::along(orientation, pos, primary - pos, cross));

    Layout { panes, dividers }
}
