//! Property checks for split pane structure and geometry.
//!
//! Random add/remove/resize streams must keep one more pane than splits, ratios
//! strictly ascending inside (0, 1), and exactly one live divider per split.
//! Layouts must cover the container's primary extent with no gap or overlap.

use ms_core::{CursorStyle, Orientation, Rect, Size};
use ms_layout::geometry::compute;
use ms_layout::{ErrorKind, PaneHost, PaneSize, SplitPane, SplitPaneOptions};
use proptest::prelude::*;

#[derive(Debug, Default)]
struct CountingHost {
    next_divider: usize,
    live_dividers: Vec<usize>,
    attached: Vec<u32>,
}

impl PaneHost for CountingHost {
    type Content = u32;
    type Divider = usize;

    fn container_size(&self) -> Size {
        Size::new(1208, 400)
    }

    fn attach(&mut self, content: &u32) {
        self.attached.push(*content);
    }

    fn detach(&mut self, content: &u32) {
        self.attached.retain(|c| c != content);
    }

    fn set_bounds(&mut self, _content: &u32, _bounds: Rect) {}

    fn create_divider(&mut self) -> usize {
        self.next_divider += 1;
        self.live_dividers.push(self.next_divider);
        self.next_divider
    }

    fn destroy_divider(&mut self, divider: usize) {
        self.live_dividers.retain(|d| *d != divider);
    }

    fn set_divider_offset(&mut self, _divider: &usize, _offset: i32) {}
    fn show_ghost(&mut self, _offset: i32) {}
    fn move_ghost(&mut self, _offset: i32) {}
    fn hide_ghost(&mut self) {}
    fn capture_pointer(&mut self, _cursor: CursorStyle) {}
    fn release_pointer(&mut self) {}
}

#[derive(Debug, Clone)]
enum Op {
    Add(f64, Option<u32>),
    Remove(usize),
    /// One entry per possible pane, `None` meaning fill; truncated to the pane count
    Resize(Vec<Option<i32>>),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-0.2f64..1.2, proptest::option::of(0u32..1000)).prop_map(|(r, c)| Op::Add(r, c)),
        (0usize..12).prop_map(Op::Remove),
        prop::collection::vec(proptest::option::of(-50i32..900), 64).prop_map(Op::Resize),
    ]
}

fn assert_structure(pane: &SplitPane<CountingHost>) {
    assert_eq!(pane.pane_count(), pane.split_count() + 1);
    assert_eq!(pane.host().live_dividers.len(), pane.split_count());

    let ratios = pane.ratios();
    for pair in ratios.windows(2) {
        assert!(pair[0] < pair[1], "ratios not ascending: {:?}", ratios);
    }
    if let (Some(first), Some(last)) = (ratios.first(), ratios.last()) {
        assert!(*first > 0.0);
        assert!(*last < 1.0);
    }

    let filled = (0..pane.pane_count())
        .filter(|ix| pane.get_widget_at_index(*ix).unwrap().is_some())
        .count();
    assert_eq!(pane.host().attached.len(), filled);
}

proptest! {
    #[test]
    fn test_random_mutations_preserve_structure(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let mut pane = SplitPane::new(CountingHost::default(), SplitPaneOptions::default());
        let mut next_content = 10_000u32;

        for op in ops {
            let before = (pane.ratios(), pane.pane_count());
            match op {
                Op::Add(ratio, content) => {
                    // Content handles must be unique to be tracked as attached
                    let content = content.map(|_| {
                        next_content += 1;
                        next_content
                    });
                    if let Err(err) = pane.add_split(ratio, content) {
                        prop_assert_eq!(err.kind(), ErrorKind::InvalidArgument);
                        prop_assert_eq!((pane.ratios(), pane.pane_count()), before);
                    }
                }
                Op::Resize(entries) => {
                    let sizes: Vec<PaneSize> = entries
                        .iter()
                        .take(pane.pane_count())
                        .map(|entry| entry.map_or(PaneSize::Fill, PaneSize::Fixed))
                        .collect();
                    match pane.set_pane_sizes(&sizes) {
                        Ok(true) => {}
                        Ok(false) => prop_assert_eq!((pane.ratios(), pane.pane_count()), before),
                        Err(err) => {
                            prop_assert_eq!(err.kind(), ErrorKind::InvalidArgument);
                            prop_assert_eq!((pane.ratios(), pane.pane_count()), before);
                        }
                    }
                }
                Op::Remove(ix) => {
                    match pane.remove_widget_at_index(ix) {
                        Ok(_) => prop_assert!(pane.pane_count() >= 1),
                        Err(err) => {
                            prop_assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
                            prop_assert_eq!((pane.ratios(), pane.pane_count()), before);
                        }
                    }
                }
            }
            assert_structure(&pane);
        }
    }

    #[test]
    fn test_layout_covers_primary_extent(
        mut ratios in prop::collection::vec(0.001f64..0.999, 0..8),
        width in 100i32..4000,
        height in 1i32..2000,
        horizontal in any::<bool>(),
    ) {
        ratios.sort_by(|a, b| a.partial_cmp(b).unwrap());
        ratios.dedup();

        let orientation = if horizontal { Orientation::Horizontal } else { Orientation::Vertical };
        let size = Size::new(width, height);
        let layout = compute(orientation, size, 8, &ratios);

        prop_assert_eq!(layout.panes.len(), ratios.len() + 1);
        let extents = layout.pane_extents(orientation);
        let covered: i32 = extents.iter().sum::<i32>() + ratios.len() as i32 * 8;
        prop_assert_eq!(covered, orientation.primary(size));

        for (ix, divider) in layout.dividers.iter().enumerate() {
            let pane = layout.panes[ix];
            let leading = match orientation {
                Orientation::Vertical => pane.x,
                Orientation::Horizontal => pane.y,
            };
            prop_assert_eq!(*divider, leading + extents[ix]);
        }
    }
}
