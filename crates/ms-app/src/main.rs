// ABOUTME: Main application entry point.
// ABOUTME: Drives a split pane over a headless host and prints each frame's layout.

mod host;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use host::ConsoleHost;
use ms_core::{Config, Point};
use ms_layout::{PaneSize, SplitPane, SplitPaneOptions};

/// Run scheduled layout passes until the host stops asking for frames
fn pump_frames(pane: &mut SplitPane<ConsoleHost>) {
    while pane.host_mut().take_frame_request() {
        pane.run_scheduled_layout();
        pane.host_mut().end_frame();
    }
}

fn print_layout(label: &str, pane: &SplitPane<ConsoleHost>) {
    println!("== {} ({:?}, {} panes)", label, pane.orientation(), pane.pane_count());
    for ix in 0..pane.pane_count() {
        let name = pane
            .get_widget_at_index(ix)
            .ok()
            .flatten()
            .map(String::as_str)
            .unwrap_or("<empty>");
        let bounds = pane
            .last_layout()
            .and_then(|layout| layout.panes.get(ix).copied())
            .unwrap_or_default();
        println!(
            "  pane {:>2} {:<10} x={:<5} y={:<5} w={:<5} h={:<5}",
            ix, name, bounds.x, bounds.y, bounds.width, bounds.height
        );
    }
    println!("  ratios:   {:?}", pane.ratios());
    println!("  dividers: {:?}", pane.divider_offsets());
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting multisplit");

    let config = match Config::default_path() {
        Some(path) => Config::load_or_create(&path).unwrap_or_else(|e| {
            tracing::warn!("Using default config, {}: {}", path.display(), e);
            Config::default()
        }),
        None => Config::default(),
    };
    tracing::info!(
        "Loaded config: {:?}, divider_size={}",
        config.orientation,
        config.divider_size
    );

    let host = ConsoleHost::new(config.container_size());
    let mut pane = SplitPane::new(host, SplitPaneOptions::from(&config));

    pane.set_widget_at_index(0, Some("pane-0".to_string()))?;
    for (n, ratio) in config.initial_splits.iter().enumerate() {
        pane.add_split(*ratio, Some(format!("pane-{}", n + 1)))
            .with_context(|| format!("initial split {} is invalid", ratio))?;
    }
    pump_frames(&mut pane);
    print_layout("initial", &pane);

    if pane.split_count() > 0 {
        let divider = pane
            .host()
            .dividers()
            .first()
            .copied()
            .context("split without a divider")?;
        // Drags are relative, so the press point only anchors the motion
        let start = Point::new(0, 0);

        pane.pointer_down(&divider, start);
        for step in 1..=4 {
            pane.pointer_move(Point::new(start.x + step * 15, start.y + step * 15));
        }
        pane.pointer_up();
        pump_frames(&mut pane);
        print_layout("after drag", &pane);
    }

    let sizes: Vec<PaneSize> = (0..pane.pane_count())
        .map(|ix| if ix == 0 { PaneSize::Fixed(120) } else { PaneSize::Fill })
        .collect();
    if pane.set_pane_sizes(&sizes)? {
        pump_frames(&mut pane);
        print_layout("first pane fixed at 120px", &pane);
    } else {
        tracing::warn!("Container too small for a 120px first pane");
    }

    pane.set_orientation(pane.orientation().toggled());
    pump_frames(&mut pane);
    print_layout("orientation toggled", &pane);

    let removed = pane.remove_widget_at_index(0)?;
    pump_frames(&mut pane);
    print_layout(
        &format!("removed {}", removed.as_deref().unwrap_or("<empty>")),
        &pane,
    );

    tracing::info!(
        "Done after {} frames, {} attached, {} resize notifications",
        pane.host().frames(),
        pane.host().attached_count(),
        pane.host().resize_notifications()
    );
    Ok(())
}
