#![forbid(unsafe_code)]

//! Property tests for the spectrum layout.
//!
//! Validates, for any catalog size and any config with room for a diagonal:
//! - block x strictly increases and y strictly decreases in id order
//! - background zones are gapless and cover `[padding, width - padding/2]`
//! - the connector has one point per block, at the block centers
//! - the transition x lies between its two neighbouring centers (or is the canvas middle)
//! - layout never panics and always yields one block per level

use proptest::prelude::*;
use spectrum_core::{Level, LevelCatalog, LevelId};
use spectrum_render::layout::{LayoutConfig, layout_levels};
use spectrum_render::text::DeterministicTextMeasurer;

const EPS: f64 = 1e-6;

fn levels(n: usize) -> Vec<Level> {
    (1..=n as u32)
        .map(|id| Level {
            id: LevelId(id),
            title: format!("Level {id}"),
            short_title: format!("Level {id} title"),
            task_profile: vec![],
            examples: vec![],
            ai_tools: vec![],
            engineering_involvement: vec![],
            key_characteristics: vec![],
            color: "#3b82f6".to_string(),
        })
        .collect()
}

/// Configs whose horizontal and vertical spans are both positive.
fn config_strategy() -> impl Strategy<Value = LayoutConfig> {
    (
        0.0f64..80.0,
        0.0f64..60.0,
        10.0f64..120.0,
        10.0f64..80.0,
        0.0f64..40.0,
        0usize..6,
        1.0f64..600.0,
        1.0f64..400.0,
    )
        .prop_map(
            |(padding, block_offset, block_width, block_height, block_y_offset, k, extra_w, extra_h)| {
                LayoutConfig {
                    width: 2.0 * padding + block_offset + block_width + extra_w,
                    height: 2.0 * padding + block_height + block_y_offset + extra_h,
                    padding,
                    block_width,
                    block_height,
                    block_offset,
                    block_y_offset,
                    transition_after_index: k,
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn blocks_climb_the_diagonal(n in 0usize..12, config in config_strategy()) {
        let layout = layout_levels(&levels(n), &config, &DeterministicTextMeasurer::default()).unwrap();
        prop_assert_eq!(layout.levels.len(), n);

        for (i, block) in layout.levels.iter().enumerate() {
            prop_assert_eq!(block.id, LevelId(i as u32 + 1));
            prop_assert_eq!(block.width, config.block_width);
            prop_assert_eq!(block.height, config.block_height);
        }
        for pair in layout.levels.windows(2) {
            prop_assert!(pair[1].x > pair[0].x);
            prop_assert!(pair[1].y < pair[0].y);
        }
        if let Some(first) = layout.levels.first() {
            prop_assert!((first.x - config.anchor_x()).abs() < EPS);
            prop_assert!((first.y - config.anchor_y()).abs() < EPS);
        }
        if n >= 2 {
            let last = &layout.levels[n - 1];
            prop_assert!((last.right() - (config.width - config.padding)).abs() < EPS);
            prop_assert!((last.y - config.padding).abs() < EPS);
        }
    }

    #[test]
    fn zones_partition_the_plot_area(n in 1usize..12, config in config_strategy()) {
        let layout = layout_levels(&levels(n), &config, &DeterministicTextMeasurer::default()).unwrap();
        let zones = &layout.zones;
        prop_assert_eq!(zones.len(), n);
        prop_assert!((zones[0].x - config.padding).abs() < EPS);
        prop_assert!((zones[n - 1].right() - (config.width - config.padding / 2.0)).abs() < EPS);
        for pair in zones.windows(2) {
            prop_assert!((pair[0].right() - pair[1].x).abs() < EPS);
        }
        let total: f64 = zones.iter().map(|z| z.width).sum();
        prop_assert!((total - (config.width - 1.5 * config.padding)).abs() < 1e-6 * config.width.max(1.0));
        for (zone, block) in zones.iter().zip(&layout.levels) {
            prop_assert_eq!(zone.id, block.id);
        }
    }

    #[test]
    fn connector_runs_through_block_centers(n in 0usize..12, config in config_strategy()) {
        let layout = layout_levels(&levels(n), &config, &DeterministicTextMeasurer::default()).unwrap();
        prop_assert_eq!(layout.connector.points.len(), n);
        for (p, block) in layout.connector.points.iter().zip(&layout.levels) {
            prop_assert_eq!(*p, block.center());
        }
        let d = layout.connector.to_svg_path();
        prop_assert_eq!(d.is_empty(), n == 0);
        prop_assert_eq!(d.matches(" L ").count(), n);
    }

    #[test]
    fn transition_marker_sits_between_neighbours(n in 0usize..12, config in config_strategy()) {
        let layout = layout_levels(&levels(n), &config, &DeterministicTextMeasurer::default()).unwrap();
        let k = config.transition_after_index;
        if n >= k + 2 {
            let a = layout.levels[k].center().x;
            let b = layout.levels[k + 1].center().x;
            prop_assert!(layout.transition_x > a && layout.transition_x < b);
        } else {
            prop_assert_eq!(layout.transition_x, config.width / 2.0);
        }
    }

    #[test]
    fn every_block_is_hit_at_its_center(n in 1usize..12, config in config_strategy()) {
        let catalog = LevelCatalog::new(levels(n)).unwrap();
        let layout = layout_levels(catalog.levels(), &config, &DeterministicTextMeasurer::default()).unwrap();
        for block in &layout.levels {
            let c = block.center();
            // Overlapping blocks resolve to the later one, which is at least as high in id.
            let hit = layout.level_at(c.x, c.y).unwrap();
            prop_assert!(hit >= block.id);
        }
    }
}
