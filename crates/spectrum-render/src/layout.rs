//! Geometry for the spectrum diagram.
//!
//! Blocks climb a diagonal from the bottom-left anchor to the top-right corner of the padded
//! canvas, one step per level. Everything here is a pure function of the level list and the
//! [`LayoutConfig`].

use crate::model::{
    BackgroundZone, Bounds, ConnectorPath, PositionedLevel, SpectrumLayout, TooltipMetrics,
};
use crate::text::{TextMeasurer, TextStyle};
use crate::{Error, LayoutOptions, Result};
use serde::{Deserialize, Serialize};
use spectrum_core::{Level, LevelCatalog, SpectrumConfig};
use std::sync::Arc;

/// Horizontal padding around tooltip text.
const TOOLTIP_PADDING_X: f64 = 32.0;
const TOOLTIP_HEIGHT: f64 = 26.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub block_width: f64,
    pub block_height: f64,
    pub block_offset: f64,
    pub block_y_offset: f64,
    /// The transition marker sits between the levels at this index and the next one.
    pub transition_after_index: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
            padding: 60.0,
            block_width: 100.0,
            block_height: 60.0,
            block_offset: 40.0,
            block_y_offset: 30.0,
            transition_after_index: 1,
        }
    }
}

impl LayoutConfig {
    /// Defaults overlaid with the `layout.*` keys of `config`. Non-numeric values are ignored.
    pub fn from_config(config: &SpectrumConfig) -> Self {
        let mut out = Self::default();
        let fields: [(&str, &mut f64); 7] = [
            ("layout.width", &mut out.width),
            ("layout.height", &mut out.height),
            ("layout.padding", &mut out.padding),
            ("layout.blockWidth", &mut out.block_width),
            ("layout.blockHeight", &mut out.block_height),
            ("layout.blockOffset", &mut out.block_offset),
            ("layout.blockYOffset", &mut out.block_y_offset),
        ];
        for (path, slot) in fields {
            if let Some(v) = config.get_f64(path) {
                *slot = v;
            }
        }
        if let Some(v) = config.get_u64("layout.transitionAfterIndex") {
            out.transition_after_index = usize::try_from(v).unwrap_or(usize::MAX);
        }
        out
    }

    pub fn validate(&self) -> Result<()> {
        let spacing = [
            ("width", self.width),
            ("height", self.height),
            ("padding", self.padding),
            ("blockWidth", self.block_width),
            ("blockHeight", self.block_height),
            ("blockOffset", self.block_offset),
            ("blockYOffset", self.block_y_offset),
        ];
        for (name, v) in spacing {
            if !v.is_finite() || v < 0.0 {
                return Err(Error::InvalidLayoutConfig {
                    message: format!("{name} must be finite and non-negative, got {v}"),
                });
            }
        }
        let span_x = self.width - self.padding - self.anchor_x() - self.block_width;
        if span_x <= 0.0 {
            return Err(Error::InvalidLayoutConfig {
                message: format!(
                    "no horizontal room for blocks: width ({}) must exceed 2 * padding + blockOffset + blockWidth ({})",
                    self.width,
                    2.0 * self.padding + self.block_offset + self.block_width
                ),
            });
        }
        let span_y = self.anchor_y() - self.padding;
        if span_y <= 0.0 {
            return Err(Error::InvalidLayoutConfig {
                message: format!(
                    "no vertical room for blocks: height ({}) must exceed 2 * padding + blockHeight + blockYOffset ({})",
                    self.height,
                    2.0 * self.padding + self.block_height + self.block_y_offset
                ),
            });
        }
        Ok(())
    }

    /// X of the first block's left edge.
    pub fn anchor_x(&self) -> f64 {
        self.padding + self.block_offset
    }

    /// Y of the first block's top edge (the lowest row).
    pub fn anchor_y(&self) -> f64 {
        self.height - self.padding - self.block_height - self.block_y_offset
    }

    /// Baseline of both axes.
    pub fn axis_y(&self) -> f64 {
        self.height - self.padding
    }
}

pub fn compute_positions(levels: &[Level], config: &LayoutConfig) -> Vec<PositionedLevel> {
    let n = levels.len();
    let start_x = config.anchor_x();
    let end_x = config.width - config.padding;
    let start_y = config.anchor_y();
    let end_y = config.padding;

    // A singleton sits on the anchor; no step is defined.
    let (x_step, y_step) = if n > 1 {
        let steps = (n - 1) as f64;
        (
            (end_x - start_x - config.block_width) / steps,
            (start_y - end_y) / steps,
        )
    } else {
        (0.0, 0.0)
    };

    levels
        .iter()
        .enumerate()
        .map(|(i, level)| PositionedLevel {
            id: level.id,
            short_title: level.short_title.clone(),
            color: level.color.clone(),
            x: start_x + i as f64 * x_step,
            y: start_y - i as f64 * y_step,
            width: config.block_width,
            height: config.block_height,
        })
        .collect()
}

/// One band per level, gapless, covering `[padding, width - padding/2]`.
pub fn compute_background_zones(
    positioned: &[PositionedLevel],
    config: &LayoutConfig,
) -> Vec<BackgroundZone> {
    positioned
        .iter()
        .enumerate()
        .map(|(i, level)| {
            let start_x = match i.checked_sub(1).and_then(|p| positioned.get(p)) {
                Some(prev) => (prev.right() + level.x) / 2.0,
                None => config.padding,
            };
            let end_x = match positioned.get(i + 1) {
                Some(next) => (level.right() + next.x) / 2.0,
                None => config.width - config.padding / 2.0,
            };
            BackgroundZone {
                id: level.id,
                x: start_x,
                width: end_x - start_x,
                color: level.color.clone(),
            }
        })
        .collect()
}

pub fn compute_connector_path(positioned: &[PositionedLevel]) -> ConnectorPath {
    ConnectorPath {
        points: positioned.iter().map(PositionedLevel::center).collect(),
    }
}

/// Midpoint between the centers of the blocks at `transition_after_index` and the one after it.
/// Falls back to the horizontal middle of the canvas when either block is missing.
pub fn compute_transition_x(positioned: &[PositionedLevel], config: &LayoutConfig) -> f64 {
    let k = config.transition_after_index;
    let (Some(a), Some(b)) = (
        positioned.get(k),
        k.checked_add(1).and_then(|j| positioned.get(j)),
    ) else {
        return config.width / 2.0;
    };
    (a.center().x + b.center().x) / 2.0
}

pub fn tooltip_style() -> TextStyle {
    TextStyle {
        font_family: None,
        font_size: 11.0,
        font_weight: Some("500".to_string()),
    }
}

pub fn compute_tooltips(
    positioned: &[PositionedLevel],
    measurer: &dyn TextMeasurer,
) -> Vec<TooltipMetrics> {
    let style = tooltip_style();
    positioned
        .iter()
        .map(|level| TooltipMetrics {
            id: level.id,
            width: measurer.measure(&level.short_title, &style).width + TOOLTIP_PADDING_X,
            height: TOOLTIP_HEIGHT,
        })
        .collect()
}

pub fn layout_levels(
    levels: &[Level],
    config: &LayoutConfig,
    measurer: &dyn TextMeasurer,
) -> Result<SpectrumLayout> {
    config.validate()?;

    let positioned = compute_positions(levels, config);
    let zones = compute_background_zones(&positioned, config);
    let connector = compute_connector_path(&positioned);
    let transition_x = compute_transition_x(&positioned, config);
    let tooltips = compute_tooltips(&positioned, measurer);

    tracing::debug!(
        levels = positioned.len(),
        transition_x,
        "spectrum layout computed"
    );

    Ok(SpectrumLayout {
        config: config.clone(),
        levels: positioned,
        zones,
        connector,
        transition_x,
        tooltips,
        bounds: Bounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: config.width,
            max_y: config.height,
        },
    })
}

/// Memoizes one [`SpectrumLayout`].
///
/// The cached layout is reused while the catalog (same `Arc`, or equal content) and the layout
/// config are unchanged. Interaction changes never invalidate it.
#[derive(Debug, Default)]
pub struct LayoutCache {
    catalog: Option<Arc<LevelCatalog>>,
    layout: Option<Arc<SpectrumLayout>>,
    computations: u64,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the layout was actually computed.
    pub fn computations(&self) -> u64 {
        self.computations
    }

    pub fn get(
        &mut self,
        catalog: &Arc<LevelCatalog>,
        options: &LayoutOptions,
    ) -> Result<Arc<SpectrumLayout>> {
        if let (Some(cached_catalog), Some(layout)) = (&self.catalog, &self.layout) {
            let same_catalog =
                Arc::ptr_eq(cached_catalog, catalog) || cached_catalog.as_ref() == catalog.as_ref();
            if same_catalog && layout.config == options.config {
                return Ok(Arc::clone(layout));
            }
        }

        let layout = Arc::new(layout_levels(
            catalog.levels(),
            &options.config,
            options.text_measurer.as_ref(),
        )?);
        self.catalog = Some(Arc::clone(catalog));
        self.layout = Some(Arc::clone(&layout));
        self.computations += 1;
        Ok(layout)
    }

    pub fn invalidate(&mut self) {
        self.catalog = None;
        self.layout = None;
    }
}
