use crate::layout::LayoutConfig;
use serde::{Deserialize, Serialize};
use spectrum_core::LevelId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutPoint {
    pub x: f64,
    pub y: f64,
}

/// One level block. `x`/`y` is the top-left corner in viewBox units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedLevel {
    pub id: LevelId,
    pub short_title: String,
    pub color: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PositionedLevel {
    pub fn center(&self) -> LayoutPoint {
        LayoutPoint {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Edges are inclusive.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }
}

/// Vertical background band behind one level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundZone {
    pub id: LevelId,
    pub x: f64,
    pub width: f64,
    pub color: String,
}

impl BackgroundZone {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// Polyline through the block centers, in level order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectorPath {
    pub points: Vec<LayoutPoint>,
}

impl ConnectorPath {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `M x0 y0 L x0 y0 L x1 y1 ...`; the first point is repeated as a line-to. Empty when there
    /// are no points.
    pub fn to_svg_path(&self) -> String {
        let Some(first) = self.points.first() else {
            return String::new();
        };
        let mut out = String::new();
        out.push_str("M ");
        crate::svg::fmt_into(&mut out, first.x);
        out.push(' ');
        crate::svg::fmt_into(&mut out, first.y);
        for p in &self.points {
            out.push_str(" L ");
            crate::svg::fmt_into(&mut out, p.x);
            out.push(' ');
            crate::svg::fmt_into(&mut out, p.y);
        }
        out
    }
}

/// Hover tooltip box size for one level label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipMetrics {
    pub id: LevelId,
    pub width: f64,
    pub height: f64,
}

/// Everything the renderer needs for one diagram instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumLayout {
    pub config: LayoutConfig,
    pub levels: Vec<PositionedLevel>,
    pub zones: Vec<BackgroundZone>,
    pub connector: ConnectorPath,
    pub transition_x: f64,
    pub tooltips: Vec<TooltipMetrics>,
    /// Drawing area: always the full `0 0 width height` canvas.
    pub bounds: Bounds,
}

impl SpectrumLayout {
    pub fn level(&self, id: LevelId) -> Option<&PositionedLevel> {
        self.levels.iter().find(|l| l.id == id)
    }

    pub fn zone(&self, id: LevelId) -> Option<&BackgroundZone> {
        self.zones.iter().find(|z| z.id == id)
    }

    pub fn tooltip(&self, id: LevelId) -> Option<&TooltipMetrics> {
        self.tooltips.iter().find(|t| t.id == id)
    }

    /// Block under the pointer. Blocks never overlap in a valid layout; if they do, the later
    /// (higher) level wins, matching paint order.
    pub fn level_at(&self, x: f64, y: f64) -> Option<LevelId> {
        self.levels
            .iter()
            .rev()
            .find(|l| l.contains(x, y))
            .map(|l| l.id)
    }
}
