//! Static SVG rendition of the spectrum diagram.
//!
//! Layers, bottom to top: background zones; lines (connector, axes, transition marker); level
//! blocks; "you are here" marker; hover tooltip.

mod util;

pub(crate) use util::{escape_xml, fmt, fmt_into};

use crate::model::{PositionedLevel, SpectrumLayout};
use spectrum_core::{InteractionState, LevelFlags, LevelId, label_lines};
use std::fmt::Write as _;

pub const AXIS_LABEL_X: &str = "Task complexity / operational risk";
pub const AXIS_LABEL_Y: &str = "Engineering involvement";
pub const TRANSITION_CAPTION: [&str; 3] = [
    "Tools stop being enough,",
    "engineering becomes",
    "unavoidable",
];

const FONT_FAMILY: &str = "Inter, ui-sans-serif, system-ui, -apple-system, sans-serif";
const DIMMED_OPACITY: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" | "default" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    fn palette(self) -> Palette {
        match self {
            Self::Light => Palette {
                background: "white",
                axis: "#64748b",
                axis_label: "#334155",
                transition_line: "#94a3b8",
                caption: "#64748b",
                connector: "#cbd5e1",
                connector_dash: "rgba(148, 163, 184, 0.7)",
                block_fill: "white",
                block_stroke: "#94a3b8",
                block_label: "#334155",
                tooltip: "#334155",
                marker: "#f59e0b",
                marker_ring: "#fbbf24",
                marker_check: "white",
            },
            Self::Dark => Palette {
                background: "#1c1917",
                axis: "#94a3b8",
                axis_label: "#cbd5e1",
                transition_line: "#475569",
                caption: "#94a3b8",
                connector: "#475569",
                connector_dash: "rgba(148, 163, 184, 0.6)",
                block_fill: "#0f172a",
                block_stroke: "#475569",
                block_label: "#e2e8f0",
                tooltip: "#334155",
                marker: "#fbbf24",
                marker_ring: "#fbbf24",
                marker_check: "#0f172a",
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Palette {
    background: &'static str,
    axis: &'static str,
    axis_label: &'static str,
    transition_line: &'static str,
    caption: &'static str,
    connector: &'static str,
    connector_dash: &'static str,
    block_fill: &'static str,
    block_stroke: &'static str,
    block_label: &'static str,
    tooltip: &'static str,
    marker: &'static str,
    marker_ring: &'static str,
    marker_check: &'static str,
}

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    /// Root `id` attribute.
    pub diagram_id: Option<String>,
    pub theme: Theme,
    /// Level to badge with the "you are here" marker (the stored assessment result).
    pub assessed_level: Option<LevelId>,
    /// When true, emit the SMIL animation on the dashed connector.
    pub animate: bool,
    /// When false, hover state is ignored (static exports).
    pub include_tooltip: bool,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            diagram_id: None,
            theme: Theme::Light,
            assessed_level: None,
            animate: true,
            include_tooltip: true,
        }
    }
}

pub fn render_spectrum_svg(
    layout: &SpectrumLayout,
    state: &InteractionState,
    options: &SvgRenderOptions,
) -> String {
    let palette = options.theme.palette();
    let cfg = &layout.config;
    let diagram_id = options.diagram_id.as_deref().unwrap_or("spectrum");

    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"<svg id="{id}" width="100%" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" preserveAspectRatio="xMidYMid meet" style="max-width: {w}px; background-color: {bg};" font-family="{font}" role="graphics-document document" aria-roledescription="maturity-spectrum">"#,
        id = escape_xml(diagram_id),
        w = fmt(cfg.width),
        h = fmt(cfg.height),
        bg = palette.background,
        font = FONT_FAMILY,
    );

    render_defs(&mut out, layout, &palette);

    out.push_str(r#"<g data-layer="background">"#);
    render_zones(&mut out, layout);
    out.push_str("</g>");

    out.push_str(r#"<g data-layer="lines">"#);
    render_connector(&mut out, layout, &palette, options.animate);
    render_axes(&mut out, layout, &palette);
    render_transition_marker(&mut out, layout, &palette);
    out.push_str("</g>");

    out.push_str(r#"<g data-layer="blocks">"#);
    for level in &layout.levels {
        render_block(&mut out, layout, level, state.flags(level.id), &palette);
    }
    if let Some(level) = options.assessed_level.and_then(|id| layout.level(id)) {
        render_you_are_here(&mut out, level, &palette);
    }
    out.push_str("</g>");

    out.push_str(r#"<g data-layer="tooltip">"#);
    if let Some(id) = state
        .hovered_level_id()
        .filter(|_| options.include_tooltip)
    {
        render_tooltip(&mut out, layout, id, &palette);
    }
    out.push_str("</g>");

    out.push_str("</svg>\n");
    out
}

fn render_defs(out: &mut String, layout: &SpectrumLayout, palette: &Palette) {
    let cfg = &layout.config;
    out.push_str("<defs>");
    let _ = write!(
        out,
        r#"<marker id="arrowhead" markerWidth="10" markerHeight="7" refX="0" refY="3.5" orient="auto"><polygon points="0 0, 10 3.5, 0 7" fill="{}"/></marker>"#,
        palette.axis
    );

    for level in &layout.levels {
        let color = escape_xml(&level.color);
        let _ = write!(
            out,
            r#"<linearGradient id="grad-{id}" x1="0" y1="0" x2="0" y2="1"><stop offset="0%" stop-color="{color}" stop-opacity="0.02"/><stop offset="100%" stop-color="{color}" stop-opacity="0.15"/></linearGradient>"#,
            id = level.id,
        );
    }

    // The connector is hidden under the blocks so it reads as running between them.
    let _ = write!(
        out,
        r#"<mask id="connector-mask"><rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
        fmt(cfg.width),
        fmt(cfg.height)
    );
    for level in &layout.levels {
        let _ = write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="8" fill="black"/>"#,
            fmt(level.x),
            fmt(level.y),
            fmt(level.width),
            fmt(level.height)
        );
    }
    out.push_str("</mask>");

    out.push_str(r#"<filter id="block-shadow" x="-20%" y="-20%" width="140%" height="160%"><feDropShadow dx="0" dy="1" stdDeviation="1" flood-color="black" flood-opacity="0.05"/></filter>"#);
    out.push_str(r#"<filter id="block-shadow-active" x="-20%" y="-20%" width="140%" height="160%"><feDropShadow dx="0" dy="4" stdDeviation="3" flood-color="black" flood-opacity="0.15"/></filter>"#);
    out.push_str(r#"<filter id="you-are-here-shadow" x="-50%" y="-50%" width="200%" height="200%"><feDropShadow dx="0" dy="1" stdDeviation="2" flood-opacity="0.25"/></filter>"#);
    out.push_str("</defs>");
}

fn render_zones(out: &mut String, layout: &SpectrumLayout) {
    let cfg = &layout.config;
    let top = cfg.padding / 2.0;
    let height = cfg.height - cfg.padding - top;
    for zone in &layout.zones {
        let _ = write!(
            out,
            r#"<rect data-level-id="{id}" x="{x}" y="{y}" width="{w}" height="{h}" fill="url(#grad-{id})"/>"#,
            id = zone.id,
            x = fmt(zone.x),
            y = fmt(top),
            w = fmt(zone.width),
            h = fmt(height),
        );
    }
}

fn render_connector(out: &mut String, layout: &SpectrumLayout, palette: &Palette, animate: bool) {
    if layout.connector.is_empty() {
        return;
    }
    let d = layout.connector.to_svg_path();
    let _ = write!(
        out,
        r#"<path d="{d}" stroke="{}" stroke-width="2" fill="none" mask="url(#connector-mask)"/>"#,
        palette.connector
    );
    let _ = write!(
        out,
        r#"<path d="{d}" stroke="{}" stroke-width="2" fill="none" stroke-dasharray="10 14" mask="url(#connector-mask)">"#,
        palette.connector_dash
    );
    if animate {
        out.push_str(r#"<animate attributeName="stroke-dashoffset" values="0; -48" dur="3s" repeatCount="indefinite"/>"#);
    }
    out.push_str("</path>");
}

fn render_axes(out: &mut String, layout: &SpectrumLayout, palette: &Palette) {
    let cfg = &layout.config;
    let axis_y = cfg.axis_y();
    let _ = write!(
        out,
        r#"<line x1="{x1}" y1="{y}" x2="{x2}" y2="{y}" stroke="{c}" stroke-width="3" marker-end="url(#arrowhead)"/>"#,
        x1 = fmt(cfg.padding),
        x2 = fmt(cfg.width - cfg.padding / 2.0),
        y = fmt(axis_y),
        c = palette.axis,
    );
    let _ = write!(
        out,
        r#"<line x1="{x}" y1="{y1}" x2="{x}" y2="{y2}" stroke="{c}" stroke-width="3" marker-end="url(#arrowhead)"/>"#,
        x = fmt(cfg.padding),
        y1 = fmt(axis_y),
        y2 = fmt(cfg.padding / 2.0),
        c = palette.axis,
    );

    let _ = write!(
        out,
        r#"<text x="{x}" y="{y}" text-anchor="middle" font-size="14" font-weight="bold" fill="{c}">{t}</text>"#,
        x = fmt(cfg.width / 2.0),
        y = fmt(axis_y + 30.0),
        c = palette.axis_label,
        t = escape_xml(AXIS_LABEL_X),
    );
    let lx = fmt(cfg.padding - 30.0);
    let ly = fmt(cfg.height / 2.0);
    let _ = write!(
        out,
        r#"<text x="{lx}" y="{ly}" text-anchor="middle" font-size="14" font-weight="bold" fill="{c}" transform="rotate(-90, {lx}, {ly})">{t}</text>"#,
        c = palette.axis_label,
        t = escape_xml(AXIS_LABEL_Y),
    );
}

fn render_transition_marker(out: &mut String, layout: &SpectrumLayout, palette: &Palette) {
    let cfg = &layout.config;
    let x = layout.transition_x;
    let _ = write!(
        out,
        r#"<line x1="{x}" y1="{y1}" x2="{x}" y2="{y2}" stroke="{c}" stroke-width="2" stroke-dasharray="4 4"/>"#,
        x = fmt(x),
        y1 = fmt(cfg.axis_y()),
        y2 = fmt(cfg.padding),
        c = palette.transition_line,
    );

    let tx = fmt(x + 10.0);
    let _ = write!(
        out,
        r#"<text x="{tx}" y="{y}" font-size="11" font-style="italic" font-weight="500" fill="{c}">"#,
        y = fmt(cfg.axis_y() - 60.0),
        c = palette.caption,
    );
    for (i, line) in TRANSITION_CAPTION.iter().enumerate() {
        let dy = if i == 0 { "0" } else { "1.4em" };
        let _ = write!(
            out,
            r#"<tspan x="{tx}" dy="{dy}">{}</tspan>"#,
            escape_xml(line)
        );
    }
    out.push_str("</text>");
}

fn render_block(
    out: &mut String,
    layout: &SpectrumLayout,
    level: &PositionedLevel,
    flags: LevelFlags,
    palette: &Palette,
) {
    let cfg = &layout.config;
    let cx = level.x + level.width / 2.0;
    let cy = level.y + level.height / 2.0;
    let color = escape_xml(&level.color);

    let _ = write!(out, r#"<g data-level-id="{}""#, level.id);
    if flags.is_active {
        out.push_str(r#" data-active="true""#);
    }
    if flags.is_hovered {
        out.push_str(r#" data-hovered="true""#);
    }
    if flags.is_dimmed {
        let _ = write!(out, r#" opacity="{}""#, fmt(DIMMED_OPACITY));
    }
    out.push('>');

    if flags.is_highlighted() {
        // Guide lines down to the x-axis and across to the y-axis.
        let _ = write!(
            out,
            r#"<line x1="{x}" y1="{y1}" x2="{x}" y2="{y2}" stroke="{color}" stroke-width="1.5" stroke-dasharray="3 3" opacity="0.8"/>"#,
            x = fmt(cx),
            y1 = fmt(level.bottom()),
            y2 = fmt(cfg.axis_y()),
        );
        let _ = write!(
            out,
            r#"<line x1="{x1}" y1="{y}" x2="{x2}" y2="{y}" stroke="{color}" stroke-width="1.5" stroke-dasharray="3 3" opacity="0.8"/>"#,
            x1 = fmt(level.x),
            x2 = fmt(cfg.padding),
            y = fmt(cy),
        );
    }

    if flags.is_active {
        let _ = write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="8" fill="{color}" stroke="none" filter="url(#block-shadow-active)"/>"#,
            fmt(level.x),
            fmt(level.y),
            fmt(level.width),
            fmt(level.height),
        );
    } else {
        let _ = write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="8" fill="{}" stroke="{}" stroke-width="1.5" filter="url(#block-shadow)"/>"#,
            fmt(level.x),
            fmt(level.y),
            fmt(level.width),
            fmt(level.height),
            palette.block_fill,
            palette.block_stroke,
        );
    }

    let badge_y = fmt(level.y - 15.0);
    let _ = write!(
        out,
        r#"<circle cx="{x}" cy="{badge_y}" r="12" fill="{color}"/><text x="{x}" y="{badge_y}" text-anchor="middle" fill="white" font-size="11" font-weight="bold" dominant-baseline="central">{id}</text>"#,
        x = fmt(cx),
        id = level.id,
    );

    let (head, tail) = label_lines(&level.short_title);
    let label_fill = if flags.is_active {
        "white"
    } else {
        palette.block_label
    };
    let x = fmt(cx);
    let _ = write!(
        out,
        r#"<text x="{x}" y="{y}" text-anchor="middle" dominant-baseline="middle" fill="{label_fill}" font-size="12" font-weight="600"><tspan x="{x}" dy="-0.2em">{head}</tspan><tspan x="{x}" dy="1.2em">{tail}</tspan></text>"#,
        y = fmt(cy),
        head = escape_xml(head),
        tail = escape_xml(tail),
    );

    out.push_str("</g>");
}

fn render_you_are_here(out: &mut String, level: &PositionedLevel, palette: &Palette) {
    let x = level.x + level.width - 5.0;
    let y = level.y + 5.0;
    let _ = write!(
        out,
        r#"<g data-marker="you-are-here" data-level-id="{id}" transform="translate({x}, {y})" pointer-events="none"><circle cx="0" cy="0" r="10" fill="none" stroke="{ring}" stroke-width="2"/><circle cx="0" cy="0" r="10" fill="{fill}" filter="url(#you-are-here-shadow)"/><path d="M -4 0 L -1 3 L 5 -3" fill="none" stroke="{check}" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round"/></g>"#,
        id = level.id,
        x = fmt(x),
        y = fmt(y),
        ring = palette.marker_ring,
        fill = palette.marker,
        check = palette.marker_check,
    );
}

fn render_tooltip(out: &mut String, layout: &SpectrumLayout, id: LevelId, palette: &Palette) {
    let (Some(level), Some(metrics)) = (layout.level(id), layout.tooltip(id)) else {
        return;
    };
    let _ = write!(
        out,
        r#"<g data-tooltip-for="{id}" transform="translate({x}, {y})" pointer-events="none"><rect x="{rx}" y="-30" width="{w}" height="{h}" rx="4" fill="{c}"/><path d="M -5 -5 L 0 0 L 5 -5" fill="{c}"/><text x="0" y="-17" text-anchor="middle" fill="white" font-size="11" font-weight="500" dominant-baseline="middle">{t}</text></g>"#,
        id = level.id,
        x = fmt(level.x + level.width / 2.0),
        y = fmt(level.y - 8.0),
        rx = fmt(-metrics.width / 2.0),
        w = fmt(metrics.width),
        h = fmt(metrics.height),
        c = palette.tooltip,
        t = escape_xml(&level.short_title),
    );
}
