#![forbid(unsafe_code)]

use crate::render::{HeadlessError, LayoutOptions, SvgRenderOptions};
use spectrum_core::{InteractionState, LevelCatalog};

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error(transparent)]
    Headless(#[from] HeadlessError),
    #[error("failed to parse SVG")]
    SvgParse,
    #[error("failed to allocate pixmap for raster rendering")]
    PixmapAlloc,
    #[error("failed to encode PNG")]
    PngEncode,
    #[error("invalid background color for JPG rendering")]
    JpegBackground,
    #[error("JPG rendering requires an opaque background color (e.g. white)")]
    JpegOpaqueBackgroundRequired,
    #[error("failed to encode JPG")]
    JpegEncode,
    #[error("failed to convert SVG to PDF")]
    PdfConvert,
}

pub type Result<T> = std::result::Result<T, RasterError>;

#[derive(Debug, Clone)]
pub struct RasterOptions {
    pub scale: f32,
    pub background: Option<String>,
    pub jpeg_quality: u8,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            background: None,
            jpeg_quality: 90,
        }
    }
}

/// SVG options for a static frame: raster targets cannot play the connector animation.
pub fn static_frame(svg_options: &SvgRenderOptions) -> SvgRenderOptions {
    SvgRenderOptions {
        animate: false,
        ..svg_options.clone()
    }
}

fn render_static_svg(
    catalog: &LevelCatalog,
    state: &InteractionState,
    layout_options: &LayoutOptions,
    svg_options: &SvgRenderOptions,
) -> Result<String> {
    Ok(super::render_svg(
        catalog,
        state,
        layout_options,
        &static_frame(svg_options),
    )?)
}

pub fn render_png(
    catalog: &LevelCatalog,
    state: &InteractionState,
    layout_options: &LayoutOptions,
    svg_options: &SvgRenderOptions,
    raster: &RasterOptions,
) -> Result<Vec<u8>> {
    let svg = render_static_svg(catalog, state, layout_options, svg_options)?;
    svg_to_png(&svg, raster)
}

pub fn render_jpeg(
    catalog: &LevelCatalog,
    state: &InteractionState,
    layout_options: &LayoutOptions,
    svg_options: &SvgRenderOptions,
    raster: &RasterOptions,
) -> Result<Vec<u8>> {
    let svg = render_static_svg(catalog, state, layout_options, svg_options)?;
    svg_to_jpeg(&svg, raster)
}

pub fn render_pdf(
    catalog: &LevelCatalog,
    state: &InteractionState,
    layout_options: &LayoutOptions,
    svg_options: &SvgRenderOptions,
) -> Result<Vec<u8>> {
    let svg = render_static_svg(catalog, state, layout_options, svg_options)?;
    svg_to_pdf(&svg)
}

pub fn svg_to_png(svg: &str, options: &RasterOptions) -> Result<Vec<u8>> {
    let pixmap = svg_to_pixmap(svg, options.scale, options.background.as_deref())?;
    pixmap.encode_png().map_err(|_| RasterError::PngEncode)
}

pub fn svg_to_jpeg(svg: &str, options: &RasterOptions) -> Result<Vec<u8>> {
    let bg = options.background.as_deref().unwrap_or("white");
    let Some(color) = parse_tiny_skia_color(bg) else {
        return Err(RasterError::JpegBackground);
    };
    if color.alpha() != 1.0 {
        return Err(RasterError::JpegOpaqueBackgroundRequired);
    }

    let pixmap = svg_to_pixmap(svg, options.scale, Some(bg))?;
    let (w, h) = (pixmap.width(), pixmap.height());

    // The background fill is opaque, so every alpha byte is 255 and can be dropped.
    let rgb: Vec<u8> = pixmap
        .data()
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();

    let mut out = Vec::new();
    let mut enc =
        image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, options.jpeg_quality);
    enc.encode(&rgb, w, h, image::ExtendedColorType::Rgb8)
        .map_err(|_| RasterError::JpegEncode)?;
    Ok(out)
}

pub fn svg_to_pdf(svg: &str) -> Result<Vec<u8>> {
    let mut opt = svg2pdf::usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    opt.font_family = FALLBACK_FONT_FAMILY.to_string();

    let tree = svg2pdf::usvg::Tree::from_str(svg, &opt).map_err(|_| RasterError::SvgParse)?;

    svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|_| RasterError::PdfConvert)
}

// Inter is rarely installed system-wide; fall back to a sans-serif every platform has.
const FALLBACK_FONT_FAMILY: &str = "Arial";

/// Root `viewBox="minX minY w h"` size. Non-validating; the diagram always emits one.
fn parse_svg_viewbox_size(svg: &str) -> Option<(f32, f32)> {
    let i = svg.find("viewBox=\"")?;
    let rest = &svg[i + "viewBox=\"".len()..];
    let raw = &rest[..rest.find('"')?];
    let nums: Vec<f32> = raw
        .split_whitespace()
        .map(|n| n.parse::<f32>().ok())
        .collect::<Option<_>>()?;
    let [_, _, width, height] = nums[..] else {
        return None;
    };
    (width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0)
        .then_some((width, height))
}

fn svg_to_pixmap(svg: &str, scale: f32, background: Option<&str>) -> Result<tiny_skia::Pixmap> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    opt.font_family = FALLBACK_FONT_FAMILY.to_string();

    let tree = usvg::Tree::from_str(svg, &opt).map_err(|_| RasterError::SvgParse)?;

    // usvg already maps the viewBox onto the tree's coordinate space; only `scale` remains.
    let (width, height) = parse_svg_viewbox_size(svg).unwrap_or_else(|| {
        let size = tree.size();
        (size.width(), size.height())
    });

    let width_px = (width * scale).ceil().max(1.0) as u32;
    let height_px = (height * scale).ceil().max(1.0) as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width_px, height_px).ok_or(RasterError::PixmapAlloc)?;

    if let Some(color) = background.and_then(parse_tiny_skia_color) {
        pixmap.fill(color);
    }

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Ok(pixmap)
}

/// Accepts `transparent`, `white`, `black`, and `#rgb`/`#rgba`/`#rrggbb`/`#rrggbbaa`.
fn parse_tiny_skia_color(text: &str) -> Option<tiny_skia::Color> {
    let s = text.trim().to_ascii_lowercase();
    match s.as_str() {
        "transparent" => return Some(tiny_skia::Color::from_rgba8(0, 0, 0, 0)),
        "white" => return Some(tiny_skia::Color::from_rgba8(255, 255, 255, 255)),
        "black" => return Some(tiny_skia::Color::from_rgba8(0, 0, 0, 255)),
        _ => {}
    }

    let hex = s.strip_prefix('#')?;
    let digits: Vec<u8> = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<_>>()?;

    let channels: Vec<u8> = match digits.len() {
        3 | 4 => digits.iter().map(|d| (d << 4) | d).collect(),
        6 | 8 => digits.chunks_exact(2).map(|p| (p[0] << 4) | p[1]).collect(),
        _ => return None,
    };
    let alpha = channels.get(3).copied().unwrap_or(255);
    Some(tiny_skia::Color::from_rgba8(
        channels[0],
        channels[1],
        channels[2],
        alpha,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10"><rect width="10" height="10" fill="black"/></svg>"#;

    #[test]
    fn svg_to_png_produces_png_signature() {
        let bytes = svg_to_png(SQUARE, &RasterOptions::default()).unwrap();
        assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
    }

    #[test]
    fn svg_to_pdf_produces_pdf_signature() {
        let bytes = svg_to_pdf(SQUARE).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn svg_to_jpeg_requires_an_opaque_background() {
        let options = RasterOptions {
            background: Some("#ffffff80".to_string()),
            ..RasterOptions::default()
        };
        assert!(matches!(
            svg_to_jpeg(SQUARE, &options),
            Err(RasterError::JpegOpaqueBackgroundRequired)
        ));

        let bytes = svg_to_jpeg(SQUARE, &RasterOptions::default()).unwrap();
        assert!(bytes.starts_with(&[0xFF, 0xD8]));
    }

    #[test]
    fn colors_parse_short_and_long_hex() {
        let c = parse_tiny_skia_color("#0f8").unwrap().to_color_u8();
        assert_eq!((c.red(), c.green(), c.blue(), c.alpha()), (0, 255, 136, 255));
        let c = parse_tiny_skia_color(" #10B98180 ").unwrap().to_color_u8();
        assert_eq!((c.red(), c.green(), c.blue(), c.alpha()), (16, 185, 129, 128));
        assert!(parse_tiny_skia_color("#12345").is_none());
        assert!(parse_tiny_skia_color("#zzz").is_none());
        assert!(parse_tiny_skia_color("teal").is_none());
    }

    #[test]
    fn viewbox_size_is_read_from_the_root() {
        assert_eq!(parse_svg_viewbox_size(SQUARE), Some((10.0, 10.0)));
        assert_eq!(
            parse_svg_viewbox_size(r#"<svg viewBox="0 0 800 500">"#),
            Some((800.0, 500.0))
        );
        assert_eq!(parse_svg_viewbox_size(r#"<svg viewBox="0 0 0 5">"#), None);
        assert_eq!(parse_svg_viewbox_size("<svg>"), None);
    }
}
