#![forbid(unsafe_code)]

//! `spectrum` is a headless rendition of the AI maturity spectrum diagram.
//!
//! The model (level catalog, interaction state, assessment, roadmap, storage) lives in
//! `spectrum-core` and is re-exported at the crate root.
//!
//! # Features
//!
//! - `render`: enable layout + SVG rendering (`spectrum::render`)
//! - `raster`: enable PNG/JPG/PDF output via pure-Rust SVG rasterization/conversion

pub use spectrum_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use spectrum_render::layout::{LayoutCache, LayoutConfig};
    pub use spectrum_render::model::{
        BackgroundZone, ConnectorPath, LayoutPoint, PositionedLevel, SpectrumLayout,
        TooltipMetrics,
    };
    pub use spectrum_render::panel::{
        render_assessment_result, render_level_detail, render_roadmap,
    };
    pub use spectrum_render::svg::{SvgRenderOptions, Theme};
    pub use spectrum_render::text::{DeterministicTextMeasurer, TextMeasurer};
    pub use spectrum_render::{LayoutOptions, layout_spectrum};

    use spectrum_core::{InteractionState, LevelCatalog, Spectrum, SpectrumConfig};
    use std::sync::{Arc, Mutex, PoisonError};

    #[cfg(feature = "raster")]
    pub mod raster;

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Render(#[from] spectrum_render::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Converts an arbitrary string into a conservative SVG `id` token, so several diagrams can
    /// be inlined into one document without their `grad-*`/marker ids colliding.
    ///
    /// Unsupported characters become `-`, runs of `-` collapse, and ids that do not start with
    /// an ASCII letter get an `s-` prefix.
    pub fn sanitize_svg_id(raw: &str) -> String {
        let raw = raw.trim();
        if raw.is_empty() {
            return "s-untitled".to_string();
        }

        let mut out = String::with_capacity(raw.len() + 4);
        for ch in raw.chars() {
            let ok = ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == ':' || ch == '.';
            out.push(if ok { ch } else { '-' });
        }

        if !out.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
            out.insert_str(0, "s-");
        }

        while out.contains("--") {
            out = out.replace("--", "-");
        }
        let out = out.trim_matches('-');
        if out.is_empty() || out == "s" {
            return "s-untitled".to_string();
        }
        out.to_string()
    }

    /// Layout options with the `layout.*` keys of `config` applied over the defaults.
    pub fn layout_options_from_config(config: &SpectrumConfig) -> LayoutOptions {
        LayoutOptions::default().with_config(LayoutConfig::from_config(config))
    }

    pub fn render_svg(
        catalog: &LevelCatalog,
        state: &InteractionState,
        layout_options: &LayoutOptions,
        svg_options: &SvgRenderOptions,
    ) -> Result<String> {
        let layout = layout_spectrum(catalog, layout_options)?;
        Ok(spectrum_render::svg::render_spectrum_svg(
            &layout,
            state,
            svg_options,
        ))
    }

    /// Renders a composition root as-is: its catalog and its current interaction state.
    pub fn render_spectrum(
        spectrum: &Spectrum,
        layout_options: &LayoutOptions,
        svg_options: &SvgRenderOptions,
    ) -> Result<String> {
        render_svg(
            spectrum.catalog(),
            spectrum.state(),
            layout_options,
            svg_options,
        )
    }

    /// Bundles a catalog with layout and SVG options for repeated headless rendering.
    ///
    /// The layout is computed once and reused across renders until the catalog or the layout
    /// config changes; interaction state never triggers a relayout. All work is CPU-bound.
    pub struct HeadlessRenderer {
        pub catalog: Arc<LevelCatalog>,
        pub layout: LayoutOptions,
        pub svg: SvgRenderOptions,
        cache: Mutex<LayoutCache>,
    }

    impl Default for HeadlessRenderer {
        fn default() -> Self {
            Self {
                catalog: Arc::new(LevelCatalog::reference()),
                layout: LayoutOptions::default(),
                svg: SvgRenderOptions::default(),
                cache: Mutex::new(LayoutCache::new()),
            }
        }
    }

    impl Clone for HeadlessRenderer {
        fn clone(&self) -> Self {
            Self {
                catalog: Arc::clone(&self.catalog),
                layout: self.layout.clone(),
                svg: self.svg.clone(),
                cache: Mutex::new(LayoutCache::new()),
            }
        }
    }

    impl HeadlessRenderer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_catalog(mut self, catalog: Arc<LevelCatalog>) -> Self {
            self.catalog = catalog;
            self
        }

        pub fn with_config(mut self, config: &SpectrumConfig) -> Self {
            self.layout.config = LayoutConfig::from_config(config);
            self
        }

        pub fn with_svg_options(mut self, svg: SvgRenderOptions) -> Self {
            self.svg = svg;
            self
        }

        /// Interaction state a fresh diagram over this catalog starts with.
        pub fn initial_state(&self) -> InteractionState {
            InteractionState::for_catalog(&self.catalog, self.svg.assessed_level)
        }

        pub fn layout(&self) -> Result<Arc<SpectrumLayout>> {
            let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
            Ok(cache.get(&self.catalog, &self.layout)?)
        }

        /// How many times this renderer actually computed a layout.
        pub fn layout_computations(&self) -> u64 {
            self.cache
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .computations()
        }

        pub fn render_svg(&self, state: &InteractionState) -> Result<String> {
            self.render_svg_with(state, &self.svg)
        }

        pub fn render_svg_with(
            &self,
            state: &InteractionState,
            svg: &SvgRenderOptions,
        ) -> Result<String> {
            let layout = self.layout()?;
            Ok(spectrum_render::svg::render_spectrum_svg(
                &layout, state, svg,
            ))
        }

        pub fn render_svg_with_diagram_id(
            &self,
            state: &InteractionState,
            diagram_id: &str,
        ) -> Result<String> {
            let mut svg = self.svg.clone();
            svg.diagram_id = Some(sanitize_svg_id(diagram_id));
            self.render_svg_with(state, &svg)
        }

        #[cfg(feature = "raster")]
        pub fn render_png(
            &self,
            state: &InteractionState,
            raster: &raster::RasterOptions,
        ) -> raster::Result<Vec<u8>> {
            let svg = self.render_svg_with(state, &raster::static_frame(&self.svg))?;
            raster::svg_to_png(&svg, raster)
        }

        #[cfg(feature = "raster")]
        pub fn render_jpeg(
            &self,
            state: &InteractionState,
            raster: &raster::RasterOptions,
        ) -> raster::Result<Vec<u8>> {
            let svg = self.render_svg_with(state, &raster::static_frame(&self.svg))?;
            raster::svg_to_jpeg(&svg, raster)
        }

        #[cfg(feature = "raster")]
        pub fn render_pdf(&self, state: &InteractionState) -> raster::Result<Vec<u8>> {
            let svg = self.render_svg_with(state, &raster::static_frame(&self.svg))?;
            raster::svg_to_pdf(&svg)
        }
    }
}
