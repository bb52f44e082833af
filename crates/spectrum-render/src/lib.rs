#![forbid(unsafe_code)]

pub mod layout;
pub mod model;
pub mod panel;
pub mod svg;
pub mod text;

use crate::layout::LayoutConfig;
use crate::model::SpectrumLayout;
use crate::text::{DeterministicTextMeasurer, TextMeasurer};
use spectrum_core::{LevelCatalog, LevelId};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid layout config: {message}")]
    InvalidLayoutConfig { message: String },
    #[error("no roadmap transition out of level {from}")]
    MissingTransition { from: LevelId },
    #[error(transparent)]
    Core(#[from] spectrum_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone)]
pub struct LayoutOptions {
    pub config: LayoutConfig,
    pub text_measurer: Arc<dyn TextMeasurer + Send + Sync>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            config: LayoutConfig::default(),
            text_measurer: Arc::new(DeterministicTextMeasurer::default()),
        }
    }
}

impl LayoutOptions {
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }
}

/// Lays out every level of `catalog`. Fails only on an invalid [`LayoutConfig`].
pub fn layout_spectrum(catalog: &LevelCatalog, options: &LayoutOptions) -> Result<SpectrumLayout> {
    layout::layout_levels(
        catalog.levels(),
        &options.config,
        options.text_measurer.as_ref(),
    )
}
