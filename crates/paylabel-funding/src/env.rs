//! The render environment passed to every entry point.

use std::fmt;
use std::sync::Arc;

use crate::assets::{DefaultGlyphs, GlyphProvider};
use crate::config::RenderConfig;
use crate::content::{ContentTable, StaticContentTable};
use crate::label::{BaseLabel, BasicLabel};
use crate::styles::{InlineStyles, StyleInjector};

/// Configuration plus the external collaborators the components render through.
///
/// Cheap to clone and safe to share between threads rendering different buttons.
#[derive(Clone)]
pub struct RenderEnv {
    /// Execution context flags.
    pub config: RenderConfig,
    /// Logo and mark artwork.
    pub glyphs: Arc<dyn GlyphProvider>,
    /// Renderer for the non-personalized label.
    pub base_label: Arc<dyn BaseLabel>,
    /// Tag copy by locale.
    pub content: Arc<dyn ContentTable>,
    /// Style sheet injection.
    pub styles: Arc<dyn StyleInjector>,
}

impl RenderEnv {
    /// An environment using the built-in collaborators.
    #[must_use]
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            glyphs: Arc::new(DefaultGlyphs),
            base_label: Arc::new(BasicLabel),
            content: Arc::new(StaticContentTable::builtin()),
            styles: Arc::new(InlineStyles),
        }
    }

    /// Replace the glyph provider.
    #[must_use]
    pub fn with_glyphs(mut self, glyphs: Arc<dyn GlyphProvider>) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Replace the base label renderer.
    #[must_use]
    pub fn with_base_label(mut self, base_label: Arc<dyn BaseLabel>) -> Self {
        self.base_label = base_label;
        self
    }

    /// Replace the content table.
    #[must_use]
    pub fn with_content(mut self, content: Arc<dyn ContentTable>) -> Self {
        self.content = content;
        self
    }

    /// Replace the style injector.
    #[must_use]
    pub fn with_styles(mut self, styles: Arc<dyn StyleInjector>) -> Self {
        self.styles = styles;
        self
    }

    /// Whether this is a back-end pass.
    #[must_use]
    pub const fn is_backend(&self) -> bool {
        self.config.is_backend()
    }
}

impl Default for RenderEnv {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl fmt::Debug for RenderEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderEnv")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
