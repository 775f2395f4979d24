//! Render collaborator traits
//!
//! The engine draws nothing itself. After every state change it hands the
//! visible page to a [`Renderer`] and, when navigation is enabled, the page
//! window to a [`NavigationRenderer`]. Closures of the right shape
//! implement both traits.

use super::types::{Navigation, PageView};

/// Draws the records of the current page
pub trait Renderer {
    /// Render the visible page
    fn render(&mut self, view: &PageView<'_>) -> anyhow::Result<()>;
}

impl<F> Renderer for F
where
    F: FnMut(&PageView<'_>) -> anyhow::Result<()>,
{
    fn render(&mut self, view: &PageView<'_>) -> anyhow::Result<()> {
        self(view)
    }
}

/// Draws page controls, counters and the page size picker
pub trait NavigationRenderer {
    /// Render the navigation for the active data
    fn render_navigation(&mut self, navigation: &Navigation<'_>) -> anyhow::Result<()>;
}

impl<F> NavigationRenderer for F
where
    F: FnMut(&Navigation<'_>) -> anyhow::Result<()>,
{
    fn render_navigation(&mut self, navigation: &Navigation<'_>) -> anyhow::Result<()> {
        self(navigation)
    }
}

/// A renderer that draws nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _view: &PageView<'_>) -> anyhow::Result<()> {
        Ok(())
    }
}
