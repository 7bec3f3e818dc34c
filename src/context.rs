//! Rendering context - provides the theme to components during rendering

use crate::theme::Theme;

/// Context passed down the component tree during rendering
#[derive(Clone)]
pub struct RenderContext<'a> {
    /// Current theme
    pub theme: &'a Theme,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context from a theme
    pub fn new(theme: &'a Theme) -> Self {
        RenderContext { theme }
    }

    /// Create a child context with a different theme
    ///
    /// Controls configured with their own theme variant render their subtree
    /// through a child context.
    pub fn with_theme<'b>(&self, theme: &'b Theme) -> RenderContext<'b> {
        RenderContext { theme }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::TerminalCapabilities;
    use crate::theme::Variant;

    #[test]
    fn test_context_theme_override() {
        let caps = TerminalCapabilities::minimal();
        let light = Theme::light(caps);
        let dark = light.with_variant(Variant::Dark);

        let ctx = RenderContext::new(&light);
        let child = ctx.with_theme(&dark);

        assert_eq!(ctx.theme.variant, Variant::Light);
        assert_eq!(child.theme.variant, Variant::Dark);
    }
}
