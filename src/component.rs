//! Component system - trait and lifecycle for UI controls

use crate::context::RenderContext;
use crate::event::EventHandler;
use crate::layout::Rect;
use crate::render::Renderer;
use anyhow::Result;

/// Core component trait for all UI controls
///
/// Components are retained (tree structure and state live between frames)
/// while rendering is immediate: `render()` issues fresh drawing commands
/// each frame within the given bounds.
pub trait Component: EventHandler {
    /// Render the component to the given rectangle
    ///
    /// The context provides access to the active theme.
    fn render(&mut self, renderer: &mut Renderer, bounds: Rect, ctx: &RenderContext) -> Result<()>;

    /// Calculate minimum size needed for this component
    fn min_size(&self) -> (u16, u16) {
        (0, 0)
    }

    /// Called when the component is first mounted
    fn on_mount(&mut self) {}

    /// Called before the component is unmounted
    ///
    /// Controls holding process-wide resources (such as a click-outside
    /// registration) must release them here; `Drop` is the backstop.
    fn on_unmount(&mut self) {}

    /// Mark component as needing redraw
    fn mark_dirty(&mut self) {}

    /// Check if component needs redraw
    fn is_dirty(&self) -> bool {
        true
    }

    /// Get component name for debugging
    fn name(&self) -> &str {
        "Component"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventHandler;
    use crate::terminal::TerminalCapabilities;
    use crate::theme::Theme;

    struct TestComponent {
        dirty: bool,
    }

    impl EventHandler for TestComponent {}

    impl Component for TestComponent {
        fn render(
            &mut self,
            _renderer: &mut Renderer,
            _bounds: Rect,
            _ctx: &RenderContext,
        ) -> Result<()> {
            self.dirty = false;
            Ok(())
        }

        fn mark_dirty(&mut self) {
            self.dirty = true;
        }

        fn is_dirty(&self) -> bool {
            self.dirty
        }

        fn name(&self) -> &str {
            "TestComponent"
        }
    }

    #[test]
    fn test_component_dirty_tracking() {
        let mut comp = TestComponent { dirty: true };
        assert!(comp.is_dirty());

        let mut renderer = Renderer::headless();
        let theme = Theme::dark(TerminalCapabilities::minimal());
        let ctx = RenderContext::new(&theme);
        comp.render(&mut renderer, Rect::new(0, 0, 10, 10), &ctx)
            .unwrap();
        assert!(!comp.is_dirty());

        comp.mark_dirty();
        assert!(comp.is_dirty());
    }
}
