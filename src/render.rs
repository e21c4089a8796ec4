use std::io::Write;

use crate::{error::PanelResult, models::PageControl};

/// Output seam for the panel
///
/// Stands in for the host page's DOM: one sink for the server-rendered
/// recommendations markup, one for the pagination controls. Each call
/// replaces the previous content of its sink.
pub trait Renderer: Send + Sync {
    /// Replace the recommendations container content with `html`, verbatim
    fn render_html(&mut self, html: &str) -> PanelResult<()>;

    /// Rebuild the pagination controls
    fn render_pagination(&mut self, controls: &[PageControl]) -> PanelResult<()>;
}

/// Renders the panel to a terminal-style writer
///
/// The active page is bracketed, e.g. `pages: 1 [2] 3`. No pagination line
/// is written when there are no pages.
pub struct TerminalRenderer<W: Write + Send + Sync> {
    out: W,
}

impl<W: Write + Send + Sync> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write + Send + Sync> Renderer for TerminalRenderer<W> {
    fn render_html(&mut self, html: &str) -> PanelResult<()> {
        writeln!(self.out, "{}", html)?;
        Ok(())
    }

    fn render_pagination(&mut self, controls: &[PageControl]) -> PanelResult<()> {
        if controls.is_empty() {
            return Ok(());
        }

        let line = controls
            .iter()
            .map(|control| {
                if control.active {
                    format!("[{}]", control.number)
                } else {
                    control.number.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(self.out, "pages: {}", line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::page_controls;

    #[test]
    fn test_terminal_renderer_writes_html_verbatim() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.render_html("<div>A</div>").unwrap();
        assert_eq!(String::from_utf8(renderer.out).unwrap(), "<div>A</div>\n");
    }

    #[test]
    fn test_terminal_renderer_marks_active_page() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.render_pagination(&page_controls(2, 3)).unwrap();
        assert_eq!(String::from_utf8(renderer.out).unwrap(), "pages: 1 [2] 3\n");
    }

    #[test]
    fn test_terminal_renderer_skips_empty_pagination() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.render_pagination(&[]).unwrap();
        assert!(renderer.out.is_empty());
    }
}
