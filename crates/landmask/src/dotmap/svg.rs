//! Minimal SVG document assembly for dot maps.
use std::fmt::Write as _;
use std::path::Path;

use crate::dotmap::style::Rgb;
use crate::error::{Error, Result};

/// An SVG document under construction: a sized root element with a
/// transparent background and a flat list of circle children.
#[derive(Clone, Debug)]
pub struct SvgDocument {
    width: u32,
    height: u32,
    body: String,
    circles: usize,
}

impl SvgDocument {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            body: String::new(),
            circles: 0,
        }
    }

    /// Append one circle element.
    pub fn circle(&mut self, cx: u32, cy: u32, r: f32, fill: Rgb, opacity: f32) -> &mut Self {
        // write! into a String cannot fail.
        let _ = write!(
            self.body,
            r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{fill}" opacity="{opacity:.2}" />"#
        );
        self.circles += 1;
        self
    }

    /// Number of circle elements appended so far.
    pub fn circle_count(&self) -> usize {
        self.circles
    }

    /// Render the complete document.
    pub fn to_svg_string(&self) -> String {
        format!(
            r#"<svg viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg" style="background: transparent;">{}</svg>"#,
            self.width, self.height, self.body
        )
    }

    /// Write the complete document to `path` in one operation.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_svg_string()).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
