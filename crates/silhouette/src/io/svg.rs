//! SVG export of the fitted path: a `M`, repeated `C`, `Z` command
//! sequence, consumable by any vector-path renderer.

use crate::{
    error::Result,
    types::{BezierPath, TracedOutline},
};

impl BezierPath {
    /// Path data in SVG syntax (`M x y C c1 c2 end ... Z`).
    pub fn to_svg_path_data(&self) -> String {
        let mut d = format!("M {:.2} {:.2}", self.start[0], self.start[1]);
        for seg in &self.segments {
            d.push_str(&format!(
                " C {:.2} {:.2}, {:.2} {:.2}, {:.2} {:.2}",
                seg.cp1[0], seg.cp1[1], seg.cp2[0], seg.cp2[1], seg.end[0], seg.end[1]
            ));
        }
        d.push_str(" Z");
        d
    }
}

impl TracedOutline {
    /// Wrap the path in a minimal standalone SVG document sized to the
    /// mask it was traced on.
    pub fn to_svg_document(&self, fill: &str) -> String {
        format!(
            concat!(
                "<svg xmlns=\"http://www.w3.org/2000/svg\" ",
                "width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
                "  <path d=\"{d}\" fill=\"{fill}\"/>\n",
                "</svg>\n"
            ),
            w = self.mask_width,
            h = self.mask_height,
            d = self.path.to_svg_path_data(),
            fill = fill,
        )
    }

    pub fn save_svg(&self, path: &str, fill: &str) -> Result<()> {
        std::fs::write(path, self.to_svg_document(fill))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BezierSegment;

    fn sample_path() -> BezierPath {
        BezierPath {
            start: [4.0, 4.5],
            segments: vec![
                BezierSegment {
                    cp1: [5.0, 4.0],
                    cp2: [7.0, 6.0],
                    end: [8.0, 8.0],
                },
                BezierSegment {
                    cp1: [7.0, 9.0],
                    cp2: [5.0, 6.0],
                    end: [4.0, 4.5],
                },
            ],
        }
    }

    #[test]
    fn path_data_is_a_closed_cubic_sequence() {
        let d = sample_path().to_svg_path_data();
        assert!(d.starts_with("M 4.00 4.50"));
        assert_eq!(d.matches(" C ").count(), 2);
        assert!(d.ends_with(" Z"));
    }

    #[test]
    fn svg_document_embeds_mask_dimensions() {
        let outline = TracedOutline {
            path: sample_path(),
            mask_width: 12,
            mask_height: 9,
        };
        let svg = outline.to_svg_document("#000");
        assert!(svg.contains("viewBox=\"0 0 12 9\""));
        assert!(svg.contains("fill=\"#000\""));
        assert!(svg.contains("M 4.00 4.50"));
    }
}
