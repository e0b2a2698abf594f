pub mod svg;

use crate::{error::Result, types::TracedOutline};

impl TracedOutline {
    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save_json(&self, path: &str) -> Result<()> {
        std::fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BezierPath, BezierSegment};

    #[test]
    fn json_round_trip() {
        let outline = TracedOutline {
            path: BezierPath {
                start: [4.0, 4.0],
                segments: vec![BezierSegment {
                    cp1: [5.0, 4.0],
                    cp2: [7.0, 6.0],
                    end: [8.0, 8.0],
                }],
            },
            mask_width: 16,
            mask_height: 16,
        };
        let json = outline.to_json_string().unwrap();
        let back: TracedOutline = serde_json::from_str(&json).unwrap();
        assert_eq!(outline, back);
    }
}
