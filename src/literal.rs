//! The converted frames and their rendering as a nested string-slice literal
//! that can be pasted straight into source code.

use std::fmt;

/// One sprite frame, one string of glyphs per 2px band.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    rows: Vec<String>,
}

impl Frame {
    pub(crate) fn new(rows: Vec<String>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}

/// Every frame of a sprite sheet, in sheet order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frames {
    frames: Vec<Frame>,
}

impl Frames {
    pub(crate) fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Renders the frames as:
    ///
    /// ```text
    /// frames := [][]string{
    /// {
    /// "<row>",
    /// },
    /// }
    /// ```
    pub fn to_literal(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Frames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "frames := [][]string{{")?;
        for frame in &self.frames {
            writeln!(f, "{{")?;
            for row in &frame.rows {
                writeln!(f, "\"{row}\",")?;
            }
            writeln!(f, "}},")?;
        }
        writeln!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_literal() {
        let frames = Frames::new(vec![
            Frame::new(vec!["▗▖".to_string(), "██".to_string()]),
            Frame::new(vec!["  ".to_string(), "▚▞".to_string()]),
        ]);

        assert_eq!(
            frames.to_literal(),
            "frames := [][]string{\n\
             {\n\
             \"▗▖\",\n\
             \"██\",\n\
             },\n\
             {\n\
             \"  \",\n\
             \"▚▞\",\n\
             },\n\
             }\n"
        );
    }

    #[test]
    fn empty_sheet_still_closes() {
        assert_eq!(Frames::default().to_literal(), "frames := [][]string{\n}\n");
    }
}
