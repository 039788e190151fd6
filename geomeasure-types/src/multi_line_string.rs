use serde::{Deserialize, Serialize};

use crate::line_string::LineString;

/// A set of line strings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MultiLineString {
    /// Inner line strings.
    pub parts: Vec<LineString>,
}

impl MultiLineString {
    /// Returns reference to the inner line strings.
    pub fn parts(&self) -> &[LineString] {
        &self.parts
    }

    /// Iterates over the line strings.
    pub fn line_strings(&self) -> impl Iterator<Item = &LineString> {
        self.parts.iter()
    }
}

impl From<Vec<LineString>> for MultiLineString {
    fn from(parts: Vec<LineString>) -> Self {
        Self { parts }
    }
}
