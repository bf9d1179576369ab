//! Text normalization applied before tokenization

/// Literal removals applied to every input file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preprocessor {
    join_lines: bool,
    removals: Vec<String>,
}

impl Preprocessor {
    /// `join_lines` drops line breaks; `removals` are deleted verbatim, in order
    pub fn new(join_lines: bool, removals: Vec<String>) -> Self {
        let removals = removals.into_iter().filter(|r| !r.is_empty()).collect();
        Self {
            join_lines,
            removals,
        }
    }

    /// True when the text passes through unchanged
    pub fn is_identity(&self) -> bool {
        !self.join_lines && self.removals.is_empty()
    }

    /// Normalize one document
    pub fn apply(&self, text: &str) -> String {
        let mut text = if self.join_lines {
            text.replace(['\r', '\n'], "")
        } else {
            text.to_string()
        };
        for removal in &self.removals {
            text = text.replace(removal.as_str(), "");
        }
        text
    }
}
