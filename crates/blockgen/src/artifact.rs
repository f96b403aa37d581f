use std::fmt;

/// The conventional extension of generated files.
pub const FILE_EXTENSION: &str = "vhdl";

/// `<entity>.vhdl`
pub fn suggested_file_name(entity: &str) -> String {
    format!("{}.{}", entity, FILE_EXTENSION)
}

/// The text of a generated design.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneratedArtifact {
    entity: String,
    text: String,
}

impl GeneratedArtifact {
    pub(crate) fn new(entity: impl Into<String>, text: String) -> Self {
        GeneratedArtifact {
            entity: entity.into(),
            text,
        }
    }

    /// The name of the generated entity.
    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn file_name(&self) -> String {
        suggested_file_name(&self.entity)
    }
}

impl fmt::Display for GeneratedArtifact {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
