use crate::{
    architecture::Architecture,
    declaration::DeclareWithIndent,
    entity::Entity,
    usings::{DeclareUsings, ListUsings, Usings},
};

/// A complete design unit: context clause, entity and its architecture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignFile {
    usings: Usings,
    entity: Entity,
    architecture: Architecture,
}

impl DesignFile {
    pub fn new(usings: Usings, entity: Entity, architecture: Architecture) -> Self {
        DesignFile {
            usings,
            entity,
            architecture,
        }
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn architecture(&self) -> &Architecture {
        &self.architecture
    }
}

impl ListUsings for DesignFile {
    fn list_usings(&self) -> Usings {
        self.usings.clone()
    }
}

impl DeclareWithIndent for DesignFile {
    fn declare_with_indent(&self, indent_style: &str) -> String {
        let mut result = self.declare_usings();
        result.push_str(&self.entity.declare_with_indent(indent_style));
        result.push('\n');
        result.push_str(&self.architecture.declare_with_indent(indent_style));
        result
    }
}
