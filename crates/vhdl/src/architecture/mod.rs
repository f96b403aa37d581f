use crate::{
    common::vhdl_name::VhdlName, declaration::ArchitectureDeclaration, statement::Statement,
};

pub mod impls;

/// The declarative and statement parts of an architecture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ArchitectureBody {
    /// The declaration part of the architecture
    declarations: Vec<ArchitectureDeclaration>,
    /// The statement part of the architecture
    statements: Vec<Statement>,
}

impl ArchitectureBody {
    pub fn new(declarations: Vec<ArchitectureDeclaration>, statements: Vec<Statement>) -> Self {
        ArchitectureBody {
            declarations,
            statements,
        }
    }

    pub fn declarations(&self) -> &Vec<ArchitectureDeclaration> {
        &self.declarations
    }

    pub fn statements(&self) -> &Vec<Statement> {
        &self.statements
    }
}

/// An architecture
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Architecture {
    /// Name of the architecture
    identifier: VhdlName,
    /// Entity which this architecture is for
    entity: VhdlName,
    body: ArchitectureBody,
}
