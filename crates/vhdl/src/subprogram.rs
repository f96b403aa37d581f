use textwrap::indent;

use crate::{
    common::vhdl_name::VhdlName,
    declaration::{Declare, DeclareWithIndent, ObjectDeclaration},
    object::ObjectType,
    port::Parameter,
    process::statement::{declare_nested, Block},
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SubprogramKind {
    /// A function returning a value of the given type.
    Function(ObjectType),
    Procedure,
}

/// A function or procedure body, declared within an architecture.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subprogram {
    identifier: VhdlName,
    kind: SubprogramKind,
    parameters: Vec<Parameter>,
    /// Variables in the declarative part.
    variables: Vec<ObjectDeclaration>,
    statements: Block,
}

impl Subprogram {
    pub fn function(
        identifier: VhdlName,
        parameters: Vec<Parameter>,
        return_type: ObjectType,
        statements: Block,
    ) -> Self {
        Subprogram {
            identifier,
            kind: SubprogramKind::Function(return_type),
            parameters,
            variables: vec![],
            statements,
        }
    }

    pub fn procedure(identifier: VhdlName, parameters: Vec<Parameter>, statements: Block) -> Self {
        Subprogram {
            identifier,
            kind: SubprogramKind::Procedure,
            parameters,
            variables: vec![],
            statements,
        }
    }

    /// Return this subprogram with a variable added to its declarative part.
    pub fn with_variable(mut self, variable: ObjectDeclaration) -> Self {
        self.variables.push(variable);
        self
    }

    pub fn kind(&self) -> &SubprogramKind {
        &self.kind
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn variables(&self) -> &[ObjectDeclaration] {
        &self.variables
    }

    pub fn statements(&self) -> &Block {
        &self.statements
    }
}

impl DeclareWithIndent for Subprogram {
    fn declare_with_indent(&self, indent_style: &str) -> String {
        let keyword = match self.kind {
            SubprogramKind::Function(_) => "function",
            SubprogramKind::Procedure => "procedure",
        };
        let parameters = self
            .parameters
            .iter()
            .map(|parameter| parameter.declare())
            .collect::<Vec<_>>()
            .join(";\n");

        let mut result = format!("{} {}(\n", keyword, self.identifier);
        result.push_str(&indent(&parameters, indent_style));
        result.push(')');
        match &self.kind {
            SubprogramKind::Function(return_type) => {
                result.push('\n');
                result.push_str(
                    format!("{}return {} is\n", indent_style, return_type.type_mark()).as_str(),
                );
            }
            SubprogramKind::Procedure => result.push_str(" is\n"),
        }
        for variable in &self.variables {
            result.push_str(format!("{}{}\n", indent_style, variable.declare()).as_str());
        }
        result.push_str("begin\n");
        result.push_str(&declare_nested(&self.statements, indent_style));
        result.push_str(format!("end {};", keyword).as_str());
        result
    }
}
