use crate::{
    declaration::DeclareWithIndent,
    process::{statement::Assignment, Process},
};

/// Statements in the statement part of an architecture.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Statement {
    /// A concurrent signal assignment.
    Assignment(Assignment),
    Process(Process),
}

impl Statement {
    pub fn assignment(target: impl Into<String>, value: impl Into<String>) -> Self {
        Statement::Assignment(Assignment::signal(target, value))
    }

    pub fn is_process(&self) -> bool {
        matches!(self, Statement::Process(_))
    }
}

impl DeclareWithIndent for Statement {
    fn declare_with_indent(&self, indent_style: &str) -> String {
        match self {
            Statement::Assignment(assignment) => assignment.declare_with_indent(indent_style),
            Statement::Process(process) => process.declare_with_indent(indent_style),
        }
    }
}

impl From<Process> for Statement {
    fn from(process: Process) -> Self {
        Statement::Process(process)
    }
}

impl From<Assignment> for Statement {
    fn from(assignment: Assignment) -> Self {
        Statement::Assignment(assignment)
    }
}
