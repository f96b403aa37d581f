pub mod case;
pub mod ifelse;

use textwrap::indent;

use crate::{declaration::DeclareWithIndent, expression::call};

use self::{case::Case, ifelse::IfElse};

pub type Block = Vec<SequentialStatement>;

/// Whether an assignment targets a signal (`<=`) or a variable (`:=`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignmentKind {
    Signal,
    Variable,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assignment {
    kind: AssignmentKind,
    target: String,
    value: String,
}

impl Assignment {
    pub fn new(kind: AssignmentKind, target: impl Into<String>, value: impl Into<String>) -> Self {
        Assignment {
            kind,
            target: target.into(),
            value: value.into(),
        }
    }

    pub fn signal(target: impl Into<String>, value: impl Into<String>) -> Self {
        Assignment::new(AssignmentKind::Signal, target, value)
    }

    pub fn kind(&self) -> AssignmentKind {
        self.kind
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl DeclareWithIndent for Assignment {
    fn declare_with_indent(&self, _indent_style: &str) -> String {
        let operator = match self.kind {
            AssignmentKind::Signal => "<=",
            AssignmentKind::Variable => ":=",
        };
        format!("{} {} {};", self.target, operator, self.value)
    }
}

// REFER TO: https://insights.sigasi.com/tech/vhdl2008.ebnf/

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SequentialStatement {
    Assignment(Assignment),
    IfElse(IfElse),
    Case(Case),
    /// A procedure call.
    Call { procedure: String, args: Vec<String> },
    Return(String),
    Null,
}

impl SequentialStatement {
    pub fn signal_assignment(target: impl Into<String>, value: impl Into<String>) -> Self {
        SequentialStatement::Assignment(Assignment::signal(target, value))
    }

    pub fn variable_assignment(target: impl Into<String>, value: impl Into<String>) -> Self {
        SequentialStatement::Assignment(Assignment::new(AssignmentKind::Variable, target, value))
    }

    /// `if condition then block end if;`
    pub fn if_then(condition: impl Into<String>, block: Block) -> Self {
        SequentialStatement::IfElse(IfElse::new(condition, block))
    }

    /// `if condition then block else otherwise end if;`
    pub fn if_else(condition: impl Into<String>, block: Block, otherwise: Block) -> Self {
        SequentialStatement::IfElse(IfElse::new(condition, block).with_else(otherwise))
    }

    pub fn call<I>(procedure: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        SequentialStatement::Call {
            procedure: procedure.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn return_value(value: impl Into<String>) -> Self {
        SequentialStatement::Return(value.into())
    }
}

impl DeclareWithIndent for SequentialStatement {
    fn declare_with_indent(&self, indent_style: &str) -> String {
        match self {
            SequentialStatement::Assignment(assignment) => {
                assignment.declare_with_indent(indent_style)
            }
            SequentialStatement::IfElse(ifelse) => ifelse.declare_with_indent(indent_style),
            SequentialStatement::Case(case) => case.declare_with_indent(indent_style),
            SequentialStatement::Call { procedure, args } => format!("{};", call(procedure, args)),
            SequentialStatement::Return(value) => format!("return {};", value),
            SequentialStatement::Null => "null;".to_string(),
        }
    }
}

impl From<Assignment> for SequentialStatement {
    fn from(assignment: Assignment) -> Self {
        SequentialStatement::Assignment(assignment)
    }
}

impl From<IfElse> for SequentialStatement {
    fn from(ifelse: IfElse) -> Self {
        SequentialStatement::IfElse(ifelse)
    }
}

impl From<Case> for SequentialStatement {
    fn from(case: Case) -> Self {
        SequentialStatement::Case(case)
    }
}

/// Declare the statements of a block, one per line. An empty block declares
/// `null;`.
pub fn declare_block(block: &[SequentialStatement], indent_style: &str) -> String {
    if block.is_empty() {
        SequentialStatement::Null.declare_with_indent(indent_style)
    } else {
        block
            .iter()
            .map(|statement| statement.declare_with_indent(indent_style))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Declare a block nested one level deeper than its enclosing construct,
/// followed by a newline.
pub(crate) fn declare_nested(block: &[SequentialStatement], indent_style: &str) -> String {
    let mut result = indent(&declare_block(block, indent_style), indent_style);
    result.push('\n');
    result
}
