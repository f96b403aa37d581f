pub mod statement;

use itertools::Itertools;
use textwrap::indent;

use crate::declaration::DeclareWithIndent;

use self::statement::{Block, SequentialStatement};

/// A process, its sensitivity list and its statements.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Process {
    /// The sensitivity list of this process, in declaration order.
    sensitivity_list: Vec<String>,
    /// The process's statements.
    statements: Block,
}

impl Process {
    pub fn new<I>(sensitivity_list: I, statements: Block) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Process {
            sensitivity_list: sensitivity_list.into_iter().map(Into::into).collect(),
            statements,
        }
    }

    /// A process sensitive to `clk` only, running `statements` on its rising
    /// edge.
    pub fn clocked(clk: &str, statements: Block) -> Self {
        Process::new(
            [clk],
            vec![SequentialStatement::if_then(
                crate::expression::rising_edge(clk),
                statements,
            )],
        )
    }

    pub fn sensitivity_list(&self) -> &[String] {
        &self.sensitivity_list
    }

    pub fn statements(&self) -> &Block {
        &self.statements
    }
}

impl DeclareWithIndent for Process {
    fn declare_with_indent(&self, indent_style: &str) -> String {
        let mut result = format!("process({})\n", self.sensitivity_list.iter().join(", "));
        result.push_str("begin\n");
        result.push_str(&indent(
            &statement::declare_block(&self.statements, indent_style),
            indent_style,
        ));
        result.push_str("\nend process;");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{declaration::Declare, process::statement::SequentialStatement};

    #[test]
    fn declare_clocked_process() {
        let process = Process::clocked(
            "clk",
            vec![SequentialStatement::signal_assignment("q", "d")],
        );
        assert_eq!(
            process.declare(),
            "process(clk)
begin
    if rising_edge(clk) then
        q <= d;
    end if;
end process;"
        );
    }
}
