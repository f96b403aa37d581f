use textwrap::indent;

use crate::declaration::DeclareWithIndent;

use super::{declare_block, declare_nested, Block};

/// One `when choice =>` arm of a case statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CaseArm {
    choice: String,
    block: Block,
}

impl CaseArm {
    pub fn new(choice: impl Into<String>, block: Block) -> Self {
        CaseArm {
            choice: choice.into(),
            block,
        }
    }

    pub fn choice(&self) -> &str {
        &self.choice
    }

    pub fn block(&self) -> &Block {
        &self.block
    }
}

impl DeclareWithIndent for CaseArm {
    /// Arms whose block fits on a single line are declared inline.
    fn declare_with_indent(&self, indent_style: &str) -> String {
        let block = declare_block(&self.block, indent_style);
        if block.contains('\n') {
            format!(
                "when {} =>\n{}",
                self.choice,
                declare_nested(&self.block, indent_style).trim_end()
            )
        } else {
            format!("when {} => {}", self.choice, block)
        }
    }
}

/// A case statement. The `when others` arm is always declared last.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Case {
    selector: String,
    arms: Vec<CaseArm>,
    others: Block,
}

impl Case {
    pub fn new(selector: impl Into<String>, arms: Vec<CaseArm>, others: Block) -> Self {
        Case {
            selector: selector.into(),
            arms,
            others,
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn arms(&self) -> &[CaseArm] {
        &self.arms
    }

    pub fn others(&self) -> &Block {
        &self.others
    }
}

impl DeclareWithIndent for Case {
    fn declare_with_indent(&self, indent_style: &str) -> String {
        let mut arms = self
            .arms
            .iter()
            .map(|arm| arm.declare_with_indent(indent_style))
            .collect::<Vec<_>>();
        arms.push(CaseArm::new("others", self.others.clone()).declare_with_indent(indent_style));
        format!(
            "case {} is\n{}\nend case;",
            self.selector,
            indent(&arms.join("\n"), indent_style)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{declaration::Declare, process::statement::SequentialStatement};

    #[test]
    fn declare_case() {
        let case = Case::new(
            "to_integer(unsigned(sel))",
            vec![
                CaseArm::new("0", vec![SequentialStatement::signal_assignment("y", "a")]),
                CaseArm::new(
                    "1",
                    vec![
                        SequentialStatement::signal_assignment("y", "b"),
                        SequentialStatement::signal_assignment("z", "'1'"),
                    ],
                ),
            ],
            vec![],
        );
        assert_eq!(
            case.declare(),
            "case to_integer(unsigned(sel)) is
    when 0 => y <= a;
    when 1 =>
        y <= b;
        z <= '1';
    when others => null;
end case;"
        );
    }
}
