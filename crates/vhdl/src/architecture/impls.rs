use textwrap::indent;

use crate::{common::vhdl_name::VhdlName, declaration::DeclareWithIndent};

use super::{Architecture, ArchitectureBody};

impl Architecture {
    pub fn new(identifier: VhdlName, entity: VhdlName, body: ArchitectureBody) -> Self {
        Architecture {
            identifier,
            entity,
            body,
        }
    }

    /// The entity this architecture implements.
    pub fn entity(&self) -> &VhdlName {
        &self.entity
    }

    pub fn body(&self) -> &ArchitectureBody {
        &self.body
    }
}

/// Joins declared items one per line. An empty line separates items for
/// which `spaced` holds from their neighbours.
fn join_spaced<T>(items: &[T], indent_style: &str, spaced: impl Fn(&T) -> bool) -> String
where
    T: DeclareWithIndent,
{
    let mut result = String::new();
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            result.push('\n');
            if spaced(item) || spaced(&items[idx - 1]) {
                result.push('\n');
            }
        }
        result.push_str(&item.declare_with_indent(indent_style));
    }
    result
}

impl DeclareWithIndent for Architecture {
    fn declare_with_indent(&self, indent_style: &str) -> String {
        let mut result = format!("architecture {} of {} is\n", self.identifier, self.entity);
        let declarations = join_spaced(&self.body.declarations, indent_style, |declaration| {
            declaration.is_subprogram()
        });
        if !declarations.is_empty() {
            result.push_str(&indent(&declarations, indent_style));
            result.push('\n');
        }
        result.push_str("begin\n");
        let statements = join_spaced(&self.body.statements, indent_style, |statement| {
            statement.is_process()
        });
        if !statements.is_empty() {
            result.push_str(&indent(&statements, indent_style));
            result.push('\n');
        }
        result.push_str(format!("end {};\n", self.identifier).as_str());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        declaration::{Declare, ObjectDeclaration},
        object::ObjectType,
        process::{statement::SequentialStatement, Process},
        statement::Statement,
        test_tools::{bits, name},
    };

    #[test]
    fn architecture_declare() {
        let body = ArchitectureBody::new(
            vec![ObjectDeclaration::signal("q_reg", ObjectType::bit_vector(bits(4))).into()],
            vec![
                Process::clocked(
                    "clk",
                    vec![SequentialStatement::signal_assignment("q_reg", "d")],
                )
                .into(),
                Statement::assignment("q", "q_reg"),
            ],
        );
        let architecture = Architecture::new(name("rtl"), name("test"), body);
        assert_eq!(
            architecture.declare(),
            "architecture rtl of test is
    signal q_reg : std_logic_vector(3 downto 0);
begin
    process(clk)
    begin
        if rising_edge(clk) then
            q_reg <= d;
        end if;
    end process;

    q <= q_reg;
end rtl;
"
        );
    }

    #[test]
    fn empty_architecture() {
        let architecture = Architecture::new(name("a1"), name("test"), ArchitectureBody::default());
        assert_eq!(architecture.declare(), "architecture a1 of test is\nbegin\nend a1;\n");
    }
}
