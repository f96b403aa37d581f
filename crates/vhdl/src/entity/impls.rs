use blockgen_common::traits::{Document, Documents};
use textwrap::indent;

use crate::{
    common::vhdl_name::VhdlName,
    declaration::{Declare, DeclareWithIndent},
    port::Port,
    traits::VhdlDocument,
};

use super::Entity;

impl DeclareWithIndent for Entity {
    fn declare_with_indent(&self, pre: &str) -> String {
        let mut result = String::new();
        if let Some(doc) = self.vhdl_doc() {
            result.push_str(&doc);
        }
        result.push_str(format!("entity {} is\n", self.identifier).as_str());
        let mut port_body = "port (\n".to_string();
        let ports = self
            .ports()
            .iter()
            .map(|x| x.declare())
            .collect::<Vec<String>>()
            .join(";\n");
        port_body.push_str(&indent(&ports, pre));
        port_body.push_str("\n);\n");
        result.push_str(&indent(&port_body, pre));
        result.push_str(format!("end {};\n", self.identifier).as_str());
        result
    }
}

impl Document for Entity {
    fn doc(&self) -> Option<&String> {
        self.doc.as_ref()
    }
}

impl Documents for Entity {
    fn set_doc(&mut self, doc: impl Into<String>) {
        self.doc = Some(doc.into())
    }
}

impl Entity {
    /// Create a new entity.
    pub fn new(identifier: VhdlName, ports: Vec<Port>) -> Entity {
        Entity {
            identifier,
            ports,
            doc: None,
        }
    }

    /// Return a reference to the ports of this entity.
    pub fn ports(&self) -> &Vec<Port> {
        &self.ports
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_tools::simple_entity;

    #[test]
    fn entity_declare() {
        let entity = simple_entity().with_doc(" My awesome\n Entity");
        assert_eq!(
            entity.declare(),
            "-- My awesome
-- Entity
entity test is
    port (
        clk : in std_logic;
        a : in std_logic_vector(7 downto 0);
        b : out std_logic_vector(7 downto 0)
    );
end test;
"
        );
    }

    #[test]
    fn entity_declare_two_space_indent() {
        assert_eq!(
            simple_entity().declare_with_indent("  "),
            "entity test is
  port (
    clk : in std_logic;
    a : in std_logic_vector(7 downto 0);
    b : out std_logic_vector(7 downto 0)
  );
end test;
"
        );
    }
}
