use std::fmt;

use blockgen_common::traits::Identify;

use crate::{declaration::Declare, declaration::ObjectKind, object::ObjectType};

/// A port.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Port {
    /// Port identifier.
    identifier: String,
    /// Port mode.
    mode: Mode,
    /// Port type.
    typ: ObjectType,
}

impl Port {
    /// Create a new port.
    pub fn new(name: impl Into<String>, mode: Mode, typ: ObjectType) -> Port {
        Port {
            identifier: name.into(),
            mode,
            typ,
        }
    }

    /// Create a new input port.
    pub fn input(name: impl Into<String>, typ: ObjectType) -> Port {
        Port::new(name, Mode::In, typ)
    }

    /// Create a new output port.
    pub fn output(name: impl Into<String>, typ: ObjectType) -> Port {
        Port::new(name, Mode::Out, typ)
    }

    /// Return the port mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Return the type of the port.
    pub fn typ(&self) -> &ObjectType {
        &self.typ
    }
}

impl Identify for Port {
    fn identifier(&self) -> String {
        self.identifier.clone()
    }
}

impl Declare for Port {
    fn declare(&self) -> String {
        format!("{} : {} {}", self.identifier, self.mode, self.typ.declare())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    In,
    Out,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mode::In => write!(f, "in"),
            Mode::Out => write!(f, "out"),
        }
    }
}

/// A formal parameter of a function or procedure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    class: Option<ObjectKind>,
    identifier: String,
    mode: Option<Mode>,
    typ: ObjectType,
}

impl Parameter {
    /// A parameter without explicit class or mode, as used by functions.
    pub fn new(identifier: impl Into<String>, typ: ObjectType) -> Self {
        Parameter {
            class: None,
            identifier: identifier.into(),
            mode: None,
            typ,
        }
    }

    /// A constant `in` parameter.
    pub fn input(identifier: impl Into<String>, typ: ObjectType) -> Self {
        Parameter {
            mode: Some(Mode::In),
            ..Parameter::new(identifier, typ)
        }
    }

    /// A signal parameter of the given mode.
    pub fn signal(identifier: impl Into<String>, mode: Mode, typ: ObjectType) -> Self {
        Parameter {
            class: Some(ObjectKind::Signal),
            identifier: identifier.into(),
            mode: Some(mode),
            typ,
        }
    }

    /// Parameter derived from an entity port, as a signal parameter of the
    /// same mode and type.
    pub fn signal_from_port(port: &Port) -> Self {
        Parameter::signal(port.identifier(), port.mode(), port.typ().clone())
    }

    /// Parameter derived from an entity port, without class or mode.
    pub fn from_port(port: &Port) -> Self {
        Parameter::new(port.identifier(), port.typ().clone())
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl Declare for Parameter {
    fn declare(&self) -> String {
        let mut result = String::new();
        if let Some(class) = self.class {
            result.push_str(format!("{} ", class).as_str());
        }
        result.push_str(format!("{} : ", self.identifier).as_str());
        if let Some(mode) = self.mode {
            result.push_str(format!("{} ", mode).as_str());
        }
        result.push_str(&self.typ.declare());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_tools::bits;

    #[test]
    fn declare_port() {
        let port = Port::input("inp0", ObjectType::bit_vector(bits(8)));
        assert_eq!(port.declare(), "inp0 : in std_logic_vector(7 downto 0)");
        assert_eq!(Port::output("clk_out", ObjectType::Bit).declare(), "clk_out : out std_logic");
    }

    #[test]
    fn declare_parameters() {
        let port = Port::input("inp0", ObjectType::bit_vector(bits(8)));
        assert_eq!(
            Parameter::from_port(&port).declare(),
            "inp0 : std_logic_vector(7 downto 0)"
        );
        assert_eq!(
            Parameter::signal_from_port(&port).declare(),
            "signal inp0 : in std_logic_vector(7 downto 0)"
        );
        assert_eq!(
            Parameter::input("sel", ObjectType::bit_vector(bits(2))).declare(),
            "sel : in std_logic_vector(1 downto 0)"
        );
        assert_eq!(
            Parameter::signal("next_reg", Mode::Out, ObjectType::bit_vector(bits(4))).declare(),
            "signal next_reg : out std_logic_vector(3 downto 0)"
        );
    }
}
