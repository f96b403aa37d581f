use std::fmt;

use crate::{object::array::ArrayType, object::ObjectType, subprogram::Subprogram};

/// Generate trait for generic VHDL declarations.
pub trait Declare {
    /// Generate a VHDL declaration from self.
    fn declare(&self) -> String;
}

/// Allows users to specify the indent of scopes when declaring VHDL
///
/// E.g., when `pre` is set to four spaces
/// ```vhdl
/// entity mux2 is
///     port (
///         inp0 : in std_logic_vector(7 downto 0);
///         inp1 : in std_logic_vector(7 downto 0);
///         sel : in std_logic_vector(0 downto 0);
///         bitout : out std_logic_vector(7 downto 0)
///     );
/// end mux2;
/// ```
pub trait DeclareWithIndent {
    fn declare_with_indent(&self, indent_style: &str) -> String;
}

/// The indent used by [`Declare`] for types which declare scopes.
pub const DEFAULT_INDENT: &str = "    ";

impl<T: DeclareWithIndent> Declare for T {
    fn declare(&self) -> String {
        self.declare_with_indent(DEFAULT_INDENT)
    }
}

/// The kind of object declared (signal or variable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Signal,
    Variable,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ObjectKind::Signal => write!(f, "signal"),
            ObjectKind::Variable => write!(f, "variable"),
        }
    }
}

/// An object declaration, e.g. `signal counter : integer range 0 to 3;`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectDeclaration {
    kind: ObjectKind,
    identifier: String,
    typ: ObjectType,
    default: Option<String>,
}

impl ObjectDeclaration {
    pub fn signal(identifier: impl Into<String>, typ: ObjectType) -> Self {
        ObjectDeclaration {
            kind: ObjectKind::Signal,
            identifier: identifier.into(),
            typ,
            default: None,
        }
    }

    pub fn variable(identifier: impl Into<String>, typ: ObjectType) -> Self {
        ObjectDeclaration {
            kind: ObjectKind::Variable,
            identifier: identifier.into(),
            typ,
            default: None,
        }
    }

    /// Initialize the object to its zero value.
    pub fn zeroed(mut self) -> Self {
        self.default = Some(self.typ.zero());
        self
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn typ(&self) -> &ObjectType {
        &self.typ
    }

    pub fn default(&self) -> Option<&String> {
        self.default.as_ref()
    }
}

impl Declare for ObjectDeclaration {
    fn declare(&self) -> String {
        match &self.default {
            Some(default) => format!(
                "{} {} : {} := {};",
                self.kind,
                self.identifier,
                self.typ.declare(),
                default
            ),
            None => format!("{} {} : {};", self.kind, self.identifier, self.typ.declare()),
        }
    }
}

/// Architecture declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArchitectureDeclaration {
    Type(ArrayType),
    Object(ObjectDeclaration),
    Subprogram(Subprogram),
}

impl ArchitectureDeclaration {
    pub fn is_subprogram(&self) -> bool {
        matches!(self, ArchitectureDeclaration::Subprogram(_))
    }
}

impl DeclareWithIndent for ArchitectureDeclaration {
    fn declare_with_indent(&self, indent_style: &str) -> String {
        match self {
            ArchitectureDeclaration::Type(typ) => typ.declare(),
            ArchitectureDeclaration::Object(object) => object.declare(),
            ArchitectureDeclaration::Subprogram(subprogram) => {
                subprogram.declare_with_indent(indent_style)
            }
        }
    }
}

impl From<ArrayType> for ArchitectureDeclaration {
    fn from(typ: ArrayType) -> Self {
        ArchitectureDeclaration::Type(typ)
    }
}

impl From<ObjectDeclaration> for ArchitectureDeclaration {
    fn from(object: ObjectDeclaration) -> Self {
        ArchitectureDeclaration::Object(object)
    }
}

impl From<Subprogram> for ArchitectureDeclaration {
    fn from(subprogram: Subprogram) -> Self {
        ArchitectureDeclaration::Subprogram(subprogram)
    }
}
