use crate::{declaration::Declare, object::ObjectType};

/// A constrained array type declaration, `type name is array (0 to high) of element;`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArrayType {
    identifier: String,
    high: u64,
    element: ObjectType,
}

impl ArrayType {
    /// Create an array type with elements indexed `0 to high`.
    pub fn new(identifier: impl Into<String>, high: u64, element: ObjectType) -> Self {
        ArrayType {
            identifier: identifier.into(),
            high,
            element,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The highest index of the array.
    pub fn high(&self) -> u64 {
        self.high
    }

    pub fn element(&self) -> &ObjectType {
        &self.element
    }
}

impl Declare for ArrayType {
    fn declare(&self) -> String {
        format!(
            "type {} is array (0 to {}) of {};",
            self.identifier,
            self.high,
            self.element.declare()
        )
    }
}
