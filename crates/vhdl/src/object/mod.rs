use blockgen_common::numbers::{BitCount, NonNegative};

use crate::{declaration::Declare, expression::others};

pub mod array;

use self::array::ArrayType;

/// The type of a VHDL object (port, signal, variable or parameter).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectType {
    /// `std_logic`
    Bit,
    /// `std_logic_vector(width-1 downto 0)`
    BitVector(BitCount),
    /// Unconstrained `integer`
    Integer,
    /// `integer range 0 to high`
    IntegerRange(NonNegative),
    /// A reference to a declared array type.
    Array(Box<ArrayType>),
}

impl ObjectType {
    pub fn bit_vector(width: BitCount) -> Self {
        ObjectType::BitVector(width)
    }

    /// The type mark without any constraint, as required for function
    /// return types.
    pub fn type_mark(&self) -> String {
        match self {
            ObjectType::Bit => "std_logic".to_string(),
            ObjectType::BitVector(_) => "std_logic_vector".to_string(),
            ObjectType::Integer | ObjectType::IntegerRange(_) => "integer".to_string(),
            ObjectType::Array(array) => array.identifier().to_string(),
        }
    }

    /// An expression giving every bit of this type the value `'0'`.
    pub fn zero(&self) -> String {
        match self {
            ObjectType::Bit => "'0'".to_string(),
            ObjectType::BitVector(_) => others("'0'"),
            ObjectType::Integer | ObjectType::IntegerRange(_) => "0".to_string(),
            ObjectType::Array(array) => others(&array.element().zero()),
        }
    }
}

impl Declare for ObjectType {
    fn declare(&self) -> String {
        match self {
            ObjectType::Bit => "std_logic".to_string(),
            ObjectType::BitVector(width) => {
                format!("std_logic_vector({} downto 0)", width.get() - 1)
            }
            ObjectType::Integer => "integer".to_string(),
            ObjectType::IntegerRange(high) => format!("integer range 0 to {}", high),
            ObjectType::Array(array) => array.identifier().to_string(),
        }
    }
}

impl From<ArrayType> for ObjectType {
    fn from(array: ArrayType) -> Self {
        ObjectType::Array(Box::new(array))
    }
}
