//! Reasons a generation request can be rejected.

use std::{error, fmt};

use blockgen_common::error::Error;
use blockgen_vhdl::common::vhdl_name::NameViolation;
use itertools::Itertools;

use crate::naming::Role;

/// The storage a design would occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceEstimate {
    pub entries: u64,
    pub bits_per_entry: u32,
}

impl ResourceEstimate {
    pub fn new(entries: u64, bits_per_entry: u32) -> Self {
        ResourceEstimate {
            entries,
            bits_per_entry,
        }
    }

    pub fn total_bits(&self) -> u128 {
        u128::from(self.entries) * u128::from(self.bits_per_entry)
    }
}

impl fmt::Display for ResourceEstimate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} entries of {} bits ({} bits total)",
            self.entries,
            self.bits_per_entry,
            self.total_bits()
        )
    }
}

/// The first rule a request broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A user-supplied name is not a usable VHDL identifier.
    Identifier {
        role: Role,
        name: String,
        reason: NameViolation,
    },
    /// Two or more user-supplied names coincide, ignoring case.
    DuplicateIdentifiers { names: Vec<String> },
    MissingParameter { name: String },
    /// A parameter has a value of the wrong kind.
    TypeMismatch { name: String, expected: String },
    ConstraintViolation { name: String, reason: String },
    /// The design exceeds a resource threshold and the request did not
    /// accept large resources.
    ConfirmationRequired {
        field: String,
        estimate: ResourceEstimate,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationError::Identifier { role, name, reason } => {
                write!(f, "{} name `{}` {}", role, name, reason)
            }
            ValidationError::DuplicateIdentifiers { names } => write!(
                f,
                "Entity, Architecture, and Function/Procedure names must be unique (`{}` coincide)",
                names.iter().join("`, `")
            ),
            ValidationError::MissingParameter { name } => {
                write!(f, "missing parameter `{}`", name)
            }
            ValidationError::TypeMismatch { name, expected } => {
                write!(f, "parameter `{}` must be {}", name, expected)
            }
            ValidationError::ConstraintViolation { name, reason } => {
                write!(f, "parameter `{}` {}", name, reason)
            }
            ValidationError::ConfirmationRequired { field, estimate } => write!(
                f,
                "large `{}` requires confirmation: the design would hold {}",
                field, estimate
            ),
        }
    }
}

impl error::Error for ValidationError {}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::RequestError(err.to_string())
    }
}
