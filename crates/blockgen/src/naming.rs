//! The user-supplied names of a design.

use std::fmt;

use blockgen_vhdl::common::vhdl_name::{NameViolation, VhdlName};
use crate::error::ValidationError;

/// What a user-supplied name is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Entity,
    Architecture,
    Subprogram,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Role::Entity => write!(f, "Entity"),
            Role::Architecture => write!(f, "Architecture"),
            Role::Subprogram => write!(f, "Function/Procedure"),
        }
    }
}

/// Validates `name` as an identifier for `role`.
pub fn validate_identifier(name: &str, role: Role) -> Result<VhdlName, ValidationError> {
    VhdlName::validate(name).map_err(|reason| ValidationError::Identifier {
        role,
        name: name.to_string(),
        reason,
    })
}

/// The names of the entity, its architecture and the helper subprogram, as
/// supplied by the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamingSet {
    pub entity: String,
    pub architecture: String,
    /// Required even for styles without a subprogram.
    pub subprogram: String,
}

impl NamingSet {
    pub fn new(
        entity: impl Into<String>,
        architecture: impl Into<String>,
        subprogram: impl Into<String>,
    ) -> Self {
        NamingSet {
            entity: entity.into(),
            architecture: architecture.into(),
            subprogram: subprogram.into(),
        }
    }

    /// Validates each name in turn, then checks that no two names coincide.
    pub fn validate(&self) -> Result<ValidatedNames, ValidationError> {
        let entity = validate_identifier(&self.entity, Role::Entity)?;
        let architecture = validate_identifier(&self.architecture, Role::Architecture)?;
        let subprogram = validate_identifier(&self.subprogram, Role::Subprogram)?;

        let all = [&entity, &architecture, &subprogram];
        for (i, name) in all.iter().enumerate() {
            if all[i + 1..].contains(name) {
                return Err(ValidationError::DuplicateIdentifiers {
                    names: all
                        .iter()
                        .filter(|other| *other == name)
                        .map(|other| other.to_string())
                        .collect(),
                });
            }
        }

        Ok(ValidatedNames {
            entity,
            architecture,
            subprogram,
        })
    }
}

/// A set of distinct, valid identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedNames {
    entity: VhdlName,
    architecture: VhdlName,
    subprogram: VhdlName,
}

impl ValidatedNames {
    pub fn entity(&self) -> &VhdlName {
        &self.entity
    }

    pub fn architecture(&self) -> &VhdlName {
        &self.architecture
    }

    pub fn subprogram(&self) -> &VhdlName {
        &self.subprogram
    }

    /// Rejects a subprogram name which the generated design already declares.
    pub(crate) fn check_clash(
        &self,
        clash: impl FnOnce(&str) -> Option<String>,
    ) -> Result<(), ValidationError> {
        match clash(self.subprogram.as_str()) {
            Some(generated) => Err(ValidationError::Identifier {
                role: Role::Subprogram,
                name: self.subprogram.to_string(),
                reason: NameViolation::Clash(generated),
            }),
            None => Ok(()),
        }
    }
}

impl From<&ValidatedNames> for NamingSet {
    fn from(names: &ValidatedNames) -> Self {
        NamingSet::new(
            names.entity.as_str(),
            names.architecture.as_str(),
            names.subprogram.as_str(),
        )
    }
}
