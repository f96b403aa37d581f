use crate::{common::vhdl_name::VhdlName, port::Port};

mod impls;

/// An Entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entity {
    /// Entity identifier.
    identifier: VhdlName,
    /// The ports of the entity.
    ports: Vec<Port>,
    /// Documentation.
    doc: Option<String>,
}
