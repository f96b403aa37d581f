use blockgen_common::numbers::BitCount;

use crate::{
    common::vhdl_name::VhdlName,
    entity::Entity,
    object::ObjectType,
    port::Port,
};

pub(crate) fn bits(width: u32) -> BitCount {
    BitCount::new(width).unwrap()
}

pub(crate) fn name(name: &str) -> VhdlName {
    VhdlName::try_new(name).unwrap()
}

pub(crate) fn simple_entity() -> Entity {
    Entity::new(
        name("test"),
        vec![
            Port::input("clk", ObjectType::Bit),
            Port::input("a", ObjectType::bit_vector(bits(8))),
            Port::output("b", ObjectType::bit_vector(bits(8))),
        ],
    )
}
