//! Builders for the repeated structures of a design.

use blockgen_common::{
    numbers::{BitCount, Positive},
    util::log2_ceil,
};
use blockgen_vhdl::{
    object::ObjectType,
    port::{Mode, Port},
    process::statement::{case::CaseArm, Block},
};
use itertools::Itertools;

/// `prefix0`, `prefix1`, ..., `prefix{count-1}`
pub fn indexed_names(prefix: &str, count: u32) -> Vec<String> {
    (0..count).map(|i| format!("{}{}", prefix, i)).collect()
}

/// `prefix0, prefix1, ...`, for sensitivity and argument lists.
pub fn joined_names(prefix: &str, count: u32) -> String {
    (0..count).map(|i| format!("{}{}", prefix, i)).join(", ")
}

/// One port per index, all of the same mode and type.
pub fn indexed_port_list(prefix: &str, count: u32, mode: Mode, typ: &ObjectType) -> Vec<Port> {
    indexed_names(prefix, count)
        .into_iter()
        .map(|name| Port::new(name, mode, typ.clone()))
        .collect()
}

/// One `when i =>` arm per index, in ascending order. The `when others` arm
/// is left to the caller.
pub fn case_arms(count: u32, arm: impl Fn(u32) -> Block) -> Vec<CaseArm> {
    (0..count).map(|i| CaseArm::new(i.to_string(), arm(i))).collect()
}

/// The width of a selector over `count` alternatives. Never less than one
/// bit.
pub fn selector_width(count: Positive) -> BitCount {
    BitCount::new(log2_ceil(count)).unwrap_or(BitCount::MIN)
}
