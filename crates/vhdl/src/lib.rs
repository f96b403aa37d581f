//! VHDL Properties
//!
//! The goal of this crate is to describe VHDL in Rust, for the purposes of design generation

pub mod architecture;
pub mod common;
pub mod declaration;
pub mod design_file;
pub mod entity;
pub mod expression;
pub mod object;
pub mod port;
pub mod process;
pub mod statement;
pub mod subprogram;
pub mod traits;
pub mod usings;

#[cfg(test)]
pub(crate) mod test_tools;
