//! Builders for the expressions used in generated designs.

use std::fmt::Display;

use itertools::Itertools;

pub const LOGIC_LOW: &str = "'0'";
pub const LOGIC_HIGH: &str = "'1'";

/// `(others => value)`
pub fn others(value: &str) -> String {
    format!("(others => {})", value)
}

/// `to_integer(unsigned(vector))`
pub fn to_integer(vector: &str) -> String {
    format!("to_integer(unsigned({}))", vector)
}

/// `std_logic_vector(to_unsigned(value, width))`
pub fn to_vector(value: u64, width: u32) -> String {
    format!("std_logic_vector(to_unsigned({}, {}))", value, width)
}

/// `name(index)`
pub fn index(name: &str, index: impl Display) -> String {
    format!("{}({})", name, index)
}

/// `name(high downto low)`
pub fn slice(name: &str, high: u32, low: u32) -> String {
    format!("{}({} downto {})", name, high, low)
}

/// `left & right`
pub fn concat(left: &str, right: &str) -> String {
    format!("{} & {}", left, right)
}

/// `left = right`
pub fn equals(left: &str, right: impl Display) -> String {
    format!("{} = {}", left, right)
}

/// `signal = '1'`
pub fn is_high(signal: &str) -> String {
    equals(signal, LOGIC_HIGH)
}

/// `not value`
pub fn not(value: &str) -> String {
    format!("not {}", value)
}

/// `rising_edge(clk)`
pub fn rising_edge(clk: &str) -> String {
    format!("rising_edge({})", clk)
}

/// `name(arg0, arg1, ...)`
pub fn call<I>(name: impl Display, args: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    format!("{}({})", name, args.into_iter().join(", "))
}

/// The value of `vector` shifted left by one position, with `fill` entering at
/// the lowest bit.
///
/// A one-bit vector has no bits to keep, so the result is an aggregate of
/// `fill` alone.
pub fn shift_left(vector: &str, width: u32, fill: &str) -> String {
    if width > 1 {
        concat(&slice(vector, width - 2, 0), fill)
    } else {
        format!("(0 => {})", fill)
    }
}
