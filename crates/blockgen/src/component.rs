//! The component catalog and the code styles each component can be rendered in.

use std::{convert::TryFrom, fmt, str::FromStr};

use blockgen_common::error::{Error, Result};
use serde::Deserialize;

use crate::schema::Choice;

/// Normalizes a catalog label for lookup: lowercase, without spaces,
/// hyphens or underscores.
pub(crate) fn normalize(label: &str) -> String {
    label
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// One of the fixed digital building blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum ComponentKind {
    Mux,
    Demux,
    Decoder,
    Encoder,
    ShiftRegister,
    Memory,
    ClockDivider,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 7] = [
        ComponentKind::Mux,
        ComponentKind::Demux,
        ComponentKind::Decoder,
        ComponentKind::Encoder,
        ComponentKind::ShiftRegister,
        ComponentKind::Memory,
        ComponentKind::ClockDivider,
    ];

    /// The canonical catalog name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Mux => "MUX",
            ComponentKind::Demux => "DEMUX",
            ComponentKind::Decoder => "DECODER",
            ComponentKind::Encoder => "ENCODER",
            ComponentKind::ShiftRegister => "SHIFT_REGISTER",
            ComponentKind::Memory => "MEMORY",
            ComponentKind::ClockDivider => "CLOCK_DIVIDER",
        }
    }

    /// A one-line description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            ComponentKind::Mux => "Selects one of N equally wide inputs",
            ComponentKind::Demux => "Routes one input to one of N outputs, zeroing the others",
            ComponentKind::Decoder => "Asserts the one of 2^W outputs selected by a W-bit input",
            ComponentKind::Encoder => "Encodes which of 2^W inputs is asserted as a W-bit value",
            ComponentKind::ShiftRegister => {
                "Serial-in parallel-out or parallel-in serial-out shift register"
            }
            ComponentKind::Memory => "Synchronous-write memory with combinational read",
            ComponentKind::ClockDivider => "Divides an input clock by a fixed factor",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = Error;

    /// Accepts the canonical names case-insensitively, as well as the labels
    /// used by the interactive front-end ("DeMUX", "Shift Register", "SRAM", ...).
    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "mux" | "multiplexer" => Ok(ComponentKind::Mux),
            "demux" | "demultiplexer" => Ok(ComponentKind::Demux),
            "decoder" => Ok(ComponentKind::Decoder),
            "encoder" => Ok(ComponentKind::Encoder),
            "shiftregister" => Ok(ComponentKind::ShiftRegister),
            "memory" | "sram" | "ram" => Ok(ComponentKind::Memory),
            "clockdivider" => Ok(ComponentKind::ClockDivider),
            _ => Err(Error::InvalidArgument(format!(
                "unknown component kind `{}`",
                s
            ))),
        }
    }
}

impl TryFrom<String> for ComponentKind {
    type Error = Error;
    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// The behavioural idiom used to render a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum CodeStyle {
    /// Behaviour inlined in a process or concurrent assignment.
    Basic,
    /// Behaviour factored into a value-returning function.
    Function,
    /// Behaviour factored into a procedure with explicit outputs.
    Procedure,
}

impl CodeStyle {
    pub const ALL: [CodeStyle; 3] = [CodeStyle::Basic, CodeStyle::Function, CodeStyle::Procedure];

    pub fn as_str(&self) -> &'static str {
        match self {
            CodeStyle::Basic => "BASIC",
            CodeStyle::Function => "FUNCTION",
            CodeStyle::Procedure => "PROCEDURE",
        }
    }

    /// True if the style declares a function or procedure.
    pub fn has_subprogram(&self) -> bool {
        !matches!(self, CodeStyle::Basic)
    }
}

impl fmt::Display for CodeStyle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CodeStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "basic" | "none" => Ok(CodeStyle::Basic),
            "function" => Ok(CodeStyle::Function),
            "procedure" => Ok(CodeStyle::Procedure),
            _ => Err(Error::InvalidArgument(format!("unknown code style `{}`", s))),
        }
    }
}

impl TryFrom<String> for CodeStyle {
    type Error = Error;
    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// The transfer mode of a shift register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftMode {
    /// Serial-in, parallel-out.
    Sipo,
    /// Parallel-in, serial-out.
    Piso,
}

impl ShiftMode {
    pub const ALL: [ShiftMode; 2] = [ShiftMode::Sipo, ShiftMode::Piso];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ShiftMode::Sipo => "SIPO",
            ShiftMode::Piso => "PISO",
        }
    }

    /// Labels accepted in place of the canonical name.
    pub const fn aliases(&self) -> &'static [&'static str] {
        match self {
            ShiftMode::Sipo => &["Serial-In Parallel-Out"],
            ShiftMode::Piso => &["Parallel-In Serial-Out"],
        }
    }

    /// The mode as an accepted value of the `mode` parameter.
    pub const fn choice(&self) -> Choice {
        Choice {
            canonical: self.as_str(),
            aliases: self.aliases(),
        }
    }

    /// Looks up a mode by its canonical name.
    pub fn from_canonical(canonical: &str) -> Option<ShiftMode> {
        ShiftMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == canonical)
    }
}

impl fmt::Display for ShiftMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShiftMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ShiftMode::ALL
            .into_iter()
            .find(|mode| mode.choice().matches(s))
            .ok_or_else(|| Error::InvalidArgument(format!("unknown shift register mode `{}`", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_kinds() -> Result<()> {
        for kind in ComponentKind::ALL {
            assert_eq!(kind.as_str().parse::<ComponentKind>()?, kind);
        }
        assert_eq!("DeMUX".parse::<ComponentKind>()?, ComponentKind::Demux);
        assert_eq!("Shift Register".parse::<ComponentKind>()?, ComponentKind::ShiftRegister);
        assert_eq!("SRAM".parse::<ComponentKind>()?, ComponentKind::Memory);
        assert_eq!("clock-divider".parse::<ComponentKind>()?, ComponentKind::ClockDivider);
        assert!("ALU".parse::<ComponentKind>().is_err());
        Ok(())
    }

    #[test]
    fn parse_styles() -> Result<()> {
        for style in CodeStyle::ALL {
            assert_eq!(style.as_str().parse::<CodeStyle>()?, style);
        }
        assert_eq!("None".parse::<CodeStyle>()?, CodeStyle::Basic);
        assert_eq!("Procedure".parse::<CodeStyle>()?, CodeStyle::Procedure);
        assert!("macro".parse::<CodeStyle>().is_err());
        Ok(())
    }

    #[test]
    fn parse_modes() -> Result<()> {
        assert_eq!("sipo".parse::<ShiftMode>()?, ShiftMode::Sipo);
        assert_eq!("Parallel-In Serial-Out".parse::<ShiftMode>()?, ShiftMode::Piso);
        assert_eq!("serial_in_parallel_out".parse::<ShiftMode>()?, ShiftMode::Sipo);
        for mode in ShiftMode::ALL {
            assert_eq!(ShiftMode::from_canonical(mode.as_str()), Some(mode));
        }
        assert_eq!(ShiftMode::from_canonical("sipo"), None);
        assert!("SISO".parse::<ShiftMode>().is_err());
        Ok(())
    }
}
