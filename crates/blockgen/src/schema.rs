//! Declarative parameter schemas, one per component kind.
//!
//! A schema lists the parameters of a component in validation order, the
//! constraints on each, and the identifiers the rendered design declares for
//! itself.

use std::fmt;

use blockgen_common::numbers::is_power_of_two;
use itertools::Itertools;

use crate::component::{normalize, ComponentKind, ShiftMode};

/// Largest memory address width accepted.
pub const MAX_ADDR_WIDTH: u32 = 31;
/// Largest decoder input or encoder output width.
pub const MAX_DECODE_WIDTH: u32 = 8;
pub const MAX_SHIFT_WIDTH: u32 = 128;
pub const MAX_DIV_FACTOR: u32 = 1 << 20;
/// Largest multiplexer input or demultiplexer output count.
pub const MAX_FAN: u32 = 1 << 16;
/// Multiplexer and demultiplexer counts above this need confirmation.
pub const CONFIRM_FAN_ABOVE: u32 = 256;

/// The constraint on an integer parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerConstraint {
    /// A value of at least 1.
    Positive,
    /// A positive power of two of at most `max`.
    PowerOfTwo { max: u32 },
    /// A value in `min..=max`.
    Range { min: u32, max: u32 },
}

impl IntegerConstraint {
    /// Checks `value` against the constraint, returning the reason it was
    /// rejected.
    pub fn check(&self, value: i64) -> Result<(), String> {
        match self {
            IntegerConstraint::Positive if value < 1 => {
                Err(format!("must be at least 1 (got {})", value))
            }
            IntegerConstraint::PowerOfTwo { .. } if value < 1 || !is_power_of_two(value as u64) => {
                Err(format!("must be a power of 2 (got {})", value))
            }
            IntegerConstraint::PowerOfTwo { max } if value > i64::from(*max) => {
                Err(format!("must be at most {} (got {})", max, value))
            }
            IntegerConstraint::Range { min, max }
                if value < i64::from(*min) || value > i64::from(*max) =>
            {
                Err(format!("must be between {} and {} (got {})", min, max, value))
            }
            _ => Ok(()),
        }
    }
}

/// An accepted value of an enumerated parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub canonical: &'static str,
    /// Labels accepted in place of the canonical value. Case, spaces,
    /// hyphens and underscores are ignored when matching.
    pub aliases: &'static [&'static str],
}

impl Choice {
    pub fn matches(&self, value: &str) -> bool {
        let value = normalize(value);
        normalize(self.canonical) == value
            || self.aliases.iter().any(|label| normalize(label) == value)
    }
}

/// The kind of value a parameter holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Integer(IntegerConstraint),
    Enumeration(&'static [Choice]),
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValueKind::Integer(IntegerConstraint::Positive) => write!(f, "a positive integer"),
            ValueKind::Integer(IntegerConstraint::PowerOfTwo { max }) => {
                write!(f, "a power-of-two integer up to {}", max)
            }
            ValueKind::Integer(IntegerConstraint::Range { min, max }) => {
                write!(f, "an integer between {} and {}", min, max)
            }
            ValueKind::Enumeration(choices) => {
                write!(f, "one of {}", choices.iter().map(|c| c.canonical).join(", "))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: ValueKind,
    /// Values above this threshold need the request to accept large
    /// resources.
    pub confirm_above: Option<u32>,
}

/// The parameters of a component kind, and the identifiers its rendered
/// design declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSchema {
    pub kind: ComponentKind,
    pub parameters: &'static [ParameterSpec],
    /// Identifiers declared by every style of the design.
    pub generated_names: &'static [&'static str],
    /// Prefixes of the indexed identifiers (`inp0`, `inp1`, ...) declared by
    /// the design.
    pub indexed_prefixes: &'static [&'static str],
}

impl ParameterSchema {
    pub fn parameter(&self, name: &str) -> Option<&'static ParameterSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Returns the generated identifier that `name` would collide with, if
    /// any. Comparison is case-insensitive.
    pub fn clash(&self, name: &str) -> Option<String> {
        if let Some(generated) = self
            .generated_names
            .iter()
            .chain(PREDEFINED_NAMES)
            .find(|g| g.eq_ignore_ascii_case(name))
        {
            return Some(generated.to_string());
        }
        let lower = name.to_ascii_lowercase();
        self.indexed_prefixes.iter().find_map(|prefix| {
            let index = lower.strip_prefix(*prefix)?;
            if !index.is_empty() && index.chars().all(|c| c.is_ascii_digit()) {
                Some(lower.clone())
            } else {
                None
            }
        })
    }
}

/// Names from the IEEE packages referenced by generated designs.
pub const PREDEFINED_NAMES: &[&str] = &[
    "ieee",
    "std_logic",
    "std_logic_vector",
    "unsigned",
    "signed",
    "to_integer",
    "to_unsigned",
    "rising_edge",
    "integer",
];

pub const SHIFT_MODES: &[Choice] = &[ShiftMode::Sipo.choice(), ShiftMode::Piso.choice()];

static MUX: ParameterSchema = ParameterSchema {
    kind: ComponentKind::Mux,
    parameters: &[
        ParameterSpec {
            name: "inputs",
            label: "Number of inputs",
            kind: ValueKind::Integer(IntegerConstraint::PowerOfTwo { max: MAX_FAN }),
            confirm_above: Some(CONFIRM_FAN_ABOVE),
        },
        ParameterSpec {
            name: "width",
            label: "Bit width",
            kind: ValueKind::Integer(IntegerConstraint::Positive),
            confirm_above: None,
        },
    ],
    generated_names: &["sel", "bitout", "result", "output"],
    indexed_prefixes: &["inp"],
};

static DEMUX: ParameterSchema = ParameterSchema {
    kind: ComponentKind::Demux,
    parameters: &[
        ParameterSpec {
            name: "outputs",
            label: "Number of outputs",
            kind: ValueKind::Integer(IntegerConstraint::PowerOfTwo { max: MAX_FAN }),
            confirm_above: Some(CONFIRM_FAN_ABOVE),
        },
        ParameterSpec {
            name: "width",
            label: "Bit width",
            kind: ValueKind::Integer(IntegerConstraint::Positive),
            confirm_above: None,
        },
    ],
    generated_names: &["input", "sel", "output_array", "output_signals", "result"],
    indexed_prefixes: &["out"],
};

static DECODER: ParameterSchema = ParameterSchema {
    kind: ComponentKind::Decoder,
    parameters: &[ParameterSpec {
        name: "width",
        label: "Input width",
        kind: ValueKind::Integer(IntegerConstraint::Range { min: 1, max: MAX_DECODE_WIDTH }),
        confirm_above: None,
    }],
    generated_names: &["input", "output_array", "output_signals", "result"],
    indexed_prefixes: &["out"],
};

static ENCODER: ParameterSchema = ParameterSchema {
    kind: ComponentKind::Encoder,
    parameters: &[ParameterSpec {
        name: "width",
        label: "Output width",
        kind: ValueKind::Integer(IntegerConstraint::Range { min: 1, max: MAX_DECODE_WIDTH }),
        confirm_above: None,
    }],
    generated_names: &["output", "result"],
    indexed_prefixes: &["in"],
};

static SHIFT_REGISTER: ParameterSchema = ParameterSchema {
    kind: ComponentKind::ShiftRegister,
    parameters: &[
        ParameterSpec {
            name: "width",
            label: "Register width",
            kind: ValueKind::Integer(IntegerConstraint::Range { min: 1, max: MAX_SHIFT_WIDTH }),
            confirm_above: None,
        },
        ParameterSpec {
            name: "mode",
            label: "Shift register type",
            kind: ValueKind::Enumeration(SHIFT_MODES),
            confirm_above: None,
        },
    ],
    generated_names: &[
        "clk",
        "reset",
        "serial_in",
        "parallel_out",
        "load",
        "parallel_in",
        "serial_out",
        "shift_reg",
        "current_reg",
        "next_reg",
    ],
    indexed_prefixes: &[],
};

static MEMORY: ParameterSchema = ParameterSchema {
    kind: ComponentKind::Memory,
    parameters: &[
        ParameterSpec {
            name: "addr_width",
            label: "Address width",
            kind: ValueKind::Integer(IntegerConstraint::Range {
                min: 1,
                max: MAX_ADDR_WIDTH,
            }),
            confirm_above: Some(16),
        },
        ParameterSpec {
            name: "data_width",
            label: "Data width",
            kind: ValueKind::Integer(IntegerConstraint::Positive),
            confirm_above: Some(128),
        },
    ],
    generated_names: &[
        "clk", "we", "addr", "data_in", "data_out", "ram_type", "ram", "memory", "data",
    ],
    indexed_prefixes: &[],
};

static CLOCK_DIVIDER: ParameterSchema = ParameterSchema {
    kind: ComponentKind::ClockDivider,
    parameters: &[ParameterSpec {
        name: "div_factor",
        label: "Division factor",
        kind: ValueKind::Integer(IntegerConstraint::Range { min: 1, max: MAX_DIV_FACTOR }),
        confirm_above: None,
    }],
    generated_names: &[
        "clk_in",
        "reset",
        "clk_out",
        "counter",
        "temp_clk",
        "current_count",
        "current_clk",
        "next_clk",
    ],
    indexed_prefixes: &[],
};

/// The schema of a component kind.
pub fn schema_for(kind: ComponentKind) -> &'static ParameterSchema {
    match kind {
        ComponentKind::Mux => &MUX,
        ComponentKind::Demux => &DEMUX,
        ComponentKind::Decoder => &DECODER,
        ComponentKind::Encoder => &ENCODER,
        ComponentKind::ShiftRegister => &SHIFT_REGISTER,
        ComponentKind::Memory => &MEMORY,
        ComponentKind::ClockDivider => &CLOCK_DIVIDER,
    }
}
