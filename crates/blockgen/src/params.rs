//! Typed, validated parameters of each component kind.

use blockgen_common::{
    numbers::{BitCount, Positive},
    util::log2_ceil,
};
use indexmap::IndexMap;

use crate::{
    component::{ComponentKind, ShiftMode},
    error::{ResourceEstimate, ValidationError},
    request::{type_mismatch, RawValue},
    schema::ParameterSpec,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MuxParams {
    pub(crate) inputs: Positive,
    pub(crate) width: BitCount,
}

impl MuxParams {
    pub fn inputs(&self) -> Positive {
        self.inputs
    }

    pub fn width(&self) -> BitCount {
        self.width
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DemuxParams {
    pub(crate) outputs: Positive,
    pub(crate) width: BitCount,
}

impl DemuxParams {
    pub fn outputs(&self) -> Positive {
        self.outputs
    }

    pub fn width(&self) -> BitCount {
        self.width
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecoderParams {
    pub(crate) width: BitCount,
}

impl DecoderParams {
    pub fn width(&self) -> BitCount {
        self.width
    }

    /// The number of one-bit outputs, 2^width.
    pub fn lines(&self) -> u32 {
        1 << self.width.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncoderParams {
    pub(crate) width: BitCount,
}

impl EncoderParams {
    pub fn width(&self) -> BitCount {
        self.width
    }

    /// The number of one-bit inputs, 2^width.
    pub fn lines(&self) -> u32 {
        1 << self.width.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShiftRegisterParams {
    pub(crate) width: BitCount,
    pub(crate) mode: ShiftMode,
}

impl ShiftRegisterParams {
    pub fn width(&self) -> BitCount {
        self.width
    }

    pub fn mode(&self) -> ShiftMode {
        self.mode
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryParams {
    pub(crate) addr_width: BitCount,
    pub(crate) data_width: BitCount,
}

impl MemoryParams {
    pub fn addr_width(&self) -> BitCount {
        self.addr_width
    }

    pub fn data_width(&self) -> BitCount {
        self.data_width
    }

    /// The number of storage entries, 2^addr_width.
    pub fn entries(&self) -> u64 {
        1 << self.addr_width.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockDividerParams {
    pub(crate) div_factor: Positive,
}

impl ClockDividerParams {
    pub fn div_factor(&self) -> Positive {
        self.div_factor
    }

    /// The highest counter value, div_factor - 1.
    pub fn terminal_count(&self) -> u32 {
        self.div_factor.get() - 1
    }
}

/// The parameters of a validated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentParams {
    Mux(MuxParams),
    Demux(DemuxParams),
    Decoder(DecoderParams),
    Encoder(EncoderParams),
    ShiftRegister(ShiftRegisterParams),
    Memory(MemoryParams),
    ClockDivider(ClockDividerParams),
}

impl ComponentParams {
    pub fn kind(&self) -> ComponentKind {
        match self {
            ComponentParams::Mux(_) => ComponentKind::Mux,
            ComponentParams::Demux(_) => ComponentKind::Demux,
            ComponentParams::Decoder(_) => ComponentKind::Decoder,
            ComponentParams::Encoder(_) => ComponentKind::Encoder,
            ComponentParams::ShiftRegister(_) => ComponentKind::ShiftRegister,
            ComponentParams::Memory(_) => ComponentKind::Memory,
            ComponentParams::ClockDivider(_) => ComponentKind::ClockDivider,
        }
    }

    /// The number of data lines or storage entries of the design, and their
    /// width.
    pub fn resource_estimate(&self) -> ResourceEstimate {
        match self {
            ComponentParams::Mux(p) => ResourceEstimate::new(p.inputs.get().into(), p.width.get()),
            ComponentParams::Demux(p) => {
                ResourceEstimate::new(p.outputs.get().into(), p.width.get())
            }
            ComponentParams::Decoder(p) => ResourceEstimate::new(p.lines().into(), 1),
            ComponentParams::Encoder(p) => ResourceEstimate::new(p.lines().into(), 1),
            ComponentParams::ShiftRegister(p) => ResourceEstimate::new(1, p.width.get()),
            ComponentParams::Memory(p) => ResourceEstimate::new(p.entries(), p.data_width.get()),
            ComponentParams::ClockDivider(p) => {
                ResourceEstimate::new(1, log2_ceil(p.div_factor).max(1))
            }
        }
    }

    /// The raw parameters which validate to these parameters, in schema
    /// order.
    pub fn to_parameters(&self) -> IndexMap<String, RawValue> {
        let entries: Vec<(&str, RawValue)> = match self {
            ComponentParams::Mux(p) => vec![
                ("inputs", p.inputs.get().into()),
                ("width", p.width.get().into()),
            ],
            ComponentParams::Demux(p) => vec![
                ("outputs", p.outputs.get().into()),
                ("width", p.width.get().into()),
            ],
            ComponentParams::Decoder(p) => vec![("width", p.width.get().into())],
            ComponentParams::Encoder(p) => vec![("width", p.width.get().into())],
            ComponentParams::ShiftRegister(p) => vec![
                ("width", p.width.get().into()),
                ("mode", p.mode.as_str().into()),
            ],
            ComponentParams::Memory(p) => vec![
                ("addr_width", p.addr_width.get().into()),
                ("data_width", p.data_width.get().into()),
            ],
            ComponentParams::ClockDivider(p) => vec![("div_factor", p.div_factor.get().into())],
        };
        entries
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    }

    /// Builds the parameters of `kind` from coerced values.
    pub(crate) fn from_values(
        kind: ComponentKind,
        values: &TypedValues,
    ) -> Result<Self, ValidationError> {
        Ok(match kind {
            ComponentKind::Mux => ComponentParams::Mux(MuxParams {
                inputs: values.positive("inputs")?,
                width: values.positive("width")?,
            }),
            ComponentKind::Demux => ComponentParams::Demux(DemuxParams {
                outputs: values.positive("outputs")?,
                width: values.positive("width")?,
            }),
            ComponentKind::Decoder => ComponentParams::Decoder(DecoderParams {
                width: values.positive("width")?,
            }),
            ComponentKind::Encoder => ComponentParams::Encoder(EncoderParams {
                width: values.positive("width")?,
            }),
            ComponentKind::ShiftRegister => ComponentParams::ShiftRegister(ShiftRegisterParams {
                width: values.positive("width")?,
                mode: values.shift_mode("mode")?,
            }),
            ComponentKind::Memory => ComponentParams::Memory(MemoryParams {
                addr_width: values.positive("addr_width")?,
                data_width: values.positive("data_width")?,
            }),
            ComponentKind::ClockDivider => ComponentParams::ClockDivider(ClockDividerParams {
                div_factor: values.positive("div_factor")?,
            }),
        })
    }
}

/// A parameter value after coercion to its declared kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypedValue {
    Integer(u32),
    /// The canonical spelling of an enumerated value.
    Choice(&'static str),
}

/// Coerced parameter values with their specs, by parameter name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TypedValues(IndexMap<&'static str, (&'static ParameterSpec, TypedValue)>);

impl TypedValues {
    pub fn insert(&mut self, spec: &'static ParameterSpec, value: TypedValue) {
        self.0.insert(spec.name, (spec, value));
    }

    fn get(&self, name: &str) -> Result<(&'static ParameterSpec, TypedValue), ValidationError> {
        self.0
            .get(name)
            .copied()
            .ok_or_else(|| ValidationError::MissingParameter {
                name: name.to_string(),
            })
    }

    pub fn integer(&self, name: &str) -> Result<u32, ValidationError> {
        match self.get(name)? {
            (_, TypedValue::Integer(value)) => Ok(value),
            (spec, TypedValue::Choice(_)) => Err(type_mismatch(spec)),
        }
    }

    pub fn positive(&self, name: &str) -> Result<Positive, ValidationError> {
        let value = self.integer(name)?;
        Positive::new(value).ok_or_else(|| ValidationError::ConstraintViolation {
            name: name.to_string(),
            reason: format!("must be at least 1 (got {})", value),
        })
    }

    pub fn shift_mode(&self, name: &str) -> Result<ShiftMode, ValidationError> {
        match self.get(name)? {
            (spec, TypedValue::Choice(choice)) => ShiftMode::from_canonical(choice)
                .ok_or_else(|| ValidationError::ConstraintViolation {
                    name: name.to_string(),
                    reason: format!("must be {} (got `{}`)", spec.kind, choice),
                }),
            (spec, TypedValue::Integer(_)) => Err(type_mismatch(spec)),
        }
    }
}
