//! Generation requests and their validation.

use blockgen_common::numbers::i64_to_u32;
use indexmap::IndexMap;
use log::{debug, trace, warn};
use serde::Deserialize;

use crate::{
    component::{CodeStyle, ComponentKind},
    error::ValidationError,
    naming::{NamingSet, ValidatedNames},
    params::{ComponentParams, TypedValue, TypedValues},
    schema::{schema_for, ParameterSpec, ValueKind},
};

/// A parameter value as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Integer(i64),
    Text(String),
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Integer(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Integer(value.into())
    }
}

impl From<u32> for RawValue {
    fn from(value: u32) -> Self {
        RawValue::Integer(value.into())
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

/// Everything needed to generate one design.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub kind: ComponentKind,
    pub style: CodeStyle,
    pub names: NamingSet,
    pub parameters: IndexMap<String, RawValue>,
    /// Set once the user has agreed to generate a design above the resource
    /// thresholds of its schema.
    pub accept_large_resources: bool,
}

impl GenerationRequest {
    pub fn new(kind: ComponentKind, style: CodeStyle, names: NamingSet) -> Self {
        GenerationRequest {
            kind,
            style,
            names,
            parameters: IndexMap::new(),
            accept_large_resources: false,
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    pub fn with_large_resources(mut self, accept: bool) -> Self {
        self.accept_large_resources = accept;
        self
    }
}

/// A request whose names and parameters are known to be valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    style: CodeStyle,
    names: ValidatedNames,
    params: ComponentParams,
    accept_large_resources: bool,
}

impl ValidatedRequest {
    pub fn kind(&self) -> ComponentKind {
        self.params.kind()
    }

    pub fn style(&self) -> CodeStyle {
        self.style
    }

    pub fn names(&self) -> &ValidatedNames {
        &self.names
    }

    pub fn params(&self) -> &ComponentParams {
        &self.params
    }

    /// Rebuilds a request which validates to this one.
    pub fn to_request(&self) -> GenerationRequest {
        GenerationRequest {
            kind: self.kind(),
            style: self.style,
            names: NamingSet::from(&self.names),
            parameters: self.params.to_parameters(),
            accept_large_resources: self.accept_large_resources,
        }
    }
}

pub(crate) fn type_mismatch(spec: &ParameterSpec) -> ValidationError {
    ValidationError::TypeMismatch {
        name: spec.name.to_string(),
        expected: spec.kind.to_string(),
    }
}

fn constraint_violation(spec: &ParameterSpec, reason: String) -> ValidationError {
    ValidationError::ConstraintViolation {
        name: spec.name.to_string(),
        reason,
    }
}

/// Parses a textual integer. Text consisting of digits which does not fit is
/// out of range rather than of the wrong kind.
fn parse_integer(spec: &ParameterSpec, text: &str) -> Result<i64, ValidationError> {
    text.parse::<i64>().map_err(|_| {
        let digits = text.strip_prefix(|c| c == '-' || c == '+').unwrap_or(text);
        if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            constraint_violation(spec, format!("is out of range (got {})", text))
        } else {
            type_mismatch(spec)
        }
    })
}

/// Coerces a raw value to the kind declared by `spec` and checks its
/// constraint.
fn coerce(spec: &ParameterSpec, raw: &RawValue) -> Result<TypedValue, ValidationError> {
    match spec.kind {
        ValueKind::Integer(constraint) => {
            let value = match raw {
                RawValue::Integer(value) => *value,
                RawValue::Text(text) => parse_integer(spec, text.trim())?,
            };
            constraint
                .check(value)
                .map_err(|reason| constraint_violation(spec, reason))?;
            let value = i64_to_u32(value).map_err(|_| {
                constraint_violation(spec, format!("must be at most {} (got {})", u32::MAX, value))
            })?;
            Ok(TypedValue::Integer(value))
        }
        ValueKind::Enumeration(choices) => match raw {
            RawValue::Text(text) => choices
                .iter()
                .find(|choice| choice.matches(text.trim()))
                .map(|choice| TypedValue::Choice(choice.canonical))
                .ok_or_else(|| {
                    constraint_violation(spec, format!("must be {} (got `{}`)", spec.kind, text))
                }),
            RawValue::Integer(_) => Err(type_mismatch(spec)),
        },
    }
}

/// Validates a request, returning the first rule it breaks.
///
/// Names are checked first, then every parameter of the kind's schema in
/// schema order, then the resource thresholds.
pub fn validate(request: &GenerationRequest) -> Result<ValidatedRequest, ValidationError> {
    let names = request.names.validate()?;
    let schema = schema_for(request.kind);
    if request.style.has_subprogram() {
        names.check_clash(|name| schema.clash(name))?;
    }

    let mut values = TypedValues::default();
    for spec in schema.parameters {
        let raw = request
            .parameters
            .get(spec.name)
            .ok_or_else(|| ValidationError::MissingParameter {
                name: spec.name.to_string(),
            })?;
        let value = coerce(spec, raw)?;
        trace!("{} parameter {} = {:?}", request.kind, spec.name, value);
        values.insert(spec, value);
    }
    let params = ComponentParams::from_values(request.kind, &values)?;

    for spec in schema.parameters {
        let limit = match spec.confirm_above {
            Some(limit) => limit,
            None => continue,
        };
        if values.integer(spec.name)? <= limit {
            continue;
        }
        let estimate = params.resource_estimate();
        if request.accept_large_resources {
            warn!(
                "{} `{}` above {} accepted: the design holds {}",
                spec.label, spec.name, limit, estimate
            );
        } else {
            return Err(ValidationError::ConfirmationRequired {
                field: spec.name.to_string(),
                estimate,
            });
        }
    }

    debug!(
        "validated {} request for entity {} in {} style",
        request.kind,
        names.entity(),
        request.style
    );
    Ok(ValidatedRequest {
        style: request.style,
        names,
        params,
        accept_large_resources: request.accept_large_resources,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{component::ShiftMode, error::ResourceEstimate, naming::Role};
    use blockgen_vhdl::common::vhdl_name::NameViolation;

    fn request(kind: ComponentKind) -> GenerationRequest {
        GenerationRequest::new(kind, CodeStyle::Basic, NamingSet::new("comp", "rtl", "helper"))
    }

    #[test]
    fn textual_integers() {
        let validated = validate(
            &request(ComponentKind::Mux)
                .with_parameter("inputs", " 4 ")
                .with_parameter("width", 8),
        )
        .unwrap();
        match validated.params() {
            ComponentParams::Mux(mux) => {
                assert_eq!(mux.inputs().get(), 4);
                assert_eq!(mux.width().get(), 8);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn parameter_errors() {
        assert_eq!(
            validate(&request(ComponentKind::Mux).with_parameter("width", 8)),
            Err(ValidationError::MissingParameter {
                name: "inputs".to_string()
            })
        );
        assert_eq!(
            validate(
                &request(ComponentKind::Mux)
                    .with_parameter("inputs", "four")
                    .with_parameter("width", 8)
            ),
            Err(ValidationError::TypeMismatch {
                name: "inputs".to_string(),
                expected: "a power-of-two integer up to 65536".to_string(),
            })
        );
        assert_eq!(
            validate(
                &request(ComponentKind::Mux)
                    .with_parameter("inputs", 3)
                    .with_parameter("width", 8)
            ),
            Err(ValidationError::ConstraintViolation {
                name: "inputs".to_string(),
                reason: "must be a power of 2 (got 3)".to_string(),
            })
        );
        assert!(matches!(
            validate(&request(ComponentKind::Decoder).with_parameter("width", i64::MAX)),
            Err(ValidationError::ConstraintViolation { .. })
        ));
        assert!(matches!(
            validate(&request(ComponentKind::Decoder).with_parameter("width", "99999999999999999999")),
            Err(ValidationError::ConstraintViolation { .. })
        ));
        assert!(matches!(
            validate(
                &request(ComponentKind::Mux)
                    .with_parameter("inputs", 1i64 << 33)
                    .with_parameter("width", 1)
            ),
            Err(ValidationError::ConstraintViolation { .. })
        ));
    }

    #[test]
    fn first_violation_wins() {
        // Names are checked before parameters, parameters in schema order.
        assert!(matches!(
            validate(&GenerationRequest::new(
                ComponentKind::Mux,
                CodeStyle::Basic,
                NamingSet::new("entity", "rtl", "f")
            )),
            Err(ValidationError::Identifier {
                role: Role::Entity,
                ..
            })
        ));
        assert_eq!(
            validate(
                &request(ComponentKind::Demux)
                    .with_parameter("width", 0)
                    .with_parameter("outputs", 3)
            ),
            Err(ValidationError::ConstraintViolation {
                name: "outputs".to_string(),
                reason: "must be a power of 2 (got 3)".to_string(),
            })
        );
    }

    #[test]
    fn shift_modes() {
        let base = request(ComponentKind::ShiftRegister).with_parameter("width", 8);
        let validated = validate(&base.clone().with_parameter("mode", "Parallel-In Serial-Out")).unwrap();
        match validated.params() {
            ComponentParams::ShiftRegister(p) => assert_eq!(p.mode(), ShiftMode::Piso),
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            validate(&base.clone().with_parameter("mode", "SISO")),
            Err(ValidationError::ConstraintViolation { .. })
        ));
        assert!(matches!(
            validate(&base.with_parameter("mode", 1)),
            Err(ValidationError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn subprogram_clash() {
        let clashing = GenerationRequest::new(
            ComponentKind::Mux,
            CodeStyle::Function,
            NamingSet::new("mux", "rtl", "inp2"),
        )
        .with_parameter("inputs", 4)
        .with_parameter("width", 8);
        assert_eq!(
            validate(&clashing),
            Err(ValidationError::Identifier {
                role: Role::Subprogram,
                name: "inp2".to_string(),
                reason: NameViolation::Clash("inp2".to_string()),
            })
        );
        let mut basic = clashing;
        basic.style = CodeStyle::Basic;
        assert!(validate(&basic).is_ok());
    }

    #[test]
    fn confirmation_gate() {
        let large = request(ComponentKind::Memory)
            .with_parameter("addr_width", 17)
            .with_parameter("data_width", 256);
        assert_eq!(
            validate(&large),
            Err(ValidationError::ConfirmationRequired {
                field: "addr_width".to_string(),
                estimate: ResourceEstimate::new(1 << 17, 256),
            })
        );
        assert!(validate(&large.with_large_resources(true)).is_ok());

        let wide = request(ComponentKind::Memory)
            .with_parameter("addr_width", 4)
            .with_parameter("data_width", 129);
        assert!(matches!(
            validate(&wide),
            Err(ValidationError::ConfirmationRequired { ref field, .. }) if field == "data_width"
        ));
    }

    #[test]
    fn reconstruction() {
        let original = request(ComponentKind::ShiftRegister)
            .with_parameter("width", "16")
            .with_parameter("mode", "sipo");
        let validated = validate(&original).unwrap();
        let rebuilt = validated.to_request();
        assert_eq!(rebuilt.parameters["mode"], RawValue::Text("SIPO".to_string()));
        assert_eq!(validate(&rebuilt), Ok(validated));
    }
}
