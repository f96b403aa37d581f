#![allow(dead_code)]

use blockgen::{
    generate, CodeStyle, ComponentKind, GenerationRequest, NamingSet, RawValue, ValidationError,
};

pub fn names() -> NamingSet {
    NamingSet::new("comp", "rtl", "helper")
}

pub fn request<V: Into<RawValue>>(
    kind: ComponentKind,
    style: CodeStyle,
    parameters: Vec<(&str, V)>,
) -> GenerationRequest {
    parameters
        .into_iter()
        .fold(GenerationRequest::new(kind, style, names()), |request, (name, value)| {
            request.with_parameter(name, value)
        })
}

/// A small, valid request for every component kind.
pub fn default_request(kind: ComponentKind, style: CodeStyle) -> GenerationRequest {
    let request = GenerationRequest::new(kind, style, names());
    match kind {
        ComponentKind::Mux => request.with_parameter("inputs", 4).with_parameter("width", 8),
        ComponentKind::Demux => request.with_parameter("outputs", 4).with_parameter("width", 8),
        ComponentKind::Decoder => request.with_parameter("width", 2),
        ComponentKind::Encoder => request.with_parameter("width", 2),
        ComponentKind::ShiftRegister => request
            .with_parameter("width", 8)
            .with_parameter("mode", "SIPO"),
        ComponentKind::Memory => request
            .with_parameter("addr_width", 4)
            .with_parameter("data_width", 8),
        ComponentKind::ClockDivider => request.with_parameter("div_factor", 4),
    }
}

pub fn generate_text(request: &GenerationRequest) -> Result<String, ValidationError> {
    generate(request).map(|artifact| artifact.into_text())
}

/// The number of lines of `text` which, trimmed, start with `prefix`.
pub fn count_lines(text: &str, prefix: &str) -> usize {
    text.lines()
        .filter(|line| line.trim_start().starts_with(prefix))
        .count()
}

pub fn is_constraint_violation(result: &Result<String, ValidationError>, parameter: &str) -> bool {
    matches!(result, Err(ValidationError::ConstraintViolation { name, .. }) if name == parameter)
}
