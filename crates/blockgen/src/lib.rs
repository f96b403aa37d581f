//! Parameterized VHDL generation for a fixed catalog of digital building
//! blocks.
//!
//! A [`GenerationRequest`] names a component kind, a code style, the
//! identifiers of the design and its raw parameters. [`generate`] validates
//! the request and renders the design file, or returns the first rule the
//! request broke.
//!
//! ```
//! use blockgen::{generate, CodeStyle, ComponentKind, GenerationRequest, NamingSet};
//!
//! let request = GenerationRequest::new(
//!     ComponentKind::Mux,
//!     CodeStyle::Basic,
//!     NamingSet::new("mux4", "a1", "mux_sel"),
//! )
//! .with_parameter("inputs", 4)
//! .with_parameter("width", 8);
//! let artifact = generate(&request).unwrap();
//! assert!(artifact.text().contains("entity mux4 is"));
//! ```

pub mod artifact;
pub mod component;
pub mod error;
pub mod fragment;
pub mod naming;
pub mod params;
pub mod render;
pub mod request;
pub mod request_file;
pub mod schema;

pub use artifact::{suggested_file_name, GeneratedArtifact, FILE_EXTENSION};
pub use component::{CodeStyle, ComponentKind, ShiftMode};
pub use error::{ResourceEstimate, ValidationError};
pub use naming::{validate_identifier, NamingSet, Role};
pub use request::{validate, GenerationRequest, RawValue, ValidatedRequest};
pub use request_file::RequestFile;
pub use schema::schema_for;

/// Validates `request` and renders its design file.
pub fn generate(request: &GenerationRequest) -> Result<GeneratedArtifact, ValidationError> {
    let validated = validate(request)?;
    Ok(render::render(&validated))
}
