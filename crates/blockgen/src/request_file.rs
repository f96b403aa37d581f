//! The request file read by front-ends.
//!
//! ```toml
//! component = "MUX"
//! style = "BASIC"
//! entity = "mux4"
//! architecture = "a1"
//! subprogram = "mux_sel"
//!
//! [parameters]
//! inputs = 4
//! width = 8
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::{
    component::{CodeStyle, ComponentKind},
    naming::NamingSet,
    request::{GenerationRequest, RawValue},
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequestFile {
    pub component: ComponentKind,
    pub style: CodeStyle,
    pub entity: String,
    pub architecture: String,
    pub subprogram: String,
    #[serde(default)]
    pub accept_large_resources: bool,
    #[serde(default)]
    pub parameters: BTreeMap<String, RawValue>,
}

impl From<RequestFile> for GenerationRequest {
    fn from(file: RequestFile) -> Self {
        GenerationRequest {
            kind: file.component,
            style: file.style,
            names: NamingSet::new(file.entity, file.architecture, file.subprogram),
            parameters: file.parameters.into_iter().collect(),
            accept_large_resources: file.accept_large_resources,
        }
    }
}
