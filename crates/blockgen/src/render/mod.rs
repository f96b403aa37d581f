//! Component renderers, one module per component kind.
//!
//! Every renderer describes its component as a [`Component`]: an interface,
//! and one architecture body per code style. Rendering a validated request
//! cannot fail.

use blockgen_common::traits::Documents;
use blockgen_vhdl::{
    architecture::{Architecture, ArchitectureBody},
    common::vhdl_name::VhdlName,
    declaration::Declare,
    design_file::DesignFile,
    entity::Entity,
    port::Port,
    usings::Usings,
};
use log::debug;

use crate::{
    artifact::GeneratedArtifact, component::CodeStyle, params::ComponentParams,
    request::ValidatedRequest,
};

mod clock_divider;
mod decoder;
mod demux;
mod encoder;
mod memory;
mod mux;
mod shift_register;

/// A component's interface and behaviour, in each code style.
pub(crate) trait Component {
    /// A comment placed above the entity.
    fn description(&self) -> String;

    fn usings(&self) -> Usings {
        Usings::ieee_numeric()
    }

    fn ports(&self) -> Vec<Port>;

    /// Behaviour inlined in processes and concurrent assignments.
    fn basic(&self) -> ArchitectureBody;

    /// Behaviour factored into a function called `name`.
    fn function(&self, name: &VhdlName) -> ArchitectureBody;

    /// Behaviour factored into a procedure called `name`.
    fn procedure(&self, name: &VhdlName) -> ArchitectureBody;

    fn body(&self, style: CodeStyle, subprogram: &VhdlName) -> ArchitectureBody {
        match style {
            CodeStyle::Basic => self.basic(),
            CodeStyle::Function => self.function(subprogram),
            CodeStyle::Procedure => self.procedure(subprogram),
        }
    }
}

fn component(params: &ComponentParams) -> &dyn Component {
    match params {
        ComponentParams::Mux(p) => p,
        ComponentParams::Demux(p) => p,
        ComponentParams::Decoder(p) => p,
        ComponentParams::Encoder(p) => p,
        ComponentParams::ShiftRegister(p) => p,
        ComponentParams::Memory(p) => p,
        ComponentParams::ClockDivider(p) => p,
    }
}

/// Renders the design file of a validated request.
pub fn render(request: &ValidatedRequest) -> GeneratedArtifact {
    debug!(
        "rendering {} in {} style",
        request.kind(),
        request.style()
    );
    let component = component(request.params());
    let names = request.names();
    let entity =
        Entity::new(names.entity().clone(), component.ports()).with_doc(component.description());
    let architecture = Architecture::new(
        names.architecture().clone(),
        names.entity().clone(),
        component.body(request.style(), names.subprogram()),
    );
    let file = DesignFile::new(component.usings(), entity, architecture);
    GeneratedArtifact::new(names.entity().as_str(), file.declare())
}
