use blockgen_vhdl::{
    architecture::ArchitectureBody,
    common::vhdl_name::VhdlName,
    declaration::ObjectDeclaration,
    expression::{call, to_integer},
    object::ObjectType,
    port::{Mode, Parameter, Port},
    process::{
        statement::{case::Case, SequentialStatement},
        Process,
    },
    statement::Statement,
    subprogram::Subprogram,
};

use crate::{
    fragment::{case_arms, indexed_names, indexed_port_list, joined_names, selector_width},
    params::MuxParams,
};

use super::Component;

const INPUT: &str = "inp";
const SELECT: &str = "sel";
const OUTPUT: &str = "bitout";
const RESULT: &str = "result";
const PROCEDURE_OUTPUT: &str = "output";

impl MuxParams {
    fn data_type(&self) -> ObjectType {
        ObjectType::bit_vector(self.width)
    }

    fn select_type(&self) -> ObjectType {
        ObjectType::bit_vector(selector_width(self.inputs))
    }

    fn input_ports(&self) -> Vec<Port> {
        indexed_port_list(INPUT, self.inputs.get(), Mode::In, &self.data_type())
    }

    fn sensitivity(&self) -> Vec<String> {
        let mut list = indexed_names(INPUT, self.inputs.get());
        list.push(SELECT.to_string());
        list
    }

    /// Routes input `i` to `assign` on selector value `i`, and zero on any
    /// other value.
    fn select(&self, assign: impl Fn(String) -> SequentialStatement) -> SequentialStatement {
        let arms = case_arms(self.inputs.get(), |i| vec![assign(format!("{}{}", INPUT, i))]);
        Case::new(to_integer(SELECT), arms, vec![assign(self.data_type().zero())]).into()
    }
}

impl Component for MuxParams {
    fn description(&self) -> String {
        format!(
            "{}-to-1 multiplexer of {}-bit inputs",
            self.inputs, self.width
        )
    }

    fn ports(&self) -> Vec<Port> {
        let mut ports = self.input_ports();
        ports.push(Port::input(SELECT, self.select_type()));
        ports.push(Port::output(OUTPUT, self.data_type()));
        ports
    }

    fn basic(&self) -> ArchitectureBody {
        let process = Process::new(
            self.sensitivity(),
            vec![self.select(|value| SequentialStatement::signal_assignment(OUTPUT, value))],
        );
        ArchitectureBody::new(vec![], vec![process.into()])
    }

    fn function(&self, name: &VhdlName) -> ArchitectureBody {
        let mut parameters: Vec<Parameter> =
            self.input_ports().iter().map(Parameter::from_port).collect();
        parameters.push(Parameter::new(SELECT, self.select_type()));
        let function = Subprogram::function(
            name.clone(),
            parameters,
            self.data_type(),
            vec![
                self.select(|value| SequentialStatement::variable_assignment(RESULT, value)),
                SequentialStatement::return_value(RESULT),
            ],
        )
        .with_variable(ObjectDeclaration::variable(RESULT, self.data_type()));
        let output = call(name, [joined_names(INPUT, self.inputs.get()), SELECT.to_string()]);
        ArchitectureBody::new(
            vec![function.into()],
            vec![Statement::assignment(OUTPUT, output)],
        )
    }

    fn procedure(&self, name: &VhdlName) -> ArchitectureBody {
        let mut parameters: Vec<Parameter> = self
            .input_ports()
            .iter()
            .map(Parameter::signal_from_port)
            .collect();
        parameters.push(Parameter::signal(SELECT, Mode::In, self.select_type()));
        parameters.push(Parameter::signal(PROCEDURE_OUTPUT, Mode::Out, self.data_type()));
        let procedure = Subprogram::procedure(
            name.clone(),
            parameters,
            vec![self.select(|value| SequentialStatement::signal_assignment(PROCEDURE_OUTPUT, value))],
        );
        let mut args = self.sensitivity();
        args.push(OUTPUT.to_string());
        let process = Process::new(
            self.sensitivity(),
            vec![SequentialStatement::call(name.as_str(), args)],
        );
        ArchitectureBody::new(vec![procedure.into()], vec![process.into()])
    }
}
