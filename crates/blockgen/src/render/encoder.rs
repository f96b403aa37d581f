use blockgen_vhdl::{
    architecture::ArchitectureBody,
    common::vhdl_name::VhdlName,
    declaration::ObjectDeclaration,
    expression::{call, is_high, to_vector},
    object::ObjectType,
    port::{Mode, Parameter, Port},
    process::{
        statement::{Block, SequentialStatement},
        Process,
    },
    statement::Statement,
    subprogram::Subprogram,
};

use crate::{
    fragment::{indexed_names, indexed_port_list, joined_names},
    params::EncoderParams,
};

use super::Component;

const INPUT: &str = "in";
const OUTPUT: &str = "output";
const RESULT: &str = "result";

impl EncoderParams {
    fn output_type(&self) -> ObjectType {
        ObjectType::bit_vector(self.width)
    }

    fn input_ports(&self) -> Vec<Port> {
        indexed_port_list(INPUT, self.lines(), Mode::In, &ObjectType::Bit)
    }

    /// Zeroes the output, then scans the inputs in ascending order. Every
    /// asserted input overwrites the output, so the highest asserted index
    /// is encoded.
    fn encode(&self, assign: impl Fn(String) -> SequentialStatement) -> Block {
        let mut block = vec![assign(self.output_type().zero())];
        for (i, input) in indexed_names(INPUT, self.lines()).iter().enumerate() {
            block.push(SequentialStatement::if_then(
                is_high(input),
                vec![assign(to_vector(i as u64, self.width.get()))],
            ));
        }
        block
    }
}

impl Component for EncoderParams {
    fn description(&self) -> String {
        format!("{}-to-{} encoder", self.lines(), self.width)
    }

    fn ports(&self) -> Vec<Port> {
        let mut ports = self.input_ports();
        ports.push(Port::output(OUTPUT, self.output_type()));
        ports
    }

    fn basic(&self) -> ArchitectureBody {
        let process = Process::new(
            indexed_names(INPUT, self.lines()),
            self.encode(|value| SequentialStatement::signal_assignment(OUTPUT, value)),
        );
        ArchitectureBody::new(vec![], vec![process.into()])
    }

    fn function(&self, name: &VhdlName) -> ArchitectureBody {
        let mut statements =
            self.encode(|value| SequentialStatement::variable_assignment(RESULT, value));
        statements.push(SequentialStatement::return_value(RESULT));
        let function = Subprogram::function(
            name.clone(),
            self.input_ports().iter().map(Parameter::from_port).collect(),
            self.output_type(),
            statements,
        )
        .with_variable(ObjectDeclaration::variable(RESULT, self.output_type()));
        let output = call(name, [joined_names(INPUT, self.lines())]);
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
        parameters.push(Parameter::signal(OUTPUT, Mode::Out, self.output_type()));
        let procedure = Subprogram::procedure(
            name.clone(),
            parameters,
            self.encode(|value| SequentialStatement::signal_assignment(OUTPUT, value)),
        );
        let mut args = indexed_names(INPUT, self.lines());
        args.push(OUTPUT.to_string());
        let process = Process::new(
            indexed_names(INPUT, self.lines()),
            vec![SequentialStatement::call(name.as_str(), args)],
        );
        ArchitectureBody::new(vec![procedure.into()], vec![process.into()])
    }
}
