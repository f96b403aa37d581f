use blockgen_vhdl::{
    architecture::ArchitectureBody,
    common::vhdl_name::VhdlName,
    declaration::{ArchitectureDeclaration, ObjectDeclaration},
    expression::{call, index, to_integer, LOGIC_HIGH, LOGIC_LOW},
    object::{array::ArrayType, ObjectType},
    port::{Mode, Parameter, Port},
    process::{
        statement::{case::Case, Block, SequentialStatement},
        Process,
    },
    statement::Statement,
    subprogram::Subprogram,
};

use crate::{
    fragment::{case_arms, indexed_names, indexed_port_list},
    params::DecoderParams,
};

use super::Component;

const INPUT: &str = "input";
const OUTPUT: &str = "out";
const OUTPUT_ARRAY: &str = "output_array";
const OUTPUT_SIGNALS: &str = "output_signals";
const RESULT: &str = "result";

impl DecoderParams {
    fn input_type(&self) -> ObjectType {
        ObjectType::bit_vector(self.width)
    }

    fn output_names(&self) -> Vec<String> {
        indexed_names(OUTPUT, self.lines())
    }

    /// Clears every output, then asserts the one selected by the input.
    fn decode(&self, outputs: &[String], assign: impl Fn(&str, &str) -> SequentialStatement) -> Block {
        let mut block: Block = outputs
            .iter()
            .map(|output| assign(output.as_str(), LOGIC_LOW))
            .collect();
        let arms = case_arms(self.lines(), |i| {
            vec![assign(outputs[i as usize].as_str(), LOGIC_HIGH)]
        });
        block.push(Case::new(to_integer(INPUT), arms, vec![]).into());
        block
    }
}

impl Component for DecoderParams {
    fn description(&self) -> String {
        format!("{}-to-{} line decoder", self.width, self.lines())
    }

    fn ports(&self) -> Vec<Port> {
        let mut ports = vec![Port::input(INPUT, self.input_type())];
        ports.extend(indexed_port_list(
            OUTPUT,
            self.lines(),
            Mode::Out,
            &ObjectType::Bit,
        ));
        ports
    }

    fn basic(&self) -> ArchitectureBody {
        let process = Process::new(
            [INPUT],
            self.decode(&self.output_names(), |output, value| {
                SequentialStatement::signal_assignment(output, value)
            }),
        );
        ArchitectureBody::new(vec![], vec![process.into()])
    }

    fn function(&self, name: &VhdlName) -> ArchitectureBody {
        let array = ArrayType::new(OUTPUT_ARRAY, u64::from(self.lines()) - 1, ObjectType::Bit);
        let array_type = ObjectType::from(array.clone());
        let arms = case_arms(self.lines(), |i| {
            vec![SequentialStatement::variable_assignment(
                index(RESULT, i),
                LOGIC_HIGH,
            )]
        });
        let function = Subprogram::function(
            name.clone(),
            vec![Parameter::new(INPUT, self.input_type())],
            array_type.clone(),
            vec![
                Case::new(to_integer(INPUT), arms, vec![]).into(),
                SequentialStatement::return_value(RESULT),
            ],
        )
        .with_variable(ObjectDeclaration::variable(RESULT, array_type.clone()).zeroed());

        let declarations: Vec<ArchitectureDeclaration> = vec![
            array.into(),
            function.into(),
            ObjectDeclaration::signal(OUTPUT_SIGNALS, array_type).into(),
        ];
        let mut statements = vec![Statement::assignment(OUTPUT_SIGNALS, call(name, [INPUT]))];
        for (i, output) in self.output_names().iter().enumerate() {
            statements.push(Statement::assignment(output.as_str(), index(OUTPUT_SIGNALS, i)));
        }
        ArchitectureBody::new(declarations, statements)
    }

    fn procedure(&self, name: &VhdlName) -> ArchitectureBody {
        let outputs = self.output_names();
        let mut parameters = vec![Parameter::input(INPUT, self.input_type())];
        parameters.extend(
            outputs
                .iter()
                .map(|output| Parameter::signal(output.as_str(), Mode::Out, ObjectType::Bit)),
        );
        let procedure = Subprogram::procedure(
            name.clone(),
            parameters,
            self.decode(&outputs, |output, value| {
                SequentialStatement::signal_assignment(output, value)
            }),
        );
        let mut args = vec![INPUT.to_string()];
        args.extend(outputs);
        let process = Process::new(
            [INPUT],
            vec![SequentialStatement::call(name.as_str(), args)],
        );
        ArchitectureBody::new(vec![procedure.into()], vec![process.into()])
    }
}
