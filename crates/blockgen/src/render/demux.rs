use blockgen_vhdl::{
    architecture::ArchitectureBody,
    common::vhdl_name::VhdlName,
    declaration::{ArchitectureDeclaration, ObjectDeclaration},
    expression::{call, index, to_integer},
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
    fragment::{case_arms, indexed_names, indexed_port_list, selector_width},
    params::DemuxParams,
};

use super::Component;

const INPUT: &str = "input";
const SELECT: &str = "sel";
const OUTPUT: &str = "out";
const OUTPUT_ARRAY: &str = "output_array";
const OUTPUT_SIGNALS: &str = "output_signals";
const RESULT: &str = "result";

impl DemuxParams {
    fn data_type(&self) -> ObjectType {
        ObjectType::bit_vector(self.width)
    }

    fn select_type(&self) -> ObjectType {
        ObjectType::bit_vector(selector_width(self.outputs))
    }

    fn array_type(&self) -> ArrayType {
        ArrayType::new(
            OUTPUT_ARRAY,
            u64::from(self.outputs.get()) - 1,
            self.data_type(),
        )
    }

    fn output_names(&self) -> Vec<String> {
        indexed_names(OUTPUT, self.outputs.get())
    }

    /// Zeroes every output, then routes the input to the selected one.
    fn route(&self, outputs: &[String], assign: impl Fn(&str, String) -> SequentialStatement) -> Block {
        let zero = self.data_type().zero();
        let mut block: Block = outputs
            .iter()
            .map(|output| assign(output.as_str(), zero.clone()))
            .collect();
        let arms = case_arms(self.outputs.get(), |i| {
            vec![assign(outputs[i as usize].as_str(), INPUT.to_string())]
        });
        block.push(Case::new(to_integer(SELECT), arms, vec![]).into());
        block
    }
}

impl Component for DemuxParams {
    fn description(&self) -> String {
        format!(
            "1-to-{} demultiplexer of {}-bit data, unselected outputs are zero",
            self.outputs, self.width
        )
    }

    fn ports(&self) -> Vec<Port> {
        let mut ports = vec![
            Port::input(INPUT, self.data_type()),
            Port::input(SELECT, self.select_type()),
        ];
        ports.extend(indexed_port_list(
            OUTPUT,
            self.outputs.get(),
            Mode::Out,
            &self.data_type(),
        ));
        ports
    }

    fn basic(&self) -> ArchitectureBody {
        let process = Process::new(
            [INPUT, SELECT],
            self.route(&self.output_names(), |output, value| {
                SequentialStatement::signal_assignment(output, value)
            }),
        );
        ArchitectureBody::new(vec![], vec![process.into()])
    }

    fn function(&self, name: &VhdlName) -> ArchitectureBody {
        let array = self.array_type();
        let array_type = ObjectType::from(array.clone());
        let mut statements = vec![SequentialStatement::variable_assignment(
            RESULT,
            array_type.zero(),
        )];
        let arms = case_arms(self.outputs.get(), |i| {
            vec![SequentialStatement::variable_assignment(
                index(RESULT, i),
                INPUT,
            )]
        });
        statements.push(Case::new(to_integer(SELECT), arms, vec![]).into());
        statements.push(SequentialStatement::return_value(RESULT));
        let function = Subprogram::function(
            name.clone(),
            vec![
                Parameter::new(INPUT, self.data_type()),
                Parameter::new(SELECT, self.select_type()),
            ],
            array_type.clone(),
            statements,
        )
        .with_variable(ObjectDeclaration::variable(RESULT, array_type.clone()));

        let declarations: Vec<ArchitectureDeclaration> = vec![
            array.into(),
            function.into(),
            ObjectDeclaration::signal(OUTPUT_SIGNALS, array_type).into(),
        ];
        let mut statements = vec![Statement::assignment(
            OUTPUT_SIGNALS,
            call(name, [INPUT, SELECT]),
        )];
        for (i, output) in self.output_names().iter().enumerate() {
            statements.push(Statement::assignment(output.as_str(), index(OUTPUT_SIGNALS, i)));
        }
        ArchitectureBody::new(declarations, statements)
    }

    fn procedure(&self, name: &VhdlName) -> ArchitectureBody {
        let outputs = self.output_names();
        let mut parameters = vec![
            Parameter::input(INPUT, self.data_type()),
            Parameter::input(SELECT, self.select_type()),
        ];
        parameters.extend(
            outputs
                .iter()
                .map(|output| Parameter::signal(output.as_str(), Mode::Out, self.data_type())),
        );
        let procedure = Subprogram::procedure(
            name.clone(),
            parameters,
            self.route(&outputs, |output, value| {
                SequentialStatement::signal_assignment(output, value)
            }),
        );
        let mut args = vec![INPUT.to_string(), SELECT.to_string()];
        args.extend(outputs);
        let process = Process::new(
            [INPUT, SELECT],
            vec![SequentialStatement::call(name.as_str(), args)],
        );
        ArchitectureBody::new(vec![procedure.into()], vec![process.into()])
    }
}

#[cfg(test)]
mod tests {
    use blockgen_common::numbers::Positive;
    use blockgen_vhdl::declaration::Declare;

    use super::*;

    fn demux(outputs: u32, width: u32) -> DemuxParams {
        DemuxParams {
            outputs: Positive::new(outputs).unwrap(),
            width: Positive::new(width).unwrap(),
        }
    }

    #[test]
    fn basic_zeroes_outputs_first() {
        let body = demux(2, 8).basic();
        assert_eq!(
            body.statements()[0].declare(),
            "process(input, sel)
begin
    out0 <= (others => '0');
    out1 <= (others => '0');
    case to_integer(unsigned(sel)) is
        when 0 => out0 <= input;
        when 1 => out1 <= input;
        when others => null;
    end case;
end process;"
        );
    }

    #[test]
    fn function_returns_zeroed_aggregate() {
        let name = VhdlName::try_new("route").unwrap();
        let body = demux(2, 8).function(&name);
        let declarations = body
            .declarations()
            .iter()
            .map(|d| d.declare())
            .collect::<Vec<_>>();
        assert_eq!(
            declarations,
            vec![
                "type output_array is array (0 to 1) of std_logic_vector(7 downto 0);".to_string(),
                "function route(
    input : std_logic_vector(7 downto 0);
    sel : std_logic_vector(0 downto 0))
    return output_array is
    variable result : output_array;
begin
    result := (others => (others => '0'));
    case to_integer(unsigned(sel)) is
        when 0 => result(0) := input;
        when 1 => result(1) := input;
        when others => null;
    end case;
    return result;
end function;"
                    .to_string(),
                "signal output_signals : output_array;".to_string(),
            ]
        );
        let statements = body
            .statements()
            .iter()
            .map(|s| s.declare())
            .collect::<Vec<_>>();
        assert_eq!(
            statements,
            vec![
                "output_signals <= route(input, sel);",
                "out0 <= output_signals(0);",
                "out1 <= output_signals(1);"
            ]
        );
    }

    #[test]
    fn procedure_drives_every_output() {
        let name = VhdlName::try_new("route").unwrap();
        let body = demux(4, 1).procedure(&name);
        let procedure = body.declarations()[0].declare();
        assert!(procedure.starts_with(
            "procedure route(
    input : in std_logic_vector(0 downto 0);
    sel : in std_logic_vector(1 downto 0);
    signal out0 : out std_logic_vector(0 downto 0);"
        ));
        assert!(procedure.contains("    out3 <= (others => '0');\n"));
        assert!(procedure.contains("        when 3 => out3 <= input;\n"));
        assert_eq!(
            body.statements()[0].declare(),
            "process(input, sel)
begin
    route(input, sel, out0, out1, out2, out3);
end process;"
        );
    }
}
