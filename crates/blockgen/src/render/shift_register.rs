use blockgen_vhdl::{
    architecture::ArchitectureBody,
    common::vhdl_name::VhdlName,
    declaration::{ArchitectureDeclaration, ObjectDeclaration},
    expression::{call, index, is_high, shift_left, LOGIC_LOW},
    object::ObjectType,
    port::{Mode, Parameter, Port},
    process::{
        statement::{ifelse::IfElse, Block, SequentialStatement},
        Process,
    },
    statement::Statement,
    subprogram::Subprogram,
    usings::Usings,
};

use crate::{component::ShiftMode, params::ShiftRegisterParams};

use super::Component;

const CLOCK: &str = "clk";
const RESET: &str = "reset";
const SERIAL_IN: &str = "serial_in";
const PARALLEL_OUT: &str = "parallel_out";
const LOAD: &str = "load";
const PARALLEL_IN: &str = "parallel_in";
const SERIAL_OUT: &str = "serial_out";
const REGISTER: &str = "shift_reg";
const CURRENT: &str = "current_reg";
const NEXT: &str = "next_reg";

/// How the next register value is computed.
enum NextState<'a> {
    Inline,
    Function(&'a VhdlName),
    Procedure(&'a VhdlName),
}

impl ShiftRegisterParams {
    fn register_type(&self) -> ObjectType {
        ObjectType::bit_vector(self.width)
    }

    /// The inputs the next register value depends on, besides the register.
    fn data_inputs(&self) -> Vec<(&'static str, ObjectType)> {
        match self.mode {
            ShiftMode::Sipo => vec![(SERIAL_IN, ObjectType::Bit)],
            ShiftMode::Piso => vec![
                (PARALLEL_IN, self.register_type()),
                (LOAD, ObjectType::Bit),
            ],
        }
    }

    /// The next register value, assigned through `assign`, given the current
    /// value `current`.
    fn next_value(&self, current: &str, assign: impl Fn(String) -> SequentialStatement) -> Block {
        let width = self.width.get();
        match self.mode {
            ShiftMode::Sipo => vec![assign(shift_left(current, width, SERIAL_IN))],
            ShiftMode::Piso => vec![SequentialStatement::if_else(
                is_high(LOAD),
                vec![assign(PARALLEL_IN.to_string())],
                vec![assign(shift_left(current, width, LOGIC_LOW))],
            )],
        }
    }

    /// The clocked process holding the register, with synchronous reset.
    fn register_process(&self, next: NextState) -> Process {
        let clear = vec![SequentialStatement::signal_assignment(
            REGISTER,
            self.register_type().zero(),
        )];
        let mut args = vec![REGISTER.to_string()];
        args.extend(self.data_inputs().into_iter().map(|(name, _)| name.to_string()));
        let reset = IfElse::new(is_high(RESET), clear);
        let update = match next {
            NextState::Inline => match self.mode {
                // Loading takes priority over shifting.
                ShiftMode::Piso => reset
                    .with_else_if(
                        is_high(LOAD),
                        vec![SequentialStatement::signal_assignment(REGISTER, PARALLEL_IN)],
                    )
                    .with_else(vec![SequentialStatement::signal_assignment(
                        REGISTER,
                        shift_left(REGISTER, self.width.get(), LOGIC_LOW),
                    )]),
                ShiftMode::Sipo => reset.with_else(self.next_value(REGISTER, |value| {
                    SequentialStatement::signal_assignment(REGISTER, value)
                })),
            },
            NextState::Function(name) => reset.with_else(vec![
                SequentialStatement::signal_assignment(REGISTER, call(name, args)),
            ]),
            NextState::Procedure(name) => {
                args.push(REGISTER.to_string());
                reset.with_else(vec![SequentialStatement::call(name.as_str(), args)])
            }
        };
        Process::clocked(CLOCK, vec![update.into()])
    }

    fn architecture_body(&self, declaration: Option<Subprogram>, next: NextState) -> ArchitectureBody {
        let output = match self.mode {
            ShiftMode::Sipo => Statement::assignment(PARALLEL_OUT, REGISTER),
            ShiftMode::Piso => {
                Statement::assignment(SERIAL_OUT, index(REGISTER, self.width.get() - 1))
            }
        };
        let mut declarations: Vec<ArchitectureDeclaration> = vec![];
        if let Some(subprogram) = declaration {
            declarations.push(subprogram.into());
        }
        declarations.push(ObjectDeclaration::signal(REGISTER, self.register_type()).into());
        ArchitectureBody::new(
            declarations,
            vec![self.register_process(next).into(), output],
        )
    }
}

impl Component for ShiftRegisterParams {
    fn description(&self) -> String {
        let mode = match self.mode {
            ShiftMode::Sipo => "serial-in parallel-out",
            ShiftMode::Piso => "parallel-in serial-out",
        };
        format!("{}-bit {} shift register", self.width, mode)
    }

    fn usings(&self) -> Usings {
        Usings::ieee_std_logic()
    }

    fn ports(&self) -> Vec<Port> {
        let mut ports = vec![
            Port::input(CLOCK, ObjectType::Bit),
            Port::input(RESET, ObjectType::Bit),
        ];
        match self.mode {
            ShiftMode::Sipo => {
                ports.push(Port::input(SERIAL_IN, ObjectType::Bit));
                ports.push(Port::output(PARALLEL_OUT, self.register_type()));
            }
            ShiftMode::Piso => {
                ports.push(Port::input(LOAD, ObjectType::Bit));
                ports.push(Port::input(PARALLEL_IN, self.register_type()));
                ports.push(Port::output(SERIAL_OUT, ObjectType::Bit));
            }
        }
        ports
    }

    fn basic(&self) -> ArchitectureBody {
        self.architecture_body(None, NextState::Inline)
    }

    fn function(&self, name: &VhdlName) -> ArchitectureBody {
        let mut parameters = vec![Parameter::new(CURRENT, self.register_type())];
        parameters.extend(
            self.data_inputs()
                .into_iter()
                .map(|(input, typ)| Parameter::new(input, typ)),
        );
        let function = Subprogram::function(
            name.clone(),
            parameters,
            self.register_type(),
            self.next_value(CURRENT, |value| SequentialStatement::return_value(value)),
        );
        self.architecture_body(Some(function), NextState::Function(name))
    }

    fn procedure(&self, name: &VhdlName) -> ArchitectureBody {
        let mut parameters = vec![Parameter::signal(CURRENT, Mode::In, self.register_type())];
        parameters.extend(
            self.data_inputs()
                .into_iter()
                .map(|(input, typ)| Parameter::signal(input, Mode::In, typ)),
        );
        parameters.push(Parameter::signal(NEXT, Mode::Out, self.register_type()));
        let procedure = Subprogram::procedure(
            name.clone(),
            parameters,
            self.next_value(CURRENT, |value| {
                SequentialStatement::signal_assignment(NEXT, value)
            }),
        );
        self.architecture_body(Some(procedure), NextState::Procedure(name))
    }
}
