use blockgen_vhdl::{
    architecture::ArchitectureBody,
    common::vhdl_name::VhdlName,
    declaration::{ArchitectureDeclaration, ObjectDeclaration},
    expression::{call, index, is_high, to_integer},
    object::{array::ArrayType, ObjectType},
    port::{Mode, Parameter, Port},
    process::{statement::SequentialStatement, Process},
    statement::Statement,
    subprogram::Subprogram,
};

use crate::params::MemoryParams;

use super::Component;

const CLOCK: &str = "clk";
const WRITE_ENABLE: &str = "we";
const ADDRESS: &str = "addr";
const DATA_IN: &str = "data_in";
const DATA_OUT: &str = "data_out";
const RAM_TYPE: &str = "ram_type";
const RAM: &str = "ram";
const MEMORY: &str = "memory";
const DATA: &str = "data";

impl MemoryParams {
    fn address_type(&self) -> ObjectType {
        ObjectType::bit_vector(self.addr_width)
    }

    fn data_type(&self) -> ObjectType {
        ObjectType::bit_vector(self.data_width)
    }

    fn ram_type(&self) -> ArrayType {
        ArrayType::new(RAM_TYPE, self.entries() - 1, self.data_type())
    }

    /// `memory(to_integer(unsigned(addr)))`
    fn read(&self, memory: &str) -> String {
        index(memory, to_integer(ADDRESS))
    }

    /// Storage, and a process writing the data input on a rising clock edge
    /// while write enable is high.
    fn storage(
        &self,
        subprogram: Option<Subprogram>,
        read: Statement,
    ) -> ArchitectureBody {
        let ram_type = self.ram_type();
        let mut declarations: Vec<ArchitectureDeclaration> = vec![
            ram_type.clone().into(),
            ObjectDeclaration::signal(RAM, ram_type.into()).zeroed().into(),
        ];
        if let Some(subprogram) = subprogram {
            declarations.push(subprogram.into());
        }
        let write = Process::clocked(
            CLOCK,
            vec![SequentialStatement::if_then(
                is_high(WRITE_ENABLE),
                vec![SequentialStatement::signal_assignment(
                    self.read(RAM),
                    DATA_IN,
                )],
            )],
        );
        ArchitectureBody::new(declarations, vec![write.into(), read])
    }
}

impl Component for MemoryParams {
    fn description(&self) -> String {
        format!(
            "{} x {}-bit memory with synchronous write and combinational read",
            self.entries(),
            self.data_width
        )
    }

    fn ports(&self) -> Vec<Port> {
        vec![
            Port::input(CLOCK, ObjectType::Bit),
            Port::input(WRITE_ENABLE, ObjectType::Bit),
            Port::input(ADDRESS, self.address_type()),
            Port::input(DATA_IN, self.data_type()),
            Port::output(DATA_OUT, self.data_type()),
        ]
    }

    fn basic(&self) -> ArchitectureBody {
        self.storage(None, Statement::assignment(DATA_OUT, self.read(RAM)))
    }

    fn function(&self, name: &VhdlName) -> ArchitectureBody {
        let function = Subprogram::function(
            name.clone(),
            vec![
                Parameter::new(MEMORY, self.ram_type().into()),
                Parameter::new(ADDRESS, self.address_type()),
            ],
            self.data_type(),
            vec![SequentialStatement::return_value(self.read(MEMORY))],
        );
        self.storage(
            Some(function),
            Statement::assignment(DATA_OUT, call(name, [RAM, ADDRESS])),
        )
    }

    fn procedure(&self, name: &VhdlName) -> ArchitectureBody {
        let procedure = Subprogram::procedure(
            name.clone(),
            vec![
                Parameter::signal(MEMORY, Mode::In, self.ram_type().into()),
                Parameter::signal(ADDRESS, Mode::In, self.address_type()),
                Parameter::signal(DATA, Mode::Out, self.data_type()),
            ],
            vec![SequentialStatement::signal_assignment(DATA, self.read(MEMORY))],
        );
        let read = Process::new(
            [RAM, ADDRESS],
            vec![SequentialStatement::call(
                name.as_str(),
                [RAM, ADDRESS, DATA_OUT],
            )],
        );
        self.storage(Some(procedure), read.into())
    }
}
