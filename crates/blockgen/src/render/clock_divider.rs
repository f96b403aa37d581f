use blockgen_vhdl::{
    architecture::ArchitectureBody,
    common::vhdl_name::VhdlName,
    declaration::{ArchitectureDeclaration, ObjectDeclaration},
    expression::{call, equals, is_high, not, LOGIC_LOW},
    object::ObjectType,
    port::{Mode, Parameter, Port},
    process::{
        statement::{ifelse::IfElse, Block, SequentialStatement},
        Process,
    },
    statement::Statement,
    subprogram::Subprogram,
};

use crate::params::ClockDividerParams;

use super::Component;

const CLOCK_IN: &str = "clk_in";
const RESET: &str = "reset";
const CLOCK_OUT: &str = "clk_out";
const COUNTER: &str = "counter";
const DIVIDED: &str = "temp_clk";
const CURRENT_COUNT: &str = "current_count";
const CURRENT_CLOCK: &str = "current_clk";
const NEXT_CLOCK: &str = "next_clk";

impl ClockDividerParams {
    fn at_terminal_count(&self, counter: &str) -> String {
        equals(counter, self.terminal_count())
    }

    fn signals(&self) -> Vec<ArchitectureDeclaration> {
        vec![
            ObjectDeclaration::signal(COUNTER, ObjectType::IntegerRange(self.terminal_count()))
                .into(),
            ObjectDeclaration::signal(DIVIDED, ObjectType::Bit).into(),
        ]
    }

    /// The divided clock toggles, assigned through `assign`, when the counter
    /// has reached its terminal count, and holds otherwise.
    fn toggle(&self, assign: impl Fn(String) -> SequentialStatement) -> Block {
        vec![SequentialStatement::if_else(
            self.at_terminal_count(CURRENT_COUNT),
            vec![assign(not(CURRENT_CLOCK))],
            vec![assign(CURRENT_CLOCK.to_string())],
        )]
    }

    fn count(&self) -> SequentialStatement {
        SequentialStatement::if_else(
            self.at_terminal_count(COUNTER),
            vec![SequentialStatement::signal_assignment(COUNTER, "0")],
            vec![SequentialStatement::signal_assignment(
                COUNTER,
                format!("{} + 1", COUNTER),
            )],
        )
    }

    /// The clocked process driving the counter and the divided clock. Reset
    /// is synchronous.
    fn divider(&self, subprogram: Option<Subprogram>, update: Block) -> ArchitectureBody {
        let mut declarations: Vec<ArchitectureDeclaration> = vec![];
        if let Some(subprogram) = subprogram {
            declarations.push(subprogram.into());
        }
        declarations.extend(self.signals());
        let reset = vec![
            SequentialStatement::signal_assignment(COUNTER, "0"),
            SequentialStatement::signal_assignment(DIVIDED, LOGIC_LOW),
        ];
        let process = Process::clocked(
            CLOCK_IN,
            vec![IfElse::new(is_high(RESET), reset).with_else(update).into()],
        );
        ArchitectureBody::new(
            declarations,
            vec![process.into(), Statement::assignment(CLOCK_OUT, DIVIDED)],
        )
    }
}

impl Component for ClockDividerParams {
    fn description(&self) -> String {
        format!("Divides clk_in by {}", self.div_factor)
    }

    fn ports(&self) -> Vec<Port> {
        vec![
            Port::input(CLOCK_IN, ObjectType::Bit),
            Port::input(RESET, ObjectType::Bit),
            Port::output(CLOCK_OUT, ObjectType::Bit),
        ]
    }

    fn basic(&self) -> ArchitectureBody {
        let update = IfElse::new(
            self.at_terminal_count(COUNTER),
            vec![
                SequentialStatement::signal_assignment(DIVIDED, not(DIVIDED)),
                SequentialStatement::signal_assignment(COUNTER, "0"),
            ],
        )
        .with_else(vec![SequentialStatement::signal_assignment(
            COUNTER,
            format!("{} + 1", COUNTER),
        )]);
        self.divider(None, vec![update.into()])
    }

    fn function(&self, name: &VhdlName) -> ArchitectureBody {
        let function = Subprogram::function(
            name.clone(),
            vec![
                Parameter::new(CURRENT_COUNT, ObjectType::Integer),
                Parameter::new(CURRENT_CLOCK, ObjectType::Bit),
            ],
            ObjectType::Bit,
            self.toggle(|value| SequentialStatement::return_value(value)),
        );
        let toggle =
            SequentialStatement::signal_assignment(DIVIDED, call(name, [COUNTER, DIVIDED]));
        self.divider(Some(function), vec![toggle, self.count()])
    }

    fn procedure(&self, name: &VhdlName) -> ArchitectureBody {
        let procedure = Subprogram::procedure(
            name.clone(),
            vec![
                Parameter::signal(CURRENT_COUNT, Mode::In, ObjectType::Integer),
                Parameter::signal(CURRENT_CLOCK, Mode::In, ObjectType::Bit),
                Parameter::signal(NEXT_CLOCK, Mode::Out, ObjectType::Bit),
            ],
            self.toggle(|value| SequentialStatement::signal_assignment(NEXT_CLOCK, value)),
        );
        let toggle = SequentialStatement::call(name.as_str(), [COUNTER, DIVIDED, DIVIDED]);
        self.divider(Some(procedure), vec![toggle, self.count()])
    }
}

#[cfg(test)]
mod tests {
    use blockgen_common::numbers::Positive;
    use blockgen_vhdl::declaration::Declare;

    use super::*;

    fn divider(div_factor: u32) -> ClockDividerParams {
        ClockDividerParams {
            div_factor: Positive::new(div_factor).unwrap(),
        }
    }

    #[test]
    fn basic_divider() {
        let body = divider(4).basic();
        let declarations = body
            .declarations()
            .iter()
            .map(|d| d.declare())
            .collect::<Vec<_>>();
        assert_eq!(
            declarations,
            vec![
                "signal counter : integer range 0 to 3;",
                "signal temp_clk : std_logic;"
            ]
        );
        assert_eq!(
            body.statements()[0].declare(),
            "process(clk_in)
begin
    if rising_edge(clk_in) then
        if reset = '1' then
            counter <= 0;
            temp_clk <= '0';
        else
            if counter = 3 then
                temp_clk <= not temp_clk;
                counter <= 0;
            else
                counter <= counter + 1;
            end if;
        end if;
    end if;
end process;"
        );
        assert_eq!(body.statements()[1].declare(), "clk_out <= temp_clk;");
    }

    #[test]
    fn function_toggles_at_terminal_count() {
        let name = VhdlName::try_new("next_clock").unwrap();
        let body = divider(4).function(&name);
        assert_eq!(
            body.declarations()[0].declare(),
            "function next_clock(
    current_count : integer;
    current_clk : std_logic)
    return std_logic is
begin
    if current_count = 3 then
        return not current_clk;
    else
        return current_clk;
    end if;
end function;"
        );
        assert_eq!(
            body.declarations()[1].declare(),
            "signal counter : integer range 0 to 3;"
        );
        assert!(body.statements()[0].declare().contains(
            "        else
            temp_clk <= next_clock(counter, temp_clk);
            if counter = 3 then
                counter <= 0;
            else
                counter <= counter + 1;
            end if;
        end if;"
        ));
    }

    #[test]
    fn procedure_call() {
        let name = VhdlName::try_new("next_clock").unwrap();
        let body = divider(2).procedure(&name);
        assert!(body.declarations()[0]
            .declare()
            .contains("        next_clk <= not current_clk;\n"));
        assert!(body.statements()[0]
            .declare()
            .contains("            next_clock(counter, temp_clk, temp_clk);\n"));
    }

    #[test]
    fn divide_by_one() {
        let body = divider(1).basic();
        assert_eq!(
            body.declarations()[0].declare(),
            "signal counter : integer range 0 to 0;"
        );
        assert!(body.statements()[0].declare().contains("if counter = 0 then"));
    }
}
