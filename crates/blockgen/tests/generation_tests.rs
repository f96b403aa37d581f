use blockgen::{generate, CodeStyle, ComponentKind, GenerationRequest, NamingSet};

mod common;

use common::{count_lines, default_request, generate_text};

#[test]
fn mux_basic_example() {
    let request = GenerationRequest::new(
        ComponentKind::Mux,
        CodeStyle::Basic,
        NamingSet::new("mux4", "a1", "mux_sel"),
    )
    .with_parameter("inputs", 4)
    .with_parameter("width", 8);
    assert_eq!(
        generate_text(&request).unwrap(),
        "library IEEE;
use IEEE.STD_LOGIC_1164.ALL;
use IEEE.NUMERIC_STD.ALL;

-- 4-to-1 multiplexer of 8-bit inputs
entity mux4 is
    port (
        inp0 : in std_logic_vector(7 downto 0);
        inp1 : in std_logic_vector(7 downto 0);
        inp2 : in std_logic_vector(7 downto 0);
        inp3 : in std_logic_vector(7 downto 0);
        sel : in std_logic_vector(1 downto 0);
        bitout : out std_logic_vector(7 downto 0)
    );
end mux4;

architecture a1 of mux4 is
begin
    process(inp0, inp1, inp2, inp3, sel)
    begin
        case to_integer(unsigned(sel)) is
            when 0 => bitout <= inp0;
            when 1 => bitout <= inp1;
            when 2 => bitout <= inp2;
            when 3 => bitout <= inp3;
            when others => bitout <= (others => '0');
        end case;
    end process;
end a1;
"
    );
}

#[test]
fn clock_divider_function_example() {
    let request = GenerationRequest::new(
        ComponentKind::ClockDivider,
        CodeStyle::Function,
        NamingSet::new("clk_div", "behavioral", "toggle_clk"),
    )
    .with_parameter("div_factor", 4);
    assert_eq!(
        generate_text(&request).unwrap(),
        "library IEEE;
use IEEE.STD_LOGIC_1164.ALL;
use IEEE.NUMERIC_STD.ALL;

-- Divides clk_in by 4
entity clk_div is
    port (
        clk_in : in std_logic;
        reset : in std_logic;
        clk_out : out std_logic
    );
end clk_div;

architecture behavioral of clk_div is
    function toggle_clk(
        current_count : integer;
        current_clk : std_logic)
        return std_logic is
    begin
        if current_count = 3 then
            return not current_clk;
        else
            return current_clk;
        end if;
    end function;

    signal counter : integer range 0 to 3;
    signal temp_clk : std_logic;
begin
    process(clk_in)
    begin
        if rising_edge(clk_in) then
            if reset = '1' then
                counter <= 0;
                temp_clk <= '0';
            else
                temp_clk <= toggle_clk(counter, temp_clk);
                if counter = 3 then
                    counter <= 0;
                else
                    counter <= counter + 1;
                end if;
            end if;
        end if;
    end process;

    clk_out <= temp_clk;
end behavioral;
"
    );
}

#[test]
fn shift_register_procedure_example() {
    let request = GenerationRequest::new(
        ComponentKind::ShiftRegister,
        CodeStyle::Procedure,
        NamingSet::new("sipo8", "rtl", "shift_in"),
    )
    .with_parameter("width", 8)
    .with_parameter("mode", "SIPO");
    assert_eq!(
        generate_text(&request).unwrap(),
        "library IEEE;
use IEEE.STD_LOGIC_1164.ALL;

-- 8-bit serial-in parallel-out shift register
entity sipo8 is
    port (
        clk : in std_logic;
        reset : in std_logic;
        serial_in : in std_logic;
        parallel_out : out std_logic_vector(7 downto 0)
    );
end sipo8;

architecture rtl of sipo8 is
    procedure shift_in(
        signal current_reg : in std_logic_vector(7 downto 0);
        signal serial_in : in std_logic;
        signal next_reg : out std_logic_vector(7 downto 0)) is
    begin
        next_reg <= current_reg(6 downto 0) & serial_in;
    end procedure;

    signal shift_reg : std_logic_vector(7 downto 0);
begin
    process(clk)
    begin
        if rising_edge(clk) then
            if reset = '1' then
                shift_reg <= (others => '0');
            else
                shift_in(shift_reg, serial_in, shift_reg);
            end if;
        end if;
    end process;

    parallel_out <= shift_reg;
end rtl;
"
    );
}

#[test]
fn every_component_in_every_style() {
    for kind in ComponentKind::ALL {
        for style in CodeStyle::ALL {
            let text = generate_text(&default_request(kind, style))
                .unwrap_or_else(|err| panic!("{} {}: {}", kind, style, err));
            assert!(text.starts_with("library IEEE;\n"), "{} {}", kind, style);
            assert!(text.contains("entity comp is\n"), "{} {}", kind, style);
            assert!(text.contains("architecture rtl of comp is\n"), "{} {}", kind, style);
            assert!(text.ends_with("end rtl;\n"), "{} {}", kind, style);
            match style {
                CodeStyle::Basic => {
                    assert!(!text.contains("helper"), "{} {}", kind, style);
                }
                CodeStyle::Function => {
                    assert!(text.contains("    function helper(\n"), "{} {}", kind, style);
                    assert!(text.contains("helper("), "{} {}", kind, style);
                    assert_eq!(text.matches("helper(").count(), 2, "{} {}", kind, style);
                }
                CodeStyle::Procedure => {
                    assert!(text.contains("    procedure helper(\n"), "{} {}", kind, style);
                    assert_eq!(text.matches("helper(").count(), 2, "{} {}", kind, style);
                }
            }
        }
    }
}

#[test]
fn piso_in_every_style() {
    for style in CodeStyle::ALL {
        let request = default_request(ComponentKind::ShiftRegister, style)
            .with_parameter("mode", "PISO");
        let text = generate_text(&request).unwrap();
        assert!(text.contains("        load : in std_logic;\n"));
        assert!(text.contains("    serial_out <= shift_reg(7);\n"));
        assert!(text.contains("(6 downto 0) & '0'"));
    }
}

#[test]
fn deterministic() {
    for kind in ComponentKind::ALL {
        for style in CodeStyle::ALL {
            let request = default_request(kind, style);
            assert_eq!(generate(&request), generate(&request));
        }
    }
}

#[test]
fn decoder_and_encoder_fan_out() {
    for kind in [ComponentKind::Decoder, ComponentKind::Encoder] {
        let narrow = generate_text(&default_request(kind, CodeStyle::Basic).with_parameter("width", 1))
            .unwrap();
        let wide = generate_text(&default_request(kind, CodeStyle::Basic).with_parameter("width", 8))
            .unwrap();
        match kind {
            ComponentKind::Decoder => {
                assert_eq!(count_lines(&narrow, "when ") - 1, 2);
                assert_eq!(count_lines(&wide, "when ") - 1, 256);
                assert_eq!(count_lines(&wide, "out255 : out std_logic"), 1);
            }
            _ => {
                assert_eq!(count_lines(&narrow, "if in"), 2);
                assert_eq!(count_lines(&wide, "if in"), 256);
                assert_eq!(count_lines(&wide, "in255 : in std_logic;"), 1);
            }
        }
    }
}

#[test]
fn mux_fan_in() {
    let text = generate_text(&default_request(ComponentKind::Mux, CodeStyle::Basic)).unwrap();
    assert_eq!(count_lines(&text, "inp"), 4);
    assert_eq!(count_lines(&text, "when others => bitout <= (others => '0');"), 1);

    let single = generate_text(
        &default_request(ComponentKind::Mux, CodeStyle::Basic).with_parameter("inputs", 1),
    )
    .unwrap();
    assert!(single.contains("        sel : in std_logic_vector(0 downto 0);\n"));
}

#[test]
fn demux_outputs_are_zeroed() {
    let text = generate_text(&default_request(ComponentKind::Demux, CodeStyle::Procedure)).unwrap();
    for i in 0..4 {
        assert!(text.contains(&format!("        out{} <= (others => '0');\n", i)));
        assert!(text.contains(&format!("            when {} => out{} <= input;\n", i, i)));
    }
    let function = generate_text(&default_request(ComponentKind::Demux, CodeStyle::Function)).unwrap();
    assert!(function.contains("        result := (others => (others => '0'));\n"));
}

#[test]
fn memory_read_paths() {
    let basic = generate_text(&default_request(ComponentKind::Memory, CodeStyle::Basic)).unwrap();
    assert!(basic.contains("    type ram_type is array (0 to 15) of std_logic_vector(7 downto 0);\n"));
    assert!(basic.contains("    signal ram : ram_type := (others => (others => '0'));\n"));
    assert!(basic.contains("    data_out <= ram(to_integer(unsigned(addr)));\n"));

    let function =
        generate_text(&default_request(ComponentKind::Memory, CodeStyle::Function)).unwrap();
    assert!(function.contains("    data_out <= helper(ram, addr);\n"));

    let procedure =
        generate_text(&default_request(ComponentKind::Memory, CodeStyle::Procedure)).unwrap();
    assert!(procedure.contains("    process(ram, addr)\n"));
    assert!(procedure.contains("        helper(ram, addr, data_out);\n"));
}

#[test]
fn large_memory_with_confirmation() {
    let request = default_request(ComponentKind::Memory, CodeStyle::Basic)
        .with_parameter("addr_width", 17)
        .with_large_resources(true);
    let text = generate_text(&request).unwrap();
    assert!(text.contains("type ram_type is array (0 to 131071) of std_logic_vector(7 downto 0);"));
}
