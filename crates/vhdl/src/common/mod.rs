pub mod vhdl_name;
