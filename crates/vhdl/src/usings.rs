use indexmap::{IndexMap, IndexSet};

use crate::common::vhdl_name::VhdlName;

/// A list of VHDL usings, indexed by library.
///
/// Libraries and usings are kept in insertion order, so declarations are
/// reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Usings(IndexMap<VhdlName, IndexSet<String>>);

impl Usings {
    pub fn new_empty() -> Usings {
        Usings(IndexMap::new())
    }

    /// Usings for `std_logic`/`std_logic_vector` only.
    pub fn ieee_std_logic() -> Usings {
        let mut usings = Usings::new_empty();
        usings.add_ieee("STD_LOGIC_1164.ALL");
        usings
    }

    /// Usings for `std_logic` plus `unsigned`/`to_integer` conversions.
    pub fn ieee_numeric() -> Usings {
        let mut usings = Usings::ieee_std_logic();
        usings.add_ieee("NUMERIC_STD.ALL");
        usings
    }

    fn add_ieee(&mut self, using: &str) {
        self.0
            .entry(ieee())
            .or_insert_with(IndexSet::new)
            .insert(using.to_string());
    }
}

fn ieee() -> VhdlName {
    VhdlName::from_static("IEEE")
}

pub trait ListUsings {
    fn list_usings(&self) -> Usings;
}

pub trait DeclareUsings {
    fn declare_usings(&self) -> String;
}

/// Generate supertrait for VHDL with usings declarations. (E.g. use IEEE.STD_LOGIC_1164.ALL;)
impl<T: ListUsings> DeclareUsings for T {
    fn declare_usings(&self) -> String {
        let mut result = String::new();

        for (lib, usings) in self.list_usings().0 {
            result.push_str(format!("library {};\n", lib).as_str());
            for using in usings {
                result.push_str(format!("use {}.{};\n", lib, using).as_str());
            }
            result.push('\n');
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Usings);

    impl ListUsings for Fixed {
        fn list_usings(&self) -> Usings {
            self.0.clone()
        }
    }

    #[test]
    fn declare_std_logic() {
        assert_eq!(
            Fixed(Usings::ieee_std_logic()).declare_usings(),
            "library IEEE;\nuse IEEE.STD_LOGIC_1164.ALL;\n\n"
        );
    }

    #[test]
    fn declare_ieee() {
        assert_eq!(
            Fixed(Usings::ieee_numeric()).declare_usings(),
            "library IEEE;
use IEEE.STD_LOGIC_1164.ALL;
use IEEE.NUMERIC_STD.ALL;

"
        );
    }
}
