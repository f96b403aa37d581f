use std::{fmt, ops::Deref};

use blockgen_common::error::{Error, Result};
use uncased::{Uncased, UncasedStr};

/// Reserved words of VHDL. Identifiers may not match any of these, regardless
/// of case.
pub const RESERVED_WORDS: &[&str] = &[
    "abs", "access", "after", "alias", "all", "and", "architecture", "array", "assert",
    "attribute", "begin", "block", "body", "buffer", "bus", "case", "component",
    "configuration", "constant", "disconnect", "downto", "else", "elsif", "end", "entity",
    "exit", "file", "for", "function", "generate", "generic", "group", "guarded", "if", "impure",
    "in", "inertial", "inout", "is", "label", "library", "linkage", "literal", "loop", "map",
    "mod", "nand", "new", "next", "nor", "not", "null", "of", "on", "open", "or", "others",
    "out", "package", "port", "postponed", "procedure", "process", "pure", "range", "record",
    "register", "reject", "rem", "report", "return", "rol", "ror", "select", "severity",
    "signal", "shared", "sla", "sll", "sra", "srl", "subtype", "then", "to", "transport", "type",
    "unaffected", "units", "until", "use", "variable", "wait", "when", "while", "with", "xnor",
    "xor",
];

/// Returns true if `name` is a VHDL reserved word (case-insensitive).
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS
        .iter()
        .any(|word| UncasedStr::new(word) == UncasedStr::new(name))
}

/// The rule a candidate identifier broke.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NameViolation {
    Empty,
    ContainsWhitespace,
    InvalidCharacter(char),
    StartsWithNonLetter,
    TrailingUnderscore,
    ConsecutiveUnderscores,
    ReservedWord,
    /// The name is already declared by the generated design.
    Clash(String),
}

impl fmt::Display for NameViolation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NameViolation::Empty => write!(f, "cannot be empty"),
            NameViolation::ContainsWhitespace => write!(f, "cannot contain whitespace"),
            NameViolation::InvalidCharacter(c) => write!(
                f,
                "can only contain letters, numbers, and underscores (found {:?})",
                c
            ),
            NameViolation::StartsWithNonLetter => write!(f, "must start with a letter"),
            NameViolation::TrailingUnderscore => write!(f, "cannot end with an underscore"),
            NameViolation::ConsecutiveUnderscores => {
                write!(f, "cannot contain consecutive underscores")
            }
            NameViolation::ReservedWord => write!(f, "is a VHDL reserved word"),
            NameViolation::Clash(name) => write!(
                f,
                "clashes with `{}`, which is declared by the generated design",
                name
            ),
        }
    }
}

/// Checks a candidate identifier against the VHDL naming rules.
///
/// Rules are checked in order, and the first rule broken is returned:
/// - The name is non-empty
/// - The name contains no whitespace
/// - The name consists of ASCII letters, numbers and underscores
/// - The name starts with a letter
/// - The name does not end with an underscore
/// - The name does not contain double underscores
/// - The name is not a reserved word
pub fn check_name(name: &str) -> std::result::Result<(), NameViolation> {
    let first = match name.chars().next() {
        Some(c) => c,
        None => return Err(NameViolation::Empty),
    };
    if name.chars().any(char::is_whitespace) {
        return Err(NameViolation::ContainsWhitespace);
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
    {
        return Err(NameViolation::InvalidCharacter(c));
    }
    if !first.is_ascii_alphabetic() {
        Err(NameViolation::StartsWithNonLetter)
    } else if name.ends_with('_') {
        Err(NameViolation::TrailingUnderscore)
    } else if name.contains("__") {
        Err(NameViolation::ConsecutiveUnderscores)
    } else if is_reserved_word(name) {
        Err(NameViolation::ReservedWord)
    } else {
        Ok(())
    }
}

/// Type-safe wrapper for valid VHDL identifiers.
///
/// VHDL is case-insensitive, so equality and hashing ignore case, while the
/// original spelling is kept for display. See [`check_name`] for the rules.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VhdlName(Uncased<'static>);

impl VhdlName {
    /// Constructs a new name wrapper. Returns the broken rule when the
    /// provided name is invalid.
    pub fn validate(name: impl Into<String>) -> std::result::Result<Self, NameViolation> {
        let name: String = name.into();
        check_name(&name)?;
        Ok(VhdlName(name.into()))
    }

    /// Constructs a new name wrapper. Returns an error when the provided name
    /// is invalid.
    pub fn try_new(name: impl Into<String>) -> Result<Self> {
        let name: String = name.into();
        VhdlName::validate(name.clone())
            .map_err(|violation| Error::InvalidArgument(format!("{}: name {}", name, violation)))
    }

    /// Wraps a name known to be valid at compile time.
    pub(crate) fn from_static(name: &'static str) -> Self {
        debug_assert_eq!(check_name(name), Ok(()));
        VhdlName(Uncased::new(name))
    }

    /// Return the name as originally spelled.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Deref for VhdlName {
    type Target = str;
    fn deref(&self) -> &str {
        self.0.as_str()
    }
}

impl PartialEq<str> for VhdlName {
    fn eq(&self, other: &str) -> bool {
        self.0.as_uncased_str() == UncasedStr::new(other)
    }
}

impl PartialEq<&str> for VhdlName {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl fmt::Display for VhdlName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
