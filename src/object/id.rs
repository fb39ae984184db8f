use std::fmt;

/// Globally unique, textual catalog name of an object.
///
/// Schema-qualified, and signature-qualified for overloaded functions. `Ord`
/// is derived so ties in topological sort can be broken deterministically by
/// ascending identity, per the determinism requirement in the planner.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identity(pub String);

impl Identity {
    pub fn new(s: impl Into<String>) -> Self {
        Identity(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `schema.name` identity shared by table/view/index/sequence/enum/trigger.
    pub fn qualified(schema: &str, name: &str) -> Self {
        Identity(format!("{schema}.{name}"))
    }

    /// `schema.name(arg_types)` identity used for functions, which may be
    /// overloaded and must disambiguate on signature.
    pub fn with_signature(schema: &str, name: &str, signature: &str) -> Self {
        Identity(format!("{schema}.{name}({signature})"))
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Identity {
    fn from(s: &str) -> Self {
        Identity(s.to_string())
    }
}

impl From<String> for Identity {
    fn from(s: String) -> Self {
        Identity(s)
    }
}

/// Closed set of catalog object kinds. Adding an eighth kind is a code
/// change to this enum plus a C4 registration, never configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObjType {
    Table,
    View,
    Index,
    Sequence,
    Enum,
    Function,
    Trigger,
}

impl fmt::Display for ObjType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ObjType::Table => "table",
            ObjType::View => "view",
            ObjType::Index => "index",
            ObjType::Sequence => "sequence",
            ObjType::Enum => "enum",
            ObjType::Function => "function",
            ObjType::Trigger => "trigger",
        };
        write!(f, "{s}")
    }
}
