///
/// ValueTag
///
/// Stable value-variant tag used by diagnostics and compile traces.
///
/// IMPORTANT:
/// Tag values are part of stable behavior and must remain fixed.
///

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueTag {
    Blob = 1,
    Bool = 2,
    Decimal = 3,
    Float32 = 4,
    Float64 = 5,
    Int = 6,
    List = 7,
    Map = 8,
    Null = 9,
    Object = 10,
    Text = 11,
    Timestamp = 12,
    Uint = 13,
    Ulid = 14,
}

impl ValueTag {
    /// Stable byte tag for this variant.
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Stable human-readable value kind label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blob => "Blob",
            Self::Bool => "Bool",
            Self::Decimal => "Decimal",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
            Self::Int => "Int",
            Self::List => "List",
            Self::Map => "Map",
            Self::Null => "Null",
            Self::Object => "Object",
            Self::Text => "Text",
            Self::Timestamp => "Timestamp",
            Self::Uint => "Uint",
            Self::Ulid => "Ulid",
        }
    }
}

impl std::fmt::Display for ValueTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
