use convert_case::{Case, Casing};
use darling::{
    Error as DarlingError, FromDeriveInput, FromField, FromMeta, FromVariant,
    ast::Data,
    util::Ignored,
};
use syn::{Attribute, Generics, Ident, Type};

///
/// RenameRule
///

#[derive(Clone, Copy, Debug)]
pub enum RenameRule {
    Camel,
    Pascal,
    Snake,
}

impl RenameRule {
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::Camel => name.to_case(Case::Camel),
            Self::Pascal => name.to_case(Case::Pascal),
            Self::Snake => name.to_string(),
        }
    }
}

impl FromMeta for RenameRule {
    fn from_string(value: &str) -> Result<Self, DarlingError> {
        match value {
            "camelCase" => Ok(Self::Camel),
            "PascalCase" => Ok(Self::Pascal),
            "snake_case" => Ok(Self::Snake),
            other => Err(DarlingError::unknown_value(other)),
        }
    }
}

///
/// ObjectInput
///
/// `#[quarry(rename_all = "...")]` on a struct with named fields.
///

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(quarry), supports(struct_named))]
pub struct ObjectInput {
    pub ident: Ident,
    pub generics: Generics,
    pub data: Data<Ignored, ObjectField>,

    #[darling(default)]
    pub rename_all: Option<RenameRule>,
}

///
/// ObjectField
///
/// `#[quarry(name = "...")]` overrides the stored name,
/// `#[quarry(skip)]` leaves the field out of the schema.
///

#[derive(Debug, FromField)]
#[darling(attributes(quarry))]
pub struct ObjectField {
    pub ident: Option<Ident>,
    pub ty: Type,

    #[darling(default)]
    pub name: Option<String>,

    #[darling(default)]
    pub skip: bool,
}

///
/// EnumInput
///

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(quarry), supports(enum_unit), forward_attrs(repr))]
pub struct EnumInput {
    pub ident: Ident,
    pub generics: Generics,
    pub data: Data<EnumVariant, Ignored>,
    pub attrs: Vec<Attribute>,
}

///
/// EnumVariant
///

#[derive(Debug, FromVariant)]
#[darling(attributes(quarry))]
pub struct EnumVariant {
    pub ident: Ident,

    #[darling(default)]
    pub raw: Option<String>,
}

/// Integer type named by `#[repr(..)]`, if any.
pub fn repr_int(attrs: &[Attribute]) -> Result<Option<Ident>, DarlingError> {
    const INTS: [&str; 8] = ["i8", "i16", "i32", "i64", "u8", "u16", "u32", "u64"];
    let mut repr = None;

    for attr in attrs.iter().filter(|a| a.path().is_ident("repr")) {
        attr.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.get_ident() {
                if INTS.iter().any(|int| ident == int) {
                    repr = Some(ident.clone());
                } else if ident == "isize" || ident == "usize" {
                    return Err(meta.error("pointer-sized repr cannot be stored; use a fixed width"));
                }
            }

            // skip arguments such as `align(8)`
            if meta.input.peek(syn::token::Paren) {
                let _args;
                syn::parenthesized!(_args in meta.input);
            }

            Ok(())
        })?;
    }

    Ok(repr)
}

/// Identifier text without any raw-identifier prefix.
pub fn ident_name(ident: &Ident) -> String {
    let name = ident.to_string();

    match name.strip_prefix("r#") {
        Some(stripped) => stripped.to_string(),
        None => name,
    }
}

/// Associated constant name for a snake_case field identifier.
pub fn constant_name(field: &Ident) -> Ident {
    Ident::new(&ident_name(field).to_ascii_uppercase(), field.span())
}
