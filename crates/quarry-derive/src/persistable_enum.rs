use crate::attr::{self, EnumInput};
use darling::{Error as DarlingError, FromDeriveInput, ast::Data};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Ident};

// derive_persistable_enum
pub fn derive_persistable_enum(input: TokenStream) -> TokenStream {
    match expand(input) {
        Ok(tokens) => tokens,
        Err(err) => err.write_errors(),
    }
}

fn expand(input: TokenStream) -> Result<TokenStream, DarlingError> {
    let input: DeriveInput = syn::parse2(input)?;
    let input = EnumInput::from_derive_input(&input)?;
    let message = "PersistableEnum can only be derived for enums with unit variants";

    if !input.generics.params.is_empty() {
        return Err(
            DarlingError::custom("PersistableEnum cannot be derived for generic enums")
                .with_span(&input.generics),
        );
    }

    let Data::Enum(data) = &input.data else {
        return Err(DarlingError::custom(message).with_span(&input.ident));
    };
    if data.is_empty() {
        return Err(DarlingError::custom(message).with_span(&input.ident));
    }

    let variants: Vec<(Ident, Option<String>)> = data
        .iter()
        .map(|variant| (variant.ident.clone(), variant.raw.clone()))
        .collect();

    let ident = &input.ident;
    let shared = quote! {
        impl ::quarry::traits::FieldValue for #ident {
            fn to_value(&self) -> ::quarry::value::Value {
                ::quarry::traits::FieldValue::to_value(
                    &::quarry::traits::PersistableEnum::raw_value(self),
                )
            }
        }

        impl ::quarry::traits::FieldType for #ident {}

        impl ::quarry::traits::Comparable for #ident {}
    };

    let body = match attr::repr_int(&input.attrs)? {
        Some(repr) => numeric(ident, &repr, &variants)?,
        None => text(ident, &variants),
    };

    Ok(quote! {
        #shared
        #body
    })
}

// Raw value is the declared discriminant.
fn numeric(
    ident: &Ident,
    repr: &Ident,
    variants: &[(Ident, Option<String>)],
) -> Result<TokenStream, DarlingError> {
    if let Some((variant, _)) = variants.iter().find(|(_, raw)| raw.is_some()) {
        return Err(
            DarlingError::custom("`raw` only applies to enums without an integer repr")
                .with_span(variant),
        );
    }

    let to_raw_arms = variants.iter().map(|(variant, _)| {
        quote! { Self::#variant => Self::#variant as #repr, }
    });
    let from_raw_checks = variants.iter().map(|(variant, _)| {
        quote! {
            if *raw == Self::#variant as #repr {
                return Some(Self::#variant);
            }
        }
    });

    Ok(quote! {
        impl ::quarry::traits::PersistableEnum for #ident {
            type RawValue = #repr;

            fn raw_value(&self) -> #repr {
                match self {
                    #(#to_raw_arms)*
                }
            }

            fn from_raw_value(raw: &#repr) -> Option<Self> {
                #(#from_raw_checks)*
                None
            }
        }

        impl ::quarry::traits::Numeric for #ident {}

        impl ::quarry::traits::RangeContainable for #ident {
            type Bound = Self;
        }
    })
}

// Raw value is the variant name unless overridden.
fn text(ident: &Ident, variants: &[(Ident, Option<String>)]) -> TokenStream {
    let raws: Vec<String> = variants
        .iter()
        .map(|(variant, raw)| raw.clone().unwrap_or_else(|| attr::ident_name(variant)))
        .collect();

    let to_raw_arms = variants.iter().zip(&raws).map(|((variant, _), raw)| {
        quote! { Self::#variant => ::std::string::String::from(#raw), }
    });
    let from_raw_arms = variants.iter().zip(&raws).map(|((variant, _), raw)| {
        quote! { #raw => Some(Self::#variant), }
    });

    quote! {
        impl ::quarry::traits::PersistableEnum for #ident {
            type RawValue = ::std::string::String;

            fn raw_value(&self) -> ::std::string::String {
                match self {
                    #(#to_raw_arms)*
                }
            }

            fn from_raw_value(raw: &::std::string::String) -> Option<Self> {
                match raw.as_str() {
                    #(#from_raw_arms)*
                    _ => None,
                }
            }
        }

        impl ::quarry::traits::StringSearchable for #ident {}
    }
}
