use crate::attr::{self, ObjectField, ObjectInput, RenameRule};
use darling::{Error as DarlingError, FromDeriveInput, ast::Data};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Ident, Type};

///
/// StoredField
///

struct StoredField {
    ident: Ident,
    name: String,
    ty: Type,
}

// derive_object
pub fn derive_object(input: TokenStream) -> TokenStream {
    match expand(input) {
        Ok(tokens) => tokens,
        Err(err) => err.write_errors(),
    }
}

fn expand(input: TokenStream) -> Result<TokenStream, DarlingError> {
    let input: DeriveInput = syn::parse2(input)?;
    let object = ObjectInput::from_derive_input(&input)?;
    let fields = stored_fields(&object)?;

    let ident = &object.ident;
    let type_name = ident.to_string();
    let (impl_generics, ty_generics, where_clause) = object.generics.split_for_impl();

    // typed descriptors, one per stored field
    let field_consts = fields.iter().map(|field| {
        let constant = attr::constant_name(&field.ident);
        let name = &field.name;
        let ty = &field.ty;

        quote! {
            pub const #constant: ::quarry::query::Field<Self, #ty> =
                ::quarry::query::Field::new(#name);
        }
    });

    let by_name_match_arms = fields.iter().map(|field| {
        let field_ident = &field.ident;
        let name = &field.name;

        quote! {
            #name => Some(::quarry::traits::FieldValue::to_value(&self.#field_ident)),
        }
    });

    let names = fields.iter().map(|field| &field.name);

    Ok(quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#field_consts)*
        }

        impl #impl_generics ::quarry::traits::FieldValues for #ident #ty_generics #where_clause {
            fn get_value(&self, field: &str) -> Option<::quarry::value::Value> {
                match field {
                    #(#by_name_match_arms)*
                    _ => None,
                }
            }
        }

        impl #impl_generics ::quarry::traits::Object for #ident #ty_generics #where_clause {
            const TYPE_NAME: &'static str = #type_name;
            const FIELDS: &'static [&'static str] = &[#(#names),*];
        }

        impl #impl_generics ::quarry::traits::FieldValue for #ident #ty_generics #where_clause {
            fn to_value(&self) -> ::quarry::value::Value {
                ::quarry::value::Value::Object(::quarry::traits::Object::to_record(self))
            }
        }

        impl #impl_generics ::quarry::traits::FieldType for #ident #ty_generics #where_clause {}

        impl #impl_generics ::quarry::traits::Comparable for #ident #ty_generics #where_clause {}

        impl #impl_generics ::quarry::traits::Traversable for #ident #ty_generics #where_clause {
            type Target = Self;
        }
    })
}

fn stored_fields(object: &ObjectInput) -> Result<Vec<StoredField>, DarlingError> {
    let Data::Struct(named) = &object.data else {
        return Err(
            DarlingError::custom("Object can only be derived for structs with named fields")
                .with_span(&object.ident),
        );
    };

    let mut fields: Vec<StoredField> = Vec::with_capacity(named.len());
    for field in named.iter().filter(|field| !field.skip) {
        let stored = stored_field(field, object.rename_all)?;

        if fields.iter().any(|f| f.name == stored.name) {
            return Err(DarlingError::custom(format!(
                "duplicate stored field name '{}'",
                stored.name
            ))
            .with_span(&stored.ident));
        }

        fields.push(stored);
    }

    Ok(fields)
}

fn stored_field(
    field: &ObjectField,
    rename_all: Option<RenameRule>,
) -> Result<StoredField, DarlingError> {
    let Some(ident) = field.ident.clone() else {
        return Err(DarlingError::custom("expected a named field").with_span(&field.ty));
    };

    let name = match (&field.name, rename_all) {
        (Some(name), _) => name.clone(),
        (None, Some(rule)) => rule.apply(&attr::ident_name(&ident)),
        (None, None) => attr::ident_name(&ident),
    };

    Ok(StoredField {
        ident,
        name,
        ty: field.ty.clone(),
    })
}
