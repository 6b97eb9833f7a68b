//! Entity derive macro implementation

use heck::{ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Result};

/// Struct-level `#[entity(...)]` attributes.
struct StructAttrs {
    table: Option<String>,
    rename_all: Option<String>,
}

/// Field-level `#[entity(...)]` attributes.
struct FieldAttrs {
    column: Option<String>,
    skip: bool,
}

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let struct_attrs = parse_struct_attrs(&input)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Entity can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Entity can only be derived for structs",
            ));
        }
    };

    let table = struct_attrs
        .table
        .unwrap_or_else(|| name.to_string());
    let rename_all = struct_attrs.rename_all.as_deref().unwrap_or("PascalCase");

    let mut columns = Vec::with_capacity(fields.len());
    let mut field_idents = Vec::with_capacity(fields.len());

    for field in fields.iter() {
        let field_attrs = parse_field_attrs(field)?;
        if field_attrs.skip {
            continue;
        }
        let field_ident = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
        let column = match field_attrs.column {
            Some(column) => column,
            None => rename(&field_ident.to_string(), rename_all, field)?,
        };
        columns.push(column);
        field_idents.push(field_ident);
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::sqlforge::Entity for #name #ty_generics #where_clause {
            fn table_name() -> &'static str {
                #table
            }

            fn columns() -> &'static [&'static str] {
                &[#(#columns),*]
            }

            fn read_value(&self, column: &str) -> ::sqlforge::Value {
                match column {
                    #(#columns => ::sqlforge::serde_json::to_value(&self.#field_idents)
                        .unwrap_or(::sqlforge::Value::Null),)*
                    _ => ::sqlforge::Value::Null,
                }
            }
        }
    })
}

fn parse_struct_attrs(input: &DeriveInput) -> Result<StructAttrs> {
    let mut attrs = StructAttrs {
        table: None,
        rename_all: None,
    };

    for attr in &input.attrs {
        if attr.path().is_ident("entity") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("table") {
                    let lit: syn::LitStr = meta.value()?.parse()?;
                    attrs.table = Some(lit.value());
                    Ok(())
                } else if meta.path.is_ident("rename_all") {
                    let lit: syn::LitStr = meta.value()?.parse()?;
                    attrs.rename_all = Some(lit.value());
                    Ok(())
                } else {
                    Err(meta.error("unsupported entity attribute, expected `table` or `rename_all`"))
                }
            })?;
        }
    }

    Ok(attrs)
}

fn parse_field_attrs(field: &syn::Field) -> Result<FieldAttrs> {
    let mut attrs = FieldAttrs {
        column: None,
        skip: false,
    };

    for attr in &field.attrs {
        if attr.path().is_ident("entity") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("column") {
                    let lit: syn::LitStr = meta.value()?.parse()?;
                    attrs.column = Some(lit.value());
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    attrs.skip = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported entity attribute, expected `column` or `skip`"))
                }
            })?;
        }
    }

    Ok(attrs)
}

fn rename(field: &str, style: &str, spanned: &syn::Field) -> Result<String> {
    Ok(match style {
        "PascalCase" => field.to_upper_camel_case(),
        "camelCase" => field.to_lower_camel_case(),
        "snake_case" => field.to_snake_case(),
        "SCREAMING_SNAKE_CASE" => field.to_shouty_snake_case(),
        other => {
            return Err(syn::Error::new_spanned(
                spanned,
                format!(
                    "unknown rename_all style `{other}`, expected `PascalCase`, `camelCase`, \
                     `snake_case` or `SCREAMING_SNAKE_CASE`"
                ),
            ));
        }
    })
}
