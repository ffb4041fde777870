#![doc = include_str!("../README.md")]

use std::collections::HashSet;

use darling::FromMeta;
use darling::ast::NestedMeta;
use proc_macro::TokenStream;
use quote::format_ident;
use quote::quote;
use syn::Ident;

#[proc_macro_attribute]
pub fn enumeration(attr: TokenStream, tokens: TokenStream) -> TokenStream {
    let attr_args = match NestedMeta::parse_meta_list(attr.into()) {
        Ok(args) => args,
        Err(error) => {
            return TokenStream::from(darling::Error::from(error).write_errors());
        }
    };
    let attr_args = match EnumerationMacroArgs::from_list(&attr_args) {
        Ok(args) => args,
        Err(error) => {
            return TokenStream::from(error.write_errors());
        }
    };

    let item: syn::ItemEnum = match syn::parse(tokens) {
        Ok(item) => item,
        Err(err) => return err.into_compile_error().into(),
    };

    let crate_name = attr_args.crate_override.as_deref().unwrap_or("enumeration");
    let crate_name = format_ident!("{}", crate_name);

    let generated = match process_enum(&crate_name, item) {
        Ok(generated) => generated,
        Err(error) => return error.into_compile_error().into(),
    };

    if attr_args.debug {
        println!("\nGenerated:\n{generated}\n");
    }

    return generated.into();
}

/// Expands the enum-shaped declaration into
/// - a marker struct of the same name that only the engine can construct,
/// - an `Enumeration` impl holding the lazily-built registry,
/// - one singleton accessor per declared member.
fn process_enum(
    crate_name: &Ident,
    item: syn::ItemEnum,
) -> syn::Result<proc_macro2::TokenStream> {
    let syn::ItemEnum {
        attrs,
        vis,
        ident,
        generics,
        variants,
        ..
    } = item;
    if !generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            generics,
            "enumeration types cannot be generic",
        ));
    }

    let mut seen = HashSet::new();
    let mut entries = vec![];
    let mut accessors = vec![];
    for (index, variant) in variants.iter().enumerate() {
        if !matches!(variant.fields, syn::Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "enumeration members cannot carry fields",
            ));
        }
        let member = &variant.ident;
        let name = member.to_string();
        if !seen.insert(name.clone()) {
            return Err(syn::Error::new_spanned(
                member,
                "duplicate enumeration member",
            ));
        }
        let Some((_eq, expr)) = &variant.discriminant else {
            return Err(syn::Error::new_spanned(
                variant,
                "enumeration members must declare a value, e.g. `Monday = 0`",
            ));
        };
        let value = scalar_value(crate_name, expr)?;
        entries.push(quote! { (#name, #value) });
        accessors.push(quote! {
            #[allow(non_snake_case)]
            #vis fn #member() -> &'static #crate_name::Member {
                <Self as #crate_name::Enumeration>::registry().instance_at(#index)
            }
        });
    }

    let type_name = ident.to_string();
    Ok(quote! {
        #(#attrs)*
        #vis struct #ident {
            _opaque: #crate_name::Opaque,
        }

        impl #crate_name::Enumeration for #ident {
            fn registry() -> &'static #crate_name::Registry {
                static REGISTRY: ::std::sync::OnceLock<#crate_name::Registry> =
                    ::std::sync::OnceLock::new();
                REGISTRY.get_or_init(|| {
                    #crate_name::Registry::build::<#ident>(#type_name, [#(#entries),*])
                })
            }
        }

        impl #ident {
            #(#accessors)*
        }
    })
}

fn scalar_value(crate_name: &Ident, expr: &syn::Expr) -> syn::Result<proc_macro2::TokenStream> {
    match expr {
        syn::Expr::Lit(syn::ExprLit { lit, .. }) => scalar_from_lit(crate_name, lit, false),
        syn::Expr::Unary(syn::ExprUnary {
            op: syn::UnOp::Neg(_),
            expr,
            ..
        }) => match &**expr {
            syn::Expr::Lit(syn::ExprLit { lit, .. }) => scalar_from_lit(crate_name, lit, true),
            other => Err(unsupported_value(other)),
        },
        other => Err(unsupported_value(other)),
    }
}

fn scalar_from_lit(
    crate_name: &Ident,
    lit: &syn::Lit,
    negated: bool,
) -> syn::Result<proc_macro2::TokenStream> {
    match lit {
        syn::Lit::Bool(value) if !negated => Ok(quote! { #crate_name::Scalar::Bool(#value) }),
        syn::Lit::Int(value) => {
            let mut parsed: i64 = value.base10_parse()?;
            if negated {
                parsed = -parsed;
            }
            Ok(quote! { #crate_name::Scalar::Int(#parsed) })
        }
        syn::Lit::Float(value) => {
            let mut parsed: f64 = value.base10_parse()?;
            if negated {
                parsed = -parsed;
            }
            Ok(quote! { #crate_name::Scalar::Float(#parsed) })
        }
        syn::Lit::Str(value) if !negated => Ok(quote! {
            #crate_name::Scalar::Str(::std::string::String::from(#value))
        }),
        other => Err(unsupported_value(other)),
    }
}

fn unsupported_value(tokens: impl quote::ToTokens) -> syn::Error {
    syn::Error::new_spanned(
        tokens,
        "enumeration member values must be boolean, integer, float or string literals",
    )
}

#[derive(Debug, FromMeta)]
struct EnumerationMacroArgs {
    #[darling(default)]
    debug: bool,

    #[darling(default)]
    crate_override: Option<String>,
}
