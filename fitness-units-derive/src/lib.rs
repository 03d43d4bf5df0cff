//! Derive macros used by `fitness-units-core` to declare unit families.
//!
//! `fitness-units-derive` is an implementation detail of this workspace. The generated code refers
//! to `crate::Unit`, `crate::Dimension`, `crate::Convertible`, `crate::LinearConverter` and
//! `crate::UnitsResult`, so the derives are meant to be used inside `fitness-units-core` (or a
//! crate exposing the same crate-root API).
//!
//! # Generated impls
//!
//! For a family enum `UnitForce`:
//!
//! - `#[derive(Unit)]` implements `crate::Unit` (symbols, catalog lookup) and `Display`.
//! - `#[derive(Dimension)]` additionally implements `crate::Dimension` and `crate::Convertible`,
//!   overriding the `Unit` hooks so the family carries converters and a base unit.
//!
//! # Attributes
//!
//! On the enum, `#[family(...)]`:
//!
//! - `name = "force"`: family name used in error messages (required)
//! - `base = Newton`: base-unit variant (required for `Dimension`, rejected for `Unit`)
//!
//! On every variant, `#[unit(...)]`:
//!
//! - `symbol = "N"`: unit symbol, unique within the family
//! - `coefficient = 1.0`: factor to the base unit (`Dimension` only)
//! - `constant = 0.0`: offset to the base unit, defaults to `0.0` (`Dimension` only)
//! - `legacy_coefficient = 0.5`: a coefficient older payloads carry for this unit, still accepted
//!   on decode (`Dimension` only)

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, Data, DeriveInput, Expr, Fields, Ident, LitStr, Token,
};

/// Derive `crate::Unit` and `Display` for a non-dimensional unit family.
///
/// Every variant needs a `#[unit(symbol = "...")]` attribute and the enum needs `#[family(name =
/// "...")]`.
#[proc_macro_derive(Unit, attributes(family, unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_family_impl(input, FamilyKind::Plain) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Derive `crate::Unit`, `crate::Dimension`, `crate::Convertible` and `Display` for a dimensional
/// unit family.
///
/// Every variant needs `#[unit(symbol = "...", coefficient = ...)]` and the enum needs
/// `#[family(name = "...", base = Variant)]`.
#[proc_macro_derive(Dimension, attributes(family, unit))]
pub fn derive_dimension(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_family_impl(input, FamilyKind::Dimensional) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FamilyKind {
    Plain,
    Dimensional,
}

fn derive_family_impl(input: DeriveInput, kind: FamilyKind) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let family = parse_family_attribute(&input.attrs)?;

    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new(
                name.span(),
                "unit families must be declared as enums",
            ))
        }
    };

    let mut variants = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new(
                variant.ident.span(),
                "unit variants cannot carry fields",
            ));
        }
        let attr = parse_unit_attribute(&variant.ident, &variant.attrs)?;
        variants.push((variant.ident.clone(), attr));
    }

    if variants.is_empty() {
        return Err(syn::Error::new(name.span(), "unit family has no variants"));
    }

    for (i, (ident, attr)) in variants.iter().enumerate() {
        let symbol = attr.symbol.value();
        if let Some((other, _)) = variants[..i]
            .iter()
            .find(|(_, earlier)| earlier.symbol.value() == symbol)
        {
            return Err(syn::Error::new(
                ident.span(),
                format!("symbol `{}` is already used by `{}`", symbol, other),
            ));
        }
    }

    let family_name = &family.name;
    let idents: Vec<&Ident> = variants.iter().map(|(ident, _)| ident).collect();
    let symbols: Vec<&LitStr> = variants.iter().map(|(_, attr)| &attr.symbol).collect();

    let common = quote! {
        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(<#name as crate::Unit>::symbol(self))
            }
        }
    };

    match kind {
        FamilyKind::Plain => {
            if let Some(base) = &family.base {
                return Err(syn::Error::new(
                    base.span(),
                    "`base` is only allowed on `#[derive(Dimension)]` families",
                ));
            }
            for (ident, attr) in &variants {
                if attr.coefficient.is_some()
                    || attr.constant.is_some()
                    || attr.legacy_coefficient.is_some()
                {
                    return Err(syn::Error::new(
                        ident.span(),
                        "converter attributes require `#[derive(Dimension)]`",
                    ));
                }
            }

            Ok(quote! {
                impl crate::Unit for #name {
                    const FAMILY: &'static str = #family_name;

                    fn symbol(&self) -> &'static str {
                        match self {
                            #( #name::#idents => #symbols, )*
                        }
                    }

                    fn units() -> &'static [Self] {
                        &[ #( #name::#idents, )* ]
                    }
                }

                #common
            })
        }
        FamilyKind::Dimensional => {
            let base = family.base.as_ref().ok_or_else(|| {
                syn::Error::new(name.span(), "missing required attribute `base`")
            })?;
            if !idents.iter().any(|ident| *ident == base) {
                return Err(syn::Error::new(
                    base.span(),
                    format!("base unit `{}` is not a variant of `{}`", base, name),
                ));
            }

            let mut converters = Vec::with_capacity(variants.len());
            let mut legacy = Vec::with_capacity(variants.len());
            for (ident, attr) in &variants {
                let coefficient = attr.coefficient.as_ref().ok_or_else(|| {
                    syn::Error::new(
                        ident.span(),
                        "missing required attribute `coefficient`",
                    )
                })?;
                let constant = match &attr.constant {
                    Some(expr) => quote!(#expr),
                    None => quote!(0.0),
                };
                converters.push(quote! {
                    crate::LinearConverter::catalog(#coefficient, #constant)
                });
                legacy.push(match &attr.legacy_coefficient {
                    Some(old) => quote! {
                        ::core::option::Option::Some(
                            crate::LinearConverter::catalog(#old, #constant)
                        )
                    },
                    None => quote!(::core::option::Option::None),
                });
            }

            let legacy_fn = if variants.iter().any(|(_, attr)| attr.legacy_coefficient.is_some()) {
                quote! {
                    fn legacy_converter(&self) -> ::core::option::Option<crate::LinearConverter> {
                        match self {
                            #( #name::#idents => #legacy, )*
                        }
                    }
                }
            } else {
                quote!()
            };

            Ok(quote! {
                impl crate::Unit for #name {
                    const FAMILY: &'static str = #family_name;

                    fn symbol(&self) -> &'static str {
                        match self {
                            #( #name::#idents => #symbols, )*
                        }
                    }

                    fn units() -> &'static [Self] {
                        &[ #( #name::#idents, )* ]
                    }

                    fn linear_converter(&self) -> ::core::option::Option<crate::LinearConverter> {
                        ::core::option::Option::Some(<#name as crate::Dimension>::converter(self))
                    }

                    fn base_unit() -> ::core::option::Option<Self> {
                        ::core::option::Option::Some(#name::#base)
                    }

                    fn from_parts(
                        symbol: &str,
                        converter: ::core::option::Option<crate::LinearConverter>,
                    ) -> crate::UnitsResult<Self> {
                        crate::unit::dimension_from_parts::<Self>(symbol, converter)
                    }
                }

                impl crate::Dimension for #name {
                    fn base() -> Self {
                        #name::#base
                    }

                    fn converter(&self) -> crate::LinearConverter {
                        match self {
                            #( #name::#idents => #converters, )*
                        }
                    }

                    #legacy_fn
                }

                impl crate::Convertible for #name {
                    fn to_base(&self, value: f64) -> f64 {
                        let converter = <#name as crate::Dimension>::converter(self);
                        crate::Convertible::to_base(&converter, value)
                    }

                    fn from_base(&self, value: f64) -> f64 {
                        let converter = <#name as crate::Dimension>::converter(self);
                        crate::Convertible::from_base(&converter, value)
                    }
                }

                #common
            })
        }
    }
}

/// Parsed contents of the enum-level `#[family(...)]` attribute.
struct FamilyAttribute {
    name: LitStr,
    base: Option<Ident>,
}

impl Parse for FamilyAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name: Option<LitStr> = None;
        let mut base: Option<Ident> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "name" => {
                    name = Some(input.parse()?);
                }
                "base" => {
                    base = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let name =
            name.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `name`"))?;

        Ok(FamilyAttribute { name, base })
    }
}

/// Parsed contents of a variant-level `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    coefficient: Option<Expr>,
    constant: Option<Expr>,
    legacy_coefficient: Option<Expr>,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut coefficient: Option<Expr> = None;
        let mut constant: Option<Expr> = None;
        let mut legacy_coefficient: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "coefficient" => {
                    coefficient = Some(input.parse()?);
                }
                "constant" => {
                    constant = Some(input.parse()?);
                }
                "legacy_coefficient" => {
                    legacy_coefficient = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;

        Ok(UnitAttribute {
            symbol,
            coefficient,
            constant,
            legacy_coefficient,
        })
    }
}

fn parse_family_attribute(attrs: &[Attribute]) -> syn::Result<FamilyAttribute> {
    for attr in attrs {
        if attr.path().is_ident("family") {
            return attr.parse_args::<FamilyAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[family(...)] attribute",
    ))
}

fn parse_unit_attribute(variant: &Ident, attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        variant.span(),
        format!("missing #[unit(...)] attribute on `{}`", variant),
    ))
}
