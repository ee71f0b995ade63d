//! Derive macro implementation used by `qdim-core`.
//!
//! `qdim-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of
//! `crate::Unit`, `crate::Quantity` and `crate::NamedDimension`, so it is intended to be used by `qdim-core` (or by
//! crates that expose an identical crate-root API).
//!
//! Most users should depend on `qdim` instead and use the predefined units.
//!
//! # Generated items
//!
//! For a unit marker type `MyUnit`, the derive emits:
//!
//! - `impl crate::Unit for MyUnit`
//! - `const MY_UNIT: crate::Quantity<Dim>`, one `MyUnit` expressed in base units
//! - `const fn from_my_unit(f64) -> crate::Quantity<Dim>` and `const fn to_my_unit(crate::Quantity<Dim>) -> f64`
//!
//! With the `base` flag it also registers `MyUnit` as the display unit of its dimension
//! (`impl crate::NamedDimension for Dim`). With the `prefixes` flag it declares eight sibling units
//! (tera, giga, mega, kilo, centi, milli, micro, nano), each with the items above.
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `symbol = "m"`: displayed unit symbol
//! - `dimension = SomeDim`: dimension type
//! - `ratio = 1000.0`: size of one unit in base units; any constant expression
//! - `base`: optional flag, see above
//! - `prefixes`: optional flag, see above

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, LitFloat, LitStr, Token, Type, Visibility,
};

/// Derive `crate::Unit` together with the unit constant and conversion helpers.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing `symbol`, `dimension`, and `ratio`,
/// optionally followed by the `base` and `prefixes` flags.
///
/// This macro is intended for use by `qdim-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Metric prefixes generated by the `prefixes` flag: name, symbol, operator and factor.
const METRIC_PREFIXES: [(&str, &str, Scale, &str); 8] = [
    ("Tera", "T", Scale::Mul, "1e12"),
    ("Giga", "G", Scale::Mul, "1e9"),
    ("Mega", "M", Scale::Mul, "1e6"),
    ("Kilo", "k", Scale::Mul, "1e3"),
    ("Centi", "c", Scale::Div, "1e2"),
    ("Milli", "m", Scale::Div, "1e3"),
    ("Micro", "u", Scale::Div, "1e6"),
    ("Nano", "n", Scale::Div, "1e9"),
];

#[derive(Clone, Copy)]
enum Scale {
    Mul,
    Div,
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "`Unit` cannot be derived for generic types",
        ));
    }

    let name = &input.ident;
    let vis = &input.vis;
    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let dimension = &unit_attr.dimension;
    let ratio = &unit_attr.ratio;
    let ratio_tokens = quote! { #ratio };

    let mut expanded = unit_items(vis, name, &unit_attr.symbol, dimension, &ratio_tokens);

    if unit_attr.base {
        expanded.extend(quote! {
            impl crate::NamedDimension for #dimension {
                type BaseUnit = #name;
            }
        });
    }

    if unit_attr.prefixes {
        let is_unit_struct = matches!(
            &input.data,
            syn::Data::Struct(data) if matches!(data.fields, syn::Fields::Unit)
        );
        if !is_unit_struct {
            return Err(syn::Error::new_spanned(
                name,
                "`prefixes` requires a unit struct such as `pub struct Meter;`",
            ));
        }
        for (prefix, prefix_symbol, scale, factor) in METRIC_PREFIXES {
            let prefixed = format_ident!("{}{}", prefix, lower_first(&name.to_string()));
            let symbol = LitStr::new(
                &format!("{}{}", prefix_symbol, unit_attr.symbol.value()),
                unit_attr.symbol.span(),
            );
            let factor = LitFloat::new(factor, Span::call_site());
            let ratio = match scale {
                Scale::Mul => quote! { <#name as crate::Unit>::RATIO * #factor },
                Scale::Div => quote! { <#name as crate::Unit>::RATIO / #factor },
            };
            let doc = format!(
                "{} (`{}`), `{}` [`{}`].",
                prefixed,
                symbol.value(),
                match scale {
                    Scale::Mul => format!("{} ×", factor),
                    Scale::Div => format!("1/{} ×", factor),
                },
                name
            );

            expanded.extend(quote! {
                #[doc = #doc]
                #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
                #vis struct #prefixed;
            });
            expanded.extend(unit_items(vis, &prefixed, &symbol, dimension, &ratio));
        }
    }

    Ok(expanded)
}

/// `Unit` impl, unit constant and the `from_*`/`to_*` pair for one unit.
fn unit_items(
    vis: &Visibility,
    name: &Ident,
    symbol: &LitStr,
    dimension: &Type,
    ratio: &TokenStream2,
) -> TokenStream2 {
    let snake = snake_case(&name.to_string());
    let const_ident = Ident::new(&snake.to_uppercase(), name.span());
    let from_ident = format_ident!("from_{}", snake);
    let to_ident = format_ident!("to_{}", snake);

    let const_doc = format!("One [`{}`] (`{}`).", name, symbol.value());
    let from_doc = format!("A quantity of `value` [`{}`].", name);
    let to_doc = format!("`quantity` expressed in [`{}`].", name);

    quote! {
        impl crate::Unit for #name {
            const RATIO: f64 = #ratio;
            type Dim = #dimension;
            const SYMBOL: &'static str = #symbol;
        }

        #[doc = #const_doc]
        #vis const #const_ident: crate::Quantity<#dimension> =
            crate::Quantity::new(<#name as crate::Unit>::RATIO);

        #[doc = #from_doc]
        #[inline]
        #vis const fn #from_ident(value: f64) -> crate::Quantity<#dimension> {
            crate::Quantity::new(value * <#name as crate::Unit>::RATIO)
        }

        #[doc = #to_doc]
        #[inline]
        #vis const fn #to_ident(quantity: crate::Quantity<#dimension>) -> f64 {
            quantity.value() / <#name as crate::Unit>::RATIO
        }
    }
}

/// `MeterPerSecond` -> `meter_per_second`.
fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if i != 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// `MeterPerSecond` -> `meterPerSecond`, so that `Kilo` + it reads `KilometerPerSecond`.
fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    dimension: Type,
    ratio: Expr,
    base: bool,
    prefixes: bool,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut dimension: Option<Type> = None;
        let mut ratio: Option<Expr> = None;
        let mut base = false;
        let mut prefixes = false;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;

            match ident.to_string().as_str() {
                "base" => base = true,
                "prefixes" => prefixes = true,
                key @ ("symbol" | "dimension" | "ratio") => {
                    input.parse::<Token![=]>()?;
                    match key {
                        "symbol" => symbol = Some(input.parse()?),
                        "dimension" => dimension = Some(input.parse()?),
                        _ => ratio = Some(input.parse()?),
                    }
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
        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimension`")
        })?;
        let ratio = ratio
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `ratio`"))?;

        Ok(UnitAttribute {
            symbol,
            dimension,
            ratio,
            base,
            prefixes,
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}
