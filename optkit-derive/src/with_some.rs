//! Implementation of the `with_some!` procedural macro.
//!
//! # Supported Input Forms
//!
//! 1. Single expression: `with_some!(expr, some name => body, none => body)`
//! 2. Expression list: `with_some!([e1, e2], some [n1, n2] => body, none => body)`
//!
//! Branches may appear in either order. Names are identifiers, `mut`
//! identifiers, or `_`.
//!
//! # Generated Code Structure
//!
//! For `with_some!([a, b], some [x, y] => some_body, none => none_body)`:
//!
//! ```text
//! match match ::optkit::to_opt!(a) {
//!     ::optkit::gate::Opt::Present(__optkit_value_0) => match ::optkit::to_opt!(b) {
//!         ::optkit::gate::Opt::Present(__optkit_value_1) => {
//!             ::optkit::gate::Opt::Present((__optkit_value_0, __optkit_value_1))
//!         }
//!         ::optkit::gate::Opt::Absent => ::optkit::gate::Opt::Absent,
//!     },
//!     ::optkit::gate::Opt::Absent => ::optkit::gate::Opt::Absent,
//! } {
//!     ::optkit::gate::Opt::Present((x, y)) => some_body,
//!     ::optkit::gate::Opt::Absent => none_body,
//! }
//! ```
//!
//! No closures are generated, so `return`, `?`, and `break` in a branch body
//! act on the enclosing function or loop.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Expr, Ident, Pat, Token, bracketed, token};

/// The expressions to unpack, as written.
enum Operands {
    Single(Expr),
    List {
        bracket: token::Bracket,
        expressions: Vec<Expr>,
    },
}

/// The names bound by the `some` branch, as written.
enum Names {
    Single(Pat),
    List {
        bracket: token::Bracket,
        patterns: Vec<Pat>,
    },
}

struct SomeBranch {
    names: Names,
    body: Expr,
}

struct WithSomeInput {
    operands: Operands,
    some_branch: SomeBranch,
    none_body: Expr,
}

pub fn with_some_impl(input: TokenStream) -> TokenStream {
    let expanded = match syn::parse::<WithSomeInput>(input) {
        Ok(input) => generate(&input),
        Err(error) => error.to_compile_error(),
    };

    TokenStream::from(expanded)
}

impl Parse for WithSomeInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Err(syn::Error::new(
                Span::call_site(),
                "with_some! requires an expression and `some` / `none` branches",
            ));
        }

        let operands = parse_operands(input)?;
        input.parse::<Token![,]>()?;

        let mut some_branch: Option<SomeBranch> = None;
        let mut none_body: Option<Expr> = None;

        while !input.is_empty() {
            let keyword: Ident = input.parse()?;
            if keyword == "some" {
                if some_branch.is_some() {
                    return Err(syn::Error::new(
                        keyword.span(),
                        "duplicate `some` branch in with_some!",
                    ));
                }
                let names = parse_names(input)?;
                input.parse::<Token![=>]>()?;
                let body = input.parse::<Expr>()?;
                some_branch = Some(SomeBranch { names, body });
            } else if keyword == "none" {
                if none_body.is_some() {
                    return Err(syn::Error::new(
                        keyword.span(),
                        "duplicate `none` branch in with_some!",
                    ));
                }
                input.parse::<Token![=>]>()?;
                none_body = Some(input.parse::<Expr>()?);
            } else {
                return Err(syn::Error::new(
                    keyword.span(),
                    format!("unknown branch `{keyword}`; expected `some` or `none`"),
                ));
            }

            if !input.is_empty() {
                input.parse::<Token![,]>()?;
            }
        }

        let Some(some_branch) = some_branch else {
            return Err(syn::Error::new(
                Span::call_site(),
                "with_some! is missing its `some` branch",
            ));
        };
        let Some(none_body) = none_body else {
            return Err(syn::Error::new(
                Span::call_site(),
                "with_some! is missing its `none` branch",
            ));
        };

        check_arity(&operands, &some_branch.names)?;

        Ok(Self {
            operands,
            some_branch,
            none_body,
        })
    }
}

fn parse_operands(input: ParseStream) -> syn::Result<Operands> {
    if !input.peek(token::Bracket) {
        return Ok(Operands::Single(input.parse()?));
    }

    let content;
    let bracket = bracketed!(content in input);
    let expressions: Vec<Expr> = Punctuated::<Expr, Token![,]>::parse_terminated(&content)?
        .into_iter()
        .collect();

    if expressions.is_empty() {
        return Err(syn::Error::new(
            bracket.span.join(),
            "with_some! requires at least one expression",
        ));
    }

    Ok(Operands::List {
        bracket,
        expressions,
    })
}

fn parse_names(input: ParseStream) -> syn::Result<Names> {
    if !input.peek(token::Bracket) {
        let pattern = Pat::parse_single(input)?;
        check_name(&pattern)?;
        return Ok(Names::Single(pattern));
    }

    let content;
    let bracket = bracketed!(content in input);
    let patterns: Vec<Pat> = Punctuated::<Pat, Token![,]>::parse_terminated_with(
        &content,
        Pat::parse_single,
    )?
    .into_iter()
    .collect();

    for pattern in &patterns {
        check_name(pattern)?;
    }

    Ok(Names::List { bracket, patterns })
}

/// Accepts `name`, `mut name`, and `_`.
fn check_name(pattern: &Pat) -> syn::Result<()> {
    match pattern {
        Pat::Ident(binding) if binding.by_ref.is_none() && binding.subpat.is_none() => Ok(()),
        Pat::Wild(_) => Ok(()),
        other => Err(syn::Error::new(
            other.span(),
            "with_some! binds plain names only: expected `name`, `mut name`, or `_`",
        )),
    }
}

fn check_arity(operands: &Operands, names: &Names) -> syn::Result<()> {
    match (operands, names) {
        (Operands::Single(_), Names::Single(_)) => Ok(()),
        (
            Operands::List { expressions, .. },
            Names::List {
                bracket, patterns, ..
            },
        ) => {
            if expressions.len() == patterns.len() {
                Ok(())
            } else {
                Err(syn::Error::new(
                    bracket.span.join(),
                    format!(
                        "with_some! expected {} names, one per expression, found {}",
                        expressions.len(),
                        patterns.len()
                    ),
                ))
            }
        }
        (Operands::Single(_), Names::List { patterns, .. }) if patterns.len() == 1 => Ok(()),
        (Operands::Single(_), Names::List { bracket, .. }) => Err(syn::Error::new(
            bracket.span.join(),
            "a single expression binds a single name: use `some name` or `some [name]`",
        )),
        (Operands::List { bracket, .. }, Names::Single(pattern)) => {
            let mut error = syn::Error::new(
                pattern.span(),
                "an expression list binds a name list: use `some [name, ...]`",
            );
            error.combine(syn::Error::new(
                bracket.span.join(),
                "expression list given here",
            ));
            Err(error)
        }
    }
}

fn generate(input: &WithSomeInput) -> TokenStream2 {
    let expressions: Vec<&Expr> = match &input.operands {
        Operands::Single(expression) => vec![expression],
        Operands::List { expressions, .. } => expressions.iter().collect(),
    };

    let value_identifiers: Vec<Ident> = (0..expressions.len())
        .map(|index| format_ident!("__optkit_value_{}", index, span = Span::mixed_site()))
        .collect();

    let (packed, pattern) = match &input.some_branch.names {
        Names::Single(name) => {
            let value = &value_identifiers[0];
            (quote! { #value }, quote! { #name })
        }
        Names::List { patterns, .. } => (
            quote! { (#(#value_identifiers,)*) },
            quote! { (#(#patterns,)*) },
        ),
    };

    let mut unpacked = quote! { ::optkit::gate::Opt::Present(#packed) };
    for (expression, value) in expressions.iter().zip(&value_identifiers).rev() {
        unpacked = quote! {
            match ::optkit::to_opt!(#expression) {
                ::optkit::gate::Opt::Present(#value) => #unpacked,
                ::optkit::gate::Opt::Absent => ::optkit::gate::Opt::Absent,
            }
        };
    }

    let some_body = &input.some_branch.body;
    let none_body = &input.none_body;

    quote! {
        match #unpacked {
            ::optkit::gate::Opt::Present(#pattern) => #some_body,
            ::optkit::gate::Opt::Absent => #none_body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(tokens: TokenStream2) -> syn::Result<WithSomeInput> {
        syn::parse2::<WithSomeInput>(tokens)
    }

    fn error_message(tokens: TokenStream2) -> String {
        match parse(tokens) {
            Ok(_) => String::from("<parsed>"),
            Err(error) => error.to_string(),
        }
    }

    #[rstest]
    fn test_parses_list_form_in_either_order() {
        assert!(parse(quote! { [a(), b()], some [x, y] => x + y, none => 0 }).is_ok());
        assert!(parse(quote! { [a(), b()], none => 0, some [x, y] => x + y }).is_ok());
    }

    #[rstest]
    fn test_parses_single_form() {
        assert!(parse(quote! { lookup(key), some mut value => value, none => 0 }).is_ok());
        assert!(parse(quote! { lookup(key), some _ => 1, none => 0, }).is_ok());
        assert!(parse(quote! { lookup(key), some [value] => value, none => 0 }).is_ok());
    }

    #[rstest]
    #[case(quote! { [a], some [x] => x }, "with_some! is missing its `none` branch")]
    #[case(quote! { [a], none => 0 }, "with_some! is missing its `some` branch")]
    #[case(
        quote! { [a], some [x] => x, none => 0, none => 1 },
        "duplicate `none` branch in with_some!"
    )]
    #[case(
        quote! { [a], some [x] => x, other => 0 },
        "unknown branch `other`; expected `some` or `none`"
    )]
    #[case(
        quote! { [a, b], some [x] => x, none => 0 },
        "with_some! expected 2 names, one per expression, found 1"
    )]
    #[case(
        quote! { [], some [] => 0, none => 0 },
        "with_some! requires at least one expression"
    )]
    #[case(
        quote! { [a], some [(x, y)] => x, none => 0 },
        "with_some! binds plain names only: expected `name`, `mut name`, or `_`"
    )]
    #[case(
        quote! { a, some [x, y] => x, none => 0 },
        "a single expression binds a single name: use `some name` or `some [name]`"
    )]
    fn test_construction_errors(#[case] tokens: TokenStream2, #[case] expected: &str) {
        assert_eq!(error_message(tokens), expected);
    }

    #[rstest]
    fn test_generates_nested_matches() {
        let input = parse(quote! { [a, b], some [x, y] => x, none => 0 });
        let generated = match input {
            Ok(input) => generate(&input).to_string(),
            Err(error) => panic!("unexpected parse error: {error}"),
        };
        assert_eq!(generated.matches("to_opt !").count(), 2);
    }
}
