//! Implementation of the `wrap_call!`, `wrap_exception!` and
//! `wrap_error_code!` procedural macros.
//!
//! # Supported Input Forms
//!
//! 1. Descriptor form: `wrap_call!(function(name: Type, other) -> Return)`;
//!    parameter types and the return type are optional
//! 2. Function name + arity form: `wrap_call!(function, 2)`
//! 3. Closure form: `wrap_call!(|name: Type| body)`
//!
//! # Generated Code Structure
//!
//! For `wrap_call!(parse(text: &str) -> i32)`:
//!
//! ```text
//! move |text: &str| -> ::optkit::gate::Opt<i32> {
//!     ::optkit::adapt::attempt_with(
//!         "parse",
//!         || {
//!             let __optkit_result = parse(text);
//!             #[allow(unused_imports)]
//!             use ::optkit::adapt::__private::{ResultKind as _, ValueKind as _};
//!             (&__optkit_result).result_kind().into_result(__optkit_result)
//!         },
//!         |error| {
//!             #[allow(unused_imports)]
//!             use ::optkit::adapt::__private::{DisplayKind as _, TypeNameKind as _};
//!             (&::optkit::adapt::__private::ErrorRef(error)).describe_kind().describe(error)
//!         },
//!     )
//! }
//! ```
//!
//! Errors implementing `Display` are described by their message, any other
//! error by its type name. `wrap_exception!` calls `capture_with` instead,
//! and `wrap_error_code!` calls `status` on the raw return value.
//!
//! The closure form is logged under `closure@<file>:<line>` of the macro
//! invocation.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{ExprClosure, ExprPath, Ident, LitInt, Pat, Token, Type, parenthesized, token};

/// Which runtime adapter the generated closure calls.
#[derive(Clone, Copy)]
pub enum Adapter {
    Call,
    Exception,
    ErrorCode,
}

impl Adapter {
    const fn macro_name(self) -> &'static str {
        match self {
            Self::Call => "wrap_call!",
            Self::Exception => "wrap_exception!",
            Self::ErrorCode => "wrap_error_code!",
        }
    }
}

struct Parameter {
    name: Ident,
    ty: Option<Type>,
}

impl Parse for Parameter {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name: Ident = input.parse()?;
        let ty = if input.peek(Token![:]) {
            input.parse::<Token![:]>()?;
            Some(input.parse()?)
        } else {
            None
        };
        Ok(Self { name, ty })
    }
}

enum Target {
    Descriptor {
        function: ExprPath,
        parameters: Vec<Parameter>,
        return_type: Option<Type>,
    },
    FunctionWithArity {
        function: ExprPath,
        arity: usize,
    },
    Closure(ExprClosure),
}

impl Parse for Target {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Err(syn::Error::new(
                Span::call_site(),
                "expected a function descriptor such as `parse(text: &str) -> i32`",
            ));
        }

        if input.peek(Token![|]) || input.peek(Token![||]) || input.peek(Token![move]) {
            let closure: ExprClosure = input.parse()?;
            input.parse::<Option<Token![,]>>()?;
            return Ok(Self::Closure(closure));
        }

        let function: ExprPath = input.parse()?;

        if input.peek(token::Paren) {
            let content;
            parenthesized!(content in input);
            let parameters: Vec<Parameter> =
                Punctuated::<Parameter, Token![,]>::parse_terminated(&content)?
                    .into_iter()
                    .collect();
            let return_type = if input.peek(Token![->]) {
                input.parse::<Token![->]>()?;
                Some(input.parse()?)
            } else {
                None
            };
            input.parse::<Option<Token![,]>>()?;
            return Ok(Self::Descriptor {
                function,
                parameters,
                return_type,
            });
        }

        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
            let arity: LitInt = input.parse()?;
            let arity = arity.base10_parse::<usize>()?;
            input.parse::<Option<Token![,]>>()?;
            return Ok(Self::FunctionWithArity { function, arity });
        }

        Err(input.error("expected `(parameters)` or `, arity` after the function path"))
    }
}

pub fn wrap_impl(input: TokenStream, adapter: Adapter) -> TokenStream {
    let expanded = match syn::parse::<Target>(input) {
        Ok(target) => generate(&target, adapter),
        Err(error) => {
            let message = format!("{}: {}", adapter.macro_name(), error);
            syn::Error::new(error.span(), message).to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

fn argument_identifier(index: usize) -> Ident {
    format_ident!("__optkit_argument_{}", index)
}

/// Renders a function path as a compact name for log fields.
fn function_name(function: &ExprPath) -> String {
    quote!(#function).to_string().replace(' ', "")
}

fn generate(target: &Target, adapter: Adapter) -> TokenStream2 {
    match target {
        Target::Descriptor {
            function,
            parameters,
            return_type,
        } => {
            let inputs = parameters.iter().map(|parameter| {
                let name = &parameter.name;
                match &parameter.ty {
                    Some(ty) => quote! { #name: #ty },
                    None => quote! { #name },
                }
            });
            let names = parameters.iter().map(|parameter| &parameter.name);
            let call = quote! { #function(#(#names),*) };
            let name = function_name(function);
            generate_closure(
                &quote! { #name },
                quote! { #(#inputs),* },
                &call,
                return_type.as_ref(),
                adapter,
            )
        }
        Target::FunctionWithArity { function, arity } => {
            let arguments: Vec<Ident> = (0..*arity).map(argument_identifier).collect();
            let call = quote! { #function(#(#arguments),*) };
            let name = function_name(function);
            generate_closure(
                &quote! { #name },
                quote! { #(#arguments),* },
                &call,
                None,
                adapter,
            )
        }
        Target::Closure(closure) => {
            let arguments: Vec<Ident> = (0..closure.inputs.len())
                .map(argument_identifier)
                .collect();
            let inputs = closure
                .inputs
                .iter()
                .zip(&arguments)
                .map(|(pattern, argument)| match pattern {
                    Pat::Type(typed) => {
                        let ty = &typed.ty;
                        quote! { #argument: #ty }
                    }
                    _ => quote! { #argument },
                });
            let call = quote! { __optkit_target(#(#arguments),*) };
            let name = quote! {
                ::core::concat!("closure@", ::core::file!(), ":", ::core::line!())
            };
            let adapted = generate_closure(&name, quote! { #(#inputs),* }, &call, None, adapter);
            quote! {
                {
                    let __optkit_target = #closure;
                    #adapted
                }
            }
        }
    }
}

fn generate_closure(
    name: &TokenStream2,
    inputs: TokenStream2,
    call: &TokenStream2,
    return_type: Option<&Type>,
    adapter: Adapter,
) -> TokenStream2 {
    let into_result = quote! {
        let __optkit_result = #call;
        #[allow(unused_imports)]
        use ::optkit::adapt::__private::{ResultKind as _, ValueKind as _};
        (&__optkit_result).result_kind().into_result(__optkit_result)
    };
    let describe = quote! {
        |error| {
            #[allow(unused_imports)]
            use ::optkit::adapt::__private::{DisplayKind as _, TypeNameKind as _};
            (&::optkit::adapt::__private::ErrorRef(error)).describe_kind().describe(error)
        }
    };

    match adapter {
        Adapter::Call => {
            let output = return_type.map(|ty| quote! { -> ::optkit::gate::Opt<#ty> });
            quote! {
                move |#inputs| #output {
                    ::optkit::adapt::attempt_with(#name, || { #into_result }, #describe)
                }
            }
        }
        Adapter::Exception => {
            let annotation = return_type.map(|ty| quote! { : #ty });
            quote! {
                move |#inputs| -> ::optkit::gate::Opt<::optkit::adapt::CapturedError> {
                    ::optkit::adapt::capture_with(
                        #name,
                        || {
                            let __optkit_result #annotation = #call;
                            #[allow(unused_imports)]
                            use ::optkit::adapt::__private::{ResultKind as _, ValueKind as _};
                            (&__optkit_result).result_kind().into_result(__optkit_result)
                        },
                        #describe,
                    )
                }
            }
        }
        Adapter::ErrorCode => {
            let output = return_type.map(|ty| quote! { -> ::optkit::gate::Opt<#ty> });
            quote! {
                move |#inputs| #output {
                    ::optkit::adapt::status(#name, || #call)
                }
            }
        }
    }
}
