//! Derive macros for todo-sync action enums
//!
//! Store actions come in two kinds: **intents** sent by the presentation layer
//! (`FetchAll`, `Toggle { id }`) and **responses** produced by effects once the
//! API answered (`Fetched { result }`). `#[derive(Action)]` lets each variant
//! declare which kind it is so logging and observers can tell them apart.
//!
//! # Example
//!
//! ```ignore
//! use todo_sync_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum SyncTodoAction {
//!     #[intent]
//!     FetchAll,
//!
//!     #[response]
//!     Fetched { result: Result<Vec<Todo>, ApiError> },
//! }
//!
//! assert!(SyncTodoAction::FetchAll.is_intent());
//! assert_eq!(SyncTodoAction::FetchAll.name(), "FetchAll");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, Variant};

/// Derive macro for action enums
///
/// Generates on the enum:
/// - `is_intent()` - true for variants marked `#[intent]`
/// - `is_response()` - true for variants marked `#[response]`
/// - `name()` - the variant name, for log fields and metrics labels
///
/// Unmarked variants are neither intents nor responses.
///
/// # Compile errors
///
/// - Applied to a non-enum type
/// - A variant marked both `#[intent]` and `#[response]`
#[proc_macro_derive(Action, attributes(intent, response))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(&input, "#[derive(Action)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    let mut intent_arms = Vec::new();
    let mut response_arms = Vec::new();
    let mut name_arms = Vec::new();

    for variant in &data_enum.variants {
        let is_intent = has_attribute(&variant.attrs, "intent");
        let is_response = has_attribute(&variant.attrs, "response");

        if is_intent && is_response {
            return syn::Error::new_spanned(
                variant,
                "Variant cannot be both #[intent] and #[response]",
            )
            .to_compile_error()
            .into();
        }

        let pattern = variant_pattern(variant);
        let label = variant.ident.to_string();

        if is_intent {
            intent_arms.push(quote! { #pattern => true, });
        }
        if is_response {
            response_arms.push(quote! { #pattern => true, });
        }
        name_arms.push(quote! { #pattern => #label, });
    }

    let expanded = quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            /// Returns true if this action is an intent from the presentation layer
            #[must_use]
            #[allow(unreachable_patterns)]
            pub const fn is_intent(&self) -> bool {
                match self {
                    #(#intent_arms)*
                    _ => false,
                }
            }

            /// Returns true if this action carries a response produced by an effect
            #[must_use]
            #[allow(unreachable_patterns)]
            pub const fn is_response(&self) -> bool {
                match self {
                    #(#response_arms)*
                    _ => false,
                }
            }

            /// Returns the variant name
            #[must_use]
            pub const fn name(&self) -> &'static str {
                match self {
                    #(#name_arms)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Match pattern for a variant that ignores its fields
fn variant_pattern(variant: &Variant) -> TokenStream2 {
    let ident = &variant.ident;
    match &variant.fields {
        Fields::Named(_) => quote! { Self::#ident { .. } },
        Fields::Unnamed(_) => quote! { Self::#ident(..) },
        Fields::Unit => quote! { Self::#ident },
    }
}

fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}
