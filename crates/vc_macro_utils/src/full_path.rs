//! Fully qualified paths of `core` items.
//!
//! Generated code must not depend on what the caller has in scope,
//! so every std item is spelled out with a leading `::core`.
//!
//! ```
//! use quote::quote;
//! use vc_macro_utils::full_path::OptionFP;
//!
//! let tokens = quote!(#OptionFP::None);
//! assert!(tokens.to_string().ends_with("Option :: None"));
//! ```

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_full_path {
    ($($(#[$attr:meta])* $name:ident => [$($path:tt)+])*) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Clone, Copy)]
            pub struct $name;

            impl ToTokens for $name {
                #[inline]
                fn to_tokens(&self, tokens: &mut TokenStream) {
                    tokens.extend(quote!($($path)+));
                }
            }
        )*
    };
}

define_full_path! {
    /// `::core::any::Any`
    AnyFP => [::core::any::Any]
    /// `::core::clone::Clone`
    CloneFP => [::core::clone::Clone]
    /// `::core::default::Default`
    DefaultFP => [::core::default::Default]
    /// `::core::fmt::Debug`
    DebugFP => [::core::fmt::Debug]
    /// `::core::option::Option`
    OptionFP => [::core::option::Option]
    /// `::core::result::Result`
    ResultFP => [::core::result::Result]
    /// `::core::marker::Send`
    SendFP => [::core::marker::Send]
    /// `::core::marker::Sync`
    SyncFP => [::core::marker::Sync]
}
