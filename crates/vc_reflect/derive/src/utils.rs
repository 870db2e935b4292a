use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

#[inline(always)]
pub(crate) fn empty() -> TokenStream {
    TokenStream::new()
}

/// A piece of a string computed by generated code.
///
/// `Const` pieces are `&'static str` constant expressions, such as literals
/// or `module_path!()`. `Runtime` pieces are evaluated at runtime,
/// such as `T::type_path()`.
#[derive(Clone)]
pub(crate) enum StringExpr {
    Const(TokenStream),
    Runtime(TokenStream),
}

impl StringExpr {
    pub fn lit(value: &str) -> Self {
        Self::Const(value.to_token_stream())
    }

    pub fn is_const(&self) -> bool {
        matches!(self, Self::Const(_))
    }

    fn tokens(&self) -> &TokenStream {
        match self {
            Self::Const(tokens) | Self::Runtime(tokens) => tokens,
        }
    }

    /// Joins pieces into one expression.
    ///
    /// All-const input becomes a `&'static str` made by `concat!`,
    /// otherwise an owned `String` made by `vc_reflect::impls::concat`.
    pub fn concat(pieces: &[StringExpr], vc_reflect_path: &syn::Path) -> StringExpr {
        let tokens = pieces.iter().map(StringExpr::tokens);

        if pieces.iter().all(StringExpr::is_const) {
            StringExpr::Const(quote! {
                ::core::concat!(#(#tokens),*)
            })
        } else {
            let concat_ = crate::path::concat_(vc_reflect_path);
            StringExpr::Runtime(quote! {
                #concat_(&[#(#tokens),*])
            })
        }
    }
}

impl ToTokens for StringExpr {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.tokens().to_tokens(tokens);
    }
}
