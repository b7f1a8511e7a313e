use proc_macro2::TokenStream;

#[inline(always)]
pub(crate) fn empty() -> TokenStream {
    TokenStream::new()
}

/// Returns `literal` as a string literal token carrying `span`.
#[inline]
pub(crate) fn lit_str(literal: &str, span: proc_macro2::Span) -> syn::LitStr {
    syn::LitStr::new(literal, span)
}
