use crate::derive_utils::apply_derives;
use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Item, Result, Token, parse::Parse, parse::ParseStream, parse_macro_input};

/// #[entity_id] 宏实现
/// 仅支持单字段 tuple struct，并为包装类型：
/// - 合并/追加派生：Clone, Debug（可关闭）, Serialize, Deserialize, PartialEq, Eq, Hash
/// - 提供 new(value)、into_inner、Display、FromStr、AsRef、From 等便捷实现
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as EntityIdAttrConfig);
    let input = parse_macro_input!(item as Item);

    let mut st = match input {
        Item::Struct(s) => s,
        other => {
            return syn::Error::new(other.span(), "#[entity_id] only on struct")
                .to_compile_error()
                .into();
        }
    };

    let inner_ty = match &st.fields {
        syn::Fields::Unnamed(f) if f.unnamed.len() == 1 => f.unnamed[0].ty.clone(),
        syn::Fields::Unnamed(f) => {
            return syn::Error::new(
                f.span(),
                "#[entity_id] requires a tuple struct with exactly one field",
            )
            .to_compile_error()
            .into();
        }
        _ => {
            return syn::Error::new(
                st.span(),
                "#[entity_id] supports only tuple struct, e.g., struct X(i64);",
            )
            .to_compile_error()
            .into();
        }
    };

    let mut required: Vec<syn::Path> = vec![
        syn::parse_quote!(Clone),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(Eq),
        syn::parse_quote!(Hash),
    ];
    if cfg.derive_debug.unwrap_or(true) {
        required.insert(1, syn::parse_quote!(Debug));
    }
    apply_derives(&mut st.attrs, required);

    let ident = &st.ident;
    let (impl_generics, ty_generics, where_clause) = st.generics.split_for_impl();

    let out = quote! {
        #st

        impl #impl_generics #ident #ty_generics #where_clause {
            pub const fn new(value: #inner_ty) -> Self { Self(value) }

            pub fn into_inner(self) -> #inner_ty { self.0 }
        }

        impl #impl_generics ::std::str::FromStr for #ident #ty_generics #where_clause
        where #inner_ty: ::std::str::FromStr
        {
            type Err = <#inner_ty as ::std::str::FromStr>::Err;
            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let inner: #inner_ty = s.parse()?;
                ::std::result::Result::Ok(Self(inner))
            }
        }

        impl #impl_generics ::std::fmt::Display for #ident #ty_generics #where_clause
        where #inner_ty: ::std::fmt::Display
        {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::write!(f, "{}", self.0)
            }
        }

        impl #impl_generics ::core::convert::AsRef<#inner_ty> for #ident #ty_generics #where_clause {
            fn as_ref(&self) -> &#inner_ty { &self.0 }
        }

        impl #impl_generics ::core::convert::From<#ident #ty_generics> for #inner_ty #where_clause {
            fn from(value: #ident #ty_generics) -> Self { value.0 }
        }

        impl #impl_generics ::core::convert::From<#inner_ty> for #ident #ty_generics #where_clause {
            fn from(value: #inner_ty) -> Self { Self(value) }
        }
    };

    TokenStream::from(out)
}

// -------- parsing --------

struct EntityIdAttrConfig {
    derive_debug: Option<bool>,
}

impl Parse for EntityIdAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.is_empty() {
            return Ok(Self { derive_debug: None });
        }

        let mut derive_debug: Option<bool> = None;
        let pairs: Punctuated<syn::MetaNameValue, Token![,]> = Punctuated::parse_terminated(input)?;

        for pair in pairs {
            if !pair.path.is_ident("debug") {
                return Err(syn::Error::new(
                    pair.path.span(),
                    "unknown key in attribute; expected 'debug'",
                ));
            }
            if derive_debug.is_some() {
                return Err(syn::Error::new(
                    pair.path.span(),
                    "duplicate key 'debug' in attribute",
                ));
            }
            match pair.value {
                syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Bool(b),
                    ..
                }) => derive_debug = Some(b.value()),
                other => {
                    return Err(syn::Error::new(
                        other.span(),
                        "expected boolean literal for 'debug'",
                    ));
                }
            }
        }

        Ok(Self { derive_debug })
    }
}
