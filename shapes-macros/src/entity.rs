use crate::derive_utils::apply_derives;
use crate::field_utils::ensure_leading_field;
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Item, LitStr, Result, Token, Type, parse::Parse, parse::ParseStream, parse_macro_input};

/// #[entity] 宏实现
/// - 注入（或前移）`id: IdType` 字段
/// - 合并派生：Debug（可关闭）、Clone、PartialEq、Eq
/// - 实现 `::shapes_domain::entity::Entity`
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as EntityAttrConfig);
    let input = parse_macro_input!(item as Item);

    let mut st = match input {
        Item::Struct(s) => s,
        other => {
            return syn::Error::new(other.span(), "#[entity] only on struct")
                .to_compile_error()
                .into();
        }
    };

    // 仅支持具名字段结构体
    let fields_named = match &mut st.fields {
        syn::Fields::Named(f) => f,
        _ => {
            return syn::Error::new(st.span(), "only supports named-field struct")
                .to_compile_error()
                .into();
        }
    };

    let id_type = cfg.id_ty.unwrap_or_else(|| syn::parse_quote! { String });
    ensure_leading_field(fields_named, &format_ident!("id"), &id_type);

    let mut required: Vec<syn::Path> = vec![
        syn::parse_quote!(Clone),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(Eq),
    ];
    if cfg.derive_debug.unwrap_or(true) {
        required.insert(0, syn::parse_quote!(Debug));
    }
    apply_derives(&mut st.attrs, required);

    let ident = &st.ident;
    let type_name = cfg
        .name
        .unwrap_or_else(|| LitStr::new(&ident.to_string(), ident.span()));
    let (impl_generics, ty_generics, where_clause) = st.generics.split_for_impl();

    let expanded = quote! {
        #st

        impl #impl_generics ::shapes_domain::entity::Entity for #ident #ty_generics #where_clause {
            type Id = #id_type;

            const TYPE: &'static str = #type_name;

            fn id(&self) -> &Self::Id { &self.id }
        }
    };

    TokenStream::from(expanded)
}

// -------- parsing --------

struct EntityAttrConfig {
    id_ty: Option<Type>,
    derive_debug: Option<bool>,
    name: Option<LitStr>,
}

impl Parse for EntityAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut cfg = Self {
            id_ty: None,
            derive_debug: None,
            name: None,
        };

        if input.is_empty() {
            return Ok(cfg);
        }

        let elems: Punctuated<EntityAttrElem, Token![,]> = Punctuated::parse_terminated(input)?;

        for elem in elems {
            match elem {
                EntityAttrElem::Id(ty) => {
                    if cfg.id_ty.is_some() {
                        return Err(syn::Error::new(ty.span(), "duplicate key 'id' in attribute"));
                    }
                    cfg.id_ty = Some(*ty);
                }
                EntityAttrElem::Debug(b) => {
                    if cfg.derive_debug.is_some() {
                        return Err(syn::Error::new(
                            proc_macro2::Span::call_site(),
                            "duplicate key 'debug' in attribute",
                        ));
                    }
                    cfg.derive_debug = Some(b);
                }
                EntityAttrElem::Name(lit) => {
                    if cfg.name.is_some() {
                        return Err(syn::Error::new(
                            lit.span(),
                            "duplicate key 'name' in attribute",
                        ));
                    }
                    cfg.name = Some(lit);
                }
            }
        }

        Ok(cfg)
    }
}

enum EntityAttrElem {
    Id(Box<Type>),
    Debug(bool),
    Name(LitStr),
}

impl Parse for EntityAttrElem {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: syn::Ident = input.parse()?;
        let _eq: Token![=] = input.parse()?;
        if key == "id" {
            let ty: Type = input.parse()?;
            Ok(EntityAttrElem::Id(Box::new(ty)))
        } else if key == "debug" {
            let expr: syn::Expr = input.parse()?;
            match expr {
                syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Bool(b),
                    ..
                }) => Ok(EntityAttrElem::Debug(b.value())),
                other => Err(syn::Error::new(
                    other.span(),
                    "expected boolean literal for 'debug'",
                )),
            }
        } else if key == "name" {
            let lit: LitStr = input.parse()?;
            Ok(EntityAttrElem::Name(lit))
        } else {
            Err(syn::Error::new(
                key.span(),
                "unknown key in attribute; expected 'id', 'debug' or 'name'",
            ))
        }
    }
}
