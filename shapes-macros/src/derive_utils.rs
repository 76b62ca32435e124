use quote::ToTokens;
use syn::{Attribute, Path, Token, punctuated::Punctuated};

/// 在 attrs 上合并派生：required 在前，用户已有的派生在后，按末段名去重
pub(crate) fn apply_derives(attrs: &mut Vec<Attribute>, required: Vec<Path>) {
    let mut retained = Vec::new();
    let mut existing = Vec::new();
    for attr in attrs.drain(..) {
        if !attr.path().is_ident("derive") {
            retained.push(attr);
            continue;
        }
        // 无法解析的 derive 原样保留，交给编译器报错
        match attr.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated) {
            Ok(list) => existing.extend(list),
            Err(_) => retained.push(attr),
        }
    }

    let mut seen = std::collections::HashSet::<String>::new();
    let merged: Vec<Path> = required
        .into_iter()
        .chain(existing)
        .filter(|p| seen.insert(derive_key(p)))
        .collect();

    attrs.push(syn::parse_quote!(#[derive(#(#merged),*)]));
    attrs.extend(retained);
}

// 以路径末段作为去重 key，使 `Serialize` 与 `serde::Serialize` 视为同一派生
fn derive_key(p: &Path) -> String {
    match p.segments.last() {
        Some(last) => last.ident.to_string(),
        None => p.to_token_stream().to_string(),
    }
}
