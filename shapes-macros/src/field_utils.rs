use syn::{Field, FieldsNamed, Ident, Token, Type, punctuated::Punctuated};

/// 确保具名字段结构体的第一个字段为 `name: ty`
/// - 已存在同名字段：复用原定义（保留其可见性、属性与类型）并移至最前
/// - 不存在：按给定类型新建私有字段
/// 其余字段保持原有相对顺序。
pub(crate) fn ensure_leading_field(fields_named: &mut FieldsNamed, name: &Ident, ty: &Type) {
    let old_named = std::mem::take(&mut fields_named.named);
    let (leading, rest): (Vec<Field>, Vec<Field>) = old_named
        .into_iter()
        .partition(|f| f.ident.as_ref() == Some(name));

    let mut new_named: Punctuated<Field, Token![,]> = Punctuated::new();
    match leading.into_iter().next() {
        Some(existing) => new_named.push(existing),
        None => new_named.push(syn::parse_quote! { #name: #ty }),
    }
    new_named.extend(rest);

    fields_named.named = new_named;
}
