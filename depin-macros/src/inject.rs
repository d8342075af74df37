//! `#[inject_dependencies]` implementation.

use darling::ast::NestedMeta;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::parse::Parser;
use syn::{Expr, ExprLit, Field, Fields, FieldsNamed, ItemStruct, Lit, Meta, Path, Visibility};

/// Arguments: dependency trait paths, plus an optional `access = "..."`.
struct InjectArgs {
    services: Vec<Path>,
    access: Visibility,
}

impl InjectArgs {
    fn parse(args: TokenStream2) -> darling::Result<Self> {
        let list = NestedMeta::parse_meta_list(args).map_err(darling::Error::from)?;

        let mut errors = darling::Error::accumulator();
        let mut services = Vec::new();
        let mut access = Visibility::Inherited;

        for item in list {
            match item {
                NestedMeta::Meta(Meta::Path(path)) => services.push(path),
                NestedMeta::Meta(Meta::NameValue(pair)) if pair.path.is_ident("access") => match &pair.value {
                    Expr::Lit(ExprLit {
                        lit: Lit::Str(value), ..
                    }) => match syn::parse_str::<Visibility>(&value.value()) {
                        Ok(vis) => access = vis,
                        Err(_) => errors.push(
                            darling::Error::custom("`access` must be a visibility such as \"pub(crate)\"")
                                .with_span(value),
                        ),
                    },
                    other => errors.push(
                        darling::Error::custom("`access` takes a string literal such as \"pub(crate)\"")
                            .with_span(other),
                    ),
                },
                other => errors.push(
                    darling::Error::custom("only dependency trait paths and `access = \"...\"` are allowed")
                        .with_span(&other),
                ),
            }
        }

        if services.is_empty() {
            errors.push(darling::Error::custom("list at least one dependency trait"));
        }

        errors.finish_with(Self { services, access })
    }
}

pub(crate) fn expand(args: TokenStream, input: TokenStream) -> TokenStream {
    expand_tokens(args.into(), input.into()).into()
}

fn expand_tokens(args: TokenStream2, input: TokenStream2) -> TokenStream2 {
    let args = match InjectArgs::parse(args) {
        Ok(args) => args,
        Err(e) => return e.write_errors(),
    };

    let item = match syn::parse2::<ItemStruct>(input.clone()) {
        Ok(item) => item,
        Err(_) => {
            return syn::Error::new_spanned(input, "#[inject_dependencies] can only be applied to structs")
                .to_compile_error();
        }
    };

    expand_struct(args, item).unwrap_or_else(syn::Error::into_compile_error)
}

/// `party::ClownManager` becomes `party::ClownManagerDependency`.
fn capability_path(service: &Path) -> Path {
    let mut path = service.clone();
    if let Some(last) = path.segments.last_mut() {
        last.ident = format_ident!("{}Dependency", last.ident);
    }
    path
}

fn expand_struct(args: InjectArgs, mut item: ItemStruct) -> syn::Result<TokenStream2> {
    let vis = item.vis.clone();
    let trait_name = format_ident!("{}Dependencies", item.ident);
    let capabilities: Vec<Path> = args.services.iter().map(capability_path).collect();
    let access = &args.access;

    let field = Field::parse_named.parse2(quote! {
        #access dependencies: ::std::sync::Arc<dyn #trait_name>
    })?;

    if matches!(item.fields, Fields::Unit) {
        let fields: FieldsNamed = syn::parse_quote!({ #field });
        item.fields = Fields::Named(fields);
        item.semi_token = None;
    } else if let Fields::Named(fields) = &mut item.fields {
        if let Some(existing) = fields
            .named
            .iter()
            .find(|f| f.ident.as_ref().is_some_and(|ident| ident == "dependencies"))
        {
            return Err(syn::Error::new_spanned(
                existing,
                "#[inject_dependencies] adds the `dependencies` field itself",
            ));
        }
        fields.named.push(field);
    } else {
        return Err(syn::Error::new_spanned(
            &item.fields,
            "#[inject_dependencies] needs a struct with named fields",
        ));
    }

    let trait_doc = format!(
        "Dependencies injected into [`{}`]. Implemented by every registry view carrying all of them.",
        item.ident
    );

    Ok(quote! {
        #item

        #[doc = #trait_doc]
        #vis trait #trait_name: ::depin::Dependencies #(+ #capabilities)* {}

        impl<T> #trait_name for T where T: ?Sized + ::depin::Dependencies #(+ #capabilities)* {}
    })
}
