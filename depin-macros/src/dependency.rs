//! `#[dependency]` implementation.

use darling::FromMeta;
use darling::ast::NestedMeta;
use heck::ToSnakeCase;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Ident, ItemTrait, Path, TypeParamBound};

#[derive(Debug, FromMeta)]
struct DependencyArgs {
    /// Type implementing `DefaultValueFactory` for this dependency.
    #[darling(default)]
    default: Option<Path>,
    /// Name of the capability accessor method.
    #[darling(default)]
    accessor: Option<Ident>,
}

pub(crate) fn expand(args: TokenStream, input: TokenStream) -> TokenStream {
    expand_tokens(args.into(), input.into()).into()
}

fn expand_tokens(args: TokenStream2, input: TokenStream2) -> TokenStream2 {
    let attr_args = match NestedMeta::parse_meta_list(args) {
        Ok(list) => list,
        Err(e) => return darling::Error::from(e).write_errors(),
    };

    let args = match DependencyArgs::from_list(&attr_args) {
        Ok(args) => args,
        Err(e) => return e.write_errors(),
    };

    let item = match syn::parse2::<ItemTrait>(input.clone()) {
        Ok(item) => item,
        Err(_) => {
            return syn::Error::new_spanned(input, "#[dependency] can only be applied to trait declarations")
                .to_compile_error();
        }
    };

    expand_trait(args, item)
}

/// Resolved values are shared across threads, so `Send + Sync` must be
/// declared on the trait itself.
fn declares_send_sync(item: &ItemTrait) -> bool {
    let declares = |name: &str| {
        item.supertraits.iter().any(|bound| match bound {
            TypeParamBound::Trait(bound) => bound.path.segments.last().is_some_and(|s| s.ident == name),
            _ => false,
        })
    };
    declares("Send") && declares("Sync")
}

fn expand_trait(args: DependencyArgs, item: ItemTrait) -> TokenStream2 {
    if !item.generics.params.is_empty() {
        return syn::Error::new_spanned(&item.generics, "#[dependency] traits cannot be generic")
            .to_compile_error();
    }

    if !declares_send_sync(&item) {
        return syn::Error::new_spanned(
            &item.ident,
            "#[dependency] traits must declare `Send + Sync` as supertraits",
        )
        .to_compile_error();
    }

    let vis = &item.vis;
    let trait_name = &item.ident;
    let key_name = format_ident!("{}Key", trait_name);
    let capability_name = format_ident!("{}Dependency", trait_name);

    let accessor = args
        .accessor
        .unwrap_or_else(|| format_ident!("{}", trait_name.to_string().to_snake_case()));
    let accessor_str = accessor.to_string();

    let factory: Path = match args.default {
        Some(path) => path,
        None => {
            let ident = format_ident!("Default{}", trait_name);
            syn::parse_quote!(#ident)
        }
    };

    let key_doc = format!("Dependency key for [`{trait_name}`].");
    let capability_doc = format!(
        "Capability for components that need a [`{trait_name}`]. Implemented by `GlobalDependencies`."
    );
    let accessor_doc = format!("Resolves the current [`{trait_name}`] implementation.");

    quote! {
        #item

        #[doc = #key_doc]
        #vis struct #key_name;

        impl ::depin::DependencyKey for #key_name {
            type Value = ::std::sync::Arc<dyn #trait_name>;

            fn default_value() -> Self::Value {
                static DEFAULT: ::depin::__private::Lazy<::std::sync::Arc<dyn #trait_name>> =
                    ::depin::__private::Lazy::new(|| {
                        let value: ::std::sync::Arc<dyn #trait_name> = ::std::sync::Arc::new(
                            <#factory as ::depin::DefaultValueFactory>::make_default_value(),
                        );
                        value
                    });
                ::std::sync::Arc::clone(&*DEFAULT)
            }
        }

        #[doc = #capability_doc]
        #vis trait #capability_name: ::depin::Dependencies {
            #[doc = #accessor_doc]
            fn #accessor(&self) -> ::std::sync::Arc<dyn #trait_name>;
        }

        impl #capability_name for ::depin::GlobalDependencies {
            fn #accessor(&self) -> ::std::sync::Arc<dyn #trait_name> {
                self.resolve::<#key_name>()
            }
        }

        ::depin::__private::inventory::submit! {
            ::depin::KeyDescriptor::new::<#key_name>(#accessor_str)
        }
    }
}
