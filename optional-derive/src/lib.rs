use quote::quote;
use syn::parse_quote;
use synstructure::{decl_derive, AddBounds};

decl_derive!([Contained, attributes(contained)] => derive_contained);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Trivial,
    Owning,
}

fn category(attrs: &[syn::Attribute]) -> syn::Result<Category> {
    let mut r = Category::Owning;
    for attr in attrs.iter().filter(|attr| attr.path.is_ident("contained")) {
        let ident: syn::Ident = attr.parse_args()?;
        r = if ident == "trivial" {
            Category::Trivial
        } else if ident == "owning" {
            Category::Owning
        } else {
            return Err(syn::Error::new_spanned(ident, "expected `trivial` or `owning`"));
        };
    }
    Ok(r)
}

/// Implements `optional::Contained`.
///
/// Defaults to owning storage; `#[contained(trivial)]` selects flag-plus-value storage, which
/// requires the type to be `Copy`.
fn derive_contained(mut s: synstructure::Structure) -> proc_macro2::TokenStream {
    let category = match category(&s.ast().attrs) {
        Ok(category) => category,
        Err(err) => return err.to_compile_error(),
    };

    s.add_bounds(AddBounds::None);

    let slot = match category {
        Category::Trivial => {
            let name = s.ast().ident.clone();
            let (_, ty_generics, _) = s.ast().generics.split_for_impl();
            let pred: syn::WherePredicate = parse_quote!(#name #ty_generics: ::core::marker::Copy);
            s.add_where_predicate(pred);
            quote! { ::optional::slot::TrivialSlot<Self> }
        },
        Category::Owning => quote! { ::optional::slot::OwningSlot<Self> },
    };

    s.gen_impl(quote! {
        gen impl ::optional::Contained for @Self {
            type Slot = #slot;
        }
    })
}
