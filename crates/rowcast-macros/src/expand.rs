use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, GenericArgument, PathArguments, Type};

#[derive(Default)]
struct ContainerAttrs {
    positional: bool,
    no_default: bool,
}

pub(crate) fn generate(input: TokenStream) -> syn::Result<TokenStream> {
    let input: DeriveInput = syn::parse2(input)?;
    let ident = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "FromRow cannot be derived for generic structs",
        ));
    }

    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            ident,
            "FromRow can only be derived for structs",
        ));
    };

    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            ident,
            "FromRow requires named fields",
        ));
    };

    let attrs = parse_container_attrs(&input.attrs)?;

    let mut setter_fns = Vec::new();
    let mut field_bindings = Vec::new();
    let mut positional_inits = Vec::new();

    for field in &fields.named {
        let field_ident = field.ident.as_ref().expect("named field");
        let field_ty = &field.ty;
        let setter_ident = format_ident!("__set_{}", field_ident);
        let normalized = normalize(&field_ident.to_string());
        let nullable = is_option(field_ty);

        setter_fns.push(quote! {
            fn #setter_ident(instance: &mut #ident, value: Value) -> bool {
                match <#field_ty as FromValue>::from_value(value) {
                    Ok(value) => {
                        instance.#field_ident = value;
                        true
                    }
                    Err(_) => false,
                }
            }
        });

        field_bindings.push(quote! {
            FieldBinding {
                name: #normalized,
                nullable: #nullable,
                set: #setter_ident,
            }
        });

        positional_inits.push(quote! {
            #field_ident: <#field_ty as FromValue>::from_value(
                values.next().unwrap_or(Value::Null),
            )?
        });
    }

    let default_fn = if attrs.no_default {
        quote!(None)
    } else {
        setter_fns.push(quote! {
            fn __default() -> #ident {
                ::core::default::Default::default()
            }
        });
        quote!(Some(__default))
    };

    let positional_fn = if attrs.positional {
        setter_fns.push(quote! {
            fn __positional(row: Row) -> Result<#ident> {
                let mut values = row.into_values();
                Ok(#ident {
                    #(#positional_inits,)*
                })
            }
        });
        quote!(Some(__positional))
    } else {
        quote!(None)
    };

    Ok(quote! {
        const _: () = {
            use ::rowcast::codegen_support::*;

            #(#setter_fns)*

            static DESCRIPTOR: Descriptor<#ident> = Descriptor {
                fields: &[#(#field_bindings,)*],
                default: #default_fn,
                positional: #positional_fn,
            };

            impl Entity for #ident {
                fn descriptor() -> &'static Descriptor<Self> {
                    &DESCRIPTOR
                }
            }

            impl FromRow for #ident {
                const SHAPE: Shape = Shape::Object;

                fn width() -> usize {
                    DESCRIPTOR.fields.len()
                }

                fn check() -> Result<()> {
                    if DESCRIPTOR.positional.is_none() && DESCRIPTOR.default.is_none() {
                        return Err(Error::construction(::core::any::type_name::<Self>()));
                    }
                    Ok(())
                }

                fn from_row(row: Row) -> Result<Self> {
                    materialize(row)
                }
            }
        };
    })
}

fn parse_container_attrs(attrs: &[syn::Attribute]) -> syn::Result<ContainerAttrs> {
    let mut out = ContainerAttrs::default();

    for attr in attrs {
        if !attr.path().is_ident("rowcast") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("positional") {
                out.positional = true;
                Ok(())
            } else if meta.path.is_ident("no_default") {
                out.no_default = true;
                Ok(())
            } else {
                Err(meta.error("unsupported rowcast attribute"))
            }
        })?;
    }

    Ok(out)
}

/// Column names match field names case-insensitively and ignoring
/// underscores; field names are normalized here, once, at derive time.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn is_option(ty: &Type) -> bool {
    let Type::Path(path) = ty else { return false };
    let Some(segment) = path.path.segments.last() else {
        return false;
    };
    if segment.ident != "Option" {
        return false;
    }
    matches!(
        &segment.arguments,
        PathArguments::AngleBracketed(args)
            if args.args.iter().any(|a| matches!(a, GenericArgument::Type(_)))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_underscores_and_case() {
        assert_eq!(normalize("foo_bar"), "foobar");
        assert_eq!(normalize("FooBar"), "foobar");
        assert_eq!(normalize("FOO_BAR"), "foobar");
    }

    #[test]
    fn option_detection() {
        let ty: Type = syn::parse_quote!(Option<i32>);
        assert!(is_option(&ty));
        let ty: Type = syn::parse_quote!(std::option::Option<String>);
        assert!(is_option(&ty));
        let ty: Type = syn::parse_quote!(Vec<i32>);
        assert!(!is_option(&ty));
    }
}
