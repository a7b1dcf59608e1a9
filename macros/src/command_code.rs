use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Expr, Fields, Ident};

fn get_code<'a>(mut attrs: impl Iterator<Item = &'a Attribute>, variant: &Ident) -> Expr {
    attrs
        .find(|&attr| attr.path().is_ident("code"))
        .unwrap_or_else(|| panic!("Variant `{variant}` must have a #[code(...)] attribute."))
        .parse_args()
        .expect("#[code(...)] must hold a single u8 expression.")
}

pub fn derive(item: TokenStream) -> TokenStream {
    let input: DeriveInput = syn::parse2(TokenStream2::from(item)).expect("Invalid derive input.");

    assert!(
        input.generics.params.is_empty(),
        "CommandCode cannot be derived for generic types."
    );

    let Data::Enum(e) = input.data else {
        panic!("CommandCode can only be derived for enums.")
    };

    assert!(
        !e.variants.is_empty(),
        "Command enum must contain at least one variant."
    );

    let ident = input.ident;

    let (variant_idents, codes): (Vec<Ident>, Vec<Expr>) = e
        .variants
        .iter()
        .map(|v| {
            if !matches!(v.fields, Fields::Unit) {
                panic!("Command variants cannot hold data.")
            }

            (v.ident.clone(), get_code(v.attrs.iter(), &v.ident))
        })
        .unzip();

    let count = codes.len();

    quote! {
        impl #ident {
            /// The byte identifying this command on the wire.
            #[inline]
            pub const fn code(&self) -> u8 {
                match self {
                    #(
                        Self::#variant_idents => #codes
                    ),*
                }
            }
        }

        impl From<#ident> for u8 {
            #[inline]
            fn from(value: #ident) -> Self {
                value.code()
            }
        }

        impl TryFrom<u8> for #ident {
            type Error = u8;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                #(
                    if value == #codes {
                        return Ok(Self::#variant_idents);
                    }
                )*

                Err(value)
            }
        }

        // reject duplicate codes at compile time
        const _: () = {
            let codes: [u8; #count] = [#(#codes),*];
            let mut i = 0;

            while i < codes.len() {
                let mut j = i + 1;

                while j < codes.len() {
                    assert!(codes[i] != codes[j], "Duplicate command code.");
                    j += 1;
                }

                i += 1;
            }
        };
    }
    .into()
}
