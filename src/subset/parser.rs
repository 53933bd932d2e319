use proc_macro2::{Span, TokenStream};
use syn::{
    Attribute, Data, DeriveInput, Meta, Path, Token,
    parse::ParseStream,
    punctuated::Punctuated,
};

use crate::idents::{ContainerIdent, SupersetRef, VariantIdent};

/// A "dumb" parser of the EnumSubset annotations.
/// Whether a superset is actually defined is resolved by the generator.
pub struct ParsedEnumSubset {
    pub subset_enum: ContainerIdent,
    pub container_annotations: Vec<ContainerAnnotation>,
    pub cases: Vec<VariantIdent>,
}

impl ParsedEnumSubset {
    pub fn parse(input: TokenStream) -> syn::Result<ParsedEnumSubset> {
        let derive_input: DeriveInput = syn::parse2(input)?;

        let data_enum = match derive_input.data {
            Data::Enum(data) => data,
            Data::Struct(_) | Data::Union(_) => Err(syn::Error::new(
                Span::call_site(),
                "EnumSubset can only be applied to enums",
            ))?,
        };

        let subset_enum = ContainerIdent(derive_input.ident);
        let container_annotations = extract_container_annotations(&derive_input.attrs)?;

        // Payloads are ignored: every variant contributes its name and the
        // resulting match arm is left to the type check of the generated code.
        let cases = data_enum
            .variants
            .into_iter()
            .map(|variant| VariantIdent(variant.ident))
            .collect();

        Ok(ParsedEnumSubset {
            subset_enum,
            container_annotations,
            cases,
        })
    }
}

pub struct ContainerAnnotation(pub SupersetRef);

fn extract_container_annotations(
    container_attrs: &[Attribute],
) -> syn::Result<Vec<ContainerAnnotation>> {
    let res = container_attrs
        .iter()
        .filter(|attr| attr.path().is_ident("enum_subset"))
        .map(|attr| {
            let build_err = || {
                syn::Error::new_spanned(
                    attr,
                    "EnumSubset should have a superset defined with #[enum_subset(Superset)]",
                )
            };

            match &attr.meta {
                Meta::List(meta_list) => meta_list
                    .parse_args_with(|input: ParseStream| {
                        Punctuated::<Path, Token![,]>::parse_terminated(input)
                    })
                    .and_then(|paths| {
                        if paths.empty_or_trailing() {
                            Err(build_err())
                        } else {
                            Ok(paths
                                .into_iter()
                                .map(SupersetRef)
                                .map(ContainerAnnotation)
                                .collect::<Vec<_>>())
                        }
                    }),
                Meta::Path(_) | Meta::NameValue(_) => Err(build_err()),
            }
        })
        .collect::<syn::Result<Vec<_>>>()?
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();
    Ok(res)
}
