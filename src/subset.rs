use proc_macro2::TokenStream;

use crate::subset::{generator::EnumSubsetGenerator, parser::ParsedEnumSubset};

mod generator;
mod parser;

pub fn derive_enum_subset_impl(input: TokenStream) -> TokenStream {
    ParsedEnumSubset::parse(input)
        .and_then(EnumSubsetGenerator::try_from)
        .map(EnumSubsetGenerator::generate)
        .unwrap_or_else(|err| err.into_compile_error())
}
