use proc_macro::TokenStream;

mod idents;
mod subset;

/// Derives conversions between the annotated enum and a superset enum
/// declared with `#[enum_subset(Superset)]`.
///
/// Every variant of the annotated enum must exist under the same name on the
/// superset. The derive generates an `as_superset` method converting each
/// subset value to the identically named superset variant, and a failable
/// `from_superset` constructor returning `None` for any superset variant
/// that is not part of the subset.
///
/// # Examples
///
/// ```
/// use enum_subset::EnumSubset;
///
/// enum Database {
///     DivtrackerV2,
///     Eod,
///     Events,
///     Finbox,
///     Fmp,
///     Iex,
///     Manual,
///     Merged,
///     Origin,
///     SeekingAlpha,
///     Yahoo,
/// }
///
/// #[derive(EnumSubset)]
/// #[enum_subset(Database)]
/// enum MainDatabase {
///     DivtrackerV2,
///     Eod,
///     Fmp,
/// }
///
/// let main = MainDatabase::Eod;
/// assert!(matches!(main.as_superset(), Database::Eod));
/// assert!(matches!(
///     MainDatabase::from_superset(Database::Fmp),
///     Some(MainDatabase::Fmp),
/// ));
/// assert!(MainDatabase::from_superset(Database::Yahoo).is_none());
/// ```
///
/// The superset may be referenced through a path; the constructor's
/// parameter is then named after the last path segment:
///
/// ```
/// use enum_subset::EnumSubset;
///
/// mod stocks {
///     pub enum Database {
///         Eod,
///         Fmp,
///         Yahoo,
///     }
/// }
///
/// #[derive(EnumSubset)]
/// #[enum_subset(stocks::Database)]
/// enum MainDatabase {
///     Eod,
///     Fmp,
/// }
///
/// assert!(matches!(
///     MainDatabase::Eod.as_superset(),
///     stocks::Database::Eod,
/// ));
/// assert!(MainDatabase::from_superset(stocks::Database::Yahoo).is_none());
/// ```
#[proc_macro_derive(EnumSubset, attributes(enum_subset))]
pub fn derive_enum_subset(input: TokenStream) -> TokenStream {
    subset::derive_enum_subset_impl(input.into()).into()
}
