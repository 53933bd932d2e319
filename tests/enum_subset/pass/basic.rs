use enum_subset::EnumSubset;

enum Database {
    DivtrackerV2,
    Eod,
    Events,
    Finbox,
    Fmp,
    Iex,
    Manual,
    Merged,
    Origin,
    SeekingAlpha,
    Yahoo,
}

#[derive(EnumSubset)]
#[enum_subset(Database)]
enum MainDatabase {
    DivtrackerV2,
    Eod,
    Fmp,
}

fn main() {
    // Every subset case converts to the identically named superset case.
    assert!(matches!(
        MainDatabase::DivtrackerV2.as_superset(),
        Database::DivtrackerV2,
    ));
    assert!(matches!(MainDatabase::Eod.as_superset(), Database::Eod));
    assert!(matches!(MainDatabase::Fmp.as_superset(), Database::Fmp));

    // The failable constructor inverts the conversion on the subset's image.
    assert!(matches!(
        MainDatabase::from_superset(MainDatabase::DivtrackerV2.as_superset()),
        Some(MainDatabase::DivtrackerV2),
    ));
    assert!(matches!(
        MainDatabase::from_superset(MainDatabase::Eod.as_superset()),
        Some(MainDatabase::Eod),
    ));
    assert!(matches!(
        MainDatabase::from_superset(MainDatabase::Fmp.as_superset()),
        Some(MainDatabase::Fmp),
    ));

    // Superset cases outside the subset fail the conversion.
    assert!(MainDatabase::from_superset(Database::Events).is_none());
    assert!(MainDatabase::from_superset(Database::Finbox).is_none());
    assert!(MainDatabase::from_superset(Database::Iex).is_none());
    assert!(MainDatabase::from_superset(Database::Manual).is_none());
    assert!(MainDatabase::from_superset(Database::Merged).is_none());
    assert!(MainDatabase::from_superset(Database::Origin).is_none());
    assert!(MainDatabase::from_superset(Database::SeekingAlpha).is_none());
    assert!(MainDatabase::from_superset(Database::Yahoo).is_none());
}
