use enum_subset::EnumSubset;

mod stocks {
    pub enum Database {
        DivtrackerV2,
        Eod,
        Fmp,
        Yahoo,
    }
}

#[derive(EnumSubset)]
#[enum_subset(stocks::Database)]
enum MainDatabase {
    Eod,
    Fmp,
}

fn main() {
    assert!(matches!(
        MainDatabase::Eod.as_superset(),
        stocks::Database::Eod,
    ));
    assert!(matches!(
        MainDatabase::from_superset(stocks::Database::Fmp),
        Some(MainDatabase::Fmp),
    ));
    assert!(MainDatabase::from_superset(stocks::Database::DivtrackerV2).is_none());
    assert!(MainDatabase::from_superset(stocks::Database::Yahoo).is_none());
}
