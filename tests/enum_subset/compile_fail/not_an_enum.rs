use enum_subset::EnumSubset;

#[derive(EnumSubset)]
#[enum_subset(Database)]
struct Skier {
    level: u8,
}

fn main() {}
