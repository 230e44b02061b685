use fieldtrim::{Trimmable, prelude::*};

#[derive(Trimmable)]
struct Marker {}

#[derive(Trimmable)]
struct Counts {
    hits: u64,
    misses: u64,
}

fn main() {
    let mut marker = Marker {};
    trim_all_members(&mut marker).unwrap();
    trim_member(&mut marker, "anything").unwrap();

    let mut counts = vec![Counts { hits: 1, misses: 2 }];
    trim_all_members_in(&mut counts).unwrap();
    assert_eq!(counts[0].hits + counts[0].misses, 3);
}
