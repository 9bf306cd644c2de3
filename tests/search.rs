use rolodex::{
    contact::ContactRecord,
    core::book::ContactBook,
    search::{binary_search, binary_search_bounded, find},
};

const SORTED: [&str; 4] = ["Cooper", "Fowler", "Hofstadter", "Wolowitz"];

#[test]
fn cooper_is_found_at_index_zero() {
    assert_eq!(binary_search(&SORTED, "Cooper"), 0);
}

#[test]
fn every_present_surname_resolves_to_its_own_index() {
    for (idx, surname) in SORTED.iter().enumerate() {
        assert_eq!(binary_search(&SORTED, surname), idx);
    }
}

#[test]
fn kripke_is_not_a_member() {
    assert!(!find(&SORTED, "Kripke", None));
}

#[test]
fn miss_reports_insertion_index() {
    // "Kripke" would slot between "Hofstadter" and "Wolowitz".
    assert_eq!(binary_search(&SORTED, "Kripke"), 3);
}

#[test]
fn membership_agrees_with_linear_scan_over_book_surnames() {
    let book = ContactBook::from_records(vec![
        ContactRecord {
            id: 1,
            forename: "Sheldon".to_string(),
            surname: "Cooper".to_string(),
            email_address: "sheldor@myphdmail.com".to_string(),
            mobile_number: "00000000073".to_string(),
        },
        ContactRecord {
            id: 2,
            forename: "Howard".to_string(),
            surname: "Wolowitz".to_string(),
            email_address: "hw@nasa.example".to_string(),
            mobile_number: "00000000031".to_string(),
        },
    ])
    .expect("seed");

    let surnames = book.surnames_sorted();
    let idx = binary_search(&surnames, "Cooper");
    assert!(find(&surnames, "Cooper", Some(idx)));
    assert!(!find(&surnames, "Koothrappali", None));
}

#[test]
fn bounded_search_stays_inside_the_window() {
    assert_eq!(binary_search_bounded(&SORTED, "Cooper", 2, 4), 2);
    assert_eq!(binary_search_bounded(&SORTED, "Zz", 1, 3), 3);
}
