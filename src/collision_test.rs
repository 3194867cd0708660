use super::*;
use std::collections::HashSet;

fn claim(counter: &mut DuplicateNameCounter, taken: &mut HashSet<String>, base: &str) -> String {
    let name = counter.unique_name(base, |candidate| taken.contains(candidate));
    taken.insert(name.clone());
    name
}

#[test]
fn test_unique_name_running_counter() {
    let mut counter = DuplicateNameCounter::new();
    let mut taken = HashSet::new();

    assert_eq!(claim(&mut counter, &mut taken, "submitButton"), "submitButton");
    assert_eq!(claim(&mut counter, &mut taken, "submitButton"), "submitButton2");
    assert_eq!(claim(&mut counter, &mut taken, "homeLink"), "homeLink");
    assert_eq!(claim(&mut counter, &mut taken, "submitButton"), "submitButton3");
}

#[test]
fn test_unique_name_skips_taken_candidates() {
    let mut counter = DuplicateNameCounter::new();
    let mut taken: HashSet<String> = ["save", "save2"].iter().map(|s| s.to_string()).collect();

    assert_eq!(claim(&mut counter, &mut taken, "save"), "save3");
    assert_eq!(claim(&mut counter, &mut taken, "save"), "save4");
}

#[test]
fn test_disambiguate_values() {
    let mut entries = vec![
        LocatorEntry::new("closeButton", "//button[@aria-label='Close']"),
        LocatorEntry::new("homeLink", "//a[@href='/']"),
        LocatorEntry::new("closeButton2", "//button[@aria-label='Close']"),
        LocatorEntry::new("closeButton3", "//button[@aria-label='Close']"),
    ];

    assert_eq!(disambiguate_values(&mut entries), 3);

    let xpaths: Vec<&str> = entries.iter().map(|entry| entry.xpath.as_str()).collect();
    assert_eq!(
        xpaths,
        vec![
            "(//button[@aria-label='Close'])[1]",
            "//a[@href='/']",
            "(//button[@aria-label='Close'])[2]",
            "(//button[@aria-label='Close'])[3]",
        ]
    );
}

#[test]
fn test_disambiguate_unique_values_untouched() {
    let mut entries = vec![
        LocatorEntry::new("a", "//a[@href='/a']"),
        LocatorEntry::new("b", "//a[@href='/b']"),
    ];
    assert_eq!(disambiguate_values(&mut entries), 0);
    assert_eq!(entries[0].xpath, "//a[@href='/a']");
    assert_eq!(entries[1].xpath, "//a[@href='/b']");
}
