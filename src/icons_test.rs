use super::*;
use crate::dom::document_elements;
use scraper::Html;

fn icons_for(markup: &str, tag: &str) -> Result<Vec<LocatorEntry>> {
    let document = Html::parse_document(markup);
    let element = document_elements(&document)
        .find(|element| element.tag() == tag)
        .expect("fixture element");
    classify_icon(&element)
}

#[test]
fn test_svg_with_hyphenated_class() {
    let entries = icons_for(r#"<svg class="icon-home"></svg>"#, "svg").unwrap();
    assert_eq!(
        entries,
        vec![LocatorEntry::new(
            "homeSvgIcon",
            "//*[local-name()='svg' and contains(@class,'home')]"
        )]
    );
}

#[test]
fn test_svg_splits_on_first_hyphen() {
    let entries = icons_for(r#"<svg class="feather feather-x-circle"></svg>"#, "svg").unwrap();
    assert_eq!(
        entries,
        vec![LocatorEntry::new(
            "xCircleSvgIcon",
            "//*[local-name()='svg' and contains(@class,'x-circle')]"
        )]
    );
}

#[test]
fn test_svg_without_hyphen_uses_exact_class() {
    let entries = icons_for(r#"<svg class="logo"></svg>"#, "svg").unwrap();
    assert_eq!(
        entries,
        vec![LocatorEntry::new(
            "logoSvgIcon",
            "//*[local-name()='svg' and @class='logo']"
        )]
    );
}

#[test]
fn test_svg_without_class_yields_nothing() {
    assert!(icons_for(r#"<svg viewBox="0 0 10 10"></svg>"#, "svg").unwrap().is_empty());
}

#[test]
fn test_svg_with_trailing_hyphen_is_malformed() {
    let err = icons_for(r#"<svg class="icon-"></svg>"#, "svg").unwrap_err();
    assert!(matches!(err, LocatorError::MalformedIconMarker { .. }));
}

#[test]
fn test_ion_icon_emits_every_attribute() {
    let entries = icons_for(
        r#"<ion-icon aria-label="Home" name="home-outline" md="md-home"></ion-icon>"#,
        "ion-icon",
    )
    .unwrap();
    assert_eq!(
        entries,
        vec![
            LocatorEntry::new("homeOutlineIcon", "//ion-icon[@name='home-outline']"),
            LocatorEntry::new("mdHomeIcon", "//ion-icon[@md='md-home']"),
            LocatorEntry::new("homeIcon", "//ion-icon[@aria-label='Home']"),
        ]
    );
}

#[test]
fn test_ion_icon_without_attributes() {
    assert!(icons_for("<ion-icon></ion-icon>", "ion-icon").unwrap().is_empty());
}

#[test]
fn test_is_icon_tag() {
    assert!(is_icon_tag("svg"));
    assert!(is_icon_tag("ion-icon"));
    assert!(!is_icon_tag("i"));
}
