//! Identifier synthesis: camel-cased, tag-suffixed locator names

use crate::dom::Element;

/// Attributes that can name an element, tried after its own text
pub const NAMING_ATTRIBUTES: &[&str] = &[
    "placeholder",
    "label",
    "aria-label",
    "formcontrolname",
    "ng-reflect-name",
];

/// Prefix of placeholder names for elements without any naming signal
pub const SENTINEL_PREFIX: &str = "delete_this_element_later_";

/// Placeholder name for the `index`-th element of its tag
pub fn sentinel(index: usize) -> String {
    format!("{}{}", SENTINEL_PREFIX, index)
}

pub fn is_sentinel(name: &str) -> bool {
    name.starts_with(SENTINEL_PREFIX)
}

/// Join whitespace-separated words: first word lower-case, later words capitalized.
///
/// Characters that are not alphanumeric are dropped, so the result is always a
/// plain identifier (possibly empty).
pub fn camel_case(raw: &str) -> String {
    let mut name = String::new();
    for word in raw.split_whitespace() {
        let word: String = word
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            continue;
        };
        if name.is_empty() {
            name.push(first);
        } else {
            name.extend(first.to_uppercase());
        }
        name.push_str(chars.as_str());
    }
    name
}

/// Suffix appended to every generated name of this tag
pub fn tag_suffix(tag: &str) -> String {
    match tag {
        "a" => "Link".to_string(),
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => "Heading".to_string(),
        _ => {
            let mut chars = tag.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

/// Camel-cased base name from the element's own text or naming attributes
pub fn base_name(element: &Element<'_>) -> Option<String> {
    element
        .own_text()
        .into_iter()
        .chain(
            NAMING_ATTRIBUTES
                .iter()
                .filter_map(|attr| element.attr(attr).map(str::to_string)),
        )
        .map(|raw| camel_case(&raw))
        .find(|name| !name.is_empty())
}

/// Name for the `index`-th element of its tag, or the sentinel when nothing names it
pub fn generate_name(element: &Element<'_>, index: usize) -> String {
    match base_name(element) {
        Some(base) => format!("{}{}", base, tag_suffix(element.tag())),
        None => sentinel(index),
    }
}

/// Borrow a name from the first descendant that has one, suffixed for the parent's tag
pub fn rescue_from_descendants(element: &Element<'_>) -> Option<String> {
    element
        .descendants()
        .find_map(|child| base_name(&child))
        .map(|base| format!("{}{}", base, tag_suffix(element.tag())))
}

/// Turn an icon label such as `arrow-left` into `arrowLeft<kind>`
pub fn icon_name(label: &str, kind: &str) -> String {
    let words = label.replace(['-', '_'], " ");
    camel_case(&format!("{} {}", words, kind))
}

#[cfg(test)]
#[path = "naming_test.rs"]
mod naming_test;
