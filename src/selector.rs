//! Attribute selection cascade: picks the locating signal for one element

use crate::dom::Element;
use crate::errors::{LocatorError, Result};

/// Attributes tried, in order, by the second rule of the cascade
pub const KEY_ATTRIBUTES: &[&str] = &[
    "href",
    "src",
    "placeholder",
    "title",
    "aria-label",
    "label",
    "type",
];

/// Last-resort attributes, including the Angular form bindings
pub const FALLBACK_ATTRIBUTES: &[&str] = &[
    "id",
    "name",
    "value",
    "role",
    "formcontrolname",
    "ng-reflect-name",
];

/// Icon-font class prefixes; the icon name follows the marker
pub const ICON_FONT_MARKERS: &[&str] = &[
    "fa fa-",
    "fas fa-",
    "far fa-",
    "fab fa-",
    "bi bi-",
    "pi pi-",
    "glyphicon glyphicon-",
    "ti ti-",
];

/// Attributes naming a sprite or feather icon
pub const ICON_DATA_ATTRIBUTES: &[&str] = &["data-feather", "data-icon"];

/// What the cascade found for an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    pub xpath: String,
    pub kind: SignalKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalKind {
    /// Name comes from the name generator
    Plain,
    /// Icon element; carries the raw icon label the name is built from
    Icon(String),
}

impl Signal {
    fn plain(xpath: String) -> Self {
        Self {
            xpath,
            kind: SignalKind::Plain,
        }
    }

    fn icon(xpath: String, label: impl Into<String>) -> Self {
        Self {
            xpath,
            kind: SignalKind::Icon(label.into()),
        }
    }
}

type Rule = fn(&Element<'_>) -> Option<Result<Signal>>;

const RULES: &[Rule] = &[
    own_text_rule,
    key_attribute_rule,
    icon_font_rule,
    class_rule,
    icon_data_rule,
    fallback_attribute_rule,
];

/// Run the cascade; the first rule that matches wins.
///
/// `Ok(None)` means the element has no locating signal and should be dropped.
pub fn select_signal(element: &Element<'_>) -> Result<Option<Signal>> {
    RULES.iter().find_map(|rule| rule(element)).transpose()
}

/// Escape a literal for a single-quoted XPath string.
///
/// Only bare apostrophes are handled; values mixing both quote kinds are not
/// rewritten into `concat()`.
pub fn escape_literal(value: &str) -> String {
    value.replace('\'', "\\'")
}

/// `//tag[@attr='value']`
pub fn attribute_xpath(tag: &str, attr: &str, value: &str) -> String {
    format!("//{}[@{}='{}']", tag, attr, escape_literal(value))
}

/// `//tag[contains(text(),'text')]`
pub fn text_xpath(tag: &str, text: &str) -> String {
    format!("//{}[contains(text(),'{}')]", tag, escape_literal(text))
}

fn first_attribute<'a>(element: &Element<'a>, names: &[&'static str]) -> Option<(&'static str, &'a str)> {
    names
        .iter()
        .find_map(|name| element.attr(name).map(|value| (*name, value)))
}

fn own_text_rule(element: &Element<'_>) -> Option<Result<Signal>> {
    let text = element.own_text()?;
    Some(Ok(Signal::plain(text_xpath(element.tag(), &text))))
}

fn key_attribute_rule(element: &Element<'_>) -> Option<Result<Signal>> {
    let (attr, value) = first_attribute(element, KEY_ATTRIBUTES)?;
    Some(Ok(Signal::plain(attribute_xpath(element.tag(), attr, value))))
}

fn icon_font_rule(element: &Element<'_>) -> Option<Result<Signal>> {
    let class = element.attr("class")?;
    let marker = ICON_FONT_MARKERS
        .iter()
        .find(|marker| class.contains(*marker))?;
    Some(icon_font_label(class, marker).map(|label| {
        Signal::icon(attribute_xpath(element.tag(), "class", class), label)
    }))
}

/// The icon name following `marker` inside `class`, up to the next whitespace
pub fn icon_font_label<'a>(class: &'a str, marker: &str) -> Result<&'a str> {
    class
        .split_once(marker)
        .and_then(|(_, rest)| rest.split(char::is_whitespace).next())
        .filter(|label| !label.is_empty())
        .ok_or_else(|| LocatorError::MalformedIconMarker {
            class: class.to_string(),
            marker: marker.to_string(),
        })
}

fn class_rule(element: &Element<'_>) -> Option<Result<Signal>> {
    let class = element.attr("class")?;
    Some(Ok(Signal::plain(attribute_xpath(element.tag(), "class", class))))
}

fn icon_data_rule(element: &Element<'_>) -> Option<Result<Signal>> {
    let (attr, value) = first_attribute(element, ICON_DATA_ATTRIBUTES)?;
    Some(Ok(Signal::icon(
        attribute_xpath(element.tag(), attr, value),
        value,
    )))
}

fn fallback_attribute_rule(element: &Element<'_>) -> Option<Result<Signal>> {
    let (attr, value) = first_attribute(element, FALLBACK_ATTRIBUTES)?;
    Some(Ok(Signal::plain(attribute_xpath(element.tag(), attr, value))))
}

#[cfg(test)]
#[path = "selector_test.rs"]
mod selector_test;
