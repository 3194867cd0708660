//! Naming and locators for `svg` and `ion-icon` elements

use crate::dom::Element;
use crate::errors::{LocatorError, Result};
use crate::naming::icon_name;
use crate::selector::{attribute_xpath, escape_literal};
use crate::types::LocatorEntry;

/// Tags handled here instead of by the attribute cascade
pub const ICON_TAGS: &[&str] = &["svg", "ion-icon"];

/// `ion-icon` attributes; each non-empty one yields its own locator
pub const ION_ICON_ATTRIBUTES: &[&str] = &["name", "ios", "md", "aria-label", "class"];

pub fn is_icon_tag(tag: &str) -> bool {
    ICON_TAGS.contains(&tag)
}

/// Locators for an icon element; empty when the element carries nothing usable
pub fn classify_icon(element: &Element<'_>) -> Result<Vec<LocatorEntry>> {
    match element.tag() {
        "svg" => Ok(svg_locator(element)?.into_iter().collect()),
        "ion-icon" => Ok(ion_icon_locators(element)),
        _ => Ok(Vec::new()),
    }
}

fn svg_locator(element: &Element<'_>) -> Result<Option<LocatorEntry>> {
    let Some(class) = element.attr("class") else {
        return Ok(None);
    };

    let entry = match class.split_once('-') {
        Some((_, segment)) => {
            if segment.trim().is_empty() {
                return Err(LocatorError::MalformedIconMarker {
                    class: class.to_string(),
                    marker: "-".to_string(),
                });
            }
            LocatorEntry::new(
                icon_name(segment, "Svg Icon"),
                format!(
                    "//*[local-name()='svg' and contains(@class,'{}')]",
                    escape_literal(segment)
                ),
            )
        }
        None => LocatorEntry::new(
            icon_name(class, "Svg Icon"),
            format!(
                "//*[local-name()='svg' and @class='{}']",
                escape_literal(class)
            ),
        ),
    };
    Ok(Some(entry))
}

fn ion_icon_locators(element: &Element<'_>) -> Vec<LocatorEntry> {
    ION_ICON_ATTRIBUTES
        .iter()
        .filter_map(|attr| {
            element.attr(attr).map(|value| {
                LocatorEntry::new(
                    icon_name(value, "Icon"),
                    attribute_xpath("ion-icon", attr, value),
                )
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;
