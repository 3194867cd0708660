//! Priority-ordered traversal of whitelisted tags

use scraper::Html;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::dom::{Element, document_elements};
use crate::generator::RunContext;
use crate::icons::{ICON_TAGS, classify_icon, is_icon_tag};
use crate::naming::{generate_name, icon_name, is_sentinel, rescue_from_descendants};
use crate::selector::{SignalKind, select_signal};

/// Interactive or text-bearing tags; their descendants are not located separately
pub const HIGH_PRIORITY_TAGS: &[&str] = &[
    "a", "button", "h1", "h2", "h3", "h4", "h5", "h6", "input", "textarea", "td", "th",
];

/// Remaining whitelisted tags, skipped under a high-priority ancestor
pub const LOW_PRIORITY_TAGS: &[&str] = &[
    "div", "i", "iframe", "label", "header", "select", "span", "svg", "textarea",
];

pub fn is_high_priority(tag: &str) -> bool {
    HIGH_PRIORITY_TAGS.contains(&tag)
}

/// Tags in the order they are walked: icons, then high, then low priority.
/// Each tag appears once.
pub fn walk_order() -> Vec<&'static str> {
    let mut order: Vec<&'static str> = Vec::new();
    for tag in ICON_TAGS
        .iter()
        .chain(HIGH_PRIORITY_TAGS)
        .chain(LOW_PRIORITY_TAGS)
    {
        if !order.contains(tag) {
            order.push(*tag);
        }
    }
    order
}

pub fn has_high_priority_ancestor(element: &Element<'_>) -> bool {
    element
        .ancestors()
        .any(|ancestor| is_high_priority(ancestor.tag()))
}

/// Walk the whole document, feeding every located element into `ctx`
pub fn walk(document: &Html, ctx: &mut RunContext) {
    let mut by_tag: HashMap<&str, Vec<Element<'_>>> = HashMap::new();
    for element in document_elements(document) {
        by_tag.entry(element.tag()).or_default().push(element);
    }

    for tag in walk_order() {
        let Some(elements) = by_tag.get(tag) else {
            continue;
        };
        debug!("Walking {} <{}> elements", elements.len(), tag);

        for (position, element) in elements.iter().enumerate() {
            ctx.stats.visited += 1;
            if is_icon_tag(tag) {
                visit_icon(ctx, element);
                continue;
            }
            if !is_high_priority(tag) && has_high_priority_ancestor(element) {
                ctx.stats.suppressed += 1;
                continue;
            }
            visit_element(ctx, element, position + 1);
        }
    }
}

fn visit_icon(ctx: &mut RunContext, element: &Element<'_>) {
    match classify_icon(element) {
        Ok(entries) if entries.is_empty() => ctx.stats.dropped += 1,
        Ok(entries) => {
            for entry in entries {
                ctx.insert(&entry.name, entry.xpath);
            }
        }
        Err(e) => {
            warn!("Skipping <{}>: {}", element.tag(), e);
            ctx.stats.failed += 1;
        }
    }
}

fn visit_element(ctx: &mut RunContext, element: &Element<'_>, index: usize) {
    let signal = match select_signal(element) {
        Ok(Some(signal)) => signal,
        Ok(None) => {
            debug!("No locating signal for <{}> #{}", element.tag(), index);
            ctx.stats.dropped += 1;
            return;
        }
        Err(e) => {
            warn!("Skipping <{}> #{}: {}", element.tag(), index, e);
            ctx.stats.failed += 1;
            return;
        }
    };

    let name = match signal.kind {
        SignalKind::Icon(label) => icon_name(&label, "Icon"),
        SignalKind::Plain => {
            let name = generate_name(element, index);
            if is_sentinel(&name) && is_high_priority(element.tag()) {
                match rescue_from_descendants(element) {
                    Some(rescued) => {
                        ctx.stats.rescued += 1;
                        rescued
                    }
                    None => name,
                }
            } else {
                name
            }
        }
    };

    ctx.insert(&name, signal.xpath);
}

#[cfg(test)]
#[path = "walker_test.rs"]
mod walker_test;
