//! Rendering projection: what the client displays for a given state.
//!
//! Both the TUI and the one-shot CLI output render from [`View`], so the
//! display rules live in one place.

use crate::summary::SummaryState;

/// Shown in place of the entity link when the service found no key entity
pub const NO_TOPIC_MESSAGE: &str = "No key topic found.";

pub const SUMMARY_HEADING: &str = "Summary";
pub const ENTITY_HEADING: &str = "Key Person/Topic";
pub const BRAILLE_HEADING: &str = "Braille Summary";

/// Placeholder in the search URL template
const QUERY_PLACEHOLDER: &str = "{query}";

/// The key entity line of the result panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityView<'a> {
    Link { label: &'a str, href: String },
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPanel<'a> {
    pub summary: &'a str,
    pub entity: EntityView<'a>,
    pub braille_summary: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct View<'a> {
    pub error: Option<&'a str>,
    pub panel: Option<ResultPanel<'a>>,
}

/// Project `state` onto what should be displayed
pub fn project<'a>(state: &'a SummaryState, search_template: &str) -> View<'a> {
    let error = Some(state.error()).filter(|e| !e.is_empty());

    let panel = (!state.summary().is_empty()).then(|| {
        let entity = match state.key_entity() {
            "" => EntityView::NotFound,
            label => EntityView::Link {
                label,
                href: search_link(search_template, label),
            },
        };

        ResultPanel {
            summary: state.summary(),
            entity,
            braille_summary: state.braille_summary(),
        }
    });

    View { error, panel }
}

/// Build the search URL for `entity` from a `{query}` template.
///
/// A template without the placeholder gets the encoded entity appended.
pub fn search_link(template: &str, entity: &str) -> String {
    let query = urlencoding::encode(entity);
    if template.contains(QUERY_PLACEHOLDER) {
        template.replace(QUERY_PLACEHOLDER, &query)
    } else {
        format!("{template}{query}")
    }
}
