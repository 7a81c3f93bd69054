// crates/matmeta-core/src/citation.rs
// ============================================================================
// Module: Citation Formatting
// Description: Structured citation to citation string conversion.
// Purpose: Serve services that accept citations only as text.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Formats a [`Citation`] using the Scientific Style and Format conventions:
//!
//! - journals: `Authors. Year. Title. Journal. Volume(Issue):Pages.`
//! - books: `Authors. Year. Title. Edition. Place: Publisher. Extent. Notes.`
//!
//! A citation with a `journal` is treated as an article; anything else is
//! treated as a book. URLs are not rendered.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::record::Citation;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Separator between citation elements.
const SEPARATOR: &str = ". ";

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Renders a structured citation as a single citation string.
#[must_use]
pub fn format_citation(citation: &Citation) -> String {
    let mut out = String::new();

    let authors = author_names(citation);
    if !authors.is_empty() {
        push_element(&mut out, &authors.join(", "));
    }
    if let Some(year) = &citation.year {
        push_element(&mut out, year);
    }
    if let Some(title) = &citation.title {
        push_element(&mut out, title);
    }

    if let Some(journal) = &citation.journal {
        push_element(&mut out, journal);
        if let Some(volume) = &citation.volume {
            out.push_str(volume);
            if let Some(issue) = &citation.issue {
                out.push('(');
                out.push_str(issue);
                out.push(')');
            }
            if let Some(pages) = &citation.page_location {
                out.push(':');
                out.push_str(pages);
            }
            out.push_str(SEPARATOR);
        }
    } else {
        if let Some(edition) = &citation.edition {
            push_element(&mut out, edition);
        }
        match (&citation.publication_location, &citation.publisher) {
            (Some(place), Some(publisher)) => push_element(&mut out, &format!("{place}: {publisher}")),
            (Some(place), None) => push_element(&mut out, place),
            (None, Some(publisher)) => push_element(&mut out, publisher),
            (None, None) => {}
        }
        if let Some(extent) = &citation.extent {
            push_element(&mut out, extent);
        }
        if let Some(notes) = &citation.notes {
            push_element(&mut out, notes);
        }
    }

    out.trim().to_string()
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns `Family Given` names; authors without a family name are skipped.
fn author_names(citation: &Citation) -> Vec<String> {
    citation
        .authors
        .iter()
        .flatten()
        .filter_map(|author| {
            let family = author.family_name.as_deref()?;
            Some(match author.given_name.as_deref() {
                Some(given) => format!("{family} {given}"),
                None => family.to_string(),
            })
        })
        .collect()
}

/// Appends one element followed by the separator.
fn push_element(out: &mut String, element: &str) {
    out.push_str(element);
    out.push_str(SEPARATOR);
}
