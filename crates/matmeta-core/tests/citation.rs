//! Citation formatting tests for matmeta-core.
// crates/matmeta-core/tests/citation.rs
// =============================================================================
// Module: Citation Formatting Tests
// Description: Journal and book citation strings.
// Purpose: Pin the text rendered for services that accept plain citations.
// =============================================================================

use matmeta_core::Citation;
use matmeta_core::Contact;
use matmeta_core::format_citation;

type TestResult = Result<(), String>;

fn author(given: &str, family: &str) -> Contact {
    Contact {
        given_name: Some(given.to_string()),
        family_name: Some(family.to_string()),
        ..Contact::default()
    }
}

fn expect_text(actual: &str, expected: &str) -> TestResult {
    if actual == expected { Ok(()) } else { Err(format!("{actual:?} != {expected:?}")) }
}

#[test]
fn journal_article_citation() -> TestResult {
    let citation = Citation {
        authors: Some(vec![author("Ada", "Lovelace"), author("Charles", "Babbage")]),
        year: Some("1843".to_string()),
        title: Some("Notes on the Analytical Engine".to_string()),
        journal: Some("Scientific Memoirs".to_string()),
        volume: Some("3".to_string()),
        issue: Some("2".to_string()),
        page_location: Some("666-731".to_string()),
        ..Citation::default()
    };
    expect_text(
        &format_citation(&citation),
        "Lovelace Ada, Babbage Charles. 1843. Notes on the Analytical Engine. Scientific \
         Memoirs. 3(2):666-731.",
    )
}

#[test]
fn book_citation() -> TestResult {
    let citation = Citation {
        authors: Some(vec![author("Marie", "Curie")]),
        year: Some("1910".to_string()),
        title: Some("Traite de radioactivite".to_string()),
        edition: Some("1st ed".to_string()),
        publication_location: Some("Paris".to_string()),
        publisher: Some("Gauthier-Villars".to_string()),
        extent: Some("426 p".to_string()),
        ..Citation::default()
    };
    expect_text(
        &format_citation(&citation),
        "Curie Marie. 1910. Traite de radioactivite. 1st ed. Paris: Gauthier-Villars. 426 p.",
    )
}

#[test]
fn publisher_without_place() -> TestResult {
    let citation = Citation {
        title: Some("Handbook".to_string()),
        publisher: Some("CRC".to_string()),
        ..Citation::default()
    };
    expect_text(&format_citation(&citation), "Handbook. CRC.")
}

#[test]
fn authors_without_family_name_are_skipped() -> TestResult {
    let nameless = Contact {
        given_name: Some("Anon".to_string()),
        ..Contact::default()
    };
    let citation = Citation {
        authors: Some(vec![nameless, author("Lise", "Meitner")]),
        title: Some("Fission".to_string()),
        journal: Some("Nature".to_string()),
        ..Citation::default()
    };
    expect_text(&format_citation(&citation), "Meitner Lise. Fission. Nature.")
}

#[test]
fn empty_citation_renders_empty_string() -> TestResult {
    expect_text(&format_citation(&Citation::default()), "")
}
