use serde::{Deserialize, Serialize};

use crate::domain::validation::{is_blank, parse_year, year_range_message, FieldErrors};

/// Genre options offered by the multi-select, in display order.
pub const GENRE_OPTIONS: [&str; 14] = [
    "Fiction",
    "Non-Fiction",
    "Mystery",
    "Romance",
    "Science Fiction",
    "Fantasy",
    "Biography",
    "History",
    "Self-Help",
    "Poetry",
    "Drama",
    "Horror",
    "Adventure",
    "Comedy",
];

/// Default lower bound for the published-year range.
pub const MIN_PUBLISHED_YEAR: i32 = 1800;

/// Field names used as error keys. Kept in sync with the serde names below.
pub mod fields {
    pub const TITLE: &str = "title";
    pub const GENRE: &str = "genre";
    pub const PUBLISHED_YEAR: &str = "published_year";
}

/// Draft of a book entry, exactly as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    /// Selected genres, in the order the user picked them.
    pub genre: Vec<String>,
    /// Year as entered; validated as an integer within the rules' range.
    pub published_year: String,
}

/// Bounds the book validator is parameterized over.
///
/// `current_year` is injected by the caller, never read from the clock here,
/// so validation stays deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookRules {
    pub min_published_year: i32,
    pub current_year: i32,
}

impl BookRules {
    pub fn for_year(current_year: i32) -> Self {
        Self {
            min_published_year: MIN_PUBLISHED_YEAR,
            current_year,
        }
    }
}

/// Validates a book draft. An empty map means the draft is submittable.
pub fn validate_book(draft: &BookDraft, rules: &BookRules) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if is_blank(&draft.title) {
        errors.insert(fields::TITLE, "Book title is required".to_string());
    }

    if draft.genre.is_empty() {
        errors.insert(fields::GENRE, "At least one genre is required".to_string());
    }

    if is_blank(&draft.published_year) {
        errors.insert(
            fields::PUBLISHED_YEAR,
            "Published year is required".to_string(),
        );
    } else {
        let in_range = parse_year(&draft.published_year)
            .is_some_and(|year| (rules.min_published_year..=rules.current_year).contains(&year));
        if !in_range {
            errors.insert(
                fields::PUBLISHED_YEAR,
                year_range_message(rules.min_published_year, rules.current_year),
            );
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: BookRules = BookRules {
        min_published_year: 1800,
        current_year: 2026,
    };

    fn dune() -> BookDraft {
        BookDraft {
            title: "Dune".to_string(),
            genre: vec!["Science Fiction".to_string()],
            published_year: "1965".to_string(),
        }
    }

    #[test]
    fn valid_book_passes() {
        assert!(validate_book(&dune(), &RULES).is_empty());
    }

    #[test]
    fn boundary_years_are_inclusive() {
        for year in ["1800", "2026"] {
            let draft = BookDraft {
                published_year: year.to_string(),
                ..dune()
            };
            assert!(validate_book(&draft, &RULES).is_empty(), "year {year}");
        }
    }

    #[test]
    fn out_of_range_years_are_rejected() {
        for year in ["1799", "2027"] {
            let draft = BookDraft {
                published_year: year.to_string(),
                ..dune()
            };
            let errors = validate_book(&draft, &RULES);
            assert_eq!(
                errors.get(fields::PUBLISHED_YEAR).map(String::as_str),
                Some("Please enter a valid year between 1800 and 2026"),
                "year {year}"
            );
        }
    }

    #[test]
    fn non_numeric_year_is_rejected_not_coerced() {
        let draft = BookDraft {
            published_year: "nineteen65".to_string(),
            ..dune()
        };
        assert!(validate_book(&draft, &RULES).contains_key(fields::PUBLISHED_YEAR));
    }

    #[test]
    fn whitespace_only_title_counts_as_empty() {
        let draft = BookDraft {
            title: "   ".to_string(),
            ..dune()
        };
        let errors = validate_book(&draft, &RULES);
        assert_eq!(
            errors.get(fields::TITLE).map(String::as_str),
            Some("Book title is required")
        );
    }

    #[test]
    fn empty_genre_set_is_rejected() {
        let draft = BookDraft {
            genre: Vec::new(),
            ..dune()
        };
        assert!(validate_book(&draft, &RULES).contains_key(fields::GENRE));
    }

    #[test]
    fn empty_draft_reports_every_field() {
        let errors = validate_book(&BookDraft::default(), &RULES);
        assert_eq!(errors.len(), 3);
        assert!(errors.contains_key(fields::TITLE));
        assert!(errors.contains_key(fields::GENRE));
        assert!(errors.contains_key(fields::PUBLISHED_YEAR));
    }

    #[test]
    fn field_constants_match_serde_names() {
        let value = serde_json::to_value(BookDraft::default()).unwrap();
        let object = value.as_object().unwrap();
        for field in [fields::TITLE, fields::GENRE, fields::PUBLISHED_YEAR] {
            assert!(object.contains_key(field), "missing {field}");
        }
    }
}
