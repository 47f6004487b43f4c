use serde::{Deserialize, Serialize};

use crate::domain::validation::{is_blank, parse_year, year_range_message, FieldErrors};

/// Default lower bound for the birth-year range.
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// Minimum trimmed length for first and last names.
pub const MIN_NAME_LEN: usize = 2;

/// Field names used as error keys. Kept in sync with the serde names below.
pub mod fields {
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const BIRTH_YEAR: &str = "birth_year";
}

/// Draft of an author entry, exactly as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorDraft {
    pub first_name: String,
    pub last_name: String,
    /// Year as entered; validated as an integer within the rules' range.
    pub birth_year: String,
}

/// Bounds the author validator is parameterized over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorRules {
    pub min_birth_year: i32,
    pub min_name_len: usize,
    pub current_year: i32,
}

impl AuthorRules {
    pub fn for_year(current_year: i32) -> Self {
        Self {
            min_birth_year: MIN_BIRTH_YEAR,
            min_name_len: MIN_NAME_LEN,
            current_year,
        }
    }
}

fn check_name(
    errors: &mut FieldErrors,
    field: &'static str,
    label: &str,
    value: &str,
    min_len: usize,
) {
    if is_blank(value) {
        errors.insert(field, format!("{} is required", label));
    } else if value.trim().chars().count() < min_len {
        errors.insert(
            field,
            format!("{} must be at least {} characters", label, min_len),
        );
    }
}

/// Validates an author draft. An empty map means the draft is submittable.
pub fn validate_author(draft: &AuthorDraft, rules: &AuthorRules) -> FieldErrors {
    let mut errors = FieldErrors::new();

    check_name(
        &mut errors,
        fields::FIRST_NAME,
        "First name",
        &draft.first_name,
        rules.min_name_len,
    );
    check_name(
        &mut errors,
        fields::LAST_NAME,
        "Last name",
        &draft.last_name,
        rules.min_name_len,
    );

    if is_blank(&draft.birth_year) {
        errors.insert(fields::BIRTH_YEAR, "Birth year is required".to_string());
    } else {
        let in_range = parse_year(&draft.birth_year)
            .is_some_and(|year| (rules.min_birth_year..=rules.current_year).contains(&year));
        if !in_range {
            errors.insert(
                fields::BIRTH_YEAR,
                year_range_message(rules.min_birth_year, rules.current_year),
            );
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: AuthorRules = AuthorRules {
        min_birth_year: 1900,
        min_name_len: 2,
        current_year: 2026,
    };

    fn asimov() -> AuthorDraft {
        AuthorDraft {
            first_name: "Isaac".to_string(),
            last_name: "Asimov".to_string(),
            birth_year: "1920".to_string(),
        }
    }

    #[test]
    fn valid_author_passes() {
        assert!(validate_author(&asimov(), &RULES).is_empty());
    }

    #[test]
    fn missing_first_name_is_reported() {
        let draft = AuthorDraft {
            first_name: String::new(),
            ..asimov()
        };
        let errors = validate_author(&draft, &RULES);
        assert_eq!(
            errors.get(fields::FIRST_NAME).map(String::as_str),
            Some("First name is required")
        );
        assert!(!errors.contains_key(fields::LAST_NAME));
        assert!(!errors.contains_key(fields::BIRTH_YEAR));
    }

    #[test]
    fn single_character_name_is_too_short() {
        let draft = AuthorDraft {
            last_name: "X".to_string(),
            ..asimov()
        };
        let errors = validate_author(&draft, &RULES);
        assert_eq!(
            errors.get(fields::LAST_NAME).map(String::as_str),
            Some("Last name must be at least 2 characters")
        );
    }

    #[test]
    fn name_length_counts_trimmed_characters() {
        // " X " trims to one character even though the raw string has three.
        let draft = AuthorDraft {
            first_name: " X ".to_string(),
            ..asimov()
        };
        assert!(validate_author(&draft, &RULES).contains_key(fields::FIRST_NAME));
    }

    #[test]
    fn birth_year_bounds_are_inclusive() {
        for (year, ok) in [("1900", true), ("2026", true), ("1899", false), ("2027", false)] {
            let draft = AuthorDraft {
                birth_year: year.to_string(),
                ..asimov()
            };
            let errors = validate_author(&draft, &RULES);
            assert_eq!(!errors.contains_key(fields::BIRTH_YEAR), ok, "year {year}");
        }
    }

    #[test]
    fn non_numeric_birth_year_is_rejected() {
        let draft = AuthorDraft {
            birth_year: "around 1920".to_string(),
            ..asimov()
        };
        let errors = validate_author(&draft, &RULES);
        assert_eq!(
            errors.get(fields::BIRTH_YEAR).map(String::as_str),
            Some("Please enter a valid year between 1900 and 2026")
        );
    }
}
