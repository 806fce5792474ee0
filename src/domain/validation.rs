//! Input checks shared by the store and the boundary forms.

use crate::error::{KanbanError, Result};
use chrono::NaiveDate;

/// Trims a board name and checks it has at least `min_length` characters
pub fn validate_board_name(name: &str, min_length: usize) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.chars().count() < min_length {
        return Err(KanbanError::InvalidName { min_length });
    }
    Ok(trimmed.to_string())
}

/// Trims a task title and checks it has at least `min_length` characters
pub fn validate_task_title(title: &str, min_length: usize) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.chars().count() < min_length {
        return Err(KanbanError::InvalidTitle { min_length });
    }
    Ok(trimmed.to_string())
}

/// Trims a description; blank ones are dropped
pub fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}

/// A due date, when present, may not lie before `today`
pub fn validate_due_date(due_date: Option<NaiveDate>, today: NaiveDate) -> Result<()> {
    match due_date {
        Some(date) if date < today => Err(KanbanError::InvalidDueDate {
            date: date.to_string(),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_name_minimum_length() {
        assert!(matches!(
            validate_board_name("ab", 3),
            Err(KanbanError::InvalidName { min_length: 3 })
        ));
        assert_eq!(validate_board_name("abc", 3).unwrap(), "abc");
    }

    #[test]
    fn test_board_name_is_trimmed_before_counting() {
        assert!(validate_board_name("   ab   ", 3).is_err());
        assert!(validate_board_name("     ", 3).is_err());
        assert_eq!(validate_board_name("  Roadmap ", 3).unwrap(), "Roadmap");
    }

    #[test]
    fn test_normalize_description() {
        assert_eq!(normalize_description(None), None);
        assert_eq!(normalize_description(Some("   ".to_string())), None);
        assert_eq!(
            normalize_description(Some("  notes \n".to_string())),
            Some("notes".to_string())
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // "éé" is four bytes but two characters
        assert!(validate_task_title("éé", 3).is_err());
        assert_eq!(validate_task_title("ééé", 3).unwrap(), "ééé");
    }

    #[test]
    fn test_due_date() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

        assert!(validate_due_date(None, today).is_ok());
        assert!(validate_due_date(Some(today), today).is_ok());
        assert!(validate_due_date(NaiveDate::from_ymd_opt(2025, 6, 16), today).is_ok());
        assert!(matches!(
            validate_due_date(NaiveDate::from_ymd_opt(2025, 6, 14), today),
            Err(KanbanError::InvalidDueDate { .. })
        ));
    }
}
