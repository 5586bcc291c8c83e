use serde::{Deserialize, Serialize};

use crate::error::{ActivityError, Result};

/// Email domain every participant must belong to.
pub const REQUIRED_DOMAIN: &str = "mergington.edu";

// ---------------------------------------------------------------------------
// Activity
// ---------------------------------------------------------------------------

/// One extracurricular offering. The activity name is the directory key and
/// is not repeated inside the record, matching the wire format of
/// `GET /activities`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    /// Participant emails in signup order. Append-only; there is no
    /// unenroll operation.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: usize,
        participants: &[&str],
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

// ---------------------------------------------------------------------------
// Email validation
// ---------------------------------------------------------------------------

/// Check that `email` is a single `local@domain` split whose domain contains
/// a `.` and equals [`REQUIRED_DOMAIN`] exactly. Format and domain are
/// distinct failure modes.
pub fn validate_email(email: &str) -> Result<()> {
    let Some((_, domain)) = email.split_once('@') else {
        return Err(ActivityError::InvalidEmail);
    };
    if domain.contains('@') || !domain.contains('.') {
        return Err(ActivityError::InvalidEmail);
    }
    if domain != REQUIRED_DOMAIN {
        return Err(ActivityError::WrongDomain);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_school_address() {
        assert!(validate_email("student@mergington.edu").is_ok());
    }

    #[test]
    fn rejects_missing_at() {
        assert_eq!(
            validate_email("student.mergington.edu"),
            Err(ActivityError::InvalidEmail)
        );
    }

    #[test]
    fn rejects_double_at() {
        assert_eq!(
            validate_email("a@b@mergington.edu"),
            Err(ActivityError::InvalidEmail)
        );
    }

    #[test]
    fn rejects_dotless_domain() {
        assert_eq!(validate_email("student@edu"), Err(ActivityError::InvalidEmail));
    }

    #[test]
    fn rejects_foreign_domain() {
        assert_eq!(validate_email("x@gmail.com"), Err(ActivityError::WrongDomain));
    }

    #[test]
    fn format_is_checked_before_domain() {
        // A dotless foreign domain is a format error, not a domain error.
        assert_eq!(validate_email("x@gmail"), Err(ActivityError::InvalidEmail));
    }

    #[test]
    fn full_when_at_capacity() {
        let a = Activity::new("d", "s", 2, &["a@mergington.edu", "b@mergington.edu"]);
        assert!(a.is_full());
        assert!(a.has_participant("a@mergington.edu"));
        assert!(!a.has_participant("c@mergington.edu"));
    }

    #[test]
    fn serializes_without_name_field() {
        let a = Activity::new("Chess", "Fridays", 12, &["michael@mergington.edu"]);
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["description"], "Chess");
        assert_eq!(json["max_participants"], 12);
        assert_eq!(json["participants"][0], "michael@mergington.edu");
        assert!(json.get("name").is_none());
    }
}
