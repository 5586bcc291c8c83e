use thiserror::Error;

/// Signup failure modes. The `Display` strings are the exact `detail`
/// messages the HTTP layer returns, so variants render the student-facing
/// wording rather than a technical description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student already signed up for this activity")]
    AlreadySignedUp,

    #[error("Maximum participants reached for this activity")]
    CapacityReached,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Email must be from mergington.edu domain")]
    WrongDomain,

    #[error("Student already signed up for another activity")]
    EnrolledElsewhere,

    #[error("Activity is already full")]
    ActivityFull,
}

pub type Result<T> = std::result::Result<T, ActivityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_api_contract() {
        assert_eq!(ActivityError::ActivityNotFound.to_string(), "Activity not found");
        assert_eq!(
            ActivityError::AlreadySignedUp.to_string(),
            "Student already signed up for this activity"
        );
        assert_eq!(
            ActivityError::CapacityReached.to_string(),
            "Maximum participants reached for this activity"
        );
        assert_eq!(ActivityError::InvalidEmail.to_string(), "Invalid email format");
        assert_eq!(
            ActivityError::WrongDomain.to_string(),
            "Email must be from mergington.edu domain"
        );
        assert_eq!(
            ActivityError::EnrolledElsewhere.to_string(),
            "Student already signed up for another activity"
        );
        assert_eq!(ActivityError::ActivityFull.to_string(), "Activity is already full");
    }
}
