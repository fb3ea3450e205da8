//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Authentication / account errors
/// - 2xxx: Permission errors
/// - 3xxx: Department errors
/// - 4xxx: Position errors
/// - 5xxx: Employee / org-tree errors
/// - 6xxx: Attendance / payroll errors
/// - 7xxx: Notice errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication / account errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// Department errors (3xxx)
    Department,
    /// Position errors (4xxx)
    Position,
    /// Employee / org-tree errors (5xxx)
    Employee,
    /// Attendance / payroll errors (6xxx)
    Records,
    /// Notice errors (7xxx)
    Notice,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            3000..4000 => Self::Department,
            4000..5000 => Self::Position,
            5000..6000 => Self::Employee,
            6000..7000 => Self::Records,
            7000..8000 => Self::Notice,
            _ => Self::System,
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_bands() {
        assert_eq!(ErrorCode::NotFound.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::NotAuthenticated.category(), ErrorCategory::Auth);
        assert_eq!(ErrorCode::AdminRequired.category(), ErrorCategory::Permission);
        assert_eq!(
            ErrorCode::DepartmentInUse.category(),
            ErrorCategory::Department
        );
        assert_eq!(ErrorCode::PositionInUse.category(), ErrorCategory::Position);
        assert_eq!(ErrorCode::ManagerCycle.category(), ErrorCategory::Employee);
        assert_eq!(
            ErrorCode::SalaryAmountInvalid.category(),
            ErrorCategory::Records
        );
        assert_eq!(ErrorCode::NoticeNotOwner.category(), ErrorCategory::Notice);
        assert_eq!(ErrorCode::DatabaseError.category(), ErrorCategory::System);
    }
}
