//! Unified error codes for the HR server
//!
//! This module defines all error codes used across the server and frontend.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication / account errors
//! - 2xxx: Permission errors
//! - 3xxx: Department errors
//! - 4xxx: Position errors
//! - 5xxx: Employee / org-tree errors
//! - 6xxx: Attendance / payroll errors
//! - 7xxx: Notice errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,

    // ==================== 1xxx: Auth / Account ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Account is disabled
    AccountDisabled = 1005,
    /// Password shorter than the allowed minimum
    PasswordTooShort = 1006,
    /// Account not found
    AccountNotFound = 1101,
    /// Username already taken
    UsernameExists = 1102,
    /// Email already registered
    EmailExists = 1103,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Caller rank below the required role
    RoleRequired = 2002,
    /// Admin rank required
    AdminRequired = 2003,

    // ==================== 3xxx: Department ====================
    /// Department not found
    DepartmentNotFound = 3001,
    /// Department name already exists
    DepartmentNameExists = 3002,
    /// Department still has employees assigned
    DepartmentInUse = 3003,

    // ==================== 4xxx: Position ====================
    /// Position not found
    PositionNotFound = 4001,
    /// Position title already exists
    PositionTitleExists = 4002,
    /// Position still has employees assigned
    PositionInUse = 4003,

    // ==================== 5xxx: Employee / Org tree ====================
    /// Employee not found
    EmployeeNotFound = 5001,
    /// Employee still has direct reports
    EmployeeHasSubordinates = 5002,
    /// Assigned manager does not exist
    ManagerNotFound = 5003,
    /// Employee assigned as their own manager
    SelfManagement = 5004,
    /// Manager assignment would create a reporting cycle
    ManagerCycle = 5005,
    /// Employee/account role synchronization failed
    RoleSyncFailed = 5006,

    // ==================== 6xxx: Attendance / Payroll ====================
    /// Attendance record type is invalid
    AttendanceTypeInvalid = 6001,
    /// Salary amount is invalid (negative or non-finite)
    SalaryAmountInvalid = 6501,

    // ==================== 7xxx: Notice ====================
    /// Notice not found
    NoticeNotFound = 7001,
    /// Caller is neither the notice author nor an admin
    NoticeNotOwner = 7002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",

            // Auth / Account
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid username or password",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",
            ErrorCode::AccountDisabled => "Account is disabled",
            ErrorCode::PasswordTooShort => "Password must be at least 6 characters",
            ErrorCode::AccountNotFound => "Account not found",
            ErrorCode::UsernameExists => "Username already exists",
            ErrorCode::EmailExists => "Email already registered",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::RoleRequired => "Caller rank is below the required role",
            ErrorCode::AdminRequired => "Administrator role is required",

            // Department
            ErrorCode::DepartmentNotFound => "Department not found",
            ErrorCode::DepartmentNameExists => "Department name already exists",
            ErrorCode::DepartmentInUse => "Department still has employees assigned",

            // Position
            ErrorCode::PositionNotFound => "Position not found",
            ErrorCode::PositionTitleExists => "Position title already exists",
            ErrorCode::PositionInUse => "Position still has employees assigned",

            // Employee / Org tree
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::EmployeeHasSubordinates => "Employee still has direct reports",
            ErrorCode::ManagerNotFound => "Assigned manager does not exist",
            ErrorCode::SelfManagement => "An employee cannot be their own manager",
            ErrorCode::ManagerCycle => "Manager assignment would create a reporting cycle",
            ErrorCode::RoleSyncFailed => "Failed to synchronize role to the linked account",

            // Attendance / Payroll
            ErrorCode::AttendanceTypeInvalid => "Attendance record type is invalid",
            ErrorCode::SalaryAmountInvalid => "Salary amount is invalid",

            // Notice
            ErrorCode::NoticeNotFound => "Notice not found",
            ErrorCode::NoticeNotOwner => "Only the author or an admin can delete a notice",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),

            // Auth / Account
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1005 => Ok(ErrorCode::AccountDisabled),
            1006 => Ok(ErrorCode::PasswordTooShort),
            1101 => Ok(ErrorCode::AccountNotFound),
            1102 => Ok(ErrorCode::UsernameExists),
            1103 => Ok(ErrorCode::EmailExists),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::RoleRequired),
            2003 => Ok(ErrorCode::AdminRequired),

            // Department
            3001 => Ok(ErrorCode::DepartmentNotFound),
            3002 => Ok(ErrorCode::DepartmentNameExists),
            3003 => Ok(ErrorCode::DepartmentInUse),

            // Position
            4001 => Ok(ErrorCode::PositionNotFound),
            4002 => Ok(ErrorCode::PositionTitleExists),
            4003 => Ok(ErrorCode::PositionInUse),

            // Employee / Org tree
            5001 => Ok(ErrorCode::EmployeeNotFound),
            5002 => Ok(ErrorCode::EmployeeHasSubordinates),
            5003 => Ok(ErrorCode::ManagerNotFound),
            5004 => Ok(ErrorCode::SelfManagement),
            5005 => Ok(ErrorCode::ManagerCycle),
            5006 => Ok(ErrorCode::RoleSyncFailed),

            // Attendance / Payroll
            6001 => Ok(ErrorCode::AttendanceTypeInvalid),
            6501 => Ok(ErrorCode::SalaryAmountInvalid),

            // Notice
            7001 => Ok(ErrorCode::NoticeNotFound),
            7002 => Ok(ErrorCode::NoticeNotOwner),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        // General
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::AlreadyExists.code(), 4);

        // Auth
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::InvalidCredentials.code(), 1002);
        assert_eq!(ErrorCode::TokenExpired.code(), 1003);
        assert_eq!(ErrorCode::UsernameExists.code(), 1102);

        // Permission
        assert_eq!(ErrorCode::PermissionDenied.code(), 2001);
        assert_eq!(ErrorCode::AdminRequired.code(), 2003);

        // Org tree
        assert_eq!(ErrorCode::EmployeeNotFound.code(), 5001);
        assert_eq!(ErrorCode::EmployeeHasSubordinates.code(), 5002);
        assert_eq!(ErrorCode::SelfManagement.code(), 5004);
        assert_eq!(ErrorCode::ManagerCycle.code(), 5005);
        assert_eq!(ErrorCode::RoleSyncFailed.code(), 5006);

        // System
        assert_eq!(ErrorCode::InternalError.code(), 9001);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::Unknown.is_success());
        assert!(!ErrorCode::EmployeeNotFound.is_success());
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(1001), Ok(ErrorCode::NotAuthenticated));
        assert_eq!(ErrorCode::try_from(5002), Ok(ErrorCode::EmployeeHasSubordinates));
        assert_eq!(ErrorCode::try_from(9001), Ok(ErrorCode::InternalError));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
    }

    #[test]
    fn test_serde_roundtrip() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::NotAuthenticated,
            ErrorCode::PermissionDenied,
            ErrorCode::EmployeeHasSubordinates,
            ErrorCode::InternalError,
        ];

        for code in codes {
            let json = serde_json::to_string(&code).unwrap();
            let parsed: ErrorCode = serde_json::from_str(&json).unwrap();
            assert_eq!(code, parsed);
        }
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::EmployeeNotFound).unwrap();
        assert_eq!(json, "5001");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::Success), "0");
        assert_eq!(format!("{}", ErrorCode::ManagerCycle), "5005");
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::NotFound.message(), "Resource not found");
        assert_eq!(
            ErrorCode::EmployeeHasSubordinates.message(),
            "Employee still has direct reports"
        );
    }
}
