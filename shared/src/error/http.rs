//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::AccountNotFound
            | Self::DepartmentNotFound
            | Self::PositionNotFound
            | Self::EmployeeNotFound
            | Self::ManagerNotFound
            | Self::NoticeNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict (duplicates and org-tree constraint violations)
            Self::AlreadyExists
            | Self::UsernameExists
            | Self::EmailExists
            | Self::DepartmentNameExists
            | Self::DepartmentInUse
            | Self::PositionTitleExists
            | Self::PositionInUse
            | Self::EmployeeHasSubordinates
            | Self::SelfManagement
            | Self::ManagerCycle => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid
            | Self::AccountDisabled => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            Self::PermissionDenied
            | Self::RoleRequired
            | Self::AdminRequired
            | Self::NoticeNotOwner => StatusCode::FORBIDDEN,

            // 500 Internal Server Error
            Self::InternalError
            | Self::DatabaseError
            | Self::ConfigError
            | Self::RoleSyncFailed => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
