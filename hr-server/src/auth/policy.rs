//! Access Policy
//!
//! Pure allow/deny decisions over supplied state. Identity always arrives as
//! an explicit [`CurrentUser`] argument and ranks come from the injected
//! [`RankTable`]; nothing here reads globals or touches the database.

use shared::models::Notice;

use crate::auth::rank::{RankTable, ROLE_ADMIN};
use crate::auth::CurrentUser;

/// Visibility restriction for the employee roster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeScope {
    /// Full roster (admin rank)
    All,
    /// Only direct reports of the caller's own employee record
    ReportsOf(i64),
    /// No employee record linked to the caller account; nothing visible
    Empty,
}

/// 最小角色门槛判定 (部门/职位管理、通知发布等)
pub fn can_access_min_role(table: &RankTable, caller_role: &str, required_role: &str) -> bool {
    table.meets_minimum(caller_role, required_role)
}

/// 员工列表可见范围
///
/// `caller_employee_id` is the id of the employee record whose email matches
/// the caller account's email, if one exists.
pub fn employee_scope(
    table: &RankTable,
    user: &CurrentUser,
    caller_employee_id: Option<i64>,
) -> EmployeeScope {
    if table.is_admin(&user.role) {
        return EmployeeScope::All;
    }
    match caller_employee_id {
        Some(id) => EmployeeScope::ReportsOf(id),
        None => EmployeeScope::Empty,
    }
}

/// 通知删除判定: 管理员或作者本人
pub fn can_delete_notice(table: &RankTable, user: &CurrentUser, notice: &Notice) -> bool {
    table.is_admin(&user.role) || notice.author_id == user.id
}

/// 通知列表范围: 管理员看全部，其他人只看自己发布的
pub fn sees_all_notices(table: &RankTable, user: &CurrentUser) -> bool {
    table.meets_minimum(&user.role, ROLE_ADMIN)
}
