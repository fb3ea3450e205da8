//! Registration and the employee/account role synchronization contract.

mod helpers;

use helpers::{create_employee, register_payload, test_pool};
use hr_server::auth::rank::{RankTable, ROLE_STAFF, ROLE_TEAM_LEAD};
use hr_server::auth::{CurrentUser, EmployeeScope, policy};
use hr_server::db::repository::{RepoError, account, employee};
use shared::ErrorCode;
use shared::models::AssignmentUpdate;

#[tokio::test]
async fn registration_creates_account_and_employee_as_intern() {
    let pool = test_pool().await;

    let carol = account::register(
        &pool,
        register_payload("carol", "pass123", "carol@company.com", "Carol"),
    )
    .await
    .unwrap();

    assert_eq!(carol.role, "intern");

    let profile = employee::find_by_email(&pool, "carol@company.com")
        .await
        .unwrap()
        .expect("Employee profile should exist");
    assert_eq!(profile.role, "intern");
    assert_eq!(profile.email, carol.email);

    // intern (20) < staff (30): carol cannot reach staff-gated sections,
    // let alone admin-only department management
    let table = RankTable::default();
    assert!(table.rank("intern") < table.rank(ROLE_STAFF));
    assert!(!policy::can_access_min_role(&table, &carol.role, "admin"));
}

#[tokio::test]
async fn role_edit_syncs_linked_account() {
    let pool = test_pool().await;

    let carol = account::register(
        &pool,
        register_payload("carol", "pass123", "carol@company.com", "Carol"),
    )
    .await
    .unwrap();
    let profile = employee::find_by_email(&pool, "carol@company.com")
        .await
        .unwrap()
        .unwrap();

    employee::update_assignment(
        &pool,
        profile.id,
        AssignmentUpdate {
            role: ROLE_TEAM_LEAD.to_string(),
            manager_id: None,
        },
    )
    .await
    .unwrap();

    let emp_after = employee::find_by_id(&pool, profile.id).await.unwrap().unwrap();
    let acc_after = account::find_by_id(&pool, carol.id).await.unwrap().unwrap();

    // Both sides of the pairing carry the new role
    assert_eq!(emp_after.role, ROLE_TEAM_LEAD);
    assert_eq!(acc_after.role, ROLE_TEAM_LEAD);
}

#[tokio::test]
async fn role_edit_without_linked_account_still_commits() {
    let pool = test_pool().await;

    // Employee added by an admin, no login account shares this email
    let emp = create_employee(&pool, "Nora", "nora@company.com", "staff", None).await;

    let updated = employee::update_assignment(
        &pool,
        emp.id,
        AssignmentUpdate {
            role: ROLE_TEAM_LEAD.to_string(),
            manager_id: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.role, ROLE_TEAM_LEAD);
}

#[tokio::test]
async fn rejected_edit_leaves_both_roles_unchanged() {
    let pool = test_pool().await;

    let carol = account::register(
        &pool,
        register_payload("carol", "pass123", "carol@company.com", "Carol"),
    )
    .await
    .unwrap();
    let profile = employee::find_by_email(&pool, "carol@company.com")
        .await
        .unwrap()
        .unwrap();

    // Self-management is refused before anything is written
    let err = employee::update_assignment(
        &pool,
        profile.id,
        AssignmentUpdate {
            role: ROLE_TEAM_LEAD.to_string(),
            manager_id: Some(profile.id),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Business(ErrorCode::SelfManagement, _)
    ));

    let emp_after = employee::find_by_id(&pool, profile.id).await.unwrap().unwrap();
    let acc_after = account::find_by_id(&pool, carol.id).await.unwrap().unwrap();
    assert_eq!(emp_after.role, "intern");
    assert_eq!(acc_after.role, "intern");
}

#[tokio::test]
async fn duplicate_username_and_email_rejected() {
    let pool = test_pool().await;

    account::register(
        &pool,
        register_payload("carol", "pass123", "carol@company.com", "Carol"),
    )
    .await
    .unwrap();

    let err = account::register(
        &pool,
        register_payload("carol", "pass456", "other@company.com", "Carol 2"),
    )
    .await
    .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Business(ErrorCode::UsernameExists, _)
    ));

    let err = account::register(
        &pool,
        register_payload("carol2", "pass456", "carol@company.com", "Carol 2"),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, RepoError::Business(ErrorCode::EmailExists, _)));
}

#[tokio::test]
async fn short_password_rejected() {
    let pool = test_pool().await;

    let err = account::register(
        &pool,
        register_payload("eve", "12345", "eve@company.com", "Eve"),
    )
    .await
    .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Business(ErrorCode::PasswordTooShort, _)
    ));

    // Nothing half-created
    assert!(account::find_by_username(&pool, "eve").await.unwrap().is_none());
    assert!(
        employee::find_by_email(&pool, "eve@company.com")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn non_admin_scope_limited_to_own_reports() {
    let pool = test_pool().await;

    // dave: team-lead (rank 50) with one report; an unrelated employee exists
    let dave_emp = create_employee(&pool, "Dave", "dave@company.com", ROLE_TEAM_LEAD, None).await;
    create_employee(&pool, "Rita", "rita@company.com", "staff", Some(dave_emp.id)).await;
    create_employee(&pool, "Omar", "omar@company.com", "staff", None).await;

    let table = RankTable::default();
    let dave = CurrentUser {
        id: 1,
        username: "dave".to_string(),
        role: ROLE_TEAM_LEAD.to_string(),
    };

    let scope = policy::employee_scope(&table, &dave, Some(dave_emp.id));
    assert_eq!(scope, EmployeeScope::ReportsOf(dave_emp.id));

    let visible = match scope {
        EmployeeScope::ReportsOf(id) => employee::find_by_manager(&pool, id).await.unwrap(),
        _ => unreachable!(),
    };

    // Only Rita, never the full roster
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Rita");

    let full = employee::find_all(&pool).await.unwrap();
    assert_eq!(full.len(), 3);
}
