//! Employee tree invariants: subordinate guards, manager assignment checks,
//! and the subordinate read API.

mod helpers;

use helpers::{create_employee, employee_payload, test_pool};
use hr_server::db::repository::{RepoError, employee};
use shared::ErrorCode;
use shared::models::AssignmentUpdate;

#[tokio::test]
async fn delete_with_subordinates_fails_until_reassigned() {
    let pool = test_pool().await;

    let alice = create_employee(&pool, "Alice", "alice@company.com", "team-lead", None).await;
    let bob = create_employee(&pool, "Bob", "bob@company.com", "staff", Some(alice.id)).await;

    // Alice has a direct report, so deletion is refused...
    let err = employee::delete(&pool, alice.id).await.unwrap_err();
    assert!(matches!(
        err,
        RepoError::Business(ErrorCode::EmployeeHasSubordinates, _)
    ));

    // ...and nothing changed
    let roster = employee::find_all(&pool).await.unwrap();
    assert_eq!(roster.len(), 2);

    // Reassign Bob away from Alice, then deletion succeeds
    employee::update_assignment(
        &pool,
        bob.id,
        AssignmentUpdate {
            role: "staff".to_string(),
            manager_id: None,
        },
    )
    .await
    .unwrap();

    assert!(employee::delete(&pool, alice.id).await.unwrap());
    let roster = employee::find_all(&pool).await.unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].name, "Bob");
}

#[tokio::test]
async fn subordinates_empty_when_no_reports() {
    let pool = test_pool().await;

    let solo = create_employee(&pool, "Solo", "solo@company.com", "staff", None).await;

    let entries = employee::subordinates(&pool, solo.id).await.unwrap();
    assert!(entries.is_empty());

    // Unknown manager ids also yield an empty list, not an error
    let entries = employee::subordinates(&pool, 9999).await.unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn subordinates_ordered_by_name() {
    let pool = test_pool().await;

    let lead = create_employee(&pool, "Lead", "lead@company.com", "supervisor", None).await;
    create_employee(&pool, "Zoe", "zoe@company.com", "staff", Some(lead.id)).await;
    create_employee(&pool, "Amy", "amy@company.com", "staff", Some(lead.id)).await;
    create_employee(&pool, "Mia", "mia@company.com", "staff", Some(lead.id)).await;

    let entries = employee::subordinates(&pool, lead.id).await.unwrap();
    let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Amy", "Mia", "Zoe"]);
}

#[tokio::test]
async fn self_management_rejected() {
    let pool = test_pool().await;

    let emp = create_employee(&pool, "Erin", "erin@company.com", "team-lead", None).await;

    let err = employee::update_assignment(
        &pool,
        emp.id,
        AssignmentUpdate {
            role: "team-lead".to_string(),
            manager_id: Some(emp.id),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        RepoError::Business(ErrorCode::SelfManagement, _)
    ));
}

#[tokio::test]
async fn manager_cycle_rejected() {
    let pool = test_pool().await;

    // a <- b <- c reporting chain
    let a = create_employee(&pool, "A", "a@company.com", "leader", None).await;
    let b = create_employee(&pool, "B", "b@company.com", "supervisor", Some(a.id)).await;
    let c = create_employee(&pool, "C", "c@company.com", "team-lead", Some(b.id)).await;

    // Making c the manager of a would close the loop a -> b -> c -> a
    let err = employee::update_assignment(
        &pool,
        a.id,
        AssignmentUpdate {
            role: "leader".to_string(),
            manager_id: Some(c.id),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, RepoError::Business(ErrorCode::ManagerCycle, _)));

    // The chain is untouched
    let a_after = employee::find_by_id(&pool, a.id).await.unwrap().unwrap();
    assert_eq!(a_after.manager_id, None);
}

#[tokio::test]
async fn assigned_manager_must_exist() {
    let pool = test_pool().await;

    let err = employee::create(&pool, employee_payload("Ghost", "g@company.com", "staff", Some(404)))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RepoError::Business(ErrorCode::ManagerNotFound, _)
    ));
}

#[tokio::test]
async fn manager_candidates_filtered_by_role_and_ordered() {
    let pool = test_pool().await;

    create_employee(&pool, "Walt", "walt@company.com", "leader", None).await;
    create_employee(&pool, "Anna", "anna@company.com", "supervisor", None).await;
    create_employee(&pool, "Theo", "theo@company.com", "team-lead", None).await;
    create_employee(&pool, "Iris", "iris@company.com", "intern", None).await;
    create_employee(&pool, "Stan", "stan@company.com", "staff", None).await;

    let candidates = employee::manager_candidates(&pool).await.unwrap();
    let names: Vec<_> = candidates.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Anna", "Theo", "Walt"]);
}

#[tokio::test]
async fn roster_resolves_reference_names() {
    let pool = test_pool().await;

    let dept = hr_server::db::repository::department::create(
        &pool,
        shared::models::DepartmentCreate {
            name: "Engineering".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();

    let lead = create_employee(&pool, "Lena", "lena@company.com", "team-lead", None).await;

    let mut payload = employee_payload("Nick", "nick@company.com", "staff", Some(lead.id));
    payload.department_id = Some(dept.id);
    let nick = employee::create(&pool, payload).await.unwrap();

    assert_eq!(nick.department_name.as_deref(), Some("Engineering"));
    assert_eq!(nick.manager_name.as_deref(), Some("Lena"));
    assert_eq!(nick.position_title, None);
}
