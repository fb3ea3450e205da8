//! Count-based deletion guards for departments/positions, uniqueness checks,
//! and the append-only record flows.

mod helpers;

use helpers::{create_employee, employee_payload, test_pool};
use hr_server::db::repository::{
    RepoError, attendance, department, employee, notice, position, salary,
};
use shared::ErrorCode;
use shared::models::{
    AttendanceCreate, DepartmentCreate, NoticeCreate, PositionCreate, SalaryCreate,
};

fn dept(name: &str) -> DepartmentCreate {
    DepartmentCreate {
        name: name.to_string(),
        description: None,
    }
}

fn pos(title: &str) -> PositionCreate {
    PositionCreate {
        title: title.to_string(),
        level: Some("L1".to_string()),
        description: None,
    }
}

#[tokio::test]
async fn department_delete_blocked_while_referenced() {
    let pool = test_pool().await;

    let engineering = department::create(&pool, dept("Engineering")).await.unwrap();

    let mut payload = employee_payload("Alice", "alice@company.com", "staff", None);
    payload.department_id = Some(engineering.id);
    let alice = employee::create(&pool, payload).await.unwrap();

    let err = department::delete(&pool, engineering.id).await.unwrap_err();
    assert!(matches!(
        err,
        RepoError::Business(ErrorCode::DepartmentInUse, _)
    ));

    // Still there
    assert!(
        department::find_by_id(&pool, engineering.id)
            .await
            .unwrap()
            .is_some()
    );

    // Remove the referencing employee, then deletion succeeds
    employee::delete(&pool, alice.id).await.unwrap();
    assert!(department::delete(&pool, engineering.id).await.unwrap());
}

#[tokio::test]
async fn position_delete_blocked_while_referenced() {
    let pool = test_pool().await;

    let engineer = position::create(&pool, pos("Engineer")).await.unwrap();

    let mut payload = employee_payload("Bob", "bob@company.com", "staff", None);
    payload.position_id = Some(engineer.id);
    employee::create(&pool, payload).await.unwrap();

    let err = position::delete(&pool, engineer.id).await.unwrap_err();
    assert!(matches!(
        err,
        RepoError::Business(ErrorCode::PositionInUse, _)
    ));
}

#[tokio::test]
async fn duplicate_names_rejected() {
    let pool = test_pool().await;

    department::create(&pool, dept("Engineering")).await.unwrap();
    let err = department::create(&pool, dept("Engineering")).await.unwrap_err();
    assert!(matches!(
        err,
        RepoError::Business(ErrorCode::DepartmentNameExists, _)
    ));

    position::create(&pool, pos("Engineer")).await.unwrap();
    let err = position::create(&pool, pos("Engineer")).await.unwrap_err();
    assert!(matches!(
        err,
        RepoError::Business(ErrorCode::PositionTitleExists, _)
    ));
}

#[tokio::test]
async fn deleting_missing_rows_is_not_found() {
    let pool = test_pool().await;

    assert!(matches!(
        department::delete(&pool, 42).await.unwrap_err(),
        RepoError::NotFound(_)
    ));
    assert!(matches!(
        position::delete(&pool, 42).await.unwrap_err(),
        RepoError::NotFound(_)
    ));
    assert!(matches!(
        employee::delete(&pool, 42).await.unwrap_err(),
        RepoError::NotFound(_)
    ));
}

#[tokio::test]
async fn salary_total_computed_at_write_time() {
    let pool = test_pool().await;

    let emp = create_employee(&pool, "Pam", "pam@company.com", "staff", None).await;

    let record = salary::create(
        &pool,
        SalaryCreate {
            employee_id: emp.id,
            base_salary: 5000.0,
            bonus: 800.0,
            deduction: 150.0,
            pay_date: "2025-02-28".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(record.total, 5650.0);

    let listed = salary::find_all(&pool).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].employee_name, "Pam");
    assert_eq!(listed[0].total, 5650.0);
}

#[tokio::test]
async fn salary_rejects_negative_amounts() {
    let pool = test_pool().await;

    let emp = create_employee(&pool, "Pam", "pam@company.com", "staff", None).await;

    let err = salary::create(
        &pool,
        SalaryCreate {
            employee_id: emp.id,
            base_salary: -1.0,
            bonus: 0.0,
            deduction: 0.0,
            pay_date: "2025-02-28".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Business(ErrorCode::SalaryAmountInvalid, _)
    ));
}

#[tokio::test]
async fn attendance_requires_existing_employee() {
    let pool = test_pool().await;

    let err = attendance::create(
        &pool,
        AttendanceCreate {
            employee_id: 404,
            kind: "check-in".to_string(),
            timestamp: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));

    let emp = create_employee(&pool, "Kim", "kim@company.com", "staff", None).await;
    let record = attendance::create(
        &pool,
        AttendanceCreate {
            employee_id: emp.id,
            kind: "check-in".to_string(),
            timestamp: Some(1_740_000_000_000),
        },
    )
    .await
    .unwrap();
    assert_eq!(record.kind, "check-in");
    assert_eq!(record.timestamp, 1_740_000_000_000);
}

#[tokio::test]
async fn notices_listed_by_author() {
    let pool = test_pool().await;

    // Notices are owned by accounts
    let author = hr_server::db::repository::account::register(
        &pool,
        helpers::register_payload("lee", "secret1", "lee@company.com", "Lee"),
    )
    .await
    .unwrap();

    notice::create(
        &pool,
        author.id,
        NoticeCreate {
            title: "Maintenance window".to_string(),
            content: "Saturday 02:00-04:00".to_string(),
            priority: None,
        },
    )
    .await
    .unwrap();

    let own = notice::find_by_author(&pool, author.id).await.unwrap();
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].author_name, "lee");
    assert_eq!(own[0].priority, "normal");

    let none = notice::find_by_author(&pool, author.id + 1).await.unwrap();
    assert!(none.is_empty());
}
