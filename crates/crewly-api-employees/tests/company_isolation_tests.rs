//! Integration tests for company scoping.
//!
//! Company admins only ever see their own company's employees; super admins
//! see company admins and employees everywhere.
//!
//! Run with: `cargo test -p crewly-api-employees company_isolation -- --ignored`

mod common;

use common::*;
use crewly_api_employees::models::ListEmployeesQuery;
use crewly_api_employees::ApiEmployeesError;
use crewly_core::Role;
use uuid::Uuid;

fn list_query(company_id: Option<Uuid>) -> ListEmployeesQuery {
    ListEmployeesQuery {
        search: None,
        company_id,
        page: None,
        per_page: None,
    }
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn test_company_admin_list_excludes_other_companies() {
    let pool = create_test_pool().await;
    let own_company = create_test_company(&pool).await;
    let other_company = create_test_company(&pool).await;
    let (service, _mock) = build_service(&pool);

    let mine = service
        .create(
            &super_admin(),
            &create_request(Some(own_company), &unique_email()),
        )
        .await
        .expect("creation should succeed");
    service
        .create(
            &super_admin(),
            &create_request(Some(other_company), &unique_email()),
        )
        .await
        .expect("creation should succeed");

    let listed = service
        .list(&company_admin(own_company), &list_query(None))
        .await
        .expect("list should succeed");

    assert!(listed.employees.iter().any(|e| e.id == mine.employee.id));
    assert!(listed
        .employees
        .iter()
        .all(|e| e.company_id == Some(own_company)));

    cleanup_test_company(&pool, own_company).await;
    cleanup_test_company(&pool, other_company).await;
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn test_company_admin_foreign_filter_matches_nothing() {
    let pool = create_test_pool().await;
    let own_company = create_test_company(&pool).await;
    let other_company = create_test_company(&pool).await;
    let (service, _mock) = build_service(&pool);

    service
        .create(
            &super_admin(),
            &create_request(Some(own_company), &unique_email()),
        )
        .await
        .expect("creation should succeed");
    service
        .create(
            &super_admin(),
            &create_request(Some(other_company), &unique_email()),
        )
        .await
        .expect("creation should succeed");

    // The foreign filter is ANDed onto the admin's own scope: an empty
    // page, not an error.
    let listed = service
        .list(&company_admin(own_company), &list_query(Some(other_company)))
        .await
        .expect("list should succeed");

    assert!(listed.employees.is_empty());
    assert_eq!(listed.pagination.total, 0);

    cleanup_test_company(&pool, own_company).await;
    cleanup_test_company(&pool, other_company).await;
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn test_company_admin_list_excludes_admins() {
    let pool = create_test_pool().await;
    let company_id = create_test_company(&pool).await;
    create_company_admin_row(&pool, company_id, &unique_email()).await;
    let (service, _mock) = build_service(&pool);

    service
        .create(
            &super_admin(),
            &create_request(Some(company_id), &unique_email()),
        )
        .await
        .expect("creation should succeed");

    let listed = service
        .list(&company_admin(company_id), &list_query(None))
        .await
        .expect("list should succeed");

    assert!(listed.employees.iter().all(|e| e.role == Role::Employee));

    cleanup_test_company(&pool, company_id).await;
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn test_super_admin_list_includes_company_admins() {
    let pool = create_test_pool().await;
    let company_id = create_test_company(&pool).await;
    let admin_id = create_company_admin_row(&pool, company_id, &unique_email()).await;
    let (service, _mock) = build_service(&pool);

    let listed = service
        .list(&super_admin(), &list_query(Some(company_id)))
        .await
        .expect("list should succeed");

    assert!(listed.employees.iter().any(|e| e.id == admin_id));

    cleanup_test_company(&pool, company_id).await;
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn test_company_admin_cannot_show_foreign_employee() {
    let pool = create_test_pool().await;
    let own_company = create_test_company(&pool).await;
    let other_company = create_test_company(&pool).await;
    let (service, _mock) = build_service(&pool);

    let foreign = service
        .create(
            &super_admin(),
            &create_request(Some(other_company), &unique_email()),
        )
        .await
        .expect("creation should succeed");

    // A valid id in another company is forbidden, not hidden.
    let result = service
        .show(&company_admin(own_company), foreign.employee.id)
        .await;
    assert!(matches!(result, Err(ApiEmployeesError::Forbidden(_))));

    cleanup_test_company(&pool, own_company).await;
    cleanup_test_company(&pool, other_company).await;
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn test_company_admin_cannot_show_own_admin_as_employee() {
    let pool = create_test_pool().await;
    let company_id = create_test_company(&pool).await;
    let admin_id = create_company_admin_row(&pool, company_id, &unique_email()).await;
    let (service, _mock) = build_service(&pool);

    let result = service.show(&company_admin(company_id), admin_id).await;
    assert!(matches!(result, Err(ApiEmployeesError::NotFound(_))));

    cleanup_test_company(&pool, company_id).await;
}

// =========================================================================
// Per-company listing
// =========================================================================

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn test_list_by_company_returns_members() {
    let pool = create_test_pool().await;
    let company_id = create_test_company(&pool).await;
    create_company_admin_row(&pool, company_id, &unique_email()).await;
    let (service, _mock) = build_service(&pool);

    service
        .create(
            &super_admin(),
            &create_request(Some(company_id), &unique_email()),
        )
        .await
        .expect("creation should succeed");

    let members = service
        .list_by_company(&super_admin(), company_id)
        .await
        .expect("listing should succeed");

    // Employees and the company's admin both appear.
    assert_eq!(members.len(), 2);

    cleanup_test_company(&pool, company_id).await;
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn test_list_by_company_unknown_company() {
    let pool = create_test_pool().await;
    let (service, _mock) = build_service(&pool);

    let result = service
        .list_by_company(&super_admin(), Uuid::new_v4())
        .await;
    assert!(matches!(result, Err(ApiEmployeesError::NotFound(_))));
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn test_list_by_company_empty_company() {
    let pool = create_test_pool().await;
    let company_id = create_test_company(&pool).await;
    let (service, _mock) = build_service(&pool);

    let result = service.list_by_company(&super_admin(), company_id).await;
    assert!(matches!(result, Err(ApiEmployeesError::NotFound(_))));

    cleanup_test_company(&pool, company_id).await;
}

#[tokio::test]
#[ignore = "Requires database - run locally with DATABASE_URL"]
async fn test_list_by_company_foreign_company_forbidden() {
    let pool = create_test_pool().await;
    let own_company = create_test_company(&pool).await;
    let other_company = create_test_company(&pool).await;
    let (service, _mock) = build_service(&pool);

    service
        .create(
            &super_admin(),
            &create_request(Some(other_company), &unique_email()),
        )
        .await
        .expect("creation should succeed");

    let result = service
        .list_by_company(&company_admin(own_company), other_company)
        .await;
    assert!(matches!(result, Err(ApiEmployeesError::Forbidden(_))));

    cleanup_test_company(&pool, own_company).await;
    cleanup_test_company(&pool, other_company).await;
}
