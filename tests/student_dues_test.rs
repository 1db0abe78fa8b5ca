//! Student dues workflow

mod helpers;

use bde_office::models::*;
use bde_office::BdeError;
use assert_matches::assert_matches;
use helpers::*;

#[tokio::test]
async fn test_student_payment_scenario() {
    let ctx = TestContext::new().await.unwrap();
    let services = ctx.services();
    let today = date(2024, 10, 14);

    let added = ctx.data.students.add(Student::new("Koné Awa", "Prépa 1")).await.unwrap();
    let listed = ctx.data.students.list().await.unwrap();
    let stored = listed.iter().find(|s| s.id == added.id).unwrap();
    assert!(!stored.fields.has_paid);
    assert!(stored.fields.amount.is_none());

    let paid = services.students.toggle_payment(&added.id, today).await.unwrap();
    assert!(paid.fields.has_paid);
    assert_eq!(paid.fields.amount, Some(15000));
    assert_eq!(paid.fields.payment_date, Some(today));
    assert_eq!(services.students.find(&added.id).await.unwrap(), paid);

    ctx.data.students.delete(&added.id).await.unwrap();
    assert!(ctx.data.students.list().await.unwrap().iter().all(|s| s.id != added.id));
}

#[tokio::test]
async fn test_toggle_twice_returns_to_unpaid() {
    let ctx = TestContext::new().await.unwrap();
    let services = ctx.services();
    let added = ctx.data.students.add(Student::new("Yao Marc", "Licence 3")).await.unwrap();

    services.students.toggle_payment(&added.id, date(2024, 10, 1)).await.unwrap();
    let cancelled = services.students.toggle_payment(&added.id, date(2024, 10, 2)).await.unwrap();

    assert!(!cancelled.fields.has_paid);
    assert!(cancelled.fields.amount.is_none());
    assert!(cancelled.fields.payment_date.is_none());
    assert_eq!(services.students.find(&added.id).await.unwrap().fields, Student::new("Yao Marc", "Licence 3"));
}

#[tokio::test]
async fn test_toggle_unknown_student_is_not_found() {
    let ctx = TestContext::new().await.unwrap();
    let result = ctx.services().students.toggle_payment("missing", date(2024, 10, 1)).await;
    assert_matches!(result, Err(BdeError::NotFound { collection, .. }) if collection == "students");
}

#[tokio::test]
async fn test_configured_dues_amount_is_used() {
    let mut ctx = TestContext::new().await.unwrap();
    ctx.settings.dues.amount = 20000;
    let added = ctx.data.students.add(Student::new("Bamba Inès", "Master 1")).await.unwrap();

    let paid = ctx.services().students.toggle_payment(&added.id, date(2024, 10, 1)).await.unwrap();
    assert_eq!(paid.fields.amount, Some(20000));
}

#[tokio::test]
async fn test_by_level_sorted_by_name() {
    let ctx = TestContext::new().await.unwrap();
    for (name, level) in [("Yao Marc", "Prépa 1"), ("Diallo Sékou", "Licence 1"), ("Bamba Inès", "Prépa 1")] {
        ctx.data.students.add(Student::new(name, level)).await.unwrap();
    }

    let prepa = ctx.services().students.by_level("Prépa 1").await.unwrap();
    let names: Vec<_> = prepa.iter().map(|s| s.fields.name.as_str()).collect();
    assert_eq!(names, ["Bamba Inès", "Yao Marc"]);
}
