//! Club and atelier rosters

mod helpers;

use bde_office::models::*;
use helpers::*;

#[tokio::test]
async fn test_fetch_returns_only_parent_entries() {
    let ctx = TestContext::new().await.unwrap();
    let roster = &ctx.data.atelier_registrations;

    roster.register(Registration::new("peinture", "Koné Awa", "Prépa 1")).await.unwrap();
    roster.register(Registration::new("musique", "Yao Marc", "Licence 2")).await.unwrap();
    roster.register(Registration::new("peinture", "Bamba Inès", "Master 1")).await.unwrap();

    let peinture = roster.fetch_registrations("peinture").await.unwrap();
    let students: Vec<_> = peinture.iter().map(|r| r.fields.student_name.as_str()).collect();
    assert_eq!(students, ["Koné Awa", "Bamba Inès"]);
}

#[tokio::test]
async fn test_reset_only_clears_one_parent() {
    let ctx = TestContext::new().await.unwrap();
    let roster = &ctx.data.atelier_registrations;

    roster.register(Registration::new("peinture", "Koné Awa", "Prépa 1")).await.unwrap();
    roster.register(Registration::new("peinture", "Bamba Inès", "Master 1")).await.unwrap();
    roster.register(Registration::new("musique", "Yao Marc", "Licence 2")).await.unwrap();

    assert_eq!(roster.reset_registrations("peinture").await.unwrap(), 2);
    assert!(roster.fetch_registrations("peinture").await.unwrap().is_empty());
    assert_eq!(roster.fetch_registrations("musique").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_wipe_all_clears_every_parent() {
    let ctx = TestContext::new().await.unwrap();
    let roster = &ctx.data.atelier_registrations;

    roster.register(Registration::new("peinture", "Koné Awa", "Prépa 1")).await.unwrap();
    roster.register(Registration::new("musique", "Yao Marc", "Licence 2")).await.unwrap();

    assert_eq!(roster.wipe_all_registrations().await.unwrap(), 2);
    assert!(roster.fetch_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_club_and_atelier_rosters_do_not_mix() {
    let ctx = TestContext::new().await.unwrap();
    ctx.data.club_registrations.register(Registration::new("same-id", "Koné Awa", "Prépa 1")).await.unwrap();
    ctx.data.atelier_registrations.register(Registration::new("same-id", "Yao Marc", "Licence 2")).await.unwrap();

    ctx.data.atelier_registrations.wipe_all_registrations().await.unwrap();

    let clubs = ctx.data.club_registrations.fetch_registrations("same-id").await.unwrap();
    assert_eq!(clubs.len(), 1);
    assert_eq!(clubs[0].fields.student_name, "Koné Awa");
}

#[tokio::test]
async fn test_update_and_delete_registration() {
    let ctx = TestContext::new().await.unwrap();
    let roster = &ctx.data.club_registrations;
    let mut entry = roster.register(Registration::new("robotique", "Koné Awa", "Prépa 1")).await.unwrap();

    entry.fields.level = "Prépa 2".to_string();
    roster.update_registration(&entry).await.unwrap();
    assert_eq!(roster.fetch_registrations("robotique").await.unwrap()[0].fields.level, "Prépa 2");

    roster.delete_registration(&entry.id).await.unwrap();
    roster.delete_registration(&entry.id).await.unwrap();
    assert!(roster.fetch_registrations("robotique").await.unwrap().is_empty());
}
