//! User service integration tests over the real in-memory store.

use std::sync::Arc;

use common::{AppError, LatencyConfig};
use domain::{MembershipTier, RegisterUser};
use user_service_lib::repository::UserStore;
use user_service_lib::service::{UserManager, UserService};
use user_service_lib::{build_user_service, seed};

fn service_over_empty_store() -> UserManager {
    let repo = Arc::new(UserStore::new(LatencyConfig::none()));
    UserManager::new(repo)
}

#[tokio::test]
async fn seeded_service_signs_in_the_first_fixture_user() {
    let service = build_user_service(LatencyConfig::none()).unwrap();

    let current = service.current_user().await.unwrap();
    let expected = &seed::load().unwrap()[0];

    assert_eq!(current.id, expected.id);
    assert_eq!(current.email, expected.email);
}

#[tokio::test]
async fn current_user_on_empty_store_fails_not_found() {
    let service = service_over_empty_store();

    let result = service.current_user().await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn register_then_enroll_round_trip() {
    let service = service_over_empty_store();

    let registered = service
        .register(RegisterUser {
            full_name: "최하늘".to_string(),
            email: "haneul.choi@example.com".to_string(),
            password: "hanul0987".to_string(),
            membership_tier: MembershipTier::Free,
            accept_terms: true,
        })
        .await
        .unwrap();

    let enrolled = service.enroll_course(registered.id, 3).await.unwrap();
    assert_eq!(enrolled.enrolled_courses, vec![3]);

    let unenrolled = service.unenroll_course(registered.id, 3).await.unwrap();
    assert!(unenrolled.enrolled_courses.is_empty());
}

#[tokio::test]
async fn register_with_a_seeded_email_fails_duplicate() {
    let service = build_user_service(LatencyConfig::none()).unwrap();
    let taken = seed::load().unwrap()[0].email.clone();

    let result = service
        .register(RegisterUser {
            full_name: "아무개".to_string(),
            email: taken,
            password: "pw123456".to_string(),
            membership_tier: MembershipTier::Free,
            accept_terms: true,
        })
        .await;

    assert!(matches!(result.unwrap_err(), AppError::DuplicateEmail));
    assert_eq!(
        service.list_users().await.unwrap().len(),
        seed::load().unwrap().len()
    );
}

#[tokio::test]
async fn arbitrary_tier_strings_survive_registration() {
    let service = service_over_empty_store();

    let registered = service
        .register(RegisterUser {
            full_name: "기업 고객".to_string(),
            email: "biz@example.com".to_string(),
            password: "corp!pass".to_string(),
            membership_tier: MembershipTier::from("Enterprise"),
            accept_terms: true,
        })
        .await
        .unwrap();

    assert_eq!(
        registered.membership_tier,
        MembershipTier::Other("Enterprise".to_string())
    );
}
