//! Course service integration tests over the real in-memory store.

use std::sync::Arc;

use common::{AppError, LatencyConfig};
use course_service_lib::repository::CourseStore;
use course_service_lib::service::{CourseManager, CourseService};
use course_service_lib::{build_course_service, seed};
use domain::CreateCourse;

fn service_over_empty_store() -> CourseManager {
    let repo = Arc::new(CourseStore::new(LatencyConfig::none()));
    CourseManager::new(repo)
}

#[tokio::test]
async fn seeded_service_serves_the_bundled_catalog() {
    let service = build_course_service(LatencyConfig::none()).unwrap();

    let catalog = service.list_courses().await.unwrap();

    assert_eq!(catalog.len(), seed::load().unwrap().len());
}

#[tokio::test]
async fn featured_defaults_to_six_over_the_seeded_catalog() {
    let service = build_course_service(LatencyConfig::none()).unwrap();

    let featured = service.featured_courses(None).await.unwrap();

    assert!(featured.len() <= 6);
    // Descending enrollment across the whole selection.
    assert!(featured
        .windows(2)
        .all(|pair| pair[0].enrollment_count >= pair[1].enrollment_count));
}

#[tokio::test]
async fn get_course_on_absent_id_fails_not_found() {
    let service = service_over_empty_store();

    let result = service.get_course(123).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn created_course_is_visible_through_the_service() {
    let service = service_over_empty_store();

    let created = service
        .create_course(CreateCourse {
            title: "Rust 기초".to_string(),
            description: "소유권부터 트레이트까지".to_string(),
            instructor: "오세영".to_string(),
            duration: "6주 과정".to_string(),
            enrollment_count: None,
        })
        .await
        .unwrap();

    let fetched = service.get_course(created.id).await.unwrap();
    assert_eq!(fetched, created);
}
