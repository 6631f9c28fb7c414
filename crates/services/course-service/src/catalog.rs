//! Catalog view filtering.
//!
//! Pure helpers for the courses page: derive the visible subset of the full
//! catalog from a free-text query and a category key. Both filters are
//! conjunctive and the incoming order is preserved.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use domain::{Course, CATEGORY_ALL};

/// Keyword sets that loosely bucket courses into the page's categories.
///
/// Matching is by substring against title and description, so new categories
/// are added here as data rather than as code. A category key missing from
/// this map matches nothing, which is what renders the empty state for stale
/// category links.
static CATEGORY_KEYWORDS: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| {
        HashMap::from([
            (
                "programming",
                &["react", "python", "node", "javascript", "개발"][..],
            ),
            ("design", &["ui", "ux", "디자인"][..]),
            ("data", &["데이터", "분석", "머신러닝"][..]),
            ("mobile", &["모바일", "앱", "react native"][..]),
        ])
    });

/// Derive the visible course list for the catalog page.
///
/// A query that is blank after trimming is ignored; the sentinel category
/// [`CATEGORY_ALL`] disables category filtering.
pub fn filter_courses(courses: &[Course], query: &str, category: &str) -> Vec<Course> {
    let mut filtered = courses.to_vec();

    if !query.trim().is_empty() {
        let query = query.to_lowercase();
        filtered.retain(|course| {
            course.title.to_lowercase().contains(&query)
                || course.description.to_lowercase().contains(&query)
                || course.instructor.to_lowercase().contains(&query)
        });
    }

    if category != CATEGORY_ALL {
        let keywords = CATEGORY_KEYWORDS.get(category).copied().unwrap_or_default();
        filtered.retain(|course| {
            keywords.iter().any(|keyword| {
                course.title.to_lowercase().contains(keyword)
                    || course.description.to_lowercase().contains(keyword)
            })
        });
    }

    filtered
}
