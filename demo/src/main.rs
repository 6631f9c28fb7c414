//! Combined binary for development - drives both stores in one process.
//!
//! Walks the same flows the pages drive: featured courses on the landing
//! page, catalog filtering, registration with enrollment, and a profile
//! update, logging each step.

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::LatencyConfig;
use course_service_lib::catalog::filter_courses;
use course_service_lib::service::CourseService;
use domain::{MembershipTier, RegisterUser, UpdateProfile};
use user_service_lib::service::UserService;

#[derive(Parser)]
#[command(name = "coursehub")]
#[command(about = "Drive the seeded course and user stores end to end")]
struct Cli {
    /// Disable the simulated backing-store latency
    #[arg(long)]
    instant: bool,

    /// Free-text catalog query
    #[arg(long, default_value = "")]
    query: String,

    /// Catalog category key ("all" disables category filtering)
    #[arg(long, default_value = "all")]
    category: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let latency = if cli.instant {
        LatencyConfig::none()
    } else {
        LatencyConfig::default()
    };

    let courses = course_service_lib::build_course_service(latency)?;
    let users = user_service_lib::build_user_service(latency)?;

    // Landing page: most-enrolled courses first.
    let featured = courses.featured_courses(None).await?;
    for course in &featured {
        info!(
            "featured: [{}] {} — {} ({}명 수강)",
            course.id, course.title, course.instructor, course.enrollment_count
        );
    }

    // Catalog page: free-text query and category are applied client-side
    // over the full list.
    let catalog = courses.list_courses().await?;
    let visible = filter_courses(&catalog, &cli.query, &cli.category);
    info!(
        "catalog: query={:?} category={:?} -> {} of {} courses",
        cli.query,
        cli.category,
        visible.len(),
        catalog.len()
    );

    // Dashboard: the signed-in user and their enrolled courses.
    let me = users.current_user().await?;
    let enrolled: Vec<_> = catalog
        .iter()
        .filter(|course| me.is_enrolled(course.id))
        .collect();
    info!(
        "dashboard: {} <{}> is enrolled in {} courses",
        me.name,
        me.email,
        enrolled.len()
    );

    // Membership page: register a new account, then enroll it somewhere.
    let registered = users
        .register(RegisterUser {
            full_name: "신규 회원".to_string(),
            email: "new.member@example.com".to_string(),
            password: "welcome123".to_string(),
            membership_tier: MembershipTier::Basic,
            accept_terms: true,
        })
        .await?;
    info!(
        "registered: #{} {} ({})",
        registered.id, registered.name, registered.membership_tier
    );

    if let Some(course) = featured.first() {
        let after = users.enroll_course(registered.id, course.id).await?;
        info!(
            "enrolled #{} into [{}] {} -> {:?}",
            after.id, course.id, course.title, after.enrolled_courses
        );
    }

    // Account page: partial profile update.
    let renamed = users
        .update_profile(
            registered.id,
            UpdateProfile {
                name: Some("신규 회원 2".to_string()),
                ..Default::default()
            },
        )
        .await?;
    info!("updated profile: #{} is now {}", renamed.id, renamed.name);

    Ok(())
}
