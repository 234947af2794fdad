//! Derived platform statistics.
//!
//! Everything here is recomputed from the collections on each call; nothing
//! is cached or indexed.

use crate::domain::{
    ApplicationStatus, DonationCategory, EventStatus, JobStatus, MentorshipStatus, PlatformStats,
};

use super::store::Store;

/// Compute the platform statistics for the current store contents.
#[must_use]
pub fn collect_stats(store: &Store) -> PlatformStats {
    let donations_by_category: Vec<(DonationCategory, f64)> = DonationCategory::ALL
        .iter()
        .map(|&category| {
            let total = store
                .donations()
                .iter()
                .filter(|d| d.category == category)
                .map(|d| d.amount)
                .sum();
            (category, total)
        })
        .filter(|&(_, total)| total > 0.0)
        .collect();

    PlatformStats {
        alumni_count: store.alumni().len(),
        student_count: store.students().len(),
        open_jobs: store
            .jobs()
            .iter()
            .filter(|j| j.status == JobStatus::Open)
            .count(),
        total_jobs: store.jobs().len(),
        total_applications: store.applications().len(),
        upcoming_events: store
            .events()
            .iter()
            .filter(|e| e.status == EventStatus::Upcoming)
            .count(),
        total_registrations: store.events().iter().map(|e| u64::from(e.registered)).sum(),
        pending_mentorships: store
            .mentorship_requests()
            .iter()
            .filter(|m| m.status == MentorshipStatus::Pending)
            .count(),
        accepted_mentorships: store
            .mentorship_requests()
            .iter()
            .filter(|m| m.status == MentorshipStatus::Accepted)
            .count(),
        conversation_count: store.conversations().len(),
        message_count: store.messages().len(),
        donation_count: store.donations().len(),
        donation_total: store.donations().iter().map(|d| d.amount).sum(),
        donations_by_category,
        total_points: store
            .alumni()
            .iter()
            .chain(store.students().iter())
            .map(|u| u64::from(u.points))
            .sum(),
    }
}

/// Number of applications in a given status, for detail views.
#[must_use]
pub fn applications_with_status(store: &Store, status: ApplicationStatus) -> usize {
    store
        .applications()
        .iter()
        .filter(|a| a.status == status)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::seed::seeded_store;
    use crate::domain::AppConfig;

    #[test]
    fn test_stats_over_seeded_dataset() {
        let store = seeded_store(&AppConfig::default());
        let stats = collect_stats(&store);

        assert_eq!(stats.alumni_count, 4);
        assert_eq!(stats.student_count, 4);
        assert_eq!(stats.total_jobs, 5);
        assert_eq!(stats.open_jobs, 4);
        assert_eq!(stats.total_applications, 3);
        assert_eq!(stats.upcoming_events, 3);
        assert_eq!(stats.pending_mentorships, 1);
        assert_eq!(stats.accepted_mentorships, 1);
        assert_eq!(stats.donation_count, 3);
        assert!((stats.donation_total - 1750.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_category_sums_skip_empty_categories() {
        let store = seeded_store(&AppConfig::default());
        let stats = collect_stats(&store);

        assert_eq!(stats.donations_by_category.len(), 3);
        assert!(stats
            .donations_by_category
            .iter()
            .all(|&(_, total)| total > 0.0));
    }

    #[test]
    fn test_stats_on_empty_store() {
        let mut config = AppConfig::default();
        config.seed.enabled = false;
        let stats = collect_stats(&seeded_store(&config));

        assert_eq!(stats.total_jobs, 0);
        assert_eq!(stats.donation_total, 0.0);
        assert!(stats.donations_by_category.is_empty());
    }

    #[test]
    fn test_applications_with_status() {
        let store = seeded_store(&AppConfig::default());
        assert_eq!(
            applications_with_status(&store, ApplicationStatus::Pending),
            2
        );
        assert_eq!(
            applications_with_status(&store, ApplicationStatus::Reviewed),
            1
        );
    }
}
