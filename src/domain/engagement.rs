//! Engagement domain models: mentorship, applications, messaging, donations.
//!
//! Status fields are nominal state machines (pending to a terminal state),
//! but the store does not restrict transitions; any value is settable and
//! the last write wins.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::models::Role;

/// Status of a mentorship request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MentorshipStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl std::fmt::Display for MentorshipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Accepted => write!(f, "Accepted"),
            Self::Rejected => write!(f, "Rejected"),
        }
    }
}

impl std::str::FromStr for MentorshipStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            _ => Err(format!(
                "Unknown mentorship status: {s}. Use: pending, accepted, rejected"
            )),
        }
    }
}

/// A student's request for mentorship from an alumni member.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorshipRequest {
    /// Unique identifier within the mentorship collection.
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub mentor_id: String,
    pub mentor_name: String,
    /// Field of interest, e.g. "Machine Learning".
    pub field: String,
    /// Free-text message to the mentor.
    pub message: String,
    #[serde(default)]
    pub status: MentorshipStatus,
    pub request_date: NaiveDate,
}

/// Caller-supplied fields for a new mentorship request.
#[derive(Debug, Clone, Default)]
pub struct NewMentorshipRequest {
    pub mentor_id: String,
    pub mentor_name: String,
    pub field: String,
    pub message: String,
}

/// Status of a job application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Reviewed,
    Accepted,
    Rejected,
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Reviewed => write!(f, "Reviewed"),
            Self::Accepted => write!(f, "Accepted"),
            Self::Rejected => write!(f, "Rejected"),
        }
    }
}

impl std::str::FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "reviewed" => Ok(Self::Reviewed),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            _ => Err(format!(
                "Unknown application status: {s}. Use: pending, reviewed, accepted, rejected"
            )),
        }
    }
}

/// A student's application to a job posting.
///
/// References the job by id only; the job may have been deleted since.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Unique identifier within the application collection.
    pub id: String,
    pub job_id: String,
    pub student_id: String,
    pub student_name: String,
    /// Resume reference (a filename or link, never fetched).
    pub resume: String,
    pub cover_letter: String,
    pub applied_date: NaiveDate,
    #[serde(default)]
    pub status: ApplicationStatus,
}

/// Caller-supplied fields for a new job application.
#[derive(Debug, Clone, Default)]
pub struct NewApplication {
    pub job_id: String,
    pub resume: String,
    pub cover_letter: String,
}

/// One side of a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub role: Role,
    /// Avatar initials.
    pub avatar: String,
}

/// Snapshot of the most recent message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastMessage {
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// A two-party conversation.
///
/// Nothing deduplicates conversations per participant pair; starting a chat
/// with the same counterpart twice yields two records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    /// Unique identifier within the conversation collection.
    pub id: String,
    pub participants: [Participant; 2],
    #[serde(default)]
    pub last_message: Option<LastMessage>,
    /// Unread-message counter, zeroed by a read.
    #[serde(default)]
    pub unread: u32,
}

impl Conversation {
    /// The participant other than the given member, if any.
    #[must_use]
    pub fn counterpart(&self, member_id: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id != member_id)
    }

    /// Whether the member takes part in this conversation.
    #[must_use]
    pub fn involves(&self, member_id: &str) -> bool {
        self.participants.iter().any(|p| p.id == member_id)
    }
}

/// A single message within a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique identifier within the message collection.
    pub id: String,
    /// Conversation reference; never checked for existence.
    pub conversation_id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Set once the counterpart reads the conversation.
    #[serde(default)]
    pub read: bool,
}

/// Category of a donation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DonationCategory {
    Scholarship,
    Infrastructure,
    Research,
    #[default]
    General,
    Emergency,
}

impl DonationCategory {
    /// All categories, in display order.
    pub const ALL: [Self; 5] = [
        Self::Scholarship,
        Self::Infrastructure,
        Self::Research,
        Self::General,
        Self::Emergency,
    ];
}

impl std::fmt::Display for DonationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scholarship => write!(f, "Scholarship"),
            Self::Infrastructure => write!(f, "Infrastructure"),
            Self::Research => write!(f, "Research"),
            Self::General => write!(f, "General"),
            Self::Emergency => write!(f, "Emergency"),
        }
    }
}

impl std::str::FromStr for DonationCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scholarship" => Ok(Self::Scholarship),
            "infrastructure" => Ok(Self::Infrastructure),
            "research" => Ok(Self::Research),
            "general" => Ok(Self::General),
            "emergency" => Ok(Self::Emergency),
            _ => Err(format!(
                "Unknown donation category: {s}. Use: scholarship, infrastructure, research, general, emergency"
            )),
        }
    }
}

/// A completed donation. Immutable once recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    /// Unique identifier within the donation collection.
    pub id: String,
    pub donor_id: String,
    pub donor_name: String,
    /// Currency-agnostic amount.
    pub amount: f64,
    /// What the donation supports, free text.
    pub purpose: String,
    pub category: DonationCategory,
    #[serde(default)]
    pub message: Option<String>,
    pub date: NaiveDate,
    /// Payment method tag, e.g. "card" or "transfer". Never charged.
    pub payment_method: String,
    /// Hide the donor name in listings.
    #[serde(default)]
    pub anonymous: bool,
}

impl Donation {
    /// Donor name as shown in listings, masking anonymous donors.
    #[must_use]
    pub fn display_donor(&self) -> &str {
        if self.anonymous {
            "Anonymous"
        } else {
            &self.donor_name
        }
    }
}

/// Caller-supplied fields for a new donation.
#[derive(Debug, Clone, Default)]
pub struct NewDonation {
    pub amount: f64,
    pub purpose: String,
    pub category: DonationCategory,
    pub message: Option<String>,
    pub payment_method: String,
    pub anonymous: bool,
}

/// Derived platform statistics, recomputed from the collections on demand.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    pub alumni_count: usize,
    pub student_count: usize,
    /// Jobs still accepting applications.
    pub open_jobs: usize,
    pub total_jobs: usize,
    pub total_applications: usize,
    pub upcoming_events: usize,
    /// Sum of registration counters across all events.
    pub total_registrations: u64,
    pub pending_mentorships: usize,
    pub accepted_mentorships: usize,
    pub conversation_count: usize,
    pub message_count: usize,
    pub donation_count: usize,
    /// Sum of all donation amounts.
    pub donation_total: f64,
    /// Per-category donation sums, in category display order.
    pub donations_by_category: Vec<(DonationCategory, f64)>,
    /// Sum of gamification points across all members.
    pub total_points: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversation_counterpart() {
        let conv = Conversation {
            id: "c1".into(),
            participants: [
                Participant {
                    id: "a1".into(),
                    name: "Sarah Chen".into(),
                    role: Role::Alumni,
                    avatar: "SC".into(),
                },
                Participant {
                    id: "s1".into(),
                    name: "Priya Nair".into(),
                    role: Role::Student,
                    avatar: "PN".into(),
                },
            ],
            last_message: None,
            unread: 0,
        };

        assert_eq!(conv.counterpart("a1").map(|p| p.id.as_str()), Some("s1"));
        assert!(conv.involves("s1"));
        assert!(!conv.involves("s2"));
    }

    #[test]
    fn test_anonymous_donor_masked() {
        let donation = Donation {
            id: "d1".into(),
            donor_id: "a1".into(),
            donor_name: "Sarah Chen".into(),
            amount: 250.0,
            purpose: "Lab equipment".into(),
            category: DonationCategory::Infrastructure,
            message: None,
            date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            payment_method: "card".into(),
            anonymous: true,
        };
        assert_eq!(donation.display_donor(), "Anonymous");
    }

    #[test]
    fn test_status_parsing() {
        assert!(matches!(
            "accepted".parse::<MentorshipStatus>(),
            Ok(MentorshipStatus::Accepted)
        ));
        assert!(matches!(
            "reviewed".parse::<ApplicationStatus>(),
            Ok(ApplicationStatus::Reviewed)
        ));
        assert!(matches!(
            "emergency".parse::<DonationCategory>(),
            Ok(DonationCategory::Emergency)
        ));
        assert!("open".parse::<MentorshipStatus>().is_err());
    }
}
