//! Core domain models for the engagement platform.
//!
//! These models represent the member, job board, and event entities held by
//! the in-memory store. Identifiers are opaque strings, unique within their
//! collection; nothing enforces references between collections.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Role of a platform member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Graduated member offering jobs and mentorship.
    Alumni,
    /// Currently enrolled member.
    #[default]
    Student,
    /// Platform administrator.
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Alumni => write!(f, "Alumni"),
            Self::Student => write!(f, "Student"),
            Self::Admin => write!(f, "Admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "alumni" | "alum" => Ok(Self::Alumni),
            "student" => Ok(Self::Student),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("Unknown role: {s}. Use: alumni, student, admin")),
        }
    }
}

/// Social profile links attached to a member.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SocialLinks {
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// A single education entry on a member profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    /// Institution name.
    pub institution: String,
    /// Degree or program title.
    pub degree: String,
    /// Free-text duration, e.g. "2015 - 2019".
    pub years: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
}

/// A single work-experience entry on a member profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// Position title.
    pub title: String,
    /// Employing organization.
    pub organization: String,
    /// Free-text duration, e.g. "2020 - Present".
    pub years: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
}

/// A dated gamification activity record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// What the member did.
    pub description: String,
    /// Points awarded for it.
    pub points: u32,
    /// When it happened.
    pub date: NaiveDate,
}

/// A platform member (alumni, student, or admin).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier within the member collections.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email (never verified; there is no real authentication).
    pub email: String,
    /// Member role.
    pub role: Role,
    /// Current organization (company or school).
    #[serde(default)]
    pub organization: String,
    /// Current position or program title.
    #[serde(default)]
    pub title: String,
    /// Skill tags.
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub bio: String,
    /// Social profile links.
    #[serde(default)]
    pub social: SocialLinks,
    /// Avatar initials shown next to the name.
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    /// Achievement strings shown on the profile.
    #[serde(default)]
    pub achievements: Vec<String>,
    /// Gamification points balance.
    #[serde(default)]
    pub points: u32,
    /// Earned badge names (set semantics, no duplicates).
    #[serde(default)]
    pub badges: Vec<String>,
    /// Point-award history, oldest first.
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl User {
    /// Synthesize a default member record for an email with no matching
    /// profile. Used as the current actor after an unknown login; it is not
    /// inserted into any collection.
    #[must_use]
    pub fn placeholder(id: impl Into<String>, email: &str, role: Role) -> Self {
        let name = email
            .split('@')
            .next()
            .unwrap_or("member")
            .replace(['.', '_'], " ");

        Self {
            id: id.into(),
            avatar: initials(&name),
            name,
            email: email.to_string(),
            role,
            organization: String::new(),
            title: String::new(),
            skills: Vec::new(),
            location: String::new(),
            bio: String::new(),
            social: SocialLinks::default(),
            education: Vec::new(),
            experience: Vec::new(),
            achievements: Vec::new(),
            points: 0,
            badges: Vec::new(),
            activities: Vec::new(),
        }
    }

    /// Whether the member already holds a badge.
    #[must_use]
    pub fn has_badge(&self, badge: &str) -> bool {
        self.badges.iter().any(|b| b == badge)
    }

    /// Award points and record the activity.
    pub fn award_points(&mut self, points: u32, description: impl Into<String>) {
        self.points += points;
        self.activities.push(Activity {
            description: description.into(),
            points,
            date: Utc::now().date_naive(),
        });
    }

    /// Grant a badge if the member does not already hold it.
    pub fn grant_badge(&mut self, badge: &str) {
        if !self.has_badge(badge) {
            self.badges.push(badge.to_string());
        }
    }
}

/// Derive avatar initials from a display name.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase()
}

/// Caller-supplied fields for registering a new member.
#[derive(Debug, Clone, Default)]
pub struct NewProfile {
    pub name: String,
    pub email: String,
    /// Defaults to [`Role::Student`] when absent.
    pub role: Option<Role>,
    pub organization: String,
    pub title: String,
    pub skills: Vec<String>,
    pub location: String,
    pub bio: String,
}

/// Partial update for a member profile. Only set fields are applied.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub organization: Option<String>,
    pub title: Option<String>,
    pub skills: Option<Vec<String>>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub social: Option<SocialLinks>,
    pub education: Option<Vec<EducationEntry>>,
    pub experience: Option<Vec<ExperienceEntry>>,
    pub achievements: Option<Vec<String>>,
}

impl UserPatch {
    /// Apply the set fields to a member record, leaving the rest untouched.
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.avatar = initials(&name);
            user.name = name;
        }
        if let Some(organization) = self.organization {
            user.organization = organization;
        }
        if let Some(title) = self.title {
            user.title = title;
        }
        if let Some(skills) = self.skills {
            user.skills = skills;
        }
        if let Some(location) = self.location {
            user.location = location;
        }
        if let Some(bio) = self.bio {
            user.bio = bio;
        }
        if let Some(social) = self.social {
            user.social = social;
        }
        if let Some(education) = self.education {
            user.education = education;
        }
        if let Some(experience) = self.experience {
            user.experience = experience;
        }
        if let Some(achievements) = self.achievements {
            user.achievements = achievements;
        }
    }
}

/// Employment type of a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EmploymentType {
    #[default]
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Internship,
}

impl std::fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FullTime => write!(f, "Full-time"),
            Self::PartTime => write!(f, "Part-time"),
            Self::Contract => write!(f, "Contract"),
            Self::Internship => write!(f, "Internship"),
        }
    }
}

impl std::str::FromStr for EmploymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full-time" | "fulltime" | "full" => Ok(Self::FullTime),
            "part-time" | "parttime" | "part" => Ok(Self::PartTime),
            "contract" => Ok(Self::Contract),
            "internship" | "intern" => Ok(Self::Internship),
            _ => Err(format!(
                "Unknown employment type: {s}. Use: full-time, part-time, contract, internship"
            )),
        }
    }
}

/// Status of a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Open,
    Closed,
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "Open"),
            Self::Closed => write!(f, "Closed"),
        }
    }
}

/// A job posting on the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Unique identifier within the job collection.
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub employment_type: EmploymentType,
    /// Free-text description.
    pub description: String,
    /// Requirement strings, in posting order.
    #[serde(default)]
    pub requirements: Vec<String>,
    /// Id of the posting member.
    pub posted_by: String,
    /// Display name of the posting member.
    pub posted_by_name: String,
    pub posted_date: DateTime<Utc>,
    /// Number of applications received.
    #[serde(default)]
    pub applicants: u32,
    #[serde(default)]
    pub status: JobStatus,
}

impl Job {
    /// Whether the posting still accepts applications.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.status, JobStatus::Open)
    }
}

/// Caller-supplied fields for a new job posting.
#[derive(Debug, Clone, Default)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub description: String,
    pub requirements: Vec<String>,
}

/// Partial update for a job posting.
#[derive(Debug, Clone, Default)]
pub struct JobPatch {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<EmploymentType>,
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub status: Option<JobStatus>,
}

impl JobPatch {
    /// Apply the set fields to a posting, leaving the rest untouched.
    pub fn apply(self, job: &mut Job) {
        if let Some(title) = self.title {
            job.title = title;
        }
        if let Some(company) = self.company {
            job.company = company;
        }
        if let Some(location) = self.location {
            job.location = location;
        }
        if let Some(employment_type) = self.employment_type {
            job.employment_type = employment_type;
        }
        if let Some(description) = self.description {
            job.description = description;
        }
        if let Some(requirements) = self.requirements {
            job.requirements = requirements;
        }
        if let Some(status) = self.status {
            job.status = status;
        }
    }
}

/// Type of a platform event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EventType {
    Reunion,
    Webinar,
    Workshop,
    #[default]
    Networking,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reunion => write!(f, "Reunion"),
            Self::Webinar => write!(f, "Webinar"),
            Self::Workshop => write!(f, "Workshop"),
            Self::Networking => write!(f, "Networking"),
        }
    }
}

impl std::str::FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reunion" => Ok(Self::Reunion),
            "webinar" => Ok(Self::Webinar),
            "workshop" => Ok(Self::Workshop),
            "networking" => Ok(Self::Networking),
            _ => Err(format!(
                "Unknown event type: {s}. Use: reunion, webinar, workshop, networking"
            )),
        }
    }
}

/// Status of a platform event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Upcoming,
    Completed,
    Cancelled,
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upcoming => write!(f, "Upcoming"),
            Self::Completed => write!(f, "Completed"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// A platform event (reunion, webinar, workshop, networking).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier within the event collection.
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    /// Free-text time, e.g. "18:00 - 20:00".
    pub time: String,
    pub location: String,
    pub description: String,
    pub event_type: EventType,
    /// Number of registrations received.
    #[serde(default)]
    pub registered: u32,
    /// Descriptive capacity. Registration is never blocked by it.
    #[serde(default)]
    pub max_capacity: Option<u32>,
    /// Display name of the organizing member.
    pub organizer: String,
    #[serde(default)]
    pub status: EventStatus,
}

impl Event {
    /// Whether registrations have reached the announced capacity.
    /// Informational only; registration still goes through.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.max_capacity.is_some_and(|cap| self.registered >= cap)
    }
}

/// Caller-supplied fields for a new event.
#[derive(Debug, Clone, Default)]
pub struct NewEvent {
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub description: String,
    pub event_type: EventType,
    pub max_capacity: Option<u32>,
}

/// Partial update for an event.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub event_type: Option<EventType>,
    pub max_capacity: Option<Option<u32>>,
    pub status: Option<EventStatus>,
}

impl EventPatch {
    /// Apply the set fields to an event, leaving the rest untouched.
    pub fn apply(self, event: &mut Event) {
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(date) = self.date {
            event.date = date;
        }
        if let Some(time) = self.time {
            event.time = time;
        }
        if let Some(location) = self.location {
            event.location = location;
        }
        if let Some(description) = self.description {
            event.description = description;
        }
        if let Some(event_type) = self.event_type {
            event.event_type = event_type;
        }
        if let Some(max_capacity) = self.max_capacity {
            event.max_capacity = max_capacity;
        }
        if let Some(status) = self.status {
            event.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Sarah Chen"), "SC");
        assert_eq!(initials("priya"), "P");
        assert_eq!(initials("Jean Claude Van Damme"), "JC");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_placeholder_user_from_email() {
        let user = User::placeholder("u-1", "maya.patel@example.com", Role::Alumni);
        assert_eq!(user.name, "maya patel");
        assert_eq!(user.avatar, "MP");
        assert_eq!(user.role, Role::Alumni);
        assert_eq!(user.points, 0);
    }

    #[test]
    fn test_badge_grant_is_idempotent() {
        let mut user = User::placeholder("u-1", "a@b.c", Role::Student);
        user.grant_badge("Generous Donor");
        user.grant_badge("Generous Donor");
        assert_eq!(user.badges, vec!["Generous Donor".to_string()]);
    }

    #[test]
    fn test_award_points_records_activity() {
        let mut user = User::placeholder("u-1", "a@b.c", Role::Student);
        user.award_points(100, "Donated to scholarship fund");
        user.award_points(50, "Attended workshop");
        assert_eq!(user.points, 150);
        assert_eq!(user.activities.len(), 2);
        assert_eq!(user.activities[0].points, 100);
    }

    #[test]
    fn test_job_patch_applies_only_set_fields() {
        let mut job = Job {
            id: "j1".into(),
            title: "Backend Engineer".into(),
            company: "Acme".into(),
            location: "Remote".into(),
            employment_type: EmploymentType::FullTime,
            description: "desc".into(),
            requirements: vec!["Rust".into()],
            posted_by: "a1".into(),
            posted_by_name: "Sarah Chen".into(),
            posted_date: Utc::now(),
            applicants: 3,
            status: JobStatus::Open,
        };

        JobPatch {
            title: Some("Senior Backend Engineer".into()),
            status: Some(JobStatus::Closed),
            ..JobPatch::default()
        }
        .apply(&mut job);

        assert_eq!(job.title, "Senior Backend Engineer");
        assert_eq!(job.status, JobStatus::Closed);
        // Untouched fields survive.
        assert_eq!(job.company, "Acme");
        assert_eq!(job.applicants, 3);
    }

    #[test]
    fn test_employment_type_from_str() {
        assert!(matches!(
            "full-time".parse::<EmploymentType>(),
            Ok(EmploymentType::FullTime)
        ));
        assert!(matches!(
            "intern".parse::<EmploymentType>(),
            Ok(EmploymentType::Internship)
        ));
        assert!("freelance".parse::<EmploymentType>().is_err());
    }

    #[test]
    fn test_event_is_full_is_descriptive() {
        let event = Event {
            id: "e1".into(),
            title: "Reunion".into(),
            date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            time: "18:00".into(),
            location: "Main Hall".into(),
            description: String::new(),
            event_type: EventType::Reunion,
            registered: 80,
            max_capacity: Some(80),
            organizer: "Alumni Office".into(),
            status: EventStatus::Upcoming,
        };
        assert!(event.is_full());
    }
}
