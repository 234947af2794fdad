//! The in-memory domain store.
//!
//! Holds every collection of the engagement platform plus the current-actor
//! reference, and exposes the mutation operations the rest of the crate
//! drives. All mutations are total functions: a missing id is silently
//! ignored, never an error. State lives only for the life of the process.

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{
    initials, AppConfig, Application, ApplicationStatus, Conversation, Donation, Event,
    EventPatch, EventStatus, GamificationConfig, Job, JobPatch, JobStatus, LastMessage,
    MentorshipRequest, MentorshipStatus, Message, NewApplication, NewDonation, NewEvent, NewJob,
    NewMentorshipRequest, NewProfile, Participant, Role, User, UserPatch,
};

/// Generate an opaque identifier for a newly created record.
fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Identity used for actor-attributed records when nobody is signed in.
const GUEST_ID: &str = "guest";
const GUEST_NAME: &str = "Guest";

/// The shared domain-state store.
///
/// Constructed explicitly and passed by reference to whatever drives it;
/// there is no global instance. One store per process, one logical actor,
/// synchronous mutations only.
#[derive(Debug, Clone)]
pub struct Store {
    gamification: GamificationConfig,
    pub(crate) alumni: Vec<User>,
    pub(crate) students: Vec<User>,
    pub(crate) jobs: Vec<Job>,
    pub(crate) events: Vec<Event>,
    pub(crate) mentorship_requests: Vec<MentorshipRequest>,
    pub(crate) applications: Vec<Application>,
    pub(crate) conversations: Vec<Conversation>,
    pub(crate) messages: Vec<Message>,
    pub(crate) donations: Vec<Donation>,
    current_actor: Option<User>,
}

impl Store {
    /// Create an empty store with the given configuration.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            gamification: config.gamification.clone(),
            alumni: Vec::new(),
            students: Vec::new(),
            jobs: Vec::new(),
            events: Vec::new(),
            mentorship_requests: Vec::new(),
            applications: Vec::new(),
            conversations: Vec::new(),
            messages: Vec::new(),
            donations: Vec::new(),
            current_actor: None,
        }
    }

    /// Clear every collection and the current actor, keeping configuration.
    pub fn reset(&mut self) {
        self.alumni.clear();
        self.students.clear();
        self.jobs.clear();
        self.events.clear();
        self.mentorship_requests.clear();
        self.applications.clear();
        self.conversations.clear();
        self.messages.clear();
        self.donations.clear();
        self.current_actor = None;
    }

    // --- Read accessors -------------------------------------------------

    #[must_use]
    pub fn alumni(&self) -> &[User] {
        &self.alumni
    }

    #[must_use]
    pub fn students(&self) -> &[User] {
        &self.students
    }

    #[must_use]
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[must_use]
    pub fn mentorship_requests(&self) -> &[MentorshipRequest] {
        &self.mentorship_requests
    }

    #[must_use]
    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    #[must_use]
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn donations(&self) -> &[Donation] {
        &self.donations
    }

    /// The signed-in identity, if any.
    ///
    /// This is a snapshot taken at sign-in or registration; later edits to
    /// the member collections do not flow back into it.
    #[must_use]
    pub fn current_actor(&self) -> Option<&User> {
        self.current_actor.as_ref()
    }

    /// Find a member by id across both member collections.
    #[must_use]
    pub fn find_member(&self, id: &str) -> Option<&User> {
        self.alumni
            .iter()
            .chain(self.students.iter())
            .find(|u| u.id == id)
    }

    #[must_use]
    pub fn find_job(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    #[must_use]
    pub fn find_event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn find_conversation(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    /// Messages of one conversation in timestamp order.
    #[must_use]
    pub fn conversation_messages(&self, conversation_id: &str) -> Vec<&Message> {
        let mut messages: Vec<&Message> = self
            .messages
            .iter()
            .filter(|m| m.conversation_id == conversation_id)
            .collect();
        messages.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        messages
    }

    // --- Session --------------------------------------------------------

    /// Sign in as the member with the given email in the role's collection.
    ///
    /// Never fails: an unknown email yields a synthesized default record as
    /// the actor, without inserting it into any collection. There is no
    /// real authentication.
    pub fn authenticate(&mut self, email: &str, role: Role) {
        let matched = match role {
            Role::Alumni => self.alumni.iter().find(|u| u.email == email),
            Role::Student => self.students.iter().find(|u| u.email == email),
            // Admins are never stored; the actor is always synthesized.
            Role::Admin => None,
        };

        let actor = matched
            .cloned()
            .unwrap_or_else(|| User::placeholder(generate_id(), email, role));

        tracing::debug!(email = %email, role = %role, "Actor signed in");
        self.current_actor = Some(actor);
    }

    /// Clear the current actor. Idempotent.
    pub fn deauthenticate(&mut self) {
        self.current_actor = None;
    }

    /// Register a new member and sign them in.
    ///
    /// The role defaults to student. Alumni and students are inserted into
    /// their collection; an admin registration only becomes the actor.
    /// Returns the generated member id.
    pub fn register_actor(&mut self, profile: NewProfile) -> String {
        let role = profile.role.unwrap_or_default();
        let id = generate_id();

        let user = User {
            id: id.clone(),
            avatar: initials(&profile.name),
            name: profile.name,
            email: profile.email,
            role,
            organization: profile.organization,
            title: profile.title,
            skills: profile.skills,
            location: profile.location,
            bio: profile.bio,
            social: Default::default(),
            education: Vec::new(),
            experience: Vec::new(),
            achievements: Vec::new(),
            points: 0,
            badges: Vec::new(),
            activities: Vec::new(),
        };

        match role {
            Role::Alumni => self.alumni.push(user.clone()),
            Role::Student => self.students.push(user.clone()),
            Role::Admin => {}
        }

        tracing::debug!(id = %id, role = %role, "Member registered");
        self.current_actor = Some(user);
        id
    }

    /// Merge-patch a member record in whichever collection holds the id.
    /// No-op if the id is absent in both.
    pub fn upsert_user_fields(&mut self, id: &str, patch: UserPatch) {
        let record = self
            .alumni
            .iter_mut()
            .chain(self.students.iter_mut())
            .find(|u| u.id == id);

        if let Some(user) = record {
            patch.apply(user);
            tracing::debug!(id = %id, "Member profile updated");
        }
    }

    // --- Job board ------------------------------------------------------

    /// Create a job posting attributed to the current actor.
    /// Returns the generated job id.
    pub fn create_job(&mut self, new: NewJob) -> String {
        let (actor_id, actor_name, _) = self.actor_identity();
        let id = generate_id();

        self.jobs.push(Job {
            id: id.clone(),
            title: new.title,
            company: new.company,
            location: new.location,
            employment_type: new.employment_type,
            description: new.description,
            requirements: new.requirements,
            posted_by: actor_id,
            posted_by_name: actor_name,
            posted_date: Utc::now(),
            applicants: 0,
            status: JobStatus::Open,
        });

        tracing::debug!(id = %id, "Job posted");
        id
    }

    /// Merge-patch a job posting. No-op on a missing id.
    pub fn update_job(&mut self, id: &str, patch: JobPatch) {
        if let Some(job) = self.jobs.iter_mut().find(|j| j.id == id) {
            patch.apply(job);
            tracing::debug!(id = %id, "Job updated");
        }
    }

    /// Remove a job posting. No-op on a missing id.
    pub fn delete_job(&mut self, id: &str) {
        self.jobs.retain(|j| j.id != id);
    }

    // --- Events ---------------------------------------------------------

    /// Create an event organized by the current actor.
    /// Returns the generated event id.
    pub fn create_event(&mut self, new: NewEvent) -> String {
        let (_, actor_name, _) = self.actor_identity();
        let id = generate_id();

        self.events.push(Event {
            id: id.clone(),
            title: new.title,
            date: new.date,
            time: new.time,
            location: new.location,
            description: new.description,
            event_type: new.event_type,
            registered: 0,
            max_capacity: new.max_capacity,
            organizer: actor_name,
            status: EventStatus::Upcoming,
        });

        tracing::debug!(id = %id, "Event created");
        id
    }

    /// Merge-patch an event. No-op on a missing id.
    pub fn update_event(&mut self, id: &str, patch: EventPatch) {
        if let Some(event) = self.events.iter_mut().find(|e| e.id == id) {
            patch.apply(event);
            tracing::debug!(id = %id, "Event updated");
        }
    }

    /// Remove an event. No-op on a missing id.
    pub fn delete_event(&mut self, id: &str) {
        self.events.retain(|e| e.id != id);
    }

    /// Count one registration for an event.
    ///
    /// The counter increments unconditionally: capacity is descriptive and
    /// nothing prevents the same member registering twice.
    pub fn register_for_event(&mut self, id: &str) {
        if let Some(event) = self.events.iter_mut().find(|e| e.id == id) {
            event.registered += 1;
            tracing::debug!(id = %id, registered = event.registered, "Event registration");
        }
    }

    // --- Mentorship -----------------------------------------------------

    /// File a mentorship request from the current actor to a mentor.
    /// Returns the generated request id.
    pub fn create_mentorship_request(&mut self, new: NewMentorshipRequest) -> String {
        let (actor_id, actor_name, _) = self.actor_identity();
        let id = generate_id();

        self.mentorship_requests.push(MentorshipRequest {
            id: id.clone(),
            student_id: actor_id,
            student_name: actor_name,
            mentor_id: new.mentor_id,
            mentor_name: new.mentor_name,
            field: new.field,
            message: new.message,
            status: MentorshipStatus::Pending,
            request_date: Utc::now().date_naive(),
        });

        tracing::debug!(id = %id, "Mentorship requested");
        id
    }

    /// Set a mentorship request's status. Last write wins; transitions are
    /// not restricted. No-op on a missing id.
    pub fn set_mentorship_status(&mut self, id: &str, status: MentorshipStatus) {
        if let Some(request) = self.mentorship_requests.iter_mut().find(|r| r.id == id) {
            request.status = status;
            tracing::debug!(id = %id, status = %status, "Mentorship status set");
        }
    }

    // --- Applications ---------------------------------------------------

    /// File a job application from the current actor and count the
    /// applicant on the referenced job. A missing job id leaves the job
    /// collection unchanged; the application is still recorded.
    /// Returns the generated application id.
    pub fn create_application(&mut self, new: NewApplication) -> String {
        let (actor_id, actor_name, _) = self.actor_identity();
        let id = generate_id();

        if let Some(job) = self.jobs.iter_mut().find(|j| j.id == new.job_id) {
            job.applicants += 1;
        }

        self.applications.push(Application {
            id: id.clone(),
            job_id: new.job_id,
            student_id: actor_id,
            student_name: actor_name,
            resume: new.resume,
            cover_letter: new.cover_letter,
            applied_date: Utc::now().date_naive(),
            status: ApplicationStatus::Pending,
        });

        tracing::debug!(id = %id, "Application filed");
        id
    }

    /// Set an application's status. Any value is settable. No-op on a
    /// missing id.
    pub fn set_application_status(&mut self, id: &str, status: ApplicationStatus) {
        if let Some(application) = self.applications.iter_mut().find(|a| a.id == id) {
            application.status = status;
            tracing::debug!(id = %id, status = %status, "Application status set");
        }
    }

    // --- Messaging ------------------------------------------------------

    /// Start a conversation between the current actor and another member.
    ///
    /// Always inserts a new record, even when the pair already has one;
    /// callers wanting to continue an existing thread must reuse its id.
    /// Counterpart display data is resolved from the member collections
    /// when possible, placeholder values otherwise.
    /// Returns the generated conversation id.
    pub fn create_conversation(&mut self, other_id: &str) -> String {
        let (actor_id, actor_name, actor_role) = self.actor_identity();
        let id = generate_id();

        let counterpart = self.find_member(other_id).map_or_else(
            || Participant {
                id: other_id.to_string(),
                name: "New contact".to_string(),
                role: Role::Student,
                avatar: "?".to_string(),
            },
            |user| Participant {
                id: user.id.clone(),
                name: user.name.clone(),
                role: user.role,
                avatar: user.avatar.clone(),
            },
        );

        self.conversations.push(Conversation {
            id: id.clone(),
            participants: [
                Participant {
                    avatar: initials(&actor_name),
                    id: actor_id,
                    name: actor_name,
                    role: actor_role,
                },
                counterpart,
            ],
            last_message: None,
            unread: 0,
        });

        tracing::debug!(id = %id, "Conversation started");
        id
    }

    /// Send a message from the current actor into a conversation.
    ///
    /// The message is inserted without checking that the conversation
    /// exists; when it does, its last-message snapshot and unread counter
    /// are updated. Returns the generated message id.
    pub fn send_message(&mut self, conversation_id: &str, text: &str) -> String {
        let (actor_id, actor_name, _) = self.actor_identity();
        let id = generate_id();
        let timestamp = Utc::now();

        self.messages.push(Message {
            id: id.clone(),
            conversation_id: conversation_id.to_string(),
            sender_id: actor_id,
            sender_name: actor_name,
            content: text.to_string(),
            timestamp,
            read: false,
        });

        if let Some(conversation) = self
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)
        {
            conversation.last_message = Some(LastMessage {
                text: text.to_string(),
                timestamp,
            });
            conversation.unread += 1;
        }

        tracing::debug!(conversation = %conversation_id, "Message sent");
        id
    }

    /// Mark every message of a conversation read and zero its unread
    /// counter. Idempotent.
    pub fn mark_read(&mut self, conversation_id: &str) {
        for message in self
            .messages
            .iter_mut()
            .filter(|m| m.conversation_id == conversation_id)
        {
            message.read = true;
        }

        if let Some(conversation) = self
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)
        {
            conversation.unread = 0;
        }
    }

    // --- Donations ------------------------------------------------------

    /// Record a donation by the current actor.
    ///
    /// Inserts the donation and, when the donor exists in a member
    /// collection, awards the configured points and grants the donation
    /// badge (once). Returns the generated donation id.
    pub fn record_donation(&mut self, new: NewDonation) -> String {
        let (actor_id, actor_name, _) = self.actor_identity();
        let id = generate_id();

        self.donations.push(Donation {
            id: id.clone(),
            donor_id: actor_id.clone(),
            donor_name: actor_name,
            amount: new.amount,
            purpose: new.purpose,
            category: new.category,
            message: new.message,
            date: Utc::now().date_naive(),
            payment_method: new.payment_method,
            anonymous: new.anonymous,
        });

        let award = self.gamification.donation_award_points;
        let badge = self.gamification.donation_badge.clone();
        let description = format!("Donated to {}", new.category);

        if let Some(donor) = self
            .alumni
            .iter_mut()
            .chain(self.students.iter_mut())
            .find(|u| u.id == actor_id)
        {
            donor.award_points(award, description);
            donor.grant_badge(&badge);
        }

        tracing::debug!(id = %id, amount = new.amount, "Donation recorded");
        id
    }

    // --- Internal -------------------------------------------------------

    /// Identity (id, name, role) used to attribute actor-created records.
    /// Falls back to a guest identity when nobody is signed in.
    fn actor_identity(&self) -> (String, String, Role) {
        self.current_actor.as_ref().map_or_else(
            || (GUEST_ID.to_string(), GUEST_NAME.to_string(), Role::Student),
            |actor| (actor.id.clone(), actor.name.clone(), actor.role),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EmploymentType;
    use chrono::NaiveDate;

    fn store() -> Store {
        Store::new(&AppConfig::default())
    }

    /// Store with one alumni (sarah) and one student (priya) registered;
    /// the student is left signed in.
    fn populated_store() -> Store {
        let mut store = store();
        store.register_actor(NewProfile {
            name: "Sarah Chen".into(),
            email: "sarah@example.com".into(),
            role: Some(Role::Alumni),
            ..NewProfile::default()
        });
        store.register_actor(NewProfile {
            name: "Priya Nair".into(),
            email: "priya@example.com".into(),
            role: Some(Role::Student),
            ..NewProfile::default()
        });
        store
    }

    fn sample_job() -> NewJob {
        NewJob {
            title: "Backend Engineer".into(),
            company: "Acme".into(),
            location: "Remote".into(),
            employment_type: EmploymentType::FullTime,
            description: "Build services".into(),
            requirements: vec!["Rust".into(), "SQL".into()],
        }
    }

    fn sample_event() -> NewEvent {
        NewEvent {
            title: "Career Workshop".into(),
            date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            time: "18:00 - 20:00".into(),
            location: "Main Hall".into(),
            description: "CV clinic".into(),
            event_type: crate::domain::EventType::Workshop,
            max_capacity: Some(2),
        }
    }

    #[test]
    fn test_create_job_sets_generated_defaults() {
        let mut store = populated_store();
        assert_eq!(store.jobs().len(), 0);

        let id = store.create_job(sample_job());

        assert_eq!(store.jobs().len(), 1);
        let job = store.find_job(&id).unwrap();
        assert_eq!(job.title, "Backend Engineer");
        assert_eq!(job.applicants, 0);
        assert_eq!(job.status, JobStatus::Open);
        assert_eq!(job.posted_date.date_naive(), Utc::now().date_naive());
        assert_eq!(job.posted_by_name, "Priya Nair");
    }

    #[test]
    fn test_insert_then_read_preserves_submitted_fields() {
        let mut store = populated_store();
        let id = store.create_job(sample_job());

        let matching: Vec<_> = store.jobs().iter().filter(|j| j.id == id).collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].requirements, vec!["Rust", "SQL"]);
        assert_eq!(matching[0].company, "Acme");
    }

    #[test]
    fn test_delete_missing_id_leaves_collection_identical() {
        let mut store = populated_store();
        store.create_job(sample_job());
        let before: Vec<String> = store.jobs().iter().map(|j| j.id.clone()).collect();

        store.delete_job("no-such-id");

        let after: Vec<String> = store.jobs().iter().map(|j| j.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let mut store = populated_store();
        let id = store.create_job(sample_job());

        store.update_job(
            "no-such-id",
            JobPatch {
                title: Some("Changed".into()),
                ..JobPatch::default()
            },
        );

        assert_eq!(store.find_job(&id).unwrap().title, "Backend Engineer");
    }

    #[test]
    fn test_update_patches_only_given_fields() {
        let mut store = populated_store();
        let id = store.create_job(sample_job());

        store.update_job(
            &id,
            JobPatch {
                status: Some(JobStatus::Closed),
                ..JobPatch::default()
            },
        );

        let job = store.find_job(&id).unwrap();
        assert_eq!(job.status, JobStatus::Closed);
        assert_eq!(job.title, "Backend Engineer");
        assert_eq!(job.company, "Acme");
    }

    #[test]
    fn test_register_for_event_increments_past_capacity() {
        let mut store = populated_store();
        let id = store.create_event(sample_event());
        let other = store.create_event(NewEvent {
            title: "Reunion".into(),
            ..sample_event()
        });

        // Three registrations against a capacity of two: all counted.
        store.register_for_event(&id);
        store.register_for_event(&id);
        store.register_for_event(&id);

        assert_eq!(store.find_event(&id).unwrap().registered, 3);
        assert_eq!(store.find_event(&other).unwrap().registered, 0);
    }

    #[test]
    fn test_create_application_increments_job_applicants() {
        let mut store = populated_store();
        let job_id = store.create_job(sample_job());

        let app_id = store.create_application(NewApplication {
            job_id: job_id.clone(),
            resume: "priya_cv.pdf".into(),
            cover_letter: "Hello".into(),
        });

        assert_eq!(store.find_job(&job_id).unwrap().applicants, 1);
        assert_eq!(store.applications().len(), 1);
        let application = &store.applications()[0];
        assert_eq!(application.id, app_id);
        assert_eq!(application.status, ApplicationStatus::Pending);
        assert_eq!(application.student_name, "Priya Nair");
    }

    #[test]
    fn test_application_for_missing_job_leaves_jobs_unchanged() {
        let mut store = populated_store();
        let job_id = store.create_job(sample_job());

        store.create_application(NewApplication {
            job_id: "no-such-job".into(),
            resume: "cv.pdf".into(),
            cover_letter: String::new(),
        });

        // The dangling application is still recorded.
        assert_eq!(store.applications().len(), 1);
        assert_eq!(store.find_job(&job_id).unwrap().applicants, 0);
    }

    #[test]
    fn test_donation_awards_points_and_badge_once() {
        let mut store = populated_store();
        let actor_id = store.current_actor().unwrap().id.clone();

        store.record_donation(NewDonation {
            amount: 50.0,
            purpose: "Scholarship fund".into(),
            category: crate::domain::DonationCategory::Scholarship,
            payment_method: "card".into(),
            ..NewDonation::default()
        });
        store.record_donation(NewDonation {
            amount: 25.0,
            purpose: "Lab equipment".into(),
            category: crate::domain::DonationCategory::Infrastructure,
            payment_method: "card".into(),
            ..NewDonation::default()
        });

        let donor = store.find_member(&actor_id).unwrap();
        // Points accrue per call; the badge is granted exactly once.
        assert_eq!(donor.points, 200);
        assert_eq!(donor.badges, vec!["Generous Donor".to_string()]);
        assert_eq!(donor.activities.len(), 2);
        assert_eq!(store.donations().len(), 2);
    }

    #[test]
    fn test_application_status_accepts_any_transition() {
        let mut store = populated_store();
        let job_id = store.create_job(sample_job());
        let app_id = store.create_application(NewApplication {
            job_id,
            resume: "cv.pdf".into(),
            cover_letter: String::new(),
        });

        store.set_application_status(&app_id, ApplicationStatus::Accepted);
        store.set_application_status(&app_id, ApplicationStatus::Pending);

        // No state machine is enforced; the last write stands.
        assert_eq!(store.applications()[0].status, ApplicationStatus::Pending);
    }

    #[test]
    fn test_event_update_and_delete() {
        let mut store = populated_store();
        let id = store.create_event(sample_event());

        store.update_event(
            &id,
            EventPatch {
                status: Some(EventStatus::Cancelled),
                ..EventPatch::default()
            },
        );
        assert_eq!(
            store.find_event(&id).unwrap().status,
            EventStatus::Cancelled
        );
        // Title untouched by the status-only patch.
        assert_eq!(store.find_event(&id).unwrap().title, "Career Workshop");

        store.delete_event(&id);
        assert!(store.find_event(&id).is_none());
    }

    #[test]
    fn test_mentorship_status_is_last_write_wins() {
        let mut store = populated_store();
        let id = store.create_mentorship_request(NewMentorshipRequest {
            mentor_id: "a1".into(),
            mentor_name: "Sarah Chen".into(),
            field: "Machine Learning".into(),
            message: "Would love guidance".into(),
        });

        store.set_mentorship_status(&id, MentorshipStatus::Accepted);
        store.set_mentorship_status(&id, MentorshipStatus::Rejected);

        // Re-transitioning a terminal status is not prevented.
        assert_eq!(
            store.mentorship_requests()[0].status,
            MentorshipStatus::Rejected
        );
    }

    #[test]
    fn test_conversation_pairs_are_not_deduplicated() {
        let mut store = populated_store();
        let alumni_id = store.alumni()[0].id.clone();

        let first = store.create_conversation(&alumni_id);
        let second = store.create_conversation(&alumni_id);

        // Two calls, two records. Callers wanting one thread per pair must
        // reuse the existing conversation id.
        assert_ne!(first, second);
        assert_eq!(store.conversations().len(), 2);
    }

    #[test]
    fn test_conversation_resolves_known_counterpart() {
        let mut store = populated_store();
        let alumni_id = store.alumni()[0].id.clone();

        let id = store.create_conversation(&alumni_id);

        let conversation = store.find_conversation(&id).unwrap();
        let counterpart = conversation.counterpart(&store.students()[0].id).unwrap();
        assert_eq!(counterpart.name, "Sarah Chen");
        assert_eq!(counterpart.role, Role::Alumni);
    }

    #[test]
    fn test_conversation_placeholder_for_unknown_counterpart() {
        let mut store = populated_store();
        let id = store.create_conversation("no-such-member");

        let conversation = store.find_conversation(&id).unwrap();
        assert_eq!(conversation.participants[1].name, "New contact");
    }

    #[test]
    fn test_send_message_updates_snapshot_and_unread() {
        let mut store = populated_store();
        let alumni_id = store.alumni()[0].id.clone();
        let conv_id = store.create_conversation(&alumni_id);

        store.send_message(&conv_id, "Hi Sarah!");
        store.send_message(&conv_id, "Do you have time this week?");

        let conversation = store.find_conversation(&conv_id).unwrap();
        assert_eq!(conversation.unread, 2);
        assert_eq!(
            conversation.last_message.as_ref().unwrap().text,
            "Do you have time this week?"
        );
        assert_eq!(store.conversation_messages(&conv_id).len(), 2);
    }

    #[test]
    fn test_send_message_without_conversation_still_inserts() {
        let mut store = populated_store();
        store.send_message("no-such-conversation", "hello?");

        assert_eq!(store.messages().len(), 1);
        assert_eq!(store.conversations().len(), 0);
    }

    #[test]
    fn test_mark_read_is_idempotent() {
        let mut store = populated_store();
        let alumni_id = store.alumni()[0].id.clone();
        let conv_id = store.create_conversation(&alumni_id);
        store.send_message(&conv_id, "ping");

        store.mark_read(&conv_id);
        store.mark_read(&conv_id);

        assert_eq!(store.find_conversation(&conv_id).unwrap().unread, 0);
        assert!(store.conversation_messages(&conv_id)[0].read);
    }

    #[test]
    fn test_authenticate_unknown_email_synthesizes_actor() {
        let mut store = store();
        store.authenticate("nobody@example.com", Role::Alumni);

        let actor = store.current_actor().unwrap();
        assert_eq!(actor.email, "nobody@example.com");
        assert_eq!(actor.role, Role::Alumni);
        // The synthesized record is not inserted anywhere.
        assert_eq!(store.alumni().len(), 0);
    }

    #[test]
    fn test_authenticate_matches_existing_record() {
        let mut store = populated_store();
        store.deauthenticate();

        store.authenticate("sarah@example.com", Role::Alumni);

        assert_eq!(store.current_actor().unwrap().name, "Sarah Chen");
    }

    #[test]
    fn test_deauthenticate_is_idempotent() {
        let mut store = populated_store();
        store.deauthenticate();
        store.deauthenticate();
        assert!(store.current_actor().is_none());
    }

    #[test]
    fn test_register_actor_defaults_to_student() {
        let mut store = store();
        store.register_actor(NewProfile {
            name: "Omar Haddad".into(),
            email: "omar@example.com".into(),
            role: None,
            ..NewProfile::default()
        });

        assert_eq!(store.students().len(), 1);
        assert_eq!(store.current_actor().unwrap().role, Role::Student);
    }

    #[test]
    fn test_upsert_user_fields_searches_both_collections() {
        let mut store = populated_store();
        let alumni_id = store.alumni()[0].id.clone();
        let student_id = store.students()[0].id.clone();

        store.upsert_user_fields(
            &alumni_id,
            UserPatch {
                location: Some("Berlin".into()),
                ..UserPatch::default()
            },
        );
        store.upsert_user_fields(
            &student_id,
            UserPatch {
                bio: Some("Final-year CS".into()),
                ..UserPatch::default()
            },
        );
        store.upsert_user_fields(
            "no-such-member",
            UserPatch {
                name: Some("Ghost".into()),
                ..UserPatch::default()
            },
        );

        assert_eq!(store.alumni()[0].location, "Berlin");
        assert_eq!(store.students()[0].bio, "Final-year CS");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut store = populated_store();
        store.create_job(sample_job());
        store.create_event(sample_event());

        store.reset();

        assert!(store.jobs().is_empty());
        assert!(store.events().is_empty());
        assert!(store.alumni().is_empty());
        assert!(store.current_actor().is_none());
    }
}
