//! Bundled sample dataset.
//!
//! Builds the deterministic mock collections every command starts from, so
//! listings and tests have stable content. Seeded records use short
//! readable ids; only records created at runtime get generated ids.

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::{
    Activity, AppConfig, Application, ApplicationStatus, Conversation, Donation,
    DonationCategory, EducationEntry, EmploymentType, Event, EventStatus, EventType,
    ExperienceEntry, Job, JobStatus, LastMessage, MentorshipRequest, MentorshipStatus, Message,
    Participant, Role, SocialLinks, User,
};

use super::store::Store;

/// Build a store pre-filled with the sample dataset, honoring the
/// `[seed] enabled` setting (an empty store when disabled).
#[must_use]
pub fn seeded_store(config: &AppConfig) -> Store {
    let mut store = Store::new(config);
    if !config.seed.enabled {
        return store;
    }

    store.alumni = alumni();
    store.students = students();
    store.jobs = jobs();
    store.events = events();
    store.mentorship_requests = mentorship_requests();
    store.applications = applications();
    store.conversations = conversations();
    store.messages = messages();
    store.donations = donations();

    tracing::info!(
        alumni = store.alumni.len(),
        students = store.students.len(),
        jobs = store.jobs.len(),
        events = store.events.len(),
        "Seeded sample dataset"
    );

    store
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .unwrap_or_default()
        .and_utc()
}

fn alumni() -> Vec<User> {
    vec![
        User {
            id: "a1".into(),
            name: "Sarah Chen".into(),
            email: "sarah.chen@example.com".into(),
            role: Role::Alumni,
            organization: "TechNova".into(),
            title: "Engineering Manager".into(),
            skills: vec!["Rust".into(), "Distributed Systems".into(), "Leadership".into()],
            location: "Berlin".into(),
            bio: "Class of 2015. Building data infrastructure, happy to mentor.".into(),
            social: SocialLinks {
                linkedin: Some("https://linkedin.com/in/sarahchen".into()),
                twitter: None,
                website: Some("https://sarahchen.dev".into()),
            },
            avatar: "SC".into(),
            education: vec![EducationEntry {
                institution: "State University".into(),
                degree: "BSc Computer Science".into(),
                years: "2011 - 2015".into(),
                description: "Graduated with honors".into(),
            }],
            experience: vec![
                ExperienceEntry {
                    title: "Engineering Manager".into(),
                    organization: "TechNova".into(),
                    years: "2021 - Present".into(),
                    description: "Leads the storage platform group".into(),
                },
                ExperienceEntry {
                    title: "Senior Engineer".into(),
                    organization: "CloudWorks".into(),
                    years: "2017 - 2021".into(),
                    description: String::new(),
                },
            ],
            achievements: vec!["Distinguished Alumni Award 2024".into()],
            points: 550,
            badges: vec!["Mentor".into(), "Generous Donor".into()],
            activities: vec![
                Activity {
                    description: "Accepted a mentorship request".into(),
                    points: 50,
                    date: date(2026, 2, 10),
                },
                Activity {
                    description: "Donated to Scholarship".into(),
                    points: 100,
                    date: date(2026, 3, 1),
                },
            ],
        },
        User {
            id: "a2".into(),
            name: "Daniel Okafor".into(),
            email: "daniel.okafor@example.com".into(),
            role: Role::Alumni,
            organization: "FinEdge".into(),
            title: "Product Lead".into(),
            skills: vec!["Product Strategy".into(), "Fintech".into()],
            location: "London".into(),
            bio: "Class of 2012. Product leadership in payments.".into(),
            social: SocialLinks {
                linkedin: Some("https://linkedin.com/in/dokafor".into()),
                ..SocialLinks::default()
            },
            avatar: "DO".into(),
            education: vec![EducationEntry {
                institution: "State University".into(),
                degree: "BSc Economics".into(),
                years: "2008 - 2012".into(),
                description: String::new(),
            }],
            experience: vec![ExperienceEntry {
                title: "Product Lead".into(),
                organization: "FinEdge".into(),
                years: "2019 - Present".into(),
                description: String::new(),
            }],
            achievements: Vec::new(),
            points: 300,
            badges: vec!["Generous Donor".into()],
            activities: vec![Activity {
                description: "Donated to Infrastructure".into(),
                points: 100,
                date: date(2026, 4, 18),
            }],
        },
        User {
            id: "a3".into(),
            name: "Elena Rodrigues".into(),
            email: "elena.rodrigues@example.com".into(),
            role: Role::Alumni,
            organization: "BioForm Labs".into(),
            title: "Research Scientist".into(),
            skills: vec!["Bioinformatics".into(), "Python".into(), "Grant Writing".into()],
            location: "Lisbon".into(),
            bio: "Class of 2016. Computational biology, open to research chats.".into(),
            social: SocialLinks::default(),
            avatar: "ER".into(),
            education: vec![
                EducationEntry {
                    institution: "State University".into(),
                    degree: "BSc Biology".into(),
                    years: "2012 - 2016".into(),
                    description: String::new(),
                },
                EducationEntry {
                    institution: "Coastal Institute".into(),
                    degree: "PhD Bioinformatics".into(),
                    years: "2016 - 2021".into(),
                    description: "Thesis on protein folding pipelines".into(),
                },
            ],
            experience: vec![ExperienceEntry {
                title: "Research Scientist".into(),
                organization: "BioForm Labs".into(),
                years: "2021 - Present".into(),
                description: String::new(),
            }],
            achievements: vec!["Young Researcher Prize 2023".into()],
            points: 400,
            badges: vec!["Generous Donor".into()],
            activities: vec![Activity {
                description: "Donated to Research".into(),
                points: 100,
                date: date(2026, 5, 2),
            }],
        },
        User {
            id: "a4".into(),
            name: "Tomas Novak".into(),
            email: "tomas.novak@example.com".into(),
            role: Role::Alumni,
            organization: "Freelance".into(),
            title: "Design Consultant".into(),
            skills: vec!["UX".into(), "Branding".into()],
            location: "Prague".into(),
            bio: "Class of 2018. Independent design practice.".into(),
            social: SocialLinks {
                website: Some("https://novak.design".into()),
                ..SocialLinks::default()
            },
            avatar: "TN".into(),
            education: Vec::new(),
            experience: Vec::new(),
            achievements: Vec::new(),
            points: 75,
            badges: Vec::new(),
            activities: Vec::new(),
        },
    ]
}

fn students() -> Vec<User> {
    vec![
        User {
            id: "s1".into(),
            name: "Priya Nair".into(),
            email: "priya.nair@example.com".into(),
            role: Role::Student,
            organization: "State University".into(),
            title: "CS, final year".into(),
            skills: vec!["Rust".into(), "Machine Learning".into()],
            location: "Campus North".into(),
            bio: "Final-year CS student interested in systems and ML.".into(),
            social: SocialLinks::default(),
            avatar: "PN".into(),
            education: vec![EducationEntry {
                institution: "State University".into(),
                degree: "BSc Computer Science".into(),
                years: "2023 - 2027".into(),
                description: String::new(),
            }],
            experience: vec![ExperienceEntry {
                title: "Summer Intern".into(),
                organization: "CloudWorks".into(),
                years: "2025".into(),
                description: "Worked on internal tooling".into(),
            }],
            achievements: Vec::new(),
            points: 120,
            badges: vec!["Early Adopter".into()],
            activities: vec![Activity {
                description: "Completed profile".into(),
                points: 20,
                date: date(2026, 1, 15),
            }],
        },
        User {
            id: "s2".into(),
            name: "Omar Haddad".into(),
            email: "omar.haddad@example.com".into(),
            role: Role::Student,
            organization: "State University".into(),
            title: "Economics, third year".into(),
            skills: vec!["Data Analysis".into(), "Product".into()],
            location: "Campus East".into(),
            bio: "Exploring product roles in fintech.".into(),
            social: SocialLinks::default(),
            avatar: "OH".into(),
            education: Vec::new(),
            experience: Vec::new(),
            achievements: Vec::new(),
            points: 60,
            badges: Vec::new(),
            activities: Vec::new(),
        },
        User {
            id: "s3".into(),
            name: "Lucy Wang".into(),
            email: "lucy.wang@example.com".into(),
            role: Role::Student,
            organization: "State University".into(),
            title: "Biology, final year".into(),
            skills: vec!["Lab Work".into(), "Python".into()],
            location: "Campus North".into(),
            bio: "Heading toward computational biology.".into(),
            social: SocialLinks::default(),
            avatar: "LW".into(),
            education: Vec::new(),
            experience: Vec::new(),
            achievements: Vec::new(),
            points: 95,
            badges: Vec::new(),
            activities: Vec::new(),
        },
        User {
            id: "s4".into(),
            name: "Mateus Silva".into(),
            email: "mateus.silva@example.com".into(),
            role: Role::Student,
            organization: "State University".into(),
            title: "Design, second year".into(),
            skills: vec!["Figma".into(), "Illustration".into()],
            location: "Campus West".into(),
            bio: String::new(),
            social: SocialLinks::default(),
            avatar: "MS".into(),
            education: Vec::new(),
            experience: Vec::new(),
            achievements: Vec::new(),
            points: 10,
            badges: Vec::new(),
            activities: Vec::new(),
        },
    ]
}

fn jobs() -> Vec<Job> {
    vec![
        Job {
            id: "j1".into(),
            title: "Backend Engineer".into(),
            company: "TechNova".into(),
            location: "Berlin / Remote".into(),
            employment_type: EmploymentType::FullTime,
            description: "Work on the storage platform powering our analytics products.".into(),
            requirements: vec![
                "Solid Rust or Go experience".into(),
                "Familiarity with distributed systems".into(),
            ],
            posted_by: "a1".into(),
            posted_by_name: "Sarah Chen".into(),
            posted_date: timestamp(2026, 6, 2, 9, 30),
            applicants: 2,
            status: JobStatus::Open,
        },
        Job {
            id: "j2".into(),
            title: "Product Analyst Intern".into(),
            company: "FinEdge".into(),
            location: "London".into(),
            employment_type: EmploymentType::Internship,
            description: "Support the payments product team with funnel analysis.".into(),
            requirements: vec!["SQL".into(), "Curiosity about payments".into()],
            posted_by: "a2".into(),
            posted_by_name: "Daniel Okafor".into(),
            posted_date: timestamp(2026, 6, 20, 14, 0),
            applicants: 1,
            status: JobStatus::Open,
        },
        Job {
            id: "j3".into(),
            title: "Junior Bioinformatician".into(),
            company: "BioForm Labs".into(),
            location: "Lisbon".into(),
            employment_type: EmploymentType::Contract,
            description: "Six-month contract on a sequencing pipeline.".into(),
            requirements: vec!["Python".into(), "Some wet-lab exposure is a plus".into()],
            posted_by: "a3".into(),
            posted_by_name: "Elena Rodrigues".into(),
            posted_date: timestamp(2026, 7, 1, 11, 15),
            applicants: 0,
            status: JobStatus::Open,
        },
        Job {
            id: "j4".into(),
            title: "Design Assistant".into(),
            company: "Novak Design".into(),
            location: "Prague".into(),
            employment_type: EmploymentType::PartTime,
            description: "Part-time support across branding projects.".into(),
            requirements: vec!["Portfolio required".into()],
            posted_by: "a4".into(),
            posted_by_name: "Tomas Novak".into(),
            posted_date: timestamp(2026, 5, 11, 16, 45),
            applicants: 0,
            status: JobStatus::Closed,
        },
        Job {
            id: "j5".into(),
            title: "Graduate Software Engineer".into(),
            company: "CloudWorks".into(),
            location: "Remote".into(),
            employment_type: EmploymentType::FullTime,
            description: "Rotational graduate program across three platform teams.".into(),
            requirements: vec![
                "Graduating 2026 or 2027".into(),
                "Any systems language".into(),
            ],
            posted_by: "a1".into(),
            posted_by_name: "Sarah Chen".into(),
            posted_date: timestamp(2026, 7, 15, 8, 0),
            applicants: 0,
            status: JobStatus::Open,
        },
    ]
}

fn events() -> Vec<Event> {
    vec![
        Event {
            id: "e1".into(),
            title: "Annual Alumni Reunion".into(),
            date: date(2026, 9, 12),
            time: "18:00 - 23:00".into(),
            location: "Great Hall".into(),
            description: "The yearly get-together, with the class of 2016 anniversary dinner."
                .into(),
            event_type: EventType::Reunion,
            registered: 85,
            max_capacity: Some(120),
            organizer: "Alumni Office".into(),
            status: EventStatus::Upcoming,
        },
        Event {
            id: "e2".into(),
            title: "Resume Clinic".into(),
            date: date(2026, 8, 20),
            time: "17:00 - 19:00".into(),
            location: "Career Center, Room 2".into(),
            description: "Bring a draft CV; alumni reviewers give feedback on the spot.".into(),
            event_type: EventType::Workshop,
            registered: 32,
            max_capacity: Some(40),
            organizer: "Sarah Chen".into(),
            status: EventStatus::Upcoming,
        },
        Event {
            id: "e3".into(),
            title: "Careers in Fintech".into(),
            date: date(2026, 8, 28),
            time: "12:30 - 13:30".into(),
            location: "Online".into(),
            description: "Lunchtime webinar with product and engineering panelists.".into(),
            event_type: EventType::Webinar,
            registered: 210,
            max_capacity: None,
            organizer: "Daniel Okafor".into(),
            status: EventStatus::Upcoming,
        },
        Event {
            id: "e4".into(),
            title: "Spring Networking Night".into(),
            date: date(2026, 4, 25),
            time: "19:00 - 22:00".into(),
            location: "Riverside Venue".into(),
            description: "Informal mixer for students and local alumni.".into(),
            event_type: EventType::Networking,
            registered: 64,
            max_capacity: Some(80),
            organizer: "Alumni Office".into(),
            status: EventStatus::Completed,
        },
    ]
}

fn mentorship_requests() -> Vec<MentorshipRequest> {
    vec![
        MentorshipRequest {
            id: "m1".into(),
            student_id: "s1".into(),
            student_name: "Priya Nair".into(),
            mentor_id: "a1".into(),
            mentor_name: "Sarah Chen".into(),
            field: "Distributed Systems".into(),
            message: "I loved your reunion talk on storage engines and would value guidance \
                      while I pick a thesis topic."
                .into(),
            status: MentorshipStatus::Accepted,
            request_date: date(2026, 2, 8),
        },
        MentorshipRequest {
            id: "m2".into(),
            student_id: "s2".into(),
            student_name: "Omar Haddad".into(),
            mentor_id: "a2".into(),
            mentor_name: "Daniel Okafor".into(),
            field: "Product Management".into(),
            message: "Hoping to break into fintech product roles after graduation.".into(),
            status: MentorshipStatus::Pending,
            request_date: date(2026, 7, 19),
        },
        MentorshipRequest {
            id: "m3".into(),
            student_id: "s3".into(),
            student_name: "Lucy Wang".into(),
            mentor_id: "a4".into(),
            mentor_name: "Tomas Novak".into(),
            field: "Design".into(),
            message: "Considering a pivot toward UX for science tooling.".into(),
            status: MentorshipStatus::Rejected,
            request_date: date(2026, 6, 30),
        },
    ]
}

fn applications() -> Vec<Application> {
    vec![
        Application {
            id: "ap1".into(),
            job_id: "j1".into(),
            student_id: "s1".into(),
            student_name: "Priya Nair".into(),
            resume: "priya_nair_cv.pdf".into(),
            cover_letter: "My internship at CloudWorks touched the same stack.".into(),
            applied_date: date(2026, 6, 5),
            status: ApplicationStatus::Reviewed,
        },
        Application {
            id: "ap2".into(),
            job_id: "j1".into(),
            student_id: "s2".into(),
            student_name: "Omar Haddad".into(),
            resume: "omar_haddad_cv.pdf".into(),
            cover_letter: String::new(),
            applied_date: date(2026, 6, 9),
            status: ApplicationStatus::Pending,
        },
        Application {
            id: "ap3".into(),
            job_id: "j2".into(),
            student_id: "s2".into(),
            student_name: "Omar Haddad".into(),
            resume: "omar_haddad_cv.pdf".into(),
            cover_letter: "Payments is exactly where I want to start.".into(),
            applied_date: date(2026, 6, 22),
            status: ApplicationStatus::Pending,
        },
    ]
}

fn conversations() -> Vec<Conversation> {
    vec![
        Conversation {
            id: "c1".into(),
            participants: [
                Participant {
                    id: "s1".into(),
                    name: "Priya Nair".into(),
                    role: Role::Student,
                    avatar: "PN".into(),
                },
                Participant {
                    id: "a1".into(),
                    name: "Sarah Chen".into(),
                    role: Role::Alumni,
                    avatar: "SC".into(),
                },
            ],
            last_message: Some(LastMessage {
                text: "Thursday 17:00 works, see you then.".into(),
                timestamp: timestamp(2026, 7, 28, 16, 12),
            }),
            unread: 1,
        },
        Conversation {
            id: "c2".into(),
            participants: [
                Participant {
                    id: "s2".into(),
                    name: "Omar Haddad".into(),
                    role: Role::Student,
                    avatar: "OH".into(),
                },
                Participant {
                    id: "a2".into(),
                    name: "Daniel Okafor".into(),
                    role: Role::Alumni,
                    avatar: "DO".into(),
                },
            ],
            last_message: Some(LastMessage {
                text: "Sent the application just now, thank you!".into(),
                timestamp: timestamp(2026, 6, 22, 10, 41),
            }),
            unread: 0,
        },
    ]
}

fn messages() -> Vec<Message> {
    vec![
        Message {
            id: "msg1".into(),
            conversation_id: "c1".into(),
            sender_id: "s1".into(),
            sender_name: "Priya Nair".into(),
            content: "Hi Sarah, could we move our next session to Thursday?".into(),
            timestamp: timestamp(2026, 7, 28, 15, 58),
            read: true,
        },
        Message {
            id: "msg2".into(),
            conversation_id: "c1".into(),
            sender_id: "a1".into(),
            sender_name: "Sarah Chen".into(),
            content: "Thursday 17:00 works, see you then.".into(),
            timestamp: timestamp(2026, 7, 28, 16, 12),
            read: false,
        },
        Message {
            id: "msg3".into(),
            conversation_id: "c2".into(),
            sender_id: "a2".into(),
            sender_name: "Daniel Okafor".into(),
            content: "The analyst internship just went live, apply before Friday.".into(),
            timestamp: timestamp(2026, 6, 21, 9, 5),
            read: true,
        },
        Message {
            id: "msg4".into(),
            conversation_id: "c2".into(),
            sender_id: "s2".into(),
            sender_name: "Omar Haddad".into(),
            content: "Sent the application just now, thank you!".into(),
            timestamp: timestamp(2026, 6, 22, 10, 41),
            read: true,
        },
    ]
}

fn donations() -> Vec<Donation> {
    vec![
        Donation {
            id: "d1".into(),
            donor_id: "a1".into(),
            donor_name: "Sarah Chen".into(),
            amount: 500.0,
            purpose: "First-generation student scholarship".into(),
            category: DonationCategory::Scholarship,
            message: Some("Paying forward what the bursary did for me.".into()),
            date: date(2026, 3, 1),
            payment_method: "card".into(),
            anonymous: false,
        },
        Donation {
            id: "d2".into(),
            donor_id: "a2".into(),
            donor_name: "Daniel Okafor".into(),
            amount: 250.0,
            purpose: "Library renovation".into(),
            category: DonationCategory::Infrastructure,
            message: None,
            date: date(2026, 4, 18),
            payment_method: "transfer".into(),
            anonymous: true,
        },
        Donation {
            id: "d3".into(),
            donor_id: "a3".into(),
            donor_name: "Elena Rodrigues".into(),
            amount: 1000.0,
            purpose: "Undergraduate research grants".into(),
            category: DonationCategory::Research,
            message: Some("Earmarked for the biology department if possible.".into()),
            date: date(2026, 5, 2),
            payment_method: "card".into(),
            anonymous: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seeded_store_respects_disabled_seed() {
        let mut config = AppConfig::default();
        config.seed.enabled = false;

        let store = seeded_store(&config);
        assert!(store.jobs().is_empty());
        assert!(store.alumni().is_empty());
    }

    #[test]
    fn test_seeded_ids_are_unique_per_collection() {
        let store = seeded_store(&AppConfig::default());

        fn assert_unique<'a>(ids: impl Iterator<Item = &'a str>) {
            let mut seen = HashSet::new();
            for id in ids {
                assert!(seen.insert(id), "duplicate id: {id}");
            }
        }

        assert_unique(store.alumni().iter().map(|u| u.id.as_str()));
        assert_unique(store.students().iter().map(|u| u.id.as_str()));
        assert_unique(store.jobs().iter().map(|j| j.id.as_str()));
        assert_unique(store.events().iter().map(|e| e.id.as_str()));
        assert_unique(store.mentorship_requests().iter().map(|m| m.id.as_str()));
        assert_unique(store.applications().iter().map(|a| a.id.as_str()));
        assert_unique(store.conversations().iter().map(|c| c.id.as_str()));
        assert_unique(store.messages().iter().map(|m| m.id.as_str()));
        assert_unique(store.donations().iter().map(|d| d.id.as_str()));
    }

    #[test]
    fn test_seeded_applications_resolve_and_match_counters() {
        let store = seeded_store(&AppConfig::default());

        for application in store.applications() {
            assert!(
                store.find_job(&application.job_id).is_some(),
                "application {} references missing job {}",
                application.id,
                application.job_id
            );
            assert!(store.find_member(&application.student_id).is_some());
        }

        // Seeded applicant counters agree with the application records.
        for job in store.jobs() {
            let count = store
                .applications()
                .iter()
                .filter(|a| a.job_id == job.id)
                .count();
            assert_eq!(job.applicants as usize, count, "job {}", job.id);
        }
    }

    #[test]
    fn test_seeded_conversations_reference_members_and_messages() {
        let store = seeded_store(&AppConfig::default());

        for conversation in store.conversations() {
            for participant in &conversation.participants {
                assert!(store.find_member(&participant.id).is_some());
            }
            assert!(!store.conversation_messages(&conversation.id).is_empty());
        }
    }

    #[test]
    fn test_seeded_donors_hold_donation_badge() {
        let store = seeded_store(&AppConfig::default());

        for donation in store.donations() {
            let donor = store.find_member(&donation.donor_id).unwrap();
            assert!(donor.has_badge("Generous Donor"), "donor {}", donor.id);
        }
    }
}
