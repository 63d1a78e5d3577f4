//! Privacy transform applied around the external generation service.
//!
//! `anonymize` replaces the identifying contact fields with fixed
//! placeholders before a document leaves the process; `restore` copies the
//! original values for exactly those fields back onto the service's
//! response. Content fields (summary, experience, skills, education) pass
//! through untouched in both directions — the service needs them verbatim.
//!
//! The covered field set is a fixed schema, not configuration: both
//! functions route through one `copy_identity_fields` helper so anonymize
//! and restore can never diverge on which fields they touch.

use crate::models::Resume;

pub const PLACEHOLDER_FULL_NAME: &str = "Alex Morgan";
pub const PLACEHOLDER_EMAIL: &str = "alex.morgan@example.com";
pub const PLACEHOLDER_PHONE: &str = "+1 (555) 010-0000";
pub const PLACEHOLDER_LOCATION: &str = "Springfield, USA";
pub const PLACEHOLDER_LINKEDIN: &str = "linkedin.com/in/alex-morgan";
pub const PLACEHOLDER_WEBSITE: &str = "alexmorgan.example.com";
pub const PLACEHOLDER_CONTACT_LINE: &str = "Available on request";

/// Returns a copy of `document` with the identifying fields replaced by
/// placeholders. Total: no validation, no failure path.
pub fn anonymize(document: &Resume) -> Resume {
    let mut anonymized = document.clone();
    copy_identity_fields(&mut anonymized, &placeholder_identity());
    anonymized
}

/// Returns a copy of `transformed` with the identifying fields taken from
/// `original`. Unconditional: it does not inspect which fields the service
/// changed — the non-identity fields of `transformed` are the ones to keep,
/// and the identity fields always come back from `original`.
pub fn restore(transformed: &Resume, original: &Resume) -> Resume {
    let mut restored = transformed.clone();
    copy_identity_fields(&mut restored, original);
    restored
}

/// The identifying field set. Note `role` is content, not identity.
fn copy_identity_fields(into: &mut Resume, from: &Resume) {
    into.full_name = from.full_name.clone();
    into.email = from.email.clone();
    into.phone = from.phone.clone();
    into.location = from.location.clone();
    into.linkedin = from.linkedin.clone();
    into.website = from.website.clone();
    into.contact_line = from.contact_line.clone();
}

fn placeholder_identity() -> Resume {
    Resume {
        full_name: PLACEHOLDER_FULL_NAME.to_string(),
        email: PLACEHOLDER_EMAIL.to_string(),
        phone: PLACEHOLDER_PHONE.to_string(),
        location: PLACEHOLDER_LOCATION.to_string(),
        linkedin: PLACEHOLDER_LINKEDIN.to_string(),
        website: PLACEHOLDER_WEBSITE.to_string(),
        contact_line: PLACEHOLDER_CONTACT_LINE.to_string(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Bullet, ExperienceEntry};

    fn identified_resume() -> Resume {
        Resume {
            full_name: "Priya Sharma".to_string(),
            role: "Backend Engineer".to_string(),
            email: "priya.sharma@fastmail.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            location: "Bengaluru, India".to_string(),
            linkedin: "linkedin.com/in/priyasharma".to_string(),
            website: "priyasharma.dev".to_string(),
            contact_line: "Reach me any weekday after 10:00 IST".to_string(),
            summary: "Led a team of 5 engineers".to_string(),
            experience: vec![ExperienceEntry {
                role: "Engineer".to_string(),
                company: "Acme".to_string(),
                period: "2021 – 2024".to_string(),
                visible: true,
                bullets: vec![Bullet {
                    text: "Shipped the billing rewrite".to_string(),
                    visible: true,
                }],
            }],
            skills: vec!["Rust".to_string(), "PostgreSQL".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_anonymize_replaces_identity_fields_only() {
        let original = identified_resume();
        let anonymized = anonymize(&original);

        assert_eq!(anonymized.full_name, PLACEHOLDER_FULL_NAME);
        assert_eq!(anonymized.email, PLACEHOLDER_EMAIL);
        assert_eq!(anonymized.phone, PLACEHOLDER_PHONE);
        assert_eq!(anonymized.location, PLACEHOLDER_LOCATION);
        assert_eq!(anonymized.linkedin, PLACEHOLDER_LINKEDIN);
        assert_eq!(anonymized.website, PLACEHOLDER_WEBSITE);
        assert_eq!(anonymized.contact_line, PLACEHOLDER_CONTACT_LINE);

        // Content the generation service needs passes through verbatim.
        assert_eq!(anonymized.role, original.role);
        assert_eq!(anonymized.summary, original.summary);
        assert_eq!(anonymized.experience, original.experience);
        assert_eq!(anonymized.skills, original.skills);
    }

    #[test]
    fn test_anonymized_output_leaks_no_identity_value() {
        let original = identified_resume();
        let anonymized = anonymize(&original);
        let serialized = serde_json::to_string(&anonymized).unwrap();

        for real_value in [
            &original.full_name,
            &original.email,
            &original.phone,
            &original.location,
            &original.linkedin,
            &original.website,
            &original.contact_line,
        ] {
            assert!(
                !serialized.contains(real_value.as_str()),
                "anonymized output leaked {real_value:?}"
            );
        }
    }

    #[test]
    fn test_restore_after_anonymize_is_identity() {
        let original = identified_resume();
        assert_eq!(restore(&anonymize(&original), &original), original);
    }

    #[test]
    fn test_restore_keeps_service_edits_to_content() {
        let original = identified_resume();
        let mut returned = anonymize(&original);
        returned.summary = "Led a team of 5 engineers across two products".to_string();
        returned.experience[0].bullets[0].text =
            "Shipped the billing rewrite ahead of schedule".to_string();
        // A service that rewrites the placeholder name must not win either.
        returned.full_name = "Candidate A".to_string();

        let restored = restore(&returned, &original);
        assert_eq!(restored.full_name, original.full_name);
        assert_eq!(restored.email, original.email);
        assert_eq!(restored.summary, returned.summary);
        assert_eq!(
            restored.experience[0].bullets[0].text,
            returned.experience[0].bullets[0].text
        );
    }

    #[test]
    fn test_transforms_are_total_on_empty_documents() {
        let empty = Resume::default();
        let anonymized = anonymize(&empty);
        assert_eq!(anonymized.full_name, PLACEHOLDER_FULL_NAME);
        assert_eq!(restore(&anonymized, &empty), empty);
    }
}
