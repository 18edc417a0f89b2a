use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::domain::{
    ContactDraft, ContactSubmission, InquiryDraft, InquiryStatus, LeadId, NewsletterSubscription,
    ServiceInquiry, SubscriptionDraft,
};
use super::repository::{LeadRepository, RepositoryError};

/// Steps returned with every accepted inquiry.
pub const INQUIRY_NEXT_STEPS: [&str; 3] = [
    "Our team will review your inquiry",
    "We'll reach out to you within 24 hours",
    "We'll schedule a consultation to discuss your needs in detail",
];

static INQUIRY_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static CONTACT_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static SUBSCRIBER_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_id(prefix: &str, sequence: &AtomicU64) -> LeadId {
    let id = sequence.fetch_add(1, Ordering::Relaxed);
    LeadId(format!("{prefix}-{id:06}"))
}

/// Validates form submissions at the boundary and appends accepted
/// records through the repository seam.
pub struct LeadIntakeService<R> {
    repository: Arc<R>,
}

impl<R> LeadIntakeService<R>
where
    R: LeadRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Accept a service inquiry, returning the stored record.
    pub fn submit_inquiry(&self, draft: InquiryDraft) -> Result<ServiceInquiry, LeadIntakeError> {
        let name = required(&draft.name, "name")?;
        let email = valid_email(&draft.email)?;
        let service_type = required(&draft.service_id, "serviceId")?;

        let record = ServiceInquiry {
            id: next_id("inq", &INQUIRY_SEQUENCE),
            contact_name: name,
            email,
            service_type,
            company_name: non_empty(draft.company),
            phone: non_empty(draft.phone),
            project_description: non_empty(draft.message),
            budget_range: non_empty(draft.budget_range),
            timeline: non_empty(draft.timeline),
            status: InquiryStatus::New,
            created_at: Utc::now(),
        };

        Ok(self.repository.insert_inquiry(record)?)
    }

    /// Accept a contact-form submission, returning the stored record.
    pub fn submit_contact(
        &self,
        draft: ContactDraft,
    ) -> Result<ContactSubmission, LeadIntakeError> {
        let name = required(&draft.name, "name")?;
        let email = valid_email(&draft.email)?;
        let message = required(&draft.message, "message")?;

        let record = ContactSubmission {
            id: next_id("msg", &CONTACT_SEQUENCE),
            name,
            email,
            company: non_empty(draft.company),
            message,
            created_at: Utc::now(),
        };

        Ok(self.repository.insert_contact(record)?)
    }

    /// Subscribe an email address. A duplicate subscription is a benign
    /// outcome, not a failure.
    pub fn subscribe(
        &self,
        draft: SubscriptionDraft,
    ) -> Result<SubscriptionOutcome, LeadIntakeError> {
        let email = valid_email(&draft.email)?;

        let record = NewsletterSubscription {
            id: next_id("sub", &SUBSCRIBER_SEQUENCE),
            email,
            subscribed_at: Utc::now(),
        };

        match self.repository.insert_subscriber(record) {
            Ok(stored) => Ok(SubscriptionOutcome::Subscribed(stored)),
            Err(RepositoryError::Conflict) => Ok(SubscriptionOutcome::AlreadySubscribed),
            Err(other) => Err(other.into()),
        }
    }
}

/// Result of a newsletter signup attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionOutcome {
    Subscribed(NewsletterSubscription),
    AlreadySubscribed,
}

/// Error raised by the intake service.
#[derive(Debug, thiserror::Error)]
pub enum LeadIntakeError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid email address")]
    InvalidEmail,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

fn required(value: &str, field: &'static str) -> Result<String, LeadIntakeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LeadIntakeError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

fn valid_email(value: &str) -> Result<String, LeadIntakeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LeadIntakeError::MissingField("email"));
    }
    // Local-part@domain with at least one dot in the domain; anything
    // stricter belongs to a verification email, not this form.
    let valid = trimmed
        .split_once('@')
        .map(|(local, domain)| {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        })
        .unwrap_or(false);
    if !valid {
        return Err(LeadIntakeError::InvalidEmail);
    }
    Ok(trimmed.to_ascii_lowercase())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|inner| inner.trim().to_string())
        .filter(|inner| !inner.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_normalized_to_lowercase() {
        assert_eq!(
            valid_email(" Dana@Example.COM ").expect("valid email"),
            "dana@example.com"
        );
    }

    #[test]
    fn email_requires_local_part_and_dotted_domain() {
        assert!(valid_email("@example.com").is_err());
        assert!(valid_email("dana@localhost").is_err());
        assert!(valid_email("dana@.com").is_err());
        assert!(valid_email("dana.example.com").is_err());
    }

    #[test]
    fn blank_optional_fields_are_dropped() {
        assert_eq!(non_empty(Some("  ".to_string())), None);
        assert_eq!(non_empty(Some(" Acme ".to_string())), Some("Acme".to_string()));
        assert_eq!(non_empty(None), None);
    }
}
