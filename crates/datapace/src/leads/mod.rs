//! Lead capture: service inquiries, contact submissions, and newsletter
//! subscriptions. Records are append-only; nothing here updates or
//! deletes a row once it is stored.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

pub use domain::{
    ContactDraft, ContactSubmission, InquiryDraft, InquiryStatus, LeadId, NewsletterSubscription,
    ServiceInquiry, ServicePlan, SubscriptionDraft,
};
pub use repository::{LeadRepository, RepositoryError};
pub use router::lead_router;
pub use service::{LeadIntakeError, LeadIntakeService, SubscriptionOutcome, INQUIRY_NEXT_STEPS};
