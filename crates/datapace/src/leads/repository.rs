use super::domain::{ContactSubmission, NewsletterSubscription, ServiceInquiry};

/// Storage abstraction so intake can run against any append-only store.
/// Implementations must treat records as immutable after insert.
pub trait LeadRepository: Send + Sync {
    fn insert_inquiry(&self, record: ServiceInquiry) -> Result<ServiceInquiry, RepositoryError>;

    fn insert_contact(
        &self,
        record: ContactSubmission,
    ) -> Result<ContactSubmission, RepositoryError>;

    /// Subscriber emails are unique; inserting a duplicate must return
    /// `RepositoryError::Conflict`.
    fn insert_subscriber(
        &self,
        record: NewsletterSubscription,
    ) -> Result<NewsletterSubscription, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
