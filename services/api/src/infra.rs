use datapace::calculators::{Industry, ServiceLevel};
use datapace::leads::{
    ContactSubmission, LeadRepository, NewsletterSubscription, RepositoryError, ServiceInquiry,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Public-facing settings handlers need when synthesizing links.
#[derive(Clone)]
pub(crate) struct SiteContext {
    pub(crate) public_base_url: Arc<str>,
}

/// Append-only in-memory store. The only real constraint it enforces is
/// subscriber email uniqueness (case-insensitive).
#[derive(Default)]
pub(crate) struct InMemoryLeadRepository {
    inquiries: Mutex<Vec<ServiceInquiry>>,
    contacts: Mutex<Vec<ContactSubmission>>,
    subscribers: Mutex<Vec<NewsletterSubscription>>,
}

impl LeadRepository for InMemoryLeadRepository {
    fn insert_inquiry(&self, record: ServiceInquiry) -> Result<ServiceInquiry, RepositoryError> {
        let mut guard = self.inquiries.lock().expect("inquiry mutex poisoned");
        guard.push(record.clone());
        Ok(record)
    }

    fn insert_contact(
        &self,
        record: ContactSubmission,
    ) -> Result<ContactSubmission, RepositoryError> {
        let mut guard = self.contacts.lock().expect("contact mutex poisoned");
        guard.push(record.clone());
        Ok(record)
    }

    fn insert_subscriber(
        &self,
        record: NewsletterSubscription,
    ) -> Result<NewsletterSubscription, RepositoryError> {
        let mut guard = self.subscribers.lock().expect("subscriber mutex poisoned");
        if guard
            .iter()
            .any(|existing| existing.email.eq_ignore_ascii_case(&record.email))
        {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }
}

impl InMemoryLeadRepository {
    pub(crate) fn inquiry_count(&self) -> usize {
        self.inquiries.lock().expect("inquiry mutex poisoned").len()
    }
}

pub(crate) fn parse_service_level(raw: &str) -> Result<ServiceLevel, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "basic" => Ok(ServiceLevel::Basic),
        "standard" => Ok(ServiceLevel::Standard),
        "premium" => Ok(ServiceLevel::Premium),
        "enterprise" => Ok(ServiceLevel::Enterprise),
        other => Err(format!(
            "'{other}' is not a service level (expected basic, standard, premium, or enterprise)"
        )),
    }
}

pub(crate) fn parse_industry(raw: &str) -> Result<Industry, String> {
    Ok(Industry::from(raw.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_level_parsing_ignores_case() {
        assert_eq!(parse_service_level(" Premium "), Ok(ServiceLevel::Premium));
        assert!(parse_service_level("platinum").is_err());
    }

    #[test]
    fn unknown_industries_fall_back_to_other() {
        assert_eq!(parse_industry("aerospace"), Ok(Industry::Other));
        assert_eq!(parse_industry("finance"), Ok(Industry::Finance));
    }
}
