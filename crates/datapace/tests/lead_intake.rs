//! Integration specifications for the lead-capture intake workflow.
//!
//! Scenarios exercise the public service facade and the HTTP router together so
//! validation, persistence, and response shapes are verified without reaching
//! into private modules.

mod common {
    use std::sync::{Arc, Mutex};

    use datapace::leads::{
        ContactSubmission, LeadIntakeService, LeadRepository, NewsletterSubscription,
        RepositoryError, ServiceInquiry,
    };

    #[derive(Default)]
    pub(super) struct MemoryRepository {
        pub(super) inquiries: Mutex<Vec<ServiceInquiry>>,
        pub(super) contacts: Mutex<Vec<ContactSubmission>>,
        pub(super) subscribers: Mutex<Vec<NewsletterSubscription>>,
    }

    impl LeadRepository for MemoryRepository {
        fn insert_inquiry(
            &self,
            record: ServiceInquiry,
        ) -> Result<ServiceInquiry, RepositoryError> {
            self.inquiries.lock().expect("lock").push(record.clone());
            Ok(record)
        }

        fn insert_contact(
            &self,
            record: ContactSubmission,
        ) -> Result<ContactSubmission, RepositoryError> {
            self.contacts.lock().expect("lock").push(record.clone());
            Ok(record)
        }

        fn insert_subscriber(
            &self,
            record: NewsletterSubscription,
        ) -> Result<NewsletterSubscription, RepositoryError> {
            let mut guard = self.subscribers.lock().expect("lock");
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

    pub(super) fn build_service() -> (LeadIntakeService<MemoryRepository>, Arc<MemoryRepository>) {
        let repository = Arc::new(MemoryRepository::default());
        let service = LeadIntakeService::new(repository.clone());
        (service, repository)
    }
}

mod intake {
    use super::common::*;
    use datapace::leads::{
        ContactDraft, InquiryDraft, InquiryStatus, LeadIntakeError, SubscriptionDraft,
        SubscriptionOutcome,
    };

    fn inquiry_draft() -> InquiryDraft {
        InquiryDraft {
            name: "Dana Reyes".to_string(),
            email: "dana@example.com".to_string(),
            service_id: "professional".to_string(),
            company: Some("Acme Logistics".to_string()),
            phone: None,
            message: Some("We need a warehouse migration plan.".to_string()),
            budget_range: Some("$25k-$50k".to_string()),
            timeline: None,
        }
    }

    #[test]
    fn accepted_inquiry_is_persisted_with_new_status() {
        let (service, repository) = build_service();
        let record = service
            .submit_inquiry(inquiry_draft())
            .expect("inquiry accepted");

        assert_eq!(record.status, InquiryStatus::New);
        assert_eq!(record.service_type, "professional");
        assert!(record.id.0.starts_with("inq-"));

        let stored = repository.inquiries.lock().expect("lock");
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, record.id);
    }

    #[test]
    fn inquiry_without_service_id_is_rejected() {
        let (service, repository) = build_service();
        let mut draft = inquiry_draft();
        draft.service_id = "  ".to_string();

        match service.submit_inquiry(draft) {
            Err(LeadIntakeError::MissingField(field)) => assert_eq!(field, "serviceId"),
            other => panic!("expected missing field error, got {other:?}"),
        }
        assert!(repository.inquiries.lock().expect("lock").is_empty());
    }

    #[test]
    fn contact_submission_requires_message() {
        let (service, _) = build_service();
        let draft = ContactDraft {
            name: "Sam Ortiz".to_string(),
            email: "sam@example.com".to_string(),
            company: None,
            message: String::new(),
        };

        assert!(matches!(
            service.submit_contact(draft),
            Err(LeadIntakeError::MissingField("message"))
        ));
    }

    #[test]
    fn duplicate_subscription_is_a_benign_outcome() {
        let (service, repository) = build_service();
        let draft = SubscriptionDraft {
            email: "news@example.com".to_string(),
        };

        let first = service.subscribe(draft.clone()).expect("first signup");
        assert!(matches!(first, SubscriptionOutcome::Subscribed(_)));

        let second = service.subscribe(draft).expect("second signup");
        assert_eq!(second, SubscriptionOutcome::AlreadySubscribed);
        assert_eq!(repository.subscribers.lock().expect("lock").len(), 1);
    }

    #[test]
    fn subscriber_emails_are_case_insensitive() {
        let (service, _) = build_service();
        service
            .subscribe(SubscriptionDraft {
                email: "Mixed@Example.com".to_string(),
            })
            .expect("first signup");

        let outcome = service
            .subscribe(SubscriptionDraft {
                email: "mixed@example.com".to_string(),
            })
            .expect("second signup");
        assert_eq!(outcome, SubscriptionOutcome::AlreadySubscribed);
    }
}

mod routing {
    use super::common::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use datapace::leads::{lead_router, LeadIntakeService};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn build_router() -> axum::Router {
        let repository = Arc::new(MemoryRepository::default());
        lead_router(Arc::new(LeadIntakeService::new(repository)))
    }

    async fn post_json(router: axum::Router, uri: &str, payload: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&payload).expect("serialize")))
            .expect("request");

        let response = router.oneshot(request).await.expect("router dispatch");
        let status = response.status();
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let value: Value = serde_json::from_slice(&body).expect("json");
        (status, value)
    }

    #[tokio::test]
    async fn post_inquiry_returns_id_and_next_steps() {
        let payload = json!({
            "name": "Dana Reyes",
            "email": "dana@example.com",
            "serviceId": "enterprise",
        });

        let (status, body) =
            post_json(build_router(), "/api/v1/service-inquiries", payload).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.get("success"), Some(&json!(true)));
        assert!(body
            .get("inquiryId")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .starts_with("inq-"));
        assert_eq!(
            body.get("message").and_then(Value::as_str),
            Some("Your inquiry for our Enterprise service has been received"),
        );
        assert_eq!(
            body.get("nextSteps")
                .and_then(Value::as_array)
                .map(Vec::len),
            Some(3),
        );
    }

    #[tokio::test]
    async fn post_inquiry_with_bad_email_returns_400() {
        let payload = json!({
            "name": "Dana Reyes",
            "email": "not-an-email",
            "serviceId": "essential",
        });

        let (status, body) =
            post_json(build_router(), "/api/v1/service-inquiries", payload).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body.get("error").and_then(Value::as_str),
            Some("invalid email address"),
        );
    }

    #[tokio::test]
    async fn post_contact_returns_submission_id() {
        let payload = json!({
            "name": "Sam Ortiz",
            "email": "sam@example.com",
            "message": "Looking for a dashboard audit.",
        });

        let (status, body) = post_json(build_router(), "/api/v1/contact", payload).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.get("success"), Some(&json!(true)));
        assert!(body
            .get("submissionId")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .starts_with("msg-"));
    }

    #[tokio::test]
    async fn repeat_newsletter_signup_is_acknowledged() {
        let router = build_router();
        let payload = json!({ "email": "news@example.com" });

        let (first_status, first_body) =
            post_json(router.clone(), "/api/v1/newsletter", payload.clone()).await;
        assert_eq!(first_status, StatusCode::OK);
        assert!(first_body.get("subscriberId").is_some());

        let (second_status, second_body) =
            post_json(router, "/api/v1/newsletter", payload).await;
        assert_eq!(second_status, StatusCode::OK);
        assert_eq!(second_body.get("alreadySubscribed"), Some(&json!(true)));
    }
}
