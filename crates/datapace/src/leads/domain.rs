use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored lead records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadId(pub String);

/// Engagement plan referenced by inquiry forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServicePlan {
    Essential,
    Professional,
    Enterprise,
    Custom,
}

impl ServicePlan {
    pub fn parse(id: &str) -> Option<Self> {
        match id.trim().to_ascii_lowercase().as_str() {
            "essential" => Some(Self::Essential),
            "professional" => Some(Self::Professional),
            "enterprise" => Some(Self::Enterprise),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Essential => "Essential",
            Self::Professional => "Professional",
            Self::Enterprise => "Enterprise",
            Self::Custom => "Custom",
        }
    }
}

/// Human-readable name for a service id; inquiry forms also submit
/// catalog slugs, which pass through unchanged.
pub fn service_display_name(service_id: &str) -> String {
    match ServicePlan::parse(service_id) {
        Some(plan) => plan.display_name().to_string(),
        None => service_id.to_string(),
    }
}

/// Workflow status for a stored inquiry. Only this field may change
/// after insert, and never through this application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    #[default]
    New,
    Contacted,
    Closed,
}

impl InquiryStatus {
    pub const fn label(self) -> &'static str {
        match self {
            InquiryStatus::New => "new",
            InquiryStatus::Contacted => "contacted",
            InquiryStatus::Closed => "closed",
        }
    }
}

/// Inquiry form payload as submitted by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryDraft {
    pub name: String,
    pub email: String,
    pub service_id: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub budget_range: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,
}

/// Stored inquiry record; immutable once inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInquiry {
    pub id: LeadId,
    pub contact_name: String,
    pub email: String,
    pub service_type: String,
    pub company_name: Option<String>,
    pub phone: Option<String>,
    pub project_description: Option<String>,
    pub budget_range: Option<String>,
    pub timeline: Option<String>,
    pub status: InquiryStatus,
    pub created_at: DateTime<Utc>,
}

/// Contact form payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: LeadId,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Newsletter signup payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionDraft {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSubscription {
    pub id: LeadId,
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
}
