use super::matches_filter;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub id: u32,
    pub question: &'static str,
    pub answer: &'static str,
    pub category: &'static str,
}

pub fn filter(category: Option<&str>) -> Vec<Faq> {
    FAQS.iter()
        .filter(|faq| matches_filter(faq.category, category))
        .copied()
        .collect()
}

static FAQS: [Faq; 8] = [
    Faq {
        id: 1,
        question: "What is data engineering?",
        answer: "Data engineering is the practice of designing and building systems for collecting, storing, and analyzing data at scale. It involves developing the architecture that enables data generation, transformation, and organization to support advanced analytics, machine learning, and business intelligence.",
        category: "General",
    },
    Faq {
        id: 2,
        question: "How long does a typical data engineering project take?",
        answer: "Project timelines vary based on complexity, scope, and specific requirements. Simple data integration projects might take 4-8 weeks, while comprehensive data warehouse implementations typically range from 3-6 months. Enterprise-scale data platforms may take 6-12 months to fully deploy. We provide detailed timelines during the discovery and planning phase.",
        category: "Process",
    },
    Faq {
        id: 3,
        question: "Do you work with on-premises data systems or only cloud-based solutions?",
        answer: "We have expertise in both on-premises and cloud-based data systems. Our team can implement solutions in either environment or create hybrid architectures that leverage existing on-premises investments while introducing cloud capabilities. We're experienced with all major cloud providers (AWS, Azure, GCP) and traditional data platforms.",
        category: "Technical",
    },
    Faq {
        id: 4,
        question: "How do you handle data security and compliance requirements?",
        answer: "Security and compliance are integrated throughout our development process. We implement industry best practices for data encryption, access controls, and audit logging. Our team has experience with major regulatory frameworks including GDPR, HIPAA, CCPA, and SOC 2. We work with your security team to ensure all implementations meet your compliance requirements.",
        category: "Security",
    },
    Faq {
        id: 5,
        question: "What data warehouse technologies do you work with?",
        answer: "We have expertise across modern data warehouse platforms including Snowflake, Google BigQuery, Amazon Redshift, Azure Synapse, and Databricks, as well as traditional systems like Oracle, SQL Server, and Teradata. Our recommendations are based on your specific requirements, existing technology investments, and long-term data strategy.",
        category: "Technical",
    },
    Faq {
        id: 6,
        question: "Do you provide ongoing support after project completion?",
        answer: "Yes, we offer flexible support options ranging from basic maintenance to fully managed data operations. Our support plans include monitoring, troubleshooting, optimization, and regular system updates. We also provide knowledge transfer and training to your internal teams to build self-sufficiency.",
        category: "Process",
    },
    Faq {
        id: 7,
        question: "How do you price your data engineering services?",
        answer: "Our pricing models are flexible and can be structured as fixed-price projects, time and materials, or retainer-based engagements. We determine the appropriate model based on project complexity, scope definition, and your preferences. We provide detailed proposals with transparent pricing after an initial discovery process.",
        category: "Pricing",
    },
    Faq {
        id: 8,
        question: "Can you help with our existing data quality issues?",
        answer: "Yes, we offer data quality assessment and remediation services. Our approach includes profiling existing data, identifying quality issues, implementing automated validation processes, and establishing governance procedures to maintain quality. We use specialized tools to detect and resolve inconsistencies, duplicates, and other common data problems.",
        category: "Technical",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_filter_matches_exactly() {
        let technical = filter(Some("technical"));
        assert_eq!(technical.len(), 3);
        assert!(technical.iter().all(|faq| faq.category == "Technical"));
    }

    #[test]
    fn absent_filter_returns_everything() {
        assert_eq!(filter(None).len(), 8);
    }
}
