use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudyTestimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub id: &'static str,
    pub title: &'static str,
    pub client: &'static str,
    pub industry: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub results: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub timeline: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testimonial: Option<CaseStudyTestimonial>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<&'static [&'static str]>,
}

pub fn find(id: &str) -> Option<&'static CaseStudy> {
    CASE_STUDIES.iter().find(|study| study.id == id)
}

static CASE_STUDIES: [CaseStudy; 3] = [
    CaseStudy {
        id: "loan-processing",
        title: "Enterprise Loan Processing Data Pipeline",
        client: "Major Financial Institution",
        industry: "Financial Services",
        challenge: "The client was struggling with a manual loan application process that took an average of 14 days to complete. They needed a solution to streamline their workflow, improve accuracy in risk assessment, and reduce processing time while handling over 1 million applications annually.",
        solution: "We engineered an enterprise-scale data pipeline that automated the entire loan processing workflow. The solution included real-time credit scoring algorithms, automated document verification through OCR and machine learning, and an integrated underwriting system that could make decisions based on predefined risk models.",
        results: &[
            "Reduced loan processing time from 14 days to 4.5 days (68% improvement)",
            "Improved risk assessment accuracy by 45%",
            "Increased application throughput by 300% without adding staff",
            "Decreased manual review requirements by 72%",
            "Reduced operational costs by $4.2 million annually",
        ],
        technologies: &[
            "Apache Kafka",
            "Snowflake",
            "Apache Spark",
            "TensorFlow",
            "Python",
            "Docker",
            "Kubernetes",
        ],
        timeline: "6 months",
        testimonial: Some(CaseStudyTestimonial {
            quote: "The data pipeline revolutionized our loan processing capabilities. What used to take weeks now takes days, and our risk models are more accurate than ever before.",
            author: "James Wilson",
            role: "Chief Credit Officer",
        }),
        images: Some(&[
            "/images/loan-processing-architecture.png",
            "/images/loan-processing-dashboard.png",
        ]),
    },
    CaseStudy {
        id: "healthcare-integration",
        title: "Unified Healthcare Data Platform",
        client: "Regional Hospital Network",
        industry: "Healthcare",
        challenge: "Twelve hospital systems operated isolated patient record stores with incompatible schemas, so clinicians routinely lacked a complete picture of patient history and compliance reporting required weeks of manual reconciliation.",
        solution: "We built a HIPAA-compliant integration layer that consolidates the source systems into a governed clinical data platform, with change-data-capture feeds, standardized terminology mapping, and role-based access controls for every care team.",
        results: &[
            "Improved patient data accessibility by 94%",
            "Cut compliance reporting preparation from weeks to hours",
            "Unified terminology across 12 previously incompatible systems",
        ],
        technologies: &[
            "Apache Kafka",
            "dbt",
            "Snowflake",
            "Apache Airflow",
            "Terraform",
        ],
        timeline: "9 months",
        testimonial: None,
        images: None,
    },
    CaseStudy {
        id: "retail-analytics",
        title: "Nationwide Retail Analytics Engine",
        client: "National Retail Chain",
        industry: "Retail",
        challenge: "Inventory decisions for 2000+ locations relied on week-old spreadsheet extracts, producing chronic stockouts during seasonal demand spikes and overstock in slow-moving categories.",
        solution: "We delivered a streaming analytics platform that lands point-of-sale and supply-chain events within minutes, feeding demand-forecasting models and store-level replenishment dashboards.",
        results: &[
            "Increased inventory forecasting accuracy by 34%",
            "Reduced stockouts by 23%",
            "Gave merchandising teams same-day visibility into regional demand shifts",
        ],
        technologies: &[
            "Apache Spark",
            "Databricks",
            "Apache Kafka",
            "Power BI",
        ],
        timeline: "7 months",
        testimonial: None,
        images: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_loan_processing_study() {
        let study = find("loan-processing").expect("known case study");
        assert_eq!(study.industry, "Financial Services");
        assert_eq!(study.results.len(), 5);
        assert!(study.testimonial.is_some());
    }

    #[test]
    fn unknown_id_returns_none() {
        assert!(find("nonexistent-study").is_none());
    }

    #[test]
    fn optional_sections_are_omitted_from_json() {
        let study = find("retail-analytics").expect("known case study");
        let value = serde_json::to_value(study).expect("serializes");
        assert!(value.get("testimonial").is_none());
        assert!(value.get("images").is_none());
    }
}
