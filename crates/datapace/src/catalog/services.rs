use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TechnologyChoice {
    pub name: &'static str,
    #[serde(rename = "use")]
    pub use_case: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceFaq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCaseStudy {
    pub title: &'static str,
    pub description: &'static str,
    pub results: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetail {
    #[serde(skip)]
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub process_duration: &'static str,
    pub maintenance_support: &'static str,
    pub technologies: &'static [TechnologyChoice],
    pub faqs: &'static [ServiceFaq],
    pub case_studies: &'static [ServiceCaseStudy],
}

/// Lookup by service id; ids are the stable slugs used across the site.
pub fn find(id: &str) -> Option<&'static ServiceDetail> {
    DETAILS.iter().find(|detail| detail.id == id)
}

static DETAILS: [ServiceDetail; 6] = [
    ServiceDetail {
        id: "data-integration",
        title: "Data Integration & ETL",
        description: "Our Data Integration & ETL services connect your disparate data sources into a unified system, enabling seamless data flow across your organization.",
        process_duration: "4-8 weeks",
        maintenance_support: "Ongoing with 24/7 monitoring",
        technologies: &[
            TechnologyChoice { name: "Apache Kafka", use_case: "Real-time data streaming" },
            TechnologyChoice { name: "Apache Spark", use_case: "Large-scale data processing" },
            TechnologyChoice { name: "Apache Airflow", use_case: "Workflow orchestration" },
            TechnologyChoice { name: "dbt", use_case: "Data transformation" },
            TechnologyChoice { name: "Fivetran", use_case: "SaaS data integration" },
            TechnologyChoice { name: "Custom connectors", use_case: "Specialized system integration" },
        ],
        faqs: &[
            ServiceFaq {
                question: "How long does a typical ETL implementation take?",
                answer: "Most implementations take 4-8 weeks depending on complexity and number of data sources.",
            },
            ServiceFaq {
                question: "Can you handle both batch and streaming data?",
                answer: "Yes, we design solutions for both batch processing and real-time streaming requirements.",
            },
        ],
        case_studies: &[ServiceCaseStudy {
            title: "Financial Services Data Integration",
            description: "Implemented real-time data pipeline for a major bank, reducing reporting latency from hours to seconds.",
            results: "78% reduction in data processing time, 99.99% uptime",
        }],
    },
    ServiceDetail {
        id: "data-warehouse",
        title: "Data Warehouse Design",
        description: "We design and implement scalable, high-performance data warehouses tailored to your organization's analytical needs.",
        process_duration: "8-12 weeks",
        maintenance_support: "Ongoing with quarterly optimization reviews",
        technologies: &[
            TechnologyChoice { name: "Snowflake", use_case: "Cloud data warehouse" },
            TechnologyChoice { name: "Google BigQuery", use_case: "Serverless data warehouse" },
            TechnologyChoice { name: "Amazon Redshift", use_case: "Petabyte-scale data warehouse" },
            TechnologyChoice { name: "Databricks", use_case: "Lakehouse architecture" },
            TechnologyChoice { name: "Azure Synapse", use_case: "Integrated analytics service" },
        ],
        faqs: &[
            ServiceFaq {
                question: "Which data warehouse solution is best for my organization?",
                answer: "We evaluate your specific needs, data volumes, and existing infrastructure to recommend the optimal solution.",
            },
            ServiceFaq {
                question: "Can you migrate our existing data warehouse?",
                answer: "Yes, we specialize in modernizing legacy data warehouses with minimal disruption.",
            },
        ],
        case_studies: &[ServiceCaseStudy {
            title: "Retail Data Warehouse Modernization",
            description: "Migrated a legacy on-premises data warehouse to Snowflake for a national retailer with 2000+ locations.",
            results: "90% reduction in query times, 65% decrease in TCO",
        }],
    },
    ServiceDetail {
        id: "business-intelligence",
        title: "Business Intelligence",
        description: "Our BI solutions transform complex data into intuitive dashboards and reports that drive informed decision-making across your organization.",
        process_duration: "6-10 weeks",
        maintenance_support: "Ongoing with monthly enhancement cycles",
        technologies: &[
            TechnologyChoice { name: "Tableau", use_case: "Interactive visualizations" },
            TechnologyChoice { name: "Power BI", use_case: "Microsoft ecosystem integration" },
            TechnologyChoice { name: "Looker", use_case: "Enterprise analytics platform" },
            TechnologyChoice { name: "Metabase", use_case: "Self-service analytics" },
            TechnologyChoice { name: "Custom Solutions", use_case: "Specialized reporting needs" },
        ],
        faqs: &[
            ServiceFaq {
                question: "How do you ensure BI adoption across our organization?",
                answer: "We implement a combination of intuitive design, thorough training, and change management strategies.",
            },
            ServiceFaq {
                question: "Can you build both strategic and operational dashboards?",
                answer: "Yes, we design solutions for all levels, from C-suite strategic views to operational real-time monitoring.",
            },
        ],
        case_studies: &[ServiceCaseStudy {
            title: "Healthcare Analytics Platform",
            description: "Developed an integrated BI solution for a hospital network, providing insights across patient care, operations, and finance.",
            results: "43% improvement in resource allocation, 28% reduction in patient wait times",
        }],
    },
    ServiceDetail {
        id: "dataops-mlops",
        title: "DataOps & MLOps",
        description: "We implement automated pipelines and practices to streamline the development, deployment, and maintenance of data and ML systems.",
        process_duration: "8-16 weeks",
        maintenance_support: "Ongoing with continuous improvement cycles",
        technologies: &[
            TechnologyChoice { name: "GitHub Actions", use_case: "CI/CD automation" },
            TechnologyChoice { name: "Jenkins", use_case: "Pipeline orchestration" },
            TechnologyChoice { name: "Terraform", use_case: "Infrastructure as code" },
            TechnologyChoice { name: "Docker", use_case: "Containerization" },
            TechnologyChoice { name: "Kubernetes", use_case: "Container orchestration" },
        ],
        faqs: &[
            ServiceFaq {
                question: "How does DataOps improve our data quality?",
                answer: "By implementing automated testing, monitoring, and version control throughout the data lifecycle.",
            },
            ServiceFaq {
                question: "Can you integrate with our existing DevOps processes?",
                answer: "Yes, we adapt our approach to work with your current tools and practices.",
            },
        ],
        case_studies: &[ServiceCaseStudy {
            title: "Financial Services MLOps Implementation",
            description: "Built an end-to-end MLOps platform for a credit risk team, enabling rapid model development and deployment.",
            results: "85% reduction in model deployment time, 40% improvement in model performance",
        }],
    },
    ServiceDetail {
        id: "data-governance",
        title: "Data Governance",
        description: "Our data governance frameworks ensure your data assets are reliable, secure, compliant, and accessible to the right people.",
        process_duration: "12-20 weeks",
        maintenance_support: "Ongoing with quarterly compliance reviews",
        technologies: &[
            TechnologyChoice { name: "Collibra", use_case: "Data catalog and lineage" },
            TechnologyChoice { name: "Alation", use_case: "Data intelligence platform" },
            TechnologyChoice { name: "Great Expectations", use_case: "Data quality validation" },
            TechnologyChoice { name: "Immuta", use_case: "Data access control" },
            TechnologyChoice { name: "Custom Frameworks", use_case: "Organization-specific needs" },
        ],
        faqs: &[
            ServiceFaq {
                question: "How do you balance governance with data accessibility?",
                answer: "We design policies that protect sensitive data while enabling self-service for appropriate users.",
            },
            ServiceFaq {
                question: "Can you help with GDPR/CCPA/HIPAA compliance?",
                answer: "Yes, we implement governance frameworks aligned with relevant regulatory requirements.",
            },
        ],
        case_studies: &[ServiceCaseStudy {
            title: "Healthcare Data Governance Program",
            description: "Implemented a comprehensive governance framework for a major healthcare provider, ensuring HIPAA compliance and data quality.",
            results: "100% regulatory compliance, 65% reduction in data quality incidents",
        }],
    },
    ServiceDetail {
        id: "performance-optimization",
        title: "Performance Optimization",
        description: "We tune and optimize your data systems for maximum throughput, query performance, and cost-efficiency.",
        process_duration: "4-8 weeks",
        maintenance_support: "Ongoing with monthly performance reviews",
        technologies: &[
            TechnologyChoice { name: "Query Optimization", use_case: "SQL and database tuning" },
            TechnologyChoice { name: "Infrastructure Tuning", use_case: "Resource allocation optimization" },
            TechnologyChoice { name: "Cost Analysis", use_case: "Cloud spend optimization" },
            TechnologyChoice { name: "Caching Strategies", use_case: "Performance acceleration" },
        ],
        faqs: &[
            ServiceFaq {
                question: "How much performance improvement can we expect?",
                answer: "Most clients see 30-70% improvements in query times and throughput.",
            },
            ServiceFaq {
                question: "Will optimization require system downtime?",
                answer: "Most optimizations can be implemented with minimal or zero downtime.",
            },
        ],
        case_studies: &[ServiceCaseStudy {
            title: "E-commerce Database Optimization",
            description: "Optimized database performance for a high-traffic e-commerce platform during peak season.",
            results: "75% reduction in response times, 40% decrease in infrastructure costs",
        }],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_known_service_by_slug() {
        let detail = find("data-warehouse").expect("known service");
        assert_eq!(detail.title, "Data Warehouse Design");
        assert_eq!(detail.technologies.len(), 5);
    }

    #[test]
    fn unknown_service_returns_none() {
        assert!(find("quantum-computing").is_none());
    }

    #[test]
    fn technology_use_case_serializes_under_use_key() {
        let detail = find("data-integration").expect("known service");
        let value = serde_json::to_value(detail.technologies[0]).expect("serializes");
        assert_eq!(value["use"], "Real-time data streaming");
    }
}
