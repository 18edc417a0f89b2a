use serde::Serialize;

/// Icon names recognized by the site's component library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CatalogIcon {
    BarChart2,
    Database,
    LineChart,
    ServerCog,
    ShoppingCart,
    Shield,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub industry: &'static str,
    pub services: &'static [&'static str],
    pub results: &'static str,
    pub icon: CatalogIcon,
    #[serde(rename = "case_study_url")]
    pub case_study_url: &'static str,
}

pub fn items() -> &'static [PortfolioItem] {
    &ITEMS
}

static ITEMS: [PortfolioItem; 6] = [
    PortfolioItem {
        id: 1,
        title: "Financial Analytics Platform",
        description: "Developed a comprehensive data warehouse and BI solution for a Fortune 500 financial institution.",
        industry: "Financial Services",
        services: &["Data Warehouse Design", "Business Intelligence"],
        results: "Reduced reporting time by 78% and enabled real-time financial decision-making",
        icon: CatalogIcon::BarChart2,
        case_study_url: "/case-studies/financial-analytics",
    },
    PortfolioItem {
        id: 2,
        title: "Healthcare Data Integration",
        description: "Created a unified data platform connecting 12 disparate healthcare systems for a major hospital network.",
        industry: "Healthcare",
        services: &["Data Integration & ETL", "Data Governance"],
        results: "Improved patient data accessibility by 94% while ensuring HIPAA compliance",
        icon: CatalogIcon::Database,
        case_study_url: "/case-studies/healthcare-integration",
    },
    PortfolioItem {
        id: 3,
        title: "Retail Analytics Engine",
        description: "Built a scalable analytics infrastructure for a nationwide retailer with 2000+ locations.",
        industry: "Retail",
        services: &["DataOps & MLOps", "Performance Optimization"],
        results: "Increased inventory forecasting accuracy by 34% and reduced stockouts by 23%",
        icon: CatalogIcon::LineChart,
        case_study_url: "/case-studies/retail-analytics",
    },
    PortfolioItem {
        id: 4,
        title: "Manufacturing IoT Platform",
        description: "Engineered a real-time data processing pipeline for IoT sensors across 15 manufacturing facilities.",
        industry: "Manufacturing",
        services: &["Data Integration & ETL", "Performance Optimization"],
        results: "Reduced equipment downtime by 42% through predictive maintenance",
        icon: CatalogIcon::ServerCog,
        case_study_url: "/case-studies/manufacturing-iot",
    },
    PortfolioItem {
        id: 5,
        title: "E-commerce Recommendation Engine",
        description: "Implemented an ML-based recommendation system for a major e-commerce platform.",
        industry: "E-commerce",
        services: &["Machine Learning", "Data Integration"],
        results: "Increased average order value by 27% and improved user engagement metrics by 35%",
        icon: CatalogIcon::ShoppingCart,
        case_study_url: "/case-studies/ecommerce-recommendations",
    },
    PortfolioItem {
        id: 6,
        title: "Insurance Claims Analytics",
        description: "Built an end-to-end claims analytics platform for a global insurance provider.",
        industry: "Insurance",
        services: &["Data Warehouse Design", "Business Intelligence"],
        results: "Reduced fraudulent claims by 18% and accelerated processing time by 40%",
        icon: CatalogIcon::Shield,
        case_study_url: "/case-studies/insurance-claims",
    },
];
