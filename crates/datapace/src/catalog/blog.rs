use super::matches_filter;
use serde::Serialize;

pub const DEFAULT_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub author: &'static str,
    pub date: &'static str,
    pub category: &'static str,
    pub read_time: &'static str,
    pub slug: &'static str,
}

/// Filter by category (exact, case-insensitive) and truncate to `limit`.
pub fn filter(category: Option<&str>, limit: usize) -> Vec<BlogPost> {
    POSTS
        .iter()
        .filter(|post| matches_filter(post.category, category))
        .take(limit)
        .copied()
        .collect()
}

static POSTS: [BlogPost; 6] = [
    BlogPost {
        id: 1,
        title: "Best Practices for Real-time Data Pipeline Architecture",
        excerpt: "Learn how to design scalable, fault-tolerant data pipelines for processing streaming data with minimal latency.",
        author: "Sarah Chen",
        date: "2025-03-15",
        category: "Data Engineering",
        read_time: "8 min read",
        slug: "real-time-data-pipeline-architecture",
    },
    BlogPost {
        id: 2,
        title: "The Future of Data Mesh: Decentralized Data Architecture",
        excerpt: "Explore how data mesh architecture is transforming enterprise data management with domain-oriented ownership.",
        author: "Michael Rodriguez",
        date: "2025-03-01",
        category: "Data Architecture",
        read_time: "12 min read",
        slug: "future-of-data-mesh",
    },
    BlogPost {
        id: 3,
        title: "Implementing Zero-ETL: The Next Evolution in Data Integration",
        excerpt: "Discover how zero-ETL approaches are eliminating traditional data movement for faster insights.",
        author: "Priya Patel",
        date: "2025-02-22",
        category: "Data Integration",
        read_time: "10 min read",
        slug: "implementing-zero-etl",
    },
    BlogPost {
        id: 4,
        title: "Data Governance in the Age of AI: New Challenges",
        excerpt: "Understand the evolving landscape of data governance as AI adoption accelerates across industries.",
        author: "David Thompson",
        date: "2025-02-15",
        category: "Data Governance",
        read_time: "9 min read",
        slug: "data-governance-ai-challenges",
    },
    BlogPost {
        id: 5,
        title: "Cloud Data Warehouse Performance Tuning: Advanced Techniques",
        excerpt: "Master the art of optimizing query performance in modern cloud data warehouses.",
        author: "Jennifer Wu",
        date: "2025-02-08",
        category: "Performance Optimization",
        read_time: "11 min read",
        slug: "cloud-data-warehouse-performance",
    },
    BlogPost {
        id: 6,
        title: "DataOps vs MLOps: Understanding the Differences",
        excerpt: "Clarify the distinctions and overlaps between DataOps and MLOps methodologies.",
        author: "Carlos Mendez",
        date: "2025-01-28",
        category: "DataOps",
        read_time: "7 min read",
        slug: "dataops-vs-mlops",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_filter_is_case_insensitive() {
        let posts = filter(Some("data governance"), DEFAULT_LIMIT);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "data-governance-ai-challenges");
    }

    #[test]
    fn default_limit_returns_three_posts() {
        let posts = filter(None, DEFAULT_LIMIT);
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].id, 1);
    }

    #[test]
    fn unknown_category_returns_empty() {
        assert!(filter(Some("Quantum"), DEFAULT_LIMIT).is_empty());
    }
}
