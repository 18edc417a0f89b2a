use super::matches_filter;
use serde::Serialize;

pub const DEFAULT_LIMIT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub testimonial: &'static str,
    pub industry: &'static str,
    pub rating: u8,
}

/// Filter by industry (exact, case-insensitive) and truncate to `limit`.
pub fn filter(industry: Option<&str>, limit: usize) -> Vec<Testimonial> {
    TESTIMONIALS
        .iter()
        .filter(|entry| matches_filter(entry.industry, industry))
        .take(limit)
        .copied()
        .collect()
}

static TESTIMONIALS: [Testimonial; 6] = [
    Testimonial {
        id: 1,
        name: "Emily Johnson",
        role: "CTO",
        company: "NexusFinance",
        testimonial: "The data warehouse solution implemented by this team completely transformed our reporting capabilities. What used to take days now happens in minutes, giving our analysts more time for value-added activities.",
        industry: "Financial Services",
        rating: 5,
    },
    Testimonial {
        id: 2,
        name: "Robert Chen",
        role: "VP of Data & Analytics",
        company: "HealthFirst Network",
        testimonial: "Their expertise in healthcare data integration helped us connect disparate systems across our hospital network. Patient data is now accessible securely across departments, improving care coordination significantly.",
        industry: "Healthcare",
        rating: 5,
    },
    Testimonial {
        id: 3,
        name: "Jessica Martinez",
        role: "Director of Supply Chain",
        company: "RetailGiant",
        testimonial: "The analytics engine they built for our inventory management has been a game-changer. Our stockouts are down, and we're now able to forecast seasonal demand with remarkable accuracy.",
        industry: "Retail",
        rating: 4,
    },
    Testimonial {
        id: 4,
        name: "Michael Thompson",
        role: "Head of Operations",
        company: "IndustrialTech Manufacturing",
        testimonial: "Implementing IoT data processing across our facilities has reduced equipment downtime significantly. Their team understood our specific manufacturing challenges and delivered a solution that exceeds expectations.",
        industry: "Manufacturing",
        rating: 5,
    },
    Testimonial {
        id: 5,
        name: "Sarah Williams",
        role: "Chief Digital Officer",
        company: "InsureWell",
        testimonial: "The fraud detection capabilities in our claims system have saved us millions. Their team's deep expertise in data engineering for insurance applications is unmatched in the industry.",
        industry: "Insurance",
        rating: 5,
    },
    Testimonial {
        id: 6,
        name: "David Rodriguez",
        role: "IT Director",
        company: "TechSolutions",
        testimonial: "Our data migration to the cloud was seamless and completed ahead of schedule. The performance optimizations they implemented reduced our infrastructure costs by 40%.",
        industry: "Technology",
        rating: 4,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn industry_filter_is_case_insensitive() {
        let matched = filter(Some("healthcare"), DEFAULT_LIMIT);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].company, "HealthFirst Network");
    }

    #[test]
    fn default_limit_truncates_the_listing() {
        assert_eq!(filter(None, DEFAULT_LIMIT).len(), 4);
        assert_eq!(filter(None, 100).len(), 6);
    }

    #[test]
    fn repeated_reads_are_identical() {
        assert_eq!(filter(Some("Retail"), 2), filter(Some("Retail"), 2));
    }
}
