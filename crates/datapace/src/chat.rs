//! Keyword-matched canned replies for the site chat widget.
//!
//! Matching is a case-insensitive substring scan over the keyword
//! groups in declaration order; the first matching group wins.

struct AutoResponse {
    keywords: &'static [&'static str],
    reply: &'static str,
}

static AUTO_RESPONSES: [AutoResponse; 4] = [
    AutoResponse {
        keywords: &["pricing", "cost", "price", "package", "plan"],
        reply: "Our data engineering services are customized based on your specific needs. We offer flexible pricing models including project-based, retainer, and outcome-based options. Would you like to schedule a consultation to discuss your requirements and get a tailored quote?",
    },
    AutoResponse {
        keywords: &["demo", "demonstration", "show", "preview"],
        reply: "We'd be happy to provide a demonstration of our data engineering solutions. Our demos are personalized to your use case to show relevant capabilities. Could you share a bit about your data challenges so we can prepare the most relevant demo?",
    },
    AutoResponse {
        keywords: &["integration", "connect", "api", "source", "destination"],
        reply: "We specialize in data integration across diverse sources and platforms. Our team has experience with all major databases, cloud providers, APIs, and streaming platforms. Which specific systems are you looking to integrate?",
    },
    AutoResponse {
        keywords: &["security", "compliance", "gdpr", "hipaa", "ccpa", "secure"],
        reply: "Data security and compliance are foundational to our approach. We implement industry best practices and support compliance with GDPR, HIPAA, CCPA, and other regulations. Would you like to discuss your specific security requirements with our team?",
    },
];

pub const FALLBACK_REPLY: &str = "Thank you for your message. A data engineering specialist will respond shortly. In the meantime, can you tell us more about your data challenges?";

pub fn auto_reply(message: &str) -> &'static str {
    let lowered = message.to_lowercase();
    for candidate in &AUTO_RESPONSES {
        if candidate
            .keywords
            .iter()
            .any(|keyword| lowered.contains(keyword))
        {
            return candidate.reply;
        }
    }
    FALLBACK_REPLY
}
