//! Static content catalog backing the listing and lookup endpoints.
//!
//! Records are literal tables compiled into the binary; the endpoints
//! only filter and slice them, so repeated reads with the same filter
//! always return identical arrays.

pub mod blog;
pub mod case_studies;
pub mod faqs;
pub mod portfolio;
pub mod services;
pub mod testimonials;

pub use blog::BlogPost;
pub use case_studies::{CaseStudy, CaseStudyTestimonial};
pub use faqs::Faq;
pub use portfolio::{CatalogIcon, PortfolioItem};
pub use services::{ServiceCaseStudy, ServiceDetail, ServiceFaq, TechnologyChoice};
pub use testimonials::Testimonial;

/// Exact, case-insensitive category match; an absent filter matches all.
pub(crate) fn matches_filter(value: &str, filter: Option<&str>) -> bool {
    filter.map_or(true, |wanted| value.eq_ignore_ascii_case(wanted))
}
