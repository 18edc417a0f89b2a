use super::CalculatorError;
use serde::{Deserialize, Serialize};

/// The assessment is a fixed, forward-only sequence of five questions.
pub const QUESTION_COUNT: usize = 5;

const MIN_ANSWER: u8 = 1;
const MAX_ANSWER: u8 = 5;

/// One answered question; `id` is the 1-based question number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResponse {
    pub id: u8,
    pub answer: u8,
}

/// Discrete maturity tier; the score ranges partition `[5, 25]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaturityTier {
    Beginning,
    Developing,
    Established,
    Advanced,
}

impl MaturityTier {
    pub const fn score_range(self) -> (u8, u8) {
        match self {
            MaturityTier::Beginning => (5, 11),
            MaturityTier::Developing => (12, 17),
            MaturityTier::Established => (18, 22),
            MaturityTier::Advanced => (23, 25),
        }
    }

    pub fn for_score(score: u8) -> Self {
        match score {
            5..=11 => MaturityTier::Beginning,
            12..=17 => MaturityTier::Developing,
            18..=22 => MaturityTier::Established,
            _ => MaturityTier::Advanced,
        }
    }

    pub const fn summary(self) -> &'static str {
        match self {
            MaturityTier::Beginning => {
                "Your organization is in the early stages of its data journey with significant opportunities for improvement in how data is collected, stored, and utilized."
            }
            MaturityTier::Developing => {
                "You've started building a data foundation but still face challenges with silos, quality, and consistent governance practices."
            }
            MaturityTier::Established => {
                "Your organization has solid data practices in place but has room to advance in areas like integration, automation, and analytics capabilities."
            }
            MaturityTier::Advanced => {
                "You have mature data systems with good governance, quality controls, and analytics that actively inform business decisions."
            }
        }
    }

    pub const fn recommendations(self) -> &'static [&'static str; 3] {
        match self {
            MaturityTier::Beginning => &[
                "Create a foundational data strategy",
                "Consolidate disparate data sources",
                "Establish basic data literacy across teams",
            ],
            MaturityTier::Developing => &[
                "Establish centralized data warehousing",
                "Implement standardized data quality processes",
                "Develop formal data policies and procedures",
            ],
            MaturityTier::Established => &[
                "Streamline data pipelines for greater efficiency",
                "Enhance data governance frameworks",
                "Improve cross-functional data access",
            ],
            MaturityTier::Advanced => &[
                "Focus on innovation and cutting-edge data science applications",
                "Explore advanced AI and machine learning implementations",
                "Consider developing proprietary data solutions",
            ],
        }
    }

    pub const fn next_steps(self) -> &'static [&'static str; 3] {
        match self {
            MaturityTier::Beginning => &[
                "Book an introductory data assessment meeting",
                "Request our data foundation starter guide",
                "Explore our Business Intelligence solutions",
            ],
            MaturityTier::Developing => &[
                "Schedule a data warehouse design consultation",
                "Explore our Data Integration & ETL services",
                "Sign up for our data fundamentals webinar series",
            ],
            MaturityTier::Established => &[
                "Book a data pipeline optimization consultation",
                "Explore our Performance Optimization services",
                "Download our data governance whitepaper",
            ],
            MaturityTier::Advanced => &[
                "Schedule an advanced data strategy consultation",
                "Explore our DataOps & MLOps solutions",
                "Attend our executive data leadership workshop",
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaturityResult {
    pub total_score: u8,
    pub tier: MaturityTier,
    pub summary: &'static str,
    pub recommendations: &'static [&'static str],
    pub next_steps: &'static [&'static str],
}

/// Score a completed assessment. Answers must arrive in question order
/// (ids 1..=5) with each answer in `[1, 5]`.
pub fn score(responses: &[QuizResponse]) -> Result<MaturityResult, CalculatorError> {
    if responses.len() != QUESTION_COUNT {
        return Err(CalculatorError::InvalidInput(format!(
            "expected exactly {QUESTION_COUNT} responses, got {}",
            responses.len()
        )));
    }

    let mut total_score = 0u8;
    for (index, response) in responses.iter().enumerate() {
        let expected_id = index as u8 + 1;
        if response.id != expected_id {
            return Err(CalculatorError::InvalidInput(format!(
                "responses must arrive in question order; expected id {expected_id}, got {}",
                response.id
            )));
        }
        if !(MIN_ANSWER..=MAX_ANSWER).contains(&response.answer) {
            return Err(CalculatorError::InvalidInput(format!(
                "answer for question {} must be between {MIN_ANSWER} and {MAX_ANSWER}",
                response.id
            )));
        }
        total_score += response.answer;
    }

    let tier = MaturityTier::for_score(total_score);
    Ok(MaturityResult {
        total_score,
        tier,
        summary: tier.summary(),
        recommendations: tier.recommendations(),
        next_steps: tier.next_steps(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(values: [u8; 5]) -> Vec<QuizResponse> {
        values
            .iter()
            .enumerate()
            .map(|(index, &answer)| QuizResponse {
                id: index as u8 + 1,
                answer,
            })
            .collect()
    }

    #[test]
    fn all_fives_scores_advanced() {
        let result = score(&answers([5, 5, 5, 5, 5])).expect("valid responses");
        assert_eq!(result.total_score, 25);
        assert_eq!(result.tier, MaturityTier::Advanced);
    }

    #[test]
    fn all_ones_scores_beginning() {
        let result = score(&answers([1, 1, 1, 1, 1])).expect("valid responses");
        assert_eq!(result.total_score, 5);
        assert_eq!(result.tier, MaturityTier::Beginning);
    }

    #[test]
    fn tier_boundaries_are_exact() {
        assert_eq!(MaturityTier::for_score(11), MaturityTier::Beginning);
        assert_eq!(MaturityTier::for_score(12), MaturityTier::Developing);
        assert_eq!(MaturityTier::for_score(17), MaturityTier::Developing);
        assert_eq!(MaturityTier::for_score(18), MaturityTier::Established);
        assert_eq!(MaturityTier::for_score(22), MaturityTier::Established);
        assert_eq!(MaturityTier::for_score(23), MaturityTier::Advanced);
    }

    #[test]
    fn tier_ranges_partition_the_score_space() {
        for score in 5u8..=25 {
            let matching = [
                MaturityTier::Beginning,
                MaturityTier::Developing,
                MaturityTier::Established,
                MaturityTier::Advanced,
            ]
            .iter()
            .filter(|tier| {
                let (low, high) = tier.score_range();
                (low..=high).contains(&score)
            })
            .count();
            assert_eq!(matching, 1, "score {score} must match exactly one tier");
        }
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(score(&answers([3, 3, 3, 3, 3])[..4]).is_err());
        let mut six = answers([3, 3, 3, 3, 3]);
        six.push(QuizResponse { id: 6, answer: 3 });
        assert!(score(&six).is_err());
    }

    #[test]
    fn rejects_out_of_range_answer() {
        assert!(score(&answers([0, 3, 3, 3, 3])).is_err());
        assert!(score(&answers([3, 3, 6, 3, 3])).is_err());
    }

    #[test]
    fn rejects_out_of_order_ids() {
        let mut responses = answers([3, 3, 3, 3, 3]);
        responses.swap(1, 2);
        assert!(score(&responses).is_err());
    }

    #[test]
    fn result_carries_tier_guidance() {
        let result = score(&answers([4, 4, 4, 4, 4])).expect("valid responses");
        assert_eq!(result.tier, MaturityTier::Established);
        assert_eq!(result.recommendations.len(), 3);
        assert_eq!(result.next_steps.len(), 3);
        assert!(result.summary.contains("solid data practices"));
    }
}
