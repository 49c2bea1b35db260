use crate::models::{Assignment, Category};

/// Weighted contribution of a single assignment: grade scaled into its weight.
pub fn weighted_contribution(grade: f64, weight: f64) -> f64 {
    (grade / 100.0) * weight
}

/// Category sums folded from one pass over the assignment list.
#[derive(Debug, Clone, Default)]
pub struct GradeSummary {
    pub total_formative: f64,
    pub total_summative: f64,
    pub weight_formative: f64,
    pub weight_summative: f64,
}

impl GradeSummary {
    pub fn total_grade(&self) -> f64 {
        self.total_formative + self.total_summative
    }

    pub fn gpa(&self) -> f64 {
        (self.total_grade() / 100.0) * 5.0
    }

    /// A category passes when its weighted sum reaches half its entered
    /// weight. A category with no records has weight 0 and passes (0 >= 0).
    pub fn pass_formative(&self) -> bool {
        self.total_formative >= self.weight_formative * 0.5
    }

    pub fn pass_summative(&self) -> bool {
        self.total_summative >= self.weight_summative * 0.5
    }

    pub fn passed(&self) -> bool {
        self.pass_formative() && self.pass_summative()
    }
}

pub fn summarize(assignments: &[Assignment]) -> GradeSummary {
    let mut summary = GradeSummary::default();

    for assignment in assignments {
        match assignment.category {
            Category::Formative => {
                summary.total_formative += assignment.weighted_contribution;
                summary.weight_formative += assignment.weight;
            }
            Category::Summative => {
                summary.total_summative += assignment.weighted_contribution;
                summary.weight_summative += assignment.weight;
            }
        }
    }

    summary
}
