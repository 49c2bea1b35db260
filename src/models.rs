use std::fmt;

/// The two grading categories. Input codes are matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Formative,
    Summative,
}

impl Category {
    pub fn parse(input: &str) -> Option<Category> {
        match input.to_uppercase().as_str() {
            "FA" => Some(Category::Formative),
            "SA" => Some(Category::Summative),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Category::Formative => "FA",
            Category::Summative => "SA",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Formative => "Formative",
            Category::Summative => "Summative",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone)]
pub struct Assignment {
    pub name: String,
    pub category: Category,
    pub grade: f64,
    pub weight: f64,
    pub weighted_contribution: f64,
}

impl Assignment {
    /// Builds a record with its weighted contribution fixed at creation.
    /// Grade and weight are already range-checked by the input layer.
    pub fn new(name: String, category: Category, grade: f64, weight: f64) -> Self {
        let weighted_contribution = crate::grading::weighted_contribution(grade, weight);
        Assignment {
            name,
            category,
            grade,
            weight,
            weighted_contribution,
        }
    }
}
