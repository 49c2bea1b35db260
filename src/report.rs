use std::fmt::Write;

use crate::grading::GradeSummary;
use crate::models::{Assignment, Category};

pub fn build_report(assignments: &[Assignment], summary: &GradeSummary) -> String {
    let mut output = String::new();

    let _ = writeln!(output);
    let _ = writeln!(output, "{}", "=".repeat(50));
    let _ = writeln!(output, "GRADE SUMMARY");
    let _ = writeln!(output, "{}", "=".repeat(50));

    let _ = writeln!(output);
    let _ = writeln!(output, "Assignments:");
    let _ = writeln!(output, "{}", "-".repeat(40));
    for (index, assignment) in assignments.iter().enumerate() {
        let _ = writeln!(
            output,
            "{}. {} ({}): Grade: {}%, Weight: {}%",
            index + 1,
            assignment.name,
            assignment.category,
            assignment.grade,
            assignment.weight
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "Category Totals:");
    let _ = writeln!(output, "{}", "-".repeat(20));
    let _ = writeln!(
        output,
        "Formative (FA): {:.2} / {:.2}",
        summary.total_formative, summary.weight_formative
    );
    let _ = writeln!(
        output,
        "Summative (SA): {:.2} / {:.2}",
        summary.total_summative, summary.weight_summative
    );

    let _ = writeln!(output);
    let _ = writeln!(output, "Final Results:");
    let _ = writeln!(output, "{}", "-".repeat(20));
    let _ = writeln!(output, "Total Grade: {:.2}%", summary.total_grade());
    let _ = writeln!(output, "GPA: {:.2}", summary.gpa());
    let _ = writeln!(
        output,
        "Status: {}",
        if summary.passed() { "PASS" } else { "FAIL" }
    );

    if !summary.passed() {
        if !summary.pass_formative() {
            let _ = writeln!(
                output,
                "  - Need to improve {} assignments",
                Category::Formative.label()
            );
        }
        if !summary.pass_summative() {
            let _ = writeln!(
                output,
                "  - Need to improve {} assignments",
                Category::Summative.label()
            );
        }
    }

    output
}
