use std::path::Path;

use anyhow::Context;

use crate::models::Assignment;

/// Writes the raw records to `path`, replacing any previous file. The header
/// and rows carry the values as entered, not the weighted contributions.
pub fn write_csv(path: &Path, assignments: &[Assignment]) -> anyhow::Result<()> {
    #[derive(serde::Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct Row<'a> {
        assignment: &'a str,
        category: &'a str,
        grade: f64,
        weight: f64,
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    for assignment in assignments {
        writer.serialize(Row {
            assignment: &assignment.name,
            category: assignment.category.code(),
            grade: assignment.grade,
            weight: assignment.weight,
        })?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
