//! Migration step registry.
//!
//! Schema DDL is embedded from numbered `.sql` files; data-seeding bodies
//! are rendered from the typed datasets so the row data has a single source
//! of truth. Every statement is phrased idempotently (`IF NOT EXISTS`,
//! `ON CONFLICT DO NOTHING`), so re-applying a step is a logical no-op.

use crate::dataset::Dataset;

/// An ordered unit of schema or data change, applied at most once logically.
#[derive(Debug, Clone)]
pub struct MigrationStep {
    /// Sequential id; steps must be applied in ascending order.
    pub id: u32,
    /// Human-readable label for progress output.
    pub label: &'static str,
    /// SQL text handed to the SQL transport.
    pub sql: String,
}

impl MigrationStep {
    /// Zero-padded id as it appears in migration file names (e.g. "017").
    pub fn tag(&self) -> String {
        format!("{:03}", self.id)
    }
}

/// All known migration steps, in dependency order: schema-altering steps
/// precede the data loads that rely on the new schema.
pub fn migration_steps() -> Vec<MigrationStep> {
    vec![
        MigrationStep {
            id: 17,
            label: "add industry column and job_roles table",
            sql: format!(
                "{}\n{}",
                include_str!("ddl/017_industry_and_roles.sql"),
                Dataset::JobRoles.insert_sql()
            ),
        },
        MigrationStep {
            id: 18,
            label: "seed job boards",
            sql: Dataset::JobBoards.insert_sql(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_ordered_ascending() {
        let steps = migration_steps();
        assert_eq!(steps.len(), 2);
        assert!(steps.windows(2).all(|pair| pair[0].id < pair[1].id));
    }

    #[test]
    fn test_step_tags_are_zero_padded() {
        let steps = migration_steps();
        assert_eq!(steps[0].tag(), "017");
        assert_eq!(steps[1].tag(), "018");
    }

    #[test]
    fn test_schema_step_is_guarded() {
        let steps = migration_steps();
        let sql = &steps[0].sql;
        assert!(sql.contains("ADD COLUMN IF NOT EXISTS industry"));
        assert!(sql.contains("CREATE TABLE IF NOT EXISTS job_roles"));
        assert!(sql.contains("CREATE INDEX IF NOT EXISTS idx_job_boards_industry"));
        assert!(sql.contains("CREATE INDEX IF NOT EXISTS idx_job_roles_name"));
        // The role seed rides along with the schema step.
        assert!(sql.contains("INSERT INTO \"job_roles\""));
        assert!(sql.contains("ON CONFLICT (\"name\") DO NOTHING;"));
    }

    #[test]
    fn test_board_step_is_conflict_ignoring() {
        let steps = migration_steps();
        let sql = &steps[1].sql;
        assert!(sql.contains("INSERT INTO \"job_boards\""));
        assert!(sql.contains("('Dice', 'https://www.dice.com', 'tech', 'Technology',"));
        assert!(sql.contains("ON CONFLICT (\"name\") DO NOTHING;"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let first: Vec<String> = migration_steps().into_iter().map(|s| s.sql).collect();
        let second: Vec<String> = migration_steps().into_iter().map(|s| s.sql).collect();
        assert_eq!(first, second);
    }
}
