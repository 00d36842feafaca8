//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use crate::{Priority, PriorityScheme};

/// Base URL used in `self` links of fixture data.
const FIXTURE_BASE: &str = "https://jira.example.com";

/// Collection of fixture factories for test data.
pub struct Fixtures;

/// The default set of fixtures the mock server starts with.
#[derive(Debug, Clone)]
pub struct DefaultScenario {
    pub priorities: Vec<Priority>,
    pub schemes: Vec<PriorityScheme>,
}

impl Fixtures {
    // =========================================================================
    // Priority Fixtures
    // =========================================================================

    /// Create a priority with only an ID and name.
    pub fn minimal_priority(id: &str, name: &str) -> Priority {
        Priority {
            id: id.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Create a fully populated priority.
    pub fn priority(id: &str, name: &str, color: &str, description: &str) -> Priority {
        Priority {
            self_link: format!("{FIXTURE_BASE}/rest/api/2/priority/{id}"),
            status_color: color.to_string(),
            description: description.to_string(),
            icon_url: format!(
                "{FIXTURE_BASE}/images/icons/priorities/{}.svg",
                name.to_lowercase()
            ),
            name: name.to_string(),
            id: id.to_string(),
        }
    }

    /// The five priorities a fresh Jira instance ships with.
    pub fn stock_priorities() -> Vec<Priority> {
        vec![
            Self::priority("1", "Highest", "#d04437", "This problem will block progress."),
            Self::priority("2", "High", "#f15C75", "Serious problem that could block progress."),
            Self::priority("3", "Medium", "#f79232", "Has the potential to affect progress."),
            Self::priority("4", "Low", "#707070", "Minor problem or easily worked around."),
            Self::priority("5", "Lowest", "#999999", "Trivial problem with little or no impact on progress."),
        ]
    }

    // =========================================================================
    // Priority Scheme Fixtures
    // =========================================================================

    /// Create a priority scheme.
    pub fn scheme(
        id: i64,
        name: &str,
        option_ids: &[&str],
        default_option_id: &str,
        project_keys: &[&str],
    ) -> PriorityScheme {
        PriorityScheme {
            expand: "projectKeys".to_string(),
            self_link: format!("{FIXTURE_BASE}/rest/api/2/priorityschemes/{id}"),
            id,
            name: name.to_string(),
            description: String::new(),
            default_option_id: default_option_id.to_string(),
            option_ids: option_ids.iter().map(|s| s.to_string()).collect(),
            default_scheme: false,
            project_keys: project_keys.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// The instance-wide default scheme containing every stock priority.
    pub fn default_scheme() -> PriorityScheme {
        let mut scheme = Self::scheme(
            1,
            "Default priority scheme",
            &["1", "2", "3", "4", "5"],
            "3",
            &[],
        );
        scheme.description = "This is default priority scheme used by all projects without any other scheme assigned.".to_string();
        scheme.default_scheme = true;
        scheme
    }

    // =========================================================================
    // Scenarios
    // =========================================================================

    /// Stock priorities, the default scheme and a project-bound scheme.
    pub fn default_scenario() -> DefaultScenario {
        let mut support = Self::scheme(10, "Support scheme", &["1", "3", "5"], "3", &["SUP", "HELP"]);
        support.description = "Reduced priorities for support desks".to_string();

        DefaultScenario {
            priorities: Self::stock_priorities(),
            schemes: vec![Self::default_scheme(), support],
        }
    }
}
