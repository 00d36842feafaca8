//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::{Priority, PriorityScheme};

/// Trait for human-readable key-value output.
///
/// Implemented by resource types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for Priority {
    fn pretty_print(&self) -> String {
        let header = format!("Priority {}: {}", self.id, self.name);
        let divider = "─".repeat(header.chars().count().max(30));

        let mut lines = vec![header, divider];

        if !self.description.is_empty() {
            lines.push(format!("Description:    {}", self.description));
        }

        if self.has_status_color() {
            lines.push(format!("Color:          {}", self.status_color));
        }

        if !self.icon_url.is_empty() {
            lines.push(format!("Icon:           {}", self.icon_url));
        }

        if !self.self_link.is_empty() {
            lines.push(format!("URL:            {}", self.self_link));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for PriorityScheme {
    fn pretty_print(&self) -> String {
        let header = format!("Priority Scheme {}: {}", self.id, self.name);
        let divider = "─".repeat(header.chars().count().max(30));

        let mut lines = vec![header, divider];

        if !self.description.is_empty() {
            lines.push(format!("Description:    {}", self.description));
        }

        lines.push(format!(
            "Default:        {}",
            if self.is_default() { "yes" } else { "no" }
        ));

        if let Some(default_option) = self.default_option_id() {
            lines.push(format!("Default Option: {}", default_option));
        }

        lines.push(format!("Options:        {}", join_or_none(&self.option_ids)));
        lines.push(format!("Projects:       {}", join_or_none(&self.project_keys)));

        if !self.self_link.is_empty() {
            lines.push(format!("URL:            {}", self.self_link));
        }

        lines.join("\n")
    }
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
