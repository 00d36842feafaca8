//! Basic example demonstrating the Jira API client.
//!
//! Run with:
//! ```
//! JIRA_URL=https://your-site.atlassian.net JIRA_USERNAME=you@example.com \
//!     JIRA_API_TOKEN=your-token cargo run --example basic -- 1
//! ```

use jirapi::{Get, JiraClient, Priority};

#[tokio::main]
async fn main() -> jirapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    let scheme_id = std::env::args().nth(1).unwrap_or_else(|| "1".to_string());

    println!("Creating Jira client...");
    let client = JiraClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    println!("\n--- Priority Scheme {scheme_id} ---");
    let (scheme, response) = client.priorities().get_scheme(&scheme_id).await?;
    println!("Scheme: {} (HTTP {})", scheme.name, response.status);
    println!("  Default scheme: {}", scheme.is_default());
    println!("  Projects: {:?}", scheme.project_keys);

    println!("\n--- Priorities ---");
    for option in &scheme.option_ids {
        match Priority::get(&client, option).await {
            Ok((priority, _)) => {
                let marker = if scheme.default_option_id() == Some(option.as_str()) {
                    " (default)"
                } else {
                    ""
                };
                println!("  {} - {}{}", priority.id, priority.name, marker);
            }
            Err(err) => {
                let status = err
                    .status()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "no response".to_string());
                println!("  {option} - failed ({status}): {err}");
            }
        }
    }

    println!("\nDone!");
    Ok(())
}
