//! The counter view command.
//!
//! Fetches the notification record into the counts atom and renders from
//! the subscription, so the display always reflects published store state.
//! With `--refresh`, keeps polling and re-renders only on change.

use std::time::Duration;

use anyhow::Result;
use beacon_store::{Atom, Selector};
use beacon_types::NotificationCounts;
use clap::Args;
use colored::Colorize;

use crate::client::ApiClient;
use crate::config::Config;
use crate::output::{self, OutputFormat};
use crate::views::{self, DashboardView};

#[derive(Args)]
pub struct CountsArgs {
    /// Re-fetch and re-render every N seconds until interrupted.
    #[arg(long, value_name = "SECONDS")]
    refresh: Option<u64>,
}

pub async fn run(args: CountsArgs, format: OutputFormat) -> Result<()> {
    let config = Config::from_env()?;
    let client = ApiClient::new(&config)?;

    let counts_atom = Atom::new("notifications", NotificationCounts::default());
    let total = Selector::new(counts_atom.clone(), NotificationCounts::total);
    let mut view = counts_atom.subscribe();

    // First paint: publish the fetched record, then render what the
    // subscription observed.
    let fetched = client.notifications().await?;
    counts_atom.set(fetched);
    let current = view.changed().await?;
    render(&current, total.get(), format);

    let Some(secs) = args.refresh else {
        return Ok(());
    };
    let interval = Duration::from_secs(secs.max(1));

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => return Ok(()),
            _ = tokio::time::sleep(interval) => {}
        }

        match client.notifications().await {
            Ok(next) => {
                if next != view.current() {
                    counts_atom.set(next);
                    let current = view.changed().await?;
                    render(&current, total.get(), format);
                }
            }
            Err(e) => {
                eprintln!("{} refresh failed: {e}", "Warning:".yellow().bold());
            }
        }
    }
}

fn render(counts: &NotificationCounts, total: u64, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            output::print_output(&views::counter_rows(counts, total), format);
        }
        OutputFormat::Json => {
            output::print_single(&DashboardView {
                counts: *counts,
                total,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    /// Counts start unset, the fetch resolves with the fixed record, and
    /// the displayed total becomes 10.
    #[tokio::test]
    async fn fetch_populates_the_store_and_total_renders_ten() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/notifications"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "network": 3, "jobs": 6, "messaging": 1, "notifications": 0
            })))
            .mount(&server)
            .await;

        let config = Config {
            api_url: server.uri(),
            fetch_timeout: Duration::from_secs(2),
        };
        let client = ApiClient::new(&config).unwrap();

        let counts_atom = Atom::new("notifications", NotificationCounts::default());
        let total = Selector::new(counts_atom.clone(), NotificationCounts::total);
        let mut view = counts_atom.subscribe();
        assert_eq!(total.get(), 0);

        let fetched = client.notifications().await.unwrap();
        counts_atom.set(fetched);

        let current = view.changed().await.unwrap();
        assert_eq!(total.get(), 10);

        let rows = views::counter_rows(&current, total.get());
        let me = rows.last().unwrap();
        assert_eq!(me.view, "Me");
        assert_eq!(me.badge, "10");
    }
}
