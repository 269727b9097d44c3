//! Client state views: pure rendering over store values.
//!
//! Every function here takes store state and returns display data; nothing
//! fetches. Counter badges use the shared cap rule so all surfaces render
//! a counter the same way.

use beacon_store::Loadable;
use beacon_types::{badge_label, NotificationCounts, Todo};
use serde::Serialize;
use tabled::Tabled;

/// One row of the counter view.
#[derive(Debug, Serialize, Tabled)]
pub struct CounterRow {
    /// Surface name.
    #[tabled(rename = "View")]
    pub view: String,

    /// Badge text shown on the surface.
    #[tabled(rename = "Badge")]
    pub badge: String,
}

/// The counter view: one badged row per counter, then the derived total.
pub fn counter_rows(counts: &NotificationCounts, total: u64) -> Vec<CounterRow> {
    vec![
        row("My Network", badge_label(counts.network)),
        row("Jobs", badge_label(counts.jobs)),
        row("Messaging", badge_label(counts.messaging)),
        row("Notifications", badge_label(counts.notifications)),
        row("Me", total.to_string()),
    ]
}

fn row(view: &str, badge: String) -> CounterRow {
    CounterRow {
        view: view.to_string(),
        badge,
    }
}

/// JSON shape of the counter view.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    #[serde(flatten)]
    pub counts: NotificationCounts,
    pub total: u64,
}

/// Renders a todo slot in whatever phase it is in.
pub fn todo_view(loadable: &Loadable<Todo>) -> String {
    match loadable {
        Loadable::Loading => "Loading todo...".to_string(),
        Loadable::Ready(todo) => format!("#{} {}\n  {}", todo.id, todo.title, todo.description),
        Loadable::Failed(message) => format!("Failed to load todo: {message}"),
    }
}

/// JSON shape of a todo slot.
#[derive(Debug, Serialize)]
pub struct TodoView<'a> {
    pub phase: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todo: Option<&'a Todo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
}

impl<'a> TodoView<'a> {
    pub fn from_loadable(loadable: &'a Loadable<Todo>) -> Self {
        Self {
            phase: loadable.phase(),
            todo: loadable.ready(),
            error: loadable.failure(),
        }
    }
}
