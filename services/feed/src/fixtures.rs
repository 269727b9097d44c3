//! In-memory fixture data served by the feed.
//!
//! Fixtures are created once at server start and are read-only for the
//! server's lifetime. Todo ids are 1-based and match list position.

use beacon_types::{NotificationCounts, Todo, TodoId};

/// The full fixture set: one global counter record and an ordered todo list.
#[derive(Debug, Clone)]
pub struct FixtureSet {
    counts: NotificationCounts,
    todos: Vec<Todo>,
}

impl FixtureSet {
    /// The built-in fixtures.
    pub fn built_in() -> Self {
        let counts = NotificationCounts {
            network: 3,
            jobs: 6,
            messaging: 1,
            notifications: 0,
        };

        let todos = vec![
            todo(1, "Review pull requests", "Go through the open reviews assigned to you."),
            todo(2, "Update onboarding doc", "The environment setup section is out of date."),
            todo(3, "Plan sprint demo", "Collect highlights from the last two weeks."),
            todo(4, "File expense report", "Conference travel receipts are due Friday."),
        ];

        Self { counts, todos }
    }

    /// The notification counter record.
    pub fn counts(&self) -> NotificationCounts {
        self.counts
    }

    /// Looks up a todo by id. Out-of-range ids yield `None`.
    pub fn todo(&self, id: TodoId) -> Option<&Todo> {
        self.todos.get(id.index())
    }

    /// Number of todo records.
    pub fn todo_count(&self) -> usize {
        self.todos.len()
    }
}

fn todo(id: u32, title: &str, description: &str) -> Todo {
    Todo {
        id: TodoId::new(id).expect("fixture ids are literal positives"),
        title: title.to_string(),
        description: description.to_string(),
    }
}
