//! The todo view command.
//!
//! Loads a todo through the keyed atom family, rendering the loading
//! placeholder, then the settled record or failure. The load is bounded by
//! the fetch timeout; hitting it aborts the in-flight request.
//! `--mark-updated` overwrites the slot locally, with no server write.

use anyhow::{bail, Result};
use beacon_store::AtomFamily;
use beacon_types::{Todo, TodoId};
use clap::Args;

use crate::client::ApiClient;
use crate::config::Config;
use crate::output::{self, OutputFormat};
use crate::views::{self, TodoView};

#[derive(Args)]
pub struct TodoArgs {
    /// Todo id (positive, 1-based).
    id: String,

    /// After loading, overwrite the slot with the local "updated" record.
    #[arg(long)]
    mark_updated: bool,
}

pub async fn run(args: TodoArgs, format: OutputFormat) -> Result<()> {
    let id: TodoId = args.id.parse()?;
    let config = Config::from_env()?;
    let client = ApiClient::new(&config)?;

    let todos = AtomFamily::new("todos", client);
    let mut view = todos.load(id);

    // The slot starts in the loading phase; show the placeholder.
    if view.current().is_loading() && format == OutputFormat::Table {
        println!("{}", views::todo_view(&view.current()));
    }

    let settled = match tokio::time::timeout(config.fetch_timeout, view.settled()).await {
        Ok(loadable) => loadable?,
        Err(_) => {
            todos.invalidate(&id);
            bail!("timed out loading todo {id}");
        }
    };
    render(&settled, format);

    if args.mark_updated {
        todos.set(id, updated_todo(id));
        render(&view.current(), format);
    }

    Ok(())
}

/// The local overwrite applied by `--mark-updated`.
fn updated_todo(id: TodoId) -> Todo {
    Todo {
        id,
        title: "Updated title".to_string(),
        description: "Updated description".to_string(),
    }
}

fn render(loadable: &beacon_store::Loadable<Todo>, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", views::todo_view(loadable)),
        OutputFormat::Json => output::print_single(&TodoView::from_loadable(loadable)),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use beacon_store::Loadable;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn family_against(server: &MockServer) -> AtomFamily<TodoId, ApiClient> {
        let config = Config {
            api_url: server.uri(),
            fetch_timeout: Duration::from_secs(2),
        };
        AtomFamily::new("todos", ApiClient::new(&config).unwrap())
    }

    #[tokio::test]
    async fn load_moves_from_loading_to_ready() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/todos/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 1, "title": "Review pull requests", "description": "Open reviews."
            })))
            .expect(1)
            .mount(&server)
            .await;

        let todos = family_against(&server).await;
        let id = TodoId::new(1).unwrap();

        let mut view = todos.load(id);
        assert!(view.current().is_loading());

        let settled = view.settled().await.unwrap();
        let record = settled.ready().unwrap();
        assert_eq!(record.id, id);
        assert_eq!(record.title, "Review pull requests");
    }

    #[tokio::test]
    async fn server_not_found_surfaces_as_the_failed_phase() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/todos/99"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "code": "todo_not_found",
                "detail": "Todo 99 not found",
                "request_id": "req-1"
            })))
            .mount(&server)
            .await;

        let todos = family_against(&server).await;
        let mut view = todos.load(TodoId::new(99).unwrap());

        let settled = view.settled().await.unwrap();
        assert_eq!(settled.failure(), Some("API error: Todo 99 not found"));
    }

    #[tokio::test]
    async fn mark_updated_overwrites_locally_without_a_second_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/todos/2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 2, "title": "Update onboarding doc", "description": "Out of date."
            })))
            .expect(1)
            .mount(&server)
            .await;

        let todos = family_against(&server).await;
        let id = TodoId::new(2).unwrap();

        let mut view = todos.load(id);
        view.settled().await.unwrap();

        todos.set(id, updated_todo(id));
        match view.current() {
            Loadable::Ready(record) => {
                assert_eq!(record.title, "Updated title");
                assert_eq!(record.id, id);
            }
            other => panic!("expected ready slot, got {other:?}"),
        }
        // The mock's expect(1) verifies no write-back or refetch happened.
    }
}
