//! Walks the todo API once: register, log in, create, list, delete.
//!
//! Configuration comes from `TODO_API_BASE_URL` and `TODO_API_TIMEOUT_SECS`;
//! log verbosity from `RUST_LOG`. Start `mock-server` first to run locally.

use anyhow::Context;
use todo_api_core::{ApiClient, ClientConfig, ReqwestTransport, Todo, User};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_demo=info,todo_api_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env().context("loading client configuration")?;
    tracing::info!(
        base_url = config.base_url(),
        timeout_secs = config.timeout().as_secs_f64(),
        "Configuration loaded"
    );
    let client = ApiClient::new(config, ReqwestTransport::new()?);

    let user = User {
        name: "Demo".to_string(),
        email: "demo@example.com".to_string(),
        password: "password".to_string(),
        verify_password: "password".to_string(),
    };
    let created = client.create_user(&user).await.context("creating user")?;
    tracing::info!(id = created.id, email = %created.email, "user created");

    let token = client
        .login(&user.email, &user.password)
        .await
        .context("logging in")?;
    let token = token.as_str();

    let todo = client
        .post_todo(token, &Todo::new("Try the todo API"))
        .await
        .context("creating todo")?;
    tracing::info!(id = ?todo.id, title = %todo.title, "todo created");

    let todos = client.get_todos(token).await.context("listing todos")?;
    tracing::info!(count = todos.len(), "todos listed");

    if let Some(id) = todo.id {
        let deleted = client.delete_todo(token, id).await.context("deleting todo")?;
        tracing::info!(id, title = %deleted.title, "todo deleted");
    }

    Ok(())
}
