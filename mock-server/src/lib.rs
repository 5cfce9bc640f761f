use std::{collections::HashMap, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    routing::{delete, post},
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "verifyPassword")]
    pub verify_password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub id: i64,
    pub email: String,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Token {
    pub string: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: Option<i64>,
    pub title: String,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

struct Account {
    id: i64,
    user: User,
}

#[derive(Default)]
pub struct Store {
    accounts: HashMap<String, Account>,
    tokens: HashMap<String, i64>,
    todos: HashMap<i64, (i64, Todo)>,
    next_user_id: i64,
    next_todo_id: i64,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/users", post(create_user))
        .route("/login", post(login))
        .route("/todos", post(create_todo).get(list_todos))
        .route("/todos/{id}", delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn create_user(
    State(db): State<Db>,
    Json(user): Json<User>,
) -> Result<Json<CreateUserResponse>, StatusCode> {
    if user.password != user.verify_password {
        return Err(StatusCode::BAD_REQUEST);
    }
    let mut store = db.write().await;
    if store.accounts.contains_key(&user.email) {
        return Err(StatusCode::CONFLICT);
    }
    store.next_user_id += 1;
    let id = store.next_user_id;
    let response = CreateUserResponse {
        id,
        email: user.email.clone(),
        name: user.name.clone(),
    };
    store.accounts.insert(user.email.clone(), Account { id, user });
    tracing::info!(id, "user created");
    Ok(Json(response))
}

async fn login(State(db): State<Db>, headers: HeaderMap) -> Result<Json<Token>, StatusCode> {
    let (email, password) = basic_credentials(&headers).ok_or(StatusCode::UNAUTHORIZED)?;
    let mut store = db.write().await;
    let user_id = match store.accounts.get(&email) {
        Some(account) if account.user.password == password => account.id,
        _ => return Err(StatusCode::UNAUTHORIZED),
    };
    let token = Uuid::new_v4().to_string();
    store.tokens.insert(token.clone(), user_id);
    Ok(Json(Token { string: token }))
}

async fn create_todo(
    State(db): State<Db>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Todo>, StatusCode> {
    let mut store = db.write().await;
    let owner = authorize(&store, &headers)?;
    let input: CreateTodo =
        serde_json::from_slice(&body).map_err(|_| StatusCode::UNPROCESSABLE_ENTITY)?;
    store.next_todo_id += 1;
    let id = store.next_todo_id;
    let todo = Todo {
        id: Some(id),
        title: input.title,
    };
    store.todos.insert(id, (owner, todo.clone()));
    Ok(Json(todo))
}

async fn list_todos(State(db): State<Db>, headers: HeaderMap) -> Result<Json<Vec<Todo>>, StatusCode> {
    let store = db.read().await;
    let owner = authorize(&store, &headers)?;
    let mut todos: Vec<Todo> = store
        .todos
        .values()
        .filter(|(user_id, _)| *user_id == owner)
        .map(|(_, todo)| todo.clone())
        .collect();
    todos.sort_by_key(|todo| todo.id);
    Ok(Json(todos))
}

async fn delete_todo(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, StatusCode> {
    let mut store = db.write().await;
    let owner = authorize(&store, &headers)?;
    match store.todos.get(&id) {
        Some((user_id, _)) if *user_id == owner => {}
        _ => return Err(StatusCode::NOT_FOUND),
    }
    store
        .todos
        .remove(&id)
        .map(|(_, todo)| Json(todo))
        .ok_or(StatusCode::NOT_FOUND)
}

/// Resolve the Bearer token to the owning user id.
fn authorize(store: &Store, headers: &HeaderMap) -> Result<i64, StatusCode> {
    let token = authorization(headers)
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(StatusCode::UNAUTHORIZED)?;
    store.tokens.get(token).copied().ok_or(StatusCode::UNAUTHORIZED)
}

fn basic_credentials(headers: &HeaderMap) -> Option<(String, String)> {
    let encoded = authorization(headers)?.strip_prefix("Basic ")?;
    let decoded = String::from_utf8(STANDARD.decode(encoded).ok()?).ok()?;
    let (email, password) = decoded.split_once(':')?;
    Some((email.to_string(), password.to_string()))
}

fn authorization(headers: &HeaderMap) -> Option<&str> {
    headers.get(AUTHORIZATION)?.to_str().ok()
}
