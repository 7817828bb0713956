use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::error::Result;

use super::schema::TweetqlSchema;

async fn graphql_handler(State(schema): State<TweetqlSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

async fn health() -> &'static str {
    "ok"
}

/// Routes: GraphiQL on `GET /`, GraphQL on `POST /` and `POST /graphql`,
/// liveness on `GET /health`.
pub fn router(schema: TweetqlSchema) -> Router {
    Router::new()
        .route("/", get(graphiql).post(graphql_handler))
        .route("/graphql", post(graphql_handler))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(schema)
}

pub async fn run_server(schema: TweetqlSchema, host: &str, port: u16) -> Result<()> {
    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "GraphQL server listening");

    axum::serve(listener, router(schema))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
