use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::health,
        posts::{create_post, list_posts, update_post},
        repost::repost,
        users::{create_user, increase_reposts, list_users, update_user},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        // Post routes
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{id}", put(update_post))
        .route("/repost/{user_id}/{id}", post(repost))
        // User routes
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", put(update_user))
        .route("/users/increase/{id}", put(increase_reposts))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    const POST_BODY: &str = r#"{"title":"Backend Engineer","content":"Own the storage layer","company":"Acme","location":"Remote","salary":"120k"}"#;

    #[tokio::test]
    async fn test_health() {
        let state = AppState::default();
        let app = create_app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_posts_empty() {
        let state = AppState::default();
        let app = create_app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/posts")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();

        assert!(json.is_empty());
    }

    #[tokio::test]
    async fn test_create_post() {
        let state = AppState::default();
        let app = create_app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/posts")
                    .header("Content-Type", "application/json")
                    .body(Body::from(POST_BODY))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let post: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(post["title"], "Backend Engineer");
        assert_eq!(post["company"], "Acme");
        assert!(post["id"].as_str().is_some_and(|id| !id.is_empty()));
    }

    #[tokio::test]
    async fn test_listing_reflects_post_mutations() {
        let state = AppState::default();
        let app = create_app(state);

        // Prime the cached listing while the store is empty.
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/posts")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Create a post; this must invalidate the cached listing.
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/posts")
                    .header("Content-Type", "application/json")
                    .body(Body::from(POST_BODY))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/posts")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let posts: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0]["title"], "Backend Engineer");
    }

    #[tokio::test]
    async fn test_update_post() {
        let state = AppState::default();
        let app = create_app(state);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/posts")
                    .header("Content-Type", "application/json")
                    .body(Body::from(POST_BODY))
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let post: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let post_id = post["id"].as_str().unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!("/posts/{post_id}"))
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        r#"{"title":"Staff Engineer","content":"Own the storage layer","company":"Acme","location":"Remote","salary":"150k"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let updated: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(updated["id"], post_id);
        assert_eq!(updated["title"], "Staff Engineer");
        assert_eq!(updated["salary"], "150k");
    }

    #[tokio::test]
    async fn test_update_nonexistent_post() {
        let state = AppState::default();
        let app = create_app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/posts/no-such-post")
                    .header("Content-Type", "application/json")
                    .body(Body::from(POST_BODY))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_and_list_users() {
        let state = AppState::default();
        let app = create_app(state);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/users")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"name":"John","email":"john@example.com"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let user: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(user["name"], "John");
        assert_eq!(user["email"], "john@example.com");
        assert_eq!(user["reposts"], 0);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/users")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let users: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0]["id"], user["id"]);
    }

    #[tokio::test]
    async fn test_update_user() {
        let state = AppState::default();
        let app = create_app(state);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/users")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"name":"Jane","email":"jane@example.com"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let user: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let user_id = user["id"].as_i64().unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!("/users/{user_id}"))
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"name":"Jane Doe","email":"jd@example.com"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let updated: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(updated["name"], "Jane Doe");
        assert_eq!(updated["email"], "jd@example.com");
    }

    #[tokio::test]
    async fn test_update_nonexistent_user() {
        let state = AppState::default();
        let app = create_app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/users/42")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"name":"Nobody","email":"no@example.com"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_increase_reposts() {
        let state = AppState::default();
        let app = create_app(state);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/users")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"name":"Max","email":"max@example.com"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let user: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let user_id = user["id"].as_i64().unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!("/users/increase/{user_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let updated: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(updated["reposts"], 1);
    }

    #[tokio::test]
    async fn test_increase_reposts_nonexistent_user() {
        let state = AppState::default();
        let app = create_app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/users/increase/42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_repost_copies_post_and_increments_counter() {
        let state = AppState::default();
        let app = create_app(state);

        // Seed one user and one post through the API.
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/users")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"name":"Ana","email":"ana@example.com"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let user: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let user_id = user["id"].as_i64().unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/posts")
                    .header("Content-Type", "application/json")
                    .body(Body::from(POST_BODY))
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let post: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let post_id = post["id"].as_str().unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/repost/{user_id}/{post_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json["message"],
            "Post created and repost count updated successfully"
        );

        // The listing now shows the copy next to the source post.
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/posts")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let posts: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();
        assert_eq!(posts.len(), 2);
        assert!(posts.iter().all(|p| p["title"] == "Backend Engineer"));

        // And the user's counter went up by one.
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/users")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let users: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();
        assert_eq!(users[0]["reposts"], 1);
    }

    #[tokio::test]
    async fn test_repost_nonexistent_post_returns_500() {
        let state = AppState::default();
        let app = create_app(state);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/users")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"name":"Ana","email":"ana@example.com"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/repost/1/no-such-post")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Error in processing your request");
    }

    #[tokio::test]
    async fn test_repost_nonexistent_user_returns_500() {
        let state = AppState::default();
        let app = create_app(state);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/posts")
                    .header("Content-Type", "application/json")
                    .body(Body::from(POST_BODY))
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let post: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let post_id = post["id"].as_str().unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/repost/404/{post_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Error in processing your request");

        // The failed repost must not leave a copy behind.
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/posts")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let posts: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();
        assert_eq!(posts.len(), 1);
    }

    #[tokio::test]
    async fn test_repost_with_non_numeric_user_id_is_rejected() {
        let state = AppState::default();
        let app = create_app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/repost/abc/some-post")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
