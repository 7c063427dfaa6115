use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use chrono::Utc;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::application::auth_service::AuthService;
use crate::application::password;
use crate::application::post_service::PostService;
use crate::application::user_service::UserService;
use crate::data::post_repository::{NewPost, PostPatch, PostRepository};
use crate::data::user_repository::{NewUser, UserCredentials, UserPatch, UserRepository};
use crate::domain::error::DomainError;
use crate::domain::post::Post;
use crate::domain::user::User;
use crate::infrastructure::jwt::JwtService;
use crate::presentation::{AppState, api_router};

const TEST_SECRET: &str = "0123456789abcdef0123456789abcdef";

struct StoredUser {
    user: User,
    password_hash: String,
}

#[derive(Default)]
struct InMemoryUsers {
    users: Mutex<Vec<StoredUser>>,
    // (followed, follower)
    follows: Mutex<HashSet<(i64, i64)>>,
    next_id: AtomicI64,
}

impl InMemoryUsers {
    fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            ..Self::default()
        }
    }

    fn nick_of(&self, user_id: i64) -> Option<String> {
        self.users
            .lock()
            .expect("users mutex poisoned")
            .iter()
            .find(|stored| stored.user.id == user_id)
            .map(|stored| stored.user.nick.clone())
    }

    fn follow_edges(&self) -> HashSet<(i64, i64)> {
        self.follows.lock().expect("follows mutex poisoned").clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(&self, input: NewUser) -> Result<User, DomainError> {
        let mut users = self.users.lock().expect("users mutex poisoned");
        if users.iter().any(|s| s.user.nick == input.nick) {
            return Err(DomainError::AlreadyExists("nick".to_string()));
        }
        if users.iter().any(|s| s.user.email == input.email) {
            return Err(DomainError::AlreadyExists("email".to_string()));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User::new(id, input.name, input.nick, input.email, Utc::now())
            .map_err(|err| DomainError::Unexpected(err.to_string()))?;
        users.push(StoredUser {
            user: user.clone(),
            password_hash: input.password_hash,
        });
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .lock()
            .expect("users mutex poisoned")
            .iter()
            .find(|stored| stored.user.id == id)
            .map(|stored| stored.user.clone()))
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, DomainError> {
        Ok(self
            .users
            .lock()
            .expect("users mutex poisoned")
            .iter()
            .find(|stored| stored.user.email == email)
            .map(|stored| UserCredentials {
                user_id: stored.user.id,
                password_hash: stored.password_hash.clone(),
            }))
    }

    async fn search_by_name_or_nick(&self, term: &str) -> Result<Vec<User>, DomainError> {
        let term = term.to_lowercase();
        Ok(self
            .users
            .lock()
            .expect("users mutex poisoned")
            .iter()
            .filter(|stored| {
                stored.user.name.to_lowercase().contains(&term)
                    || stored.user.nick.to_lowercase().contains(&term)
            })
            .map(|stored| stored.user.clone())
            .collect())
    }

    async fn update_user(&self, id: i64, patch: UserPatch) -> Result<bool, DomainError> {
        let mut users = self.users.lock().expect("users mutex poisoned");
        match users.iter_mut().find(|stored| stored.user.id == id) {
            Some(stored) => {
                stored.user.name = patch.name;
                stored.user.nick = patch.nick;
                stored.user.email = patch.email;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_user(&self, id: i64) -> Result<bool, DomainError> {
        let mut users = self.users.lock().expect("users mutex poisoned");
        let before = users.len();
        users.retain(|stored| stored.user.id != id);
        Ok(users.len() < before)
    }

    async fn follow(&self, user_id: i64, follower_id: i64) -> Result<(), DomainError> {
        self.follows
            .lock()
            .expect("follows mutex poisoned")
            .insert((user_id, follower_id));
        Ok(())
    }

    async fn unfollow(&self, user_id: i64, follower_id: i64) -> Result<(), DomainError> {
        self.follows
            .lock()
            .expect("follows mutex poisoned")
            .remove(&(user_id, follower_id));
        Ok(())
    }

    async fn list_followers(&self, user_id: i64) -> Result<Vec<User>, DomainError> {
        let follower_ids: Vec<i64> = self
            .follows
            .lock()
            .expect("follows mutex poisoned")
            .iter()
            .filter(|(followed, _)| *followed == user_id)
            .map(|(_, follower)| *follower)
            .collect();

        Ok(self
            .users
            .lock()
            .expect("users mutex poisoned")
            .iter()
            .filter(|stored| follower_ids.contains(&stored.user.id))
            .map(|stored| stored.user.clone())
            .collect())
    }

    async fn list_following(&self, user_id: i64) -> Result<Vec<User>, DomainError> {
        let followed_ids: Vec<i64> = self
            .follows
            .lock()
            .expect("follows mutex poisoned")
            .iter()
            .filter(|(_, follower)| *follower == user_id)
            .map(|(followed, _)| *followed)
            .collect();

        Ok(self
            .users
            .lock()
            .expect("users mutex poisoned")
            .iter()
            .filter(|stored| followed_ids.contains(&stored.user.id))
            .map(|stored| stored.user.clone())
            .collect())
    }

    async fn find_password_hash(&self, user_id: i64) -> Result<Option<String>, DomainError> {
        Ok(self
            .users
            .lock()
            .expect("users mutex poisoned")
            .iter()
            .find(|stored| stored.user.id == user_id)
            .map(|stored| stored.password_hash.clone()))
    }

    async fn update_password(
        &self,
        user_id: i64,
        password_hash: &str,
    ) -> Result<(), DomainError> {
        let mut users = self.users.lock().expect("users mutex poisoned");
        if let Some(stored) = users.iter_mut().find(|stored| stored.user.id == user_id) {
            stored.password_hash = password_hash.to_string();
        }
        Ok(())
    }
}

struct InMemoryPosts {
    posts: Mutex<Vec<Post>>,
    next_id: AtomicI64,
    users: Arc<InMemoryUsers>,
}

impl InMemoryPosts {
    fn new(users: Arc<InMemoryUsers>) -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            users,
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryPosts {
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
        let author_nick = self
            .users
            .nick_of(input.author_id)
            .ok_or_else(|| DomainError::NotFound("author".to_string()))?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let post = Post::new(
            id,
            input.title,
            input.content,
            input.author_id,
            author_nick,
            0,
            Utc::now(),
        )
        .map_err(|err| DomainError::Unexpected(err.to_string()))?;

        self.posts
            .lock()
            .expect("posts mutex poisoned")
            .push(post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, DomainError> {
        Ok(self
            .posts
            .lock()
            .expect("posts mutex poisoned")
            .iter()
            .find(|post| post.id == id)
            .cloned())
    }

    async fn feed_for_user(&self, user_id: i64) -> Result<Vec<Post>, DomainError> {
        let follows = self.users.follow_edges();
        let mut feed: Vec<Post> = self
            .posts
            .lock()
            .expect("posts mutex poisoned")
            .iter()
            .filter(|post| {
                post.author_id == user_id || follows.contains(&(post.author_id, user_id))
            })
            .cloned()
            .collect();
        feed.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(feed)
    }

    async fn update_post(&self, id: i64, patch: PostPatch) -> Result<bool, DomainError> {
        let mut posts = self.posts.lock().expect("posts mutex poisoned");
        match posts.iter_mut().find(|post| post.id == id) {
            Some(post) => {
                post.title = patch.title;
                post.content = patch.content;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_post(&self, id: i64) -> Result<bool, DomainError> {
        let mut posts = self.posts.lock().expect("posts mutex poisoned");
        let before = posts.len();
        posts.retain(|post| post.id != id);
        Ok(posts.len() < before)
    }

    async fn find_by_author(&self, author_id: i64) -> Result<Vec<Post>, DomainError> {
        let mut posts: Vec<Post> = self
            .posts
            .lock()
            .expect("posts mutex poisoned")
            .iter()
            .filter(|post| post.author_id == author_id)
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(posts)
    }

    async fn like_post(&self, id: i64) -> Result<bool, DomainError> {
        let mut posts = self.posts.lock().expect("posts mutex poisoned");
        match posts.iter_mut().find(|post| post.id == id) {
            Some(post) => {
                post.likes += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn deslike_post(&self, id: i64) -> Result<bool, DomainError> {
        let mut posts = self.posts.lock().expect("posts mutex poisoned");
        match posts.iter_mut().find(|post| post.id == id) {
            Some(post) => {
                post.likes = (post.likes - 1).max(0);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

struct TestApi {
    app: Router,
    jwt: Arc<JwtService>,
    users: Arc<InMemoryUsers>,
    posts: Arc<InMemoryPosts>,
}

impl TestApi {
    fn new() -> Self {
        let users = Arc::new(InMemoryUsers::new());
        let posts = Arc::new(InMemoryPosts::new(users.clone()));
        let users_dyn: Arc<dyn UserRepository> = users.clone();
        let posts_dyn: Arc<dyn PostRepository> = posts.clone();

        let jwt = Arc::new(JwtService::new(TEST_SECRET, 3600));
        let state = AppState::new(
            Arc::new(AuthService::new(users_dyn.clone(), jwt.clone())),
            Arc::new(UserService::new(users_dyn)),
            Arc::new(PostService::new(posts_dyn)),
            jwt.clone(),
        );

        Self {
            app: api_router(state),
            jwt,
            users,
            posts,
        }
    }

    async fn seed_user(&self, name: &str, nick: &str, email: &str, pass: &str) -> i64 {
        let hash = password::hash_password(pass).expect("hash must be created");
        let user = self
            .users
            .create_user(NewUser {
                name: name.to_string(),
                nick: nick.to_string(),
                email: email.to_string(),
                password_hash: hash,
            })
            .await
            .expect("seed user must be created");
        user.id
    }

    async fn seed_post(&self, author_id: i64, title: &str) -> i64 {
        let post = self
            .posts
            .create_post(NewPost {
                title: title.to_string(),
                content: "content".to_string(),
                author_id,
            })
            .await
            .expect("seed post must be created");
        post.id
    }

    fn token_for(&self, user_id: i64) -> String {
        self.jwt.issue_token(user_id).expect("token must be issued")
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("request must be handled");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body must be readable");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::String(
                String::from_utf8_lossy(&bytes).into_owned(),
            ))
        };
        (status, body)
    }
}

fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .expect("request must build"),
        None => builder.body(Body::empty()).expect("request must build"),
    }
}

#[tokio::test]
async fn register_returns_created_user_without_password() {
    let api = TestApi::new();

    let (status, body) = api
        .send(request(
            "POST",
            "/users",
            None,
            Some(json!({
                "name": "Ana",
                "nick": "ana",
                "email": "ana@x.com",
                "password": "secret"
            })),
        ))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Ana");
    assert!(body["id"].as_i64().expect("id must be present") > 0);
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn login_returns_a_token_and_rejects_wrong_password() {
    let api = TestApi::new();
    api.seed_user("Ana", "ana", "ana@x.com", "secret").await;

    let (status, body) = api
        .send(request(
            "POST",
            "/login",
            None,
            Some(json!({"email": "ana@x.com", "password": "secret"})),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    let token = body.as_str().expect("token must be a bare string");
    assert!(!token.is_empty());

    let (status, body) = api
        .send(request(
            "POST",
            "/login",
            None,
            Some(json!({"email": "ana@x.com", "password": "wrong"})),
        ))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "invalid credentials");

    // unknown email gets the same classification as a bad password
    let (status, _) = api
        .send(request(
            "POST",
            "/login",
            None,
            Some(json!({"email": "ghost@x.com", "password": "secret"})),
        ))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn protected_routes_reject_missing_or_malformed_tokens() {
    let api = TestApi::new();
    let user_id = api.seed_user("Ana", "ana", "ana@x.com", "secret").await;

    let (status, _) = api.send(request("GET", "/posts", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // the scheme keyword is case-sensitive
    let token = api.token_for(user_id);
    let req = Request::builder()
        .method("GET")
        .uri("/posts")
        .header(header::AUTHORIZATION, format!("bearer {token}"))
        .body(Body::empty())
        .expect("request must build");
    let (status, _) = api.send(req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = api
        .send(request("GET", "/posts", Some("not-a-token"), None))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn only_the_author_can_update_a_post() {
    let api = TestApi::new();
    let ana = api.seed_user("Ana", "ana", "ana@x.com", "secret").await;
    let bob = api.seed_user("Bob", "bob", "bob@x.com", "secret").await;
    let post_id = api.seed_post(ana, "first").await;

    let payload = json!({"title": "t", "content": "c"});

    let (status, _) = api
        .send(request(
            "PUT",
            &format!("/posts/{post_id}"),
            Some(&api.token_for(ana)),
            Some(payload.clone()),
        ))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = api
        .send(request(
            "PUT",
            &format!("/posts/{post_id}"),
            Some(&api.token_for(bob)),
            Some(payload),
        ))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "you cannot update a post that is not yours");
}

#[tokio::test]
async fn ownership_is_decided_before_payload_validation() {
    let api = TestApi::new();
    let ana = api.seed_user("Ana", "ana", "ana@x.com", "secret").await;
    let bob = api.seed_user("Bob", "bob", "bob@x.com", "secret").await;
    let post_id = api.seed_post(ana, "first").await;
    let bob_token = api.token_for(bob);

    // a stranger with a broken payload is still told 403, not 400
    let (status, _) = api
        .send(request(
            "PUT",
            &format!("/posts/{post_id}"),
            Some(&bob_token),
            Some(json!({"title": "", "content": "c"})),
        ))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = api
        .send(request(
            "PUT",
            &format!("/users/{ana}"),
            Some(&bob_token),
            Some(json!({"name": "", "nick": "", "email": "nope"})),
        ))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = api
        .send(request(
            "POST",
            &format!("/users/{ana}/update-password"),
            Some(&bob_token),
            Some(json!({"current": "", "new": ""})),
        ))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // the owner with the same broken payload gets the validation error
    let (status, _) = api
        .send(request(
            "PUT",
            &format!("/posts/{post_id}"),
            Some(&api.token_for(ana)),
            Some(json!({"title": "", "content": "c"})),
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn strangers_cannot_delete_accounts() {
    let api = TestApi::new();
    let ana = api.seed_user("Ana", "ana", "ana@x.com", "secret").await;
    let bob = api.seed_user("Bob", "bob", "bob@x.com", "secret").await;

    let (status, _) = api
        .send(request(
            "DELETE",
            &format!("/users/{ana}"),
            Some(&api.token_for(bob)),
            None,
        ))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn following_yourself_is_forbidden() {
    let api = TestApi::new();
    let ana = api.seed_user("Ana", "ana", "ana@x.com", "secret").await;

    let (status, body) = api
        .send(request(
            "POST",
            &format!("/users/{ana}/follow"),
            Some(&api.token_for(ana)),
            None,
        ))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "you cannot follow yourself");
}

#[tokio::test]
async fn follow_is_idempotent_and_unfollow_of_missing_edge_is_a_noop() {
    let api = TestApi::new();
    let ana = api.seed_user("Ana", "ana", "ana@x.com", "secret").await;
    let bob = api.seed_user("Bob", "bob", "bob@x.com", "secret").await;
    let bob_token = api.token_for(bob);

    for _ in 0..2 {
        let (status, _) = api
            .send(request(
                "POST",
                &format!("/users/{ana}/follow"),
                Some(&bob_token),
                None,
            ))
            .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    let (status, body) = api
        .send(request(
            "GET",
            &format!("/users/{bob}/following"),
            Some(&bob_token),
            None,
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    let following = body.as_array().expect("body must be a list");
    assert_eq!(following.len(), 1);
    assert_eq!(following[0]["id"].as_i64(), Some(ana));

    // unfollow twice; the second is a no-op, not an error
    for _ in 0..2 {
        let (status, _) = api
            .send(request(
                "POST",
                &format!("/users/{ana}/unfollow"),
                Some(&bob_token),
                None,
            ))
            .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }
}

#[tokio::test]
async fn feed_contains_own_and_followed_posts_newest_first() {
    let api = TestApi::new();
    let ana = api.seed_user("Ana", "ana", "ana@x.com", "secret").await;
    let bob = api.seed_user("Bob", "bob", "bob@x.com", "secret").await;
    let carl = api.seed_user("Carl", "carl", "carl@x.com", "secret").await;

    let p1 = api.seed_post(ana, "ana first").await;
    let p2 = api.seed_post(bob, "bob first").await;
    let p3 = api.seed_post(ana, "ana second").await;
    api.seed_post(carl, "carl, not followed").await;

    let ana_token = api.token_for(ana);
    let (status, _) = api
        .send(request(
            "POST",
            &format!("/users/{bob}/follow"),
            Some(&ana_token),
            None,
        ))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = api
        .send(request("GET", "/posts", Some(&ana_token), None))
        .await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<i64> = body
        .as_array()
        .expect("body must be a list")
        .iter()
        .map(|post| post["id"].as_i64().expect("post id must be present"))
        .collect();
    assert_eq!(ids, vec![p3, p2, p1]);
}

#[tokio::test]
async fn deslike_never_drives_likes_below_zero() {
    let api = TestApi::new();
    let ana = api.seed_user("Ana", "ana", "ana@x.com", "secret").await;
    let post_id = api.seed_post(ana, "first").await;
    let token = api.token_for(ana);

    let (status, _) = api
        .send(request(
            "POST",
            &format!("/posts/{post_id}/like"),
            Some(&token),
            None,
        ))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    for _ in 0..3 {
        let (status, _) = api
            .send(request(
                "POST",
                &format!("/posts/{post_id}/deslike"),
                Some(&token),
                None,
            ))
            .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    let (status, body) = api
        .send(request(
            "GET",
            &format!("/posts/{post_id}"),
            Some(&token),
            None,
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["likes"].as_i64(), Some(0));
}

#[tokio::test]
async fn non_numeric_path_parameter_is_bad_request() {
    let api = TestApi::new();
    let ana = api.seed_user("Ana", "ana", "ana@x.com", "secret").await;

    let (status, _) = api
        .send(request(
            "GET",
            "/posts/not-a-number",
            Some(&api.token_for(ana)),
            None,
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_post_is_not_found() {
    let api = TestApi::new();
    let ana = api.seed_user("Ana", "ana", "ana@x.com", "secret").await;

    let (status, _) = api
        .send(request("GET", "/posts/999", Some(&api.token_for(ana)), None))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn password_change_requires_the_current_password() {
    let api = TestApi::new();
    let ana = api.seed_user("Ana", "ana", "ana@x.com", "secret").await;
    let token = api.token_for(ana);

    let (status, body) = api
        .send(request(
            "POST",
            &format!("/users/{ana}/update-password"),
            Some(&token),
            Some(json!({"current": "wrong", "new": "brand-new"})),
        ))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "current password does not match");

    let (status, _) = api
        .send(request(
            "POST",
            &format!("/users/{ana}/update-password"),
            Some(&token),
            Some(json!({"current": "secret", "new": "brand-new"})),
        ))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = api
        .send(request(
            "POST",
            "/login",
            None,
            Some(json!({"email": "ana@x.com", "password": "brand-new"})),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn created_post_takes_author_from_the_token_not_the_payload() {
    let api = TestApi::new();
    let ana = api.seed_user("Ana", "ana", "ana@x.com", "secret").await;
    let bob = api.seed_user("Bob", "bob", "bob@x.com", "secret").await;

    let (status, body) = api
        .send(request(
            "POST",
            "/posts",
            Some(&api.token_for(bob)),
            Some(json!({"title": "hello", "content": "world", "author_id": ana})),
        ))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["author_id"].as_i64(), Some(bob));
    assert_eq!(body["author_nick"], "bob");
    assert_eq!(body["likes"].as_i64(), Some(0));
}
