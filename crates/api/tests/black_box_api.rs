use reqwest::StatusCode;
use serde_json::json;

use vitrine_api::config::AppConfig;

const ADMIN_PASSWORD: &str = "correct-horse";

fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        admin_password: ADMIN_PASSWORD.to_string(),
        session_secret: "test-secret".to_string(),
        use_persistent_store: false,
        database_url: None,
        smtp: None,
    }
}

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build the app (same router as prod) on the in-memory store, bound
        // to an ephemeral port.
        let app = vitrine_api::app::build_app(test_config()).await;
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{addr}");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Client that does not follow redirects, so 303s stay observable.
fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

/// Log in and return the `session=<token>` cookie pair.
async fn login(client: &reqwest::Client, base_url: &str) -> String {
    let res = client
        .post(format!("{base_url}/admin/login"))
        .json(&json!({ "password": ADMIN_PASSWORD }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers().get("location").unwrap(), "/admin/dashboard");

    let set_cookie = res
        .headers()
        .get("set-cookie")
        .expect("login should set a session cookie")
        .to_str()
        .unwrap();
    assert!(set_cookie.contains("HttpOnly"));

    set_cookie.split(';').next().unwrap().to_string()
}

async fn create_project(
    client: &reqwest::Client,
    base_url: &str,
    cookie: &str,
    title: &str,
    is_visible: bool,
) -> String {
    let res = client
        .post(format!("{base_url}/admin/projects"))
        .header("cookie", cookie)
        .json(&json!({
            "title": title,
            "description": "A description long enough to pass validation.",
            "tags": "Rust, axum",
            "isVisible": is_visible,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let body: serde_json::Value = res.json().await.unwrap();
    body["project"]["id"].as_str().unwrap().to_string()
}

async fn admin_project_titles(client: &reqwest::Client, base_url: &str, cookie: &str) -> Vec<String> {
    let res = client
        .get(format!("{base_url}/admin/projects"))
        .header("cookie", cookie)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn health_is_public() {
    let srv = TestServer::spawn().await;
    let res = client().get(format!("{}/health", srv.base_url)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn admin_gate_redirects_unauthenticated_requests_to_login() {
    let srv = TestServer::spawn().await;
    let client = client();

    let res = client
        .get(format!("{}/admin/dashboard", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers().get("location").unwrap(), "/admin/login");

    // A tampered cookie is just as unauthenticated.
    let res = client
        .get(format!("{}/admin/dashboard", srv.base_url))
        .header("cookie", "session=not.a.real-token")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn wrong_password_gets_a_generic_error_and_no_cookie() {
    let srv = TestServer::spawn().await;

    let res = client()
        .post(format!("{}/admin/login", srv.base_url))
        .json(&json!({ "password": "guess" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert!(res.headers().get("set-cookie").is_none());

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Invalid password"));
}

#[tokio::test]
async fn login_cookie_is_accepted_by_the_gate() {
    let srv = TestServer::spawn().await;
    let client = client();
    let cookie = login(&client, &srv.base_url).await;

    let res = client
        .get(format!("{}/admin/dashboard", srv.base_url))
        .header("cookie", &cookie)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["admin"]["email"], json!("admin@example.com"));
    assert!(body["content"]["projects"].is_array());
    assert!(body["content"]["messages"].is_array());
}

#[tokio::test]
async fn logout_clears_the_cookie_and_redirects_to_login() {
    let srv = TestServer::spawn().await;
    let client = client();

    let res = client
        .post(format!("{}/admin/logout", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers().get("location").unwrap(), "/admin/login");

    let set_cookie = res.headers().get("set-cookie").unwrap().to_str().unwrap();
    assert!(set_cookie.starts_with("session="));
    assert!(set_cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn project_crud_roundtrip() {
    let srv = TestServer::spawn().await;
    let client = client();
    let cookie = login(&client, &srv.base_url).await;

    let id = create_project(&client, &srv.base_url, &cookie, "Vision AI", true).await;
    assert_eq!(admin_project_titles(&client, &srv.base_url, &cookie).await, ["Vision AI"]);

    // Update
    let res = client
        .put(format!("{}/admin/projects/{id}", srv.base_url))
        .header("cookie", &cookie)
        .json(&json!({
            "title": "Vision AI v2",
            "description": "A description long enough to pass validation.",
            "isVisible": true,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(admin_project_titles(&client, &srv.base_url, &cookie).await, ["Vision AI v2"]);

    // Update of an unknown id is a 404.
    let res = client
        .put(format!(
            "{}/admin/projects/00000000-0000-7000-8000-000000000000",
            srv.base_url
        ))
        .header("cookie", &cookie)
        .json(&json!({
            "title": "Ghost",
            "description": "A description long enough to pass validation.",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Delete
    let res = client
        .delete(format!("{}/admin/projects/{id}", srv.base_url))
        .header("cookie", &cookie)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(admin_project_titles(&client, &srv.base_url, &cookie).await.is_empty());
}

#[tokio::test]
async fn invalid_project_input_returns_field_errors_without_persisting() {
    let srv = TestServer::spawn().await;
    let client = client();
    let cookie = login(&client, &srv.base_url).await;

    let res = client
        .post(format!("{}/admin/projects", srv.base_url))
        .header("cookie", &cookie)
        .json(&json!({
            "title": "",
            "description": "short",
            "link": "not-a-url",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["errors"]["title"][0], json!("Title is required"));
    assert_eq!(body["errors"]["link"][0], json!("Invalid URL"));

    assert!(admin_project_titles(&client, &srv.base_url, &cookie).await.is_empty());
}

#[tokio::test]
async fn contact_form_validates_then_lands_in_the_admin_inbox() {
    let srv = TestServer::spawn().await;
    let client = client();

    // Name under two characters and a short message are both rejected.
    let res = client
        .post(format!("{}/contact", srv.base_url))
        .json(&json!({ "name": "A", "email": "a@example.com", "message": "hi" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["errors"]["name"][0], json!("Name is required"));
    assert_eq!(
        body["errors"]["message"][0],
        json!("Message must be at least 10 characters")
    );

    // A valid submission persists (no SMTP configured in tests, so the
    // notification is skipped).
    let res = client
        .post(format!("{}/contact", srv.base_url))
        .json(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "I would like to talk about a project.",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["success"], json!(true));

    let cookie = login(&client, &srv.base_url).await;
    let res = client
        .get(format!("{}/admin/messages", srv.base_url))
        .header("cookie", &cookie)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], json!("Ada"));
    assert_eq!(items[0]["read"], json!(false));
}

#[tokio::test]
async fn reorder_rejects_collections_outside_the_allow_list() {
    let srv = TestServer::spawn().await;
    let client = client();
    let cookie = login(&client, &srv.base_url).await;

    for collection in ["message", "profile", "users", "projects; DROP TABLE projects"] {
        let res = client
            .put(format!("{}/admin/reorder", srv.base_url))
            .header("cookie", &cookie)
            .json(&json!({ "collection": collection, "items": [] }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{collection:?} should be rejected");
    }
}

#[tokio::test]
async fn reorder_permutation_is_reflected_in_reads() {
    let srv = TestServer::spawn().await;
    let client = client();
    let cookie = login(&client, &srv.base_url).await;

    let a = create_project(&client, &srv.base_url, &cookie, "alpha", true).await;
    let b = create_project(&client, &srv.base_url, &cookie, "beta", true).await;
    let c = create_project(&client, &srv.base_url, &cookie, "gamma", true).await;

    // The legacy field name `model` is accepted too.
    let res = client
        .put(format!("{}/admin/reorder", srv.base_url))
        .header("cookie", &cookie)
        .json(&json!({
            "model": "project",
            "items": [
                { "id": c, "order": 0 },
                { "id": a, "order": 1 },
                { "id": b, "order": 2 },
            ],
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    assert_eq!(
        admin_project_titles(&client, &srv.base_url, &cookie).await,
        ["gamma", "alpha", "beta"]
    );
}

#[tokio::test]
async fn reorder_with_an_unknown_id_applies_nothing() {
    let srv = TestServer::spawn().await;
    let client = client();
    let cookie = login(&client, &srv.base_url).await;

    let a = create_project(&client, &srv.base_url, &cookie, "alpha", true).await;
    create_project(&client, &srv.base_url, &cookie, "beta", true).await;

    let res = client
        .put(format!("{}/admin/reorder", srv.base_url))
        .header("cookie", &cookie)
        .json(&json!({
            "collection": "project",
            "items": [
                { "id": a, "order": 9 },
                { "id": "00000000-0000-7000-8000-000000000000", "order": 10 },
            ],
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Creation order still holds: nothing was applied.
    assert_eq!(
        admin_project_titles(&client, &srv.base_url, &cookie).await,
        ["alpha", "beta"]
    );
}

#[tokio::test]
async fn profile_upsert_updates_in_place() {
    let srv = TestServer::spawn().await;
    let client = client();
    let cookie = login(&client, &srv.base_url).await;

    let put_profile = |bio: &str| {
        let client = client.clone();
        let url = format!("{}/admin/profile", srv.base_url);
        let cookie = cookie.clone();
        let body = json!({
            "bio": bio,
            "careerObjective": "Build useful systems with careful engineering.",
        });
        async move {
            let res = client
                .put(url)
                .header("cookie", cookie)
                .json(&body)
                .send()
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::OK);
            let body: serde_json::Value = res.json().await.unwrap();
            body["profile"].clone()
        }
    };

    let first = put_profile("First bio, long enough to validate.").await;
    let second = put_profile("Second bio, long enough to validate.").await;

    // Same row both times.
    assert_eq!(first["id"], second["id"]);

    let res = client
        .get(format!("{}/admin/profile", srv.base_url))
        .header("cookie", &cookie)
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["profile"]["bio"], json!("Second bio, long enough to validate."));
}

#[tokio::test]
async fn public_content_hides_invisible_projects() {
    let srv = TestServer::spawn().await;
    let client = client();
    let cookie = login(&client, &srv.base_url).await;

    create_project(&client, &srv.base_url, &cookie, "public", true).await;
    create_project(&client, &srv.base_url, &cookie, "draft", false).await;

    // No session required for the public payload.
    let res = client.get(format!("{}/content", srv.base_url)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    let titles: Vec<&str> = body["projects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["public"]);

    // The admin list still shows both.
    assert_eq!(
        admin_project_titles(&client, &srv.base_url, &cookie).await,
        ["public", "draft"]
    );
}

#[tokio::test]
async fn hero_upsert_splits_keywords_and_stays_singleton() {
    let srv = TestServer::spawn().await;
    let client = client();
    let cookie = login(&client, &srv.base_url).await;

    let res = client
        .put(format!("{}/admin/hero", srv.base_url))
        .header("cookie", &cookie)
        .json(&json!({ "heading": "Hi, I'm Ada", "keywords": "AI, ML, Systems" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["hero"]["keywords"], json!(["AI", "ML", "Systems"]));
    let first_id = body["hero"]["id"].clone();

    let res = client
        .put(format!("{}/admin/hero", srv.base_url))
        .header("cookie", &cookie)
        .json(&json!({ "heading": "Hello again", "keywords": "" }))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["hero"]["id"], first_id);
    assert_eq!(body["hero"]["heading"], json!("Hello again"));
}
