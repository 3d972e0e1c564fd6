use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use sqlx::SqlitePool;

use hackdesk::config::Config;
use hackdesk::email::Mailer;

pub const PASSWORD: &str = "motdepasse123";

/// Captures outgoing mail instead of talking to an SMTP relay.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, to: &str, subject: &str, _html_body: &str) -> Result<(), String> {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), subject.to_string()));
        Ok(())
    }
}

/// A running test server backed by its own in-memory database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: SqlitePool,
    pub mailer: Arc<RecordingMailer>,
}

/// One browser: its own cookie store, redirects left to the test.
pub struct Browser<'a> {
    app: &'a TestApp,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn browser(&self) -> Browser<'_> {
        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .cookie_store(true)
            .build()
            .unwrap();
        Browser { app: self, client }
    }

    /// A fresh browser with a registered, logged-in account.
    pub async fn signed_up(&self, lastname: &str, firstname: &str, email: &str) -> Browser<'_> {
        let browser = self.browser();
        let resp = browser.register(lastname, firstname, email, PASSWORD, PASSWORD).await;
        assert_eq!(location(&resp), "/dashboard", "registration failed for {email}");
        browser
    }

    pub async fn count(&self, sql: &str) -> i64 {
        sqlx::query_scalar(sql).fetch_one(&self.pool).await.unwrap()
    }

    pub async fn id_of(&self, sql: &str, key: &str) -> i64 {
        sqlx::query_scalar(sql)
            .bind(key)
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }
}

impl Browser<'_> {
    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.app.url(path))
            .send()
            .await
            .expect("get request failed")
    }

    pub async fn post(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.client
            .post(self.app.url(path))
            .form(form)
            .send()
            .await
            .expect("post request failed")
    }

    /// GET `path` and return the rendered page, asserting it rendered.
    pub async fn page(&self, path: &str) -> String {
        let resp = self.get(path).await;
        assert_eq!(resp.status(), StatusCode::OK, "GET {path} did not render");
        resp.text().await.unwrap()
    }

    /// Follow a redirect response and return the page it lands on.
    pub async fn follow(&self, resp: Response) -> String {
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        self.page(&location(&resp)).await
    }

    pub async fn register(
        &self,
        lastname: &str,
        firstname: &str,
        email: &str,
        password: &str,
        confirmation: &str,
    ) -> Response {
        self.post(
            "/register",
            &[
                ("lastname", lastname),
                ("firstname", firstname),
                ("email", email),
                ("password", password),
                ("confirmation", confirmation),
            ],
        )
        .await
    }

    pub async fn login(&self, email: &str, password: &str) -> Response {
        self.post("/", &[("email", email), ("password", password)])
            .await
    }

    pub async fn add_client(&self, lastname: &str) -> Response {
        self.post(
            "/add-a-client",
            &[
                ("lastname", lastname),
                ("firstname", "jean"),
                ("enterprise", "ACME"),
                ("phone_number", "0601020304"),
                ("email", "Contact@Acme.fr"),
            ],
        )
        .await
    }

    pub async fn add_project(&self, name: &str, status: &str, rate: &str, client_id: i64) -> Response {
        let client = client_id.to_string();
        self.post(
            "/add-a-project",
            &[
                ("name", name),
                ("description", "Site vitrine"),
                ("status", status),
                ("hourly_rate", rate),
                ("client", &client),
            ],
        )
        .await
    }

    pub async fn add_task(&self, name: &str, time_spent: &str, project_id: i64) -> Response {
        let project = project_id.to_string();
        self.post(
            "/add-a-task",
            &[
                ("name", name),
                ("status", "En cours"),
                ("time_spent", time_spent),
                ("project", &project),
            ],
        )
        .await
    }
}

pub fn location(resp: &Response) -> String {
    resp.headers()
        .get("location")
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default()
}

/// Spawn a test app with a fresh in-memory database.
pub async fn spawn_app() -> TestApp {
    // A single connection keeps every query on the same in-memory database.
    let pool = hackdesk::db::connect("sqlite::memory:", 1)
        .await
        .expect("Failed to open test database");

    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        secret_key: "test-secret-key-that-is-long-enough-for-cookies".to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        base_url: "http://localhost:0".to_string(),
        session_ttl_hours: 1,
        log_level: "warn".to_string(),
        smtp: None,
    };

    let mailer = Arc::new(RecordingMailer::default());
    let app = hackdesk::build_app(pool.clone(), config, Some(mailer.clone()));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp { addr, pool, mailer }
}
