use std::net::SocketAddr;
use std::time::Duration;

use serde_json::{Value, json};

use trivia_server::build_app;
use trivia_server::config::ServerConfig;

pub struct TestServer {
    pub addr: SocketAddr,
    _shutdown: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Start a test server with the default config on an ephemeral port.
    pub async fn new() -> Self {
        Self::from_config(ServerConfig::default()).await
    }

    pub async fn from_config(config: ServerConfig) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (app, _state) = build_app(config);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start accepting
        tokio::time::sleep(Duration::from_millis(20)).await;

        Self {
            addr,
            _shutdown: handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// POST a JSON body to /submit, returning (status, body).
    pub async fn submit(&self, body: &Value) -> (u16, Value) {
        let resp = reqwest::Client::new()
            .post(format!("{}/submit", self.base_url()))
            .json(body)
            .send()
            .await
            .unwrap();
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap())
    }

    /// GET /leaderboard with an optional raw `questionCount` value.
    pub async fn leaderboard(&self, question_count: Option<&str>) -> Value {
        let mut url = format!("{}/leaderboard", self.base_url());
        if let Some(qc) = question_count {
            url.push_str(&format!("?questionCount={qc}"));
        }
        let resp = reqwest::get(url).await.unwrap();
        assert_eq!(resp.status(), 200);
        resp.json().await.unwrap()
    }
}

/// A well-formed submission body.
pub fn score_body(name: &str, score: f64, time: f64, question_count: u32) -> Value {
    json!({
        "name": name,
        "score": score,
        "time": time,
        "questionCount": question_count,
    })
}

/// Names of a tier's entries, in rank order.
pub fn names(tier: &Value) -> Vec<String> {
    tier.as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap().to_string())
        .collect()
}

pub fn empty_leaderboards() -> Value {
    json!({ "10": [], "20": [], "50": [], "100": [] })
}
