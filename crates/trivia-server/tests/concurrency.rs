#[allow(dead_code)]
mod common;

use common::{TestServer, score_body};
use trivia_core::MAX_ENTRIES;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_submissions_keep_tiers_bounded_and_sorted() {
    let server = TestServer::new().await;
    let base = server.base_url();

    let mut handles = Vec::new();
    for i in 0..60_u32 {
        let base = base.clone();
        handles.push(tokio::spawn(async move {
            let tier = [10, 20, 50, 100][(i % 4) as usize];
            let body = score_body(&format!("p{i}"), f64::from(i % 17), f64::from(i % 5), tier);
            let resp = reqwest::Client::new()
                .post(format!("{base}/submit"))
                .json(&body)
                .send()
                .await
                .unwrap();
            assert_eq!(resp.status(), 200);
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let all = server.leaderboard(None).await;
    for tier in ["10", "20", "50", "100"] {
        let entries = all[tier].as_array().unwrap();
        assert_eq!(entries.len(), MAX_ENTRIES, "Tier {tier} should be full");
        for entry in entries {
            assert_eq!(entry["questionCount"].to_string(), tier);
        }
        for pair in entries.windows(2) {
            let (a_score, b_score) = (pair[0]["score"].as_f64().unwrap(), pair[1]["score"].as_f64().unwrap());
            let (a_time, b_time) = (pair[0]["time"].as_f64().unwrap(), pair[1]["time"].as_f64().unwrap());
            assert!(
                a_score > b_score || (a_score == b_score && a_time <= b_time),
                "Tier {tier} out of order: {} before {}",
                pair[0],
                pair[1]
            );
        }
    }
}
