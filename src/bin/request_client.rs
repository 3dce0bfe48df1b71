use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, warn};

const RECOMMENDATION_SERVICE_URL: &str = "http://0.0.0.0:5002";

#[derive(Debug, Deserialize)]
struct Recommendation {
    title: String,
    author: String,
    first_publish_year: serde_json::Value,
    subject: Vec<String>,
    similarity_score: f64,
}

#[derive(Debug, Deserialize)]
struct RecommendResponse {
    status: String,
    recommendations: Vec<Recommendation>,
}

struct RequestClient {
    client: Client,
}

impl RequestClient {
    fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    async fn wait_for_service(&self) {
        info!("Waiting for recommendation service to be ready...");

        let url = format!("{}/status", RECOMMENDATION_SERVICE_URL);
        loop {
            match self.client.get(&url).send().await {
                Ok(response) if response.status().is_success() => {
                    info!("Recommendation service is ready");
                    break;
                }
                Ok(response) => {
                    warn!(
                        "Recommendation service responded with status: {}",
                        response.status()
                    );
                }
                Err(e) => {
                    warn!("Recommendation service not ready: {}", e);
                }
            }
            sleep(Duration::from_secs(2)).await;
        }
    }

    async fn request_recommendations(
        &self,
        book_name: &str,
    ) -> Result<RecommendResponse, Box<dyn std::error::Error>> {
        info!("Requesting recommendations for '{}'", book_name);

        let url = format!("{}/api/webhook", RECOMMENDATION_SERVICE_URL);
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "book_name": book_name }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(format!(
                "Request for '{}' failed: {}",
                book_name,
                response.status()
            )
            .into());
        }

        Ok(response.json().await?)
    }

    async fn run(&self, titles: Vec<String>) {
        for title in titles {
            match self.request_recommendations(&title).await {
                Ok(response) => {
                    if response.status != "success" {
                        warn!("Unexpected status '{}' for '{}'", response.status, title);
                        continue;
                    }

                    if response.recommendations.is_empty() {
                        info!("No recommendations for '{}'", title);
                        continue;
                    }

                    info!(
                        "{} recommendations for '{}':",
                        response.recommendations.len(),
                        title
                    );
                    for rec in &response.recommendations {
                        // Year arrives as a number or the string "Unknown".
                        let year = match &rec.first_publish_year {
                            serde_json::Value::Number(n) => n.to_string(),
                            serde_json::Value::String(s) => s.clone(),
                            _ => "Unknown".to_string(),
                        };
                        info!(
                            "  {:.3}  {} by {} ({}) [{}]",
                            rec.similarity_score,
                            rec.title,
                            rec.author,
                            year,
                            rec.subject.join(", ")
                        );
                    }
                }
                Err(e) => error!("✗ Failed to get recommendations for '{}': {}", title, e),
            }

            sleep(Duration::from_millis(100)).await;
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("request_client=info")
        .init();

    let client = RequestClient::new();
    client.wait_for_service().await;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let titles = if args.is_empty() {
        let defaults = vec![
            "Dune".to_string(),
            "Pride and Prejudice".to_string(),
            "Frankenstein".to_string(),
        ];
        info!("No titles specified, requesting defaults: {:?}", defaults);
        defaults
    } else {
        args
    };

    client.run(titles).await;
}
