use std::collections::HashSet;
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::models::book::BookRecord;
use crate::models::responses::{PublishYear, Recommendation};
use crate::services::openlibrary::{MetadataProvider, ProviderError};
use crate::services::similarity::score_candidates;

/// Subjects swept per request. Bounds provider fan-out and keeps the
/// long tail of over-specific subjects out of the pool.
const MAX_SUBJECT_QUERIES: usize = 23;
const SEARCH_PAGE_SIZE: usize = 10;
const MAX_RECOMMENDATIONS: usize = 5;
const SUBJECTS_PER_RECOMMENDATION: usize = 3;

/// Queried when the target record carries no subjects at all.
const FALLBACK_SUBJECT: &str = "fiction";

pub type Provider = Arc<dyn MetadataProvider + Send + Sync>;

pub struct Recommender {
    provider: Provider,
}

impl Recommender {
    pub fn new(provider: Provider) -> Self {
        Self { provider }
    }

    /// Runs the full pipeline for one title. Any internal failure is
    /// logged and degrades to an empty list; callers always receive a
    /// plain list, never an error.
    pub async fn get_similar_books(&self, book_name: &str) -> Vec<Recommendation> {
        match self.recommend(book_name).await {
            Ok(recommendations) => recommendations,
            Err(e) => {
                error!("Failed to build recommendations for '{}': {}", book_name, e);
                Vec::new()
            }
        }
    }

    async fn recommend(&self, book_name: &str) -> Result<Vec<Recommendation>, ProviderError> {
        let Some(target) = self.fetch_target(book_name).await? else {
            info!("No catalog match for '{}'", book_name);
            return Ok(Vec::new());
        };

        let subjects = if target.subjects.is_empty() {
            vec![FALLBACK_SUBJECT.to_string()]
        } else {
            target.subjects.clone()
        };

        let candidates = self.gather_candidates(&subjects).await;
        info!(
            "Gathered {} unique candidates for '{}'",
            candidates.len(),
            target.title
        );

        let target_text = target.feature_text();
        let candidate_texts: Vec<String> =
            candidates.iter().map(BookRecord::feature_text).collect();
        let scores = score_candidates(&target_text, &candidate_texts);

        let mut scored: Vec<(&BookRecord, f64)> = candidates.iter().zip(scores).collect();
        // Stable sort keeps first-seen order among equal scores.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        let recommendations = scored
            .into_iter()
            .filter(|(candidate, _)| candidate.title != target.title)
            .take(MAX_RECOMMENDATIONS)
            .map(|(candidate, score)| project(candidate, score))
            .collect();

        Ok(recommendations)
    }

    /// Title lookup: the first page hit wins. A matched work key pulls in
    /// the description; a failed detail fetch degrades to no description.
    async fn fetch_target(&self, book_name: &str) -> Result<Option<BookRecord>, ProviderError> {
        let docs = self
            .provider
            .search_by_title(book_name, SEARCH_PAGE_SIZE)
            .await?;

        let Some(mut target) = docs.into_iter().next() else {
            return Ok(None);
        };

        if let Some(key) = target.key.clone() {
            match self.provider.get_work_detail(&key).await {
                Ok(description) => target.description = description,
                Err(e) => warn!("Work detail fetch failed for {}: {}", key, e),
            }
        }

        Ok(Some(target))
    }

    /// Sequential subject sweep. The first occurrence of a title wins;
    /// a failed subject query contributes nothing and the sweep goes on.
    async fn gather_candidates(&self, subjects: &[String]) -> Vec<BookRecord> {
        let mut seen_titles: HashSet<String> = HashSet::new();
        let mut candidates = Vec::new();

        for subject in subjects.iter().take(MAX_SUBJECT_QUERIES) {
            info!("Querying subject: {}", subject);

            let docs = match self
                .provider
                .search_by_subject(subject, SEARCH_PAGE_SIZE)
                .await
            {
                Ok(docs) => docs,
                Err(e) => {
                    warn!("Subject query '{}' failed: {}", subject, e);
                    continue;
                }
            };

            for doc in docs {
                if seen_titles.insert(doc.title.clone()) {
                    candidates.push(doc);
                }
            }
        }

        candidates
    }
}

fn project(candidate: &BookRecord, score: f64) -> Recommendation {
    Recommendation {
        title: candidate.title.clone(),
        author: candidate
            .authors
            .first()
            .cloned()
            .unwrap_or_else(|| "Unknown".to_string()),
        first_publish_year: PublishYear::from(candidate.first_publish_year),
        subject: candidate
            .subjects
            .iter()
            .take(SUBJECTS_PER_RECOMMENDATION)
            .cloned()
            .collect(),
        similarity_score: (score * 1000.0).round() / 1000.0,
    }
}
