use std::collections::{HashMap, HashSet};

use crate::utils::text::tokenize_text;

/// Sparse term-to-weight mapping for one document. Built per request and
/// discarded after scoring.
pub type FeatureVector = HashMap<String, f64>;

/// Builds L2-normalized TF-IDF vectors over the given corpus. IDF is
/// smoothed (`ln((1 + n) / (1 + df)) + 1`) so terms appearing in every
/// document keep a nonzero weight. The weighting is corpus-relative:
/// adding or removing any document changes every vector.
pub fn tfidf_vectors(documents: &[String]) -> Vec<FeatureVector> {
    let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize_text(d)).collect();

    let mut document_frequency: HashMap<&str, usize> = HashMap::new();
    for tokens in &tokenized {
        let mut seen: HashSet<&str> = HashSet::new();
        for token in tokens {
            if seen.insert(token) {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }
    }

    let corpus_size = documents.len() as f64;

    tokenized
        .iter()
        .map(|tokens| {
            let mut term_counts: HashMap<&str, usize> = HashMap::new();
            for token in tokens {
                *term_counts.entry(token).or_insert(0) += 1;
            }

            let mut vector: FeatureVector = term_counts
                .into_iter()
                .map(|(term, count)| {
                    let df = document_frequency[term] as f64;
                    let idf = ((1.0 + corpus_size) / (1.0 + df)).ln() + 1.0;
                    (term.to_string(), count as f64 * idf)
                })
                .collect();

            let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                for weight in vector.values_mut() {
                    *weight /= norm;
                }
            }

            vector
        })
        .collect()
}

/// Cosine similarity clamped to [0, 1]. A zero vector on either side
/// compares as exactly 0.0.
pub fn cosine_similarity(a: &FeatureVector, b: &FeatureVector) -> f64 {
    let norm_a = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b = b.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small
        .iter()
        .filter_map(|(term, weight)| large.get(term).map(|other| weight * other))
        .sum();

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Scores every candidate blob against the target blob over a joint
/// vector space. Scores preserve candidate input order; sorting is the
/// caller's responsibility.
pub fn score_candidates(target: &str, candidates: &[String]) -> Vec<f64> {
    let mut documents = Vec::with_capacity(candidates.len() + 1);
    documents.push(target.to_string());
    documents.extend_from_slice(candidates);

    let vectors = tfidf_vectors(&documents);
    let target_vector = &vectors[0];

    vectors[1..]
        .iter()
        .map(|candidate| cosine_similarity(target_vector, candidate))
        .collect()
}
