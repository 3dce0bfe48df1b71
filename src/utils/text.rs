use regex::Regex;

/// Common English words carrying no ranking signal; filtered before
/// weighting so they cannot dominate the term space.
const STOPWORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "all", "also", "and", "any", "are", "because",
    "been", "before", "being", "below", "between", "both", "but", "can", "could", "did", "does",
    "doing", "down", "during", "each", "few", "for", "from", "further", "had", "has", "have",
    "having", "her", "here", "hers", "herself", "him", "himself", "his", "how", "into", "its",
    "itself", "just", "may", "might", "more", "most", "must", "nor", "not", "now", "off", "once",
    "only", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "shall", "she",
    "should", "some", "such", "than", "that", "the", "their", "theirs", "them", "themselves",
    "then", "there", "these", "they", "this", "those", "through", "too", "under", "until", "very",
    "was", "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with",
    "would", "you", "your", "yours", "yourself", "yourselves",
];

pub fn tokenize_text(text: &str) -> Vec<String> {
    let re = Regex::new(r"\b[a-z0-9]+\b").unwrap();
    re.find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .filter(|word| word.len() > 2)
        .filter(|word| !STOPWORDS.contains(&word.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_splits_on_non_alphanumerics() {
        assert_eq!(
            tokenize_text("Dune: Messiah-Cycle"),
            vec!["dune", "messiah", "cycle"]
        );
    }

    #[test]
    fn drops_short_words_and_stopwords() {
        assert_eq!(
            tokenize_text("the spice of Arrakis and its sand"),
            vec!["spice", "arrakis", "sand"]
        );
    }

    #[test]
    fn keeps_repeated_terms_for_frequency_counting() {
        assert_eq!(tokenize_text("spice spice spice"), vec!["spice"; 3]);
    }

    #[test]
    fn empty_text_yields_no_tokens() {
        assert!(tokenize_text("").is_empty());
        assert!(tokenize_text("   \n\t ").is_empty());
    }
}
