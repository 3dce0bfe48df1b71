use serde::Deserialize;

/// One book as returned by the catalog search API. Fetched fresh per
/// request, never persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct BookRecord {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "author_name")]
    pub authors: Vec<String>,
    #[serde(default, rename = "subject")]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub first_publish_year: Option<i32>,
    #[serde(default)]
    pub description: Option<Description>,
}

/// The catalog serves descriptions either as a bare string or as a
/// `{"type": "/type/text", "value": "..."}` object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Description {
    PlainText(String),
    Structured { value: String },
}

impl Description {
    pub fn text(&self) -> &str {
        match self {
            Description::PlainText(text) => text,
            Description::Structured { value } => value,
        }
    }
}

impl BookRecord {
    /// Flattens the record's textual metadata into the blob handed to the
    /// vectorizer: subjects, then authors, then description text. Missing
    /// fields contribute nothing; year and key stay out of similarity.
    pub fn feature_text(&self) -> String {
        let description = self
            .description
            .as_ref()
            .map(Description::text)
            .unwrap_or_default();

        format!(
            "{} {} {}",
            self.subjects.join(" "),
            self.authors.join(" "),
            description
        )
    }
}
