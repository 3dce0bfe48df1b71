use serde::{Deserialize, Serialize, Serializer};

#[derive(Deserialize, Serialize, Debug)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub book_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub status: String,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub title: String,
    pub author: String,
    pub first_publish_year: PublishYear,
    pub subject: Vec<String>,
    pub similarity_score: f64,
}

/// Serialized as a plain integer when known, as the string `"Unknown"`
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishYear {
    Year(i32),
    Unknown,
}

impl From<Option<i32>> for PublishYear {
    fn from(year: Option<i32>) -> Self {
        match year {
            Some(year) => PublishYear::Year(year),
            None => PublishYear::Unknown,
        }
    }
}

impl Serialize for PublishYear {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PublishYear::Year(year) => serializer.serialize_i32(*year),
            PublishYear::Unknown => serializer.serialize_str("Unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_year_serializes_as_number_or_sentinel() {
        assert_eq!(
            serde_json::to_string(&PublishYear::Year(1965)).unwrap(),
            "1965"
        );
        assert_eq!(
            serde_json::to_string(&PublishYear::Unknown).unwrap(),
            "\"Unknown\""
        );
    }

    #[test]
    fn recommendation_serializes_wire_shape() {
        let recommendation = Recommendation {
            title: "Dune Messiah".to_string(),
            author: "Frank Herbert".to_string(),
            first_publish_year: PublishYear::from(None),
            subject: vec!["science fiction".to_string()],
            similarity_score: 0.482,
        };

        let json = serde_json::to_value(&recommendation).unwrap();
        assert_eq!(json["first_publish_year"], "Unknown");
        assert_eq!(json["similarity_score"], 0.482);
        assert_eq!(json["subject"][0], "science fiction");
    }

    #[test]
    fn request_tolerates_missing_book_name() {
        let request: RecommendRequest = serde_json::from_str("{}").unwrap();
        assert!(request.book_name.is_none());
    }
}
