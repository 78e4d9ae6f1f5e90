use serde::{Deserialize, Serialize};

/// One sentence wrapped for the analysis service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewItem {
    /// Sentence text. The field name (including the missing "e") is the
    /// service's wire contract and must stay as-is.
    pub reviewr: String,
}

/// Request body for POST /analyze-sentiment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Sentences in source-text order
    pub reviews: Vec<ReviewItem>,

    /// Model name with the version suffix already stripped ("MFNb", "MFSvc")
    pub model: String,
}

/// Per-sentence verdict returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Algorithm that produced the verdict
    pub alg_type: String,

    /// "Positive" | "Neutral" | "Negative". Kept as a raw string: the
    /// service is trusted but not validated, so anything else must still
    /// deserialize and render with the unknown style.
    pub kind_of_sentiment: String,

    /// The sentence the verdict applies to
    pub review: String,
}

impl SentimentResult {
    pub fn label(&self) -> SentimentLabel {
        SentimentLabel::from(self.kind_of_sentiment.as_str())
    }
}

/// Payload envelope inside the response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentData {
    pub sentiment: Vec<SentimentResult>,
}

/// Response body of POST /analyze-sentiment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub status: String,
    pub data: SentimentData,
}

/// Closed set of sentiment categories used for display.
///
/// `Unknown` absorbs every label the service sends that the client does not
/// recognize; it maps to the default badge style instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
    Unknown,
}

impl From<&str> for SentimentLabel {
    fn from(value: &str) -> Self {
        match value {
            "Positive" => SentimentLabel::Positive,
            "Neutral" => SentimentLabel::Neutral,
            "Negative" => SentimentLabel::Negative,
            _ => SentimentLabel::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = AnalysisRequest {
            reviews: vec![
                ReviewItem {
                    reviewr: "Great product".to_string(),
                },
                ReviewItem {
                    reviewr: "Terrible support".to_string(),
                },
            ],
            model: "MFSvc".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "reviews": [
                    { "reviewr": "Great product" },
                    { "reviewr": "Terrible support" }
                ],
                "model": "MFSvc"
            })
        );
    }

    #[test]
    fn test_response_parses_and_keeps_order() {
        let body = r#"{
            "status": "ok",
            "data": {
                "sentiment": [
                    { "alg_type": "X", "kind_of_sentiment": "Negative", "review": "bad" },
                    { "alg_type": "X", "kind_of_sentiment": "Positive", "review": "good" }
                ]
            }
        }"#;

        let response: AnalysisResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.status, "ok");
        assert_eq!(response.data.sentiment.len(), 2);
        assert_eq!(response.data.sentiment[0].review, "bad");
        assert_eq!(response.data.sentiment[0].label(), SentimentLabel::Negative);
        assert_eq!(response.data.sentiment[1].label(), SentimentLabel::Positive);
    }

    #[test]
    fn test_unrecognized_label_falls_back_to_unknown() {
        assert_eq!(SentimentLabel::from("Positive"), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from("Neutral"), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from("Negative"), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from("Mixed"), SentimentLabel::Unknown);
        assert_eq!(SentimentLabel::from(""), SentimentLabel::Unknown);
        assert_eq!(SentimentLabel::from("positive"), SentimentLabel::Unknown);
    }
}
