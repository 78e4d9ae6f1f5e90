use contracts::sentiment::{AnalysisRequest, AnalysisResponse, ReviewItem};
use gloo_net::http::Request;

use crate::analyzer::segmentation::split_sentences;
use crate::shared::api_utils::api_base;

/// Build the analysis request from raw input text and the selected model.
///
/// The model identifier has the display form `"<name> - <version>"`; only
/// the name portion is sent to the service.
pub fn build_request(text: &str, model_id: &str) -> AnalysisRequest {
    let reviews = split_sentences(text)
        .into_iter()
        .map(|sentence| ReviewItem { reviewr: sentence })
        .collect();

    let model = model_id
        .split(" - ")
        .next()
        .unwrap_or(model_id)
        .to_string();

    AnalysisRequest { reviews, model }
}

/// Send one analysis request to the service
///
/// Single attempt, no timeout, no retry. A non-success HTTP status is an
/// error: the body is not parsed and the caller keeps its previous results.
pub async fn analyze_sentiment(request: &AnalysisRequest) -> Result<AnalysisResponse, String> {
    let response = Request::post(&format!("{}/analyze-sentiment", api_base()))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Analysis failed: {}", response.status()));
    }

    response
        .json::<AnalysisResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
