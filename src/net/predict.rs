/// Remote classification client
///
/// Builds the outgoing request from an encoded photo, calls the prediction
/// endpoint, and maps the response or failure into a typed result. The
/// request body is a single multipart part under the fixed `file` field,
/// carrying the original bytes with their original content type.

use reqwest::multipart::{Form, Part};
use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

use crate::intake::encode::{AcceptedImage, UPLOAD_FIELD, UPLOAD_FILENAME};
use crate::state::prediction::PredictionResult;

/// How a classification attempt failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictError {
    /// No response was obtained at all
    #[error("Could not reach the prediction service ({0})")]
    Network(String),
    /// The service answered with a non-success status
    #[error("The prediction service returned an error (status {0})")]
    Server(u16),
    /// The service answered 2xx but the body is not a usable result
    #[error("The prediction service returned an unreadable result")]
    MalformedResponse,
}

/// Wire shape of a successful `/api/predict` response.
/// Unknown extra fields are ignored; a missing field fails the parse.
#[derive(Debug, Deserialize)]
struct PredictionPayload {
    #[serde(rename = "acneType")]
    acne_type: String,
    confidence: f64,
    description: String,
}

/// Submit one photo for classification
pub async fn classify(
    endpoint: Url,
    image: AcceptedImage,
) -> Result<PredictionResult, PredictError> {
    let part = Part::bytes(image.bytes)
        .file_name(UPLOAD_FILENAME)
        .mime_str(image.kind.mime())
        .map_err(|e| PredictError::Network(e.to_string()))?;

    let form = Form::new().part(UPLOAD_FIELD, part);

    println!("📤 Submitting photo to {}", endpoint);

    let response = reqwest::Client::new()
        .post(endpoint)
        .multipart(form)
        .send()
        .await
        .map_err(|e| PredictError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        eprintln!("⚠️ Prediction service answered {}", status);
        return Err(PredictError::Server(status.as_u16()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| PredictError::Network(e.to_string()))?;

    parse_prediction(&body)
}

/// Map a success body into a typed result
fn parse_prediction(body: &str) -> Result<PredictionResult, PredictError> {
    let payload: PredictionPayload =
        serde_json::from_str(body).map_err(|_| PredictError::MalformedResponse)?;

    Ok(PredictionResult::new(
        payload.acne_type,
        payload.confidence,
        payload.description,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::validate::ImageKind;

    #[test]
    fn test_parses_a_well_formed_response() {
        let body = r#"{
            "acneType": "Papules",
            "confidence": 0.87,
            "description": "Small, red, inflammatory bumps without pus."
        }"#;

        let result = parse_prediction(body).unwrap();
        assert_eq!(result.acne_type(), "Papules");
        assert_eq!(result.confidence(), 0.87);
        assert_eq!(
            result.description(),
            "Small, red, inflammatory bumps without pus."
        );
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let body = r#"{
            "acneType": "nodules",
            "confidence": 0.42,
            "description": "Classification complete.",
            "modelVersion": "efficientnet-b3",
            "elapsedMs": 311
        }"#;

        let result = parse_prediction(body).unwrap();
        assert_eq!(result.acne_type(), "nodules");
    }

    #[test]
    fn test_missing_confidence_is_malformed() {
        let body = r#"{"acneType": "Papules", "description": "..."}"#;
        assert_eq!(parse_prediction(body), Err(PredictError::MalformedResponse));
    }

    #[test]
    fn test_non_numeric_confidence_is_malformed() {
        let body = r#"{"acneType": "Papules", "confidence": "high", "description": "..."}"#;
        assert_eq!(parse_prediction(body), Err(PredictError::MalformedResponse));
    }

    #[test]
    fn test_non_json_body_is_malformed() {
        assert_eq!(
            parse_prediction("<html>Bad Gateway</html>"),
            Err(PredictError::MalformedResponse)
        );
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_network_error() {
        // Port 9 (discard) is never serving HTTP here
        let endpoint = Url::parse("http://127.0.0.1:9/api/predict").unwrap();
        let image = AcceptedImage {
            kind: ImageKind::Jpeg,
            bytes: vec![0xff, 0xd8, 0xff, 0xd9],
            preview: String::from("data:image/jpeg;base64,/9j/2Q=="),
            width: 1,
            height: 1,
            generation: 1,
        };

        let result = classify(endpoint, image).await;
        assert!(matches!(result, Err(PredictError::Network(_))));
    }
}
