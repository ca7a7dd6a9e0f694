/// Classification attempt lifecycle
///
/// One request at a time: Idle → InFlight → Succeeded | Failed. The terminal
/// states re-enter InFlight only through a fresh predict action, and a new
/// photo selection resets the machine to Idle so a result is never shown
/// against a photo other than the one that produced it.

use crate::net::predict::PredictError;

/// A classification returned by the prediction service.
/// Immutable once constructed; the interface only reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    acne_type: String,
    confidence: f64,
    description: String,
}

impl PredictionResult {
    /// Confidence is clamped into [0, 1]; nothing outside that range is
    /// meaningful to display.
    pub fn new(acne_type: String, confidence: f64, description: String) -> Self {
        Self {
            acne_type,
            confidence: confidence.clamp(0.0, 1.0),
            description,
        }
    }

    pub fn acne_type(&self) -> &str {
        &self.acne_type
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Confidence as a whole percentage for display
    pub fn confidence_percent(&self) -> u8 {
        (self.confidence * 100.0).round() as u8
    }
}

/// Lifecycle of a single classification attempt
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PredictionState {
    #[default]
    Idle,
    /// A request is out for the photo with this intake generation
    InFlight { generation: u64 },
    Succeeded(PredictionResult),
    Failed(PredictError),
}

impl PredictionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight { .. })
    }

    /// A fresh request may start from any state except an active one
    pub fn can_start(&self) -> bool {
        !self.is_in_flight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_is_clamped() {
        let high = PredictionResult::new("papules".into(), 1.7, "".into());
        assert_eq!(high.confidence(), 1.0);

        let low = PredictionResult::new("papules".into(), -0.3, "".into());
        assert_eq!(low.confidence(), 0.0);

        let exact = PredictionResult::new("papules".into(), 0.87, "".into());
        assert_eq!(exact.confidence(), 0.87);
    }

    #[test]
    fn test_confidence_percent_rounds() {
        let result = PredictionResult::new("nodules".into(), 0.876, "".into());
        assert_eq!(result.confidence_percent(), 88);
    }

    #[test]
    fn test_default_state_is_idle() {
        assert_eq!(PredictionState::default(), PredictionState::Idle);
    }

    #[test]
    fn test_only_in_flight_blocks_a_new_request() {
        assert!(PredictionState::Idle.can_start());
        assert!(PredictionState::Failed(PredictError::Server(500)).can_start());

        let done = PredictionState::Succeeded(PredictionResult::new(
            "whiteheads".into(),
            0.5,
            "".into(),
        ));
        assert!(done.can_start());

        assert!(!PredictionState::InFlight { generation: 1 }.can_start());
    }
}
