//! Text rendering of assessment results.

use glyco_core::{HealthAdvice, PredictError, PredictionResult, RiskTier};
use glyco_model::ModelStatus;

pub fn verdict_lines(result: &PredictionResult, detailed: bool) -> Vec<String> {
    let pct = result.probability_percent();
    let mut lines = vec![match result.risk_tier {
        RiskTier::High => format!("[HIGH RISK] High risk of diabetes (probability {:.1}%)", pct),
        RiskTier::Low => format!("[LOW RISK] Low risk of diabetes (probability {:.1}%)", pct),
    }];

    if detailed {
        let advice = HealthAdvice::for_probability(result.probability);
        lines.push(String::new());
        lines.push(advice.headline.to_string());
        lines.extend(advice.suggestions.iter().map(|s| format!("  - {}", s)));
    }
    lines
}

pub fn error_line(err: &PredictError) -> String {
    match err {
        PredictError::InputValidation { .. } => format!("[ERROR] {}", err),
        PredictError::ModelUnavailable(reason) => {
            format!("[ERROR] Model not found, cannot assess risk ({})", reason)
        }
        PredictError::UnclassifiedInvocation(_) => {
            "[ERROR] Prediction failed, please try again".to_string()
        }
    }
}

/// 1 for bad input, 2 when the model cannot answer.
pub fn exit_code(err: &PredictError) -> u8 {
    match err {
        PredictError::InputValidation { .. } => 1,
        _ => 2,
    }
}

pub fn model_lines(status: &ModelStatus, path: &str) -> Vec<String> {
    let mut lines = vec![format!("artifact: {}", path), format!("status:   {}", status.status)];
    if let Some(info) = &status.info {
        lines.push(format!("name:     {}", info.name));
        lines.push(format!("threshold: {}", info.decision_threshold));
        lines.push("features:".to_string());
        lines.extend(
            info.feature_names
                .iter()
                .enumerate()
                .map(|(i, name)| format!("  {}. {}", i + 1, name)),
        );
    }
    if let Some(reason) = &status.reason {
        lines.push(format!("reason:   {}", reason));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyco_model::ModelHandle;

    fn result(probability: f64, risk_tier: RiskTier) -> PredictionResult {
        PredictionResult { predicted_class: u8::from(probability >= 0.5), probability, risk_tier }
    }

    #[test]
    fn test_verdicts() {
        let high = verdict_lines(&result(0.7134, RiskTier::High), false);
        assert_eq!(high, vec!["[HIGH RISK] High risk of diabetes (probability 71.3%)"]);

        let low = verdict_lines(&result(0.0541, RiskTier::Low), false);
        assert_eq!(low, vec!["[LOW RISK] Low risk of diabetes (probability 5.4%)"]);
    }

    #[test]
    fn test_detailed_includes_advice() {
        let lines = verdict_lines(&result(0.6, RiskTier::High), true);
        assert!(lines.iter().any(|l| l.starts_with("Elevated risk")));
        assert!(lines.iter().filter(|l| l.starts_with("  - ")).count() >= 2);
    }

    #[test]
    fn test_error_lines_and_codes() {
        let invalid = PredictError::invalid("glucose", "could not convert 'abc' to a number");
        assert!(error_line(&invalid).contains("glucose"));
        assert_eq!(exit_code(&invalid), 1);

        let failed = PredictError::UnclassifiedInvocation("internal detail".into());
        assert!(!error_line(&failed).contains("internal detail"));
        assert_eq!(exit_code(&failed), 2);
    }

    #[test]
    fn test_model_lines_unavailable() {
        let lines = model_lines(&ModelHandle::unavailable("missing").status(), "m.json");
        assert_eq!(lines[1], "status:   unavailable");
        assert_eq!(lines.last().unwrap(), "reason:   missing");
    }
}
