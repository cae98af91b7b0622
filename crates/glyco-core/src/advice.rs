//! Probability bands with lifestyle suggestions for detailed reports.

use serde::Serialize;

/// Lower bound of the [`AdviceBand::Urgent`] band.
const URGENT_FROM: f64 = 0.70;
/// Lower bound of the [`AdviceBand::Elevated`] band.
const ELEVATED_FROM: f64 = 0.55;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdviceBand {
    Urgent,
    Elevated,
    Maintain,
}

/// Headline and suggestions for one probability band.
#[derive(Debug, Clone, Serialize)]
pub struct HealthAdvice {
    pub band: AdviceBand,
    pub headline: &'static str,
    pub suggestions: &'static [&'static str],
}

impl HealthAdvice {
    pub fn for_probability(probability: f64) -> Self {
        let band = if probability >= URGENT_FROM {
            AdviceBand::Urgent
        } else if probability >= ELEVATED_FROM {
            AdviceBand::Elevated
        } else {
            AdviceBand::Maintain
        };
        Self::for_band(band)
    }

    pub fn for_band(band: AdviceBand) -> Self {
        match band {
            AdviceBand::Urgent => Self {
                band,
                headline: "High likelihood of diabetes. Please consult a doctor soon.",
                suggestions: &[
                    "Schedule an HbA1c or fasting glucose test with your doctor.",
                    "Cut back on sugary drinks and refined carbohydrates.",
                    "Aim for at least 30 minutes of moderate activity every day.",
                    "Monitor your blood glucose regularly if advised.",
                ],
            },
            AdviceBand::Elevated => Self {
                band,
                headline: "Elevated risk. Lifestyle changes are recommended.",
                suggestions: &[
                    "Move toward a balanced diet rich in fiber and vegetables.",
                    "Work on a healthy weight through regular exercise.",
                    "Get a routine blood sugar check at your next visit.",
                ],
            },
            AdviceBand::Maintain => Self {
                band,
                headline: "Low risk. Keep up your healthy habits.",
                suggestions: &[
                    "Keep a balanced diet and stay physically active.",
                    "Have periodic health check-ups.",
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        assert_eq!(HealthAdvice::for_probability(0.70).band, AdviceBand::Urgent);
        assert_eq!(HealthAdvice::for_probability(0.95).band, AdviceBand::Urgent);
        assert_eq!(HealthAdvice::for_probability(0.6999).band, AdviceBand::Elevated);
        assert_eq!(HealthAdvice::for_probability(0.55).band, AdviceBand::Elevated);
        assert_eq!(HealthAdvice::for_probability(0.5499).band, AdviceBand::Maintain);
        assert_eq!(HealthAdvice::for_probability(0.0).band, AdviceBand::Maintain);
    }

    #[test]
    fn test_every_band_has_suggestions() {
        for band in [AdviceBand::Urgent, AdviceBand::Elevated, AdviceBand::Maintain] {
            let advice = HealthAdvice::for_band(band);
            assert!(!advice.headline.is_empty());
            assert!(!advice.suggestions.is_empty());
        }
    }
}
