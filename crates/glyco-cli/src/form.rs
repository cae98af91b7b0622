//! Line-driven form that collects the eight measurements.

use glyco_core::{Measurement, MeasurementVector, FEATURE_COUNT};
use glyco_engine::coerce;

/// What the form wants after a line of input.
#[derive(Debug, PartialEq)]
pub enum FormStep {
    /// Value accepted, prompt for the next field.
    Next,
    /// Value rejected, prompt for the same field again.
    Retry(String),
    /// All fields collected.
    Complete(MeasurementVector),
}

/// Walks the measurements in artifact order, one answer per line.
#[derive(Debug)]
pub struct FormSession {
    index: usize,
    values: [f64; FEATURE_COUNT],
}

impl FormSession {
    pub fn new() -> Self {
        Self { index: 0, values: [0.0; FEATURE_COUNT] }
    }

    /// Field the next line answers, `None` once the form is complete.
    pub fn current(&self) -> Option<Measurement> {
        Measurement::ORDER.get(self.index).copied()
    }

    pub fn prompt(&self) -> String {
        let Some(m) = self.current() else {
            return String::new();
        };
        let b = m.bounds();
        format!(
            "[{}/{}] {} ({}-{}, default {}): ",
            self.index + 1,
            FEATURE_COUNT,
            m.label(),
            b.min,
            b.max,
            b.default
        )
    }

    /// An empty line takes the field's default. Non-numeric, fractional
    /// whole-number fields and out-of-range values are re-asked.
    pub fn handle_line(&mut self, line: &str) -> FormStep {
        let Some(m) = self.current() else {
            return FormStep::Retry("form is already complete".into());
        };
        let bounds = m.bounds();

        let value = if line.trim().is_empty() {
            bounds.default
        } else {
            match coerce::parse_text(m.key(), line) {
                Ok(v) => v,
                Err(e) => return FormStep::Retry(e.to_string()),
            }
        };

        if bounds.integer && value.fract() != 0.0 {
            return FormStep::Retry(format!("{} must be a whole number", m.label()));
        }
        if !bounds.contains(value) {
            return FormStep::Retry(format!(
                "{} must be between {} and {}",
                m.label(),
                bounds.min,
                bounds.max
            ));
        }

        self.values[self.index] = value;
        self.index += 1;

        if self.index < FEATURE_COUNT {
            return FormStep::Next;
        }
        match MeasurementVector::new(self.values) {
            Ok(vector) => FormStep::Complete(vector),
            Err(e) => FormStep::Retry(e.to_string()),
        }
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(session: &mut FormSession, answers: &[&str]) -> Vec<FormStep> {
        answers.iter().map(|a| session.handle_line(a)).collect()
    }

    #[test]
    fn test_full_form() {
        let mut session = FormSession::new();
        let steps = fill(&mut session, &["6", "148", "72", "35", "0", "33.6", "0.627", "50"]);

        assert!(steps[..7].iter().all(|s| *s == FormStep::Next));
        let FormStep::Complete(vector) = &steps[7] else {
            panic!("expected completion, got {:?}", steps[7]);
        };
        assert_eq!(vector.as_slice(), &[6.0, 148.0, 72.0, 35.0, 0.0, 33.6, 0.627, 50.0]);
        assert_eq!(session.current(), None);
    }

    #[test]
    fn test_blank_lines_take_defaults() {
        let mut session = FormSession::new();
        let steps = fill(&mut session, &[""; FEATURE_COUNT]);
        assert_eq!(steps.last(), Some(&FormStep::Complete(MeasurementVector::defaults())));
    }

    #[test]
    fn test_non_numeric_retries_same_field() {
        let mut session = FormSession::new();
        session.handle_line("2");

        let step = session.handle_line("abc");
        assert!(matches!(&step, FormStep::Retry(msg) if msg.contains("glucose")));
        assert_eq!(session.current(), Some(Measurement::Glucose));

        assert_eq!(session.handle_line("140"), FormStep::Next);
        assert_eq!(session.current(), Some(Measurement::BloodPressure));
    }

    #[test]
    fn test_out_of_range_and_fractional() {
        let mut session = FormSession::new();
        assert!(matches!(session.handle_line("21"), FormStep::Retry(_)));
        assert!(matches!(session.handle_line("-1"), FormStep::Retry(_)));
        assert!(matches!(session.handle_line("1.5"), FormStep::Retry(_)));
        assert_eq!(session.handle_line("3"), FormStep::Next);
    }

    #[test]
    fn test_decimal_fields_accept_fractions() {
        let mut session = FormSession::new();
        fill(&mut session, &["", "", "", "", ""]);
        assert_eq!(session.current(), Some(Measurement::Bmi));
        assert_eq!(session.handle_line("31.25"), FormStep::Next);
        assert!(matches!(session.handle_line("3.5"), FormStep::Retry(_)));
        assert_eq!(session.handle_line("0.25"), FormStep::Next);
    }

    #[test]
    fn test_prompt_shows_range_and_default() {
        let session = FormSession::new();
        assert_eq!(session.prompt(), "[1/8] Number of pregnancies (0-20, default 1): ");
    }
}
