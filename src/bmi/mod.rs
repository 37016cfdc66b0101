//! IMC (body-mass-index) computation and classification.
//!
//! This module holds the entire arithmetic core of the calculator screen:
//! parsing the two text inputs, computing weight / height², classifying the
//! result into one of five ordered categories, and deriving the presentation
//! values (progress fraction, advisory tip) from an already-validated reading.

/// Lower bound of the progress-bar display range.
///
pub const PROGRESS_MIN: f64 = 15.0;

/// Upper bound of the progress-bar display range.
///
pub const PROGRESS_MAX: f64 = 40.0;

/// Fixed validation message shown when either input is not a positive number.
///
pub const INVALID_INPUT_MESSAGE: &str =
    "Veuillez entrer des valeurs numériques valides (ex: 72, 175).";

/// Prompt shown in the tip box before any computation has been performed.
///
const DEFAULT_TIP: &str =
    "Entrez vos informations puis appuyez sur Calculer pour obtenir des conseils.";

/// Specifying the five weight-status categories, ordered by ascending IMC
/// threshold.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    ModerateObesity,
    SevereObesity,
}

impl Category {
    /// Classify an IMC value. Thresholds are first-match-wins ascending, so a
    /// value sitting exactly on a threshold resolves to the higher category.
    ///
    pub fn from_value(value: f64) -> Category {
        if value < 18.5 {
            Category::Underweight
        } else if value < 25.0 {
            Category::Normal
        } else if value < 30.0 {
            Category::Overweight
        } else if value < 40.0 {
            Category::ModerateObesity
        } else {
            Category::SevereObesity
        }
    }

    /// Return all categories in threshold order, for the legend.
    ///
    pub fn all() -> [Category; 5] {
        [
            Category::Underweight,
            Category::Normal,
            Category::Overweight,
            Category::ModerateObesity,
            Category::SevereObesity,
        ]
    }

    /// Return the display label.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            Category::Underweight => "Maigreur",
            Category::Normal => "Normal",
            Category::Overweight => "Surpoids",
            Category::ModerateObesity => "Obésité modérée",
            Category::SevereObesity => "Obésité sévère",
        }
    }

    /// Return the advisory tip for this category.
    ///
    pub fn tip(&self) -> &'static str {
        match self {
            Category::Underweight => {
                "Augmentez légèrement l'apport calorique et privilégiez les aliments riches en nutriments."
            }
            Category::Normal => {
                "Continuez votre mode de vie — alimentation équilibrée + activité régulière."
            }
            Category::Overweight => {
                "Réduisez les aliments transformés, bougez plus — consultez un professionnel si besoin."
            }
            Category::ModerateObesity => {
                "Adoptez une alimentation contrôlée et augmentez l'activité physique ; demandez un suivi si nécessaire."
            }
            Category::SevereObesity => {
                "Consultez un professionnel de santé pour un accompagnement médical et un plan adapté."
            }
        }
    }

    /// Return the ASCII figure illustrating this category. Stands in for the
    /// per-category image asset of the mobile rendition.
    ///
    pub fn figure(&self) -> &'static str {
        match self {
            Category::Underweight => concat!("  o  \n", "  |  \n", " / \\ "),
            Category::Normal => concat!("  o  \n", " /|\\ \n", " / \\ "),
            Category::Overweight => concat!("  o  \n", "-(|)-\n", " / \\ "),
            Category::ModerateObesity => concat!("  o  \n", "-((|))-\n", "  / \\ "),
            Category::SevereObesity => concat!("   o   \n", "-(((|)))-\n", "   / \\ "),
        }
    }
}

/// Houses the outcome of one calculation request.
///
/// The default instance represents "no computation performed yet". `value` is
/// present if and only if `message` is absent, and `category` is derived from
/// `value` alone, never set independently.
///
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Reading {
    pub value: Option<f64>,
    pub category: Option<Category>,
    pub message: Option<&'static str>,
}

impl Reading {
    /// Return whether no computation has been performed yet.
    ///
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.category.is_none() && self.message.is_none()
    }
}

/// Compute an IMC reading from the raw weight (kg) and height (cm) inputs.
///
/// Both inputs tolerate a comma decimal separator. Any parse failure or
/// non-positive value yields a reading carrying only the fixed validation
/// message. Otherwise the value is weight / height_m², rounded to two
/// decimal places and classified.
///
pub fn compute(weight_text: &str, height_text: &str) -> Reading {
    let weight = parse_number(weight_text);
    let height_m = parse_number(height_text).map(|cm| cm / 100.0);

    match (weight, height_m) {
        (Some(w), Some(h)) if w > 0.0 && h > 0.0 => {
            let value = (w / (h * h) * 100.0).round() / 100.0;
            Reading {
                value: Some(value),
                category: Some(Category::from_value(value)),
                message: None,
            }
        }
        _ => Reading {
            value: None,
            category: None,
            message: Some(INVALID_INPUT_MESSAGE),
        },
    }
}

/// Map an IMC value into the `[0, 1]` progress fraction by clamping into
/// `[PROGRESS_MIN, PROGRESS_MAX]` and rescaling. An absent value maps to 0.
///
pub fn progress_fraction(value: Option<f64>) -> f64 {
    match value {
        Some(v) => {
            let clamped = v.max(PROGRESS_MIN).min(PROGRESS_MAX);
            (clamped - PROGRESS_MIN) / (PROGRESS_MAX - PROGRESS_MIN)
        }
        None => 0.0,
    }
}

/// Return the advisory tip for the given category, or the default prompt when
/// no category is set yet.
///
pub fn tip_for(category: Option<Category>) -> &'static str {
    match category {
        Some(category) => category.tip(),
        None => DEFAULT_TIP,
    }
}

/// Parse a locale-tolerant decimal number, accepting a comma separator.
///
fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_example_values() {
        let reading = compute("72", "175");
        assert_eq!(reading.value, Some(23.51));
        assert_eq!(reading.category, Some(Category::Normal));
        assert_eq!(reading.message, None);
    }

    #[test]
    fn compute_accepts_comma_separator() {
        let period = compute("72.5", "175");
        let comma = compute("72,5", "175");
        assert_eq!(period, comma);
        assert_eq!(comma.category, Some(Category::Normal));
    }

    #[test]
    fn compute_is_deterministic() {
        assert_eq!(compute("80", "180"), compute("80", "180"));
    }

    #[test]
    fn compute_rounds_to_two_decimals() {
        // 58 / 1.72² = 19.6052...
        let reading = compute("58", "172");
        assert_eq!(reading.value, Some(19.61));
    }

    #[test]
    fn compute_rejects_zero_weight() {
        let reading = compute("0", "175");
        assert_eq!(reading.value, None);
        assert_eq!(reading.category, None);
        assert_eq!(reading.message, Some(INVALID_INPUT_MESSAGE));
    }

    #[test]
    fn compute_rejects_zero_height() {
        let reading = compute("72", "0");
        assert_eq!(reading.value, None);
        assert_eq!(reading.message, Some(INVALID_INPUT_MESSAGE));
    }

    #[test]
    fn compute_rejects_negative_inputs() {
        assert!(compute("-72", "175").message.is_some());
        assert!(compute("72", "-175").message.is_some());
    }

    #[test]
    fn compute_rejects_non_numeric_inputs() {
        assert!(compute("abc", "175").message.is_some());
        assert!(compute("72", "").message.is_some());
        assert!(compute("", "").message.is_some());
    }

    #[test]
    fn compute_rejects_non_finite_inputs() {
        assert!(compute("inf", "175").message.is_some());
        assert!(compute("NaN", "175").message.is_some());
    }

    #[test]
    fn classification_boundaries_resolve_upward() {
        assert_eq!(Category::from_value(18.49), Category::Underweight);
        assert_eq!(Category::from_value(18.5), Category::Normal);
        assert_eq!(Category::from_value(24.99), Category::Normal);
        assert_eq!(Category::from_value(25.0), Category::Overweight);
        assert_eq!(Category::from_value(29.99), Category::Overweight);
        assert_eq!(Category::from_value(30.0), Category::ModerateObesity);
        assert_eq!(Category::from_value(39.99), Category::ModerateObesity);
        assert_eq!(Category::from_value(40.0), Category::SevereObesity);
    }

    #[test]
    fn classification_is_total() {
        for v in [0.0, 10.0, 18.5, 22.0, 27.5, 35.0, 40.0, 80.0] {
            // from_value always returns exactly one category
            let category = Category::from_value(v);
            assert!(Category::all().contains(&category));
        }
    }

    #[test]
    fn progress_fraction_endpoints() {
        assert_eq!(progress_fraction(Some(15.0)), 0.0);
        assert_eq!(progress_fraction(Some(40.0)), 1.0);
    }

    #[test]
    fn progress_fraction_clamps_out_of_range_values() {
        assert_eq!(progress_fraction(Some(5.0)), 0.0);
        assert_eq!(progress_fraction(Some(50.0)), 1.0);
    }

    #[test]
    fn progress_fraction_absent_value() {
        assert_eq!(progress_fraction(None), 0.0);
    }

    #[test]
    fn progress_fraction_is_monotonic() {
        let samples = [5.0, 15.0, 18.5, 23.51, 30.0, 40.0, 50.0];
        let fractions: Vec<f64> = samples
            .iter()
            .map(|v| progress_fraction(Some(*v)))
            .collect();
        for pair in fractions.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        for fraction in fractions {
            assert!((0.0..=1.0).contains(&fraction));
        }
    }

    #[test]
    fn tip_for_every_category() {
        for category in Category::all() {
            assert!(!tip_for(Some(category)).is_empty());
        }
        assert_eq!(tip_for(None), DEFAULT_TIP);
    }

    #[test]
    fn reading_default_is_empty() {
        assert!(Reading::default().is_empty());
        assert!(!compute("72", "175").is_empty());
        assert!(!compute("x", "y").is_empty());
    }
}
