// Resume matching pipeline.
// Extract → tokenize → {keyword score, semantic score, feedback, bias audit} → compose → rank.

pub mod bias;
pub mod composer;
pub mod extract;
pub mod handlers;
pub mod keywords;
pub mod pipeline;
pub mod semantic;
pub mod tokens;
pub mod uploads;

#[cfg(test)]
pub(crate) mod fixtures;

/// Rounds a percentage to two decimal places.
pub(crate) fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
