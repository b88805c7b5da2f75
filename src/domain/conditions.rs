//! Weather code → condition label table (WMO codes as reported by Open-Meteo).

/// Label for any code missing from [`CONDITION_LABELS`].
pub const UNKNOWN_CONDITION: &str = "Unknown";

/// Fixed code → label mapping. Immutable; there is no way to extend it at runtime.
pub const CONDITION_LABELS: &[(i64, &str)] = &[
    (0, "Clear"),
    (1, "Partly Cloudy"),
    (2, "Cloudy"),
    (3, "Overcast"),
    (45, "Fog"),
    (48, "Fog"),
    (51, "Drizzle"),
    (53, "Light Rain"),
    (55, "Moderate Rain"),
    (56, "Light Rain Showers"),
    (57, "Moderate Rain Showers"),
    (61, "Light Rain"),
    (63, "Moderate Rain"),
    (65, "Heavy Rain"),
    (66, "Light Rain Showers"),
    (67, "Heavy Rain Showers"),
    (71, "Light Snow"),
    (73, "Moderate Snow"),
    (75, "Heavy Snow"),
    (77, "Snow Grains"),
    (80, "Light Rain Showers"),
    (81, "Moderate Rain Showers"),
    (82, "Heavy Rain Showers"),
];

/// Returns the human-readable label for a weather code. Total: unmapped codes
/// yield [`UNKNOWN_CONDITION`].
pub fn condition_label(code: i64) -> &'static str {
    CONDITION_LABELS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
        .unwrap_or(UNKNOWN_CONDITION)
}
