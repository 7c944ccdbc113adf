/// Description used for any code missing from the table.
pub const UNKNOWN_CONDITIONS: &str = "Unknown conditions";

/// Condition code used when the service omits `weathercode`.
pub const MISSING_CODE: i64 = -1;

/// WMO weather interpretation codes as reported by Open-Meteo.
/// See: https://open-meteo.com/en/docs#weathervariables
const TABLE: &[(i64, &str)] = &[
    (0, "Clear sky"),
    (1, "Mainly clear"),
    (2, "Partly cloudy"),
    (3, "Overcast"),
    (45, "Foggy"),
    (48, "Depositing rime fog"),
    (51, "Light drizzle"),
    (53, "Moderate drizzle"),
    (55, "Dense drizzle"),
    (61, "Slight rain"),
    (63, "Moderate rain"),
    (65, "Heavy rain"),
    (71, "Slight snow"),
    (73, "Moderate snow"),
    (75, "Heavy snow"),
    (80, "Rain showers"),
    (81, "Moderate rain showers"),
    (82, "Heavy rain showers"),
    (95, "Thunderstorm"),
    (96, "Thunderstorm with hail"),
];

/// Human-readable description for a weather code.
pub fn describe(code: i64) -> &'static str {
    TABLE
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, desc)| *desc)
        .unwrap_or(UNKNOWN_CONDITIONS)
}

/// All codes the table knows about, in ascending order.
pub fn known_codes() -> impl Iterator<Item = i64> {
    TABLE.iter().map(|(c, _)| *c)
}
