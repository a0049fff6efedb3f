//! Static airport directory: Russian-language airport and city names to IATA codes.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Known names, lowercase. City names and airport names are both accepted.
const AIRPORTS: &[(&str, &str)] = &[
    ("толмачёво", "OVB"),
    ("толмачево", "OVB"),
    ("новосибирск", "OVB"),
    ("шереметьево", "SVO"),
    ("внуково", "VKO"),
    ("домодедово", "DME"),
    ("пулково", "LED"),
    ("санкт-петербург", "LED"),
    ("кольцово", "SVX"),
    ("екатеринбург", "SVX"),
    ("адлер", "AER"),
    ("сочи", "AER"),
    ("казань", "KZN"),
    ("самара", "KUF"),
    ("курумоч", "KUF"),
    ("краснодар", "KRR"),
    ("пашковский", "KRR"),
    ("владивосток", "VVO"),
    ("кневичи", "VVO"),
    ("иркутск", "IKT"),
    ("калининград", "KGD"),
    ("храброво", "KGD"),
    ("минск", "MSQ"),
    ("минск-2", "MSQ"),
];

static DIRECTORY: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn directory() -> &'static HashMap<&'static str, &'static str> {
    DIRECTORY.get_or_init(|| AIRPORTS.iter().copied().collect())
}

/// Resolve an airport or city name to its IATA code.
///
/// Matching is exact after lowercasing; there is no fuzzy or prefix matching.
pub fn iata_code(name: &str) -> Option<&'static str> {
    directory().get(name.to_lowercase().as_str()).copied()
}
