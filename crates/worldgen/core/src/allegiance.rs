//! Allegiance codes.
//!
//! Allegiances are free-form codes ("Im", "ImDd", "ZhCo", ...). Rules only ever
//! ask whether a code belongs to one of the major powers, which is decided by
//! its two letter prefix appearing in the code.

/// Two letter codes used by the basic and extended rules.
pub const BASIC_ALLEGIANCES: [(&str, &str); 4] = [
    ("Aslan", "As"),
    ("Imperial", "Im"),
    ("Vargr", "Va"),
    ("Zhodani", "Zh"),
];

/// Four letter Second Survey codes for the common polities.
pub const SECOND_SURVEY_ALLEGIANCES: [(&str, &str); 9] = [
    ("Imperial", "ImXX"),
    ("Client State (Imp)", "CsIm"),
    ("Non-Aligned", "NaHu"),
    ("Vargr", "NaVa"),
    ("Aslan", "AsXX"),
    ("Zhodani", "ZhCo"),
    ("Solomani", "SoCf"),
    ("K'kree", "KkTw"),
    ("Hiver", "HvFd"),
];

/// Code assumed when the rules do not take an allegiance.
pub const DEFAULT_CODE: &str = "Im";

fn lookup(table: &[(&str, &'static str)], name: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(full, _)| full.eq_ignore_ascii_case(name))
        .map(|(_, code)| *code)
}

/// Two letter code for a polity name such as "Aslan".
pub fn basic_code(name: &str) -> Option<&'static str> {
    lookup(&BASIC_ALLEGIANCES, name)
}

/// Second Survey code for a polity name such as "Client State (Imp)".
pub fn second_survey_code(name: &str) -> Option<&'static str> {
    lookup(&SECOND_SURVEY_ALLEGIANCES, name)
}

pub fn is_imperial(code: &str) -> bool {
    code.contains("Im")
}

pub fn is_aslan(code: &str) -> bool {
    code.contains("As")
}

pub fn is_zhodani(code: &str) -> bool {
    code.contains("Zh")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_map_to_codes() {
        assert_eq!(basic_code("Zhodani"), Some("Zh"));
        assert_eq!(basic_code("aslan"), Some("As"));
        assert_eq!(basic_code("Solomani"), None);
        assert_eq!(second_survey_code("K'kree"), Some("KkTw"));
        assert_eq!(second_survey_code("Client State (Imp)"), Some("CsIm"));
    }

    #[test]
    fn membership_by_substring() {
        assert!(is_imperial("ImDd"));
        assert!(is_imperial("CsIm"));
        assert!(!is_imperial("Zh"));
        assert!(is_zhodani("ZhCo"));
        assert!(is_aslan("AsXX"));
    }
}
