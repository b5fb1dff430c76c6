use crate::domain::ingredient::entities::{ConcernLabel, ConcernSet};

/// Comedogenic score from which an ingredient is considered pore-clogging
pub const PORE_CLOGGING_THRESHOLD: f64 = 3.0;

pub const SILICONE_KEYWORDS: &[&str] = &[
    "dimethicone",
    "siloxane",
    "methicone",
    "cyclopentasiloxane",
    "cyclohexasiloxane",
    "amodimethicone",
    "trimethicone",
];

pub const PETROLEUM_KEYWORDS: &[&str] = &[
    "petrolatum",
    "mineral oil",
    "paraffinum",
    "ceresin",
    "ozokerite",
    "microcrystalline wax",
];

pub const DRYING_ALCOHOL_KEYWORDS: &[&str] =
    &["alcohol denat", "sd alcohol", "ethanol", "isopropyl alcohol"];

pub const FUNGAL_ACNE_KEYWORDS: &[&str] = &[
    "polysorbate",
    "peg-",
    "sorbitan",
    "oleate",
    "isopropyl palmitate",
    "isopropyl myristate",
];

pub const IRRITANT_KEYWORDS: &[&str] = &[
    "fragrance",
    "parfum",
    "essential oil",
    "menthol",
    "peppermint",
    "eucalyptus",
    "limonene",
    "linalool",
    "benzyl alcohol",
];

const KEYWORD_RULES: &[(ConcernLabel, &[&str])] = &[
    (ConcernLabel::Silicone, SILICONE_KEYWORDS),
    (ConcernLabel::PetroleumBased, PETROLEUM_KEYWORDS),
    (ConcernLabel::DryingAlcohol, DRYING_ALCOHOL_KEYWORDS),
    (ConcernLabel::FungalAcneTrigger, FUNGAL_ACNE_KEYWORDS),
    (ConcernLabel::Irritant, IRRITANT_KEYWORDS),
];

/// Classify an ingredient into concern labels.
///
/// A comedogenic score of 3 or more flags the ingredient as pore-clogging;
/// a missing or non-numeric score adds nothing. Every other label is a
/// case-insensitive substring match against a fixed keyword list.
pub fn classify(name: &str, comedogenic_score: Option<&str>) -> ConcernSet {
    let mut concerns = ConcernSet::new();

    if comedogenic_score
        .and_then(parse_comedogenic_score)
        .is_some_and(|score| score >= PORE_CLOGGING_THRESHOLD)
    {
        concerns.insert(ConcernLabel::PoreClogging);
    }

    let name = name.to_lowercase();
    for (label, keywords) in KEYWORD_RULES {
        if keywords.iter().any(|keyword| name.contains(keyword)) {
            concerns.insert(*label);
        }
    }

    concerns
}

fn parse_comedogenic_score(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_silicone_keyword_flags_silicone() {
        for keyword in SILICONE_KEYWORDS {
            let name = format!("PEG/PPG {} Copolymer", keyword.to_uppercase());
            assert!(
                classify(&name, None).contains(ConcernLabel::Silicone),
                "{name} should be a silicone"
            );
        }
    }

    #[test]
    fn test_score_threshold() {
        assert!(classify("Coconut Oil", Some("4")).contains(ConcernLabel::PoreClogging));
        assert!(classify("Coconut Oil", Some("3")).contains(ConcernLabel::PoreClogging));
        assert!(classify("Coconut Oil", Some(" 3.0 ")).contains(ConcernLabel::PoreClogging));
        assert!(!classify("Coconut Oil", Some("2.5")).contains(ConcernLabel::PoreClogging));
        assert!(!classify("Coconut Oil", Some("")).contains(ConcernLabel::PoreClogging));
        assert!(!classify("Coconut Oil", Some("high")).contains(ConcernLabel::PoreClogging));
        assert!(!classify("Coconut Oil", Some("NaN")).contains(ConcernLabel::PoreClogging));
        assert!(!classify("Coconut Oil", None).contains(ConcernLabel::PoreClogging));
    }

    #[test]
    fn test_no_match_is_empty() {
        let concerns = classify("Glycerin", Some("0"));
        assert!(concerns.is_empty());
        assert_eq!(concerns.to_string(), "None");
    }

    #[test]
    fn test_drying_alcohol_matches_anywhere_in_name() {
        assert!(classify("Alcohol Denat.", None).contains(ConcernLabel::DryingAlcohol));
        assert!(classify("Aqua, SD Alcohol 40-B", None).contains(ConcernLabel::DryingAlcohol));
        assert!(!classify("Cetearyl Alcohol", None).contains(ConcernLabel::DryingAlcohol));
    }

    #[test]
    fn test_multiple_labels() {
        let concerns = classify("Isopropyl Myristate", Some("5"));
        assert_eq!(concerns.to_string(), "Fungal Acne Trigger, Pore-clogging");

        let concerns = classify("Benzyl Alcohol", None);
        assert_eq!(concerns.to_string(), "Irritant");

        let concerns = classify("Paraffinum Liquidum (Mineral Oil)", Some("0"));
        assert_eq!(concerns.to_string(), "Petroleum-based");
    }
}
