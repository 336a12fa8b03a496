use std::fmt;

use serde::{Deserialize, Serialize};

/// Two-valued facility classification: in-hospital vs community facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacilityClass {
    Ihf,
    Chf,
}

impl FacilityClass {
    /// Resolves a raw `ihf_chf` field value to a classification.
    ///
    /// Matching is case-insensitive after trimming. Returns `None` for empty
    /// or unrecognized values; callers decide whether to log the skip.
    pub fn classify(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "ihf" => Some(Self::Ihf),
            // "ifh" is a known typo in some site fixture data
            "ifh" => Some(Self::Ihf),
            "chf" => Some(Self::Chf),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ihf => "ihf",
            Self::Chf => "chf",
        }
    }
}

impl fmt::Display for FacilityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_recognized_values() {
        assert_eq!(FacilityClass::classify("IHF"), Some(FacilityClass::Ihf));
        assert_eq!(FacilityClass::classify("chf"), Some(FacilityClass::Chf));
        assert_eq!(FacilityClass::classify(" Chf "), Some(FacilityClass::Chf));
    }

    #[test]
    fn classify_corrects_known_typo() {
        assert_eq!(FacilityClass::classify("IFH"), Some(FacilityClass::Ihf));
        assert_eq!(FacilityClass::classify("ifh"), Some(FacilityClass::Ihf));
    }

    #[test]
    fn classify_rejects_unknown_values() {
        assert_eq!(FacilityClass::classify(""), None);
        assert_eq!(FacilityClass::classify("   "), None);
        assert_eq!(FacilityClass::classify("hospital"), None);
        assert_eq!(FacilityClass::classify("fhc"), None);
    }
}
