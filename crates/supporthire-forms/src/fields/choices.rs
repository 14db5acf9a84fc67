//! Option sets for the selection fields of both forms.

use serde::{Deserialize, Serialize};

use super::Choice;

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => ($value:literal, $label:literal),)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[doc = $label]
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl Choice for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn value(self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.value())
            }
        }
    };
}

choice_enum! {
    /// Kind of support work a job seeker is looking for.
    pub enum JobType {
        Inbound => ("inbound", "Inbound Voice"),
        Outbound => ("outbound", "Outbound Voice"),
        Chat => ("chat", "Chat Support"),
        Email => ("email", "Email Support"),
    }
}

choice_enum! {
    /// Preferred working shift.
    pub enum ShiftPreference {
        Day => ("day", "Day"),
        Night => ("night", "Night"),
        Rotational => ("rotational", "Rotational"),
    }
}

choice_enum! {
    /// A support role a recruiter hires for.
    pub enum HiringRole {
        InboundVoice => ("inbound_voice", "Inbound voice"),
        OutboundVoice => ("outbound_voice", "Outbound voice"),
        Blended => ("blended", "Blended"),
        Chat => ("chat", "Chat"),
        Email => ("email", "Email"),
        TechnicalSupport => ("technical_support", "Technical support"),
    }
}

choice_enum! {
    /// Number of hires a recruiter makes per month.
    pub enum MonthlyVolume {
        UpTo10 => ("1-10", "1 - 10 hires / month"),
        UpTo30 => ("11-30", "11 - 30 hires / month"),
        UpTo75 => ("31-75", "31 - 75 hires / month"),
        Over75 => ("76+", "76+ hires / month"),
    }
}

choice_enum! {
    /// Whether a recruiter would pay for quality candidates.
    pub enum WillingToPay {
        Yes => ("yes", "Yes"),
        Maybe => ("maybe", "Maybe"),
        No => ("no", "No"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_values() {
        assert_eq!(JobType::parse("outbound"), Some(JobType::Outbound));
        assert_eq!(MonthlyVolume::parse("76+"), Some(MonthlyVolume::Over75));
        assert_eq!(
            HiringRole::parse("technical_support"),
            Some(HiringRole::TechnicalSupport)
        );
    }

    #[test]
    fn test_parse_rejects_labels_and_unknowns() {
        assert_eq!(JobType::parse("Inbound Voice"), None);
        assert_eq!(ShiftPreference::parse(""), None);
        assert_eq!(WillingToPay::parse("YES"), None);
    }

    #[test]
    fn test_serde_uses_stored_values() {
        let json = serde_json::to_string(&MonthlyVolume::UpTo30).unwrap();
        assert_eq!(json, r#""11-30""#);

        let role: HiringRole = serde_json::from_str(r#""inbound_voice""#).unwrap();
        assert_eq!(role, HiringRole::InboundVoice);
    }

    #[test]
    fn test_options_in_display_order() {
        let options = ShiftPreference::options();
        assert_eq!(
            options,
            vec![("day", "Day"), ("night", "Night"), ("rotational", "Rotational")]
        );
    }
}
