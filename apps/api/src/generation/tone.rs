//! Tone bands — maps a star rating onto the three prompt phrasings.
//!
//! Distinct from the five template tiers used by the fallback: a 4-star and a
//! 5-star review share a tone band but not a template set. Both schemes stay.

/// Rating-range bucket used only to phrase the AI prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneBand {
    /// Rating 4 or above.
    Warm,
    /// Rating exactly 3.
    Diplomatic,
    /// Rating 2 or below.
    Apologetic,
}

/// Tone and focus phrases inserted into the prompt for a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneGuidance {
    pub tone: &'static str,
    pub focus: &'static str,
}

impl ToneBand {
    pub fn from_rating(rating: u8) -> Self {
        match rating {
            r if r >= 4 => ToneBand::Warm,
            3 => ToneBand::Diplomatic,
            _ => ToneBand::Apologetic,
        }
    }

    pub fn guidance(self) -> ToneGuidance {
        match self {
            ToneBand::Warm => ToneGuidance {
                tone: "grateful and warm",
                focus: "thank them and encourage return visits",
            },
            ToneBand::Diplomatic => ToneGuidance {
                tone: "appreciative but professional",
                focus: "thank them and address any concerns diplomatically",
            },
            ToneBand::Apologetic => ToneGuidance {
                tone: "professional and solution-focused",
                focus: "apologize sincerely and offer to make things right",
            },
        }
    }
}
