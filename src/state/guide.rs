/// Static acne-type reference catalogue
///
/// Educational content only. The expansion flags are pure view state and
/// never interact with the upload or prediction machinery.

/// One entry in the reference guide
pub struct GuideEntry {
    pub name: &'static str,
    /// Marker shown next to the name
    pub marker: &'static str,
    pub description: &'static str,
    pub characteristics: [&'static str; 3],
    pub tip: &'static str,
}

/// The five acne types, ordered from mildest to most severe
pub static CATALOG: [GuideEntry; 5] = [
    GuideEntry {
        name: "Blackheads",
        marker: "⚫",
        description: "Open comedones that appear dark due to oxidized sebum and dead skin cells.",
        characteristics: ["Dark or black appearance", "Open pore", "Usually painless"],
        tip: "Use salicylic acid cleansers and avoid over-washing.",
    },
    GuideEntry {
        name: "Whiteheads",
        marker: "⚪",
        description: "Closed comedones that appear as small white or flesh-colored bumps.",
        characteristics: ["White or flesh-colored", "Closed pore", "Small raised bumps"],
        tip: "Gentle exfoliation and non-comedogenic moisturizers help.",
    },
    GuideEntry {
        name: "Papules",
        marker: "🔴",
        description: "Small, red, inflammatory bumps without pus.",
        characteristics: ["Red colored", "Solid bumps", "May be tender to touch"],
        tip: "Apply ice and use anti-inflammatory treatments.",
    },
    GuideEntry {
        name: "Pustules",
        marker: "🟡",
        description: "Inflamed lesions containing pus with a red base.",
        characteristics: ["White or yellow center", "Red base", "Contains pus"],
        tip: "Avoid squeezing. Use benzoyl peroxide cream 2.5%.",
    },
    GuideEntry {
        name: "Nodules",
        marker: "🟣",
        description: "Large, painful bumps deep under the skin.",
        characteristics: ["Large size", "Deep under skin", "Often painful"],
        tip: "Consult a dermatologist for professional treatment.",
    },
];

/// General advice shown under the catalogue
pub static GENERAL_TIPS: [&str; 4] = [
    "Consult a dermatologist for proper diagnosis",
    "Maintain a consistent, gentle skincare routine",
    "Avoid picking or squeezing acne lesions",
    "Use non-comedogenic products",
];

/// Per-entry expand/collapse flags, one per catalogue entry
#[derive(Debug, Default)]
pub struct GuideState {
    expanded: [bool; 5],
}

impl GuideState {
    pub fn toggle(&mut self, index: usize) {
        if let Some(flag) = self.expanded.get_mut(index) {
            *flag = !*flag;
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }
}
