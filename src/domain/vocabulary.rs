// src/domain/vocabulary.rs

/// A closed set of choices accepted by an import field.
///
/// Keys are the spellings we accept from listing pages; values are the labels the
/// import schema expects. Anything else has no label.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    pub name: &'static str,
    choices: &'static [(&'static str, &'static str)],
}

impl Vocabulary {
    pub fn label(&self, raw: &str) -> Option<&'static str> {
        self.choices
            .iter()
            .find(|(key, _)| *key == raw)
            .map(|(_, label)| *label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.choices.iter().map(|(_, label)| *label)
    }
}

/// "Type" choices (ownership interest).
pub const LISTING_TYPES: Vocabulary = Vocabulary {
    name: "Type",
    choices: &[
        ("House", "House"),
        ("Condo/Townhouse", "Condo/Townhouse"),
        ("Land Only", "Land Only"),
        ("Apartment", "Apartment"),
    ],
};

/// "Subtype" choices, used for `listing_style`.
pub const LISTING_SUBTYPES: Vocabulary = Vocabulary {
    name: "Subtype",
    choices: &[
        ("House/Single Family", "House/Single Family"),
        ("Apartment/Condo", "Apartment/Condo"),
        ("Townhouse", "Townhouse"),
        ("1_2_Duplex", "1/2 Duplex"),
        ("Manufactured_with_Land", "Manufactured with Land"),
        ("Corner Unit", "Corner Unit"),
    ],
};
