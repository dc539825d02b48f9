pub mod normalize;
pub mod vocabulary;

pub use normalize::{normalize, NormalizedRow, COLUMNS};
pub use vocabulary::{Vocabulary, LISTING_SUBTYPES, LISTING_TYPES};
