//! The four validator families and the matching helpers they share.

pub mod content;
pub mod length;
pub mod patterns;
pub mod score;
pub mod spelling;

pub use content::ContentAdequacyValidator;
pub use length::TextLengthValidator;
pub use score::ScoreValidator;
pub use spelling::SpellingHeuristicValidator;
