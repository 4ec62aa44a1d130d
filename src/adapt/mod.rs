pub mod activity;
pub mod assessment;
pub mod content;
pub mod duration;
pub mod vocabulary;

pub use content::adapt;
pub use vocabulary::VocabularyTier;
