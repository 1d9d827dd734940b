//! Value objects - immutable, validated-by-construction building blocks

pub mod mastery_levels;
pub mod names;
pub mod potion_stock;
pub mod resource;
pub mod title;
pub mod training;

pub use mastery_levels::{MasteryField, MasteryLevels};
pub use names::{Nickname, ANONYMOUS_NICKNAME};
pub use potion_stock::{PotionKind, PotionStock};
pub use resource::ResourcePool;
pub use title::TitleTier;
pub use training::TrainingState;
