pub mod category;
mod event;
pub mod time;

pub use category::{CategoryFilter, CategoryOption, CATEGORIES};
pub use event::{Casualties, Event, InfrastructureDamage, Location, Source};
