pub mod background;
pub mod studio;
pub mod trigger_queue;

pub use background::BackgroundGenerator;
pub use studio::Studio;
pub use trigger_queue::{Completed, Trigger, TriggerQueue};
