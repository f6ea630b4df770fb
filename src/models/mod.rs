pub mod config;
pub mod params;

pub use config::{AppConfig, SubstitutesConfig};
pub use params::{ParamsUpdate, ParamsView};
