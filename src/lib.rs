pub mod catalog;
pub mod config;
pub mod error;
pub mod games;
pub mod plan;
pub mod preferences;
pub mod theme;
pub mod types {
    pub mod catalog_data;
}

pub use catalog::Catalog;
pub use error::{LinguaPlayError, Result};
