pub mod error;
pub mod species_tag;

pub use error::ErrorView;
pub use species_tag::SpeciesTag;
