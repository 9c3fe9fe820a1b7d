pub mod individual;
pub mod milestone;

pub use individual::{best_individual, individuals_to_json, Individual, IndividualSelector};
pub use milestone::{decode_population, load_individuals, load_individuals_from_file};
