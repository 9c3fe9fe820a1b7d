pub mod decoder;
pub mod genotype;
pub mod table;

pub use decoder::{decode_genotype, decode_triple, GenotypeDecoder};
pub use genotype::{Genotype, GENES_PER_MODULE};
pub use table::GaitTable;
