use super::genotype::GENES_PER_MODULE;
use super::table::GaitTable;
use crate::error::{HormodularError, Result};
use crate::types::GaitEntry;

// Actuator ranges of the simulated servos
pub const AMPLITUDE_SCALE: f64 = 45.0;
pub const AMPLITUDE_BIAS: f64 = 45.0;
pub const OFFSET_SCALE: f64 = 90.0;
pub const PHASE_SCALE: f64 = 180.0;
pub const PHASE_BIAS: f64 = 180.0;

/// Maps normalized genes to actuator parameters
pub struct GenotypeDecoder {
    n_modules: usize,
}

impl GenotypeDecoder {
    pub fn new(n_modules: usize) -> Self {
        Self { n_modules }
    }

    pub fn n_modules(&self) -> usize {
        self.n_modules
    }

    pub fn expected_len(&self) -> usize {
        self.n_modules * GENES_PER_MODULE
    }

    /// Decode a whole genotype. Out-of-range genes are not clamped.
    pub fn decode(&self, genotype: &[f64]) -> Result<GaitTable> {
        let expected = self.expected_len();
        if genotype.len() != expected {
            return Err(HormodularError::ShapeMismatch {
                expected,
                actual: genotype.len(),
            });
        }

        let entries = genotype
            .chunks_exact(GENES_PER_MODULE)
            .map(|genes| decode_triple(genes[0], genes[1], genes[2]))
            .collect();

        GaitTable::new(entries, self.n_modules)
    }
}

pub fn decode_triple(amplitude_gene: f64, offset_gene: f64, phase_gene: f64) -> GaitEntry {
    GaitEntry {
        amplitude: amplitude_gene * AMPLITUDE_SCALE + AMPLITUDE_BIAS,
        offset: offset_gene * OFFSET_SCALE,
        phase: phase_gene * PHASE_SCALE + PHASE_BIAS,
    }
}

pub fn decode_genotype(genotype: &[f64], n_modules: usize) -> Result<GaitTable> {
    GenotypeDecoder::new(n_modules).decode(genotype)
}
