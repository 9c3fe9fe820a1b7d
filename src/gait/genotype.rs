/// Genotype representation produced by the evolution engine
///
/// A genotype is a flat vector of normalized genes, nominally in `[-1.0, 1.0]`.
/// Genes are grouped into consecutive triples, one per module:
/// - amplitude gene
/// - offset gene
/// - phase gene
///
/// A robot with `n` modules therefore has a genotype of exactly `3 * n` genes.
///
/// # Conversion
///
/// Use `GenotypeDecoder::decode()` to convert Genotype -> GaitTable
///
/// # Example
///
/// ```
/// let genotype: hormodular::gait::Genotype = vec![0.0, 0.0, 0.0, 1.0, -1.0, 0.5];
/// // Two modules: (45, 0, 180) and (90, -90, 270)
/// assert_eq!(genotype.len(), 2 * hormodular::gait::GENES_PER_MODULE);
/// ```
pub type Genotype = Vec<f64>;

pub const GENES_PER_MODULE: usize = 3;
