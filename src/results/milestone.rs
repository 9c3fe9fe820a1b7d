use super::individual::Individual;
use crate::error::{HormodularError, Result};
use crate::gait::{GaitTable, GenotypeDecoder};
use crate::markup::{attribute, elements, Element};
use rayon::prelude::*;
use std::path::Path;

const INDIVIDUAL_TAG: &str = "Individual";
const FITNESS_TAG: &str = "FitnessMax";
const GENOTYPE_TAG: &str = "FloatingPoint";

/// Read every individual stored in a milestone file.
///
/// Only the elements the evolution engine writes are looked at; this is not a
/// general XML reader. An individual carries either one flat `FloatingPoint`
/// vector of per-module triples, or three vectors of equal length holding the
/// amplitudes, offsets and phases.
pub fn load_individuals(text: &str) -> Result<Vec<Individual>> {
    let individuals = elements(text, INDIVIDUAL_TAG)
        .into_iter()
        .enumerate()
        .map(|(index, element)| parse_individual(index + 1, element))
        .collect::<Result<Vec<_>>>()?;

    log::info!("Loaded {} individuals", individuals.len());
    Ok(individuals)
}

pub fn load_individuals_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Individual>> {
    let text = std::fs::read_to_string(path.as_ref())?;
    load_individuals(&text).map_err(|e| match e {
        HormodularError::ResultsFile(message) => HormodularError::ResultsFile(format!(
            "{}: {}",
            path.as_ref().display(),
            message
        )),
        other => other,
    })
}

/// Decode every individual; failures stay attached to the individual they belong to
pub fn decode_population(individuals: &[Individual], n_modules: usize) -> Vec<Result<GaitTable>> {
    let decoder = GenotypeDecoder::new(n_modules);
    let tables: Vec<Result<GaitTable>> = individuals
        .par_iter()
        .map(|individual| decoder.decode(&individual.genotype))
        .collect();

    for (individual, table) in individuals.iter().zip(&tables) {
        if let Err(e) = table {
            log::warn!("Could not decode {}: {}", individual.name, e);
        }
    }
    tables
}

fn parse_individual(number: usize, element: Element<'_>) -> Result<Individual> {
    let name = format!("Individual #{}", number);
    let body = element.body.unwrap_or("");

    let generation =
        attribute(element.attributes, "gen").and_then(|g| g.trim().parse::<u32>().ok());

    let fitness_element = elements(body, FITNESS_TAG).into_iter().next().ok_or_else(|| {
        HormodularError::ResultsFile(format!("{} has no {} element", name, FITNESS_TAG))
    })?;
    let fitness = attribute(fitness_element.attributes, "value")
        .ok_or_else(|| {
            HormodularError::ResultsFile(format!("{} has a {} without value", name, FITNESS_TAG))
        })?
        .trim()
        .parse::<f64>()
        .map_err(|_| HormodularError::ResultsFile(format!("{} has an invalid fitness", name)))?;

    let vectors = elements(body, GENOTYPE_TAG)
        .into_iter()
        .map(|gene_element| parse_genes(&name, gene_element.body.unwrap_or("")))
        .collect::<Result<Vec<_>>>()?;
    let genotype = join_vectors(&name, vectors)?;

    Ok(Individual {
        name,
        generation,
        fitness,
        genotype,
    })
}

fn parse_genes(name: &str, body: &str) -> Result<Vec<f64>> {
    body.split_whitespace()
        .map(|gene| {
            gene.parse::<f64>().map_err(|_| {
                HormodularError::ResultsFile(format!("{} has an invalid gene '{}'", name, gene))
            })
        })
        .collect()
}

/// One flat vector is used as is; amplitude, offset and phase vectors are interleaved
fn join_vectors(name: &str, mut vectors: Vec<Vec<f64>>) -> Result<Vec<f64>> {
    match vectors.len() {
        1 => Ok(vectors.remove(0)),
        3 => {
            let (amplitudes, offsets, phases) = (&vectors[0], &vectors[1], &vectors[2]);
            if amplitudes.len() != offsets.len() || amplitudes.len() != phases.len() {
                return Err(HormodularError::ResultsFile(format!(
                    "{} has amplitude, offset and phase vectors of sizes {}, {} and {}",
                    name,
                    amplitudes.len(),
                    offsets.len(),
                    phases.len()
                )));
            }
            Ok(amplitudes
                .iter()
                .zip(offsets)
                .zip(phases)
                .flat_map(|((&a, &o), &p)| [a, o, p])
                .collect())
        }
        count => Err(HormodularError::ResultsFile(format!(
            "{} has {} {} elements, expected 1 or 3",
            name, count, GENOTYPE_TAG
        ))),
    }
}
