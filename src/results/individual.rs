use crate::error::{HormodularError, Result};
use crate::gait::{GaitTable, Genotype, GenotypeDecoder};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One evolved individual read back from a milestone file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    pub name: String,
    pub generation: Option<u32>, // None when the file's gen attribute is not a number
    pub fitness: f64,
    pub genotype: Genotype,
}

impl Individual {
    pub fn gait_table(&self, n_modules: usize) -> Result<GaitTable> {
        GenotypeDecoder::new(n_modules).decode(&self.genotype)
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let generation = self.generation.map(i64::from).unwrap_or(-1);
        write!(f, "{}, gen: {}, fitness: {}", self.name, generation, self.fitness)
    }
}

/// Which individual of a results file to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndividualSelector {
    Best,
    Index(usize), // 1-based, as listed
}

impl IndividualSelector {
    pub fn select<'a>(&self, individuals: &'a [Individual]) -> Result<&'a Individual> {
        match self {
            Self::Best => best_individual(individuals).ok_or_else(|| {
                HormodularError::ResultsFile("results contain no individuals".to_string())
            }),
            Self::Index(index) => index
                .checked_sub(1)
                .and_then(|i| individuals.get(i))
                .ok_or_else(|| {
                    HormodularError::ResultsFile(format!(
                        "individual #{} not found ({} available)",
                        index,
                        individuals.len()
                    ))
                }),
        }
    }
}

impl FromStr for IndividualSelector {
    type Err = HormodularError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("best") {
            return Ok(Self::Best);
        }
        s.trim_start_matches('#')
            .parse::<usize>()
            .map(Self::Index)
            .map_err(|_| {
                HormodularError::ResultsFile(format!(
                    "'{}' is neither 'best' nor an individual number",
                    s
                ))
            })
    }
}

pub fn best_individual(individuals: &[Individual]) -> Option<&Individual> {
    individuals
        .iter()
        .max_by(|a, b| a.fitness.total_cmp(&b.fitness))
}

/// JSON listing of individuals, for tools that post-process results
pub fn individuals_to_json(individuals: &[Individual]) -> Result<String> {
    Ok(serde_json::to_string_pretty(individuals)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn individual(name: &str, fitness: f64) -> Individual {
        Individual {
            name: name.to_string(),
            generation: Some(1),
            fitness,
            genotype: vec![0.0; 3],
        }
    }

    #[test]
    fn test_display() {
        let mut ind = individual("Individual #1", 12.5);
        assert_eq!(ind.to_string(), "Individual #1, gen: 1, fitness: 12.5");

        ind.generation = None;
        assert_eq!(ind.to_string(), "Individual #1, gen: -1, fitness: 12.5");
    }

    #[test]
    fn test_selector() {
        let individuals = vec![individual("a", 1.0), individual("b", 3.0), individual("c", 2.0)];

        assert_eq!("best".parse::<IndividualSelector>().unwrap(), IndividualSelector::Best);
        assert_eq!(IndividualSelector::Best.select(&individuals).unwrap().name, "b");
        assert_eq!(
            "#3".parse::<IndividualSelector>().unwrap().select(&individuals).unwrap().name,
            "c"
        );
        assert!(IndividualSelector::Index(0).select(&individuals).is_err());
        assert!(IndividualSelector::Index(4).select(&individuals).is_err());
        assert!("first".parse::<IndividualSelector>().is_err());
        assert!(IndividualSelector::Best.select(&[]).is_err());
    }

    #[test]
    fn test_json_listing() {
        let json = individuals_to_json(&[individual("a", 2.0)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["name"], "a");
        assert_eq!(value[0]["fitness"], 2.0);
        assert_eq!(value[0]["genotype"].as_array().map(|g| g.len()), Some(3));
    }

    #[test]
    fn test_gait_table() {
        let ind = individual("a", 0.0);
        assert_eq!(ind.gait_table(1).unwrap().entries()[0].phase, 180.0);
        assert!(ind.gait_table(2).is_err());
    }
}
