use super::path::{Level, TopologyPath, RADIX};
use crate::error::{HormodularError, Result};
use crate::types::TopologyToken;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Integer key of a module chain.
///
/// Level `k` of the path is the base-17 digit of weight `17^k`. Paths have no depth
/// limit, so the key is unbounded.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ModuleId(BigUint);

impl ModuleId {
    pub fn new(value: impl Into<BigUint>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &BigUint {
        &self.0
    }
}

impl From<BigUint> for ModuleId {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl FromStr for ModuleId {
    type Err = HormodularError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<BigUint>()
            .map(Self)
            .map_err(|_| HormodularError::InvalidToken(format!("'{}' is not a module id", s)))
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn encode(path: &TopologyPath) -> Result<ModuleId> {
    // Horner from the deepest level down to level 0
    let id = path
        .levels()
        .iter()
        .rev()
        .fold(BigUint::default(), |id, level| id * RADIX + u32::from(level.digit()));

    log::debug!("Encoded {} as module id {}", path, id);
    Ok(ModuleId(id))
}

pub fn encode_tokens(tokens: &[TopologyToken]) -> Result<ModuleId> {
    encode(&TopologyPath::from_tokens(tokens)?)
}

/// Recover the canonical path an id was encoded from.
///
/// Ids with digits above a terminator digit were never produced by `encode`
/// and are rejected.
pub fn decode(id: &ModuleId) -> Result<TopologyPath> {
    let mut digits = id.0.to_radix_le(u32::from(RADIX));
    if digits.is_empty() {
        digits.push(0);
    }

    let mut levels = Vec::with_capacity(digits.len());
    for (index, &digit) in digits.iter().enumerate() {
        let level = Level::from_digit(digit).ok_or_else(|| {
            HormodularError::MalformedDescription(format!("digit {} out of range", digit))
        })?;
        if level == Level::Terminator && index + 1 < digits.len() {
            return Err(HormodularError::MalformedDescription(format!(
                "module id {} continues past its terminator at level {}",
                id, index
            )));
        }
        levels.push(level);
    }

    TopologyPath::from_levels(levels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Angle, Face};

    fn joint(face: Face, angle: Angle) -> Level {
        Level::Joint { face, angle }
    }

    #[test]
    fn test_front_90_terminated() {
        let path = TopologyPath::from_tokens(&[
            TopologyToken::Connector(Face::Front),
            TopologyToken::Rotation(Angle::Deg90),
            TopologyToken::Terminator,
        ])
        .unwrap();

        let id = encode(&path).unwrap();
        assert_eq!(id, ModuleId::new(276u32));
        assert_eq!(decode(&id).unwrap(), path);
    }

    #[test]
    fn test_level_weights() {
        // (L, 270) -> 3 + 4 * 3 = 15 at level 0; (R, 0) -> 1 * 17 at level 1
        let path = TopologyPath::from_levels(vec![
            joint(Face::Left, Angle::Deg270),
            joint(Face::Right, Angle::Deg0),
        ])
        .unwrap();
        assert_eq!(encode(&path).unwrap(), ModuleId::new(15u32 + 17));

        let terminator_only = TopologyPath::from_levels(vec![Level::Terminator]).unwrap();
        assert_eq!(encode(&terminator_only).unwrap(), ModuleId::new(16u32));
    }

    #[test]
    fn test_trailing_zero_levels_share_an_id() {
        let short = TopologyPath::from_levels(vec![joint(Face::Back, Angle::Deg90)]).unwrap();
        let padded = TopologyPath::from_levels(vec![
            joint(Face::Back, Angle::Deg90),
            joint(Face::Front, Angle::Deg0),
        ])
        .unwrap();

        assert_eq!(encode(&short).unwrap(), encode(&padded).unwrap());
        assert_eq!(decode(&encode(&padded).unwrap()).unwrap(), padded.canonical());
    }

    #[test]
    fn test_decode_zero() {
        let path = decode(&ModuleId::new(0u32)).unwrap();
        assert_eq!(path.levels(), &[joint(Face::Front, Angle::Deg0)]);
    }

    #[test]
    fn test_decode_rejects_digits_past_terminator() {
        // terminator at level 0, then a stray level 1 digit
        let result = decode(&ModuleId::new(16u32 + 17 * 5));
        assert!(matches!(result, Err(HormodularError::MalformedDescription(_))));
    }

    #[test]
    fn test_deep_paths_round_trip() {
        for depth in [31, 32, 40, 200] {
            let mut levels = vec![joint(Face::Left, Angle::Deg270); depth];
            levels.push(Level::Terminator);
            let path = TopologyPath::from_levels(levels).unwrap();

            let id = encode(&path).unwrap();
            assert_eq!(id.value().to_radix_le(u32::from(RADIX)).len(), depth + 1);
            assert_eq!(decode(&id).unwrap(), path);
        }
    }

    #[test]
    fn test_parse_large_id() {
        let path = TopologyPath::from_levels(vec![joint(Face::Back, Angle::Deg180); 40]).unwrap();
        let id = encode(&path).unwrap();
        assert!(id.to_string().len() > u128::MAX.to_string().len());

        let parsed: ModuleId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert_eq!(decode(&parsed).unwrap(), path);

        assert!(matches!("12a".parse::<ModuleId>(), Err(HormodularError::InvalidToken(_))));
        assert!("-3".parse::<ModuleId>().is_err());
    }
}
