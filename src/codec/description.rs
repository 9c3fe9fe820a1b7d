use super::identifier::{encode, ModuleId};
use super::path::TopologyPath;
use crate::error::{HormodularError, Result};
use crate::types::{Angle, Face, TopologyToken};

/// Parse a topology description such as `(F, 90, R, 0, X)`.
///
/// The nested form written by the evolution tooling, `((F, 90), (R, 0), X)`,
/// is accepted as well.
pub fn parse_description(description: &str) -> Result<TopologyPath> {
    let inner = strip_enclosing(description.trim())?;
    if inner.trim().is_empty() {
        return Err(HormodularError::EmptyPath);
    }

    let tokens = inner
        .split(',')
        .enumerate()
        .map(|(position, raw)| classify(position, raw))
        .collect::<Result<Vec<_>>>()?;

    TopologyPath::from_tokens(&tokens)
}

/// Parse and encode in one step
pub fn module_id(description: &str) -> Result<ModuleId> {
    encode(&parse_description(description)?)
}

fn strip_enclosing(description: &str) -> Result<&str> {
    let mut chars = description.chars();
    match (chars.next(), chars.next_back()) {
        (Some('('), Some(')')) | (Some('['), Some(']')) => {
            Ok(&description[1..description.len() - 1])
        }
        _ => Err(HormodularError::MalformedDescription(format!(
            "'{}' is not enclosed in parentheses or brackets",
            description
        ))),
    }
}

fn classify(position: usize, raw: &str) -> Result<TopologyToken> {
    let token = raw
        .trim()
        .trim_matches(|c| c == '(' || c == ')')
        .trim();

    if token.is_empty() {
        return Err(HormodularError::MalformedDescription(format!(
            "empty token at position {}",
            position
        )));
    }

    if token == "X" || token == "x" {
        return Ok(TopologyToken::Terminator);
    }

    if token.chars().all(|c| c.is_ascii_digit()) {
        return Angle::from_degrees(token)
            .map(TopologyToken::Rotation)
            .ok_or_else(|| {
                HormodularError::InvalidToken(format!(
                    "'{}' at position {} is not a rotation of 0, 90, 180 or 270",
                    token, position
                ))
            });
    }

    if token.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return Face::from_symbol(token)
            .map(TopologyToken::Connector)
            .ok_or_else(|| {
                HormodularError::InvalidToken(format!(
                    "'{}' at position {} is not a connector face (F, R, B, L)",
                    token, position
                ))
            });
    }

    Err(HormodularError::InvalidToken(format!(
        "'{}' at position {}",
        token, position
    )))
}
