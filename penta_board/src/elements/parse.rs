//! Parsing of the string identifier forms.
//!
//! Accepted forms:
//!
//! - `c-N`, `corner-N`, `j-N`, `junction-N` with `N` in `0..=4`
//! - a bare legacy field number `1..=10`
//! - `s-L-S` or `stop-L-S` for outer stops
//! - `s-a-L-S` for arm stops (`arm`, `i` and `inner` also name the ring)
//! - `s-l-L-S-E` and `s-r-L-S-E` for leg stops on the left or right branch
//! - `s-A-S-B`, the tag a renderer draws on a stop: `A = B + 1` names an arm
//!   stop, `A = B + 2` a leg stop. Both branches of a leg carry the same tag,
//!   so the leg form fails with [`BoardError::Ambiguous`]

use std::str::FromStr;

use super::{ElementId, FieldId, StopId};
use crate::error::{BoardError, Result};
use crate::kinds::LegSide;

impl FromStr for ElementId {
    type Err = BoardError;

    fn from_str(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(BoardError::parse(input, "empty identifier"));
        }

        if trimmed.bytes().all(|b| b.is_ascii_digit()) {
            let number = number(input, trimmed)?;
            return ElementId::from_legacy(number).ok_or_else(|| {
                BoardError::parse(input, "legacy field number must be in 1..=10")
            });
        }

        let parts: Vec<&str> = trimmed.split('-').collect();
        match parts.as_slice() {
            ["c" | "corner", index] => field(input, index).map(ElementId::Corner),
            ["j" | "junction", index] => field(input, index).map(ElementId::Junction),
            ["s" | "stop", rest @ ..] => stop(input, rest).map(ElementId::Stop),
            [kind, ..] => Err(BoardError::parse(
                input,
                format!("unknown identifier kind {kind:?}"),
            )),
            [] => Err(BoardError::parse(input, "empty identifier")),
        }
    }
}

impl FromStr for StopId {
    type Err = BoardError;

    fn from_str(input: &str) -> Result<Self> {
        StopId::try_from(input.to_string())
    }
}

fn number(input: &str, part: &str) -> Result<u8> {
    let invalid = || BoardError::parse(input, format!("{part:?} is not a small number"));
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    part.parse::<u8>().map_err(|_| invalid())
}

fn field(input: &str, index: &str) -> Result<FieldId> {
    FieldId::new(number(input, index)?).map_err(|e| BoardError::parse(input, e.to_string()))
}

fn stop(input: &str, parts: &[&str]) -> Result<StopId> {
    let parsed = match parts {
        [leg, sub] => StopId::outer(number(input, leg)?, number(input, sub)?),
        ["a" | "arm" | "i" | "inner", leg, sub] => {
            StopId::arm(number(input, leg)?, number(input, sub)?)
        }
        [start, sub, end] => {
            let start = number(input, start)?;
            let sub = number(input, sub)?;
            let end = number(input, end)?;
            return tagged_stop(input, start, sub, end);
        }
        [side, leg, sub, end] => {
            let side = match *side {
                "l" | "left" => LegSide::Left,
                "r" | "right" => LegSide::Right,
                other => {
                    return Err(BoardError::parse(
                        input,
                        format!("unknown leg branch {other:?}"),
                    ))
                }
            };
            let id = StopId::leg(side, number(input, leg)?, number(input, sub)?)
                .map_err(|e| BoardError::parse(input, e.to_string()))?;
            let end = number(input, end)?;
            if id.end() != Some(end) {
                return Err(BoardError::parse(
                    input,
                    format!("leg stop end {end} does not match leg {}", id.leg_index()),
                ));
            }
            Ok(id)
        }
        _ => {
            return Err(BoardError::parse(
                input,
                "stop identifiers need a ring marker and two or three indices",
            ))
        }
    };

    parsed.map_err(|e| BoardError::parse(input, e.to_string()))
}

fn tagged_stop(input: &str, start: u8, sub: u8, end: u8) -> Result<StopId> {
    if end.checked_add(1) == Some(start) {
        return StopId::arm(end, sub).map_err(|e| BoardError::parse(input, e.to_string()));
    }
    if end.checked_add(2) != Some(start) {
        return Err(BoardError::parse(
            input,
            format!("{start} and {end} are not the ends of an arm or leg tag"),
        ));
    }

    let candidates = LegSide::ALL
        .into_iter()
        .map(|side| StopId::leg(side, start, sub).map(ElementId::Stop))
        .collect::<Result<Vec<_>>>()
        .map_err(|e| BoardError::parse(input, e.to_string()))?;
    Err(BoardError::Ambiguous {
        input: input.to_string(),
        candidates,
    })
}
