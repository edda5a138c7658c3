//! Progressive address matching.
//!
//! The last token is taken to be the county, since Irish addresses end with
//! it. Every earlier token is tried as a place name in reading order; the
//! first one that exists in that county wins. When only the county token is
//! left, the county centroid is returned instead.

use tracing::{debug, trace};

use crate::gazetteer::Gazetteer;
use crate::models::MatchResult;
use crate::tokenizer::{tokenize, Token};

/// Find the most specific match for an already tokenized address.
///
/// Every record sharing the winning (county, name) pair is returned in table
/// order. An empty token list yields an empty result.
pub fn match_tokens(tokens: &[Token], gazetteer: &Gazetteer) -> MatchResult {
    let Some(county) = tokens.last() else {
        return MatchResult::empty();
    };

    let mut remaining = tokens;
    while let [local, rest @ ..] = remaining {
        if rest.is_empty() {
            trace!(county = %county, "falling back to county centroid");
            return MatchResult::counties(gazetteer.county(county.as_str()));
        }

        let result = MatchResult::places(gazetteer.places_in(county.as_str(), local.as_str()));
        if !result.is_empty() {
            return result;
        }

        trace!(county = %county, candidate = %local, "no place match");
        remaining = rest;
    }

    MatchResult::empty()
}

/// Tokenize and match a raw address in one step
pub fn geocode(address: &str, gazetteer: &Gazetteer) -> MatchResult {
    let tokens = tokenize(address);
    debug!(?tokens, "tokenized address");

    let result = match_tokens(&tokens, gazetteer);
    debug!(level = %result.level, matches = result.len(), "matched address");
    result
}
