//! Approximate string matching used to score windows against a query.
//!
//! Both matchers return `None` for "no match" and otherwise a weight where
//! lower is better and `Some(0)` is the best possible result.

use super::normalize::normalize;

/// Score `term` against `text`.
///
/// `term` is normalized here; `text` must already be in search form (see
/// [`normalize`]). An exact substring hit scores `0`. Otherwise the term's
/// characters must appear in order in `text`; the weight grows with the
/// position of the first hit and with the spread of the remaining hits.
///
/// While looking for the next term character, a text character equal to the
/// previous term character moves that previous hit forward instead of being
/// skipped, so a doubled letter in the text absorbs a single typed one.
#[must_use]
pub fn fuzzy_match(term: &str, text: &str) -> Option<usize> {
    let term = normalize(term);

    if text.contains(term.as_str()) {
        return Some(0);
    }

    let term: Vec<char> = term.chars().collect();
    let text: Vec<char> = text.chars().collect();

    let mut matches: Vec<usize> = Vec::with_capacity(term.len());
    // Next text index to inspect; every inspection consumes one position.
    let mut cursor = 0usize;

    for (i, &c) in term.iter().enumerate() {
        // The previous term char only takes part once a hit sits past index 0.
        let prev = (cursor > 1).then(|| term[i - 1]);

        loop {
            let &t = text.get(cursor)?;
            let pos = cursor;
            cursor += 1;

            if t == c {
                matches.push(pos);
                break;
            } else if Some(t) == prev {
                matches.pop();
                matches.push(pos);
            }
        }
    }

    let &first = matches.first()?;
    Some(matches.iter().map(|p| p - first).sum::<usize>() + first)
}

/// Score space separated `terms` against `text` without fuzziness.
///
/// The whole phrase appearing verbatim scores `0`. Otherwise every non-empty
/// term has to appear somewhere in `text`, in any order, and the weight is one
/// more than the sum of the terms' first offsets.
#[must_use]
pub fn strict_match(terms: &[String], text: &str) -> Option<usize> {
    let phrase = normalize(&terms.join(" "));
    if text.contains(phrase.as_str()) {
        return Some(0);
    }

    terms
        .iter()
        .map(|term| normalize(term))
        .filter(|term| !term.is_empty())
        .try_fold(1usize, |weight, term| {
            text.find(term.as_str()).map(|offset| weight + offset)
        })
}
