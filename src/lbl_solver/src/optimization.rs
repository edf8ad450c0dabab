//! Peephole cleanup of a solution.
//!
//! Records are pushed onto an output stack one at a time. After each push
//! every rewriter looks at the top two records, and a rewrite's replacement
//! is pushed again so it can combine with whatever is now below it. This
//! reaches the same fixed point as rescanning the whole list from the left
//! after every rewrite, and each rewrite shortens the list, so it stops.
//!
//! Rewrites never look across different base letters, so `R L R'` stays as
//! it is.

use cube_core::{Direction, MoveToken};

use crate::record::MoveRecord;

trait PeepholeRewriter {
    /// Returns the records that replace the adjacent pair `first, second`,
    /// or `None` to leave the pair alone.
    fn try_match(first: &MoveRecord, second: &MoveRecord) -> Option<Vec<MoveRecord>>;
}

/// `X X'`, `X' X` and `X2 X2` vanish.
struct CancelInverses;

impl PeepholeRewriter for CancelInverses {
    fn try_match(first: &MoveRecord, second: &MoveRecord) -> Option<Vec<MoveRecord>> {
        first.token.cancels(second.token).then(Vec::new)
    }
}

/// `X X` and `X' X'` become `X2`, keeping the first record's tags.
struct MergeQuarterTurns;

impl PeepholeRewriter for MergeQuarterTurns {
    fn try_match(first: &MoveRecord, second: &MoveRecord) -> Option<Vec<MoveRecord>> {
        if first.token != second.token || first.token.dir == Direction::Double {
            return None;
        }
        Some(vec![MoveRecord {
            token: MoveToken::new(first.token.base, Direction::Double),
            ..*first
        }])
    }
}

const REWRITERS: [fn(&MoveRecord, &MoveRecord) -> Option<Vec<MoveRecord>>; 2] =
    [CancelInverses::try_match, MergeQuarterTurns::try_match];

fn push_rewriting(out: &mut Vec<MoveRecord>, record: MoveRecord) {
    let Some(top) = out.last() else {
        out.push(record);
        return;
    };
    match REWRITERS
        .iter()
        .find_map(|try_match| try_match(top, &record))
    {
        Some(replacement) => {
            out.pop();
            for record in replacement {
                push_rewriting(out, record);
            }
        }
        None => out.push(record),
    }
}

/// Cancels and merges adjacent same-letter moves until nothing changes.
#[must_use]
pub fn optimize(records: &[MoveRecord]) -> Vec<MoveRecord> {
    let mut out = Vec::with_capacity(records.len());
    for &record in records {
        push_rewriting(&mut out, record);
    }
    out
}
