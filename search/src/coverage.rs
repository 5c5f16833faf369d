//! Exhaustive team coverage search
//!
//! Every subset of the requested size is scored by how many attacking types no
//! member resists. The search is brute force: it scores `C(roster, size)` subsets
//! at `O(size × types)` each, which is fine for rosters of a few dozen members and
//! small team sizes but grows combinatorially beyond that.

use covey_chart::{EffectivenessTable, Type};
use serde::Serialize;

use crate::combinations::{Combinations, binomial};
use crate::roster::check_catalog;
use crate::{Entity, SearchError, resistances};

/// Score of one candidate subset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombinationResult {
    /// Member names, in roster order
    pub members: Vec<String>,
    /// Attacking types no member resists, in catalog order
    pub uncovered: Vec<Type>,
    pub total_weight: u64,
}

impl CombinationResult {
    pub fn uncovered_count(&self) -> usize {
        self.uncovered.len()
    }

    pub fn is_fully_covered(&self) -> bool {
        self.uncovered.is_empty()
    }
}

/// A fully covering team, as returned by [`search`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedTeam {
    pub members: Vec<String>,
    pub total_weight: u64,
}

impl From<CombinationResult> for RankedTeam {
    fn from(result: CombinationResult) -> Self {
        Self {
            members: result.members,
            total_weight: result.total_weight,
        }
    }
}

/// Per-member coverage as a bit set over catalog positions
struct Scorer<'a> {
    roster: &'a [Entity],
    catalog: &'a [Type],
    masks: Vec<u32>,
}

impl<'a> Scorer<'a> {
    fn new(roster: &'a [Entity], table: &'a EffectivenessTable) -> Result<Self, SearchError> {
        let catalog = table.catalog();
        let masks = roster
            .iter()
            .map(|member| -> Result<u32, SearchError> {
                let profile = resistances(member, table)?;
                Ok(profile
                    .entries()
                    .iter()
                    .enumerate()
                    .filter(|(_, r)| r.resists())
                    .fold(0u32, |mask, (i, _)| mask | (1u32 << i)))
            })
            .collect::<Result<Vec<_>, SearchError>>()?;

        Ok(Self { roster, catalog, masks })
    }

    fn score(&self, subset: &[usize]) -> CombinationResult {
        let covered = subset.iter().fold(0u32, |mask, &i| mask | self.masks[i]);
        let uncovered = self
            .catalog
            .iter()
            .enumerate()
            .filter(|(i, _)| covered & (1u32 << *i) == 0)
            .map(|(_, t)| *t)
            .collect();

        CombinationResult {
            members: subset.iter().map(|&i| self.roster[i].name.clone()).collect(),
            uncovered,
            total_weight: subset.iter().map(|&i| u64::from(self.roster[i].weight)).sum(),
        }
    }

    #[cfg_attr(feature = "parallel", allow(dead_code))]
    fn score_sequential(&self, subset_size: usize) -> Vec<CombinationResult> {
        Combinations::new(self.roster.len(), subset_size)
            .map(|subset| self.score(&subset))
            .collect()
    }

    /// Same output, in the same order, as `score_sequential`
    #[cfg(feature = "parallel")]
    fn score_parallel(&self, subset_size: usize) -> Vec<CombinationResult> {
        use rayon::prelude::*;

        let subsets: Vec<Vec<usize>> = Combinations::new(self.roster.len(), subset_size).collect();
        subsets.par_iter().map(|subset| self.score(subset)).collect()
    }

    fn score_all(&self, subset_size: usize) -> Vec<CombinationResult> {
        #[cfg(feature = "parallel")]
        {
            self.score_parallel(subset_size)
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.score_sequential(subset_size)
        }
    }
}

/// Score one team: which attacking types none of `members` resists
pub fn score_team(members: &[Entity], table: &EffectivenessTable) -> Result<CombinationResult, SearchError> {
    let scorer = Scorer::new(members, table)?;
    let everyone: Vec<usize> = (0..members.len()).collect();
    Ok(scorer.score(&everyone))
}

/// Score every `subset_size`-member subset of `roster`, fewest uncovered types first.
///
/// Subsets with equal uncovered counts stay in enumeration order (lexicographic by
/// roster position). A `subset_size` larger than the roster gives an empty list.
pub fn score_all(
    roster: &[Entity],
    table: &EffectivenessTable,
    subset_size: usize,
) -> Result<Vec<CombinationResult>, SearchError> {
    if subset_size == 0 {
        return Err(SearchError::InvalidSubsetSize(subset_size));
    }
    check_catalog(roster, table)?;

    if subset_size > roster.len() {
        tracing::debug!(
            roster = roster.len(),
            subset_size,
            "Subset size exceeds roster, nothing to score"
        );
        return Ok(Vec::new());
    }

    tracing::debug!(
        roster = roster.len(),
        subset_size,
        subsets = binomial(roster.len(), subset_size),
        "Scoring subsets"
    );

    let scorer = Scorer::new(roster, table)?;
    let mut results = scorer.score_all(subset_size);
    results.sort_by_key(CombinationResult::uncovered_count);

    tracing::debug!(
        scored = results.len(),
        fully_covered = results.iter().filter(|r| r.is_fully_covered()).count(),
        "Scored subsets"
    );

    Ok(results)
}

/// The `top_n` heaviest subsets that leave no attacking type uncovered.
///
/// An empty result means no subset of that size covers every type.
pub fn search(
    roster: &[Entity],
    table: &EffectivenessTable,
    subset_size: usize,
    top_n: usize,
) -> Result<Vec<RankedTeam>, SearchError> {
    let mut covering: Vec<CombinationResult> = score_all(roster, table, subset_size)?
        .into_iter()
        .filter(CombinationResult::is_fully_covered)
        .collect();
    covering.sort_by(|a, b| b.total_weight.cmp(&a.total_weight));

    Ok(covering.into_iter().take(top_n).map(RankedTeam::from).collect())
}

/// The `top_n` best subsets whether or not they cover everything: fewest uncovered
/// types first, heaviest first among equals
pub fn closest(
    roster: &[Entity],
    table: &EffectivenessTable,
    subset_size: usize,
    top_n: usize,
) -> Result<Vec<CombinationResult>, SearchError> {
    let mut results = score_all(roster, table, subset_size)?;
    results.sort_by(|a, b| {
        a.uncovered_count()
            .cmp(&b.uncovered_count())
            .then_with(|| b.total_weight.cmp(&a.total_weight))
    });
    results.truncate(top_n);
    Ok(results)
}
