//! Depth-first enumeration of every valid combination
//!
//! Each command of the first stage roots a tree. Every later stage either adds
//! one accepted part or is skipped, so a leaf is reached after exactly
//! `Stage::COUNT` stages. Accepted parts are visited in declaration order and
//! the skip branch comes last.

use crate::combination::Combination;
use crate::parts::group::Group;
use crate::parts::part::Part;
use crate::parts::stage::Stage;
use crate::parts::vocabulary::Vocabulary;

/// Whether `candidate` can be appended to `current`
#[must_use]
pub fn is_valid_combination(current: &Combination<'_>, candidate: &Part) -> bool {
    current.accepts(candidate)
}

/// Lazily enumerate every valid combination of `vocabulary`.
#[must_use]
pub fn generate(vocabulary: &Vocabulary) -> Combinations<'_> {
    Combinations::new(vocabulary.stages())
}

/// A pending subtree: `combination` still has to pass through `stage` onwards
struct Branch<'a> {
    combination: Combination<'a>,
    stage: usize,
}

/// Iterator over finished combinations, in traversal order
pub struct Combinations<'a> {
    stages: [&'a Group; Stage::COUNT],
    pending: Vec<Branch<'a>>,
}

impl<'a> Combinations<'a> {
    #[must_use]
    pub fn new(stages: [&'a Group; Stage::COUNT]) -> Self {
        // Commands are never skipped and carry no gates worth checking
        let pending = stages[Stage::Command.index()]
            .iter()
            .rev()
            .map(|command| Branch {
                combination: Combination::new().with(command),
                stage: Stage::Command.index() + 1,
            })
            .collect();
        Combinations { stages, pending }
    }
}

impl<'a> Iterator for Combinations<'a> {
    type Item = Combination<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(Branch { combination, stage }) = self.pending.pop() {
            if stage == Stage::COUNT {
                return Some(combination);
            }

            let accepted: Vec<&'a Part> = self.stages[stage]
                .iter()
                .filter(|part| is_valid_combination(&combination, part))
                .collect();

            // Stack order: push the skip branch first so it is visited last
            let children: Vec<Branch<'a>> = accepted
                .into_iter()
                .rev()
                .map(|part| Branch {
                    combination: combination.with(part),
                    stage: stage + 1,
                })
                .collect();
            self.pending.push(Branch {
                combination,
                stage: stage + 1,
            });
            self.pending.extend(children);
        }
        None
    }
}
