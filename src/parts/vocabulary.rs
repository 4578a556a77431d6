use std::collections::HashSet;

use log::{debug, warn};

use crate::parts::group::Group;
use crate::parts::stage::Stage;

/// One group of parts per traversal stage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    pub commands: Group,
    pub global_options: Group,
    pub operations: Group,
    pub resources: Group,
    pub arguments: Group,
    pub positional_arguments: Group,
}

impl Vocabulary {
    #[must_use]
    pub fn group(&self, stage: Stage) -> &Group {
        match stage {
            Stage::Command => &self.commands,
            Stage::GlobalOption => &self.global_options,
            Stage::Operation => &self.operations,
            Stage::Resource => &self.resources,
            Stage::Argument => &self.arguments,
            Stage::PositionalArgument => &self.positional_arguments,
        }
    }

    /// Groups indexed by `Stage::index`
    #[must_use]
    pub fn stages(&self) -> [&Group; Stage::COUNT] {
        Stage::ALL.map(|stage| self.group(stage))
    }

    /// Authoring mistakes worth a warning: no commands, or gates naming an
    /// alias that no stage defines. These never change what is generated.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.commands.is_empty() {
            warnings.push("Vocabulary has no commands, no aliases will be generated".to_string());
        }

        let known: HashSet<&str> = Stage::ALL
            .iter()
            .flat_map(|stage| self.group(*stage).aliases())
            .collect();

        for stage in Stage::ALL {
            for part in self.group(stage) {
                for gate in part.allow_when_one_of.iter().chain(&part.incompatible_with) {
                    if !known.contains(gate.as_str()) {
                        warnings.push(format!(
                            "Part '{}' in {stage} references unknown alias '{gate}'",
                            part.alias
                        ));
                    }
                }
            }
        }
        warnings
    }

    /// Log authoring mistakes. Never rejects anything: a gate pointing at an
    /// unknown alias simply never matches during generation.
    pub fn lint(&self) {
        // Reusing an alias within a stage is legitimate, eg. `all` for both
        // `--all-namespaces` and `--all`
        for stage in Stage::ALL {
            let mut seen = HashSet::new();
            for alias in self.group(stage).aliases() {
                if !seen.insert(alias) {
                    debug!("Alias '{alias}' is defined more than once in {stage}");
                }
            }
        }
        for warning in self.warnings() {
            warn!("{warning}");
        }
    }
}
