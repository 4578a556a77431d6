use std::fmt;

/// The fixed traversal stages, in the order the generator visits them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Command,
    GlobalOption,
    Operation,
    Resource,
    Argument,
    PositionalArgument,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Command,
        Stage::GlobalOption,
        Stage::Operation,
        Stage::Resource,
        Stage::Argument,
        Stage::PositionalArgument,
    ];

    /// Number of stages, ie. the traversal depth
    pub const COUNT: usize = Self::ALL.len();

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Stage::Command => "commands",
            Stage::GlobalOption => "global_options",
            Stage::Operation => "operations",
            Stage::Resource => "resources",
            Stage::Argument => "arguments",
            Stage::PositionalArgument => "positional_arguments",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
