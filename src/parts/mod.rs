pub mod group;
pub mod part;
pub mod stage;
pub mod vocabulary;
