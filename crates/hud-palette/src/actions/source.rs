//! Action source actions
//!
//! Loading the command list happens on a worker thread; its results come
//! back through these.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceAction {
    /// (Re)load the command list from the action source
    Load,
    /// Command names arrived from the load with this generation
    Loaded { generation: u64, names: Vec<String> },
    /// The load with this generation failed
    LoadFailed { generation: u64, message: String },
    /// The command with this name was handed to the action source
    Executed(String),
}
