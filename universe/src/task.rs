use crate::TaskId;

/// Representation of a task in the universe.
/// Names that are only ever referenced (as a prerequisite or plan goal)
/// get a placeholder entry with `exists` set to false.
#[derive(Debug, Default, Clone)]
pub struct Task {
    /// Prerequisites, in the order they were declared.
    pub deps: Vec<TaskId>,
    /// So we can tell if this task is real, or just a placeholder:
    pub exists: bool,
}

impl Task {
    pub fn new(deps: Vec<TaskId>) -> Self {
        Self { deps, exists: true }
    }
}
