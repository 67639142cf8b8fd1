use crate::TaskId;

/// A named, stored set of requested tasks.
#[derive(Debug, Clone)]
pub struct Plan {
    /// Tasks we want to reach, in request order.
    pub goals: Vec<TaskId>,
}
