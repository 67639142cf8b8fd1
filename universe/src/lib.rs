mod id;
pub use id::TaskId;

mod task;
pub use task::Task;

mod plan;
pub use plan::Plan;

mod error;
pub use error::{AggregatedErrors, Errors};

mod universe;
pub use universe::Universe;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Task \"{0}\" is defined more than once")]
    DuplicateTask(String),
    #[error("Plan \"{0}\" is defined more than once")]
    DuplicatePlan(String),
    #[error("Plan named \"{0}\" not found")]
    PlanNotFound(String),
    #[error("Plan is empty: '{0}'")]
    EmptyPlan(String),
    #[error("Task \"{task}\" depends on \"{dep}\", which is not defined")]
    UndefinedReference { task: String, dep: String },
}
