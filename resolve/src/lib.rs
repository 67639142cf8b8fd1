//!
//! The functions in this crate walk the tasks in a [`Universe`], returning an ordered
//! list of tasks in which every task comes after all of its prerequisites.
//!
//! The order is built with a depth-first, post-order visit of each requested task:
//! 1. Visit requested tasks in request order, skipping ones already emitted.
//! 2. Before emitting a task, visit its prerequisites in declared order.
//! 3. A prerequisite that is still on the active path means the graph has a cycle.
//!
//! The result only contains the requested tasks and their transitive prerequisites,
//! each exactly once, and the same input always gives the same order.

use universe::{TaskId, Universe};

/// depth-first visit with an explicit stack
mod resolver;
use resolver::Resolver;

/// struct returned by this crate
mod order;
pub use order::ExecutionOrder;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Unknown task: \"{0}\"")]
    UnknownTask(String),
    #[error("Cyclic dependency: {}", .0.join(" -> "))]
    CyclicDependency(Vec<String>),
}

/// Order the tasks named in `requested` and all of their prerequisites.
pub fn resolve<'a, S: AsRef<str>>(
    universe: &'a Universe,
    requested: &[S],
) -> Result<ExecutionOrder<'a>, Error> {
    let ids = requested
        .iter()
        .map(|name| {
            let name = name.as_ref();
            universe
                .task_id(name)
                .ok_or_else(|| Error::UnknownTask(name.to_owned()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    resolve_ids(universe, &ids)
}

/// Same as [`resolve`], for callers that already hold task ids (e.g. from a plan).
pub fn resolve_ids<'a>(
    universe: &'a Universe,
    requested: &[TaskId],
) -> Result<ExecutionOrder<'a>, Error> {
    let mut resolver = Resolver::new(universe);
    for id in requested {
        resolver.visit(*id)?;
    }
    let order = resolver.into_order();
    log::debug!(
        "resolved {} requested tasks into {} tasks",
        requested.len(),
        order.len()
    );
    Ok(order)
}
