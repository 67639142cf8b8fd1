use universe::{TaskId, Universe};
use util::IdVec;

use crate::{Error, ExecutionOrder};

const STACK_CAPACITY: usize = 32;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Mark {
    #[default]
    Unvisited,
    /// on the active path
    Visiting,
    /// already in the output
    Resolved,
}

/// A task on the active path, plus the index of the next prerequisite to look at.
struct Frame {
    task: TaskId,
    next_dep: usize,
}

/// Post-order depth-first traversal. We keep our own stack of frames
/// instead of recursing, so long prerequisite chains can't overflow the call stack.
pub struct Resolver<'a> {
    universe: &'a Universe,
    marks: IdVec<TaskId, Mark>,
    /// active path, root first
    stack: Vec<Frame>,
    /// output, built up w/ calls to visit()
    order: Vec<TaskId>,
}

impl<'a> Resolver<'a> {
    pub fn new(universe: &'a Universe) -> Self {
        Self {
            universe,
            marks: IdVec::fill(Mark::Unvisited, universe.num_ids()),
            stack: Vec::with_capacity(STACK_CAPACITY),
            order: Vec::with_capacity(universe.num_tasks()),
        }
    }

    /// Consume this struct and return the completed order.
    pub fn into_order(self) -> ExecutionOrder<'a> {
        ExecutionOrder::new(self.universe, self.order)
    }

    /// Add `root` and every prerequisite not already in the output.
    pub fn visit(&mut self, root: TaskId) -> Result<(), Error> {
        // the stack is always empty between visits, so root can't be Visiting:
        if self.marks.try_get(root) == Some(&Mark::Resolved) {
            return Ok(());
        }
        self.push(root)?;

        let universe = self.universe;
        while let Some(frame) = self.stack.last_mut() {
            let task = universe.get_task(frame.task);
            match task.deps.get(frame.next_dep) {
                Some(&dep) => {
                    frame.next_dep += 1;
                    match *self.marks.get(dep) {
                        Mark::Resolved => (),
                        Mark::Visiting => return Err(self.cycle(dep)),
                        Mark::Unvisited => self.push(dep)?,
                    }
                }
                None => {
                    let id = frame.task;
                    self.stack.pop();
                    *self.marks.get_mut(id) = Mark::Resolved;
                    log::trace!("resolved {}", universe.task_name(id));
                    self.order.push(id);
                }
            }
        }
        Ok(())
    }

    fn push(&mut self, id: TaskId) -> Result<(), Error> {
        if usize::from(id) >= self.marks.len() {
            return Err(Error::UnknownTask(format!("{id:?}")));
        }
        if !self.universe.is_defined(id) {
            return Err(Error::UnknownTask(self.universe.task_name(id).to_owned()));
        }
        *self.marks.get_mut(id) = Mark::Visiting;
        self.stack.push(Frame {
            task: id,
            next_dep: 0,
        });
        Ok(())
    }

    /// `repeated` is Visiting, so it's somewhere on the stack;
    /// the cycle runs from there to the top of the stack and back to `repeated`.
    fn cycle(&self, repeated: TaskId) -> Error {
        let start = self
            .stack
            .iter()
            .position(|frame| frame.task == repeated)
            .unwrap_or_default();
        let names = self.stack[start..]
            .iter()
            .map(|frame| frame.task)
            .chain(std::iter::once(repeated))
            .map(|id| self.universe.task_name(id).to_owned())
            .collect();
        Error::CyclicDependency(names)
    }
}
