use universe::{TaskId, Universe};
use util::IdVec;

/// Tasks in execution order: every task comes after all of its prerequisites.
#[derive(Debug)]
pub struct ExecutionOrder<'a> {
    universe: &'a Universe,
    tasks: Vec<TaskId>,
}

impl<'a> ExecutionOrder<'a> {
    pub(crate) fn new(universe: &'a Universe, tasks: Vec<TaskId>) -> Self {
        Self { universe, tasks }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    #[inline]
    pub fn ids(&self) -> &[TaskId] {
        &self.tasks
    }

    /// Task names, in order.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        let universe = self.universe;
        self.tasks.iter().map(move |id| universe.task_name(*id))
    }

    pub fn names(&self) -> Vec<&'a str> {
        self.iter().collect()
    }

    /// Group tasks into dependency levels, for callers that want to run
    /// independent tasks at the same time.
    ///
    /// A task with no prerequisites is in level 0; any other task is one level
    /// above its highest prerequisite. Within a level, tasks keep their order.
    /// Running each level only after the previous one has finished
    /// respects every dependency.
    pub fn levels(&self) -> Vec<Vec<&'a str>> {
        let mut level_of: IdVec<TaskId, usize> = IdVec::fill(0, self.universe.num_ids());
        let mut levels: Vec<Vec<&'a str>> = Vec::with_capacity(8);

        for id in &self.tasks {
            // prerequisites are earlier in the order, so their levels are already final:
            let level = self
                .universe
                .get_task(*id)
                .deps
                .iter()
                .map(|dep| level_of.get(*dep) + 1)
                .max()
                .unwrap_or(0);
            *level_of.get_mut(*id) = level;

            if levels.len() <= level {
                levels.resize_with(level + 1, Vec::new);
            }
            levels[level].push(self.universe.task_name(*id));
        }

        levels
    }
}

#[cfg(test)]
mod test {
    use anyhow::Result;
    use universe::Universe;

    use crate::resolve;

    #[test]
    fn test_diamond_levels() -> Result<()> {
        let mut u = Universe::default();
        u.add_task::<&str>("A", &[])?;
        u.add_task("B", &["A"])?;
        u.add_task("C", &["A"])?;
        u.add_task("D", &["B", "C"])?;

        let order = resolve(&u, &["D"])?;
        assert_eq!(vec![vec!["A"], vec!["B", "C"], vec!["D"]], order.levels());
        Ok(())
    }

    #[test]
    fn test_levels_use_longest_path() -> Result<()> {
        let mut u = Universe::default();
        u.add_task::<&str>("fetch", &[])?;
        u.add_task::<&str>("lint", &[])?;
        u.add_task("configure", &["fetch"])?;
        u.add_task("build", &["configure"])?;
        // depends on a level 0 and a level 2 task, so lands in level 3:
        u.add_task("release", &["lint", "build"])?;

        let order = resolve(&u, &["release"])?;
        assert_eq!(vec!["lint", "fetch", "configure", "build", "release"], order.names());
        assert_eq!(
            vec![
                vec!["lint", "fetch"],
                vec!["configure"],
                vec!["build"],
                vec!["release"]
            ],
            order.levels()
        );
        Ok(())
    }

    #[test]
    fn test_empty_order_has_no_levels() -> Result<()> {
        let u = Universe::default();
        let order = resolve::<&str>(&u, &[])?;
        assert!(order.levels().is_empty());
        Ok(())
    }
}
