use anyhow::{Context, Result};

use intern::{FindStr, GetStr, InternStr, PackedInterner, TypedInterner};
use syntax::ast;
use util::{HashMap, Hasher, IdVec};

use crate::{Error, Errors, Plan, Task, TaskId};

type TaskNames = TypedInterner<TaskId, PackedInterner<u32, usize>>;

/// Contains every known task and plan, keyed by name.
/// Built once (from a parsed task file, or with [`Universe::add_task`])
/// and then only read by the resolver.
#[derive(Debug)]
pub struct Universe {
    /// Names of all tasks, including ones that were referenced but never defined
    names: TaskNames,
    /// One entry per interned name
    tasks: IdVec<TaskId, Task>,
    /// Ids of defined tasks, in definition order
    defined: Vec<TaskId>,
    plans: HashMap<String, Plan>,
}

impl Default for Universe {
    fn default() -> Self {
        Self {
            names: TypedInterner::new(PackedInterner::with_capacity_and_avg_len(64, 16)),
            tasks: IdVec::with_capacity(64),
            defined: Vec::with_capacity(64),
            plans: HashMap::with_capacity_and_hasher(8, Hasher::default()),
        }
    }
}

impl Universe {
    /// Load the given ast representations of items into this `Universe`.
    pub fn load(&mut self, items: Vec<ast::Item>) -> Result<()> {
        for item in items {
            match item {
                ast::Item::Task(task) => {
                    self.add_task(task.name, &task.deps)
                        .with_context(|| format!("while loading task \"{}\"", task.name))?;
                }
                ast::Item::Plan(plan) => {
                    self.add_plan(plan.name, &plan.goals)
                        .with_context(|| format!("while loading plan \"{}\"", plan.name))?;
                }
            }
        }
        log::debug!(
            "loaded {} tasks ({} names, {} bytes) and {} plans",
            self.defined.len(),
            self.names.len(),
            self.names.str_len(),
            self.plans.len(),
        );
        Ok(())
    }

    /// Define task `name` with prerequisites `deps` (in order).
    /// Prerequisites don't need to be defined yet.
    pub fn add_task<S: AsRef<str>>(&mut self, name: &str, deps: &[S]) -> Result<TaskId> {
        let id = self.intern_task(name)?;
        if self.tasks.get(id).exists {
            return Err(Error::DuplicateTask(name.to_owned()).into());
        }

        let deps = deps
            .iter()
            .map(|dep| self.intern_task(dep.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        log::trace!("adding task {name} with {} prerequisites", deps.len());
        self.tasks.insert(id, Task::new(deps));
        self.defined.push(id);
        Ok(id)
    }

    /// Define plan `name`, which requests `goals` (in order).
    pub fn add_plan<S: AsRef<str>>(&mut self, name: &str, goals: &[S]) -> Result<()> {
        if self.plans.contains_key(name) {
            return Err(Error::DuplicatePlan(name.to_owned()).into());
        }
        if goals.is_empty() {
            return Err(Error::EmptyPlan(name.to_owned()).into());
        }

        let goals = goals
            .iter()
            .map(|goal| self.intern_task(goal.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        self.plans.insert(name.to_owned(), Plan { goals });
        Ok(())
    }

    /// Get an id for `name`, adding a placeholder task if we haven't seen it before.
    fn intern_task(&mut self, name: &str) -> Result<TaskId> {
        let id = self.names.intern(name)?;
        if self.tasks.try_get(id).is_none() {
            self.tasks.insert(id, Task::default());
        }
        Ok(id)
    }
}

// LOOKUPS ////////////////////
impl Universe {
    /// Id of the task named `name`, if that name has been seen at all.
    /// Check [`Universe::is_defined`] to tell real tasks from placeholders.
    #[inline]
    pub fn task_id(&self, name: &str) -> Option<TaskId> {
        self.names.find(name)
    }

    #[inline]
    pub fn task_name(&self, id: TaskId) -> &str {
        self.names.get(id)
    }

    #[inline]
    pub fn get_task(&self, id: TaskId) -> &Task {
        self.tasks.get(id)
    }

    #[inline]
    pub fn is_defined(&self, id: TaskId) -> bool {
        self.tasks.try_get(id).is_some_and(|task| task.exists)
    }

    /// Number of defined tasks.
    #[inline]
    pub fn num_tasks(&self) -> usize {
        self.defined.len()
    }

    /// Upper bound on task ids, counting placeholders.
    /// Use it to size collections indexed by [`TaskId`].
    #[inline]
    pub fn num_ids(&self) -> usize {
        self.tasks.len()
    }

    /// Ids of defined tasks, in definition order.
    pub fn task_ids(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.defined.iter().copied()
    }

    /// Get a reference to the plan named `name`.
    pub fn get_plan(&self, name: &str) -> Result<&Plan> {
        self.plans
            .get(name)
            .ok_or_else(|| Error::PlanNotFound(name.to_owned()).into())
    }

    /// Names of all plans, sorted.
    pub fn plan_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.plans.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

// CHECKS //////////////////////
impl Universe {
    /// Add an error to `errors` for every prerequisite or plan goal that names
    /// an undefined task.
    pub fn check_references(&self, errors: &mut Errors) {
        // placeholders have no deps of their own, so only defined tasks matter:
        for (id, task) in self.tasks.iter_with_ids().filter(|(_, task)| task.exists) {
            for dep in &task.deps {
                if !self.is_defined(*dep) {
                    errors.add(
                        Error::UndefinedReference {
                            task: self.task_name(id).to_owned(),
                            dep: self.task_name(*dep).to_owned(),
                        }
                        .into(),
                    );
                }
            }
        }

        for name in self.plan_names() {
            for goal in &self.plans[name].goals {
                if !self.is_defined(*goal) {
                    errors.add_context(
                        Error::UndefinedReference {
                            task: name.to_owned(),
                            dep: self.task_name(*goal).to_owned(),
                        }
                        .into(),
                        format!("in plan \"{name}\""),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_add_task_and_lookup() -> Result<()> {
        let mut universe = Universe::default();
        let a = universe.add_task::<&str>("A", &[])?;
        let b = universe.add_task("B", &["A"])?;

        assert_eq!(Some(a), universe.task_id("A"));
        assert_eq!(Some(b), universe.task_id("B"));
        assert_eq!(None, universe.task_id("Z"));
        assert_eq!("B", universe.task_name(b));
        assert_eq!(vec![a], universe.get_task(b).deps);
        assert_eq!(2, universe.num_tasks());
        assert_eq!(vec![a, b], universe.task_ids().collect::<Vec<_>>());
        Ok(())
    }

    #[test]
    fn test_forward_reference_is_placeholder_until_defined() -> Result<()> {
        let mut universe = Universe::default();
        universe.add_task("build", &["fetch"])?;

        let fetch = universe.task_id("fetch").unwrap();
        assert!(!universe.is_defined(fetch));
        assert_eq!(1, universe.num_tasks());
        assert_eq!(2, universe.num_ids());

        let defined = universe.add_task::<&str>("fetch", &[])?;
        assert_eq!(fetch, defined);
        assert!(universe.is_defined(fetch));
        Ok(())
    }

    #[test]
    fn test_duplicate_task() -> Result<()> {
        let mut universe = Universe::default();
        universe.add_task::<&str>("A", &[])?;
        let e = universe.add_task("A", &["B"]).unwrap_err();
        assert!(matches!(e.downcast_ref::<Error>(), Some(Error::DuplicateTask(name)) if name == "A"));
        Ok(())
    }

    #[test]
    fn test_plans() -> Result<()> {
        let mut universe = Universe::default();
        universe.add_task::<&str>("A", &[])?;
        universe.add_plan("p", &["A", "B"])?;

        let plan = universe.get_plan("p")?;
        assert_eq!(2, plan.goals.len());
        assert_eq!("B", universe.task_name(plan.goals[1]));

        assert!(universe.add_plan("p", &["A"]).is_err());
        assert!(universe.add_plan::<&str>("empty", &[]).is_err());
        assert!(universe.get_plan("missing").is_err());
        assert_eq!(vec!["p"], universe.plan_names());
        Ok(())
    }

    #[test]
    fn test_load_from_syntax() -> Result<()> {
        let items = syntax::parse("task a\ntask b < a c\nplan all {\n  reach b\n}\n")?;
        let mut universe = Universe::default();
        universe.load(items)?;
        assert_eq!(2, universe.num_tasks());
        assert_eq!(3, universe.num_ids());
        assert_eq!("abc".len(), universe.names.str_len());
        assert!(universe.get_plan("all").is_ok());
        Ok(())
    }

    #[test]
    fn test_load_reports_duplicate_with_context() -> Result<()> {
        let items = syntax::parse("task a\ntask a < b\n")?;
        let e = Universe::default().load(items).unwrap_err();
        assert_eq!("while loading task \"a\"", e.to_string());
        assert!(e.root_cause().to_string().contains("defined more than once"));
        Ok(())
    }

    #[test]
    fn test_check_references() -> Result<()> {
        let mut universe = Universe::default();
        universe.add_task("a", &["missing1"])?;
        universe.add_task("b", &["a", "missing2"])?;
        universe.add_plan("p", &["b", "missing3"])?;

        let mut errors = Errors::default();
        universe.check_references(&mut errors);
        assert_eq!(3, errors.len());
        assert!(errors.print_recap("checking references").is_err());

        // "x" starts out as a placeholder, then gets defined with an undefined dep of its own:
        let mut late = Universe::default();
        late.add_task("a", &["x"])?;
        late.add_task("x", &["y"])?;
        let mut errors = Errors::default();
        late.check_references(&mut errors);
        assert_eq!(1, errors.len());

        let mut clean = Universe::default();
        clean.add_task::<&str>("a", &[])?;
        let mut errors = Errors::default();
        clean.check_references(&mut errors);
        assert!(errors.is_empty());
        Ok(())
    }
}
