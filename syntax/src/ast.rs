/// type alias just to make type signatures look more consistent.
pub type Ident<'a> = &'a str;

/// A task definition: its name and its prerequisites, in declared order.
#[derive(Debug, PartialEq, Eq)]
pub struct TaskBlock<'a> {
    pub name: Ident<'a>,
    pub deps: Vec<Ident<'a>>,
}

/// A named list of goal tasks. Goals from every `reach` line are
/// concatenated in the order they appear.
#[derive(Debug, PartialEq, Eq)]
pub struct Plan<'a> {
    pub name: Ident<'a>,
    pub goals: Vec<Ident<'a>>,
}

/// One high-level item in a task file.
#[derive(Debug, PartialEq, Eq)]
pub enum Item<'a> {
    Task(TaskBlock<'a>),
    Plan(Plan<'a>),
}
