use std::io::Write;

use anyhow::{Context, Result};

use resolve::ExecutionOrder;
use universe::{Errors, TaskId, Universe};

use crate::settings::{Settings, Target};
use crate::ui::Ui;

/// This struct actually runs the command-line app.
pub struct App {
    /// Interpreted command line settings
    settings: Settings,
    /// User interface
    ui: Ui,
}

impl App {
    /// Create a new `App`.
    pub fn new(settings: Settings) -> Self {
        let ui = Ui::new(&settings);
        Self { settings, ui }
    }

    /// Run the app, printing results to stdout.
    pub fn run(self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    /// Run the app, using settings to determine what to do,
    /// and write results to `out`.
    pub fn run_to<W: Write>(mut self, out: &mut W) -> Result<()> {
        self.ui
            .verbose_msg(&format!("Using task file {:?}", self.settings.config));

        let text = self.read_config()?;
        let universe = self.load_universe(&text)?;

        match &self.settings.target {
            Target::Check => self.check(&universe, out),
            Target::Plan(name) => {
                log::debug!("Using plan {name} specified on command line");
                let plan = universe.get_plan(name)?;
                let order = self
                    .order(&universe, &plan.goals)
                    .with_context(|| format!("while ordering plan \"{name}\""))?;
                self.print_order(&order, out)
            }
            Target::Tasks(tasks) => {
                log::debug!(
                    "No plan specified; ordering tasks '{}' specified on command line",
                    tasks.join(", "),
                );
                self.ui.verbose_progress("Ordering tasks");
                let order = resolve::resolve(&universe, tasks)
                    .with_context(|| format!("while ordering tasks '{}'", tasks.join(", ")))?;
                self.ui.done();
                self.print_order(&order, out)
            }
        }
    }

    fn order<'a>(&self, universe: &'a Universe, goals: &[TaskId]) -> Result<ExecutionOrder<'a>> {
        self.ui.verbose_progress("Ordering tasks");
        let order = resolve::resolve_ids(universe, goals)?;
        self.ui.done();
        Ok(order)
    }
}

// LOADING //////////////////
impl App {
    fn read_config(&mut self) -> Result<String> {
        self.ui
            .verbose_progress_debug("Reading task file", &self.settings.config);
        let text = std::fs::read_to_string(&self.settings.config)
            .with_context(|| format!("while reading task file {:?}", self.settings.config))?;
        self.ui.done();
        Ok(text)
    }

    fn load_universe(&mut self, text: &str) -> Result<Universe> {
        self.ui.verbose_progress("Parsing task file");
        self.ui.start_timer();
        let items = syntax::parse(text)
            .with_context(|| format!("while parsing task file {:?}", self.settings.config))?;
        self.ui.done();

        let mut universe = Universe::default();
        universe.load(items)?;
        self.ui.print_elapsed("Loading tasks");

        if self.ui.verbose {
            eprintln!(
                "Loaded {} tasks and {} plans.",
                universe.num_tasks(),
                universe.plan_names().len()
            );
        }
        Ok(universe)
    }
}

// OUTPUT ///////////////////
impl App {
    fn print_order<W: Write>(&self, order: &ExecutionOrder, out: &mut W) -> Result<()> {
        if self.settings.levels {
            for (i, level) in order.levels().iter().enumerate() {
                writeln!(out, "{}: {}", i, level.join(" "))?;
            }
        } else {
            for name in order.iter() {
                writeln!(out, "{}", name)?;
            }
        }
        Ok(())
    }

    /// Report every undefined reference, then look for cycles among all tasks.
    fn check<W: Write>(&self, universe: &Universe, out: &mut W) -> Result<()> {
        self.ui.verbose_progress("Checking task file");
        let mut errors = Errors::default();
        universe.check_references(&mut errors);

        // with undefined references, ordering would only stop at the first one again:
        if errors.is_empty() {
            let all: Vec<TaskId> = universe.task_ids().collect();
            if let Err(e) = resolve::resolve_ids(universe, &all) {
                errors.add_context(e.into(), "while ordering every defined task".to_owned());
            }
        }
        self.ui.done();

        errors.print_recap("checking task file")?;
        writeln!(
            out,
            "{} tasks and {} plans ok",
            universe.num_tasks(),
            universe.plan_names().len()
        )?;
        Ok(())
    }
}
