use colored::Colorize;

/// Returned after a list of errors has been printed to the user,
/// so the caller only needs to exit with a failure.
#[derive(Debug, thiserror::Error)]
#[error("{0} failed due to {1} errors")]
pub struct AggregatedErrors(pub String, pub usize);

/// Collects errors from a pass that shouldn't stop at the first problem,
/// e.g. checking every reference in a task file.
pub struct Errors {
    errors: Vec<anyhow::Error>,
}

impl Default for Errors {
    fn default() -> Self {
        // a clean task file has none, so don't allocate up front:
        Self {
            errors: Vec::with_capacity(0),
        }
    }
}

impl Errors {
    pub fn add_context(&mut self, e: anyhow::Error, msg: String) {
        log::trace!("{msg}: {e:?}");
        self.errors.push(e.context(msg));
    }

    pub fn add(&mut self, e: anyhow::Error) {
        log::trace!("error: {e:?}");
        self.errors.push(e);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Print every collected error (with its causes) to stderr.
    /// Fails with [`AggregatedErrors`] if there was at least one.
    pub fn print_recap(&self, label: &str) -> Result<(), AggregatedErrors> {
        if self.errors.is_empty() {
            return Ok(());
        }
        eprintln!("\n{} {}:\n", "Errors while".red(), label.red());
        for (i, e) in self.errors.iter().enumerate() {
            eprint!("{} {}: {e}", "ERROR".red(), i + 1);
            for cause in e.chain().skip(1) {
                eprint!("\n  caused by: {cause}");
            }
            eprintln!();
        }
        Err(AggregatedErrors(label.to_owned(), self.errors.len()))
    }
}
