use clap::Parser;

const CMD_NAME: &str = "taskord";
const DEFAULT_CONFIG: &str = "tasks.tord";

/// Stores our command-line args format.
#[derive(Parser)]
#[command(name = CMD_NAME, version, about = None, long_about = None)]
pub struct Args {
    /// Task definition file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG)]
    #[arg(env = "TASKORD_CONFIG")]
    pub config: String,

    /// Name of target plan
    #[arg(short, long, value_name = "PLAN")]
    pub plan: Option<String>,

    /// Name of target task
    #[arg(short, long = "task", value_name = "TASK")]
    pub tasks: Vec<String>,

    /// Print tasks grouped into dependency levels
    #[arg(short, long)]
    pub levels: bool,

    /// Check every task in the file for undefined references and cycles
    #[arg(short = 'x', long)]
    pub check: bool,

    /// Print additional debugging info (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
