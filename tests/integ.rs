use anyhow::Result;
use std::path::Path;
use taskord::{App, Args, Settings, Target};
use tempfile::{tempdir, TempDir};

const TASKS: &str = "\
# a small build pipeline
task fetch
task configure < fetch
task lint
task build < fetch configure
task test < build
task package < {
    build   # the binary
    docs
}
task docs

plan release {
    reach test, package
}

plan check {
    reach lint
}
";

fn basic_args(config: &Path) -> Args {
    Args {
        config: config.to_str().unwrap().to_owned(),
        plan: None,
        tasks: Vec::with_capacity(0),
        levels: false,
        check: false,
        verbose: 0,
    }
}

fn write_tasks(text: &str) -> Result<(TempDir, std::path::PathBuf)> {
    let dir = tempdir()?;
    let path = dir.path().join("tasks.tord");
    std::fs::write(&path, text)?;
    Ok((dir, path))
}

fn run(args: Args) -> Result<String> {
    let settings: Settings = args.try_into()?;
    let mut out = Vec::new();
    App::new(settings).run_to(&mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_plan() -> Result<()> {
    let (_dir, path) = write_tasks(TASKS)?;
    let mut args = basic_args(&path);
    args.plan = Some("release".to_owned());

    let out = run(args)?;
    assert_eq!(
        vec!["fetch", "configure", "build", "test", "docs", "package"],
        out.lines().collect::<Vec<_>>()
    );
    Ok(())
}

#[test]
fn test_tasks_from_command_line() -> Result<()> {
    let (_dir, path) = write_tasks(TASKS)?;
    let mut args = basic_args(&path);
    args.tasks = vec!["lint".to_owned(), "configure".to_owned()];

    assert_eq!("lint\nfetch\nconfigure\n", run(args)?);
    Ok(())
}

#[test]
fn test_levels() -> Result<()> {
    let (_dir, path) = write_tasks(TASKS)?;
    let mut args = basic_args(&path);
    args.plan = Some("release".to_owned());
    args.levels = true;

    assert_eq!(
        "0: fetch docs\n1: configure\n2: build\n3: test package\n",
        run(args)?
    );
    Ok(())
}

#[test]
fn test_check_ok() -> Result<()> {
    let (_dir, path) = write_tasks(TASKS)?;
    let mut args = basic_args(&path);
    args.check = true;

    assert_eq!("7 tasks and 2 plans ok\n", run(args)?);
    Ok(())
}

#[test]
fn test_check_finds_cycle() -> Result<()> {
    let (_dir, path) = write_tasks("task a < b\ntask b < c\ntask c < a\n")?;
    let mut args = basic_args(&path);
    args.check = true;

    let e = run(args).unwrap_err();
    assert!(e.downcast_ref::<universe::AggregatedErrors>().is_some());
    Ok(())
}

#[test]
fn test_check_finds_undefined_references() -> Result<()> {
    let (_dir, path) = write_tasks("task a < b\ntask c < a d\nplan p {\n  reach c, e\n}\n")?;
    let mut args = basic_args(&path);
    args.check = true;

    let e = run(args).unwrap_err();
    let recap = e.downcast_ref::<universe::AggregatedErrors>().unwrap();
    assert_eq!(3, recap.1);
    Ok(())
}

#[test]
fn test_cycle_is_reported_with_context() -> Result<()> {
    let (_dir, path) = write_tasks("task a < b\ntask b < a\n")?;
    let mut args = basic_args(&path);
    args.tasks = vec!["a".to_owned()];

    let e = run(args).unwrap_err();
    assert_eq!("while ordering tasks 'a'", e.to_string());
    assert_eq!("Cyclic dependency: a -> b -> a", e.root_cause().to_string());
    Ok(())
}

#[test]
fn test_unknown_task() -> Result<()> {
    let (_dir, path) = write_tasks(TASKS)?;
    let mut args = basic_args(&path);
    args.tasks = vec!["deploy".to_owned()];

    let e = run(args).unwrap_err();
    assert_eq!("Unknown task: \"deploy\"", e.root_cause().to_string());
    Ok(())
}

#[test]
fn test_missing_plan() -> Result<()> {
    let (_dir, path) = write_tasks(TASKS)?;
    let mut args = basic_args(&path);
    args.plan = Some("nightly".to_owned());

    assert!(run(args).is_err());
    Ok(())
}

#[test]
fn test_parse_error() -> Result<()> {
    let (_dir, path) = write_tasks("task a\nnot a task\n")?;
    let mut args = basic_args(&path);
    args.tasks = vec!["a".to_owned()];

    let e = run(args).unwrap_err();
    assert!(e.to_string().starts_with("while parsing task file"));
    Ok(())
}

#[test]
fn test_settings() -> Result<()> {
    let (_dir, path) = write_tasks(TASKS)?;

    let e = Settings::try_from(basic_args(&path)).unwrap_err();
    assert!(e.to_string().starts_with("Nothing to do"));

    let mut args = basic_args(&path);
    args.plan = Some("release".to_owned());
    args.check = true;
    assert!(Settings::try_from(args).is_err(), "conflicting targets");

    let mut args = basic_args(&path.with_file_name("nope.tord"));
    args.check = true;
    assert!(Settings::try_from(args).is_err(), "missing task file");

    let mut args = basic_args(&path);
    args.tasks = vec!["a".to_owned(), "b".to_owned()];
    let settings = Settings::try_from(args)?;
    assert_eq!(Target::Tasks(vec!["a".to_owned(), "b".to_owned()]), settings.target);
    Ok(())
}
