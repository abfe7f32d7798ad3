use anyhow::Context;
use codapkit::session::{load_session, replay, session_view};
use codapkit::{default_config_path, init_logging, Config, BUILD_DATE, VERSION};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let Some(session_path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("codapkit {} ({})", VERSION, BUILD_DATE);
        eprintln!("usage: codapkit <session.json>");
        std::process::exit(2);
    };

    let config_path = default_config_path()?;
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    let steps = load_session(&session_path)
        .with_context(|| format!("reading session {}", session_path.display()))?;
    tracing::info!("Replaying {} step(s) from {}", steps.len(), session_path.display());

    let mut view = session_view(&config, 800.0, 600.0);
    let report = replay(&mut view, &steps);

    for line in &report.lines {
        println!("{}", line);
    }
    println!(
        "undo depth: {}, redo depth: {}",
        report.undo_depth, report.redo_depth
    );

    Ok(())
}
