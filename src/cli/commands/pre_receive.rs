//! Check the commits of a push (pre-receive hook)

use std::io::{self, BufRead};
use std::process::ExitCode;

use ticketgate::adapters::git::GitRepository;
use ticketgate::config::Config;
use ticketgate::core::models::RefUpdate;
use ticketgate::core::ports::VersionControl;
use ticketgate::core::services::gate_ref_updates;
use ticketgate::output::{GateReport, OutputMode, RefReport};

/// Read `<old> <new> <ref>` lines from stdin and gate every branch update
pub fn pre_receive(mode: OutputMode) -> anyhow::Result<ExitCode> {
    let mut updates = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        updates.push(RefUpdate::parse_line(&line)?);
    }

    let repo = GitRepository::open_from_env()?;
    let policy = Config::load_from(&repo.config_dir()?)?.policy();

    let refs = gate_ref_updates(&repo, &updates, policy)?
        .into_iter()
        .map(|(ref_name, outcome)| RefReport { ref_name, outcome })
        .collect();
    let report = GateReport::new(refs);
    report.render(mode);

    Ok(if report.accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
