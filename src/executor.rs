use anyhow::{Context, Result};
use colored::*;
use std::io::{self, Write};
use std::path::Path;

use crate::config::CleanupPlan;
use crate::fs::{enter_dir, remove_if_present, Outcome};

#[derive(Debug, Default)]
pub struct RunReport {
    pub entries: Vec<(String, Outcome)>,
}

impl RunReport {
    pub fn removed(&self) -> usize {
        self.count(|outcome| matches!(outcome, Outcome::Removed))
    }

    pub fn failed(&self) -> usize {
        self.count(|outcome| matches!(outcome, Outcome::Failed(_)))
    }

    pub fn absent(&self) -> usize {
        self.count(|outcome| matches!(outcome, Outcome::Absent))
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.entries.iter().filter(|(_, outcome)| pred(outcome)).count()
    }
}

/// Enters the plan's target directory and removes the listed files from it.
///
/// Only a failure to enter the directory (or to write the report) is an error.
/// Files that cannot be removed are reported to `out` and the run continues.
pub fn execute(plan: &CleanupPlan, out: &mut impl Write) -> Result<RunReport> {
    enter_dir(&plan.target_dir)?;
    tracing::info!("Entered {}", plan.target_dir.display());
    run(Path::new("."), &plan.files, out).context("Failed to write cleanup report")
}

pub fn run(dir: &Path, files: &[String], out: &mut impl Write) -> io::Result<RunReport> {
    let mut report = RunReport::default();
    for name in files {
        let outcome = remove_if_present(&dir.join(name));
        match &outcome {
            Outcome::Removed => {
                writeln!(out, "{} Removed: {}", "✓".green(), name)?;
            }
            Outcome::Failed(e) => {
                tracing::warn!("Could not remove {}: {}", name, e);
                writeln!(out, "{} Failed to remove {}: {}", "✗".red(), name, e)?;
            }
            Outcome::Absent => tracing::debug!("{} not present, skipping", name),
        }
        report.entries.push((name.clone(), outcome));
    }

    writeln!(out)?;
    writeln!(out, "{} Successfully removed {} unnecessary files", "✓".green(), report.removed())?;
    tracing::info!(
        removed = report.removed(),
        failed = report.failed(),
        absent = report.absent(),
        "Cleanup finished"
    );
    Ok(report)
}
