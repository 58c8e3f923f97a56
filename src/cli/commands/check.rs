use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::i18n::texts;
use crate::cli::ui::{error, highlight, info, success, to_json, warning};
use crate::cli::CatalogSource;
use crate::error::AppError;
use crate::parity::{audit, Baseline, BaselineDiff, ParityReport};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Baseline of accepted divergences (JSON). Bundled tables use the
    /// recorded baseline when omitted.
    #[arg(long, conflicts_with = "no_baseline")]
    pub baseline: Option<PathBuf>,

    /// Treat every divergence as a regression
    #[arg(long)]
    pub no_baseline: bool,

    /// Also fail when baseline entries are no longer found
    #[arg(long)]
    pub strict: bool,

    /// Write the current divergences as the new baseline
    #[arg(long, value_name = "FILE")]
    pub write_baseline: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckOutput<'a> {
    passed: bool,
    report: &'a ParityReport,
    diff: &'a BaselineDiff,
}

pub fn execute(args: CheckArgs, source: &CatalogSource) -> Result<(), AppError> {
    let catalog = source.load()?;
    let report = audit(&catalog)?;

    if let Some(path) = &args.write_baseline {
        Baseline::from_report(&report).save(path)?;
        println!("{}", success(&texts::baseline_written(&path.display().to_string())));
        return Ok(());
    }

    let baseline = select_baseline(&args, source)?;
    let diff = report.against(&baseline);
    let passed = diff.passed(args.strict);

    if args.json {
        let output = CheckOutput {
            passed,
            report: &report,
            diff: &diff,
        };
        let json = to_json(&output).map_err(|e| AppError::JsonSerialize { source: e })?;
        println!("{}", json);
    } else {
        print_report(&report, &baseline, &diff, passed);
    }

    if passed {
        Ok(())
    } else {
        Err(AppError::localized(
            "check.failed",
            "语言表一致性检查未通过",
            "Locale parity check failed",
        ))
    }
}

fn select_baseline(args: &CheckArgs, source: &CatalogSource) -> Result<Baseline, AppError> {
    if args.no_baseline {
        return Ok(Baseline::default());
    }
    if let Some(path) = &args.baseline {
        return Baseline::load(path);
    }
    if source.dir.is_none() && crate::settings::get_settings().locale_dir.is_none() {
        return Ok(Baseline::bundled());
    }
    Ok(Baseline::default())
}

fn print_report(report: &ParityReport, baseline: &Baseline, diff: &BaselineDiff, passed: bool) {
    println!("{}", highlight(texts::check_title()));
    println!("{}", "=".repeat(50));
    println!("{}", texts::check_reference(&report.default_locale));
    println!();

    if report.is_symmetric() {
        println!("{}", success(texts::check_symmetric()));
    }

    let known = report.divergences.len() - diff.regressions.len();
    if known > 0 {
        println!("{}", info(&texts::check_known(known)));
    }

    if !diff.regressions.is_empty() {
        println!("{}", error(&texts::check_regressions(diff.regressions.len())));
        for item in &diff.regressions {
            println!("  - {}", item.describe());
        }
    }

    if !diff.stale.is_empty() {
        println!("{}", warning(&texts::check_stale(diff.stale.len())));
        for item in &diff.stale {
            println!("  - {}", item.describe());
        }
    }

    log::debug!(
        "baseline has {} entries, {} regression(s), {} stale",
        baseline.entries.len(),
        diff.regressions.len(),
        diff.stale.len()
    );

    if passed {
        println!();
        println!("{}", success(texts::check_passed()));
    }
}
