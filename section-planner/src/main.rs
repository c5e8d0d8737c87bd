/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::collections::HashSet;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};

use section_planner::config::SchedulingRequest;
use section_planner::schedule::Schedule;
use section_planner::scheduler::{ScheduleError, ScheduleSearch};
use section_planner::section::Section;

// ── CLI argument definition ───────────────────────────────────────────────────

/// Section planner: choose one section per course with no time conflicts.
///
/// Example:
///   section-planner -r fall.yaml -a 3 --seed 7
#[derive(Debug, Parser)]
#[command(
    name = "section-planner",
    about = "Section planner – conflict-free class schedule search",
    long_about = None,
)]
struct Cli {
    /// Path to the YAML scheduling request (courses, pinned sections, block-outs).
    #[arg(short = 'r', long = "request")]
    request: PathBuf,

    /// Schedule name; overrides the name in the request file.
    #[arg(short = 'n', long = "name")]
    name: Option<String>,

    /// Number of independent searches to run; distinct results are printed.
    #[arg(short = 'a', long = "alternatives", default_value_t = 1)]
    alternatives: usize,

    /// Seed for the first search (search i uses seed + i).  Unseeded runs
    /// differ from one invocation to the next.
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    info!(
        request      = %cli.request.display(),
        name         = ?cli.name,
        alternatives = cli.alternatives,
        seed         = ?cli.seed,
        "Configuration"
    );

    if let Err(e) = run(cli).await {
        error!("{:#}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let request = Arc::new(SchedulingRequest::load_from_file(&cli.request)?);
    let name = cli.name.unwrap_or_else(|| request.name.clone());
    let attempts = cli.alternatives.max(1);

    // ── Independent searches ──────────────────────────────────────────────────
    // Each task owns its engine and chosen list; the catalog is shared read-only.
    let handles: Vec<_> = (0..attempts)
        .map(|i| {
            let request = Arc::clone(&request);
            let seed = cli.seed.map(|s| s.wrapping_add(i as u64));
            tokio::task::spawn_blocking(move || run_search(&request, seed))
        })
        .collect();

    let mut seen = HashSet::new();
    let mut schedules = Vec::new();
    for (i, handle) in handles.into_iter().enumerate() {
        let selection = handle
            .await
            .context("search task panicked")?
            .with_context(|| format!("no schedule could be generated for '{}'", name))?;

        let schedule = Schedule::new(name.clone(), request.semester, selection);
        if seen.insert(schedule.summary()) {
            info!(attempt = i, sections = %schedule.summary(), "✓ schedule found");
            schedules.push(schedule);
        } else {
            info!(attempt = i, "duplicate of an earlier schedule — skipped");
        }
    }

    if schedules.len() < attempts {
        warn!(
            requested = attempts,
            distinct = schedules.len(),
            "fewer distinct schedules than searches"
        );
    }

    // ── Output ────────────────────────────────────────────────────────────────
    for schedule in &schedules {
        let yaml = serde_yaml::to_string(schedule).context("Failed to serialise schedule")?;
        println!("---\n{}", yaml.trim_end());
    }

    Ok(())
}

fn run_search(
    request: &SchedulingRequest,
    seed: Option<u64>,
) -> Result<Vec<Arc<Section>>, ScheduleError> {
    match seed {
        Some(seed) => ScheduleSearch::with_seed(seed).search(
            &request.courses,
            &request.chosen,
            &request.blockouts,
        ),
        None => ScheduleSearch::new().search(&request.courses, &request.chosen, &request.blockouts),
    }
}
