//! plan-runner: headless staffing calculation for a planning scenario.
//!
//! Usage:
//!   plan-runner --scenario scenario.json
//!   plan-runner --demo --seed 12345 --weeks 8 --json
//!   plan-runner --scenario scenario.json --legacy

use anyhow::Result;
use staffing_core::{
    config::StaffingModel,
    report::PlanReport,
    scenario::Scenario,
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let weeks = parse_arg(&args, "--weeks", 4u32);
    let json = args.iter().any(|a| a == "--json");
    let legacy = args.iter().any(|a| a == "--legacy");
    let scenario_path = args
        .windows(2)
        .find(|w| w[0] == "--scenario")
        .map(|w| w[1].as_str());

    let mut scenario = match scenario_path {
        Some(path) => Scenario::load(path)?,
        None => {
            if !args.iter().any(|a| a == "--demo") {
                log::info!("No --scenario given; using synthetic demo data");
            }
            Scenario::synthetic(seed, weeks)
        }
    };
    if legacy {
        scenario.config.model = StaffingModel::Linear;
    }

    if !json {
        println!("Staffing plan - plan-runner");
        println!("  source:   {}", scenario_path.unwrap_or("synthetic"));
        println!("  horizon:  {} to {} ({} weeks)",
            scenario.horizon.from, scenario.horizon.to, scenario.horizon.weeks());
        println!("  model:    {:?}", scenario.config.model);
        println!();
    }

    let report = match PlanReport::build(&scenario) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(2);
        }
    };

    if json {
        println!("{}", report.to_json()?);
    } else {
        print_intervals(&report);
        print_summary(&report);
    }

    Ok(())
}

fn print_intervals(report: &PlanReport) {
    println!(
        "{:>6} {:>8} {:>8} {:>8} {:>7} {:>7} {:>7} {:>7} {:>7} {:>6}",
        "time", "actual", "req", "var", "trend", "aht", "sl%", "occ%", "influx", "ratio"
    );
    for row in &report.display {
        let flag = if row.target_met { "" } else { " !" };
        println!(
            "{:>6} {:>8.1} {:>8.1} {:>8.1} {:>7.1} {:>7.1} {:>7.1} {:>7.1} {:>7} {:>6.1}{flag}",
            row.time,
            row.actual,
            row.requirement,
            row.variance,
            row.call_trend,
            row.aht_minutes,
            row.service_level,
            row.occupancy,
            row.influx,
            row.agent_distribution_ratio,
        );
    }
    println!();
}

fn print_summary(report: &PlanReport) {
    let s = &report.summary;
    println!("=== PLAN SUMMARY ===");
    println!("  intervals:        {}", s.intervals);
    println!("  raw volume:       {}", s.total_raw_volume);
    println!("  effective volume: {:.1}", s.total_effective_volume);
    println!("  service level:    {:.1}% (target {:.1}%)", s.service_level, report.config.sla_target);
    println!("  occupancy:        {:.1}%", s.occupancy);
    println!("  avg staffing:     {:.1}", s.average_staffing);
    println!("  below target:     {}", s.intervals_below_target);
    println!("  unreachable:      {}", s.unreachable_intervals);

    println!();
    println!("=== BUSIEST DAYS ===");
    let mut days: Vec<_> = report.daily.iter().filter(|d| d.total_volume > 0).collect();
    if days.is_empty() {
        println!("  (No volume in horizon)");
        return;
    }
    days.sort_by(|a, b| b.total_volume.cmp(&a.total_volume).then(a.date.cmp(&b.date)));
    for d in days.iter().take(5) {
        let peak = d
            .peak_interval
            .map(|i| i.start_label())
            .unwrap_or_else(|| "-".into());
        println!(
            "  {} | Calls: {} | Peak: {} at {}",
            d.date.format("%d/%m/%Y"),
            d.total_volume,
            d.peak_volume,
            peak
        );
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
