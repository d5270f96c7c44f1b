//! Closed-loop navigation simulator.
//!
//! Runs the omni rover navigation loop against the kinematic plant and
//! prints telemetry lines.
//!
//! Usage:
//!   cargo run -p omni_rover_sim --bin nav_sim -- [OPTIONS]
//!
//! Options:
//!   -m, --mode <MODE>        stop | square | triangle | line | home (default: square)
//!   -t, --ticks <N>          Number of 10 ms ticks to run (default: 2000)
//!   --seed <N>               RNG seed (default: 42)
//!   --noise <MM>             Position noise standard deviation in mm (default: 0)
//!   --print-every <N>        Print every N-th frame, 0 = summary only (default: 50)
//!   --probe-failures <N>     Sensor probes that fail at startup (default: 0)

use std::env;
use std::process;

use omni_rover_core::mode::Mode;
use omni_rover_core::parameters::ParameterStore;
use omni_rover_sim::scenario::loop_config_from_store;
use omni_rover_sim::{parse_mode, run, PlantConfig, PrintTelemetry, Scenario};

struct Args {
    mode: Mode,
    ticks: u64,
    seed: u64,
    noise_mm: f32,
    print_every: u64,
    probe_failures: u32,
}

fn parse_args() -> Args {
    let mut args = Args {
        mode: Mode::Square,
        ticks: 2_000,
        seed: 42,
        noise_mm: 0.0,
        print_every: 50,
        probe_failures: 0,
    };

    let raw: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < raw.len() {
        match raw[i].as_str() {
            "-m" | "--mode" => {
                i += 1;
                let name = arg_value(&raw, i, "mode");
                args.mode = parse_mode(name).unwrap_or_else(|e| {
                    eprintln!("Error: {e}");
                    process::exit(1);
                });
            }
            "-t" | "--ticks" => {
                i += 1;
                args.ticks = parse_arg(&raw, i, "ticks");
            }
            "--seed" => {
                i += 1;
                args.seed = parse_arg(&raw, i, "seed");
            }
            "--noise" => {
                i += 1;
                args.noise_mm = parse_arg(&raw, i, "noise");
            }
            "--print-every" => {
                i += 1;
                args.print_every = parse_arg(&raw, i, "print-every");
            }
            "--probe-failures" => {
                i += 1;
                args.probe_failures = parse_arg(&raw, i, "probe-failures");
            }
            "-h" | "--help" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {other}");
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    args
}

fn arg_value<'a>(raw: &'a [String], i: usize, name: &str) -> &'a str {
    raw.get(i).map(String::as_str).unwrap_or_else(|| {
        eprintln!("Error: --{name} requires a value");
        process::exit(1);
    })
}

fn parse_arg<T: std::str::FromStr>(raw: &[String], i: usize, name: &str) -> T {
    arg_value(raw, i, name).parse().unwrap_or_else(|_| {
        eprintln!("Error: invalid value for --{name}");
        process::exit(1);
    })
}

fn print_usage() {
    eprintln!(
        "Usage: nav_sim [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 -m, --mode <MODE>       stop | square | triangle | line | home (default: square)\n\
         \x20 -t, --ticks <N>         Number of 10 ms ticks to run (default: 2000)\n\
         \x20 --seed <N>              RNG seed (default: 42)\n\
         \x20 --noise <MM>            Position noise standard deviation in mm (default: 0)\n\
         \x20 --print-every <N>       Print every N-th frame, 0 = summary only (default: 50)\n\
         \x20 --probe-failures <N>    Sensor probes that fail at startup (default: 0)\n\
         \x20 -h, --help              Show this help"
    );
}

fn main() {
    let args = parse_args();

    let mut store = ParameterStore::new();
    let loop_config = loop_config_from_store(&mut store).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    let scenario = Scenario {
        mode: args.mode,
        ticks: args.ticks,
        plant: PlantConfig {
            position_noise_mm: args.noise_mm,
            probe_failures: args.probe_failures,
            seed: Some(args.seed),
            ..Default::default()
        },
        loop_config,
    };

    println!("=== omni_rover navigation simulator ===");
    println!(
        "Mode: {}, ticks: {}, seed: {}, noise: {} mm",
        args.mode.name(),
        args.ticks,
        args.seed,
        args.noise_mm
    );
    println!();

    let report = match run(&scenario, PrintTelemetry::new(args.print_every)) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    println!();
    println!("Probe attempts:    {}", report.probe_attempts);
    println!("Waypoints reached: {}", report.waypoints_reached);
    println!("Write failures:    {}", report.write_failures);
    println!(
        "Final pose:        ({:.1}, {:.1}, {:.1})",
        report.true_pose.x, report.true_pose.y, report.true_pose.heading
    );
    println!(
        "Sim time:          {:.2} s",
        report.sim_time_us as f64 / 1_000_000.0
    );
    println!("Last frame:        {}", report.final_frame.to_line());
}
