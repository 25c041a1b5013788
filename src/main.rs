use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use cartridge_sim::cartridge::{presets, Cartridge};
use cartridge_sim::sim::event::{detect_events, standard_detectors, EventKind};
use cartridge_sim::sim::{simulate_with, ForwardEuler, Rk4, Stepper};
use cartridge_sim::units::{GRAINS, INCH, KSI, MM};
use cartridge_sim::SimConfig;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Integrator {
    Euler,
    Rk4,
}

/// Interior ballistics of a single shot.
#[derive(Debug, Parser)]
#[command(name = "cartridge-sim", version)]
struct Args {
    /// Built-in round (see --list)
    #[arg(short, long, default_value = "9mm-luger")]
    preset: String,

    /// Custom round as JSON (SI units); overrides --preset
    #[arg(short, long)]
    cartridge: Option<PathBuf>,

    /// Barrel length, inches
    #[arg(short, long, default_value_t = 18.0)]
    barrel_in: f64,

    /// Model case wall friction once the case yields
    #[arg(short, long)]
    friction: bool,

    #[arg(long, value_enum, default_value_t = Integrator::Euler)]
    integrator: Integrator,

    /// List built-in rounds and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if args.list {
        for name in presets::names() {
            let c = presets::preset(name)?;
            println!("  {:<16} {}", name, c.name);
        }
        return Ok(());
    }

    let cartridge: Cartridge = match &args.cartridge {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => presets::preset(&args.preset)?,
    };
    let config = SimConfig::with_barrel(args.barrel_in * INCH, args.friction);
    let stepper: &dyn Stepper = match args.integrator {
        Integrator::Euler => &ForwardEuler,
        Integrator::Rk4 => &Rk4,
    };

    // -----------------------------------------------------------------------
    // Run simulation
    // -----------------------------------------------------------------------
    let trajectory = simulate_with(&cartridge, &config, stepper)?;
    let mut detectors = standard_detectors(&cartridge, config.barrel_length);
    let events = detect_events(&trajectory, &mut detectors);

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  INTERIOR BALLISTICS — {}", cartridge.name);
    println!("====================================================================");
    println!();
    println!("  Round");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Bullet:        {:>8.1} gr    Chamber dia:  {:>8.3} mm",
        cartridge.bullet_mass / GRAINS,
        cartridge.chamber_diameter / MM
    );
    println!(
        "  Case volume:   {:>8.3} cm^3  Wall:         {:>8.3} mm",
        cartridge.case_volume() * 1e6,
        cartridge.case_wall_thickness() / MM
    );
    println!(
        "  Yield:         {:>8.1} ksi   Burst:        {:>8.1} ksi",
        cartridge.yield_pressure() / KSI,
        cartridge.burst_pressure() / KSI
    );
    println!(
        "  Peak (burn):   {:>8.1} ksi   Burn time:    {:>8.0} us",
        cartridge.peak_pressure / KSI,
        cartridge.burn_duration * 1e6
    );
    println!(
        "  Barrel:        {:>8.1} in    Friction:     {:>8}",
        args.barrel_in,
        if config.model_friction { "on" } else { "off" }
    );
    println!();

    println!("  Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    for e in &events {
        let label = match &e.kind {
            EventKind::CaseYield => "YIELD".to_string(),
            EventKind::CaseBurst => "BURST".to_string(),
            EventKind::PeakPressure => "PEAK".to_string(),
            EventKind::MuzzleExit => "MUZZLE".to_string(),
            EventKind::Custom(s) => s.clone(),
        };
        println!(
            "  {:<8}  t={:>7.1}us  x={:>7.1}mm  v={:>7.1}m/s  p={:>6.1}ksi",
            label,
            e.time * 1e6,
            e.state.pos / MM,
            e.state.vel,
            e.state.pressure / KSI
        );
    }
    println!();

    println!("  Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    if let Some(p) = trajectory.peak_pressure() {
        println!("  Max pressure:  {:>8.1} ksi at {:.1} us", p.pressure / KSI, p.time * 1e6);
    }
    if let Some(f) = trajectory.peak_force() {
        println!("  Max bolt load: {:>8.0} N   at {:.1} us", f.force, f.time * 1e6);
    }
    match trajectory.muzzle_exit(config.barrel_length) {
        Some(m) => println!("  Muzzle vel:    {:>8.1} m/s", m.vel),
        None => println!("  Muzzle vel:    bullet still in barrel at {:.1} ms", config.max_time * 1e3),
    }
    println!("  Bolt impulse:  {:>8.3} N·s", trajectory.impulse());
    println!();
    println!(
        "  Simulation: {} steps, dt={} s, {}",
        trajectory.len(),
        config.dt,
        stepper.name()
    );
    println!("====================================================================");
    println!();

    Ok(())
}
