//! resort_run — drives a batch of resort deliveries through both simulators.
//!
//! Samples orders from an embedded manifest, runs each one on virtual time
//! (room orders on the progress timer, everything else on the waypoint
//! map), writes CSV traces plus one SVG map frame, and prints a summary.
//!
//! ```text
//! cargo run -p resort_run -- [config.json]
//! RUST_LOG=debug cargo run -p resort_run
//! ```

mod config;

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dc_output::{CsvTraceWriter, TraceObserver};
use dc_sim::{DeliverySession, Order, SessionObserver, SessionView, Simulator, load_orders_reader};
use dc_spatial::AmenityDirectory;

use config::DemoConfig;

// ── Order manifest ────────────────────────────────────────────────────────────

const MANIFEST_CSV: &str = "\
order_id,destination,delivery_type\n\
101,Room #215,room\n\
102,Beach - Umbrella B7,\n\
103,Pool Cabana 3,\n\
104,Lobby Bar,standard\n\
105,Room #1408,\n\
106,Spa Garden,\n\
107,Beach Tennis Courts,beach\n\
108,Pool Room,pool\n\
";

// ── Run one order ─────────────────────────────────────────────────────────────

/// Outcome of one delivery run.
struct RunSummary {
    order:       Order,
    arrived_ms:  u64,
    paused:      bool,
    final_label: String,
}

fn run_order<O: SessionObserver>(
    order:    &Order,
    session:  &mut DeliverySession,
    config:   &DemoConfig,
    rng:      &mut SmallRng,
    observer: &mut O,
) -> Result<RunSummary> {
    session.start()?;

    let paused = rng.gen_bool(config.pause_rate);
    if paused {
        let pause_at = rng.gen_range(500..3_000);
        session.advance(pause_at, observer)?;
        session.pause()?;
        // Frozen: no ticks while paused.
        session.advance(5_000, observer)?;
        session.resume()?;
    }

    let arrived = session.run_until_arrived(config.limit_ms, observer)?;
    if matches!(session.simulator(), Simulator::Timer(_)) {
        session.complete(observer)?;
    }

    let final_label = match session.view() {
        SessionView::Navigation(snap) => format!("{:.0}% ETA {}", snap.progress, snap.eta_label()),
        SessionView::Timer(snap) => format!("{}% {}", snap.progress, snap.phase.label()),
    };

    Ok(RunSummary {
        order: order.clone(),
        arrived_ms: arrived.0,
        paused,
        final_label,
    })
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => DemoConfig::load(Path::new(&path))?,
        None => DemoConfig::default(),
    };
    tracing::info!(seed = config.seed, orders = config.orders, "resort_run starting");

    // 1. Orders.
    let manifest = load_orders_reader(Cursor::new(MANIFEST_CSV))?;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let picked: Vec<Order> = manifest
        .choose_multiple(&mut rng, config.orders.min(manifest.len()))
        .cloned()
        .collect();
    println!("Loaded {} orders, running {}", manifest.len(), picked.len());

    // 2. Output.
    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("creating {}", config.output_dir.display()))?;
    let mut obs = TraceObserver::new(CsvTraceWriter::new(&config.output_dir)?);

    let amenities = AmenityDirectory::resort_default();
    let completions = Arc::new(AtomicUsize::new(0));
    let mut summaries = Vec::with_capacity(picked.len());
    let mut map_svg = None;

    // 3. Run.
    for order in &picked {
        if let Some(amenity) = amenities.lookup(&order.destination) {
            tracing::info!(order = %order.id, amenity = %amenity.name, "destination matched amenity");
        }

        let hook_count = Arc::clone(&completions);
        let mut session = order
            .session_builder()
            .nav_config(config.nav.clone())
            .timer_config(config.timer.clone())
            .on_complete(move |id| {
                hook_count.fetch_add(1, Ordering::SeqCst);
                tracing::info!(order = %id, "delivered");
            })
            .build()?;

        let summary = run_order(order, &mut session, &config, &mut rng, &mut obs)?;
        if map_svg.is_none() && matches!(session.simulator(), Simulator::Navigation { .. }) {
            map_svg = Some(session.frame().to_svg());
        }
        session.dispose();
        summaries.push(summary);
    }

    obs.finish()?;
    if let Some(svg) = map_svg {
        std::fs::write(config.output_dir.join("map.svg"), svg)?;
    }

    // 4. Summary.
    println!();
    println!("{:<7} {:<24} {:<9} {:>9} {:<7} {}", "Order", "Destination", "Type", "Arrived", "Paused", "Final");
    println!("{}", "-".repeat(80));
    for s in &summaries {
        println!(
            "{:<7} {:<24} {:<9} {:>7}ms {:<7} {}",
            s.order.id.0,
            s.order.destination,
            s.order.delivery_type.as_str(),
            s.arrived_ms,
            if s.paused { "yes" } else { "no" },
            s.final_label,
        );
    }
    println!();
    println!(
        "{} completions, {} trace rows written to {}",
        completions.load(Ordering::SeqCst),
        obs.rows_written(),
        config.output_dir.display()
    );

    Ok(())
}
