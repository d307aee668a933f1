//! # avlset-demo
//!
//! A small driver that exercises [`avlset::Engine`] as an external caller
//! would: open a file, insert a batch of values, run the ordered-query
//! surface, and cross-check the result against an in-memory
//! [`std::collections::BTreeSet`] reference.
//!
//! This binary, the config it loads, and the reference comparison it runs
//! are all explicitly out of scope for the engine itself (see spec.md §1);
//! they exist only to demonstrate the public contract.

use avlset::{Engine, EngineError, FixedIntCodec};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

mod config;

use config::DemoConfig;

const CONFIG_PATH: &str = "avlset-demo.toml";
const SAMPLE_SIZE: usize = 2_000;

fn main() {
    init_logging();

    let cfg = load_config();
    std::fs::create_dir_all(&cfg.data_dir).unwrap_or_else(|e| {
        tracing::warn!("could not create data dir {:?}: {e}", cfg.data_dir);
    });

    let path = cfg.data_dir.join("avlset-demo.bin");
    tracing::info!(?path, "opening ordered set");

    let engine = match Engine::open(&path, FixedIntCodec::<i64>::new()) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("failed to open {path:?}: {e}");
            std::process::exit(1);
        }
    };

    let mut reference: BTreeSet<i64> = BTreeSet::new();
    let mut rng = StdRng::seed_from_u64(0x5EED);

    for _ in 0..SAMPLE_SIZE {
        let value: i32 = rng.gen();
        let value = value as i64;
        match engine.add(value) {
            Ok(inserted) => {
                reference.insert(value);
                if inserted {
                    tracing::trace!(value, "inserted");
                }
            }
            Err(e) => fatal(e),
        }
    }

    tracing::info!(
        size = engine.size().unwrap_or_default(),
        reference_size = reference.len(),
        "population complete"
    );

    report_ordered_queries(&engine, &reference);
    report_iteration_matches_reference(&engine, &reference);
    report_unsupported_operations(&engine);
}

fn report_ordered_queries(engine: &Engine<i64, FixedIntCodec<i64>>, reference: &BTreeSet<i64>) {
    let Some(&min) = reference.iter().next() else {
        tracing::warn!("reference set is empty, skipping ordered-query report");
        return;
    };
    let max = *reference.iter().next_back().unwrap();

    assert_eq!(engine.first().unwrap(), min);
    assert_eq!(engine.last().unwrap(), max);

    let probe = min.wrapping_add((max - min) / 2);
    let higher = engine.higher(&probe).unwrap();
    let expected_higher = reference
        .range((std::ops::Bound::Excluded(probe), std::ops::Bound::Unbounded))
        .next()
        .copied();
    assert_eq!(higher, expected_higher);

    println!("first={min} last={max} higher({probe})={higher:?}");
}

fn report_iteration_matches_reference(
    engine: &Engine<i64, FixedIntCodec<i64>>,
    reference: &BTreeSet<i64>,
) {
    let mut mismatches = 0u32;
    for (from_disk, from_reference) in engine.iter().zip(reference.iter()) {
        match from_disk {
            Ok(value) if value == *from_reference => {}
            Ok(value) => {
                mismatches += 1;
                tracing::warn!(value, expected = from_reference, "iterator order mismatch");
            }
            Err(e) => fatal(e),
        }
    }
    println!("in-order iteration matched the reference set: {}", mismatches == 0);
}

fn report_unsupported_operations(engine: &Engine<i64, FixedIntCodec<i64>>) {
    match engine.remove(&0) {
        Err(EngineError::Unsupported { op }) => {
            println!("remove() is unsupported, as expected ({op})");
        }
        other => tracing::error!(?other, "remove() should have been unsupported"),
    }
}

fn load_config() -> DemoConfig {
    match DemoConfig::load_from_file(CONFIG_PATH) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("{e}; falling back to ./avlset-demo-data");
            DemoConfig {
                data_dir: "avlset-demo-data".into(),
            }
        }
    }
}

fn fatal(err: EngineError) -> ! {
    eprintln!("engine operation failed: {err}");
    std::process::exit(1);
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .init();
}
