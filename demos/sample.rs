//! Runs the finder on the bundled page sample and prints the result.
//!
//! `RUST_LOG=quadfind=trace cargo run --example sample` shows every
//! improvement of the best candidate.

use std::time::Instant;

use quadfind::samples::page_segments;
use quadfind::{FindQuadrilateral, Result};

fn main() -> Result<()> {
    // Default: WARN for everything, DEBUG for quadfind.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("quadfind=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let segments = page_segments();
    for segment in &segments {
        println!("segment  {segment}");
    }

    let started = Instant::now();
    let found = FindQuadrilateral::new(&segments).execute()?;
    let elapsed = started.elapsed();

    match found {
        Some(quad) => {
            for (edge, hit) in quad.edges().iter().zip(quad.intersections()) {
                println!("edge     {edge}");
                println!("corner   {hit}");
            }
            println!("error    {:.6}", quad.error());
        }
        None => println!("no quadrilateral found"),
    }
    println!("completed in {:.3} ms", elapsed.as_secs_f64() * 1000.0);
    Ok(())
}
