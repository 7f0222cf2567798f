// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Circlet — circular logo cropper.
//
// Entry point. Initialises logging, then runs the transformation pipeline on
// the two positional path arguments.

use circlet_core::Result;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    run(&args)
}

/// Transform `args[0]` into a circular transparent PNG at `args[1]`.
///
/// With fewer than two arguments, prints a usage line and returns without
/// touching any file. Extra arguments are ignored. Decode and write failures
/// propagate out of `main` as the process exit diagnostic.
fn run(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        println!("Usage: circlet <input> <output>");
        return Ok(());
    }

    let input = &args[0];
    let output = &args[1];

    tracing::info!(%input, %output, "Circlet starting");
    circlet_image::circularize_file(input, output)?;

    println!("Saved circular transparent image to {output}");
    Ok(())
}
