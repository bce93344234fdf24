// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end for number walls.
//!
//! ```bash
//! # The Thue-Morse wall mod 2, one pixel per cell
//! numberwall render --thue-morse 300 --modulus 2 --output numberwallout.png
//!
//! # A small wall as text
//! numberwall print --seq 1,1,2,0,0,0,1,2,1,1,3 --modulus 5
//!
//! # Count sequences mod 3 whose walls have no window wider than 1
//! numberwall census --modulus 3 --size 1 --max-length 8
//! ```

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use number_wall::deficiency::Census;
use number_wall::render::{self, RenderOptions};
use number_wall::sequence;
use number_wall::{Modulus, NumberWall, Rule};
use std::path::PathBuf;
use strum::IntoEnumIterator;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "numberwall")]
#[command(about = "Number walls of integer sequences over Z/mZ")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a wall and print it
    Print {
        #[command(flatten)]
        input: WallInput,
        /// Print the wall as JSON
        #[arg(long)]
        json: bool,
        /// Also print how many cells each rule produced
        #[arg(long)]
        stats: bool,
    },
    /// Build a wall and write it as an image
    Render {
        #[command(flatten)]
        input: WallInput,
        /// Output image path (format from extension)
        #[arg(short, long, default_value = "numberwallout.png")]
        output: PathBuf,
        /// Draw each cell as a block with a white grid line
        #[arg(long)]
        spaced: bool,
        /// Block size in pixels for --spaced
        #[arg(long, default_value_t = 10)]
        cell_size: u32,
    },
    /// Count sequences whose walls have no window wider than SIZE
    Census {
        #[arg(short, long)]
        modulus: u64,
        #[arg(short, long, default_value_t = 1)]
        size: usize,
        /// Stop after sequences of this length
        #[arg(long, default_value_t = 12)]
        max_length: usize,
        /// Print the surviving sequences of the last generation
        #[arg(long)]
        show: bool,
    },
}

#[derive(Args, Debug)]
struct WallInput {
    /// Use the first N terms of the Thue-Morse sequence
    #[arg(long, conflicts_with = "seq")]
    thue_morse: Option<usize>,
    /// Comma separated sequence, e.g. 1,2,3,4,5
    #[arg(long)]
    seq: Option<String>,
    #[arg(short, long, default_value_t = 2)]
    modulus: u64,
}

impl WallInput {
    fn build(&self) -> Result<NumberWall> {
        let terms = match (&self.seq, self.thue_morse) {
            (Some(text), _) => sequence::parse(text)?,
            (None, Some(n)) => sequence::thue_morse(n),
            (None, None) => sequence::thue_morse(300),
        };
        let modulus = Modulus::new(self.modulus)?;
        if !modulus.is_prime() {
            warn!(
                modulus = modulus.value(),
                "modulus is not prime; some divisions may be undefined"
            );
        }
        let wall = NumberWall::build(&terms, modulus)
            .with_context(|| format!("building wall of {} terms mod {}", terms.len(), self.modulus))?;
        info!(terms = terms.len(), rows = wall.last_row(), "built wall");
        Ok(wall)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Print { input, json, stats } => print(&input, json, stats),
        Commands::Render {
            input,
            output,
            spaced,
            cell_size,
        } => {
            let wall = input.build()?;
            let options = if spaced {
                RenderOptions::spaced(cell_size)
            } else {
                RenderOptions::default()
            };
            render::save(&wall, &output, &options)
                .with_context(|| format!("writing {}", output.display()))
        }
        Commands::Census {
            modulus,
            size,
            max_length,
            show,
        } => census(modulus, size, max_length, show),
    }
}

fn print(input: &WallInput, json: bool, stats: bool) -> Result<()> {
    let wall = input.build()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&wall)?);
    } else {
        print!("{}", wall);
    }
    if stats {
        for rule in Rule::iter() {
            let name: &'static str = rule.into();
            println!("{:>16}: {}", name, wall.statistics().get(rule));
        }
    }
    Ok(())
}

fn census(modulus: u64, size: usize, max_length: usize, show: bool) -> Result<()> {
    let modulus = Modulus::new(modulus)?;
    if !modulus.is_prime() {
        bail!("census needs a prime modulus, got {}", modulus.value());
    }
    let mut last = None;
    for generation in Census::new(modulus, size).with_max_length(max_length) {
        let generation = generation?;
        println!(
            "length {:>3}: {:>8} of {} sequences",
            generation.length,
            generation.survivors.len(),
            generation.total
        );
        last = Some(generation);
    }
    if show {
        for survivor in last.iter().flat_map(|g| &g.survivors) {
            println!("{:?}", survivor);
        }
    }
    Ok(())
}
