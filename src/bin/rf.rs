//! RF: Geographic to grid coordinates, by Redfearn's series
use anyhow::Context;
use clap::Parser;
use log::{debug, info, trace, warn};
use redfearn::math::parse_angle;
use redfearn::prelude::*;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

/// RF reads records of latitude and longitude, and writes the corresponding
/// zone, easting, northing, grid convergence and point scale factor.
///
/// Angles are given in decimal degrees, or as d:m:s with an optional
/// hemisphere letter. Anything after a '#' is a comment.
#[derive(Parser, Debug)]
#[clap(name = "rf")]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// The grid: a preset name (mga, utm, utm_south), or a definition,
    /// e.g. "utm south ellps=GRS80"
    #[clap(short, long, default_value = "mga")]
    grid: String,

    /// Project all points into this zone, rather than their own
    #[clap(short, long, allow_hyphen_values = true)]
    zone: Option<i64>,

    /// Number of decimals in easting and northing
    #[clap(short = 'd', long, default_value_t = 4)]
    decimals: usize,

    /// Echo input to output
    #[clap(short, long)]
    echo: bool,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// The files to operate on. Reads stdin if none are given
    args: Vec<String>,
}

/// Running tally of the records handled
#[derive(Debug, Default)]
struct Tally {
    records: usize,
    successes: usize,
}

fn main() -> Result<(), anyhow::Error> {
    let options = Cli::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();
    trace!("This is RF");
    debug!("{options:#?}");

    let engine = ProjectionEngine::named(&options.grid)
        .with_context(|| format!("cannot set up the grid '{}'", options.grid))?;

    let stdout = io::stdout();
    let mut output = stdout.lock();
    let mut tally = Tally::default();

    if options.args.is_empty() {
        let stdin = io::stdin();
        process(&engine, &options, stdin.lock(), &mut output, &mut tally)?;
    } else {
        for path in &options.args {
            let file = File::open(path).with_context(|| format!("cannot open '{path}'"))?;
            process(&engine, &options, BufReader::new(file), &mut output, &mut tally)?;
        }
    }

    info!(
        "Projected {} of {} records",
        tally.successes, tally.records
    );
    Ok(())
}

fn process(
    engine: &ProjectionEngine,
    options: &Cli,
    input: impl BufRead,
    output: &mut impl Write,
    tally: &mut Tally,
) -> Result<(), anyhow::Error> {
    for line in input.lines() {
        let line = line?;
        let data = line.split_once('#').map_or(line.as_str(), |(data, _)| data);
        let fields: Vec<&str> = data.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        tally.records += 1;

        if options.echo {
            write!(output, "{}  ", fields.join(" "))?;
        }

        let result = match project(engine, options.zone, &fields) {
            Ok(grid) => {
                tally.successes += 1;
                format!("{:.*}", options.decimals, grid)
            }
            Err(e) => {
                warn!("{}: {e}", data.trim());
                String::from("NaN NaN NaN NaN NaN")
            }
        };
        writeln!(output, "{result}")?;
    }
    Ok(())
}

fn project(
    engine: &ProjectionEngine,
    zone: Option<i64>,
    fields: &[&str],
) -> Result<GridCoordinate, Error> {
    if fields.len() < 2 {
        return Err(Error::Syntax(String::from("expected latitude and longitude")));
    }
    let Some(latitude) = parse_angle(fields[0]) else {
        return Err(Error::Syntax(format!("cannot parse '{}' as a latitude", fields[0])));
    };
    let Some(longitude) = parse_angle(fields[1]) else {
        return Err(Error::Syntax(format!("cannot parse '{}' as a longitude", fields[1])));
    };

    match zone {
        Some(zone) => engine.project_in_zone(latitude, longitude, zone),
        None => engine.project(latitude, longitude),
    }
}
