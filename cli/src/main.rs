extern crate clap;
extern crate perspective_grids;

mod commands;
mod error;
mod generate;

use clap::*;
use commands::*;
use error::CliError;

use perspective_grids::grids::{
    DiminishingLines, Ellipses, Grid, Parabolas, ParallelLines, VanishingPoint,
};
use perspective_grids::math::size;
use serde::de::DeserializeOwned;

use std::fs;
use std::path::PathBuf;
use std::result::Result;
use std::str::FromStr;

fn main() {
    env_logger::init();

    let matches = App::new("Perspective grids command-line interface")
        .version("0.1")
        .author("Mark McKay <mark@kitfox.com>")
        .about("Generates perspective construction grids as vector paths")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("parallel")
                .about("Evenly spaced parallel lines")
                .arg(count_arg("NUM_LINES", "num-lines", "Number of lines", "10"))
                .arg(number_arg("SPAN", "span", "Distance between the first and last lines", "300"))
                .arg(number_arg("LINE_LENGTH", "line-length", "Length of each line", "500"))
                .arg(angle_arg())
                .arg(line_width_arg()),
        )
        .subcommand(
            SubCommand::with_name("diminishing")
                .about("Parallel lines converging towards a horizon line")
                .arg(count_arg("NUM_LINES", "num-lines", "Number of lines", "10"))
                .arg(number_arg("SPAN", "span", "Distance from the horizon to the first line", "200"))
                .arg(number_arg("RATIO", "ratio", "How quickly the lines converge, smaller is faster", "1"))
                .arg(number_arg("LINE_LENGTH", "line-length", "Length of each line", "500"))
                .arg(angle_arg())
                .arg(Arg::with_name("MIRROR")
                    .short("m")
                    .long("mirror")
                    .help("Also draws the lines reflected across the horizon")
                )
                .arg(line_width_arg()),
        )
        .subcommand(
            SubCommand::with_name("vanishing-point")
                .about("Spokes radiating from a vanishing point")
                .arg(count_arg("NUM_SPOKES", "num-spokes", "Number of spokes", "120"))
                .arg(count_arg("NUM_RINGS", "num-rings", "Number of rings, each doubling the line density", "3"))
                .arg(number_arg("RADIUS", "radius", "Radius of the first ring", "200"))
                .arg(angle_arg())
                .arg(line_width_arg()),
        )
        .subcommand(
            SubCommand::with_name("ellipses")
                .about("Concentric ellipses sharing a diameter")
                .arg(count_arg("NUM_LINES", "num-lines", "Number of ellipses", "20"))
                .arg(count_arg("LENGTH", "length", "Length of the shared diameter", "600"))
                .arg(number_arg("HEIGHT", "height", "Semi-axis of the largest ellipse", "300"))
                .arg(angle_arg())
                .arg(line_width_arg()),
        )
        .subcommand(
            SubCommand::with_name("parabolas")
                .about("Nested parabolas sharing their apex")
                .arg(count_arg("NUM_LINES", "num-lines", "Number of parabolas", "16"))
                .arg(count_arg("RADIUS", "radius", "Distance from the apex to the end of the arcs", "300"))
                .arg(angle_arg())
                .arg(line_width_arg()),
        )
        .arg(Arg::with_name("CANVAS_WIDTH")
            .long("canvas-width")
            .help("Canvas width in pixels (1024 by default)")
            .value_name("PIXELS")
            .takes_value(true)
            .global(true)
        )
        .arg(Arg::with_name("CANVAS_HEIGHT")
            .long("canvas-height")
            .help("Canvas height in pixels (768 by default)")
            .value_name("PIXELS")
            .takes_value(true)
            .global(true)
        )
        .arg(Arg::with_name("RESOLUTION")
            .long("resolution")
            .help("Document resolution in pixels per inch (72 by default)")
            .value_name("DPI")
            .takes_value(true)
            .global(true)
        )
        .arg(Arg::with_name("FORMAT")
            .short("f")
            .long("format")
            .help("Output format (svg by default)")
            .value_name("FORMAT")
            .possible_values(&["svg", "json", "path-data"])
            .takes_value(true)
            .global(true)
        )
        .arg(Arg::with_name("CLOSE_BANDS")
            .long("close-bands")
            .help("Marks the stroke bands as closed")
            .global(true)
        )
        .arg(Arg::with_name("COUNT")
            .short("c")
            .long("count")
            .help("Prints the number of sub-paths and points")
            .global(true)
        )
        .arg(Arg::with_name("PARAMS")
            .short("p")
            .long("params")
            .help("Reads the grid parameters from a JSON file, command line values take precedence")
            .value_name("FILE")
            .takes_value(true)
            .global(true)
        )
        .arg(Arg::with_name("OUTPUT")
            .help("Sets the output file to use")
            .value_name("FILE")
            .short("o")
            .long("output")
            .takes_value(true)
            .global(true)
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn count_arg<'a>(name: &'a str, long: &'a str, help: &'a str, default: &'a str) -> Arg<'a, 'a> {
    Arg::with_name(name)
        .long(long)
        .help(help)
        .value_name("N")
        .takes_value(true)
        .default_value(default)
}

fn number_arg<'a>(name: &'a str, long: &'a str, help: &'a str, default: &'a str) -> Arg<'a, 'a> {
    Arg::with_name(name)
        .long(long)
        .help(help)
        .value_name("NUMBER")
        .takes_value(true)
        .allow_hyphen_values(true)
        .default_value(default)
}

fn angle_arg<'a>() -> Arg<'a, 'a> {
    number_arg("ANGLE", "angle", "Rotation of the grid in degrees", "0").short("a")
}

fn line_width_arg<'a>() -> Arg<'a, 'a> {
    number_arg("LINE_WIDTH", "line-width", "Stroke width, 0 for thin lines", "0").short("w")
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let (name, sub) = match matches.subcommand() {
        (name, Some(sub)) => (name, sub),
        _ => return Ok(()),
    };

    let grid = match name {
        "parallel" => Grid::ParallelLines(parallel_lines(sub)?),
        "diminishing" => Grid::DiminishingLines(diminishing_lines(sub)?),
        "vanishing-point" => Grid::VanishingPoint(vanishing_point(sub)?),
        "ellipses" => Grid::Ellipses(ellipses(sub)?),
        "parabolas" => Grid::Parabolas(parabolas(sub)?),
        _ => return Ok(()),
    };

    let format = match sub.value_of("FORMAT") {
        Some("json") => OutputFormat::Json,
        Some("path-data") => OutputFormat::PathData,
        _ => OutputFormat::Svg,
    };

    let cmd = GenerateCmd {
        grid,
        canvas: size(
            global(sub, "CANVAS_WIDTH", 1024.0)?,
            global(sub, "CANVAS_HEIGHT", 768.0)?,
        ),
        resolution: global(sub, "RESOLUTION", 72.0)?,
        close_bands: sub.is_present("CLOSE_BANDS"),
        format,
        count: sub.is_present("COUNT"),
        output: sub.value_of("OUTPUT").map(PathBuf::from),
    };

    log::debug!("{:?} on a {:?} canvas", cmd.grid, cmd.canvas);

    generate::generate(cmd)
}

fn parse<T: FromStr>(name: &str, value: &str) -> Result<T, CliError> {
    value.parse().map_err(|_| CliError::InvalidArgument {
        name: name.to_lowercase().replace('_', "-"),
        value: value.to_string(),
    })
}

fn global(matches: &ArgMatches, name: &str, default: f64) -> Result<f64, CliError> {
    match matches.value_of(name) {
        Some(value) => parse(name, value),
        None => Ok(default),
    }
}

/// The value of an argument given on the command line, ignoring defaults.
fn explicit<T: FromStr>(matches: &ArgMatches, name: &str) -> Result<Option<T>, CliError> {
    if matches.occurrences_of(name) == 0 {
        return Ok(None);
    }

    match matches.value_of(name) {
        Some(value) => parse(name, value).map(Some),
        None => Ok(None),
    }
}

/// Integer arguments stored as floats.
fn explicit_integer(matches: &ArgMatches, name: &str) -> Result<Option<f64>, CliError> {
    Ok(explicit::<i64>(matches, name)?.map(|v| v as f64))
}

/// Parameters from the `--params` file, or the defaults.
fn base_params<T: DeserializeOwned + Default>(matches: &ArgMatches) -> Result<T, CliError> {
    match matches.value_of("PARAMS") {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&text)?)
        }
        None => Ok(T::default()),
    }
}

fn parallel_lines(matches: &ArgMatches) -> Result<ParallelLines, CliError> {
    let mut grid: ParallelLines = base_params(matches)?;
    if let Some(v) = explicit(matches, "NUM_LINES")? {
        grid.num_lines = v;
    }
    if let Some(v) = explicit(matches, "SPAN")? {
        grid.span = v;
    }
    if let Some(v) = explicit(matches, "LINE_LENGTH")? {
        grid.line_length = v;
    }
    if let Some(v) = explicit(matches, "ANGLE")? {
        grid.angle = v;
    }
    if let Some(v) = explicit(matches, "LINE_WIDTH")? {
        grid.line_width = v;
    }

    Ok(grid)
}

fn diminishing_lines(matches: &ArgMatches) -> Result<DiminishingLines, CliError> {
    let mut grid: DiminishingLines = base_params(matches)?;
    if let Some(v) = explicit(matches, "NUM_LINES")? {
        grid.num_lines = v;
    }
    if let Some(v) = explicit(matches, "SPAN")? {
        grid.span = v;
    }
    if let Some(v) = explicit(matches, "RATIO")? {
        grid.ratio = v;
    }
    if let Some(v) = explicit(matches, "LINE_LENGTH")? {
        grid.line_length = v;
    }
    if let Some(v) = explicit(matches, "ANGLE")? {
        grid.angle = v;
    }
    if matches.is_present("MIRROR") {
        grid.mirror = true;
    }
    if let Some(v) = explicit(matches, "LINE_WIDTH")? {
        grid.line_width = v;
    }

    Ok(grid)
}

fn vanishing_point(matches: &ArgMatches) -> Result<VanishingPoint, CliError> {
    let mut grid: VanishingPoint = base_params(matches)?;
    if let Some(v) = explicit(matches, "NUM_SPOKES")? {
        grid.num_spokes = v;
    }
    if let Some(v) = explicit(matches, "NUM_RINGS")? {
        grid.num_rings = v;
    }
    if let Some(v) = explicit(matches, "RADIUS")? {
        grid.radius = v;
    }
    if let Some(v) = explicit(matches, "ANGLE")? {
        grid.angle = v;
    }
    if let Some(v) = explicit(matches, "LINE_WIDTH")? {
        grid.line_width = v;
    }

    Ok(grid)
}

fn ellipses(matches: &ArgMatches) -> Result<Ellipses, CliError> {
    let mut grid: Ellipses = base_params(matches)?;
    if let Some(v) = explicit(matches, "NUM_LINES")? {
        grid.num_lines = v;
    }
    if let Some(v) = explicit_integer(matches, "LENGTH")? {
        grid.length = v;
    }
    if let Some(v) = explicit(matches, "HEIGHT")? {
        grid.height = v;
    }
    if let Some(v) = explicit(matches, "ANGLE")? {
        grid.angle = v;
    }
    if let Some(v) = explicit(matches, "LINE_WIDTH")? {
        grid.line_width = v;
    }

    Ok(grid)
}

fn parabolas(matches: &ArgMatches) -> Result<Parabolas, CliError> {
    let mut grid: Parabolas = base_params(matches)?;
    if let Some(v) = explicit(matches, "NUM_LINES")? {
        grid.num_lines = v;
    }
    if let Some(v) = explicit_integer(matches, "RADIUS")? {
        grid.radius = v;
    }
    if let Some(v) = explicit(matches, "ANGLE")? {
        grid.angle = v;
    }
    if let Some(v) = explicit(matches, "LINE_WIDTH")? {
        grid.line_width = v;
    }

    Ok(grid)
}
