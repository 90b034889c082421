use crate::commands::{GenerateCmd, OutputFormat};
use crate::error::CliError;
use std::fs::File;
use std::io::{self, Write};

use perspective_grids::grids::GridOptions;
use perspective_grids::path::PathSet;
use perspective_grids::svg::{path_data, Document, DocumentHost, HostSink};

pub fn generate(cmd: GenerateCmd) -> Result<(), CliError> {
    let options = GridOptions {
        close_bands: cmd.close_bands,
    };
    let paths = cmd.grid.generate(cmd.canvas, &options)?;

    let mut output: Box<dyn Write> = match &cmd.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    write_paths(&cmd, &paths, &mut *output)?;
    output.flush()?;

    Ok(())
}

fn write_paths(cmd: &GenerateCmd, paths: &PathSet, output: &mut dyn Write) -> Result<(), CliError> {
    if cmd.count {
        writeln!(output, "sub-paths: {}", paths.len())?;
        writeln!(output, "points: {}", paths.num_points())?;
        return Ok(());
    }

    match cmd.format {
        OutputFormat::Svg => {
            let mut host = DocumentHost::new();
            host.open(Document::new(
                cmd.canvas.width,
                cmd.canvas.height,
                cmd.resolution,
            )?);
            host.create_path_layer(&paths.title, paths)?;

            if let Some(document) = host.close() {
                output.write_all(document.to_svg().as_bytes())?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *output, paths)?;
            writeln!(output)?;
        }
        OutputFormat::PathData => {
            for sub_path in paths {
                writeln!(output, "{}", path_data(sub_path))?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
use perspective_grids::grids::{Grid, ParallelLines};
#[cfg(test)]
use perspective_grids::math::size;
#[cfg(test)]
use std::fs;

#[cfg(test)]
fn command(grid: ParallelLines, output: std::path::PathBuf) -> GenerateCmd {
    GenerateCmd {
        grid: Grid::ParallelLines(grid),
        canvas: size(200.0, 200.0),
        resolution: 72.0,
        close_bands: false,
        format: OutputFormat::PathData,
        count: false,
        output: Some(output),
    }
}

#[test]
fn rejected_parameters_leave_output_untouched() {
    let path = std::env::temp_dir().join(format!("pgrid-rejected-{}.txt", std::process::id()));
    fs::write(&path, "keep").unwrap();

    let grid = ParallelLines {
        num_lines: 0,
        ..ParallelLines::default()
    };
    let result = generate(command(grid, path.clone()));

    assert!(matches!(result, Err(CliError::Parameter(..))));
    assert_eq!(fs::read_to_string(&path).unwrap(), "keep");
    fs::remove_file(&path).unwrap();
}

#[test]
fn writes_output_file() {
    let path = std::env::temp_dir().join(format!("pgrid-written-{}.txt", std::process::id()));
    fs::write(&path, "stale").unwrap();

    let grid = ParallelLines {
        num_lines: 3,
        span: 100.0,
        line_length: 10.0,
        ..ParallelLines::default()
    };
    generate(command(grid, path.clone())).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 3);
    assert_eq!(text.lines().next(), Some("M 95 50 L 105 50"));
    fs::remove_file(&path).unwrap();
}

#[test]
fn json_error_message() {
    let err: CliError = serde_json::from_str::<ParallelLines>("{").unwrap_err().into();
    let message = err.to_string();
    assert!(message.starts_with("JSON error: "), "{}", message);
    assert!(!message.contains("parameters"));
}
