//! CLI tool for cellsort - sorts a CSV/TSV table and outputs JSON
//!
//! Usage:
//!   cellsort_cli <input.csv> [-c <column>] [--desc] [--header] [--groups] [-o out.json]
//!
//! `-c` picks the 0-based sort column (default 0). `--groups` prints the sorted
//! distinct values of that column instead of the sorted table.
//! Set `RUST_LOG=debug` (or `trace`) to see sort decisions.

#![allow(clippy::exit)]

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use cellsort::csv::{parse_delimited, Delimiter};
use cellsort::error::Result;
use cellsort::SortRequest;

const USAGE: &str =
    "Usage: cellsort_cli <input.csv> [-c <column>] [--desc] [--header] [--groups] [-o output.json]";

struct Options {
    input: String,
    column: usize,
    ascending: bool,
    header: bool,
    groups: bool,
    output: Option<String>,
}

fn parse_args(args: &[String]) -> std::result::Result<Options, String> {
    let mut input = None;
    let mut opts = Options {
        input: String::new(),
        column: 0,
        ascending: true,
        header: false,
        groups: false,
        output: None,
    };

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-c" | "--column" => {
                let value = iter.next().ok_or("missing value for -c")?;
                opts.column = value
                    .parse()
                    .map_err(|e| format!("bad column {value:?}: {e}"))?;
            }
            "--desc" => opts.ascending = false,
            "--asc" => opts.ascending = true,
            "--header" => opts.header = true,
            "--groups" => opts.groups = true,
            "-o" => opts.output = Some(iter.next().ok_or("missing value for -o")?.clone()),
            flag if flag.starts_with('-') => return Err(format!("unknown flag {flag}")),
            path => {
                if input.replace(path.to_string()).is_some() {
                    return Err("more than one input file".to_string());
                }
            }
        }
    }

    opts.input = input.ok_or("missing input file")?;
    Ok(opts)
}

fn run(opts: &Options) -> Result<String> {
    let data = fs::read(&opts.input)?;
    let mut table = parse_delimited(
        &data,
        Delimiter::from_path(Path::new(&opts.input)),
        opts.header,
    );
    log::info!(
        "Loaded {} rows x {} columns from {}",
        table.rows.len(),
        table.width(),
        opts.input
    );

    let json = if opts.groups {
        let mut groups = table.group_keys(opts.column)?;
        SortRequest::group(opts.ascending).sort_groups(&mut groups);
        serde_json::to_string_pretty(&groups)?
    } else {
        table.sort(&SortRequest::column(opts.column, opts.ascending))?;
        serde_json::to_string_pretty(&table)?
    };
    Ok(json)
}

fn write_output(opts: &Options, json: &str) -> Result<()> {
    match &opts.output {
        Some(path) => {
            fs::write(path, json)?;
            eprintln!("Written: {path}");
        }
        None => writeln!(io::stdout(), "{json}")?,
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let opts = match parse_args(&args) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&opts).and_then(|json| write_output(&opts, &json)) {
        eprintln!("{}: {e}", opts.input);
        std::process::exit(1);
    }
}
