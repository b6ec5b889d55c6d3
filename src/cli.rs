// src/cli.rs
use std::env;

use crate::config::options::{AppOptions, ExportFormat, PageKind};
use crate::csv::table_to_string;
use crate::file;
use crate::pipeline;
use crate::progress::NullProgress;

pub struct Params {
    pub page: PageKind,
    pub out: Option<String>,
    pub format: ExportFormat,
    pub include_headers: bool,
    pub ignore_cache: bool,
    /// Print to stdout instead of writing a file.
    pub print: bool,
}

impl Params {
    fn new() -> Self {
        Self {
            page: PageKind::Ranking,
            out: None,
            format: ExportFormat::Csv,
            include_headers: true,
            ignore_cache: false,
            print: false,
        }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let mut options = AppOptions::default();
    options.fetch.ignore_cache = params.ignore_cache;
    options.export.format = params.format;
    options.export.include_headers = params.include_headers;
    options.export.set_default_stem_for(params.page);

    let mut prog = NullProgress;
    let output = pipeline::run(&options.fetch, Some(&mut prog))?;

    let ds = match params.page {
        PageKind::Filtered => &output.filtered,
        PageKind::Ranking => &output.ranking,
    };

    if params.print {
        print!("{}", table_to_string(ds, params.include_headers, params.format.delim()));
        return Ok(());
    }

    if let Some(out) = &params.out {
        let default_filename = options
            .export
            .out_path()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let resolved = file::resolve_single_out_path(out, &default_filename)?;
        options.export.set_path(&resolved.to_string_lossy());
    }
    let path = file::write_export_single(&options.export, ds)?;
    eprintln!("Wrote {} row(s) to {}", ds.row_count(), path.display());
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--page" => {
                let v = args.next().ok_or("Missing value for --page")?;
                params.page = match v.to_ascii_lowercase().as_str() {
                    "ranking" => PageKind::Ranking,
                    "filtered" | "filtradas" => PageKind::Filtered,
                    other => return Err(format!("Unknown page: {}", other).into()),
                };}
            "-o" | "--out" => params.out = Some(args.next().ok_or("Missing output path")?),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "--no-headers" => params.include_headers = false,
            "--no-cache" => params.ignore_cache = true,
            "--print" => params.print = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
