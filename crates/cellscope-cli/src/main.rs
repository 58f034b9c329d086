//! Cellscope CLI - spreadsheet cell classification tool

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cellscope::prelude::*;
use cellscope::{
    build_user_guide_sheet, is_external_link, SheetAnalysis, MAX_SHEET_NAME_LEN, USER_GUIDE_SHEET,
};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cellscope")]
#[command(
    author,
    version,
    about = "Classify spreadsheet cells as inputs, calculations, and outputs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify the cells of one or more CSV sheets
    Classify {
        /// Input CSV files, one sheet per file
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Only report this sheet
        #[arg(short, long)]
        sheet: Option<String>,

        /// Emit the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Classify a workbook and write annotated sheets to a directory
    Annotate {
        /// Input CSV files, one sheet per file
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Directory for the annotated sheets
        #[arg(short, long, default_value = "annotated")]
        output_dir: PathBuf,

        /// Fixed summary text for the Documentation sheet
        #[arg(long)]
        summary: Option<String>,
    },

    /// Show the formula dependency graph of a workbook
    Graph {
        /// Input CSV file
        input: PathBuf,

        /// Only show this sheet
        #[arg(short, long)]
        sheet: Option<String>,
    },

    /// Print the input-cell guide as CSV
    Guide {
        /// Input CSV file
        input: PathBuf,
    },

    /// Show information about a workbook
    Info {
        /// Input CSV file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            inputs,
            sheet,
            json,
        } => classify_files(&inputs, sheet.as_deref(), json),
        Commands::Annotate {
            inputs,
            output_dir,
            summary,
        } => annotate_files(&inputs, &output_dir, summary.as_deref()),
        Commands::Graph { input, sheet } => show_graph(&input, sheet.as_deref()),
        Commands::Guide { input } => show_guide(&input),
        Commands::Info { input } => show_info(&input),
    }
}

/// Load one or more CSV files into a workbook, one sheet per file
fn load_workbook(inputs: &[PathBuf]) -> Result<Workbook> {
    let mut workbook = Workbook::empty();

    for path in inputs {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Sheet");
        let name = sanitize_sheet_name(stem);

        let file =
            File::open(path).with_context(|| format!("Failed to open '{}'", path.display()))?;
        let mut loaded = CsvReader::read_named(file, &name, &CsvReadOptions::default())
            .with_context(|| format!("Failed to read '{}'", path.display()))?;

        let sheet = loaded.remove_worksheet(0)?;
        workbook
            .add_existing_worksheet(sheet)
            .with_context(|| format!("Failed to add sheet for '{}'", path.display()))?;
    }

    Ok(workbook)
}

/// Make a file stem usable as a sheet name
fn sanitize_sheet_name(stem: &str) -> String {
    let cleaned: String = stem
        .chars()
        .take(MAX_SHEET_NAME_LEN)
        .map(|c| match c {
            ':' | '\\' | '/' | '?' | '*' | '[' | ']' => '_',
            _ => c,
        })
        .collect();

    if cleaned.is_empty() {
        "Sheet".to_string()
    } else {
        cleaned
    }
}

fn classify_files(inputs: &[PathBuf], sheet_filter: Option<&str>, json: bool) -> Result<()> {
    let workbook = load_workbook(inputs)?;
    let analysis = workbook.classify();

    let sheets: Vec<&SheetAnalysis> = match sheet_filter {
        Some(name) => {
            let found = analysis
                .sheet(name)
                .with_context(|| format!("Sheet '{}' not found", name))?;
            vec![found]
        }
        None => analysis.sheets.iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&sheets)?);
        return Ok(());
    }

    for sheet_analysis in &sheets {
        println!();
        println!("--- Results for sheet: {} ---", sheet_analysis.sheet);
        for (reference, classification) in &sheet_analysis.classifications {
            println!("{}: {}", reference, classification);
        }
    }

    eprintln!(
        "Classified {} cells across {} sheets",
        analysis.stats.cells_classified, analysis.stats.sheets_analyzed
    );
    if !analysis.stats.diagnostics.is_empty() {
        eprintln!(
            "Warning: {} formulas could not be parsed",
            analysis.stats.diagnostics.len()
        );
    }

    Ok(())
}

fn annotate_files(inputs: &[PathBuf], output_dir: &Path, summary: Option<&str>) -> Result<()> {
    let mut workbook = load_workbook(inputs)?;
    let analysis = workbook.classify();

    let summarizer: Box<dyn SheetSummarizer> = match summary {
        Some(text) => Box::new(StaticSummarizer::new(text)),
        None => Box::new(UnavailableSummarizer),
    };
    workbook.annotate(&analysis, summarizer.as_ref())?;

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create '{}'", output_dir.display()))?;

    for sheet in workbook.worksheets() {
        let path = output_dir.join(format!("{}.csv", sheet.name()));
        CsvWriter::write_file(sheet, &path, &CsvWriteOptions::default())
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
    }

    eprintln!(
        "Annotated {} sheets into '{}'",
        workbook.sheet_count(),
        output_dir.display()
    );

    Ok(())
}

fn show_graph(input: &Path, sheet_filter: Option<&str>) -> Result<()> {
    let workbook =
        Workbook::open(input).with_context(|| format!("Failed to open '{}'", input.display()))?;
    let analysis = workbook.classify();

    for sheet_analysis in &analysis.sheets {
        if let Some(name) = sheet_filter {
            if sheet_analysis.sheet != name {
                continue;
            }
        }

        println!();
        println!("--- Dependencies for sheet: {} ---", sheet_analysis.sheet);

        let mut cells: Vec<_> = sheet_analysis.graph.formula_cells().collect();
        cells.sort_unstable();
        for cell in cells {
            let mut precedents: Vec<_> = sheet_analysis.graph.precedents_of(cell).collect();
            precedents.sort_unstable();

            if precedents.is_empty() {
                println!("{}", cell);
            } else {
                println!("{} <- {}", cell, precedents.join(", "));
            }
        }

        println!();
        println!("--- Dependents for sheet: {} ---", sheet_analysis.sheet);

        let mut tokens: Vec<_> = sheet_analysis.graph.referenced_tokens().collect();
        tokens.sort_unstable();
        for token in tokens {
            let mut dependents: Vec<_> = sheet_analysis.graph.dependents_of(token).collect();
            dependents.sort_unstable();
            println!("{} -> {}", token, dependents.join(", "));
        }
    }

    Ok(())
}

fn show_guide(input: &Path) -> Result<()> {
    let mut workbook =
        Workbook::open(input).with_context(|| format!("Failed to open '{}'", input.display()))?;
    let analysis = workbook.classify();

    build_user_guide_sheet(&mut workbook, &analysis.sheets)?;

    let guide = workbook
        .worksheet_by_name(USER_GUIDE_SHEET)
        .context("User Guide sheet was not generated")?;
    CsvWriter::write(guide, io::stdout(), &CsvWriteOptions::default())?;

    Ok(())
}

fn show_info(input: &Path) -> Result<()> {
    let workbook =
        Workbook::open(input).with_context(|| format!("Failed to open '{}'", input.display()))?;

    println!("File: {}", input.display());
    println!("Sheets: {}", workbook.sheet_count());

    for i in 0..workbook.sheet_count() {
        let sheet = workbook.worksheet(i)?;
        let formula_count = sheet.formula_cells().count();
        let external_links = sheet
            .formula_cells()
            .filter(|(_, text)| is_external_link(text))
            .count();

        println!();
        println!("  Sheet {}: \"{}\"", i, sheet.name());

        if let Some(range) = sheet.used_range() {
            println!(
                "    Used range: {} rows x {} columns",
                range.end.row + 1,
                range.end.col + 1
            );
        } else {
            println!("    Used range: empty");
        }
        println!("    Cells: {}", sheet.cell_count());
        println!("    Formulas: {}", formula_count);
        println!("    External links: {}", external_links);
    }

    Ok(())
}
