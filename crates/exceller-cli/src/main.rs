//! exceller CLI - CSV to XLSX conversion tool

mod logging;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use exceller::prelude::*;
use exceller::split_list;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "exceller")]
#[command(author, version, about = "A csv to excel conversion tool")]
struct Cli {
    /// Input CSV files; an argument may hold several paths separated by `;`
    #[arg(required = true, value_name = "SOURCES")]
    sources: Vec<String>,

    /// Column formats separated by `;`, e.g. `D;NW4000;T`
    #[arg(short, long, value_name = "PATTERN")]
    columns: Option<String>,

    /// Apply the last column format to the remaining columns
    #[arg(short, long)]
    iterate_last: bool,

    /// Header names separated by `;`
    #[arg(short = 'N', long, value_name = "NAMES")]
    header_names: Option<String>,

    /// Read the header names from the first CSV line
    #[arg(short = 'H', long)]
    read_header: bool,

    /// Convert only the first N columns
    #[arg(short = 'n', long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    column_count: Option<u32>,

    /// Output workbook path (default: ./<first source name>.xlsx)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// CSV field delimiter
    #[arg(short, long, default_value = ",")]
    delimiter: char,

    /// JSON file with conversion options; flags override its values
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// More output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only print warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Every source path, with `;`-separated arguments split apart
    fn source_paths(&self) -> Vec<PathBuf> {
        self.sources
            .iter()
            .flat_map(|arg| split_list(arg))
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
            .collect()
    }

    /// Options from the config file, overridden by command-line flags
    fn conversion_options(&self) -> Result<ConversionOptions> {
        let mut options = match &self.config {
            Some(path) => load_config(path)?,
            None => ConversionOptions::default(),
        };

        if let Some(columns) = &self.columns {
            options.column_formats = Some(columns.clone());
        }
        if self.iterate_last {
            options.repeat_last_format = true;
        }
        if let Some(names) = &self.header_names {
            options.header_names = Some(split_list(names).into_iter().map(str::to_string).collect());
        }
        if self.read_header {
            options.read_header = true;
        }
        if let Some(count) = self.column_count {
            options.column_count = Some(count as usize);
        }
        Ok(options)
    }

    fn csv_options(&self) -> Result<CsvReadOptions> {
        if !self.delimiter.is_ascii() {
            bail!("Delimiter must be a single ASCII character, got '{}'", self.delimiter);
        }
        Ok(CsvReadOptions::default().with_delimiter(self.delimiter as u8))
    }
}

fn load_config(path: &Path) -> Result<ConversionOptions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config '{}'", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid config '{}'", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet)?;
    run(&cli).context("Error while performing conversion")
}

fn run(cli: &Cli) -> Result<()> {
    let sources = cli.source_paths();
    let converter = Converter::new(cli.conversion_options()?)
        .context("Invalid conversion options")?
        .with_csv_options(cli.csv_options()?);

    let report = converter.convert_files(&sources, cli.output.as_deref())?;

    for table in &report.tables {
        tracing::debug!(
            "{}: sheet '{}', {} columns, {} rows",
            table.source,
            table.sheet_name,
            table.column_count,
            table.data_rows
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("exceller").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_sources_are_split() {
        let cli = parse(&["a.csv;b.csv;", "c.csv"]);
        assert_eq!(
            cli.source_paths(),
            vec![
                PathBuf::from("a.csv"),
                PathBuf::from("b.csv"),
                PathBuf::from("c.csv")
            ]
        );
    }

    #[test]
    fn test_sources_are_required() {
        assert!(Cli::try_parse_from(["exceller"]).is_err());
    }

    #[test]
    fn test_flags_map_to_options() {
        let cli = parse(&[
            "-c", "D;N0.00", "-i", "-N", "When;Amount", "-n", "2", "data.csv",
        ]);
        let options = cli.conversion_options().unwrap();
        assert_eq!(
            options,
            ConversionOptions::new()
                .with_column_formats("D;N0.00")
                .with_repeat_last_format(true)
                .with_header_names(["When", "Amount"])
                .with_column_count(2)
        );
    }

    #[test]
    fn test_column_count_must_be_positive() {
        assert!(Cli::try_parse_from(["exceller", "-n", "0", "data.csv"]).is_err());
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["exceller", "-v", "-q", "data.csv"]).is_err());
        assert_eq!(parse(&["-vv", "data.csv"]).verbose, 2);
    }

    #[test]
    fn test_delimiter() {
        let cli = parse(&["-d", ";", "data.csv"]);
        assert_eq!(cli.csv_options().unwrap().delimiter, b';');

        let cli = parse(&["-d", "é", "data.csv"]);
        assert!(cli.csv_options().is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("options.json");
        std::fs::write(
            &config,
            r#"{ "column_formats": "T;T", "read_header": true, "column_count": 5 }"#,
        )
        .unwrap();

        let cli = parse(&[
            "--config",
            config.to_str().unwrap(),
            "-c",
            "N",
            "data.csv",
        ]);
        let options = cli.conversion_options().unwrap();
        assert_eq!(options.column_formats.as_deref(), Some("N"));
        assert!(options.read_header);
        assert_eq!(options.column_count, Some(5));
    }

    #[test]
    fn test_bad_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("options.json");
        std::fs::write(&config, "not json").unwrap();

        let cli = parse(&["--config", config.to_str().unwrap(), "data.csv"]);
        let err = cli.conversion_options().unwrap_err();
        assert!(err.to_string().starts_with("Invalid config"));
    }

    #[test]
    fn test_run_converts_files() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("people.csv");
        std::fs::write(&source, "name,joined\nann,2024-02-03 04:05:06\n").unwrap();
        let output = dir.path().join("people.xlsx");

        let cli = parse(&[
            "-H",
            "-c",
            "T;Dyyyy-mm-dd",
            "-o",
            output.to_str().unwrap(),
            source.to_str().unwrap(),
        ]);
        run(&cli).unwrap();
        assert!(output.is_file());
    }

    #[test]
    fn test_run_reports_malformed_columns() {
        let cli = parse(&["-c", "Q", "data.csv"]);
        let err = run(&cli).unwrap_err();
        assert_eq!(err.to_string(), "Invalid conversion options");
    }
}
