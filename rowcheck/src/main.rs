//! rowcheck CLI - parse and validate comma-separated files
//!
//! ```bash
//! rowcheck parse people.csv                              # Raw rows as JSON
//! rowcheck check classroster.csv --model person          # Built-in person schema
//! rowcheck validate roster.csv --schema row.json \
//!     --columns name,age,class                           # JSON Schema per row
//! ```
//!
//! Exit status is 1 when a row fails validation or the input cannot be read.

use clap::{Parser, Subcommand, ValueEnum};
use rowcheck::logs::LOG_BROADCASTER;
use rowcheck::{
    parse_csv, parse_csv_raw, BasicPersonRow, JsonSchemaRow, ParseOutcome, PersonRow,
    ValidationError,
};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rowcheck")]
#[command(about = "Parse comma-separated rows and validate each one", long_about = None)]
struct Cli {
    /// Do not echo progress logs to stderr
    #[arg(short, long, global = true, env = "ROWCHECK_QUIET")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Output every line as an array of trimmed strings
    Parse {
        /// Input file
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate rows against a built-in model (first line is a header)
    Check {
        /// Input file
        input: PathBuf,

        /// Row model
        #[arg(short, long, value_enum, default_value = "person")]
        model: Model,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate rows against a JSON Schema file (first line is a header)
    Validate {
        /// Input file
        input: PathBuf,

        /// Draft 7 JSON Schema applied to each row
        #[arg(short, long)]
        schema: PathBuf,

        /// Column names; rows are validated as objects instead of arrays
        #[arg(short, long, value_delimiter = ',')]
        columns: Vec<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Model {
    /// name, age, class
    Person,
    /// name, age
    BasicPerson,
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    LOG_BROADCASTER.set_echo(!cli.quiet);

    let result = match cli.command {
        Commands::Parse { input, output } => cmd_parse(&input, output.as_deref()).await,

        Commands::Check {
            input,
            model,
            output,
        } => cmd_check(&input, model, output.as_deref()).await,

        Commands::Validate {
            input,
            schema,
            columns,
            output,
        } => cmd_validate(&input, &schema, columns, output.as_deref()).await,
    };

    if let Err(e) = &result {
        eprintln!("Error: {}", e);
    }
    let code = exit_code(&result);
    if code != 0 {
        std::process::exit(code);
    }
}

/// 0 when every row was valid, 1 on a rejected row or any error.
fn exit_code(result: &CmdResult) -> i32 {
    match result {
        Ok(true) => 0,
        Ok(false) | Err(_) => 1,
    }
}

/// Commands return `Ok(false)` when a row was rejected.
type CmdResult = Result<bool, Box<dyn std::error::Error>>;

async fn cmd_parse(input: &Path, output: Option<&Path>) -> CmdResult {
    let outcome = parse_csv_raw(input).await?;
    report(&outcome, output)
}

async fn cmd_check(input: &Path, model: Model, output: Option<&Path>) -> CmdResult {
    match model {
        Model::Person => report(&parse_csv(input, &PersonRow).await?, output),
        Model::BasicPerson => report(&parse_csv(input, &BasicPersonRow).await?, output),
    }
}

async fn cmd_validate(
    input: &Path,
    schema_path: &Path,
    columns: Vec<String>,
    output: Option<&Path>,
) -> CmdResult {
    let mut schema = JsonSchemaRow::from_file(schema_path)?;
    if !columns.is_empty() {
        schema = schema.with_columns(columns);
    }

    let outcome = parse_csv(input, &schema).await?;
    report(&outcome, output)
}

/// Write the outcome as JSON and summarize a rejection on stderr.
fn report<T: Serialize>(outcome: &ParseOutcome<T>, output: Option<&Path>) -> CmdResult {
    if let Some(err) = outcome.error() {
        for line in rejection_summary(err) {
            eprintln!("{}", line);
        }
    }

    let json = serde_json::to_string_pretty(outcome)?;
    write_output(&json, output)?;

    Ok(outcome.is_data())
}

/// `Line N: message`, then any further issues of the same row.
fn rejection_summary(err: &ValidationError) -> Vec<String> {
    let mut lines = vec![err.to_string()];
    lines.extend(
        err.issues()
            .iter()
            .skip(1)
            .map(|issue| format!("   - {}", issue.message)),
    );
    lines
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn data_path(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
    }

    fn read_json(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_check_rejected_row_writes_error() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.json");

        let input = data_path("badclassroster.csv");
        let result = cmd_check(&input, Model::Person, Some(&out)).await;
        assert_eq!(exit_code(&result), 1);
        assert!(!result.unwrap());

        let json = read_json(&out);
        assert!(json.get("data").is_none());
        assert_eq!(json["error"]["line"], 3);
        assert_eq!(json["error"]["issues"][0]["message"], "Age must be an integer");
    }

    #[tokio::test]
    async fn test_check_valid_roster_writes_data() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.json");

        let input = data_path("classroster.csv");
        let result = cmd_check(&input, Model::Person, Some(&out)).await;
        assert_eq!(exit_code(&result), 0);

        let json = read_json(&out);
        assert!(json.get("error").is_none());
        assert_eq!(json["data"].as_array().unwrap().len(), 6);
        assert_eq!(json["data"][2]["class"], "csci 0320");
    }

    #[tokio::test]
    async fn test_parse_keeps_header() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("rows.json");

        let result = cmd_parse(&data_path("people.csv"), Some(&out)).await;
        assert_eq!(exit_code(&result), 0);
        assert_eq!(read_json(&out)["data"][0], serde_json::json!(["name", "age"]));
    }

    #[tokio::test]
    async fn test_validate_with_columns() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.json");
        let schema = Path::new(env!("CARGO_MANIFEST_DIR")).join("schemas/person-row.json");
        let columns = vec!["name".to_string(), "age".to_string(), "class".to_string()];

        let input = data_path("badclassroster4.csv");
        let result = cmd_validate(&input, &schema, columns, Some(&out)).await;
        assert_eq!(exit_code(&result), 1);
        assert_eq!(read_json(&out)["error"]["line"], 3);
    }

    #[tokio::test]
    async fn test_missing_input_exits_with_error() {
        let result = cmd_check(&data_path("absent.csv"), Model::BasicPerson, None).await;
        assert!(result.is_err());
        assert_eq!(exit_code(&result), 1);
    }

    #[test]
    fn test_rejection_summary() {
        use rowcheck::Issue;

        let err = ValidationError::from_issues(vec![
            Issue::custom(2, "Class department must be CSCI (case insensitive)"),
            Issue::custom(2, "Class number must be one of 0220, 0300, or 0320"),
        ])
        .unwrap()
        .at_line(4);

        assert_eq!(
            rejection_summary(&err),
            vec![
                "Line 4: Class department must be CSCI (case insensitive)".to_string(),
                "   - Class number must be one of 0220, 0300, or 0320".to_string(),
            ]
        );
    }
}
