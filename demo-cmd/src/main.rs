use std::{
    fs,
    path::{Path, PathBuf},
};

use blockgen::{generate, schema_for, CodeStyle, ComponentKind, GenerationRequest, RequestFile};
use blockgen_common::error::{Error, Result};
use clap::Parser;
use log::{info, LevelFilter};

/// Generate a VHDL design file from a request file.
#[derive(Parser, Debug)]
#[command(name = "blockgen", version)]
struct Cli {
    /// Path to a TOML request file.
    #[arg(required_unless_present = "list")]
    request: Option<PathBuf>,

    /// Output file, or directory to write `<entity>.vhdl` into.
    #[arg(short, long, conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Print the design instead of writing it to a file.
    #[arg(long)]
    stdout: bool,

    /// Accept designs above the resource thresholds of their component.
    #[arg(long)]
    accept_large: bool,

    /// List the component catalog and exit.
    #[arg(long)]
    list: bool,

    /// Enable debug-level logging.
    #[arg(short, long)]
    verbose: bool,
}

fn list_components() {
    for kind in ComponentKind::ALL {
        println!("{:<16}{}", kind.as_str(), kind.description());
        for parameter in schema_for(kind).parameters {
            println!("    {:<12}{}, {}", parameter.name, parameter.label, parameter.kind);
        }
    }
    let styles: Vec<&str> = CodeStyle::ALL.iter().map(|s| s.as_str()).collect();
    println!("\nStyles: {}", styles.join(", "));
}

fn read_request(path: &Path) -> Result<GenerationRequest> {
    let source = fs::read_to_string(path)
        .map_err(|err| Error::FileIOError(format!("{}: {}", path.display(), err)))?;
    let file: RequestFile = toml::from_str(&source)
        .map_err(|err| Error::ParsingError(format!("{}: {}", path.display(), err)))?;
    Ok(file.into())
}

fn output_path(output: Option<PathBuf>, file_name: String) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(file_name),
        Some(path) => path,
        None => PathBuf::from(file_name),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .try_init()?;

    if cli.list {
        list_components();
        return Ok(());
    }
    let path = cli
        .request
        .ok_or_else(|| Error::CLIError("missing request file".to_string()))?;

    let mut request = read_request(&path)?;
    request.accept_large_resources |= cli.accept_large;
    let artifact = generate(&request)?;

    if cli.stdout {
        print!("{}", artifact);
    } else {
        let target = output_path(cli.output, artifact.file_name());
        fs::write(&target, artifact.text())?;
        info!("wrote {}", target.display());
    }
    Ok(())
}
