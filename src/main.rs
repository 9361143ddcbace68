//! Command-line interface for xsd2ts

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use std::process::ExitCode;

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "xsd2ts")]
#[command(author, version, about = "Compile XSD/WSDL schemas into TypeScript declaration modules", long_about = None)]
struct Cli {
    /// Directory containing the .xsd and .wsdl source documents
    #[arg(value_name = "SOURCE_DIR")]
    source: PathBuf,

    /// Directory to write the generated .d.ts modules into
    #[arg(value_name = "OUT_DIR")]
    out: PathBuf,

    /// Print the declaration IR as JSON instead of writing files
    #[arg(long)]
    dump_ir: bool,
}

#[cfg(feature = "cli")]
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = if cli.dump_ir {
        dump_ir(&cli.source)
    } else {
        xsd2ts::pipeline::run(&cli.source, &cli.out).map(|written| {
            for path in &written {
                println!("{}", path.display());
            }
        })
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "cli")]
fn dump_ir(source: &std::path::Path) -> xsd2ts::Result<()> {
    let modules = xsd2ts::pipeline::compile(source)?;
    let json = serde_json::to_string_pretty(&modules)
        .map_err(|e| xsd2ts::Error::Other(e.to_string()))?;
    println!("{json}");
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("xsd2ts was built without the 'cli' feature");
    std::process::exit(1);
}
