use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use chem_domain::{Cid, InputKind, LookupError, LookupInput, PropertyKey};
use chem_lookup::{default_file_stem, disambiguation_prompt, export_image, export_text, AcceptFirst, Assembled,
                  Disambiguator, ExportOutcome, Lookup, LookupOutcome};
use chem_providers::PubChemClient;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const EXIT_FOUND: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_VALIDATION: i32 = 2;
const EXIT_CANCELLED: i32 = 3;

/// Busca un compuesto en PubChem y muestra fórmula, peso e IUPAC.
#[derive(Parser)]
#[command(name = "pubchem-lookup", about = "Look up a compound in the PubChem database")]
struct Cli {
    /// Compound name, or a CID when --cid is given
    query: String,
    /// Treat the query as a numeric CID
    #[arg(long)]
    cid: bool,
    /// Use the first CID without asking when a name has several matches
    #[arg(short, long)]
    yes: bool,
    /// Write the raw JSON payload (.txt); without PATH the search text names the file
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    export_txt: Option<Option<PathBuf>>,
    /// Write the structure image (.png); without PATH the search text names the file
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    export_png: Option<Option<PathBuf>>,
}

fn main() {
    // .env primero: puede traer RUST_LOG.
    chem_providers::config::init_dotenv();
    init_tracing();
    let cli = Cli::parse();
    process::exit(run(cli));
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter)
                                     .with_writer(io::stderr)
                                     .try_init();
}

/// Confirmación interactiva por stdin. Sólo "y" o "yes" aceptan.
struct StdinConfirm;

impl Disambiguator for StdinConfirm {
    fn confirm_first(&self, candidates: &[Cid]) -> bool {
        eprint!("{} [y/N] ", disambiguation_prompt(candidates));
        let _ = io::stderr().flush();
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        is_affirmative(&line)
    }
}

fn is_affirmative(answer: &str) -> bool { matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") }

fn run(cli: Cli) -> i32 {
    let kind = if cli.cid { InputKind::Identifier } else { InputKind::Name };
    let input = match LookupInput::parse(kind, &cli.query) {
        Ok(input) => input,
        Err(err) => {
            report_error(&err);
            return EXIT_VALIDATION;
        }
    };

    let lookup = Lookup::new(PubChemClient::from_env());
    let confirm: &dyn Disambiguator = if cli.yes { &AcceptFirst } else { &StdinConfirm };
    let assembled = match lookup.run(&input, confirm) {
        Ok(LookupOutcome::Found(assembled)) => assembled,
        Ok(LookupOutcome::Cancelled { candidates }) => {
            info!(candidates = candidates.len(), "lookup cancelled by user");
            eprintln!("Lookup cancelled");
            return EXIT_CANCELLED;
        }
        Err(err) => {
            info!(symbol = %err.symbol(), "lookup failed");
            report_error(&err);
            return if matches!(err, LookupError::Validation(_)) { EXIT_VALIDATION } else { EXIT_FAILURE };
        }
    };

    print!("{}", render(&assembled));

    // Sin flag equivale a diálogo cancelado.
    let stem = default_file_stem(&input);
    let txt_target = export_target(&cli.export_txt, &stem);
    let png_target = export_target(&cli.export_png, &stem);
    let exports = [export_text(&assembled.record, txt_target.as_deref()),
                   export_image(&assembled.record, png_target.as_deref())];
    let mut code = EXIT_FOUND;
    for result in exports {
        match result {
            Ok(ExportOutcome::Written(path)) => println!("Saved {}", path.display()),
            Ok(ExportOutcome::Cancelled) => {}
            Err(err) => {
                warn!(symbol = %err.symbol(), "export failed");
                report_error(&err);
                code = EXIT_FAILURE;
            }
        }
    }
    code
}

/// `--export-x` sin valor usa el texto buscado como nombre de archivo.
fn export_target(arg: &Option<Option<PathBuf>>, stem: &str) -> Option<PathBuf> {
    arg.as_ref().map(|path| path.clone().unwrap_or_else(|| Path::new(stem).to_path_buf()))
}

fn report_error(err: &LookupError) { eprintln!("Error: {}\n{}", err.symbol(), err.description()); }

/// Texto de presentación: encabezado, propiedades y avisos.
fn render(assembled: &Assembled) -> String {
    let record = &assembled.record;
    let mut out = format!("{}\n", record.heading());
    for key in PropertyKey::ALL {
        out.push_str(&format!("{}: {}\n", key.label(), record.properties().display_value(key)));
    }
    for warning in &assembled.warnings {
        out.push_str(&format!("Warning: {} ({})\n", warning.description(), warning.symbol()));
    }
    out.push_str(&format!("Source: {} at {}\n",
                          record.source(),
                          record.retrieved_at().format("%Y-%m-%d %H:%M:%S UTC")));
    out
}
