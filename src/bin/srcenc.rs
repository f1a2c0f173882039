use std::error::Error;

use sarge::prelude::*;
use srcenc::IngestBuilder;
use srcenc::cli::SourceArgs;

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  srcenc --input <path>[,<path>...] [--fallback <encoding>] [--fast-fail]");
    eprintln!();
    eprintln!("Prints the encoding each file is decoded with.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -i, --input <paths>    Files to inspect (repeatable, comma separated)");
    eprintln!("  --fallback <encoding>  Encoding to try instead of the locale's");
    eprintln!("  --fast-fail            Stop at the first file that fails");
}

fn run() -> Result<bool, Box<dyn Error>> {
    let mut reader = ArgumentReader::new();

    let input_ref = reader.add::<SourceArgs>(tag::both('i', "input"));
    let fallback_ref = reader.add::<String>(tag::long("fallback"));
    let fast_fail_ref = reader.add::<bool>(tag::long("fast-fail"));

    let args = reader.parse()?;

    let mut sources = match input_ref.get(&args) {
        Some(Ok(v)) => v,
        Some(Err(_)) => unreachable!("SourceArgs parsing is infallible"),
        None => SourceArgs::default(),
    };
    if let Some(Ok(fallback)) = fallback_ref.get(&args) {
        sources = sources.with_fallback(fallback);
    }
    if let Some(Ok(true)) = fast_fail_ref.get(&args) {
        sources = sources.with_fast_fail();
    }

    if sources.is_empty() {
        return Err("missing --input".into());
    }

    let engine = IngestBuilder::new().with_source_args(&sources).build()?;

    let mut all_ok = true;
    for (id, outcome) in engine.resolve_all() {
        match outcome {
            Ok(encoding) => println!("{id}: {encoding}"),
            Err(e) => {
                all_ok = false;
                eprintln!("{e}");
                if sources.fast_fail {
                    break;
                }
            }
        }
    }

    Ok(all_ok)
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(2),
        Err(e) => {
            eprintln!("srcenc error: {e}");
            print_usage();
            std::process::exit(1);
        }
    }
}
