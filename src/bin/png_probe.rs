use std::fs::File;
use std::io::BufReader;

use anyhow::Context;
use png_probe::{check_signature, iter_chunks, report};

fn main() -> anyhow::Result<()> {
    let args: Vec<_> = std::env::args().skip(1).collect();
    if args.is_empty() {
        println!("png-probe - PNG chunk inspector");
        println!("usage: png-probe [-v] [--json] <path>");
        return Ok(());
    }
    let verbosity = if args.iter().any(|arg| arg == "-v") {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Error
    };
    pretty_env_logger::formatted_builder()
        .filter_level(verbosity)
        .init();

    let json_output = args.iter().any(|arg| arg == "--json");
    let file_name = args.last().unwrap();
    let file = File::open(file_name).context(format!("Failed to open {file_name}"))?;
    let mut input = BufReader::new(file);

    let signature = check_signature(&mut input)?;
    if !signature.is_valid() {
        log::warn!("signature bytes were {:?}", signature.bytes());
    }

    if json_output {
        let mut chunks = vec![];
        for chunk in iter_chunks(input) {
            chunks.push(chunk.context(format!("Failed while framing {file_name}"))?);
        }
        let now = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)?;
        let results = serde_json::json!({
            "date": now,
            "file": file_name,
            "signature_valid": signature.is_valid(),
            "chunks": chunks.iter().map(report::chunk_json).collect::<Vec<_>>(),
        });
        println!("{results}");
    } else {
        println!("Reading from file '{file_name}'");
        println!("{}", report::signature_line(file_name, &signature));
        for chunk in iter_chunks(input) {
            let chunk = chunk.context(format!("Failed while framing {file_name}"))?;
            println!("{}", report::chunk_block(&chunk));
        }
    }

    Ok(())
}
