//! Align two sequences from the command line.
//!
//! ```text
//! RUST_LOG=debug cargo run -p infoml-align --example align_pair -- HEAGAWGHEE PAWHEAE
//! ```

use std::process::ExitCode;

use infoml_align::{nwalign, swalign, GlobalParams, LocalParams};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (a, b) = match args.as_slice() {
        [a, b] => (a.as_bytes(), b.as_bytes()),
        _ => {
            eprintln!("usage: align_pair <seq-a> <seq-b>");
            return ExitCode::FAILURE;
        }
    };

    match swalign(a, b, &LocalParams::default()) {
        Ok(out) => {
            if let Some(aln) = out.alignment() {
                println!("local  score={} ident={:.1}%", aln.score, aln.ident);
                println!("  {}\n  {}", aln.aligned_a, aln.aligned_b);
            }
        }
        Err(e) => log::error!("local alignment failed: {e}"),
    }

    let params = GlobalParams::new().with_alphabet(infoml_align::Alphabet::AminoAcid);
    match nwalign(a, b, &params) {
        Ok(out) => {
            if let Some(aln) = out.alignment() {
                println!("semi   score={} ident={:.1}%", aln.score, aln.ident);
                println!("  {}\n  {}", aln.aligned_a, aln.aligned_b);
            }
        }
        Err(e) => log::error!("semiglobal alignment failed: {e}"),
    }

    ExitCode::SUCCESS
}
