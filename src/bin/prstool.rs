//! Minimal file compressor/decompressor around the PRS codec.
//!
//! The PRS stream itself carries no length field, so compressed files are
//! wrapped in a tiny container: a little-endian `u32` holding the original
//! size, followed by the raw stream. The codec core never sees the header.

use std::env;
use std::fs;
use std::io::Cursor;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use prstools::{Compressor, PrsCompressor, PrsDecompressor};

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let (mode, input_path, output_path) = match args.as_slice() {
        [_, mode, input, output] => (mode.as_str(), input.as_str(), output.as_str()),
        _ => bail!("Usage: prstool [-c|-d] INPUT_FILE OUTPUT_FILE"),
    };

    let data = fs::read(input_path).with_context(|| format!("reading {}", input_path))?;

    let output = match mode {
        "-c" => {
            let compressed = PrsCompressor::new().compress(&data)?;
            let mut out = Vec::with_capacity(4 + compressed.len());
            out.write_u32::<LittleEndian>(data.len() as u32)?;
            out.extend_from_slice(&compressed);
            out
        }
        "-d" => {
            let mut header = Cursor::new(data.as_slice());
            let raw_len = header
                .read_u32::<LittleEndian>()
                .context("reading container header")? as usize;
            let report = PrsDecompressor::new().decompress_with_report(&data[4..], raw_len)?;
            for notification in &report.notifications {
                eprintln!("{}", notification);
            }
            report.data
        }
        _ => bail!("Usage: prstool [-c|-d] INPUT_FILE OUTPUT_FILE"),
    };

    fs::write(output_path, &output).with_context(|| format!("writing {}", output_path))?;
    println!("Wrote {} bytes.", output.len());
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("prstool: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
