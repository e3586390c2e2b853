//! Input loading: a file or stdin, optionally gzip-compressed.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;

/// Read the whole input into memory.
///
/// `path` of `None` (or `-`) reads stdin.
pub fn read_input(path: Option<&Path>, gzipped: bool) -> io::Result<Vec<u8>> {
    match path {
        Some(p) if p != Path::new("-") => {
            let file = BufReader::new(File::open(p)?);
            read_all(file, gzipped)
        }
        _ => read_all(io::stdin().lock(), gzipped),
    }
}

/// Drain a reader, decompressing if requested.
pub fn read_all<R: Read>(reader: R, gzipped: bool) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if gzipped {
        GzDecoder::new(reader).read_to_end(&mut buf)?;
    } else {
        let mut reader = reader;
        reader.read_to_end(&mut buf)?;
    }
    Ok(buf)
}
