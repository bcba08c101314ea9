use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::Result;

/// Opens a file for reading, decompressing it if the name ends in `.gz`.
///
/// The path `-` reads standard input.
pub fn open_input(path: &Path) -> Result<Box<dyn Read>>
{
    if path == Path::new("-") {
        return Ok(Box::new(io::stdin()));
    }
    let f = BufReader::new(File::open(path)?);
    if path.extension().map_or(false, |e| e == "gz") {
        Ok(Box::new(GzDecoder::new(f)))
    } else {
        Ok(Box::new(f))
    }
}

/// Creates a file for writing. The path `-` writes standard output.
pub fn open_output(path: &Path) -> Result<Box<dyn Write>>
{
    if path == Path::new("-") {
        return Ok(Box::new(io::stdout()));
    }
    Ok(Box::new(BufWriter::new(File::create(path)?)))
}
