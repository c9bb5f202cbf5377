//! Line-based input of coordinate pairs from files or stdin.
//!
//! Each line holds one pair, the two coordinate strings separated by `;` or
//! a tab (the coordinate syntax itself uses commas). Blank lines and lines
//! starting with `#` are skipped.

use crate::types::ParseError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub enum FileReader {
    Stdin(BufReader<io::Stdin>),
    File(BufReader<File>),
    #[cfg(test)]
    Test(BufReader<io::Cursor<Vec<u8>>>),
}

impl FileReader {
    pub fn stdin() -> Self {
        FileReader::Stdin(BufReader::new(io::stdin()))
    }

    pub fn open(path: &Path) -> io::Result<Self> {
        Ok(FileReader::File(BufReader::new(File::open(path)?)))
    }

    #[cfg(test)]
    pub fn test(data: &str) -> Self {
        FileReader::Test(BufReader::new(io::Cursor::new(data.as_bytes().to_vec())))
    }
}

impl BufRead for FileReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            FileReader::Stdin(reader) => reader.fill_buf(),
            FileReader::File(reader) => reader.fill_buf(),
            #[cfg(test)]
            FileReader::Test(reader) => reader.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            FileReader::Stdin(reader) => reader.consume(amt),
            FileReader::File(reader) => reader.consume(amt),
            #[cfg(test)]
            FileReader::Test(reader) => reader.consume(amt),
        }
    }
}

impl io::Read for FileReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            FileReader::Stdin(reader) => reader.read(buf),
            FileReader::File(reader) => reader.read(buf),
            #[cfg(test)]
            FileReader::Test(reader) => reader.read(buf),
        }
    }
}

pub fn split_pair_line(line: &str) -> Result<(String, String), ParseError> {
    let fields: Vec<&str> = if line.contains(';') {
        line.split(';').collect()
    } else {
        line.split('\t').collect()
    };

    if fields.len() != 2 {
        return Err(ParseError::InvalidPairLine(format!(
            "expected 2 coordinates separated by ';' or tab, found {} in: {}",
            fields.len(),
            line
        )));
    }

    Ok((fields[0].trim().to_string(), fields[1].trim().to_string()))
}

/// Streams `(coordinate1, coordinate2)` pairs; errors carry the 1-based line
/// number of the offending line.
pub fn read_pairs(reader: FileReader) -> impl Iterator<Item = Result<(String, String), String>> {
    reader.lines().enumerate().filter_map(|(idx, line)| {
        let line_number = idx + 1;
        match line {
            Err(err) => Some(Err(format!("line {}: {}", line_number, err))),
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    return None;
                }
                Some(split_pair_line(trimmed).map_err(|err| format!("line {}: {}", line_number, err)))
            }
        }
    })
}
