use std::{error, fs, io, path};
use std::io::BufRead;

/// Load a list of outlines from a file: one `x y` pair per line, outlines separated by blank lines
pub fn load_shapes<P: AsRef<path::Path>>(path: P) -> Result<Vec<Vec<[f64; 2]>>, Box<dyn error::Error>> {
    let mut output = Vec::new();
    let mut current = Vec::new();
    let f = fs::File::open(path)?;
    for line in io::BufReader::new(f).lines() {
        let line = line?;
        if line.starts_with('#') {
            continue;
        }
        let mut chunks = line.split_ascii_whitespace();
        if let Some(x) = chunks.next() {
            let x = x.parse::<f64>()?;
            let y = chunks.next().ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "Invalid input file"))?.parse::<f64>()?;
            current.push([x, y]);
        } else if !current.is_empty() {
            output.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        output.push(current);
    }

    Ok(output)
}
