//! Generic Buffered Reader
use std::fs::File;
use std::io::BufReader;

#[cfg(feature = "flate2")]
use flate2::read::GzDecoder;

#[derive(Debug)]
pub enum BufferedReader {
    /// Readable RINEX
    PlainFile(BufReader<File>),
    /// Gzip compressed RINEX
    #[cfg(feature = "flate2")]
    GzFile(BufReader<GzDecoder<File>>),
}

impl BufferedReader {
    pub fn new(path: &str) -> std::io::Result<BufferedReader> {
        let f = File::open(path)?;
        if path.ends_with(".gz") {
            // --> gzip encoded
            #[cfg(feature = "flate2")]
            {
                return Ok(Self::GzFile(BufReader::new(GzDecoder::new(f))));
            }
            #[cfg(not(feature = "flate2"))]
            {
                let _ = f;
                return Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "gzip compressed data requires the \"flate2\" feature",
                ));
            }
        }
        Ok(Self::PlainFile(BufReader::new(f)))
    }
}

impl std::io::Read for BufferedReader {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, std::io::Error> {
        match self {
            Self::PlainFile(h) => h.read(buf),
            #[cfg(feature = "flate2")]
            Self::GzFile(h) => h.read(buf),
        }
    }
}
