//! HTTP retrieval of the remote stylesheet and font binary.

use std::{
    fs::File,
    io::{self, BufWriter, Read, Write},
    path::Path,
    time::Duration,
};

use brotli::Decompressor;
use flate2::read::{GzDecoder, ZlibDecoder};
use log::debug;
use reqwest::{
    blocking::{Client, Response},
    header::CONTENT_ENCODING,
};

use crate::{
    config::BROWSER_HEADERS,
    error::{Error, Result, Stage},
};

const BUFFER_SIZE: usize = 8 * 1024;

/// Compression declared by a response's `Content-Encoding` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEncoding {
    Identity,
    Gzip,
    Deflate,
    Brotli,
}

impl ContentEncoding {
    /// Unknown or missing encodings are passed through untouched.
    pub fn from_header(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("gzip") || v.eq_ignore_ascii_case("x-gzip") => {
                Self::Gzip
            }
            Some(v) if v.eq_ignore_ascii_case("deflate") => Self::Deflate,
            Some(v) if v.eq_ignore_ascii_case("br") => Self::Brotli,
            _ => Self::Identity,
        }
    }

    /// Wrap `reader` so that reading from it yields decoded bytes.
    pub fn decoder<'a, R: Read + 'a>(self, reader: R) -> Box<dyn Read + 'a> {
        match self {
            Self::Identity => Box::new(reader),
            Self::Gzip => Box::new(GzDecoder::new(reader)),
            Self::Deflate => Box::new(ZlibDecoder::new(reader)),
            Self::Brotli => Box::new(Decompressor::new(reader, BUFFER_SIZE)),
        }
    }

    /// Decode a whole body into text.
    pub fn decode_to_string(self, reader: impl Read) -> io::Result<String> {
        let mut bytes = Vec::new();
        self.decoder(reader).read_to_end(&mut bytes)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Blocking HTTP client for the two fetch stages.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Build the client. Setup failures are [`Error::Client`], never a fetch stage.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build().map_err(Error::Client)?;
        Ok(Self { client })
    }

    fn get(&self, url: &str, stage: Stage, browser: bool) -> Result<Response> {
        let mut request = self.client.get(url);
        if browser {
            for (name, value) in BROWSER_HEADERS {
                request = request.header(*name, *value);
            }
        }
        let response = request.send().map_err(|source| Error::Network { stage, source })?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus { stage, status: status.as_u16() });
        }
        Ok(response)
    }

    /// Fetch the stylesheet as a browser would and return its decoded text.
    pub fn fetch_stylesheet(&self, url: &str) -> Result<String> {
        let response = self.get(url, Stage::Stylesheet, true)?;
        let encoding = ContentEncoding::from_header(
            response.headers().get(CONTENT_ENCODING).and_then(|v| v.to_str().ok()),
        );
        debug!("Stylesheet response encoding: {encoding:?}");
        encoding
            .decode_to_string(response)
            .map_err(|source| Error::Body { stage: Stage::Stylesheet, source })
    }

    /// Stream the font at `url` into `path`, returning the number of bytes written.
    pub fn download_font(&self, url: &str, path: &Path) -> Result<u64> {
        let mut response = self.get(url, Stage::Font, false)?;
        let file = File::create(path).map_err(|e| Error::fs("create", path, e))?;
        let mut writer = BufWriter::new(file);

        let mut buffer = [0u8; BUFFER_SIZE];
        let mut written = 0u64;
        loop {
            let n = match response.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) => return Err(Error::Body { stage: Stage::Font, source }),
            };
            writer.write_all(&buffer[..n]).map_err(|e| Error::fs("write", path, e))?;
            written += n as u64;
        }
        writer.flush().map_err(|e| Error::fs("write", path, e))?;
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use flate2::{
        Compression,
        write::{GzEncoder, ZlibEncoder},
    };

    use super::*;

    const CSS: &str = "@font-face { src: url(https://example.com/a.ttf) format('truetype'); }";

    #[test]
    fn test_from_header() {
        assert_eq!(ContentEncoding::from_header(Some("gzip")), ContentEncoding::Gzip);
        assert_eq!(ContentEncoding::from_header(Some("GZIP")), ContentEncoding::Gzip);
        assert_eq!(ContentEncoding::from_header(Some("br")), ContentEncoding::Brotli);
        assert_eq!(ContentEncoding::from_header(Some("deflate")), ContentEncoding::Deflate);
        assert_eq!(ContentEncoding::from_header(Some("zstd")), ContentEncoding::Identity);
        assert_eq!(ContentEncoding::from_header(None), ContentEncoding::Identity);
    }

    #[test]
    fn test_identity_passthrough() {
        let text = ContentEncoding::Identity.decode_to_string(CSS.as_bytes()).unwrap();
        assert_eq!(text, CSS);
    }

    #[test]
    fn test_decode_gzip() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(CSS.as_bytes()).unwrap();
        let body = encoder.finish().unwrap();

        let text = ContentEncoding::Gzip.decode_to_string(Cursor::new(body)).unwrap();
        assert_eq!(text, CSS);
    }

    #[test]
    fn test_decode_deflate() {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(CSS.as_bytes()).unwrap();
        let body = encoder.finish().unwrap();

        let text = ContentEncoding::Deflate.decode_to_string(Cursor::new(body)).unwrap();
        assert_eq!(text, CSS);
    }

    #[test]
    fn test_decode_brotli() {
        let mut body = Vec::new();
        {
            let mut writer = brotli::CompressorWriter::new(&mut body, 4096, 11, 22);
            writer.write_all(CSS.as_bytes()).unwrap();
        }

        let text = ContentEncoding::Brotli.decode_to_string(Cursor::new(body)).unwrap();
        assert_eq!(text, CSS);
    }

    #[test]
    fn test_client_setup_is_not_a_fetch() {
        // Building the client makes no request, so no stage can fail yet.
        Fetcher::new(Duration::from_secs(5)).unwrap();
        let err = Fetcher::new(Duration::from_secs(5))
            .unwrap()
            .fetch_stylesheet("http://127.0.0.1:9/css2")
            .unwrap_err();
        assert!(matches!(err, Error::Network { stage: Stage::Stylesheet, .. }), "{err}");
    }

    #[test]
    fn test_corrupt_gzip_fails() {
        let result = ContentEncoding::Gzip.decode_to_string(&b"not gzip at all"[..]);
        assert!(result.is_err());
    }
}
