//! PNG output for rendered canvases.
//!
//! Writes the smallest valid PNG layout: signature, IHDR, a single IDAT
//! holding one zlib stream of unfiltered scanlines, and IEND. Pixels are
//! 8-bit truecolour with alpha (colour type 6), never interlaced.

use std::fs;
use std::io::Write;
use std::path::Path;

use flate2::write::ZlibEncoder;
use flate2::{Compression, Crc};

use crate::error::{CanvasError, Result};

use super::PixelCanvas;

/// The fixed 8-byte PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// IHDR bit depth: 8 bits per channel.
pub const BIT_DEPTH: u8 = 8;

/// IHDR colour type: truecolour with alpha.
pub const COLOUR_TYPE_RGBA: u8 = 6;

/// Scanline filter type 0 ("None").
pub const FILTER_NONE: u8 = 0;

/// A PNG chunk: a four-letter type tag and its payload.
///
/// Length and CRC are derived when the chunk is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngChunk {
    tag: [u8; 4],
    payload: Vec<u8>,
}

impl PngChunk {
    pub fn new(tag: [u8; 4], payload: Vec<u8>) -> Self {
        Self { tag, payload }
    }

    /// Image header for an RGBA8 canvas.
    pub fn ihdr(width: u32, height: u32) -> Self {
        let mut payload = Vec::with_capacity(13);
        payload.extend_from_slice(&width.to_be_bytes());
        payload.extend_from_slice(&height.to_be_bytes());
        payload.push(BIT_DEPTH);
        payload.push(COLOUR_TYPE_RGBA);
        payload.push(0); // compression: deflate
        payload.push(0); // filter method: adaptive
        payload.push(0); // interlace: none
        Self::new(*b"IHDR", payload)
    }

    /// Image data chunk wrapping an already-compressed zlib stream.
    pub fn idat(zlib: Vec<u8>) -> Self {
        Self::new(*b"IDAT", zlib)
    }

    /// Empty end-of-image marker.
    pub fn iend() -> Self {
        Self::new(*b"IEND", Vec::new())
    }

    pub fn tag(&self) -> &[u8; 4] {
        &self.tag
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// CRC-32 over the type tag followed by the payload.
    pub fn crc(&self) -> u32 {
        let mut crc = Crc::new();
        crc.update(&self.tag);
        crc.update(&self.payload);
        crc.sum()
    }

    /// Append `length | tag | payload | crc` to `out`, integers big-endian.
    pub fn write_to(&self, out: &mut Vec<u8>) -> Result<()> {
        let len = u32::try_from(self.payload.len()).map_err(|_| CanvasError::Encoding {
            message: format!(
                "{} chunk payload of {} bytes exceeds the PNG chunk limit",
                String::from_utf8_lossy(&self.tag),
                self.payload.len()
            ),
        })?;

        out.reserve(self.payload.len() + 12);
        out.extend_from_slice(&len.to_be_bytes());
        out.extend_from_slice(&self.tag);
        out.extend_from_slice(&self.payload);
        out.extend_from_slice(&self.crc().to_be_bytes());
        Ok(())
    }
}

/// Encode a canvas as PNG bytes.
pub fn encode_png(canvas: &PixelCanvas) -> Result<Vec<u8>> {
    let (width, height) = canvas.size();
    let idat = compress(&filtered_scanlines(canvas))?;

    let mut out = Vec::with_capacity(PNG_SIGNATURE.len() + idat.len() + 64);
    out.extend_from_slice(&PNG_SIGNATURE);
    for chunk in [
        PngChunk::ihdr(width, height),
        PngChunk::idat(idat),
        PngChunk::iend(),
    ] {
        chunk.write_to(&mut out)?;
    }

    Ok(out)
}

/// Encode a canvas and write it to `path`.
pub fn write_png(canvas: &PixelCanvas, path: &Path) -> Result<()> {
    let bytes = encode_png(canvas)?;
    fs::write(path, bytes).map_err(|e| CanvasError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })
}

/// Raw image data: each row prefixed with the "None" filter byte.
fn filtered_scanlines(canvas: &PixelCanvas) -> Vec<u8> {
    let bytes = canvas.as_bytes();
    let mut raw = Vec::with_capacity(bytes.len() + canvas.height() as usize);
    for row in canvas.rows() {
        raw.push(FILTER_NONE);
        raw.extend_from_slice(row);
    }
    raw
}

/// Compress `raw` into a single zlib stream.
fn compress(raw: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(raw)
        .and_then(|_| encoder.finish())
        .map_err(|e| CanvasError::Encoding {
            message: format!("zlib compression failed: {}", e),
        })
}
