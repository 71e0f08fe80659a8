//! Native binary archive format.
//!
//! An archive is a 32-byte header followed by a Postcard-encoded payload.
//! Floats are stored as raw little-endian bits, so every value (NaN payloads
//! and signed zeros included) reads back unchanged.
//!
//! # Format Structure
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                    Header (32 bytes)                       │
//! ├────────────────────────────────────────────────────────────┤
//! │           Payload (variable, optionally zstd)              │
//! └────────────────────────────────────────────────────────────┘
//! ```

use std::io::{Read, Write};

use bon::Builder;

use super::error::{ReadError, WriteError};
use super::schema::{PredictorKind, PredictorSchema};

// ============================================================================
// Constants
// ============================================================================

/// Magic bytes identifying a predictor archive.
pub const MAGIC: &[u8; 4] = b"LPRD";

/// Current format version (major).
pub const CURRENT_VERSION_MAJOR: u8 = 1;

/// Current format version (minor).
pub const CURRENT_VERSION_MINOR: u8 = 0;

/// Size of the format header in bytes.
pub const HEADER_SIZE: usize = 32;

// ============================================================================
// Options
// ============================================================================

/// Options for writing binary archives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct BinaryWriteOptions {
    /// Compress the payload with zstd. Needs the `compression` feature.
    #[builder(default)]
    pub compress: bool,
    /// zstd level (1-22).
    #[builder(default = 3)]
    pub compression_level: i32,
}

impl Default for BinaryWriteOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Options for reading binary archives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct BinaryReadOptions {
    /// Verify the payload CRC32 before decoding.
    #[builder(default = true)]
    pub verify_checksum: bool,
}

impl Default for BinaryReadOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

// ============================================================================
// Format Flags
// ============================================================================

/// Bitfield flags for format features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatFlags(u16);

impl FormatFlags {
    /// Payload is compressed with zstd.
    pub const COMPRESSED: u16 = 1 << 0;

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn contains(self, flag: u16) -> bool {
        (self.0 & flag) != 0
    }

    pub fn set(&mut self, flag: u16) {
        self.0 |= flag;
    }
}

// ============================================================================
// Format Header
// ============================================================================

/// 32-byte archive header.
///
/// # Layout
///
/// ```text
/// Offset  Size  Field
/// ------  ----  -----
/// 0       4     Magic ("LPRD")
/// 4       1     Version major
/// 5       1     Version minor
/// 6       1     Predictor kind
/// 7       1     Reserved
/// 8       2     Flags (bitfield)
/// 10      2     Reserved
/// 12      4     Payload size (bytes, as stored)
/// 16      4     CRC32 checksum of stored payload
/// 20      8     Dimension (number of weights)
/// 28      4     Reserved
/// ```
///
/// All integers are little-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatHeader {
    pub version_major: u8,
    pub version_minor: u8,
    pub kind: PredictorKind,
    pub flags: FormatFlags,
    pub payload_size: u32,
    pub checksum: u32,
    pub dimension: u64,
}

impl FormatHeader {
    /// Create a header with the current version and an empty payload.
    pub fn new(kind: PredictorKind, dimension: u64) -> Self {
        Self {
            version_major: CURRENT_VERSION_MAJOR,
            version_minor: CURRENT_VERSION_MINOR,
            kind,
            flags: FormatFlags::empty(),
            payload_size: 0,
            checksum: 0,
            dimension,
        }
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        buf[0..4].copy_from_slice(MAGIC);
        buf[4] = self.version_major;
        buf[5] = self.version_minor;
        buf[6] = self.kind as u8;
        buf[8..10].copy_from_slice(&self.flags.bits().to_le_bytes());
        buf[12..16].copy_from_slice(&self.payload_size.to_le_bytes());
        buf[16..20].copy_from_slice(&self.checksum.to_le_bytes());
        buf[20..28].copy_from_slice(&self.dimension.to_le_bytes());
        buf
    }

    pub fn from_bytes(buf: &[u8; HEADER_SIZE]) -> Result<Self, ReadError> {
        if &buf[0..4] != MAGIC {
            return Err(ReadError::NotAnArchive);
        }

        let version_major = buf[4];
        let version_minor = buf[5];
        if version_major > CURRENT_VERSION_MAJOR {
            return Err(ReadError::UnsupportedVersion {
                major: version_major,
                minor: version_minor,
            });
        }

        let kind = PredictorKind::from_u8(buf[6]).ok_or(ReadError::UnknownKind(buf[6]))?;
        let flags = FormatFlags::from_bits(u16::from_le_bytes([buf[8], buf[9]]));
        let payload_size = u32::from_le_bytes([buf[12], buf[13], buf[14], buf[15]]);
        let checksum = u32::from_le_bytes([buf[16], buf[17], buf[18], buf[19]]);

        let mut dimension = [0u8; 8];
        dimension.copy_from_slice(&buf[20..28]);
        let dimension = u64::from_le_bytes(dimension);

        Ok(Self {
            version_major,
            version_minor,
            kind,
            flags,
            payload_size,
            checksum,
            dimension,
        })
    }
}

/// Compute CRC32 checksum of data.
pub fn compute_checksum(data: &[u8]) -> u32 {
    crc32fast::hash(data)
}

/// Read up to `expected` bytes; fewer means the input was truncated.
///
/// The buffer grows with the data actually read, so a corrupt size field
/// cannot force a large allocation.
fn read_exactly<R: Read>(reader: &mut R, expected: usize) -> Result<Vec<u8>, ReadError> {
    let mut buf = Vec::new();
    reader.by_ref().take(expected as u64).read_to_end(&mut buf)?;
    if buf.len() < expected {
        return Err(ReadError::Truncated {
            expected,
            actual: buf.len(),
        });
    }
    Ok(buf)
}

/// Read and validate only the header of an archive.
pub fn read_header<R: Read>(reader: &mut R) -> Result<FormatHeader, ReadError> {
    let bytes = read_exactly(reader, HEADER_SIZE)?;
    let mut buf = [0u8; HEADER_SIZE];
    buf.copy_from_slice(&bytes);
    FormatHeader::from_bytes(&buf)
}

// ============================================================================
// Payload encoding
// ============================================================================

fn encode_payload(schema: &PredictorSchema) -> Result<Vec<u8>, WriteError> {
    match schema {
        PredictorSchema::LinearPredictor(record) => Ok(postcard::to_allocvec(record)?),
    }
}

fn decode_payload(kind: PredictorKind, bytes: &[u8]) -> Result<PredictorSchema, ReadError> {
    let (schema, rest) = match kind {
        PredictorKind::Linear => {
            let (record, rest) = postcard::take_from_bytes(bytes)?;
            (PredictorSchema::LinearPredictor(record), rest)
        }
    };
    if !rest.is_empty() {
        return Err(ReadError::CorruptPayload(format!(
            "{} trailing bytes after record",
            rest.len()
        )));
    }
    Ok(schema)
}

#[cfg(feature = "compression")]
fn compress(payload: Vec<u8>, options: &BinaryWriteOptions) -> Result<(Vec<u8>, bool), WriteError> {
    if !options.compress {
        return Ok((payload, false));
    }
    let level = options.compression_level.clamp(1, 22);
    let compressed = zstd::encode_all(payload.as_slice(), level).map_err(WriteError::Compression)?;
    Ok((compressed, true))
}

#[cfg(not(feature = "compression"))]
fn compress(payload: Vec<u8>, options: &BinaryWriteOptions) -> Result<(Vec<u8>, bool), WriteError> {
    if options.compress {
        return Err(WriteError::CompressionUnavailable);
    }
    Ok((payload, false))
}

/// Largest encoded payload a record of this kind and dimension can have.
fn max_payload_size(kind: PredictorKind, dimension: u64) -> u64 {
    // varint length prefix (at most 10 bytes), then fixed 8-byte floats
    match kind {
        PredictorKind::Linear => dimension.saturating_add(1).saturating_mul(8).saturating_add(10),
    }
}

#[cfg(feature = "compression")]
fn decompress(payload: Vec<u8>, limit: u64) -> Result<Vec<u8>, ReadError> {
    let decoder = zstd::stream::read::Decoder::new(payload.as_slice())
        .map_err(ReadError::Decompression)?;
    let mut out = Vec::new();
    decoder
        .take(limit.saturating_add(1))
        .read_to_end(&mut out)
        .map_err(ReadError::Decompression)?;
    if out.len() as u64 > limit {
        return Err(ReadError::CorruptPayload(format!(
            "decompressed payload exceeds {limit} bytes"
        )));
    }
    Ok(out)
}

#[cfg(not(feature = "compression"))]
fn decompress(_payload: Vec<u8>, _limit: u64) -> Result<Vec<u8>, ReadError> {
    Err(ReadError::CompressionUnavailable)
}

// ============================================================================
// Archive read/write
// ============================================================================

pub(crate) fn write_archive<W: Write>(
    writer: &mut W,
    schema: &PredictorSchema,
    options: &BinaryWriteOptions,
) -> Result<(), WriteError> {
    let payload = encode_payload(schema)?;
    let raw_size = payload.len();
    let (payload, compressed) = compress(payload, options)?;

    let mut header = FormatHeader::new(schema.kind(), schema.dimension() as u64);
    header.payload_size =
        u32::try_from(payload.len()).map_err(|_| WriteError::PayloadTooLarge(payload.len()))?;
    header.checksum = compute_checksum(&payload);
    if compressed {
        header.flags.set(FormatFlags::COMPRESSED);
    }

    writer.write_all(&header.to_bytes())?;
    writer.write_all(&payload)?;

    log::debug!(
        "wrote {} archive: dim {}, payload {} bytes ({} raw, compressed: {})",
        schema.kind().type_name(),
        header.dimension,
        header.payload_size,
        raw_size,
        compressed
    );
    Ok(())
}

pub(crate) fn read_archive<R: Read>(
    reader: &mut R,
    expected: Option<PredictorKind>,
    options: &BinaryReadOptions,
) -> Result<PredictorSchema, ReadError> {
    let header = read_header(reader)?;
    if let Some(expected) = expected {
        if expected != header.kind {
            return Err(ReadError::TypeMismatch {
                expected,
                actual: header.kind,
            });
        }
    }

    let payload = read_exactly(reader, header.payload_size as usize)?;

    if options.verify_checksum {
        let actual = compute_checksum(&payload);
        if actual != header.checksum {
            return Err(ReadError::ChecksumMismatch {
                expected: header.checksum,
                actual,
            });
        }
    }

    let payload = if header.flags.contains(FormatFlags::COMPRESSED) {
        decompress(payload, max_payload_size(header.kind, header.dimension))?
    } else {
        payload
    };

    let schema = decode_payload(header.kind, &payload)?;
    if schema.dimension() as u64 != header.dimension {
        return Err(ReadError::CorruptPayload(format!(
            "header declares dimension {} but record has {}",
            header.dimension,
            schema.dimension()
        )));
    }

    log::debug!(
        "read {} archive: dim {}, format {}.{}",
        header.kind.type_name(),
        header.dimension,
        header.version_major,
        header.version_minor
    );
    Ok(schema)
}

// ============================================================================
// Tests
// ============================================================================
