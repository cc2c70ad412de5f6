//! Program Image Integrity
//!
//! The optical programmer appends a footer to the 64 KiB code region: the
//! number of code bytes and their checksum. At boot the checksum is
//! recomputed over the loaded code and compared against the footer.
//!
//! ```text
//! 0x0000 ┌──────────────────────┐
//!        │ code (code_length)   │
//!        ├──────────────────────┤
//!        │ unused               │
//! 0xFFF8 ├──────────────────────┤
//!        │ code_length (u32 LE) │
//! 0xFFFC ├──────────────────────┤
//!        │ crc (u32 LE)         │
//! 0x10000└──────────────────────┘
//! ```

use core::fmt;

use crate::config::image;

/// Reflected CRC-32 polynomial
const CRC32_POLY: u32 = 0xEDB8_8320;

/// Byte-indexed lookup table for [`crc32`]
static CRC32_TABLE: [u32; 256] = build_table();

const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut byte = 0;
    while byte < 256 {
        #[allow(clippy::cast_possible_truncation)]
        let mut crc = byte as u32;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 == 1 { (crc >> 1) ^ CRC32_POLY } else { crc >> 1 };
            bit += 1;
        }
        table[byte] = crc;
        byte += 1;
    }
    table
}

/// Continue a running CRC-32 over more bytes (no pre/post inversion)
#[must_use]
pub fn crc32_update(mut crc: u32, data: &[u8]) -> u32 {
    for &byte in data {
        crc = (crc >> 8) ^ CRC32_TABLE[((crc ^ u32::from(byte)) & 0xFF) as usize];
    }
    crc
}

/// CRC-32 of `data` as written by the programmer
///
/// Init `0xFFFF_FFFF`, reflected, final complement.
#[must_use]
pub fn crc32(data: &[u8]) -> u32 {
    !crc32_update(0xFFFF_FFFF, data)
}

/// Integrity check failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntegrityError {
    /// Image is too short to hold the footer
    FooterMissing {
        /// Bytes available
        len: usize,
    },
    /// Recorded code length runs into the footer
    LengthOutOfRange {
        /// Recorded length
        length: u32,
        /// Largest valid length
        max: u32,
    },
    /// Computed checksum differs from the recorded one
    CrcMismatch {
        /// Checksum in the footer
        expected: u32,
        /// Checksum of the loaded code
        computed: u32,
    },
}

impl fmt::Display for IntegrityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FooterMissing { len } => write!(f, "image of {len} bytes has no footer"),
            Self::LengthOutOfRange { length, max } => {
                write!(f, "code length {length} exceeds {max}")
            }
            Self::CrcMismatch { expected, computed } => {
                write!(f, "CRC mismatch: expected 0x{expected:08X}, computed 0x{computed:08X}")
            }
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for IntegrityError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::FooterMissing { len } => defmt::write!(f, "no footer ({} bytes)", len),
            Self::LengthOutOfRange { length, max } => {
                defmt::write!(f, "code length {} > {}", length, max);
            }
            Self::CrcMismatch { expected, computed } => {
                defmt::write!(f, "CRC {=u32:#x} != {=u32:#x}", computed, expected);
            }
        }
    }
}

/// Readable program image
///
/// Implemented for byte slices, and on target for the code SRAM itself
/// (which starts at address zero and cannot be borrowed as a slice).
pub trait ImageSource {
    /// Number of readable bytes
    fn size(&self) -> usize;

    /// Copy `buf.len()` bytes starting at `offset`; the range is in bounds
    fn read(&self, offset: usize, buf: &mut [u8]);
}

impl ImageSource for [u8] {
    fn size(&self) -> usize {
        self.len()
    }

    fn read(&self, offset: usize, buf: &mut [u8]) {
        buf.copy_from_slice(&self[offset..offset + buf.len()]);
    }
}

/// Bytes fed to the checksum per read
const CHUNK_LEN: usize = 256;

/// Footer written after the code region
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageFooter {
    /// Number of code bytes covered by the checksum
    pub code_length: u32,
    /// Expected checksum
    pub crc: u32,
}

impl ImageFooter {
    /// Read the footer from a full code region
    ///
    /// # Errors
    ///
    /// [`IntegrityError::FooterMissing`] if the image is shorter than the
    /// code region.
    pub fn read<S: ImageSource + ?Sized>(image: &S) -> Result<Self, IntegrityError> {
        if image.size() < image::CRC_OFFSET + 4 {
            return Err(IntegrityError::FooterMissing { len: image.size() });
        }

        let word = |offset: usize| {
            let mut bytes = [0u8; 4];
            image.read(offset, &mut bytes);
            u32::from_le_bytes(bytes)
        };

        Ok(Self {
            code_length: word(image::CODE_LENGTH_OFFSET),
            crc: word(image::CRC_OFFSET),
        })
    }

    /// Write this footer into a code region (used by image tooling and tests)
    ///
    /// # Errors
    ///
    /// [`IntegrityError::FooterMissing`] if `image` is shorter than the
    /// code region.
    pub fn write(&self, image: &mut [u8]) -> Result<(), IntegrityError> {
        let len = image.len();
        let footer = image
            .get_mut(image::CODE_LENGTH_OFFSET..image::CRC_OFFSET + 4)
            .ok_or(IntegrityError::FooterMissing { len })?;
        footer[..4].copy_from_slice(&self.code_length.to_le_bytes());
        footer[4..].copy_from_slice(&self.crc.to_le_bytes());
        Ok(())
    }

    /// Build the footer matching the first `code_length` bytes of `image`
    ///
    /// # Errors
    ///
    /// [`IntegrityError::LengthOutOfRange`] if the code would overlap the
    /// footer or exceed `image`.
    pub fn for_code<S: ImageSource + ?Sized>(
        image: &S,
        code_length: u32,
    ) -> Result<Self, IntegrityError> {
        Ok(Self {
            code_length,
            crc: code_crc(image, code_length)?,
        })
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for ImageFooter {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "len={} crc={=u32:#x}", self.code_length, self.crc);
    }
}

/// CRC-32 over the first `code_length` bytes, read in chunks
fn code_crc<S: ImageSource + ?Sized>(image: &S, code_length: u32) -> Result<u32, IntegrityError> {
    let max = image.size().min(image::CODE_LENGTH_OFFSET);
    #[allow(clippy::cast_possible_truncation)]
    let out_of_range = IntegrityError::LengthOutOfRange {
        length: code_length,
        max: max as u32,
    };
    let len = usize::try_from(code_length).map_err(|_| out_of_range)?;
    if len > max {
        return Err(out_of_range);
    }

    let mut chunk = [0u8; CHUNK_LEN];
    let mut crc = 0xFFFF_FFFF;
    let mut offset = 0;
    while offset < len {
        let n = CHUNK_LEN.min(len - offset);
        image.read(offset, &mut chunk[..n]);
        crc = crc32_update(crc, &chunk[..n]);
        offset += n;
    }
    Ok(!crc)
}

/// Check the loaded program against its footer
///
/// # Errors
///
/// Any [`IntegrityError`]; the caller is expected to halt.
pub fn verify_image<S: ImageSource + ?Sized>(image: &S) -> Result<ImageFooter, IntegrityError> {
    let footer = ImageFooter::read(image)?;
    let computed = code_crc(image, footer.code_length)?;

    if computed == footer.crc {
        Ok(footer)
    } else {
        Err(IntegrityError::CrcMismatch {
            expected: footer.crc,
            computed,
        })
    }
}
