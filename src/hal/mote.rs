//! SCM3C Mote Bring-up and Program Image

use super::bsp;
use crate::app::Mote;
use crate::config::image;
use crate::integrity::ImageSource;

/// The code SRAM, read back word by word
///
/// The region begins at address zero, so it is read with explicit loads
/// instead of being borrowed as a slice.
pub struct CodeSram {
    _private: (),
}

impl CodeSram {
    fn read_word(addr: usize) -> u32 {
        let value: u32;
        // SAFETY: `addr` is word aligned and inside the code SRAM, which is
        // always mapped and readable.
        unsafe {
            core::arch::asm!(
                "ldr {value}, [{addr}]",
                value = out(reg) value,
                addr = in(reg) addr,
                options(nostack, readonly, preserves_flags),
            );
        }
        value
    }
}

impl ImageSource for CodeSram {
    fn size(&self) -> usize {
        image::SIZE
    }

    fn read(&self, offset: usize, buf: &mut [u8]) {
        for (i, byte) in buf.iter_mut().enumerate() {
            let addr = image::BASE_ADDR + offset + i;
            let word = Self::read_word(addr & !0b11);
            *byte = word.to_le_bytes()[addr & 0b11];
        }
    }
}

/// The mote itself
pub struct Scm3cMote {
    code: CodeSram,
}

impl Scm3cMote {
    /// Take the mote
    #[must_use]
    pub const fn new() -> Self {
        Self {
            code: CodeSram { _private: () },
        }
    }
}

impl Default for Scm3cMote {
    fn default() -> Self {
        Self::new()
    }
}

impl Mote for Scm3cMote {
    type Image = CodeSram;

    fn initialize(&mut self) {
        // SAFETY: one-time scan-chain programming, called before any radio use.
        unsafe { bsp::initialize_mote() };
    }

    fn program_image(&self) -> &CodeSram {
        &self.code
    }
}
