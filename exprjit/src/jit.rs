//! Executable memory and the call boundary into generated code.
//!
//! [`MachineCode`] is plain bytes. [`MachineCode::load`] copies them into a
//! fresh anonymous mapping and then flips it to read+execute, so the region is
//! never writable and executable at the same time. The mapping is released
//! when the [`JitFunction`] is dropped.
use crate::{Bindings, ExprError};
use memmap2::{Mmap, MmapMut};
use std::fmt;

/// A finished routine, ready to be loaded.
#[derive(Clone, PartialEq, Eq)]
pub struct MachineCode {
    bytes: Vec<u8>,
    entry: usize,
}

impl MachineCode {
    pub(crate) fn new(bytes: Vec<u8>, entry: usize) -> Self {
        Self { bytes, entry }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Offset of the first instruction to execute.
    pub fn entry(&self) -> usize {
        self.entry
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Lower-case hex of the whole routine, fault stub included.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Maps the code into executable memory.
    pub fn load(&self) -> Result<JitFunction, ExprError> {
        if !cfg!(target_arch = "x86_64") {
            return Err(ExprError::UnsupportedTarget);
        }
        if self.entry >= self.bytes.len() {
            return Err(ExprError::Memory(std::io::Error::other(format!(
                "entry {} outside {} bytes of code",
                self.entry,
                self.bytes.len()
            ))));
        }

        let mut map = MmapMut::map_anon(self.bytes.len())?;
        map.copy_from_slice(&self.bytes);
        let map = map.make_exec()?;
        log::debug!(
            "mapped {} bytes of code at {:p}",
            self.bytes.len(),
            map.as_ptr()
        );
        Ok(JitFunction {
            map,
            entry: self.entry,
        })
    }
}

impl fmt::Debug for MachineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MachineCode")
            .field("entry", &self.entry)
            .field("bytes", &self.to_hex())
            .finish()
    }
}

/// A loaded routine: `fn(x, y, z) -> i64` plus a division-by-zero channel.
pub struct JitFunction {
    map: Mmap,
    entry: usize,
}

impl JitFunction {
    /// Runs the routine with `bindings` as `x`, `y`, `z`.
    #[cfg(target_arch = "x86_64")]
    pub fn call(&self, bindings: Bindings) -> Result<i64, ExprError> {
        type Entry = unsafe extern "sysv64" fn(i64, i64, i64, *mut i64) -> i64;

        let mut fault: i64 = 0;
        // SAFETY: the mapping is read+execute and holds a complete routine
        // produced by `Assembler`, whose entry point follows the `Entry`
        // signature, keeps the stack balanced and only writes through `fault`.
        let value = unsafe {
            let entry: Entry = std::mem::transmute(self.map.as_ptr().add(self.entry));
            entry(bindings.x, bindings.y, bindings.z, &mut fault)
        };
        if fault != 0 {
            return Err(ExprError::DivisionByZero);
        }
        Ok(value)
    }

    #[cfg(not(target_arch = "x86_64"))]
    pub fn call(&self, _bindings: Bindings) -> Result<i64, ExprError> {
        Err(ExprError::UnsupportedTarget)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl fmt::Debug for JitFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JitFunction")
            .field("addr", &self.map.as_ptr())
            .field("len", &self.map.len())
            .field("entry", &self.entry)
            .finish()
    }
}
