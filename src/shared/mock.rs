//! In-memory stand-in for the emulator, used by unit tests.
use core::fmt::Error;
use asr::{Address, Address32};

use super::{GuestMemory, Host};

const HOST_BASE: u64 = 0x1_0000_0000;

/// A host that maps one window of guest memory onto a byte buffer.
pub struct MockHost {
    title_id: u32,
    title_version: String,
    guest_base: u32,
    ram: Vec<u8>,
    writes: usize,
    read_only: Option<u32>,
}

impl MockHost {
    /// Creates a host running the given title with nothing mapped.
    pub fn new(title_id: u32, title_version: &str) -> Self {
        Self {
            title_id,
            title_version: title_version.to_owned(),
            guest_base: 0,
            ram: Vec::new(),
            writes: 0,
            read_only: None,
        }
    }

    /// Maps `len` zeroed bytes of guest memory starting at `guest_base`.
    pub fn with_mapping(mut self, guest_base: u32, len: usize) -> Self {
        self.guest_base = guest_base;
        self.ram = vec![0; len];
        self
    }

    /// Makes every write to the given guest address fail.
    pub fn with_read_only(mut self, guest: u32) -> Self {
        self.read_only = Some(guest);
        self
    }

    pub fn set_title_id(&mut self, title_id: u32) {
        self.title_id = title_id;
    }

    /// Stores a big-endian u16 at a guest address.
    pub fn set_u16(&mut self, guest: u32, value: u16) {
        let offset = self.offset_of(guest);
        self.ram[offset..offset + 2].copy_from_slice(&value.to_be_bytes());
    }

    /// Loads a big-endian u16 from a guest address.
    pub fn get_u16(&self, guest: u32) -> u16 {
        let offset = self.offset_of(guest);
        u16::from_be_bytes([self.ram[offset], self.ram[offset + 1]])
    }

    pub fn bytes(&self, guest: u32, len: usize) -> &[u8] {
        let offset = self.offset_of(guest);
        &self.ram[offset..offset + len]
    }

    /// Number of successful writes performed through [`GuestMemory`].
    pub fn writes(&self) -> usize {
        self.writes
    }

    fn offset_of(&self, guest: u32) -> usize {
        (guest - self.guest_base) as usize
    }

    fn host_range(&self, address: Address, len: usize) -> Result<core::ops::Range<usize>, Error> {
        let start = address.value().checked_sub(HOST_BASE).ok_or(Error)? as usize;
        let end = start.checked_add(len).ok_or(Error)?;
        if end > self.ram.len() {
            return Err(Error)
        }
        Ok(start..end)
    }
}

impl GuestMemory for MockHost {
    fn translate_virtual(&self, address: Address32) -> Option<Address> {
        let offset = address.value().checked_sub(self.guest_base)?;
        if offset as usize >= self.ram.len() {
            return None
        }
        Some(Address::new(HOST_BASE + offset as u64))
    }

    fn read_bytes(&self, address: Address, buf: &mut [u8]) -> Result<(), Error> {
        let range = self.host_range(address, buf.len())?;
        buf.copy_from_slice(&self.ram[range]);
        Ok(())
    }

    fn write_bytes(&mut self, address: Address, buf: &[u8]) -> Result<(), Error> {
        let range = self.host_range(address, buf.len())?;
        if let Some(guest) = self.read_only {
            if range.start == self.offset_of(guest) {
                return Err(Error)
            }
        }
        self.ram[range].copy_from_slice(buf);
        self.writes += 1;
        Ok(())
    }
}

impl Host for MockHost {
    fn title_id(&self) -> u32 {
        self.title_id
    }

    fn title_version(&self) -> &str {
        &self.title_version
    }
}
