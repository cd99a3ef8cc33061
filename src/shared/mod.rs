use core::fmt::Error;
use asr::{
    Address, Address32,
    primitives::dynamic_endian::{FromEndian, Endian},
};
use bytemuck::Pod;

mod input;
pub use input::{Config, GamepadState, MouseMotion, RawInputState};

#[cfg(test)]
pub(crate) mod mock;

/// Byte order of the emulated console. Every multi-byte value in guest memory is big endian.
pub const GUEST_ENDIAN: Endian = Endian::Big;

/// Access to the emulated process's memory, as provided by the host.
pub trait GuestMemory {
    /// Maps a guest virtual address to the host address backing it.
    ///
    /// Returns `None` if the address is not currently mapped.
    fn translate_virtual(&self, address: Address32) -> Option<Address>;

    /// Fills `buf` with the bytes stored at the given host address.
    fn read_bytes(&self, address: Address, buf: &mut [u8]) -> Result<(), Error>;

    /// Stores `buf` at the given host address.
    fn write_bytes(&mut self, address: Address, buf: &[u8]) -> Result<(), Error>;
}

/// The running emulator, seen from a hook.
pub trait Host: GuestMemory {
    /// Identifier of the title currently executing.
    fn title_id(&self) -> u32;

    /// Version string the running title reports, e.g. `"11.0"`.
    fn title_version(&self) -> &str;
}

/// Reads any value from a host address backing guest memory.
///
/// The value is converted from the guest's big-endian layout to the native one.
pub fn read<T, M>(memory: &M, address: Address) -> Result<T, Error>
where
    T: Pod + FromEndian,
    M: GuestMemory + ?Sized,
{
    let mut value = T::zeroed();
    memory.read_bytes(address, bytemuck::bytes_of_mut(&mut value))?;
    Ok(value.from_endian(GUEST_ENDIAN))
}

/// Writes any value to a host address backing guest memory, storing it big endian.
pub fn write<T, M>(memory: &mut M, address: Address, value: T) -> Result<(), Error>
where
    T: Pod + FromEndian,
    M: GuestMemory + ?Sized,
{
    let value = value.from_endian(GUEST_ENDIAN);
    memory.write_bytes(address, bytemuck::bytes_of(&value))
}
