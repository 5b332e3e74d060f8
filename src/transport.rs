use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("Link could not be established: {0}")]
    Establish(String),
    #[error("The link is not open.")]
    NotConnected,
    #[error("Device scan failed: {0}")]
    Scan(String),
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("The link is not active.")]
    LinkInactive,
    #[error("Write to the device failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A device seen during a scan.
#[derive(Debug, Clone)]
pub struct DeviceInfo {
    pub name: Option<String>,
    pub address: String,
    /// Signal strength in dBm, for link layers that measure one.
    pub signal_strength: Option<i16>,
}

/// Capability set the scheduler drives the robot through.
///
/// The connection handle is state internal to the implementing type; its
/// lifetime is bounded by [`connect`](Transport::connect) and
/// [`disconnect`](Transport::disconnect). One transport belongs to one
/// scheduler instance at a time.
pub trait Transport {
    fn connect(&mut self, device: &str) -> Result<(), ConnectionError>;

    fn disconnect(&mut self) -> Result<(), ConnectionError>;

    fn is_connected(&self) -> bool;

    /// Write one command payload to the given characteristic.
    fn write_command(&mut self, characteristic: &str, payload: &[u8]) -> Result<(), WriteError>;

    /// Look for nearby devices for up to `timeout`.
    fn scan(&mut self, timeout: Duration) -> Result<Vec<DeviceInfo>, ConnectionError>;
}

/// Suspension point between consecutive transmissions.
///
/// The scheduler pauses through this trait after every write. The default
/// [`ThreadPacer`] blocks the calling thread; a host with a cooperative
/// scheduler substitutes a pacer that yields instead.
pub trait Pacer {
    fn pause(&self, duration: Duration);
}

/// Pacer that blocks the calling thread.
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
