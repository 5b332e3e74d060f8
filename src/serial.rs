use std::time::Duration;

use log::info;
use serialport::{SerialPort, SerialPortType};

use crate::transport::{ConnectionError, DeviceInfo, Transport, WriteError};

/// Baud rate of the stock USB link adapter.
pub const DEFAULT_BAUD_RATE: u32 = 1_000_000;

const SCAN_WINDOW: Duration = Duration::from_secs(5);
const WRITE_TIMEOUT: Duration = Duration::from_millis(1000);

/// [`Transport`] over a USB serial link adapter. Hosts that talk to the robot
/// through a different wireless stack implement [`Transport`] themselves.
pub struct SerialTransport {
    baud_rate: u32,
    port: Option<Box<dyn SerialPort>>,
}

impl SerialTransport {
    pub fn new(baud_rate: u32) -> Self {
        Self {
            baud_rate,
            port: None,
        }
    }
}

impl Default for SerialTransport {
    fn default() -> Self {
        Self::new(DEFAULT_BAUD_RATE)
    }
}

impl Transport for SerialTransport {
    fn connect(&mut self, device: &str) -> Result<(), ConnectionError> {
        let port = serialport::new(device, self.baud_rate)
            .timeout(WRITE_TIMEOUT)
            .open()
            .map_err(|e| ConnectionError::Establish(e.to_string()))?;
        self.port = Some(port);
        Ok(())
    }

    fn disconnect(&mut self) -> Result<(), ConnectionError> {
        // Dropping the handle releases the port.
        match self.port.take() {
            Some(_) => Ok(()),
            None => Err(ConnectionError::NotConnected),
        }
    }

    fn is_connected(&self) -> bool {
        self.port.is_some()
    }

    fn write_command(&mut self, _characteristic: &str, payload: &[u8]) -> Result<(), WriteError> {
        // A serial link has a single channel; the characteristic id selects
        // nothing here.
        let port = self.port.as_mut().ok_or(WriteError::LinkInactive)?;
        port.write_all(payload)?;
        Ok(())
    }

    fn scan(&mut self, _timeout: Duration) -> Result<Vec<DeviceInfo>, ConnectionError> {
        // Port enumeration completes immediately; there is no window to wait
        // out.
        let ports =
            serialport::available_ports().map_err(|e| ConnectionError::Scan(e.to_string()))?;
        Ok(ports
            .into_iter()
            .map(|info| {
                let name = match info.port_type {
                    SerialPortType::UsbPort(usb) => usb.product,
                    _ => None,
                };
                DeviceInfo {
                    name,
                    address: info.port_name,
                    signal_strength: None,
                }
            })
            .collect())
    }
}

/// Look for nearby devices and report each one found. Not tied to a robot
/// instance.
pub fn find_devices() -> Result<Vec<DeviceInfo>, ConnectionError> {
    info!("Scanning for devices ({} seconds)...", SCAN_WINDOW.as_secs());
    let devices = SerialTransport::default().scan(SCAN_WINDOW)?;
    for device in &devices {
        info!(
            "- Name: {}, Address: {}, RSSI: {:?}",
            device.name.as_deref().unwrap_or("<unknown>"),
            device.address,
            device.signal_strength,
        );
    }
    Ok(devices)
}
