use std::time::Duration;

use log::{debug, error, info, warn};
use thiserror::Error;

use crate::{
    command::{Action, Command},
    transport::{ConnectionError, Pacer, ThreadPacer, Transport, WriteError},
};

/// Well known address of the stock robot. Replace if needed.
pub const DEFAULT_DEVICE_ADDRESS: &str = "35B598CA-A4A0-5B38-F1CF-4C00EB006299";
/// Characteristic the firmware accepts text commands on. Fixed per
/// deployment.
pub const WRITE_CHARACTERISTIC: &str = "0000f101-0000-1000-8000-00805f9b34fb";
/// Default pause between consecutive transmissions, in seconds.
pub const DEFAULT_COMMAND_DELAY_S: f64 = 0.05;

#[derive(Debug, Error, Clone, Copy)]
pub enum PropertyError {
    #[error("The property is out of range.")]
    OutOfRange,
}

/// Speed counter tracked client side. The firmware only accepts relative
/// speed-up/slow-down codes, so the client never learns the actual speed,
/// only this bounded level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SpeedLevel(u8);

impl SpeedLevel {
    const MIN: u8 = 1;
    const MAX: u8 = 5;

    pub const DEFAULT: Self = Self(3);

    pub fn new_raw(value: u8) -> Result<Self, PropertyError> {
        (Self::MIN..=Self::MAX)
            .contains(&value)
            .then(|| Self(value))
            .ok_or(PropertyError::OutOfRange)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    fn up(self) -> Option<Self> {
        (self.0 < Self::MAX).then(|| Self(self.0 + 1))
    }

    fn down(self) -> Option<Self> {
        (self.0 > Self::MIN).then(|| Self(self.0 - 1))
    }
}

/// Per-robot configuration, passed to [`Robot::new`].
#[derive(Debug, Clone)]
pub struct RobotConfig {
    /// Device identifier handed to the transport on connect.
    pub address: String,
    /// Characteristic all command payloads are written to.
    pub write_characteristic: String,
    /// Initial pacing interval in seconds.
    pub command_delay_s: f64,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_DEVICE_ADDRESS.to_owned(),
            write_characteristic: WRITE_CHARACTERISTIC.to_owned(),
            command_delay_s: DEFAULT_COMMAND_DELAY_S,
        }
    }
}

/// What became of a single transmission attempt.
#[derive(Debug)]
pub enum SendOutcome {
    /// Written to the link, pacing pause served.
    Sent,
    /// The link is down. Nothing was transmitted.
    Disconnected,
    /// The write failed and was suppressed.
    Failed(WriteError),
}

impl SendOutcome {
    pub fn was_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

/// Motion command scheduler for one robot.
///
/// Owns its transport for the whole session and emits commands strictly one
/// at a time, pausing for the pacing interval after every write. Sustained
/// motion is simulated by re-issuing the momentary IR code at that cadence:
/// `floor(duration / delay)` transmissions per request. The interval is both
/// the flood protection for the firmware and the motion resolution, so a
/// smaller delay gives smoother control at the cost of more transmissions.
pub struct Robot<T: Transport> {
    transport: T,
    config: RobotConfig,
    speed_level: SpeedLevel,
    command_delay_s: f64,
    pacer: Box<dyn Pacer>,
}

impl<T: Transport> Robot<T> {
    /// Default drive duration in seconds.
    pub const DEFAULT_DRIVE_S: f64 = 2.0;
    /// Default turn duration in seconds.
    pub const DEFAULT_TURN_S: f64 = 1.0;
    /// Default beep pitch.
    pub const DEFAULT_BEEP_HZ: u32 = 440;
    /// Default beep length.
    pub const DEFAULT_BEEP_MS: u32 = 500;

    pub fn new(transport: T, config: RobotConfig) -> Self {
        let command_delay_s = config.command_delay_s;
        Self {
            transport,
            config,
            speed_level: SpeedLevel::DEFAULT,
            command_delay_s,
            pacer: Box::new(ThreadPacer),
        }
    }

    /// Replace the suspension point used between transmissions. Hosts with a
    /// cooperative scheduler hook their own pause in here.
    pub fn with_pacer(mut self, pacer: Box<dyn Pacer>) -> Self {
        self.pacer = pacer;
        self
    }

    pub fn connect(&mut self) -> Result<(), ConnectionError> {
        match self.transport.connect(&self.config.address) {
            Ok(()) => {
                info!("Connected to {}", self.config.address);
                Ok(())
            }
            Err(e) => {
                error!("Connection failed: {e}");
                Err(e)
            }
        }
    }

    /// Tear the link down. Doing so while already disconnected is a no-op.
    pub fn disconnect(&mut self) -> Result<(), ConnectionError> {
        if !self.transport.is_connected() {
            return Ok(());
        }
        match self.transport.disconnect() {
            Ok(()) => {
                info!("Disconnected.");
                Ok(())
            }
            Err(e) => {
                error!("Disconnect failed: {e}");
                Err(e)
            }
        }
    }

    pub fn is_connected(&self) -> bool {
        self.transport.is_connected()
    }

    pub fn speed_level(&self) -> SpeedLevel {
        self.speed_level
    }

    pub fn command_delay_s(&self) -> f64 {
        self.command_delay_s
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Transmit one command, then pause the calling flow for the current
    /// pacing interval.
    ///
    /// On an inactive link nothing is transmitted and the skip is reported as
    /// [`SendOutcome::Disconnected`], not as an error. A failed write is
    /// logged, suppressed and reported the same way; no pause follows it.
    pub fn send_command(&mut self, command: &Command) -> SendOutcome {
        if !self.transport.is_connected() {
            return SendOutcome::Disconnected;
        }

        let payload = command.encode();
        debug!("Sending: {}", payload.trim_end());

        match self
            .transport
            .write_command(&self.config.write_characteristic, payload.as_bytes())
        {
            Ok(()) => {
                self.pace();
                SendOutcome::Sent
            }
            Err(e) => {
                warn!("Write error: {e}");
                SendOutcome::Failed(e)
            }
        }
    }

    fn pace(&self) {
        // Re-read on every transmission, so a delay change mid burst applies
        // to the remaining commands.
        if self.command_delay_s > 0.0 {
            self.pacer
                .pause(Duration::from_secs_f64(self.command_delay_s));
        }
    }

    /// Drive forward for `duration_s` seconds.
    ///
    /// The firmware has no sustained-motion verb, so the momentary code is
    /// re-issued once per pacing interval. A duration shorter than one
    /// interval transmits nothing.
    pub fn move_forward(&mut self, duration_s: f64) {
        info!("Moving forward...");
        self.repeat(Action::Forward, duration_s);
    }

    /// Drive backward for `duration_s` seconds.
    pub fn move_backward(&mut self, duration_s: f64) {
        info!("Moving backward...");
        self.repeat(Action::Backward, duration_s);
    }

    /// Turn left for `duration_s` seconds.
    pub fn turn_left(&mut self, duration_s: f64) {
        info!("Turning left...");
        self.repeat(Action::Left, duration_s);
    }

    /// Turn right for `duration_s` seconds.
    pub fn turn_right(&mut self, duration_s: f64) {
        info!("Turning right...");
        self.repeat(Action::Right, duration_s);
    }

    fn repeat(&mut self, action: Action, duration_s: f64) {
        // The count is fixed before the burst starts; pacing reads the live
        // delay.
        let count = (duration_s / self.command_delay_s).floor() as u32;
        for _ in 0..count {
            self.send_command(&Command::Ir(action));
        }
    }

    /// Stop all motion.
    pub fn stop(&mut self) {
        info!("Stopping...");
        self.send_command(&Command::Ir(Action::Stop));
    }

    /// Raise the speed one level. Silent no-op at level 5: no state change,
    /// no transmission.
    pub fn speed_up(&mut self) {
        if let Some(next) = self.speed_level.up() {
            self.speed_level = next;
            info!("Speed up -> level {}", next.value());
            self.send_command(&Command::Ir(Action::SpeedUp));
        }
    }

    /// Drop the speed one level. Silent no-op at level 1.
    pub fn slow_down(&mut self) {
        if let Some(next) = self.speed_level.down() {
            self.speed_level = next;
            info!("Slow down -> level {}", next.value());
            self.send_command(&Command::Ir(Action::SlowDown));
        }
    }

    /// Play a tone. Parameters go to the firmware unchecked.
    pub fn beep(&mut self, frequency_hz: u32, duration_ms: u32) {
        info!("Beeping {frequency_hz} Hz for {duration_ms} ms...");
        self.send_command(&Command::Beep {
            frequency_hz,
            duration_ms,
        });
    }

    /// Set one of the onboard RGB leds. Parameters go to the firmware
    /// unchecked.
    pub fn set_rgb(&mut self, index: u8, red: u8, green: u8, blue: u8) {
        self.send_command(&Command::Rgb {
            index,
            red,
            green,
            blue,
        });
    }

    /// Replace the pacing interval. Transmits nothing itself; applies from
    /// the next transmission on.
    pub fn set_command_delay(&mut self, delay_s: f64) {
        self.command_delay_s = delay_s;
        info!("Command delay set to {delay_s}s");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_level_rejects_out_of_range_values() {
        assert!(SpeedLevel::new_raw(0).is_err());
        assert!(SpeedLevel::new_raw(6).is_err());
        assert_eq!(SpeedLevel::new_raw(1).unwrap().value(), 1);
        assert_eq!(SpeedLevel::new_raw(5).unwrap().value(), 5);
    }

    #[test]
    fn speed_level_saturates_at_bounds() {
        assert!(SpeedLevel::new_raw(5).unwrap().up().is_none());
        assert!(SpeedLevel::new_raw(1).unwrap().down().is_none());
        assert_eq!(SpeedLevel::DEFAULT.up().unwrap().value(), 4);
        assert_eq!(SpeedLevel::DEFAULT.down().unwrap().value(), 2);
    }
}
