/// Momentary IR remote codes understood by the robot firmware. Each code
/// nudges the robot once; sustained motion re-issues the code on a cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Forward,
    Backward,
    Left,
    Right,
    Stop,
    SpeedUp,
    SlowDown,
}

impl Action {
    pub fn payload(self) -> &'static str {
        match self {
            Self::Forward => "IR64\n",
            Self::Backward => "IR25\n",
            Self::Left => "IR7\n",
            Self::Right => "IR9\n",
            Self::Stop => "IR69\n",
            Self::SpeedUp => "IR28\n",
            Self::SlowDown => "IR8\n",
        }
    }
}

/// One command on the wire: either a fixed IR code or a form that carries its
/// parameters in the payload text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ir(Action),
    Beep { frequency_hz: u32, duration_ms: u32 },
    Rgb { index: u8, red: u8, green: u8, blue: u8 },
}

impl Command {
    /// Build the newline terminated ASCII payload. Beep and RGB parameters
    /// are embedded unchecked; range enforcement is the firmware's business.
    pub fn encode(&self) -> String {
        match *self {
            Self::Ir(action) => action.payload().to_owned(),
            Self::Beep {
                frequency_hz,
                duration_ms,
            } => format!("BZ {frequency_hz} {duration_ms}\n"),
            Self::Rgb {
                index,
                red,
                green,
                blue,
            } => format!("RGB {index} {red} {green} {blue}\n"),
        }
    }
}
