//! Remote control for the Weeemake twelve-in-one robot over its text command
//! link.
//!
//! See:
//! https://github.com/WEEEMAKE/
//! Weeemake_Libraries_for_Arduino: Weeemake/src/WeInfraredReceiver.h
//! Weeemake_Factory_Firmware/twelve_in_one/twelve_in_one.ino

pub mod command;
pub mod robot;
pub mod serial;
pub mod transport;
