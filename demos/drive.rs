extern crate weeecode_robot;

#[path = "./common/lib.rs"]
mod common;

use weeecode_robot::{
    robot::{Robot, RobotConfig},
    serial::{find_devices, SerialTransport},
};

fn main() {
    common::init_logging();

    let devices = find_devices().expect("Device scan must work.");
    let address = common::ask_address(&devices);

    let config = RobotConfig {
        address,
        ..RobotConfig::default()
    };
    let mut bot = Robot::new(SerialTransport::default(), config);

    bot.connect().expect("The robot must be reachable.");

    bot.move_forward(1.5);
    bot.turn_left(0.75);
    bot.slow_down();
    bot.move_forward(1.0);
    bot.stop();

    bot.beep(600, 300);

    bot.disconnect().expect("Disconnect must work.");
}
