extern crate weeecode_robot;

#[path = "./common/lib.rs"]
mod common;

use weeecode_robot::serial::find_devices;

fn main() {
    common::init_logging();

    println!("Searching for any devices: ");

    let devices = find_devices().expect("Device scan must work.");
    for device in &devices {
        println!(
            "- Name: {}, Address: {}",
            device.name.as_deref().unwrap_or("<unknown>"),
            device.address
        );
    }

    println!("Finished. Found {} device(s).", devices.len());
}
