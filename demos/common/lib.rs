use std::io::{stdin, stdout, Write};

use weeecode_robot::transport::DeviceInfo;

pub fn init_logging() {
    env_logger::init();
}

/// Prompt for the address of one of the discovered devices.
#[allow(unused)]
pub fn ask_address(devices: &[DeviceInfo]) -> String {
    loop {
        for (index, device) in devices.iter().enumerate() {
            println!(
                "[{index}] {} ({})",
                device.address,
                device.name.as_deref().unwrap_or("unknown")
            );
        }
        print!("Device: ");
        let _ = stdout().flush();
        let mut input = String::new();
        stdin()
            .read_line(&mut input)
            .expect("stdin read_line must work.");
        let Ok(choice) = input.trim().parse::<usize>() else {
            println!("Invalid: not an index.");
            continue;
        };
        let Some(device) = devices.get(choice) else {
            println!("Invalid: no such device.");
            continue;
        };
        return device.address.clone();
    }
}
