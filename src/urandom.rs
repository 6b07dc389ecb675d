use std::fs::File;
use std::io::{self, Read};

pub fn word() -> io::Result<u32> {
    let mut bytes: [u8; 4] = [0; 4];
    fill_bytes(&mut bytes)?;

    Ok(u32::from_be_bytes(bytes))
}

pub fn range(min: u32, max: u32) -> io::Result<u32> {
    let (min, max) = if min > max { (max, min) } else { (min, max) };

    if min == max {
        return Ok(min);
    }

    let mut rn = word()?;

    let unbiased_top = (u32::MAX / (max - min)) * (max - min);

    while rn >= unbiased_top {
        rn = word()?;
    }

    Ok(min + rn % (max - min))
}

fn fill_bytes(byte_buffer: &mut [u8]) -> io::Result<()> {
    let mut urandom = File::open("/dev/urandom")?;
    urandom.read_exact(byte_buffer)
}
