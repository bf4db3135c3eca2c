// Scripted card-selection example

// This example plays the role of a smart-card library under test: it drives
// a MockReader through a SELECT / READ BINARY sequence and then checks that
// the whole script was consumed. Run with RUST_LOG=warn to see diagnostics
// when a step goes wrong.

use nfcsim::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut reader = MockReader::new();
    reader.expect_commands(2);
    reader.expect_command(parse_hex("00A4000C023F00")?, 0, 7, parse_hex("9000")?)?;
    reader.expect_command(parse_hex("00B0000004")?, 0, 5, parse_hex("DE AD BE EF 90 00")?)?;

    reader.begin();
    println!("Card present: {}", reader.detect_card());

    let mut status = [0u8; 2];
    let select = parse_hex("00A4000C023F00")?;
    println!(
        "SELECT 3F00 -> ok={} sw={}",
        reader.send_command(&select, &mut status),
        bytes_to_hex_spaced(&status)
    );

    let mut content = [0u8; 6];
    let read = parse_hex("00B0000004")?;
    println!(
        "READ BINARY -> ok={} data={}",
        reader.send_command(&read, &mut content),
        bytes_to_hex_spaced(&content)
    );

    println!(
        "All expected commands executed: {}",
        reader.all_expected_commands_executed()
    );
    Ok(())
}
