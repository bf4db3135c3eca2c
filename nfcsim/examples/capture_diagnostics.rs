// Capturing diagnostics from a failing exchange

// Shows the CaptureSink in action: the reader is driven with a wrong APDU
// and an over-call, and the captured lines are printed afterwards.

use nfcsim::prelude::*;

fn main() -> anyhow::Result<()> {
    let sink = CaptureSink::new();
    let mut reader = MockReader::with_sink(Box::new(sink.clone()));

    reader.expect_commands(1);
    reader.expect(Expectation::exact(
        parse_hex("00A4000C023F00")?,
        parse_hex("9000")?,
    ));

    let mut status = [0u8; 2];

    // Wrong instruction byte: B0 instead of A4
    let wrong = parse_hex("00B0000C023F00")?;
    println!("wrong APDU  -> ok={}", reader.send_command(&wrong, &mut status));

    // Corrected request consumes the expectation
    let select = parse_hex("00A4000C023F00")?;
    println!("right APDU  -> ok={}", reader.send_command(&select, &mut status));

    // One call too many
    println!("extra APDU  -> ok={}", reader.send_command(&select, &mut status));

    println!("\ncaptured diagnostics:");
    for line in sink.lines() {
        println!("  {line}");
    }
    println!(
        "\nall expected commands executed: {}",
        reader.all_expected_commands_executed()
    );
    Ok(())
}
