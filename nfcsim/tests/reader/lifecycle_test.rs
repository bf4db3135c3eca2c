#[path = "../common/mod.rs"]
mod common;

use nfcsim::expectation::Expectation;
use nfcsim::reader::{MockReader, NfcReader};
use nfcsim::test_support::{boxed_reader, captured_reader};

#[test]
fn begin_and_detect_card_have_no_failure_modes() {
    let mut reader = MockReader::new();
    reader.begin();
    assert!(reader.detect_card());
    assert!(reader.detect_card());
    // Neither call is a transaction
    assert_eq!(reader.attempted_count(), 0);
}

#[test]
fn empty_ledger_is_fully_executed() {
    let reader = MockReader::new();
    assert!(reader.all_expected_commands_executed());
}

#[test]
fn reinitialization_resets_counters_and_drops_the_old_script() {
    let (mut reader, sink) = captured_reader(vec![Expectation::exact(vec![0x01], vec![0x02])]);

    let mut response = [0u8; 1];
    assert!(reader.send_command(&[0x01], &mut response));
    assert!(!reader.send_command(&[0x01], &mut response)); // overflow
    assert!(!reader.all_expected_commands_executed());

    reader.expect_commands(2);
    assert_eq!(reader.expected_count(), 0);
    assert_eq!(reader.executed_count(), 0);
    assert_eq!(reader.attempted_count(), 0);
    // Zero declared expectations and zero attempts: trivially complete
    assert!(reader.all_expected_commands_executed());

    // The old script is gone; the new one starts fresh
    reader.expect(Expectation::exact(vec![0xAA], vec![0xBB]));
    assert!(reader.send_command(&[0xAA], &mut response));
    assert_eq!(response, [0xBB]);
    assert!(reader.all_expected_commands_executed());
    assert_eq!(sink.lines().len(), 1);
}

#[test]
fn clear_drops_every_record() {
    let (mut reader, _sink) = captured_reader(common::fixtures::select_and_read_script());
    assert_eq!(reader.expected_count(), 3);

    reader.clear();
    assert_eq!(reader.expected_count(), 0);
    // Idempotent: a second clear is harmless
    reader.clear();
    assert_eq!(reader.expected_count(), 0);
}

#[test]
fn library_under_test_sees_a_plain_reader() {
    // Drive the mock exactly the way the library under test would: through
    // the trait object alone.
    let mut reader = boxed_reader(vec![
        Expectation::exact(common::fixtures::select_mf_apdu(), common::fixtures::ok_status()),
    ]);

    reader.begin();
    assert!(reader.detect_card());
    let mut status = [0u8; 2];
    assert!(reader.send_command(&common::fixtures::select_mf_apdu(), &mut status));
    assert_eq!(status, [0x90, 0x00]);
}
