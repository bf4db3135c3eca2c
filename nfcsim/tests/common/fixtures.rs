// fixtures.rs: provides commonly used APDUs and expectation scripts

use nfcsim::constants::STATUS_OK;
use nfcsim::expectation::Expectation;

pub fn select_mf_apdu() -> Vec<u8> {
    // SELECT the master file 3F00
    hex::decode("00A4000C023F00").unwrap()
}

pub fn select_ef_apdu() -> Vec<u8> {
    // SELECT the elementary file 1001
    hex::decode("00A4020C021001").unwrap()
}

pub fn read_binary_apdu(length: u8) -> Vec<u8> {
    let mut apdu = hex::decode("00B00000").unwrap();
    apdu.push(length);
    apdu
}

pub fn ok_status() -> Vec<u8> {
    STATUS_OK.to_vec()
}

pub fn file_content_response(fill: u8, len: usize) -> Vec<u8> {
    let mut response = vec![fill; len];
    response.extend_from_slice(&STATUS_OK);
    response
}

/// Script for a typical select-then-read exchange.
pub fn select_and_read_script() -> Vec<Expectation> {
    vec![
        Expectation::exact(select_mf_apdu(), ok_status()),
        Expectation::exact(select_ef_apdu(), ok_status()),
        Expectation::exact(read_binary_apdu(4), file_content_response(0x5A, 4)),
    ]
}
