//! Fuzz harness for session input
//!
//! Arbitrary text must parse or be rejected without panicking, and every
//! command that parses must survive a print/parse round trip.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rbviz_session::{Command, parse_script};

fuzz_target!(|data: &[u8]| {
    let input = match std::str::from_utf8(data) {
        Ok(s) => s,
        Err(_) => return,
    };

    for line in input.lines() {
        if let Ok(command) = line.parse::<Command>() {
            // Display must parse back to the same command.
            assert_eq!(command.to_string().parse::<Command>(), Ok(command));
        }
    }

    let _ = parse_script(input);
});
