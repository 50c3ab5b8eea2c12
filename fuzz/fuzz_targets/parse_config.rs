//! Fuzz harness for configuration files (rbviz.yaml / rbviz.json)

#![no_main]

use libfuzzer_sys::fuzz_target;
use rbviz_config::RbvizConfig;

fuzz_target!(|data: &[u8]| {
    let input = match std::str::from_utf8(data) {
        Ok(s) => s,
        Err(_) => return,
    };

    // We don't care if it fails - we just want to ensure it doesn't panic
    let _: Result<RbvizConfig, _> = serde_yaml::from_str(input);
    let _: Result<RbvizConfig, _> = serde_json::from_str(input);
});
