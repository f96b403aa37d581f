use std::sync::Mutex;

use blockgen::{generate, CodeStyle, ComponentKind, ResourceEstimate, ValidationError};
use log::{Level, LevelFilter, Log, Metadata, Record};

mod common;

use common::request;

/// Keeps every warning logged by the library.
struct WarningLog(Mutex<Vec<String>>);

impl Log for WarningLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.0.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static WARNINGS: WarningLog = WarningLog(Mutex::new(Vec::new()));

fn take_warnings() -> Vec<String> {
    std::mem::take(&mut *WARNINGS.0.lock().unwrap())
}

// Single test: the logger is global to this binary.
#[test]
fn accepted_large_memory_is_logged() {
    log::set_logger(&WARNINGS).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let large = request(
        ComponentKind::Memory,
        CodeStyle::Function,
        vec![("addr_width", 17), ("data_width", 8)],
    );
    assert_eq!(
        generate(&large),
        Err(ValidationError::ConfirmationRequired {
            field: "addr_width".to_string(),
            estimate: ResourceEstimate::new(1 << 17, 8),
        })
    );
    assert!(take_warnings().is_empty());

    let artifact = generate(&large.with_large_resources(true)).unwrap();
    assert!(artifact.text().contains("array (0 to 131071)"));
    assert_eq!(
        take_warnings(),
        vec![
            "Address width `addr_width` above 16 accepted: the design holds \
             131072 entries of 8 bits (1048576 bits total)"
                .to_string()
        ]
    );

    let small = request(
        ComponentKind::Memory,
        CodeStyle::Basic,
        vec![("addr_width", 16), ("data_width", 128)],
    )
    .with_large_resources(true);
    assert!(generate(&small).is_ok());
    assert!(take_warnings().is_empty());
}
