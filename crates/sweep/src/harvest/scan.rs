//! `IPC:` value extraction from simulator log text.

use std::sync::LazyLock;

use regex::Regex;

/// `IPC:`, whitespace, then an unsigned decimal with at most one point.
#[allow(clippy::expect_used)]
static IPC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"IPC:(?-u:\s)+([0-9]+(?:\.[0-9]*)?|\.[0-9]+)").expect("IPC pattern is valid")
});

/// One `IPC:` value found in a log.
#[derive(Debug, Clone, PartialEq)]
pub struct IpcSample {
    /// The number exactly as it appeared in the log.
    pub text: String,
    /// Parsed value.
    pub value: f64,
}

/// Every `IPC:` value in `text`, in the order they occur.
///
/// Text without a match yields an empty list; signs and exponents are not
/// part of the number, so `IPC: -1` and `IPC: 1e3` yield nothing and `1`
/// respectively.
pub fn extract_ipc(text: &str) -> Vec<IpcSample> {
    IPC_PATTERN
        .captures_iter(text)
        .filter_map(|caps| {
            let number = caps.get(1)?.as_str();
            let value = number.parse().ok()?;
            Some(IpcSample {
                text: number.to_string(),
                value,
            })
        })
        .collect()
}
