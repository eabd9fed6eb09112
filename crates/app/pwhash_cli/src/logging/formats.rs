use std::io::Write;

use flexi_logger::{DeferredNow, style};
use log::{Level, Record};

/// `error: message`, with the level coloured.
///
/// Debug and trace lines also carry the module path.
pub fn cli_format(
    w: &mut dyn Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    let level = record.level();
    let label = style(level).paint(level_label(level));
    if level >= Level::Debug {
        write!(
            w,
            "{label} [{}]: {}",
            record.module_path().unwrap_or("<unknown>"),
            record.args()
        )
    } else {
        write!(w, "{label}: {}", record.args())
    }
}

fn level_label(level: Level) -> &'static str {
    match level {
        Level::Error => "error",
        Level::Warn => "warning",
        Level::Info => "info",
        Level::Debug => "debug",
        Level::Trace => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_lowercase() {
        assert_eq!(level_label(Level::Error), "error");
        assert_eq!(level_label(Level::Warn), "warning");
        assert_eq!(level_label(Level::Trace), "trace");
    }
}
