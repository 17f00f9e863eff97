//=========================================================================
// Console Output
//=========================================================================
//
// Print operations available to game hooks and the sinks they write to.
//
// Architecture:
//   Runtime::print_*() → format_*() → OutputSink::write_line()
//                                        ├─ StdoutSink  (process stdout)
//                                        └─ ChannelSink (crossbeam Sender)
//
// Each print call produces exactly one line. Sinks never report failure
// back to the game; a broken stdout is logged and otherwise ignored.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::io::{self, Write};

use crossbeam_channel::Sender;
use log::debug;

//=== Formatting ==========================================================

/// Formats an integer the way the print builtin shows it.
pub fn format_int(value: i64) -> String {
    value.to_string()
}

/// Formats a boolean as `true` / `false`.
pub fn format_bool(value: bool) -> String {
    let word = if value { "true" } else { "false" };
    word.to_string()
}

/// Formats a float in fixed notation with six decimals.
///
/// Non-finite values print as `inf`, `-inf` and `nan`.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value == f64::INFINITY {
        "inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{:.6}", value)
    }
}

//=== OutputSink ==========================================================

/// Destination for printed lines.
///
/// Implementations receive the line without its terminating newline.
pub trait OutputSink {
    fn write_line(&mut self, line: &str);
}

//=== StdoutSink ==========================================================

/// Writes each line to the process standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_line(&mut self, line: &str) {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        if let Err(e) = writeln!(lock, "{}", line) {
            debug!("stdout write failed: {}", e);
        }
    }
}

//=== ChannelSink =========================================================

/// Forwards each line over a channel, preserving call order.
///
/// Used to capture game output in tests or to hand it to a host thread.
/// If the receiving end is gone, lines are dropped.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    sender: Sender<String>,
}

impl ChannelSink {
    pub fn new(sender: Sender<String>) -> Self {
        Self { sender }
    }
}

impl OutputSink for ChannelSink {
    fn write_line(&mut self, line: &str) {
        if self.sender.send(line.to_owned()).is_err() {
            debug!("output receiver disconnected, dropping line");
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    //=====================================================================
    // Formatting Tests
    //=====================================================================

    #[test]
    fn ints_print_in_decimal() {
        assert_eq!(format_int(0), "0");
        assert_eq!(format_int(42), "42");
        assert_eq!(format_int(-7), "-7");
    }

    #[test]
    fn bools_print_as_words() {
        assert_eq!(format_bool(true), "true");
        assert_eq!(format_bool(false), "false");
    }

    #[test]
    fn floats_use_six_decimals() {
        assert_eq!(format_float(1.5), "1.500000");
        assert_eq!(format_float(-0.25), "-0.250000");
        assert_eq!(format_float(0.0), "0.000000");
        assert_eq!(format_float(1.0 / 3.0), "0.333333");
    }

    #[test]
    fn non_finite_floats() {
        assert_eq!(format_float(f64::INFINITY), "inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_float(f64::NAN), "nan");
    }

    //=====================================================================
    // Sink Tests
    //=====================================================================

    #[test]
    fn channel_sink_preserves_order() {
        let (tx, rx) = unbounded();
        let mut sink = ChannelSink::new(tx);

        sink.write_line("first");
        sink.write_line("second");

        let lines: Vec<String> = rx.try_iter().collect();
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn channel_sink_survives_dropped_receiver() {
        let (tx, rx) = unbounded();
        drop(rx);
        let mut sink = ChannelSink::new(tx);
        sink.write_line("nobody listening");
    }
}
