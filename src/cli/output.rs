//! Output formatting utilities
//!
//! Provides table and JSON output formatting for CLI commands.

use crate::cli::args::OutputFormat;
use crate::domain::{Angle, AngleReading};
use crate::error::Result;
use serde::Serialize;
use std::io::{self, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_output(&mut handle, data, format)
}

/// Format output into any writer
pub fn write_output<W: Write, T: Serialize + TableDisplay>(
    out: &mut W,
    data: &T,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(out, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data)?;
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(out, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

/// Angle result for display
#[derive(Debug, Clone, Serialize)]
pub struct AngleOutput {
    pub hour: i64,
    pub minute: i64,
    pub angle: Angle,
    pub in_range: bool,
}

impl From<&AngleReading> for AngleOutput {
    fn from(reading: &AngleReading) -> Self {
        Self {
            hour: reading.hour.value(),
            minute: reading.minute.value(),
            angle: reading.angle,
            in_range: reading.in_range,
        }
    }
}

impl TableDisplay for AngleOutput {
    fn to_table(&self) -> String {
        format!("Angle  {}", self.angle)
    }

    fn to_compact(&self) -> String {
        self.angle.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Hour, Minute};
    use crate::error::AppError;
    use serde::ser::Error as _;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> std::result::Result<S::Ok, S::Error> {
            Err(S::Error::custom("not representable"))
        }
    }

    impl TableDisplay for Unserializable {
        fn to_table(&self) -> String {
            "unserializable".to_string()
        }
    }

    fn output(angle: f64) -> AngleOutput {
        AngleOutput::from(&AngleReading {
            hour: Hour::new(3),
            minute: Minute::new(0),
            angle: Angle::from_degrees(angle),
            in_range: true,
        })
    }

    fn render(data: &AngleOutput, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_output(&mut buf, data, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_table_line() {
        assert_eq!(render(&output(90.0), OutputFormat::Table), "Angle  90.0\n");
        assert_eq!(render(&output(7.5), OutputFormat::Table), "Angle  7.5\n");
    }

    #[test]
    fn test_compact() {
        assert_eq!(render(&output(180.0), OutputFormat::Compact), "180.0\n");
    }

    #[test]
    fn test_json() {
        let json: serde_json::Value =
            serde_json::from_str(&render(&output(90.0), OutputFormat::Json)).unwrap();
        assert_eq!(json["hour"], 3);
        assert_eq!(json["minute"], 0);
        assert_eq!(json["angle"], 90.0);
        assert_eq!(json["in_range"], true);
    }

    #[test]
    fn test_json_failure_is_reported() {
        let mut buf = Vec::new();
        let err = write_output(&mut buf, &Unserializable, OutputFormat::Json).unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_table_ignores_serialization() {
        let mut buf = Vec::new();
        write_output(&mut buf, &Unserializable, OutputFormat::Table).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "unserializable\n");
    }
}
