//! Demo driver: construct, recolor, report

use std::io::Write;

use car_record::VehicleRecord;

use crate::config::DemoConfig;
use crate::error::DemoError;

/// Build the seed record, recolor it and write its description to `out`
///
/// Returns the record as reported.
///
/// # Errors
/// Returns [`DemoError::Write`] or [`DemoError::Flush`] if `out` fails.
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> Result<VehicleRecord, DemoError> {
    let mut car = config.seed.clone();
    tracing::debug!(?car, "Created vehicle record");

    car.set_color(config.recolor.as_str());
    tracing::debug!(color = car.color(), "Recolored vehicle");

    let description = car.describe();
    for (line, text) in [description.headline(), description.wheel_line()]
        .iter()
        .enumerate()
    {
        writeln!(out, "{text}").map_err(|e| DemoError::write(line + 1, e))?;
    }
    out.flush().map_err(DemoError::Flush)?;

    tracing::info!("Wrote vehicle report");
    Ok(car)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io;

    struct FailingWriter {
        kind: io::ErrorKind,
    }

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(self.kind))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn default_run_prints_exact_report() {
        let mut out = Vec::new();
        let car = run(&DemoConfig::default(), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "The car's color is blue. Car is badass. It has a 4 doors and Super cool Engine3000\n\
             The car has a 4 wheels\n"
        );
        assert_eq!(car, VehicleRecord::new("blue", 4, 4, "Engine3000"));
    }

    #[test]
    fn recolor_keeps_other_fields() {
        let config = DemoConfig::new()
            .with_seed(VehicleRecord::new("red", -2, 7, "Steam"))
            .with_recolor("blue");
        let mut out = Vec::new();

        let car = run(&config, &mut out).unwrap();

        assert_eq!(car.wheel_count(), -2);
        assert_eq!(car.door_count(), 7);
        assert_eq!(car.engine_label(), "Steam");
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "The car's color is blue. Car is badass. It has a 7 doors and Super cool Steam\n\
             The car has a -2 wheels\n"
        );
    }

    #[test]
    fn failing_writer_reports_first_line() {
        let mut out = FailingWriter {
            kind: io::ErrorKind::BrokenPipe,
        };

        let err = run(&DemoConfig::default(), &mut out).unwrap_err();

        assert!(matches!(err, DemoError::Write { line: 1, .. }));
        assert!(err.is_broken_pipe());
    }
}
