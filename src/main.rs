use std::process;

use clap::Parser;

use wavesketch::controller::{DEFAULT_FREQUENCY_HZ, FREQUENCY_MAX_HZ, FREQUENCY_MIN_HZ};
use wavesketch::quirks::ColumnScanQuirk;

/// Draw a waveform and hear it looped as a tone.
#[derive(Parser)]
struct Cli {
    /// Starting tone frequency in hertz
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_FREQUENCY_HZ,
        value_parser = clap::value_parser!(u32).range(i64::from(FREQUENCY_MIN_HZ)..=i64::from(FREQUENCY_MAX_HZ))
    )]
    frequency: u32,

    /// How synthesis maps sample indices to sketch columns
    #[arg(long, value_enum, default_value = "sweep")]
    column_scan: ColumnScanQuirk,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = wavesketch::run(cli.frequency, cli.column_scan) {
        eprintln!("Application error: {e}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_mean_the_standard_tuning_tone() {
        let cli = Cli::try_parse_from(["wavesketch"]).unwrap();
        assert_eq!(cli.frequency, 440, "Default frequency incorrect.");
        assert_eq!(cli.column_scan, ColumnScanQuirk::Sweep, "Default column scan incorrect.");
    }

    #[test]
    fn frequency_accepts_both_ends_of_the_supported_range() {
        let cli = Cli::try_parse_from(["wavesketch", "--frequency", "55"]).unwrap();
        assert_eq!(cli.frequency, 55, "Lowest supported frequency rejected.");

        let cli = Cli::try_parse_from(["wavesketch", "-f", "1760"]).unwrap();
        assert_eq!(cli.frequency, 1760, "Highest supported frequency rejected.");
    }

    #[test]
    fn frequency_outside_the_supported_range_is_rejected() {
        assert!(Cli::try_parse_from(["wavesketch", "--frequency", "0"]).is_err(), "Zero frequency accepted.");
        assert!(Cli::try_parse_from(["wavesketch", "--frequency", "54"]).is_err(), "Frequency below the range accepted.");
        assert!(Cli::try_parse_from(["wavesketch", "--frequency", "1761"]).is_err(), "Frequency above the range accepted.");
    }

    #[test]
    fn column_scan_selects_the_faithful_mode() {
        let cli = Cli::try_parse_from(["wavesketch", "--column-scan", "first-column"]).unwrap();
        assert_eq!(cli.column_scan, ColumnScanQuirk::FirstColumn, "Leftmost-column mode not selectable.");
    }
}
