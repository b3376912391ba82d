use crate::domain::model::Series;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Decode color bands, e.g. `decode yellow violet red gold`
    Decode {
        #[arg(required = true, num_args = 1..=6)]
        colors: Vec<String>,

        /// 4, 5 or 6; inferred from the number of colors when omitted
        #[arg(short, long)]
        bands: Option<u8>,
    },

    /// Color bands for a resistance in ohms
    Encode {
        #[arg(allow_hyphen_values = true)]
        ohms: f64,

        /// 4 or 5
        #[arg(short, long)]
        bands: Option<u8>,
    },

    /// Nearest E12/E24/E96 value
    Nearest {
        #[arg(allow_hyphen_values = true)]
        ohms: f64,

        #[arg(short, long)]
        series: Option<Series>,
    },

    /// Decode an SMD resistor marking (103, 1002, 4R7)
    Smd { code: String },

    /// Decode a 3-digit ceramic capacitor marking (104)
    Cap { code: String },

    /// Solve Ohm's law from any two quantities
    Ohms {
        #[arg(long)]
        volts: Option<f64>,
        #[arg(long)]
        amps: Option<f64>,
        #[arg(long)]
        ohms: Option<f64>,
        #[arg(long)]
        watts: Option<f64>,
    },

    /// Series resistor for an LED
    Led {
        #[arg(long)]
        supply: f64,
        #[arg(long)]
        forward: f64,
        #[arg(long)]
        current_ma: f64,
    },

    /// Voltage divider output, or the R2 needed for a target output
    Divider {
        #[arg(long)]
        vin: f64,
        #[arg(long)]
        r1: f64,
        #[arg(long, conflicts_with = "vout", required_unless_present = "vout")]
        r2: Option<f64>,
        #[arg(long)]
        vout: Option<f64>,
    },

    /// Nearest values for every row of a CSV file with a `target_ohms` column
    Batch {
        input: PathBuf,
        output: PathBuf,

        #[arg(short, long)]
        series: Option<Series>,
    },
}
