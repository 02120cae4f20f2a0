use clap::{Parser, Subcommand};
use tracing::debug;

use compass_heading::error::Result;
use compass_heading::{find_heading, COMPASS};

#[derive(Parser)]
#[command(name = "compass-heading")]
#[command(about = "Name compass headings at four granularity levels")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Name an azimuth with the full 32-wind rose
    compass-heading resolve 57

    # Cardinal directions only
    compass-heading resolve 57 --order 1

    # Negative and oversized angles wrap
    compass-heading resolve -- -10

    # Dump the half-wind table as JSON
    compass-heading table --order 3 --format json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve an azimuth to a named heading
    Resolve {
        /// Azimuth in degrees clockwise from North; any finite angle
        azimuth: f64,

        /// Granularity level (1=cardinal .. 4=quarter-wind)
        #[arg(long, default_value = "4")]
        order: u8,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Print the heading table
    Table {
        /// Granularity level (1=cardinal .. 4=quarter-wind)
        #[arg(long, default_value = "4")]
        order: u8,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

pub fn resolve(azimuth: f64, order: u8, format: &str) -> Result<()> {
    let heading = find_heading(azimuth, order)?;
    debug!(azimuth, order, "resolved to {}", heading.abbr);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&heading)?);
    } else {
        println!("{} ({}) - {}°", heading.name, heading.abbr, heading.azimuth);
    }

    Ok(())
}

pub fn print_table(order: u8, format: &str) -> Result<()> {
    let points = COMPASS.filtered_view(order)?;
    debug!(order, rows = points.len(), "dumping heading table");

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&points)?);
    } else {
        for point in points {
            println!("{:>7.2}  {:<5} {}", point.azimuth, point.abbr, point.name);
        }
    }

    Ok(())
}
