use crate::utils::error::Result;
use crate::utils::validation::{validate_day, validate_month, validate_year, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "amduong")]
#[command(about = "Lịch âm dương: dual solar/lunar calendar with IVF schedule estimation")]
pub struct CliConfig {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit JSON instead of formatted text")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the month grid for a solar- or lunar-led month
    Grid {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
        #[arg(long, help = "Browse by lunar months instead of solar months")]
        lunar_led: bool,
        #[arg(long, help = "Mark this day (in the leading calendar) as selected")]
        select: Option<u32>,
    },
    /// Compute the IVF milestone schedule from an estimated birth date
    Schedule {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
        #[arg(long)]
        day: u32,
        #[arg(long, help = "Interpret the date as a lunar date")]
        lunar: bool,
        #[arg(long, help = "The lunar month is the leap month", requires = "lunar")]
        leap: bool,
    },
    /// Convert a single date between the two calendars
    Convert {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
        #[arg(long)]
        day: u32,
        #[arg(long, help = "Input is a lunar date (default: solar)")]
        from_lunar: bool,
        #[arg(long, help = "The lunar month is the leap month", requires = "from_lunar")]
        leap: bool,
    },
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match self.command {
            Command::Grid {
                year,
                month,
                select,
                ..
            } => {
                validate_year("year", year)?;
                validate_month("month", month)?;
                if let Some(day) = select {
                    validate_day("select", day)?;
                }
                Ok(())
            }
            Command::Schedule {
                year, month, day, ..
            }
            | Command::Convert {
                year, month, day, ..
            } => {
                validate_year("year", year)?;
                validate_month("month", month)?;
                validate_day("day", day)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_args_are_validated() {
        let config = CliConfig::parse_from(["amduong", "grid", "--year", "2027", "--month", "1"]);
        assert!(config.validate().is_ok());

        let config =
            CliConfig::parse_from(["amduong", "grid", "--year", "2027", "--month", "13"]);
        assert!(config.validate().is_err());

        let config =
            CliConfig::parse_from(["amduong", "grid", "--year", "1899", "--month", "1"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn schedule_args_are_validated() {
        let config = CliConfig::parse_from([
            "amduong", "schedule", "--year", "2028", "--month", "1", "--day", "1",
        ]);
        assert!(config.validate().is_ok());

        let config = CliConfig::parse_from([
            "amduong", "schedule", "--year", "2028", "--month", "1", "--day", "32",
        ]);
        assert!(config.validate().is_err());
    }
}
