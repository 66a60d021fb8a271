use clap::Parser;

use crate::report::OutputFormat;

/// enginecalc - engine performance calculator
///
/// Prompts for displacement, stroke, RPM, volumetric efficiency and torque,
/// then prints horsepower, torque, BMEP, piston speed and airflow.
#[derive(Parser, Debug)]
#[command(name = "enginecalc")]
#[command(about = "Compute engine horsepower, BMEP, piston speed and airflow")]
#[command(version)]
pub struct Cli {
    /// Report format written after the prompts.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_defaults_to_text() {
        let cli = Cli::try_parse_from(["enginecalc"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_format_json() {
        let cli = Cli::try_parse_from(["enginecalc", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["enginecalc", "--format", "xml"]).is_err());
    }
}
