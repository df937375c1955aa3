use clap::{Args, ValueEnum};
use eyre::{Context, Result};
use hookwright_codegen::defaults;
use hookwright_options::Options;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Toml,
    Json,
}

#[derive(Args)]
pub struct DefaultsCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Toml)]
    pub format: Format,
}

impl DefaultsCommand {
    pub fn run(&self) -> Result<()> {
        print!("{}", render(&defaults(), self.format)?);
        Ok(())
    }
}

fn render(options: &Options, format: Format) -> Result<String> {
    match format {
        Format::Toml => toml::to_string(options).wrap_err("Failed to serialize defaults as TOML"),
        Format::Json => serde_json::to_string_pretty(options)
            .map(|json| json + "\n")
            .wrap_err("Failed to serialize defaults as JSON"),
    }
}

#[cfg(test)]
mod tests {
    use hookwright_options::PartialOptions;

    use super::*;

    #[test]
    fn test_defaults_reparse() {
        for format in [Format::Toml, Format::Json] {
            let text = render(&defaults(), format).unwrap();
            let partial = match format {
                Format::Toml => text.parse::<PartialOptions>().unwrap(),
                Format::Json => PartialOptions::from_json_str(&text).unwrap(),
            };
            assert_eq!(partial.normalize(), defaults());
        }
    }

    #[test]
    fn test_json_keys_are_camel_case() {
        let text = render(&defaults(), Format::Json).unwrap();
        assert!(text.contains("\"currencySettler\": false"));
        assert!(text.contains("\"access\": false"));
        assert!(text.contains("\"blockNumberOffset\": 10"));
    }
}
