use clap::Parser;
use std::path::PathBuf;

/// Register a federated SAML app from the terminal
#[derive(Debug, Parser)]
#[command(name = "fedsaml", version, about, long_about = None)]
pub struct Cli {
    /// Print the default configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Config file (defaults to ./fedsaml.toml, then /etc/fedsaml/config.toml)
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["fedsaml"]).unwrap();
        assert!(!cli.print_config);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_config_path_and_flag() {
        let cli = Cli::try_parse_from(["fedsaml", "--print-config", "/tmp/fedsaml.toml"]).unwrap();
        assert!(cli.print_config);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/fedsaml.toml")));
    }

    #[test]
    fn test_help_and_version_are_not_config_paths() {
        let err = Cli::try_parse_from(["fedsaml", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);

        let err = Cli::try_parse_from(["fedsaml", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let err = Cli::try_parse_from(["fedsaml", "--prnt-config"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
