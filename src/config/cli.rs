use crate::core::ConfigProvider;
use clap::Parser;
use std::ffi::OsString;

/// Long flags that may also be spelled with a single dash, e.g. `-from`.
const LONG_FLAGS: &[&str] = &[
    "from", "to", "offset", "limit", "config", "dry-run", "verbose", "help", "version",
];

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "minidd")]
#[command(version, about = "Copy a byte range from one file to another")]
pub struct CliConfig {
    /// File to read from
    #[arg(long, value_name = "PATH")]
    pub from: Option<String>,

    /// File to write to (truncated, or created when absent)
    #[arg(long, value_name = "PATH")]
    pub to: Option<String>,

    /// Offset in the input file [default: 0]
    #[arg(long, allow_negative_numbers = true)]
    pub offset: Option<i64>,

    /// Maximum number of bytes to transfer, 0 for no limit [default: 0]
    #[arg(long, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// TOML file with a [copy] table; flags given here take precedence
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,

    /// Validate and show what would be copied without touching any file
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Parses the process arguments, accepting Go-style `-flag` spellings.
    pub fn from_env_args() -> Self {
        Self::parse_from(normalize_go_style_flags(std::env::args_os()))
    }
}

impl ConfigProvider for CliConfig {
    fn from_path(&self) -> Option<&str> {
        self.from.as_deref()
    }

    fn to_path(&self) -> Option<&str> {
        self.to.as_deref()
    }

    fn offset(&self) -> Option<i64> {
        self.offset
    }

    fn limit(&self) -> Option<i64> {
        self.limit
    }
}

/// Rewrites `-from x` and `-from=x` into `--from x` / `--from=x` for the known
/// long flags. Anything after a bare `--` is passed through.
pub fn normalize_go_style_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;

    args.into_iter()
        .map(Into::<OsString>::into)
        .enumerate()
        .map(|(idx, arg)| {
            if idx == 0 || passthrough {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                passthrough = true;
                return arg;
            }
            match text.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') => {
                    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
                    if LONG_FLAGS.contains(&name) {
                        OsString::from(format!("-{}", text))
                    } else {
                        arg
                    }
                }
                _ => arg,
            }
        })
        .collect()
}
