//! Command-line definition and translation into snapshot options.

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use console::Style;
use eplib::{
    ContentFilter, ExcludeSet, FilterConfig, IncludeExpr, Mode, OutputFormat, SnapshotOptions,
};

/// Flags that take a value.
const VALUE_FLAGS: &[&str] = &["dir", "exclude", "include", "grep", "format"];

/// Flags that are switches (accepting an optional `=true`/`=false`).
const BOOL_FLAGS: &[&str] = &["dry", "fixed", "no-words", "verbose"];

/// Long flags also recognized with a single dash.
const PASSTHROUGH_FLAGS: &[&str] = &["help", "version"];

/// Rewrite single-dash long flags (`-dir x`, `-dry=false`) to the double-dash
/// form clap expects. Values following a value-taking flag are left alone,
/// as is everything after `--`.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut normalized = Vec::new();
    let mut expecting_value = false;
    let mut passthrough = false;

    for (i, arg) in args.into_iter().enumerate() {
        if i == 0 || passthrough {
            normalized.push(arg);
            continue;
        }
        if expecting_value {
            expecting_value = false;
            normalized.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            normalized.push(arg);
            continue;
        }

        let long = arg
            .strip_prefix("--")
            .or_else(|| arg.strip_prefix('-'))
            .filter(|rest| !rest.is_empty());
        let Some(rest) = long else {
            normalized.push(arg);
            continue;
        };

        let (name, has_value) = match rest.split_once('=') {
            Some((name, _)) => (name, true),
            None => (rest, false),
        };
        let known = VALUE_FLAGS.contains(&name)
            || BOOL_FLAGS.contains(&name)
            || PASSTHROUGH_FLAGS.contains(&name);
        if !known {
            normalized.push(arg);
            continue;
        }

        expecting_value = VALUE_FLAGS.contains(&name) && !has_value;
        normalized.push(format!("--{}", rest));
    }

    normalized
}

fn switch(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .action(ArgAction::Set)
        .num_args(0..=1)
        .require_equals(true)
        .default_value("false")
        .default_missing_value("true")
        .value_parser(value_parser!(bool))
        .help(help)
}

/// Build the clap Command structure
pub fn build_command() -> Command {
    Command::new("ep")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Print the files tracked by a git repository, or list them with word counts")
        .override_usage("ep [flags]")
        .arg(
            Arg::new("dir")
                .long("dir")
                .value_name("DIR")
                .default_value(".")
                .allow_hyphen_values(true)
                .help("Directory to operate in"),
        )
        .arg(switch(
            "dry",
            "Only list files (with word counts) without showing contents",
        ))
        .arg(
            Arg::new("exclude")
                .long("exclude")
                .value_name("PATTERNS")
                .allow_hyphen_values(true)
                .help("Comma-separated list of patterns to exclude (e.g. 'assets/,.png,.bin')"),
        )
        .arg(
            Arg::new("include")
                .long("include")
                .value_name("EXPR")
                .allow_hyphen_values(true)
                .help(
                    "Patterns to include: comma-separated for OR logic, semicolon-separated \
                     groups for AND logic (e.g. '.go,.md' or 'src;.go,.cpp')",
                ),
        )
        .arg(
            Arg::new("grep")
                .long("grep")
                .value_name("REGEX")
                .allow_hyphen_values(true)
                .help("Only include files matching this regex pattern (e.g. '(foo|bar).*')"),
        )
        .arg(switch("fixed", "Treat the grep pattern as a literal string"))
        .arg(switch("no-words", "Do not count words when listing files"))
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("FORMAT")
                .default_value("text")
                .value_parser(["text", "json"])
                .help("Output format: text, or json (one object per line)"),
        )
        .arg(switch("verbose", "Log filtering decisions to stderr"))
}

/// Parsed invocation.
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Operating directory
    pub dir: PathBuf,
    /// Raise log level to debug
    pub verbose: bool,
    pub options: SnapshotOptions,
}

fn flag(matches: &ArgMatches, name: &str) -> bool {
    matches.get_one::<bool>(name).copied().unwrap_or(false)
}

fn value<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(|s| s.as_str())
        .unwrap_or("")
}

/// Build filter config from matches
pub fn build_filter(matches: &ArgMatches) -> FilterConfig {
    FilterConfig {
        exclude: ExcludeSet::parse(value(matches, "exclude")),
        include: IncludeExpr::parse(value(matches, "include")),
        content: ContentFilter::from_grep(value(matches, "grep"), flag(matches, "fixed")),
    }
}

impl CliArgs {
    /// Whether `-verbose` was given, available before the full parse.
    pub fn verbose(matches: &ArgMatches) -> bool {
        flag(matches, "verbose")
    }

    pub fn from_matches(matches: &ArgMatches) -> Self {
        let format = value(matches, "format")
            .parse::<OutputFormat>()
            .unwrap_or_default();
        let mode = if flag(matches, "dry") {
            Mode::Listing
        } else {
            Mode::Dump
        };

        let options = SnapshotOptions::new()
            .filter(build_filter(matches))
            .mode(mode)
            .format(format)
            .count_words(!flag(matches, "no-words"))
            .style(Style::new().bold());

        Self {
            dir: PathBuf::from(value(matches, "dir")),
            verbose: Self::verbose(matches),
            options,
        }
    }
}
