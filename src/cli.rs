use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vulnscope::application::dto::OutputFormat;

/// Client for the vulnerability scanner backend
#[derive(Parser, Debug)]
#[command(name = "vulnscope")]
#[command(version)]
#[command(
    about = "Upload source files to a vulnerability scanner, review its findings and ask security questions",
    long_about = None
)]
pub struct Args {
    /// Base URL of the scanner backend [default: http://localhost:5000]
    #[arg(long, global = true, value_name = "URL")]
    pub server: Option<String>,

    /// Directory holding the persisted scan state [default: .vulnscope]
    #[arg(long, global = true, value_name = "DIR")]
    pub state_dir: Option<PathBuf>,

    /// Config file (defaults to ./vulnscope.config.yml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format: text, markdown or json [default: text]
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Check whether the scanner backend is reachable
    Status,

    /// Upload a source file for scanning and show the analysis
    Scan {
        /// Source file to scan
        file: PathBuf,

        /// Exit with code 1 when vulnerabilities are found
        #[arg(long)]
        fail_on_findings: bool,
    },

    /// Show the analysis of the last scanned file
    Show {
        /// Exit with code 1 when vulnerabilities are found
        #[arg(long)]
        fail_on_findings: bool,
    },

    /// Show the remediated code of the last scanned file with changed lines marked
    Diff,

    /// Request a deep analysis of a source file
    Deep {
        /// Source file to analyze
        file: PathBuf,
    },

    /// Ask a security question; without a question, starts an interactive session
    Ask {
        /// The question; several words are joined with spaces (use `--` before words starting with `-`)
        question: Vec<String>,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Command {
    pub fn fail_on_findings(&self) -> bool {
        matches!(
            self,
            Command::Scan {
                fail_on_findings: true,
                ..
            } | Command::Show {
                fail_on_findings: true
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("vulnscope").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_scan_with_global_options() {
        let args = parse(&[
            "scan",
            "app.py",
            "--fail-on-findings",
            "--server",
            "http://scanner:5000",
            "-f",
            "md",
        ]);
        assert_eq!(
            args.command,
            Command::Scan {
                file: PathBuf::from("app.py"),
                fail_on_findings: true
            }
        );
        assert_eq!(args.server.as_deref(), Some("http://scanner:5000"));
        assert_eq!(args.format, Some(OutputFormat::Markdown));
        assert!(args.command.fail_on_findings());
    }

    #[test]
    fn test_parse_defaults_leave_options_unset() {
        let args = parse(&["show"]);
        assert!(args.server.is_none());
        assert!(args.format.is_none());
        assert!(args.state_dir.is_none());
        assert!(!args.no_color);
        assert!(!args.command.fail_on_findings());
    }

    #[test]
    fn test_parse_ask_joins_words() {
        let args = parse(&["ask", "what", "is", "XSS?"]);
        assert_eq!(
            args.command,
            Command::Ask {
                question: vec!["what".to_string(), "is".to_string(), "XSS?".to_string()]
            }
        );

        let interactive = parse(&["ask"]);
        assert_eq!(interactive.command, Command::Ask { question: vec![] });
    }

    #[test]
    fn test_parse_ask_keeps_global_options_after_question() {
        let args = parse(&["ask", "what", "is", "xss", "--format", "json", "-o", "answer.json"]);
        assert_eq!(
            args.command,
            Command::Ask {
                question: vec!["what".to_string(), "is".to_string(), "xss".to_string()]
            }
        );
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.output, Some(PathBuf::from("answer.json")));
    }

    #[test]
    fn test_parse_ask_hyphen_words_after_separator() {
        let args = parse(&["ask", "--", "is", "-rf", "dangerous?"]);
        assert_eq!(
            args.command,
            Command::Ask {
                question: vec![
                    "is".to_string(),
                    "-rf".to_string(),
                    "dangerous?".to_string()
                ]
            }
        );
    }

    #[test]
    fn test_parse_rejects_invalid_format() {
        let result = Args::try_parse_from(["vulnscope", "-f", "xml", "status"]);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid format"));
    }

    #[test]
    fn test_parse_requires_subcommand() {
        assert!(Args::try_parse_from(["vulnscope"]).is_err());
        assert!(Args::try_parse_from(["vulnscope", "scan"]).is_err());
    }
}
