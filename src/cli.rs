//! Command-line front end: argument parsing and report rendering

use crate::error::{CliError, CliResult};
use blast_core::{BlastConfig, BlastReport, RegistrationOutcome};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "fontblaster")]
#[command(about = "Register every font bundled under a directory")]
pub struct Args {
    /// Directory to scan (defaults to the directory holding this executable)
    pub root: Option<PathBuf>,

    /// Log every font loaded, skipped or rejected
    #[arg(short, long)]
    pub debug: bool,

    /// Directory-name suffix of nested bundles to descend into
    #[arg(long, default_value = ".bundle")]
    pub bundle_suffix: String,

    /// Additional directory to scan after the root (repeatable)
    #[arg(long = "extra-root")]
    pub extra_roots: Vec<PathBuf>,

    /// Also scan the user's documents directory
    #[arg(long)]
    pub documents: bool,

    /// Include hidden entries
    #[arg(long)]
    pub hidden: bool,

    /// Print names sorted instead of in discovery order
    #[arg(long)]
    pub sorted: bool,

    /// Exit with an error when nothing was registered
    #[arg(long)]
    pub require_fonts: bool,
}

impl Args {
    pub fn config(&self) -> BlastConfig {
        let mut config = BlastConfig::new()
            .with_debug(self.debug)
            .with_bundle_suffix(&self.bundle_suffix)
            .with_hidden(self.hidden);
        for root in &self.extra_roots {
            config = config.with_extra_root(root.clone());
        }
        if self.documents {
            config = config.with_documents_dir();
        }
        config
    }

    /// The explicit root, or the executable's directory.
    pub fn resolve_root(&self) -> CliResult<PathBuf> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => BlastConfig::default_root()?,
        };
        if !root.is_dir() {
            return Err(CliError::NotADirectory(root));
        }
        Ok(root)
    }
}

/// Blast the root named by `args` with the fontdb host.
pub fn run(args: &Args) -> CliResult<BlastReport> {
    let root = args.resolve_root()?;
    let mut blaster = crate::blaster(args.config());
    let report = blaster.blast_report(&root);

    if args.require_fonts && report.names.is_empty() {
        return Err(CliError::NothingRegistered);
    }
    Ok(report)
}

/// One line per accepted font, then a summary of anything that failed.
pub fn render(report: &BlastReport, sorted: bool) -> String {
    let names = if sorted { report.sorted_names() } else { report.names.clone() };

    let accepted = names.len();
    let mut lines = names;

    for outcome in report.failures() {
        if let RegistrationOutcome::Failure { location, error } = outcome {
            lines.push(format!("failed: {} ({error})", location.display()));
        }
    }
    lines.extend(
        report
            .scan_failures
            .iter()
            .map(|failure| format!("unreadable: {failure}")),
    );

    lines.push(format!(
        "{} font(s): {} registered, {} already loaded",
        accepted,
        report.registered_count(),
        report.reused.len()
    ));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use blast_core::FontRecord;

    #[test]
    fn test_parse_defaults() {
        let args = Args::parse_from(["fontblaster", "/opt/app"]);
        assert_eq!(args.root, Some(PathBuf::from("/opt/app")));
        assert!(!args.debug);
        assert_eq!(args.bundle_suffix, ".bundle");
        assert!(args.extra_roots.is_empty());

        let config = args.config();
        assert!(!config.debug);
        assert_eq!(config.bundle_suffix, ".bundle");
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::parse_from([
            "fontblaster", "--debug", "--bundle-suffix", ".pack", "--extra-root", "/a",
            "--extra-root", "/b", "--sorted",
        ]);
        let config = args.config();
        assert!(config.debug);
        assert_eq!(config.bundle_suffix, ".pack");
        assert_eq!(config.extra_roots, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
        assert!(args.sorted);
        assert!(args.root.is_none());
    }

    #[test]
    fn test_render_lists_failures_before_summary() {
        let report = BlastReport {
            names: vec!["Good".into()],
            outcomes: vec![RegistrationOutcome::Failure {
                location: PathBuf::from("/app/Bad.ttf"),
                error: blast_core::RegistrationError::MalformedFont,
            }],
            scan_failures: vec![blast_core::ScanError::Io {
                path: PathBuf::from("/app/Locked.bundle"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            }],
            ..Default::default()
        };

        let lines: Vec<String> = render(&report, false).lines().map(String::from).collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Good");
        assert_eq!(lines[1], "failed: /app/Bad.ttf (font data could not be parsed)");
        assert!(lines[2].starts_with("unreadable: failed to list directory /app/Locked.bundle"));
        assert_eq!(lines[3], "1 font(s): 0 registered, 0 already loaded");
    }

    #[test]
    fn test_render_sorted_summary() {
        let report = BlastReport {
            names: vec!["Zeta".into(), "Alpha".into()],
            reused: vec![FontRecord {
                location: PathBuf::from("/app/Alpha.ttf"),
                registered_name: "Alpha".into(),
            }],
            ..Default::default()
        };

        let text = render(&report, true);
        assert_eq!(text, "Alpha\nZeta\n2 font(s): 0 registered, 1 already loaded");
    }
}
