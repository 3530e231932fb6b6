//! The blaster: scan, classify, dedup, register, aggregate

use crate::config::BlastConfig;
use crate::constants::LOG_TARGET;
use crate::error::ScanError;
use crate::font::{classify_with, DirectoryScanner, EntryKind, FontDescriptor, FontRecord,
                  Registrar, RegistrationGateway, RegistrationOutcome};
use crate::traits::{FileSystem, FontHost};
use std::path::{Path, PathBuf};

/// Emits a diagnostic only when the blaster was configured with `debug`
macro_rules! status {
    ($enabled:expr, $level:ident, $($arg:tt)+) => {
        if $enabled {
            tracing::$level!(target: LOG_TARGET, $($arg)+);
        }
    };
}

/// Everything one blast observed
#[derive(Debug, Default)]
pub struct BlastReport {
    /// Accepted names: root-level files first, then nested bundles, in listing order
    pub names: Vec<String>,
    /// One outcome per candidate that went to the host
    pub outcomes: Vec<RegistrationOutcome>,
    /// Candidates answered from the registrar without touching the host
    pub reused: Vec<FontRecord>,
    /// Directories that could not be listed
    pub scan_failures: Vec<ScanError>,
}

impl BlastReport {
    /// Accepted names ordered by name, for callers that need stable output.
    pub fn sorted_names(&self) -> Vec<String> {
        let mut names = self.names.clone();
        names.sort();
        names
    }

    pub fn failures(&self) -> impl Iterator<Item = &RegistrationOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.is_success())
    }

    /// Number of fonts newly registered with the host during this blast.
    pub fn registered_count(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.is_success()).count()
    }
}

/// Discovers fonts under a root directory and registers them with a host
///
/// Nothing a blast runs into is fatal: unreadable directories and bad font
/// files only drop themselves from the result. Calls are synchronous and the
/// blaster is not meant to be shared across threads.
pub struct FontBlaster<F, H> {
    fs: F,
    gateway: RegistrationGateway<H>,
    registrar: Registrar,
    scanner: DirectoryScanner,
    config: BlastConfig,
}

impl<F: FileSystem, H: FontHost> FontBlaster<F, H> {
    pub fn new(fs: F, host: H) -> Self {
        Self::with_config(fs, host, BlastConfig::default())
    }

    pub fn with_config(fs: F, host: H, config: BlastConfig) -> Self {
        FontBlaster {
            fs,
            gateway: RegistrationGateway::new(host),
            registrar: Registrar::new(),
            scanner: DirectoryScanner::new(&config.bundle_suffix, config.include_hidden),
            config,
        }
    }

    /// Replace the registrar, e.g. with one carried over from an earlier blaster.
    pub fn with_registrar(mut self, registrar: Registrar) -> Self {
        self.registrar = registrar;
        self
    }

    pub fn set_debug(&mut self, enabled: bool) {
        self.config.debug = enabled;
    }

    pub fn config(&self) -> &BlastConfig {
        &self.config
    }

    pub fn registrar(&self) -> &Registrar {
        &self.registrar
    }

    pub fn host(&self) -> &H {
        self.gateway.host()
    }

    /// Every name registered through this blaster's registrar, oldest first.
    pub fn loaded_fonts(&self) -> Vec<String> {
        self.registrar.loaded_fonts()
    }

    pub fn into_parts(self) -> (F, H, Registrar) {
        (self.fs, self.gateway.into_host(), self.registrar)
    }

    /// Register every font under `root` and its nested bundles.
    ///
    /// Returns the names accepted during this call, including fonts that an
    /// earlier blast already registered and that were found again.
    pub fn blast(&mut self, root: &Path) -> Vec<String> {
        self.blast_report(root).names
    }

    /// [`blast`](Self::blast), then hand the names to `on_complete` before returning.
    pub fn blast_with<C>(&mut self, root: &Path, on_complete: C) -> Vec<String>
    where
        C: FnOnce(&[String]),
    {
        let names = self.blast(root);
        on_complete(&names);
        names
    }

    /// Blast the directory containing the running executable.
    pub fn blast_default(&mut self) -> Vec<String> {
        match BlastConfig::default_root() {
            Ok(root) => self.blast(&root),
            Err(err) => {
                status!(
                    self.config.debug,
                    warn,
                    "Could not determine the application directory: {}",
                    err
                );
                Vec::new()
            }
        }
    }

    pub fn blast_report(&mut self, root: &Path) -> BlastReport {
        let mut report = BlastReport::default();
        self.blast_directory(root, &mut report);

        let extra_roots: Vec<PathBuf> = self.config.extra_roots.clone();
        for extra in &extra_roots {
            self.blast_directory(extra, &mut report);
        }

        tracing::trace!(
            target: LOG_TARGET,
            root = %root.display(),
            accepted = report.names.len(),
            registered = report.registered_count(),
            reused = report.reused.len(),
            "blast finished"
        );
        report
    }

    fn blast_directory(&mut self, directory: &Path, report: &mut BlastReport) {
        let entries = match self.scanner.list(&self.fs, directory) {
            Ok(entries) => entries,
            Err(err) => {
                status!(
                    self.config.debug,
                    warn,
                    "There was an error loading fonts from the bundle. Path: {}. Error: {}",
                    directory.display(),
                    err
                );
                report.scan_failures.push(err);
                return;
            }
        };

        let mut bundles = Vec::new();
        let mut candidates = 0usize;
        for entry in entries {
            match entry.kind {
                EntryKind::RegularFile => {
                    let classified = classify_with(&entry.name, &self.config.extensions);
                    if let Some((name, extension)) = classified {
                        candidates += 1;
                        let font = FontDescriptor {
                            location: entry.path,
                            name,
                            extension,
                        };
                        self.load_font(&font, report);
                    }
                }
                EntryKind::BundleDirectory => bundles.push(entry.path),
                EntryKind::OtherDirectory => {}
            }
        }

        if candidates == 0 {
            status!(
                self.config.debug,
                debug,
                "No fonts were found in the bundle path: {}.",
                directory.display()
            );
        }

        for bundle in bundles {
            self.blast_directory(&bundle, report);
        }
    }

    fn load_font(&mut self, font: &FontDescriptor, report: &mut BlastReport) {
        let key = self.fs.canonicalize(&font.location);
        if let Some(record) = self.registrar.lookup(&key) {
            status!(
                self.config.debug,
                debug,
                "Font '{}' was already loaded as '{}'.",
                font.name,
                record.registered_name
            );
            report.names.push(record.registered_name.clone());
            report.reused.push(record.clone());
            return;
        }

        let outcome = self.gateway.register(&self.fs, font);
        match &outcome {
            RegistrationOutcome::Success(record) => {
                status!(
                    self.config.debug,
                    debug,
                    "Successfully loaded font: '{}'.",
                    record.registered_name
                );
                self.registrar.record(FontRecord {
                    location: key,
                    registered_name: record.registered_name.clone(),
                });
                report.names.push(record.registered_name.clone());
            }
            RegistrationOutcome::Failure { error, .. } => {
                status!(self.config.debug, warn, "Failed to load font '{}': {}", font.name, error);
            }
        }
        report.outcomes.push(outcome);
    }
}
