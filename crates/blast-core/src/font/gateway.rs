//! Bridge between candidate font files and the host font subsystem

use crate::error::RegistrationError;
use crate::font::{FontDescriptor, FontRecord, RegistrationOutcome};
use crate::traits::{FileSystem, FontHost};

/// Reads candidate files and hands their bytes to the host for registration
///
/// A successful registration is permanent for the life of the process; there
/// is no way back out through the gateway.
pub struct RegistrationGateway<H> {
    host: H,
}

impl<H: FontHost> RegistrationGateway<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn register<F: FileSystem + ?Sized>(&mut self, fs: &F, font: &FontDescriptor) -> RegistrationOutcome {
        match self.try_register(fs, font) {
            Ok(registered_name) => RegistrationOutcome::Success(FontRecord {
                location: font.location.clone(),
                registered_name,
            }),
            Err(error) => RegistrationOutcome::Failure {
                location: font.location.clone(),
                error,
            },
        }
    }

    fn try_register<F: FileSystem + ?Sized>(&mut self, fs: &F, font: &FontDescriptor) -> Result<String, RegistrationError> {
        let data = fs.read(&font.location)?;
        let handle = self
            .host
            .construct_font(data)
            .ok_or(RegistrationError::MalformedFont)?;
        Ok(self.host.register_font(handle)?)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dummy_backend::{EchoHost, MemoryFs};
    use std::path::Path;

    fn descriptor(path: &str) -> FontDescriptor {
        let path = Path::new(path);
        let file = path.file_name().unwrap().to_str().unwrap();
        let (name, ext) = crate::font::classify(file).unwrap();
        FontDescriptor::new(path.parent().unwrap(), &name, &ext)
    }

    #[test]
    fn test_success_uses_host_name() {
        let mut fs = MemoryFs::new();
        fs.add_file("/app/Roboto.ttf", b"Roboto-Regular");

        let mut gateway = RegistrationGateway::new(EchoHost::new());
        let outcome = gateway.register(&fs, &descriptor("/app/Roboto.ttf"));

        let record = outcome.record().expect("registration succeeds");
        assert_eq!(record.registered_name, "Roboto-Regular");
        assert_eq!(record.location, Path::new("/app/Roboto.ttf"));
        assert_eq!(gateway.host().registered(), &["Roboto-Regular".to_string()]);
    }

    #[test]
    fn test_missing_file_is_io_failure() {
        let fs = MemoryFs::new();
        let mut gateway = RegistrationGateway::new(EchoHost::new());
        let outcome = gateway.register(&fs, &descriptor("/app/Gone.ttf"));

        assert!(!outcome.is_success());
        assert_eq!(outcome.location(), Path::new("/app/Gone.ttf"));
        assert!(outcome.error().unwrap().is_io());
        assert_eq!(gateway.host().construct_calls(), 0);
    }

    #[test]
    fn test_malformed_bytes() {
        let mut fs = MemoryFs::new();
        fs.add_file("/app/Broken.ttf", &[0xff, 0xfe, 0x00]);

        let mut gateway = RegistrationGateway::new(EchoHost::new());
        let outcome = gateway.register(&fs, &descriptor("/app/Broken.ttf"));

        assert!(outcome.error().unwrap().is_malformed());
        assert!(gateway.host().registered().is_empty());
    }

    #[test]
    fn test_platform_rejection_keeps_detail() {
        let mut fs = MemoryFs::new();
        fs.add_file("/app/Dupe.otf", b"Dupe");

        let mut host = EchoHost::new();
        host.reject("Dupe", "font already registered");
        let mut gateway = RegistrationGateway::new(host);
        let outcome = gateway.register(&fs, &descriptor("/app/Dupe.otf"));

        match outcome.error() {
            Some(RegistrationError::PlatformRejection { detail }) => {
                assert_eq!(detail, "font already registered");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }
}
