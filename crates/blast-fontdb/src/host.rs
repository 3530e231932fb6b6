use blast_core::constants::LOG_TARGET;
use blast_core::{FontHost, PlatformError};
use fontdb::{Database, Source, ID};
use std::sync::Arc;

type SharedData = Arc<dyn AsRef<[u8]> + Sync + Send>;

/// Font bytes that parsed successfully, waiting to be registered
pub struct ParsedFont {
    data: SharedData,
    /// Glyph count reported by the parser
    glyph_count: u16,
    units_per_em: f32,
}

impl ParsedFont {
    pub fn glyph_count(&self) -> u16 {
        self.glyph_count
    }

    pub fn units_per_em(&self) -> f32 {
        self.units_per_em
    }

    pub fn len(&self) -> usize {
        AsRef::<[u8]>::as_ref(&*self.data).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for ParsedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedFont")
            .field("bytes", &self.len())
            .field("glyph_count", &self.glyph_count)
            .field("units_per_em", &self.units_per_em)
            .finish()
    }
}

/// Host backed by a `fontdb::Database`
///
/// Registration is refused when the database already holds a face with the
/// same PostScript name, matching how platform font managers treat duplicates.
pub struct FontDbHost {
    db: Database,
}

impl Default for FontDbHost {
    fn default() -> Self {
        Self::new()
    }
}

impl FontDbHost {
    pub fn new() -> Self {
        Self { db: Database::new() }
    }

    /// Wrap an existing database, e.g. one preloaded with system fonts.
    pub fn with_database(db: Database) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn into_database(self) -> Database {
        self.db
    }

    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    pub fn contains(&self, post_script_name: &str) -> bool {
        self.db.faces().any(|face| face.post_script_name == post_script_name)
    }

    /// Family names of every registered face, in registration order.
    pub fn family_names(&self) -> Vec<String> {
        self.db
            .faces()
            .filter_map(|face| face.families.first().map(|(family, _)| family.clone()))
            .collect()
    }

    /// PostScript names of the faces `data` would register, probing a scratch database.
    fn probe_names(data: &SharedData) -> Vec<String> {
        let mut scratch = Database::new();
        let ids = scratch.load_font_source(Source::Binary(data.clone()));
        ids.iter()
            .filter_map(|id| scratch.face(*id))
            .map(|face| face.post_script_name.clone())
            .collect()
    }
}

impl FontHost for FontDbHost {
    type Handle = ParsedFont;

    fn construct_font(&mut self, data: Vec<u8>) -> Option<ParsedFont> {
        let font = match fontdue::Font::from_bytes(data.as_slice(), fontdue::FontSettings::default()) {
            Ok(font) => font,
            Err(err) => {
                tracing::trace!(target: LOG_TARGET, "fontdue rejected font data: {}", err);
                return None;
            }
        };
        Some(ParsedFont {
            glyph_count: font.glyph_count(),
            units_per_em: font.units_per_em(),
            data: Arc::new(data),
        })
    }

    fn register_font(&mut self, font: ParsedFont) -> Result<String, PlatformError> {
        let names = Self::probe_names(&font.data);
        let Some(primary) = names.first().cloned() else {
            return Err(PlatformError::new("font data contains no usable faces"));
        };
        if let Some(taken) = names.iter().find(|name| self.contains(name)) {
            return Err(PlatformError::new(format!(
                "a font with the PostScript name '{taken}' is already registered"
            )));
        }

        let ids: Vec<ID> = self.db.load_font_source(Source::Binary(font.data)).into_iter().collect();
        tracing::trace!(target: LOG_TARGET, faces = ids.len(), "registered '{}'", primary);
        Ok(primary)
    }
}
