use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

/// Font configuration for a canvas context.
///
/// Describes which fonts a surface can see using plain standard library types.
/// [`font_config_to_fontdb`] turns it into the `fontdb` database the text
/// backend works with.
#[derive(Clone, Debug)]
pub struct FontConfig {
    /// Custom font data to register (font file bytes + optional family override).
    pub custom_fonts: Vec<CustomFont>,
    /// Mappings from generic CSS family names to concrete font family names.
    pub generic_families: GenericFamilyMap,
    /// Whether to load system fonts (default: true).
    pub load_system_fonts: bool,
    /// Additional directories to scan for font files.
    pub font_dirs: Vec<PathBuf>,
    /// Whether font hinting is enabled for text rendering (default: false).
    pub hinting_enabled: bool,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            custom_fonts: Vec::new(),
            generic_families: GenericFamilyMap::defaults(),
            load_system_fonts: true,
            font_dirs: Vec::new(),
            hinting_enabled: false,
        }
    }
}

/// A custom font to register, consisting of raw font file data and an optional family name override.
#[derive(Clone, Debug)]
pub struct CustomFont {
    /// Raw font file data (TTF/OTF). Arc-wrapped for cheap cloning.
    pub data: Arc<Vec<u8>>,
    /// Optional family name override. If None, the family name is read from
    /// the font's name table.
    pub family_name: Option<String>,
}

impl CustomFont {
    /// Font data registered under an explicit family name.
    pub fn with_family(data: Arc<Vec<u8>>, family_name: impl Into<String>) -> Self {
        Self {
            data,
            family_name: Some(family_name.into()),
        }
    }
}

/// Mappings from generic CSS family names to concrete font family names, in priority order.
#[derive(Clone, Debug, Default)]
pub struct GenericFamilyMap {
    /// Concrete fonts for CSS "serif" (priority order).
    pub serif: Vec<String>,
    /// Concrete fonts for CSS "sans-serif" (priority order).
    pub sans_serif: Vec<String>,
    /// Concrete fonts for CSS "monospace" (priority order).
    pub monospace: Vec<String>,
    /// Concrete fonts for CSS "cursive" (priority order).
    pub cursive: Vec<String>,
}

impl GenericFamilyMap {
    /// Default generic family mappings. `cursive` prefers the script faces
    /// signatures are usually set in.
    pub fn defaults() -> Self {
        Self {
            sans_serif: vec!["Arial".into(), "Helvetica".into(), "Liberation Sans".into()],
            monospace: vec![
                "Courier New".into(),
                "Courier".into(),
                "Liberation Mono".into(),
                "DejaVu Sans Mono".into(),
            ],
            serif: vec![
                "Times New Roman".into(),
                "Times".into(),
                "Liberation Serif".into(),
                "DejaVu Serif".into(),
            ],
            cursive: vec![
                "Dancing Script".into(),
                "Great Vibes".into(),
                "Comic Sans MS".into(),
                "Apple Chancery".into(),
            ],
        }
    }
}

/// Convert a [`FontConfig`] into a [`fontdb::Database`].
pub fn font_config_to_fontdb(config: &FontConfig) -> fontdb::Database {
    let mut db = fontdb::Database::new();

    if config.load_system_fonts {
        db.load_system_fonts();
    }

    for dir in &config.font_dirs {
        db.load_fonts_dir(dir);
    }

    for font in &config.custom_fonts {
        load_custom_font(&mut db, font);
    }

    apply_generic_families(&mut db, &config.generic_families);

    db
}

/// Load one custom font into `db`, renaming its faces when a family override is set.
///
/// Returns the ids of the faces that ended up in the database. An empty result
/// means the data held no face fontdb could read.
pub(crate) fn load_custom_font(db: &mut fontdb::Database, font: &CustomFont) -> Vec<fontdb::ID> {
    let ids = db.load_font_source(fontdb::Source::Binary(font.data.clone()));

    let Some(family) = &font.family_name else {
        return ids.to_vec();
    };

    // fontdb has no in-place rename; re-push each face with the new family list
    let mut renamed = Vec::with_capacity(ids.len());
    for id in ids.iter().copied() {
        if let Some(mut info) = db.face(id).cloned() {
            db.remove_face(id);
            info.families = vec![(family.clone(), fontdb::Language::English_UnitedStates)];
            renamed.push(db.push_face_info(info));
        }
    }
    renamed
}

/// Apply generic family mappings to a fontdb database, choosing the first available
/// family from each priority list.
fn apply_generic_families(db: &mut fontdb::Database, families: &GenericFamilyMap) {
    let available: HashSet<String> = db
        .faces()
        .flat_map(|face| face.families.iter().map(|(fam, _lang)| fam.clone()))
        .collect();

    let first_available =
        |candidates: &[String]| candidates.iter().find(|f| available.contains(*f)).cloned();

    if let Some(family) = first_available(&families.sans_serif) {
        db.set_sans_serif_family(family);
    }
    if let Some(family) = first_available(&families.monospace) {
        db.set_monospace_family(family);
    }
    if let Some(family) = first_available(&families.serif) {
        db.set_serif_family(family);
    }
    if let Some(family) = first_available(&families.cursive) {
        db.set_cursive_family(family);
    }
}
