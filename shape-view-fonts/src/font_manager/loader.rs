//! Font file loading and face inspection.

use std::path::Path;
use std::sync::Arc;

use fontdb::{Database, Source};

use super::types::FaceSummary;
use crate::error::FontError;

/// Read a font file into shared memory.
pub(super) fn read_font_file(path: &Path) -> Result<Arc<Vec<u8>>, FontError> {
    let bytes = std::fs::read(path).map_err(|source| FontError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(Arc::new(bytes))
}

/// Register the font bytes with a fontdb database and describe the requested face.
///
/// fontdb parses every face of a collection, which gives us the face count
/// needed to validate `face_index` before swash or rustybuzz see it.
pub(super) fn inspect_faces(
    path: &Path,
    data: &Arc<Vec<u8>>,
    face_index: u32,
) -> Result<FaceSummary, FontError> {
    let mut font_db = Database::new();
    let ids = font_db.load_font_source(Source::Binary(data.clone()));
    let face_count = ids.len();
    log::debug!("{} contains {} face(s)", path.display(), face_count);

    if face_count == 0 {
        return Err(FontError::InvalidFont {
            path: path.to_path_buf(),
        });
    }

    let face = ids
        .iter()
        .filter_map(|id| font_db.face(*id))
        .find(|face| face.index == face_index)
        .ok_or_else(|| FontError::FaceIndexOutOfRange {
            path: path.to_path_buf(),
            index: face_index,
            face_count,
        })?;

    Ok(FaceSummary {
        family: face
            .families
            .first()
            .map(|(name, _)| name.clone())
            .unwrap_or_default(),
        post_script_name: face.post_script_name.clone(),
        face_count,
        monospaced: face.monospaced,
    })
}
