//! Loading and saving pictures.
//!
//! Decoding and encoding are delegated to the `image` crate; the format is
//! chosen from the file contents on load and from the extension on save.

use std::path::Path;

use crate::error::{PictureError, Result};
use crate::types::Grid;

/// Load a picture from disk, dropping any alpha channel.
pub fn load_picture(path: &Path) -> Result<Grid> {
    let img = image::open(path)
        .map_err(|e| PictureError::Load {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .to_rgb8();

    Ok(Grid::from_rgb_image(&img))
}

/// Load several pictures, stopping at the first failure.
pub fn load_pictures<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Grid>> {
    paths.iter().map(|p| load_picture(p.as_ref())).collect()
}

/// Save a picture; the encoder is picked from the path's extension.
pub fn save_picture(grid: &Grid, path: &Path) -> Result<()> {
    let img = grid.to_rgb_image().ok_or_else(|| PictureError::Save {
        path: path.to_path_buf(),
        message: format!(
            "{}x{} exceeds the encoder's dimension limit",
            grid.width(),
            grid.height()
        ),
    })?;

    if img.width() == 0 || img.height() == 0 {
        return Err(PictureError::Save {
            path: path.to_path_buf(),
            message: format!("cannot encode a {}x{} picture", grid.width(), grid.height()),
        });
    }

    img.save(path).map_err(|e| PictureError::Save {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_png() {
        let grid = Grid::from_fn(3, 2, |x, y| Colour::rgb(x as u8 * 100, y as u8 * 200, 9));

        let dir = tempdir().unwrap();
        let path = dir.path().join("test.png");

        save_picture(&grid, &path).unwrap();
        assert!(path.exists());

        let loaded = load_picture(&path).unwrap();
        assert_eq!(loaded, grid);
    }

    #[test]
    fn test_load_drops_alpha() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("alpha.png");
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 0]));
        img.save(&path).unwrap();

        let loaded = load_picture(&path).unwrap();
        assert_eq!(loaded, Grid::filled(2, 2, Colour::rgb(10, 20, 30)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_picture(&dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, PictureError::Load { .. }));
    }

    #[test]
    fn test_load_not_an_image() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.png");
        std::fs::write(&path, "not a png").unwrap();
        assert!(matches!(load_picture(&path), Err(PictureError::Load { .. })));
    }

    #[test]
    fn test_load_pictures_stops_on_failure() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.png");
        save_picture(&Grid::new(1, 1), &good).unwrap();

        assert_eq!(load_pictures(&[&good, &good]).unwrap().len(), 2);
        assert!(load_pictures(&[good, dir.path().join("bad.png")]).is_err());
    }

    #[test]
    fn test_save_unknown_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.unknownformat");
        let err = save_picture(&Grid::new(2, 2), &path).unwrap_err();
        assert!(matches!(err, PictureError::Save { .. }));
    }

    #[test]
    fn test_save_empty_picture() {
        let dir = tempdir().unwrap();
        let err = save_picture(&Grid::new(0, 4), &dir.path().join("empty.png")).unwrap_err();
        assert!(matches!(err, PictureError::Save { .. }));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_save_oversized_picture() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wide.png");
        let err = save_picture(&Grid::new(u32::MAX as usize + 1, 0), &path).unwrap_err();
        assert!(matches!(err, PictureError::Save { .. }));
        assert!(err.to_string().contains("dimension limit"));
        assert!(!path.exists());
    }

    #[test]
    fn test_save_into_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("out.png");
        assert!(save_picture(&Grid::new(1, 1), &path).is_err());
    }
}
