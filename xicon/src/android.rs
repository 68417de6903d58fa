use crate::{Error, Result};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Density {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

/// Density buckets in the order their icons are generated.
pub const DENSITIES: [Density; 5] = [
    Density::Mdpi,
    Density::Hdpi,
    Density::Xhdpi,
    Density::Xxhdpi,
    Density::Xxxhdpi,
];

impl Density {
    pub fn label(self) -> &'static str {
        match self {
            Self::Mdpi => "mdpi",
            Self::Hdpi => "hdpi",
            Self::Xhdpi => "xhdpi",
            Self::Xxhdpi => "xxhdpi",
            Self::Xxxhdpi => "xxxhdpi",
        }
    }

    /// Launcher icon edge length in px.
    pub fn size(self) -> u32 {
        match self {
            Self::Mdpi => 48,
            Self::Hdpi => 72,
            Self::Xhdpi => 96,
            Self::Xxhdpi => 144,
            Self::Xxxhdpi => 192,
        }
    }
}

impl std::fmt::Display for Density {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

pub fn mipmap_dir(res: &Path, density: Density) -> PathBuf {
    res.join(format!("mipmap-{}", density))
}

pub fn ic_launcher_path(res: &Path, density: Density) -> PathBuf {
    mipmap_dir(res, density).join("ic_launcher.png")
}

/// Writes `mipmap-<density>/ic_launcher.png` under `res` for every density,
/// creating the directories as needed.
///
/// `on_written` is called after each icon lands on disk. The first failure is
/// returned as is: icons written before it are kept and the remaining
/// densities are skipped.
pub fn mipmap_ic_launcher<P, Q, F>(icon: P, res: Q, mut on_written: F) -> Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    F: FnMut(Density, &Path),
{
    let (icon, res) = (icon.as_ref(), res.as_ref());
    let mut written = Vec::with_capacity(DENSITIES.len());
    for density in DENSITIES {
        let dir = mipmap_dir(res, density);
        std::fs::create_dir_all(&dir).map_err(|source| Error::Io {
            path: dir.clone(),
            source,
        })?;
        let path = dir.join("ic_launcher.png");
        crate::convert(icon, &path, density.size())?;
        tracing::info!("{} launcher icon written to {}", density, path.display());
        on_written(density, &path);
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_table() {
        let table: Vec<_> = DENSITIES.iter().map(|d| (d.label(), d.size())).collect();
        assert_eq!(
            table,
            [
                ("mdpi", 48),
                ("hdpi", 72),
                ("xhdpi", 96),
                ("xxhdpi", 144),
                ("xxxhdpi", 192),
            ]
        );
    }

    #[test]
    fn launcher_path() {
        let path = ic_launcher_path(Path::new("app/src/main/res"), Density::Xxhdpi);
        assert_eq!(
            path,
            Path::new("app/src/main/res/mipmap-xxhdpi/ic_launcher.png")
        );
    }
}
