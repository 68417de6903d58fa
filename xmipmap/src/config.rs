use std::path::PathBuf;

/// Logo the launcher icons are generated from.
pub const ICON: &str = "/tmp/logo.png";

/// Resource directory of the android app that receives the mipmaps.
pub const RES: &str = "app/src/main/res";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub icon: PathBuf,
    pub res: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            icon: PathBuf::from(ICON),
            res: PathBuf::from(RES),
        }
    }
}
