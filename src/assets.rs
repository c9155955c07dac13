// SPDX-License-Identifier: GPL-3.0-only

//! Icon asset resolution
//!
//! The screen never looks icons up globally; it asks the resolver it was built
//! with. The bundled resolver embeds terminal glyphs from `resources/icons/`.

use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Resolves an icon name (e.g. `flash_auto`) to its asset bytes
pub trait AssetResolver: Send + Sync {
    fn resolve(&self, name: &str) -> Option<Cow<'static, [u8]>>;

    /// Resolve an icon as a short glyph for text rendering
    ///
    /// Unknown names fall back to the name itself so a missing asset stays visible.
    fn glyph(&self, name: &str) -> String {
        self.resolve(name)
            .and_then(|bytes| String::from_utf8(bytes.into_owned()).ok())
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|| name.to_string())
    }
}

#[derive(RustEmbed)]
#[folder = "resources/icons/"]
struct IconFiles;

/// Icons compiled into the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedAssets;

impl AssetResolver for EmbeddedAssets {
    fn resolve(&self, name: &str) -> Option<Cow<'static, [u8]>> {
        IconFiles::get(&format!("{}.txt", name)).map(|file| file.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::icons;

    #[test]
    fn test_all_screen_icons_are_bundled() {
        let assets = EmbeddedAssets;
        for name in [
            icons::FLASH_AUTO,
            icons::FLASH_ON,
            icons::FLASH_OFF,
            icons::SWITCH_CAMERA,
            icons::CAMERA_ROLL_PLACEHOLDER,
            icons::SHOW_FILTER,
        ] {
            assert!(assets.resolve(name).is_some(), "missing icon {}", name);
        }
        for index in 0..icons::SHUTTER_FRAME_COUNT {
            assert!(assets.resolve(&icons::shutter_frame(index)).is_some());
        }
    }

    #[test]
    fn test_unknown_icon_falls_back_to_name() {
        assert_eq!(EmbeddedAssets.glyph("does_not_exist"), "does_not_exist");
    }
}
