/// Limits for the base font size, in pixels.
pub const FONT_SIZE_MIN: u32 = 11;
pub const FONT_SIZE_MAX: u32 = 18;
pub const FONT_SIZE_STEP: u32 = 1;

/// A named font size offered as a shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSizePreset {
    pub label: &'static str,
    pub value: u32,
}

pub const FONT_SIZE_PRESETS: [FontSizePreset; 4] = [
    FontSizePreset {
        label: "Small",
        value: 11,
    },
    FontSizePreset {
        label: "Normal",
        value: 13,
    },
    FontSizePreset {
        label: "Medium",
        value: 15,
    },
    FontSizePreset {
        label: "Large",
        value: 17,
    },
];

/// Clamp any requested size into `[FONT_SIZE_MIN, FONT_SIZE_MAX]`.
pub fn clamp_font_size(size: i64) -> u32 {
    size.clamp(i64::from(FONT_SIZE_MIN), i64::from(FONT_SIZE_MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_into_range() {
        for size in -40..60 {
            let expected = size.max(FONT_SIZE_MIN as i64).min(FONT_SIZE_MAX as i64) as u32;
            assert_eq!(clamp_font_size(size), expected, "size {size}");
        }
        assert_eq!(clamp_font_size(i64::MIN), FONT_SIZE_MIN);
        assert_eq!(clamp_font_size(i64::MAX), FONT_SIZE_MAX);
    }

    #[test]
    fn presets_are_within_limits() {
        for preset in FONT_SIZE_PRESETS {
            assert_eq!(clamp_font_size(i64::from(preset.value)), preset.value);
        }
        let labels: Vec<&str> = FONT_SIZE_PRESETS.iter().map(|p| p.label).collect();
        assert_eq!(labels, vec!["Small", "Normal", "Medium", "Large"]);
    }
}
