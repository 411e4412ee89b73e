//! Glyphs used by the interface (plain Unicode, no patched font needed)

#[derive(Debug, Clone)]
pub struct Icons {
    pub palette: &'static str,
    pub tones: &'static str,
    pub help: &'static str,
    pub success: &'static str,
    pub active: &'static str,
    pub inactive: &'static str,
    pub focus: &'static str,
    pub arrow: &'static str,
    pub bullet: &'static str,
}

impl Icons {
    pub const fn unicode() -> Self {
        Self {
            palette: "◆",
            tones: "●",
            help: "?",
            success: "✓",
            active: "■",
            inactive: "□",
            focus: "▲",
            arrow: "→",
            bullet: "•",
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::unicode()
    }
}
