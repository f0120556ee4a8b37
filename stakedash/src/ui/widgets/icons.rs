//! # Icons
//!
//! Material Design icon codepoints plus colored render helpers.

use crate::ui::theme::Theme;
use egui::RichText;

/// Icon size constants
pub mod size {
    pub const SMALL: f32 = 16.0;
    pub const MEDIUM: f32 = 24.0;
    pub const XLARGE: f32 = 48.0;
}

/// Material Design icon codepoints used by the dashboard
pub mod material {
    /// account_balance_wallet
    pub const WALLET: &str = "\u{e227}";
    /// savings
    pub const STAKE: &str = "\u{e2eb}";
    /// history
    pub const HISTORY: &str = "\u{e889}";
    /// settings
    pub const SETTINGS: &str = "\u{e8b8}";
    /// refresh
    pub const REFRESH: &str = "\u{e5d5}";
    /// lock
    pub const LOCK: &str = "\u{e897}";
    /// lock_open
    pub const UNLOCK: &str = "\u{e898}";
    /// error
    pub const ERROR: &str = "\u{e000}";
    /// info
    pub const INFO: &str = "\u{e88e}";
    /// close
    pub const CLOSE: &str = "\u{e5cd}";
    /// send
    pub const SEND: &str = "\u{e163}";
    /// water_drop (faucet)
    pub const FAUCET: &str = "\u{e798}";
    /// image (NFT)
    pub const NFT: &str = "\u{e3f4}";
    /// arrow_upward
    pub const ARROW_UP: &str = "\u{e5ce}";
    /// arrow_downward
    pub const ARROW_DOWN: &str = "\u{e5db}";
}

/// Colored icon helpers
pub struct Icons;

impl Icons {
    fn colored(icon: &str, size: f32, color: egui::Color32) -> RichText {
        RichText::new(icon).size(size).color(color)
    }

    pub fn accent(icon: &str, size: f32) -> RichText {
        Self::colored(icon, size, Theme::default().accent)
    }

    pub fn success(icon: &str, size: f32) -> RichText {
        Self::colored(icon, size, Theme::default().success)
    }

    pub fn error(icon: &str, size: f32) -> RichText {
        Self::colored(icon, size, Theme::default().error)
    }

    pub fn warning(icon: &str, size: f32) -> RichText {
        Self::colored(icon, size, Theme::default().warning)
    }

    pub fn info(icon: &str, size: f32) -> RichText {
        Self::colored(icon, size, Theme::default().info)
    }

    pub fn dim(icon: &str, size: f32) -> RichText {
        Self::colored(icon, size, Theme::default().dim)
    }
}
