/// Application-wide constants for brand colors, fonts and output locations

pub mod brand {
    /// Primary MindBudget color (indigo 600)
    pub const PRIMARY_HEX: &str = "#4F46E5";

    pub const APP_NAME: &str = "MindBudget";

    /// Label drawn on the launcher icons
    pub const MONOGRAM: &str = "MB";

    /// Label drawn on the notification icon
    pub const INITIAL: &str = "M";
}

pub mod fonts {
    /// Bold sans font shipped by most Debian/Ubuntu systems
    pub const PREFERRED_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

    /// File names looked up in the user font directory when the preferred font is missing
    pub const USER_FONT_NAMES: &[&str] = &[
        "DejaVuSans-Bold.ttf",
        "LiberationSans-Bold.ttf",
        "Arial Bold.ttf",
        "arialbd.ttf",
    ];

    /// Well-known system locations for a bold sans font
    pub const SYSTEM_FONT_PATHS: &[&str] = &[
        "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
        "/usr/share/fonts/liberation-sans/LiberationSans-Bold.ttf",
        "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
        "/Library/Fonts/Arial Bold.ttf",
        "C:\\Windows\\Fonts\\arialbd.ttf",
    ];
}

pub mod output {
    /// Default output directory, relative to the working directory
    pub const DEFAULT_DIR: &str = "assets";

    pub const ICON: &str = "icon.png";
    pub const ADAPTIVE_ICON: &str = "adaptive-icon.png";
    pub const SPLASH: &str = "splash.png";
    pub const NOTIFICATION_ICON: &str = "notification-icon.png";
}

pub mod config {
    /// Config file picked up from the working directory when no --config is given
    pub const DEFAULT_FILE: &str = "brandgen.yaml";
}
