/// Top-level screen the application is currently displaying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum AppScreen {
    /// Mode selection shown at startup.
    #[default]
    MainMenu,
    /// The rendered set, static or zooming.
    Viewer,
}

/// Which run loop the render worker drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ViewMode {
    /// One frame, held until the user quits.
    Static,
    /// Continuous zoom.
    Animated,
}

impl ViewMode {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Static => "Single set",
            Self::Animated => "Continuous zoom",
        }
    }
}
