use eframe::egui::Color32;

pub struct Style;

impl Style {
    pub const TITLE: &'static str = "Conway's Game of Life";

    pub const BACKGROUND_COLOR: Color32 = Color32::BLACK;
    /// Cell that was alive in the previous generation too.
    pub const ESTABLISHED_COLOR: Color32 = Color32::WHITE;
    /// Cell that was just born or edited by hand.
    pub const FRESH_COLOR: Color32 = Color32::from_rgb(220, 20, 60);
}
