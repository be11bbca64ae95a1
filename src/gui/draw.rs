use super::{App, Style};
use crate::{CellState, Snapshot};
use eframe::egui::{load::SizedTexture, ColorImage, Image, TextureOptions, Ui};

/// One pixel per cell.
pub fn render(snapshot: &Snapshot<'_>) -> ColorImage {
    let n = snapshot.world_size();
    let mut image = ColorImage::new([n, n], Style::BACKGROUND_COLOR);
    for (x, y, state) in snapshot.live_cells() {
        image.pixels[x + y * n] = match state {
            CellState::Fresh => Style::FRESH_COLOR,
            _ => Style::ESTABLISHED_COLOR,
        };
    }
    image
}

impl App {
    pub fn draw(&mut self, ui: &mut Ui) {
        let image = render(&self.session.life().snapshot());
        self.texture.set(image, TextureOptions::NEAREST);

        let size_px = ui.available_size().min_elem();
        let source = SizedTexture::new(self.texture.id(), [size_px; 2]);
        let response = ui.add(Image::from_texture(source));
        self.life_rect.replace(response.rect);
    }
}
