use super::{collect_actions, Session, Style};
use crate::{Config, FpsLimiter};
use eframe::egui::{
    CentralPanel, ColorImage, Context, Frame, Rect, TextureHandle, TextureOptions,
    ViewportCommand,
};
use tracing::{info, warn};

pub struct App {
    pub(super) session: Session,        // Engine together with the random source and pause flag.
    pub(super) texture: TextureHandle,  // Texture handle of the field.
    pub(super) life_rect: Option<Rect>, // Part of the window displaying the field.
    pub(super) fps_limiter: FpsLimiter, // Limits the frame rate to a certain value.
}

impl App {
    pub fn new(ctx: &Context, session: Session, config: &Config) -> Self {
        info!(max_fps = config.max_fps, "window opened");
        Self {
            session,
            texture: ctx.load_texture(Style::TITLE, ColorImage::default(), TextureOptions::NEAREST),
            life_rect: None,
            fps_limiter: FpsLimiter::new(config.max_fps),
        }
    }

    fn handle_input(&mut self, ctx: &Context, life_rect: Rect) {
        let world_size = self.session.life().world_size();
        let actions = ctx.input(|input| collect_actions(input, life_rect, world_size));
        for action in actions {
            if let Err(err) = self.session.apply(action) {
                warn!(%err, ?action, "ignored input");
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        CentralPanel::default()
            .frame(Frame::none().fill(Style::BACKGROUND_COLOR))
            .show(ctx, |ui| {
                ctx.request_repaint();

                if let Some(life_rect) = self.life_rect {
                    self.handle_input(ctx, life_rect);
                }

                self.session.step();

                self.draw(ui);
            });

        if self.fps_limiter.delay() {
            if let Some(fps) = self.fps_limiter.fps() {
                ctx.send_viewport_cmd(ViewportCommand::Title(format!(
                    "{} | FPS: {fps}",
                    Style::TITLE
                )));
            }
        }
    }
}
