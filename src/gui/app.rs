use super::Config;
use crate::{Builder, Result, Rule, Simulation};
use eframe::egui::{
    load::SizedTexture, CentralPanel, ColorImage, Context, Frame, Image, Key, Margin, RichText,
    SidePanel, Slider, TextureFilter, TextureHandle, TextureOptions, TextureWrapMode,
};
use std::time::{Duration, Instant};

/// eframe front end for a [`Simulation`]: blits the raster into a
/// nearest-filtered texture every frame and issues paced ticks while not
/// paused.
pub struct Viewer<R: Rule> {
    simulation: Simulation<R>,
    texture: TextureHandle,
    paused: bool,
    do_one_step: bool,
    last_tick: Instant,
}

impl<R: Rule> Viewer<R> {
    /// Builds the simulation, runs its construction pass and uploads the
    /// initial raster.
    pub fn new(builder: Builder, rule: R, ctx: &Context) -> Result<Self> {
        let mut simulation = Simulation::new(builder, rule)?;
        simulation.start()?;
        let texture = ctx.load_texture(
            "automaton raster",
            ColorImage::default(),
            Self::texture_options(),
        );
        Ok(Self {
            simulation,
            texture,
            paused: false,
            do_one_step: false,
            last_tick: Instant::now(),
        })
    }

    fn texture_options() -> TextureOptions {
        TextureOptions {
            magnification: TextureFilter::Nearest,
            minification: TextureFilter::Linear,
            wrap_mode: TextureWrapMode::ClampToEdge,
            ..Default::default()
        }
    }

    fn text(s: &str) -> RichText {
        RichText::new(s).size(Config::TEXT_SIZE)
    }

    fn tick_due(&self) -> bool {
        let interval = Duration::from_millis(1000 / self.simulation.framerate() as u64);
        self.last_tick.elapsed() >= interval
    }

    fn advance(&mut self) {
        let due = self.do_one_step || (!self.paused && self.tick_due());
        self.do_one_step = false;
        if !due {
            return;
        }
        if self.simulation.tick().is_ok() {
            self.last_tick = Instant::now();
        }
    }

    fn upload_raster(&mut self) {
        let raster = self.simulation.automaton().raster();
        let image = ColorImage::from_rgba_unmultiplied(
            [raster.width(), raster.height()],
            raster.data(),
        );
        self.texture.set(image, Self::texture_options());
    }

    fn draw_controls(&mut self, ui: &mut eframe::egui::Ui) {
        let label = if self.paused { "Play" } else { "Pause" };
        if ui.button(Self::text(label)).clicked() {
            self.paused = !self.paused;
        }

        if ui
            .add_enabled(self.paused, eframe::egui::Button::new(Self::text("Step")))
            .clicked()
        {
            self.do_one_step = true;
        }

        if ui.button(Self::text("Restart")).clicked() {
            // back to generation 0 via a fresh construction pass
            let _ = self.simulation.stop();
            let _ = self.simulation.start();
        }

        let mut fps = self.simulation.framerate();
        ui.add(
            Slider::new(&mut fps, Config::MIN_FPS..=Config::MAX_FPS)
                .logarithmic(true)
                .text(Self::text("fps")),
        );
        if fps != self.simulation.framerate() {
            let _ = self.simulation.set_framerate(fps);
        }

        ui.label(Self::text(&format!(
            "Generation: {}",
            self.simulation.automaton().generation()
        )));
    }
}

impl<R: Rule + 'static> eframe::App for Viewer<R> {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint();

        ctx.input(|input| {
            if input.key_pressed(Key::Space) {
                self.do_one_step = true;
            }
        });

        self.advance();
        self.upload_raster();

        SidePanel::left("controls")
            .exact_width(Config::CONTROL_PANEL_WIDTH)
            .show(ctx, |ui| self.draw_controls(ui));

        CentralPanel::default()
            .frame(Frame::default().inner_margin(Margin::same(Config::FRAME_MARGIN)))
            .show(ctx, |ui| {
                let area = ui.available_size();
                let scale = (area.x / self.texture.size_vec2().x)
                    .min(area.y / self.texture.size_vec2().y)
                    .max(1.);
                let size = self.texture.size_vec2() * scale.floor();
                ui.add(Image::from_texture(SizedTexture::new(
                    self.texture.id(),
                    size,
                )));
            });
    }
}
