#![warn(clippy::all)]

use cellscape::{Builder, Cell, Color, Direction, Rule, Viewer};
use rand::{Rng, SeedableRng};

/// Conway's Game of Life with per-cell age, drawn as a hue ramp.
struct Life {
    rng: rand_chacha::ChaCha8Rng,
    fill_rate: f64,
}

impl Life {
    fn new(seed: u64, fill_rate: f64) -> Self {
        Self {
            rng: rand_chacha::ChaCha8Rng::seed_from_u64(seed),
            fill_rate,
        }
    }

    fn paint(cell: &mut Cell<LifeState>, state: &LifeState) {
        if state.alive {
            let hue = (state.age as f32 * 4.).min(300.);
            cell.background(Color::hsv(hue, 230, 255));
        } else {
            cell.background(Color::BLACK);
        }
    }
}

#[derive(Clone, Default)]
struct LifeState {
    alive: bool,
    age: u32,
}

impl Rule for Life {
    type State = LifeState;

    fn construct(&mut self, cell: &mut Cell<LifeState>) -> LifeState {
        let state = LifeState {
            alive: self.rng.gen_bool(self.fill_rate),
            age: 0,
        };
        Self::paint(cell, &state);
        state
    }

    fn transition(&mut self, cell: &mut Cell<LifeState>) -> LifeState {
        let live_neighbors = Direction::ALL
            .into_iter()
            .filter_map(|dir| cell.neighbor(dir))
            .filter(|n| n.alive)
            .count();

        let prev = cell.state();
        let alive = matches!((prev.alive, live_neighbors), (true, 2 | 3) | (false, 3));
        let state = LifeState {
            alive,
            age: if alive && prev.alive { prev.age + 1 } else { 0 },
        };
        Self::paint(cell, &state);
        state
    }
}

fn main() {
    use eframe::egui::{vec2, ViewportBuilder};

    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .unwrap();

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(1100., 760.))
            .with_min_inner_size(vec2(640.0, 360.0)),
        ..Default::default()
    };

    let builder = Builder::new().size(180, 120).cell_size(5).framerate(30);

    eframe::run_native(
        "cellscape",
        options,
        Box::new(move |cc| {
            let viewer = Viewer::new(builder, Life::new(42, 0.25), &cc.egui_ctx).unwrap();
            Ok(Box::new(viewer))
        }),
    )
    .unwrap();
}
