use super::raster::CellPainter;
use super::topology::{neighborhood, Direction};
use crate::{Error, Raster, Result};

/// How cell ids handed to rules relate to scan positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdMode {
    /// Ids are the row-major cell indices.
    #[default]
    Ordered,
    /// Ids are a fixed pseudorandom permutation of the indices, drawn once at
    /// build time.
    Shuffled,
}

/// Setup-phase configuration. Consumed by [`Builder::build`]; once the grid
/// is materialized its dimensions can no longer change.
#[derive(Debug, Clone)]
pub struct Builder {
    width: usize,
    height: usize,
    cell_size: usize,
    fps: u32,
    id_mode: IdMode,
    seed: Option<u64>,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            cell_size: 1,
            fps: 30,
            id_mode: IdMode::Ordered,
            seed: None,
        }
    }
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grid dimensions in cells.
    pub fn size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Square pixel block drawn per cell.
    pub fn cell_size(mut self, cell_size: usize) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Tick rate consumed by [`Simulation`](crate::Simulation).
    pub fn framerate(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    pub fn id_mode(mut self, id_mode: IdMode) -> Self {
        self.id_mode = id_mode;
        self
    }

    /// Seed for the shuffled id permutation. Entropy-seeded when absent.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub(crate) fn fps(&self) -> u32 {
        self.fps
    }

    pub fn build<S: Clone + Default>(self) -> Result<Automaton<S>> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        if self.cell_size == 0 {
            return Err(Error::ZeroCellSize);
        }

        let len = self.width * self.height;
        let hoods = (0..len)
            .map(|i| neighborhood(i % self.width, i / self.width, self.width, self.height))
            .collect();
        let origins = (0..len)
            .map(|i| {
                (
                    (i % self.width) * self.cell_size,
                    (i / self.width) * self.cell_size,
                )
            })
            .collect();

        let mut ids: Vec<usize> = (0..len).collect();
        if self.id_mode == IdMode::Shuffled {
            use rand::{seq::SliceRandom, SeedableRng};
            let mut rng = if let Some(seed) = self.seed {
                rand_chacha::ChaCha8Rng::seed_from_u64(seed)
            } else {
                rand_chacha::ChaCha8Rng::from_entropy()
            };
            ids.shuffle(&mut rng);
        }

        Ok(Automaton {
            width: self.width,
            height: self.height,
            cell_size: self.cell_size,
            buffers: [vec![S::default(); len], vec![S::default(); len]],
            current: 0,
            hoods,
            origins,
            ids,
            raster: Raster::new(self.width * self.cell_size, self.height * self.cell_size),
            generation: 0,
        })
    }
}

/// A fixed-size grid of user states advanced in synchronous generations.
///
/// Two equally sized buffers back the grid; one is current (readable) and one
/// is next (written by the running scan), and the roles flip after every
/// completed scan. Neighborhoods, per-cell pixel origins and the id table are
/// precomputed at build time and never change.
pub struct Automaton<S> {
    width: usize,
    height: usize,
    cell_size: usize,
    buffers: [Vec<S>; 2],
    current: usize,
    hoods: Vec<[Option<usize>; 8]>,
    origins: Vec<(usize, usize)>,
    ids: Vec<usize>,
    raster: Raster,
    generation: u64,
}

impl<S: Clone + Default> Automaton<S> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_size(&self) -> usize {
        self.cell_size
    }

    /// Number of cells in the grid.
    pub fn len(&self) -> usize {
        self.buffers[0].len()
    }

    pub fn is_empty(&self) -> bool {
        // build() rejects zero-sized grids
        self.len() == 0
    }

    /// Completed generations; 0 until the first [`step`](Automaton::step).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Which of the two buffers is current. Alternates every step.
    pub fn current_buffer(&self) -> usize {
        self.current
    }

    /// State of the cell at `(x, y)` in the current generation.
    pub fn get(&self, x: usize, y: usize) -> &S {
        &self.buffers[self.current][x + y * self.width]
    }

    /// Id assigned to the cell at row-major index `i`.
    pub fn cell_id(&self, i: usize) -> usize {
        self.ids[i]
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Generation-0 pass: visits every cell in row-major order and stores the
    /// closure's result straight into the current buffer.
    ///
    /// Neighbor reads here see default or earlier-constructed states, so
    /// construction must not depend on other cells' initial values.
    pub fn construct<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Cell<S>) -> S,
    {
        let cur = self.current;
        for i in 0..self.len() {
            let state = {
                let mut cell = Self::bind(
                    &self.buffers[cur],
                    &self.hoods,
                    &self.origins,
                    &self.ids,
                    &mut self.raster,
                    self.width,
                    self.cell_size,
                    i,
                );
                f(&mut cell)
            };
            self.buffers[cur][i] = state;
        }
    }

    /// One tick: scans all cells in row-major order, stores each result into
    /// the next buffer, then swaps buffer roles.
    ///
    /// The closure only ever reads the current buffer, so no write made
    /// during the scan is observable until the following tick.
    pub fn step<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Cell<S>) -> S,
    {
        let (cur, next) = (self.current, self.current ^ 1);
        for i in 0..self.len() {
            let state = {
                let mut cell = Self::bind(
                    &self.buffers[cur],
                    &self.hoods,
                    &self.origins,
                    &self.ids,
                    &mut self.raster,
                    self.width,
                    self.cell_size,
                    i,
                );
                f(&mut cell)
            };
            self.buffers[next][i] = state;
        }
        self.current = next;
        self.generation += 1;
    }

    #[allow(clippy::too_many_arguments)]
    fn bind<'a>(
        cells: &'a [S],
        hoods: &'a [[Option<usize>; 8]],
        origins: &[(usize, usize)],
        ids: &[usize],
        raster: &'a mut Raster,
        width: usize,
        cell_size: usize,
        i: usize,
    ) -> Cell<'a, S> {
        let (base_x, base_y) = origins[i];
        Cell {
            index: i,
            id: ids[i],
            width,
            cells,
            hood: &hoods[i],
            painter: CellPainter::new(raster, base_x, base_y, cell_size),
        }
    }
}

/// Per-cell context handed to construct and transition closures.
///
/// Lives only for one cell's turn within one scan; all reads resolve against
/// the current (previous-generation) buffer, and draw calls land in this
/// cell's block of the raster.
pub struct Cell<'a, S> {
    index: usize,
    id: usize,
    width: usize,
    cells: &'a [S],
    hood: &'a [Option<usize>; 8],
    painter: CellPainter<'a>,
}

impl<'a, S: Clone> Cell<'a, S> {
    /// Previous-generation state of this cell.
    pub fn state(&self) -> &S {
        &self.cells[self.index]
    }

    /// Deep, independent copy of the previous-generation state.
    pub fn clone_state(&self) -> S {
        self.cells[self.index].clone()
    }

    /// Cell id under the configured [`IdMode`].
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn x(&self) -> usize {
        self.index % self.width
    }

    pub fn y(&self) -> usize {
        self.index / self.width
    }

    /// Neighbor state in the given direction, `None` past the grid edge.
    pub fn neighbor(&self, dir: Direction) -> Option<&S> {
        self.hood[dir.index()].map(|i| &self.cells[i])
    }

    /// Relative-offset form of [`neighbor`](Cell::neighbor); the two forms
    /// agree for every valid offset.
    pub fn neighbor_at(&self, dx: i32, dy: i32) -> Result<Option<&S>> {
        let dir =
            Direction::from_offset(dx, dy).ok_or(Error::BadNeighborOffset { dx, dy })?;
        Ok(self.neighbor(dir))
    }

    /// Paints one pixel at cell-local coordinates, opaque.
    pub fn point(&mut self, x: usize, y: usize, color: crate::Color) -> Result<()> {
        self.painter.point(x, y, color)
    }

    /// Fills this cell's whole pixel block, opaque.
    pub fn background(&mut self, color: crate::Color) {
        self.painter.background(color)
    }
}
