use crate::{Color, Error, Result};

/// Shared RGBA8 pixel buffer, `grid_width*cell_size` by
/// `grid_height*cell_size` pixels. Contents persist across ticks; nothing is
/// cleared between generations unless a rule draws over it.
pub struct Raster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Raster {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * 4],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw RGBA bytes, row-major, 4 bytes per pixel.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let at = (y * self.width + x) * 4;
        self.data[at..at + 4].try_into().unwrap()
    }

    fn put(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        let at = (y * self.width + x) * 4;
        self.data[at..at + 3].copy_from_slice(&rgb);
        self.data[at + 3] = u8::MAX;
    }
}

/// Write access to one cell's block of the raster, handed to the cell context
/// for the duration of its turn in a scan. Coordinates are local to the cell;
/// the painter cannot reach any other cell's pixels.
pub(crate) struct CellPainter<'a> {
    raster: &'a mut Raster,
    base_x: usize,
    base_y: usize,
    cell_size: usize,
}

impl<'a> CellPainter<'a> {
    pub(crate) fn new(
        raster: &'a mut Raster,
        base_x: usize,
        base_y: usize,
        cell_size: usize,
    ) -> Self {
        Self {
            raster,
            base_x,
            base_y,
            cell_size,
        }
    }

    pub(crate) fn point(&mut self, x: usize, y: usize, color: Color) -> Result<()> {
        if x >= self.cell_size || y >= self.cell_size {
            return Err(Error::PointOutOfCell {
                x,
                y,
                cell_size: self.cell_size,
            });
        }
        self.raster
            .put(self.base_x + x, self.base_y + y, color.channels());
        Ok(())
    }

    pub(crate) fn background(&mut self, color: Color) {
        let rgb = color.channels();
        for y in 0..self.cell_size {
            for x in 0..self.cell_size {
                self.raster.put(self.base_x + x, self.base_y + y, rgb);
            }
        }
    }
}
