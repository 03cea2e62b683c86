use super::frame::DrawTarget;
use super::image::Image;
use super::surface::Surface;

/// A surface cut into a `rows x columns` grid of equal tiles. One tile is
/// selected at a time and blitted opaquely; tiles carry no chroma key.
#[derive(Debug, Clone, Default)]
pub struct Tileset {
    surface: Surface,
    offset: usize,
    tile_width: u32,
    tile_height: u32,
    rows: u32,
    columns: u32,
}

impl Tileset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the tile atlas and fixes the grid. Zero rows or columns leave
    /// the tileset untouched.
    pub fn load_tileset(&mut self, image: Image, rows: u32, columns: u32) {
        if rows == 0 || columns == 0 {
            return;
        }
        self.surface = Surface::from_image(image);
        self.rows = rows;
        self.columns = columns;
        self.tile_width = self.surface.width() / rows;
        self.tile_height = self.surface.height() / columns;
        self.offset = 0;
    }

    pub fn tile_width(&self) -> u32 {
        self.tile_width
    }

    pub fn tile_height(&self) -> u32 {
        self.tile_height
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Selects the tile at `(row, column)`, 0-indexed. Out-of-grid
    /// requests keep the previous selection.
    pub fn select_tile(&mut self, row: u32, column: u32) {
        if row < self.rows && column < self.columns {
            self.offset = self
                .surface
                .offset(0, row * self.tile_width, column * self.tile_height);
        }
    }

    /// Blits the selected tile with its top-left corner at `(x, y)`.
    pub fn draw_tile(&self, target: &mut dyn DrawTarget, x: u32, y: u32) {
        for tile_x in 0..self.tile_width {
            for tile_y in 0..self.tile_height {
                let offset = self.offset + self.surface.offset(0, tile_x, tile_y);
                self.surface.draw_pixel_to(target, offset, x + tile_x, y + tile_y);
            }
        }
    }
}
