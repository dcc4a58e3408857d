/// Row-major grid of `width * height` cells.
#[derive(Clone, Debug, PartialEq)]
pub struct Vec2D<T> {
    pub buffer: Vec<T>,
    pub width: usize,
    pub height: usize,
}

impl<T: Clone> Vec2D<T> {
    pub fn new(width: usize, height: usize, fill_value: T) -> Vec2D<T> {
        Vec2D {
            buffer: vec![fill_value; width * height],
            width,
            height,
        }
    }
}

impl<T: Copy> Vec2D<T> {
    pub fn at(&self, x: usize, y: usize) -> T {
        self.buffer[self.offset(x, y)]
    }
}

impl<T> Vec2D<T> {
    fn offset(&self, x: usize, y: usize) -> usize {
        debug_assert!(self.contains(x, y), "({}, {}) outside {}x{}", x, y, self.width, self.height);
        y * self.width + x
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if self.contains(x, y) {
            self.buffer.get(y * self.width + x)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        if self.contains(x, y) {
            let width = self.width;
            self.buffer.get_mut(y * width + x)
        } else {
            None
        }
    }

    pub fn write_at(&mut self, x: usize, y: usize, value: T) {
        let offset = self.offset(x, y);
        self.buffer[offset] = value
    }

    pub fn rows(&self) -> std::slice::Chunks<'_, T> {
        self.buffer.chunks(self.width.max(1))
    }

    pub fn total_pixels(&self) -> usize {
        self.width * self.height
    }
}
