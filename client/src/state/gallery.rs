//! Detail page image gallery selection.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

/// Selected index into a fixed-length image list. Starts at the first image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Gallery {
    len: usize,
    selected: usize,
}

impl Gallery {
    pub fn new(len: usize) -> Self {
        Self { len, selected: 0 }
    }

    /// Gallery over `len` images with `index` selected, falling back to the
    /// first image when `index` is out of range.
    pub fn at(len: usize, index: usize) -> Self {
        let mut gallery = Self::new(len);
        gallery.select(index);
        gallery
    }

    /// Selects image `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.selected = index;
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The main image for `images`, i.e. `images[selected]`.
    pub fn current<'a>(&self, images: &'a [String]) -> Option<&'a str> {
        images.get(self.selected).map(String::as_str)
    }
}
