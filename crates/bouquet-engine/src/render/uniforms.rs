use std::collections::BTreeMap;

use crate::paint::GradientTexture;

/// Receiver of per-program shader inputs.
///
/// Widgets push their colors and lookup textures through this trait whenever a
/// property changes; the implementation decides how they reach a GPU (or not).
pub trait UniformSink {
    /// Binds a straight-alpha RGBA value to `name`.
    fn set_vec4(&mut self, name: &str, value: [f32; 4]);

    /// Binds a `width × 1` lookup texture to `name`.
    fn set_texture(&mut self, name: &str, texture: &GradientTexture);
}

/// In-memory sink: remembers the latest value per name.
///
/// Used where no GPU is involved (CPU rendering, tests).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniformTable {
    vec4s: BTreeMap<String, [f32; 4]>,
    textures: BTreeMap<String, GradientTexture>,
    writes: usize,
}

impl UniformTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vec4(&self, name: &str) -> Option<[f32; 4]> {
        self.vec4s.get(name).copied()
    }

    pub fn texture(&self, name: &str) -> Option<&GradientTexture> {
        self.textures.get(name)
    }

    /// Total number of `set_*` calls received.
    #[inline]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl UniformSink for UniformTable {
    fn set_vec4(&mut self, name: &str, value: [f32; 4]) {
        self.writes += 1;
        self.vec4s.insert(name.to_owned(), value);
    }

    fn set_texture(&mut self, name: &str, texture: &GradientTexture) {
        self.writes += 1;
        self.textures.insert(name.to_owned(), texture.clone());
    }
}

impl<S: UniformSink + ?Sized> UniformSink for &mut S {
    fn set_vec4(&mut self, name: &str, value: [f32; 4]) {
        (**self).set_vec4(name, value);
    }

    fn set_texture(&mut self, name: &str, texture: &GradientTexture) {
        (**self).set_texture(name, texture);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_keeps_latest_value() {
        let mut t = UniformTable::new();
        t.set_vec4("a", [0.0; 4]);
        t.set_vec4("a", [1.0; 4]);
        assert_eq!(t.vec4("a"), Some([1.0; 4]));
        assert_eq!(t.vec4("b"), None);
        assert_eq!(t.writes(), 2);
    }

    #[test]
    fn table_stores_textures() {
        let mut t = UniformTable::new();
        t.set_texture("tex", &GradientTexture::transparent(8));
        assert_eq!(t.texture("tex").map(|t| t.width()), Some(8));
    }

    #[test]
    fn mutable_reference_forwards() {
        let mut t = UniformTable::new();
        {
            let mut r = &mut t;
            r.set_vec4("x", [0.5; 4]);
        }
        assert_eq!(t.vec4("x"), Some([0.5; 4]));
    }
}
