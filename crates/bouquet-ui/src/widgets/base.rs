use bouquet_engine::paint::{
    resample, AlphaMode, ColorStop, GradientError, GradientTexture, ResampleConfig, StopList,
};
use bouquet_engine::render::{names, ShaderKind, ShaderSource, UniformSink, UniformTable};

use crate::binding::{BindingId, Observers};

/// Stop-list owner shared by multi-stop gradients.
///
/// Every successful assignment replaces the whole collection, regenerates the
/// lookup texture, uploads it to the canvas as `gradientTexture` and then
/// notifies bound observers. A failed assignment changes nothing.
///
/// The canvas always receives premultiplied texels, since the ramp program
/// blends them as such. `config.alpha` only affects [`texture`](Self::texture).
pub struct GradientBase<S: UniformSink = UniformTable> {
    stops: StopList,
    config: ResampleConfig,
    texture: GradientTexture,
    canvas: S,
    shader: ShaderSource,
    on_texture: Observers<GradientTexture>,
}

impl GradientBase<UniformTable> {
    pub fn new() -> Self {
        Self::with_canvas(UniformTable::new())
    }
}

impl Default for GradientBase<UniformTable> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: UniformSink> GradientBase<S> {
    pub fn with_canvas(canvas: S) -> Self {
        Self::with_config(canvas, ResampleConfig::default(), ShaderSource::builtin(ShaderKind::Ramp))
    }

    /// Starts with no stops and a fully transparent texture of `config.width` texels.
    pub fn with_config(mut canvas: S, config: ResampleConfig, shader: ShaderSource) -> Self {
        let texture = GradientTexture::transparent(config.width);
        canvas.set_texture(names::GRADIENT_TEXTURE, &texture);
        Self {
            stops: StopList::empty(config.width),
            config,
            texture,
            canvas,
            shader,
            on_texture: Observers::new(),
        }
    }

    #[inline]
    pub fn color_stops(&self) -> &[ColorStop] {
        self.stops.as_slice()
    }

    /// Replaces the stop collection.
    ///
    /// Fails with [`GradientError::TooManyStops`] when `stops` has more entries
    /// than the texture has texels.
    pub fn set_color_stops(&mut self, stops: Vec<ColorStop>) -> Result<(), GradientError> {
        let list = StopList::with_max(stops, self.config.width)?;
        self.apply(list);
        Ok(())
    }

    /// Replaces the stop collection from dynamic JSON input.
    ///
    /// Non-object elements fail with [`GradientError::NotAStop`] (type kind).
    pub fn set_color_stops_json(&mut self, value: &serde_json::Value) -> Result<(), GradientError> {
        let list = StopList::from_json(value, self.config.width)?;
        self.apply(list);
        Ok(())
    }

    #[inline]
    pub fn config(&self) -> &ResampleConfig {
        &self.config
    }

    /// Changes resolution/orientation/alpha handling and regenerates the texture.
    ///
    /// Fails if the current stops exceed the new width; the old config is kept.
    pub fn set_config(&mut self, config: ResampleConfig) -> Result<(), GradientError> {
        let list = StopList::with_max(self.stops.as_slice().to_vec(), config.width)?;
        self.config = config;
        self.apply(list);
        Ok(())
    }

    /// Lookup texture for the current stops.
    #[inline]
    pub fn texture(&self) -> &GradientTexture {
        &self.texture
    }

    #[inline]
    pub fn shader(&self) -> &ShaderSource {
        &self.shader
    }

    #[inline]
    pub fn canvas(&self) -> &S {
        &self.canvas
    }

    #[inline]
    pub fn canvas_mut(&mut self) -> &mut S {
        &mut self.canvas
    }

    /// Calls `f` with the new texture after every successful assignment.
    pub fn bind_texture(&mut self, f: impl FnMut(&GradientTexture) + 'static) -> BindingId {
        self.on_texture.bind(f)
    }

    pub fn unbind_texture(&mut self, id: BindingId) -> bool {
        self.on_texture.unbind(id)
    }

    fn apply(&mut self, list: StopList) {
        self.texture = resample(list.as_slice(), &self.config);
        self.stops = list;
        log::debug!(
            "gradient stops replaced: {} stops, {} texels",
            self.stops.len(),
            self.texture.width()
        );
        self.upload();
        self.on_texture.notify(&self.texture);
    }

    fn upload(&mut self) {
        if self.config.alpha == AlphaMode::Premultiplied {
            self.canvas.set_texture(names::GRADIENT_TEXTURE, &self.texture);
            return;
        }
        let premultiplied = ResampleConfig {
            alpha: AlphaMode::Premultiplied,
            ..self.config
        };
        let lookup = resample(self.stops.as_slice(), &premultiplied);
        self.canvas.set_texture(names::GRADIENT_TEXTURE, &lookup);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use bouquet_engine::paint::{ErrorKind, Orientation, MAX_STOPS};
    use serde_json::json;

    use super::*;

    fn px(tex: &GradientTexture, i: usize) -> &[u8] {
        &tex.pixels()[4 * i..4 * (i + 1)]
    }

    fn black_white() -> Vec<ColorStop> {
        vec![
            ColorStop::new(0.0, "black").unwrap(),
            ColorStop::new(1.0, "white").unwrap(),
        ]
    }

    // ── assignment ────────────────────────────────────────────────────────

    #[test]
    fn starts_transparent() {
        let wid = GradientBase::new();
        assert!(wid.color_stops().is_empty());
        assert_eq!(wid.texture().width(), 1024);
        assert!(wid.texture().pixels().iter().all(|&b| b == 0));
        assert_eq!(
            wid.canvas().texture(names::GRADIENT_TEXTURE),
            Some(wid.texture())
        );
    }

    #[test]
    fn black_white_texture() {
        let mut wid = GradientBase::new();
        wid.set_color_stops(black_white()).unwrap();

        let texture = wid.texture();
        assert_eq!(texture.height(), 1);
        assert_eq!(texture.width(), 1024);
        assert_eq!(texture.pixels().len(), 4 * 1024);
        assert_eq!(px(texture, 0), b"\x00\x00\x00\xff");
        assert_eq!(px(texture, 512), b"\x80\x80\x80\xff");
        assert_eq!(px(texture, 1023), b"\xff\xff\xff\xff");
    }

    #[test]
    fn replacement_regenerates_texture() {
        let mut wid = GradientBase::new();
        wid.set_color_stops(black_white()).unwrap();
        wid.set_color_stops(vec![
            ColorStop::new(0.75, [1.0, 0.0, 0.0, 0.0]).unwrap(),
            ColorStop::new(0.25, [0.0, 0.0, 1.0, 1.0]).unwrap(),
        ])
        .unwrap();

        let texture = wid.texture();
        assert_eq!(px(texture, 0), b"\x00\x00\xff\xff");
        assert_eq!(px(texture, 256), b"\x00\x00\xff\xff");
        assert_eq!(px(texture, 768), b"\x00\x00\x00\x00");
        assert_eq!(px(texture, 1023), b"\x00\x00\x00\x00");
        assert_eq!(wid.canvas().texture(names::GRADIENT_TEXTURE), Some(texture));
    }

    // ── validation ────────────────────────────────────────────────────────

    #[test]
    fn too_many_stops_is_value_error_and_keeps_state() {
        let mut wid = GradientBase::new();
        wid.set_color_stops(black_white()).unwrap();
        let before = wid.texture().clone();

        let err = wid
            .set_color_stops(vec![ColorStop::default(); MAX_STOPS + 1])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert_eq!(wid.color_stops(), black_white().as_slice());
        assert_eq!(wid.texture(), &before);
    }

    #[test]
    fn non_stop_element_is_type_error() {
        let mut wid = GradientBase::new();
        let err = wid.set_color_stops_json(&json!([1])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert!(wid.color_stops().is_empty());
    }

    #[test]
    fn json_stops_are_accepted() {
        let mut wid = GradientBase::new();
        wid.set_color_stops_json(&json!([
            {"position": 1.0, "color": "white"},
            {"position": 0.0, "color": "black"}
        ]))
        .unwrap();
        assert_eq!(px(wid.texture(), 0), b"\x00\x00\x00\xff");
        assert_eq!(px(wid.texture(), 1023), b"\xff\xff\xff\xff");
    }

    // ── config ────────────────────────────────────────────────────────────

    #[test]
    fn set_config_regenerates_and_checks_capacity() {
        let mut wid = GradientBase::new();
        wid.set_color_stops(black_white()).unwrap();

        let reversed = ResampleConfig { orientation: Orientation::Reversed, ..Default::default() };
        wid.set_config(reversed).unwrap();
        assert_eq!(px(wid.texture(), 0), b"\xff\xff\xff\xff");

        let tiny = ResampleConfig { width: 1, ..Default::default() };
        assert!(wid.set_config(tiny).is_err());
        assert_eq!(wid.config(), &reversed);
    }

    #[test]
    fn canvas_lookup_is_premultiplied_for_straight_output() {
        let straight = ResampleConfig { width: 4, alpha: AlphaMode::Straight, ..Default::default() };
        let mut wid = GradientBase::with_config(
            UniformTable::new(),
            straight,
            ShaderSource::builtin(ShaderKind::Ramp),
        );
        wid.set_color_stops(vec![ColorStop::new(0.0, [1.0, 0.0, 0.0, 0.0]).unwrap()])
            .unwrap();

        // CPU texture keeps straight rgb
        assert_eq!(wid.texture().texels()[0], [255, 0, 0, 0]);
        let uploaded = wid.canvas().texture(names::GRADIENT_TEXTURE).unwrap();
        assert!(uploaded.texels().iter().all(|&t| t == [0, 0, 0, 0]));

        wid.set_config(ResampleConfig { alpha: AlphaMode::Premultiplied, ..straight })
            .unwrap();
        assert_eq!(wid.canvas().texture(names::GRADIENT_TEXTURE), Some(wid.texture()));
    }

    // ── observers ─────────────────────────────────────────────────────────

    #[test]
    fn observers_fire_once_per_successful_replacement() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut wid = GradientBase::new();
        let s = seen.clone();
        let id = wid.bind_texture(move |tex| s.borrow_mut().push(tex.texels()[0]));

        wid.set_color_stops(black_white()).unwrap();
        let _ = wid.set_color_stops_json(&json!(["nope"]));
        wid.set_color_stops(vec![ColorStop::new(0.0, "red").unwrap()]).unwrap();
        assert_eq!(*seen.borrow(), vec![[0, 0, 0, 255], [255, 0, 0, 255]]);

        assert!(wid.unbind_texture(id));
        wid.set_color_stops(Vec::new()).unwrap();
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn resampling_is_deterministic() {
        let mut a = GradientBase::new();
        let mut b = GradientBase::new();
        a.set_color_stops(black_white()).unwrap();
        b.set_color_stops(black_white()).unwrap();
        a.set_color_stops(black_white()).unwrap();
        assert_eq!(a.texture(), b.texture());
    }
}
