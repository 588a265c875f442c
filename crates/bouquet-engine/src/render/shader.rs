use std::borrow::Cow;

/// Uniform names understood by the bundled programs.
pub mod names {
    pub const TOP_LEFT_COLOR: &str = "topLeftColor";
    pub const TOP_RIGHT_COLOR: &str = "topRightColor";
    pub const BOTTOM_LEFT_COLOR: &str = "bottomLeftColor";
    pub const BOTTOM_RIGHT_COLOR: &str = "bottomRightColor";
    pub const CENTER_COLOR: &str = "centerColor";
    pub const BORDER_COLOR: &str = "borderColor";
    pub const GRADIENT_TEXTURE: &str = "gradientTexture";
}

/// Which gradient program a shader implements. Decides how uniforms are laid out.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderKind {
    /// Four corner colors.
    Bilinear,
    /// Center and border colors.
    Radial,
    /// Resampled 1-D lookup texture.
    Ramp,
}

impl ShaderKind {
    /// Slot in the `colors` uniform array for a named vec4, if this program has one.
    pub fn color_slot(self, name: &str) -> Option<usize> {
        match (self, name) {
            (ShaderKind::Bilinear, names::TOP_LEFT_COLOR) => Some(0),
            (ShaderKind::Bilinear, names::TOP_RIGHT_COLOR) => Some(1),
            (ShaderKind::Bilinear, names::BOTTOM_LEFT_COLOR) => Some(2),
            (ShaderKind::Bilinear, names::BOTTOM_RIGHT_COLOR) => Some(3),
            (ShaderKind::Radial, names::CENTER_COLOR) => Some(0),
            (ShaderKind::Radial, names::BORDER_COLOR) => Some(1),
            _ => None,
        }
    }

    #[inline]
    pub fn samples_texture(self) -> bool {
        self == ShaderKind::Ramp
    }
}

/// WGSL program text plus the kind of program it is.
///
/// Handed to renderers at construction; the text is passed to wgpu verbatim.
/// Every program must expose `vs_main`/`fs_main` and the `Gradient` uniform
/// block used by the bundled shaders.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderSource {
    pub kind: ShaderKind,
    pub label: Cow<'static, str>,
    pub wgsl: Cow<'static, str>,
}

impl ShaderSource {
    /// The bundled program for `kind`.
    pub fn builtin(kind: ShaderKind) -> Self {
        let (label, wgsl) = match kind {
            ShaderKind::Bilinear => ("bouquet bilinear", include_str!("shaders/bilinear.wgsl")),
            ShaderKind::Radial => ("bouquet radial", include_str!("shaders/radial.wgsl")),
            ShaderKind::Ramp => ("bouquet ramp", include_str!("shaders/ramp.wgsl")),
        };
        Self {
            kind,
            label: Cow::Borrowed(label),
            wgsl: Cow::Borrowed(wgsl),
        }
    }

    /// A caller-provided program.
    pub fn custom(kind: ShaderKind, label: impl Into<String>, wgsl: impl Into<String>) -> Self {
        Self {
            kind,
            label: Cow::Owned(label.into()),
            wgsl: Cow::Owned(wgsl.into()),
        }
    }
}
