use crate::paint::Color;
use crate::shader::VerticalGradient;

/// How a scene object is shaded.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Material {
    /// Unlit edge lines in a single colour.
    Wireframe { color: Color },
    /// Screen-space vertical gradient driven by the shader parameters.
    Gradient(VerticalGradient),
}
