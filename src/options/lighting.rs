use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
/// Scene lighting handed to the renderer each frame.
pub struct LightingOptions {
    /// Ambient light intensity.
    #[schemars(title = "Ambient", range(min = 0.0, max = 1.5), extend("step" = 0.05))]
    pub ambient: f32,
    /// Directional (sun) light intensity.
    #[schemars(title = "Sun", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub sun_intensity: f32,
    /// World-space position the directional light shines from.
    #[schemars(skip)]
    pub sun_position: [f32; 3],
    /// Whether the directional light casts shadows.
    #[schemars(title = "Shadows")]
    pub cast_shadows: bool,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            ambient: 0.8,
            sun_intensity: 0.6,
            sun_position: [10.0, 15.0, 10.0],
            cast_shadows: true,
        }
    }
}
