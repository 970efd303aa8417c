use three_d::{AmbientLight, Attenuation, Context, DirectionalLight, Light, PointLight, Srgba, Vec3};

const DUSK_BLUE: Srgba = Srgba {
    r: 0x40,
    g: 0x40,
    b: 0x80,
    a: 0xFF,
};
const SUNLIGHT: Srgba = Srgba {
    r: 0xFF,
    g: 0xD7,
    b: 0x00,
    a: 0xFF,
};

/// The scene's lights. Must outlive every render call that uses them.
pub(crate) struct Lighting {
    ambient: AmbientLight,
    sky: AmbientLight,
    sun: PointLight,
    key: DirectionalLight,
    fill: DirectionalLight,
}

impl Lighting {
    pub(crate) fn new(context: &Context) -> Self {
        Self {
            ambient: AmbientLight::new(context, 0.8, DUSK_BLUE),
            sky: AmbientLight::new(context, 0.3, Srgba::WHITE),
            sun: PointLight::new(
                context,
                2.0,
                SUNLIGHT,
                Vec3::new(0.0, 0.0, 0.0),
                Attenuation {
                    constant: 1.0,
                    linear: 0.02,
                    quadratic: 0.0,
                },
            ),
            key: DirectionalLight::new(context, 0.5, Srgba::WHITE, Vec3::new(-1.0, -1.0, -1.0)),
            fill: DirectionalLight::new(context, 0.3, DUSK_BLUE, Vec3::new(1.0, 1.0, 1.0)),
        }
    }

    pub(crate) fn lights(&self) -> [&dyn Light; 5] {
        [
            &self.ambient,
            &self.sky,
            &self.sun,
            &self.key,
            &self.fill,
        ]
    }
}
