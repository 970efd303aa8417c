//! Scene composition: builds the renderer's objects once and poses them
//! every frame from the simulation state.

mod lighting;
mod meshes;
pub(crate) mod picking;
mod starfield;
mod textures;
pub(crate) mod transforms;

use three_d::{
    Blend, ColorMaterial, Context, CpuMaterial, CpuMesh, Cull, Gm, InstancedMesh, Instances,
    Mat4, Mesh, Object, PhysicalMaterial, RenderStates, Srgba,
};

use crate::sim::{
    BodyDescriptor, BodyPresentation, InteractionState, PLANET_COUNT, SolarSystem,
    catalog::{self, RingFeature},
};

pub(crate) use lighting::Lighting;
use meshes::Annulus;
use picking::Sphere;
use transforms::{StarShell, to_mat4};

const ORBIT_RING_COLOR: Srgba = Srgba {
    r: 0x44,
    g: 0x44,
    b: 0x44,
    a: 0xFF,
};
const ORBIT_RING_OPACITY: f64 = 0.3;

const STAR_EMISSIVE: Srgba = Srgba {
    r: 0xFF,
    g: 0x6B,
    b: 0x00,
    a: 0xFF,
};

const PROMINENCE_COLOR: [u8; 3] = [0xFF, 0x45, 0x00];
const PROMINENCE_OPACITY: f64 = 0.7;

const BACKGROUND_STAR_SUBDIVS: u32 = 4;

fn srgba([r, g, b]: [u8; 3], opacity: f64) -> Srgba {
    Srgba::new(r, g, b, (opacity.clamp(0.0, 1.0) * 255.0).round() as u8)
}

/// Scales a body's tint by its glow intensity.
pub(crate) fn emissive(color: [u8; 3], glow: f64) -> Srgba {
    let scale = |c: u8| (c as f64 * glow.clamp(0.0, 1.0)).round() as u8;
    Srgba::new_opaque(scale(color[0]), scale(color[1]), scale(color[2]))
}

fn translucent(color: Srgba, cull: Cull) -> ColorMaterial {
    ColorMaterial {
        color,
        texture: None,
        render_states: RenderStates {
            cull,
            blend: Blend::TRANSPARENCY,
            ..Default::default()
        },
        is_transparent: true,
    }
}

fn body_material(context: &Context, body: &BodyDescriptor, emissive: Srgba) -> PhysicalMaterial {
    let mut material = PhysicalMaterial::new_opaque(
        context,
        &CpuMaterial {
            albedo: Srgba::WHITE,
            albedo_texture: Some(textures::cpu_texture(body.texture, body.color)),
            roughness: body.features.roughness as f32,
            metallic: body.features.metalness as f32,
            emissive,
            ..Default::default()
        },
    );
    material.render_states.cull = Cull::Back;
    material
}

/// Gets the spheres a pointer can hover, as currently displayed.
pub(crate) fn planet_spheres(
    system: &SolarSystem,
    interaction: &InteractionState,
) -> [Sphere; PLANET_COUNT] {
    let bodies = catalog::bodies();
    core::array::from_fn(|i| {
        let body = &bodies[i];
        let hovered = interaction.hovered_index() == Some(i);
        Sphere {
            center: system.orbit(i).position(body.orbital_distance),
            radius: BodyPresentation::for_body(body, hovered).scale,
        }
    })
}

struct PlanetRing {
    planet_index: usize,
    feature: RingFeature,
    gm: Gm<Mesh, ColorMaterial>,
}

pub(crate) struct Scene {
    planets: [Gm<Mesh, PhysicalMaterial>; PLANET_COUNT],
    planet_rings: Vec<PlanetRing>,
    orbit_rings: [Gm<Mesh, ColorMaterial>; PLANET_COUNT],
    star_core: Gm<Mesh, PhysicalMaterial>,
    star_shells: [(StarShell, Gm<Mesh, ColorMaterial>); StarShell::ALL.len()],
    prominences: Gm<InstancedMesh, ColorMaterial>,
    background: Gm<InstancedMesh, ColorMaterial>,
    background_stars: Vec<starfield::BackgroundStar>,
    background_transformations: Vec<Mat4>,
}

impl Scene {
    pub(crate) fn new(context: &Context, star_count: usize) -> Self {
        let sphere = CpuMesh::sphere(meshes::SPHERE_SUBDIVS);
        let shell_sphere = CpuMesh::sphere(meshes::SHELL_SUBDIVS);
        let bodies = catalog::bodies();

        let planets = core::array::from_fn(|i| {
            let body = &bodies[i];
            let glow = BodyPresentation::for_body(body, false).glow;
            Gm::new(
                Mesh::new(context, &sphere),
                body_material(context, body, emissive(body.color, glow)),
            )
        });

        let planet_rings = bodies
            .iter()
            .enumerate()
            .filter_map(|(planet_index, body)| {
                let feature = body.features.rings?;
                let ring = Annulus::new(
                    (feature.inner * body.radius) as f32,
                    (feature.outer * body.radius) as f32,
                    meshes::PLANET_RING_SEGMENTS,
                );
                Some(PlanetRing {
                    planet_index,
                    feature,
                    gm: Gm::new(
                        Mesh::new(context, &ring.to_cpu_mesh()),
                        translucent(srgba(feature.color, feature.opacity), Cull::None),
                    ),
                })
            })
            .collect();

        let orbit_rings = core::array::from_fn(|i| {
            let distance = bodies[i].orbital_distance;
            let ring = Annulus::new(
                (distance - transforms::ORBIT_RING_HALF_WIDTH) as f32,
                (distance + transforms::ORBIT_RING_HALF_WIDTH) as f32,
                meshes::ORBIT_RING_SEGMENTS,
            );
            let mut gm = Gm::new(
                Mesh::new(context, &ring.to_cpu_mesh()),
                translucent(
                    Srgba {
                        a: (ORBIT_RING_OPACITY * 255.0) as u8,
                        ..ORBIT_RING_COLOR
                    },
                    Cull::None,
                ),
            );
            gm.set_transformation(to_mat4(transforms::orbit_ring()));
            gm
        });

        let star = catalog::star();
        let star_core = Gm::new(
            Mesh::new(context, &sphere),
            body_material(context, star, STAR_EMISSIVE),
        );

        let star_shells = StarShell::ALL.map(|shell| {
            let (color, opacity) = shell.tint();
            (
                shell,
                Gm::new(
                    Mesh::new(context, &shell_sphere),
                    translucent(srgba(color, opacity), Cull::Front),
                ),
            )
        });

        let prominences = Gm::new(
            InstancedMesh::new(
                context,
                &Instances::default(),
                &CpuMesh::cone(meshes::PROMINENCE_SEGMENTS),
            ),
            translucent(srgba(PROMINENCE_COLOR, PROMINENCE_OPACITY), Cull::None),
        );

        let background_stars = starfield::generate(star_count, starfield::SEED);
        let background_transformations = starfield::transformations(&background_stars);
        let background = Gm::new(
            InstancedMesh::new(
                context,
                &Instances {
                    transformations: background_transformations.clone(),
                    colors: Some(starfield::colors(&background_stars, 0.0)),
                    ..Default::default()
                },
                &CpuMesh::sphere(BACKGROUND_STAR_SUBDIVS),
            ),
            ColorMaterial {
                color: Srgba::WHITE,
                texture: None,
                render_states: RenderStates::default(),
                is_transparent: false,
            },
        );
        tracing::debug!(
            "scene built with {} background stars",
            background_stars.len()
        );

        let mut scene = Self {
            planets,
            planet_rings,
            orbit_rings,
            star_core,
            star_shells,
            prominences,
            background,
            background_stars,
            background_transformations,
        };
        scene.apply(&SolarSystem::default(), &InteractionState::default());
        scene
    }

    /// Poses every object from the current simulation state.
    pub(crate) fn apply(&mut self, system: &SolarSystem, interaction: &InteractionState) {
        let bodies = catalog::bodies();

        for (i, gm) in self.planets.iter_mut().enumerate() {
            let body = &bodies[i];
            let presentation =
                BodyPresentation::for_body(body, interaction.hovered_index() == Some(i));
            gm.set_transformation(to_mat4(transforms::planet(
                body,
                &system.orbit(i),
                &presentation,
            )));
            gm.material.emissive = emissive(body.color, presentation.glow);
        }

        for ring in &mut self.planet_rings {
            let body = &bodies[ring.planet_index];
            ring.gm.set_transformation(to_mat4(transforms::planet_ring(
                body,
                &system.orbit(ring.planet_index),
                ring.feature.tilt,
            )));
        }

        let frame = system.stellar_frame();
        self.star_core.set_transformation(to_mat4(transforms::star_core(
            frame,
            catalog::star().radius,
        )));
        for (shell, gm) in &mut self.star_shells {
            gm.set_transformation(to_mat4(shell.matrix(frame)));
        }
        self.prominences.set_instances(&Instances {
            transformations: transforms::prominences(frame).map(to_mat4).to_vec(),
            ..Default::default()
        });
        self.background.set_instances(&Instances {
            transformations: self.background_transformations.clone(),
            colors: Some(starfield::colors(
                &self.background_stars,
                system.star_time(),
            )),
            ..Default::default()
        });
    }

    /// Every object to render this frame.
    pub(crate) fn objects(&self) -> Vec<&dyn Object> {
        let mut objects: Vec<&dyn Object> = Vec::with_capacity(
            self.planets.len() + self.planet_rings.len() + self.orbit_rings.len() + 10,
        );

        objects.push(&self.background);
        objects.push(&self.star_core);
        objects.extend(self.planets.iter().map(|gm| gm as &dyn Object));
        objects.extend(self.orbit_rings.iter().map(|gm| gm as &dyn Object));
        objects.extend(self.planet_rings.iter().map(|ring| &ring.gm as &dyn Object));
        objects.extend(self.star_shells.iter().map(|(_, gm)| gm as &dyn Object));
        objects.push(&self.prominences);

        objects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::catalog::index_of;

    #[test]
    fn test_emissive() {
        assert_eq!(emissive([200, 100, 0], 0.0), Srgba::new_opaque(0, 0, 0));
        assert_eq!(emissive([200, 100, 0], 0.5), Srgba::new_opaque(100, 50, 0));
        assert_eq!(emissive([200, 100, 0], 3.2), Srgba::new_opaque(200, 100, 0));
    }

    #[test]
    fn test_srgba_opacity() {
        assert_eq!(srgba([1, 2, 3], 0.5).a, 128);
        assert_eq!(srgba([1, 2, 3], 1.5).a, 255);
    }

    #[test]
    fn test_planet_spheres_follow_hover() {
        let system = SolarSystem::default();
        let mut interaction = InteractionState::new();
        let saturn = index_of("Saturn").unwrap();

        let idle = planet_spheres(&system, &interaction);
        interaction.set_hover(Some("Saturn")).unwrap();
        let hovered = planet_spheres(&system, &interaction);

        assert!((hovered[saturn].radius - idle[saturn].radius * 1.2).abs() < 1e-12);
        assert_eq!(hovered[0], idle[0]);
        assert_eq!(idle[saturn].center.x, 16.0);
    }
}
