fn warn(msg: &str) {
    println!(
        "cargo:warning={}",
        msg.replace('%', "%25").replace('\n', "%0A")
    );
}

fn main() {
    catalog::build();
}

mod catalog {
    use std::{
        collections::HashSet,
        env,
        fmt::Write as _,
        fs,
        path::PathBuf,
    };

    use serde::Deserialize;

    use super::warn;

    const CATALOG_TOML_PATH: &str = "src/sim/catalog.toml";
    const OUTPUT_FILE_NAME: &str = "catalog.rs";
    const PLANET_COUNT: usize = 8;

    const DEFAULT_ROUGHNESS: f64 = 0.7;
    const DEFAULT_METALNESS: f64 = 0.05;
    const SELF_ROTATION_RATE: f64 = 2.0;

    #[derive(Deserialize)]
    #[serde(deny_unknown_fields)]
    struct CatalogFile {
        star: Entry,
        planet: Vec<Entry>,
    }

    #[derive(Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Entry {
        name: String,
        radius: f64,
        #[serde(default)]
        distance: f64,
        #[serde(default)]
        speed: f64,
        color: u32,
        texture: String,
        roughness: Option<f64>,
        metalness: Option<f64>,
        rings: Option<Rings>,
        facts: Facts,
    }

    #[derive(Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Rings {
        inner: f64,
        outer: f64,
        tilt: f64,
        color: u32,
        opacity: f64,
    }

    #[derive(Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Facts {
        diameter: String,
        distance_from_sun: String,
        year_length: String,
        day_length: String,
        moons: String,
        composition: String,
        temperature: String,
    }

    pub(super) fn build() {
        println!("cargo:rerun-if-changed={CATALOG_TOML_PATH}");

        let catalog_string =
            fs::read_to_string(CATALOG_TOML_PATH).expect("failed to read from catalog file");
        let catalog: CatalogFile = match toml::from_str(&catalog_string) {
            Ok(c) => c,
            Err(e) => panic!("catalog builder: failed to parse {CATALOG_TOML_PATH}: {e}"),
        };

        check_catalog(&catalog);

        let mut code = String::from(
            "// Generated by build.rs::catalog\n\
            #[allow(clippy::excessive_precision)]\n",
        );

        code += "pub(super) static STAR: BodyDescriptor = ";
        code += &meta_create_body(&catalog.star);
        code += ";\n\n";

        let _ = writeln!(
            code,
            "/// Number of orbiting bodies in the catalog.\n\
            pub const PLANET_COUNT: usize = {};\n\n\
            pub(super) static PLANETS: [BodyDescriptor; PLANET_COUNT] = [",
            catalog.planet.len()
        );
        for planet in &catalog.planet {
            code += &meta_create_body(planet);
            code += ",\n";
        }
        code += "];\n";

        let out_dir = env::var_os("OUT_DIR").expect("OUT_DIR should be set by cargo");
        let output_path = PathBuf::from(out_dir).join(OUTPUT_FILE_NAME);
        fs::write(output_path, code).expect("failed to write to output file");
    }

    fn check_catalog(catalog: &CatalogFile) {
        if catalog.planet.len() != PLANET_COUNT {
            panic!(
                "catalog builder: expected {PLANET_COUNT} planets, found {}",
                catalog.planet.len()
            );
        }

        let mut names = HashSet::new();
        for entry in std::iter::once(&catalog.star).chain(&catalog.planet) {
            if !names.insert(entry.name.as_str()) {
                panic!("catalog builder: duplicate body name {:?}", entry.name);
            }
            check_entry(entry);
        }

        if catalog.star.distance != 0.0 || catalog.star.speed != 0.0 {
            panic!("catalog builder: the star must not define a distance or speed");
        }

        for planet in &catalog.planet {
            if !(planet.speed > 0.0) {
                panic!(
                    "catalog builder: {}: expected positive speed, got {}",
                    planet.name, planet.speed
                );
            }
        }

        for pair in catalog.planet.windows(2) {
            let [inner, outer] = pair else {
                continue;
            };
            if !(inner.distance < outer.distance) {
                panic!(
                    "catalog builder: planets must be listed by ascending distance \
                    ({} at {} comes before {} at {})",
                    inner.name, inner.distance, outer.name, outer.distance
                );
            }
        }
    }

    fn check_entry(entry: &Entry) {
        let name = &entry.name;

        if !(entry.radius > 0.0) {
            panic!("catalog builder: {name}: expected positive radius");
        }
        if !(entry.distance >= 0.0) {
            panic!("catalog builder: {name}: expected non-negative distance");
        }
        check_color(name, "color", entry.color);

        if let Some(rings) = &entry.rings {
            check_color(name, "rings.color", rings.color);
            if !(rings.inner > 0.0 && rings.inner < rings.outer) {
                panic!("catalog builder: {name}: expected 0 < rings.inner < rings.outer");
            }
            if !(0.0..=1.0).contains(&rings.opacity) {
                panic!("catalog builder: {name}: expected rings.opacity within 0..=1");
            }
        }

        if !entry.texture.is_ascii() {
            warn(&format!("{name}: non-ascii texture name {:?}", entry.texture));
        }

        let facts = &entry.facts;
        for (key, value) in [
            ("diameter", &facts.diameter),
            ("distance_from_sun", &facts.distance_from_sun),
            ("year_length", &facts.year_length),
            ("day_length", &facts.day_length),
            ("moons", &facts.moons),
            ("composition", &facts.composition),
            ("temperature", &facts.temperature),
        ] {
            if value.trim().is_empty() {
                warn(&format!("{name}: fact {key} is empty"));
            }
        }
    }

    fn check_color(name: &str, key: &str, color: u32) {
        const SRGB_MAX_VALUE: u32 = (1 << (u8::BITS * 3)) - 1;

        if color > SRGB_MAX_VALUE {
            panic!(
                "catalog builder: {name}: expected {key} to fit in 24 bits\n\
                ...max 24-bit number: {SRGB_MAX_VALUE} = 0x{SRGB_MAX_VALUE:X}\n\
                ...got value: {color} = 0x{color:X}"
            );
        }
    }

    fn srgb_from_int(color: u32) -> [u8; 3] {
        let [_, rgb @ ..] = color.to_be_bytes();
        rgb
    }

    fn meta_create_body(entry: &Entry) -> String {
        let Entry {
            name,
            radius,
            distance,
            speed,
            color,
            texture,
            roughness,
            metalness,
            rings,
            facts,
        } = entry;

        let [color_r, color_g, color_b] = srgb_from_int(*color);
        let roughness = roughness.unwrap_or(DEFAULT_ROUGHNESS);
        let metalness = metalness.unwrap_or(DEFAULT_METALNESS);
        let self_rotation_rate = if *speed > 0.0 {
            SELF_ROTATION_RATE
        } else {
            0.0
        };

        let rings = match rings {
            Some(r) => {
                let [ring_r, ring_g, ring_b] = srgb_from_int(r.color);
                format!(
                    "Some(RingFeature {{
                inner: {inner:?},
                outer: {outer:?},
                tilt: {tilt:?},
                color: [{ring_r}, {ring_g}, {ring_b}],
                opacity: {opacity:?},
            }})",
                    inner = r.inner,
                    outer = r.outer,
                    tilt = r.tilt.to_radians(),
                    opacity = r.opacity,
                )
            }
            None => String::from("None"),
        };

        let Facts {
            diameter,
            distance_from_sun,
            year_length,
            day_length,
            moons,
            composition,
            temperature,
        } = facts;

        format!(
            "BodyDescriptor {{
        name: {name:?},
        radius: {radius:?},
        orbital_distance: {distance:?},
        base_angular_speed: {speed:?},
        self_rotation_rate: {self_rotation_rate:?},
        color: [{color_r}, {color_g}, {color_b}],
        texture: TextureRef({texture:?}),
        facts: FactSheet {{
            diameter: {diameter:?},
            distance_from_sun: {distance_from_sun:?},
            year_length: {year_length:?},
            day_length: {day_length:?},
            moons: {moons:?},
            composition: {composition:?},
            temperature: {temperature:?},
        }},
        features: BodyFeatures {{
            roughness: {roughness:?},
            metalness: {metalness:?},
            rings: {rings},
        }},
    }}"
        )
    }
}
