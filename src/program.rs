use three_d::{
    Camera, ClearState, Degrees, FrameInput, FrameOutput, GUI, OrbitControl, Vec3,
    Viewport,
    window::{Window, WindowSettings},
};
use tracing::{error, info};

use super::{
    cfg::Config,
    gfx::{Lighting, Scene, picking},
    gui::{self, SimState},
    keybinds,
};

const WINDOW_TITLE: &str = "Solar System Simulation";

const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 15.0, 15.0);
const CAMERA_FOV: Degrees = Degrees { 0: 45.0 };
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 1000.0;

const MIN_ZOOM_DISTANCE: f32 = 5.0;
const MAX_ZOOM_DISTANCE: f32 = 50.0;

pub(crate) struct Program {
    window: Option<Window>,
    camera: Camera,
    control: OrbitControl,
    gui: GUI,
    lighting: Lighting,
    scene: Scene,
    sim_state: SimState,
}

impl Program {
    fn new_window() -> Window {
        let res = Window::new(WindowSettings {
            title: WINDOW_TITLE.into(),
            min_size: (64, 64),
            ..Default::default()
        });
        match res {
            Ok(w) => w,
            Err(e) => {
                if cfg!(target_family = "wasm") {
                    panic!("Error when creating window: {e}");
                } else {
                    error!("Error when creating window: {e}");
                    std::process::exit(1);
                }
            }
        }
    }

    fn new_camera(viewport: Viewport) -> Camera {
        Camera::new_perspective(
            viewport,
            CAMERA_POSITION,
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            CAMERA_FOV,
            Z_NEAR,
            Z_FAR,
        )
    }

    fn new_control() -> OrbitControl {
        OrbitControl::new(
            Vec3::new(0.0, 0.0, 0.0),
            MIN_ZOOM_DISTANCE,
            MAX_ZOOM_DISTANCE,
        )
    }

    pub(crate) fn new(config: &Config) -> Self {
        let window = Self::new_window();
        let context = window.gl();
        let camera = Self::new_camera(window.viewport());
        let control = Self::new_control();
        let gui = gui::create(&context);
        let lighting = Lighting::new(&context);
        let scene = Scene::new(&context, config.star_count);
        let sim_state = SimState::new(config);

        info!("{WINDOW_TITLE} ready");

        Self {
            window: Some(window),
            camera,
            control,
            gui,
            lighting,
            scene,
            sim_state,
        }
    }

    pub(crate) fn run(mut self) {
        if let Some(window) = self.window.take() {
            window.render_loop(move |frame_input| self.tick(frame_input));
        }
    }

    fn tick(&mut self, mut frame_input: FrameInput) -> FrameOutput {
        self.camera.set_viewport(frame_input.viewport);
        let view_projection = picking::view_projection(&self.camera);

        gui::update(
            &mut self.gui,
            &mut self.sim_state,
            &mut frame_input,
            view_projection,
        );

        self.control
            .handle_events(&mut self.camera, &mut frame_input.events);
        keybinds::handle_keybinds(&mut self.sim_state, &mut frame_input.events, &self.gui);

        self.sim_state.system.tick(
            frame_input.elapsed_time / 1000.0,
            &self.sim_state.interaction,
        );

        self.scene
            .apply(&self.sim_state.system, &self.sim_state.interaction);

        let [r, g, b, a] = self.sim_state.theme().clear_color();
        let res = frame_input
            .screen()
            .clear(ClearState::color_and_depth(r, g, b, a, 1.0))
            .render(
                &self.camera,
                self.scene.objects(),
                &self.lighting.lights(),
            )
            .write(|| self.gui.render())
            .map(|_| ());

        if let Err(e) = res {
            error!("failed to render the GUI: {e}");
        }

        FrameOutput::default()
    }
}
