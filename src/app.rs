use anyhow::{anyhow, Result};
use hecs::{Entity, World};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sdl2::keyboard::Scancode;
use sdl2::Sdl;

use crate::camera::Camera;
use crate::components::QuadJitter;
use crate::config::QuadConfig;
use crate::engine::input::{InputEvent, InputState};
use crate::engine::time::FrameTimer;
use crate::engine::window::GameWindow;
use crate::renderer::{MeshStore, Renderer};
use crate::scene::prefabs::spawn_jitter_quad;
use crate::systems::{jitter_system, mesh_sync_system};

/// Drives the quad: spawns it once, then polls input, jitters, re-uploads and
/// draws every frame until the window closes or the frame limit is reached.
pub struct App {
    world: World,
    meshes: MeshStore,
    quad_entity: Entity,
    camera: Camera,
    renderer: Renderer,
    rng: StdRng,
    trigger: Scancode,
    frame_limit: Option<u64>,
}

impl App {
    /// Requires a current GL context.
    pub fn new(config: &QuadConfig) -> Result<Self> {
        let renderer = Renderer::init().map_err(|e| anyhow!(e))?;

        let mut world = World::new();
        let mut meshes = MeshStore::new();
        let quad_entity = spawn_jitter_quad(&mut world, &mut meshes, config);

        let camera = {
            let quad = world.get::<&QuadJitter>(quad_entity)?;
            Camera::framing(quad.mesh().center(), quad.mesh().extent())
        };
        log::debug!(
            "camera at {:?}, {} mesh(es) loaded",
            camera.position,
            meshes.len()
        );

        Ok(Self {
            world,
            meshes,
            quad_entity,
            camera,
            renderer,
            rng: StdRng::seed_from_u64(config.seed),
            trigger: config.trigger,
            frame_limit: config.frame_limit,
        })
    }

    pub fn run(&mut self, sdl: &Sdl, window: &GameWindow) -> Result<()> {
        let mut event_pump = sdl.event_pump().map_err(|e| anyhow!(e))?;
        let mut input = InputState::new();
        let mut timer = FrameTimer::new();

        let (w, h) = window.size();
        self.renderer.resize(w, h);

        loop {
            timer.tick();
            input.update(&mut event_pump);

            if input.should_quit() {
                log::info!("quit requested");
                break;
            }

            self.update(&input)?;
            self.render(window);
            window.swap();

            if self.frame_limit.is_some_and(|limit| timer.frames >= limit) {
                log::info!("frame limit of {} reached", timer.frames);
                break;
            }
        }

        log::info!(
            "ran {} frames, {:.1} fps average",
            timer.frames,
            timer.average_fps()
        );
        if let Ok(quad) = self.world.get::<&QuadJitter>(self.quad_entity) {
            log::debug!("final vertices: {:?}", quad.mesh().vertices);
        }
        Ok(())
    }

    fn update(&mut self, input: &InputState) -> Result<()> {
        for event in &input.events {
            match event {
                InputEvent::KeyPressed(sc) if *sc == self.trigger => {
                    log::debug!("trigger {sc:?} pressed, jitter on")
                }
                InputEvent::KeyReleased(sc) if *sc == self.trigger => {
                    log::debug!("trigger {sc:?} released, jitter off")
                }
                _ => {}
            }
        }

        let held = input.is_key_held(self.trigger);
        let updated = jitter_system(&mut self.world, held, &mut self.rng);
        let uploaded = mesh_sync_system(&mut self.world, &self.meshes)?;
        if updated > 0 {
            log::trace!("jittered {updated} quad(s), uploaded {uploaded}");
        }
        Ok(())
    }

    fn render(&mut self, window: &GameWindow) {
        let view = self.camera.view_matrix();
        let proj = self.camera.projection_matrix(window.aspect_ratio());
        self.renderer
            .draw_scene(&self.world, &self.meshes, &view, &proj);
    }
}
