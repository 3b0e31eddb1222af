use sdl2::video::{GLContext, GLProfile, Window};
use sdl2::Sdl;

pub struct GameWindow {
    _gl_context: GLContext,
    window: Window,
}

impl GameWindow {
    /// Opens a window with a GL 3.3 core context and loads GL function pointers.
    pub fn new(sdl: &Sdl, title: &str, width: u32, height: u32) -> Result<Self, String> {
        let video = sdl.video()?;

        let gl_attr = video.gl_attr();
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_version(3, 3);

        let window = video
            .window(title, width, height)
            .opengl()
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let gl_context = window.gl_create_context()?;

        gl::load_with(|s| video.gl_get_proc_address(s) as *const _);

        // Vsync is best effort; some drivers refuse it.
        if let Err(e) = video.gl_set_swap_interval(1) {
            log::warn!("vsync unavailable: {e}");
        }

        Ok(Self {
            _gl_context: gl_context,
            window,
        })
    }

    pub fn swap(&self) {
        self.window.gl_swap_window();
    }

    pub fn size(&self) -> (u32, u32) {
        self.window.size()
    }

    pub fn aspect_ratio(&self) -> f32 {
        let (w, h) = self.window.size();
        w as f32 / h.max(1) as f32
    }
}
