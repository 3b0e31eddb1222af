use std::time::Instant;

pub struct FrameTimer {
    last: Instant,
    pub dt: f32,
    pub frames: u64,
    pub elapsed: f32,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            dt: 0.0,
            frames: 0,
            elapsed: 0.0,
        }
    }

    pub fn tick(&mut self) {
        let now = Instant::now();
        self.dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        self.frames += 1;
        self.elapsed += self.dt;
    }

    pub fn average_fps(&self) -> f32 {
        if self.elapsed <= 0.0 {
            0.0
        } else {
            self.frames as f32 / self.elapsed
        }
    }
}
