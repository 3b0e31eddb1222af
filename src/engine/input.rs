use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::EventPump;
use std::collections::HashSet;

/// Edge-triggered key events collected during the last `update`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    KeyPressed(Scancode),
    KeyReleased(Scancode),
}

pub struct InputState {
    pub keys: HashSet<Scancode>,
    pub events: Vec<InputEvent>,
    pub quit: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys: HashSet::new(),
            events: Vec::new(),
            quit: false,
        }
    }

    pub fn update(&mut self, event_pump: &mut EventPump) {
        self.events.clear();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => self.quit = true,
                Event::KeyDown {
                    scancode: Some(Scancode::Escape),
                    ..
                } => self.quit = true,
                Event::KeyDown {
                    scancode: Some(sc), ..
                } => self.key_down(sc),
                Event::KeyUp {
                    scancode: Some(sc), ..
                } => self.key_up(sc),
                // Keys released while unfocused never send KeyUp.
                Event::Window {
                    win_event: sdl2::event::WindowEvent::FocusLost,
                    ..
                } => self.release_all(),
                _ => {}
            }
        }
    }

    pub fn key_down(&mut self, sc: Scancode) {
        // OS key repeat sends KeyDown again while held; only the first counts.
        if self.keys.insert(sc) {
            self.events.push(InputEvent::KeyPressed(sc));
        }
    }

    pub fn key_up(&mut self, sc: Scancode) {
        if self.keys.remove(&sc) {
            self.events.push(InputEvent::KeyReleased(sc));
        }
    }

    fn release_all(&mut self) {
        let held: Vec<Scancode> = self.keys.drain().collect();
        self.events
            .extend(held.into_iter().map(InputEvent::KeyReleased));
    }

    pub fn is_key_held(&self, sc: Scancode) -> bool {
        self.keys.contains(&sc)
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }
}
