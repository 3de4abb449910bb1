use raylib::prelude::*;
use tracing::{debug, info};

use carousel::constants::*;
use carousel::layout::{ControlLayout, centered_text_x, to_render_space};
use carousel::{Carousel, Key, MarkerSet, RoleFrame, RoleSink, SwipeTracker};

use crate::slide::Slide;

const CAPTION_FONT_SIZE: i32 = 40;
const BUTTON_FONT_SIZE: i32 = 48;

/// Render side of the carousel: slides, captions and indicator dots.
struct Stage {
    slides: Vec<Slide>,
    current_index: usize,
    markers: MarkerSet,
}

impl Stage {
    fn new(slides: Vec<Slide>) -> Self {
        // One dot and one caption per slide
        let markers = MarkerSet::new(slides.len(), slides.len());
        Self { slides, current_index: 0, markers }
    }

    fn snap(&mut self, frame: &RoleFrame) {
        for (index, slide) in self.slides.iter_mut().enumerate() {
            slide.snap_to(frame.role(index));
        }
        self.current_index = frame.current_index;
        self.markers.publish(frame);
    }

    fn update(&mut self, dt: f32) {
        for slide in self.slides.iter_mut() {
            slide.update(dt);
        }
    }

    fn draw(&self, d: &mut RaylibDrawHandle, controls: &ControlLayout) {
        // Side slides first so the active one ends up on top
        for (index, slide) in self.slides.iter().enumerate() {
            if index != self.current_index {
                slide.draw(d);
            }
        }
        if let Some(active) = self.slides.get(self.current_index) {
            active.draw(d);
        }

        if let Some(slide) = self.markers.active_caption().and_then(|index| self.slides.get(index)) {
            let x = centered_text_x(&slide.caption, CAPTION_FONT_SIZE, RENDER_WIDTH as f32);
            let y = RENDER_HEIGHT - 160;
            d.draw_text(&slide.caption, x, y, CAPTION_FONT_SIZE, Color::WHITE);
        }

        for (dot, marked) in controls.indicators().iter().zip(&self.markers.indicators) {
            let (x, y) = dot.center();
            let color = if *marked { Color::WHITE } else { Color::GRAY };
            d.draw_circle(x as i32, y as i32, controls.indicator_radius(), color);
        }

        for (bounds, label) in [(controls.prev_button(), "<"), (controls.next_button(), ">")] {
            d.draw_rectangle_rec(
                Rectangle::new(bounds.x, bounds.y, bounds.width, bounds.height),
                Color::new(0, 0, 0, 140),
            );
            let (cx, cy) = bounds.center();
            d.draw_text(
                label,
                cx as i32 - BUTTON_FONT_SIZE / 4,
                cy as i32 - BUTTON_FONT_SIZE / 2,
                BUTTON_FONT_SIZE,
                Color::WHITE,
            );
        }
    }
}

impl RoleSink for Stage {
    fn publish(&mut self, frame: &RoleFrame) {
        for (index, slide) in self.slides.iter_mut().enumerate() {
            slide.retarget(frame.role(index));
        }
        self.current_index = frame.current_index;
        self.markers.publish(frame);
    }
}

pub struct CarouselEngine {
    carousel: Carousel,
    stage: Stage,
    controls: ControlLayout,
    swipe: SwipeTracker,
}

impl CarouselEngine {
    pub fn new(slides: Vec<Slide>) -> Self {
        let carousel = Carousel::new(slides.len());
        let controls = ControlLayout::new(RENDER_WIDTH as f32, RENDER_HEIGHT as f32, slides.len());
        let mut stage = Stage::new(slides);

        if let Some(frame) = carousel.initial_frame() {
            stage.snap(&frame);
        }
        info!(slides = carousel.slide_count(), "carousel ready");

        Self { carousel, stage, controls, swipe: SwipeTracker::default() }
    }

    /// Keyboard, pointer and touch input for this frame.
    pub fn handle_input(&mut self, rl: &RaylibHandle) {
        let mut commands = Vec::new();

        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            commands.extend(Key::ArrowLeft.carousel_command());
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            commands.extend(Key::ArrowRight.carousel_command());
        }

        let mouse = rl.get_mouse_position();
        let screen = (rl.get_screen_width() as f32, rl.get_screen_height() as f32);
        let (x, y) = to_render_space(mouse.x, mouse.y, screen, (RENDER_WIDTH as f32, RENDER_HEIGHT as f32));

        // Touches arrive as the left mouse button
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            match self.controls.hit_test(x, y) {
                Some(control) => commands.push(control.command()),
                None => self.swipe.touch_start(mouse.x),
            }
        }
        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            commands.extend(self.swipe.touch_end(mouse.x));
        }

        for command in commands {
            if !self.carousel.dispatch_to(command, &mut self.stage) {
                debug!(?command, "command had no effect");
            }
        }
    }

    pub fn render_frame(&mut self, dt: f32, rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &mut RenderTexture2D) {
        self.carousel.advance(dt);
        self.stage.update(dt);

        let stage = &self.stage;
        let controls = &self.controls;
        rl.draw_texture_mode(thread, framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(thread);
            d.clear_background(Color::BLACK);
            stage.draw(&mut d, controls);
        });
    }

    pub fn shutdown(&mut self) {
        self.carousel.teardown();
        info!("carousel torn down");
    }
}
