use raylib::prelude::*;

use carousel::constants::*;
use carousel::layout::{Placement, fit_scale};
use carousel::state::Role;

pub struct Slide {
    image: Texture2D,
    pub caption: String,

    pub role: Role,
    placement: Placement,
    fit: f32,

    tween_x: ease::Tween,
    tween_scale: ease::Tween,
    tween_opacity: ease::Tween,
    pub is_animating: bool,
    animation_timer: f32,
}

impl Slide {
    pub fn new(image: Texture2D, caption: String) -> Self {
        // Active slides take at most 60% of the width and 70% of the height
        let fit = fit_scale(
            image.width() as f32,
            image.height() as f32,
            RENDER_WIDTH as f32 * 0.6,
            RENDER_HEIGHT as f32 * 0.7,
        );
        let placement = Placement::for_role(Role::None);

        Self {
            image,
            caption,
            role: Role::None,
            placement,
            fit,
            tween_x: ease::Tween::new(ease::linear_none, placement.x, placement.x, TRANSITION_DURATION),
            tween_scale: ease::Tween::new(ease::linear_none, placement.scale, placement.scale, TRANSITION_DURATION),
            tween_opacity: ease::Tween::new(ease::linear_none, placement.opacity, placement.opacity, TRANSITION_DURATION),
            is_animating: false,
            animation_timer: 0.0,
        }
    }

    /// Jumps straight to the pose of `role`, used for the first frame.
    pub fn snap_to(&mut self, role: Role) {
        self.role = role;
        self.placement = Placement::for_role(role);
        self.is_animating = false;
    }

    /// Starts a transition from the current pose to the pose of `role`.
    pub fn retarget(&mut self, role: Role) {
        if role == self.role && !self.is_animating {
            return;
        }

        let target = Placement::for_role(role);
        self.role = role;
        self.tween_x = ease::Tween::new(ease::cubic_out, self.placement.x, target.x, TRANSITION_DURATION);
        self.tween_scale = ease::Tween::new(ease::cubic_out, self.placement.scale, target.scale, TRANSITION_DURATION);
        self.tween_opacity = ease::Tween::new(ease::cubic_out, self.placement.opacity, target.opacity, TRANSITION_DURATION);
        self.animation_timer = 0.0;
        self.is_animating = true;
    }

    pub fn update(&mut self, dt: f32) {
        if !self.is_animating {
            return;
        }

        self.placement.x = self.tween_x.apply(dt);
        self.placement.scale = self.tween_scale.apply(dt);
        self.placement.opacity = self.tween_opacity.apply(dt);

        self.animation_timer += dt;
        if self.animation_timer >= TRANSITION_DURATION {
            self.is_animating = false;
            self.placement = Placement::for_role(self.role);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        if self.placement.opacity <= 0.0 {
            return;
        }

        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;

        let scale = self.fit * self.placement.scale;
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        let center = Vector2::new(
            RENDER_WIDTH as f32 * self.placement.x,
            RENDER_HEIGHT as f32 * self.placement.y,
        );
        let origin = Vector2::new(scaled_width * 0.5, scaled_height * 0.5);
        let alpha = (self.placement.opacity.clamp(0.0, 1.0) * 255.0) as u8;

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(center.x, center.y, scaled_width, scaled_height),
            origin,
            0.0,
            Color::new(255, 255, 255, alpha),
        );
    }
}
