use raylib::consts::MouseButton;
use raylib::prelude::*;

use carousel::{Carousel, CarouselConfig, ElementTree, FrameClock, Scene};

const FIT_RATIO: f32 = 0.9;     // Share of the slide area an image may cover
const DOT_RADIUS: f32 = 7.0;
const DOT_SPACING: f32 = 28.0;  // Distance between dot centers
const DOT_MARGIN: f32 = 30.0;   // Distance from the bottom edge to the dot row
const DOT_HIT_SLACK: f32 = 6.0; // Extra click radius around each dot

pub type DesktopCarousel = Carousel<Scene, FrameClock>;

/// One slide element and one dot element per loaded image, slides first.
pub fn build_scene(config: &CarouselConfig, slides: usize) -> Scene {
    let mut scene = Scene::new();
    scene.push_many(config.slide_class(), slides);
    scene.push_many(config.dot_class(), slides);
    scene
}

/// Scale that fits a `w`x`h` image inside `area`, never enlarging it.
pub fn fit_scale(w: f32, h: f32, area: (f32, f32)) -> f32 {
    if w <= 0.0 || h <= 0.0 {
        return 1.0;
    }
    let by_width = area.0 * FIT_RATIO / w;
    let by_height = area.1 * FIT_RATIO / h;
    by_width.min(by_height).min(1.0)
}

/// Centers of `count` dots laid out in a row along the bottom of the screen.
pub fn dot_centers(count: usize, screen: (f32, f32)) -> Vec<(f32, f32)> {
    if count == 0 {
        return Vec::new();
    }
    let row_width = (count - 1) as f32 * DOT_SPACING;
    let start_x = screen.0 / 2.0 - row_width / 2.0;
    let y = screen.1 - DOT_MARGIN;
    (0..count)
        .map(|i| (start_x + i as f32 * DOT_SPACING, y))
        .collect()
}

/// Index of the dot under `point`, if any.
pub fn dot_at(point: (f32, f32), centers: &[(f32, f32)]) -> Option<usize> {
    let reach = DOT_RADIUS + DOT_HIT_SLACK;
    centers.iter().position(|(x, y)| {
        let (dx, dy) = (point.0 - x, point.1 - y);
        dx * dx + dy * dy <= reach * reach
    })
}

pub struct Viewer {
    textures: Vec<Texture2D>,
}

impl Viewer {
    pub fn new(textures: Vec<Texture2D>) -> Self {
        Self { textures }
    }

    /// Turns a left click on a dot into explicit navigation.
    pub fn handle_input(&self, rl: &RaylibHandle, carousel: &mut DesktopCarousel) {
        if !rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            return;
        }
        let screen = (rl.get_screen_width() as f32, rl.get_screen_height() as f32);
        let dots = carousel.tree().count_by_class(carousel.config().dot_class());
        let mouse = rl.get_mouse_position();
        if let Some(index) = dot_at((mouse.x, mouse.y), &dot_centers(dots, screen)) {
            log::debug!("Dot {} clicked", index);
            carousel.go_to_slide(index as isize);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, carousel: &DesktopCarousel) {
        let screen = (d.get_screen_width() as f32, d.get_screen_height() as f32);
        let config = carousel.config();
        let scene = carousel.tree();

        if scene.count_by_class(config.slide_class()) == 0 {
            d.draw_text("No slides loaded.", 20, 20, 20, Color::GRAY);
            return;
        }

        // Only the active slide is drawn; the area above the dot row is the stage
        let stage = (screen.0, screen.1 - DOT_MARGIN * 2.0);
        for (i, texture) in self.textures.iter().enumerate() {
            if scene.has_class(config.slide_class(), i, &config.active_class) {
                draw_fitted(d, texture, stage);
            }
        }

        let dots = scene.count_by_class(config.dot_class());
        for (i, (x, y)) in dot_centers(dots, screen).into_iter().enumerate() {
            if scene.has_class(config.dot_class(), i, &config.active_class) {
                d.draw_circle(x as i32, y as i32, DOT_RADIUS, Color::WHITE);
            } else {
                d.draw_circle_lines(x as i32, y as i32, DOT_RADIUS, Color::GRAY);
            }
        }
    }
}

fn draw_fitted(d: &mut RaylibDrawHandle, texture: &Texture2D, stage: (f32, f32)) {
    let tex_width = texture.width() as f32;
    let tex_height = texture.height() as f32;
    let scale = fit_scale(tex_width, tex_height, stage);

    let scaled_width = tex_width * scale;
    let scaled_height = tex_height * scale;

    d.draw_texture_pro(
        texture,
        Rectangle::new(0.0, 0.0, tex_width, tex_height),
        Rectangle::new(
            (stage.0 - scaled_width) / 2.0,
            (stage.1 - scaled_height) / 2.0,
            scaled_width,
            scaled_height,
        ),
        Vector2::new(0.0, 0.0),
        0.0,
        Color::WHITE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_has_one_dot_per_slide() {
        let scene = build_scene(&CarouselConfig::default(), 4);
        assert_eq!(scene.count_by_class("carousel-slide"), 4);
        assert_eq!(scene.count_by_class("dot"), 4);
    }

    #[test]
    fn small_images_are_not_enlarged() {
        assert_eq!(fit_scale(100.0, 100.0, (1920.0, 1080.0)), 1.0);
    }

    #[test]
    fn large_images_fit_the_tighter_side() {
        let scale = fit_scale(4000.0, 1000.0, (1000.0, 1000.0));
        assert!((scale - 0.225).abs() < 1e-6);
        let scale = fit_scale(1000.0, 4000.0, (1000.0, 1000.0));
        assert!((scale - 0.225).abs() < 1e-6);
    }

    #[test]
    fn dots_are_centered_on_the_bottom_row() {
        let centers = dot_centers(3, (200.0, 100.0));
        assert_eq!(centers, vec![(72.0, 70.0), (100.0, 70.0), (128.0, 70.0)]);
        assert!(dot_centers(0, (200.0, 100.0)).is_empty());
    }

    #[test]
    fn clicks_hit_the_nearest_dot_only() {
        let centers = dot_centers(3, (200.0, 100.0));
        assert_eq!(dot_at((101.0, 71.0), &centers), Some(1));
        assert_eq!(dot_at((72.0, 58.0), &centers), Some(0));
        assert_eq!(dot_at((86.0, 70.0), &centers), None);
        assert_eq!(dot_at((100.0, 20.0), &centers), None);
    }
}
