use ::rand::SeedableRng;
use ::rand::rngs::StdRng;
use macroquad::prelude::*;
use vec2_lite_rs::math::Vector;

#[derive(Copy, Clone, Debug)]
struct PlaygroundConfig {
    rotation_step_deg: f64,
    limit_max: f64,
    limit_factor: f64,
    spawn_top_left: Vector,
    spawn_bottom_right: Vector,
    seed: u64,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            rotation_step_deg: 15.0,
            limit_max: 6.0,
            limit_factor: 0.9,
            spawn_top_left: Vector::new(-8.0, 8.0),
            spawn_bottom_right: Vector::new(8.0, -8.0),
            seed: 42,
        }
    }
}

#[derive(Clone, Debug)]
struct Camera2DView {
    zoom: f64,
    pan: Vector,
}

impl Default for Camera2DView {
    fn default() -> Self {
        Self {
            zoom: 10.0,
            pan: Vector::ZERO,
        }
    }
}

impl Camera2DView {
    fn half_extents(&self) -> (f64, f64) {
        let w = screen_width() as f64;
        let h = (screen_height() as f64).max(1.0);
        let aspect = w / h;
        if aspect >= 1.0 {
            (self.zoom * aspect, self.zoom)
        } else {
            (self.zoom, self.zoom / aspect)
        }
    }

    fn world_to_screen(&self, p: Vector) -> (f32, f32) {
        let (half_w, half_h) = self.half_extents();
        let mut ndc = p;
        ndc.subtract(self.pan).divide(Vector::new(half_w, half_h));

        // ndc [-1,1] to pixels; flip Y because screen Y goes down.
        let w = screen_width() as f64;
        let h = screen_height() as f64;
        (
            ((ndc.x * 0.5 + 0.5) * w) as f32,
            ((1.0 - (ndc.y * 0.5 + 0.5)) * h) as f32,
        )
    }

    fn screen_to_world(&self, x: f32, y: f32) -> Vector {
        let (half_w, half_h) = self.half_extents();
        let w = screen_width() as f64;
        let h = (screen_height() as f64).max(1.0);

        let mut p = Vector::new((x as f64 / w) * 2.0 - 1.0, -((y as f64 / h) * 2.0 - 1.0));
        p.multiply(Vector::new(half_w, half_h)).add(self.pan);
        p
    }
}

fn draw_arrow(view: &Camera2DView, from: Vector, to: Vector, color: Color) {
    let (x1, y1) = view.world_to_screen(from);
    let (x2, y2) = view.world_to_screen(to);
    draw_line(x1, y1, x2, y2, 2.0, color);

    let mut dir = to;
    dir.subtract(from);
    if dir.is_zero() {
        return;
    }
    let head = 0.05 * view.zoom;
    for side in [150.0, -150.0] {
        let mut wing = dir;
        wing.normalize().multiply_scalar(head).rotate_deg(side).add(to);
        let (wx, wy) = view.world_to_screen(wing);
        draw_line(x2, y2, wx, wy, 2.0, color);
    }
}

fn draw_axes(view: &Camera2DView) {
    let reach = 1_000.0;
    let axis = Color::new(0.3, 0.3, 0.35, 1.0);
    let (ax, ay) = view.world_to_screen(Vector::new(-reach, 0.0));
    let (bx, by) = view.world_to_screen(Vector::new(reach, 0.0));
    draw_line(ax, ay, bx, by, 1.0, axis);
    let (ax, ay) = view.world_to_screen(Vector::new(0.0, -reach));
    let (bx, by) = view.world_to_screen(Vector::new(0.0, reach));
    draw_line(ax, ay, bx, by, 1.0, axis);
}

#[macroquad::main("vec2-lite-rs playground")]
async fn main() {
    env_logger::init();

    let config = PlaygroundConfig::default();
    log::info!("starting playground with {config:?}");

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut view = Camera2DView::default();
    let mut v = Vector::new(5.0, 2.0);
    let mut last_action = "start";

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        if is_key_pressed(KeyCode::Left) {
            v.rotate_deg(config.rotation_step_deg);
            last_action = "rotate_deg(+step)";
        }
        if is_key_pressed(KeyCode::Right) {
            v.rotate_deg(-config.rotation_step_deg);
            last_action = "rotate_deg(-step)";
        }
        if is_key_pressed(KeyCode::Up) {
            v.rotate_to_deg(90.0);
            last_action = "rotate_to_deg(90)";
        }
        if is_key_pressed(KeyCode::N) {
            let length = v.length();
            v.normalize();
            last_action = "normalize";
            log::debug!("normalized from length {length}");
        }
        if is_key_pressed(KeyCode::L) {
            v.limit(config.limit_max, config.limit_factor);
            last_action = "limit";
        }
        if is_key_pressed(KeyCode::I) {
            v.invert();
            last_action = "invert";
        }
        if is_key_pressed(KeyCode::O) {
            v.round();
            last_action = "round";
        }
        if is_key_pressed(KeyCode::Z) {
            v.zero();
            last_action = "zero";
        }
        if is_key_pressed(KeyCode::Space) {
            v.randomize(&mut rng, config.spawn_top_left, config.spawn_bottom_right);
            last_action = "randomize";
        }
        if is_key_pressed(KeyCode::R) {
            view = Camera2DView::default();
        }

        let wheel = mouse_wheel().1 as f64;
        if wheel.abs() > 0.0 {
            view.zoom = (view.zoom * (1.0 - wheel * 0.1)).clamp(1.0, 100.0);
        }

        if is_mouse_button_down(MouseButton::Left) {
            let (mx, my) = mouse_position();
            v.copy(view.screen_to_world(mx, my));
            last_action = "copy(mouse)";
        }

        clear_background(BLACK);
        draw_axes(&view);
        draw_arrow(&view, Vector::ZERO, v, Color::new(0.4, 0.9, 0.4, 1.0));

        let fixed = v.to_fixed(2);
        let overlay = format!(
            "{}\nKeys: Left/Right rotate | Up rotate_to 90 | N normalize | L limit | I invert | O round | Z zero | Space randomize | R reset view\nLMB set vector | Wheel zoom\nx={} y={} length={:.3} angle={:.1} deg",
            last_action,
            fixed.x,
            fixed.y,
            v.length(),
            v.angle_deg(),
        );
        for (i, line) in overlay.lines().enumerate() {
            draw_text(line, 12.0, 20.0 + 20.0 * i as f32, 18.0, WHITE);
        }

        next_frame().await;
    }
}
